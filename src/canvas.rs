//! Recorded frames and their playback onto a cushy canvas.
//!
//! The renderer draws into a [`DrawList`] once per recompute; the window
//! replays the list every tick.

use cushy::{
    context::GraphicsContext,
    kludgine::{
        figures::{units::Px, FloatConversion, Point, Px2D, Rect, Size},
        shapes::{Path, PathBuilder, Shape, StrokeOptions},
        Color, DrawableExt,
    },
};

use crate::render::{Rgba, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgba,
    },
    Stroke {
        points: Vec<(f64, f64)>,
        color: Rgba,
        line_width: f64,
    },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ops.push(DrawOp::Fill { x, y, w, h, color });
    }

    fn stroke(&mut self, points: &[(f64, f64)], color: Rgba, line_width: f64) {
        self.ops.push(DrawOp::Stroke {
            points: points.to_vec(),
            color,
            line_width,
        });
    }
}

fn color(c: Rgba) -> Color {
    Color::new_f32(c.r, c.g, c.b, c.a)
}

fn px((x, y): (f64, f64)) -> Point<Px> {
    Point::px(x as f32, y as f32)
}

fn path(pts: &[(f64, f64)]) -> Option<Path<Px, false>> {
    let (first, rest) = pts.split_first()?;
    let mut path = PathBuilder::new(px(*first));
    for p in rest {
        path = path.line_to(px(*p));
    }
    Some(path.build())
}

/// Replay `list` onto the canvas.
pub fn present(list: &DrawList, cx: &mut GraphicsContext) {
    for op in &list.ops {
        match op {
            DrawOp::Fill { color: c, .. } if c.a <= 0.0 => {}
            DrawOp::Fill { x, y, w, h, color: c } => {
                cx.gfx.draw_shape(
                    Shape::filled_rect(
                        Rect::new(
                            Point::px(*x as f32, *y as f32),
                            Size::px(*w as f32, *h as f32),
                        ),
                        color(*c),
                    )
                    .translate_by(Point::px(0, 0)),
                );
            }
            DrawOp::Stroke {
                points,
                color: c,
                line_width,
            } => {
                let Some(path) = path(points) else {
                    continue;
                };
                cx.gfx.draw_shape(&path.stroke(StrokeOptions {
                    color: color(*c),
                    line_width: Px::from_float(*line_width as f32),
                    ..Default::default()
                }));
            }
        }
    }
}
