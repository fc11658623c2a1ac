//! Maps a [`Sample`] onto a drawing surface: a red/blue potential heat map
//! under white field arrows.

use std::f64::consts::PI;

use crate::sampler::{Sample, ScaleState};

/// Straight alpha colour, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0) as f32,
            ..self
        }
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// The drawing primitives the renderer needs.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    /// Stroke the open polyline through `points`.
    fn stroke(&mut self, points: &[(f64, f64)], color: Rgba, line_width: f64);
}

/// Cover the whole surface with black at `alpha`.
pub fn clear<S: Surface>(surface: &mut S, alpha: f64) {
    let (w, h) = surface.size();
    surface.fill_rect(0.0, 0.0, w, h, Rgba::BLACK.with_alpha(alpha));
}

/// Shaft from `from` to `to` with two barbs at `to`, each `head_len` long
/// and π/6 off the shaft.
pub fn arrow<S: Surface>(
    surface: &mut S,
    from: (f64, f64),
    to: (f64, f64),
    head_len: f64,
    color: Rgba,
    line_width: f64,
) {
    let angle = (to.1 - from.1).atan2(to.0 - from.0);
    let barb = |theta: f64| {
        (
            to.0 - head_len * theta.cos(),
            to.1 - head_len * theta.sin(),
        )
    };
    surface.stroke(&[from, to, barb(angle - PI / 6.0)], color, line_width);
    surface.stroke(&[to, barb(angle + PI / 6.0)], color, line_width);
}

/// `|value / max| * brightness`, or 0 when nothing has been seen yet.
fn relative_brightness(value: f64, max: f64, brightness: f64) -> f64 {
    if max > 0.0 {
        (value / max).abs() * brightness
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    pub brightness: f64,
    pub line_width: f64,
    pub clear_alpha: f64,
}

impl Renderer {
    /// Full redraw: clear, heat map, then arrows.
    pub fn draw<S: Surface>(&self, surface: &mut S, sample: &Sample) {
        clear(surface, self.clear_alpha);
        self.draw_potential(surface, sample);
        self.draw_field(surface, sample);
    }

    pub fn draw_potential<S: Surface>(&self, surface: &mut S, sample: &Sample) {
        let ScaleState { max_potential, .. } = sample.scale;
        let res = sample.potential.res() as f64;
        for (x, y, &v) in sample.potential.iter() {
            let color = if v > 0.0 { Rgba::RED } else { Rgba::BLUE };
            let alpha = relative_brightness(v, max_potential, self.brightness);
            surface.fill_rect(
                x as f64,
                y as f64,
                res,
                res,
                color.with_alpha(alpha),
            );
        }
    }

    pub fn draw_field<S: Surface>(&self, surface: &mut S, sample: &Sample) {
        let ScaleState { max_field, .. } = sample.scale;
        let res = sample.field.res() as f64;
        for (x, y, e) in sample.field.iter() {
            let m = e.magnitude();
            if !(m > 0.0 && m.is_finite()) {
                continue;
            }
            let (dx, dy) = (e.x / m, e.y / m);
            let (cx, cy) = (x as f64 + res / 2.0, y as f64 + res / 2.0);
            let alpha = relative_brightness(m, max_field, self.brightness);
            arrow(
                surface,
                (cx - dx, cy - dy),
                (cx + dx, cy + dy),
                res / 6.0,
                Rgba::WHITE.with_alpha(alpha),
                self.line_width,
            );
        }
    }
}
