use cushy::{
    context::GraphicsContext,
    kludgine::{
        app::winit::{event::MouseButton, keyboard::KeyCode},
        figures::FloatConversion,
    },
    widgets::Canvas,
    Run, Tick,
};

mod canvas;
mod charges;
mod config;
mod error;
mod grid;
mod physics;
mod render;
mod sampler;

use canvas::DrawList;
use charges::ChargeStore;
use config::{Layout, VizConfig};
use render::Renderer;
use sampler::FieldSampler;

/// Fires once per press, not once per frame the button is held.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct GuardedBool {
    guard: bool,
}
impl GuardedBool {
    fn rising(&mut self, pressed: bool) -> bool {
        let fire = pressed && !self.guard;
        self.guard = pressed;
        fire
    }
}

struct FieldView {
    config: VizConfig,
    layout: Layout,
    store: ChargeStore,
    sampler: FieldSampler,
    renderer: Renderer,
    frame: DrawList,

    left_guard: GuardedBool,
    right_guard: GuardedBool,
    backspace_guard: GuardedBool,
}

// Field state
//
impl FieldView {
    fn new(config: VizConfig, width: f64, height: f64) -> Self {
        let layout = Layout::detect(width, &config);
        println!("layout: {layout:?} ({width}x{height})");
        let mut view = Self {
            config,
            layout,
            store: ChargeStore::initial(width, height, layout),
            sampler: FieldSampler::new(
                width as usize,
                height as usize,
                config.potential_res,
                config.field_res,
            ),
            renderer: Renderer {
                brightness: config.brightness(layout),
                line_width: config.line_width,
                clear_alpha: config.clear_alpha,
            },
            frame: DrawList::new(width, height),

            left_guard: Default::default(),
            right_guard: Default::default(),
            backspace_guard: Default::default(),
        };
        view.recompute();
        view
    }
    fn recompute(&mut self) {
        match self.sampler.sample(&mut self.store) {
            Ok(sample) => {
                if !sample.evicted.is_empty() {
                    println!(
                        "{} charge(s) removed, {} left",
                        sample.evicted.len(),
                        self.store.len()
                    );
                }
                let mut frame = DrawList::new(self.frame.width, self.frame.height);
                self.renderer.draw(&mut frame, &sample);
                self.frame = frame;
            }
            Err(err) => eprintln!("keeping previous frame: {err}"),
        }
    }
    fn place_charge(&mut self, x: f64, y: f64, primary: bool) {
        let mut rng = rand::thread_rng();
        let charge = if primary {
            charges::random_primary(&mut rng, self.config.max_charge, self.layout)
        } else {
            charges::random_secondary(&mut rng, self.config.max_charge)
        };
        self.store.add_charge(x, y, charge);
        self.recompute();
    }
}

// Input and drawing
//
impl FieldView {
    fn update_input(&mut self, cx: &mut GraphicsContext) {
        let left = self
            .left_guard
            .rising(cx.mouse_button_pressed(MouseButton::Left));
        let right = self
            .right_guard
            .rising(cx.mouse_button_pressed(MouseButton::Right));
        if let Some(mouse_pos) = cx.cursor_position() {
            let x = f64::from(mouse_pos.x.into_float());
            let y = f64::from(mouse_pos.y.into_float());
            if left {
                self.place_charge(x, y, true);
            }
            if right {
                self.place_charge(x, y, false);
            }
        }
        if self
            .backspace_guard
            .rising(cx.key_pressed(KeyCode::Backspace))
            && self.store.remove_last().is_some()
        {
            self.recompute();
        }
    }
    fn draw(&mut self, cx: &mut GraphicsContext) {
        self.update_input(cx);
        canvas::present(&self.frame, cx);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = VizConfig::default();
    config.validate()?;

    let mut view: Option<FieldView> = None;

    Canvas::new(move |cx| {
        // Canvas size is fixed by the first frame.
        let view = view.get_or_insert_with(|| {
            let size = cx.gfx.size();
            FieldView::new(
                config,
                f64::from(size.width.into_float()),
                f64::from(size.height.into_float()),
            )
        });
        view.draw(cx);
    })
    .tick(Tick::redraws_per_second(60))
    .run()?;
    Ok(())
}
