//! Ball Chase entry point
//!
//! Handles browser initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

    use ball_chase::Settings;
    use ball_chase::render::{CanvasSurface, render};
    use ball_chase::sim::{FrameInput, Step, World, step};
    use glam::Vec2;

    /// App instance holding all state
    struct App {
        world: World,
        surface: CanvasSurface,
        input: FrameInput,
        settings: Settings,
        /// Paragraph showing the live-ball count
        count_display: Option<Element>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        last_fps_shown: u32,
    }

    impl App {
        fn new(
            seed: u64,
            bounds: Vec2,
            ctx: CanvasRenderingContext2d,
            count_display: Option<Element>,
        ) -> Self {
            Self {
                world: World::new(seed, bounds),
                surface: CanvasSurface::new(ctx),
                input: FrameInput::default(),
                settings: Settings::load(),
                count_display,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_fps_shown: u32::MAX,
            }
        }

        /// Run one frame: simulate, draw, refresh the HUD.
        fn frame(&mut self, time: f64) {
            let input = std::mem::take(&mut self.input);
            let events = step(&mut self.world, &input);

            render(
                &self.world,
                &mut self.surface,
                self.settings.effective_trail_fade(),
            );

            // The count display only changes on eliminations.
            if !events.is_empty() {
                self.update_count_display();
                log::info!(
                    "{} ball(s) caught, {} remaining",
                    events.len(),
                    self.world.live_count
                );
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }
            if self.settings.show_fps {
                self.update_fps_display();
            }
        }

        fn update_count_display(&self) {
            if let Some(el) = &self.count_display {
                el.set_text_content(Some(&self.world.count_label()));
            }
        }

        fn update_fps_display(&mut self) {
            if self.fps == self.last_fps_shown {
                return;
            }
            self.last_fps_shown = self.fps;
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&format!("{} fps", self.fps)));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Chase starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to the viewport, once per session.
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .expect("no viewport width") as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .expect("no viewport height") as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let count_display = document.query_selector("p").ok().flatten();

        let seed = js_sys::Date::now() as u64;
        let bounds = Vec2::new(width as f32, height as f32);
        let app = Rc::new(RefCell::new(App::new(seed, bounds, ctx, count_display)));
        app.borrow().update_count_display();

        log::info!(
            "World initialized: seed {}, bounds {}x{}, {} balls",
            seed,
            width,
            height,
            app.borrow().world.live_count
        );

        setup_key_handler(app.clone());
        request_animation_frame(app);

        log::info!("Ball Chase running!");
    }

    fn setup_key_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            // Whitelisted keys queue a hunter step; everything else is
            // ignored.
            if let Some(step) = Step::from_key(&event.key()) {
                app.borrow_mut().input.steps.push(step);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            app_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn app_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ball Chase (native) starting...");
    log::info!("This demo renders in a browser - build for wasm32 and serve the page");

    // Headless smoke run
    println!("\nRunning headless simulation check...");
    smoke_run();
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use ball_chase::sim::{FrameInput, World, step};
    use glam::Vec2;

    let mut world = World::new(42, Vec2::new(800.0, 600.0));
    for _ in 0..600 {
        step(&mut world, &FrameInput::default());
        let live = world.balls.iter().filter(|b| b.exists).count();
        assert_eq!(world.live_count, live, "live count out of sync");
    }
    println!("✓ 600 frames simulated, {}", world.count_label());
}
