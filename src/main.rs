//! Hue Herd entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, MouseEvent};

    use hue_herd::Settings;
    use hue_herd::platform::PointerState;
    use hue_herd::sim::{Bounds, Simulation, TickInput};
    use hue_herd::ui::ResetButton;

    // The page owns drawing; each frame hands it the snapshot as JSON
    #[wasm_bindgen(inline_js = "
        export function draw_frame(snapshot) {
            if (typeof window.drawFrame === 'function') {
                window.drawFrame(JSON.parse(snapshot));
            }
        }
    ")]
    extern "C" {
        fn draw_frame(snapshot: &str);
    }

    /// Game instance holding all state
    struct Game {
        sim: Simulation,
        pointer: PointerState,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement) -> Self {
            let bounds = canvas_bounds(&canvas);
            Self {
                sim: Simulation::new(read_settings(), bounds),
                pointer: PointerState::default(),
                canvas,
            }
        }

        /// (Re)start with whatever the settings form currently says
        fn start(&mut self) {
            let bounds = canvas_bounds(&self.canvas);
            self.sim.initialize(read_settings(), bounds);
        }

        fn frame(&mut self) {
            if !self.sim.is_solved() {
                let input = TickInput {
                    cursor: self.pointer.cursor(),
                    ..Default::default()
                };
                self.sim.tick(&input);
            }

            match serde_json::to_string(&self.sim.snapshot()) {
                Ok(json) => draw_frame(&json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
        }
    }

    fn canvas_bounds(canvas: &HtmlCanvasElement) -> Bounds {
        Bounds::new(canvas.width() as f64, canvas.height() as f64)
    }

    fn input_value(id: &str) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn read_settings() -> Settings {
        Settings::from_form(&input_value("colorCountInput"), &input_value("ballsPerColorInput"))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hue Herd starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let game = Rc::new(RefCell::new(Game::new(canvas.clone())));

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Hue Herd running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer.enter();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer.leave();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                game.borrow_mut().pointer.move_client(
                    DVec2::new(event.client_x() as f64, event.client_y() as f64),
                    DVec2::new(rect.left(), rect.top()),
                    DVec2::new(rect.width(), rect.height()),
                    DVec2::new(canvas_clone.width() as f64, canvas_clone.height() as f64),
                );
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset button drawn on the win overlay
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if !g.sim.is_solved() {
                    return;
                }
                let button = ResetButton::for_bounds(&g.sim.bounds());
                let click = DVec2::new(event.offset_x() as f64, event.offset_y() as f64);
                if button.contains(click) {
                    g.start();
                }
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        for id in ["startBtn", "resetBtn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().start();
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hue Herd (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");
    let settings = hue_herd::Settings::from_form(arg(0), arg(1));
    let max_ticks = arg(2).parse::<u64>().unwrap_or(headless::DEFAULT_TICKS);

    headless::run(settings, max_ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::DVec2;

    use hue_herd::Settings;
    use hue_herd::consts::TICK_DT;
    use hue_herd::sim::{Bounds, Simulation, TickInput, cohort_stats};

    pub const DEFAULT_TICKS: u64 = 20_000;
    /// Ticks between progress reports (~10 s of play at 60 Hz)
    const REPORT_EVERY: u64 = 600;

    /// Cursor sweeping a Lissajous curve over the play area
    fn sweep(bounds: &Bounds, tick: u64) -> DVec2 {
        let t = tick as f64 * TICK_DT;
        let center = bounds.center();
        center + DVec2::new((t * 0.7).sin() * center.x * 0.8, (t * 1.1).sin() * center.y * 0.8)
    }

    pub fn run(settings: Settings, max_ticks: u64) {
        let bounds = Bounds::default();
        let mut sim = Simulation::new(settings, bounds);

        for tick in 0..max_ticks {
            let input = TickInput::with_cursor(sweep(&bounds, tick));
            if sim.tick(&input) {
                break;
            }

            if (tick + 1) % REPORT_EVERY == 0 {
                let stats = cohort_stats(sim.particles());
                let compact = stats.iter().filter(|s| s.is_compact()).count();
                let worst = stats.iter().map(|s| s.max_dist).fold(0.0, f64::max);
                log::info!(
                    "tick {}: {}/{} cohorts compact, widest spread {:.1}",
                    tick + 1,
                    compact,
                    stats.len(),
                    worst
                );
            }
        }

        match sim.solve_time() {
            Some(secs) => println!("Solved after {} ticks ({}s)", sim.ticks(), secs),
            None => println!(
                "Not solved after {} ticks ({}s elapsed)",
                sim.ticks(),
                sim.elapsed_seconds()
            ),
        }
    }
}
