//! Ball Field entry point
//!
//! In the browser this draws onto the page's canvas and steers the player from the
//! arrow keys. Natively it runs headless and prints the final field as JSON:
//!
//!   cargo run -- [config.json] --ticks 600 --seed 42

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use ball_field::FieldConfig;
    use ball_field::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use ball_field::platform::{ManualScheduler, Simulation};
    use ball_field::renderer::CanvasRenderer;

    /// Everything the frame loop needs between callbacks
    struct App {
        sim: Simulation<CanvasRenderer>,
        scheduler: ManualScheduler,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Field starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas fills the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_WIDTH as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_HEIGHT as f64);
        let config = FieldConfig::load(width as u32 as f32, height as u32 as f32);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let sim = match Simulation::new(&config, seed, renderer) {
            Ok(sim) => sim,
            Err(e) => {
                log::error!("Cannot build field: {}", e);
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            sim,
            scheduler: ManualScheduler::new(),
        }));

        setup_keyboard(app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Ball Field running (seed {})", seed);
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            if a.sim.handle_key(&event.key()) {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let again = {
            let mut a = app.borrow_mut();
            let App { sim, scheduler } = &mut *a;
            if scheduler.take_pending() {
                sim.frame(scheduler);
            }
            scheduler.is_pending()
        };

        if again {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Run the field headless and print the final snapshot as JSON
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Run the ball field headless", long_about = None)]
struct Args {
    /// JSON field config (defaults are used when omitted)
    config: Option<std::path::PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = ball_field::consts::HEADLESS_TICKS)]
    ticks: u64,
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_field::FieldConfig;
    use ball_field::platform::{ManualScheduler, Simulation};
    use ball_field::renderer::FrameRecorder;
    use clap::Parser;

    let args = Args::parse();

    env_logger::init();
    log::info!("Ball Field (headless) starting...");

    let config = match &args.config {
        Some(path) => match FieldConfig::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FieldConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let renderer = FrameRecorder::new(config.width, config.height);
    let mut sim = match Simulation::new(&config, seed, renderer) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Cannot build field: {}", e);
            std::process::exit(1);
        }
    };

    let mut scheduler = ManualScheduler::new();
    let ran = sim.run(&mut scheduler, args.ticks);
    log::info!("Ran {} ticks with seed {}", ran, seed);

    match serde_json::to_string_pretty(&sim.field().snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use ball_field::consts::HEADLESS_TICKS;
    use clap::Parser;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["ball-field"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.ticks, HEADLESS_TICKS);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_args_config_and_ticks() {
        let args =
            Args::try_parse_from(["ball-field", "field.json", "--ticks", "30", "--seed", "7"])
                .unwrap();
        assert_eq!(args.config, Some(std::path::PathBuf::from("field.json")));
        assert_eq!(args.ticks, 30);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Args::try_parse_from(["ball-field", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_tick_count_is_usage_error() {
        let err = Args::try_parse_from(["ball-field", "--ticks", "many"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ValueValidation | ErrorKind::InvalidValue
        ));
    }
}
