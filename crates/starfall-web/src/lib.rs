pub mod dom;
pub mod runner;

pub use dom::{DomError, DomSurface};
pub use runner::GameRunner;

/// RNG seed from the browser clock.
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_attach, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// starfall_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `starfall_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
///
/// Game-specific exports can be added next to the macro call; `with_runner`
/// is in scope there.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| {
                r.reseed($crate::clock_seed());
                r.init();
            });
            log::info!("{}: initialized", $game_name);
        }

        /// Bind the canvas and the optional score / game-over elements.
        #[wasm_bindgen]
        pub fn game_attach(canvas_id: &str, score_id: &str, gameover_id: &str) -> Result<(), JsValue> {
            with_runner(|r| r.attach(canvas_id, score_id, gameover_id)).map_err(JsValue::from)
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_manifest(json)).map_err(|e| {
                log::error!("{}: manifest rejected: {}", $game_name, e);
                JsValue::from_str(&e.to_string())
            })
        }

        /// Returns false once the game has halted; the host stops requesting frames.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt)).should_reschedule()
        }

        #[wasm_bindgen]
        pub fn game_resize(client_width: f32, client_height: f32, pixel_ratio: f32) {
            with_runner(|r| r.resize(client_width, client_height, pixel_ratio));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(client_x: f32, client_y: f32) {
            with_runner(|r| r.pointer_down(client_x, client_y));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(client_x: f32, client_y: f32) {
            with_runner(|r| r.pointer_up(client_x, client_y));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(client_x: f32, client_y: f32) {
            with_runner(|r| r.pointer_move(client_x, client_y));
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave() {
            with_runner(|r| r.pointer_leave());
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.wheel(delta));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_custom(kind, a, b, c));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_header_len() -> u32 {
            with_runner(|r| r.header_len())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_backing_width() -> u32 {
            with_runner(|r| r.backing_width())
        }

        #[wasm_bindgen]
        pub fn get_backing_height() -> u32 {
            with_runner(|r| r.backing_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }
    };
}
