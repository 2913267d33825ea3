//! Cosmic Drift entry point
//!
//! The wasm build wires the canvas, keyboard, buttons, and the
//! requestAnimationFrame loop to the simulation. The native build runs a
//! short headless session as a smoke check.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use cosmic_drift::audio::AudioManager;
    use cosmic_drift::sim::{FrameInput, GameEvent, GamePhase, GameState, tick};
    use cosmic_drift::{Settings, render, ui};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        audio: AudioManager,
        /// Currently held key codes, written by the key listeners and
        /// snapshotted into a FrameInput once per frame
        keys: HashSet<String>,
        /// Session start for the survival clock (ms since epoch)
        start_ms: f64,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());
            Self {
                state: GameState::new(seed, width, height),
                settings,
                audio,
                keys: HashSet::new(),
                start_ms: 0.0,
            }
        }

        fn frame_input(&self) -> FrameInput {
            let held = |code: &str| self.keys.contains(code);
            FrameInput {
                turn_left: held("KeyA") || held("ArrowLeft"),
                turn_right: held("KeyD") || held("ArrowRight"),
                thrust_forward: held("KeyW") || held("ArrowUp"),
                thrust_reverse: held("KeyS") || held("ArrowDown"),
                boost: held("Space"),
            }
        }

        fn begin_session(&mut self) {
            self.state.start();
            self.start_ms = js_sys::Date::now();
            self.audio.resume();
        }

        fn seconds_survived(&self) -> u64 {
            ((js_sys::Date::now() - self.start_ms) / 1000.0).max(0.0) as u64
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cosmic Drift starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(720.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, width as f32, height as f32)));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_resize(&canvas, game.clone());

        request_animation_frame(game, ctx);

        log::info!("Cosmic Drift running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Keydown - also resumes audio, browsers need a gesture first
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == "KeyM" && !event.repeat() {
                    let muted = g.settings.toggle_mute();
                    g.settings.save();
                    let volume = g.settings.effective_volume();
                    g.audio.set_volume(volume);
                    log::info!("audio {}", if muted { "muted" } else { "unmuted" });
                }
                g.keys.insert(code);
                g.audio.resume();
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.remove(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                game.borrow_mut().begin_session();
                ui::show_game_screen(&document);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut g = game.borrow_mut();
                g.state.reset();
                g.begin_session();
                ui::show_game_screen(&document);
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Viewport provider: track window size, recenter the player on change
    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1280.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(720.0);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            game.borrow_mut().state.resize(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, ctx: CanvasRenderingContext2d) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, ctx);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, ctx: CanvasRenderingContext2d) {
        {
            let mut g = game.borrow_mut();
            let document = web_sys::window().unwrap().document().unwrap();

            let input = g.frame_input();
            tick(&mut g.state, &input);

            for event in g.state.drain_events() {
                g.audio.play_event(event);
                if event == GameEvent::GameOver {
                    let secs = g.seconds_survived();
                    ui::show_final_stats(&document, &g.state, secs);
                    ui::show_game_over_screen(&document);
                }
            }

            render::draw(&ctx, &g.state, &g.settings);
            if g.state.phase == GamePhase::Playing {
                ui::update_hud(&document, &g.state);
            }
        }

        request_animation_frame(game, ctx);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cosmic_drift::sim::{FrameInput, GamePhase, GameState, tick};

    env_logger::init();
    log::info!("Cosmic Drift (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    // Headless smoke run: thrust in a slow spiral until the fuel runs out
    let mut state = GameState::new(0xC0D1F7, 1280.0, 720.0);
    state.start();
    let input = FrameInput {
        thrust_forward: true,
        turn_right: true,
        boost: true,
        ..Default::default()
    };
    let mut frames = 0u64;
    while state.phase == GamePhase::Playing && frames < 100_000 {
        tick(&mut state, &input);
        frames += 1;
    }
    println!(
        "seed {:#x}: survived {} frames, score={} level={} crystals={}",
        state.seed, frames, state.score, state.level, state.crystals_collected
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
