//! Canvas Shooter entry point
//!
//! Browser builds wire DOM events into the simulation and run the frame loop.
//! Native builds run a scripted headless session and log what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use canvas_shooter::Tuning;
    use canvas_shooter::renderer::CanvasRenderer;
    use canvas_shooter::sim::{
        Bounds, DrawList, GameEvent, GameState, InputState, Spawner, is_pause_key, tick,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        spawner: Spawner,
        renderer: CanvasRenderer,
        draw: DrawList,
        /// An animation frame is already scheduled
        loop_active: bool,
    }

    impl Game {
        /// Run one frame. Returns whether another should be scheduled.
        fn frame(&mut self) -> bool {
            self.draw.clear();
            let outcome = tick(&mut self.state, &self.input, &mut self.draw);
            if let Err(e) = self.renderer.render(&self.draw) {
                log::warn!("Render error: {:?}", e);
            }
            self.dispatch_events();
            outcome.schedule_next()
        }

        /// Forward simulation notifications to the page
        fn dispatch_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::GameOver => {
                        set_visible("ui", true);
                        show_message("Game Over!");
                    }
                    GameEvent::Paused => log::info!("Paused"),
                    GameEvent::Resumed => log::info!("Resumed"),
                    _ => {}
                }
            }
        }

        fn resize_to_window(&mut self) {
            let bounds = window_bounds();
            self.state.set_bounds(bounds);
            self.renderer.resize(bounds);
        }
    }

    fn window_bounds() -> Bounds {
        let window = web_sys::window().unwrap();
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        Bounds::new(w as f32, h as f32)
    }

    fn set_visible(id: &str, visible: bool) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    /// Non-blocking replacement for a modal alert
    fn show_message(text: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("message") {
            el.set_text_content(Some(text));
        }
        log::info!("{}", text);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(canvas).expect("no 2d context");
        let bounds = window_bounds();
        renderer.resize(bounds);

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            spawner: Spawner::new(tuning.spawn_interval_ms),
            state: GameState::new(seed, bounds, tuning),
            input: InputState::default(),
            renderer,
            draw: DrawList::new(),
            loop_active: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());
        setup_spawner(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: movement + pause toggle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                g.input.apply_key(&key, true);
                if is_pause_key(&key) {
                    g.state.toggle_pause();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.apply_key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives once focus is gone
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().input.clear();
                log::debug!("Held keys released (window blur)");
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click: fire toward the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let target = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().state.fire(target);
            });
            let _ = window
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize: applies from the next frame
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().resize_to_window();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("startBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_visible("ui", false);
                show_message("");

                let start_loop = {
                    let mut g = game.borrow_mut();
                    g.resize_to_window();
                    g.state.start();
                    !std::mem::replace(&mut g.loop_active, true)
                };
                if start_loop {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::error!("Start button missing; the game cannot begin");
        }
    }

    /// Free-running spawn timer, never cancelled
    fn setup_spawner(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let interval = game.borrow().spawner.interval_ms as i32;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.spawner.fire(&mut g.state);
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval,
        );
        closure.forget();
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
        let schedule = {
            let mut g = game.borrow_mut();
            let schedule = g.frame();
            g.loop_active = schedule;
            schedule
        };

        if schedule {
            request_animation_frame(game);
        }
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
    log::info!("Canvas Shooter (native) starting...");
    log::info!("Native mode runs a scripted headless session - use `trunk serve` to play");

    headless::run(0x5EED, 60 * 120);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use canvas_shooter::Tuning;
    use canvas_shooter::consts::FRAME_MS;
    use canvas_shooter::sim::{Bounds, DrawList, GameEvent, GameState, InputState, Spawner, tick};

    /// Frames between shots of the scripted player
    const FIRE_EVERY: u64 = 12;

    /// Kite away from the nearest enemy and shoot at it
    fn script(state: &GameState) -> (InputState, Option<Vec2>) {
        let Some(player) = state.player.as_ref() else {
            return (InputState::default(), None);
        };
        let nearest = state.enemies.iter().min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .total_cmp(&b.pos.distance_squared(player.pos))
        });
        let Some(enemy) = nearest else {
            return (InputState::default(), None);
        };

        let away = player.pos - enemy.pos;
        let input = InputState {
            up: away.y < 0.0,
            down: away.y > 0.0,
            left: away.x < 0.0,
            right: away.x > 0.0,
        };
        let shot = (state.frame % FIRE_EVERY == 0).then_some(enemy.pos);
        (input, shot)
    }

    pub fn run(seed: u64, max_frames: u64) {
        let tuning = Tuning::load();
        let mut spawner = Spawner::new(tuning.spawn_interval_ms);
        let mut state = GameState::new(seed, Bounds::new(800.0, 600.0), tuning);
        let mut draw = DrawList::new();
        let mut kills = 0u32;

        state.start();
        for _ in 0..max_frames {
            spawner.advance(FRAME_MS, &mut state);

            let (input, shot) = script(&state);
            if let Some(target) = shot {
                state.fire(target);
            }

            draw.clear();
            let outcome = tick(&mut state, &input, &mut draw);

            for event in state.drain_events() {
                match event {
                    GameEvent::EnemyDestroyed { .. } => kills += 1,
                    GameEvent::GameOver => log::info!("Game Over!"),
                    other => log::trace!("{:?}", other),
                }
            }

            if !outcome.schedule_next() {
                break;
            }
        }

        if let Ok(json) = serde_json::to_string(&draw) {
            log::debug!("Last frame: {}", json);
        }
        log::info!(
            "Session finished after {} frames: {} enemies destroyed, {} alive, phase {:?}",
            state.frame,
            kills,
            state.enemies.len(),
            state.phase
        );
    }
}
