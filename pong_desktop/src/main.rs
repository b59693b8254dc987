//! Desktop client for the Pong match.
//!
//! winit drives the event loop through `ApplicationHandler`. The window and
//! GPU state are created lazily in `resumed`; each redraw feeds the held keys
//! and the elapsed time into the simulation, then draws it.

mod camera;
mod keymap;
mod mesh;
mod platform;
mod renderer;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use pong_core::{commands, Command, Config, Events, GameRng, InputState, Match};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use keymap::map_key;
use platform::PlatformConfig;
use renderer::Renderer;

/// Sprites ship next to the crate manifest
const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/content");

struct ClientState {
    window: Arc<Window>,
    renderer: Renderer,
    game: Match,
    input: InputState,
    last_frame: Instant,
}

impl ClientState {
    fn new(window: Arc<Window>) -> Result<Self, String> {
        let renderer = Renderer::new(window.clone(), Path::new(ASSET_DIR))?;
        let game = Match::new(Config::new(), GameRng::from_entropy());

        Ok(Self {
            window,
            renderer,
            game,
            input: InputState::new(),
            last_frame: Instant::now(),
        })
    }

    /// Run one frame. Returns false once the player asked to quit.
    fn frame(&mut self) -> Result<bool, String> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        for command in commands(&self.input, self.game.state()) {
            if command == Command::Quit {
                return Ok(false);
            }
            self.game.handle(command);
        }

        self.game.update(dt, &self.input);
        log_events(self.game.events());
        self.renderer.draw(&self.game)?;
        self.input.end_frame();

        Ok(true)
    }
}

fn log_events(events: &Events) {
    if events.ball_hit_paddle {
        log::debug!("Ball hit a paddle");
    }
    if events.ball_hit_wall {
        log::debug!("Ball hit a wall");
    }
    if events.left_scored || events.right_scored {
        log::debug!(
            "Point scored (left: {}, right: {})",
            events.left_scored,
            events.right_scored
        );
    }
}

struct App {
    config: PlatformConfig,
    state: Option<ClientState>,
    error: Option<String>,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: String) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let state = platform::create_window(event_loop, &self.config).and_then(ClientState::new);
        match state {
            Ok(state) => {
                log::info!(
                    "Window created: {}x{}",
                    self.config.width,
                    self.config.height
                );
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                state
                    .renderer
                    .resize(physical_size.width, physical_size.height);
                log::debug!("Resized to {}x{}", physical_size.width, physical_size.height);
            }

            WindowEvent::Focused(false) => {
                // Key-up events are not delivered while unfocused
                state.input.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => match state.frame() {
                Ok(true) => {}
                Ok(false) => {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                }
                Err(e) => self.fail(event_loop, e),
            },

            _ => {}
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pong starting...");

    let event_loop =
        EventLoop::new().map_err(|e| format!("Failed to create event loop: {}", e))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {}", e))?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
