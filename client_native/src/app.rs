//! Window and event loop.
//!
//! winit owns the loop. Each `RedrawRequested` measures real elapsed time,
//! advances the match by one frame and draws it; `about_to_wait` paces
//! redraws to the target frame rate.

use std::sync::Arc;
use std::time::Instant;

use game_core::{winner_text, Match, Params};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::clock::FrameClock;
use crate::error::ClientError;
use crate::input::{map_key, Control, KeyboardState};
use crate::renderer::Renderer;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: Params::ARENA_WIDTH as u32,
            height: Params::ARENA_HEIGHT as u32,
            target_fps: Params::TARGET_FPS,
        }
    }
}

fn create_window(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Arc<Window>, ClientError> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop.create_window(attrs)?;
    Ok(Arc::new(window))
}

/// Everything that only exists once the window does
struct ClientState {
    window: Arc<Window>,
    renderer: Renderer,
    game: Match,
    keys: KeyboardState,
    clock: FrameClock,
}

impl ClientState {
    fn new(event_loop: &ActiveEventLoop, config: &WindowConfig, seed: u64) -> Result<Self, ClientError> {
        let window = create_window(event_loop, config)?;
        log::info!("Window created: {}x{}", config.width, config.height);

        let game = Match::new(seed);
        let renderer = Renderer::new(window.clone(), game.map.width, game.map.height)?;

        let clock = FrameClock::new(config.target_fps);
        log::debug!("Frame period {:?}", clock.period());

        Ok(Self {
            window,
            renderer,
            game,
            keys: KeyboardState::new(),
            clock,
        })
    }

    fn frame(&mut self) -> Result<(), ClientError> {
        let dt = self.clock.tick();
        self.game.step(self.keys.frame_input(), dt);
        log_events(&self.game);

        match self.renderer.draw(&self.game.scene()) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                self.renderer.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(wgpu::SurfaceError::OutOfMemory.into()),
            Err(err) => {
                log::warn!("Skipped frame: {}", err);
                Ok(())
            }
        }
    }
}

/// Report what this frame's step changed
fn log_events(game: &Match) {
    if let Some(scorer) = game.events.scorer() {
        log::debug!(
            "Point to player {}, {} - {}",
            scorer.number(),
            game.score.left,
            game.score.right
        );
    }
    if game.events.game_over {
        if let Some(winner) = game.winner() {
            log::info!("{} Press Escape to quit.", winner_text(winner));
        }
    }
}

pub struct App {
    config: WindowConfig,
    seed: u64,
    state: Option<ClientState>,
    error: Option<ClientError>,
}

impl App {
    pub fn new(config: WindowConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            state: None,
            error: None,
        }
    }

    /// The error that stopped the loop, if any
    pub fn finish(self) -> Result<(), ClientError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match ClientState::new(event_loop, &self.config, self.seed) {
            Ok(state) => self.state = Some(state),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Focused(false) => state.keys.release_all(),

            WindowEvent::Resized(size) => {
                state.renderer.resize(size.width, size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                match map_key(code) {
                    Some(Control::Quit) if pressed => {
                        log::info!("Escape pressed, exiting.");
                        event_loop.exit();
                    }
                    Some(control) => state.keys.set(control, pressed),
                    None => {}
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = state.frame() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let now = Instant::now();
        if state.clock.is_due(now) {
            state.window.request_redraw();
            state.clock.schedule_next(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(state.clock.next_frame()));
    }
}
