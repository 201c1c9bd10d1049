//! Native Pong client: one player on W/S, the second paddle mirrors them.

mod app;
mod camera;
mod clock;
mod error;
mod glyphs;
mod input;
mod mesh;
mod renderer;

use std::time::{SystemTime, UNIX_EPOCH};

use app::{App, WindowConfig};
use error::ClientError;
use winit::event_loop::EventLoop;

fn main() -> Result<(), ClientError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pong starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::debug!("Match seed {}", seed);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(WindowConfig::default(), seed);
    event_loop.run_app(&mut app)?;
    app.finish()
}
