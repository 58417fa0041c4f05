use anyhow::{anyhow, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use clock_face::cli::Cli;
use clock_face::ClockApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;
    let mut app = ClockApp::new(cli);

    log::info!("Clock Face - b: borderless, t: pin, F11: fullscreen, q: quit");
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop failed: {e}"))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
