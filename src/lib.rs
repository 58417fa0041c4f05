pub mod app;
pub mod cli;
pub mod controls;
pub mod core;
pub mod math;
pub mod shell;
pub mod window;

pub use app::ClockApp;
pub use shell::{ClockShell, Outcome, ToggleState};
