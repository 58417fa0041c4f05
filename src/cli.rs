// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "clock-face")]
#[command(about = "Borderless desktop clock", long_about = None)]
pub struct Cli {
    /// Font file for the weekday line (defaults to an installed Anurati, then sans)
    #[arg(long = "display-font", value_name = "PATH")]
    pub display_font: Option<PathBuf>,

    /// Fill the primary monitor and stay below other windows
    #[arg(long = "desktop", default_value = "false")]
    pub desktop: bool,
}
