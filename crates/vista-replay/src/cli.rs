use std::path::PathBuf;

use clap::Parser;
use vista_scroll::ScreenPreset;

/// Feed a recorded scroll/gesture trace through a scroll
/// session and print what the screen would render after each event.
#[derive(Parser, Debug)]
#[command(name = "vista-replay", version, about)]
pub struct Args {
    /// Trace file (.json, .yaml or .yml).
    pub trace: PathBuf,

    /// Screen layout to mount (property-detail, city-modal, listing-feed).
    #[arg(short = 'p', long, default_value = "property-detail")]
    pub preset: ScreenPreset,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print each snapshot as a JSON line instead of a summary.
    #[arg(long)]
    pub json: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
