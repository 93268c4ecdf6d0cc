//! PitVoice Library
//!
//! Core modules for the PitVoice racing voice assistant. Announcements are
//! assembled from pre-recorded sound clips, so the heart of the crate is the
//! number-to-speech compiler in [`number`] which turns lap times and telemetry
//! integers into ordered clip identifiers.

pub mod config;
pub mod error;
pub mod number;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the default logging subscriber for the host application.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
