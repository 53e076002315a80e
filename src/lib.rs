//! `PAP` - `PulseAudio` Profiles
//!
//! Saves capture/playback device pairs as named profiles and switches
//! between them. Uses `pactl` for audio control, so it works with both
//! `PulseAudio` and `pipewire-pulse`.
//!
//! # Features
//! - Save the current default source/sink as a profile
//! - Cycle to the next profile whose devices are connected, skipping the rest
//! - Move playing streams to the newly selected sink
//! - Auto profiles pairing each sink with the source on the same sound card
//! - Outcome on stdout or as a desktop notification

pub mod auto;
pub mod cli;
pub mod commands;
pub mod config;
pub mod cycler;
pub mod error;
pub mod notification;
pub mod profile;
pub mod pulse;
pub mod resolver;
pub mod store;
pub mod style;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use cli::Args;
pub use config::Config;
pub use error::{PapError, Result};
pub use profile::{DeviceRef, Profile};
pub use store::ProfileStore;
