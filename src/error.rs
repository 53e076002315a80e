//! Error types
//!
//! Every failure a command can hit is one variant of [`PapError`]. Nothing in
//! the library terminates the process; the binary turns an error into a
//! single message and exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Device direction, used to word lookup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Source,
    Sink,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Source => f.write_str("source"),
            DeviceKind::Sink => f.write_str("sink"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PapError {
    /// The audio server could not be reached or rejected a request
    #[error("{0}")]
    Connectivity(String),

    #[error("Failed to find {kind} named {name}")]
    DeviceNotFound { kind: DeviceKind, name: String },

    #[error("No default {kind}!")]
    NoDefaultDevice { kind: DeviceKind },

    #[error("Already added as profile \"{title}\".")]
    DuplicateProfile { title: String },

    #[error("Found no profile named {title}.")]
    ProfileNotFound { title: String },

    #[error("No current profile.")]
    NoCurrentProfile,

    #[error("No profiles!")]
    EmptyProfileSet,

    #[error("Found no usable profile")]
    ExhaustedCycle,

    #[error("Failed to access {}: {source}", .path.display())]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode profiles: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to show notification: {0}")]
    Notification(String),
}

pub type Result<T, E = PapError> = std::result::Result<T, E>;
