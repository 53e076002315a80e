//! Runtime configuration
//!
//! Built once from the parsed arguments and handed to every command by
//! reference. Nothing here is mutated after startup.

use std::path::PathBuf;

use crate::cli::Args;
use crate::error::Result;
use crate::store::ProfileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Report outcomes as desktop notifications
    pub notify: bool,
    /// Print device details and diagnostics
    pub verbose: bool,
    pub profiles_path: PathBuf,
}

impl Config {
    /// # Errors
    /// Returns an error if no profile path was given and the user's data
    /// directory cannot be determined.
    pub fn from_args(args: &Args) -> Result<Self> {
        let profiles_path = match &args.profiles {
            Some(path) => path.clone(),
            None => ProfileStore::default_path()?,
        };

        Ok(Self {
            notify: args.notify,
            verbose: args.verbose,
            profiles_path,
        })
    }

    /// Default tracing filter when `RUST_LOG` is unset
    ///
    /// Scoped to this crate so dependencies (zbus via notify-rust) stay quiet.
    #[must_use]
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        format!("{}={level}", env!("CARGO_CRATE_NAME"))
    }

    #[must_use]
    pub fn store(&self) -> ProfileStore {
        ProfileStore::new(&self.profiles_path)
    }
}
