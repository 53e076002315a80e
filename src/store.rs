//! Profile persistence
//!
//! Profiles live in a single JSON array. A missing file is an empty set;
//! anything unreadable or undecodable is an error. Saving truncates and
//! rewrites the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PapError, Result};
use crate::profile::{Profile, sort_by_title};

/// Directory under the XDG data dir holding the profile file
pub const DATA_DIR_NAME: &str = "pap";

/// Profile file name
pub const PROFILES_FILE_NAME: &str = "profiles.json";

/// JSON-file backed profile set
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$XDG_DATA_HOME/pap/profiles.json`
    ///
    /// # Errors
    /// Returns an error if no data directory can be determined for this user.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or(PapError::NoDataDir)?;
        Ok(data_dir.join(DATA_DIR_NAME).join(PROFILES_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all profiles, sorted by title
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load(&self) -> Result<Vec<Profile>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No profile file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(PapError::StoreIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        debug!("Loading {}", self.path.display());
        let mut profiles: Vec<Profile> =
            serde_json::from_str(&contents).map_err(|source| PapError::Parse {
                path: self.path.clone(),
                source,
            })?;

        sort_by_title(&mut profiles);
        Ok(profiles)
    }

    /// Overwrite the file with the full profile set
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, profiles: &[Profile]) -> Result<()> {
        let io_err = |source: std::io::Error| PapError::StoreIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(profiles).map_err(PapError::Encode)?;

        debug!("Saving {}", self.path.display());
        fs::write(&self.path, json).map_err(io_err)
    }

    /// Append a profile unless its source/sink pair is already stored
    ///
    /// Titles are not checked for uniqueness.
    ///
    /// # Errors
    /// Returns [`PapError::DuplicateProfile`] naming the existing profile, or a
    /// load/save error.
    pub fn add(&self, profile: Profile) -> Result<()> {
        let mut profiles = self.load()?;

        if let Some(source) = &profile.source
            && let Some(existing) = profiles
                .iter()
                .find(|p| p.has_devices(&source.name, &profile.sink.name))
        {
            return Err(PapError::DuplicateProfile {
                title: existing.title.clone(),
            });
        }

        profiles.push(profile);
        self.save(&profiles)
    }

    /// Remove every profile with exactly this title
    ///
    /// # Errors
    /// Returns [`PapError::ProfileNotFound`] if no profile has the title; the
    /// file is left untouched in that case.
    pub fn remove(&self, title: &str) -> Result<()> {
        let old = self.load()?;
        let old_len = old.len();
        let kept: Vec<Profile> = old.into_iter().filter(|p| p.title != title).collect();

        if kept.len() == old_len {
            return Err(PapError::ProfileNotFound {
                title: title.to_string(),
            });
        }

        self.save(&kept)
    }
}
