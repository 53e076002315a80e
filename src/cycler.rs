//! Profile cycling
//!
//! Walks a title-ordered profile list circularly from the active profile and
//! picks the next one whose devices are all present, then applies it.
//! Device lists are snapshotted once per invocation; profiles referring to
//! missing hardware (docks, USB headsets) are skipped, not fatal.

use tracing::{debug, info};

use crate::error::{PapError, Result};
use crate::profile::{Profile, ServerSnapshot};
use crate::pulse::{self, AudioServer, Sink, Source};
use crate::resolver::{self, CycleStart};

/// Whether playing streams follow the newly selected sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPolicy {
    /// Move every stream on another sink to the new sink
    Relocate,
    /// Only change the default; existing streams stay put
    Leave,
}

/// A profile whose devices resolved against the live device lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub source: Option<Source>,
    pub sink: Sink,
}

/// Cursor over a non-empty profile list
#[derive(Debug)]
pub struct ProfileCycler<'a> {
    profiles: &'a [Profile],
    sources: Vec<Source>,
    sinks: Vec<Sink>,
    cursor: usize,
    /// Candidates not yet tried
    remaining: usize,
}

impl<'a> ProfileCycler<'a> {
    /// Start at the active profile, or just before index 0 if none is active
    ///
    /// # Errors
    /// Returns [`PapError::EmptyProfileSet`] if there are no profiles.
    pub fn new(
        profiles: &'a [Profile],
        snapshot: &ServerSnapshot,
        sources: Vec<Source>,
        sinks: Vec<Sink>,
    ) -> Result<Self> {
        let start = resolver::cycle_start(profiles, snapshot).ok_or(PapError::EmptyProfileSet)?;

        // The active profile is already applied, so it is not a candidate
        let remaining = match start {
            CycleStart::Active(_) => profiles.len() - 1,
            CycleStart::Unmatched(_) => profiles.len(),
        };

        Ok(Self {
            profiles,
            sources,
            sinks,
            cursor: start.index(),
            remaining,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor one slot forward, wrapping at the end
    pub fn advance(&mut self) -> usize {
        self.cursor = (self.cursor + 1) % self.profiles.len();
        self.cursor
    }

    /// Resolve a profile's devices, `None` if any referenced device is gone
    fn resolve(&self, profile: &Profile) -> Option<(Option<Source>, Sink)> {
        let source = match &profile.source {
            Some(wanted) => Some(pulse::find_source(&self.sources, &wanted.name)?.clone()),
            None => None,
        };
        let sink = pulse::find_sink(&self.sinks, &profile.sink.name)?;
        Some((source, sink.clone()))
    }

    /// Advance until a profile with all devices present is found
    ///
    /// # Errors
    /// Returns [`PapError::ExhaustedCycle`] once every candidate was rejected.
    pub fn next_usable(&mut self) -> Result<Candidate> {
        while self.remaining > 0 {
            self.remaining -= 1;
            let index = self.advance();
            let profile = &self.profiles[index];

            match self.resolve(profile) {
                Some((source, sink)) => return Ok(Candidate { index, source, sink }),
                None => debug!("Skipping profile {}: device missing", profile.title),
            }
        }

        Err(PapError::ExhaustedCycle)
    }
}

/// Make a resolved candidate the server's defaults
///
/// # Errors
/// Returns an error if any server mutation fails.
pub fn apply(server: &dyn AudioServer, candidate: &Candidate, streams: StreamPolicy) -> Result<()> {
    if let Some(source) = &candidate.source {
        server.set_default_source(&source.name)?;
        if source.muted {
            server.unmute_source(&source.name)?;
        }
    }

    let sink = &candidate.sink;
    server.set_default_sink(&sink.name)?;

    if streams == StreamPolicy::Relocate {
        for input in server.sink_inputs()? {
            if input.sink != sink.index {
                debug!(
                    "Moving sink input {} from sink {} to {}",
                    input.index, input.sink, sink.index
                );
                server.move_sink_input(input.index, sink.index)?;
            }
        }
    }

    Ok(())
}

/// Switch to the next usable profile after the active one
///
/// Queries the defaults and device lists once, then applies the chosen
/// profile. Returns the profile that was activated.
///
/// # Errors
/// Returns [`PapError::EmptyProfileSet`], [`PapError::ExhaustedCycle`], or a
/// server error.
pub fn activate_next<'a>(
    server: &dyn AudioServer,
    profiles: &'a [Profile],
    streams: StreamPolicy,
) -> Result<&'a Profile> {
    if profiles.is_empty() {
        return Err(PapError::EmptyProfileSet);
    }

    let sources = server.sources()?;
    let sinks = server.sinks()?;
    activate_next_with(server, profiles, sources, sinks, streams)
}

/// Like [`activate_next`], resolving against device lists the caller already
/// fetched (auto profiles are built from the same lists)
///
/// # Errors
/// Returns [`PapError::EmptyProfileSet`], [`PapError::ExhaustedCycle`], or a
/// server error.
pub fn activate_next_with<'a>(
    server: &dyn AudioServer,
    profiles: &'a [Profile],
    sources: Vec<Source>,
    sinks: Vec<Sink>,
    streams: StreamPolicy,
) -> Result<&'a Profile> {
    if profiles.is_empty() {
        return Err(PapError::EmptyProfileSet);
    }

    let snapshot = server.server_info()?;
    let mut cycler = ProfileCycler::new(profiles, &snapshot, sources, sinks)?;
    let candidate = cycler.next_usable()?;
    apply(server, &candidate, streams)?;

    let profile = &profiles[candidate.index];
    info!("Activated profile: {}", profile.title);
    Ok(profile)
}
