//! CLI commands
//!
//! Each command performs one action and returns its outcome message (if it
//! has one). Listings are printed directly; the outcome is reported by the
//! caller through the configured notifier.

use std::fmt::Write;
use tracing::info;

use crate::auto;
use crate::cli::Command;
use crate::config::Config;
use crate::cycler::{self, StreamPolicy};
use crate::error::{DeviceKind, PapError, Result};
use crate::profile::{Profile, ServerSnapshot};
use crate::pulse::{self, AudioServer};
use crate::resolver;
use crate::style::PapStyle;

/// Run one command
///
/// # Errors
/// Returns whatever error the command hit; nothing is retried.
pub fn run(config: &Config, server: &dyn AudioServer, command: &Command) -> Result<Option<String>> {
    match command {
        Command::Add { title } => add(config, server, title).map(Some),
        Command::List => list(config, server).map(|()| None),
        Command::ListAuto => list_auto(config, server).map(|()| None),
        Command::Current => current(config, server).map(Some),
        Command::Next => next(config, server).map(Some),
        Command::NextAuto => next_auto(server).map(Some),
        Command::Remove { title } => remove(config, title).map(Some),
    }
}

/// Save the current default source/sink as a new profile
///
/// # Errors
/// Returns an error if there is no default source or sink, either device
/// cannot be found, or the pair is already saved.
pub fn add(config: &Config, server: &dyn AudioServer, title: &str) -> Result<String> {
    let snapshot = server.server_info()?;

    if snapshot.default_source_name.is_empty() {
        return Err(PapError::NoDefaultDevice {
            kind: DeviceKind::Source,
        });
    }
    if snapshot.default_sink_name.is_empty() {
        return Err(PapError::NoDefaultDevice {
            kind: DeviceKind::Sink,
        });
    }

    let sources = server.sources()?;
    let sinks = server.sinks()?;
    let source = pulse::require_source(&sources, &snapshot.default_source_name)?;
    let sink = pulse::require_sink(&sinks, &snapshot.default_sink_name)?;

    config.store().add(Profile {
        title: title.to_string(),
        source: Some(source.to_ref()),
        sink: sink.to_ref(),
    })?;

    info!("Added profile: {}", title);
    Ok(format!("Added profile {title}."))
}

/// Delete every profile with this title
///
/// # Errors
/// Returns an error if no profile has the title or the file cannot be updated.
pub fn remove(config: &Config, title: &str) -> Result<String> {
    config.store().remove(title)?;
    info!("Removed profile: {}", title);
    Ok(format!("Removed profile {title}."))
}

/// Print saved profiles, marking the current one
///
/// # Errors
/// Returns an error if the profile file or the server cannot be read.
pub fn list(config: &Config, server: &dyn AudioServer) -> Result<()> {
    let profiles = config.store().load()?;
    let snapshot = server.server_info()?;
    print!("{}", render_profiles(&profiles, &snapshot, config.verbose));
    Ok(())
}

/// Print auto profiles, marking the current one
///
/// # Errors
/// Returns an error if the server cannot be queried.
pub fn list_auto(config: &Config, server: &dyn AudioServer) -> Result<()> {
    let snapshot = server.server_info()?;
    let profiles = auto::load(server)?;
    print!("{}", render_profiles(&profiles, &snapshot, config.verbose));
    Ok(())
}

/// Title of the active saved profile, falling back to auto profiles
///
/// # Errors
/// Returns [`PapError::NoCurrentProfile`] when nothing matches.
pub fn current(config: &Config, server: &dyn AudioServer) -> Result<String> {
    let snapshot = server.server_info()?;

    let saved = config.store().load()?;
    if let Some(profile) = resolver::current(&saved, &snapshot) {
        return Ok(profile.title.clone());
    }

    let derived = auto::load(server)?;
    resolver::current(&derived, &snapshot)
        .map(|profile| profile.title.clone())
        .ok_or(PapError::NoCurrentProfile)
}

/// Switch to the next usable saved profile, moving playing streams along
///
/// # Errors
/// Returns an error if there are no profiles, none is usable, or the server
/// rejects a change.
pub fn next(config: &Config, server: &dyn AudioServer) -> Result<String> {
    let profiles = config.store().load()?;
    let profile = cycler::activate_next(server, &profiles, StreamPolicy::Relocate)?;
    Ok(activated_message(profile))
}

/// Switch to the next usable auto profile
///
/// # Errors
/// Returns an error if there are no sinks, none is usable, or the server
/// rejects a change.
pub fn next_auto(server: &dyn AudioServer) -> Result<String> {
    let sources = server.sources()?;
    let sinks = server.sinks()?;
    let profiles = auto::build(&sources, &sinks);
    let profile =
        cycler::activate_next_with(server, &profiles, sources, sinks, StreamPolicy::Leave)?;
    Ok(activated_message(profile))
}

fn activated_message(profile: &Profile) -> String {
    format!("Activated profile {}.", profile.title)
}

/// One line per profile; with `verbose`, device lines underneath
fn render_profiles(profiles: &[Profile], snapshot: &ServerSnapshot, verbose: bool) -> String {
    let current = resolver::active_index(profiles, snapshot);
    let mut out = String::new();

    for (i, profile) in profiles.iter().enumerate() {
        let marker = if current == Some(i) {
            format!(" {}", "[current]".success())
        } else {
            String::new()
        };
        let _ = writeln!(out, "{}{}", profile.title.as_str().title(), marker);

        if verbose {
            if let Some(source) = &profile.source {
                let _ = writeln!(
                    out,
                    "\tsource {} {}",
                    source.name,
                    format!("({})", source.description).detail()
                );
            }
            let _ = writeln!(
                out,
                "\tsink   {} {}",
                profile.sink.name,
                format!("({})", profile.sink.description).detail()
            );
        }
    }

    out
}
