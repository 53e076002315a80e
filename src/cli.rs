//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PAP - PulseAudio Profiles
///
/// Save source/sink pairs as named profiles and switch between them.
#[derive(Parser, Debug)]
#[command(name = "pap")]
#[command(version)]
#[command(about = "PulseAudio Profiles - a simple source/sink profile manager")]
#[command(after_help = "\
BEHAVIOR:
  - A profile is the current default source and sink saved under a title
  - Profiles are listed and cycled in title order
  - 'next' skips profiles whose devices are not connected right now
  - 'next' moves playing streams to the new sink; 'next-auto' does not
  - Auto profiles pair each sink with the source on the same sound card

EXAMPLES:
  pap add Headset          Save current source/sink as \"Headset\"
  pap list --verbose       Show profiles with their devices
  pap next --notify        Switch profile, report via desktop notification

FILES:
  $XDG_DATA_HOME/pap/profiles.json (override with --profiles or PAP_PROFILES)

AUDIO SERVER:
  Uses pactl (PulseAudio or pipewire-pulse) for queries and changes.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Use desktop notifications instead of stdout
    #[arg(short, long, global = true)]
    pub notify: bool,

    /// Use verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profile file to use instead of the default location
    #[arg(long, global = true, env = "PAP_PROFILES", value_name = "PATH")]
    pub profiles: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save current source/sink pair as this profile name
    Add {
        /// Profile title
        title: String,
    },

    /// List profiles
    List,

    /// List auto profiles (sinks paired with sources on the same card)
    ListAuto,

    /// Show current profile
    Current,

    /// Switch to next profile
    Next,

    /// Switch to next auto profile
    NextAuto,

    /// Remove profile
    Remove {
        /// Profile title
        title: String,
    },
}
