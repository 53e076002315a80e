//! Outcome reporting
//!
//! A command ends with exactly one message, success or failure. It goes to
//! stdout, or to a desktop notification when `--notify` is set.

use notify_rust::Notification;

use crate::config::Config;
use crate::error::{PapError, Result};

/// Something that can show the user a one-line outcome
pub trait Notifier {
    /// # Errors
    /// Returns [`PapError::Notification`] if the message cannot be delivered.
    fn notify(&self, message: &str) -> Result<()>;
}

/// Print the message on its own line
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}

/// Send the message through the desktop notification daemon
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        Notification::new()
            .summary(message)
            .appname("pap")
            .icon(icon_for(message))
            .timeout(3000)
            .show()
            .map_err(|e| PapError::Notification(e.to_string()))?;

        Ok(())
    }
}

/// Pick the notifier the configuration asks for
#[must_use]
pub fn for_config(config: &Config) -> Box<dyn Notifier> {
    if config.notify {
        Box::new(DesktopNotifier)
    } else {
        Box::new(StdoutNotifier)
    }
}

/// `FreeDesktop` icon name guessed from the message text
fn icon_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    if lower.contains("hdmi") || lower.contains("display") || lower.contains("tv") {
        "video-display"
    } else if lower.contains("headphone")
        || lower.contains("headset")
        || lower.contains("bluetooth")
    {
        "audio-headphones"
    } else {
        "audio-card"
    }
}
