//! Active profile resolution
//!
//! A profile is active when its sink is the default sink and its source,
//! if it has one, is the default source. When several profiles match, the
//! first in title order wins, both for display and as the cycling start.

use crate::profile::{Profile, ServerSnapshot};

/// Index of the first profile matching the server's defaults
#[must_use]
pub fn active_index(profiles: &[Profile], snapshot: &ServerSnapshot) -> Option<usize> {
    profiles.iter().position(|p| p.matches(snapshot))
}

/// The first profile matching the server's defaults
#[must_use]
pub fn current<'a>(profiles: &'a [Profile], snapshot: &ServerSnapshot) -> Option<&'a Profile> {
    active_index(profiles, snapshot).map(|i| &profiles[i])
}

/// Where cycling starts from
///
/// The active profile's index, or the last slot when nothing matches so
/// that the first advance lands on index 0. `None` for an empty list.
#[must_use]
pub fn cycle_start(profiles: &[Profile], snapshot: &ServerSnapshot) -> Option<CycleStart> {
    if profiles.is_empty() {
        return None;
    }
    Some(match active_index(profiles, snapshot) {
        Some(index) => CycleStart::Active(index),
        None => CycleStart::Unmatched(profiles.len() - 1),
    })
}

/// Starting cursor for the cycler, tagged with whether it is a real match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStart {
    /// A profile currently matches; it is not a candidate itself
    Active(usize),
    /// Nothing matches; every profile is a candidate
    Unmatched(usize),
}

impl CycleStart {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            CycleStart::Active(i) | CycleStart::Unmatched(i) => i,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::profile;
    use pretty_assertions::assert_eq;

    fn snapshot(source: &str, sink: &str) -> ServerSnapshot {
        ServerSnapshot {
            default_source_name: source.to_string(),
            default_sink_name: sink.to_string(),
        }
    }

    #[test]
    fn test_current_is_first_match() {
        let profiles = vec![
            profile("A-Call", Some("mic0"), "headset"),
            profile("B-Any", None, "headset"),
            profile("C-Music", None, "speakers"),
        ];
        let snap = snapshot("mic0", "headset");

        assert_eq!(current(&profiles, &snap).unwrap().title, "A-Call");
        assert_eq!(cycle_start(&profiles, &snap), Some(CycleStart::Active(0)));
    }

    #[test]
    fn test_no_match() {
        let profiles = vec![
            profile("Call", Some("mic0"), "headset"),
            profile("Music", None, "speakers"),
        ];
        let snap = snapshot("usb-mic", "hdmi");

        assert!(current(&profiles, &snap).is_none());
        assert_eq!(cycle_start(&profiles, &snap), Some(CycleStart::Unmatched(1)));
    }

    #[test]
    fn test_cycle_start_empty() {
        assert_eq!(cycle_start(&[], &snapshot("a", "b")), None);
    }

    #[test]
    fn test_sourceless_profile_matches_any_source() {
        let profiles = vec![profile("Music", None, "speakers")];
        let snap = snapshot("whatever", "speakers");
        assert_eq!(active_index(&profiles, &snap), Some(0));
    }
}
