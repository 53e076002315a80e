//! Profiles derived from hardware grouping
//!
//! One profile per live sink, paired with the source on the same card.
//! These are built fresh per invocation and never saved.

use std::collections::HashMap;

use crate::error::Result;
use crate::profile::Profile;
use crate::pulse::{AudioServer, Sink, Source};

/// Pair every sink with the last-enumerated source sharing its card
///
/// Sinks without a card, or whose card has no source, get no source, so
/// activating them leaves the capture device alone. The title is the sink's
/// description. Output order follows the sink enumeration order.
#[must_use]
pub fn build(sources: &[Source], sinks: &[Sink]) -> Vec<Profile> {
    let mut by_card: HashMap<u32, &Source> = HashMap::with_capacity(sources.len());
    for source in sources {
        if let Some(card) = source.card {
            by_card.insert(card, source);
        }
    }

    sinks
        .iter()
        .map(|sink| Profile {
            title: sink.description.clone(),
            source: sink
                .card
                .and_then(|card| by_card.get(&card))
                .map(|source| source.to_ref()),
            sink: sink.to_ref(),
        })
        .collect()
}

/// Query the server and build auto profiles from its current devices
///
/// # Errors
/// Returns an error if sources or sinks cannot be listed.
pub fn load(server: &dyn AudioServer) -> Result<Vec<Profile>> {
    let sources = server.sources()?;
    let sinks = server.sinks()?;
    Ok(build(&sources, &sinks))
}
