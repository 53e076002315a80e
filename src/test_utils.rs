//! Shared test fixtures: an in-memory audio server that records mutations.

use std::cell::{Cell, RefCell};

use crate::error::{PapError, Result};
use crate::profile::{DeviceRef, Profile, ServerSnapshot};
use crate::pulse::{AudioServer, Sink, SinkInput, Source};

/// A mutation the code under test asked the server to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    SetDefaultSource(String),
    SetDefaultSink(String),
    UnmuteSource(String),
    MoveSinkInput { input: u32, sink: u32 },
}

#[derive(Debug, Default)]
pub(crate) struct FakeServer {
    pub snapshot: ServerSnapshot,
    pub sources: Vec<Source>,
    pub sinks: Vec<Sink>,
    pub inputs: Vec<SinkInput>,
    /// Make every call fail as if the server were unreachable
    pub offline: bool,
    /// Make `move_sink_input` fail
    pub reject_moves: bool,
    pub calls: RefCell<Vec<Call>>,
    /// How many times sources and sinks were listed
    pub source_lists: Cell<usize>,
    pub sink_lists: Cell<usize>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, source: &str, sink: &str) -> Self {
        self.snapshot = ServerSnapshot {
            default_source_name: source.to_string(),
            default_sink_name: sink.to_string(),
        };
        self
    }

    pub fn with_source(mut self, name: &str, card: Option<u32>, muted: bool) -> Self {
        self.sources.push(Source {
            name: name.to_string(),
            description: format!("{name} desc"),
            card,
            muted,
        });
        self
    }

    pub fn with_sink(mut self, index: u32, name: &str, card: Option<u32>) -> Self {
        self.sinks.push(Sink {
            index,
            name: name.to_string(),
            description: format!("{name} desc"),
            card,
        });
        self
    }

    pub fn with_input(mut self, index: u32, sink: u32) -> Self {
        self.inputs.push(SinkInput { index, sink });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline {
            return Err(PapError::Connectivity(
                "Failed to get client: connection refused".to_string(),
            ));
        }
        Ok(())
    }

    fn record(&self, call: Call) -> Result<()> {
        self.check_online()?;
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl AudioServer for FakeServer {
    fn server_info(&self) -> Result<ServerSnapshot> {
        self.check_online()?;
        Ok(self.snapshot.clone())
    }

    fn sources(&self) -> Result<Vec<Source>> {
        self.check_online()?;
        self.source_lists.set(self.source_lists.get() + 1);
        Ok(self.sources.clone())
    }

    fn sinks(&self) -> Result<Vec<Sink>> {
        self.check_online()?;
        self.sink_lists.set(self.sink_lists.get() + 1);
        Ok(self.sinks.clone())
    }

    fn set_default_source(&self, name: &str) -> Result<()> {
        self.record(Call::SetDefaultSource(name.to_string()))
    }

    fn set_default_sink(&self, name: &str) -> Result<()> {
        self.record(Call::SetDefaultSink(name.to_string()))
    }

    fn unmute_source(&self, name: &str) -> Result<()> {
        self.record(Call::UnmuteSource(name.to_string()))
    }

    fn sink_inputs(&self) -> Result<Vec<SinkInput>> {
        self.check_online()?;
        Ok(self.inputs.clone())
    }

    fn move_sink_input(&self, input: u32, sink: u32) -> Result<()> {
        if self.reject_moves {
            return Err(PapError::Connectivity(format!(
                "Failed to move sink input {input}"
            )));
        }
        self.record(Call::MoveSinkInput { input, sink })
    }
}

/// Profile whose device descriptions mirror [`FakeServer`]'s
pub(crate) fn profile(title: &str, source: Option<&str>, sink: &str) -> Profile {
    Profile {
        title: title.to_string(),
        source: source.map(|s| DeviceRef::new(s, format!("{s} desc"))),
        sink: DeviceRef::new(sink, format!("{sink} desc")),
    }
}
