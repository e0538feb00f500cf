//! Load generations and load status of remote catalogue data

use thiserror::Error;

/// Identifies one load request; only the newest ticket may deliver data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Hands out tickets and rejects results from superseded loads
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    generation: u64,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every earlier ticket
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Failure to read a catalogue collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load {collection}: {message}")]
pub struct LoadError {
    pub collection: String,
    pub message: String,
}

impl LoadError {
    pub fn new(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            message: message.into(),
        }
    }

    /// Text shown to visitors
    pub fn user_message(&self) -> &'static str {
        "The catalogue is temporarily unavailable. Please try again shortly."
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(LoadError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
