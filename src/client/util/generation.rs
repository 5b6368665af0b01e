//! Last-writer-wins bookkeeping for overlapping fetches.
//!
//! Every fetch takes a ticket from [`RequestGeneration::issue`] before it starts. When the
//! response arrives it is only applied if its ticket is still the latest one issued; responses
//! from fetches that were superseded in the meantime are dropped.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Starts a new fetch, superseding every earlier ticket.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// One [`RequestGeneration`] per key, so fetches for different keys never supersede
/// each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyedGeneration {
    generations: HashMap<String, RequestGeneration>,
}

impl KeyedGeneration {
    pub fn issue(&mut self, key: &str) -> u64 {
        self.generations.entry(key.to_string()).or_default().issue()
    }

    pub fn is_latest(&self, key: &str, ticket: u64) -> bool {
        self.generations
            .get(key)
            .is_some_and(|generation| generation.is_latest(ticket))
    }
}
