// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use crate::endpoint::{Endpoint, EndpointError};
use crate::node_id::{self, NodeId};
use rand::RngCore;

type RosterResult<T> = Result<T, EndpointError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub node_id: NodeId,
    pub endpoint: Endpoint,
}

/// Every node of one run, in the order the endpoints were given.
///
/// Identifiers are not checked for uniqueness.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<I, S, R>(endpoints: I, rng: &mut R) -> RosterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: RngCore + ?Sized,
    {
        let mut roster = Self::new();
        for raw in endpoints {
            let endpoint = Endpoint::parse(raw.as_ref())?;
            roster.push(node_id::generate_node_id(rng), endpoint);
        }
        Ok(roster)
    }

    pub fn push(&mut self, node_id: NodeId, endpoint: Endpoint) {
        self.entries.push(RosterEntry { node_id, endpoint });
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
