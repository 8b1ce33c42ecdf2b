// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use rand::RngCore;
use std::fmt;
use uuid::{Builder, Uuid};

pub const NODE_ID_LENGTH: usize = 32;

/// Random 128-bit node identifier, shown as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

pub fn generate_node_id<R: RngCore + ?Sized>(rng: &mut R) -> NodeId {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    NodeId(Builder::from_random_bytes(bytes).into_uuid())
}
