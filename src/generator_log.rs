// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use crate::cluster::RosterEntry;
use std::path::Path;
use tracing::{debug, info};

pub fn log_removed_stale(path: &Path) {
    debug!("Removed stale {}", path.display());
}

pub fn log_roster_entry(idx: usize, entry: &RosterEntry) {
    debug!("node{} {} -> {}", idx, entry.endpoint, entry.node_id);
}

pub fn log_node_file_written(path: &Path) {
    info!("Wrote {}", path.display());
}

pub fn log_summary(removed: usize, written: usize) {
    info!("Removed {} stale files, wrote {} node files", removed, written);
}
