// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

pub mod cluster;
pub mod config;
pub mod endpoint;
pub mod generator;
mod generator_log;
pub mod node_file;
pub mod node_id;

pub use cluster::{Roster, RosterEntry};
pub use config::{ConfigError, GeneratorSettings};
pub use endpoint::{Endpoint, EndpointError};
pub use generator::{GeneratorError, clear_stale_configs, generate, write_node_files};
pub use node_file::{NodeFile, NodeFileError, NodeLine};
pub use node_id::{NodeId, generate_node_id};
