// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EndpointError {
    #[error("Missing ':' separator in endpoint: {0}")]
    MissingSeparator(String),
}

type EndpointResult<T> = Result<T, EndpointError>;

/// A `host:port` pair as given on the command line.
///
/// The port stays textual: nothing beyond the presence of a `:` is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
}

impl Endpoint {
    pub fn parse(input: &str) -> EndpointResult<Self> {
        match input.split_once(':') {
            Some((host, port)) => Ok(Self {
                host: host.to_string(),
                port: port.to_string(),
            }),
            None => Err(EndpointError::MissingSeparator(input.to_string())),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
