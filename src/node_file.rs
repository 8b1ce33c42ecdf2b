// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use crate::cluster::Roster;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum NodeFileError {
    #[error("Syntax error, line {line}: {reason}")]
    Syntax { line: usize, reason: String },
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

type NodeFileResult<T> = Result<T, NodeFileError>;

pub const SELF_FLAG: &str = "1";
pub const PEER_FLAG: &str = "0";

pub fn header(idx: usize) -> String {
    format!("# node{} configuration file\n", idx)
}

/// Full contents of the file owned by the node at position `idx`.
pub fn render(roster: &Roster, idx: usize) -> String {
    let mut content = header(idx);
    for (count, entry) in roster.iter().enumerate() {
        let flag = if count == idx { SELF_FLAG } else { PEER_FLAG };
        content.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            entry.endpoint.host, entry.endpoint.port, entry.node_id, flag
        ));
    }
    content
}

/// Appends to `path`, creating it if needed.
pub fn write(path: &Path, roster: &Roster, idx: usize) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(render(roster, idx).as_bytes())?;
    file.flush()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLine {
    pub host: String,
    pub port: String,
    pub node_id: String,
    pub is_self: bool,
}

/// A node configuration file read back from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFile {
    pub lines: Vec<NodeLine>,
}

impl NodeFile {
    pub fn parse(content: &str) -> NodeFileResult<Self> {
        let mut lines = Vec::new();
        for (number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                return Err(NodeFileError::Syntax {
                    line: number + 1,
                    reason: format!("expected 4 fields, found {}", fields.len()),
                });
            }

            let flag: i64 = fields[3].parse().map_err(|_| NodeFileError::Syntax {
                line: number + 1,
                reason: format!("invalid self flag: {}", fields[3]),
            })?;

            lines.push(NodeLine {
                host: fields[0].to_string(),
                port: fields[1].to_string(),
                node_id: fields[2].to_string(),
                is_self: flag == 1,
            });
        }
        Ok(Self { lines })
    }

    pub fn read(path: &Path) -> NodeFileResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn self_entry(&self) -> Option<&NodeLine> {
        self.lines.iter().find(|line| line.is_self)
    }
}
