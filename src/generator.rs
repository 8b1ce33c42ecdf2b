// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use crate::cluster::Roster;
use crate::config::GeneratorSettings;
use crate::endpoint::EndpointError;
use crate::generator_log::{log_node_file_written, log_removed_stale, log_roster_entry, log_summary};
use crate::node_file;
use rand::RngCore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

type GeneratorResult<T> = Result<T, GeneratorError>;

fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> GeneratorError {
    let path = path.into();
    move |source| GeneratorError::Io { path, source }
}

/// Deletes every `*.<extension>` file in the output directory.
pub fn clear_stale_configs(settings: &GeneratorSettings) -> GeneratorResult<Vec<PathBuf>> {
    let dir = &settings.output_dir;
    let mut removed = Vec::new();

    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(io_error(&path))?;
        if file_type.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !settings.is_stale_config(&name) {
            continue;
        }

        fs::remove_file(&path).map_err(io_error(&path))?;
        log_removed_stale(&path);
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}

/// Writes one file per roster entry, returning the paths in roster order.
pub fn write_node_files(
    settings: &GeneratorSettings,
    roster: &Roster,
) -> GeneratorResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(roster.len());
    for idx in 0..roster.len() {
        let path = settings.node_file_path(idx);
        node_file::write(&path, roster, idx).map_err(io_error(&path))?;
        log_node_file_written(&path);
        written.push(path);
    }
    Ok(written)
}

/// The whole pass: clear stale files, assign identifiers, write node files.
pub fn generate<I, S, R>(
    settings: &GeneratorSettings,
    endpoints: I,
    rng: &mut R,
) -> GeneratorResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: RngCore + ?Sized,
{
    let removed = clear_stale_configs(settings)?;

    let roster = Roster::build(endpoints, rng)?;
    for (idx, entry) in roster.iter().enumerate() {
        log_roster_entry(idx, entry);
    }

    let written = write_node_files(settings, &roster)?;
    log_summary(removed.len(), written.len());
    Ok(written)
}
