// Copyright (c) 2025, TheByteSlayer, Confgen
// Per-node cluster configuration generator, written in Rust

use confgen::{GeneratorSettings, generate};
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let endpoints: Vec<String> = std::env::args().skip(1).collect();
    let settings = GeneratorSettings::default();

    generate(&settings, &endpoints, &mut rand::thread_rng())?;
    Ok(())
}
