// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deckyard CLI shell.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use deckyard_cards::{Config, DeckCollection, ShuffleMethod};

mod shell;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for shuffling, decks are shuffled with a random seed if not set.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Shuffle with the legacy swap algorithm.
    #[clap(long)]
    legacy_shuffle: bool,
    /// Read commands from a file instead of stdin.
    #[clap(long)]
    script: Option<PathBuf>,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        shuffle: if cli.legacy_shuffle {
            ShuffleMethod::Legacy
        } else {
            ShuffleMethod::Uniform
        },
        seed: cli.seed,
    };

    info!("Starting shell with {config:?}");
    let mut decks = DeckCollection::with_config(config);

    let stdout = io::stdout().lock();
    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Cannot open script {}", path.display()))?;
            shell::run(&mut decks, BufReader::new(file), stdout)
        }
        None => shell::run(&mut decks, io::stdin().lock(), stdout),
    }
}
