// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Line oriented shell over a deck collection.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

use deckyard_cards::{DeckCollection, Status};

/// A shell input line.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// Shell commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new sorted deck.
    Add {
        /// The deck name.
        name: String,
    },
    /// Remove the first deck with the given name.
    Remove {
        /// The deck name.
        name: String,
    },
    /// Shuffle the first deck with the given name.
    Shuffle {
        /// The deck name.
        name: String,
    },
    /// Print the cards of a deck.
    Show {
        /// The deck name.
        name: String,
    },
    /// Print the decks names.
    List,
    /// Exit the shell.
    #[command(alias = "exit")]
    Quit,
}

/// Runs the shell reading commands from `input` until the end of input or a
/// quit command.
pub fn run<R, I, W>(decks: &mut DeckCollection<R>, input: I, mut output: W) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let args = line.split_whitespace().collect::<Vec<_>>();
        if args.is_empty() {
            continue;
        }

        let command = match Line::try_parse_from(args) {
            Ok(line) => line.command,
            Err(e) => {
                write!(output, "{e}")?;
                continue;
            }
        };

        if !execute(decks, command, &mut output)? {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Executes a command, returns false if the shell should stop.
fn execute<R, W>(decks: &mut DeckCollection<R>, command: Command, output: &mut W) -> Result<bool>
where
    R: Rng,
    W: Write,
{
    match command {
        Command::Add { name } => decks.add_deck(name),
        Command::Remove { name } => match decks.remove_deck(&name) {
            Status::Done => writeln!(output, "removed {name}")?,
            Status::NotFound => writeln!(output, "unknown deck {name}")?,
        },
        Command::Shuffle { name } => match decks.shuffle_deck(&name) {
            Status::Done => writeln!(output, "shuffled {name}")?,
            Status::NotFound => writeln!(output, "unknown deck {name}")?,
        },
        Command::Show { name } => match decks.deck(&name) {
            Ok(deck) => write!(output, "{deck}")?,
            Err(e) => writeln!(output, "{e}")?,
        },
        Command::List => {
            for name in decks.names() {
                writeln!(output, "{name}")?;
            }
        }
        Command::Quit => {
            info!("Quit with {} decks", decks.len());
            return Ok(false);
        }
    }

    Ok(true)
}
