// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A registry of named decks.
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Deck, ShuffleMethod};

/// Errors returned by deck lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No deck with the given name.
    #[error("Unknown name {0}")]
    UnknownName(String),
}

/// Outcome of an operation that targets a deck by name.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation was applied to the deck.
    Done,
    /// No deck with the given name.
    NotFound,
}

impl Status {
    /// Returns true if the operation was applied.
    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }

    /// The integer status code, 0 on success and -1 if the deck was not found.
    pub fn code(&self) -> i32 {
        match self {
            Status::Done => 0,
            Status::NotFound => -1,
        }
    }
}

/// Collection config.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The algorithm used when shuffling decks.
    pub shuffle: ShuffleMethod,
    /// Seed for the random generator, if None the generator is seeded from
    /// the operating system.
    pub seed: Option<u64>,
}

/// A collection of named decks.
///
/// Decks are kept in insertion order and names don't need to be unique,
/// operations that take a name act on the first deck with that name.
#[derive(Debug)]
pub struct DeckCollection<R = StdRng> {
    decks: Vec<Deck>,
    rng: R,
    method: ShuffleMethod,
}

impl DeckCollection<StdRng> {
    /// Creates an empty collection with the default config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty collection with the given config.
    pub fn with_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(rng, config.shuffle)
    }
}

impl Default for DeckCollection<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DeckCollection<R> {
    /// Creates an empty collection that shuffles with the given generator.
    pub fn with_rng(rng: R, method: ShuffleMethod) -> Self {
        Self {
            decks: Vec::new(),
            rng,
            method,
        }
    }

    /// Adds a new sorted deck at the end of the collection.
    pub fn add_deck(&mut self, name: impl Into<String>) {
        let deck = Deck::new(name);
        debug!("Added deck {}", deck.name());
        self.decks.push(deck);
    }

    /// Gets the first deck with the given name.
    pub fn deck(&self, name: &str) -> Result<&Deck, DeckError> {
        self.decks
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| DeckError::UnknownName(name.to_string()))
    }

    /// Gets the first deck with the given name for update.
    pub fn deck_mut(&mut self, name: &str) -> Result<&mut Deck, DeckError> {
        self.decks
            .iter_mut()
            .find(|d| d.name() == name)
            .ok_or_else(|| DeckError::UnknownName(name.to_string()))
    }

    /// Removes the first deck with the given name.
    pub fn remove_deck(&mut self, name: &str) -> Status {
        match self.position(name) {
            Some(idx) => {
                self.decks.remove(idx);
                debug!("Removed deck {name}");
                Status::Done
            }
            None => Status::NotFound,
        }
    }

    /// Shuffles the first deck with the given name.
    pub fn shuffle_deck(&mut self, name: &str) -> Status {
        match self.position(name) {
            Some(idx) => {
                self.decks[idx].shuffle(&mut self.rng, self.method);
                debug!("Shuffled deck {name} using {:?}", self.method);
                Status::Done
            }
            None => Status::NotFound,
        }
    }

    /// Iterates the decks names in collection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decks.iter().map(|d| d.name())
    }

    /// Iterates the decks in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    /// Number of decks in the collection.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Checks if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// The shuffle method used by this collection.
    pub fn shuffle_method(&self) -> ShuffleMethod {
        self.method
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.decks.iter().position(|d| d.name() == name)
    }
}
