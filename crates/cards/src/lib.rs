// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deckyard playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use deckyard_cards::{Card, Rank, Suit};
//! let card = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(card.to_string(), "Ace Spades");
//! ```
//!
//! a [Deck] type holding 52 cards under a name, and a [DeckCollection] to
//! manage decks by name:
//!
//! ```
//! # use deckyard_cards::{DeckCollection, Status};
//! let mut decks = DeckCollection::new();
//! decks.add_deck("red");
//! decks.add_deck("blue");
//!
//! assert_eq!(decks.shuffle_deck("red"), Status::Done);
//! assert_eq!(decks.remove_deck("green"), Status::NotFound);
//! assert_eq!(decks.names().collect::<Vec<_>>(), ["red", "blue"]);
//!
//! let blue = decks.deck("blue").unwrap();
//! assert_eq!(blue.to_string().lines().next(), Some("Two Diamonds"));
//! ```
//!
//! Shuffling uses a random generator owned by the collection, use a [Config]
//! with a seed or [DeckCollection::with_rng] for reproducible shuffles:
//!
//! ```
//! # use deckyard_cards::{Config, DeckCollection, ShuffleMethod};
//! let config = Config {
//!     shuffle: ShuffleMethod::Uniform,
//!     seed: Some(42),
//! };
//!
//! let mut d1 = DeckCollection::with_config(config);
//! let mut d2 = DeckCollection::with_config(config);
//! for decks in [&mut d1, &mut d2] {
//!     decks.add_deck("main");
//!     let _ = decks.shuffle_deck("main");
//! }
//!
//! assert_eq!(d1.deck("main").unwrap(), d2.deck("main").unwrap());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, ShuffleMethod, Suit};

mod collection;
pub use collection::{Config, DeckCollection, DeckError, Status};
