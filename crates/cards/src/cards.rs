// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards and named decks.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two = 0,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from lowest to highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };

        f.write_str(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + Clone {
        [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };

        f.write_str(suit)
    }
}

/// The algorithm used to shuffle a deck.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMethod {
    /// Unbiased Fisher-Yates shuffle.
    #[default]
    Uniform,
    /// Swaps every position with a position drawn from the whole deck.
    ///
    /// This does not produce uniformly distributed permutations, it is kept to
    /// reproduce orderings generated by older deck tools.
    Legacy,
}

/// A named deck of 52 cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck with cards sorted by rank then by suit.
    pub fn new(name: impl Into<String>) -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();

        Self {
            name: name.into(),
            cards,
        }
    }

    /// The deck name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cards in the deck, the first card is the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Iterates the cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffles the deck in place using the given method.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, method: ShuffleMethod) {
        match method {
            ShuffleMethod::Uniform => self.cards.shuffle(rng),
            ShuffleMethod::Legacy => {
                let len = self.cards.len();
                for i in 0..len {
                    let j = rng.random_range(0..len);
                    self.cards.swap(i, j);
                }
            }
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn assert_full_deck(deck: &Deck) {
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        for r in Rank::ranks() {
            for s in Suit::suits() {
                assert!(cards.contains(&Card::new(r, s)), "missing {r} {s}");
            }
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(c.to_string(), "Ace Spades");

        let c = Card::new(Rank::Two, Suit::Diamonds);
        assert_eq!(c.to_string(), "Two Diamonds");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Ten Hearts");

        let c = Card::new(Rank::Queen, Suit::Clubs);
        assert_eq!(c.to_string(), "Queen Clubs");
    }

    #[test]
    fn card_is_a_value() {
        let c1 = Card::new(Rank::King, Suit::Hearts);
        let c2 = c1;
        assert_eq!(c1, c2);
        assert_eq!(c2.rank(), Rank::King);
        assert_eq!(c2.suit(), Suit::Hearts);
        assert_ne!(c1, Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn rank_order() {
        let ranks = Rank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 13);
        assert_eq!(ranks[0], Rank::Two);
        assert_eq!(ranks[12], Rank::Ace);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn new_deck_canonical_order() {
        let deck = Deck::new("main");
        assert_eq!(deck.name(), "main");
        assert_full_deck(&deck);

        let cards = deck.cards();
        assert_eq!(cards[0], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(cards[1], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(cards[2], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(cards[3], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(cards[4], Card::new(Rank::Three, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn deck_to_string() {
        let text = Deck::new("main").to_string();
        assert!(text.ends_with('\n'));

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), Deck::SIZE);
        assert_eq!(lines[0], "Two Diamonds");
        assert_eq!(lines[1], "Two Hearts");
        assert_eq!(lines[51], "Ace Spades");

        let ranks = Rank::ranks().map(|r| r.to_string()).collect::<Vec<_>>();
        let suits = Suit::suits().map(|s| s.to_string()).collect::<Vec<_>>();
        for line in lines {
            let (rank, suit) = line.split_once(' ').unwrap();
            assert!(ranks.iter().any(|r| r == rank), "bad rank in {line}");
            assert!(suits.iter().any(|s| s == suit), "bad suit in {line}");
        }
    }

    #[test]
    fn shuffle_keeps_all_cards() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut deck = Deck::new("main");

        for _ in 0..20 {
            deck.shuffle(&mut rng, ShuffleMethod::Uniform);
            assert_full_deck(&deck);

            deck.shuffle(&mut rng, ShuffleMethod::Legacy);
            assert_full_deck(&deck);
        }

        assert_eq!(deck.name(), "main");
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut deck = Deck::new("uniform");
        deck.shuffle(&mut rng, ShuffleMethod::Uniform);
        assert_ne!(deck.cards(), Deck::new("uniform").cards());

        let mut deck = Deck::new("legacy");
        deck.shuffle(&mut rng, ShuffleMethod::Legacy);
        assert_ne!(deck.cards(), Deck::new("legacy").cards());
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        for method in [ShuffleMethod::Uniform, ShuffleMethod::Legacy] {
            let mut d1 = Deck::new("d");
            d1.shuffle(&mut StdRng::seed_from_u64(42), method);

            let mut d2 = Deck::new("d");
            d2.shuffle(&mut StdRng::seed_from_u64(42), method);

            assert_eq!(d1, d2);
        }
    }
}
