// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use teenpatti_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let tc: Card = "10♣".parse().unwrap();
//! assert_eq!(tc, Card::new(Rank::Ten, Suit::Clubs));
//! ```
//!
//! a [Deck] type for sampling and iterating 3 cards draws from the deck, and
//! a [Hand] type that holds three distinct cards.
//!
//! For example to iterate through all 3 cards hands:
//!
//! ```
//! # use teenpatti_cards::{Deck, Hand};
//! // Iterate through all 3 cards hands (22100 hands).
//! let mut counter = 0;
//! Deck::default().for_each(|cards| {
//!     let hand = Hand::try_from(cards).unwrap();
//!     assert!(hand.index() < Hand::COUNT);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! Hands parse from card identifiers and reject anything that is not three
//! distinct cards:
//!
//! ```
//! # use teenpatti_cards::{Hand, HandError};
//! let hand: Hand = "A♠ K♠ Q♠".parse().unwrap();
//! assert_eq!("AS AS KD".parse::<Hand>().unwrap_err().to_string(), "duplicate card A♠");
//! assert_eq!("AS KD".parse::<Hand>(), Err(HandError::WrongCount(2)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod hand;
pub use hand::{Hand, HandError};
