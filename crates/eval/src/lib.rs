// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti hand evaluator.
//!
//! Classifies 3-cards hands into Teen Patti categories and ranks a hand against
//! all the 22100 hands that can be dealt from a 52 cards deck.
//!
//! To compare two hands use [HandValue] to evaluate each hand:
//!
//! ```
//! # use teenpatti_eval::*;
//! let trail = HandValue::eval(&"2♠ 2♥ 2♦".parse().unwrap());
//! let pure = HandValue::eval(&"Q♠ K♠ A♠".parse().unwrap());
//! assert_eq!(trail.category(), Category::Trail);
//! assert!(trail > pure);
//! ```
//!
//! and to rank a hand against all hands use the [Catalog]:
//!
//! ```
//! # use teenpatti_eval::*;
//! let catalog = Catalog::build().unwrap();
//! let stats = catalog.rank(&"7♠ 7♦ 2♣".parse().unwrap());
//! assert_eq!(stats.category, Category::Pair);
//! assert!(stats.better_percent > 0.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod catalog;
pub use catalog::{Catalog, CatalogError, Entry, RankResult};

pub mod eval;
pub use eval::{Category, HandValue, classify};

// Reexport cards types.
pub use teenpatti_cards::{Card, Deck, Hand, HandError, Rank, Suit};
