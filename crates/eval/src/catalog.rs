// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Catalog of all Teen Patti hands sorted by strength.
//!
//! The catalog enumerates the 22100 3-cards hands once, sorts them from the
//! strongest to the weakest, and maps each hand to its position so that a hand
//! rank is a table lookup:
//!
//! ```
//! # use teenpatti_eval::*;
//! let catalog = Catalog::global().unwrap();
//! let stats = catalog.rank(&"A♠ A♥ A♦".parse().unwrap());
//! assert_eq!(stats.category, Category::Trail);
//! assert!(stats.rank <= 4);
//! assert_eq!(stats.total, 22_100);
//! ```
use log::info;
use serde::Serialize;
use std::{sync::OnceLock, time::Instant};
use thiserror::Error;

use teenpatti_cards::{Deck, Hand, HandError};

use crate::eval::{Category, HandValue};

/// Errors from building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog breaks one of its invariants and must not serve lookups.
    #[error("unsound catalog: {0}")]
    Unsound(String),
}

impl From<HandError> for CatalogError {
    fn from(e: HandError) -> Self {
        CatalogError::Unsound(format!("invalid hand during enumeration: {e}"))
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    hand: Hand,
    value: HandValue,
}

impl Entry {
    /// The entry hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.value.category()
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }
}

/// The position of a hand among all hands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankResult {
    /// The hand category.
    pub category: Category,
    /// The hand position from 1 for the strongest to 22100 for the weakest.
    pub rank: usize,
    /// The number of hands.
    pub total: usize,
    /// The percentage of hands strictly better than this hand.
    pub better_percent: f64,
}

/// All hands sorted from the strongest to the weakest.
#[derive(Debug)]
pub struct Catalog {
    /// The sorted entries.
    entries: Vec<Entry>,
    /// Position in entries indexed by [Hand::index].
    positions: Vec<u16>,
}

impl Catalog {
    /// Builds the catalog.
    ///
    /// Hands with the same value are ordered by their [Hand::index] so that
    /// every build assigns the same rank to the same hand.
    pub fn build() -> Result<Self, CatalogError> {
        let now = Instant::now();

        let mut entries = Vec::with_capacity(Hand::COUNT);
        let mut invalid = None;
        Deck::default().for_each(|cards| match Hand::try_from(cards) {
            Ok(hand) => entries.push(Entry {
                hand,
                value: HandValue::eval(&hand),
            }),
            Err(e) => {
                invalid.get_or_insert(e);
            }
        });

        if let Some(e) = invalid {
            return Err(e.into());
        }

        entries.sort_unstable_by(|a, b| {
            b.value
                .cmp(&a.value)
                .then_with(|| a.hand.index().cmp(&b.hand.index()))
        });

        let positions = Self::positions(&entries)?;
        let catalog = Self { entries, positions };

        info!(
            "Catalog built with {} hands in {:.3}ms",
            catalog.len(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        Ok(catalog)
    }

    /// Checks the sorted entries and maps each hand to its position.
    fn positions(entries: &[Entry]) -> Result<Vec<u16>, CatalogError> {
        if entries.len() != Hand::COUNT {
            return Err(CatalogError::Unsound(format!(
                "expected {} hands, got {}",
                Hand::COUNT,
                entries.len()
            )));
        }

        if let Some(w) = entries.windows(2).find(|w| w[0].value < w[1].value) {
            return Err(CatalogError::Unsound(format!(
                "{} sorted before stronger {}",
                w[0].hand, w[1].hand
            )));
        }

        let mut positions = vec![u16::MAX; Hand::COUNT];
        for (pos, entry) in entries.iter().enumerate() {
            let slot = positions.get_mut(entry.hand.index()).ok_or_else(|| {
                CatalogError::Unsound(format!("hand {} index out of range", entry.hand))
            })?;

            if *slot != u16::MAX {
                return Err(CatalogError::Unsound(format!(
                    "duplicate hand {}",
                    entry.hand
                )));
            }

            *slot = pos as u16;
        }

        Ok(positions)
    }

    /// Returns a catalog shared by the whole process.
    ///
    /// The first call builds the catalog, the following calls return the same
    /// instance. Callers racing on the first call all see a complete catalog.
    pub fn global() -> Result<&'static Catalog, CatalogError> {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();

        if let Some(catalog) = CATALOG.get() {
            return Ok(catalog);
        }

        let catalog = Catalog::build()?;
        Ok(CATALOG.get_or_init(|| catalog))
    }

    /// Returns the rank of a hand.
    pub fn rank(&self, hand: &Hand) -> RankResult {
        let pos = self.positions[hand.index()] as usize;
        let rank = pos + 1;
        let total = self.entries.len();

        RankResult {
            category: self.entries[pos].category(),
            rank,
            total,
            better_percent: 100.0 * (rank - 1) as f64 / total as f64,
        }
    }

    /// Returns the entry at a 1-based rank.
    pub fn entry(&self, rank: usize) -> Option<&Entry> {
        rank.checked_sub(1).and_then(|pos| self.entries.get(pos))
    }

    /// Iterates entries from the strongest to the weakest.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.entries.iter()
    }

    /// The number of hands in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the catalog is empty, never true for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of hands per category from the strongest category.
    pub fn category_counts(&self) -> [(Category, usize); Category::COUNT] {
        let mut counts = [0usize; Category::COUNT];
        for entry in &self.entries {
            counts[entry.category() as usize] += 1;
        }

        let mut out = [(Category::HighCard, 0); Category::COUNT];
        for (slot, category) in out.iter_mut().zip(Category::categories().rev()) {
            *slot = (category, counts[category as usize]);
        }

        out
    }
}
