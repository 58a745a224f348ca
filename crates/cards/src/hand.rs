// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three cards hand.
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::Card;

/// Errors for hands that don't hold three distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand with a number of cards other than three.
    #[error("a hand needs exactly 3 cards, got {0}")]
    WrongCount(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {}", .0.symbol())]
    DuplicateCard(Card),
    /// A card identifier that doesn't name a card in the deck.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// Creates table for nck(n, k) for n <= 52 and k <= 3.
const fn make_nck() -> [[u32; 4]; 53] {
    let mut t = [[0u32; 4]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while n > 0 && k <= 3 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 4]; 53] = make_nck();

/// A Teen Patti hand, three distinct cards.
///
/// The cards are kept sorted by deck position so that two hands with the same
/// cards compare equal whatever the order the cards were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Vec<Card>")]
pub struct Hand([Card; 3]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 3;

    /// The number of distinct hands in a 52 cards deck.
    pub const COUNT: usize = NCKS[52][3] as usize;

    /// Creates a hand from three cards.
    pub fn new(mut cards: [Card; 3]) -> Result<Self, HandError> {
        cards.sort_unstable();

        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(HandError::DuplicateCard(w[0]));
        }

        Ok(Self(cards))
    }

    /// Parses a hand from a sequence of card identifiers.
    pub fn parse<I, S>(tokens: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cards.as_slice())
    }

    /// The hand cards sorted by deck position.
    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }

    /// The hand position in the combinatorial number system, `0 <= index < 22100`.
    ///
    /// Each hand maps to a distinct index and every index maps to a hand, see
    /// [Hand::from_index].
    pub fn index(&self) -> usize {
        let [c1, c2, c3] = self.0.map(|c| c.id() as usize);
        (NCKS[c1][1] + NCKS[c2][2] + NCKS[c3][3]) as usize
    }

    /// Returns the hand at the given combinatorial index.
    pub fn from_index(mut index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }

        // Greedy decoding, largest element first (see Knuth 4a 7.2.1.3).
        let mut ids = [0u8; 3];
        for k in (1..=3).rev() {
            let mut c = k - 1;
            while NCKS[c + 1][k] as usize <= index {
                c += 1;
            }

            index -= NCKS[c][k] as usize;
            ids[k - 1] = c as u8;
        }

        Self::new(ids.map(Card::from_id)).ok()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            &[c1, c2, c3] => Hand::new([c1, c2, c3]),
            _ => Err(HandError::WrongCount(cards.len())),
        }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses cards separated by whitespace or commas, `"A♠ K♠ Q♠"` or `"AS,KS,QS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty()),
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3] = self.0;
        write!(f, "{} {} {}", c1.symbol(), c2.symbol(), c3.symbol())
    }
}
