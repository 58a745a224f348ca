// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti hand classifier.
//!
//! A hand falls into one of six categories, from strongest to weakest:
//!
//! | category      | rule                        | tie-break                  |
//! |---------------|-----------------------------|----------------------------|
//! | Trail         | three cards of one rank     | the rank                   |
//! | Pure Sequence | run of three, one suit      | the run top                |
//! | Sequence      | run of three, mixed suits   | the run top                |
//! | Color         | one suit, not a run         | ranks high to low          |
//! | Pair          | two cards of one rank       | pair rank, then kicker     |
//! | High Card     | none of the above           | ranks high to low          |
//!
//! Runs include the wheel A-2-3 that is the lowest run, below 2-3-4, while
//! Q-K-A is the highest.
//!
//! [HandValue::eval] packs the category and its tie-break into a single integer
//! so that two hands compare with a single integer comparison.
use serde::{Deserialize, Serialize};
use std::fmt;

use teenpatti_cards::{Hand, Rank};

/// A hand category, categories compare weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category applies.
    #[serde(rename = "High Card")]
    HighCard = 0,
    /// Exactly two cards share a rank.
    #[serde(rename = "Pair")]
    Pair,
    /// Three cards of one suit, not a run.
    #[serde(rename = "Color")]
    Color,
    /// A run of three cards of mixed suits.
    #[serde(rename = "Sequence")]
    Sequence,
    /// A run of three cards of one suit.
    #[serde(rename = "Pure Sequence")]
    PureSequence,
    /// Three cards of one rank.
    #[serde(rename = "Trail")]
    Trail,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 6;

    const ALL: [Category; Self::COUNT] = [
        Category::HighCard,
        Category::Pair,
        Category::Color,
        Category::Sequence,
        Category::PureSequence,
        Category::Trail,
    ];

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        Self::ALL.into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::Color => "Color",
            Category::Sequence => "Sequence",
            Category::PureSequence => "Pure Sequence",
            Category::Trail => "Trail",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand value, a higher value beats a lower value.
///
/// The value packs the category and the tie-break ranks:
///
/// ```text
///   +--------+--------+
///   |ccccaaaa|bbbbdddd|
///   +--------+--------+
///   c = category (high card=0, pair=1, ..., trail=5)
///   a, b, d = tie-break ranks (deuce=0, ..., ace=12), zero when unused
/// ```
///
/// Hands with equal values tie under Teen Patti rules, for example two Color
/// hands with the same ranks in different suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u16);

impl HandValue {
    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        let cards = hand.cards();
        let suited = cards.iter().all(|c| c.suit() == cards[0].suit());

        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let [hi, mid, lo] = ranks;

        if hi == lo {
            return Self::new(Category::Trail, [hi as u16, 0, 0]);
        }

        if let Some(top) = run_top(hi, mid, lo) {
            let category = if suited {
                Category::PureSequence
            } else {
                Category::Sequence
            };

            return Self::new(category, [top as u16, 0, 0]);
        }

        let ranks = [hi as u16, mid as u16, lo as u16];
        if suited {
            return Self::new(Category::Color, ranks);
        }

        if hi == mid {
            Self::new(Category::Pair, [hi as u16, lo as u16, 0])
        } else if mid == lo {
            Self::new(Category::Pair, [mid as u16, hi as u16, 0])
        } else {
            Self::new(Category::HighCard, ranks)
        }
    }

    fn new(category: Category, [a, b, d]: [u16; 3]) -> Self {
        Self(((category as u16) << 12) | (a << 8) | (b << 4) | d)
    }

    /// Returns the hand category.
    pub fn category(&self) -> Category {
        Category::ALL[(self.0 >> 12) as usize]
    }

    /// The packed value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", self.category(), self.0)
    }
}

/// Classifies a hand returning its category and value.
pub fn classify(hand: &Hand) -> (Category, HandValue) {
    let value = HandValue::eval(hand);
    (value.category(), value)
}

/// Returns the top of a run for ranks sorted high to low.
///
/// The wheel A-2-3 tops at the trey so that it sorts below 2-3-4.
fn run_top(hi: Rank, mid: Rank, lo: Rank) -> Option<Rank> {
    if hi as u8 == mid as u8 + 1 && mid as u8 == lo as u8 + 1 {
        Some(hi)
    } else if (hi, mid, lo) == (Rank::Ace, Rank::Trey, Rank::Deuce) {
        Some(Rank::Trey)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teenpatti_cards::Deck;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn value(s: &str) -> HandValue {
        HandValue::eval(&hand(s))
    }

    #[test]
    fn category_counts() {
        let mut counts = [0usize; Category::COUNT];
        Deck::default().for_each(|cards| {
            let hand = Hand::try_from(cards).unwrap();
            let (category, value) = classify(&hand);
            assert_eq!(category, value.category());
            counts[category as usize] += 1;
        });

        assert_eq!(counts[Category::Trail as usize], 52);
        assert_eq!(counts[Category::PureSequence as usize], 48);
        assert_eq!(counts[Category::Sequence as usize], 720);
        assert_eq!(counts[Category::Color as usize], 1_096);
        assert_eq!(counts[Category::Pair as usize], 3_744);
        assert_eq!(counts[Category::HighCard as usize], 16_440);
        assert_eq!(counts.iter().sum::<usize>(), Hand::COUNT);
    }

    #[test]
    fn trail() {
        let v = value("A♠ A♥ A♦");
        assert_eq!(v.category(), Category::Trail);
        assert_eq!(v.value() >> 8 & 0xf, Rank::Ace as u16);

        assert!(value("AS AH AD") > value("KS KH KD"));
        assert!(value("2S 2H 2D") > value("QS KS AS"));
    }

    #[test]
    fn sequences() {
        assert_eq!(value("10♣ J♣ Q♣").category(), Category::PureSequence);
        assert_eq!(value("10♣ J♦ Q♠").category(), Category::Sequence);
        assert!(value("10♣ J♣ Q♣") > value("10♣ J♦ Q♠"));

        // The lowest pure sequence beats the highest sequence.
        assert!(value("AC 2C 3C") > value("QS KH AD"));

        // Q-K-A is the highest run.
        assert!(value("QS KH AD") > value("JS QH KD"));
        assert!(value("QS KS AS") > value("JS QS KS"));

        // Runs don't wrap around the ace.
        assert_eq!(value("KS AH 2D").category(), Category::HighCard);
        assert_eq!(value("KS AS 2S").category(), Category::Color);
    }

    #[test]
    fn wheel() {
        let wheel = value("A♠ 2♥ 3♦");
        assert_eq!(wheel.category(), Category::Sequence);
        assert!(wheel < value("2♠ 3♥ 4♦"));
        assert!(wheel > value("AH KH JH"));
        assert!(wheel > value("AS AH KD"));

        let wheel = value("A♠ 2♠ 3♠");
        assert_eq!(wheel.category(), Category::PureSequence);
        assert!(wheel < value("2♠ 3♠ 4♠"));
        assert_eq!(wheel, value("AH 2H 3H"));
    }

    #[test]
    fn color() {
        assert_eq!(value("2H 7H KH").category(), Category::Color);
        assert!(value("KH 9H 4H") > value("KS 9S 3S"));
        assert!(value("AH 4H 2H") > value("KH QH 9H"));
        assert_eq!(value("KH 9H 4H"), value("KD 9D 4D"));

        // The weakest color beats the strongest pair.
        assert!(value("2H 3H 5H") > value("AS AH KD"));
    }

    #[test]
    fn pair() {
        let v = value("7♠ 7♦ 2♣");
        assert_eq!(v.category(), Category::Pair);
        assert_eq!(v.value() >> 8 & 0xf, Rank::Seven as u16);
        assert_eq!(v.value() >> 4 & 0xf, Rank::Deuce as u16);

        // The pair rank dominates the kicker.
        assert!(value("8S 8D 2C") > value("7S 7D AC"));
        assert!(value("7S 7D AC") > value("7H 7C KC"));
        assert_eq!(value("7S 7D AC"), value("7H 7C AD"));

        // Kicker above or below the pair.
        assert!(value("2S 2D AC") > value("2H 2C KC"));
        assert!(value("AS AD 3C") > value("AH AC 2C"));
    }

    #[test]
    fn high_card() {
        assert_eq!(value("2S 5D 9C").category(), Category::HighCard);
        assert!(value("AS 4D 2C") > value("KS QD 10C"));
        assert!(value("KS QD 10C") > value("KS QD 9C"));

        // The weakest pair beats the strongest high card.
        assert!(value("2S 2D 3C") > value("AS KD JC"));
    }

    #[test]
    fn category_order() {
        let hands = [
            "AS 2D 4C", "2S 2D 3C", "2S 3S 5S", "AS 2D 3C", "AS 2S 3S", "2S 2D 2C",
        ];

        for (category, h) in Category::categories().zip(hands) {
            assert_eq!(value(h).category(), category, "{h}");
        }

        for w in hands.windows(2) {
            assert!(value(w[0]) < value(w[1]), "{} < {}", w[0], w[1]);
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::PureSequence.to_string(), "Pure Sequence");
        assert_eq!(
            serde_json::to_string(&Category::HighCard).unwrap(),
            "\"High Card\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"Trail\"").unwrap(),
            Category::Trail
        );
        assert_eq!(value("AS AH AD").to_string(), "Trail (0x5c00)");
    }
}
