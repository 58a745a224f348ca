// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text reports for ranked hands.
use std::time::Duration;

use teenpatti_eval::{Catalog, Hand, RankResult};

/// The hands shown by the `samples` command.
pub const SAMPLE_HANDS: [[&str; 3]; 5] = [
    ["A♠", "K♠", "Q♠"],
    ["A♠", "A♥", "A♦"],
    ["2♣", "3♣", "4♣"],
    ["10♣", "10♦", "3♠"],
    ["K♠", "Q♥", "9♦"],
];

/// Formats a ranked hand on one line.
pub fn hand_line(hand: &Hand, res: &RankResult) -> String {
    format!(
        "{hand} -> {}, Rank {} of {} (Top {:.3}% have better hands)",
        res.category, res.rank, res.total, res.better_percent
    )
}

/// Formats the catalog category counts with the best hand of each category.
pub fn stats_lines(catalog: &Catalog, elapsed: Duration) -> Vec<String> {
    let mut lines = vec![
        format!("Total hands      {}", catalog.len()),
        format!("Elapsed:         {:.3}s", elapsed.as_secs_f64()),
        String::new(),
    ];

    let mut rank = 1;
    for (category, count) in catalog.category_counts() {
        let best = catalog
            .entry(rank)
            .map(|e| e.hand().to_string())
            .unwrap_or_default();

        lines.push(format!(
            "{:<15}{count:>6}  {:>7.3}%  best {best}",
            category.name(),
            100.0 * count as f64 / catalog.len() as f64
        ));

        rank += count;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hands_parse() {
        for cards in SAMPLE_HANDS {
            assert!(Hand::parse(cards).is_ok(), "{cards:?}");
        }
    }

    #[test]
    fn format_hand_line() {
        let catalog = Catalog::global().unwrap();
        let hand = Hand::parse(["A♣", "A♦", "A♥"]).unwrap();
        let res = catalog.rank(&hand);
        assert_eq!(res.rank, 1);
        assert_eq!(
            hand_line(&hand, &res),
            "A♣ A♦ A♥ -> Trail, Rank 1 of 22100 (Top 0.000% have better hands)"
        );
    }

    #[test]
    fn format_stats() {
        let catalog = Catalog::global().unwrap();
        let lines = stats_lines(catalog, Duration::from_millis(4));
        assert_eq!(lines[0], "Total hands      22100");
        assert_eq!(lines[1], "Elapsed:         0.004s");
        assert_eq!(lines.len(), 3 + 6);
        assert!(lines[3].starts_with("Trail              52"));
        assert!(lines[3].ends_with("best A♣ A♦ A♥"));
        assert!(lines[8].starts_with("High Card       16440"));
    }
}
