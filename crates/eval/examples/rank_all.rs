// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_all
// ...
// Total hands      22100
// Elapsed:         0.004s
//
// Trail:           52
// Pure Sequence:   48
// Sequence:        720
// Color:           1096
// Pair:            3744
// High Card:       16440
// ```

use std::time::Instant;

use teenpatti_eval::*;

fn main() -> Result<(), CatalogError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    // Build the catalog of all 22100 hands.
    let now = Instant::now();
    let catalog = Catalog::build()?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Total hands      {}", catalog.len());
    println!("Elapsed:         {:.3}s\n", elapsed);

    for (category, count) in catalog.category_counts() {
        println!("{:<17}{count}", format!("{category}:"));
    }

    // The first hand of each category.
    println!();
    let mut rank = 1;
    for (category, count) in catalog.category_counts() {
        if let Some(entry) = catalog.entry(rank) {
            println!("{:<17}{} (rank {rank})", format!("{category}:"), entry.hand());
        }
        rank += count;
    }

    Ok(())
}
