// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Instant;

use teenpatti_eval::{Catalog, Deck, Hand};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a hand, for example `rank A♠ K♠ Q♠` or `rank AS KS QS`.
    Rank {
        /// The hand cards.
        #[clap(num_args = 1.., required = true)]
        cards: Vec<String>,
    },
    /// Rank a few sample hands.
    Samples,
    /// Show the number of hands in each category.
    Stats,
    /// Rank random hands.
    Random {
        /// The number of hands to deal.
        #[clap(long, short, default_value_t = 5)]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let now = Instant::now();
    let catalog = Catalog::global()?;
    let elapsed = now.elapsed();

    match cli.command {
        Command::Rank { cards } => {
            let hand = Hand::parse(&cards)?;
            println!("{}", report::hand_line(&hand, &catalog.rank(&hand)));
        }
        Command::Samples => {
            for cards in report::SAMPLE_HANDS {
                let hand = Hand::parse(cards)?;
                println!("{}", report::hand_line(&hand, &catalog.rank(&hand)));
            }
        }
        Command::Stats => {
            for line in report::stats_lines(catalog, elapsed) {
                println!("{line}");
            }
        }
        Command::Random { count } => {
            let mut hands = Vec::with_capacity(count);
            Deck::default().sample(&mut rand::rng(), count, |cards| {
                hands.push(Hand::try_from(cards));
            });

            for hand in hands {
                let hand = hand?;
                println!("{}", report::hand_line(&hand, &catalog.rank(&hand)));
            }
        }
    }

    Ok(())
}
