// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Request and response types for the JSON API.
use log::debug;
use serde::{Deserialize, Serialize};
use warp::{
    http::StatusCode,
    reply::{self, Reply, Response},
};

use teenpatti_eval::{Card, Catalog, Deck, Hand, RankResult, Suit};

/// Health check body.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `ok` for a serving process.
    pub status: &'static str,
}

/// Cards of one suit.
#[derive(Debug, Serialize)]
pub struct SuitCards {
    /// The suit symbol.
    pub suit: char,
    /// The suit cards from deuce to ace.
    pub cards: Vec<Card>,
}

/// The deck grouped by suit.
#[derive(Debug, Serialize)]
pub struct DeckCards {
    /// Spades, hearts, diamonds, and clubs.
    pub suits: Vec<SuitCards>,
}

impl DeckCards {
    /// Groups the deck cards by suit in display order.
    pub fn new() -> Self {
        let suits = Suit::suits()
            .rev()
            .map(|suit| SuitCards {
                suit: suit.symbol(),
                cards: Deck::default()
                    .into_iter()
                    .filter(|c| c.suit() == suit)
                    .collect(),
            })
            .collect();

        Self { suits }
    }
}

impl Default for DeckCards {
    fn default() -> Self {
        Self::new()
    }
}

/// A rank request, the hand cards as identifiers like `A♠` or `AS`.
#[derive(Debug, Default, Deserialize)]
pub struct RankRequest {
    /// The hand card identifiers.
    #[serde(default)]
    pub hand: Vec<String>,
}

/// The stats for a ranked hand.
#[derive(Debug, Serialize)]
pub struct HandStats {
    /// The hand cards.
    pub hand: Hand,
    /// The hand rank.
    #[serde(flatten)]
    pub result: RankResult,
}

/// A rank response.
#[derive(Debug, Serialize)]
pub struct RankResponse {
    /// True if the hand was ranked.
    pub ok: bool,
    /// The stats for a ranked hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<HandStats>,
    /// The error for a rejected request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RankResponse {
    fn ranked(stats: HandStats) -> Self {
        Self {
            ok: true,
            stats: Some(stats),
            error: None,
        }
    }

    fn rejected(error: String) -> Self {
        Self {
            ok: false,
            stats: None,
            error: Some(error),
        }
    }
}

/// Ranks the hand in a JSON request body.
///
/// Bodies that are not a rank request or that don't hold three distinct cards
/// get a bad request response.
pub fn rank_hand(catalog: &Catalog, body: &[u8]) -> Response {
    let req = match serde_json::from_slice::<RankRequest>(body) {
        Ok(req) => req,
        Err(e) => return bad_request(format!("invalid request: {e}")),
    };

    match Hand::parse(&req.hand) {
        Ok(hand) => {
            let stats = HandStats {
                hand,
                result: catalog.rank(&hand),
            };

            debug!(
                "Ranked {} {} {}/{}",
                stats.hand, stats.result.category, stats.result.rank, stats.result.total
            );

            reply::json(&RankResponse::ranked(stats)).into_response()
        }
        Err(e) => bad_request(e.to_string()),
    }
}

pub(crate) fn bad_request(error: String) -> Response {
    debug!("Rejected rank request: {error}");
    reply::with_status(
        reply::json(&RankResponse::rejected(error)),
        StatusCode::BAD_REQUEST,
    )
    .into_response()
}
