// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti hand ranking server.
//!
//! Serves a JSON API that ranks a 3-cards hand against all the hands that can
//! be dealt from a 52 cards deck:
//!
//! ```text
//! POST /api/rank {"hand": ["A♠", "A♥", "A♦"]}
//! {"ok":true,"stats":{"hand":["A♦","A♥","A♠"],"category":"Trail","rank":4,"total":22100,"better_percent":0.0135...}}
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod api;
pub mod server;
pub use server::{Config, routes, run};
