// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Teen Patti server entry point.
use anyhow::{Result, anyhow};
use futures_util::{Stream, StreamExt};
use log::{error, info};
use std::{future::Future, io, net::SocketAddr, pin::pin, sync::Arc};
use tokio::{signal, task};
use warp::{
    Buf, Filter, Rejection,
    filters::BoxedFilter,
    reject::{self, Reject},
    reply::{self, Reply, Response},
};

use teenpatti_eval::Catalog;

use crate::api::{self, DeckCards, Health};

/// Maximum size of a rank request body.
const MAX_BODY_SIZE: u64 = 4 * 1024;

/// Networking config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
}

/// Server entry point.
///
/// Builds the hands catalog before binding the listener, a catalog that fails
/// to build stops the server before it accepts any request.
pub async fn run(config: Config) -> Result<()> {
    let catalog = task::spawn_blocking(Catalog::build)
        .await?
        .map_err(|e| anyhow!("Catalog build error: {e}"))?;
    let catalog = Arc::new(catalog);

    let addr = format!("{}:{}", config.address, config.port)
        .parse::<SocketAddr>()
        .map_err(|e| anyhow!("Invalid listening address: {e}"))?;

    let (addr, server) = warp::serve(routes(catalog))
        .try_bind_with_graceful_shutdown(addr, shutdown(signal::ctrl_c()))
        .map_err(|e| anyhow!("Http listener bind error: {e}"))?;

    info!("Starting server listening on {}", addr);
    server.await;

    Ok(())
}

/// The server routes.
pub fn routes(catalog: Arc<Catalog>) -> BoxedFilter<(Response,)> {
    let health = warp::path("health")
        .and(warp::get())
        .and(warp::path::end())
        .map(|| reply::json(&Health { status: "ok" }).into_response());

    let deck = warp::path!("api" / "deck")
        .and(warp::get())
        .map(|| reply::json(&DeckCards::new()).into_response());

    let rank = warp::path!("api" / "rank")
        .and(warp::post())
        .and(warp::body::stream())
        .and_then(|stream| read_body(stream))
        .and(with_catalog(catalog))
        .map(|body: Vec<u8>, catalog: Arc<Catalog>| api::rank_hand(&catalog, &body))
        .recover(body_rejection)
        .unify();

    health.or(deck).unify().or(rank).unify().boxed()
}

/// Waits for the shutdown signal.
///
/// If the signal handler cannot be installed the server keeps running.
async fn shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received shutdown signal..."),
        Err(e) => {
            error!("Shutdown signal error: {e}");
            std::future::pending::<()>().await;
        }
    }
}

/// A request body larger than [MAX_BODY_SIZE].
#[derive(Debug)]
struct BodyTooLarge;

impl Reject for BodyTooLarge {}

/// A request body that failed to read.
#[derive(Debug)]
struct BodyError(String);

impl Reject for BodyError {}

/// Reads a request body, with or without a content length, up to [MAX_BODY_SIZE].
async fn read_body<S, B>(stream: S) -> Result<Vec<u8>, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    let mut stream = pin!(stream);
    let mut body = Vec::new();

    while let Some(chunk) = stream.next().await {
        let mut chunk = chunk.map_err(|e| reject::custom(BodyError(e.to_string())))?;
        if body.len() + chunk.remaining() > MAX_BODY_SIZE as usize {
            return Err(reject::custom(BodyTooLarge));
        }

        while chunk.has_remaining() {
            let bytes = chunk.chunk();
            let len = bytes.len();
            body.extend_from_slice(bytes);
            chunk.advance(len);
        }
    }

    Ok(body)
}

async fn body_rejection(err: Rejection) -> Result<Response, Rejection> {
    if err.find::<BodyTooLarge>().is_some() {
        Ok(api::bad_request(format!(
            "request body larger than {MAX_BODY_SIZE} bytes"
        )))
    } else if let Some(BodyError(e)) = err.find::<BodyError>() {
        Ok(api::bad_request(format!("invalid request body: {e}")))
    } else {
        Err(err)
    }
}

fn with_catalog(
    catalog: Arc<Catalog>,
) -> impl Filter<Extract = (Arc<Catalog>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || catalog.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tokio::time::timeout;
    use warp::{http::StatusCode, hyper::body::Bytes};

    fn test_routes() -> BoxedFilter<(Response,)> {
        let catalog = Catalog::build().unwrap();
        routes(Arc::new(catalog))
    }

    #[tokio::test]
    async fn health() {
        let res = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&test_routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn deck() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/deck")
            .reply(&test_routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        let suits = body["suits"].as_array().unwrap();
        assert_eq!(suits.len(), 4);
        assert_eq!(suits[0]["suit"], "♠");
        assert_eq!(suits[0]["cards"].as_array().unwrap().len(), 13);
    }

    #[tokio::test]
    async fn rank_hand() {
        let routes = test_routes();

        let res = warp::test::request()
            .method("POST")
            .path("/api/rank")
            .json(&json!({ "hand": ["7♠", "7♦", "2♣"] }))
            .reply(&routes)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["stats"]["category"], "Pair");
        assert_eq!(body["stats"]["total"], 22_100);

        // Stronger categories sit above the pair.
        let rank = body["stats"]["rank"].as_u64().unwrap();
        assert!(rank > 52 + 48 + 720 + 1_096);
        let better = body["stats"]["better_percent"].as_f64().unwrap();
        assert_eq!(better, 100.0 * (rank - 1) as f64 / 22_100.0);
    }

    #[tokio::test]
    async fn rank_rejects_malformed_hand() {
        let routes = test_routes();

        let res = warp::test::request()
            .method("POST")
            .path("/api/rank")
            .json(&json!({ "hand": ["7♠", "7♦"] }))
            .reply(&routes)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "a hand needs exactly 3 cards, got 2");

        let res = warp::test::request()
            .method("POST")
            .path("/api/rank")
            .body("{\"hand\": 42}")
            .reply(&routes)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rank_rejects_large_body() {
        let hand = format!("{:width$}", "7♠", width = MAX_BODY_SIZE as usize);
        let res = warp::test::request()
            .method("POST")
            .path("/api/rank")
            .json(&json!({ "hand": [hand, "7♦", "2♣"] }))
            .reply(&test_routes())
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "request body larger than 4096 bytes");
    }

    #[tokio::test]
    async fn read_chunked_body() {
        let chunks = ["{\"hand\": [\"7♠\",", " \"7♦\", \"2♣\"]}"]
            .map(|c| Ok::<_, warp::Error>(Bytes::from(c)));
        let body = read_body(stream::iter(chunks)).await.unwrap();

        let catalog = Catalog::global().unwrap();
        let res = api::rank_hand(catalog, &body);
        assert_eq!(res.status(), StatusCode::OK);

        // The limit holds without a content length.
        let chunks = (0..=MAX_BODY_SIZE / 64)
            .map(|_| Ok::<_, warp::Error>(Bytes::from(vec![b' '; 64])));
        let err = read_body(stream::iter(chunks)).await.unwrap_err();
        assert!(err.find::<BodyTooLarge>().is_some());
    }

    #[tokio::test]
    async fn shutdown_signal() {
        // Resolves on the signal.
        let res = timeout(Duration::from_secs(1), shutdown(async { Ok(()) })).await;
        assert!(res.is_ok());

        // Keeps serving when the signal handler fails.
        let failed = shutdown(async { Err(io::Error::other("no signal handler")) });
        let res = timeout(Duration::from_millis(50), failed).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn unknown_route() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/stats")
            .reply(&test_routes())
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
