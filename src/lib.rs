//! # Riftline
//!
//! Rate-limited request scheduling core for League of Legends stat trackers.
//!
//! This library gates outbound calls to the (proxied) Riot game-data API
//! behind the two request caps the upstream imposes: a short burst allowance
//! and a longer sustained allowance. Instead of rejecting or racing calls, it
//! queues them and drains the queue strictly first-in-first-out, so dozens of
//! independent views can fire requests at once and every one of them
//! eventually completes.
//!
//! ## Core Problem Solved
//!
//! Stat tracker pages fan out aggressively: one profile render asks for the
//! account, the summoner, ranked entries, a match id page, and a detail call
//! per match. Fired naively those calls trip the upstream limiter and start
//! failing with 429s in arbitrary order. The scheduler here serializes them:
//!
//! - **Dual fixed windows**: 20 requests per second *and* 100 per two
//!   minutes must both have headroom before a request is admitted
//! - **Strict FIFO**: start order equals enqueue order; execution is
//!   serialized, so completion order matches, too
//! - **Isolated outcomes**: each caller awaits its own future; one failed
//!   call never disturbs the rest of the queue
//! - **Failures are charged**: a rejected call still hit the upstream, so it
//!   still counts against both windows
//!
//! ## Example
//!
//! ```rust,ignore
//! use riftline::client::{Region, RiotClient};
//!
//! let client = RiotClient::from_env("https://lol-proxy.example.workers.dev");
//! let summoner = client.summoner_by_puuid(Region::Euw1, &puuid).await?;
//! ```
//!
//! The scheduler is also usable on its own for any throttled work:
//!
//! ```rust,ignore
//! use riftline::config::RateLimitConfig;
//! use riftline::core::RateLimitedScheduler;
//! use riftline::runtime::TokioSpawner;
//!
//! let scheduler = RateLimitedScheduler::new(&RateLimitConfig::default(), TokioSpawner::current());
//! let value = scheduler.enqueue(|| async { expensive_call().await }).await;
//! ```
//!
//! For complete examples, see `tests/scheduler_test.rs` and
//! `tests/client_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and quota accounting.
pub mod core;
/// Configuration models for rate limits.
pub mod config;
/// Endpoint wrappers and the HTTP collaborator seam.
pub mod client;
/// Runtime adapters.
pub mod runtime;
/// Shared utilities.
pub mod util;
