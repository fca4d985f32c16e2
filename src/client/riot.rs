//! Endpoint wrappers for the proxied game-data API.
//!
//! Every wrapper formats one resource path and enqueues a single GET on the
//! shared [`RateLimitedScheduler`], so call sites anywhere in the host
//! application can fire requests without coordinating: ordering and quota
//! admission happen in the scheduler, result decoding in the transport.

use std::sync::Arc;

use serde_json::Value;

use crate::client::regions::{Platform, Region};
use crate::client::transport::{HttpTransport, Transport};
use crate::config::RateLimitConfig;
use crate::core::{ApiError, RateLimitedScheduler};
use crate::runtime::TokioSpawner;

/// Throttled client for the proxied game-data API.
///
/// Holds the base URL of the reverse proxy that relays (and edge-caches)
/// upstream calls, a [`Transport`], and one scheduler instance shared by all
/// wrappers. Clones share the scheduler, so a cloned client stays inside the
/// same quota.
pub struct RiotClient<T = HttpTransport> {
    transport: Arc<T>,
    base_url: String,
    scheduler: RateLimitedScheduler<TokioSpawner>,
}

impl<T> Clone for RiotClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl RiotClient<HttpTransport> {
    /// Build a client against `base_url` with the API key taken from the
    /// environment and default rate limits.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn from_env(base_url: impl Into<String>) -> Self {
        Self::new(
            HttpTransport::from_env(),
            base_url,
            &RateLimitConfig::default(),
        )
    }
}

impl<T: Transport> RiotClient<T> {
    /// Build a client from a transport, proxy base URL, and rate limits.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn new(transport: T, base_url: impl Into<String>, limits: &RateLimitConfig) -> Self {
        let base_url = base_url.into();
        Self {
            transport: Arc::new(transport),
            base_url: base_url.trim_end_matches('/').to_owned(),
            scheduler: RateLimitedScheduler::new(limits, TokioSpawner::current()),
        }
    }

    /// Tasks currently waiting behind the quota windows.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.scheduler.queue_depth()
    }

    /// Enqueue one GET for `path` below the proxy base URL.
    async fn throttled_get(&self, path: String) -> Result<Value, ApiError> {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "scheduling request");
        let transport = Arc::clone(&self.transport);
        self.scheduler
            .enqueue(move || async move { transport.get(&url).await })
            .await
    }

    /// Account lookup by riot id (`gameName#tagLine`).
    pub async fn account_by_riot_id(
        &self,
        platform: Platform,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Value, ApiError> {
        self.throttled_get(format!("account/{platform}/{game_name}/{tag_line}"))
            .await
    }

    /// Reverse account lookup by puuid, used when expanding leaderboard
    /// entries into riot ids.
    pub async fn account_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> Result<Value, ApiError> {
        self.throttled_get(format!("account/by-puuid/{platform}/{puuid}"))
            .await
    }

    /// Summoner profile by puuid.
    pub async fn summoner_by_puuid(&self, region: Region, puuid: &str) -> Result<Value, ApiError> {
        self.throttled_get(format!("summoner/{region}/{puuid}")).await
    }

    /// Ranked queue entries for a summoner.
    pub async fn ranked_entries(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Value, ApiError> {
        self.throttled_get(format!("ranked/{region}/{summoner_id}"))
            .await
    }

    /// Match id list for a puuid, paged by `start`/`count`.
    pub async fn match_ids(
        &self,
        platform: Platform,
        puuid: &str,
        start: usize,
        count: usize,
    ) -> Result<Value, ApiError> {
        self.throttled_get(format!(
            "matches/{platform}/{puuid}?start={start}&count={count}"
        ))
        .await
    }

    /// Full detail for one match.
    pub async fn match_detail(&self, platform: Platform, match_id: &str) -> Result<Value, ApiError> {
        self.throttled_get(format!("match/{platform}/{match_id}"))
            .await
    }

    /// Active game for a summoner, if one is in progress.
    pub async fn active_game(&self, region: Region, puuid: &str) -> Result<Value, ApiError> {
        self.throttled_get(format!(
            "spectator/active-games/by-summoner/{region}/{puuid}"
        ))
        .await
    }

    /// Static champion data by numeric champion id.
    pub async fn champion_by_id(&self, champion_id: u32) -> Result<Value, ApiError> {
        self.throttled_get(format!("champion/{champion_id}")).await
    }
}
