//! Offline cache interceptor.
//!
//! Every request goes to the network first. Successful responses are copied
//! into a named cache region; when the network fails the previously cached
//! response for the same request identity is served instead. Without one the
//! failure reaches the caller.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::fetch::{CachedResponse, FetchError, Fetcher, InterceptedRequest, RequestKey};

/// Name of the cache region used when none is configured.
pub const DEFAULT_CACHE_NAME: &str = "widgets-cache";

/// A named region of request/response pairs, shared by every clone.
///
/// Entries never expire; they are only replaced by a newer successful
/// response for the same key, or removed by the host.
#[derive(Clone)]
pub struct ResponseCache {
    name: String,
    entries: Arc<RwLock<HashMap<RequestKey, CachedResponse>>>,
}

impl ResponseCache {
    pub fn open(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn lookup(&self, key: &RequestKey) -> Option<CachedResponse> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn put(&self, key: RequestKey, response: CachedResponse) {
        self.entries.write().await.insert(key, response);
    }

    /// Evict one entry. Returns whether it existed.
    pub async fn delete(&self, key: &RequestKey) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Network-first interceptor with cache fallback.
#[derive(Clone)]
pub struct OfflineCache {
    cache: ResponseCache,
    network: Arc<dyn Fetcher>,
}

impl OfflineCache {
    /// Install and activate right away. There is no waiting period: every
    /// request handled through the returned interceptor is covered.
    pub fn install(cache: ResponseCache, network: Arc<dyn Fetcher>) -> Self {
        info!("offline cache active (region {})", cache.name());
        Self { cache, network }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Handle one intercepted request.
    pub async fn handle(
        &self,
        request: &InterceptedRequest,
    ) -> Result<CachedResponse, FetchError> {
        let key = request.key();
        let cached = self.cache.lookup(&key).await;

        let live = match self.network.fetch(request).await {
            Ok(response) if !response.is_success() => Err(FetchError::status(response.status)),
            other => other,
        };

        match live {
            Ok(response) => {
                // The cache region only stores GET requests.
                if request.is_get() {
                    debug!("caching {} {}", key.method, key.url);
                    self.cache.put(key, response.clone()).await;
                }
                Ok(response)
            }
            Err(e) => match cached {
                Some(response) => {
                    warn!("{} {} failed ({e}), serving cached response", key.method, key.url);
                    Ok(response)
                }
                None => {
                    warn!("{} {} failed with nothing cached: {e}", key.method, key.url);
                    Err(e)
                }
            },
        }
    }
}

#[async_trait]
impl Fetcher for OfflineCache {
    async fn fetch(&self, request: &InterceptedRequest) -> Result<CachedResponse, FetchError> {
        self.handle(request).await
    }
}
