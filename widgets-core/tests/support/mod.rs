use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use widgets_core::{CachedResponse, FetchError, Fetcher, InterceptedRequest};

/// A network that answers from a script, one entry per request.
/// Runs out to a network error.
#[derive(Default)]
pub struct ScriptedNetwork {
    script: Mutex<VecDeque<Result<CachedResponse, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedNetwork {
    pub fn new(script: Vec<Result<CachedResponse, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for ScriptedNetwork {
    async fn fetch(&self, _request: &InterceptedRequest) -> Result<CachedResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("offline".into())))
    }
}

pub fn offline() -> Result<CachedResponse, FetchError> {
    Err(FetchError::Network("connection refused".into()))
}

pub fn ok(body: &str) -> Result<CachedResponse, FetchError> {
    Ok(CachedResponse::new(200, body).with_header("content-type", "text/html"))
}
