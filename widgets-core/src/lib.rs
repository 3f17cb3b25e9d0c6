//! Async collaborators of the widget studio: catalog endpoint, clipboard
//! export and the offline cache interceptor.

pub mod catalog_client;
pub mod export;
pub mod fetch;
pub mod offline_cache;

pub use catalog_client::{CatalogClient, CatalogError, CATALOG_PATH};
pub use export::{Clipboard, ClipboardError, ExportButton, ExportOutcome, COPIED_INDICATOR};
pub use fetch::{CachedResponse, FetchError, Fetcher, HttpFetcher, InterceptedRequest, RequestKey};
pub use offline_cache::{OfflineCache, ResponseCache, DEFAULT_CACHE_NAME};
