//! Loads the widget catalog from `<origin>/widgets.json`.

use std::sync::Arc;

use tracing::{info, warn};
use widgets_common::Catalog;

use crate::fetch::{FetchError, Fetcher, InterceptedRequest};

/// Path of the catalog endpoint relative to the origin.
pub const CATALOG_PATH: &str = "/widgets.json";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("fetch catalog: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the catalog endpoint. The catalog is fetched once per session.
pub struct CatalogClient {
    origin: String,
    fetcher: Arc<dyn Fetcher>,
}

impl CatalogClient {
    pub fn new(origin: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn catalog_url(&self) -> String {
        format!("{}{CATALOG_PATH}", self.origin)
    }

    /// Fetch and parse the widget list. Errors are not recovered.
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let request =
            InterceptedRequest::get(&self.catalog_url()).with_header("accept", "application/json");
        let response = self.fetcher.fetch(&request).await?;
        let catalog = Catalog::from_json(&response.body)?;

        let violations = catalog.validate();
        if violations > 0 {
            warn!("catalog has {violations} schema violations");
        }
        info!("loaded {} widgets from {}", catalog.len(), self.origin);

        Ok(catalog)
    }
}
