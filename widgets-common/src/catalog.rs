//! Read-only widget catalog, fetched once and injected wherever it is needed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::schema::{OptionSchema, SchemaError};
use crate::url::build_raw_url;

/// Accent color passed to every catalog preview.
pub const CATALOG_PREVIEW_COLOR: &str = "#cad3f5";

/// An embeddable widget with its configurable options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Options keyed by name. Iteration order is sorted by option name.
    #[serde(default)]
    pub options: BTreeMap<String, OptionSchema>,
    /// Display hint for the catalog grid
    #[serde(default)]
    pub is_big: bool,
}

impl Widget {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            options: BTreeMap::new(),
            is_big: false,
        }
    }

    pub fn with_option(mut self, name: &str, option: OptionSchema) -> Self {
        self.options.insert(name.to_string(), option);
        self
    }

    pub fn option(&self, name: &str) -> Option<&OptionSchema> {
        self.options.get(name)
    }

    /// Validate every option, returning the offending option names.
    pub fn validate(&self) -> Vec<(String, SchemaError)> {
        self.options
            .iter()
            .filter_map(|(name, option)| option.validate().err().map(|e| (name.clone(), e)))
            .collect()
    }
}

/// The full widget list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    widgets: Vec<Widget>,
}

impl Catalog {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }

    /// Parse the catalog endpoint's JSON array.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let widgets: Vec<Widget> = serde_json::from_slice(bytes)?;
        Ok(Self::new(widgets))
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.name == name)
    }

    /// Log every schema violation. The catalog is trusted, so violations are
    /// reported but never rejected.
    pub fn validate(&self) -> usize {
        let mut violations = 0;
        for widget in &self.widgets {
            for (option, err) in widget.validate() {
                warn!("widget {}: option {option}: {err}", widget.name);
                violations += 1;
            }
        }
        violations
    }
}

/// Preview URL used by the catalog grid. The accent color is always passed
/// explicitly, without comparing it to the widget's default.
pub fn catalog_preview_url(origin: &str, widget: &Widget) -> String {
    build_raw_url(origin, &widget.name, &[("color", CATALOG_PREVIEW_COLOR)])
}
