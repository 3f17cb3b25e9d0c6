//! Declarative option schema for a widget's configurable options.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::coercion::coerce_value;

/// Type of a configurable option.
///
/// Unknown type names coming from the catalog fall back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptionKind {
    #[default]
    Text,
    Color,
    Number,
    Toggle,
    Select,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Text => "text",
            OptionKind::Color => "color",
            OptionKind::Number => "number",
            OptionKind::Toggle => "toggle",
            OptionKind::Select => "select",
        }
    }
}

impl From<&str> for OptionKind {
    fn from(name: &str) -> Self {
        match name {
            "color" => OptionKind::Color,
            "number" => OptionKind::Number,
            "toggle" => OptionKind::Toggle,
            "select" => OptionKind::Select,
            _ => OptionKind::Text,
        }
    }
}

impl From<String> for OptionKind {
    fn from(name: String) -> Self {
        OptionKind::from(name.as_str())
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configurable option of a widget, as published by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSchema {
    #[serde(rename = "type", default)]
    pub kind: OptionKind,
    /// Default in the option's native JSON representation
    #[serde(default)]
    pub default: Value,
    #[serde(default)]
    pub description: String,
    /// Permitted values, in display order. Required for `select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("select option has no allowed values")]
    MissingAllowed,
    #[error("default {default:?} is not one of the allowed values")]
    DefaultNotAllowed { default: String },
}

impl OptionSchema {
    pub fn new(kind: OptionKind, default: impl Into<Value>) -> Self {
        Self {
            kind,
            default: default.into(),
            description: String::new(),
            allowed: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_allowed<S: Into<String>>(mut self, allowed: impl IntoIterator<Item = S>) -> Self {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Textual form of the default, as a form control would hold it.
    pub fn default_text(&self) -> String {
        match &self.default {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(true) if self.kind == OptionKind::Toggle => "1".to_string(),
            Value::Bool(false) if self.kind == OptionKind::Toggle => "0".to_string(),
            other => other.to_string(),
        }
    }

    /// Check that the coerced default is a member of `allowed`, when present.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let Some(allowed) = &self.allowed else {
            if self.kind == OptionKind::Select {
                return Err(SchemaError::MissingAllowed);
            }
            return Ok(());
        };

        let default = coerce_value(self.kind, &self.default);
        if allowed
            .iter()
            .any(|value| crate::coercion::coerce(self.kind, value) == default)
        {
            Ok(())
        } else {
            Err(SchemaError::DefaultNotAllowed {
                default: self.default_text(),
            })
        }
    }
}
