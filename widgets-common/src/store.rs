//! In-memory option state for the widget being configured.

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::Widget;
use crate::coercion::is_default;

/// Emitted by the store after every accepted write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChanged {
    pub name: String,
    pub value: String,
    /// Whether the new value differs from the option's default
    pub overridden: bool,
}

/// Option name to current textual value.
///
/// Keys are always exactly the widget's option keys. Values are stored
/// verbatim; coercion only happens when comparing against defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StateStore {
    widget: Widget,
    values: BTreeMap<String, String>,
}

impl StateStore {
    /// A store holding every option at its default.
    pub fn new(widget: &Widget) -> Self {
        let values = widget
            .options
            .iter()
            .map(|(name, option)| (name.clone(), option.default_text()))
            .collect();

        Self {
            widget: widget.clone(),
            values,
        }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Store `value` for `name`. Names the widget does not declare are ignored.
    pub fn set(&mut self, name: &str, value: &str) -> Option<StateChanged> {
        let Some(option) = self.widget.option(name) else {
            debug!("ignoring unknown option {name} for widget {}", self.widget.name);
            return None;
        };
        let overridden = !is_default(option, value);

        self.values.insert(name.to_string(), value.to_string());

        Some(StateChanged {
            name: name.to_string(),
            value: value.to_string(),
            overridden,
        })
    }

    /// Restore an option to its schema default.
    pub fn reset(&mut self, name: &str) -> Option<StateChanged> {
        let default = self.widget.option(name)?.default_text();
        self.set(name, &default)
    }

    /// Options whose value is non-empty and differs from the default, in key order.
    pub fn overrides(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter(|(name, value)| {
                !value.is_empty()
                    && self
                        .widget
                        .option(name)
                        .is_some_and(|option| !is_default(option, value))
            })
            .collect()
    }
}
