//! Editor session for a single widget
//!
//! Owns the generated form, the state store and the preview frame. Every
//! write to the store produces a [`StateChanged`] event that is dispatched
//! back into the session, which updates the field's reset affordance and
//! recomputes the preview URL.

use tracing::debug;

use crate::catalog::Widget;
use crate::form::Form;
use crate::preview::PreviewFrame;
use crate::store::{StateChanged, StateStore};
use crate::url::{build_url, parse_query};

#[derive(Debug, Clone)]
pub struct EditorSession {
    origin: String,
    form: Form,
    store: StateStore,
    preview: PreviewFrame,
}

impl EditorSession {
    /// Synthesize the form, initialize the store to defaults and load the
    /// first preview.
    pub fn new(origin: &str, widget: &Widget) -> Self {
        let mut session = Self {
            origin: origin.to_string(),
            form: Form::synthesize(widget),
            store: StateStore::new(widget),
            preview: PreviewFrame::new(),
        };
        session.recompute();
        session
    }

    pub fn widget(&self) -> &Widget {
        self.store.widget()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn preview(&self) -> &PreviewFrame {
        &self.preview
    }

    /// User edit of a control.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(event) = self.store.set(name, value) {
            self.dispatch(event);
        }
    }

    /// Reset button of a field.
    pub fn reset(&mut self, name: &str) {
        if let Some(event) = self.store.reset(name) {
            self.dispatch(event);
        }
    }

    /// Apply the parameters of a shared or hand-edited URL query.
    pub fn apply_query(&mut self, query: &str) {
        for (name, value) in parse_query(query) {
            self.set(&name, &value);
        }
    }

    fn dispatch(&mut self, event: StateChanged) {
        debug!(
            "{}: {} = {:?} (overridden: {})",
            self.widget().name,
            event.name,
            event.value,
            event.overridden
        );
        self.form
            .update(&event.name, &event.value, event.overridden);
        self.recompute();
    }

    /// Canonical URL for the current state.
    pub fn url(&self) -> String {
        build_url(&self.origin, self.store.widget(), self.store.overrides())
    }

    /// Rebuild the preview URL; the frame only reloads when it changed.
    fn recompute(&mut self) {
        let url = self.url();
        if self.preview.navigate(url) {
            debug!("preview reloaded: {:?}", self.preview.src());
        }
    }
}
