//! Top-level state: catalog, navigation and the active editor session.

use std::sync::Arc;

use crate::catalog::{catalog_preview_url, Catalog, Widget};
use crate::editor::EditorSession;
use crate::navigation::{Navigator, Transition, View};

/// A catalog grid entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub preview_url: String,
    pub is_big: bool,
}

pub struct Studio {
    catalog: Arc<Catalog>,
    origin: String,
    navigator: Navigator,
    editor: Option<EditorSession>,
}

impl Studio {
    /// Start on whatever view the initial fragment selects.
    pub fn new(catalog: Arc<Catalog>, origin: &str, fragment: &str) -> Self {
        let navigator = Navigator::startup(&catalog, fragment);
        let mut studio = Self {
            catalog,
            origin: origin.trim_end_matches('/').to_string(),
            navigator,
            editor: None,
        };
        let view = studio.navigator.view().clone();
        studio.enter(&view);
        studio
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &View {
        self.navigator.view()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorSession> {
        self.editor.as_mut()
    }

    /// Entries shown by the catalog view
    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        self.catalog
            .widgets()
            .iter()
            .map(|widget: &Widget| CatalogEntry {
                name: widget.name.clone(),
                description: widget.description.clone(),
                preview_url: catalog_preview_url(&self.origin, widget),
                is_big: widget.is_big,
            })
            .collect()
    }

    pub fn activate(&mut self, name: &str) -> Option<Transition> {
        let transition = self.navigator.activate(&self.catalog, name)?;
        self.enter(&transition.view);
        Some(transition)
    }

    pub fn home(&mut self) -> Transition {
        let transition = self.navigator.home();
        self.enter(&transition.view);
        transition
    }

    pub fn pop_state(&mut self, fragment: &str) -> Transition {
        let transition = self.navigator.pop_state(&self.catalog, fragment);
        self.enter(&transition.view);
        transition
    }

    pub fn back(&mut self) -> Option<Transition> {
        let transition = self.navigator.back(&self.catalog)?;
        self.enter(&transition.view);
        Some(transition)
    }

    pub fn forward(&mut self) -> Option<Transition> {
        let transition = self.navigator.forward(&self.catalog)?;
        self.enter(&transition.view);
        Some(transition)
    }

    /// Entering an editor always starts a fresh session at the defaults.
    fn enter(&mut self, view: &View) {
        self.editor = match view {
            View::Catalog => None,
            View::Editor(name) => self
                .catalog
                .find(name)
                .map(|widget| EditorSession::new(&self.origin, widget)),
        };
    }
}
