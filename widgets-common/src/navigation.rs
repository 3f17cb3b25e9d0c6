//! Fragment-identifier navigation between the catalog and a widget editor.

use tracing::debug;

use crate::catalog::Catalog;

/// The active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Catalog,
    /// Editor for the named widget
    Editor(String),
}

/// How a transition changed the fragment identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentChange {
    None,
    /// A new history entry with this fragment
    Push(String),
    /// The current history entry's fragment was replaced with an empty one
    Clear,
}

/// Result of a navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub view: View,
    pub fragment: FragmentChange,
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Two-state navigation controller with its own session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    view: View,
    entries: Vec<String>,
    cursor: usize,
}

impl Navigator {
    /// Resolve the fragment present at startup.
    pub fn startup(catalog: &Catalog, fragment: &str) -> Self {
        let mut navigator = Self {
            view: View::Catalog,
            entries: vec![strip_hash(fragment).to_string()],
            cursor: 0,
        };
        navigator.pop_state(catalog, fragment);
        navigator
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Fragment of the current history entry, without the `#`
    pub fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, fragment: &str) -> FragmentChange {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
        FragmentChange::Push(fragment.to_string())
    }

    /// The user picked a catalog entry.
    pub fn activate(&mut self, catalog: &Catalog, name: &str) -> Option<Transition> {
        let widget = catalog.find(name)?;
        // Re-selecting the shown widget leaves the fragment, and history, alone.
        let fragment = if self.fragment() == widget.name {
            FragmentChange::None
        } else {
            self.push(&widget.name)
        };
        self.view = View::Editor(widget.name.clone());
        Some(Transition {
            view: self.view.clone(),
            fragment,
        })
    }

    /// Back to the catalog with the fragment cleared.
    pub fn home(&mut self) -> Transition {
        let fragment = if self.fragment().is_empty() {
            FragmentChange::None
        } else {
            self.push("")
        };
        self.view = View::Catalog;
        Transition {
            view: View::Catalog,
            fragment,
        }
    }

    /// The browser moved through history and now shows `fragment`.
    pub fn pop_state(&mut self, catalog: &Catalog, fragment: &str) -> Transition {
        let name = strip_hash(fragment);
        self.entries[self.cursor] = name.to_string();

        if name.is_empty() {
            self.view = View::Catalog;
            return Transition {
                view: View::Catalog,
                fragment: FragmentChange::None,
            };
        }

        match catalog.find(name) {
            Some(widget) => {
                self.view = View::Editor(widget.name.clone());
                Transition {
                    view: self.view.clone(),
                    fragment: FragmentChange::None,
                }
            }
            None => {
                debug!("no widget named {name}, showing catalog");
                self.entries[self.cursor].clear();
                self.view = View::Catalog;
                Transition {
                    view: View::Catalog,
                    fragment: FragmentChange::Clear,
                }
            }
        }
    }

    /// History back button. `None` at the first entry.
    pub fn back(&mut self, catalog: &Catalog) -> Option<Transition> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let fragment = self.entries[self.cursor].clone();
        Some(self.pop_state(catalog, &fragment))
    }

    /// History forward button. `None` at the last entry.
    pub fn forward(&mut self, catalog: &Catalog) -> Option<Transition> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        let fragment = self.entries[self.cursor].clone();
        Some(self.pop_state(catalog, &fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Widget;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Widget::new("clock", ""),
            Widget::new("date", ""),
        ])
    }

    #[test]
    fn startup_resolves_fragment() {
        let catalog = catalog();
        let nav = Navigator::startup(&catalog, "#clock");
        assert_eq!(nav.view(), &View::Editor("clock".into()));
        assert_eq!(nav.fragment(), "clock");

        let nav = Navigator::startup(&catalog, "");
        assert_eq!(nav.view(), &View::Catalog);
    }

    #[test]
    fn startup_with_unknown_fragment_clears_it() {
        let nav = Navigator::startup(&catalog(), "#weather");
        assert_eq!(nav.view(), &View::Catalog);
        assert_eq!(nav.fragment(), "");
    }

    #[test]
    fn round_trip() {
        let catalog = catalog();
        let mut nav = Navigator::startup(&catalog, "");

        let t = nav.pop_state(&catalog, "#date");
        assert_eq!(t.view, View::Editor("date".into()));

        let t = nav.pop_state(&catalog, "");
        assert_eq!(t.view, View::Catalog);
        assert_eq!(t.fragment, FragmentChange::None);

        let t = nav.pop_state(&catalog, "#nope");
        assert_eq!(t.view, View::Catalog);
        assert_eq!(t.fragment, FragmentChange::Clear);
        assert_eq!(nav.fragment(), "");
    }

    #[test]
    fn activate_pushes_history() {
        let catalog = catalog();
        let mut nav = Navigator::startup(&catalog, "");

        let t = nav.activate(&catalog, "clock").unwrap();
        assert_eq!(t.view, View::Editor("clock".into()));
        assert_eq!(t.fragment, FragmentChange::Push("clock".into()));
        assert_eq!(nav.history_len(), 2);

        assert!(nav.activate(&catalog, "weather").is_none());
        assert_eq!(nav.view(), &View::Editor("clock".into()));
    }

    #[test]
    fn activating_shown_widget_adds_no_history() {
        let catalog = catalog();
        let mut nav = Navigator::startup(&catalog, "#clock");

        let t = nav.activate(&catalog, "clock").unwrap();
        assert_eq!(t.view, View::Editor("clock".into()));
        assert_eq!(t.fragment, FragmentChange::None);
        assert_eq!(nav.history_len(), 1);

        nav.activate(&catalog, "date");
        nav.activate(&catalog, "date");
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.back(&catalog).unwrap().view, View::Editor("clock".into()));
    }

    #[test]
    fn back_and_forward() {
        let catalog = catalog();
        let mut nav = Navigator::startup(&catalog, "");
        nav.activate(&catalog, "clock");
        nav.activate(&catalog, "date");

        assert_eq!(nav.back(&catalog).unwrap().view, View::Editor("clock".into()));
        assert_eq!(nav.back(&catalog).unwrap().view, View::Catalog);
        assert!(nav.back(&catalog).is_none());

        assert_eq!(nav.forward(&catalog).unwrap().view, View::Editor("clock".into()));

        // A new entry drops the forward history.
        nav.home();
        assert!(nav.forward(&catalog).is_none());
        assert_eq!(nav.history_len(), 3);
    }

    #[test]
    fn home_clears_fragment() {
        let catalog = catalog();
        let mut nav = Navigator::startup(&catalog, "#clock");
        let t = nav.home();
        assert_eq!(t.view, View::Catalog);
        assert_eq!(t.fragment, FragmentChange::Push(String::new()));
        assert_eq!(nav.fragment(), "");

        // Already on the catalog with no fragment.
        assert_eq!(nav.home().fragment, FragmentChange::None);
    }
}
