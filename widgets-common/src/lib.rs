//! Option-driven URL state engine for configuring widgets.
//!
//! Everything here is synchronous and free of I/O: the catalog is injected,
//! and the preview frame and fragment identifier are plain state.

pub mod catalog;
pub mod coercion;
pub mod editor;
pub mod form;
pub mod navigation;
pub mod preview;
pub mod schema;
pub mod store;
pub mod studio;
pub mod url;

pub use catalog::{catalog_preview_url, Catalog, Widget, CATALOG_PREVIEW_COLOR};
pub use coercion::{coerce, coerce_value, is_default, Coerced};
pub use editor::EditorSession;
pub use form::{Choice, Control, Form, FormField};
pub use navigation::{FragmentChange, Navigator, Transition, View};
pub use preview::PreviewFrame;
pub use schema::{OptionKind, OptionSchema, SchemaError};
pub use store::{StateChanged, StateStore};
pub use studio::{CatalogEntry, Studio};
pub use url::{build_raw_url, build_url, parse_query};
