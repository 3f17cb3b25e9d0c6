//! Plain-text rendering of the catalog and editor views.

use widgets_common::{CatalogEntry, Control, EditorSession, FormField};

pub fn catalog_lines(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let size = if entry.is_big { " [big]" } else { "" };
            format!(
                "{}{size}  {}\n    {}",
                entry.name, entry.description, entry.preview_url
            )
        })
        .collect()
}

fn control_summary(field: &FormField) -> String {
    match &field.control {
        Control::ColorPicker => format!("color {}", field.value),
        Control::Input { input_type } => format!("{input_type} {:?}", field.value),
        Control::Choices(choices) => {
            let list: Vec<String> = choices
                .iter()
                .map(|choice| {
                    let marker = if choice.value == field.value { "*" } else { "" };
                    format!("{marker}{}", choice.label)
                })
                .collect();
            match field.selected() {
                Some(_) => list.join(" | "),
                None => format!("{} (value {:?})", list.join(" | "), field.value),
            }
        }
    }
}

/// One line per field: label, control, reset marker and description.
pub fn editor_lines(session: &EditorSession) -> Vec<String> {
    let mut lines = vec![format!("{}: {}", session.widget().name, session.widget().description)];
    for field in session.form().fields() {
        let reset = if field.overridden { " [reset]" } else { "" };
        lines.push(format!(
            "  {:<10} {}{reset}  {}",
            field.label,
            control_summary(field),
            field.description
        ));
    }
    if let Some(src) = session.preview().src() {
        lines.push(format!("preview: {src}"));
    }
    lines
}
