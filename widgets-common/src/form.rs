//! Form synthesis from a widget's option schema

use crate::catalog::Widget;
use crate::schema::{OptionKind, OptionSchema};

/// A (value, label) pair offered by an enumerated control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// The kind of control rendered for an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    ColorPicker,
    /// Enumerated control (toggles and selects)
    Choices(Vec<Choice>),
    /// Plain text-like input, `input_type` being the HTML input type
    Input { input_type: &'static str },
}

impl Control {
    fn for_option(option: &OptionSchema) -> Self {
        match option.kind {
            OptionKind::Color => Control::ColorPicker,
            OptionKind::Toggle => {
                Control::Choices(vec![Choice::new("1", "On"), Choice::new("0", "Off")])
            }
            OptionKind::Select => Control::Choices(
                option
                    .allowed
                    .iter()
                    .flatten()
                    .map(|value| Choice::new(value, value))
                    .collect(),
            ),
            OptionKind::Number => Control::Input {
                input_type: "number",
            },
            OptionKind::Text => Control::Input { input_type: "text" },
        }
    }
}

/// One generated form field with its reset affordance
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub description: String,
    pub control: Control,
    /// Current textual value held by the control
    pub value: String,
    /// Whether the reset button is active
    pub overridden: bool,
}

impl FormField {
    /// The selected choice of an enumerated control. `None` for other
    /// controls, or when the value is not one of the choices.
    pub fn selected(&self) -> Option<&Choice> {
        match &self.control {
            Control::Choices(choices) => choices.iter().find(|c| c.value == self.value),
            _ => None,
        }
    }
}

/// Upper-case the first character of an option name.
pub fn label_for(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The generated form for the active widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// One field per option, in schema key order, seeded with defaults.
    pub fn synthesize(widget: &Widget) -> Self {
        let fields = widget
            .options
            .iter()
            .map(|(name, option)| FormField {
                name: name.clone(),
                label: label_for(name),
                description: option.description.clone(),
                control: Control::for_option(option),
                value: option.default_text(),
                overridden: false,
            })
            .collect();

        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reflect a stored value in its control and reset affordance.
    pub(crate) fn update(&mut self, name: &str, value: &str, overridden: bool) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
            field.overridden = overridden;
        }
    }

    /// Names of fields whose reset affordance is active
    pub fn overridden(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.overridden)
            .map(|f| f.name.as_str())
            .collect()
    }
}
