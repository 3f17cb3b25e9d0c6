//! Type-aware normalization of option values.
//!
//! Form controls and URL parameters are textual, while catalog defaults keep
//! their native JSON type. Both sides are coerced into a [`Coerced`] value
//! before comparing, so `"24"` matches a numeric default of `24`.

use serde_json::Value;

use crate::schema::{OptionKind, OptionSchema};

/// Normalized option value, comparable against another value of the same option.
#[derive(Debug, Clone)]
pub enum Coerced {
    /// `None` when the input is not a finite number
    Number(Option<f64>),
    Toggle(bool),
    Text(String),
}

impl PartialEq for Coerced {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Unparseable numbers never equal anything, so invalid input is
            // always reported as overridden.
            (Coerced::Number(Some(a)), Coerced::Number(Some(b))) => a == b,
            (Coerced::Toggle(a), Coerced::Toggle(b)) => a == b,
            (Coerced::Text(a), Coerced::Text(b)) => a == b,
            _ => false,
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerce a raw textual value by the option's type.
pub fn coerce(kind: OptionKind, raw: &str) -> Coerced {
    match kind {
        OptionKind::Number => Coerced::Number(parse_number(raw)),
        OptionKind::Toggle => Coerced::Toggle(raw == "1"),
        OptionKind::Text | OptionKind::Color | OptionKind::Select => {
            Coerced::Text(raw.to_string())
        }
    }
}

/// Coerce a value in its native JSON representation (a catalog default).
pub fn coerce_value(kind: OptionKind, value: &Value) -> Coerced {
    match (kind, value) {
        (OptionKind::Number, Value::Number(n)) => {
            Coerced::Number(n.as_f64().filter(|n| n.is_finite()))
        }
        (OptionKind::Toggle, Value::Bool(b)) => Coerced::Toggle(*b),
        (_, Value::String(s)) => coerce(kind, s),
        (_, Value::Null) => coerce(kind, ""),
        (_, other) => coerce(kind, &other.to_string()),
    }
}

/// Whether `raw` is equivalent to the option's default.
pub fn is_default(option: &OptionSchema, raw: &str) -> bool {
    coerce(option.kind, raw) == coerce_value(option.kind, &option.default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_on_values() {
        assert_eq!(
            coerce(OptionKind::Toggle, "1"),
            coerce_value(OptionKind::Toggle, &json!(true))
        );
        assert_eq!(coerce(OptionKind::Toggle, "1"), Coerced::Toggle(true));
    }

    #[test]
    fn toggle_off_values() {
        let off = coerce_value(OptionKind::Toggle, &json!(false));
        for raw in ["0", "", "true", "yes", "on", "2"] {
            assert_eq!(coerce(OptionKind::Toggle, raw), off, "{raw:?} should be off");
            assert_ne!(coerce(OptionKind::Toggle, raw), Coerced::Toggle(true));
        }
    }

    #[test]
    fn toggle_numeric_default() {
        assert_eq!(coerce_value(OptionKind::Toggle, &json!(1)), Coerced::Toggle(true));
        assert_eq!(coerce_value(OptionKind::Toggle, &json!(0)), Coerced::Toggle(false));
    }

    #[test]
    fn number_compares_numerically() {
        assert_eq!(coerce(OptionKind::Number, "3"), coerce(OptionKind::Number, "3.0"));
        assert_eq!(
            coerce(OptionKind::Number, " 24 "),
            coerce_value(OptionKind::Number, &json!(24))
        );
        assert_eq!(
            coerce(OptionKind::Number, "1"),
            coerce_value(OptionKind::Number, &json!(1.0))
        );
        assert_ne!(coerce(OptionKind::Number, "3"), coerce(OptionKind::Number, "4"));
    }

    #[test]
    fn invalid_number_is_never_default() {
        let default = coerce_value(OptionKind::Number, &json!(3));
        for raw in ["abc", "", "NaN", "inf", "3px"] {
            assert_ne!(coerce(OptionKind::Number, raw), default, "{raw:?}");
        }
        // Not even equal to itself.
        assert_ne!(coerce(OptionKind::Number, "abc"), coerce(OptionKind::Number, "abc"));
    }

    #[test]
    fn number_default_given_as_string() {
        assert_eq!(
            coerce(OptionKind::Number, "3"),
            coerce_value(OptionKind::Number, &json!("3.0"))
        );
    }

    #[test]
    fn text_types_compare_verbatim() {
        assert_eq!(coerce(OptionKind::Color, "#ffffff"), Coerced::Text("#ffffff".into()));
        assert_ne!(coerce(OptionKind::Color, "#FFFFFF"), coerce(OptionKind::Color, "#ffffff"));
        assert_eq!(
            coerce(OptionKind::Select, "700"),
            coerce_value(OptionKind::Select, &json!(700))
        );
        assert_ne!(coerce(OptionKind::Text, "3"), coerce(OptionKind::Text, "3.0"));
    }

    #[test]
    fn is_default_uses_option_kind() {
        let size = OptionSchema::new(OptionKind::Number, 24);
        assert!(is_default(&size, "24.0"));
        assert!(!is_default(&size, "30"));

        let prefix = OptionSchema::new(OptionKind::Text, "IP is ");
        assert!(is_default(&prefix, "IP is "));
        assert!(!is_default(&prefix, "IP is"));
    }
}
