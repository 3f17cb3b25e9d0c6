//! Canonical URL building for the widget render endpoint.
//!
//! Only overridden options are encoded, so the URL for a widget at its
//! defaults is just `origin/name`.

use crate::catalog::Widget;
use crate::coercion::is_default;

fn encode_query(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("string pairs are always encodable")
}

/// Build `origin/name[?query]` from already-filtered pairs.
pub fn build_raw_url(origin: &str, name: &str, pairs: &[(&str, &str)]) -> String {
    let origin = origin.trim_end_matches('/');
    if pairs.is_empty() {
        return format!("{origin}/{name}");
    }
    format!("{origin}/{name}?{}", encode_query(pairs))
}

/// Build the canonical URL for `widget` with the given overrides.
///
/// Keys the widget does not declare and values equal to the option's default
/// are dropped. Remaining pairs keep the iteration order of `overrides`.
pub fn build_url<'a, I>(origin: &str, widget: &Widget, overrides: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let pairs: Vec<(&str, &str)> = overrides
        .into_iter()
        .filter(|(name, value)| {
            widget
                .option(name)
                .is_some_and(|option| !is_default(option, value))
        })
        .collect();

    build_raw_url(origin, &widget.name, &pairs)
}

/// Decode a query string (with or without the leading `?`) into pairs.
/// Malformed input decodes to nothing.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Vec::new();
    }
    serde_urlencoded::from_str(query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OptionKind, OptionSchema};

    const ORIGIN: &str = "https://widgets.example";

    fn clock() -> Widget {
        Widget::new("clock", "Shows the time")
            .with_option("color", OptionSchema::new(OptionKind::Color, "#ffffff"))
            .with_option("size", OptionSchema::new(OptionKind::Number, 24))
            .with_option("seconds", OptionSchema::new(OptionKind::Toggle, false))
    }

    #[test]
    fn defaults_are_omitted() {
        let widget = clock();
        let empty = build_url(ORIGIN, &widget, []);
        assert_eq!(empty, "https://widgets.example/clock");

        for (name, option) in &widget.options {
            let default = option.default_text();
            assert_eq!(
                build_url(ORIGIN, &widget, [(name.as_str(), default.as_str())]),
                empty,
                "default of {name} should be omitted"
            );
        }
    }

    #[test]
    fn clock_scenario() {
        let widget = clock();
        assert_eq!(
            build_url(ORIGIN, &widget, [("color", "#ffffff")]),
            "https://widgets.example/clock"
        );
        assert_eq!(
            build_url(ORIGIN, &widget, [("size", "30")]),
            "https://widgets.example/clock?size=30"
        );
        assert_eq!(
            build_url(ORIGIN, &widget, [("size", "24.0")]),
            "https://widgets.example/clock"
        );
    }

    #[test]
    fn order_follows_overrides() {
        let widget = clock();
        assert_eq!(
            build_url(ORIGIN, &widget, [("size", "30"), ("color", "#000000")]),
            "https://widgets.example/clock?size=30&color=%23000000"
        );
        assert_eq!(
            build_url(ORIGIN, &widget, [("seconds", "1"), ("size", "30")]),
            "https://widgets.example/clock?seconds=1&size=30"
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let widget = clock();
        assert_eq!(
            build_url(ORIGIN, &widget, [("font", "Comic Sans")]),
            "https://widgets.example/clock"
        );
    }

    #[test]
    fn invalid_number_is_kept() {
        let widget = clock();
        assert_eq!(
            build_url(ORIGIN, &widget, [("size", "big")]),
            "https://widgets.example/clock?size=big"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let widget = Widget::new("countdown", "")
            .with_option("event", OptionSchema::new(OptionKind::Text, "A cool thing"));
        assert_eq!(
            build_url("http://localhost:4777/", &widget, [("event", "Launch & party")]),
            "http://localhost:4777/countdown?event=Launch+%26+party"
        );
    }

    #[test]
    fn parse_query_round_trips_encoding() {
        assert_eq!(
            parse_query("?event=Launch+%26+party&size=30"),
            vec![
                ("event".to_string(), "Launch & party".to_string()),
                ("size".to_string(), "30".to_string()),
            ]
        );
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }
}
