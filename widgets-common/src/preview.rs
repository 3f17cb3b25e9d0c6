/// The embedded preview frame.
///
/// Every assignment of a new source reloads the rendered widget, so
/// `loads` counts how many reloads happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFrame {
    src: Option<String>,
    loads: u64,
}

impl PreviewFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Point the frame at `url` unless it already shows it.
    /// Returns whether the frame reloaded.
    pub fn navigate(&mut self, url: String) -> bool {
        if self.src.as_deref() == Some(url.as_str()) {
            return false;
        }
        self.src = Some(url);
        self.loads += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_url_does_not_reload() {
        let mut frame = PreviewFrame::new();
        assert!(frame.navigate("http://x/clock".into()));
        assert!(!frame.navigate("http://x/clock".into()));
        assert_eq!(frame.loads(), 1);

        assert!(frame.navigate("http://x/clock?size=30".into()));
        assert_eq!(frame.loads(), 2);
        assert_eq!(frame.src(), Some("http://x/clock?size=30"));
    }
}
