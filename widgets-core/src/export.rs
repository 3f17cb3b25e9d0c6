//! Export of the canonical URL to the system clipboard.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;
use widgets_common::EditorSession;

/// How long the export button shows its "copied" state.
pub const COPIED_INDICATOR: Duration = Duration::from_millis(750);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Copied,
    /// The write failed; nothing is shown to the user
    Failed,
}

/// The export button of the editor.
#[derive(Debug, Default)]
pub struct ExportButton {
    copied_until: Option<Instant>,
}

impl ExportButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the session's canonical URL. A failed write is swallowed and
    /// leaves the indicator off.
    pub async fn click(
        &mut self,
        session: &EditorSession,
        clipboard: &dyn Clipboard,
    ) -> ExportOutcome {
        self.copied_until = None;

        let url = session.url();
        match clipboard.write_text(&url).await {
            Ok(()) => {
                self.copied_until = Some(Instant::now() + COPIED_INDICATOR);
                ExportOutcome::Copied
            }
            Err(e) => {
                debug!("export of {url} failed: {e}");
                ExportOutcome::Failed
            }
        }
    }

    /// Whether the "copied" indicator is currently shown
    pub fn is_copied(&self) -> bool {
        self.copied_until
            .is_some_and(|until| Instant::now() < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use widgets_common::{OptionKind, OptionSchema, Widget};

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Mutex<Option<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Clipboard for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("permission denied".into()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn session() -> EditorSession {
        let widget = Widget::new("clock", "")
            .with_option("size", OptionSchema::new(OptionKind::Number, 24));
        let mut session = EditorSession::new("http://localhost:4777", &widget);
        session.set("size", "30");
        session
    }

    #[tokio::test(start_paused = true)]
    async fn copies_canonical_url() {
        let clipboard = MemoryClipboard::default();
        let mut button = ExportButton::new();

        let outcome = button.click(&session(), &clipboard).await;
        assert_eq!(outcome, ExportOutcome::Copied);
        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some("http://localhost:4777/clock?size=30")
        );
        assert!(button.is_copied());

        tokio::time::advance(COPIED_INDICATOR).await;
        assert!(!button.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_silent() {
        let clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let mut button = ExportButton::new();

        let outcome = button.click(&session(), &clipboard).await;
        assert_eq!(outcome, ExportOutcome::Failed);
        assert!(!button.is_copied());
        assert!(clipboard.contents.lock().unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_click_clears_previous_indicator() {
        let mut button = ExportButton::new();
        button.click(&session(), &MemoryClipboard::default()).await;
        assert!(button.is_copied());

        let failing = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        button.click(&session(), &failing).await;
        assert!(!button.is_copied());
    }
}
