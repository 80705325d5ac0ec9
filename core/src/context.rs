//! Recording observer.
//!
//! `ComposeContext` is a plain data container: it implements
//! [`ComposeObserver`] by writing every notification into public fields that
//! the platform (or a test) reads back after each key event.

use crate::notifier::ComposeObserver;

/// One notification, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeEvent {
    PreeditStart,
    PreeditChanged { text: String, cursor: usize },
    PreeditEnd,
    Commit(String),
    Bell,
}

/// Observer that records engine output.
///
/// # Fields
///
/// - `preedit_text`: current preedit (empty when nothing is being composed)
/// - `preedit_cursor`: cursor position within preedit (byte offset)
/// - `commit_text`: text committed since it was last taken
/// - `bells`: number of `bell()` calls
/// - `events`: every notification in order
#[derive(Debug, Clone, Default)]
pub struct ComposeContext {
    pub preedit_text: String,
    pub preedit_cursor: usize,
    pub commit_text: String,
    pub bells: usize,
    pub events: Vec<ComposeEvent>,
}

impl ComposeContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Take the recorded events, leaving the list empty.
    pub fn take_events(&mut self) -> Vec<ComposeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }

    /// Whether a composition is currently shown.
    pub fn has_preedit(&self) -> bool {
        !self.preedit_text.is_empty()
    }

    /// Clear everything, including recorded events.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ComposeObserver for ComposeContext {
    fn preedit_start(&mut self) {
        self.events.push(ComposeEvent::PreeditStart);
    }

    fn preedit_changed(&mut self, text: &str, cursor: usize) {
        self.preedit_text.clear();
        self.preedit_text.push_str(text);
        self.preedit_cursor = cursor;
        self.events.push(ComposeEvent::PreeditChanged {
            text: text.to_string(),
            cursor,
        });
    }

    fn preedit_end(&mut self) {
        self.preedit_text.clear();
        self.preedit_cursor = 0;
        self.events.push(ComposeEvent::PreeditEnd);
    }

    fn commit(&mut self, text: &str) {
        self.commit_text.push_str(text);
        self.events.push(ComposeEvent::Commit(text.to_string()));
    }

    fn bell(&mut self) {
        self.bells += 1;
        self.events.push(ComposeEvent::Bell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_notifications() {
        let mut ctx = ComposeContext::new();
        ctx.preedit_start();
        ctx.preedit_changed("u4", 2);
        assert_eq!(ctx.preedit_text, "u4");
        assert!(ctx.has_preedit());
        ctx.preedit_changed("", 0);
        ctx.preedit_end();
        ctx.commit("A");
        ctx.bell();

        assert!(!ctx.has_preedit());
        assert_eq!(ctx.bells, 1);
        assert_eq!(ctx.take_commit(), "A");
        assert!(!ctx.has_commit());
        assert_eq!(ctx.events.len(), 6);
        assert_eq!(ctx.events[5], ComposeEvent::Bell);
    }

    #[test]
    fn test_clear() {
        let mut ctx = ComposeContext::new();
        ctx.commit("é");
        ctx.clear();
        assert!(ctx.events.is_empty());
        assert!(!ctx.has_commit());
    }
}
