//! Notifications from the engine to the embedding text widget.

/// Receives preedit and commit notifications.
///
/// Calls are made synchronously from inside
/// [`ComposeEngine::filter_key_event`](crate::ComposeEngine::filter_key_event)
/// and [`ComposeEngine::reset`](crate::ComposeEngine::reset).
pub trait ComposeObserver {
    /// A composition became visible.
    fn preedit_start(&mut self);

    /// The preedit text changed; `cursor` is a byte offset into `text`.
    fn preedit_changed(&mut self, text: &str, cursor: usize);

    /// The composition is no longer visible.
    fn preedit_end(&mut self);

    /// Insert `text` into the document.
    fn commit(&mut self, text: &str);

    /// The typed sequence was invalid.
    fn bell(&mut self) {}
}

impl<T: ComposeObserver + ?Sized> ComposeObserver for &mut T {
    fn preedit_start(&mut self) {
        (**self).preedit_start()
    }

    fn preedit_changed(&mut self, text: &str, cursor: usize) {
        (**self).preedit_changed(text, cursor)
    }

    fn preedit_end(&mut self) {
        (**self).preedit_end()
    }

    fn commit(&mut self, text: &str) {
        (**self).commit(text)
    }

    fn bell(&mut self) {
        (**self).bell()
    }
}
