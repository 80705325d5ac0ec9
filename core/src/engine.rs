//! Compose engine with per-widget state and key event processing.
//!
//! The `ComposeEngine` owns the keysyms typed so far, the current tentative
//! match and the hex-entry flags. It classifies each key event, drives the
//! table store, and reports what happened through a [`ComposeObserver`].
//!
//! One engine is created per focused text-entry target. The table store is
//! shared read-only between engines.

use crate::compose_buffer::ComposeBuffer;
use crate::config::Config;
use crate::context::ComposeContext;
use crate::event::{KeyEvent, Keymap};
use crate::hex::{self, HexParse};
use crate::keysyms;
use crate::notifier::ComposeObserver;
use crate::store::ComposeTableStore;
use crate::table::Lookup;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, trace};

/// Externally visible state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeState {
    /// Nothing buffered.
    Idle,
    /// An ordinary compose sequence is in progress.
    Composing,
    /// Hex code point entry is active.
    HexEntry,
}

/// Preedit string with its cursor and underline (byte offsets).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preedit {
    pub text: String,
    pub cursor: usize,
    pub underline: Option<Range<usize>>,
}

/// Shortest table hit that longer sequences could still extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TentativeMatch {
    ch: char,
    len: usize,
}

/// The compose state machine.
pub struct ComposeEngine<O: ComposeObserver = ComposeContext> {
    store: Arc<ComposeTableStore>,
    config: Config,
    keymap: Option<Arc<dyn Keymap>>,

    buffer: ComposeBuffer,
    tentative: Option<TentativeMatch>,
    in_hex_sequence: bool,
    modifiers_dropped: bool,

    observer: O,
}

impl ComposeEngine<ComposeContext> {
    /// Create an engine that records its output in a [`ComposeContext`].
    pub fn with_context(store: Arc<ComposeTableStore>, config: Config) -> Self {
        Self::new(store, config, ComposeContext::new())
    }

    /// Get a reference to the context for reading engine output.
    pub fn context(&self) -> &ComposeContext {
        &self.observer
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut ComposeContext {
        &mut self.observer
    }
}

impl<O: ComposeObserver> ComposeEngine<O> {
    /// Create a new engine over a shared table store.
    pub fn new(store: Arc<ComposeTableStore>, config: Config, observer: O) -> Self {
        Self {
            store,
            config,
            keymap: None,
            buffer: ComposeBuffer::new(),
            tentative: None,
            in_hex_sequence: false,
            modifiers_dropped: false,
            observer,
        }
    }

    /// Use `keymap` to recover hex digits typed with modifiers held.
    pub fn with_keymap(mut self, keymap: Arc<dyn Keymap>) -> Self {
        self.keymap = Some(keymap);
        self
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tables(&self) -> &Arc<ComposeTableStore> {
        &self.store
    }

    /// Swap in a newly resolved table store. Any sequence in progress is
    /// abandoned.
    pub fn set_tables(&mut self, store: Arc<ComposeTableStore>) {
        self.reset();
        self.store = store;
    }

    /// Current state.
    pub fn state(&self) -> ComposeState {
        if self.in_hex_sequence {
            ComposeState::HexEntry
        } else if !self.buffer.is_empty() {
            ComposeState::Composing
        } else {
            ComposeState::Idle
        }
    }

    /// Keysyms buffered for the sequence in progress.
    pub fn buffered(&self) -> &[u32] {
        self.buffer.as_slice()
    }

    /// Current preedit string.
    ///
    /// `u` plus the digits in hex entry, the tentative match while composing,
    /// otherwise empty. The whole string is underlined and the cursor sits at
    /// its end.
    pub fn preedit(&self) -> Preedit {
        let text = self.preedit_text();
        let len = text.len();
        Preedit {
            text,
            cursor: len,
            underline: (len > 0).then_some(0..len),
        }
    }

    fn preedit_text(&self) -> String {
        if self.in_hex_sequence {
            hex::hex_preedit(self.buffer.as_slice())
        } else if let Some(t) = self.tentative {
            t.ch.to_string()
        } else {
            String::new()
        }
    }

    /// Abandon any sequence in progress.
    ///
    /// Notifies only if something was shown, so resetting an idle engine is
    /// silent.
    pub fn reset(&mut self) {
        self.buffer.clear();
        if self.tentative.is_some() || self.in_hex_sequence {
            self.in_hex_sequence = false;
            self.tentative = None;
            self.observer.preedit_changed("", 0);
            self.observer.preedit_end();
        }
    }

    pub fn focus_in(&mut self) {
        trace!("focus in");
    }

    /// Losing focus abandons the sequence in progress.
    pub fn focus_out(&mut self) {
        trace!("focus out");
        self.reset();
    }

    /// Process a key event.
    ///
    /// Returns `true` if the event was consumed and must not reach the
    /// application, `false` if the caller should handle it.
    pub fn filter_key_event(&mut self, event: KeyEvent) -> bool {
        // Abandoning a tentative match re-feeds the keys typed after it, in
        // order, ahead of anything still queued.
        let mut queue = VecDeque::from([event]);
        let mut consumed = false;
        while let Some(ev) = queue.pop_front() {
            consumed = self.process_event(ev, &mut queue);
        }
        consumed
    }

    fn process_event(&mut self, event: KeyEvent, replay: &mut VecDeque<KeyEvent>) -> bool {
        let keyval = event.keyval;

        if !event.is_press() {
            return self.process_release(keyval);
        }

        if keysyms::is_modifier_key(keyval) {
            return false;
        }

        let n = self.buffer.len();
        let have_hex_mods = (self.in_hex_sequence && self.modifiers_dropped)
            || event.state.contains(self.config.hex_modifiers);
        let is_hex_start = keyval == self.config.hex_start_keysym;
        let is_hex_end = keysyms::is_hex_end(keyval);
        let is_backspace = keyval == keysyms::BACKSPACE;
        let is_escape = keyval == keysyms::ESCAPE;
        let hex_keyval = self.canonical_hex_keyval(&event);

        // Leave accelerators alone unless they are part of hex entry.
        let not_hex_input = !have_hex_mods
            || (n > 0 && !self.in_hex_sequence)
            || (n == 0 && !self.in_hex_sequence && !is_hex_start)
            || (self.in_hex_sequence
                && hex_keyval.is_none()
                && !is_hex_start
                && !is_hex_end
                && !is_escape
                && !is_backspace);
        if not_hex_input && event.state.intersects(self.config.no_text_input_modifiers) {
            return false;
        }

        if self.in_hex_sequence {
            if have_hex_mods && is_backspace {
                return self.hex_backspace();
            }
            if have_hex_mods && is_hex_start {
                self.end_hex_sequence();
            }
        }

        if !self.in_hex_sequence && have_hex_mods && is_hex_start {
            self.buffer.clear();
            self.in_hex_sequence = true;
            self.modifiers_dropped = false;
            self.tentative = None;
            debug!("hex entry started");
            self.observer.preedit_start();
            self.notify_preedit();
            return true;
        }

        if self.in_hex_sequence {
            return self.process_hex_key(keyval, hex_keyval, is_hex_end, is_escape);
        }

        if !self.buffer.is_empty() && is_escape {
            debug!("abandoned {}", keysyms::describe_sequence(self.buffer.as_slice()));
            self.reset();
            return true;
        }

        if self.buffer.push(keyval).is_err() {
            self.bell();
            return true;
        }

        self.check_sequence(event, replay)
    }

    fn process_release(&mut self, keyval: u32) -> bool {
        if !self.in_hex_sequence {
            return false;
        }
        // only letting go of part of the trigger combination ends entry
        match keysyms::modifier_for_keyval(keyval) {
            Some(bit) if bit.intersects(self.config.hex_modifiers) => {}
            _ => return false,
        }

        if let Some(t) = self.tentative {
            self.commit_char(t.ch);
        } else if self.buffer.is_empty() {
            trace!("hex modifiers dropped");
            self.modifiers_dropped = true;
        } else {
            self.bell();
            self.reset();
        }
        true
    }

    fn hex_backspace(&mut self) -> bool {
        if self.buffer.pop().is_some() {
            self.check_hex();
        } else {
            self.in_hex_sequence = false;
        }
        self.notify_preedit();
        if !self.in_hex_sequence {
            self.observer.preedit_end();
        }
        true
    }

    /// Hex start pressed again: commit what is valid, otherwise give up on it.
    fn end_hex_sequence(&mut self) {
        if let Some(t) = self.tentative {
            self.commit_char(t.ch);
        } else {
            if !self.buffer.is_empty() {
                self.bell();
            }
            self.reset();
        }
    }

    fn process_hex_key(
        &mut self,
        keyval: u32,
        hex_keyval: Option<u32>,
        is_hex_end: bool,
        is_escape: bool,
    ) -> bool {
        if let Some(digit) = hex_keyval {
            if self.buffer.push(digit).is_err() {
                self.bell();
                return true;
            }
            self.check_hex();
            self.notify_preedit();
            return true;
        }

        if is_escape {
            self.reset();
            return true;
        }

        if !is_hex_end {
            // non-hex character in hex sequence
            self.bell();
            return true;
        }

        if self.buffer.is_empty() {
            // Enter after the modifiers were released is meant for the
            // application.
            return !(self.modifiers_dropped && keysyms::is_enter(keyval));
        }

        if let Some(t) = self.tentative {
            self.commit_char(t.ch);
        } else {
            self.bell();
            self.reset();
        }
        true
    }

    /// Re-parse the hex digits, refreshing the tentative match.
    fn check_hex(&mut self) {
        self.tentative = match hex::parse_hex(self.buffer.as_slice()) {
            HexParse::Value(ch) => Some(TentativeMatch {
                ch,
                len: self.buffer.len(),
            }),
            HexParse::Pending | HexParse::NotHex => None,
        };
    }

    fn canonical_hex_keyval(&self, event: &KeyEvent) -> Option<u32> {
        if hex::hex_digit(event.keyval).is_some() {
            return Some(event.keyval);
        }
        // The same key may produce a hex digit at another level.
        let keymap = self.keymap.as_ref()?;
        keymap
            .entries_for_keycode(event.hardware_keycode)
            .into_iter()
            .find(|&k| hex::hex_digit(k).is_some())
    }

    fn check_sequence(&mut self, event: KeyEvent, replay: &mut VecDeque<KeyEvent>) -> bool {
        let n = self.buffer.len();
        match self.store.lookup(self.buffer.as_slice()) {
            Lookup::Exact(value) => match valid_char(value) {
                Some(ch) => {
                    self.commit_char(ch);
                    true
                }
                None => self.no_sequence_matches(event, replay),
            },
            Lookup::Tentative(value) => match valid_char(value) {
                Some(ch) => {
                    let started = self.tentative.is_none();
                    self.tentative = Some(TentativeMatch { ch, len: n });
                    if started {
                        self.observer.preedit_start();
                    }
                    self.notify_preedit();
                    true
                }
                None => self.no_sequence_matches(event, replay),
            },
            Lookup::Partial => true,
            Lookup::NoMatch => self.no_sequence_matches(event, replay),
        }
    }

    /// Failure policy for a buffer nothing can complete.
    fn no_sequence_matches(&mut self, event: KeyEvent, replay: &mut VecDeque<KeyEvent>) -> bool {
        let keys = self.buffer;
        let keys = keys.as_slice();
        let n = keys.len();

        if let Some(t) = self.tentative {
            self.commit_char(t.ch);
            // Feed back what followed the match; the current event goes last.
            replay.push_front(event);
            let start = t.len.min(n - 1);
            for &k in keys[start..n - 1].iter().rev() {
                replay.push_front(event.with_keyval(k));
            }
            return true;
        }

        self.buffer.clear();
        let ch = printable(event.keyval);
        if n > 1 {
            debug!("invalid sequence {}", keysyms::describe_sequence(keys));
            self.bell();
            if let Some(ch) = ch {
                self.commit_char(ch);
            }
            return true;
        }

        match ch {
            Some(ch) => {
                self.commit_char(ch);
                true
            }
            None => false,
        }
    }

    fn commit_char(&mut self, ch: char) {
        if self.tentative.is_some() || self.in_hex_sequence {
            self.in_hex_sequence = false;
            self.tentative = None;
            self.observer.preedit_changed("", 0);
            self.observer.preedit_end();
        }
        self.buffer.clear();
        debug!("commit U+{:04X}", ch as u32);
        let mut buf = [0u8; 4];
        self.observer.commit(ch.encode_utf8(&mut buf));
    }

    fn notify_preedit(&mut self) {
        let text = self.preedit_text();
        self.observer.preedit_changed(&text, text.len());
    }

    fn bell(&mut self) {
        if self.config.error_bell {
            self.observer.bell();
        }
    }
}

fn valid_char(value: u32) -> Option<char> {
    char::from_u32(value).filter(|&c| c != '\0')
}

fn printable(keyval: u32) -> Option<char> {
    keysyms::keyval_to_unicode(keyval).filter(|c| !c.is_control())
}
