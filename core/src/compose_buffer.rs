//! Bounded buffer of keysyms typed since the last commit or reset.
//!
//! The buffer stores the raw keysyms of the sequence in progress. It is
//! separate from the preedit shown to the user, which is derived from the
//! buffer plus the current tentative match.

use crate::error::{ComposeError, Result};

/// Longest sequence the engine will buffer.
pub const MAX_COMPOSE_LEN: usize = 7;

/// Ordered keysyms of the sequence in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeBuffer {
    keys: [u32; MAX_COMPOSE_LEN],
    len: usize,
}

impl ComposeBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered keysyms, oldest first.
    pub fn as_slice(&self) -> &[u32] {
        &self.keys[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == MAX_COMPOSE_LEN
    }

    /// Append a keysym. Fails without modifying the buffer once it holds
    /// `MAX_COMPOSE_LEN` keys.
    pub fn push(&mut self, keyval: u32) -> Result<()> {
        if self.is_full() {
            return Err(ComposeError::BufferFull(MAX_COMPOSE_LEN));
        }
        self.keys[self.len] = keyval;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the most recent keysym (backspace).
    pub fn pop(&mut self) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.keys[self.len])
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut buf = ComposeBuffer::new();
        assert!(buf.is_empty());
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(buf.pop(), Some(2));
        assert_eq!(buf.as_slice(), &[1]);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut buf = ComposeBuffer::new();
        for k in 0..MAX_COMPOSE_LEN as u32 {
            buf.push(k + 1).unwrap();
        }
        assert!(buf.is_full());
        assert!(matches!(buf.push(99), Err(ComposeError::BufferFull(MAX_COMPOSE_LEN))));
        assert_eq!(buf.len(), MAX_COMPOSE_LEN);
        assert_eq!(buf.as_slice().last(), Some(&(MAX_COMPOSE_LEN as u32)));
    }
}
