//! Algorithmic composition of dead keys with a base character.
//!
//! Used when no table knows the buffered sequence. The dead keys are mapped
//! to Unicode combining marks, placed after the base character, and the
//! result is NFC-normalized; if that yields a single character, it is the
//! composed result. Marks of equal canonical combining class are not
//! reordered by normalization, so every order of the marks is tried before
//! giving up.

use crate::compose_buffer::MAX_COMPOSE_LEN;
use crate::keysyms::{self, *};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Outcome of the algorithmic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiacriticMatch {
    /// Only dead keys so far; more input may complete the sequence.
    Pending,
    /// The marks and base compose into this character.
    Composed(char),
    NoMatch,
}

const COMBINING_TILDE: char = '\u{303}';
const COMBINING_PERISPOMENI: char = '\u{342}';

/// Combining mark for a dead key.
pub fn dead_key_to_combining(keyval: u32) -> Option<char> {
    let mark = match keyval {
        DEAD_GRAVE => '\u{300}',
        DEAD_ACUTE => '\u{301}',
        DEAD_CIRCUMFLEX => '\u{302}',
        // Also stands in for perispomeni, see `compose_marks`.
        DEAD_TILDE => COMBINING_TILDE,
        DEAD_MACRON => '\u{304}',
        DEAD_BREVE => '\u{306}',
        DEAD_ABOVEDOT => '\u{307}',
        DEAD_DIAERESIS => '\u{308}',
        DEAD_HOOK => '\u{309}',
        DEAD_ABOVERING => '\u{30a}',
        DEAD_DOUBLEACUTE => '\u{30b}',
        DEAD_CARON => '\u{30c}',
        DEAD_ABOVECOMMA => '\u{313}',
        DEAD_ABOVEREVERSEDCOMMA => '\u{314}',
        DEAD_HORN => '\u{31b}',
        DEAD_BELOWDOT => '\u{323}',
        DEAD_CEDILLA => '\u{327}',
        DEAD_OGONEK => '\u{328}',
        DEAD_IOTA => '\u{345}',
        DEAD_VOICED_SOUND => '\u{3099}',
        DEAD_SEMIVOICED_SOUND => '\u{309a}',
        // dasia as sent by xserver 1.4
        k if k == DEAD_DASIA + 1 => '\u{314}',
        _ => return None,
    };
    Some(mark)
}

/// Try to compose a buffer of dead keys followed by one base key.
pub fn check_algorithmically(keys: &[u32]) -> DiacriticMatch {
    let n = keys.len();
    if n == 0 || n >= MAX_COMPOSE_LEN {
        return DiacriticMatch::NoMatch;
    }

    let dead = keys.iter().take_while(|&&k| keysyms::is_dead_key(k)).count();
    if dead == n {
        return DiacriticMatch::Pending;
    }
    if dead == 0 || dead != n - 1 {
        return DiacriticMatch::NoMatch;
    }

    let Some(base) = keysyms::keyval_to_unicode(keys[n - 1]) else {
        return DiacriticMatch::NoMatch;
    };

    // Most recently typed mark first, i.e. nearest the base.
    let mut marks = Vec::with_capacity(dead);
    for &k in keys[..dead].iter().rev() {
        match dead_key_to_combining(k) {
            Some(mark) => marks.push(mark),
            None => return DiacriticMatch::NoMatch,
        }
    }

    match compose_marks(base, &marks) {
        Some(ch) => DiacriticMatch::Composed(ch),
        None => DiacriticMatch::NoMatch,
    }
}

/// Compose `base` with `marks`, returning the single resulting character.
pub fn compose_marks(base: char, marks: &[char]) -> Option<char> {
    // The base's own decomposition leads, so a precomposed base can pick up
    // further marks (eacute + circumflex).
    let mut seq: Vec<char> = std::iter::once(base).nfd().collect();
    let greek = ('\u{390}'..='\u{3ff}').contains(&seq[0]);
    seq.extend(marks.iter().map(|&m| {
        if greek && m == COMBINING_TILDE {
            COMBINING_PERISPOMENI
        } else {
            m
        }
    }));

    if seq.len() > MAX_COMPOSE_LEN {
        return None;
    }

    canonical_order(&mut seq[1..]);
    if let Some(ch) = single_nfc(&seq) {
        return Some(ch);
    }

    if !has_class_tie(&seq[1..]) {
        return None;
    }

    // Heap's algorithm over the marks.
    let head = seq[0];
    let marks = &mut seq[1..];
    let len = marks.len();
    let mut counters = vec![0usize; len];
    let mut i = 1;
    while i < len {
        if counters[i] < i {
            if i % 2 == 0 {
                marks.swap(0, i);
            } else {
                marks.swap(counters[i], i);
            }
            let mut candidate = marks.to_vec();
            canonical_order(&mut candidate);
            let mut full = Vec::with_capacity(len + 1);
            full.push(head);
            full.extend(candidate);
            if let Some(ch) = single_nfc(&full) {
                return Some(ch);
            }
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    None
}

/// Stable sort of combining marks by canonical combining class.
fn canonical_order(marks: &mut [char]) {
    marks.sort_by_key(|&c| canonical_combining_class(c));
}

fn has_class_tie(marks: &[char]) -> bool {
    marks.iter().enumerate().any(|(i, &a)| {
        marks[i + 1..]
            .iter()
            .any(|&b| canonical_combining_class(a) == canonical_combining_class(b))
    })
}

fn single_nfc(seq: &[char]) -> Option<char> {
    let mut nfc = seq.iter().copied().nfc();
    let first = nfc.next()?;
    match nfc.next() {
        None => Some(first),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acute_e() {
        assert_eq!(
            check_algorithmically(&[DEAD_ACUTE, 0x65]),
            DiacriticMatch::Composed('é')
        );
    }

    #[test]
    fn test_only_dead_keys_is_pending() {
        assert_eq!(check_algorithmically(&[DEAD_ACUTE]), DiacriticMatch::Pending);
        assert_eq!(
            check_algorithmically(&[DEAD_ACUTE, DEAD_CIRCUMFLEX]),
            DiacriticMatch::Pending
        );
    }

    #[test]
    fn test_marks_of_different_class() {
        // dot below (220) and circumflex (230): either order gives U+1EAD
        assert_eq!(
            check_algorithmically(&[DEAD_BELOWDOT, DEAD_CIRCUMFLEX, 0x61]),
            DiacriticMatch::Composed('ậ')
        );
        assert_eq!(
            check_algorithmically(&[DEAD_CIRCUMFLEX, DEAD_BELOWDOT, 0x61]),
            DiacriticMatch::Composed('ậ')
        );
    }

    #[test]
    fn test_same_class_marks_in_either_order() {
        // circumflex and acute share class 230; only "circumflex then acute"
        // composes (U+1EA5), so the permutation search must find it.
        assert_eq!(
            check_algorithmically(&[DEAD_ACUTE, DEAD_CIRCUMFLEX, 0x61]),
            DiacriticMatch::Composed('ấ')
        );
        assert_eq!(
            check_algorithmically(&[DEAD_CIRCUMFLEX, DEAD_ACUTE, 0x61]),
            DiacriticMatch::Composed('ấ')
        );
    }

    #[test]
    fn test_precomposed_base() {
        // eacute keysym plus circumflex
        assert_eq!(
            check_algorithmically(&[DEAD_CIRCUMFLEX, 0xe9]),
            DiacriticMatch::Composed('ế')
        );
    }

    #[test]
    fn test_greek_perispomeni() {
        // Greek_alpha with dead_tilde gives alpha with perispomeni
        assert_eq!(
            check_algorithmically(&[DEAD_TILDE, 0x07e1]),
            DiacriticMatch::Composed('\u{1fb6}')
        );
    }

    #[test]
    fn test_unknown_dead_key_fails() {
        assert_eq!(
            check_algorithmically(&[DEAD_STROKE, 0x6f]),
            DiacriticMatch::NoMatch
        );
    }

    #[test]
    fn test_non_composing_pairs() {
        assert_eq!(check_algorithmically(&[DEAD_CEDILLA, 0x71]), DiacriticMatch::NoMatch);
        assert_eq!(check_algorithmically(&[0x61, 0x62]), DiacriticMatch::NoMatch);
        assert_eq!(
            check_algorithmically(&[DEAD_ACUTE, 0x61, DEAD_ACUTE]),
            DiacriticMatch::NoMatch
        );
    }
}
