//! Reader for X11 Compose files.
//!
//! Lines look like
//!
//! ```text
//! <dead_acute> <e>            : "é"   eacute  # LATIN SMALL LETTER E WITH ACUTE
//! <Multi_key> <minus> <minus> <minus> : "—" emdash
//! ```
//!
//! Only results that are a single character are kept; `include` lines,
//! comments and sequences naming unknown keysyms are skipped.

use anyhow::{Context, Result};
use libcompose_core::keysyms;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Why a line produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    Blank,
    Include,
    Malformed,
    UnknownKeysym(String),
    MultiChar,
}

/// A parsed `(keysyms, character)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeEntry {
    pub keys: Vec<u32>,
    pub ch: char,
}

#[derive(Debug, Default)]
pub struct ParseStats {
    pub lines: usize,
    pub entries: usize,
    pub unknown_keysyms: usize,
    pub multi_char: usize,
    pub malformed: usize,
}

/// Compiled patterns for Compose file lines.
pub struct ComposeParser {
    line: Regex,
    key: Regex,
}

impl ComposeParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            line: Regex::new(r#"^\s*((?:<[^>\s]+>\s*)+):\s*"((?:[^"\\]|\\.)*)""#)?,
            key: Regex::new(r"<([^>\s]+)>")?,
        })
    }

    /// Parse one line of a Compose file.
    pub fn parse_line(&self, line: &str) -> std::result::Result<ComposeEntry, Skip> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Err(Skip::Blank);
        }
        if trimmed.starts_with("include") {
            return Err(Skip::Include);
        }

        let caps = self.line.captures(line).ok_or(Skip::Malformed)?;
        let mut keys = Vec::new();
        for key in self.key.captures_iter(&caps[1]) {
            let name = &key[1];
            let keyval = keysyms::keyval_from_name(name)
                .ok_or_else(|| Skip::UnknownKeysym(name.to_string()))?;
            keys.push(keyval);
        }

        let text = unescape(&caps[2]).ok_or(Skip::Malformed)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ComposeEntry { keys, ch }),
            _ => Err(Skip::MultiChar),
        }
    }
}

/// Undo the backslash escapes allowed inside result strings.
fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'x' | 'X' => {
                let mut value = 0u32;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) {
                    value = value.checked_mul(16)?.checked_add(d)?;
                    chars.next();
                }
                out.push(char::from_u32(value)?);
            }
            d @ '0'..='7' => {
                let mut value = d.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value)?);
            }
            other => out.push(other),
        }
    }
    Some(out)
}

/// Read every usable entry of a Compose file.
pub fn read_compose_file(path: &Path) -> Result<(Vec<ComposeEntry>, ParseStats)> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let parser = ComposeParser::new()?;

    let mut entries = Vec::new();
    let mut stats = ParseStats::default();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        stats.lines += 1;
        match parser.parse_line(&line) {
            Ok(entry) => entries.push(entry),
            Err(Skip::Blank | Skip::Include) => {}
            Err(Skip::UnknownKeysym(name)) => {
                tracing::debug!("line {}: unknown keysym <{}>", lineno + 1, name);
                stats.unknown_keysyms += 1;
            }
            Err(Skip::MultiChar) => stats.multi_char += 1,
            Err(Skip::Malformed) => {
                tracing::warn!("line {}: cannot parse {:?}", lineno + 1, line);
                stats.malformed += 1;
            }
        }
    }
    stats.entries = entries.len();
    Ok((entries, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcompose_core::keysyms::*;

    fn parse_line(line: &str) -> std::result::Result<ComposeEntry, Skip> {
        ComposeParser::new().unwrap().parse_line(line)
    }

    #[test]
    fn test_parse_dead_key_line() {
        let entry =
            parse_line(r#"<dead_acute> <e>   : "é"   eacute # LATIN SMALL LETTER E WITH ACUTE"#)
                .unwrap();
        assert_eq!(entry.keys, vec![DEAD_ACUTE, 0x65]);
        assert_eq!(entry.ch, 'é');
    }

    #[test]
    fn test_parse_multi_key_line() {
        let entry = parse_line(r#"<Multi_key> <minus> <minus> <minus> : "—" emdash"#).unwrap();
        assert_eq!(entry.keys, vec![MULTI_KEY, 0x2d, 0x2d, 0x2d]);
        assert_eq!(entry.ch, '—');
    }

    #[test]
    fn test_escaped_results() {
        let entry = parse_line(r#"<dead_diaeresis> <space> : "\"" quotedbl"#).unwrap();
        assert_eq!(entry.ch, '"');
        let entry = parse_line(r#"<Multi_key> <backslash> <backslash> : "\\" backslash"#).unwrap();
        assert_eq!(entry.ch, '\\');
    }

    #[test]
    fn test_unicode_keysym_names() {
        let entry = parse_line(r#"<Multi_key> <U2203> <slash> : "∄" U2204"#).unwrap();
        assert_eq!(entry.keys, vec![MULTI_KEY, 0x0100_2203, 0x2f]);
    }

    #[test]
    fn test_skipped_lines() {
        assert_eq!(parse_line("   "), Err(Skip::Blank));
        assert_eq!(parse_line("# UTF-8 (Unicode) compose sequences"), Err(Skip::Blank));
        assert_eq!(parse_line(r#"include "%L""#), Err(Skip::Include));
        assert_eq!(
            parse_line(r#"<Multi_key> <no_such_key> : "x""#),
            Err(Skip::UnknownKeysym("no_such_key".to_string()))
        );
        assert_eq!(parse_line(r#"<dead_acute> <j> : "ȷ́""#), Err(Skip::MultiChar));
        assert_eq!(parse_line("<dead_acute> <e> eacute"), Err(Skip::Malformed));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\tb").as_deref(), Some("atb"));
        assert_eq!(unescape(r"\101").as_deref(), Some("A"));
        assert_eq!(unescape(r"\x41").as_deref(), Some("A"));
        assert_eq!(unescape("\\"), None);
        assert_eq!(unescape(r"\x1f600").as_deref(), Some("😀"));
        assert_eq!(unescape(r"\xfffffffff0"), None);
    }
}
