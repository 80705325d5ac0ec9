//! Flat sorted compose tables.
//!
//! A flat table is a sequence of fixed-width rows. Each row holds
//! `max_seq_len` keysyms (zero padded) followed by the high and low 16-bit
//! halves of the resulting code point. Rows must be sorted in ascending
//! lexicographic order on the keysym columns; lookups binary-search the rows
//! and an unsorted table simply produces missed or wrong matches.

use crate::compose_buffer::MAX_COMPOSE_LEN;
use crate::error::{ComposeError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Outcome of looking a buffered sequence up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// No row starts with the sequence.
    NoMatch,
    /// Rows start with the sequence but none ends there yet.
    Partial,
    /// A row ends exactly here, but longer rows share the prefix.
    Tentative(u32),
    /// A row ends exactly here and nothing extends it.
    Exact(u32),
}

impl Lookup {
    pub fn is_match(&self) -> bool {
        !matches!(self, Lookup::NoMatch)
    }
}

/// Compare a buffered sequence against the leading columns of a row.
///
/// Only the first `keys.len()` columns take part, so a row that merely
/// starts with the sequence compares equal.
pub(crate) fn compare_prefix(keys: &[u32], row: &[u16]) -> Ordering {
    for (key, &col) in keys.iter().zip(row) {
        match key.cmp(&(col as u32)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Binary search over `count` rows; `cmp(i)` orders the key against row `i`.
pub(crate) fn bsearch_rows(count: usize, cmp: impl Fn(usize) -> Ordering) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, count);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(mid) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// On-disk form of a flat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    pub max_seq_len: usize,
    pub rows: Vec<u16>,
}

/// A registered flat compose table.
#[derive(Debug, Clone)]
pub struct ComposeTable {
    data: Cow<'static, [u16]>,
    max_seq_len: usize,
    n_seqs: usize,
}

impl ComposeTable {
    /// Copy `n_seqs` rows of `max_seq_len + 2` columns out of `rows`.
    ///
    /// Rows must already be sorted; that is not checked here.
    pub fn new(rows: &[u16], max_seq_len: usize, n_seqs: usize) -> Result<Self> {
        let expected = Self::validate(rows.len(), max_seq_len, n_seqs)?;
        Ok(Self {
            data: Cow::Owned(rows[..expected].to_vec()),
            max_seq_len,
            n_seqs,
        })
    }

    /// Borrow rows from static data without copying.
    pub fn from_static(rows: &'static [u16], max_seq_len: usize, n_seqs: usize) -> Result<Self> {
        let expected = Self::validate(rows.len(), max_seq_len, n_seqs)?;
        Ok(Self {
            data: Cow::Borrowed(&rows[..expected]),
            max_seq_len,
            n_seqs,
        })
    }

    fn validate(len: usize, max_seq_len: usize, n_seqs: usize) -> Result<usize> {
        if max_seq_len == 0 || max_seq_len > MAX_COMPOSE_LEN {
            return Err(ComposeError::SequenceTooLong {
                max_seq_len,
                limit: MAX_COMPOSE_LEN,
            });
        }
        let expected = n_seqs * (max_seq_len + 2);
        if len < expected {
            return Err(ComposeError::TruncatedTable {
                expected,
                actual: len,
            });
        }
        Ok(expected)
    }

    /// Build a table from `(sequence, code point)` pairs, sorting the rows.
    ///
    /// Later duplicates replace earlier ones. Sequences longer than
    /// `max_seq_len` or containing keysyms above 0xffff cannot be encoded and
    /// are skipped; the number skipped is returned alongside the table.
    pub fn from_entries<I>(entries: I, max_seq_len: usize) -> Result<(Self, usize)>
    where
        I: IntoIterator<Item = (Vec<u32>, u32)>,
    {
        Self::validate(0, max_seq_len, 0)?;

        let mut sorted: BTreeMap<Vec<u16>, u32> = BTreeMap::new();
        let mut skipped = 0usize;
        for (seq, value) in entries {
            if seq.is_empty() || seq.len() > max_seq_len || seq.iter().any(|&k| k == 0 || k > 0xffff) {
                skipped += 1;
                continue;
            }
            let mut row: Vec<u16> = seq.iter().map(|&k| k as u16).collect();
            row.resize(max_seq_len, 0);
            sorted.insert(row, value);
        }

        let n_seqs = sorted.len();
        let mut data = Vec::with_capacity(n_seqs * (max_seq_len + 2));
        for (row, value) in sorted {
            data.extend_from_slice(&row);
            data.push((value >> 16) as u16);
            data.push((value & 0xffff) as u16);
        }

        Ok((
            Self {
                data: Cow::Owned(data),
                max_seq_len,
                n_seqs,
            },
            skipped,
        ))
    }

    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_seqs
    }

    pub fn is_empty(&self) -> bool {
        self.n_seqs == 0
    }

    fn row_stride(&self) -> usize {
        self.max_seq_len + 2
    }

    fn row(&self, index: usize) -> &[u16] {
        let stride = self.row_stride();
        &self.data[index * stride..(index + 1) * stride]
    }

    fn row_value(&self, row: &[u16]) -> u32 {
        0x10000 * row[self.max_seq_len] as u32 + row[self.max_seq_len + 1] as u32
    }

    /// Iterate rows as `(sequence, code point)`, sequences without padding.
    pub fn rows(&self) -> impl Iterator<Item = (Vec<u32>, u32)> + '_ {
        (0..self.n_seqs).map(move |i| {
            let row = self.row(i);
            let seq = row[..self.max_seq_len]
                .iter()
                .take_while(|&&k| k != 0)
                .map(|&k| k as u32)
                .collect();
            (seq, self.row_value(row))
        })
    }

    /// Look up a buffered sequence.
    pub fn check(&self, keys: &[u32]) -> Lookup {
        let n = keys.len();
        // A sequence longer than the rows can never match, and comparing it
        // would run past the keysym columns.
        if n == 0 || n > self.max_seq_len {
            return Lookup::NoMatch;
        }

        let Some(mut index) = bsearch_rows(self.n_seqs, |i| compare_prefix(keys, self.row(i)))
        else {
            return Lookup::NoMatch;
        };

        // Back up to the first row with this prefix so an exact match, which
        // sorts before its extensions, is the one inspected.
        while index > 0 && compare_prefix(keys, self.row(index - 1)) == Ordering::Equal {
            index -= 1;
        }

        let row = self.row(index);
        if n < self.max_seq_len && row[n] != 0 {
            return Lookup::Partial;
        }

        let value = self.row_value(row);
        let extended = index + 1 < self.n_seqs
            && compare_prefix(keys, self.row(index + 1)) == Ordering::Equal;
        if extended {
            Lookup::Tentative(value)
        } else {
            Lookup::Exact(value)
        }
    }

    pub fn to_table_file(&self) -> TableFile {
        TableFile {
            max_seq_len: self.max_seq_len,
            rows: self.data.to_vec(),
        }
    }

    pub fn from_table_file(file: TableFile) -> Result<Self> {
        let stride = file.max_seq_len + 2;
        let n_seqs = file.rows.len() / stride.max(1);
        Self::validate(file.rows.len(), file.max_seq_len, n_seqs)?;
        Ok(Self {
            data: Cow::Owned(file.rows),
            max_seq_len: file.max_seq_len,
            n_seqs,
        })
    }

    /// Load a bincode-encoded [`TableFile`].
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut f = File::open(path.as_ref())?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf)?;
        let file: TableFile = bincode::deserialize(&buf)?;
        Self::from_table_file(file)
    }

    /// Write the table as a bincode-encoded [`TableFile`].
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(&self.to_table_file())?;
        let mut f = File::create(path.as_ref())?;
        f.write_all(&bytes)?;
        Ok(())
    }

    /// Load a JSON-encoded [`TableFile`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file: TableFile = serde_json::from_str(&content)?;
        Self::from_table_file(file)
    }

    /// Load a table file, choosing the decoder by extension (`.json` or bincode).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_bincode(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keysyms::*;

    // Rows: max_seq_len 3, sorted.
    //   a b       -> X
    //   a b c     -> Y
    //   a d       -> Z (astral)
    //   q r s     -> W
    #[rustfmt::skip]
    static ROWS: [u16; 20] = [
        0x61, 0x62, 0,    0, 0x58,
        0x61, 0x62, 0x63, 0, 0x59,
        0x61, 0x64, 0,    1, 0xf600,
        0x71, 0x72, 0x73, 0, 0x57,
    ];

    fn table() -> ComposeTable {
        ComposeTable::from_static(&ROWS, 3, 4).unwrap()
    }

    #[test]
    fn test_partial_and_tentative() {
        let t = table();
        assert_eq!(t.check(&[0x61]), Lookup::Partial);
        assert_eq!(t.check(&[0x61, 0x62]), Lookup::Tentative(0x58));
        assert_eq!(t.check(&[0x61, 0x62, 0x63]), Lookup::Exact(0x59));
    }

    #[test]
    fn test_exact_high_plane_value() {
        assert_eq!(table().check(&[0x61, 0x64]), Lookup::Exact(0x1f600));
    }

    #[test]
    fn test_no_match() {
        let t = table();
        assert_eq!(t.check(&[0x62]), Lookup::NoMatch);
        assert_eq!(t.check(&[0x61, 0x65]), Lookup::NoMatch);
        assert_eq!(t.check(&[0x71, 0x72, 0x73, 0x74]), Lookup::NoMatch);
        assert_eq!(t.check(&[]), Lookup::NoMatch);
    }

    #[test]
    fn test_full_length_row() {
        assert_eq!(table().check(&[0x71, 0x72, 0x73]), Lookup::Exact(0x57));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            ComposeTable::new(&ROWS, 8, 1),
            Err(ComposeError::SequenceTooLong { .. })
        ));
        assert!(matches!(
            ComposeTable::new(&ROWS[..9], 3, 2),
            Err(ComposeError::TruncatedTable { expected: 10, actual: 9 })
        ));
    }

    #[test]
    fn test_from_entries_sorts_rows() {
        let (t, skipped) = ComposeTable::from_entries(
            vec![
                (vec![DEAD_ACUTE, 0x65], 0xe9),
                (vec![DEAD_ACUTE, 0x61], 0xe1),
                (vec![0x0100_1ebf], 0x41),
                (vec![MULTI_KEY, 0x6f, 0x63], 0xa9),
            ],
            3,
        )
        .unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(t.len(), 3);
        let rows: Vec<_> = t.rows().collect();
        assert_eq!(rows[0], (vec![DEAD_ACUTE, 0x61], 0xe1));
        assert_eq!(rows[1], (vec![DEAD_ACUTE, 0x65], 0xe9));
        assert_eq!(rows[2], (vec![MULTI_KEY, 0x6f, 0x63], 0xa9));
        assert_eq!(t.check(&[DEAD_ACUTE, 0x65]), Lookup::Exact(0xe9));
    }

    #[test]
    fn test_bincode_file_round_trip() {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("libcompose_test_table_{}_{}.bin", std::process::id(), stamp));

        table().save_bincode(&path).expect("save");
        let loaded = ComposeTable::load(&path).expect("load");
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.check(&[0x61, 0x62]), Lookup::Tentative(0x58));

        let _ = std::fs::remove_file(&path);
    }
}
