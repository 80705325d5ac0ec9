//! Compact indexed compose table.
//!
//! Layout of `data`:
//!
//! - `index_size` index rows of `index_stride = max_seq_len + 1` columns:
//!   `[first_keysym, off[1], .., off[max_seq_len]]`, sorted by first keysym.
//!   Rows for sequences of total length `i + 1` sharing that first keysym
//!   live in `data[off[i]..off[i + 1]]`.
//! - the sequence blocks. A row of total length `L` holds the `L - 1`
//!   keysyms after the first one followed by the BMP code point, so its
//!   stride is `L`. Each block is sorted on the remaining keysyms.
//!
//! The built-in table is generated from [`crate::builtin_data`] on first use.

use crate::compose_buffer::MAX_COMPOSE_LEN;
use crate::error::{ComposeError, Result};
use crate::table::{bsearch_rows, compare_prefix, Lookup};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Longest sequence in the built-in table layout.
pub const BUILTIN_MAX_SEQ_LEN: usize = 5;

static BUILTIN: Lazy<CompactComposeTable> = Lazy::new(|| {
    let mut builder = CompactTableBuilder::new(BUILTIN_MAX_SEQ_LEN);
    for &(seq, value) in crate::builtin_data::BUILTIN_SEQUENCES {
        builder.insert(seq, value);
    }
    match builder.build() {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("built-in compose table rejected: {}", e);
            CompactComposeTable::empty(BUILTIN_MAX_SEQ_LEN)
        }
    }
});

/// Compose table indexed by first keysym.
#[derive(Debug, Clone)]
pub struct CompactComposeTable {
    data: Cow<'static, [u16]>,
    max_seq_len: usize,
    index_size: usize,
    index_stride: usize,
}

impl CompactComposeTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static CompactComposeTable {
        &BUILTIN
    }

    /// Wrap pre-generated data in the layout described in the module docs.
    ///
    /// The index is checked up front so lookups never index out of range.
    pub fn from_static(
        data: &'static [u16],
        max_seq_len: usize,
        index_size: usize,
        index_stride: usize,
    ) -> Result<Self> {
        let table = Self {
            data: Cow::Borrowed(data),
            max_seq_len,
            index_size,
            index_stride,
        };
        table.validate()?;
        Ok(table)
    }

    fn empty(max_seq_len: usize) -> Self {
        Self {
            data: Cow::Owned(Vec::new()),
            max_seq_len,
            index_size: 0,
            index_stride: max_seq_len + 1,
        }
    }

    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }

    /// Number of distinct first keysyms.
    pub fn index_size(&self) -> usize {
        self.index_size
    }

    pub fn index_stride(&self) -> usize {
        self.index_stride
    }

    fn validate(&self) -> Result<()> {
        if self.max_seq_len == 0 || self.max_seq_len > MAX_COMPOSE_LEN {
            return Err(ComposeError::SequenceTooLong {
                max_seq_len: self.max_seq_len,
                limit: MAX_COMPOSE_LEN,
            });
        }
        if self.index_stride != self.max_seq_len + 1 {
            return Err(ComposeError::MalformedIndex {
                row: 0,
                reason: "stride is not max_seq_len + 1",
            });
        }
        let index_end = self.index_size * self.index_stride;
        if self.data.len() < index_end {
            return Err(ComposeError::TruncatedTable {
                expected: index_end,
                actual: self.data.len(),
            });
        }

        let mut prev_first = None;
        for slot in 0..self.index_size {
            let row = self.index_row(slot);
            if prev_first.is_some_and(|p| p >= row[0]) {
                return Err(ComposeError::MalformedIndex {
                    row: slot,
                    reason: "first keysyms not sorted",
                });
            }
            prev_first = Some(row[0]);

            let offsets = &row[1..];
            if (offsets[0] as usize) < index_end {
                return Err(ComposeError::MalformedIndex {
                    row: slot,
                    reason: "offset points into the index",
                });
            }
            if offsets.windows(2).any(|w| w[1] < w[0]) {
                return Err(ComposeError::MalformedIndex {
                    row: slot,
                    reason: "offsets decrease",
                });
            }
            if offsets[offsets.len() - 1] as usize > self.data.len() {
                return Err(ComposeError::MalformedIndex {
                    row: slot,
                    reason: "offset past end of data",
                });
            }
            // block i holds rows of total length i + 1
            for (i, w) in offsets.windows(2).enumerate() {
                if (w[1] - w[0]) as usize % (i + 2) != 0 {
                    return Err(ComposeError::MalformedIndex {
                        row: slot,
                        reason: "block is not a whole number of rows",
                    });
                }
            }
        }
        Ok(())
    }

    fn index_row(&self, i: usize) -> &[u16] {
        &self.data[i * self.index_stride..(i + 1) * self.index_stride]
    }

    /// Look up a buffered sequence.
    ///
    /// An exact hit commits straight away: the layout cannot tell whether
    /// longer sequences extend it, so it never reports [`Lookup::Tentative`].
    pub fn check(&self, keys: &[u32]) -> Lookup {
        let n = keys.len();
        if n == 0 || n > self.max_seq_len {
            return Lookup::NoMatch;
        }

        let Some(slot) = bsearch_rows(self.index_size, |i| {
            keys[0].cmp(&(self.index_row(i)[0] as u32))
        }) else {
            tracing::trace!("compact: no");
            return Lookup::NoMatch;
        };

        if n == 1 {
            tracing::trace!("compact: yes");
            return Lookup::Partial;
        }

        let seq_index = self.index_row(slot);
        let rest = &keys[1..];
        for i in (n - 1)..self.max_seq_len {
            let row_stride = i + 1;
            let start = seq_index[i] as usize;
            let end = seq_index[i + 1] as usize;
            if end <= start {
                continue;
            }
            let block = &self.data[start..end];
            let count = block.len() / row_stride;
            let row = |j: usize| &block[j * row_stride..(j + 1) * row_stride];

            if let Some(j) = bsearch_rows(count, |j| compare_prefix(rest, row(j))) {
                if i == n - 1 {
                    let value = row(j)[row_stride - 1] as u32;
                    tracing::trace!("compact: U+{:04X}", value);
                    return Lookup::Exact(value);
                }
                tracing::trace!("compact: partial");
                return Lookup::Partial;
            }
        }

        tracing::trace!("compact: no");
        Lookup::NoMatch
    }
}

/// Builds a [`CompactComposeTable`] from `(sequence, code point)` entries.
#[derive(Debug, Clone)]
pub struct CompactTableBuilder {
    max_seq_len: usize,
    entries: BTreeMap<Vec<u16>, u16>,
}

impl CompactTableBuilder {
    pub fn new(max_seq_len: usize) -> Self {
        Self {
            max_seq_len,
            entries: BTreeMap::new(),
        }
    }

    /// Add a sequence; a later insert of the same sequence wins.
    pub fn insert(&mut self, seq: &[u16], value: u16) {
        self.entries.insert(seq.to_vec(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lay out the index and sequence blocks.
    ///
    /// Sequences must be 2..=`max_seq_len` keys long and the whole table must
    /// be addressable with 16-bit offsets.
    pub fn build(self) -> Result<CompactComposeTable> {
        let max = self.max_seq_len;
        if let Some((seq, _)) = self
            .entries
            .iter()
            .find(|(seq, _)| seq.len() < 2 || seq.len() > max)
        {
            return Err(ComposeError::SequenceTooLong {
                max_seq_len: seq.len(),
                limit: max,
            });
        }

        // first keysym -> sequence length -> rows (remaining keysyms + value)
        let mut groups: BTreeMap<u16, BTreeMap<usize, Vec<(&[u16], u16)>>> = BTreeMap::new();
        for (seq, &value) in &self.entries {
            groups
                .entry(seq[0])
                .or_default()
                .entry(seq.len())
                .or_default()
                .push((&seq[1..], value));
        }

        let index_stride = max + 1;
        let index_size = groups.len();
        let mut data = vec![0u16; index_size * index_stride];

        for (slot, (first, by_len)) in groups.iter().enumerate() {
            let base = slot * index_stride;
            data[base] = *first;
            data[base + 1] = offset(data.len())?;
            for len in 2..=max {
                if let Some(rows) = by_len.get(&len) {
                    // BTreeMap iteration already sorted the rows.
                    for (rest, value) in rows {
                        data.extend_from_slice(rest);
                        data.push(*value);
                    }
                }
                data[base + len] = offset(data.len())?;
            }
        }

        Ok(CompactComposeTable {
            data: Cow::Owned(data),
            max_seq_len: max,
            index_size,
            index_stride,
        })
    }
}

fn offset(pos: usize) -> Result<u16> {
    u16::try_from(pos).map_err(|_| ComposeError::TruncatedTable {
        expected: u16::MAX as usize,
        actual: pos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keysyms::*;

    fn small() -> CompactComposeTable {
        let mut b = CompactTableBuilder::new(5);
        b.insert(&[DEAD_ACUTE as u16, 0x65], 0xe9);
        b.insert(&[DEAD_ACUTE as u16, 0x61], 0xe1);
        b.insert(&[MULTI_KEY as u16, 0x2d, 0x2d, 0x2d], 0x2014);
        b.insert(&[MULTI_KEY as u16, 0x2d, 0x2d, 0x2e], 0x2013);
        b.insert(&[MULTI_KEY as u16, 0x6f, 0x63], 0xa9);
        b.build().unwrap()
    }

    #[test]
    fn test_layout() {
        let t = small();
        assert_eq!(t.index_size(), 2);
        assert_eq!(t.index_stride(), 6);
    }

    #[test]
    fn test_first_key_is_partial() {
        let t = small();
        assert_eq!(t.check(&[DEAD_ACUTE]), Lookup::Partial);
        assert_eq!(t.check(&[MULTI_KEY]), Lookup::Partial);
        assert_eq!(t.check(&[0x61]), Lookup::NoMatch);
    }

    #[test]
    fn test_exact_and_partial() {
        let t = small();
        assert_eq!(t.check(&[DEAD_ACUTE, 0x65]), Lookup::Exact(0xe9));
        assert_eq!(t.check(&[DEAD_ACUTE, 0x61]), Lookup::Exact(0xe1));
        assert_eq!(t.check(&[MULTI_KEY, 0x2d]), Lookup::Partial);
        assert_eq!(t.check(&[MULTI_KEY, 0x2d, 0x2d]), Lookup::Partial);
        assert_eq!(t.check(&[MULTI_KEY, 0x2d, 0x2d, 0x2d]), Lookup::Exact(0x2014));
        assert_eq!(t.check(&[MULTI_KEY, 0x6f, 0x63]), Lookup::Exact(0xa9));
    }

    #[test]
    fn test_no_match() {
        let t = small();
        assert_eq!(t.check(&[DEAD_ACUTE, 0x7a]), Lookup::NoMatch);
        assert_eq!(t.check(&[MULTI_KEY, 0x2d, 0x2d, 0x2f]), Lookup::NoMatch);
        assert_eq!(t.check(&[MULTI_KEY, 1, 2, 3, 4, 5]), Lookup::NoMatch);
    }

    #[test]
    fn test_builder_rejects_single_keys() {
        let mut b = CompactTableBuilder::new(5);
        b.insert(&[0x61], 0x61);
        assert!(b.build().is_err());
    }

    #[test]
    fn test_from_static_accepts_builder_layout() {
        static DATA: [u16; 8] = [
            DEAD_ACUTE as u16, 4, 8, 8, //
            0x61, 0xe1, 0x65, 0xe9,
        ];
        let t = CompactComposeTable::from_static(&DATA, 3, 1, 4).unwrap();
        assert_eq!(t.check(&[DEAD_ACUTE, 0x65]), Lookup::Exact(0xe9));
        assert_eq!(t.check(&[DEAD_ACUTE, 0x7a]), Lookup::NoMatch);
    }

    #[test]
    fn test_from_static_rejects_bad_offsets() {
        // offsets past the end of the data
        let past_end: &'static [u16] = &[0xfe51, 0, 100, 100, 100, 100, 100];
        assert!(CompactComposeTable::from_static(past_end, 5, 1, 6).is_err());

        // decreasing offsets
        let decreasing: &'static [u16] = &[0xfe51, 6, 4, 0x61, 0xe1];
        assert!(CompactComposeTable::from_static(decreasing, 2, 1, 3).is_err());

        // block that is not a whole number of rows
        let ragged: &'static [u16] = &[0xfe51, 3, 6, 0x61, 0xe1, 0x65];
        assert!(CompactComposeTable::from_static(ragged, 2, 1, 3).is_err());

        // index longer than the data
        let short: &'static [u16] = &[0xfe51, 3];
        assert!(CompactComposeTable::from_static(short, 2, 1, 3).is_err());

        // stride that disagrees with max_seq_len
        let stride: &'static [u16] = &[0xfe51, 3, 3];
        assert!(CompactComposeTable::from_static(stride, 5, 1, 3).is_err());
    }

    #[test]
    fn test_builtin_table() {
        let t = CompactComposeTable::builtin();
        assert!(t.index_size() > 10);
        assert_eq!(t.check(&[DEAD_ACUTE, 0x65]), Lookup::Exact(0xe9));
        assert_eq!(t.check(&[DEAD_GRAVE, 0x61]), Lookup::Exact(0xe0));
        assert_eq!(t.check(&[MULTI_KEY, 0x6f, 0x63]), Lookup::Exact(0xa9));
        assert_eq!(t.check(&[MULTI_KEY, 0x73, 0x73]), Lookup::Exact(0xdf));
        assert_eq!(t.check(&[MULTI_KEY, 0x2d, 0x2d, 0x2d]), Lookup::Exact(0x2014));
        assert_eq!(t.check(&[MULTI_KEY, 0x2d, 0x2d]), Lookup::Partial);
    }
}
