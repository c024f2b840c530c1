//! Double-array trie adapter.
//!
//! Wraps the `yada` double-array trie crate and exposes exact-match and
//! common-prefix-search over group-ID lists rather than raw trie values —
//! the trie's values are byte offsets into the [`IdTable`](crate::idtable::IdTable)
//! that follows it on disk.

use crate::idtable::IdTable;
use yada::DoubleArray;

/// Borrowed view over the trie section plus its trailing ID table.
pub struct Trie<'a> {
    trie_size: usize,
    da: DoubleArray<&'a [u8]>,
    id_table: IdTable<'a>,
}

impl<'a> Trie<'a> {
    /// `bytes` starts at the `trie_size: i32` field. Returns the view and
    /// the total number of bytes consumed (trie section + ID table).
    pub fn read(bytes: &'a [u8], offset: usize) -> (Trie<'a>, usize) {
        let trie_size =
            i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap()) as usize;
        let trie_bytes_len = trie_size * 4;
        let trie_start = offset + 4;
        let trie_bytes = &bytes[trie_start..trie_start + trie_bytes_len];
        let da = DoubleArray::new(trie_bytes);

        let id_table_offset = trie_start + trie_bytes_len;
        let (id_table, id_table_consumed) = IdTable::read(bytes, id_table_offset);

        let trie = Trie {
            trie_size,
            da,
            id_table,
        };
        (trie, 4 + trie_bytes_len + id_table_consumed)
    }

    /// Exact match on `key`; empty if absent.
    pub fn exact_match(&self, key: &[u8]) -> Vec<u32> {
        match self.da.exact_match_search(key) {
            Some(value) => self.id_table.get(value as usize),
            None => Vec::new(),
        }
    }

    /// Every prefix of `key[start..]` present in the trie, as
    /// `(group_id, matched_prefix_end)` pairs, where `matched_prefix_end` is
    /// the absolute offset into `key` (i.e. `start + matched_length`).
    pub fn common_prefix_search(&self, key: &[u8], start: usize) -> Vec<(u32, usize)> {
        let suffix = &key[start..];
        let mut out = Vec::new();
        for (value, matched_len) in self.da.common_prefix_search(suffix) {
            let end = start + matched_len;
            for gid in self.id_table.get(value as usize) {
                out.push((gid, end));
            }
        }
        out
    }

    /// Total on-disk size of this section, including the trie's own
    /// `trie_size: i32` prefix and the trailing ID table.
    pub fn storage_size(&self) -> usize {
        self.trie_size * 4 + 4 + self.id_table.storage_size()
    }
}

/// Build a trie cell array from sorted `(key, id_table_offset)` pairs.
///
/// Keys MUST already be sorted ascending by byte value — `yada`'s builder
/// requires it and does not sort internally.
pub fn build(entries: &[(Vec<u8>, u32)]) -> Vec<u8> {
    let keyset: Vec<(&[u8], u32)> = entries.iter().map(|(k, v)| (k.as_slice(), *v)).collect();
    yada::builder::DoubleArrayBuilder::build(&keyset)
        .expect("double-array trie construction failed: keys must be sorted and unique")
}
