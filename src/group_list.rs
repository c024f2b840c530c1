//! The synonym-group list: an offset index (`group_id -> byte_offset`) plus
//! an on-demand decoder for group bodies.
//!
//! Decoding never caches — callers that want to reuse a decoded group are
//! responsible for holding onto it themselves.

use std::collections::HashMap;

use crate::bytebuffer::ByteCursor;
use crate::synonym::{Synonym, SynonymGroup};

/// Borrowed view over the group index and the full underlying file, so
/// group bodies can be decoded lazily at their recorded offsets.
pub struct GroupList<'a> {
    file: &'a [u8],
    index: HashMap<i32, usize>,
}

impl<'a> GroupList<'a> {
    /// `bytes` is the full mapped file; `offset` is where the group index
    /// (`group_count: i32` then pairs) begins.
    pub fn read(bytes: &'a [u8], offset: usize) -> GroupList<'a> {
        let mut cur = ByteCursor::at(bytes, offset);
        let count = cur.read_i32() as usize;
        let mut index = HashMap::with_capacity(count);
        for _ in 0..count {
            let group_id = cur.read_i32();
            let byte_offset = cur.read_i32() as usize;
            index.insert(group_id, byte_offset);
        }
        GroupList { file: bytes, index }
    }

    /// Decode the group identified by `group_id`, or `None` if it is not in
    /// the index.
    pub fn get_synonym_group(&self, group_id: i32) -> Option<SynonymGroup> {
        let offset = *self.index.get(&group_id)?;
        let mut cur = ByteCursor::at(self.file, offset);
        let n = cur.read_u16() as usize;
        let synonyms = (0..n).map(|_| Synonym::read(&mut cur)).collect();
        Some(SynonymGroup::new(group_id, synonyms))
    }

    /// Every group ID present in the index, in arbitrary order.
    pub fn group_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.index.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytebuffer::ByteBuffer;
    use crate::flags::Flags;

    #[test]
    fn decodes_known_group() {
        // Build with bodies immediately after the index, matching the real layout.
        let mut index = ByteBuffer::new();
        index.write_i32(1);
        index.write_i32(6);
        // Placeholder offset, patched below once we know the index length.
        let patch_at = index.position();
        index.write_i32(0);

        let mut file = index.into_vec();
        let body_offset = file.len();
        file[patch_at..patch_at + 4].copy_from_slice(&(body_offset as i32).to_le_bytes());

        let mut body = ByteBuffer::new();
        body.write_u16(2);
        Synonym::new("open", vec![6], Flags::default(), "")
            .write(&mut body)
            .unwrap();
        Synonym::new(
            "オープン",
            vec![6],
            Flags {
                has_ambiguity: true,
                ..Default::default()
            },
            "",
        )
        .write(&mut body)
        .unwrap();
        file.extend_from_slice(body.as_slice());

        let list = GroupList::read(&file, 0);
        let group = list.get_synonym_group(6).expect("group 6 present");
        assert_eq!(group.group_id, 6);
        assert_eq!(group.synonyms.len(), 2);
        assert_eq!(group.find("open").unwrap().head_word, "open");
        assert!(group.find("オープン").unwrap().flags.has_ambiguity);
    }

    #[test]
    fn missing_group_is_none() {
        let mut index = ByteBuffer::new();
        index.write_i32(0);
        let list = GroupList::read(&index.into_vec(), 0);
        assert!(list.get_synonym_group(6).is_none());
    }
}
