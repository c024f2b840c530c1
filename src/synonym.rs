// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value types for a single synonym entry and a synonym group, plus the
//! length-prefixed UTF-16-LE string codec their on-disk records share with
//! the header-adjacent category field.

use crate::bytebuffer::{ByteBuffer, ByteCursor};
use crate::flags::Flags;

/// One synonym entry within a [`SynonymGroup`]. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonym {
    pub head_word: String,
    pub lexeme_ids: Vec<i16>,
    pub flags: Flags,
    pub category: String,
}

impl Synonym {
    pub fn new(
        head_word: impl Into<String>,
        lexeme_ids: Vec<i16>,
        flags: Flags,
        category: impl Into<String>,
    ) -> Self {
        Synonym {
            head_word: head_word.into(),
            lexeme_ids,
            flags,
            category: category.into(),
        }
    }

    /// Serialize this synonym's record (head_word, lexeme_ids, flags, category).
    pub fn write(&self, buf: &mut ByteBuffer) -> Result<(), crate::error::Error> {
        write_prefixed_utf16(buf, &self.head_word);
        buf.write_u8(self.lexeme_ids.len() as u8);
        for id in &self.lexeme_ids {
            buf.write_i16(*id);
        }
        buf.write_u16(self.flags.encode()?);
        write_prefixed_utf16(buf, &self.category);
        Ok(())
    }

    /// Decode one synonym record from `cursor`, advancing it past the record.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Synonym {
        let head_word = read_prefixed_utf16(cursor);
        let n = cursor.read_u8() as usize;
        let mut lexeme_ids = Vec::with_capacity(n);
        for _ in 0..n {
            lexeme_ids.push(cursor.read_i16());
        }
        let flags = Flags::decode(cursor.read_u16());
        let category = read_prefixed_utf16(cursor);
        Synonym {
            head_word,
            lexeme_ids,
            flags,
            category,
        }
    }
}

/// A set of synonyms identified by a shared integer ID. Within a group,
/// head-words are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub group_id: i32,
    pub synonyms: Vec<Synonym>,
}

impl SynonymGroup {
    pub fn new(group_id: i32, synonyms: Vec<Synonym>) -> Self {
        SynonymGroup { group_id, synonyms }
    }

    /// The synonym in this group whose head-word equals `word`, if any.
    pub fn find(&self, word: &str) -> Option<&Synonym> {
        self.synonyms.iter().find(|s| s.head_word == word)
    }
}

/// Write `text` as a length-prefixed UTF-16-LE string: one byte if the
/// UTF-16 code-unit length is `< 128`, else two bytes encoding
/// `((L0 & 0x7F) << 8) | L1`.
pub fn write_prefixed_utf16(buf: &mut ByteBuffer, text: &str) {
    let units: Vec<u16> = text.encode_utf16().collect();
    let len = units.len();
    if len < 128 {
        buf.write_u8(len as u8);
    } else {
        let l0 = 0x80 | ((len >> 8) as u8 & 0x7F);
        let l1 = (len & 0xFF) as u8;
        buf.write_u8(l0);
        buf.write_u8(l1);
    }
    for unit in units {
        buf.write_u16(unit);
    }
}

/// Read a length-prefixed UTF-16-LE string per [`write_prefixed_utf16`].
pub fn read_prefixed_utf16(cursor: &mut ByteCursor<'_>) -> String {
    let l0 = cursor.read_u8();
    let len = if l0 < 128 {
        l0 as usize
    } else {
        let l1 = cursor.read_u8();
        (((l0 & 0x7F) as usize) << 8) | l1 as usize
    };
    let units: Vec<u16> = (0..len).map(|_| cursor.read_u16()).collect();
    String::from_utf16_lossy(&units)
}
