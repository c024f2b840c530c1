//! The ID table: a view into the mapped bytes mapping a trie-value byte
//! offset to the list of group IDs stored there.
//!
//! Records are `{ n: u8, ids: n × u32-LE }`, concatenated with no index —
//! the trie itself supplies the byte offset of each record.

/// Borrowed view over the ID table body.
#[derive(Debug, Clone, Copy)]
pub struct IdTable<'a> {
    /// The table body, *excluding* the leading `size: i32`.
    body: &'a [u8],
}

impl<'a> IdTable<'a> {
    /// `bytes` starts at the `size: i32` field. Returns the table view and
    /// the total number of bytes consumed (`4 + size`).
    pub fn read(bytes: &'a [u8], offset: usize) -> (IdTable<'a>, usize) {
        let size = i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap()) as usize;
        let body = &bytes[offset + 4..offset + 4 + size];
        (IdTable { body }, 4 + size)
    }

    /// Read the group-ID list stored at byte `index` within the body.
    pub fn get(&self, index: usize) -> Vec<u32> {
        let n = self.body[index] as usize;
        let mut ids = Vec::with_capacity(n);
        let mut pos = index + 1;
        for _ in 0..n {
            ids.push(u32::from_le_bytes(self.body[pos..pos + 4].try_into().unwrap()));
            pos += 4;
        }
        ids
    }

    /// Total on-disk size of this section, including the `size: i32` prefix.
    pub fn storage_size(&self) -> usize {
        4 + self.body.len()
    }
}

/// Serialize a sequence of group-ID records into an ID-table body, returning
/// the body bytes and the byte offset assigned to each input record (in the
/// same order), for use as trie values during build.
pub fn stage(records: &[Vec<u32>]) -> (Vec<u8>, Vec<u32>) {
    let mut body = Vec::new();
    let mut offsets = Vec::with_capacity(records.len());
    for ids in records {
        offsets.push(body.len() as u32);
        body.push(ids.len() as u8);
        for id in ids {
            body.extend_from_slice(&id.to_le_bytes());
        }
    }
    (body, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_then_get_round_trips() {
        let records = vec![vec![6, 100006], vec![], vec![42]];
        let (body, offsets) = stage(&records);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(body.len() as i32).to_le_bytes());
        bytes.extend_from_slice(&body);

        let (table, consumed) = IdTable::read(&bytes, 0);
        assert_eq!(consumed, bytes.len());

        for (ids, &offset) in records.iter().zip(&offsets) {
            assert_eq!(&table.get(offset as usize), ids);
        }
    }

    #[test]
    fn storage_size_includes_prefix() {
        let (body, _) = stage(&[vec![1, 2, 3]]);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(body.len() as i32).to_le_bytes());
        bytes.extend_from_slice(&body);
        let (table, _) = IdTable::read(&bytes, 0);
        assert_eq!(table.storage_size(), 4 + body.len());
    }
}
