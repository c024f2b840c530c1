//! The binary dictionary: header + trie + group list composed around a
//! single read-only memory mapping.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};
use crate::group_list::GroupList;
use crate::header::{Header, HEADER_SIZE};
use crate::trie::Trie;

/// An opened, memory-mapped synonym dictionary.
///
/// Every view returned by [`trie`](BinaryDictionary::trie) or
/// [`group_list`](BinaryDictionary::group_list) borrows from this struct, so
/// the borrow checker rejects any attempt to use a view after the
/// dictionary that owns the mapping is dropped.
pub struct BinaryDictionary {
    mmap: Mmap,
    header: Header,
    /// Whether this dictionary re-derives groups from the surface word on
    /// every query rather than trusting caller-supplied group IDs.
    enable_trie: bool,
}

impl BinaryDictionary {
    /// Open and memory-map `path`, validating the header's version.
    pub fn open(path: impl AsRef<Path>, enable_trie: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        let mmap = unsafe { Mmap::map(&file)? };

        let header = Header::read(&mmap, 0);
        if !Header::is_dictionary(header.version) {
            return Err(Error::InvalidVersion(header.version));
        }

        Ok(BinaryDictionary {
            mmap,
            header,
            enable_trie,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Whether this dictionary always re-derives groups from the surface
    /// word (ignoring any caller-supplied group IDs).
    pub fn enable_trie(&self) -> bool {
        self.enable_trie
    }

    pub fn trie(&self) -> Trie<'_> {
        Trie::read(&self.mmap, HEADER_SIZE).0
    }

    pub fn group_list(&self) -> GroupList<'_> {
        let trie = self.trie();
        let group_index_offset = HEADER_SIZE + trie.storage_size();
        GroupList::read(&self.mmap, group_index_offset)
    }

    /// Release the memory mapping. Equivalent to dropping the dictionary;
    /// provided for parity with the source API's explicit `close()`.
    pub fn close(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_dictionary;
    use crate::header::SYSTEM_DICT_VERSION_1;
    use crate::testing::build_dict_file;
    use std::io::Write;

    #[test]
    fn opens_and_validates_version() {
        let csv = "6,1,0,,0,0,0,general,open\n";
        let path = build_dict_file(csv);
        let dict = BinaryDictionary::open(&path, true).unwrap();
        assert_eq!(dict.header().description, "test");
    }

    #[test]
    fn rejects_missing_file() {
        let err = BinaryDictionary::open("/nonexistent/path/does/not/exist.dic", true).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn rejects_bad_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let header = Header::new(0xDEAD_BEEF, 0, "");
        file.write_all(&header.write().unwrap()).unwrap();
        build_dictionary("6,1,0,,0,0,0,general,open\n".as_bytes(), &mut file).unwrap();
        let err = BinaryDictionary::open(file.path(), true).unwrap_err();
        assert!(matches!(err, Error::InvalidVersion(0xDEAD_BEEF)));
    }

    #[test]
    fn trie_and_group_list_agree() {
        let csv = "6,1,0,,0,0,0,general,open\n6,1,0,,0,0,0,general,開店\n";
        let path = build_dict_file(csv);
        let dict = BinaryDictionary::open(&path, true).unwrap();
        let gids = dict.trie().exact_match("open".as_bytes());
        assert_eq!(gids, vec![6]);
        let group = dict.group_list().get_synonym_group(6).unwrap();
        assert_eq!(group.synonyms.len(), 2);
    }
}
