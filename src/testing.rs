//! Test fixtures shared across this crate's unit test modules.
//!
//! Every module under test (`builder`, `dictionary`, `engine`) was building
//! the same "write a header, run the builder, hand back a path" dance with
//! slightly different copy-pasted glue; this is the canonical version.

#![cfg(test)]

use std::io::Write;

use crate::builder::build_dictionary;
use crate::dictionary::BinaryDictionary;
use crate::header::{Header, SYSTEM_DICT_VERSION_1};

/// Build a dictionary file from `csv` and return its path. The temp file is
/// deleted when the returned `TempPath` is dropped.
pub fn build_dict_file(csv: &str) -> tempfile::TempPath {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let header = Header::new(SYSTEM_DICT_VERSION_1, 0, "test");
    file.write_all(&header.write().unwrap()).unwrap();
    build_dictionary(csv.as_bytes(), &mut file).unwrap();
    file.into_temp_path()
}

/// Build a dictionary from `csv` and open it in one step.
pub fn open_dict(csv: &str, enable_trie: bool) -> BinaryDictionary {
    BinaryDictionary::open(build_dict_file(csv), enable_trie).unwrap()
}

/// The "open"/group #6 fixture used by several scenario tests: three system
/// synonyms for "open" (one ambiguous) plus a second group, #100006.
pub const OPEN_GROUP_CSV: &str = "\
6,1,0,,0,0,0,general,open
6,1,0,,0,0,0,general,開店
6,2,1,,0,0,0,general,オープン
";
