//! A synonym-lookup engine backed by a memory-mapped binary dictionary.
//!
//! The dictionary is a double-array trie (surface word -> group IDs) plus a
//! table of synonym groups, built once from CSV and then opened read-only.
//! Lookup never mutates the dictionary and never touches the filesystem
//! beyond the initial `mmap`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐     ┌────────────┐     ┌─────────────┐
//! │ builder  │────▶│ dictionary │────▶│   engine    │
//! │ (CSV in) │     │ (mmap,     │     │ (stack of   │
//! │          │     │  header)   │     │  dicts)     │
//! └──────────┘     └────────────┘     └─────────────┘
//!        │                │                   │
//!        ▼                ▼                   ▼
//! ┌────────────────────────────────────────────────────┐
//! │     trie · idtable · synonym · group_list           │
//! │  (the sections a dictionary is composed of)          │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use chikkar::{BinaryDictionary, Engine};
//!
//! let dict = BinaryDictionary::open("synonym.dic", true)?;
//! let mut engine = Engine::new();
//! engine.add_dictionary(dict);
//!
//! let synonyms = engine.find("open", None)?;
//! ```

pub mod bytebuffer;
pub mod builder;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod flags;
pub mod group_list;
pub mod header;
pub mod idtable;
pub mod synonym;
#[cfg(test)]
pub mod testing;
pub mod trie;

pub use builder::build_dictionary;
pub use dictionary::BinaryDictionary;
pub use engine::Engine;
pub use error::{Error, Result};
pub use flags::Flags;
pub use header::{Header, HEADER_SIZE, SYSTEM_DICT_VERSION_1};
pub use synonym::{Synonym, SynonymGroup};
