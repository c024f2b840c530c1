//! The lookup engine: a priority-ordered stack of dictionaries, ambiguity
//! and part-of-speech filtering, and head-word gathering.

use crate::dictionary::BinaryDictionary;
use crate::error::{Error, Result};

/// Stack of open dictionaries plus the verb/adjective inclusion switch.
#[derive(Default)]
pub struct Engine {
    /// Front (index 0) is highest priority.
    stack: Vec<BinaryDictionary>,
    verbs_enabled: bool,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            stack: Vec::new(),
            verbs_enabled: false,
        }
    }

    /// Prepend `dict` to the stack; later-added dictionaries take
    /// precedence over earlier ones.
    pub fn add_dictionary(&mut self, dict: BinaryDictionary) {
        self.stack.insert(0, dict);
    }

    pub fn enable_verb(&mut self) {
        self.verbs_enabled = true;
    }

    pub fn verbs_enabled(&self) -> bool {
        self.verbs_enabled
    }

    /// Resolve `word` to head-words per the stack, front to back. Stops at
    /// the first dictionary whose resolved group-ID set is non-empty.
    pub fn find(&self, word: &str, group_ids: Option<&[i32]>) -> Result<Vec<String>> {
        for dict in &self.stack {
            let gids = self.resolve(dict, word, group_ids);
            if gids.is_empty() {
                continue;
            }

            let mut out = Vec::new();
            for gid in gids {
                if let Some(mut words) = self.gather(word, gid, dict)? {
                    out.append(&mut words);
                }
            }
            return Ok(out);
        }
        Ok(Vec::new())
    }

    fn resolve(&self, dict: &BinaryDictionary, word: &str, group_ids: Option<&[i32]>) -> Vec<i32> {
        if dict.enable_trie() || group_ids.is_none() {
            dict.trie()
                .exact_match(word.as_bytes())
                .into_iter()
                .map(|g| g as i32)
                .collect()
        } else {
            group_ids.unwrap().to_vec()
        }
    }

    fn gather(&self, word: &str, gid: i32, dict: &BinaryDictionary) -> Result<Option<Vec<String>>> {
        let group_list = dict.group_list();
        let Some(group) = group_list.get_synonym_group(gid) else {
            return Ok(None);
        };

        let Some(matched) = group.find(word) else {
            return Err(Error::HeadWordMissing {
                word: word.to_string(),
                group_id: gid,
            });
        };

        if matched.flags.has_ambiguity {
            return Ok(None);
        }

        let words = group
            .synonyms
            .iter()
            .filter(|s| s.head_word != word && (self.verbs_enabled || s.flags.is_noun))
            .map(|s| s.head_word.clone())
            .collect();
        Ok(Some(words))
    }
}
