//! The dictionary builder: parses a CSV synonym source and serializes the
//! trie, ID table, and group sections of the binary format. This is the
//! inverse of [`crate::dictionary::BinaryDictionary`] — the builder's
//! output, read back through the dictionary, MUST reproduce the input
//! groups exactly (see the build-then-read round trip in the test suite).
//!
//! The caller is responsible for writing the 272-byte header first; this
//! module only emits what follows it.

use std::collections::BTreeMap;
use std::io::{Seek, SeekFrom, Write};

use crate::bytebuffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::idtable;
use crate::synonym::Synonym;
use crate::trie;

/// Parse `csv_bytes` and write the trie, ID table, and group sections to
/// `writer` at its current position. Returns the number of groups written.
pub fn build_dictionary<W: Write + Seek>(csv_bytes: &[u8], writer: &mut W) -> Result<usize> {
    let groups = parse_groups(csv_bytes)?;

    // ---- trie staging: head_word -> ordered list of group IDs ----
    let mut word_groups: BTreeMap<Vec<u8>, Vec<u32>> = BTreeMap::new();
    for (group_id, synonyms) in &groups {
        for syn in synonyms {
            word_groups
                .entry(syn.head_word.as_bytes().to_vec())
                .or_default()
                .push(*group_id as u32);
        }
    }
    let keys: Vec<Vec<u8>> = word_groups.keys().cloned().collect();
    let records: Vec<Vec<u32>> = word_groups.into_values().collect();
    let (id_body, offsets) = idtable::stage(&records);
    let trie_entries: Vec<(Vec<u8>, u32)> = keys.into_iter().zip(offsets).collect();
    let trie_bytes = trie::build(&trie_entries);

    // ---- trie section ----
    writer.write_all(&((trie_bytes.len() / 4) as i32).to_le_bytes())?;
    writer.write_all(&trie_bytes)?;

    // ---- ID table ----
    writer.write_all(&(id_body.len() as i32).to_le_bytes())?;
    writer.write_all(&id_body)?;

    // ---- group index + bodies ----
    let index_start = writer.stream_position()?;
    let index_size = 4 + groups.len() as u64 * 8;
    writer.write_all(&vec![0u8; index_size as usize])?;

    let mut index_entries = Vec::with_capacity(groups.len());
    for (group_id, synonyms) in &groups {
        let body_offset = writer.stream_position()?;
        index_entries.push((*group_id, body_offset));

        let mut body = ByteBuffer::new();
        body.write_u16(synonyms.len() as u16);
        for syn in synonyms {
            syn.write(&mut body)?;
        }
        writer.write_all(body.as_slice())?;
    }

    let data_end = writer.stream_position()?;
    writer.seek(SeekFrom::Start(index_start))?;
    let mut index = ByteBuffer::new();
    index.write_i32(groups.len() as i32);
    for (group_id, offset) in &index_entries {
        index.write_i32(*group_id);
        index.write_i32(*offset as i32);
    }
    writer.write_all(index.as_slice())?;
    writer.seek(SeekFrom::Start(data_end))?;

    Ok(groups.len())
}

/// Parse the CSV source into `(group_id, synonyms)` pairs in first-seen
/// group order, applying blocking and per-row validation per the CSV row
/// schema. Groups with zero surviving rows are simply absent from the
/// result.
fn parse_groups(csv_bytes: &[u8]) -> Result<Vec<(i32, Vec<Synonym>)>> {
    let text = String::from_utf8_lossy(csv_bytes);

    let mut groups: Vec<(i32, Vec<Synonym>)> = Vec::new();
    let mut group_index: std::collections::HashMap<i32, usize> = std::collections::HashMap::new();
    let mut current_block_group: Option<i32> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let row_num = (line_idx + 1) as u64;

        if line.trim().is_empty() {
            current_block_group = None;
            continue;
        }

        let fields = split_csv_line(line)?;
        if fields.len() < 9 {
            return Err(Error::TooFewColumns {
                row: row_num,
                found: fields.len(),
            });
        }

        let group_id = parse_group_id(&fields[0], row_num)?;

        match current_block_group {
            None => current_block_group = Some(group_id),
            Some(expected) if expected != group_id => {
                return Err(Error::GroupIdChanged {
                    row: row_num,
                    expected,
                    found: group_id,
                });
            }
            _ => {}
        }

        let Some(synonym) = parse_row(&fields, group_id, row_num)? else {
            continue; // ambiguity == 2: row dropped silently
        };

        let idx = *group_index.entry(group_id).or_insert_with(|| {
            groups.push((group_id, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(synonym);
    }

    Ok(groups)
}

/// Split one non-blank CSV line into its fields, honouring quoting.
fn split_csv_line(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(record) => {
            let record = record?;
            Ok(record.iter().map(|f| f.to_string()).collect())
        }
        None => Ok(Vec::new()),
    }
}

fn parse_group_id(field: &str, row: u64) -> Result<i32> {
    field.trim().parse::<i32>().map_err(|_| Error::OutOfRange {
        row,
        column: "group_id",
        value: field.to_string(),
    })
}

/// Parse one surviving-candidate row into a `Synonym`, or `None` if its
/// ambiguity column is `2` (invalid, row dropped).
fn parse_row(fields: &[String], group_id: i32, row: u64) -> Result<Option<Synonym>> {
    let is_noun = match fields[1].trim() {
        "1" => true,
        "2" => false,
        other => {
            return Err(Error::BadEnumValue {
                row,
                column: "is_noun",
                value: other.to_string(),
            })
        }
    };

    let has_ambiguity = match fields[2].trim() {
        "0" => false,
        "1" => true,
        "2" => return Ok(None),
        other => {
            return Err(Error::BadEnumValue {
                row,
                column: "ambiguity",
                value: other.to_string(),
            })
        }
    };

    let lexeme_ids = parse_lexeme_ids(&fields[3], group_id, row)?;
    let form_type = parse_bounded(&fields[4], "form_type", 4, row)?;
    let acronym_type = parse_bounded(&fields[5], "acronym_type", 2, row)?;
    let variant_type = parse_bounded(&fields[6], "variant_type", 3, row)?;
    let category = fields[7].clone();
    let head_word = fields[8].clone();

    let flags = Flags {
        has_ambiguity,
        is_noun,
        form_type,
        acronym_type,
        variant_type,
    };

    Ok(Some(Synonym::new(head_word, lexeme_ids, flags, category)))
}

fn parse_lexeme_ids(field: &str, group_id: i32, row: u64) -> Result<Vec<i16>> {
    if field.trim().is_empty() {
        let id = i16::try_from(group_id).map_err(|_| Error::OutOfRange {
            row,
            column: "lexeme_ids",
            value: group_id.to_string(),
        })?;
        return Ok(vec![id]);
    }

    field
        .split('/')
        .map(|part| {
            part.trim().parse::<i16>().map_err(|_| Error::OutOfRange {
                row,
                column: "lexeme_ids",
                value: part.to_string(),
            })
        })
        .collect()
}

fn parse_bounded(field: &str, column: &'static str, limit: u8, row: u64) -> Result<u8> {
    let value: u8 = field.trim().parse().map_err(|_| Error::OutOfRange {
        row,
        column,
        value: field.to_string(),
    })?;
    if value > limit {
        return Err(Error::OutOfRange {
            row,
            column,
            value: value.to_string(),
        });
    }
    Ok(value)
}
