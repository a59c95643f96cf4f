//! Master snapshot of a merged index
//!
//! Saving the merged index lets repeated exports skip re-parsing the source
//! files. The document shape is:
//!
//! ```json
//! {
//!   "characters": {
//!     "0041": {
//!       "name": "LATIN CAPITAL LETTER A",
//!       "category": "Lu",
//!       "display_char": "A",
//!       "block": "Basic Latin"
//!     }
//!   },
//!   "aliases": {
//!     "0041": ["latin letter a", "la"]
//!   }
//! }
//! ```

use crate::codepoint::CodePoint;
use crate::error::SnapshotError;
use crate::record::{AliasMap, AliasSet, CharacterMap, CharacterRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Conventional snapshot file name
pub const SNAPSHOT_FILE_NAME: &str = "unicode_master_data.json";

/// Character entry as stored in the snapshot; the code point is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredCharacter {
    name: String,
    category: String,
    display_char: char,
    block: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    characters: BTreeMap<CodePoint, StoredCharacter>,
    #[serde(default)]
    aliases: BTreeMap<CodePoint, AliasSet>,
}

impl Snapshot {
    fn from_index(characters: &CharacterMap, aliases: &AliasMap) -> Self {
        let characters = characters
            .iter()
            .map(|(cp, record)| {
                (
                    *cp,
                    StoredCharacter {
                        name: record.name.clone(),
                        category: record.category.clone(),
                        display_char: record.display_char,
                        block: record.block.clone(),
                    },
                )
            })
            .collect();
        Self {
            characters,
            aliases: aliases.clone(),
        }
    }

    fn into_index(self) -> Result<(CharacterMap, AliasMap), SnapshotError> {
        if self.characters.is_empty() {
            return Err(SnapshotError::Empty);
        }
        let mut characters = CharacterMap::new();
        for (code_point, stored) in self.characters {
            if code_point.to_char() != Some(stored.display_char) {
                return Err(SnapshotError::Inconsistent {
                    code_point: code_point.to_string(),
                    reason: format!("display_char {:?} does not match", stored.display_char),
                });
            }
            characters.insert(
                code_point,
                CharacterRecord {
                    code_point,
                    display_char: stored.display_char,
                    name: stored.name,
                    category: stored.category,
                    block: stored.block,
                },
            );
        }
        Ok((characters, self.aliases))
    }
}

/// Serialize an index to a pretty-printed snapshot document
pub fn to_json(characters: &CharacterMap, aliases: &AliasMap) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&Snapshot::from_index(
        characters, aliases,
    ))?)
}

/// Rebuild an index from a snapshot document
pub fn from_json(text: &str) -> Result<(CharacterMap, AliasMap), SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    snapshot.into_index()
}

/// Write a snapshot file, creating parent directories as needed.
///
/// Refuses to write an index without characters.
pub fn save(
    path: impl AsRef<Path>,
    characters: &CharacterMap,
    aliases: &AliasMap,
) -> Result<(), SnapshotError> {
    if characters.is_empty() {
        return Err(SnapshotError::Empty);
    }
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &Snapshot::from_index(characters, aliases))?;
    writer.flush()?;

    log_info!(
        "saved snapshot {} ({} characters)",
        path.display(),
        characters.len()
    );
    Ok(())
}

/// Read a snapshot file.
///
/// A snapshot without characters is rejected like a malformed one.
pub fn load(path: impl AsRef<Path>) -> Result<(CharacterMap, AliasMap), SnapshotError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    let (characters, aliases) = snapshot.into_index()?;

    log_info!(
        "loaded snapshot {} ({} characters, {} aliases)",
        path.display(),
        characters.len(),
        aliases.values().map(AliasSet::len).sum::<usize>()
    );
    Ok((characters, aliases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{merge, CasePolicy, MergeOptions};
    use crate::sources::{formal, primary};

    fn fixture(policy: CasePolicy) -> (CharacterMap, AliasMap) {
        let chars = primary::parse_str(
            "0000;<control>;Cc;0;BN;;;;;N;NULL;;;;\n\
             0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
             1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;\n",
        );
        let formal = formal::parse_str("0000;NULL;control\n0041;Latin Letter A;correction\n");
        let options = MergeOptions::new().with_case_policy(policy);
        let aliases = merge(&chars, &formal, &Default::default(), None, &options);
        (chars, aliases)
    }

    #[test]
    fn test_round_trip_is_lossless() {
        for policy in [CasePolicy::Normalized, CasePolicy::PreserveFirst] {
            let (chars, aliases) = fixture(policy);
            let json = to_json(&chars, &aliases).unwrap();
            let (c, a) = from_json(&json).unwrap();
            assert_eq!(c, chars);
            assert_eq!(a, aliases);
        }
    }

    #[test]
    fn test_document_shape() {
        let (chars, aliases) = fixture(CasePolicy::Normalized);
        let json = to_json(&chars, &aliases).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let a = &value["characters"]["0041"];
        assert_eq!(a["name"], "LATIN CAPITAL LETTER A");
        assert_eq!(a["category"], "Lu");
        assert_eq!(a["display_char"], "A");
        assert_eq!(a["block"], "Basic Latin");
        assert_eq!(value["aliases"]["0041"][0], "latin letter a");
        assert_eq!(value["characters"]["1F600"]["display_char"], "😀");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(from_json("{not json"), Err(SnapshotError::Json(_))));
        assert!(matches!(
            from_json(r#"{"characters": {"XYZ": {}}}"#),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn test_mismatched_display_char_is_rejected() {
        let doc = r#"{"characters": {"0041": {
            "name": "LATIN CAPITAL LETTER A", "category": "Lu",
            "display_char": "B", "block": "Basic Latin"}}, "aliases": {}}"#;
        assert!(matches!(
            from_json(doc),
            Err(SnapshotError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_missing_aliases_field_defaults_to_empty() {
        let doc = r#"{"characters": {"0041": {
            "name": "LATIN CAPITAL LETTER A", "category": "Lu",
            "display_char": "A", "block": "Basic Latin"}}}"#;
        let (c, a) = from_json(doc).unwrap();
        assert_eq!(c.len(), 1);
        assert!(a.is_empty());
    }

    #[test]
    fn test_empty_characters_are_rejected() {
        let doc = r#"{"characters": {}, "aliases": {}}"#;
        assert!(matches!(from_json(doc), Err(SnapshotError::Empty)));
    }

    #[test]
    fn test_save_refuses_empty_index() {
        let result = save(
            std::env::temp_dir().join("glyph-index-never-written.json"),
            &CharacterMap::new(),
            &AliasMap::new(),
        );
        assert!(matches!(result, Err(SnapshotError::Empty)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load("/non/existent/unicode_master_data.json"),
            Err(SnapshotError::Io(_))
        ));
    }
}
