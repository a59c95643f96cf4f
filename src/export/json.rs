//! JSON exporter
//!
//! A pretty-printed array of entries, non-ASCII text left unescaped:
//!
//! ```json
//! [
//!   {
//!     "code_point": "U+2192",
//!     "character": "→",
//!     "name": "RIGHTWARDS ARROW",
//!     "category": "Sm",
//!     "block": "Arrows",
//!     "aliases": ["right arrow"]
//!   }
//! ]
//! ```

use super::{aliases_for, ExportFormat, Exporter};
use crate::record::{AliasMap, CharacterMap, CharacterRecord};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Entry<'a> {
    code_point: String,
    character: char,
    name: &'a str,
    category: &'a str,
    block: &'a str,
    aliases: &'a [String],
}

impl<'a> Entry<'a> {
    fn new(record: &'a CharacterRecord, aliases: &'a AliasMap) -> Self {
        Self {
            code_point: record.code_point.to_prefixed(),
            character: record.display_char,
            name: &record.name,
            category: &record.category,
            block: &record.block,
            aliases: aliases_for(aliases, record),
        }
    }
}

/// Writes `unicode.<dataset>.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write(
        &self,
        characters: &CharacterMap,
        aliases: &AliasMap,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let entries: Vec<Entry<'_>> = characters
            .values()
            .map(|record| Entry::new(record, aliases))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries).map_err(io::Error::from)?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;
    use serde_json::Value;

    #[test]
    fn test_entries_in_code_point_order() {
        let (chars, aliases) = fixtures::index();
        let text = JsonExporter.render(&chars, &aliases).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let entries = value.as_array().unwrap();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["code_point"], "U+0009");
        assert_eq!(entries[0]["character"], "\t");
        assert_eq!(entries[0]["aliases"][1], "horizontal tabulation");
        assert_eq!(entries[2]["aliases"], Value::Array(vec![]));
        assert_eq!(entries[3]["character"], "→");
        assert_eq!(entries[3]["block"], "Arrows");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let (chars, aliases) = fixtures::index();
        let text = JsonExporter.render(&chars, &aliases).unwrap();
        assert!(text.contains("\"character\": \"→\""));
    }

    #[test]
    fn test_empty_index_is_empty_array() {
        let text = JsonExporter
            .render(&CharacterMap::new(), &AliasMap::new())
            .unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
