//! CSV exporter
//!
//! ```text
//! code_point,character,name,category,block,alias_1,alias_2
//! U+0041,A,LATIN CAPITAL LETTER A,Lu,Basic Latin,latin letter a,la
//! ```
//!
//! There is one alias column per alias of the most aliased character;
//! shorter rows are padded with empty fields. Records end with CRLF and
//! fields are quoted only when they contain a comma, a quote or a line
//! break.

use super::{aliases_for, ExportFormat, Exporter};
use crate::record::{AliasMap, CharacterMap};
use std::borrow::Cow;
use std::io::{self, Write};

const FIXED_COLUMNS: [&str; 5] = ["code_point", "character", "name", "category", "block"];

/// Writes `unicode.<dataset>.csv`
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

/// Quote a field if it needs it
pub fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<'a>(out: &mut dyn Write, fields: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(quote_field(field).as_bytes())?;
    }
    out.write_all(b"\r\n")
}

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(
        &self,
        characters: &CharacterMap,
        aliases: &AliasMap,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let max_aliases = characters
            .values()
            .map(|record| aliases_for(aliases, record).len())
            .max()
            .unwrap_or(0);

        let alias_headers: Vec<String> = (1..=max_aliases).map(|i| format!("alias_{}", i)).collect();
        write_record(
            out,
            FIXED_COLUMNS
                .iter()
                .copied()
                .chain(alias_headers.iter().map(String::as_str)),
        )?;

        let mut buf = [0u8; 4];
        for record in characters.values() {
            let code_point = record.code_point.to_prefixed();
            let character: &str = record.display_char.encode_utf8(&mut buf);
            let list = aliases_for(aliases, record);
            let padding = std::iter::repeat("").take(max_aliases - list.len());

            write_record(
                out,
                [
                    code_point.as_str(),
                    character,
                    record.name.as_str(),
                    record.category.as_str(),
                    record.block.as_str(),
                ]
                .into_iter()
                .chain(list.iter().map(String::as_str))
                .chain(padding),
            )?;
        }
        Ok(())
    }
}
