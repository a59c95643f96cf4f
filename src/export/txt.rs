//! Plain text exporter
//!
//! One character per line, searchable fields first:
//!
//! ```text
//! →|RIGHTWARDS ARROW|U+2192|Sm|Arrows|right arrow
//! ```
//!
//! Control characters are written as Rust-style escapes so every record
//! stays on one line.

use super::{aliases_for, ExportFormat, Exporter};
use crate::record::{AliasMap, CharacterMap};
use std::io::{self, Write};

/// Field separator
pub const SEPARATOR: char = '|';

/// Writes `unicode.<dataset>.txt`
#[derive(Debug, Clone, Copy, Default)]
pub struct TxtExporter;

fn escape_controls(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            let escaped: Vec<char> = if c.is_control() {
                c.escape_default().collect()
            } else {
                vec![c]
            };
            escaped
        })
        .collect()
}

impl Exporter for TxtExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Txt
    }

    fn write(
        &self,
        characters: &CharacterMap,
        aliases: &AliasMap,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for record in characters.values() {
            let mut line = format!(
                "{}{sep}{}{sep}{}{sep}{}{sep}{}",
                escape_controls(record.display_char.encode_utf8(&mut buf)),
                record.name,
                record.code_point.to_prefixed(),
                record.category,
                record.block,
                sep = SEPARATOR,
            );
            for alias in aliases_for(aliases, record) {
                line.push(SEPARATOR);
                line.push_str(&escape_controls(alias));
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
