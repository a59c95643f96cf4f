//! Lua module exporter
//!
//! ```lua
//! -- Auto-generated unicode data module
//! return {
//!   {
//!     code_point = "U+2192",
//!     character = "→",
//!     name = "RIGHTWARDS ARROW",
//!     category = "Sm",
//!     block = "Arrows",
//!     aliases = {
//!       "right arrow",
//!     },
//!   },
//! }
//! ```

use super::{aliases_for, ExportFormat, Exporter};
use crate::record::{AliasMap, CharacterMap};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Writes `unicode.<dataset>.lua`
#[derive(Debug, Clone, Copy, Default)]
pub struct LuaExporter;

/// Escape text for a double-quoted Lua string literal.
///
/// C0 controls other than `\n`, `\r` and `\t` become decimal escapes,
/// zero-padded to three digits so a following digit cannot extend them.
pub fn escape_lua(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(escaped, "\\{:03}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

impl Exporter for LuaExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Lua
    }

    fn write(
        &self,
        characters: &CharacterMap,
        aliases: &AliasMap,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "-- Auto-generated unicode data module")?;
        writeln!(out, "return {{")?;

        let mut buf = [0u8; 4];
        for record in characters.values() {
            writeln!(out, "  {{")?;
            writeln!(out, "    code_point = \"{}\",", record.code_point.to_prefixed())?;
            writeln!(
                out,
                "    character = \"{}\",",
                escape_lua(record.display_char.encode_utf8(&mut buf))
            )?;
            writeln!(out, "    name = \"{}\",", escape_lua(&record.name))?;
            writeln!(out, "    category = \"{}\",", escape_lua(&record.category))?;
            writeln!(out, "    block = \"{}\",", escape_lua(&record.block))?;

            let list = aliases_for(aliases, record);
            if list.is_empty() {
                writeln!(out, "    aliases = {{}},")?;
            } else {
                writeln!(out, "    aliases = {{")?;
                for alias in list {
                    writeln!(out, "      \"{}\",", escape_lua(alias))?;
                }
                writeln!(out, "    }},")?;
            }
            writeln!(out, "  }},")?;
        }

        writeln!(out, "}}")
    }
}
