//! Index exporters
//!
//! Each format implements [`Exporter`] over a character map, its alias map
//! and any [`Write`] destination. [`write_all`] drives the exporters that an
//! [`ExportOptions`] selects and names the output files
//! `unicode.<dataset>.<ext>`.

pub mod csv;
pub mod json;
pub mod lua;
pub mod txt;

use crate::filter::filter_by_blocks;
use crate::record::{AliasMap, CharacterMap, CharacterRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use self::lua::LuaExporter;
pub use self::txt::TxtExporter;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, one alias per column
    Csv,
    /// Array of entry objects
    Json,
    /// Lua module returning a table of entries
    Lua,
    /// Pipe-separated, one character per line
    Txt,
}

impl ExportFormat {
    /// Every format
    pub fn all() -> [ExportFormat; 4] {
        [Self::Csv, Self::Json, Self::Lua, Self::Txt]
    }

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Lua => "lua",
            Self::Txt => "txt",
        }
    }

    /// Output file name for a dataset
    pub fn file_name(self, dataset: &str) -> String {
        format!("unicode.{}.{}", dataset, self.extension())
    }

    /// Parse an extension-style name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(name))
    }

    /// The exporter for this format
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
            Self::Lua => Box::new(LuaExporter),
            Self::Txt => Box::new(TxtExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serializes an index to one output format
pub trait Exporter {
    /// Format produced
    fn format(&self) -> ExportFormat;

    /// Write every character of `characters`, in code point order, with its
    /// aliases from `aliases`.
    fn write(
        &self,
        characters: &CharacterMap,
        aliases: &AliasMap,
        out: &mut dyn Write,
    ) -> io::Result<()>;

    /// Render to a string
    fn render(&self, characters: &CharacterMap, aliases: &AliasMap) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write(characters, aliases, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// What to export and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory receiving the output files
    pub output_dir: PathBuf,
    /// Dataset name used in file names
    pub dataset: String,
    /// Formats to write
    pub formats: Vec<ExportFormat>,
    /// Blocks to keep; `None` keeps everything
    pub blocks: Option<Vec<String>>,
    /// Master snapshot to export from instead of parsing
    pub snapshot_path: Option<PathBuf>,
}

impl ExportOptions {
    /// All formats, no filtering, no snapshot
    pub fn new(output_dir: impl Into<PathBuf>, dataset: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dataset: dataset.into(),
            formats: ExportFormat::all().to_vec(),
            blocks: None,
            snapshot_path: None,
        }
    }

    /// Restrict to the given formats
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Restrict to the given blocks
    pub fn with_blocks<S: Into<String>>(mut self, blocks: impl IntoIterator<Item = S>) -> Self {
        self.blocks = Some(blocks.into_iter().map(Into::into).collect());
        self
    }

    /// Use a master snapshot
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Path of the file written for `format`
    pub fn output_path(&self, format: ExportFormat) -> PathBuf {
        self.output_dir.join(format.file_name(&self.dataset))
    }
}

/// Filter by the configured blocks, then write one file per format.
///
/// Returns the written paths in format order.
pub fn write_all(
    characters: &CharacterMap,
    aliases: &AliasMap,
    options: &ExportOptions,
) -> io::Result<Vec<PathBuf>> {
    let (characters, aliases) = filter_by_blocks(characters, aliases, options.blocks.as_deref());
    std::fs::create_dir_all(&options.output_dir)?;

    let mut written = Vec::with_capacity(options.formats.len());
    for &format in &options.formats {
        let path = options.output_path(format);
        let mut out = BufWriter::new(File::create(&path)?);
        format.exporter().write(&characters, &aliases, &mut out)?;
        out.flush()?;

        log_info!(
            "wrote {} characters to {}",
            characters.len(),
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}

/// Aliases of a code point, empty if it has none
pub(crate) fn aliases_for<'a>(aliases: &'a AliasMap, record: &CharacterRecord) -> &'a [String] {
    aliases
        .get(&record.code_point)
        .map(|set| set.as_slice())
        .unwrap_or(&[])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Csv.file_name("every-day"), "unicode.every-day.csv");
        assert_eq!(ExportFormat::Lua.file_name("complete"), "unicode.complete.lua");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ExportFormat::from_name("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_name("xml"), None);
    }

    #[test]
    fn test_exporter_reports_its_format() {
        for format in ExportFormat::all() {
            assert_eq!(format.exporter().format(), format);
        }
    }

    #[test]
    fn test_options_builder() {
        let options = ExportOptions::new("/tmp/out", "every-day")
            .with_formats([ExportFormat::Txt])
            .with_blocks(["Arrows"]);
        assert_eq!(options.formats, vec![ExportFormat::Txt]);
        assert_eq!(options.blocks, Some(vec!["Arrows".to_string()]));
        assert_eq!(
            options.output_path(ExportFormat::Txt),
            PathBuf::from("/tmp/out/unicode.every-day.txt")
        );
    }
}
