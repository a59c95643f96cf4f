//! Source file parsers
//!
//! Four independent parsers, one per input format:
//!
//! - [`primary`] - `UnicodeData.txt`, the primary character table
//! - [`formal`] - `NameAliases.txt`, formal aliases
//! - [`informative`] - `NamesList.txt`, informative aliases
//! - [`cldr`] - CLDR `annotations/*.xml`, localized annotations
//!
//! Every parser has a reader-based entry point that reports failures, and a
//! path-based entry point that degrades: a missing, unreadable or malformed
//! file is logged and yields an empty map. Files are opened inside the
//! path-based call and closed when it returns, on every path.

pub mod cldr;
pub mod formal;
pub mod informative;
pub mod primary;

use crate::codepoint::CodePoint;
use crate::error::SourceError;
use crate::record::SourceAliases;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Conventional file name of the primary character table
pub const UNICODE_DATA_FILE: &str = "UnicodeData.txt";
/// Conventional file name of the formal alias table
pub const NAME_ALIASES_FILE: &str = "NameAliases.txt";
/// Conventional file name of the names list
pub const NAMES_LIST_FILE: &str = "NamesList.txt";
/// Conventional file name of the English CLDR annotations
pub const CLDR_ANNOTATIONS_FILE: &str = "en.xml";

pub(crate) fn open(path: &Path) -> Result<BufReader<File>, SourceError> {
    Ok(BufReader::new(File::open(path)?))
}

/// Unwrap a parse result, logging the failure and substituting an empty map.
pub(crate) fn or_empty<T: Default>(what: &str, path: &Path, result: Result<T, SourceError>) -> T {
    match result {
        Ok(parsed) => parsed,
        Err(e) => {
            log_warn!(
                "{} {} contributed no data: {}",
                what,
                path.display(),
                e
            );
            T::default()
        }
    }
}

/// Append a trimmed alias, dropping blank ones.
pub(crate) fn push_alias(map: &mut SourceAliases, code_point: CodePoint, alias: &str) -> bool {
    let alias = alias.trim();
    if alias.is_empty() {
        return false;
    }
    map.entry(code_point).or_default().push(alias.to_string());
    true
}

/// Total number of aliases across all code points
pub fn alias_count(aliases: &SourceAliases) -> usize {
    aliases.values().map(Vec::len).sum()
}
