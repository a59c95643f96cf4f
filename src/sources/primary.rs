//! Primary character table parser (`UnicodeData.txt`)
//!
//! One semicolon-delimited record per line:
//!
//! ```text
//! 0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
//! ```
//!
//! Only the first three fields (code point, name, general category) are
//! used. Range markers such as `<CJK Ideograph, First>` are skipped: the
//! characters between them are not individually listed.

use super::{open, or_empty};
use crate::codepoint::CodePoint;
use crate::error::SourceError;
use crate::record::{CharacterMap, CharacterRecord};
use std::io::BufRead;
use std::path::Path;

/// Whether a name field is a `<..., First>` / `<..., Last>` range marker
pub fn is_range_marker(name: &str) -> bool {
    regex!(r"^<.*, (First|Last)>$").is_match(name)
}

/// Parse a single line.
///
/// Returns `Ok(None)` for lines that are legitimately skipped (blank lines,
/// range markers) and `Err` with a diagnostic for malformed records.
fn parse_line(line: &str) -> Result<Option<CharacterRecord>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(';');
    let (Some(hex), Some(name), Some(category)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("expected at least 3 fields in {:?}", line));
    };

    if is_range_marker(name) {
        return Ok(None);
    }

    let code_point =
        CodePoint::from_hex(hex).ok_or_else(|| format!("invalid code point {:?} - {}", hex, name))?;

    CharacterRecord::new(code_point, name, category)
        .map(Some)
        .ok_or_else(|| format!("code point {} is not a scalar value - {}", code_point, name))
}

/// Parse a primary table from a reader.
///
/// Malformed records are skipped with a diagnostic. I/O errors (including
/// invalid UTF-8) abort the read.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<CharacterMap, SourceError> {
    let mut characters = CharacterMap::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(record)) => {
                characters.insert(record.code_point, record);
            }
            Ok(None) => {}
            Err(msg) => {
                skipped += 1;
                log_warn!("line {}: skipping record: {}", index + 1, msg);
            }
        }
    }

    log_debug!(
        "parsed {} characters ({} malformed records skipped)",
        characters.len(),
        skipped
    );
    Ok(characters)
}

/// Parse a primary table held in memory
pub fn parse_str(text: &str) -> CharacterMap {
    // Reading from a byte slice cannot fail.
    parse_reader(text.as_bytes()).unwrap_or_default()
}

/// Parse the primary table at `path`; missing or unreadable files yield an
/// empty map.
pub fn parse_primary(path: impl AsRef<Path>) -> CharacterMap {
    let path = path.as_ref();
    let result = open(path).and_then(parse_reader);
    or_empty("primary character table", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(hex: &str) -> CodePoint {
        CodePoint::from_hex(hex).unwrap()
    }

    #[test]
    fn test_parse_single_record() {
        let chars = parse_str("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n");
        assert_eq!(chars.len(), 1);

        let record = &chars[&cp("0041")];
        assert_eq!(record.code_point.to_string(), "0041");
        assert_eq!(record.display_char, 'A');
        assert_eq!(record.name, "LATIN CAPITAL LETTER A");
        assert_eq!(record.category, "Lu");
        assert_eq!(record.block, "Basic Latin");
    }

    #[test]
    fn test_range_markers_are_skipped() {
        let text = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
                    4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n\
                    9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;\n\
                    0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;\n";
        let chars = parse_str(text);
        assert_eq!(chars.len(), 2);
        assert!(!chars.contains_key(&cp("4E00")));
        assert!(!chars.contains_key(&cp("9FFF")));
    }

    #[test]
    fn test_control_name_is_not_a_range_marker() {
        assert!(!is_range_marker("<control>"));
        assert!(is_range_marker("<Hangul Syllable, First>"));
        assert!(is_range_marker("<Plane 15 Private Use, Last>"));

        let chars = parse_str("0000;<control>;Cc;0;BN;;;;;N;NULL;;;;\n");
        assert_eq!(chars[&cp("0000")].name, "<control>");
        assert_eq!(chars[&cp("0000")].display_char, '\0');
    }

    #[test]
    fn test_bad_hex_is_skipped_and_parsing_continues() {
        let text = "ZZZZ;BROKEN;Lu;\n0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;\n";
        let chars = parse_str(text);
        assert_eq!(chars.len(), 1);
        assert!(chars.contains_key(&cp("0042")));
    }

    #[test]
    fn test_short_record_is_skipped() {
        let chars = parse_str("0041;ONLY TWO FIELDS\n\n");
        assert!(chars.is_empty());
    }

    #[test]
    fn test_astral_code_point_is_one_scalar() {
        let chars = parse_str("1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;\n");
        let record = &chars[&cp("1F600")];
        assert_eq!(record.display_char, '😀');
        assert_eq!(record.display_char.len_utf16(), 2);
        assert_eq!(record.block, "Emoticons");
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        let chars = parse_primary("/non/existent/UnicodeData.txt");
        assert!(chars.is_empty());
    }
}
