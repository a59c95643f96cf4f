//! Formal alias parser (`NameAliases.txt`)
//!
//! ```text
//! # comment
//! 0000;NULL;control
//! 0000;NUL;abbreviation
//! ```
//!
//! The alias type tag (third field) is not kept. Aliases accumulate per code
//! point in file order; no case normalization happens here.

use super::{open, or_empty, push_alias};
use crate::codepoint::CodePoint;
use crate::error::SourceError;
use crate::record::SourceAliases;
use std::io::BufRead;
use std::path::Path;

/// Parse formal aliases from a reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SourceAliases, SourceError> {
    let mut aliases = SourceAliases::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(';');
        let (Some(hex), Some(alias)) = (fields.next(), fields.next()) else {
            log_warn!("line {}: expected at least 2 fields in {:?}", index + 1, line);
            continue;
        };

        match CodePoint::from_hex(hex) {
            Some(code_point) => {
                push_alias(&mut aliases, code_point, alias);
            }
            None => log_warn!("line {}: invalid code point {:?}", index + 1, hex),
        }
    }

    log_debug!(
        "parsed {} formal aliases for {} code points",
        super::alias_count(&aliases),
        aliases.len()
    );
    Ok(aliases)
}

/// Parse formal aliases held in memory
pub fn parse_str(text: &str) -> SourceAliases {
    parse_reader(text.as_bytes()).unwrap_or_default()
}

/// Parse the formal alias file at `path`; failures yield an empty map.
pub fn parse_formal_aliases(path: impl AsRef<Path>) -> SourceAliases {
    let path = path.as_ref();
    let result = open(path).and_then(parse_reader);
    or_empty("formal alias file", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_accumulate_in_file_order() {
        let text = "0000;NULL;control;\n\
                    0000;NUL;abbreviation;\n\
                    0041;LATIN LETTER A;correction;\n\
                    0041;LA;abbreviation;\n";
        let aliases = parse_str(text);
        assert_eq!(aliases.len(), 2);

        let nul = &aliases[&CodePoint::from_hex("0000").unwrap()];
        assert_eq!(nul, &vec!["NULL".to_string(), "NUL".to_string()]);

        let a = &aliases[&CodePoint::from_char('A')];
        assert_eq!(a, &vec!["LATIN LETTER A".to_string(), "LA".to_string()]);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# NameAliases-16.0.0.txt\n\n   \n#0041;NOT AN ALIAS;x\n0041;LA;abbreviation\n";
        let aliases = parse_str(text);
        assert_eq!(aliases[&CodePoint::from_char('A')], vec!["LA".to_string()]);
    }

    #[test]
    fn test_single_field_lines_are_skipped() {
        let aliases = parse_str("0041\n0042;LB;abbreviation\n");
        assert_eq!(aliases.len(), 1);
        assert!(aliases.contains_key(&CodePoint::from_char('B')));
    }

    #[test]
    fn test_two_fields_are_enough() {
        let aliases = parse_str("0041;LA\n");
        assert_eq!(aliases[&CodePoint::from_char('A')], vec!["LA".to_string()]);
    }

    #[test]
    fn test_case_is_preserved() {
        let aliases = parse_str("0041;Latin Letter A;correction\n");
        assert_eq!(aliases[&CodePoint::from_char('A')][0], "Latin Letter A");
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        assert!(parse_formal_aliases("/non/existent/NameAliases.txt").is_empty());
    }
}
