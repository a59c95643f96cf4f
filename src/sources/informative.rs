//! Informative alias parser (`NamesList.txt`)
//!
//! The names list is line oriented and nested. An unindented line opens a
//! code point entry; tab-indented lines below it annotate that entry until
//! the next unindented line:
//!
//! ```text
//! @@	0000	C0 Controls and Basic Latin	007F
//! 0041	LATIN CAPITAL LETTER A
//! 	= first letter of the Latin alphabet
//! 	* used for counting
//! 	x (latin small letter a - 0061)
//! ```
//!
//! `=` lines are informative aliases. `*` lines are notes; a note is kept
//! only when it is shorter than [`MAX_NOTE_CHARS`] characters and has no
//! parentheses, which rules out cross-references to other characters.

use super::{open, or_empty, push_alias};
use crate::codepoint::CodePoint;
use crate::error::SourceError;
use crate::record::SourceAliases;
use std::io::BufRead;
use std::path::Path;

/// Notes this long or longer are not treated as aliases
pub const MAX_NOTE_CHARS: usize = 50;

/// Whether a `*` note reads as a name rather than a description
pub fn is_alias_like_note(note: &str) -> bool {
    note.chars().count() < MAX_NOTE_CHARS && !note.contains('(') && !note.contains(')')
}

/// Line-by-line state machine over the names list
#[derive(Debug, Default)]
struct NamesListState {
    current: Option<CodePoint>,
    aliases: SourceAliases,
}

impl NamesListState {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('@') || line.starts_with(';') {
            return;
        }

        if !raw.starts_with('\t') {
            self.current = parse_header(line);
            return;
        }

        let Some(code_point) = self.current else {
            return;
        };

        if let Some(alias) = line.strip_prefix('=') {
            push_alias(&mut self.aliases, code_point, alias);
        } else if let Some(note) = line.strip_prefix('*') {
            let note = note.trim();
            if is_alias_like_note(note) {
                push_alias(&mut self.aliases, code_point, note);
            }
        }
    }
}

/// Code point of a `<hex>\t<name>` header, or `None` if the header is
/// malformed.
fn parse_header(line: &str) -> Option<CodePoint> {
    let tab = memchr::memchr(b'\t', line.as_bytes())?;
    CodePoint::from_hex(&line[..tab])
}

/// Parse informative aliases from a reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SourceAliases, SourceError> {
    let mut state = NamesListState::default();
    for line in reader.lines() {
        state.feed(&line?);
    }

    log_debug!(
        "parsed {} informative aliases for {} code points",
        super::alias_count(&state.aliases),
        state.aliases.len()
    );
    Ok(state.aliases)
}

/// Parse a names list held in memory
pub fn parse_str(text: &str) -> SourceAliases {
    parse_reader(text.as_bytes()).unwrap_or_default()
}

/// Parse the names list at `path`; failures yield an empty map.
pub fn parse_informative_aliases(path: impl AsRef<Path>) -> SourceAliases {
    let path = path.as_ref();
    let result = open(path).and_then(parse_reader);
    or_empty("names list", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases_of<'a>(map: &'a SourceAliases, hex: &str) -> Option<&'a Vec<String>> {
        map.get(&CodePoint::from_hex(hex).unwrap())
    }

    #[test]
    fn test_equals_and_star_lines() {
        let text = "0041\tLATIN CAPITAL LETTER A\n\
                    \t= first letter of the Latin alphabet\n\
                    \t* used for ...\n\
                    0042\tLATIN CAPITAL LETTER B\n\
                    \t= second letter of the Latin alphabet\n";
        let map = parse_str(text);
        assert_eq!(map.len(), 2);
        assert_eq!(
            aliases_of(&map, "0041").unwrap(),
            &vec![
                "first letter of the Latin alphabet".to_string(),
                "used for ...".to_string()
            ]
        );
        assert_eq!(aliases_of(&map, "0042").unwrap().len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "@@\t0000\tC0 Controls and Basic Latin\t007F\r\n\
                    0041\tLATIN CAPITAL LETTER A\r\n\
                    \t= first letter\r\n\
                    \t* used for counting\r\n\
                    0042\tLATIN CAPITAL LETTER B\r\n";
        let map = parse_str(text);
        assert_eq!(map.len(), 1);
        assert_eq!(
            aliases_of(&map, "0041").unwrap(),
            &vec!["first letter".to_string(), "used for counting".to_string()]
        );
    }

    #[test]
    fn test_notes_with_parentheses_are_excluded() {
        let text = "0030\tDIGIT ZERO\n\
                    \t* used for ... (cf. other char)\n\
                    \t* used for counting\n";
        let map = parse_str(text);
        assert_eq!(
            aliases_of(&map, "0030").unwrap(),
            &vec!["used for counting".to_string()]
        );
    }

    #[test]
    fn test_long_notes_are_excluded() {
        let long = "a".repeat(MAX_NOTE_CHARS);
        let short = "a".repeat(MAX_NOTE_CHARS - 1);
        assert!(!is_alias_like_note(&long));
        assert!(is_alias_like_note(&short));

        let text = format!("0030\tDIGIT ZERO\n\t* {}\n", long);
        assert!(parse_str(&text).is_empty());
    }

    #[test]
    fn test_other_annotation_lines_are_ignored() {
        let text = "00A0\tNO-BREAK SPACE\n\
                    \tx (space - 0020)\n\
                    \t~ 00A0 FE00 variant\n\
                    \t# <noBreak> 0020\n\
                    \t: 0020\n";
        assert!(parse_str(text).is_empty());
    }

    #[test]
    fn test_headers_and_comments_do_not_reset_state_wrongly() {
        let text = "@@\t0000\tC0 Controls and Basic Latin\t007F\n\
                    @\t\tC0 controls\n\
                    ; a comment\n\
                    0007\t<control>\n\
                    \t= BELL\n";
        let map = parse_str(text);
        assert_eq!(aliases_of(&map, "0007").unwrap(), &vec!["BELL".to_string()]);
    }

    #[test]
    fn test_malformed_header_clears_current_code_point() {
        let text = "0041\tLATIN CAPITAL LETTER A\n\
                    \t= alpha\n\
                    NOT A HEADER\n\
                    \t= should not attach to 0041\n";
        let map = parse_str(text);
        assert_eq!(aliases_of(&map, "0041").unwrap(), &vec!["alpha".to_string()]);
    }

    #[test]
    fn test_non_hex_header_clears_current_code_point() {
        let text = "0041\tLATIN CAPITAL LETTER A\n\
                    XYZ\tNOT A CODE POINT\n\
                    \t= orphan\n";
        let map = parse_str(text);
        assert!(map.is_empty());
    }

    #[test]
    fn test_indented_lines_before_any_header_are_ignored() {
        assert!(parse_str("\t= orphan\n\t* orphan note\n").is_empty());
    }

    #[test]
    fn test_lowercase_header_is_canonicalized() {
        let map = parse_str("00e9\tLATIN SMALL LETTER E WITH ACUTE\n\t= e acute\n");
        assert!(aliases_of(&map, "00E9").is_some());
    }

    #[test]
    fn test_code_point_without_qualifying_lines_is_absent() {
        let map = parse_str("0041\tLATIN CAPITAL LETTER A\n\tx (latin small letter a - 0061)\n");
        assert!(map.is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        assert!(parse_informative_aliases("/non/existent/NamesList.txt").is_empty());
    }
}
