//! Localized annotation parser (CLDR `annotations/<locale>.xml`)
//!
//! ```xml
//! <ldml>
//!   <annotations>
//!     <annotation cp="😀">face | grin | grinning face</annotation>
//!     <annotation cp="😀" type="tts">grinning face</annotation>
//!   </annotations>
//! </ldml>
//! ```
//!
//! Elements with a `type` attribute are text-to-speech variants and are
//! skipped. Multi-character `cp` values (sequences) are folded onto the code
//! point of their first character.

use super::{or_empty, push_alias};
use crate::codepoint::CodePoint;
use crate::error::SourceError;
use crate::record::SourceAliases;
use std::path::Path;

/// Parse an annotation document
pub fn parse_document(text: &str) -> Result<SourceAliases, SourceError> {
    // Real annotation files start with a DOCTYPE referencing the LDML DTD.
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    let mut aliases = SourceAliases::new();
    let mut skipped_tts = 0usize;

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "annotation")
    {
        if node.has_attribute("type") {
            skipped_tts += 1;
            continue;
        }
        let Some(first) = node.attribute("cp").and_then(|cp| cp.chars().next()) else {
            continue;
        };
        let code_point = CodePoint::from_char(first);

        if let Some(text) = node.text() {
            for segment in text.split('|') {
                push_alias(&mut aliases, code_point, segment);
            }
        }
    }

    log_debug!(
        "parsed {} CLDR annotations for {} code points ({} tts entries skipped)",
        super::alias_count(&aliases),
        aliases.len(),
        skipped_tts
    );
    Ok(aliases)
}

/// Parse an annotation document held in memory; malformed XML yields an
/// empty map.
pub fn parse_str(text: &str) -> SourceAliases {
    or_empty("CLDR annotations", Path::new("<memory>"), parse_document(text))
}

/// Parse the annotation file at `path`; failures yield an empty map.
pub fn parse_localized_annotations(path: impl AsRef<Path>) -> SourceAliases {
    let path = path.as_ref();
    let result = std::fs::read_to_string(path)
        .map_err(SourceError::from)
        .and_then(|text| parse_document(&text));
    or_empty("CLDR annotation file", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity><language type="en"/></identity>
    <annotations>
        <annotation cp="A">letter a | first letter</annotation>
        <annotation cp="B">letter b | second letter</annotation>
        <annotation cp="A" type="tts">capital a</annotation>
        <annotation cp="😀">face | grin | grinning face</annotation>
        <annotation cp="😀" type="tts">grinning face</annotation>
    </annotations>
</ldml>"#;

    #[test]
    fn test_pipe_delimited_text_is_split_and_trimmed() {
        let map = parse_str(DOC);
        assert_eq!(
            map[&CodePoint::from_char('A')],
            vec!["letter a".to_string(), "first letter".to_string()]
        );
        assert_eq!(
            map[&CodePoint::from_char('B')],
            vec!["letter b".to_string(), "second letter".to_string()]
        );
    }

    #[test]
    fn test_keys_are_canonical() {
        let map = parse_str(DOC);
        let keys: Vec<String> = map.keys().map(|cp| cp.to_string()).collect();
        assert_eq!(keys, vec!["0041", "0042", "1F600"]);
    }

    #[test]
    fn test_tts_entries_are_excluded() {
        let map = parse_str(DOC);
        let grin = &map[&CodePoint::from_char('😀')];
        assert_eq!(grin.len(), 3);
        assert!(!map[&CodePoint::from_char('A')].contains(&"capital a".to_string()));
    }

    #[test]
    fn test_tts_only_code_point_is_absent() {
        let doc = r#"<ldml><annotations>
            <annotation cp="😀" type="tts">grinning face</annotation>
        </annotations></ldml>"#;
        assert!(parse_str(doc).is_empty());
    }

    #[test]
    fn test_sequence_folds_onto_first_character() {
        let doc = r#"<ldml><annotations>
            <annotation cp="👍🏻">thumbs up | light skin tone</annotation>
        </annotations></ldml>"#;
        let map = parse_str(doc);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&CodePoint::from_char('👍')].len(), 2);
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let doc = r#"<ldml><annotations>
            <annotation cp="→">arrow || right |  </annotation>
            <annotation cp="←"></annotation>
        </annotations></ldml>"#;
        let map = parse_str(doc);
        assert_eq!(
            map[&CodePoint::from_char('→')],
            vec!["arrow".to_string(), "right".to_string()]
        );
        assert!(!map.contains_key(&CodePoint::from_char('←')));
    }

    #[test]
    fn test_malformed_xml_yields_empty_map() {
        assert!(parse_document("<ldml><annotation cp=\"A\">a</ldml>").is_err());
        assert!(parse_str("<ldml><annotation cp=\"A\">a</ldml>").is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        assert!(parse_localized_annotations("/non/existent/en.xml").is_empty());
    }
}
