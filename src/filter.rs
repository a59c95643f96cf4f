//! Dataset/Block Filter
//!
//! Restricts an index to the characters of a set of named blocks.

use crate::record::{AliasMap, CharacterMap};
use hashbrown::HashSet;

/// Block list entry that disables filtering
pub const ALL_BLOCKS: &str = "all";

/// Whether a block list means "keep everything".
///
/// `None`, an empty list, and any list containing [`ALL_BLOCKS`] do.
pub fn is_unfiltered<S: AsRef<str>>(blocks: Option<&[S]>) -> bool {
    match blocks {
        None => true,
        Some(blocks) => blocks.is_empty() || blocks.iter().any(|b| b.as_ref() == ALL_BLOCKS),
    }
}

/// Keep only characters whose block is in `blocks`, and the aliases of
/// those characters.
///
/// A character without aliases simply has no entry in the returned alias
/// map.
pub fn filter_by_blocks<S: AsRef<str>>(
    characters: &CharacterMap,
    aliases: &AliasMap,
    blocks: Option<&[S]>,
) -> (CharacterMap, AliasMap) {
    let wanted: HashSet<&str> = match blocks {
        Some(blocks) if !is_unfiltered(Some(blocks)) => {
            blocks.iter().map(|b| b.as_ref()).collect()
        }
        _ => return (characters.clone(), aliases.clone()),
    };

    let filtered_characters: CharacterMap = characters
        .iter()
        .filter(|(_, record)| wanted.contains(record.block.as_str()))
        .map(|(cp, record)| (*cp, record.clone()))
        .collect();

    let filtered_aliases: AliasMap = filtered_characters
        .keys()
        .filter_map(|cp| aliases.get(cp).map(|set| (*cp, set.clone())))
        .collect();

    log_debug!(
        "block filter kept {} of {} characters",
        filtered_characters.len(),
        characters.len()
    );
    (filtered_characters, filtered_aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoint::CodePoint;
    use crate::merge::{merge, MergeOptions};
    use crate::sources::{formal, primary};

    fn fixture() -> (CharacterMap, AliasMap) {
        let chars = primary::parse_str(
            "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
             0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;\n\
             0391;GREEK CAPITAL LETTER ALPHA;Lu;0;L;;;;;N;;;;03B1;\n\
             2192;RIGHTWARDS ARROW;Sm;0;ON;;;;;N;RIGHT ARROW;;;;\n",
        );
        let formal = formal::parse_str("0041;LA;abbreviation\n2192;RIGHT ARROW;figment\n");
        let aliases = merge(&chars, &formal, &Default::default(), None, &MergeOptions::default());
        (chars, aliases)
    }

    #[test]
    fn test_none_and_all_are_identity() {
        let (chars, aliases) = fixture();

        let (c, a) = filter_by_blocks::<&str>(&chars, &aliases, None);
        assert_eq!((&c, &a), (&chars, &aliases));

        let (c, a) = filter_by_blocks(&chars, &aliases, Some(&["Arrows", "all"][..]));
        assert_eq!((&c, &a), (&chars, &aliases));

        let empty: [&str; 0] = [];
        let (c, _) = filter_by_blocks(&chars, &aliases, Some(&empty[..]));
        assert_eq!(c, chars);
    }

    #[test]
    fn test_keeps_only_listed_blocks() {
        let (chars, aliases) = fixture();
        let blocks = vec!["Basic Latin".to_string()];
        let (c, a) = filter_by_blocks(&chars, &aliases, Some(&blocks[..]));

        assert_eq!(c.len(), 2);
        assert!(c.values().all(|r| r.block == "Basic Latin"));
        assert_eq!(a.len(), 1);
        assert!(a.contains_key(&CodePoint::from_char('A')));
    }

    #[test]
    fn test_alias_keys_follow_character_keys() {
        let (chars, aliases) = fixture();
        let (c, a) = filter_by_blocks(&chars, &aliases, Some(&["Greek and Coptic", "Arrows"][..]));
        assert_eq!(c.len(), 2);
        assert!(a.keys().all(|cp| c.contains_key(cp)));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_unknown_block_matches_nothing() {
        let (chars, aliases) = fixture();
        let (c, a) = filter_by_blocks(&chars, &aliases, Some(&["Klingon"][..]));
        assert!(c.is_empty());
        assert!(a.is_empty());
    }
}
