//! Alias statistics
//!
//! Summaries used to compare alias source selections and to rank the
//! characters with the most aliases.

use crate::codepoint::CodePoint;
use crate::record::{AliasMap, CharacterMap};
use serde::Serialize;
use std::fmt;

/// Summary of an alias map
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AliasStatistics {
    /// Code points with an entry in the alias map
    pub total_characters: usize,
    /// Sum of all alias set sizes
    pub total_aliases: usize,
    /// Mean aliases per character
    pub avg_aliases_per_char: f64,
    /// Median aliases per character
    pub median_aliases_per_char: f64,
    /// Largest alias set
    pub max_aliases: usize,
    /// Smallest alias set
    pub min_aliases: usize,
    /// Entries whose alias set is empty
    pub chars_with_no_aliases: usize,
}

impl AliasStatistics {
    /// Compute statistics over every entry of `aliases`
    pub fn compute(aliases: &AliasMap) -> Self {
        let mut counts: Vec<usize> = aliases.values().map(|set| set.len()).collect();
        if counts.is_empty() {
            return Self::default();
        }
        counts.sort_unstable();

        let total_characters = counts.len();
        let total_aliases: usize = counts.iter().sum();
        let mid = total_characters / 2;
        let median = if total_characters % 2 == 0 {
            (counts[mid - 1] + counts[mid]) as f64 / 2.0
        } else {
            counts[mid] as f64
        };

        Self {
            total_characters,
            total_aliases,
            avg_aliases_per_char: total_aliases as f64 / total_characters as f64,
            median_aliases_per_char: median,
            max_aliases: counts[total_characters - 1],
            min_aliases: counts[0],
            chars_with_no_aliases: counts.iter().take_while(|&&n| n == 0).count(),
        }
    }

    /// Difference from `self` (before) to `after`
    pub fn compare(&self, after: &AliasStatistics) -> AliasStatsDelta {
        let pct = |delta: f64, base: f64| if base > 0.0 { delta / base * 100.0 } else { 0.0 };

        let total_aliases = after.total_aliases as i64 - self.total_aliases as i64;
        let avg = after.avg_aliases_per_char - self.avg_aliases_per_char;
        AliasStatsDelta {
            total_characters: after.total_characters as i64 - self.total_characters as i64,
            total_aliases,
            total_aliases_pct: pct(total_aliases as f64, self.total_aliases as f64),
            avg_aliases_per_char: avg,
            avg_aliases_pct: pct(avg, self.avg_aliases_per_char),
            median_aliases_per_char: after.median_aliases_per_char - self.median_aliases_per_char,
        }
    }
}

impl fmt::Display for AliasStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total characters: {}", self.total_characters)?;
        writeln!(f, "Total aliases: {}", self.total_aliases)?;
        writeln!(f, "Average aliases per character: {:.2}", self.avg_aliases_per_char)?;
        writeln!(f, "Median aliases per character: {:.2}", self.median_aliases_per_char)?;
        writeln!(f, "Maximum aliases for any character: {}", self.max_aliases)?;
        writeln!(f, "Minimum aliases for any character: {}", self.min_aliases)?;
        write!(f, "Characters with no aliases: {}", self.chars_with_no_aliases)
    }
}

/// Change between two [`AliasStatistics`]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AliasStatsDelta {
    /// Change in characters with aliases
    pub total_characters: i64,
    /// Change in total aliases
    pub total_aliases: i64,
    /// Change in total aliases, percent of before
    pub total_aliases_pct: f64,
    /// Change in mean aliases per character
    pub avg_aliases_per_char: f64,
    /// Change in mean, percent of before
    pub avg_aliases_pct: f64,
    /// Change in median aliases per character
    pub median_aliases_per_char: f64,
}

impl fmt::Display for AliasStatsDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Change in total characters: {}", self.total_characters)?;
        writeln!(
            f,
            "Change in total aliases: {} ({:.2}%)",
            self.total_aliases, self.total_aliases_pct
        )?;
        writeln!(
            f,
            "Change in average aliases per character: {:.2} ({:.2}%)",
            self.avg_aliases_per_char, self.avg_aliases_pct
        )?;
        write!(
            f,
            "Change in median aliases per character: {:.2}",
            self.median_aliases_per_char
        )
    }
}

/// A character and its alias count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCharacter {
    /// Code point
    pub code_point: CodePoint,
    /// Primary name
    pub name: String,
    /// Number of aliases
    pub alias_count: usize,
}

/// Characters with more than `min_aliases` aliases, most aliased first.
///
/// Ties are broken by code point. At most `limit` entries are returned.
pub fn top_aliased(
    characters: &CharacterMap,
    aliases: &AliasMap,
    min_aliases: usize,
    limit: usize,
) -> Vec<RankedCharacter> {
    let mut ranked: Vec<RankedCharacter> = aliases
        .iter()
        .filter(|(_, set)| set.len() > min_aliases)
        .filter_map(|(cp, set)| {
            characters.get(cp).map(|record| RankedCharacter {
                code_point: *cp,
                name: record.name.clone(),
                alias_count: set.len(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.alias_count
            .cmp(&a.alias_count)
            .then(a.code_point.cmp(&b.code_point))
    });
    ranked.truncate(limit);
    ranked
}
