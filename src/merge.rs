//! Alias Merge Engine
//!
//! Combines the per-source alias lists into one [`AliasMap`]. Sources are
//! visited in a fixed order: formal, then informative, then CLDR. Within a
//! code point, aliases are deduplicated on their trimmed, lower-cased form
//! and kept in order of first occurrence.
//!
//! # Example
//!
//! ```rust
//! use glyph_index::merge::{merge, MergeOptions};
//! use glyph_index::sources::{formal, informative, primary};
//! use glyph_index::CodePoint;
//!
//! let chars = primary::parse_str("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n");
//! let formal = formal::parse_str("0041;LATIN LETTER A;correction;\n0041;LA;abbreviation;\n");
//! let informative =
//!     informative::parse_str("0041\tNAME\n\t= first letter of the Latin alphabet\n");
//!
//! let merged = merge(&chars, &formal, &informative, None, &MergeOptions::default());
//! let a = &merged[&CodePoint::from_char('A')];
//! assert_eq!(
//!     a.as_slice(),
//!     &["latin letter a", "la", "first letter of the latin alphabet"]
//! );
//! ```

use crate::codepoint::CodePoint;
use crate::record::{AliasMap, CharacterMap, SourceAliases};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::record::CasePolicy;

/// Where an alias came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasSource {
    /// `NameAliases.txt`
    Formal,
    /// `NamesList.txt`
    Informative,
    /// CLDR annotations
    Cldr,
}

impl AliasSource {
    /// All sources in merge order
    pub const ALL: [AliasSource; 3] = [Self::Formal, Self::Informative, Self::Cldr];

    /// Short name used in logs and configuration
    pub fn name(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informative => "informative",
            Self::Cldr => "cldr",
        }
    }
}

impl fmt::Display for AliasSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Merge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// How admitted aliases are spelled
    pub case_policy: CasePolicy,
    /// Log every alias offered for this code point at debug level
    pub trace: Option<CodePoint>,
}

impl MergeOptions {
    /// Options with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case policy
    pub fn with_case_policy(mut self, policy: CasePolicy) -> Self {
        self.case_policy = policy;
        self
    }

    /// Trace one code point through the merge
    pub fn with_trace(mut self, code_point: CodePoint) -> Self {
        self.trace = Some(code_point);
        self
    }
}

/// Counters collected while merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Aliases offered by the sources
    pub offered: usize,
    /// Aliases admitted after deduplication
    pub admitted: usize,
    /// Aliases dropped as duplicates or blank
    pub duplicates: usize,
    /// Aliases dropped because their code point is not in the primary table
    pub orphaned: usize,
}

/// Stateful merger; feed sources in order, then take the result.
#[derive(Debug, Default)]
pub struct AliasMerger {
    options: MergeOptions,
    merged: AliasMap,
    report: MergeReport,
}

impl AliasMerger {
    /// Create a merger
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            merged: AliasMap::new(),
            report: MergeReport::default(),
        }
    }

    /// Merge one source's aliases.
    ///
    /// Aliases for code points missing from `primary` have nothing to attach
    /// to and are dropped.
    pub fn add_source(
        &mut self,
        source: AliasSource,
        primary: &CharacterMap,
        aliases: &SourceAliases,
    ) -> &mut Self {
        let before = self.report;

        for (code_point, list) in aliases {
            self.report.offered += list.len();
            if !primary.contains_key(code_point) {
                self.report.orphaned += list.len();
                continue;
            }

            let tracing = self.options.trace == Some(*code_point);
            let set = self.merged.entry(*code_point).or_default();
            for alias in list {
                if set.insert(alias, self.options.case_policy) {
                    self.report.admitted += 1;
                    if tracing {
                        log_debug!("{} {}: admitted {:?}", code_point, source, alias);
                    }
                } else {
                    self.report.duplicates += 1;
                    if tracing {
                        log_debug!("{} {}: duplicate {:?}", code_point, source, alias);
                    }
                }
            }
        }

        log_debug!(
            "{} source: {} offered, {} admitted, {} orphaned",
            source,
            self.report.offered - before.offered,
            self.report.admitted - before.admitted,
            self.report.orphaned - before.orphaned
        );
        self
    }

    /// Counters so far
    pub fn report(&self) -> MergeReport {
        self.report
    }

    /// Finish, dropping code points that ended up with no aliases
    pub fn finish(mut self) -> (AliasMap, MergeReport) {
        self.merged.retain(|_, set| !set.is_empty());
        if let Some(code_point) = self.options.trace {
            match self.merged.get(&code_point) {
                Some(set) => log_debug!("{} final aliases: {:?}", code_point, set.as_slice()),
                None => log_debug!("{} has no aliases", code_point),
            }
        }
        (self.merged, self.report)
    }
}

/// Merge formal, informative and (optionally) CLDR aliases.
///
/// An absent CLDR source and an empty one give identical results.
pub fn merge(
    primary: &CharacterMap,
    formal: &SourceAliases,
    informative: &SourceAliases,
    cldr: Option<&SourceAliases>,
    options: &MergeOptions,
) -> AliasMap {
    let mut merger = AliasMerger::new(options.clone());
    merger
        .add_source(AliasSource::Formal, primary, formal)
        .add_source(AliasSource::Informative, primary, informative);
    if let Some(cldr) = cldr {
        merger.add_source(AliasSource::Cldr, primary, cldr);
    }
    merger.finish().0
}
