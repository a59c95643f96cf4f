//! Index data model
//!
//! [`CharacterRecord`] holds what the primary character table says about a
//! code point. [`AliasSet`] holds the merged, deduplicated alias strings.

use crate::block::resolve_block;
use crate::codepoint::CodePoint;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters keyed by code point
pub type CharacterMap = BTreeMap<CodePoint, CharacterRecord>;

/// Merged alias sets keyed by code point.
///
/// A code point without an entry has an empty alias set.
pub type AliasMap = BTreeMap<CodePoint, AliasSet>;

/// Raw alias lists produced by one source parser, in file order
pub type SourceAliases = BTreeMap<CodePoint, Vec<String>>;

/// One entry of the primary character table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// Join key
    pub code_point: CodePoint,
    /// The character itself
    pub display_char: char,
    /// Primary Unicode name (control codes carry `<control>`)
    pub name: String,
    /// Two-letter general category
    pub category: String,
    /// Block name resolved when the record was parsed
    pub block: String,
}

impl CharacterRecord {
    /// Build a record, resolving the block from the code point.
    ///
    /// Returns `None` for surrogate code points, which have no `char`.
    pub fn new(
        code_point: CodePoint,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Option<Self> {
        let display_char = code_point.to_char()?;
        Some(Self {
            code_point,
            display_char,
            name: name.into(),
            category: category.into(),
            block: resolve_block(code_point.value()).to_string(),
        })
    }
}

/// How an [`AliasSet`] stores the spelling of an admitted alias.
///
/// Deduplication always compares the trimmed, lower-cased form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasePolicy {
    /// Store the trimmed, lower-cased form
    #[default]
    Normalized,
    /// Store the trimmed spelling of the first occurrence
    PreserveFirst,
}

/// Deduplicated aliases for one code point, in first-seen order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AliasSet {
    aliases: Vec<String>,
    keys: HashSet<String>,
}

impl AliasSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Dedup key of an alias: trimmed and lower-cased.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn normalize(alias: &str) -> Option<String> {
        let trimmed = alias.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Admit an alias unless its normalized form is already present.
    ///
    /// Returns `true` if the alias was added.
    pub fn insert(&mut self, alias: &str, policy: CasePolicy) -> bool {
        let Some(key) = Self::normalize(alias) else {
            return false;
        };
        if self.keys.contains(&key) {
            return false;
        }
        let stored = match policy {
            CasePolicy::Normalized => key.clone(),
            CasePolicy::PreserveFirst => alias.trim().to_string(),
        };
        self.keys.insert(key);
        self.aliases.push(stored);
        true
    }

    /// Whether an alias with the same normalized form is present
    pub fn contains(&self, alias: &str) -> bool {
        Self::normalize(alias).is_some_and(|key| self.keys.contains(&key))
    }

    /// Number of aliases
    #[inline]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Stored aliases in insertion order
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.aliases
    }

    /// Iterate over stored aliases
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.aliases.iter()
    }

    /// Consume the set, keeping insertion order
    pub fn into_vec(self) -> Vec<String> {
        self.aliases
    }
}

impl PartialEq for AliasSet {
    fn eq(&self, other: &Self) -> bool {
        self.aliases == other.aliases
    }
}

impl Eq for AliasSet {}

/// Rebuilds a set from stored aliases without changing their spelling.
impl From<Vec<String>> for AliasSet {
    fn from(aliases: Vec<String>) -> Self {
        let mut set = AliasSet::new();
        for alias in &aliases {
            set.insert(alias, CasePolicy::PreserveFirst);
        }
        set
    }
}

impl From<AliasSet> for Vec<String> {
    fn from(set: AliasSet) -> Self {
        set.aliases
    }
}

impl<'a> IntoIterator for &'a AliasSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
