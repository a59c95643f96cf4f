//! Pipeline orchestration
//!
//! Parses the primary table and the enabled alias sources, merges them into
//! a [`GlyphIndex`], and optionally persists or exports it.
//!
//! # Example
//!
//! ```rust,no_run
//! use glyph_index::export::ExportOptions;
//! use glyph_index::pipeline::{Pipeline, SourcePaths};
//!
//! let pipeline = Pipeline::new(SourcePaths::in_dir("cache"));
//! let index = pipeline.run_or_load("cache/unicode_master_data.json")?;
//! println!("{} characters", index.len());
//!
//! let written = pipeline.generate(&ExportOptions::new("out", "complete"))?;
//! println!("wrote {} files", written.len());
//! # Ok::<(), glyph_index::PipelineError>(())
//! ```

use crate::codepoint::CodePoint;
use crate::error::{PipelineError, SnapshotError};
use crate::export::{self, ExportOptions};
use crate::filter::filter_by_blocks;
use crate::merge::{AliasMerger, AliasSource, MergeOptions};
use crate::record::{AliasMap, CharacterMap, CharacterRecord};
use crate::snapshot;
use crate::sources::{
    cldr, formal, informative, primary, CLDR_ANNOTATIONS_FILE, NAMES_LIST_FILE,
    NAME_ALIASES_FILE, UNICODE_DATA_FILE,
};
use crate::stats::AliasStatistics;
use std::path::{Path, PathBuf};

/// Which alias sources take part in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSources {
    formal: bool,
    informative: bool,
    cldr: bool,
}

impl Default for AliasSources {
    fn default() -> Self {
        Self::all()
    }
}

impl AliasSources {
    /// Every source
    pub fn all() -> Self {
        Self {
            formal: true,
            informative: true,
            cldr: true,
        }
    }

    /// Exactly the listed sources
    pub fn only(sources: &[AliasSource]) -> Self {
        Self {
            formal: sources.contains(&AliasSource::Formal),
            informative: sources.contains(&AliasSource::Informative),
            cldr: sources.contains(&AliasSource::Cldr),
        }
    }

    /// Whether `source` is enabled
    pub fn contains(&self, source: AliasSource) -> bool {
        match source {
            AliasSource::Formal => self.formal,
            AliasSource::Informative => self.informative,
            AliasSource::Cldr => self.cldr,
        }
    }

    /// Enabled sources in merge order
    pub fn iter(&self) -> impl Iterator<Item = AliasSource> + '_ {
        AliasSource::ALL.into_iter().filter(|s| self.contains(*s))
    }
}

/// Locations of the input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// `UnicodeData.txt`
    pub unicode_data: PathBuf,
    /// `NameAliases.txt`
    pub name_aliases: PathBuf,
    /// `NamesList.txt`
    pub names_list: PathBuf,
    /// CLDR annotations, if available
    pub cldr_annotations: Option<PathBuf>,
}

impl SourcePaths {
    /// Conventional file names inside one directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            unicode_data: dir.join(UNICODE_DATA_FILE),
            name_aliases: dir.join(NAME_ALIASES_FILE),
            names_list: dir.join(NAMES_LIST_FILE),
            cldr_annotations: Some(dir.join(CLDR_ANNOTATIONS_FILE)),
        }
    }

    /// Drop the CLDR source
    pub fn without_cldr(mut self) -> Self {
        self.cldr_annotations = None;
        self
    }
}

/// Merged character and alias data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphIndex {
    /// Every parsed character
    pub characters: CharacterMap,
    /// Aliases of the characters that have any
    pub aliases: AliasMap,
}

impl GlyphIndex {
    /// Wrap existing maps
    pub fn new(characters: CharacterMap, aliases: AliasMap) -> Self {
        Self {
            characters,
            aliases,
        }
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether there are no characters
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Character record for a code point
    pub fn get(&self, code_point: CodePoint) -> Option<&CharacterRecord> {
        self.characters.get(&code_point)
    }

    /// Aliases of a code point, empty if it has none
    pub fn aliases_of(&self, code_point: CodePoint) -> &[String] {
        self.aliases
            .get(&code_point)
            .map(|set| set.as_slice())
            .unwrap_or(&[])
    }

    /// Restrict to the given blocks
    pub fn filtered<S: AsRef<str>>(&self, blocks: Option<&[S]>) -> GlyphIndex {
        let (characters, aliases) = filter_by_blocks(&self.characters, &self.aliases, blocks);
        GlyphIndex {
            characters,
            aliases,
        }
    }

    /// Alias statistics
    pub fn statistics(&self) -> AliasStatistics {
        AliasStatistics::compute(&self.aliases)
    }

    /// Save as a master snapshot
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        snapshot::save(path, &self.characters, &self.aliases)
    }

    /// Load a master snapshot
    pub fn load(path: impl AsRef<Path>) -> Result<GlyphIndex, SnapshotError> {
        let (characters, aliases) = snapshot::load(path)?;
        Ok(GlyphIndex {
            characters,
            aliases,
        })
    }
}

/// Parse, merge and export
#[derive(Debug, Clone)]
pub struct Pipeline {
    paths: SourcePaths,
    sources: AliasSources,
    merge_options: MergeOptions,
}

impl Pipeline {
    /// All sources, default merge options
    pub fn new(paths: SourcePaths) -> Self {
        Self {
            paths,
            sources: AliasSources::default(),
            merge_options: MergeOptions::default(),
        }
    }

    /// Select the alias sources
    pub fn with_sources(mut self, sources: AliasSources) -> Self {
        self.sources = sources;
        self
    }

    /// Set merge options
    pub fn with_merge_options(mut self, options: MergeOptions) -> Self {
        self.merge_options = options;
        self
    }

    /// Input locations
    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }

    /// Parse every enabled source and merge.
    ///
    /// Alias sources that are missing or malformed contribute nothing. A
    /// primary table with no records halts the run.
    pub fn run(&self) -> Result<GlyphIndex, PipelineError> {
        let characters = primary::parse_primary(&self.paths.unicode_data);
        if characters.is_empty() {
            return Err(PipelineError::EmptyPrimaryTable {
                path: self.paths.unicode_data.clone(),
            });
        }

        let mut merger = AliasMerger::new(self.merge_options.clone());
        for source in self.sources.iter() {
            let aliases = match source {
                AliasSource::Formal => formal::parse_formal_aliases(&self.paths.name_aliases),
                AliasSource::Informative => {
                    informative::parse_informative_aliases(&self.paths.names_list)
                }
                AliasSource::Cldr => match &self.paths.cldr_annotations {
                    Some(path) => cldr::parse_localized_annotations(path),
                    None => continue,
                },
            };
            merger.add_source(source, &characters, &aliases);
        }

        let (aliases, report) = merger.finish();
        log_info!(
            "merged {} aliases for {} of {} characters ({} duplicates, {} orphaned)",
            report.admitted,
            aliases.len(),
            characters.len(),
            report.duplicates,
            report.orphaned
        );
        Ok(GlyphIndex {
            characters,
            aliases,
        })
    }

    /// Load the snapshot at `snapshot_path`, or parse and save a fresh one.
    ///
    /// A missing or malformed snapshot is logged and replaced. Failing to
    /// write the new snapshot is logged and does not fail the run.
    pub fn run_or_load(&self, snapshot_path: impl AsRef<Path>) -> Result<GlyphIndex, PipelineError> {
        let snapshot_path = snapshot_path.as_ref();
        match GlyphIndex::load(snapshot_path) {
            Ok(index) => return Ok(index),
            Err(e) => log_warn!(
                "snapshot {} unusable, parsing sources: {}",
                snapshot_path.display(),
                e
            ),
        }

        let index = self.run()?;
        if let Err(e) = index.save(snapshot_path) {
            log_warn!("could not save snapshot {}: {}", snapshot_path.display(), e);
        }
        Ok(index)
    }

    /// Build the index (through the snapshot if one is configured) and write
    /// the requested export files.
    pub fn generate(&self, options: &ExportOptions) -> Result<Vec<PathBuf>, PipelineError> {
        let index = match &options.snapshot_path {
            Some(path) => self.run_or_load(path)?,
            None => self.run()?,
        };
        export::write_all(&index.characters, &index.aliases, options).map_err(PipelineError::Export)
    }
}
