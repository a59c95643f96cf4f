//! Prelude module for convenient imports
//!
//! ```
//! use glyph_index::prelude::*;
//! ```
//!
//! Brings the data model, the four source parser modules, the merge and
//! filter entry points, the pipeline and the exporters into scope.

pub use crate::codepoint::CodePoint;
pub use crate::record::{AliasMap, AliasSet, CharacterMap, CharacterRecord, SourceAliases};

pub use crate::sources::{cldr, formal, informative, primary};

pub use crate::filter::filter_by_blocks;
pub use crate::merge::{merge, AliasMerger, AliasSource, CasePolicy, MergeOptions};

pub use crate::dataset::DatasetConfig;
pub use crate::pipeline::{AliasSources, GlyphIndex, Pipeline, SourcePaths};

pub use crate::export::{ExportFormat, ExportOptions, Exporter};
pub use crate::stats::{top_aliased, AliasStatistics};

pub use crate::error::{PipelineError, SnapshotError};
