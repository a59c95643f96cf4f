//! Glyph Index - Unicode character and alias index builder
//!
//! Builds a searchable index of Unicode characters from the Unicode
//! Character Database and CLDR annotations. It provides:
//! - Parsers for `UnicodeData.txt`, `NameAliases.txt`, `NamesList.txt` and
//!   CLDR annotation XML that degrade to empty data instead of failing
//! - Block resolution from a static range table
//! - Order-preserving, case-insensitive alias merging across sources
//! - Dataset filtering by block name
//! - A JSON master snapshot to skip re-parsing
//! - CSV, JSON, Lua and plain text exporters
//! - Alias statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use glyph_index::prelude::*;
//!
//! let characters = primary::parse_str(
//!     "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
//!      2192;RIGHTWARDS ARROW;Sm;0;ON;;;;;N;RIGHT ARROW;;;;\n",
//! );
//! let formal = formal::parse_str("2192;RIGHT ARROW;figment\n");
//! let informative = informative::parse_str("2192\tRIGHTWARDS ARROW\n\t= z notation total function\n");
//!
//! let aliases = merge(&characters, &formal, &informative, None, &MergeOptions::default());
//! let arrow = CodePoint::from_char('→');
//! assert_eq!(characters[&arrow].block, "Arrows");
//! assert_eq!(
//!     aliases[&arrow].as_slice(),
//!     &["right arrow", "z notation total function"]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` (default) - Emit diagnostics through the `log` crate

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod prelude;

pub mod block;
pub mod codepoint;
pub mod dataset;
pub mod error;
pub mod export;
pub mod filter;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod snapshot;
pub mod sources;
pub mod stats;

pub use block::{resolve_block, UNKNOWN_BLOCK};
pub use codepoint::{CodePoint, ParseCodePointError};
pub use dataset::DatasetConfig;
pub use error::{ConfigError, PipelineError, SnapshotError, SourceError};
pub use export::{ExportFormat, ExportOptions, Exporter};
pub use filter::filter_by_blocks;
pub use merge::{merge, AliasSource, CasePolicy, MergeOptions};
pub use pipeline::{AliasSources, GlyphIndex, Pipeline, SourcePaths};
pub use record::{AliasMap, AliasSet, CharacterMap, CharacterRecord, SourceAliases};
pub use sources::cldr::parse_localized_annotations;
pub use sources::formal::parse_formal_aliases;
pub use sources::informative::parse_informative_aliases;
pub use sources::primary::parse_primary;
pub use stats::AliasStatistics;
