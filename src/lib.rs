// SPDX-License-Identifier: MIT
//! # SWF Merge
//!
//! Asset-level merging of decoded SWF movies. Given a base movie and one or
//! more extra movies, the exported characters of each extra (and everything
//! they reference) are copied into the base with fresh character ids.
//!
//! ## Overview
//!
//! The crate works on the decoded tag tree only. Reading and writing the
//! binary SWF container is done elsewhere; movies cross that boundary as
//! [`Movie`] values, or as JSON through the [`json`] module.
//!
//! ```text
//! extra movie                      base movie
//! ===========                      ==========
//! ExportAssets { "hero": 2 }       FileAttributes
//! DefineShape  #1                  SetBackgroundColor
//! DefineSprite #2 (places #1)      <- imported tags are inserted here
//!                                  DefineShape #1 .. #10
//!                                  PlaceObject, ShowFrame, ...
//! ```
//!
//! For each extra movie:
//!
//! 1. Collect its export table ([`Composer::named_exports`]).
//! 2. Walk the dependency graph of every exported character
//!    ([`dependencies`]) to find the definitions it needs.
//! 3. Renumber those definitions above the highest id of the base
//!    ([`remap`]).
//! 4. Insert them, dependencies first, after the base's leading
//!    header-level tags, followed by a new export table.
//!
//! ## Usage
//!
//! ```rust
//! use swf_merge::{merge, Movie};
//!
//! let base = Movie::default();
//! let extra = Movie::default();
//! let merged = merge(&base, [extra]).unwrap();
//! assert_eq!(merged, base);
//! ```
//!
//! ## Errors
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `DuplicateDefinitionId` | two definitions of one movie share an id |
//! | `UnableToResolveDefinition` | an export or dependency has no definition |
//! | `UnableToResolveTopDefinitions` | every export is a dependency of another |
//! | `IdentifierOverflow` | the renumbered ids do not fit in 16 bits |
//!
//! By default any error aborts the whole merge. See [`FailurePolicy`] to skip
//! failing extras instead.

pub mod composer;
pub mod config;
pub mod definition;
pub mod dependencies;
pub mod error;
pub mod json;
pub mod merge;
pub mod movie;
pub mod remap;
pub mod shape;

// Re-export main types
pub use composer::Composer;
pub use config::{FailurePolicy, MergeConfig};
pub use definition::is_definition;
pub use dependencies::{dependencies, dependency_occurrences};
pub use error::MergeError;
pub use json::DocumentIoError;
pub use merge::{extract_exports, merge, merge_with_config};
pub use movie::{CharacterId, Header, Movie, Tag};
pub use remap::{remap, remap_all};
