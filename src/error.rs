// SPDX-License-Identifier: MIT
//! Errors raised while indexing or merging movies

use thiserror::Error;

use crate::movie::CharacterId;

/// Fatal merge errors. Each one aborts the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("Duplicate definition id: {id}")]
    DuplicateDefinitionId { id: CharacterId },

    #[error("Unable to resolve definition for character id {id}")]
    UnableToResolveDefinition { id: CharacterId },

    #[error("Unable to resolve top-level definitions: every export depends on another ({exports:?})")]
    UnableToResolveTopDefinitions { exports: Vec<String> },

    #[error("Character id overflow: importing above {base_max} needs id {required}")]
    IdentifierOverflow { base_max: CharacterId, required: u32 },
}
