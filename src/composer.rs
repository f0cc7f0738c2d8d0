// SPDX-License-Identifier: MIT
//! Movie wrapper with lazily built definition and export indices
//!
//! The indices are derived from the tag stream and reset on every mutation,
//! so they can never drift from the tags they describe.

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use tracing::warn;

use crate::error::MergeError;
use crate::movie::{CharacterId, Movie, Tag};

/// A movie being composed, plus its cached indices
#[derive(Debug)]
pub struct Composer {
    movie: Movie,

    /// Character id -> index of the defining tag in `movie.tags`
    definitions: OnceCell<HashMap<CharacterId, usize>>,

    /// Export name -> character id, in order of first appearance
    named_exports: OnceCell<IndexMap<String, CharacterId>>,

    max_character_id: OnceCell<CharacterId>,
}

impl Composer {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            definitions: OnceCell::new(),
            named_exports: OnceCell::new(),
            max_character_id: OnceCell::new(),
        }
    }

    pub fn into_movie(self) -> Movie {
        self.movie
    }

    pub fn tags(&self) -> &[Tag] {
        &self.movie.tags
    }

    /// Index of every top-level definition tag
    ///
    /// Fails with [`MergeError::DuplicateDefinitionId`] if two definitions
    /// share an id.
    pub fn definitions(&self) -> Result<&HashMap<CharacterId, usize>, MergeError> {
        self.definitions.get_or_try_init(|| {
            let mut definitions = HashMap::new();
            for (index, tag) in self.movie.tags.iter().enumerate() {
                let Some(id) = tag.definition_id() else {
                    continue;
                };
                if definitions.insert(id, index).is_some() {
                    return Err(MergeError::DuplicateDefinitionId { id });
                }
            }
            Ok(definitions)
        })
    }

    /// Defining tag of `id`
    pub fn definition(&self, id: CharacterId) -> Result<&Tag, MergeError> {
        self.definitions()?
            .get(&id)
            .map(|&index| &self.movie.tags[index])
            .ok_or(MergeError::UnableToResolveDefinition { id })
    }

    /// Highest defined character id, or 0 for a movie without definitions
    pub fn max_character_id(&self) -> Result<CharacterId, MergeError> {
        self.max_character_id
            .get_or_try_init(|| Ok(self.definitions()?.keys().copied().max().unwrap_or(0)))
            .copied()
    }

    /// Exported names, gathered from every export table including those nested
    /// in sprites. A repeated name keeps its first position and its last id,
    /// and logs a warning.
    pub fn named_exports(&self) -> &IndexMap<String, CharacterId> {
        self.named_exports.get_or_init(|| {
            let mut named_exports = IndexMap::new();
            // Reversed so tags are visited in stream order
            let mut pending: Vec<&Tag> = self.movie.tags.iter().rev().collect();
            while let Some(tag) = pending.pop() {
                match tag {
                    Tag::ExportAssets(exports) => {
                        for asset in &exports.assets {
                            let previous = named_exports.insert(asset.name.clone(), asset.id);
                            if let Some(previous) = previous {
                                warn!(
                                    "Duplicate export name: {} ({} replaces {})",
                                    asset.name, asset.id, previous
                                );
                            }
                        }
                    }
                    Tag::DefineSprite(sprite) => pending.extend(sprite.tags.iter().rev()),
                    _ => {}
                }
            }
            named_exports
        })
    }

    /// Number of leading header-level tags (file attributes, metadata,
    /// background color)
    pub fn header_len(&self) -> usize {
        self.movie
            .tags
            .iter()
            .take_while(|tag| tag.is_header_level())
            .count()
    }

    /// Insert `tags` right after the leading header-level tags
    pub fn insert_after_header(&mut self, tags: Vec<Tag>) {
        let split = self.header_len();
        let mut spliced = Vec::with_capacity(self.movie.tags.len() + tags.len());
        spliced.extend_from_slice(&self.movie.tags[..split]);
        spliced.extend(tags);
        spliced.extend_from_slice(&self.movie.tags[split..]);
        self.movie.tags = spliced;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.definitions.take();
        self.named_exports.take();
        self.max_character_id.take();
    }
}
