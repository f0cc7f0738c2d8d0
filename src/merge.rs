// SPDX-License-Identifier: MIT
//! Import exported assets of extra movies into a base movie

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, error, info, warn};

use crate::composer::Composer;
use crate::config::{FailurePolicy, MergeConfig};
use crate::dependencies::dependencies;
use crate::error::MergeError;
use crate::movie::{CharacterId, ExportAssets, Movie, NamedId, Tag};
use crate::remap::remap_all;

/// Merge the exports of every extra movie into a copy of `base`
///
/// Uses the default configuration: the first failing extra aborts the merge.
pub fn merge<I>(base: &Movie, extras: I) -> Result<Movie, MergeError>
where
    I: IntoIterator<Item = Movie>,
{
    merge_with_config(base, extras, &MergeConfig::default())
}

/// Merge the exports of every extra movie into a copy of `base`
///
/// Extras are processed in order. Each one is renumbered above the highest id
/// of the movie built so far, so later extras also land above earlier ones.
/// `base` itself is never modified.
pub fn merge_with_config<I>(
    base: &Movie,
    extras: I,
    config: &MergeConfig,
) -> Result<Movie, MergeError>
where
    I: IntoIterator<Item = Movie>,
{
    let mut composer = Composer::new(base.clone());

    let mut merged = 0usize;
    let mut imported = 0usize;
    for (index, extra) in extras.into_iter().enumerate() {
        let tags = match extract_exports(&Composer::new(extra)) {
            Ok(Some(tags)) => tags,
            Ok(None) => {
                debug!("Extra movie #{} has no exports, nothing to import", index);
                merged += 1;
                continue;
            }
            Err(err) => {
                skip_or_abort(config, index, err)?;
                continue;
            }
        };

        // Outside the policy: a broken base cannot be skipped
        let base_max = composer.max_character_id()?;
        let shifted = match shift_above(&tags, base_max) {
            Ok(shifted) => shifted,
            Err(err) => {
                skip_or_abort(config, index, err)?;
                continue;
            }
        };

        debug!(
            "Importing {} tag(s) above character id {}",
            shifted.len(),
            base_max
        );
        merged += 1;
        imported += shifted.len();
        composer.insert_after_header(shifted);
    }

    info!(
        "Merged {} extra movie(s), imported {} tag(s)",
        merged, imported
    );
    Ok(composer.into_movie())
}

/// Apply the failure policy to an error raised by extra movie `index`
fn skip_or_abort(config: &MergeConfig, index: usize, err: MergeError) -> Result<(), MergeError> {
    match config.failure_policy {
        FailurePolicy::Abort => {
            error!("Failed to merge extra movie #{}: {}", index, err);
            Err(err)
        }
        FailurePolicy::SkipDocument => {
            warn!("Skipping extra movie #{}: {}", index, err);
            Ok(())
        }
    }
}

/// Tags an extra movie contributes to a merge
///
/// Returns the exported definitions together with everything they depend on,
/// dependencies first, followed by one export table listing every exported
/// name. Returns `None` when the movie exports nothing.
pub fn extract_exports(movie: &Composer) -> Result<Option<Vec<Tag>>, MergeError> {
    let exported = movie.named_exports();
    if exported.is_empty() {
        return Ok(None);
    }
    movie.definitions()?;

    let mut exported_deep_dependencies = HashSet::new();
    for &id in exported.values() {
        exported_deep_dependencies.extend(deep_dependencies(movie, id)?);
    }

    // Exports reachable from another export are emitted through it
    let roots: Vec<CharacterId> = exported
        .values()
        .copied()
        .filter(|id| !exported_deep_dependencies.contains(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if roots.is_empty() {
        return Err(MergeError::UnableToResolveTopDefinitions {
            exports: exported.keys().cloned().collect(),
        });
    }

    let mut tags = Vec::new();
    for id in dependency_first_order(movie, &roots)? {
        tags.push(movie.definition(id)?.clone());
    }
    tags.push(Tag::ExportAssets(ExportAssets {
        assets: exported
            .iter()
            .map(|(name, &id)| NamedId {
                name: name.clone(),
                id,
            })
            .collect(),
    }));

    Ok(Some(tags))
}

/// Transitive dependencies of `root`, excluding `root` itself
pub fn deep_dependencies(
    movie: &Composer,
    root: CharacterId,
) -> Result<HashSet<CharacterId>, MergeError> {
    let mut open = vec![root];
    let mut known = HashSet::from([root]);
    while let Some(id) = open.pop() {
        for dep in dependencies(movie.definition(id)?) {
            if known.insert(dep) {
                open.push(dep);
            }
        }
    }
    known.remove(&root);
    Ok(known)
}

/// Ids reachable from `roots`, each listed after everything it depends on
///
/// Post-order walk with an explicit stack. Siblings are visited in ascending
/// id order. On a cycle the tag closing it is listed before its partner, which
/// no order can avoid.
fn dependency_first_order(
    movie: &Composer,
    roots: &[CharacterId],
) -> Result<Vec<CharacterId>, MergeError> {
    let mut order = Vec::new();
    let mut entered = HashSet::new();
    let mut emitted = HashSet::new();
    // (id, children already pushed)
    let mut stack: Vec<(CharacterId, bool)> = roots.iter().rev().map(|&id| (id, false)).collect();

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            if emitted.insert(id) {
                order.push(id);
            }
            continue;
        }
        if !entered.insert(id) {
            if !emitted.contains(&id) {
                warn!("Dependency cycle through character id {}", id);
            }
            continue;
        }

        stack.push((id, true));
        let deps = dependencies(movie.definition(id)?);
        for &dep in deps.iter().rev() {
            if !emitted.contains(&dep) {
                stack.push((dep, false));
            }
        }
    }

    Ok(order)
}

/// Renumber `tags` so their lowest character id becomes `base_max + 1`
///
/// Relative spacing between ids is kept. Every id referenced by `tags` must be
/// defined in `tags`, which [`extract_exports`] guarantees.
fn shift_above(tags: &[Tag], base_max: CharacterId) -> Result<Vec<Tag>, MergeError> {
    let ids: BTreeSet<CharacterId> = tags.iter().filter_map(Tag::definition_id).collect();
    let (Some(&min), Some(&max)) = (ids.first(), ids.last()) else {
        return Ok(tags.to_vec());
    };

    let required = u32::from(base_max) + 1 + u32::from(max - min);
    if required > u32::from(CharacterId::MAX) {
        return Err(MergeError::IdentifierOverflow { base_max, required });
    }

    let start = base_max + 1;
    Ok(remap_all(tags, |id| id - min + start))
}
