//! Property-based tests using proptest
//!
//! Extra movies are generated as random acyclic definition graphs (each
//! character may only reference lower ids), emitted in shuffled order.

use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;
use std::iter;

use swf_merge::movie::DefineSprite;
use swf_merge::{
    dependencies, dependency_occurrences, merge, remap, CharacterId, Composer, Movie, Tag,
};

use test_fixtures::*;

/// Definition tags for a list of (kind, dependency picks); tag `i` gets id `i + 1`
fn build_definitions(specs: &[(u8, Vec<Index>)]) -> Vec<Tag> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (kind, picks))| {
            let id = i as CharacterId + 1;
            let earlier: Vec<CharacterId> = if i == 0 {
                Vec::new()
            } else {
                picks.iter().map(|pick| pick.index(i) as CharacterId + 1).collect()
            };
            match kind {
                0 => binary(id),
                1 => bitmap(id),
                2 => shape(id, earlier.first().copied()),
                3 => styled_shape(id, &earlier),
                4 => morph_shape(id, &earlier),
                5 => button(id, &earlier),
                6 => animated_sprite(id, &earlier),
                _ => sprite(id, &earlier),
            }
        })
        .collect()
}

/// Extra movie with shuffled definitions and up to four exports
fn extra_movie_strategy() -> impl Strategy<Value = Movie> {
    prop::collection::vec((0u8..8, prop::collection::vec(any::<Index>(), 0..4)), 1..16)
        .prop_flat_map(|specs| {
            let definitions = build_definitions(&specs);
            let n = definitions.len();
            (
                Just(definitions).prop_shuffle(),
                prop::collection::btree_set(1..=n as CharacterId, 1..=n.min(4)),
            )
        })
        .prop_map(|(mut tags, exported)| {
            let names: Vec<(String, CharacterId)> = exported
                .into_iter()
                .map(|id| (format!("asset_{}", id), id))
                .collect();
            let pairs: Vec<(&str, CharacterId)> =
                names.iter().map(|(name, id)| (name.as_str(), *id)).collect();
            tags.push(exports(&pairs));
            tags.push(Tag::ShowFrame);
            movie(tags)
        })
}

/// Sprite wrapping the whole tag stream of `movie`, so nested sprites and a
/// nested export table are exercised too
fn wrapped(movie: &Movie) -> Tag {
    Tag::DefineSprite(DefineSprite {
        id: movie.tags.len() as CharacterId + 1,
        frame_count: 1,
        tags: movie.tags.clone(),
    })
}

/// Exported ids of `tag`, nested export tables included
fn exported_ids(tag: &Tag) -> Vec<CharacterId> {
    Composer::new(movie(vec![tag.clone()]))
        .named_exports()
        .values()
        .copied()
        .collect()
}

/// Base movie defining ids 1..=max_id with no exports
fn base_movie_strategy() -> impl Strategy<Value = Movie> {
    (0u16..30).prop_map(|max_id| {
        let mut tags = vec![file_attributes(), background()];
        tags.extend((1..=max_id).map(|id| shape(id, None)));
        tags.push(Tag::ShowFrame);
        movie(tags)
    })
}

proptest! {
    /// Merged definitions never collide, and every import lands above the base
    #[test]
    fn merge_is_collision_free(base in base_movie_strategy(), extra in extra_movie_strategy()) {
        let base_max = Composer::new(base.clone()).max_character_id().unwrap();
        let merged = merge(&base, [extra]).unwrap();

        let ids = defined_ids(&merged.tags);
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len(), "Duplicate definition ids: {:?}", ids);

        let imported = ids.iter().filter(|&&id| id > base_max).count();
        prop_assert_eq!(imported, ids.len() - base_max as usize);
    }

    /// Every reference in the merged movie points at an earlier definition
    #[test]
    fn merge_closure_is_complete(base in base_movie_strategy(), extra in extra_movie_strategy()) {
        let merged = merge(&base, [extra]).unwrap();

        let mut defined = HashSet::new();
        for tag in &merged.tags {
            for dep in dependencies(tag) {
                prop_assert!(defined.contains(&dep), "{} uses {} before definition", tag.name(), dep);
            }
            defined.extend(tag.definition_id());
        }
    }

    /// Exports of the merged movie resolve to imported definitions
    #[test]
    fn merge_exports_resolve(base in base_movie_strategy(), extra in extra_movie_strategy()) {
        let extra_exports = Composer::new(extra.clone()).named_exports().clone();
        let merged = Composer::new(merge(&base, [extra]).unwrap());

        let merged_exports = merged.named_exports();
        prop_assert_eq!(merged_exports.len(), extra_exports.len());
        for (name, id) in merged_exports {
            prop_assert!(extra_exports.contains_key(name));
            prop_assert!(merged.definition(*id).is_ok());
        }
    }

    /// Remapping changes ids and nothing else
    #[test]
    fn remap_is_structure_preserving(extra in extra_movie_strategy(), offset in 0u16..1000) {
        let f = |id: CharacterId| id.wrapping_add(offset);
        let nested = wrapped(&extra);
        for tag in extra.tags.iter().chain(iter::once(&nested)) {
            let remapped = remap(tag, f);
            prop_assert_eq!(remapped.name(), tag.name());
            prop_assert_eq!(remapped.definition_id(), tag.definition_id().map(f));
            let expected: Vec<_> = dependency_occurrences(tag).into_iter().map(f).collect();
            prop_assert_eq!(dependency_occurrences(&remapped), expected);
            let expected: Vec<_> = exported_ids(tag).into_iter().map(f).collect();
            prop_assert_eq!(exported_ids(&remapped), expected);
            prop_assert_eq!(&remap(&remapped, |id| id.wrapping_sub(offset)), tag);
        }
    }

    /// remap(remap(t, f1), f2) == remap(t, f2 . f1)
    #[test]
    fn remap_composes(extra in extra_movie_strategy(), a in 0u16..500, b in 1u16..7) {
        let f1 = |id: CharacterId| id.wrapping_add(a);
        let f2 = |id: CharacterId| id.wrapping_mul(b);
        let nested = wrapped(&extra);
        for tag in extra.tags.iter().chain(iter::once(&nested)) {
            prop_assert_eq!(remap(&remap(tag, f1), f2), remap(tag, |id| f2(f1(id))));
        }
    }
}
