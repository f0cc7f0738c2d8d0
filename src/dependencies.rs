// SPDX-License-Identifier: MIT
//! Character references held by a tag
//!
//! [`dependency_occurrences`] lists every reference in structural order, one
//! entry per occurrence. [`dependencies`] is the deduplicated set most callers
//! want. Neither checks that the referenced characters exist.

use std::collections::BTreeSet;

use crate::movie::{CharacterId, DefineButton, DefineMorphShape, DefineShape, Tag};
use crate::shape::{MorphShapeStyles, ShapeStyles};

/// Set of character ids referenced by the tag
pub fn dependencies(tag: &Tag) -> BTreeSet<CharacterId> {
    dependency_occurrences(tag).into_iter().collect()
}

/// Every character id occurrence referenced by the tag, sprites included
pub fn dependency_occurrences(tag: &Tag) -> Vec<CharacterId> {
    let mut out = Vec::new();
    collect(tag, &mut out);
    out
}

fn collect(tag: &Tag, out: &mut Vec<CharacterId>) {
    match tag {
        Tag::DefineButton(button) => collect_button(button, out),
        Tag::DefineMorphShape(morph) => collect_morph_shape(morph, out),
        Tag::DefineShape(shape) => collect_shape(shape, out),
        Tag::DefineSprite(sprite) => {
            for child in &sprite.tags {
                collect(child, out);
            }
        }
        Tag::PlaceObject(place) => out.extend(place.character_id),
        Tag::RemoveObject(remove) => out.extend(remove.character_id),
        Tag::DefineBinaryData(_)
        | Tag::DefineBitmap(_)
        | Tag::DefineCffFont(_)
        | Tag::DefineDynamicText(_)
        | Tag::DefineFont(_)
        | Tag::DefineGlyphFont(_)
        | Tag::DefineSound(_)
        | Tag::DefineText(_)
        | Tag::DoAbc(_)
        | Tag::DoAction(_)
        | Tag::ExportAssets(_)
        | Tag::FileAttributes(_)
        | Tag::FrameLabel(_)
        | Tag::Metadata(_)
        | Tag::SetBackgroundColor(_)
        | Tag::ShowFrame
        | Tag::Unknown(_) => {}
    }
}

fn collect_button(button: &DefineButton, out: &mut Vec<CharacterId>) {
    out.extend(button.characters.iter().map(|record| record.character_id));
}

fn collect_shape(tag: &DefineShape, out: &mut Vec<CharacterId>) {
    for styles in tag.shape.style_sets() {
        collect_shape_styles(styles, out);
    }
}

fn collect_shape_styles(styles: &ShapeStyles, out: &mut Vec<CharacterId>) {
    out.extend(styles.fill.iter().filter_map(|fill| fill.bitmap_id()));
    out.extend(styles.line.iter().filter_map(|line| line.fill.bitmap_id()));
}

fn collect_morph_shape(tag: &DefineMorphShape, out: &mut Vec<CharacterId>) {
    for styles in tag.shape.style_sets() {
        collect_morph_shape_styles(styles, out);
    }
}

fn collect_morph_shape_styles(styles: &MorphShapeStyles, out: &mut Vec<CharacterId>) {
    out.extend(styles.fill.iter().filter_map(|fill| fill.bitmap_id()));
    out.extend(styles.line.iter().filter_map(|line| line.fill.bitmap_id()));
}
