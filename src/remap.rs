// SPDX-License-Identifier: MIT
//! Character id remapping
//!
//! [`remap`] rewrites exactly the occurrences reported by
//! [`crate::dependencies::dependency_occurrences`], plus the tag's own
//! definition id and the ids of export entries. All other fields are copied.

use crate::movie::{
    ButtonRecord, CharacterId, DefineButton, DefineMorphShape, DefineShape, DefineSprite,
    ExportAssets, NamedId, PlaceObject, RemoveObject, Tag,
};
use crate::shape::{
    FillStyle, LineStyle, MorphFillStyle, MorphLineStyle, MorphShapeRecord, MorphShapeStyles,
    MorphStyleChange, ShapeRecord, ShapeStyles, StyleChange,
};

/// Copy of `tag` with every character id replaced by `f(id)`
pub fn remap<F>(tag: &Tag, f: F) -> Tag
where
    F: Fn(CharacterId) -> CharacterId,
{
    remap_tag(tag, &f)
}

/// [`remap`] applied to a whole tag stream
pub fn remap_all<F>(tags: &[Tag], f: F) -> Vec<Tag>
where
    F: Fn(CharacterId) -> CharacterId,
{
    tags.iter().map(|tag| remap_tag(tag, &f)).collect()
}

fn remap_tag(tag: &Tag, f: &dyn Fn(CharacterId) -> CharacterId) -> Tag {
    match tag {
        Tag::DefineBinaryData(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineBinaryData(t)
        }
        Tag::DefineBitmap(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineBitmap(t)
        }
        Tag::DefineButton(t) => Tag::DefineButton(remap_button(t, f)),
        Tag::DefineCffFont(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineCffFont(t)
        }
        Tag::DefineDynamicText(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineDynamicText(t)
        }
        Tag::DefineFont(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineFont(t)
        }
        Tag::DefineGlyphFont(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineGlyphFont(t)
        }
        Tag::DefineMorphShape(t) => Tag::DefineMorphShape(remap_morph_shape(t, f)),
        Tag::DefineShape(t) => Tag::DefineShape(remap_shape(t, f)),
        Tag::DefineSound(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineSound(t)
        }
        Tag::DefineSprite(t) => Tag::DefineSprite(DefineSprite {
            id: f(t.id),
            frame_count: t.frame_count,
            tags: t.tags.iter().map(|child| remap_tag(child, f)).collect(),
        }),
        Tag::DefineText(t) => {
            let mut t = t.clone();
            t.id = f(t.id);
            Tag::DefineText(t)
        }
        Tag::ExportAssets(t) => Tag::ExportAssets(ExportAssets {
            assets: t
                .assets
                .iter()
                .map(|asset| NamedId {
                    name: asset.name.clone(),
                    id: f(asset.id),
                })
                .collect(),
        }),
        Tag::PlaceObject(t) => Tag::PlaceObject(PlaceObject {
            character_id: t.character_id.map(f),
            ..t.clone()
        }),
        Tag::RemoveObject(t) => Tag::RemoveObject(RemoveObject {
            depth: t.depth,
            character_id: t.character_id.map(f),
        }),
        Tag::DoAbc(_)
        | Tag::DoAction(_)
        | Tag::FileAttributes(_)
        | Tag::FrameLabel(_)
        | Tag::Metadata(_)
        | Tag::SetBackgroundColor(_)
        | Tag::ShowFrame
        | Tag::Unknown(_) => tag.clone(),
    }
}

fn remap_button(tag: &DefineButton, f: &dyn Fn(CharacterId) -> CharacterId) -> DefineButton {
    DefineButton {
        id: f(tag.id),
        track_as_menu: tag.track_as_menu,
        characters: tag
            .characters
            .iter()
            .map(|record| ButtonRecord {
                character_id: f(record.character_id),
                ..record.clone()
            })
            .collect(),
        actions: tag.actions.clone(),
    }
}

fn remap_shape(tag: &DefineShape, f: &dyn Fn(CharacterId) -> CharacterId) -> DefineShape {
    let mut out = tag.clone();
    out.id = f(tag.id);
    out.shape.initial_styles = remap_shape_styles(&tag.shape.initial_styles, f);
    for record in &mut out.shape.records {
        if let ShapeRecord::StyleChange(StyleChange {
            new_styles: Some(styles),
            ..
        }) = record
        {
            *styles = remap_shape_styles(styles, f);
        }
    }
    out
}

fn remap_shape_styles(styles: &ShapeStyles, f: &dyn Fn(CharacterId) -> CharacterId) -> ShapeStyles {
    ShapeStyles {
        fill: styles.fill.iter().map(|fill| remap_fill(fill, f)).collect(),
        line: styles
            .line
            .iter()
            .map(|line| LineStyle {
                width: line.width,
                fill: remap_fill(&line.fill, f),
            })
            .collect(),
    }
}

fn remap_fill(fill: &FillStyle, f: &dyn Fn(CharacterId) -> CharacterId) -> FillStyle {
    match fill {
        FillStyle::Bitmap {
            bitmap_id,
            matrix,
            repeating,
            smoothed,
        } => FillStyle::Bitmap {
            bitmap_id: f(*bitmap_id),
            matrix: *matrix,
            repeating: *repeating,
            smoothed: *smoothed,
        },
        other => other.clone(),
    }
}

fn remap_morph_shape(
    tag: &DefineMorphShape,
    f: &dyn Fn(CharacterId) -> CharacterId,
) -> DefineMorphShape {
    let mut out = tag.clone();
    out.id = f(tag.id);
    out.shape.initial_styles = remap_morph_shape_styles(&tag.shape.initial_styles, f);
    for record in &mut out.shape.records {
        if let MorphShapeRecord::StyleChange(MorphStyleChange {
            new_styles: Some(styles),
            ..
        }) = record
        {
            *styles = remap_morph_shape_styles(styles, f);
        }
    }
    out
}

fn remap_morph_shape_styles(
    styles: &MorphShapeStyles,
    f: &dyn Fn(CharacterId) -> CharacterId,
) -> MorphShapeStyles {
    MorphShapeStyles {
        fill: styles
            .fill
            .iter()
            .map(|fill| remap_morph_fill(fill, f))
            .collect(),
        line: styles
            .line
            .iter()
            .map(|line| MorphLineStyle {
                start_width: line.start_width,
                end_width: line.end_width,
                fill: remap_morph_fill(&line.fill, f),
            })
            .collect(),
    }
}

fn remap_morph_fill(fill: &MorphFillStyle, f: &dyn Fn(CharacterId) -> CharacterId) -> MorphFillStyle {
    match fill {
        MorphFillStyle::Bitmap {
            bitmap_id,
            start_matrix,
            end_matrix,
            repeating,
            smoothed,
        } => MorphFillStyle::Bitmap {
            bitmap_id: f(*bitmap_id),
            start_matrix: *start_matrix,
            end_matrix: *end_matrix,
            repeating: *repeating,
            smoothed: *smoothed,
        },
        other => other.clone(),
    }
}
