// SPDX-License-Identifier: MIT
//! Definition tag classification

use crate::movie::{CharacterId, Tag};

impl Tag {
    /// Character id introduced by this tag, if it is a definition
    pub fn definition_id(&self) -> Option<CharacterId> {
        match self {
            Tag::DefineBinaryData(tag) => Some(tag.id),
            Tag::DefineBitmap(tag) => Some(tag.id),
            Tag::DefineButton(tag) => Some(tag.id),
            Tag::DefineCffFont(tag) => Some(tag.id),
            Tag::DefineDynamicText(tag) => Some(tag.id),
            Tag::DefineFont(tag) => Some(tag.id),
            Tag::DefineGlyphFont(tag) => Some(tag.id),
            Tag::DefineMorphShape(tag) => Some(tag.id),
            Tag::DefineShape(tag) => Some(tag.id),
            Tag::DefineSound(tag) => Some(tag.id),
            Tag::DefineSprite(tag) => Some(tag.id),
            Tag::DefineText(tag) => Some(tag.id),
            Tag::DoAbc(_)
            | Tag::DoAction(_)
            | Tag::ExportAssets(_)
            | Tag::FileAttributes(_)
            | Tag::FrameLabel(_)
            | Tag::Metadata(_)
            | Tag::PlaceObject(_)
            | Tag::RemoveObject(_)
            | Tag::SetBackgroundColor(_)
            | Tag::ShowFrame
            | Tag::Unknown(_) => None,
        }
    }
}

/// Whether the tag introduces a reusable character definition
#[inline]
pub fn is_definition(tag: &Tag) -> bool {
    tag.definition_id().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::{
        DefineBinaryData, DefineSprite, ExportAssets, NamedId, PlaceObject, UnknownTag,
    };

    #[test]
    fn test_definition_tags() {
        let binary = Tag::DefineBinaryData(DefineBinaryData {
            id: 5,
            data: vec![1, 2, 3],
        });
        let sprite = Tag::DefineSprite(DefineSprite {
            id: 6,
            frame_count: 1,
            tags: vec![Tag::ShowFrame],
        });

        assert!(is_definition(&binary));
        assert_eq!(binary.definition_id(), Some(5));
        assert!(is_definition(&sprite));
        assert_eq!(sprite.definition_id(), Some(6));
    }

    #[test]
    fn test_non_definition_tags() {
        let place = Tag::PlaceObject(PlaceObject {
            depth: 1,
            character_id: Some(5),
            ..PlaceObject::default()
        });
        let exports = Tag::ExportAssets(ExportAssets {
            assets: vec![NamedId {
                name: "hero".to_string(),
                id: 5,
            }],
        });
        let unknown = Tag::Unknown(UnknownTag {
            code: 255,
            data: vec![],
        });

        for tag in [place, exports, unknown, Tag::ShowFrame] {
            assert!(!is_definition(&tag), "{} is not a definition", tag.name());
            assert_eq!(tag.definition_id(), None);
        }
    }
}
