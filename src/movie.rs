// SPDX-License-Identifier: MIT
//! Decoded movie model
//!
//! A [`Movie`] is a header plus a flat tag stream. Sprites own a nested tag
//! stream of the same type, which is the only place the tree recurses.

use serde::{Deserialize, Serialize};

use crate::shape::{Matrix, MorphShape, Rect, Rgba, Shape};

/// Identifier of a character definition, unique within one movie
pub type CharacterId = u16;

/// Movie header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub swf_version: u8,
    pub frame_size: Rect,
    /// Frames per second, 8.8 fixed point
    pub frame_rate: u16,
    pub frame_count: u16,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            swf_version: 10,
            frame_size: Rect {
                x_min: 0,
                x_max: 11000,
                y_min: 0,
                y_max: 8000,
            },
            frame_rate: 24 << 8,
            frame_count: 1,
        }
    }
}

/// A decoded movie
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Movie {
    pub header: Header,
    pub tags: Vec<Tag>,
}

impl Movie {
    pub fn new(header: Header, tags: Vec<Tag>) -> Self {
        Self { header, tags }
    }
}

/// One record of a tag stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Tag {
    DefineBinaryData(DefineBinaryData),
    DefineBitmap(DefineBitmap),
    DefineButton(DefineButton),
    DefineCffFont(DefineCffFont),
    DefineDynamicText(DefineDynamicText),
    DefineFont(DefineFont),
    DefineGlyphFont(DefineGlyphFont),
    DefineMorphShape(DefineMorphShape),
    DefineShape(DefineShape),
    DefineSound(DefineSound),
    DefineSprite(DefineSprite),
    DefineText(DefineText),
    DoAbc(DoAbc),
    DoAction(DoAction),
    ExportAssets(ExportAssets),
    FileAttributes(FileAttributes),
    FrameLabel(FrameLabel),
    Metadata(Metadata),
    PlaceObject(PlaceObject),
    RemoveObject(RemoveObject),
    SetBackgroundColor(SetBackgroundColor),
    ShowFrame,
    Unknown(UnknownTag),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineBinaryData {
    pub id: CharacterId,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitmapFormat {
    Jpeg,
    Png,
    Gif,
    Lossless,
    LosslessAlpha,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineBitmap {
    pub id: CharacterId,
    pub width: u16,
    pub height: u16,
    pub format: BitmapFormat,
    pub data: Vec<u8>,
}

/// Which button states a character is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonStates {
    pub up: bool,
    pub over: bool,
    pub down: bool,
    pub hit_test: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonRecord {
    pub states: ButtonStates,
    pub character_id: CharacterId,
    pub depth: u16,
    pub matrix: Matrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonCondAction {
    pub conditions: u16,
    pub actions: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineButton {
    pub id: CharacterId,
    pub track_as_menu: bool,
    pub characters: Vec<ButtonRecord>,
    pub actions: Vec<ButtonCondAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineCffFont {
    pub id: CharacterId,
    pub font_name: String,
    pub is_bold: bool,
    pub is_italic: bool,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineDynamicText {
    pub id: CharacterId,
    pub bounds: Rect,
    pub variable_name: Option<String>,
    pub text: Option<String>,
    pub html: bool,
    pub read_only: bool,
    pub max_length: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineFont {
    pub id: CharacterId,
    pub font_name: String,
    pub is_bold: bool,
    pub is_italic: bool,
    /// Encoded glyph table, copied verbatim
    pub glyphs: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineGlyphFont {
    pub id: CharacterId,
    pub glyphs: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineMorphShape {
    pub id: CharacterId,
    pub start_bounds: Rect,
    pub end_bounds: Rect,
    pub shape: MorphShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineShape {
    pub id: CharacterId,
    pub bounds: Rect,
    pub shape: Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioCodingFormat {
    UncompressedNativeEndian,
    Adpcm,
    Mp3,
    UncompressedLittleEndian,
    Nellymoser,
    Speex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineSound {
    pub id: CharacterId,
    pub format: AudioCodingFormat,
    pub sample_rate: u32,
    pub stereo: bool,
    pub sample_count: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineSprite {
    pub id: CharacterId,
    pub frame_count: u16,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineText {
    pub id: CharacterId,
    pub bounds: Rect,
    pub matrix: Matrix,
    /// Encoded text records, copied verbatim
    pub records: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoAbc {
    pub name: String,
    pub lazy_initialize: bool,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoAction {
    pub actions: Vec<u8>,
}

/// A name under which a character is exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedId {
    pub name: String,
    pub id: CharacterId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportAssets {
    pub assets: Vec<NamedId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileAttributes {
    pub use_direct_blit: bool,
    pub use_gpu: bool,
    pub has_metadata: bool,
    pub use_as3: bool,
    pub use_network: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLabel {
    pub name: String,
    pub is_anchor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceObject {
    pub is_update: bool,
    pub depth: u16,
    pub character_id: Option<CharacterId>,
    pub matrix: Option<Matrix>,
    pub ratio: Option<u16>,
    pub name: Option<String>,
    pub clip_depth: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoveObject {
    pub depth: u16,
    pub character_id: Option<CharacterId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBackgroundColor {
    pub color: Rgba,
}

/// Tag the decoder kept as raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownTag {
    pub code: u16,
    pub data: Vec<u8>,
}

impl Tag {
    /// Short, stable name of the tag variant (used in log output)
    pub fn name(&self) -> &'static str {
        match self {
            Tag::DefineBinaryData(_) => "DefineBinaryData",
            Tag::DefineBitmap(_) => "DefineBitmap",
            Tag::DefineButton(_) => "DefineButton",
            Tag::DefineCffFont(_) => "DefineCffFont",
            Tag::DefineDynamicText(_) => "DefineDynamicText",
            Tag::DefineFont(_) => "DefineFont",
            Tag::DefineGlyphFont(_) => "DefineGlyphFont",
            Tag::DefineMorphShape(_) => "DefineMorphShape",
            Tag::DefineShape(_) => "DefineShape",
            Tag::DefineSound(_) => "DefineSound",
            Tag::DefineSprite(_) => "DefineSprite",
            Tag::DefineText(_) => "DefineText",
            Tag::DoAbc(_) => "DoAbc",
            Tag::DoAction(_) => "DoAction",
            Tag::ExportAssets(_) => "ExportAssets",
            Tag::FileAttributes(_) => "FileAttributes",
            Tag::FrameLabel(_) => "FrameLabel",
            Tag::Metadata(_) => "Metadata",
            Tag::PlaceObject(_) => "PlaceObject",
            Tag::RemoveObject(_) => "RemoveObject",
            Tag::SetBackgroundColor(_) => "SetBackgroundColor",
            Tag::ShowFrame => "ShowFrame",
            Tag::Unknown(_) => "Unknown",
        }
    }

    /// Header-level tags lead the stream; imports are inserted after them
    pub fn is_header_level(&self) -> bool {
        matches!(
            self,
            Tag::FileAttributes(_) | Tag::Metadata(_) | Tag::SetBackgroundColor(_)
        )
    }
}
