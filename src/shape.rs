// SPDX-License-Identifier: MIT
//! Shape and morph-shape payloads
//!
//! Only bitmap fills carry a character id. Everything else here is geometry and
//! color data that the merge copies verbatim.

use serde::{Deserialize, Serialize};

use crate::movie::CharacterId;

/// Rectangle in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

/// Straight 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 2D affine transform (16.16 fixed point scale/skew, twips translation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub scale_x: i32,
    pub scale_y: i32,
    pub rotate_skew0: i32,
    pub rotate_skew1: i32,
    pub translate_x: i32,
    pub translate_y: i32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            scale_x: 1 << 16,
            scale_y: 1 << 16,
            rotate_skew0: 0,
            rotate_skew1: 0,
            translate_x: 0,
            translate_y: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientSpread {
    #[default]
    Pad,
    Reflect,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub ratio: u8,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gradient {
    pub spread: GradientSpread,
    pub colors: Vec<ColorStop>,
}

/// Fill style of a regular shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FillStyle {
    Solid {
        color: Rgba,
    },
    LinearGradient {
        matrix: Matrix,
        gradient: Gradient,
    },
    RadialGradient {
        matrix: Matrix,
        gradient: Gradient,
    },
    FocalGradient {
        matrix: Matrix,
        gradient: Gradient,
        focal_point: i16,
    },
    Bitmap {
        bitmap_id: CharacterId,
        matrix: Matrix,
        repeating: bool,
        smoothed: bool,
    },
}

impl FillStyle {
    /// Character id of the bitmap backing this fill, if any
    pub fn bitmap_id(&self) -> Option<CharacterId> {
        match self {
            FillStyle::Bitmap { bitmap_id, .. } => Some(*bitmap_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: u16,
    pub fill: FillStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeStyles {
    pub fill: Vec<FillStyle>,
    pub line: Vec<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleChange {
    pub move_to: Option<(i32, i32)>,
    pub left_fill: Option<usize>,
    pub right_fill: Option<usize>,
    pub line_style: Option<usize>,
    /// Replacement style set, starting a new style scope
    pub new_styles: Option<ShapeStyles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ShapeRecord {
    StyleChange(StyleChange),
    StraightEdge {
        delta: (i32, i32),
    },
    CurvedEdge {
        control_delta: (i32, i32),
        anchor_delta: (i32, i32),
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub initial_styles: ShapeStyles,
    pub records: Vec<ShapeRecord>,
}

impl Shape {
    /// Every style set of the shape: the initial one, then each replacement
    pub fn style_sets(&self) -> impl Iterator<Item = &ShapeStyles> {
        std::iter::once(&self.initial_styles).chain(self.records.iter().filter_map(
            |record| match record {
                ShapeRecord::StyleChange(change) => change.new_styles.as_ref(),
                _ => None,
            },
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphColorStop {
    pub start: ColorStop,
    pub end: ColorStop,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphGradient {
    pub spread: GradientSpread,
    pub colors: Vec<MorphColorStop>,
}

/// Fill style of a morph shape, interpolated between a start and end state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MorphFillStyle {
    Solid {
        start_color: Rgba,
        end_color: Rgba,
    },
    LinearGradient {
        start_matrix: Matrix,
        end_matrix: Matrix,
        gradient: MorphGradient,
    },
    RadialGradient {
        start_matrix: Matrix,
        end_matrix: Matrix,
        gradient: MorphGradient,
    },
    FocalGradient {
        start_matrix: Matrix,
        end_matrix: Matrix,
        gradient: MorphGradient,
        start_focal_point: i16,
        end_focal_point: i16,
    },
    /// Both states of a morph bitmap fill sample the same bitmap
    Bitmap {
        bitmap_id: CharacterId,
        start_matrix: Matrix,
        end_matrix: Matrix,
        repeating: bool,
        smoothed: bool,
    },
}

impl MorphFillStyle {
    pub fn bitmap_id(&self) -> Option<CharacterId> {
        match self {
            MorphFillStyle::Bitmap { bitmap_id, .. } => Some(*bitmap_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphLineStyle {
    pub start_width: u16,
    pub end_width: u16,
    pub fill: MorphFillStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphShapeStyles {
    pub fill: Vec<MorphFillStyle>,
    pub line: Vec<MorphLineStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphStyleChange {
    pub start_move_to: Option<(i32, i32)>,
    pub end_move_to: Option<(i32, i32)>,
    pub left_fill: Option<usize>,
    pub right_fill: Option<usize>,
    pub line_style: Option<usize>,
    pub new_styles: Option<MorphShapeStyles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MorphShapeRecord {
    StyleChange(MorphStyleChange),
    StraightEdge {
        start_delta: (i32, i32),
        end_delta: (i32, i32),
    },
    CurvedEdge {
        start_control_delta: (i32, i32),
        start_anchor_delta: (i32, i32),
        end_control_delta: (i32, i32),
        end_anchor_delta: (i32, i32),
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphShape {
    pub initial_styles: MorphShapeStyles,
    pub records: Vec<MorphShapeRecord>,
}

impl MorphShape {
    pub fn style_sets(&self) -> impl Iterator<Item = &MorphShapeStyles> {
        std::iter::once(&self.initial_styles).chain(self.records.iter().filter_map(
            |record| match record {
                MorphShapeRecord::StyleChange(change) => change.new_styles.as_ref(),
                _ => None,
            },
        ))
    }
}
