//! Immutable style layer snapshots.
//!
//! The document adapter converts mutable parser nodes into one
//! [`StyleLayer`] per run, paragraph, and text body, plus per-scope
//! [`LevelStyleTable`]s, before resolution begins. Every field is
//! optional: absence means "defer to the next layer in the cascade,"
//! never a false or zero value.
use serde::{Deserialize, Serialize};

use crate::color::ColorReference;

/// Terminal typeface when neither the cascade nor the theme supplies one.
pub const DEFAULT_TYPEFACE: &str = "Calibri";

/// Optional run properties contributed by one level of the cascade.
///
/// Sizes and spacing are stored in hundredths of a point, exactly as the
/// document carries them (`2400` = 24 pt); spacing may be negative for
/// condensed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleLayer {
    /// Font size in hundredths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    /// Character spacing in hundredths of a point, signed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
}

impl StyleLayer {
    /// An empty layer that defers every attribute.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size (hundredths of a point).
    #[inline]
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the bold flag.
    #[inline]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set the font name.
    #[inline]
    pub fn with_font_name(mut self, name: &str) -> Self {
        self.font_name = Some(name.to_string());
        self
    }

    /// Set the color reference.
    #[inline]
    pub fn with_color(mut self, color: ColorReference) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether this layer contributes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Number of lookup levels in a level style table.
pub const LEVEL_COUNT: usize = 9;

/// Per-nesting-level default run properties (levels 1-9).
///
/// One table exists per owner (slide master, presentation default) and
/// per style family; the adapter selects the right pair before handing
/// them to the cascade. Out-of-range level indices are clamped rather
/// than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelStyleTable {
    levels: [Option<StyleLayer>; LEVEL_COUNT],
}

impl LevelStyleTable {
    /// An empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layer for a level (1-9, clamped), consuming and returning
    /// the table.
    pub fn with_level(mut self, level: u8, layer: StyleLayer) -> Self {
        self.levels[Self::slot(level)] = Some(layer);
        self
    }

    /// Layer defined at a level (1-9, clamped), if any.
    #[inline]
    pub fn level(&self, level: u8) -> Option<&StyleLayer> {
        self.levels[Self::slot(level)].as_ref()
    }

    /// Whether no level defines a layer.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Option::is_none)
    }

    #[inline]
    fn slot(level: u8) -> usize {
        usize::from(level.clamp(1, LEVEL_COUNT as u8)) - 1
    }
}

/// Style family a text body belongs to.
///
/// Determines which level tables the adapter selects and which theme
/// typeface supplies the terminal font-name default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleFamily {
    /// Title and centered-title placeholders
    Title,
    /// Body placeholders
    Body,
    /// Everything else (text boxes, shapes, notes)
    #[default]
    Other,
}

/// Major and minor theme typefaces.
///
/// Titles default to the major (heading) font, all other families to the
/// minor (body) font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontScheme {
    /// Major (heading) latin typeface
    pub major: Option<String>,
    /// Minor (body) latin typeface
    pub minor: Option<String>,
}

impl FontScheme {
    /// Create a scheme from major and minor typefaces.
    pub fn new(major: &str, minor: &str) -> Self {
        Self {
            major: Some(major.to_string()),
            minor: Some(minor.to_string()),
        }
    }

    /// Theme typeface for a style family, if the theme defines one.
    pub fn typeface_for(&self, family: StyleFamily) -> Option<&str> {
        match family {
            StyleFamily::Title => self.major.as_deref(),
            StyleFamily::Body | StyleFamily::Other => self.minor.as_deref(),
        }
    }
}
