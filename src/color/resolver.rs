//! Color reference resolution.
//!
//! A document color is either an explicit hex value or a symbolic scheme
//! slot with an optional transform chain. Resolution computes the concrete
//! RGB while preserving the original symbolic form as provenance, so the
//! write-back pipeline can re-emit an equivalent reference losslessly.
//!
//! Resolution never fails: malformed hex and unknown slots degrade to
//! opaque black with a warning reported to the observer.
use serde::{Deserialize, Serialize};

use super::rgb::RgbColor;
use super::scheme::{SchemeColorTable, SchemeSlot};
use super::transform::{ColorTransform, apply_transforms};
use crate::error::ResolveWarning;
use crate::observer::{NoopObserver, ResolveObserver};

/// A color as specified in the document, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorReference {
    /// Explicit RGB as a 6-digit hex string
    Rgb(String),
    /// Theme scheme slot with an ordered transform chain
    Scheme {
        /// Slot name as written in the document (canonical or alias)
        slot: String,
        /// Transform chain in document order; empty when untransformed
        transforms: Vec<ColorTransform>,
    },
}

impl ColorReference {
    /// Reference a scheme slot without transforms.
    #[inline]
    pub fn scheme(slot: &str) -> Self {
        Self::Scheme {
            slot: slot.to_string(),
            transforms: Vec::new(),
        }
    }
}

/// A fully resolved color with provenance.
///
/// The `red`/`green`/`blue` channels are the concrete values the host
/// application renders. The provenance fields (`scheme_slot`,
/// `transforms`, `original_hex`) preserve the symbolic specification and
/// are sufficient to reconstruct an equivalent [`ColorReference`] via
/// [`to_reference`](Self::to_reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Whether an alpha transform made the color fully transparent
    pub is_transparent: bool,
    /// Whether the color was specified as a theme scheme slot
    pub is_theme_color: bool,
    /// Slot name as written in the document, for theme colors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_slot: Option<String>,
    /// Transform chain in document order, when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<ColorTransform>>,
    /// Original hex string, for explicit colors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_hex: Option<String>,
}

impl ResolvedColor {
    /// Opaque black with no provenance, the terminal degradation value.
    pub fn opaque_black() -> Self {
        Self::from_rgb(RgbColor::BLACK)
    }

    /// An explicit (non-theme) color from concrete channels.
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            red: rgb.r,
            green: rgb.g,
            blue: rgb.b,
            is_transparent: false,
            is_theme_color: false,
            scheme_slot: None,
            transforms: None,
            original_hex: None,
        }
    }

    /// Concrete channels as an [`RgbColor`].
    #[inline]
    pub fn rgb(&self) -> RgbColor {
        RgbColor::new(self.red, self.green, self.blue)
    }

    /// Reconstruct a reference equivalent to the one this color was
    /// resolved from.
    ///
    /// Theme colors rebuild the scheme reference from the preserved slot
    /// name and transforms; explicit colors rebuild from the preserved hex
    /// string. A color with no provenance at all (a terminal default)
    /// falls back to its concrete channels as explicit hex.
    pub fn to_reference(&self) -> ColorReference {
        if self.is_theme_color
            && let Some(slot) = &self.scheme_slot
        {
            return ColorReference::Scheme {
                slot: slot.clone(),
                transforms: self.transforms.clone().unwrap_or_default(),
            };
        }
        match &self.original_hex {
            Some(hex) => ColorReference::Rgb(hex.clone()),
            None => ColorReference::Rgb(self.rgb().to_hex()),
        }
    }
}

/// Resolve a color reference against a theme scheme table.
///
/// Convenience wrapper over [`resolve_color_with_observer`] that discards
/// diagnostics.
///
/// # Examples
///
/// ```rust
/// use pitaya::color::{resolve_color, ColorReference, SchemeColorTable};
///
/// let scheme = SchemeColorTable::office_default();
/// let color = resolve_color(&ColorReference::scheme("accent1"), &scheme);
/// assert!(color.is_theme_color);
/// assert_eq!(color.rgb().to_hex(), "4472C4");
/// ```
#[inline]
pub fn resolve_color(reference: &ColorReference, scheme: &SchemeColorTable) -> ResolvedColor {
    resolve_color_with_observer(reference, scheme, &mut NoopObserver)
}

/// Resolve a color reference, reporting warnings to the observer.
///
/// Explicit hex parses to its channels; malformed input degrades to
/// opaque black (the hex string is still preserved as provenance). Scheme
/// references look up the slot, accepting mapping aliases; unknown slots
/// degrade to opaque black but keep the slot name so round-trip is not
/// lost. A non-empty transform chain is applied to the slot's base RGB.
pub fn resolve_color_with_observer(
    reference: &ColorReference,
    scheme: &SchemeColorTable,
    observer: &mut dyn ResolveObserver,
) -> ResolvedColor {
    match reference {
        ColorReference::Rgb(hex) => {
            let rgb = match RgbColor::parse_hex(hex) {
                Ok(rgb) => rgb,
                Err(err) => {
                    observer.warning(&ResolveWarning::MalformedColorReference(hex.clone(), err));
                    RgbColor::BLACK
                },
            };
            ResolvedColor {
                original_hex: Some(hex.clone()),
                ..ResolvedColor::from_rgb(rgb)
            }
        },
        ColorReference::Scheme { slot, transforms } => {
            let base = match SchemeSlot::from_name(slot) {
                Some(known) => scheme.color(known),
                None => {
                    observer.warning(&ResolveWarning::UnresolvableThemeSlot(slot.clone()));
                    RgbColor::BLACK
                },
            };
            let out = apply_transforms(base, transforms);
            ResolvedColor {
                red: out.rgb.r,
                green: out.rgb.g,
                blue: out.rgb.b,
                is_transparent: out.is_transparent(),
                is_theme_color: true,
                scheme_slot: Some(slot.clone()),
                transforms: (!transforms.is_empty()).then(|| transforms.clone()),
                original_hex: None,
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::WarningTally;

    fn scheme() -> SchemeColorTable {
        SchemeColorTable::office_default()
    }

    #[test]
    fn test_explicit_hex() {
        let color = resolve_color(&ColorReference::Rgb("0070C0".into()), &scheme());
        assert_eq!(color.rgb(), RgbColor::new(0, 112, 192));
        assert!(!color.is_theme_color);
        assert!(!color.is_transparent);
        assert_eq!(color.original_hex.as_deref(), Some("0070C0"));
        assert_eq!(color.scheme_slot, None);
    }

    #[test]
    fn test_malformed_hex_degrades_to_black() {
        let mut tally = WarningTally::new();
        let color = resolve_color_with_observer(
            &ColorReference::Rgb("not-a-color".into()),
            &scheme(),
            &mut tally,
        );
        assert_eq!(color.rgb(), RgbColor::BLACK);
        assert!(!color.is_transparent);
        assert_eq!(color.original_hex.as_deref(), Some("not-a-color"));
        assert_eq!(tally.malformed_references, 1);
    }

    #[test]
    fn test_scheme_slot_without_transforms() {
        let color = resolve_color(&ColorReference::scheme("dk2"), &scheme());
        assert_eq!(color.rgb().to_hex(), "44546A");
        assert!(color.is_theme_color);
        assert_eq!(color.scheme_slot.as_deref(), Some("dk2"));
        assert_eq!(color.transforms, None);
    }

    #[test]
    fn test_scheme_alias_keeps_document_name() {
        let color = resolve_color(&ColorReference::scheme("tx1"), &scheme());
        assert_eq!(color.rgb(), RgbColor::BLACK);
        assert!(color.is_theme_color);
        // Provenance keeps the alias as written, not the canonical name.
        assert_eq!(color.scheme_slot.as_deref(), Some("tx1"));
    }

    #[test]
    fn test_unknown_slot_degrades_to_black() {
        let mut tally = WarningTally::new();
        let reference = ColorReference::scheme("accent9");
        let color = resolve_color_with_observer(&reference, &scheme(), &mut tally);
        assert_eq!(color.rgb(), RgbColor::BLACK);
        assert!(color.is_theme_color);
        assert_eq!(color.scheme_slot.as_deref(), Some("accent9"));
        assert_eq!(tally.unresolvable_slots, 1);
    }

    #[test]
    fn test_transform_chain_applied() {
        let reference = ColorReference::Scheme {
            slot: "accent1".into(),
            transforms: vec![ColorTransform::LumMod(50_000)],
        };
        let color = resolve_color(&reference, &scheme());
        let expected = apply_transforms(RgbColor::new(0x44, 0x72, 0xC4), &[
            ColorTransform::LumMod(50_000),
        ]);
        assert_eq!(color.rgb(), expected.rgb);
        assert_eq!(color.transforms.as_deref(), Some(&[ColorTransform::LumMod(
            50_000
        )][..]));
    }

    #[test]
    fn test_alpha_zero_marks_transparent() {
        let reference = ColorReference::Scheme {
            slot: "lt1".into(),
            transforms: vec![ColorTransform::Alpha(0)],
        };
        let color = resolve_color(&reference, &scheme());
        assert!(color.is_transparent);
        assert_eq!(color.rgb(), RgbColor::WHITE);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let reference = ColorReference::Scheme {
            slot: "accent2".into(),
            transforms: vec![
                ColorTransform::LumMod(60_000),
                ColorTransform::LumOff(40_000),
            ],
        };
        let first = resolve_color(&reference, &scheme());
        let second = resolve_color(&first.to_reference(), &scheme());
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_reference_for_explicit_hex() {
        let color = resolve_color(&ColorReference::Rgb("A5A5A5".into()), &scheme());
        assert_eq!(color.to_reference(), ColorReference::Rgb("A5A5A5".into()));
    }

    #[test]
    fn test_to_reference_without_provenance() {
        let color = ResolvedColor::from_rgb(RgbColor::new(0, 56, 96));
        assert_eq!(color.to_reference(), ColorReference::Rgb("003860".into()));
    }

    #[test]
    fn test_serde_round_trip() {
        let reference = ColorReference::Scheme {
            slot: "accent1".into(),
            transforms: vec![ColorTransform::Tint(25_000)],
        };
        let color = resolve_color(&reference, &scheme());
        let json = serde_json::to_string(&color).unwrap();
        let back: ResolvedColor = serde_json::from_str(&json).unwrap();
        assert_eq!(color, back);
    }
}
