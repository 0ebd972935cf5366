//! Percentage-parameterized color transform pipeline.
//!
//! A scheme color reference carries an ordered list of transforms that
//! derive the rendered color from the theme's base RGB. The host applies
//! them in two fixed steps: tint/shade directly on the RGB channels first,
//! then the luminance/saturation operators in HSL space computed from the
//! post-tint/shade RGB. Alpha never touches the channels; it only sets the
//! opacity scalar on the result.
use serde::{Deserialize, Serialize};

use super::hsl::{hsl_to_rgb, rgb_to_hsl};
use super::rgb::RgbColor;

/// Scale divisor for transform percentages: `100000` means 100%.
pub const PERCENT_SCALE: f64 = 100_000.0;

/// A single color transform operator.
///
/// The payload is a signed percentage scaled by 100000, exactly as it
/// appears in the document (`50000` = 50%). Values are preserved verbatim
/// in [`ResolvedColor`](crate::color::ResolvedColor) provenance so an
/// equivalent reference can be re-emitted losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum ColorTransform {
    /// Blend toward white in RGB space
    Tint(i32),
    /// Blend toward black in RGB space
    Shade(i32),
    /// Multiply luminance in HSL space
    LumMod(i32),
    /// Offset luminance in HSL space
    LumOff(i32),
    /// Multiply saturation in HSL space
    SatMod(i32),
    /// Offset saturation in HSL space
    SatOff(i32),
    /// Set the opacity scalar; never changes the RGB channels
    Alpha(i32),
}

impl ColorTransform {
    /// Raw scaled percentage value of this operator.
    #[inline]
    pub fn value(&self) -> i32 {
        match *self {
            Self::Tint(v)
            | Self::Shade(v)
            | Self::LumMod(v)
            | Self::LumOff(v)
            | Self::SatMod(v)
            | Self::SatOff(v)
            | Self::Alpha(v) => v,
        }
    }

    /// Whether this operator runs in the HSL step of the pipeline.
    #[inline]
    fn is_hsl_space(&self) -> bool {
        matches!(
            self,
            Self::LumMod(_) | Self::LumOff(_) | Self::SatMod(_) | Self::SatOff(_)
        )
    }
}

/// Result of running a transform pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedColor {
    /// Final RGB after tint/shade and HSL operators
    pub rgb: RgbColor,
    /// Opacity scalar set by `Alpha`, if present (1.0 = opaque, 0.0 =
    /// fully transparent); `None` when the chain carries no alpha
    pub alpha: Option<f64>,
}

impl TransformedColor {
    /// Whether an alpha operator made the color fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.alpha == Some(0.0)
    }
}

/// Apply an ordered transform chain to a base RGB color.
///
/// Tint and shade run first, in document order among themselves, each
/// flooring its per-channel result. If any luminance/saturation operator
/// is present the intermediate RGB is converted to HSL, the operators run
/// in document order with L and S clamped to `[0, 1]`, and the result is
/// converted back with the host's channel rounding.
///
/// # Examples
///
/// ```rust
/// use pitaya::color::{apply_transforms, ColorTransform, RgbColor};
///
/// let base = RgbColor::new(0, 112, 192);
/// let out = apply_transforms(base, &[ColorTransform::LumMod(50000)]);
/// assert_eq!(out.rgb, RgbColor::new(0, 56, 96));
/// assert_eq!(out.alpha, None);
/// ```
pub fn apply_transforms(base: RgbColor, ops: &[ColorTransform]) -> TransformedColor {
    let mut rgb = base;
    for op in ops {
        match *op {
            ColorTransform::Tint(pct) => rgb = tint(rgb, pct),
            ColorTransform::Shade(pct) => rgb = shade(rgb, pct),
            _ => {},
        }
    }

    if ops.iter().any(ColorTransform::is_hsl_space) {
        let mut hsl = rgb_to_hsl(rgb);
        for op in ops {
            match *op {
                ColorTransform::LumMod(pct) => hsl.luminance *= fraction(pct),
                ColorTransform::LumOff(pct) => hsl.luminance += fraction(pct),
                ColorTransform::SatMod(pct) => hsl.saturation *= fraction(pct),
                ColorTransform::SatOff(pct) => hsl.saturation += fraction(pct),
                _ => {},
            }
        }
        hsl.luminance = hsl.luminance.clamp(0.0, 1.0);
        hsl.saturation = hsl.saturation.clamp(0.0, 1.0);
        rgb = hsl_to_rgb(hsl);
    }

    let alpha = ops.iter().rev().find_map(|op| match *op {
        ColorTransform::Alpha(pct) => Some(fraction(pct)),
        _ => None,
    });

    TransformedColor { rgb, alpha }
}

#[inline]
fn fraction(pct: i32) -> f64 {
    f64::from(pct) / PERCENT_SCALE
}

/// Blend a channel toward white: `c' = floor(c + (255 - c) * (1 - p))`.
fn tint(color: RgbColor, pct: i32) -> RgbColor {
    let apply = |c: u8| {
        let c = f64::from(c);
        let blended = c + (255.0 - c) * (1.0 - fraction(pct));
        blended.floor().clamp(0.0, 255.0) as u8
    };
    RgbColor::new(apply(color.r), apply(color.g), apply(color.b))
}

/// Scale a channel toward black: `c' = floor(c * p)`.
fn shade(color: RgbColor, pct: i32) -> RgbColor {
    let apply = |c: u8| (f64::from(c) * fraction(pct)).floor().clamp(0.0, 255.0) as u8;
    RgbColor::new(apply(color.r), apply(color.g), apply(color.b))
}
