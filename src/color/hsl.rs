//! RGB/HSL conversion with host-exact channel rounding.
//!
//! Luminance and saturation transforms operate in HSL space. The
//! conversions use the standard formulas, but converting back to RGB must
//! reproduce the host application's output bit-for-bit, which uses an
//! asymmetric rounding rule: a channel value landing (within 1e-4) on an
//! exact .5 fraction rounds down, everything else rounds to nearest with
//! ties away from zero. See [`channel_from_fraction`].
use super::rgb::RgbColor;

/// A color in HSL space.
///
/// Hue is in degrees `[0, 360)`; saturation and luminance are fractions in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub luminance: f64,
}

/// Tolerance for detecting an exact .5 channel fraction.
const HALF_TOLERANCE: f64 = 1e-4;

/// Convert an RGB color to HSL.
pub fn rgb_to_hsl(color: RgbColor) -> HslColor {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let luminance = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, saturation zero.
        return HslColor {
            hue: 0.0,
            saturation: 0.0,
            luminance,
        };
    }

    let delta = max - min;
    let saturation = if luminance > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    HslColor {
        hue: hue.rem_euclid(360.0),
        saturation,
        luminance,
    }
}

/// Convert an HSL color back to RGB using the host rounding rule.
pub fn hsl_to_rgb(color: HslColor) -> RgbColor {
    let HslColor {
        hue,
        saturation,
        luminance,
    } = color;

    let chroma = (1.0 - (2.0 * luminance - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = luminance - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    RgbColor::new(
        channel_from_fraction(r + m),
        channel_from_fraction(g + m),
        channel_from_fraction(b + m),
    )
}

/// Scale a `[0, 1]` component fraction to a `0..=255` channel value.
///
/// An exact half fraction rounds down: the host truncates the .5 case,
/// which standard round-half-away would bump up. `LumMod(50000)` on pure
/// white lands every channel on 127.5 and the host emits 127, not 128.
pub fn channel_from_fraction(fraction: f64) -> u8 {
    let value = fraction * 255.0;
    let rounded = if (value.fract() - 0.5).abs() < HALF_TOLERANCE {
        value.floor()
    } else {
        value.round()
    };
    rounded.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_round_trip() {
        let gray = RgbColor::new(128, 128, 128);
        let hsl = rgb_to_hsl(gray);
        assert_eq!(hsl.saturation, 0.0);
        assert_eq!(hsl_to_rgb(hsl), gray);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsl(RgbColor::new(255, 0, 0)).hue, 0.0);
        assert_eq!(rgb_to_hsl(RgbColor::new(0, 255, 0)).hue, 120.0);
        assert_eq!(rgb_to_hsl(RgbColor::new(0, 0, 255)).hue, 240.0);
    }

    #[test]
    fn test_saturated_round_trip() {
        let color = RgbColor::new(0, 112, 192);
        assert_eq!(hsl_to_rgb(rgb_to_hsl(color)), color);
    }

    #[test]
    fn test_exact_half_rounds_down() {
        // 127.5 / 255 is the canonical exact-half case.
        assert_eq!(channel_from_fraction(0.5), 127);
    }

    #[test]
    fn test_near_half_rounds_to_nearest() {
        // Just past the tolerance window rounds normally again.
        assert_eq!(channel_from_fraction(127.6 / 255.0), 128);
        assert_eq!(channel_from_fraction(127.4 / 255.0), 127);
    }

    #[test]
    fn test_out_of_range_fractions_clamp() {
        assert_eq!(channel_from_fraction(1.5), 255);
        assert_eq!(channel_from_fraction(-0.25), 0);
    }
}
