//! Deep equality over resolved run styles.
//!
//! The run-merging stage collapses adjacent runs whose effective styles
//! are indistinguishable. Equality here is structural, not visual: two
//! different transform chains that happen to produce the same RGB are NOT
//! equal, because merging them would lose the symbolic form needed for
//! lossless re-emission. All comparisons are null-aware (`None == None`
//! is equal, `None` vs `Some` is not) and floats compare within a fixed
//! epsilon.
use super::cascade::EffectiveRunStyle;
use super::records::{EffectStyle, FillStyle, OutlineStyle, ShadowEffect};
use crate::color::{ColorTransform, ResolvedColor};

/// Tolerance for floating-point style fields (sizes, spacing, angles).
pub const STYLE_EPSILON: f64 = 0.01;

/// Whether two fully resolved run styles are indistinguishable.
///
/// # Examples
///
/// ```rust
/// use pitaya::color::SchemeColorTable;
/// use pitaya::style::{runs_match, FontScheme, StyleCascade};
///
/// let scheme = SchemeColorTable::office_default();
/// let fonts = FontScheme::default();
/// let style = StyleCascade::new(&scheme, &fonts).resolve();
///
/// assert!(runs_match(&style, &style.clone()));
///
/// let mut other = style.clone();
/// other.bold = true;
/// assert!(!runs_match(&style, &other));
/// ```
pub fn runs_match(a: &EffectiveRunStyle, b: &EffectiveRunStyle) -> bool {
    approx(a.font_size_pt, b.font_size_pt)
        && a.bold == b.bold
        && a.italic == b.italic
        && a.underline == b.underline
        && a.strike == b.strike
        && approx(a.spacing_pt, b.spacing_pt)
        && a.font_name == b.font_name
        && colors_match(&a.color, &b.color)
        && fills_match(&a.fill, &b.fill)
        && outlines_match(&a.outline, &b.outline)
        && effects_match(&a.effect, &b.effect)
}

/// Whether two resolved colors are indistinguishable.
///
/// Compares the concrete triple, transparency, theme provenance (slot
/// names only when both sides are theme colors), and the transform chain
/// field by field.
pub fn colors_match(a: &ResolvedColor, b: &ResolvedColor) -> bool {
    a.red == b.red
        && a.green == b.green
        && a.blue == b.blue
        && a.is_transparent == b.is_transparent
        && a.is_theme_color == b.is_theme_color
        && (!a.is_theme_color || a.scheme_slot == b.scheme_slot)
        && transforms_match(&a.transforms, &b.transforms)
}

/// Field-by-field equality of two optional transform chains.
///
/// Chains are equal only when each position holds the same operator with
/// the same scaled-percentage value; equality of the post-transform RGB
/// is deliberately not considered.
fn transforms_match(a: &Option<Vec<ColorTransform>>, b: &Option<Vec<ColorTransform>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| transform_eq(x, y))
        },
        _ => false,
    }
}

fn transform_eq(a: &ColorTransform, b: &ColorTransform) -> bool {
    use ColorTransform::*;
    match (a, b) {
        (Tint(x), Tint(y))
        | (Shade(x), Shade(y))
        | (LumMod(x), LumMod(y))
        | (LumOff(x), LumOff(y))
        | (SatMod(x), SatMod(y))
        | (SatOff(x), SatOff(y))
        | (Alpha(x), Alpha(y)) => x == y,
        _ => false,
    }
}

/// Null-aware equality of fill sub-records.
pub fn fills_match(a: &Option<FillStyle>, b: &Option<FillStyle>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => fill_eq(a, b),
        _ => false,
    }
}

fn fill_eq(a: &FillStyle, b: &FillStyle) -> bool {
    match (a, b) {
        (FillStyle::None, FillStyle::None) => true,
        (
            FillStyle::Solid {
                color: ca,
                opacity: oa,
            },
            FillStyle::Solid {
                color: cb,
                opacity: ob,
            },
        ) => colors_match(ca, cb) && opt_approx(*oa, *ob),
        (
            FillStyle::Gradient {
                angle: aa,
                stops: sa,
            },
            FillStyle::Gradient {
                angle: ab,
                stops: sb,
            },
        ) => {
            opt_approx(*aa, *ab)
                && sa.len() == sb.len()
                && sa.iter().zip(sb.iter()).all(|(x, y)| {
                    approx(x.position, y.position) && colors_match(&x.color, &y.color)
                })
        },
        (
            FillStyle::Pattern {
                pattern: pa,
                foreground: fa,
                background: ba,
            },
            FillStyle::Pattern {
                pattern: pb,
                foreground: fb,
                background: bb,
            },
        ) => pa == pb && colors_match(fa, fb) && colors_match(ba, bb),
        (FillStyle::Picture { resource: ra }, FillStyle::Picture { resource: rb }) => ra == rb,
        _ => false,
    }
}

/// Null-aware equality of outline sub-records.
pub fn outlines_match(a: &Option<OutlineStyle>, b: &Option<OutlineStyle>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            opt_approx(a.width_pt, b.width_pt)
                && opt_colors_match(&a.color, &b.color)
                && a.dash == b.dash
        },
        _ => false,
    }
}

/// Null-aware equality of effect sub-records.
pub fn effects_match(a: &Option<EffectStyle>, b: &Option<EffectStyle>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => match (&a.shadow, &b.shadow) {
            (None, None) => true,
            (Some(x), Some(y)) => shadow_eq(x, y),
            _ => false,
        },
        _ => false,
    }
}

fn shadow_eq(a: &ShadowEffect, b: &ShadowEffect) -> bool {
    approx(a.blur_pt, b.blur_pt)
        && approx(a.distance_pt, b.distance_pt)
        && approx(a.direction_deg, b.direction_deg)
        && colors_match(&a.color, &b.color)
}

fn opt_colors_match(a: &Option<ResolvedColor>, b: &Option<ResolvedColor>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => colors_match(a, b),
        _ => false,
    }
}

#[inline]
fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < STYLE_EPSILON
}

fn opt_approx(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => approx(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorReference, SchemeColorTable, resolve_color};
    use crate::style::records::GradientStop;

    fn sample_style() -> EffectiveRunStyle {
        let scheme = SchemeColorTable::office_default();
        let color = resolve_color(
            &ColorReference::Scheme {
                slot: "accent1".into(),
                transforms: vec![ColorTransform::LumMod(60_000), ColorTransform::LumOff(40_000)],
            },
            &scheme,
        );
        EffectiveRunStyle {
            font_size_pt: 24.0,
            bold: true,
            italic: false,
            underline: false,
            strike: false,
            spacing_pt: 0.0,
            font_name: "Calibri".into(),
            color: color.clone(),
            fill: Some(FillStyle::Solid {
                color: color.clone(),
                opacity: None,
            }),
            outline: Some(OutlineStyle {
                width_pt: Some(1.0),
                color: Some(color.clone()),
                dash: Some("solid".into()),
            }),
            effect: Some(EffectStyle {
                shadow: Some(ShadowEffect {
                    blur_pt: 4.0,
                    distance_pt: 3.0,
                    direction_deg: 45.0,
                    color,
                }),
            }),
        }
    }

    #[test]
    fn test_reflexive_and_clone_equal() {
        let style = sample_style();
        assert!(runs_match(&style, &style));
        assert!(runs_match(&style, &style.clone()));
    }

    #[test]
    fn test_epsilon_tolerates_tiny_float_noise() {
        let a = sample_style();
        let mut b = sample_style();
        b.font_size_pt += 0.001;
        b.spacing_pt -= 0.001;
        assert!(runs_match(&a, &b));

        b.font_size_pt += 0.1;
        assert!(!runs_match(&a, &b));
    }

    #[test]
    fn test_any_scalar_leaf_breaks_equality() {
        let base = sample_style();

        let mut changed = base.clone();
        changed.underline = true;
        assert!(!runs_match(&base, &changed));

        let mut changed = base.clone();
        changed.font_name = "Arial".into();
        assert!(!runs_match(&base, &changed));
    }

    #[test]
    fn test_single_transform_value_breaks_equality() {
        let base = sample_style();
        let mut changed = base.clone();
        if let Some(transforms) = changed.color.transforms.as_mut() {
            transforms[1] = ColorTransform::LumOff(40_001);
        }
        assert!(!runs_match(&base, &changed));
    }

    #[test]
    fn test_same_rgb_different_chains_not_equal() {
        // Both sides render identically but were specified differently;
        // merging them would corrupt round-trip.
        let scheme = SchemeColorTable::office_default();
        let direct = resolve_color(
            &ColorReference::Scheme {
                slot: "accent1".into(),
                transforms: vec![
                    ColorTransform::Tint(100_000),
                    ColorTransform::Shade(100_000),
                ],
            },
            &scheme,
        );
        let plain = resolve_color(&ColorReference::scheme("accent1"), &scheme);
        assert_eq!(direct.rgb(), plain.rgb());
        assert!(!colors_match(&direct, &plain));
    }

    #[test]
    fn test_slot_name_matters_only_for_theme_colors() {
        let scheme = SchemeColorTable::office_default();
        let via_alias = resolve_color(&ColorReference::scheme("tx1"), &scheme);
        let canonical = resolve_color(&ColorReference::scheme("dk1"), &scheme);
        assert_eq!(via_alias.rgb(), canonical.rgb());
        // Same channels, same theme flag, different recorded slot names.
        assert!(!colors_match(&via_alias, &canonical));

        let a = resolve_color(&ColorReference::Rgb("000000".into()), &scheme);
        let b = resolve_color(&ColorReference::Rgb("000000".into()), &scheme);
        assert!(colors_match(&a, &b));
    }

    #[test]
    fn test_null_vs_present_subrecord_unequal() {
        let base = sample_style();
        let mut missing = base.clone();
        missing.fill = None;
        assert!(!runs_match(&base, &missing));

        let mut both_none = base.clone();
        both_none.fill = None;
        assert!(runs_match(&missing, &both_none));
    }

    #[test]
    fn test_gradient_leaf_comparison() {
        let scheme = SchemeColorTable::office_default();
        let stop = |pos: f64, slot: &str| GradientStop {
            position: pos,
            color: resolve_color(&ColorReference::scheme(slot), &scheme),
        };
        let fill = |stops: Vec<GradientStop>| {
            Some(FillStyle::Gradient {
                angle: Some(90.0),
                stops,
            })
        };

        let a = fill(vec![stop(0.0, "accent1"), stop(1.0, "accent2")]);
        let b = fill(vec![stop(0.0, "accent1"), stop(1.0, "accent2")]);
        assert!(fills_match(&a, &b));

        let c = fill(vec![stop(0.0, "accent1"), stop(1.0, "accent3")]);
        assert!(!fills_match(&a, &c));

        let d = fill(vec![stop(0.0, "accent1")]);
        assert!(!fills_match(&a, &d));
    }

    #[test]
    fn test_shadow_leaf_comparison() {
        let base = sample_style();
        let mut changed = base.clone();
        if let Some(effect) = changed.effect.as_mut()
            && let Some(shadow) = effect.shadow.as_mut()
        {
            shadow.direction_deg += 1.0;
        }
        assert!(!runs_match(&base, &changed));
    }
}
