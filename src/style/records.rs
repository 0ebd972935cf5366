//! Fill, outline, and effect sub-records.
//!
//! These records are extracted and owned by external pipeline components;
//! the style core carries them opaquely on the resolved run style and
//! deep-compares them during run merging, but never interprets or
//! constructs them from a document.
use serde::{Deserialize, Serialize};

use crate::color::ResolvedColor;

/// Fill applied to a run's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FillStyle {
    /// No fill (text renders transparent)
    None,
    /// Solid color fill
    Solid {
        color: ResolvedColor,
        /// Opacity in `[0, 1]`, absent when fully opaque
        #[serde(skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    /// Gradient fill
    Gradient {
        /// Linear gradient angle in degrees, absent for path gradients
        #[serde(skip_serializing_if = "Option::is_none")]
        angle: Option<f64>,
        stops: Vec<GradientStop>,
    },
    /// Pattern fill with a preset pattern name
    Pattern {
        pattern: String,
        foreground: ResolvedColor,
        background: ResolvedColor,
    },
    /// Picture fill referencing an external media resource
    Picture {
        /// Opaque resource key owned by the media extractor
        resource: String,
    },
}

/// A gradient stop (position and color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f64,
    pub color: ResolvedColor,
}

/// Text outline properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineStyle {
    /// Stroke width in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ResolvedColor>,
    /// Preset dash name (`solid`, `dash`, `sysDot`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// Text effect properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowEffect>,
}

/// An outer shadow effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    /// Blur radius in points
    pub blur_pt: f64,
    /// Offset distance in points
    pub distance_pt: f64,
    /// Offset direction in degrees
    pub direction_deg: f64,
    pub color: ResolvedColor,
}
