//! Color model: RGB values, theme schemes, transforms, and resolution.
//!
//! This module owns the path from a symbolic document color to the
//! concrete RGB the host application renders: scheme slot lookup, the
//! tint/shade and HSL transform pipeline with its exact rounding rules,
//! and provenance-preserving resolution for lossless round-trip.

// Submodule declarations
pub mod hsl;
pub mod resolver;
pub mod rgb;
pub mod scheme;
pub mod transform;

// Re-exports
pub use resolver::{ColorReference, ResolvedColor, resolve_color, resolve_color_with_observer};
pub use rgb::RgbColor;
pub use scheme::{SchemeColorTable, SchemeSlot};
pub use transform::{ColorTransform, PERCENT_SCALE, TransformedColor, apply_transforms};
