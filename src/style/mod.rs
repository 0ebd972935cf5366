//! Style model: layers, level tables, cascade resolution, and comparison.
//!
//! The document adapter snapshots parser nodes into immutable
//! [`StyleLayer`]s and [`LevelStyleTable`]s; the cascade resolves each run
//! attribute through the fixed priority chain into an
//! [`EffectiveRunStyle`]; the comparer decides whether adjacent runs can
//! be merged without losing fidelity.

// Submodule declarations
pub mod cascade;
pub mod compare;
pub mod layer;
pub mod level;
pub mod records;

// Re-exports
pub use cascade::{DEFAULT_FONT_SIZE_PT, EffectiveRunStyle, StyleCascade};
pub use compare::{STYLE_EPSILON, colors_match, effects_match, fills_match, outlines_match, runs_match};
pub use layer::{DEFAULT_TYPEFACE, FontScheme, LEVEL_COUNT, LevelStyleTable, StyleFamily, StyleLayer};
pub use level::{LevelLookup, LevelScope, level_lookup_plan};
pub use records::{EffectStyle, FillStyle, GradientStop, OutlineStyle, ShadowEffect};
