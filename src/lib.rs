//! Pitaya - style resolution core for presentation document extraction
//!
//! This library resolves the effective visual style of presentation text
//! runs: it walks the multi-level style inheritance chain a host
//! application applies (run, paragraph, text body, slide-master and
//! presentation-default level styles), computes the concrete RGB a themed
//! color reference renders to (including the host's tint/shade and HSL
//! transform pipeline with its exact rounding quirks), and deep-compares
//! resolved styles so adjacent identical runs can be merged without
//! losing round-trip fidelity.
//!
//! The surrounding extraction pipeline owns package parsing, JSON
//! emission, and write-back; this crate owns only the pure resolution
//! semantics, over immutable inputs built once per document.
//!
//! # Example - Resolving a run style
//!
//! ```rust
//! use pitaya::color::SchemeColorTable;
//! use pitaya::style::{FontScheme, LevelStyleTable, StyleCascade, StyleLayer};
//!
//! // Built by the document adapter, once per presentation.
//! let scheme = SchemeColorTable::office_default();
//! let fonts = FontScheme::new("Calibri Light", "Calibri");
//! let master = LevelStyleTable::new()
//!     .with_level(1, StyleLayer::new().with_font_size(2400));
//!
//! // Built per text body; this run only says "bold".
//! let run = StyleLayer::new().with_bold(true);
//!
//! let mut cascade = StyleCascade::new(&scheme, &fonts);
//! cascade.run = Some(&run);
//! cascade.master_levels = Some(&master);
//!
//! let style = cascade.resolve();
//! assert_eq!(style.font_size_pt, 24.0); // from the master level table
//! assert!(style.bold);                  // from the run itself
//! ```
//!
//! # Example - Resolving a themed color
//!
//! ```rust
//! use pitaya::color::{resolve_color, ColorReference, ColorTransform, SchemeColorTable};
//!
//! let scheme = SchemeColorTable::office_default();
//! let reference = ColorReference::Scheme {
//!     slot: "accent1".into(),
//!     transforms: vec![ColorTransform::LumMod(50000)],
//! };
//!
//! let color = resolve_color(&reference, &scheme);
//! assert!(color.is_theme_color);
//! // Provenance reconstructs the original reference for write-back.
//! assert_eq!(color.to_reference(), reference);
//! ```

/// Color model: RGB values, theme schemes, transforms, and resolution
pub mod color;

/// Error and warning types
pub mod error;

/// Observation hooks for resolution diagnostics
pub mod observer;

/// Style layers, cascade resolution, and deep comparison
pub mod style;

// Re-export the primary entry points for convenience
pub use color::{
    ColorReference, ColorTransform, ResolvedColor, RgbColor, SchemeColorTable, resolve_color,
};
pub use error::ResolveWarning;
pub use observer::{NoopObserver, ResolveObserver, WarningTally};
pub use style::{EffectiveRunStyle, StyleCascade, StyleLayer, runs_match};
