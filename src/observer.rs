//! Observation hooks for style resolution.
//!
//! The resolvers are pure functions; diagnostics are injected rather than
//! interleaved. An observer receives one callback per resolved attribute
//! (naming the layer that supplied the value) and one per non-fatal
//! warning, so callers can trace cascade decisions or keep warning counts
//! without the core doing any I/O of its own.
use crate::error::ResolveWarning;

/// A run attribute resolved by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAttribute {
    FontSize,
    Bold,
    Italic,
    Underline,
    Strike,
    Spacing,
    FontName,
    Color,
}

/// The style layer that supplied an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSource {
    /// Explicit run properties
    Run,
    /// Paragraph default run properties
    Paragraph,
    /// Text-body default run properties
    TextBody,
    /// Slide-master level style at the given level (1-9)
    MasterLevel(u8),
    /// Presentation-default level style at the given level (1-9)
    PresentationLevel(u8),
    /// Theme-supplied value (font scheme typeface)
    Theme,
    /// Hardcoded terminal default
    Default,
}

/// Receiver for resolution diagnostics.
///
/// All methods have empty default bodies; implement only what you need.
///
/// # Examples
///
/// ```rust
/// use pitaya::observer::{ResolveObserver, RunAttribute, StyleSource};
///
/// #[derive(Default)]
/// struct SourceTrace(Vec<(RunAttribute, StyleSource)>);
///
/// impl ResolveObserver for SourceTrace {
///     fn attribute_resolved(&mut self, attribute: RunAttribute, source: StyleSource) {
///         self.0.push((attribute, source));
///     }
/// }
/// ```
pub trait ResolveObserver {
    /// Called once per attribute with the layer that won the cascade.
    fn attribute_resolved(&mut self, _attribute: RunAttribute, _source: StyleSource) {}

    /// Called for each non-fatal resolution warning.
    fn warning(&mut self, _warning: &ResolveWarning) {}
}

/// Observer that discards all callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}

/// Observer that counts warnings per kind and forwards them to the
/// [`log`] facade.
///
/// The surrounding extraction pipeline reports aggregate warning counts to
/// the user; this is the collector it feeds from.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarningTally {
    /// Scheme references naming a slot outside the theme table
    pub unresolvable_slots: usize,
    /// Explicit color values that failed to parse
    pub malformed_references: usize,
}

impl WarningTally {
    /// Create a tally with all counts at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of warnings observed.
    #[inline]
    pub fn total(&self) -> usize {
        self.unresolvable_slots + self.malformed_references
    }
}

impl ResolveObserver for WarningTally {
    fn warning(&mut self, warning: &ResolveWarning) {
        match warning {
            ResolveWarning::UnresolvableThemeSlot(_) => self.unresolvable_slots += 1,
            ResolveWarning::MalformedColorReference(..) => self.malformed_references += 1,
        }
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorParseError;

    #[test]
    fn test_tally_counts_per_kind() {
        let mut tally = WarningTally::new();
        tally.warning(&ResolveWarning::UnresolvableThemeSlot("accent9".into()));
        tally.warning(&ResolveWarning::MalformedColorReference(
            "GGGGGG".into(),
            ColorParseError::InvalidDigit("GGGGGG".into()),
        ));
        tally.warning(&ResolveWarning::UnresolvableThemeSlot("phClr".into()));

        assert_eq!(tally.unresolvable_slots, 2);
        assert_eq!(tally.malformed_references, 1);
        assert_eq!(tally.total(), 3);
    }
}
