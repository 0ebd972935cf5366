//! Error and warning types for style resolution.
//!
//! Resolution never fails outright: a malformed run must not abort
//! extraction of an entire presentation. Parse failures surface as typed
//! errors at the leaf helpers and are degraded to documented defaults by
//! the resolvers, which report a [`ResolveWarning`] to the active observer
//! instead of propagating.
use thiserror::Error;

/// Failure to parse a hex color value.
///
/// Produced by [`RgbColor::parse_hex`](crate::color::RgbColor::parse_hex).
/// The color resolver swallows this into opaque black rather than
/// propagating it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Value does not have exactly 6 hex digits
    #[error("expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),

    /// Value contains a non-hexadecimal character
    #[error("invalid hex digit in color value \"{0}\"")]
    InvalidDigit(String),
}

/// Non-fatal conditions encountered during style resolution.
///
/// Warnings are reported to the [`ResolveObserver`](crate::observer::ResolveObserver)
/// so the surrounding system can keep aggregate counts; resolution always
/// continues with a default value. A missing style source is not a warning
/// at all: falling through the cascade is the documented behavior, and the
/// observer's source callback is its only trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// A scheme color reference named a slot outside the theme table
    #[error("unresolvable theme color slot \"{0}\", using opaque black")]
    UnresolvableThemeSlot(String),

    /// An explicit color value could not be parsed
    #[error("malformed color reference \"{0}\": {1}")]
    MalformedColorReference(String, ColorParseError),
}
