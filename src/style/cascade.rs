//! Run style cascade resolution.
//!
//! Every scalar run attribute resolves through the same fixed priority
//! chain: explicit run properties, then paragraph defaults, then
//! text-body defaults, then the level-table lookup plan for the
//! paragraph's nesting depth, terminating at a documented constant. Each
//! attribute walks the chain independently: a run may take its size from
//! the master level table while its boldness comes from the paragraph.
//!
//! Resolution never fails: absence anywhere in the chain degrades to the
//! next layer, and the terminal defaults guarantee a fully populated
//! [`EffectiveRunStyle`].
use serde::{Deserialize, Serialize};

use super::layer::{DEFAULT_TYPEFACE, FontScheme, LevelStyleTable, StyleFamily, StyleLayer};
use super::level::{LevelScope, level_lookup_plan};
use super::records::{EffectStyle, FillStyle, OutlineStyle};
use crate::color::{ResolvedColor, SchemeColorTable, resolve_color_with_observer};
use crate::observer::{NoopObserver, ResolveObserver, RunAttribute, StyleSource};

/// Terminal font size when no layer supplies one, in points.
pub const DEFAULT_FONT_SIZE_PT: f64 = 18.0;

/// A fully resolved run style.
///
/// Produced once per run; no field is optional for the attributes the
/// cascade owns. The fill/outline/effect sub-records are attached by
/// external extraction components and carried opaquely for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRunStyle {
    /// Font size in points, always positive
    pub font_size_pt: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    /// Character spacing in points, signed
    pub spacing_pt: f64,
    pub font_name: String,
    pub color: ResolvedColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<OutlineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectStyle>,
}

/// The full set of style inputs for resolving one run.
///
/// Borrowed, read-only views of the adapter-built layers; constructing a
/// cascade allocates nothing. Layers that do not apply stay `None`.
///
/// # Examples
///
/// ```rust
/// use pitaya::color::SchemeColorTable;
/// use pitaya::style::{FontScheme, LevelStyleTable, StyleCascade, StyleLayer};
///
/// let scheme = SchemeColorTable::office_default();
/// let fonts = FontScheme::new("Calibri Light", "Calibri");
/// let master = LevelStyleTable::new().with_level(1, StyleLayer::new().with_font_size(2400));
/// let run = StyleLayer::new().with_bold(true);
///
/// let mut cascade = StyleCascade::new(&scheme, &fonts);
/// cascade.run = Some(&run);
/// cascade.master_levels = Some(&master);
///
/// let style = cascade.resolve();
/// assert_eq!(style.font_size_pt, 24.0);
/// assert!(style.bold);
/// assert_eq!(style.font_name, "Calibri");
/// ```
#[derive(Debug, Clone)]
pub struct StyleCascade<'a> {
    /// Explicit run properties
    pub run: Option<&'a StyleLayer>,
    /// Paragraph default run properties
    pub paragraph: Option<&'a StyleLayer>,
    /// Text-body default run properties
    pub text_body: Option<&'a StyleLayer>,
    /// Slide-master level styles for the cascade's family
    pub master_levels: Option<&'a LevelStyleTable>,
    /// Presentation-default level styles
    pub presentation_levels: Option<&'a LevelStyleTable>,
    /// 0-based paragraph nesting depth (clamped to 0..=8)
    pub paragraph_level: u8,
    /// Style family, selects the terminal theme typeface
    pub family: StyleFamily,
    /// Theme typefaces for the terminal font-name default
    pub fonts: &'a FontScheme,
    /// Theme scheme colors for resolving color references
    pub scheme: &'a SchemeColorTable,
}

impl<'a> StyleCascade<'a> {
    /// Create a cascade with no layers attached.
    pub fn new(scheme: &'a SchemeColorTable, fonts: &'a FontScheme) -> Self {
        Self {
            run: None,
            paragraph: None,
            text_body: None,
            master_levels: None,
            presentation_levels: None,
            paragraph_level: 0,
            family: StyleFamily::default(),
            fonts,
            scheme,
        }
    }

    /// Resolve the effective style, discarding diagnostics.
    pub fn resolve(&self) -> EffectiveRunStyle {
        self.resolve_with_observer(&mut NoopObserver)
    }

    /// Resolve the effective style, reporting each decision to the
    /// observer.
    pub fn resolve_with_observer(&self, observer: &mut dyn ResolveObserver) -> EffectiveRunStyle {
        EffectiveRunStyle {
            font_size_pt: self.resolve_font_size(observer),
            bold: self.resolve_flag(RunAttribute::Bold, observer, |l| l.bold),
            italic: self.resolve_flag(RunAttribute::Italic, observer, |l| l.italic),
            underline: self.resolve_flag(RunAttribute::Underline, observer, |l| l.underline),
            strike: self.resolve_flag(RunAttribute::Strike, observer, |l| l.strike),
            spacing_pt: self.resolve_spacing(observer),
            font_name: self.resolve_font_name(observer),
            color: self.resolve_color(observer),
            fill: None,
            outline: None,
            effect: None,
        }
    }

    /// Resolve the font size in points.
    ///
    /// A layer carrying an explicit zero size is treated as absent so the
    /// positive-size invariant holds all the way down to the 18 pt
    /// terminal default.
    pub fn resolve_font_size(&self, observer: &mut dyn ResolveObserver) -> f64 {
        let attr = RunAttribute::FontSize;
        match self.lookup(attr, observer, |l| l.font_size.filter(|size| *size > 0)) {
            Some(hundredths) => f64::from(hundredths) / 100.0,
            None => {
                observer.attribute_resolved(attr, StyleSource::Default);
                DEFAULT_FONT_SIZE_PT
            },
        }
    }

    /// Resolve the character spacing in points.
    pub fn resolve_spacing(&self, observer: &mut dyn ResolveObserver) -> f64 {
        let attr = RunAttribute::Spacing;
        match self.lookup(attr, observer, |l| l.spacing) {
            Some(hundredths) => f64::from(hundredths) / 100.0,
            None => {
                observer.attribute_resolved(attr, StyleSource::Default);
                0.0
            },
        }
    }

    /// Resolve the font name.
    ///
    /// When no layer names a typeface, the theme supplies the family's
    /// default (major for titles, minor otherwise) before the hardcoded
    /// terminal typeface.
    pub fn resolve_font_name(&self, observer: &mut dyn ResolveObserver) -> String {
        let attr = RunAttribute::FontName;
        if let Some(name) = self.lookup(attr, observer, |l| l.font_name.clone()) {
            return name;
        }
        if let Some(typeface) = self.fonts.typeface_for(self.family) {
            observer.attribute_resolved(attr, StyleSource::Theme);
            return typeface.to_string();
        }
        observer.attribute_resolved(attr, StyleSource::Default);
        DEFAULT_TYPEFACE.to_string()
    }

    /// Resolve the run color.
    pub fn resolve_color(&self, observer: &mut dyn ResolveObserver) -> ResolvedColor {
        let attr = RunAttribute::Color;
        match self.lookup(attr, observer, |l| l.color.clone()) {
            Some(reference) => resolve_color_with_observer(&reference, self.scheme, observer),
            None => {
                observer.attribute_resolved(attr, StyleSource::Default);
                ResolvedColor::opaque_black()
            },
        }
    }

    fn resolve_flag(
        &self,
        attribute: RunAttribute,
        observer: &mut dyn ResolveObserver,
        pick: impl Fn(&StyleLayer) -> Option<bool>,
    ) -> bool {
        self.lookup(attribute, observer, pick).unwrap_or_else(|| {
            observer.attribute_resolved(attribute, StyleSource::Default);
            false
        })
    }

    /// Walk the priority chain for one attribute; first present wins.
    fn lookup<T>(
        &self,
        attribute: RunAttribute,
        observer: &mut dyn ResolveObserver,
        pick: impl Fn(&StyleLayer) -> Option<T>,
    ) -> Option<T> {
        let direct = [
            (self.run, StyleSource::Run),
            (self.paragraph, StyleSource::Paragraph),
            (self.text_body, StyleSource::TextBody),
        ];
        for (layer, source) in direct {
            if let Some(layer) = layer
                && let Some(value) = pick(layer)
            {
                observer.attribute_resolved(attribute, source);
                return Some(value);
            }
        }

        for attempt in level_lookup_plan(self.paragraph_level) {
            let (table, source) = match attempt.scope {
                LevelScope::Master => (
                    self.master_levels,
                    StyleSource::MasterLevel(attempt.level),
                ),
                LevelScope::Presentation => (
                    self.presentation_levels,
                    StyleSource::PresentationLevel(attempt.level),
                ),
            };
            if let Some(table) = table
                && let Some(layer) = table.level(attempt.level)
                && let Some(value) = pick(layer)
            {
                observer.attribute_resolved(attribute, source);
                return Some(value);
            }
        }

        None
    }
}
