//! Theme color scheme table.
//!
//! A theme defines twelve named color slots; document colors reference
//! them symbolically and the concrete RGB is resolved against this table.
//! Slot lookup accepts both the canonical scheme names (`dk1`, `accent1`,
//! ...) and the placeholder aliases (`tx1`, `bg1`, ...) that reach the
//! scheme through the master color mapping.
use serde::{Deserialize, Serialize};

use super::rgb::RgbColor;

/// The twelve canonical theme color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeSlot {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

/// Scheme slot lookup by document name.
///
/// The placeholder aliases resolve through the identity color mapping
/// every stock master uses: text 1/2 to dark 1/2, background 1/2 to
/// light 1/2.
static SLOT_NAMES: phf::Map<&'static str, SchemeSlot> = phf::phf_map! {
    "dk1" => SchemeSlot::Dark1,
    "lt1" => SchemeSlot::Light1,
    "dk2" => SchemeSlot::Dark2,
    "lt2" => SchemeSlot::Light2,
    "tx1" => SchemeSlot::Dark1,
    "bg1" => SchemeSlot::Light1,
    "tx2" => SchemeSlot::Dark2,
    "bg2" => SchemeSlot::Light2,
    "accent1" => SchemeSlot::Accent1,
    "accent2" => SchemeSlot::Accent2,
    "accent3" => SchemeSlot::Accent3,
    "accent4" => SchemeSlot::Accent4,
    "accent5" => SchemeSlot::Accent5,
    "accent6" => SchemeSlot::Accent6,
    "hlink" => SchemeSlot::Hyperlink,
    "folHlink" => SchemeSlot::FollowedHyperlink,
};

impl SchemeSlot {
    /// Number of slots in a scheme.
    pub const COUNT: usize = 12;

    /// Resolve a slot from its document name.
    ///
    /// Accepts the canonical names (`dk1`, `lt1`, `dk2`, `lt2`,
    /// `accent1`..`accent6`, `hlink`, `folHlink`) and the mapping aliases
    /// (`tx1`, `bg1`, `tx2`, `bg2`). Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pitaya::color::SchemeSlot;
    ///
    /// assert_eq!(SchemeSlot::from_name("accent1"), Some(SchemeSlot::Accent1));
    /// assert_eq!(SchemeSlot::from_name("tx1"), Some(SchemeSlot::Dark1));
    /// assert_eq!(SchemeSlot::from_name("phClr"), None);
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        SLOT_NAMES.get(name).copied()
    }

    /// Canonical scheme name of this slot.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark1 => "dk1",
            Self::Light1 => "lt1",
            Self::Dark2 => "dk2",
            Self::Light2 => "lt2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hyperlink => "hlink",
            Self::FollowedHyperlink => "folHlink",
        }
    }

    #[inline]
    fn index(&self) -> usize {
        match self {
            Self::Dark1 => 0,
            Self::Light1 => 1,
            Self::Dark2 => 2,
            Self::Light2 => 3,
            Self::Accent1 => 4,
            Self::Accent2 => 5,
            Self::Accent3 => 6,
            Self::Accent4 => 7,
            Self::Accent5 => 8,
            Self::Accent6 => 9,
            Self::Hyperlink => 10,
            Self::FollowedHyperlink => 11,
        }
    }
}

/// Concrete RGB values for the twelve scheme slots of one theme.
///
/// Built once per presentation by the document adapter and treated as
/// immutable during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeColorTable {
    colors: [RgbColor; SchemeSlot::COUNT],
}

impl SchemeColorTable {
    /// Create a table with every slot set to the given color.
    #[inline]
    pub fn filled(color: RgbColor) -> Self {
        Self {
            colors: [color; SchemeSlot::COUNT],
        }
    }

    /// The stock Office theme ("Office 2013+") color scheme.
    ///
    /// Used when a presentation carries no theme part of its own.
    pub fn office_default() -> Self {
        Self::filled(RgbColor::BLACK)
            .with_slot(SchemeSlot::Dark1, RgbColor::new(0x00, 0x00, 0x00))
            .with_slot(SchemeSlot::Light1, RgbColor::new(0xFF, 0xFF, 0xFF))
            .with_slot(SchemeSlot::Dark2, RgbColor::new(0x44, 0x54, 0x6A))
            .with_slot(SchemeSlot::Light2, RgbColor::new(0xE7, 0xE6, 0xE6))
            .with_slot(SchemeSlot::Accent1, RgbColor::new(0x44, 0x72, 0xC4))
            .with_slot(SchemeSlot::Accent2, RgbColor::new(0xED, 0x7D, 0x31))
            .with_slot(SchemeSlot::Accent3, RgbColor::new(0xA5, 0xA5, 0xA5))
            .with_slot(SchemeSlot::Accent4, RgbColor::new(0xFF, 0xC0, 0x00))
            .with_slot(SchemeSlot::Accent5, RgbColor::new(0x5B, 0x9B, 0xD5))
            .with_slot(SchemeSlot::Accent6, RgbColor::new(0x70, 0xAD, 0x47))
            .with_slot(SchemeSlot::Hyperlink, RgbColor::new(0x05, 0x63, 0xC1))
            .with_slot(
                SchemeSlot::FollowedHyperlink,
                RgbColor::new(0x95, 0x4F, 0x72),
            )
    }

    /// Set one slot, consuming and returning the table.
    #[inline]
    pub fn with_slot(mut self, slot: SchemeSlot, color: RgbColor) -> Self {
        self.colors[slot.index()] = color;
        self
    }

    /// Concrete RGB for a slot.
    #[inline]
    pub fn color(&self, slot: SchemeSlot) -> RgbColor {
        self.colors[slot.index()]
    }
}

impl Default for SchemeColorTable {
    fn default() -> Self {
        Self::office_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for name in [
            "dk1", "lt1", "dk2", "lt2", "accent1", "accent2", "accent3", "accent4", "accent5",
            "accent6", "hlink", "folHlink",
        ] {
            let slot = SchemeSlot::from_name(name).unwrap();
            assert_eq!(slot.name(), name);
        }
    }

    #[test]
    fn test_mapping_aliases() {
        assert_eq!(SchemeSlot::from_name("tx1"), Some(SchemeSlot::Dark1));
        assert_eq!(SchemeSlot::from_name("bg1"), Some(SchemeSlot::Light1));
        assert_eq!(SchemeSlot::from_name("tx2"), Some(SchemeSlot::Dark2));
        assert_eq!(SchemeSlot::from_name("bg2"), Some(SchemeSlot::Light2));
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(SchemeSlot::from_name("phClr"), None);
        assert_eq!(SchemeSlot::from_name("accent7"), None);
        assert_eq!(SchemeSlot::from_name(""), None);
    }

    #[test]
    fn test_table_lookup() {
        let table = SchemeColorTable::filled(RgbColor::BLACK)
            .with_slot(SchemeSlot::Accent3, RgbColor::new(1, 2, 3));
        assert_eq!(table.color(SchemeSlot::Accent3), RgbColor::new(1, 2, 3));
        assert_eq!(table.color(SchemeSlot::Accent4), RgbColor::BLACK);
    }

    #[test]
    fn test_office_default_accent1() {
        let table = SchemeColorTable::office_default();
        assert_eq!(table.color(SchemeSlot::Accent1).to_hex(), "4472C4");
    }
}
