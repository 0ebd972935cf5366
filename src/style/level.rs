//! Paragraph nesting depth to level-table lookup mapping.
//!
//! A paragraph's 0-based nesting depth selects which entries of the
//! slide-master and presentation-default level tables are consulted, and
//! in which order. Depth 0 is special: the host consults only the master
//! table at level 1 and never falls through to the presentation-default
//! table. This asymmetry is observed host behavior and is reproduced
//! exactly, not smoothed over.
use smallvec::{SmallVec, smallvec};

/// Which owner's level table a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelScope {
    /// Slide-master level styles
    Master,
    /// Presentation-default level styles
    Presentation,
}

/// One `(table, level)` lookup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLookup {
    pub scope: LevelScope,
    /// Table level, always in 1..=9
    pub level: u8,
}

impl LevelLookup {
    #[inline]
    const fn master(level: u8) -> Self {
        Self {
            scope: LevelScope::Master,
            level,
        }
    }

    #[inline]
    const fn presentation(level: u8) -> Self {
        Self {
            scope: LevelScope::Presentation,
            level,
        }
    }
}

/// Ordered lookup attempts for a paragraph nesting depth.
///
/// The depth is clamped to `[0, 8]`. Depth 0 yields `[master@1]` only;
/// the presentation-default table is never consulted for depth 0. Any
/// deeper paragraph targets `clamp(depth + 1, 2, 9)` and yields
/// `[master@target, master@1, presentation@target, presentation@1]`;
/// the first attempt whose table defines a value wins.
///
/// # Examples
///
/// ```rust
/// use pitaya::style::{LevelScope, level_lookup_plan};
///
/// let plan = level_lookup_plan(5);
/// assert_eq!(plan.len(), 4);
/// assert_eq!((plan[0].scope, plan[0].level), (LevelScope::Master, 6));
/// assert_eq!((plan[1].scope, plan[1].level), (LevelScope::Master, 1));
///
/// assert_eq!(level_lookup_plan(0).len(), 1);
/// ```
pub fn level_lookup_plan(paragraph_level: u8) -> SmallVec<[LevelLookup; 4]> {
    let depth = paragraph_level.min(8);
    if depth == 0 {
        return smallvec![LevelLookup::master(1)];
    }

    let target = (depth + 1).clamp(2, 9);
    smallvec![
        LevelLookup::master(target),
        LevelLookup::master(1),
        LevelLookup::presentation(target),
        LevelLookup::presentation(1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_skips_presentation_table() {
        let plan = level_lookup_plan(0);
        assert_eq!(plan.as_slice(), &[LevelLookup::master(1)]);
        assert!(plan.iter().all(|l| l.scope == LevelScope::Master));
    }

    #[test]
    fn test_depth_one_targets_level_two() {
        let plan = level_lookup_plan(1);
        assert_eq!(plan.as_slice(), &[
            LevelLookup::master(2),
            LevelLookup::master(1),
            LevelLookup::presentation(2),
            LevelLookup::presentation(1),
        ]);
    }

    #[test]
    fn test_depth_five_targets_level_six() {
        let plan = level_lookup_plan(5);
        assert_eq!(plan[0], LevelLookup::master(6));
        assert_eq!(plan[2], LevelLookup::presentation(6));
    }

    #[test]
    fn test_depth_clamps_to_eight() {
        assert_eq!(level_lookup_plan(8), level_lookup_plan(200));
        assert_eq!(level_lookup_plan(8)[0], LevelLookup::master(9));
    }
}
