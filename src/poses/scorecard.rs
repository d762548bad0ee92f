//! Per-criterion score breakdown.
//!
//! A matcher awards fixed points for each geometric criterion it checks
//! and sums them. Keeping the breakdown lets a display shell tell the
//! player which part of the pose is still missing.

use serde::Serialize;
use smallvec::SmallVec;

/// One scored criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Criterion {
    /// Short description of what was checked.
    pub label: &'static str,

    /// Points awarded for this frame.
    pub awarded: u32,

    /// Points available.
    pub max: u32,
}

impl Criterion {
    /// Did this criterion earn any points?
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.awarded > 0
    }
}

/// Scored criteria for one pose and one frame.
///
/// ## Example
///
/// ```
/// use motion_game::poses::Scorecard;
///
/// let mut card = Scorecard::new();
/// card.award("wrists above nose", 4, true);
/// card.award("wrists together", 4, false);
/// card.award_tiered("crouch depth", &[(8, false), (4, true)]);
///
/// assert_eq!(card.total(), 8);
/// assert_eq!(card.max_score(), 16);
/// assert_eq!(card.missed().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    criteria: SmallVec<[Criterion; 4]>,
}

impl Scorecard {
    /// Create an empty scorecard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an all-or-nothing criterion worth `points`.
    pub fn award(&mut self, label: &'static str, points: u32, met: bool) {
        self.criteria.push(Criterion {
            label,
            awarded: if met { points } else { 0 },
            max: points,
        });
    }

    /// Record a tiered criterion.
    ///
    /// `tiers` are `(points, met)` from best to worst; the first met tier
    /// is awarded and the rest are ignored.
    pub fn award_tiered(&mut self, label: &'static str, tiers: &[(u32, bool)]) {
        let awarded = tiers
            .iter()
            .find(|(_, met)| *met)
            .map_or(0, |(points, _)| *points);
        let max = tiers.iter().map(|(points, _)| *points).max().unwrap_or(0);
        self.criteria.push(Criterion { label, awarded, max });
    }

    /// Sum of awarded points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.criteria.iter().map(|c| c.awarded).sum()
    }

    /// Sum of available points.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.criteria.iter().map(|c| c.max).sum()
    }

    /// All criteria in evaluation order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Criteria that earned nothing.
    pub fn missed(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| !c.is_met())
    }
}
