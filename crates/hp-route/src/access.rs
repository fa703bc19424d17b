//! Accessibility filter: keep facilities reachable from the resolved
//! carriageway.
//!
//! | Road direction | Facility label      | Verdict             | Kept |
//! |----------------|---------------------|---------------------|------|
//! | `Unknown`      | any                 | `DirectionUnknown`  | yes  |
//! | known          | `Both`              | `Bidirectional`     | yes  |
//! | known          | equal to direction  | `DirectionMatch`    | yes  |
//! | known          | anything else       | `DirectionMismatch` | no   |
//!
//! An `Unknown` road keeps everything: without evidence a facility cannot be
//! ruled out.

use tracing::trace;

use hp_core::{Direction, DirectionLabel, Facility};
use hp_spatial::NearbyHit;

use crate::resolver::DirectionMap;

/// Why a facility was kept or dropped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    DirectionUnknown,
    Bidirectional,
    DirectionMatch,
    DirectionMismatch,
}

impl Verdict {
    /// Decide one facility.
    pub fn assess(label: DirectionLabel, road: Direction) -> Self {
        if road == Direction::Unknown {
            Verdict::DirectionUnknown
        } else if label == DirectionLabel::Both {
            Verdict::Bidirectional
        } else if label.matches(road) {
            Verdict::DirectionMatch
        } else {
            Verdict::DirectionMismatch
        }
    }

    #[inline]
    pub fn is_accessible(self) -> bool {
        !matches!(self, Verdict::DirectionMismatch)
    }
}

/// A facility hit together with its road's direction and the verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct Assessed<'a> {
    pub hit:            NearbyHit<&'a Facility>,
    pub road_direction: Direction,
    pub verdict:        Verdict,
}

/// Counts over one filter pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSummary {
    pub total:      usize,
    pub accessible: usize,
    pub rejected:   usize,
    /// Accessible facilities on roads resolved `Up`.
    pub up:         usize,
    /// Accessible facilities on roads resolved `Down`.
    pub down:       usize,
    /// Accessible facilities on roads resolved `Both`.  Reserved: the
    /// marker-weight resolver only yields `Up`, `Down` or `Unknown`, so this
    /// stays 0 for pipeline runs.
    pub both:       usize,
    /// Accessible facilities on roads with no resolved direction.
    pub unknown:    usize,
}

impl FilterSummary {
    pub(crate) fn record(&mut self, road: Direction, verdict: Verdict) {
        self.total += 1;
        if !verdict.is_accessible() {
            self.rejected += 1;
            return;
        }
        self.accessible += 1;
        match road {
            Direction::Up      => self.up += 1,
            Direction::Down    => self.down += 1,
            Direction::Both    => self.both += 1,
            Direction::Unknown => self.unknown += 1,
        }
    }
}

/// Result of [`AccessibilityFilter::apply`].  Both lists keep the input
/// (route) order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOutcome<'a> {
    pub accessible: Vec<Assessed<'a>>,
    pub rejected:   Vec<Assessed<'a>>,
    pub summary:    FilterSummary,
}

/// Applies the accessibility rule against a [`DirectionMap`].
#[derive(Clone, Copy, Debug)]
pub struct AccessibilityFilter<'m> {
    directions: &'m DirectionMap,
}

impl<'m> AccessibilityFilter<'m> {
    pub fn new(directions: &'m DirectionMap) -> Self {
        Self { directions }
    }

    /// Verdict for a single facility.
    pub fn verdict(&self, facility: &Facility) -> Verdict {
        Verdict::assess(facility.direction, self.directions.direction_of(&facility.road_name))
    }

    /// Split route-ordered facility hits into accessible and rejected.
    pub fn apply<'a>(&self, hits: Vec<NearbyHit<&'a Facility>>) -> FilterOutcome<'a> {
        let mut outcome = FilterOutcome::default();
        for hit in hits {
            let road_direction = self.directions.direction_of(&hit.item.road_name);
            let verdict = Verdict::assess(hit.item.direction, road_direction);
            trace!(
                facility = %hit.item.id,
                name = %hit.item.name,
                label = %hit.item.direction,
                road = %road_direction,
                ?verdict,
                "facility assessed"
            );
            outcome.summary.record(road_direction, verdict);
            let assessed = Assessed { hit, road_direction, verdict };
            if verdict.is_accessible() {
                outcome.accessible.push(assessed);
            } else {
                outcome.rejected.push(assessed);
            }
        }
        outcome
    }
}
