//! Per-road direction inference from ordered markers.
//!
//! # Rule
//!
//! For one road, take its markers in route order (the order produced by
//! [`find_nearby`][hp_spatial::find_nearby]).  The first is the *entry*, the
//! last the *exit*, and
//!
//! ```text
//! delta = entry.weight - exit.weight
//! ```
//!
//! | `delta` | Direction                         |
//! |---------|-----------------------------------|
//! | `> 0`   | `Up` (weights fall along travel)  |
//! | `< 0`   | `Down`                            |
//! | `== 0`  | per [`ZeroDeltaPolicy`]           |
//!
//! Fewer than two markers on a road give `Unknown`.  The result is only as
//! good as marker density near the route; `Unknown` is an expected outcome,
//! not a failure.
//!
//! Roads never compare weights with one another, so each road resolves on its
//! own.  With the `parallel` feature the roads run on Rayon's thread pool.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use hp_core::{Direction, Marker, MarkerId, normalize_road_name};

use crate::config::{PipelineConfig, ZeroDeltaPolicy};

// ── RoadDirection ─────────────────────────────────────────────────────────────

/// Outcome of direction inference for one road, with the evidence used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadDirection {
    pub road_name:    String,
    pub direction:    Direction,
    /// Markers found on this road inside the corridor.
    pub marker_count: usize,
    /// First marker in route order; `None` with fewer than two markers.
    pub entry:        Option<MarkerId>,
    /// Last marker in route order; `None` with fewer than two markers.
    pub exit:         Option<MarkerId>,
    /// `entry.weight - exit.weight`, saturating.
    pub weight_delta: Option<i64>,
}

impl RoadDirection {
    fn unknown(road_name: String, marker_count: usize) -> Self {
        Self {
            road_name,
            direction: Direction::Unknown,
            marker_count,
            entry: None,
            exit: None,
            weight_delta: None,
        }
    }
}

// ── DirectionMap ──────────────────────────────────────────────────────────────

/// Resolved direction per road.
///
/// Lookups apply the same road-name normalization used while grouping, so a
/// facility on "경부고속도로" finds the entry built from markers on "경부선".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionMap {
    roads:     HashMap<String, RoadDirection>,
    normalize: bool,
}

impl DirectionMap {
    pub fn get(&self, road_name: &str) -> Option<&RoadDirection> {
        self.roads.get(&road_key(road_name, self.normalize))
    }

    /// Resolved direction of `road_name`; roads without markers are `Unknown`.
    pub fn direction_of(&self, road_name: &str) -> Direction {
        self.get(road_name).map_or(Direction::Unknown, |r| r.direction)
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// All roads, sorted by road name.
    pub fn roads(&self) -> Vec<&RoadDirection> {
        let mut roads: Vec<&RoadDirection> = self.roads.values().collect();
        roads.sort_by(|a, b| a.road_name.cmp(&b.road_name));
        roads
    }
}

// ── DirectionResolver ─────────────────────────────────────────────────────────

/// Infers the carriageway a route uses on each road it crosses.
#[derive(Clone, Copy, Debug)]
pub struct DirectionResolver {
    zero_delta: ZeroDeltaPolicy,
    normalize:  bool,
}

impl Default for DirectionResolver {
    fn default() -> Self {
        Self::new(ZeroDeltaPolicy::default())
    }
}

impl DirectionResolver {
    /// Resolver with the given zero-delta policy and road-name normalization on.
    pub fn new(zero_delta: ZeroDeltaPolicy) -> Self {
        Self { zero_delta, normalize: true }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self { zero_delta: config.zero_delta, normalize: config.normalize_road_names }
    }

    /// Toggle road-name normalization for grouping and lookup.
    pub fn normalize_road_names(mut self, on: bool) -> Self {
        self.normalize = on;
        self
    }

    /// Resolve one road from its markers, which must already be in route
    /// order.
    pub fn resolve_road(&self, road_name: impl Into<String>, markers: &[&Marker]) -> RoadDirection {
        let road_name = road_name.into();
        let (entry, exit) = match markers {
            [first, .., last] => (*first, *last),
            _ => {
                debug!(
                    road = %road_name,
                    markers = markers.len(),
                    "fewer than 2 markers near route; direction unknown"
                );
                return RoadDirection::unknown(road_name, markers.len());
            }
        };

        let delta = entry.weight.saturating_sub(exit.weight);
        let direction = direction_from_delta(delta, self.zero_delta);

        debug!(
            road = %road_name,
            entry = %entry.id,
            entry_weight = entry.weight,
            exit = %exit.id,
            exit_weight = exit.weight,
            delta,
            %direction,
            "road direction resolved"
        );

        RoadDirection {
            road_name,
            direction,
            marker_count: markers.len(),
            entry: Some(entry.id),
            exit: Some(exit.id),
            weight_delta: Some(delta),
        }
    }

    /// Group `ordered` markers by road and resolve every road.
    ///
    /// `ordered` must be in route order; grouping keeps that order within each
    /// road.
    pub fn resolve_all<'a, I>(&self, ordered: I) -> DirectionMap
    where
        I: IntoIterator<Item = &'a Marker>,
    {
        let mut groups: BTreeMap<String, Vec<&Marker>> = BTreeMap::new();
        for marker in ordered {
            groups
                .entry(road_key(&marker.road_name, self.normalize))
                .or_default()
                .push(marker);
        }

        #[cfg(not(feature = "parallel"))]
        let resolved: Vec<RoadDirection> = groups
            .into_iter()
            .map(|(road, markers)| self.resolve_road(road, &markers))
            .collect();

        #[cfg(feature = "parallel")]
        let resolved: Vec<RoadDirection> = {
            use rayon::prelude::*;

            groups
                .into_iter()
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(|(road, markers)| self.resolve_road(road, &markers))
                .collect()
        };

        DirectionMap {
            roads:     resolved.into_iter().map(|r| (r.road_name.clone(), r)).collect(),
            normalize: self.normalize,
        }
    }
}

/// Map a weight delta to a direction.
pub fn direction_from_delta(delta: i64, zero_delta: ZeroDeltaPolicy) -> Direction {
    match delta.signum() {
        1 => Direction::Up,
        -1 => Direction::Down,
        _ => match zero_delta {
            ZeroDeltaPolicy::FoldDown => Direction::Down,
            ZeroDeltaPolicy::Unknown => Direction::Unknown,
        },
    }
}

pub(crate) fn road_key(road_name: &str, normalize: bool) -> String {
    if normalize {
        normalize_road_name(road_name)
    } else {
        road_name.trim().to_owned()
    }
}
