//! End-to-end route → accessible facility query.
//!
//! # Steps
//!
//! 1. Corridor search for markers (`road_buffer_m`), in route order.
//! 2. Direction inference per road → [`DirectionMap`].
//! 3. Corridor search for facilities (`facility_buffer_m`), in route order.
//! 4. Accessibility filter against the map from step 2.
//! 5. Along-route distance from each survivor to the next; the last one gets
//!    `0.0`.
//!
//! Every step reads the caller's snapshots and allocates its own output; the
//! pipeline holds nothing between runs.

use tracing::info;

use hp_core::{Coordinate, Direction, Facility, Marker};
use hp_spatial::{RoutePolyline, find_nearby};

use crate::access::{AccessibilityFilter, Assessed, FilterSummary, Verdict};
use crate::config::PipelineConfig;
use crate::distance::SegmentDistanceCalculator;
use crate::resolver::{DirectionResolver, RoadDirection};
use crate::{RouteError, RouteResult};

// ── Output ────────────────────────────────────────────────────────────────────

/// One reachable facility, annotated for display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibleFacility {
    pub facility:              Facility,
    /// Arc position of the facility's foot on the route, in `[0, 1]`.
    pub fraction:              f64,
    /// Great-circle distance from the facility to the route, metres.
    pub distance_from_route_m: f64,
    /// Resolved direction of the facility's road.
    pub road_direction:        Direction,
    pub verdict:               Verdict,
    /// Along-route distance to the next accessible facility, km.  `0.0` for
    /// the last one.
    pub distance_to_next_km:   f64,
}

/// Pipeline result: accessible facilities in route order, plus the per-road
/// evidence and filter counts behind them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibleFacilitySet {
    pub facilities: Vec<AccessibleFacility>,
    /// Every road seen among the nearby markers, sorted by name.
    pub roads:      Vec<RoadDirection>,
    pub summary:    FilterSummary,
}

impl AccessibleFacilitySet {
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccessibleFacility> {
        self.facilities.iter()
    }

    /// Along-route distance from the first to the last accessible facility.
    pub fn span_km(&self) -> f64 {
        self.facilities.iter().map(|f| f.distance_to_next_km).sum()
    }
}

impl<'a> IntoIterator for &'a AccessibleFacilitySet {
    type Item = &'a AccessibleFacility;
    type IntoIter = std::slice::Iter<'a, AccessibleFacility>;

    fn into_iter(self) -> Self::IntoIter {
        self.facilities.iter()
    }
}

// ── RouteFacilityPipeline ─────────────────────────────────────────────────────

/// Configured, stateless runner for the route → facility query.
#[derive(Clone, Debug, Default)]
pub struct RouteFacilityPipeline {
    config: PipelineConfig,
}

impl RouteFacilityPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run all five steps against one route.
    pub fn run(
        &self,
        route:      &RoutePolyline,
        markers:    &[Marker],
        facilities: &[Facility],
    ) -> RouteResult<AccessibleFacilitySet> {
        self.config.validate()?;

        // 1–2. Markers → per-road direction.
        let marker_hits = find_nearby(route, markers, self.config.road_buffer_m)?;
        let directions = DirectionResolver::from_config(&self.config)
            .resolve_all(marker_hits.iter().map(|h| h.item));

        // 3–4. Facilities → accessible subset.
        let facility_hits = find_nearby(route, facilities, self.config.facility_buffer_m)?;
        let outcome = AccessibilityFilter::new(&directions).apply(facility_hits);

        // 5. Distance to next.
        let accessible = annotate_distances(route, outcome.accessible)?;

        info!(
            route_km = route.length_km(),
            nearby_markers = marker_hits.len(),
            roads = directions.len(),
            nearby_facilities = outcome.summary.total,
            accessible = outcome.summary.accessible,
            rejected = outcome.summary.rejected,
            "route facility query complete"
        );

        Ok(AccessibleFacilitySet {
            facilities: accessible,
            roads:      directions.roads().into_iter().cloned().collect(),
            summary:    outcome.summary,
        })
    }
}

/// Attach distance-to-next to route-ordered survivors.
pub(crate) fn annotate_distances(
    route:      &RoutePolyline,
    accessible: Vec<Assessed<'_>>,
) -> RouteResult<Vec<AccessibleFacility>> {
    let calc = SegmentDistanceCalculator::new(route);

    let mut next_gap = vec![0.0; accessible.len()];
    for (i, pair) in accessible.windows(2).enumerate() {
        let (a, b) = (&pair[0].hit, &pair[1].hit);
        next_gap[i] = calc
            .between_fractions(a.fraction, b.fraction)
            .map_err(|e| match e {
                RouteError::Geo(hp_core::GeoError::FractionOrder { .. }) => RouteError::OutOfOrder {
                    from: a.item.id,
                    to:   b.item.id,
                },
                other => other,
            })?;
    }

    Ok(accessible
        .into_iter()
        .zip(next_gap)
        .map(|(a, distance_to_next_km)| AccessibleFacility {
            facility:              a.hit.item.clone(),
            fraction:              a.hit.fraction,
            distance_from_route_m: a.hit.distance_m,
            road_direction:        a.road_direction,
            verdict:               a.verdict,
            distance_to_next_km,
        })
        .collect())
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Accessible facilities along `route`, using the default policies.
///
/// Fails on a route of fewer than two points, a malformed coordinate, or a
/// negative/non-finite buffer.  Sparse data is not an error: roads without
/// marker evidence resolve `Unknown` and an empty corridor gives an empty set.
pub fn resolve_accessible_facilities(
    route:             &[Coordinate],
    markers:           &[Marker],
    facilities:        &[Facility],
    road_buffer_m:     f64,
    facility_buffer_m: f64,
) -> RouteResult<AccessibleFacilitySet> {
    let route = RoutePolyline::new(route.to_vec())?;
    RouteFacilityPipeline::new(PipelineConfig::with_buffers(road_buffer_m, facility_buffer_m))
        .run(&route, markers, facilities)
}
