//! Unit tests for hp-spatial.
//!
//! Routes are hand-built in Korean latitudes so the fixtures read like real
//! highway geometry; none of them need external data.

#[cfg(test)]
mod helpers {
    use hp_core::Coordinate;
    use crate::RoutePolyline;

    /// Straight route due north along 127°E: 36.0 → 36.1 → 36.2.
    ///
    /// Along a meridian the local frame is exact, so the length equals the
    /// haversine distance between the endpoints (≈ 22.24 km).
    pub fn meridian_route() -> RoutePolyline {
        RoutePolyline::new(vec![
            Coordinate::new(127.0, 36.0),
            Coordinate::new(127.0, 36.1),
            Coordinate::new(127.0, 36.2),
        ])
        .unwrap()
    }

    /// Out-and-back: 36.0 → 36.1 → 36.0 along 127°E.
    pub fn out_and_back() -> RoutePolyline {
        RoutePolyline::new(vec![
            Coordinate::new(127.0, 36.0),
            Coordinate::new(127.0, 36.1),
            Coordinate::new(127.0, 36.0),
        ])
        .unwrap()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use hp_core::{Coordinate, GeoError};
    use crate::RoutePolyline;

    #[test]
    fn single_point_is_rejected() {
        let err = RoutePolyline::new(vec![Coordinate::new(127.0, 36.0)]).unwrap_err();
        assert_eq!(err, GeoError::TooFewPoints { got: 1 });
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            RoutePolyline::try_from(Vec::<Coordinate>::new()).unwrap_err(),
            GeoError::TooFewPoints { got: 0 }
        );
    }

    #[test]
    fn malformed_point_is_rejected() {
        let err = RoutePolyline::new(vec![
            Coordinate::new(127.0, 36.0),
            Coordinate::new(f64::NAN, 36.1),
        ])
        .unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate { .. }));
    }

    #[test]
    fn accessors() {
        let route = super::helpers::meridian_route();
        assert_eq!(route.points().len(), 3);
        assert_eq!(route.segment_count(), 2);
        assert_eq!(route.start(), Coordinate::new(127.0, 36.0));
        assert_eq!(route.end(), Coordinate::new(127.0, 36.2));
    }

    #[test]
    fn meridian_length_matches_haversine() {
        let route = super::helpers::meridian_route();
        let expected = route.start().distance_m(route.end());
        assert!(
            (route.length_m() - expected).abs() < 1e-6,
            "length {} vs haversine {expected}",
            route.length_m()
        );
    }

    #[test]
    fn east_west_length_is_not_planar_degrees() {
        // 1° of longitude at 37°N is ~88.8 km, not the 111 km a naive
        // degree metric would give.
        let route = RoutePolyline::new(vec![
            Coordinate::new(127.0, 37.0),
            Coordinate::new(128.0, 37.0),
        ])
        .unwrap();
        let km = route.length_km();
        assert!((km - 88.8).abs() < 0.5, "got {km}");
    }

    #[test]
    fn coincident_points_have_zero_length() {
        let p = Coordinate::new(127.0, 36.0);
        let route = RoutePolyline::new(vec![p, p]).unwrap();
        assert_eq!(route.length_m(), 0.0);
        assert_eq!(route.project(Coordinate::new(127.01, 36.0)).fraction, 0.0);
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use hp_core::Coordinate;

    #[test]
    fn endpoints_and_midpoint() {
        let route = super::helpers::meridian_route();
        assert!(route.project(Coordinate::new(127.0, 36.0)).fraction.abs() < 1e-9);
        assert!((route.project(Coordinate::new(127.0, 36.1)).fraction - 0.5).abs() < 1e-9);
        assert!((route.project(Coordinate::new(127.0, 36.2)).fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn beyond_the_end_clamps_to_one() {
        let route = super::helpers::meridian_route();
        let p = route.project(Coordinate::new(127.0, 36.3));
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.segment, 1);
        // 0.1° of latitude past the end.
        assert!((p.distance_m - 11_119.5).abs() < 1.0, "got {}", p.distance_m);
    }

    #[test]
    fn perpendicular_offset() {
        let route = super::helpers::meridian_route();
        // 0.001° east at 36.05°N ≈ 89.9 m.
        let p = route.project(Coordinate::new(127.001, 36.05));
        assert!((p.fraction - 0.25).abs() < 1e-6, "fraction {}", p.fraction);
        assert!((p.distance_m - 89.9).abs() < 0.5, "distance {}", p.distance_m);
        assert_eq!(p.segment, 0);
        assert!((p.foot.lon - 127.0).abs() < 1e-12);
        assert!((p.foot.lat - 36.05).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_the_earliest_segment() {
        // On an out-and-back both legs are equally close; the outbound leg
        // (first in scan order) must win.
        let route = super::helpers::out_and_back();
        let p = route.project(Coordinate::new(127.001, 36.05));
        assert_eq!(p.segment, 0);
        assert!(p.fraction < 0.5, "fraction {}", p.fraction);
    }

    #[test]
    fn indexed_projection_agrees_with_scan() {
        let route = super::helpers::meridian_route();
        for point in [
            Coordinate::new(127.001, 36.05),
            Coordinate::new(126.998, 36.17),
            Coordinate::new(127.0, 36.1),
        ] {
            let scan = route.project(point);
            let indexed = route.project_within(point, 500.0).unwrap();
            assert_eq!(scan, indexed, "mismatch for {point}");
        }
    }

    #[test]
    fn project_within_rejects_far_points() {
        let route = super::helpers::meridian_route();
        // ~900 m east of the route.
        assert!(route.project_within(Coordinate::new(127.01, 36.1), 500.0).is_none());
        assert!(route.project_within(Coordinate::new(127.01, 36.1), 1_000.0).is_some());
    }

    #[test]
    fn zero_buffer_matches_points_on_the_route() {
        let route = super::helpers::meridian_route();
        assert!(route.project_within(Coordinate::new(127.0, 36.1), 0.0).is_some());
        assert!(route.project_within(Coordinate::new(127.0001, 36.1), 0.0).is_none());
    }
}

// ── Arc positions ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod arc {
    use hp_core::{Coordinate, GeoError};

    #[test]
    fn point_at_ends_and_middle() {
        let route = super::helpers::meridian_route();
        assert_eq!(route.point_at(0.0).unwrap(), Coordinate::new(127.0, 36.0));
        let end = route.point_at(1.0).unwrap();
        assert!((end.lat - 36.2).abs() < 1e-12);
        let mid = route.point_at(0.5).unwrap();
        assert!((mid.lat - 36.1).abs() < 1e-9, "got {mid}");
        let three_quarters = route.point_at(0.75).unwrap();
        assert!((three_quarters.lat - 36.15).abs() < 1e-9, "got {three_quarters}");
    }

    #[test]
    fn point_at_round_trips_through_project() {
        let route = super::helpers::meridian_route();
        let p = route.point_at(0.3).unwrap();
        assert!((route.project(p).fraction - 0.3).abs() < 1e-9);
    }

    #[test]
    fn point_at_rejects_out_of_range() {
        let route = super::helpers::meridian_route();
        assert_eq!(route.point_at(1.5), Err(GeoError::FractionOutOfRange(1.5)));
        assert!(route.point_at(f64::NAN).is_err());
    }

    #[test]
    fn full_arc_is_route_length() {
        let route = super::helpers::meridian_route();
        let km = route.arc_length_km(0.0, 1.0).unwrap();
        assert!((km - route.length_km()).abs() < 1e-12);
        assert_eq!(route.arc_length_km(0.4, 0.4).unwrap(), 0.0);
    }

    #[test]
    fn reversed_fractions_fail_loudly() {
        let route = super::helpers::meridian_route();
        assert_eq!(
            route.arc_length_km(0.8, 0.2),
            Err(GeoError::FractionOrder { from: 0.8, to: 0.2 })
        );
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        let route = super::helpers::meridian_route();
        assert_eq!(
            route.arc_length_km(-0.1, 0.5),
            Err(GeoError::FractionOutOfRange(-0.1))
        );
    }
}

// ── Segment index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use hp_core::Coordinate;
    use crate::SegmentIndex;

    #[test]
    fn one_entry_per_segment() {
        let points = vec![
            Coordinate::new(127.0, 36.0),
            Coordinate::new(127.1, 36.0),
            Coordinate::new(127.2, 36.1),
            Coordinate::new(127.3, 36.1),
        ];
        let index = SegmentIndex::build(&points);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn candidates_are_sorted_and_local() {
        let points = vec![
            Coordinate::new(127.0, 36.0),
            Coordinate::new(127.1, 36.0),
            Coordinate::new(127.2, 36.0),
            Coordinate::new(127.1, 36.0001),
        ];
        let index = SegmentIndex::build(&points);
        let near_start = index.candidates(Coordinate::new(127.02, 36.0), 100.0);
        assert_eq!(near_start, vec![0]);
        let shared = index.candidates(Coordinate::new(127.15, 36.0), 100.0);
        assert_eq!(shared, vec![1, 2]);
    }

    #[test]
    fn far_point_has_no_candidates() {
        let points = vec![Coordinate::new(127.0, 36.0), Coordinate::new(127.1, 36.0)];
        let index = SegmentIndex::build(&points);
        assert!(index.candidates(Coordinate::new(128.0, 37.0), 500.0).is_empty());
    }
}

// ── Corridor search ───────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use hp_core::{Coordinate, GeoError};
    use crate::find_nearby;

    #[test]
    fn ordered_by_arc_position_not_distance() {
        let route = super::helpers::meridian_route();
        let candidates = vec![
            Coordinate::new(127.0, 36.19),    // near the end, on the route
            Coordinate::new(127.004, 36.01), // near the start, ~360 m off
            Coordinate::new(127.0, 36.1),     // middle
        ];
        let hits = find_nearby(&route, candidates, 500.0).unwrap();
        let lats: Vec<f64> = hits.iter().map(|h| h.item.lat).collect();
        assert_eq!(lats, vec![36.01, 36.1, 36.19]);
        assert!(hits.windows(2).all(|w| w[0].fraction <= w[1].fraction));
    }

    #[test]
    fn out_of_range_candidates_are_dropped() {
        let route = super::helpers::meridian_route();
        let candidates = vec![
            Coordinate::new(127.0, 36.1),
            Coordinate::new(127.05, 36.1), // ~4.5 km east
        ];
        let hits = find_nearby(&route, candidates, 500.0).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].distance_m <= 500.0);
    }

    #[test]
    fn nothing_in_range_is_empty_not_error() {
        let route = super::helpers::meridian_route();
        let candidates = vec![Coordinate::new(128.0, 36.1), Coordinate::new(126.0, 36.1)];
        let hits = find_nearby(&route, candidates, 500.0).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn equal_fractions_keep_input_order() {
        let route = super::helpers::meridian_route();
        // Mirror images across the route share a foot point.
        let candidates = vec![
            (1, Coordinate::new(127.001, 36.1)),
            (2, Coordinate::new(126.999, 36.1)),
        ];
        let hits = find_nearby(&route, candidates.iter().map(|(_, c)| c), 500.0).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(*hits[0].item, candidates[0].1);
        assert_eq!(*hits[1].item, candidates[1].1);
    }

    #[test]
    fn invalid_buffer_is_rejected() {
        let route = super::helpers::meridian_route();
        let none: Vec<Coordinate> = Vec::new();
        assert_eq!(
            find_nearby(&route, none.clone(), -1.0).unwrap_err(),
            GeoError::InvalidBuffer(-1.0)
        );
        assert!(find_nearby(&route, none, f64::INFINITY).is_err());
    }

    #[test]
    fn malformed_candidate_is_rejected() {
        let route = super::helpers::meridian_route();
        let candidates = vec![Coordinate::new(127.0, 95.0)];
        assert!(matches!(
            find_nearby(&route, candidates, 500.0),
            Err(GeoError::InvalidCoordinate { .. })
        ));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use hp_core::Coordinate;
    use proptest::prelude::*;
    use crate::RoutePolyline;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (126.0f64..130.0, 34.0f64..38.5).prop_map(|(lon, lat)| Coordinate::new(lon, lat))
    }

    fn route() -> impl Strategy<Value = RoutePolyline> {
        prop::collection::vec(coordinate(), 2..12)
            .prop_map(|points| RoutePolyline::new(points).unwrap())
    }

    proptest! {
        /// Every projection lands inside the route's arc range.
        #[test]
        fn fraction_in_unit_interval(route in route(), point in coordinate()) {
            let p = route.project(point);
            prop_assert!((0.0..=1.0).contains(&p.fraction), "fraction {}", p.fraction);
            prop_assert!(p.distance_m >= 0.0);
        }

        /// Arc lengths over adjacent intervals add up.
        #[test]
        fn arc_length_is_additive(
            route in route(),
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            c in 0.0f64..=1.0,
        ) {
            let mut f = [a, b, c];
            f.sort_by(f64::total_cmp);
            let [f1, f2, f3] = f;
            let left = route.arc_length_km(f1, f2).unwrap();
            let right = route.arc_length_km(f2, f3).unwrap();
            let whole = route.arc_length_km(f1, f3).unwrap();
            prop_assert!((left + right - whole).abs() < 1e-9, "{left} + {right} != {whole}");
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_derives {
    use hp_core::{Coordinate, Facility};

    use crate::{NearbyHit, Projection};

    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    fn assert_serialize<T: serde::Serialize>() {}

    #[test]
    fn result_types_serialize() {
        assert_serde::<Projection>();
        assert_serde::<NearbyHit<Coordinate>>();
        assert_serde::<NearbyHit<Facility>>();
        assert_serialize::<NearbyHit<&Facility>>();
    }
}
