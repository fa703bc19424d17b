//! Route polyline with point-on-line projection and arc-length maths.
//!
//! # Metric
//!
//! Every segment is measured in its own local equirectangular frame, centred
//! on the segment's mean latitude:
//!
//! ```text
//! x = Δlon · R · cos(φ_mid) · π/180
//! y = Δlat · R · π/180
//! ```
//!
//! For highway-scale segments this agrees with haversine to well under a
//! metre, and unlike naive planar degrees it does not stretch east-west
//! distances.  Linear interpolation in lon/lat is linear in each segment's
//! frame, so a fraction maps back to a coordinate without drift.
//!
//! A point's *fraction* is its cumulative metric length from the route start
//! divided by the total length.  Because fractions and arc lengths share one
//! metric, `arc_length_km` is exactly additive.
//!
//! Longitudes are not wrapped; routes crossing the antimeridian are out of
//! scope.

use hp_core::{Coordinate, GeoError, GeoResult};

use crate::index::SegmentIndex;

/// Metres per degree of latitude on the mean-radius sphere.
pub(crate) const M_PER_DEG_LAT: f64 = hp_core::geo::EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

// ── Segment ───────────────────────────────────────────────────────────────────

/// One polyline segment with its local metric scale factors.
#[derive(Clone, Copy, Debug)]
struct Segment {
    start:    Coordinate,
    end:      Coordinate,
    /// Metres per degree of longitude at the segment's mean latitude.
    k_lon:    f64,
    length_m: f64,
}

impl Segment {
    fn new(start: Coordinate, end: Coordinate) -> Self {
        let mid_lat = 0.5 * (start.lat + end.lat);
        let k_lon = M_PER_DEG_LAT * mid_lat.to_radians().cos();
        let dx = (end.lon - start.lon) * k_lon;
        let dy = (end.lat - start.lat) * M_PER_DEG_LAT;
        Self { start, end, k_lon, length_m: dx.hypot(dy) }
    }

    /// Closest point on the segment to `p`: `(t, planar distance in metres)`
    /// where `t ∈ [0, 1]` is the offset from `start`.
    fn closest(&self, p: Coordinate) -> (f64, f64) {
        let bx = (self.end.lon - self.start.lon) * self.k_lon;
        let by = (self.end.lat - self.start.lat) * M_PER_DEG_LAT;
        let px = (p.lon - self.start.lon) * self.k_lon;
        let py = (p.lat - self.start.lat) * M_PER_DEG_LAT;

        let len2 = bx * bx + by * by;
        let t = if len2 > 0.0 {
            ((px * bx + py * by) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let dx = px - t * bx;
        let dy = py - t * by;
        (t, dx.hypot(dy))
    }

    #[inline]
    fn lerp(&self, t: f64) -> Coordinate {
        Coordinate::new(
            self.start.lon + t * (self.end.lon - self.start.lon),
            self.start.lat + t * (self.end.lat - self.start.lat),
        )
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Result of projecting a point onto a [`RoutePolyline`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Proportional arc position of the closest point, in `[0, 1]`.
    pub fraction:   f64,
    /// Great-circle distance from the point to its foot on the route, metres.
    pub distance_m: f64,
    /// Index of the segment holding the foot (segment `i` joins points `i`
    /// and `i + 1`).
    pub segment:    usize,
    /// The closest point on the route.
    pub foot:       Coordinate,
}

// ── RoutePolyline ─────────────────────────────────────────────────────────────

/// An ordered path of at least two coordinates, immutable once built.
///
/// Construction validates every coordinate, precomputes cumulative segment
/// lengths, and bulk-loads a [`SegmentIndex`] for corridor queries.
#[derive(Debug)]
pub struct RoutePolyline {
    points:       Vec<Coordinate>,
    segments:     Vec<Segment>,
    /// `cumulative_m[i]` = metric length from the start to point `i`.
    /// Length = `points.len()`.
    cumulative_m: Vec<f64>,
    index:        SegmentIndex,
}

impl RoutePolyline {
    /// Build a polyline.  Fails with [`GeoError::TooFewPoints`] for fewer than
    /// two points and [`GeoError::InvalidCoordinate`] for any malformed point.
    pub fn new(points: Vec<Coordinate>) -> GeoResult<Self> {
        if points.len() < 2 {
            return Err(GeoError::TooFewPoints { got: points.len() });
        }
        for p in &points {
            p.validate()?;
        }

        let segments: Vec<Segment> = points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();

        let mut cumulative_m = Vec::with_capacity(points.len());
        cumulative_m.push(0.0);
        let mut acc = 0.0;
        for s in &segments {
            acc += s.length_m;
            cumulative_m.push(acc);
        }

        let index = SegmentIndex::build(&points);

        Ok(Self { points, segments, cumulative_m, index })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total metric length in metres.
    pub fn length_m(&self) -> f64 {
        self.cumulative_m[self.cumulative_m.len() - 1]
    }

    pub fn length_km(&self) -> f64 {
        self.length_m() / 1000.0
    }

    // ── Projection ────────────────────────────────────────────────────────

    /// Project `point` onto the route with a full start-to-end segment scan.
    ///
    /// The segment minimising the local-frame perpendicular distance wins;
    /// ties go to the earliest segment.
    pub fn project(&self, point: Coordinate) -> Projection {
        self.best_of(point, 0..self.segments.len())
            .unwrap_or_else(|| self.projection_on(point, 0, 0.0))
    }

    /// Project `point` only if it lies within `buffer_m` of the route.
    ///
    /// Segments are prefiltered through the R-tree, then scanned in ascending
    /// order so ties resolve exactly as in [`project`](Self::project).
    pub fn project_within(&self, point: Coordinate, buffer_m: f64) -> Option<Projection> {
        let candidates = self.index.candidates(point, buffer_m);
        self.best_of(point, candidates)
            .filter(|p| p.distance_m <= buffer_m)
    }

    fn best_of(
        &self,
        point:    Coordinate,
        segments: impl IntoIterator<Item = usize>,
    ) -> Option<Projection> {
        let mut best: Option<(usize, f64, f64)> = None; // (segment, t, planar_m)
        for i in segments {
            let (t, d) = self.segments[i].closest(point);
            // Strict `<` keeps the earliest segment on ties.
            if best.is_none_or(|(_, _, best_d)| d < best_d) {
                best = Some((i, t, d));
            }
        }
        best.map(|(i, t, _)| self.projection_on(point, i, t))
    }

    fn projection_on(&self, point: Coordinate, segment: usize, t: f64) -> Projection {
        let seg = &self.segments[segment];
        let foot = seg.lerp(t);
        let along = self.cumulative_m[segment] + t * seg.length_m;
        Projection {
            fraction: self.to_fraction(along),
            distance_m: point.distance_m(foot),
            segment,
            foot,
        }
    }

    fn to_fraction(&self, along_m: f64) -> f64 {
        let total = self.length_m();
        if total > 0.0 {
            (along_m / total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    // ── Arc positions ─────────────────────────────────────────────────────

    /// Coordinate at a fractional arc position.
    pub fn point_at(&self, fraction: f64) -> GeoResult<Coordinate> {
        check_fraction(fraction)?;
        let total = self.length_m();
        if total == 0.0 {
            return Ok(self.start());
        }
        let target = fraction * total;

        // First point whose cumulative length reaches the target; the segment
        // ending there holds it.
        let upper = self.cumulative_m.partition_point(|&c| c < target);
        let segment = upper.saturating_sub(1).min(self.segments.len() - 1);
        let seg = &self.segments[segment];
        let t = if seg.length_m > 0.0 {
            ((target - self.cumulative_m[segment]) / seg.length_m).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Ok(seg.lerp(t))
    }

    /// Length in kilometres of the sub-path between two fractional positions.
    ///
    /// # Preconditions
    ///
    /// Both fractions must lie in `[0, 1]` and `from <= to`.  Callers order
    /// their inputs by arc position; a reversed pair is reported as
    /// [`GeoError::FractionOrder`] rather than silently swapped, since a swap
    /// would hide an ordering bug upstream.
    pub fn arc_length_km(&self, from: f64, to: f64) -> GeoResult<f64> {
        check_fraction(from)?;
        check_fraction(to)?;
        if from > to {
            return Err(GeoError::FractionOrder { from, to });
        }
        Ok((to - from) * self.length_m() / 1000.0)
    }
}

impl TryFrom<Vec<Coordinate>> for RoutePolyline {
    type Error = GeoError;

    fn try_from(points: Vec<Coordinate>) -> GeoResult<Self> {
        Self::new(points)
    }
}

fn check_fraction(f: f64) -> GeoResult<()> {
    if (0.0..=1.0).contains(&f) {
        Ok(())
    } else {
        Err(GeoError::FractionOutOfRange(f))
    }
}
