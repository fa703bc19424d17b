//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` is stored as `f64` (longitude, latitude).  Routes returned by
//! the routing provider span hundreds of kilometres, and the arc-length maths
//! downstream sums many short segments, so single precision is not enough.

use std::fmt;

use crate::{GeoError, GeoResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Construct without validation.  Use [`Coordinate::try_new`] at input
    /// boundaries.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Construct and validate in one step.
    pub fn try_new(lon: f64, lat: f64) -> GeoResult<Self> {
        let c = Self { lon, lat };
        c.validate()?;
        Ok(c)
    }

    /// `true` if both components are finite and inside the WGS-84 ranges.
    pub fn is_valid(self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    pub fn validate(self) -> GeoResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate { lon: self.lon, lat: self.lat })
        }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Great-circle distance between two coordinates in metres.
#[inline]
pub fn haversine_distance(p1: Coordinate, p2: Coordinate) -> f64 {
    p1.distance_m(p2)
}

/// Anything with a fixed position that corridor search can test.
pub trait Located {
    fn position(&self) -> Coordinate;
}

impl Located for Coordinate {
    #[inline]
    fn position(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn position(&self) -> Coordinate {
        (**self).position()
    }
}
