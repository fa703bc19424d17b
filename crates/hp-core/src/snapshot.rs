//! Read-only marker and facility snapshots supplied by the external store.

use crate::{Coordinate, DirectionLabel, FacilityId, Located, MarkerId};

/// An interchange-like reference point on a named road.
///
/// `weight` is assigned once, offline, and increases along the road's
/// canonical physical direction.  Weights are road-local: comparing weights
/// of markers on different roads is meaningless.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id:        MarkerId,
    pub name:      String,
    pub road_name: String,
    pub position:  Coordinate,
    pub weight:    i64,
}

impl Marker {
    pub fn new(
        id:        impl Into<MarkerId>,
        name:      impl Into<String>,
        road_name: impl Into<String>,
        position:  Coordinate,
        weight:    i64,
    ) -> Self {
        Self {
            id:        id.into(),
            name:      name.into(),
            road_name: road_name.into(),
            position,
            weight,
        }
    }
}

impl Located for Marker {
    #[inline]
    fn position(&self) -> Coordinate {
        self.position
    }
}

/// A queryable roadside point of interest (rest area, sleep area).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id:        FacilityId,
    pub name:      String,
    pub road_name: String,
    pub position:  Coordinate,
    pub direction: DirectionLabel,
}

impl Facility {
    pub fn new(
        id:        impl Into<FacilityId>,
        name:      impl Into<String>,
        road_name: impl Into<String>,
        position:  Coordinate,
        direction: DirectionLabel,
    ) -> Self {
        Self {
            id:        id.into(),
            name:      name.into(),
            road_name: road_name.into(),
            position,
            direction,
        }
    }
}

impl Located for Facility {
    #[inline]
    fn position(&self) -> Coordinate {
        self.position
    }
}
