use hp_core::{FacilityId, GeoError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    /// Two facilities handed to the distance step were not in route order.
    #[error("facility {from} lies after facility {to} along the route")]
    OutOfOrder {
        from: FacilityId,
        to:   FacilityId,
    },

    #[error("geometry error: {0}")]
    Geo(#[from] GeoError),
}

pub type RouteResult<T> = Result<T, RouteError>;
