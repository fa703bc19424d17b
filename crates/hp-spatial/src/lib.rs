//! `hp-spatial` — route geometry and corridor search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`polyline`]  | `RoutePolyline`, `Projection`, arc length, point-at       |
//! | [`index`]     | `SegmentIndex` (R-tree over segment bounding boxes)       |
//! | [`proximity`] | `find_nearby`, `NearbyHit`                                |
//!
//! Errors are [`hp_core::GeoError`]; this crate adds no error type of its own.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `Projection`, `NearbyHit`, and `hp-core` types. |

pub mod index;
pub mod polyline;
pub mod proximity;

#[cfg(test)]
mod tests;

pub use index::SegmentIndex;
pub use polyline::{Projection, RoutePolyline};
pub use proximity::{NearbyHit, check_buffer, find_nearby};
