//! `hp-core` — foundational types for the hyugepick route engine.
//!
//! This crate is a dependency of every other `hp-*` crate.  It has no `hp-*`
//! dependencies and everything in it is a plain value type: the engine reads
//! these snapshots, re-groups them, and never mutates them.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, `Located`, haversine distance               |
//! | [`ids`]       | `MarkerId`, `FacilityId`                                  |
//! | [`direction`] | `Direction`, `DirectionLabel`, road-name normalization    |
//! | [`snapshot`]  | `Marker`, `Facility`                                      |
//! | [`loader`]    | CSV readers for marker and facility snapshots             |
//! | [`error`]     | `GeoError`, `GeoResult`, `LoadError`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod loader;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, DirectionLabel, normalize_road_name};
pub use error::{GeoError, GeoResult, LoadError};
pub use geo::{Coordinate, Located, haversine_distance};
pub use ids::{FacilityId, MarkerId};
pub use loader::{load_facilities_csv, load_facilities_reader, load_markers_csv, load_markers_reader};
pub use snapshot::{Facility, Marker};
