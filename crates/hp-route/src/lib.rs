//! `hp-route` — direction inference, accessibility filtering, and the
//! route → facility pipeline.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`config`]   | `PipelineConfig`, `ZeroDeltaPolicy`                         |
//! | [`resolver`] | `DirectionResolver`, `RoadDirection`, `DirectionMap`        |
//! | [`access`]   | `AccessibilityFilter`, `Verdict`, `FilterSummary`           |
//! | [`distance`] | `SegmentDistanceCalculator`                                 |
//! | [`pipeline`] | `RouteFacilityPipeline`, `resolve_accessible_facilities`    |
//! | [`error`]    | `RouteError`, `RouteResult`                                 |
//!
//! # Quick start
//!
//! ```no_run
//! use hp_core::{Coordinate, DirectionLabel, Facility, Marker};
//! use hp_route::resolve_accessible_facilities;
//!
//! let route = [Coordinate::new(127.0, 36.0), Coordinate::new(127.0, 36.2)];
//! let markers = [
//!     Marker::new(1u64, "North IC", "H1", Coordinate::new(127.0, 36.01), 10),
//!     Marker::new(2u64, "South IC", "H1", Coordinate::new(127.0, 36.19), 4),
//! ];
//! let facilities = [
//!     Facility::new(7u64, "Rest Area", "H1", Coordinate::new(127.0, 36.1), DirectionLabel::Up),
//! ];
//!
//! let set = resolve_accessible_facilities(&route, &markers, &facilities, 300.0, 500.0)?;
//! for f in &set {
//!     println!("{} → next {:.1} km", f.facility.name, f.distance_to_next_km);
//! }
//! # Ok::<(), hp_route::RouteError>(())
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Resolve roads on Rayon's thread pool.                        |
//! | `serde`    | Adds `Serialize`/`Deserialize` to config and result types.   |

pub mod access;
pub mod config;
pub mod distance;
pub mod error;
pub mod pipeline;
pub mod resolver;


pub use access::{AccessibilityFilter, Assessed, FilterOutcome, FilterSummary, Verdict};
pub use config::{PipelineConfig, ZeroDeltaPolicy};
pub use distance::SegmentDistanceCalculator;
pub use error::{RouteError, RouteResult};
pub use pipeline::{
    AccessibleFacility, AccessibleFacilitySet, RouteFacilityPipeline, resolve_accessible_facilities,
};
pub use resolver::{DirectionMap, DirectionResolver, RoadDirection, direction_from_delta};
