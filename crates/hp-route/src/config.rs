//! Pipeline configuration.

use hp_spatial::check_buffer;

use crate::{RouteError, RouteResult};

/// What a road resolves to when its entry and exit markers carry the same
/// weight.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroDeltaPolicy {
    /// Treat a zero delta as `Down`.  Matches the historical behaviour of the
    /// facility service.
    #[default]
    FoldDown,
    /// Report `Unknown`, which the accessibility filter treats fail-open.
    Unknown,
}

/// Tunables for one [`RouteFacilityPipeline`][crate::RouteFacilityPipeline]
/// run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Corridor half-width for markers used in direction inference, metres.
    pub road_buffer_m: f64,

    /// Corridor half-width for facilities, metres.
    pub facility_buffer_m: f64,

    pub zero_delta: ZeroDeltaPolicy,

    /// Compare road names after [`normalize_road_name`][hp_core::normalize_road_name],
    /// so "경부고속도로" and "경부선" count as the same road.
    pub normalize_road_names: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            road_buffer_m:        300.0,
            facility_buffer_m:    500.0,
            zero_delta:           ZeroDeltaPolicy::FoldDown,
            normalize_road_names: true,
        }
    }
}

impl PipelineConfig {
    /// Default config with the two corridor widths replaced.
    pub fn with_buffers(road_buffer_m: f64, facility_buffer_m: f64) -> Self {
        Self { road_buffer_m, facility_buffer_m, ..Self::default() }
    }

    /// Reject negative or non-finite corridor widths.
    pub fn validate(&self) -> RouteResult<()> {
        check_buffer(self.road_buffer_m)
            .map_err(|e| RouteError::Config(format!("road_buffer_m: {e}")))?;
        check_buffer(self.facility_buffer_m)
            .map_err(|e| RouteError::Config(format!("facility_buffer_m: {e}")))?;
        Ok(())
    }
}
