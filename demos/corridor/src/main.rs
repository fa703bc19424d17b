//! corridor — route → accessible rest area query on a synthetic trip.
//!
//! ```text
//! corridor [--json] [MARKERS_CSV FACILITIES_CSV]
//! ```
//!
//! Without CSV paths the built-in snapshots in `scenario` are used; the route
//! is always the built-in one.  Set `RUST_LOG=debug` to see per-road
//! direction evidence.

mod scenario;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use hp_core::{load_facilities_csv, load_facilities_reader, load_markers_csv, load_markers_reader};
use hp_route::{PipelineConfig, RouteFacilityPipeline};
use hp_spatial::RoutePolyline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => paths.push(arg),
        }
    }

    // 1. Snapshots.
    let (markers, facilities) = match paths.as_slice() {
        [] => (
            load_markers_reader(Cursor::new(scenario::MARKERS_CSV))?,
            load_facilities_reader(Cursor::new(scenario::FACILITIES_CSV))?,
        ),
        [m, f] => (load_markers_csv(Path::new(m))?, load_facilities_csv(Path::new(f))?),
        _ => bail!("usage: corridor [--json] [MARKERS_CSV FACILITIES_CSV]"),
    };

    // 2. Route.
    let route = RoutePolyline::new(scenario::route())?;

    // 3. Run.
    let pipeline = RouteFacilityPipeline::new(PipelineConfig::default());
    let t0 = Instant::now();
    let set = pipeline.run(&route, &markers, &facilities)?;
    let elapsed = t0.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    // 4. Summary.
    println!("=== corridor — hyugepick route engine ===");
    println!(
        "Route: {} points, {:.1} km  |  Markers: {}  |  Facilities: {}",
        route.points().len(),
        route.length_km(),
        markers.len(),
        facilities.len(),
    );
    println!("Query complete in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!();

    println!("{:<16} {:<10} {:<8}", "Road", "Direction", "Markers");
    println!("{}", "-".repeat(36));
    for road in &set.roads {
        println!(
            "{:<16} {:<10} {:<8}",
            road.road_name,
            road.direction.label(),
            road.marker_count,
        );
    }
    println!();

    println!("{:<28} {:<8} {:>8} {:>10}", "Facility", "Label", "At km", "Next km");
    println!("{}", "-".repeat(58));
    for f in &set {
        println!(
            "{:<28} {:<8} {:>8.1} {:>10.1}",
            f.facility.name,
            f.facility.direction.as_str(),
            f.fraction * route.length_km(),
            f.distance_to_next_km,
        );
    }
    println!();
    println!(
        "{} of {} nearby facilities accessible ({} rejected)",
        set.summary.accessible, set.summary.total, set.summary.rejected,
    );

    Ok(())
}
