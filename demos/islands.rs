//! Islands demo: builds islands over a small colored point set and reports
//! what each island can see of the others.
//!
//! Usage:
//! ```text
//! cargo run --example islands            # expansion radius 1.5
//! cargo run --example islands -- 0.75    # custom expansion radius
//! RUST_LOG=archipelago=trace cargo run --example islands
//! ```

use archipelago::geometry::{Contour, Point, PointSet};
use archipelago::island::{IslandConfig, IslandStore};
use archipelago::math::{regular_projection, transform_points, Point2};

fn sample_points() -> PointSet {
    let coords: [(f64, f64, i32); 11] = [
        (0.0, 0.0, 0),
        (6.0, 0.0, 0),
        (6.0, 4.0, 0),
        (0.0, 4.0, 0),
        (3.0, 2.0, 0),
        (20.0, 0.0, 1),
        (24.0, 0.0, 1),
        (24.0, 8.0, 1),
        (10.0, 14.0, 2),
        (16.0, 15.0, 2),
        (-12.0, 2.0, 3),
    ];
    coords
        .iter()
        .map(|&(x, y, kind)| Point::new(Point2::new(x, y), kind))
        .collect()
}

fn main() -> archipelago::Result<()> {
    // Default: WARN for everything, INFO for archipelago.
    // Override with RUST_LOG env var (e.g. RUST_LOG=archipelago=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("islands=info".parse().unwrap_or_default())
        .add_directive("archipelago=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let radius = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(1.5);
    let config = IslandConfig::new(radius)?;

    let source = sample_points();
    let angle = regular_projection(&source.to_vec());
    let points = transform_points(&source, angle);
    tracing::info!(points = points.len(), angle, radius, "rotated input");

    // Single points become point islands, pairs a straight bend, larger
    // groups convex islands.
    let mut store = IslandStore::new();
    for (kind, group) in points.group_by_kind() {
        let island = match group.len() {
            1 => config.point_island(group[0])?,
            2 => config.bend_island(&group)?,
            _ => config.convex_island(&group)?,
        };
        tracing::info!(
            kind,
            variant = ?island.variant(),
            circles = island.circles().len(),
            length = island.contour().length(),
            "island"
        );
        store.insert(island);
    }

    for (a, b) in store.overlapping_pairs() {
        tracing::warn!(?a, ?b, "islands overlap");
    }

    for visibility in store.all_visibility_contours() {
        let from = store.get(visibility.from)?.kind();
        let to = store.get(visibility.to)?.kind();
        let length: f64 = visibility.contours.iter().map(Contour::length).sum();
        tracing::info!(
            from,
            to,
            contours = visibility.contours.len(),
            length,
            "visible boundary"
        );
    }

    Ok(())
}
