//! Gemeinsamer Koordinatenrahmen aus allen exportierten Kurvenpaaren.

use glam::Vec2;
use road_terrain::Extent;

use super::DrawLane;

/// Berechnet den quadratischen Export-Bereich über alle Kurvenpunkte.
///
/// Ohne einen einzigen Punkt (leeres Netz) wird der Mindest-Bereich um den
/// Ursprung verwendet.
pub fn compute_extent<'a>(lanes: impl IntoIterator<Item = &'a DrawLane>, margin: f32) -> Extent {
    let Some((min, max)) = raw_bounds(lanes) else {
        log::info!("Keine Straßenpunkte: Mindest-Bereich um den Ursprung");
        return Extent::minimal(margin);
    };

    let extent = Extent::from_bounds(min, max, margin);
    log::info!(
        "Export-Bereich: ({:.1}, {:.1}) .. ({:.1}, {:.1}), Breite {:.1}",
        extent.min_x,
        extent.min_y,
        extent.max_x,
        extent.max_y,
        extent.width
    );
    extent
}

/// Bounding-Box ohne Quadrat und Rand, `None` ohne Punkte.
pub fn raw_bounds<'a>(lanes: impl IntoIterator<Item = &'a DrawLane>) -> Option<(Vec2, Vec2)> {
    let mut points = lanes
        .into_iter()
        .flat_map(|lane| lane.left.vertices.iter().chain(&lane.right.vertices));
    let first = *points.next()?;
    Some(points.fold((first, first), |(min, max), &p| (min.min(p), max.max(p))))
}
