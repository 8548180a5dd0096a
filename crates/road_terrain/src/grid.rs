//! Gleichmäßiges Terrain-Gitter über dem gemeinsamen Bereich.

use anyhow::{Result, ensure};
use glam::Vec3;

use crate::{Extent, TerrainHeightField, quantize_height};

/// Ergebnis des Terrain-Aufbaus.
///
/// Vertices und Samples liegen in derselben zeilenweisen Reihenfolge
/// (Zeile = Y, Spalte = X), Index `row * grid_points + col`.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    /// Punkte pro Kante
    pub grid_points: usize,
    /// Gitter-Vertices (x, y, Höhe)
    pub vertices: Vec<Vec3>,
    /// Dreiecke mit 0-basierten Vertex-Indizes, zwei pro Zelle
    pub triangles: Vec<[u32; 3]>,
    /// Quantisierte Höhen für die Raw-Heightmap
    pub samples: Vec<u16>,
}

/// Baut ein `grid_points × grid_points`-Gitter über `extent`.
///
/// Abstand `delta = extent.width / (grid_points − 1)`. Jede Zelle erhält zwei
/// Dreiecke mit einheitlicher Wicklung (Normale zeigt nach +Z).
///
/// # Fehler
/// - `grid_points < 2` (kein Gitter möglich)
pub fn build_terrain_grid(
    field: &TerrainHeightField,
    extent: &Extent,
    grid_points: usize,
) -> Result<TerrainGrid> {
    ensure!(
        grid_points >= 2,
        "Terrain-Gitter braucht mindestens 2 Punkte pro Kante (erhalten: {})",
        grid_points
    );
    ensure!(
        grid_points <= u16::MAX as usize,
        "Terrain-Gitter zu groß: {} Punkte pro Kante",
        grid_points
    );

    let delta = extent.width / (grid_points - 1) as f32;
    let noise_height = field.params().noise_height as f32;
    let point_count = grid_points * grid_points;

    let mut vertices = Vec::with_capacity(point_count);
    let mut samples = Vec::with_capacity(point_count);

    for row in 0..grid_points {
        let y = extent.min_y + row as f32 * delta;
        for col in 0..grid_points {
            let x = extent.min_x + col as f32 * delta;
            let height = field.height(x, y, extent);
            vertices.push(Vec3::new(x, y, height));
            samples.push(quantize_height(height, noise_height));
        }
    }

    let cells = grid_points - 1;
    let mut triangles = Vec::with_capacity(cells * cells * 2);
    let n = grid_points as u32;
    for row in 0..cells as u32 {
        for col in 0..cells as u32 {
            let a = row * n + col;
            let b = a + 1;
            let c = a + n;
            let d = c + 1;
            triangles.push([a, b, d]);
            triangles.push([a, d, c]);
        }
    }

    log::info!(
        "Terrain-Gitter: {}x{} Punkte, {} Dreiecke, Zellgröße {:.3}",
        grid_points,
        grid_points,
        triangles.len(),
        delta
    );

    Ok(TerrainGrid {
        grid_points,
        vertices,
        triangles,
        samples,
    })
}
