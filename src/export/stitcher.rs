//! Mesh-Stitching: Kurvenpaar + Höhe → geschlossenes Band mit Schürze.
//!
//! Vertex-Layout eines Bands mit `n` Querschnitten (lokal, 0-basiert):
//! - `2j` / `2j+1`: oben links / oben rechts auf Geländehöhe + Versatz
//! - `2n+2j` / `2n+2j+1`: unten links / unten rechts auf `z = 0`
//!
//! Flächen: `2(n−1)` Deckdreiecke, `2(n−1)` Seitenwand-Quads, 2 Endkappen.

use glam::{Vec2, Vec3};
use road_terrain::{Extent, TerrainHeightField};

use super::mesh_buffer::{Face, MeshPart};
use super::DrawLane;

/// Erzeugt Mesh-Teilstücke auf dem gemeinsamen Gelände.
pub struct MeshStitcher<'a> {
    field: &'a TerrainHeightField,
    extent: &'a Extent,
}

impl<'a> MeshStitcher<'a> {
    /// Erstellt einen Stitcher über Höhenfeld und Export-Bereich
    pub fn new(field: &'a TerrainHeightField, extent: &'a Extent) -> Self {
        Self { field, extent }
    }

    /// Oberflächenpunkt: Geländehöhe plus Versatz
    fn surface(&self, point: Vec2, elevation: f32) -> Vec3 {
        let z = self.field.height(point.x, point.y, self.extent) + elevation;
        Vec3::new(point.x, point.y, z)
    }

    /// Band mit Deckfläche, Seitenwänden und Endkappen.
    ///
    /// Kurven mit weniger als 2 Punkten ergeben ein leeres Teilstück.
    pub fn write_ribbon(&self, left: &[Vec2], right: &[Vec2], elevation: f32) -> MeshPart {
        debug_assert_eq!(left.len(), right.len());
        let n = left.len().min(right.len());
        if n < 2 {
            log::warn!("Band mit {} Querschnitten übersprungen", n);
            return MeshPart::default();
        }

        let mut vertices = Vec::with_capacity(4 * n);
        for (l, r) in left.iter().zip(right) {
            vertices.push(self.surface(*l, elevation));
            vertices.push(self.surface(*r, elevation));
        }
        for (l, r) in left.iter().zip(right) {
            vertices.push(l.extend(0.0));
            vertices.push(r.extend(0.0));
        }

        let n = n as u32;
        let bottom = 2 * n;
        let strip = 2 * n - 2;
        let mut faces = Vec::with_capacity(4 * n as usize - 2);

        // Deckfläche: Zickzack über den verschränkten Streifen
        for k in 0..strip {
            faces.push(if k % 2 == 0 {
                Face::Tri([k, k + 1, k + 2])
            } else {
                Face::Tri([k + 1, k, k + 2])
            });
        }

        // Seitenwände: gerade k = linke Wand, ungerade k = rechte Wand
        for k in 0..strip {
            faces.push(if k % 2 == 0 {
                Face::Quad([k, k + 2, bottom + k + 2, bottom + k])
            } else {
                Face::Quad([k, bottom + k, bottom + k + 2, k + 2])
            });
        }

        // Endkappen
        let last = 2 * (n - 1);
        faces.push(Face::Quad([0, bottom, bottom + 1, 1]));
        faces.push(Face::Quad([last, last + 1, bottom + last + 1, bottom + last]));

        log::trace!("Band: {} Vertices, {} Flächen", vertices.len(), faces.len());
        MeshPart { vertices, faces }
    }

    /// Orientierungs-Anker: ein Punktpaar `(left[j], right[j])` pro Querschnitt.
    pub fn write_orientation(&self, left: &[Vec2], right: &[Vec2], elevation: f32) -> MeshPart {
        debug_assert_eq!(left.len(), right.len());
        let vertices = left
            .iter()
            .zip(right)
            .flat_map(|(l, r)| [self.surface(*l, elevation), self.surface(*r, elevation)])
            .collect();
        MeshPart {
            vertices,
            faces: Vec::new(),
        }
    }

    /// Richtungs-Anker: Punktpaare `(mid[j], mid[j+1])` entlang der Lane-Mitte.
    pub fn write_orientation_parallel(
        &self,
        left: &[Vec2],
        right: &[Vec2],
        elevation: f32,
    ) -> MeshPart {
        debug_assert_eq!(left.len(), right.len());
        let mids: Vec<Vec2> = left.iter().zip(right).map(|(l, r)| (*l + *r) * 0.5).collect();
        let vertices = mids
            .windows(2)
            .flat_map(|w| [self.surface(w[0], elevation), self.surface(w[1], elevation)])
            .collect();
        MeshPart {
            vertices,
            faces: Vec::new(),
        }
    }

    /// Wählt die passende Operation für die Kategorie des Kurvenpaars.
    pub fn stitch(&self, lane: &DrawLane) -> MeshPart {
        let (left, right) = (&lane.left.vertices, &lane.right.vertices);
        match lane.category {
            super::DrawCategory::DirectionIndicator => {
                self.write_orientation_parallel(left, right, lane.elevation)
            }
            super::DrawCategory::OrientationIndicator => {
                self.write_orientation(left, right, lane.elevation)
            }
            _ => self.write_ribbon(left, right, lane.elevation),
        }
    }
}
