//! Deterministisches Höhenfeld aus Perlin-Rauschen mit radialem Falloff.
//!
//! In der Mitte des Bereichs (dort liegen die Straßen) wird die Amplitude
//! gedämpft, zum Rand hin wird das Gelände hügeliger.

use crate::Extent;
use noise::{NoiseFn, Perlin};

/// Exponent der Falloff-Kurve.
const FALLOFF_EXPONENT: f64 = 1.1;
/// Mindest-Amplitude im Zentrum.
const FALLOFF_FLOOR: f64 = 0.4;

/// Parameter des Höhenfelds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightFieldParams {
    /// Rausch-Frequenz: Anzahl Perlin-Zellen über die volle Bereichsbreite
    pub noise_scale: f64,
    /// Amplitude und Grundhöhe in Welteinheiten (Ergebnis zentriert um diesen Wert)
    pub noise_height: f64,
}

impl Default for HeightFieldParams {
    fn default() -> Self {
        Self {
            noise_scale: 4.0,
            noise_height: 10.0,
        }
    }
}

/// Höhenfeld-Service mit festem Seed.
///
/// Wird einmal konstruiert und danach nur noch lesend per Referenz geteilt.
/// Gleiche Eingaben liefern im selben Prozess bitgleiche Ergebnisse.
pub struct TerrainHeightField {
    perlin: Perlin,
    params: HeightFieldParams,
}

impl TerrainHeightField {
    /// Erstellt ein Höhenfeld mit dem angegebenen Seed.
    pub fn new(seed: u32, params: HeightFieldParams) -> Self {
        log::debug!(
            "Höhenfeld erstellt: seed={}, scale={:.2}, height={:.2}",
            seed,
            params.noise_scale,
            params.noise_height
        );
        Self {
            perlin: Perlin::new(seed),
            params,
        }
    }

    /// Berechnet die Geländehöhe an `(x, y)` relativ zum gemeinsamen Bereich.
    ///
    /// `base · falloff · noise_height + noise_height` mit
    /// `falloff = ((1 − cos(dist·π / (width/2))) / 2)^1.1 + 0.4`.
    pub fn height(&self, x: f32, y: f32, extent: &Extent) -> f32 {
        let width = f64::from(extent.width.max(Extent::MIN_WIDTH));
        let scale = self.params.noise_scale / width;

        let nx = (f64::from(x) - f64::from(extent.min_x)) * scale;
        let ny = (f64::from(y) - f64::from(extent.min_y)) * scale;
        let base = self.perlin.get([nx, ny]);

        let center = extent.center();
        let dx = f64::from(x) - f64::from(center.x);
        let dy = f64::from(y) - f64::from(center.y);
        let dist = (dx * dx + dy * dy).sqrt();

        let falloff = Self::falloff(dist, width);
        let height = base * falloff * self.params.noise_height + self.params.noise_height;

        log::trace!(
            "Höhe bei ({:.3}, {:.3}): base={:.4}, falloff={:.4} -> {:.3}",
            x,
            y,
            base,
            falloff,
            height
        );

        height as f32
    }

    /// Radialer Dämpfungsfaktor: 0.4 im Zentrum, 1.4 bei halber Breite.
    fn falloff(dist: f64, width: f64) -> f64 {
        let t = (1.0 - (dist * std::f64::consts::PI / (width / 2.0)).cos()) / 2.0;
        t.max(0.0).powf(FALLOFF_EXPONENT) + FALLOFF_FLOOR
    }

    /// Gibt die verwendeten Parameter zurück
    pub fn params(&self) -> &HeightFieldParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn test_extent() -> Extent {
        Extent::from_bounds(Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0), 0.0)
    }

    fn variance(values: &[f32]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
        values
            .iter()
            .map(|&v| (f64::from(v) - mean).powi(2))
            .sum::<f64>()
            / n
    }

    #[test]
    fn test_height_is_deterministic() {
        let extent = test_extent();
        let field = TerrainHeightField::new(42, HeightFieldParams::default());

        for &(x, y) in &[(13.7, 88.1), (150.2, 3.3), (100.0, 100.0)] {
            let a = field.height(x, y, &extent);
            let b = field.height(x, y, &extent);
            assert_eq!(a.to_bits(), b.to_bits());
        }

        // Zweite Instanz mit gleichem Seed liefert dieselben Werte
        let twin = TerrainHeightField::new(42, HeightFieldParams::default());
        assert_eq!(
            field.height(13.7, 88.1, &extent).to_bits(),
            twin.height(13.7, 88.1, &extent).to_bits()
        );
    }

    #[test]
    fn test_falloff_profile() {
        assert_relative_eq!(TerrainHeightField::falloff(0.0, 100.0), 0.4);
        assert_relative_eq!(TerrainHeightField::falloff(50.0, 100.0), 1.4, epsilon = 1e-9);
        assert!(TerrainHeightField::falloff(10.0, 100.0) < TerrainHeightField::falloff(30.0, 100.0));
    }

    #[test]
    fn test_center_is_flatter_than_corners() {
        let extent = test_extent();
        let field = TerrainHeightField::new(3, HeightFieldParams::default());

        let mut center = Vec::new();
        let mut corners = Vec::new();
        let step = 0.37;
        for iy in 0..60 {
            for ix in 0..60 {
                let ox = ix as f32 * step;
                let oy = iy as f32 * step;
                // Fenster um den Mittelpunkt
                center.push(field.height(89.0 + ox, 89.0 + oy, &extent));
                // Fenster in den vier Ecken
                corners.push(field.height(ox, oy, &extent));
                corners.push(field.height(177.8 + ox, oy, &extent));
                corners.push(field.height(ox, 177.8 + oy, &extent));
                corners.push(field.height(177.8 + ox, 177.8 + oy, &extent));
            }
        }

        assert!(variance(&center) < variance(&corners));
    }

    #[test]
    fn test_center_height_near_base_level() {
        let extent = test_extent();
        let params = HeightFieldParams::default();
        let field = TerrainHeightField::new(9, params);
        let c = extent.center();
        let h = field.height(c.x, c.y, &extent);
        // Im Zentrum: |base| <= 1, falloff = 0.4
        assert!((f64::from(h) - params.noise_height).abs() <= 0.4 * params.noise_height + 1e-3);
    }
}
