//! Gemeinsamer quadratischer Koordinatenrahmen für Straßen und Terrain.

use glam::Vec2;

/// Quadratischer, gepolsterter Weltbereich.
///
/// Wird einmal pro Export berechnet und von der Höhenabtastung der Straßen
/// und vom Terrain-Gitter gleichermaßen verwendet. Beide müssen denselben
/// Rahmen sehen, sonst passen Straßen- und Geländehöhen nicht zusammen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Minimale Y-Koordinate (unten)
    pub min_y: f32,
    /// Maximale Y-Koordinate (oben)
    pub max_y: f32,
    /// Kantenlänge des Quadrats (immer > 0)
    pub width: f32,
}

impl Extent {
    /// Kleinste zulässige Kantenlänge; schützt vor Division durch 0.
    pub const MIN_WIDTH: f32 = 1.0;

    /// Erstellt einen quadratischen Bereich aus einer Bounding-Box.
    ///
    /// Die schmalere Achse wird symmetrisch auf die breitere aufgefüllt,
    /// danach kommt `margin` auf allen Seiten dazu.
    pub fn from_bounds(min: Vec2, max: Vec2, margin: f32) -> Self {
        let size = max - min;
        let mut min = min;
        let mut max = max;

        if size.x > size.y {
            let pad = (size.x - size.y) / 2.0;
            min.y -= pad;
            max.y += pad;
        } else {
            let pad = (size.y - size.x) / 2.0;
            min.x -= pad;
            max.x += pad;
        }

        let margin = margin.max(0.0);
        min -= Vec2::splat(margin);
        max += Vec2::splat(margin);

        // Einzelner Punkt ohne Rand: auf Mindestgröße aufziehen
        let width = max.x - min.x;
        if width < Self::MIN_WIDTH {
            let grow = (Self::MIN_WIDTH - width) / 2.0;
            min -= Vec2::splat(grow);
            max += Vec2::splat(grow);
        }

        let width = max.x - min.x;
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: min.y + width,
            width,
        }
    }

    /// Mindest-Bereich für ein leeres Straßennetz, zentriert um den Ursprung.
    pub fn minimal(margin: f32) -> Self {
        Self::from_bounds(Vec2::ZERO, Vec2::ZERO, margin)
    }

    /// Mittelpunkt des Bereichs.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Prüft ob ein Punkt im Bereich liegt (Ränder eingeschlossen).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Höhe des Bereichs (identisch zur Breite, da quadratisch).
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_bounds_pads_narrow_axis() {
        let extent = Extent::from_bounds(Vec2::new(0.0, 0.0), Vec2::new(100.0, 20.0), 0.0);
        assert_relative_eq!(extent.width, 100.0);
        assert_relative_eq!(extent.height(), 100.0);
        assert_relative_eq!(extent.min_y, -40.0);
        assert_relative_eq!(extent.max_y, 60.0);
        assert_relative_eq!(extent.min_x, 0.0);
    }

    #[test]
    fn test_from_bounds_adds_margin() {
        let extent = Extent::from_bounds(Vec2::new(-5.0, -10.0), Vec2::new(5.0, 10.0), 50.0);
        assert_relative_eq!(extent.width, 120.0);
        assert_relative_eq!(extent.height(), 120.0);
        assert_relative_eq!(extent.center().x, 0.0);
        assert_relative_eq!(extent.center().y, 0.0);
    }

    #[test]
    fn test_minimal_extent_has_positive_width() {
        let extent = Extent::minimal(0.0);
        assert!(extent.width >= Extent::MIN_WIDTH);
        assert!(extent.contains(Vec2::ZERO));

        let extent = Extent::minimal(25.0);
        assert_relative_eq!(extent.width, 50.0);
    }
}
