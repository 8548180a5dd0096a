//! Klassifizierte Kurvenpaare (transiente Export-Records).

use crate::core::BoundaryCurve;

/// Ausgabekategorie eines klassifizierten Kurvenpaars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawCategory {
    /// Fahrbahn (Asphalt)
    Roadway,
    /// Gehweg
    Sidewalk,
    /// Bordstein / Randstreifen neben Gehwegen
    Border,
    /// Fahrbahnmarkierungen (Randlinien, Mittellinien-Striche)
    Marking,
    /// Fahrtrichtungs-Anker auf Fahrbahnen
    DirectionIndicator,
    /// Orientierungs-Anker auf Gehwegen
    OrientationIndicator,
}

impl DrawCategory {
    /// Oberflächen-Kategorien in der festen Reihenfolge des Sammel-Streams
    pub const SURFACES: [DrawCategory; 4] = [
        DrawCategory::Roadway,
        DrawCategory::Sidewalk,
        DrawCategory::Border,
        DrawCategory::Marking,
    ];

    /// Präfix für Objektnamen (`o <prefix>_<n>`)
    pub fn object_prefix(self) -> &'static str {
        match self {
            DrawCategory::Roadway => "roadway",
            DrawCategory::Sidewalk => "sidewalk",
            DrawCategory::Border => "border",
            DrawCategory::Marking => "marking",
            DrawCategory::DirectionIndicator => "direction",
            DrawCategory::OrientationIndicator => "orientation",
        }
    }

    /// Nur Punktpaare, keine Flächen
    pub fn is_indicator(self) -> bool {
        matches!(
            self,
            DrawCategory::DirectionIndicator | DrawCategory::OrientationIndicator
        )
    }
}

/// Ein klassifiziertes Paar aus linker und rechter Randkurve mit Zielhöhe.
///
/// Wird bei der Klassifizierung erzeugt und beim Mesh-Export genau einmal
/// verbraucht.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawLane {
    /// Ausgabekategorie
    pub category: DrawCategory,
    /// Linke Randkurve
    pub left: BoundaryCurve,
    /// Rechte Randkurve (gleiche Länge wie `left`)
    pub right: BoundaryCurve,
    /// Höhenversatz über dem Gelände
    pub elevation: f32,
}

impl DrawLane {
    /// Erstellt ein neues Kurvenpaar
    pub fn new(
        category: DrawCategory,
        left: BoundaryCurve,
        right: BoundaryCurve,
        elevation: f32,
    ) -> Self {
        debug_assert_eq!(left.len(), right.len());
        Self {
            category,
            left,
            right,
            elevation,
        }
    }

    /// Um 180° gedreht: beide Kurven rückwärts, links und rechts getauscht.
    ///
    /// Für Lanes, deren Fahrtrichtung der Referenzlinie entgegenläuft.
    pub fn flipped(self) -> Self {
        Self {
            category: self.category,
            left: self.right.reversed(),
            right: self.left.reversed(),
            elevation: self.elevation,
        }
    }

    /// Anzahl Querschnitte
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Enthält das Paar keine Querschnitte?
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_flipped_reverses_and_swaps() {
        let left = BoundaryCurve::new(vec![Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)]);
        let right = BoundaryCurve::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        let lane = DrawLane::new(DrawCategory::DirectionIndicator, left, right, 0.1).flipped();

        assert_eq!(lane.left.vertices, vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)]);
        assert_eq!(lane.right.vertices, vec![Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)]);
        assert_eq!(lane.category, DrawCategory::DirectionIndicator);
    }
}
