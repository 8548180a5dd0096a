//! Validierungsfehler des Straßenmodells.

use thiserror::Error;

/// Verletzte Vorbedingungen beim Übernehmen von Straßendaten.
///
/// Alle Geometrie-Routinen verlassen sich darauf, dass die Randkurven einer
/// Lane-Section gleich lang sind und indexweise korrespondieren. Das wird
/// genau einmal beim Aufbau des Modells geprüft.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoadModelError {
    #[error("{boundaries} Randkurven für {lanes} Lanes (erwartet: {expected})", expected = .lanes + 1)]
    BoundaryCountMismatch { lanes: usize, boundaries: usize },

    #[error("Randkurve {index} hat {actual} Punkte, erwartet {expected}")]
    BoundaryLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Randkurve {index} enthält nicht-endliche Koordinaten bei Punkt {point}")]
    NonFiniteVertex { index: usize, point: usize },

    #[error("{actual} Stationen für {expected} Querschnitte")]
    StationCountMismatch { expected: usize, actual: usize },

    #[error("Stationen nicht monoton steigend bei Index {index}")]
    StationsNotMonotonic { index: usize },

    #[error("Station {index} ({station}) liegt außerhalb von [{s_start}, {s_end}]")]
    StationOutOfRange {
        index: usize,
        station: f32,
        s_start: f32,
        s_end: f32,
    },

    #[error("Ungültiger s-Bereich: {s_start} bis {s_end}")]
    InvalidRange { s_start: f32, s_end: f32 },

    #[error("Unbekannter Lane-Typ: '{0}'")]
    UnknownLaneType(String),

    #[error("Straße '{road}', Lane-Section {section}: {source}")]
    InSection {
        road: String,
        section: usize,
        source: Box<RoadModelError>,
    },
}

impl RoadModelError {
    /// Versieht einen Fehler mit Straßen- und Section-Kontext
    pub fn in_section(self, road: &str, section: usize) -> Self {
        RoadModelError::InSection {
            road: road.to_string(),
            section,
            source: Box::new(self),
        }
    }
}
