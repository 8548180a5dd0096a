//! Lane-Sections: ein Längsabschnitt einer Straße mit festem Querschnitt.

use std::ops::RangeInclusive;

use glam::Vec2;

use super::{Lane, LaneType, RoadModelError};

/// Tessellierte Randkurve einer Lane (geordnete 2D-Punktfolge).
///
/// Zwei Kurven derselben Lane haben gleich viele Punkte; Index `j` links und
/// Index `j` rechts beschreiben denselben Querschnitt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryCurve {
    /// Punkte der Kurve in Kartenkoordinaten
    pub vertices: Vec<Vec2>,
}

impl BoundaryCurve {
    /// Erstellt eine Kurve aus Punkten
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// Anzahl der Punkte
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ist die Kurve leer?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Kurve in umgekehrter Indexreihenfolge
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Teilkurve `[from, to)`
    pub fn slice(&self, from: usize, to: usize) -> Self {
        Self {
            vertices: self.vertices[from..to].to_vec(),
        }
    }
}

impl From<Vec<Vec2>> for BoundaryCurve {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices)
    }
}

/// Ein Längsabschnitt einer Straße.
///
/// Lanes sind von links nach rechts über den Querschnitt geordnet.
/// Für N Lanes existieren N+1 Randkurven; Kurve `i` und `i+1` begrenzen Lane `i`.
#[derive(Debug, Clone)]
pub struct LaneSection {
    s_start: f32,
    s_end: f32,
    lanes: Vec<Lane>,
    boundaries: Vec<BoundaryCurve>,
    /// s-Koordinate jedes Querschnitt-Index
    stations: Vec<f32>,
}

impl LaneSection {
    /// Erstellt eine Lane-Section und prüft die Korrespondenz der Randkurven.
    ///
    /// Die Stationen werden über die Bogenlänge der Mittellinie zwischen
    /// äußerster linker und rechter Randkurve auf `[s_start, s_end]` verteilt.
    pub fn new(
        s_start: f32,
        s_end: f32,
        lanes: Vec<Lane>,
        boundaries: Vec<BoundaryCurve>,
    ) -> Result<Self, RoadModelError> {
        Self::validate_range(s_start, s_end)?;
        Self::validate_boundaries(&lanes, &boundaries)?;
        let stations = Self::arc_length_stations(&boundaries, s_start, s_end);

        Ok(Self {
            s_start,
            s_end,
            lanes,
            boundaries,
            stations,
        })
    }

    /// Wie [`LaneSection::new`], aber mit expliziten Stationen pro Querschnitt.
    pub fn with_stations(
        s_start: f32,
        s_end: f32,
        lanes: Vec<Lane>,
        boundaries: Vec<BoundaryCurve>,
        stations: Vec<f32>,
    ) -> Result<Self, RoadModelError> {
        Self::validate_range(s_start, s_end)?;
        Self::validate_boundaries(&lanes, &boundaries)?;
        Self::validate_stations(&boundaries, &stations, s_start, s_end)?;

        Ok(Self {
            s_start,
            s_end,
            lanes,
            boundaries,
            stations,
        })
    }

    /// Prüft die Korrespondenz-Vorbedingung erneut (Bereich, Kurven, Stationen).
    pub fn validate(&self) -> Result<(), RoadModelError> {
        Self::validate_range(self.s_start, self.s_end)?;
        Self::validate_boundaries(&self.lanes, &self.boundaries)?;
        Self::validate_stations(&self.boundaries, &self.stations, self.s_start, self.s_end)
    }

    fn validate_range(s_start: f32, s_end: f32) -> Result<(), RoadModelError> {
        if !s_start.is_finite() || !s_end.is_finite() || s_end < s_start {
            return Err(RoadModelError::InvalidRange { s_start, s_end });
        }
        Ok(())
    }

    fn validate_boundaries(
        lanes: &[Lane],
        boundaries: &[BoundaryCurve],
    ) -> Result<(), RoadModelError> {
        if boundaries.len() != lanes.len() + 1 {
            return Err(RoadModelError::BoundaryCountMismatch {
                lanes: lanes.len(),
                boundaries: boundaries.len(),
            });
        }

        let expected = boundaries[0].len();
        for (index, boundary) in boundaries.iter().enumerate() {
            if boundary.len() != expected {
                return Err(RoadModelError::BoundaryLengthMismatch {
                    index,
                    expected,
                    actual: boundary.len(),
                });
            }
            if let Some(point) = boundary.vertices.iter().position(|v| !v.is_finite()) {
                return Err(RoadModelError::NonFiniteVertex { index, point });
            }
        }
        Ok(())
    }

    /// Eine Station pro Querschnitt, endlich, nicht fallend, innerhalb `[s_start, s_end]`.
    fn validate_stations(
        boundaries: &[BoundaryCurve],
        stations: &[f32],
        s_start: f32,
        s_end: f32,
    ) -> Result<(), RoadModelError> {
        let expected = boundaries.first().map_or(0, BoundaryCurve::len);
        if stations.len() != expected {
            return Err(RoadModelError::StationCountMismatch {
                expected,
                actual: stations.len(),
            });
        }
        // NaN fällt durch den Bereichstest
        if let Some(index) = stations
            .iter()
            .position(|s| !(s_start..=s_end).contains(s))
        {
            return Err(RoadModelError::StationOutOfRange {
                index,
                station: stations[index],
                s_start,
                s_end,
            });
        }
        if let Some(index) = stations.windows(2).position(|w| w[1] < w[0]) {
            return Err(RoadModelError::StationsNotMonotonic { index: index + 1 });
        }
        Ok(())
    }

    fn arc_length_stations(boundaries: &[BoundaryCurve], s_start: f32, s_end: f32) -> Vec<f32> {
        let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) else {
            return Vec::new();
        };

        let mut cumulative = Vec::with_capacity(first.len());
        let mut length = 0.0f32;
        let mut previous: Option<Vec2> = None;
        for (a, b) in first.vertices.iter().zip(&last.vertices) {
            let mid = (*a + *b) * 0.5;
            if let Some(prev) = previous {
                length += prev.distance(mid);
            }
            cumulative.push(length);
            previous = Some(mid);
        }

        let span = s_end - s_start;
        if length <= f32::EPSILON {
            return vec![s_start; cumulative.len()];
        }
        cumulative
            .into_iter()
            .map(|l| (s_start + l / length * span).min(s_end))
            .collect()
    }

    /// Start der Section (s-Koordinate)
    pub fn s_start(&self) -> f32 {
        self.s_start
    }

    /// Ende der Section (s-Koordinate)
    pub fn s_end(&self) -> f32 {
        self.s_end
    }

    /// Voller s-Bereich der Section
    pub fn s_range(&self) -> RangeInclusive<f32> {
        self.s_start..=self.s_end
    }

    /// Lanes von links nach rechts
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Lane-Typen von links nach rechts
    pub fn lane_types(&self) -> Vec<LaneType> {
        self.lanes.iter().map(|l| l.lane_type).collect()
    }

    /// Alle Randkurven (volle Länge)
    pub fn boundaries(&self) -> &[BoundaryCurve] {
        &self.boundaries
    }

    /// s-Koordinaten der Querschnitte
    pub fn stations(&self) -> &[f32] {
        &self.stations
    }

    /// Anzahl Querschnitte (Punkte pro Randkurve)
    pub fn cross_section_count(&self) -> usize {
        self.stations.len()
    }

    /// Liefert die Randkurven beschränkt auf Querschnitte mit Station in `s_range`.
    ///
    /// Ergebnis: `lanes().len() + 1` Kurven gleicher Länge, indexweise korrespondierend.
    pub fn tessellate_boundary_curves(&self, s_range: RangeInclusive<f32>) -> Vec<BoundaryCurve> {
        let from = self
            .stations
            .iter()
            .position(|s| s >= s_range.start())
            .unwrap_or(self.stations.len());
        let to = self
            .stations
            .iter()
            .rposition(|s| s <= s_range.end())
            .map_or(from, |i| (i + 1).max(from));

        self.boundaries
            .iter()
            .map(|boundary| boundary.slice(from, to))
            .collect()
    }
}
