//! Straßen und das gesamte Straßennetz.


use super::{LaneSection, RoadModelError};

/// Eine Straße: geordnete Folge von Lane-Sections entlang der Referenzlinie
#[derive(Debug, Clone)]
pub struct Road {
    /// Straßen-ID aus der Quelldatei
    pub id: String,
    /// Lane-Sections in Längsrichtung
    pub lane_sections: Vec<LaneSection>,
}

impl Road {
    /// Erstellt eine neue Straße
    pub fn new(id: impl Into<String>, lane_sections: Vec<LaneSection>) -> Self {
        Self {
            id: id.into(),
            lane_sections,
        }
    }
}

/// Container für das gesamte Straßennetz eines Exports
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    /// Alle Straßen in Quellreihenfolge
    pub roads: Vec<Road>,
}

impl RoadNetwork {
    /// Erstellt ein Netz aus Straßen
    pub fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// Anzahl der Straßen
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Anzahl aller Lane-Sections
    pub fn lane_section_count(&self) -> usize {
        self.roads.iter().map(|r| r.lane_sections.len()).sum()
    }

    /// Anzahl aller Lanes
    pub fn lane_count(&self) -> usize {
        self.roads
            .iter()
            .flat_map(|r| &r.lane_sections)
            .map(|s| s.lanes().len())
            .sum()
    }

    /// Ist das Netz leer?
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Prüft alle Lane-Sections; der erste Fehler bricht ab.
    pub fn validate(&self) -> Result<(), RoadModelError> {
        for road in &self.roads {
            for (index, section) in road.lane_sections.iter().enumerate() {
                section
                    .validate()
                    .map_err(|e| e.in_section(&road.id, index))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoundaryCurve, Lane, LaneType};
    use glam::Vec2;

    #[test]
    fn test_network_counts() {
        let section = LaneSection::new(
            0.0,
            10.0,
            vec![Lane::new(-1, LaneType::Driving)],
            vec![
                BoundaryCurve::new(vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]),
                BoundaryCurve::new(vec![Vec2::new(0.0, -3.0), Vec2::new(10.0, -3.0)]),
            ],
        )
        .expect("Section erwartet");
        let network = RoadNetwork::new(vec![Road::new("1", vec![section])]);

        assert_eq!(network.road_count(), 1);
        assert_eq!(network.lane_section_count(), 1);
        assert_eq!(network.lane_count(), 1);
        assert!(RoadNetwork::default().is_empty());
        assert!(network.validate().is_ok());
    }
}
