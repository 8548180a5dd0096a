//! Demo-Straßennetze aus Referenz-Polylinie und Lane-Breiten.
//!
//! Für CLI (`--demo`), Tests und Benchmarks. Die Randkurven entstehen durch
//! seitliches Versetzen der Referenzlinie und korrespondieren damit indexweise.

use glam::Vec2;

use crate::core::{BoundaryCurve, Lane, LaneSection, LaneType, Road, RoadNetwork};

/// Baut eine Straße aus einer Referenz-Polylinie und einem Lane-Profil.
#[derive(Debug, Clone)]
pub struct DemoNetworkBuilder {
    id: String,
    reference: Vec<Vec2>,
    profile: Vec<(LaneType, f32)>,
    sections: usize,
}

impl DemoNetworkBuilder {
    /// Neue Straße entlang `reference` (mindestens 2 Punkte für sinnvolle Geometrie).
    pub fn new(id: impl Into<String>, reference: Vec<Vec2>) -> Self {
        Self {
            id: id.into(),
            reference,
            profile: Vec::new(),
            sections: 1,
        }
    }

    /// Gerade Referenzlinie entlang +X mit `samples` Punkten.
    pub fn straight(id: impl Into<String>, length: f32, samples: usize) -> Self {
        let samples = samples.max(2);
        let step = length / (samples - 1) as f32;
        let reference = (0..samples)
            .map(|i| Vec2::new(i as f32 * step, 0.0))
            .collect();
        Self::new(id, reference)
    }

    /// Kreisbogen um `center`, Start bei Winkel 0, gegen den Uhrzeigersinn.
    pub fn arc(id: impl Into<String>, center: Vec2, radius: f32, sweep: f32, samples: usize) -> Self {
        let samples = samples.max(2);
        let reference = (0..samples)
            .map(|i| {
                let angle = sweep * i as f32 / (samples - 1) as f32;
                center + Vec2::from_angle(angle) * radius
            })
            .collect();
        Self::new(id, reference)
    }

    /// Typische Allee: Gehweg und Bordstein auf beiden Seiten, zwei Fahrstreifen.
    pub fn straight_avenue(length: f32, samples: usize) -> Self {
        Self::straight("avenue", length, samples).with_profile(&[
            (LaneType::Border, 0.3),
            (LaneType::Sidewalk, 2.0),
            (LaneType::Border, 0.2),
            (LaneType::Driving, 3.5),
            (LaneType::Driving, 3.5),
            (LaneType::Border, 0.2),
            (LaneType::Sidewalk, 2.0),
            (LaneType::Border, 0.3),
        ])
    }

    /// Hängt eine Lane rechts an das Profil an.
    pub fn lane(mut self, lane_type: LaneType, width: f32) -> Self {
        self.profile.push((lane_type, width));
        self
    }

    /// Ersetzt das Profil (Lanes von links nach rechts).
    pub fn with_profile(mut self, profile: &[(LaneType, f32)]) -> Self {
        self.profile = profile.to_vec();
        self
    }

    /// Teilt die Straße in `count` gleich lange Lane-Sections (nach Index).
    pub fn sections(mut self, count: usize) -> Self {
        self.sections = count.max(1);
        self
    }

    /// Baut die Straße.
    ///
    /// Gibt eine Straße ohne Sections zurück, wenn Profil oder Referenzlinie leer sind.
    pub fn build_road(&self) -> Road {
        let n = self.reference.len();
        if n < 2 || self.profile.is_empty() {
            log::warn!("Demo-Straße '{}' ohne Geometrie", self.id);
            return Road::new(self.id.clone(), Vec::new());
        }

        let boundaries = self.full_boundaries();
        let arc = cumulative_length(&self.reference);
        let lanes = self.lanes();

        // Sections teilen sich den Grenz-Querschnitt
        let count = self.sections.min(n - 1);
        let mut sections = Vec::with_capacity(count);
        for k in 0..count {
            let from = k * (n - 1) / count;
            let to = (k + 1) * (n - 1) / count;
            let curves = boundaries.iter().map(|b| b.slice(from, to + 1)).collect();
            let stations = arc[from..=to].to_vec();
            match LaneSection::with_stations(arc[from], arc[to], lanes.clone(), curves, stations) {
                Ok(section) => sections.push(section),
                Err(e) => log::warn!("Demo-Section {} verworfen: {}", k, e),
            }
        }

        Road::new(self.id.clone(), sections)
    }

    /// Baut ein Netz mit genau dieser Straße.
    pub fn build(&self) -> RoadNetwork {
        RoadNetwork::new(vec![self.build_road()])
    }

    fn lanes(&self) -> Vec<Lane> {
        let left = (self.profile.len() / 2) as i32;
        self.profile
            .iter()
            .enumerate()
            .map(|(i, (lane_type, _))| {
                let i = i as i32;
                let id = if i < left { left - i } else { -(i - left + 1) };
                Lane::new(id, *lane_type)
            })
            .collect()
    }

    /// `profile.len() + 1` Randkurven, zentriert um die Referenzlinie.
    fn full_boundaries(&self) -> Vec<BoundaryCurve> {
        let normals = left_normals(&self.reference);
        let total: f32 = self.profile.iter().map(|(_, w)| w).sum();

        let mut offsets = Vec::with_capacity(self.profile.len() + 1);
        let mut offset = total / 2.0;
        offsets.push(offset);
        for (_, width) in &self.profile {
            offset -= width;
            offsets.push(offset);
        }

        offsets
            .into_iter()
            .map(|d| {
                BoundaryCurve::new(
                    self.reference
                        .iter()
                        .zip(&normals)
                        .map(|(p, n)| *p + *n * d)
                        .collect(),
                )
            })
            .collect()
    }
}

/// Linke Einheitsnormale pro Punkt (Tangente aus zentralen Differenzen).
fn left_normals(points: &[Vec2]) -> Vec<Vec2> {
    let last = points.len().saturating_sub(1);
    (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            (next - prev).normalize_or_zero().perp()
        })
        .collect()
}

fn cumulative_length(points: &[Vec2]) -> Vec<f32> {
    let mut length = 0.0;
    let mut result = Vec::with_capacity(points.len());
    result.push(0.0);
    for w in points.windows(2) {
        length += w[0].distance(w[1]);
        result.push(length);
    }
    result
}

/// Demo-Netz für die CLI: gerade Allee plus gebogene Nebenstraße.
pub fn demo_network() -> RoadNetwork {
    let avenue = DemoNetworkBuilder::straight_avenue(200.0, 81)
        .sections(2)
        .build_road();

    let side_street = DemoNetworkBuilder::arc(
        "side_street",
        Vec2::new(100.0, 60.0),
        45.0,
        std::f32::consts::FRAC_PI_2,
        40,
    )
    .with_profile(&[
        (LaneType::Sidewalk, 1.8),
        (LaneType::Border, 0.2),
        (LaneType::Driving, 3.0),
        (LaneType::Driving, 3.0),
        (LaneType::Shoulder, 0.5),
        (LaneType::Sidewalk, 1.8),
    ])
    .build_road();

    RoadNetwork::new(vec![avenue, side_street])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_boundaries_follow_profile() {
        let road = DemoNetworkBuilder::straight("r", 30.0, 4)
            .lane(LaneType::Driving, 3.0)
            .lane(LaneType::Sidewalk, 2.0)
            .build_road();
        let section = &road.lane_sections[0];
        let b = section.boundaries();

        assert_eq!(b.len(), 3);
        assert_relative_eq!(b[0].vertices[0].y, 2.5);
        assert_relative_eq!(b[1].vertices[2].y, -0.5);
        assert_relative_eq!(b[2].vertices[3].y, -2.5);
        assert_relative_eq!(section.s_end(), 30.0);
    }

    #[test]
    fn test_sections_share_cross_section() {
        let road = DemoNetworkBuilder::straight_avenue(100.0, 11)
            .sections(3)
            .build_road();
        assert_eq!(road.lane_sections.len(), 3);
        for pair in road.lane_sections.windows(2) {
            assert_relative_eq!(pair[0].s_end(), pair[1].s_start());
            let end = pair[0].boundaries()[0].vertices.last().copied();
            assert_eq!(end, pair[1].boundaries()[0].vertices.first().copied());
        }
    }

    #[test]
    fn test_arc_lanes_keep_width() {
        let road = DemoNetworkBuilder::arc("a", Vec2::ZERO, 20.0, 1.0, 10)
            .lane(LaneType::Driving, 3.0)
            .build_road();
        let b = road.lane_sections[0].boundaries();
        for j in 0..10 {
            assert_relative_eq!(b[0].vertices[j].distance(b[1].vertices[j]), 3.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_demo_network_is_valid() {
        let network = demo_network();
        assert_eq!(network.road_count(), 2);
        assert!(network.validate().is_ok());
    }

    #[test]
    fn test_empty_profile_gives_empty_road() {
        let road = DemoNetworkBuilder::straight("x", 10.0, 3).build_road();
        assert!(road.lane_sections.is_empty());
    }
}
