//! Lane-Klassifizierung: welche Randkurvenpaare werden zu welcher Fläche.
//!
//! Eine kleine Regeltabelle `{Lane-Typ, Kategorie, Höhe, Aufnahmeregel}`
//! ersetzt die typweise Verzweigung. Fahrbahnen erzeugen zusätzlich
//! Markierungsstreifen über den [`shift`](super::offset::shift)-Versatz.

use crate::core::{BoundaryCurve, LaneSection, LaneType, RoadNetwork};
use crate::shared::options;

use super::offset::shift;
use super::{DrawCategory, DrawLane};

/// Parameter der Klassifizierung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierParams {
    /// Höhenversatz der Fahrbahn
    pub driving_elevation: f32,
    /// Höhenversatz der Gehwege
    pub sidewalk_elevation: f32,
    /// Höhenversatz der Bordsteine
    pub border_elevation: f32,
    /// Höhenversatz der Markierungen (knapp über der Fahrbahn)
    pub marking_elevation: f32,
    /// Breite eines Markierungsstreifens
    pub marking_width: f32,
    /// Abstand der Randlinie vom Fahrbahnrand
    pub edge_marking_shift: f32,
    /// Strichlänge der Mittellinie in Tessellierungsschritten
    pub stripe_length: usize,
    /// Lückenlänge der Mittellinie in Tessellierungsschritten
    pub stripe_gap: usize,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            driving_elevation: options::DRIVING_ELEVATION,
            sidewalk_elevation: options::SIDEWALK_ELEVATION,
            border_elevation: options::BORDER_ELEVATION,
            marking_elevation: options::MARKING_ELEVATION,
            marking_width: options::MARKING_WIDTH,
            edge_marking_shift: options::EDGE_MARKING_SHIFT,
            stripe_length: options::STRIPE_LENGTH,
            stripe_gap: options::STRIPE_GAP,
        }
    }
}

/// Eine Zeile der Regeltabelle
struct CategoryRule {
    lane_type: LaneType,
    category: DrawCategory,
    elevation: fn(&ClassifierParams) -> f32,
    include: fn(&[LaneType], usize) -> bool,
    indicator: Option<DrawCategory>,
    markings: bool,
}

const RULES: [CategoryRule; 3] = [
    CategoryRule {
        lane_type: LaneType::Driving,
        category: DrawCategory::Roadway,
        elevation: |p| p.driving_elevation,
        include: |_, _| true,
        indicator: Some(DrawCategory::DirectionIndicator),
        markings: true,
    },
    CategoryRule {
        lane_type: LaneType::Sidewalk,
        category: DrawCategory::Sidewalk,
        elevation: |p| p.sidewalk_elevation,
        include: |_, _| true,
        indicator: Some(DrawCategory::OrientationIndicator),
        markings: false,
    },
    CategoryRule {
        lane_type: LaneType::Border,
        category: DrawCategory::Border,
        elevation: |p| p.border_elevation,
        include: border_is_kept,
        indicator: None,
        markings: false,
    },
];

// ── Nachbar-Prädikate ──────────────────────────────────────────────
// Ein Index außerhalb der Lane-Liste bedeutet "kein Nachbar": das Prädikat
// schlägt fehl, es zählt nie als Treffer.

/// Lane-Typ an `index`, `None` außerhalb des Querschnitts
pub fn lane_at(types: &[LaneType], index: isize) -> Option<LaneType> {
    usize::try_from(index).ok().and_then(|i| types.get(i).copied())
}

fn lane_is(types: &[LaneType], index: isize, wanted: LaneType) -> bool {
    lane_at(types, index) == Some(wanted)
}

/// Bordstein wird nur behalten, wenn genau einer der beiden direkten Nachbarn ein Gehweg ist.
pub fn border_is_kept(types: &[LaneType], index: usize) -> bool {
    let i = index as isize;
    lane_is(types, i - 1, LaneType::Sidewalk) != lane_is(types, i + 1, LaneType::Sidewalk)
}

/// Linke Randlinie: Lane `i-1` ist Border/Shoulder und Lane `i-2` ein Gehweg.
pub fn has_left_edge_marking(types: &[LaneType], index: usize) -> bool {
    let i = index as isize;
    lane_at(types, i - 1).is_some_and(LaneType::is_edge_strip)
        && lane_is(types, i - 2, LaneType::Sidewalk)
}

/// Rechte Randlinie: Lane `i+1` ist Border/Shoulder und Lane `i+2` ein Gehweg.
pub fn has_right_edge_marking(types: &[LaneType], index: usize) -> bool {
    let i = index as isize;
    lane_at(types, i + 1).is_some_and(LaneType::is_edge_strip)
        && lane_is(types, i + 2, LaneType::Sidewalk)
}

/// Mittellinie: die linke Nachbar-Lane ist ebenfalls eine Fahrbahn.
pub fn has_center_line(types: &[LaneType], index: usize) -> bool {
    lane_is(types, index as isize - 1, LaneType::Driving)
}

/// Lanes in der ersten Hälfte des Querschnitts laufen der Referenzlinie entgegen.
pub fn is_flipped(index: usize, lane_count: usize) -> bool {
    2 * index + 1 < lane_count
}

/// Ergebnis der Klassifizierung
#[derive(Debug, Clone, Default)]
pub struct ClassifiedLanes {
    /// Alle Kurvenpaare in Erzeugungsreihenfolge
    pub lanes: Vec<DrawLane>,
    /// Anzahl übersprungener Lane-Sections
    pub skipped_sections: usize,
}

impl ClassifiedLanes {
    /// Alle Kurvenpaare einer Kategorie
    pub fn of_category(&self, category: DrawCategory) -> impl Iterator<Item = &DrawLane> {
        self.lanes.iter().filter(move |l| l.category == category)
    }

    /// Anzahl der Kurvenpaare einer Kategorie
    pub fn count(&self, category: DrawCategory) -> usize {
        self.of_category(category).count()
    }

    /// Alle Flächen-Paare (ohne Anker)
    pub fn surfaces(&self) -> impl Iterator<Item = &DrawLane> {
        self.lanes.iter().filter(|l| !l.category.is_indicator())
    }
}

/// Klassifiziert alle Lanes eines Straßennetzes.
pub struct LaneClassifier {
    params: ClassifierParams,
}

impl LaneClassifier {
    /// Erstellt einen Klassifizierer
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    /// Läuft über alle Straßen und Sections und sammelt die Kurvenpaare.
    pub fn classify(&self, network: &RoadNetwork) -> ClassifiedLanes {
        let mut result = ClassifiedLanes::default();

        for road in &network.roads {
            for (section_index, section) in road.lane_sections.iter().enumerate() {
                let before = result.lanes.len();
                if !self.classify_section(section, &mut result.lanes) {
                    result.skipped_sections += 1;
                    log::debug!(
                        "Straße '{}', Section {}: übersprungen",
                        road.id,
                        section_index
                    );
                    continue;
                }
                log::debug!(
                    "Straße '{}', Section {}: {} Kurvenpaare",
                    road.id,
                    section_index,
                    result.lanes.len() - before
                );
            }
        }

        log::info!(
            "Klassifizierung: {} Fahrbahnen, {} Gehwege, {} Bordsteine, {} Markierungen, {} Sections übersprungen",
            result.count(DrawCategory::Roadway),
            result.count(DrawCategory::Sidewalk),
            result.count(DrawCategory::Border),
            result.count(DrawCategory::Marking),
            result.skipped_sections
        );

        result
    }

    /// Klassifiziert eine Section. Gibt `false` zurück, wenn sie übersprungen wurde.
    pub fn classify_section(&self, section: &LaneSection, out: &mut Vec<DrawLane>) -> bool {
        let types = section.lane_types();
        if !types.iter().any(|t| t.is_exported()) {
            return false;
        }

        let boundaries = section.tessellate_boundary_curves(section.s_range());
        if boundaries.first().map_or(0, BoundaryCurve::len) < 2 {
            log::warn!(
                "Lane-Section bei s={:.2} hat weniger als 2 Querschnitte",
                section.s_start()
            );
            return false;
        }

        for (index, &lane_type) in types.iter().enumerate() {
            let Some(rule) = RULES.iter().find(|r| r.lane_type == lane_type) else {
                continue;
            };
            if !(rule.include)(&types, index) {
                continue;
            }

            let left = &boundaries[index];
            let right = &boundaries[index + 1];
            let elevation = (rule.elevation)(&self.params);

            out.push(DrawLane::new(
                rule.category,
                left.clone(),
                right.clone(),
                elevation,
            ));

            if let Some(indicator) = rule.indicator {
                let pair = DrawLane::new(indicator, left.clone(), right.clone(), elevation);
                out.push(if is_flipped(index, types.len()) {
                    pair.flipped()
                } else {
                    pair
                });
            }

            if rule.markings {
                self.push_markings(&types, index, &boundaries, out);
            }
        }

        true
    }

    /// Randlinien und Mittellinien-Striche für die Fahrbahn `index`.
    fn push_markings(
        &self,
        types: &[LaneType],
        index: usize,
        boundaries: &[BoundaryCurve],
        out: &mut Vec<DrawLane>,
    ) {
        let p = &self.params;
        let left = &boundaries[index].vertices;
        let right = &boundaries[index + 1].vertices;
        let inner = p.edge_marking_shift;
        let outer = p.edge_marking_shift + p.marking_width;

        if has_left_edge_marking(types, index) {
            out.push(self.marking(
                shift(left, right, inner, 0, left.len()),
                shift(left, right, outer, 0, left.len()),
            ));
        }

        if has_right_edge_marking(types, index) {
            out.push(self.marking(
                shift(right, left, outer, 0, right.len()),
                shift(right, left, inner, 0, right.len()),
            ));
        }

        if has_center_line(types, index) {
            // Lane i-1 existiert, also auch Randkurve i-1
            let far_left = &boundaries[index - 1].vertices;
            let half = p.marking_width / 2.0;
            for (from, to) in stripe_runs(left.len(), p.stripe_length, p.stripe_gap) {
                out.push(self.marking(
                    shift(left, far_left, half, from, to),
                    shift(left, right, half, from, to),
                ));
            }
        }
    }

    fn marking(&self, left: Vec<glam::Vec2>, right: Vec<glam::Vec2>) -> DrawLane {
        DrawLane::new(
            DrawCategory::Marking,
            BoundaryCurve::new(left),
            BoundaryCurve::new(right),
            self.params.marking_elevation,
        )
    }
}

/// Index-Bereiche `[from, to)` der Mittellinien-Striche.
///
/// Ein Strich umfasst `stripe_length` Tessellierungsschritte (also
/// `stripe_length + 1` Punkte), danach folgen `stripe_gap` Schritte Lücke.
/// Gemessen wird in Indexschritten, nicht in Bogenlänge: die Strichlänge
/// hängt von der Abtastdichte der Kurve ab.
pub fn stripe_runs(point_count: usize, stripe_length: usize, stripe_gap: usize) -> Vec<(usize, usize)> {
    let stripe_length = stripe_length.max(1);
    let period = stripe_length + stripe_gap;

    let mut runs = Vec::new();
    let mut start = 0;
    while start + 1 < point_count {
        let end = (start + stripe_length + 1).min(point_count);
        runs.push((start, end));
        start += period;
    }
    runs
}
