//! Lane-Typen und einzelne Lanes eines Querschnitts.

use std::fmt;
use std::str::FromStr;

use super::RoadModelError;

/// Typ einer Lane (vollständige OpenDRIVE-Aufzählung).
///
/// Steuert Klassifizierung und Höhenversatz beim Mesh-Export. Nur `Driving`,
/// `Sidewalk`, `Border` (und `Shoulder` als Nachbar-Prädikat) sind für den
/// Export relevant, alle anderen werden verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaneType {
    #[default]
    None,
    Driving,
    Stop,
    Shoulder,
    Biking,
    Sidewalk,
    Border,
    Restricted,
    Parking,
    Bidirectional,
    Median,
    Special1,
    Special2,
    Special3,
    RoadWorks,
    Tram,
    Rail,
    Entry,
    Exit,
    OffRamp,
    OnRamp,
    ConnectingRamp,
    Bus,
    Taxi,
    Hov,
}

impl LaneType {
    /// Alle Varianten in Definitionsreihenfolge
    pub const ALL: [LaneType; 25] = [
        LaneType::None,
        LaneType::Driving,
        LaneType::Stop,
        LaneType::Shoulder,
        LaneType::Biking,
        LaneType::Sidewalk,
        LaneType::Border,
        LaneType::Restricted,
        LaneType::Parking,
        LaneType::Bidirectional,
        LaneType::Median,
        LaneType::Special1,
        LaneType::Special2,
        LaneType::Special3,
        LaneType::RoadWorks,
        LaneType::Tram,
        LaneType::Rail,
        LaneType::Entry,
        LaneType::Exit,
        LaneType::OffRamp,
        LaneType::OnRamp,
        LaneType::ConnectingRamp,
        LaneType::Bus,
        LaneType::Taxi,
        LaneType::Hov,
    ];

    /// OpenDRIVE-Name des Typs (wie im `type`-Attribut)
    pub fn as_str(self) -> &'static str {
        match self {
            LaneType::None => "none",
            LaneType::Driving => "driving",
            LaneType::Stop => "stop",
            LaneType::Shoulder => "shoulder",
            LaneType::Biking => "biking",
            LaneType::Sidewalk => "sidewalk",
            LaneType::Border => "border",
            LaneType::Restricted => "restricted",
            LaneType::Parking => "parking",
            LaneType::Bidirectional => "bidirectional",
            LaneType::Median => "median",
            LaneType::Special1 => "special1",
            LaneType::Special2 => "special2",
            LaneType::Special3 => "special3",
            LaneType::RoadWorks => "roadWorks",
            LaneType::Tram => "tram",
            LaneType::Rail => "rail",
            LaneType::Entry => "entry",
            LaneType::Exit => "exit",
            LaneType::OffRamp => "offRamp",
            LaneType::OnRamp => "onRamp",
            LaneType::ConnectingRamp => "connectingRamp",
            LaneType::Bus => "bus",
            LaneType::Taxi => "taxi",
            LaneType::Hov => "HOV",
        }
    }

    /// Randstreifen im Sinne der Markierungsregel (Border oder Shoulder)
    pub fn is_edge_strip(self) -> bool {
        matches!(self, LaneType::Border | LaneType::Shoulder)
    }

    /// Wird dieser Typ überhaupt exportiert?
    pub fn is_exported(self) -> bool {
        matches!(
            self,
            LaneType::Driving | LaneType::Sidewalk | LaneType::Border
        )
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaneType {
    type Err = RoadModelError;

    /// Parst den OpenDRIVE-Namen (Groß-/Kleinschreibung egal, `_` wird ignoriert).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        LaneType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| RoadModelError::UnknownLaneType(s.to_string()))
    }
}

/// Eine Lane in einem Querschnitt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    /// OpenDRIVE-Lane-ID (links positiv, rechts negativ)
    pub id: i32,
    /// Typ der Lane
    pub lane_type: LaneType,
}

impl Lane {
    /// Erstellt eine neue Lane
    pub fn new(id: i32, lane_type: LaneType) -> Self {
        Self { id, lane_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_type_roundtrip_names() {
        for lane_type in LaneType::ALL {
            let parsed: LaneType = lane_type.as_str().parse().expect("Name muss parsebar sein");
            assert_eq!(parsed, lane_type);
        }
    }

    #[test]
    fn test_lane_type_parse_is_lenient() {
        assert_eq!("DRIVING".parse::<LaneType>().ok(), Some(LaneType::Driving));
        assert_eq!("off_ramp".parse::<LaneType>().ok(), Some(LaneType::OffRamp));
        assert_eq!(" hov ".parse::<LaneType>().ok(), Some(LaneType::Hov));
        assert!(matches!(
            "highway".parse::<LaneType>(),
            Err(RoadModelError::UnknownLaneType(_))
        ));
    }

    #[test]
    fn test_edge_strip_predicate() {
        assert!(LaneType::Border.is_edge_strip());
        assert!(LaneType::Shoulder.is_edge_strip());
        assert!(!LaneType::Sidewalk.is_edge_strip());
        assert!(!LaneType::Shoulder.is_exported());
    }
}
