//! Serde-Abbild der JSON-Datei.

use serde::{Deserialize, Serialize};

/// Wurzel der Datei
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadNetworkFile {
    /// Alle Straßen
    #[serde(default)]
    pub roads: Vec<RoadEntry>,
}

/// Eine Straße
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadEntry {
    /// Straßen-ID
    pub id: String,
    /// Lane-Sections in Längsrichtung
    pub lane_sections: Vec<LaneSectionEntry>,
}

/// Eine Lane-Section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaneSectionEntry {
    /// Start (s)
    pub s_start: f32,
    /// Ende (s)
    pub s_end: f32,
    /// Station pro Querschnitt; ohne Angabe über die Bogenlänge verteilt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stations: Option<Vec<f32>>,
    /// Lanes von links nach rechts
    pub lanes: Vec<LaneEntry>,
    /// `lanes.len() + 1` Randkurven als `[x, y]`-Listen
    pub boundaries: Vec<Vec<[f32; 2]>>,
}

/// Lane: entweder nur der Typname oder mit expliziter ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LaneEntry {
    /// `"driving"`
    Name(String),
    /// `{ "id": -1, "type": "driving" }`
    Full {
        /// OpenDRIVE-Lane-ID
        id: i32,
        /// Typname
        #[serde(rename = "type")]
        lane_type: String,
    },
}
