//! Parser für Straßennetz-Dateien.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;

use super::format::{LaneEntry, LaneSectionEntry, RoadNetworkFile};
use crate::core::{BoundaryCurve, Lane, LaneSection, LaneType, Road, RoadModelError, RoadNetwork};

/// Parsed ein Straßennetz aus einem JSON-String.
///
/// Verletzte Vorbedingungen liefern einen [`RoadModelError::InSection`] mit
/// Straße und Section-Index.
pub fn parse_road_network(json: &str) -> Result<RoadNetwork> {
    let file: RoadNetworkFile =
        serde_json::from_str(json).context("Straßennetz-JSON konnte nicht gelesen werden")?;

    let mut roads = Vec::with_capacity(file.roads.len());
    for road in file.roads {
        let mut sections = Vec::with_capacity(road.lane_sections.len());
        for (index, entry) in road.lane_sections.into_iter().enumerate() {
            let section = build_section(entry).map_err(|e| e.in_section(&road.id, index))?;
            sections.push(section);
        }
        roads.push(Road::new(road.id, sections));
    }

    let network = RoadNetwork::new(roads);
    log::info!(
        "Straßennetz geladen: {} Straßen, {} Lane-Sections, {} Lanes",
        network.road_count(),
        network.lane_section_count(),
        network.lane_count()
    );
    Ok(network)
}

/// Lädt ein Straßennetz aus einer JSON-Datei.
pub fn load_road_network(path: &Path) -> Result<RoadNetwork> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    parse_road_network(&content).with_context(|| format!("Fehler in {}", path.display()))
}

fn build_section(entry: LaneSectionEntry) -> Result<LaneSection, RoadModelError> {
    let lane_count = entry.lanes.len();
    let lanes = entry
        .lanes
        .into_iter()
        .enumerate()
        .map(|(i, lane)| build_lane(lane, default_lane_id(i, lane_count)))
        .collect::<Result<Vec<_>, _>>()?;

    let boundaries: Vec<BoundaryCurve> = entry
        .boundaries
        .into_iter()
        .map(|points| BoundaryCurve::new(points.into_iter().map(Vec2::from_array).collect()))
        .collect();

    match entry.stations {
        Some(stations) => {
            LaneSection::with_stations(entry.s_start, entry.s_end, lanes, boundaries, stations)
        }
        None => LaneSection::new(entry.s_start, entry.s_end, lanes, boundaries),
    }
}

fn build_lane(entry: LaneEntry, default_id: i32) -> Result<Lane, RoadModelError> {
    match entry {
        LaneEntry::Name(name) => Ok(Lane::new(default_id, name.parse::<LaneType>()?)),
        LaneEntry::Full { id, lane_type } => Ok(Lane::new(id, lane_type.parse()?)),
    }
}

/// OpenDRIVE-Nummerierung ohne Mittellane: links `n/2 … 1`, rechts `−1 … −(n − n/2)`.
fn default_lane_id(index: usize, lane_count: usize) -> i32 {
    let left = (lane_count / 2) as i32;
    let index = index as i32;
    if index < left {
        left - index
    } else {
        -(index - left + 1)
    }
}
