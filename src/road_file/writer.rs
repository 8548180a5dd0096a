//! Writer für Straßennetz-Dateien.

use std::path::Path;

use anyhow::{Context, Result};

use super::format::{LaneEntry, LaneSectionEntry, RoadEntry, RoadNetworkFile};
use crate::core::RoadNetwork;

/// Schreibt ein Straßennetz als JSON (mit expliziten Lane-IDs und Stationen).
pub fn write_road_network(network: &RoadNetwork) -> Result<String> {
    let file = RoadNetworkFile {
        roads: network
            .roads
            .iter()
            .map(|road| RoadEntry {
                id: road.id.clone(),
                lane_sections: road
                    .lane_sections
                    .iter()
                    .map(|section| LaneSectionEntry {
                        s_start: section.s_start(),
                        s_end: section.s_end(),
                        stations: Some(section.stations().to_vec()),
                        lanes: section
                            .lanes()
                            .iter()
                            .map(|lane| LaneEntry::Full {
                                id: lane.id,
                                lane_type: lane.lane_type.to_string(),
                            })
                            .collect(),
                        boundaries: section
                            .boundaries()
                            .iter()
                            .map(|b| b.vertices.iter().map(|v| v.to_array()).collect())
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&file)?)
}

/// Speichert ein Straßennetz als JSON-Datei.
pub fn save_road_network(network: &RoadNetwork, path: &Path) -> Result<()> {
    let content = write_road_network(network)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path.display()))?;
    log::info!("Straßennetz gespeichert nach: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoNetworkBuilder;
    use crate::road_file::parse_road_network;

    #[test]
    fn test_written_network_loads_again() {
        let network = DemoNetworkBuilder::straight_avenue(40.0, 5).build();
        let json = write_road_network(&network).expect("JSON erwartet");
        let back = parse_road_network(&json).expect("Netz erwartet");

        assert_eq!(back.road_count(), network.road_count());
        let (a, b) = (&network.roads[0].lane_sections[0], &back.roads[0].lane_sections[0]);
        assert_eq!(a.lanes(), b.lanes());
        assert_eq!(a.boundaries(), b.boundaries());
        assert_eq!(a.stations(), b.stations());
    }

    #[test]
    fn test_saved_file_loads_again() {
        let network = DemoNetworkBuilder::straight_avenue(30.0, 4).sections(2).build();
        let path = std::env::temp_dir().join(format!(
            "road_mesh_export_saved_network_{}.json",
            std::process::id()
        ));

        save_road_network(&network, &path).expect("Speichern erwartet");
        let back = crate::road_file::load_road_network(&path).expect("Laden erwartet");
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.lane_section_count(), 2);
        assert_eq!(
            back.roads[0].lane_sections[1].boundaries(),
            network.roads[0].lane_sections[1].boundaries()
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let network = DemoNetworkBuilder::straight_avenue(30.0, 4).build();
        let path = std::env::temp_dir()
            .join("road_mesh_export_no_such_dir")
            .join("net.json");
        let _ = std::fs::remove_dir_all(path.parent().expect("Elternverzeichnis"));
        assert!(save_road_network(&network, &path).is_err());
    }
}
