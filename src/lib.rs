//! Road-Mesh-Export Library.
//! Straßenmodell, Klassifizierung und Mesh-Export als Library für CLI, Tests und Benchmarks.

pub mod core;
pub mod demo;
pub mod export;
pub mod road_file;
pub mod shared;

pub use crate::core::{BoundaryCurve, Lane, LaneSection, LaneType, Road, RoadModelError, RoadNetwork};
pub use export::{
    DrawCategory, DrawLane, ExportSummary, LaneClassifier, MeshBuffer, MeshStitcher,
    build_artifacts, export_network,
};
pub use road_file::{load_road_network, parse_road_network, save_road_network, write_road_network};
pub use shared::ExportOptions;
