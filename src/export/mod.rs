//! Mesh-Export: Klassifizierung, Stitching und OBJ-Ausgabe.

pub mod bounds;
pub mod classifier;
pub mod draw_lane;
pub mod exporter;
pub mod mesh_buffer;
pub mod obj_writer;
pub mod offset;
pub mod stitcher;

pub use bounds::compute_extent;
pub use classifier::{ClassifiedLanes, ClassifierParams, LaneClassifier};
pub use draw_lane::{DrawCategory, DrawLane};
pub use exporter::{ExportArtifacts, ExportSummary, build_artifacts, export_network, write_artifacts};
pub use mesh_buffer::{Face, MeshBuffer, MeshPart};
pub use obj_writer::write_obj_string;
pub use offset::shift;
pub use stitcher::MeshStitcher;
