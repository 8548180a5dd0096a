//! Core-Domänentypen: Lanes, Lane-Sections, Straßen und das Straßennetz.

pub mod error;
pub mod lane;
pub mod lane_section;
pub mod road;

pub use error::RoadModelError;
pub use lane::{Lane, LaneType};
pub use lane_section::{BoundaryCurve, LaneSection};
pub use road::{Road, RoadNetwork};
