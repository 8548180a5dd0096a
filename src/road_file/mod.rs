//! JSON Import/Export für vortessellierte Straßennetze.
//!
//! Das Format trägt bereits tessellierte Randkurven. Beim Einlesen wird die
//! Korrespondenz-Vorbedingung genau einmal geprüft.

pub mod format;
pub mod reader;
pub mod writer;

pub use reader::{load_road_network, parse_road_network};
pub use writer::{save_road_network, write_road_network};
