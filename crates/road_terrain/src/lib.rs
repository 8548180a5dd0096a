//! `road_terrain`: Prozedurales Umgebungsgelände für den Road-Mesh-Export.
//!
//! Enthält alles, was Straßen-Meshes und Terrain gemeinsam brauchen, um auf
//! derselben Oberfläche zu liegen:
//! - [`Extent`]: gemeinsamer quadratischer Koordinatenrahmen
//! - [`TerrainHeightField`]: deterministisches Perlin-Höhenfeld mit Falloff
//! - [`build_terrain_grid`]: gleichmäßiges Terrain-Gitter + quantisiertes Raster
//! - [`heightmap_bytes`]: Raw-Heightmap (u16, Little-Endian, ohne Header)
//!
//! # Beispiel
//! ```
//! use road_terrain::{build_terrain_grid, Extent, HeightFieldParams, TerrainHeightField};
//! use glam::Vec2;
//!
//! let extent = Extent::from_bounds(Vec2::new(-10.0, -5.0), Vec2::new(10.0, 5.0), 20.0);
//! let field = TerrainHeightField::new(7, HeightFieldParams::default());
//! let grid = build_terrain_grid(&field, &extent, 16)?;
//! assert_eq!(grid.samples.len(), 16 * 16);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod extent;
pub mod grid;
pub mod heightfield;
pub mod raster;

pub use extent::Extent;
pub use grid::{TerrainGrid, build_terrain_grid};
pub use heightfield::{HeightFieldParams, TerrainHeightField};
pub use raster::{HEIGHTMAP_LEVELS, heightmap_bytes, quantize_height};
