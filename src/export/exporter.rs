//! Export-Pipeline: Klassifizierung → Bereich → Stitching → Dateien.
//!
//! Alle Puffer werden zuerst im Speicher aufgebaut. Geschrieben wird in
//! temporäre Dateien im Ausgabeverzeichnis, die erst nach dem letzten
//! erfolgreichen Schreibvorgang an ihren Zielnamen umbenannt werden.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use road_terrain::{Extent, TerrainHeightField, build_terrain_grid, heightmap_bytes};

use crate::core::RoadNetwork;
use crate::shared::{ExportOptions, OutputFiles};

use super::bounds::compute_extent;
use super::classifier::LaneClassifier;
use super::mesh_buffer::{Face, MeshBuffer, MeshPart};
use super::obj_writer::write_obj_string;
use super::stitcher::MeshStitcher;
use super::DrawCategory;

/// Im Speicher aufgebaute Export-Ergebnisse, noch nicht geschrieben.
#[derive(Debug, Clone)]
pub struct ExportArtifacts {
    /// Fahrbahnen (eigener Indexraum)
    pub roadway: MeshBuffer,
    /// Gehwege
    pub sidewalk: MeshBuffer,
    /// Bordsteine
    pub border: MeshBuffer,
    /// Markierungen
    pub markings: MeshBuffer,
    /// Sammel-Stream: Fahrbahn → Gehweg → Bordstein → Markierung
    pub merged: MeshBuffer,
    /// Fahrtrichtungs-Anker (nur Vertices)
    pub direction_anchors: MeshBuffer,
    /// Gehweg-Orientierungs-Anker (nur Vertices)
    pub orientation_anchors: MeshBuffer,
    /// Terrain-Mesh
    pub terrain: MeshBuffer,
    /// Quantisierte Heightmap, zeilenweise
    pub heightmap: Vec<u16>,
    /// Gemeinsamer Bereich
    pub extent: Extent,
    /// Übersprungene Lane-Sections
    pub skipped_sections: usize,
}

impl ExportArtifacts {
    fn stream_mut(&mut self, category: DrawCategory) -> &mut MeshBuffer {
        match category {
            DrawCategory::Roadway => &mut self.roadway,
            DrawCategory::Sidewalk => &mut self.sidewalk,
            DrawCategory::Border => &mut self.border,
            DrawCategory::Marking => &mut self.markings,
            DrawCategory::DirectionIndicator => &mut self.direction_anchors,
            DrawCategory::OrientationIndicator => &mut self.orientation_anchors,
        }
    }

    /// Stream einer Kategorie
    pub fn stream(&self, category: DrawCategory) -> &MeshBuffer {
        match category {
            DrawCategory::Roadway => &self.roadway,
            DrawCategory::Sidewalk => &self.sidewalk,
            DrawCategory::Border => &self.border,
            DrawCategory::Marking => &self.markings,
            DrawCategory::DirectionIndicator => &self.direction_anchors,
            DrawCategory::OrientationIndicator => &self.orientation_anchors,
        }
    }

    /// Dateiinhalte in der Reihenfolge von [`OutputFiles::all`]
    fn file_contents(&self) -> [Vec<u8>; 9] {
        [
            write_obj_string(&self.roadway).into_bytes(),
            write_obj_string(&self.sidewalk).into_bytes(),
            write_obj_string(&self.border).into_bytes(),
            write_obj_string(&self.markings).into_bytes(),
            write_obj_string(&self.terrain).into_bytes(),
            write_obj_string(&self.merged).into_bytes(),
            write_obj_string(&self.direction_anchors).into_bytes(),
            write_obj_string(&self.orientation_anchors).into_bytes(),
            heightmap_bytes(&self.heightmap),
        ]
    }
}

/// Zusammenfassung eines Exports
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Fahrbahn-Bänder
    pub roadway: usize,
    /// Gehweg-Bänder
    pub sidewalk: usize,
    /// Bordstein-Bänder
    pub border: usize,
    /// Markierungsstreifen
    pub markings: usize,
    /// Fahrtrichtungs-Anker
    pub direction_anchors: usize,
    /// Orientierungs-Anker
    pub orientation_anchors: usize,
    /// Übersprungene Lane-Sections
    pub skipped_sections: usize,
    /// Vertices im Sammel-Stream
    pub merged_vertices: u32,
    /// Flächen im Sammel-Stream
    pub merged_faces: usize,
    /// Vertices des Terrains
    pub terrain_vertices: u32,
    /// Flächen des Terrains
    pub terrain_faces: usize,
    /// Gemeinsamer Bereich
    pub extent: Extent,
    /// Geschriebene Dateien
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    fn new(artifacts: &ExportArtifacts, files: Vec<PathBuf>) -> Self {
        let objects = |category| artifacts.stream(category).objects().len();
        Self {
            roadway: objects(DrawCategory::Roadway),
            sidewalk: objects(DrawCategory::Sidewalk),
            border: objects(DrawCategory::Border),
            markings: objects(DrawCategory::Marking),
            direction_anchors: objects(DrawCategory::DirectionIndicator),
            orientation_anchors: objects(DrawCategory::OrientationIndicator),
            skipped_sections: artifacts.skipped_sections,
            merged_vertices: artifacts.merged.vertex_count(),
            merged_faces: artifacts.merged.face_count(),
            terrain_vertices: artifacts.terrain.vertex_count(),
            terrain_faces: artifacts.terrain.face_count(),
            extent: artifacts.extent,
            files,
        }
    }
}

/// Baut alle Export-Puffer im Speicher auf.
pub fn build_artifacts(network: &RoadNetwork, options: &ExportOptions) -> Result<ExportArtifacts> {
    options.validate().context("Ungültige Export-Optionen")?;
    network.validate().context("Ungültiges Straßennetz")?;

    let classified = LaneClassifier::new(options.classifier_params()).classify(network);
    let extent = compute_extent(&classified.lanes, options.extent_margin);
    let field = TerrainHeightField::new(options.seed, options.height_field_params());
    let stitcher = MeshStitcher::new(&field, &extent);

    let mut artifacts = ExportArtifacts {
        roadway: MeshBuffer::new(),
        sidewalk: MeshBuffer::new(),
        border: MeshBuffer::new(),
        markings: MeshBuffer::new(),
        merged: MeshBuffer::new(),
        direction_anchors: MeshBuffer::new(),
        orientation_anchors: MeshBuffer::new(),
        terrain: MeshBuffer::new(),
        heightmap: Vec::new(),
        extent,
        skipped_sections: classified.skipped_sections,
    };

    let mut counters = [0usize; 6];
    for lane in &classified.lanes {
        let part = stitcher.stitch(lane);
        if part.is_empty() {
            continue;
        }
        let slot = lane.category as usize;
        let name = format!("{}_{}", lane.category.object_prefix(), counters[slot]);
        counters[slot] += 1;
        artifacts.stream_mut(lane.category).append(name, &part);
    }

    // Sammel-Stream in fester Reihenfolge, eigener Indexraum
    for category in DrawCategory::SURFACES {
        let stream = artifacts.stream(category).clone();
        artifacts.merged.extend_from(&stream);
    }

    let grid = build_terrain_grid(&field, &extent, options.grid_points)?;
    let terrain = MeshPart {
        vertices: grid.vertices,
        faces: grid.triangles.into_iter().map(Face::Tri).collect(),
    };
    artifacts.terrain.append("terrain", &terrain);
    artifacts.heightmap = grid.samples;

    log::info!(
        "Export aufgebaut: {} Vertices / {} Flächen gesamt, Terrain {}×{}",
        artifacts.merged.vertex_count(),
        artifacts.merged.face_count(),
        options.grid_points,
        options.grid_points
    );

    Ok(artifacts)
}

/// Schreibt alle Dateien atomar ins Ausgabeverzeichnis.
///
/// Entweder werden alle Zieldateien ersetzt, oder keine.
pub fn write_artifacts(
    artifacts: &ExportArtifacts,
    output_dir: &Path,
    outputs: &OutputFiles,
) -> Result<Vec<PathBuf>> {
    outputs.validate()?;
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Ausgabeverzeichnis konnte nicht angelegt werden: {}",
            output_dir.display()
        )
    })?;

    let contents = artifacts.file_contents();
    let targets: Vec<PathBuf> = outputs.all().iter().map(|n| output_dir.join(n)).collect();
    let temps: Vec<PathBuf> = outputs
        .all()
        .iter()
        .map(|n| output_dir.join(format!(".{n}.tmp")))
        .collect();

    let result = write_temp_files(&temps, &contents).and_then(|()| rename_all(&temps, &targets));
    if let Err(e) = result {
        for temp in &temps {
            let _ = std::fs::remove_file(temp);
        }
        return Err(e);
    }

    for target in &targets {
        log::info!("Geschrieben: {}", target.display());
    }
    Ok(targets)
}

fn write_temp_files(temps: &[PathBuf], contents: &[Vec<u8>]) -> Result<()> {
    for (path, bytes) in temps.iter().zip(contents) {
        let file = File::create(path)
            .with_context(|| format!("Datei konnte nicht erstellt werden: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Schreiben fehlgeschlagen: {}", path.display()))?;
    }
    Ok(())
}

fn rename_all(temps: &[PathBuf], targets: &[PathBuf]) -> Result<()> {
    for (temp, target) in temps.iter().zip(targets) {
        std::fs::rename(temp, target).with_context(|| {
            format!(
                "Umbenennen fehlgeschlagen: {} -> {}",
                temp.display(),
                target.display()
            )
        })?;
    }
    Ok(())
}

/// Führt einen kompletten Export aus: aufbauen, schreiben, zusammenfassen.
pub fn export_network(network: &RoadNetwork, options: &ExportOptions) -> Result<ExportSummary> {
    log::info!(
        "Starte Export: {} Straßen, {} Lane-Sections -> {}",
        network.road_count(),
        network.lane_section_count(),
        options.output_dir.display()
    );

    let artifacts = build_artifacts(network, options)?;
    let files = write_artifacts(&artifacts, &options.output_dir, &options.outputs)?;
    let summary = ExportSummary::new(&artifacts, files);

    log::info!(
        "Export fertig: {} Fahrbahnen, {} Gehwege, {} Bordsteine, {} Markierungen",
        summary.roadway,
        summary.sidewalk,
        summary.border,
        summary.markings
    );
    Ok(summary)
}
