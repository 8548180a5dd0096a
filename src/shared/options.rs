//! Zentrale Konfiguration für den Road-Mesh-Export.
//!
//! `ExportOptions` enthält alle einstellbaren Werte eines Exports.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::ensure;
use road_terrain::HeightFieldParams;
use serde::{Deserialize, Serialize};

use crate::export::ClassifierParams;

// ── Höhen ───────────────────────────────────────────────────────────

/// Höhenversatz der Fahrbahn über dem Gelände.
pub const DRIVING_ELEVATION: f32 = 0.1;
/// Höhenversatz der Gehwege (Bordsteinkante über der Fahrbahn).
pub const SIDEWALK_ELEVATION: f32 = 0.25;
/// Höhenversatz der Bordsteine.
pub const BORDER_ELEVATION: f32 = 0.3;
/// Höhenversatz der Markierungen, knapp über der Fahrbahn.
pub const MARKING_ELEVATION: f32 = 0.12;

// ── Markierungen ────────────────────────────────────────────────────

/// Breite eines Markierungsstreifens.
pub const MARKING_WIDTH: f32 = 0.15;
/// Abstand der Randlinie vom Fahrbahnrand.
pub const EDGE_MARKING_SHIFT: f32 = 0.3;
/// Strichlänge der Mittellinie in Tessellierungsschritten.
pub const STRIPE_LENGTH: usize = 3;
/// Lückenlänge der Mittellinie in Tessellierungsschritten.
pub const STRIPE_GAP: usize = 3;

// ── Terrain ─────────────────────────────────────────────────────────

/// Rausch-Frequenz über die volle Bereichsbreite.
pub const NOISE_SCALE: f64 = 4.0;
/// Amplitude und Grundhöhe des Geländes.
pub const NOISE_HEIGHT: f64 = 10.0;
/// Gitterpunkte pro Achse des Terrain-Gitters.
pub const GRID_POINTS: usize = 256;
/// Rand um die Straßen-Bounding-Box in Welteinheiten.
pub const EXTENT_MARGIN: f32 = 50.0;
/// Standard-Seed des Höhenfelds.
pub const TERRAIN_SEED: u32 = 42;

/// Dateinamen der Ausgabe-Streams (relativ zum Ausgabeverzeichnis).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputFiles {
    /// Fahrbahnen
    pub roadway: String,
    /// Gehwege
    pub sidewalk: String,
    /// Bordsteine
    pub border: String,
    /// Markierungen
    pub markings: String,
    /// Terrain-Mesh
    pub terrain: String,
    /// Sammel-Stream aller Oberflächen
    pub merged: String,
    /// Fahrtrichtungs-Anker
    pub direction_anchors: String,
    /// Gehweg-Orientierungs-Anker
    pub orientation_anchors: String,
    /// Raw-Heightmap
    pub heightmap: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            roadway: "streets.obj".into(),
            sidewalk: "sidewalk.obj".into(),
            border: "border.obj".into(),
            markings: "markings.obj".into(),
            terrain: "terrain.obj".into(),
            merged: "all.obj".into(),
            direction_anchors: "direction_anchors.obj".into(),
            orientation_anchors: "sidewalk_anchors.obj".into(),
            heightmap: "heightmap.raw".into(),
        }
    }
}

impl OutputFiles {
    /// Alle Dateinamen in fester Reihenfolge
    pub fn all(&self) -> [&str; 9] {
        [
            self.roadway.as_str(),
            self.sidewalk.as_str(),
            self.border.as_str(),
            self.markings.as_str(),
            self.terrain.as_str(),
            self.merged.as_str(),
            self.direction_anchors.as_str(),
            self.orientation_anchors.as_str(),
            self.heightmap.as_str(),
        ]
    }

    /// Prüft die Dateinamen: nicht leer, ohne Pfadanteile, paarweise verschieden.
    /// Jeder Stream braucht eine eigene Temp-Datei.
    pub fn validate(&self) -> anyhow::Result<()> {
        let names = self.all();
        for name in names {
            ensure!(!name.is_empty(), "Leerer Ausgabe-Dateiname");
            ensure!(
                !name.contains(['/', '\\']) && name != "." && name != "..",
                "Ausgabe-Dateiname darf keinen Pfad enthalten: '{}'",
                name
            );
        }
        let unique: HashSet<&str> = names.iter().copied().collect();
        ensure!(
            unique.len() == names.len(),
            "Ausgabe-Dateinamen müssen eindeutig sein ({} doppelt)",
            names.len() - unique.len()
        );
        Ok(())
    }
}

// ── Export-Optionen (serialisierbar) ───────────────────────────────

/// Alle einstellbaren Export-Optionen.
/// Wird als `road_mesh_export.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportOptions {
    // ── Höhen ───────────────────────────────────────────────────
    /// Höhenversatz der Fahrbahn
    pub driving_elevation: f32,
    /// Höhenversatz der Gehwege
    pub sidewalk_elevation: f32,
    /// Höhenversatz der Bordsteine
    pub border_elevation: f32,
    /// Höhenversatz der Markierungen
    pub marking_elevation: f32,

    // ── Markierungen ────────────────────────────────────────────
    /// Breite eines Markierungsstreifens
    pub marking_width: f32,
    /// Abstand der Randlinie vom Fahrbahnrand
    pub edge_marking_shift: f32,
    /// Strichlänge in Tessellierungsschritten
    pub stripe_length: usize,
    /// Lückenlänge in Tessellierungsschritten
    pub stripe_gap: usize,

    // ── Terrain ─────────────────────────────────────────────────
    /// Rausch-Frequenz
    pub noise_scale: f64,
    /// Amplitude und Grundhöhe
    pub noise_height: f64,
    /// Gitterpunkte pro Achse
    pub grid_points: usize,
    /// Rand um die Straßen
    pub extent_margin: f32,
    /// Seed des Höhenfelds
    #[serde(default = "default_seed")]
    pub seed: u32,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Ausgabeverzeichnis
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Dateinamen der Streams
    #[serde(default)]
    pub outputs: OutputFiles,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            driving_elevation: DRIVING_ELEVATION,
            sidewalk_elevation: SIDEWALK_ELEVATION,
            border_elevation: BORDER_ELEVATION,
            marking_elevation: MARKING_ELEVATION,

            marking_width: MARKING_WIDTH,
            edge_marking_shift: EDGE_MARKING_SHIFT,
            stripe_length: STRIPE_LENGTH,
            stripe_gap: STRIPE_GAP,

            noise_scale: NOISE_SCALE,
            noise_height: NOISE_HEIGHT,
            grid_points: GRID_POINTS,
            extent_margin: EXTENT_MARGIN,
            seed: TERRAIN_SEED,

            output_dir: default_output_dir(),
            outputs: OutputFiles::default(),
        }
    }
}

/// Serde-Default für `seed` (ältere Dateien ohne Seed).
fn default_seed() -> u32 {
    TERRAIN_SEED
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl ExportOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("road-mesh-export"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("road_mesh_export.toml")
    }

    /// Prüft die Werte vor dem Export.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.grid_points >= 2,
            "grid_points muss mindestens 2 sein (ist {})",
            self.grid_points
        );
        ensure!(
            self.grid_points <= usize::from(u16::MAX),
            "grid_points zu groß: {}",
            self.grid_points
        );
        ensure!(
            self.noise_height > 0.0,
            "noise_height muss positiv sein (ist {})",
            self.noise_height
        );
        ensure!(
            self.noise_scale > 0.0,
            "noise_scale muss positiv sein (ist {})",
            self.noise_scale
        );
        ensure!(
            self.stripe_length >= 1,
            "stripe_length muss mindestens 1 sein"
        );
        ensure!(
            self.extent_margin >= 0.0,
            "extent_margin darf nicht negativ sein (ist {})",
            self.extent_margin
        );
        ensure!(
            self.marking_width >= 0.0 && self.edge_marking_shift >= 0.0,
            "Markierungsbreite und -versatz dürfen nicht negativ sein"
        );
        self.outputs.validate()
    }

    /// Parameter für den Lane-Klassifizierer
    pub fn classifier_params(&self) -> ClassifierParams {
        ClassifierParams {
            driving_elevation: self.driving_elevation,
            sidewalk_elevation: self.sidewalk_elevation,
            border_elevation: self.border_elevation,
            marking_elevation: self.marking_elevation,
            marking_width: self.marking_width,
            edge_marking_shift: self.edge_marking_shift,
            stripe_length: self.stripe_length,
            stripe_gap: self.stripe_gap,
        }
    }

    /// Parameter für das Höhenfeld
    pub fn height_field_params(&self) -> HeightFieldParams {
        HeightFieldParams {
            noise_scale: self.noise_scale,
            noise_height: self.noise_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = ExportOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.outputs.roadway, "streets.obj");
        assert_eq!(opts.outputs.heightmap, "heightmap.raw");
        assert_eq!(opts.classifier_params(), ClassifierParams::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut opts = ExportOptions::default();
        opts.grid_points = 17;
        opts.seed = 1234;
        opts.outputs.merged = "everything.obj".into();

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let back: ExportOptions = toml::from_str(&text).expect("Deserialisierung erwartet");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_outputs_use_defaults() {
        let mut text = toml::to_string_pretty(&ExportOptions::default()).expect("TOML");
        let cut = text.find("[outputs]").expect("Abschnitt erwartet");
        text.truncate(cut);
        let opts: ExportOptions = toml::from_str(&text).expect("Deserialisierung erwartet");
        assert_eq!(opts.outputs, OutputFiles::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            ExportOptions {
                grid_points: 1,
                ..Default::default()
            },
            ExportOptions {
                noise_height: 0.0,
                ..Default::default()
            },
            ExportOptions {
                noise_scale: -1.0,
                ..Default::default()
            },
            ExportOptions {
                stripe_length: 0,
                ..Default::default()
            },
            ExportOptions {
                extent_margin: -5.0,
                ..Default::default()
            },
        ];
        for opts in bad {
            assert!(opts.validate().is_err(), "{:?} sollte abgelehnt werden", opts);
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_output_names() {
        let mut opts = ExportOptions::default();
        opts.outputs.merged = opts.outputs.roadway.clone();
        let err = opts.validate().expect_err("doppelter Name muss abgelehnt werden");
        assert!(err.to_string().contains("eindeutig"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_output_paths() {
        for name in ["sub/streets.obj", "..\\streets.obj", ".."] {
            let mut opts = ExportOptions::default();
            opts.outputs.terrain = name.into();
            assert!(opts.validate().is_err(), "'{}' sollte abgelehnt werden", name);
        }
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("road_mesh_export_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(ExportOptions::load_from_file(&path), ExportOptions::default());
    }
}
