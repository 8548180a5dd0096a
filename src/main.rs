//! Road-Mesh-Export CLI.
//!
//! Lädt ein Straßennetz (JSON oder Demo), exportiert es als OBJ-Meshes plus
//! Terrain und Raw-Heightmap und protokolliert eine Zusammenfassung.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use road_mesh_export::demo::demo_network;
use road_mesh_export::{
    ExportOptions, ExportSummary, export_network, load_road_network, save_road_network,
};

/// Exportiert Straßennetze als geschichtete 3D-Meshes mit Umgebungsgelände
#[derive(Parser, Debug)]
#[command(name = "road-mesh-export", version, about)]
struct Cli {
    /// Straßennetz als JSON-Datei
    #[arg(short, long, conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Eingebautes Demo-Netz verwenden
    #[arg(long)]
    demo: bool,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ausgabeverzeichnis (überschreibt die Optionen-Datei)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Seed des Höhenfelds
    #[arg(long)]
    seed: Option<u32>,

    /// Gitterpunkte pro Achse des Terrains
    #[arg(long)]
    grid: Option<usize>,

    /// Standard-Optionen in diese Datei schreiben und beenden
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,

    /// Geladenes Straßennetz zusätzlich als JSON speichern (z.B. das Demo-Netz)
    #[arg(long, value_name = "PATH")]
    save_network: Option<PathBuf>,
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("Export fehlgeschlagen: {:#}", e);
        eprintln!("Fehler: {:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Road-Mesh-Export v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.write_default_config {
        return ExportOptions::default().save_to_file(path);
    }

    let config_path = cli.config.clone().unwrap_or_else(ExportOptions::config_path);
    let mut options = ExportOptions::load_from_file(&config_path);
    if let Some(dir) = cli.output_dir {
        options.output_dir = dir;
    }
    if let Some(seed) = cli.seed {
        options.seed = seed;
    }
    if let Some(grid) = cli.grid {
        options.grid_points = grid;
    }

    let network = match (&cli.input, cli.demo) {
        (Some(path), _) => load_road_network(path)?,
        (None, true) => demo_network(),
        (None, false) => {
            anyhow::bail!("Weder --input noch --demo angegeben")
        }
    };

    if let Some(path) = &cli.save_network {
        save_road_network(&network, path)?;
    }

    let summary = export_network(&network, &options).context("Export abgebrochen")?;
    log_summary(&summary);
    Ok(())
}

fn log_summary(summary: &ExportSummary) {
    log::info!(
        "Bänder: {} Fahrbahn, {} Gehweg, {} Bordstein, {} Markierung",
        summary.roadway,
        summary.sidewalk,
        summary.border,
        summary.markings
    );
    log::info!(
        "Anker: {} Fahrtrichtung, {} Orientierung; {} Sections übersprungen",
        summary.direction_anchors,
        summary.orientation_anchors,
        summary.skipped_sections
    );
    log::info!(
        "Gesamt: {} Vertices, {} Flächen; Terrain: {} Vertices, {} Flächen",
        summary.merged_vertices,
        summary.merged_faces,
        summary.terrain_vertices,
        summary.terrain_faces
    );
    log::info!(
        "Bereich: ({:.1}, {:.1}) Breite {:.1}, {} Dateien",
        summary.extent.min_x,
        summary.extent.min_y,
        summary.extent.width,
        summary.files.len()
    );
}
