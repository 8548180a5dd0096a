//! Geteilte Konfiguration für Pipeline, CLI und Tests.

pub mod options;

pub use options::{ExportOptions, OutputFiles};
