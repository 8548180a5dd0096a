//! Quantisierung und Raw-Export der Heightmap.
//!
//! Format: zeilenweise `u16`-Samples, Little-Endian, ohne Header.

/// Anzahl der Quantisierungsstufen; alle Samples liegen in `[0, HEIGHTMAP_LEVELS)`.
pub const HEIGHTMAP_LEVELS: u16 = 8192;

/// Quantisiert eine Höhe: `[0, 2·noise_height)` → `[0, 8192)`.
///
/// Werte außerhalb werden auf den gültigen Bereich geklemmt, NaN ergibt 0.
pub fn quantize_height(height: f32, noise_height: f32) -> u16 {
    let range = 2.0 * noise_height;
    if range.is_nan() || range <= 0.0 || height.is_nan() {
        return 0;
    }
    let normalized = height / range;
    let level = (normalized * f32::from(HEIGHTMAP_LEVELS)).floor();
    level.clamp(0.0, f32::from(HEIGHTMAP_LEVELS - 1)) as u16
}

/// Wandelt Samples in den Raw-Byte-Strom (Little-Endian) um.
pub fn heightmap_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
