//! Seitliches Versetzen von Randkurven relativ zu einer Referenzkurve.

use glam::Vec2;

/// Verschiebt `original[j]` für jedes `j ∈ [from, to)` um genau `distance`
/// in Richtung `reference[j]`.
///
/// `distance = 0` liefert die Originalpunkte. Fallen Original- und
/// Referenzpunkt zusammen, bleibt der Punkt unverändert.
/// Ergebnislänge: `to − from`.
///
/// Vorbedingung: beide Kurven gleich lang und indexweise korrespondierend
/// (wird beim Aufbau des Straßenmodells geprüft).
pub fn shift(original: &[Vec2], reference: &[Vec2], distance: f32, from: usize, to: usize) -> Vec<Vec2> {
    debug_assert_eq!(
        original.len(),
        reference.len(),
        "Randkurven müssen gleich lang sein"
    );
    debug_assert!(from <= to && to <= original.len());

    original[from..to]
        .iter()
        .zip(&reference[from..to])
        .map(|(&point, &target)| point + (target - point).normalize_or_zero() * distance)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curves() -> (Vec<Vec2>, Vec<Vec2>) {
        let original = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 1.0),
            Vec2::new(20.0, 3.0),
            Vec2::new(30.0, 6.0),
        ];
        let reference = vec![
            Vec2::new(0.0, 4.0),
            Vec2::new(9.0, 5.0),
            Vec2::new(17.0, 6.5),
            Vec2::new(26.0, 9.0),
        ];
        (original, reference)
    }

    #[test]
    fn test_shift_moves_exact_distance_toward_reference() {
        let (original, reference) = curves();
        let d = 0.75;
        let shifted = shift(&original, &reference, d, 0, original.len());

        assert_eq!(shifted.len(), original.len());
        for j in 0..original.len() {
            assert_relative_eq!(shifted[j].distance(original[j]), d, epsilon = 1e-5);
            // Richtung zeigt zur Referenz
            let to_ref = (reference[j] - original[j]).normalize();
            let moved = (shifted[j] - original[j]).normalize();
            assert_relative_eq!(to_ref.dot(moved), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let (original, reference) = curves();
        let shifted = shift(&original, &reference, 0.0, 0, original.len());
        for (a, b) in shifted.iter().zip(&original) {
            assert_relative_eq!(a.x, b.x);
            assert_relative_eq!(a.y, b.y);
        }
    }

    #[test]
    fn test_sub_range_length() {
        let (original, reference) = curves();
        let shifted = shift(&original, &reference, 1.0, 1, 3);
        assert_eq!(shifted.len(), 2);
        assert_relative_eq!(shifted[0].distance(original[1]), 1.0, epsilon = 1e-5);

        assert!(shift(&original, &reference, 1.0, 2, 2).is_empty());
    }

    #[test]
    fn test_coincident_points_stay_put() {
        let original = vec![Vec2::new(1.0, 1.0)];
        let shifted = shift(&original, &original, 2.0, 0, 1);
        assert_eq!(shifted[0], Vec2::new(1.0, 1.0));
    }
}
