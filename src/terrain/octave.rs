//! Octave combination (fractal Brownian motion) over a [`NoiseField`].

use crate::error::{Result, TerrainError};
use crate::noise::{NoiseField, MAX_COORDINATE};

/// Sum `octaves` layers of noise at `(x, y)`.
///
/// Each successive octave doubles the spatial frequency and halves the
/// amplitude. The weighted sum is divided by the sum of weights, so the
/// result stays in `[0, 1]` for any octave count.
///
/// # Errors
/// `InvalidArgument` when `octaves == 0` (the weight sum would be zero), or
/// when the highest octave would sample outside the noise domain
/// (see [`check_octave_domain`]).
pub fn combine(field: &NoiseField, x: f64, y: f64, octaves: u32) -> Result<f64> {
    check_octave_domain(x, y, octaves)?;

    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut amplitude_sum = 0.0;

    for _ in 0..octaves {
        value += field.try_sample(x * frequency, y * frequency)? * amplitude;
        amplitude_sum += amplitude;

        amplitude /= 2.0;
        frequency *= 2.0;
    }

    Ok(value / amplitude_sum)
}

/// Check that every octave of a sample at `(x, y)` stays inside the noise
/// domain.
///
/// The last octave reads at `2^(octaves - 1)` times the base coordinate, so
/// the octave budget shrinks as `|x|` and `|y|` grow.
pub fn check_octave_domain(x: f64, y: f64, octaves: u32) -> Result<()> {
    if octaves == 0 {
        return Err(TerrainError::invalid("octave count must be at least 1"));
    }
    if !(x.is_finite() && y.is_finite()) {
        return Err(TerrainError::invalid(format!(
            "sample coordinate ({x}, {y}) must be finite"
        )));
    }

    // Past 2^1023 the frequency itself overflows
    let top_frequency = 2f64.powi(octaves.min(1025) as i32 - 1);
    let extent = x.abs().max(y.abs()) * top_frequency;
    if !top_frequency.is_finite() || extent > MAX_COORDINATE {
        return Err(TerrainError::invalid(format!(
            "{octaves} octaves at ({x}, {y}) sample beyond the noise domain"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_octave_is_raw_sample() {
        let field = NoiseField::default();
        for i in 0..25 {
            let x = i as f64 * 0.37 - 2.0;
            let y = i as f64 * -0.11 + 1.5;
            assert_eq!(combine(&field, x, y, 1).unwrap(), field.sample(x, y));
        }
    }

    #[test]
    fn test_combine_range() {
        let field = NoiseField::new(99);
        for octaves in [1, 2, 3, 5, 8, 16] {
            for i in 0..30 {
                for j in 0..30 {
                    let (x, y) = (i as f64 / 30.0, j as f64 / 30.0);
                    let v = combine(&field, x, y, octaves).unwrap();
                    assert!(
                        (0.0..=1.0).contains(&v),
                        "combine({x}, {y}, {octaves}) = {v} out of range"
                    );
                }
            }
        }
    }

    #[test]
    fn test_two_octaves_weighting() {
        let field = NoiseField::default();
        let (x, y) = (0.3, 0.8);
        let expected = (field.sample(x, y) + field.sample(2.0 * x, 2.0 * y) * 0.5) / 1.5;
        let actual = combine(&field, x, y, 2).unwrap();
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn test_combine_deterministic() {
        let field = NoiseField::default();
        let a = combine(&field, 0.25, 0.75, 6).unwrap();
        let b = field.combine(0.25, 0.75, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_excessive_octaves_rejected() {
        let field = NoiseField::default();
        for octaves in [33, 70, 1024, 5000, u32::MAX] {
            assert!(matches!(
                combine(&field, 0.5, 0.5, octaves),
                Err(TerrainError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_octave_budget_depends_on_coordinate() {
        let field = NoiseField::default();
        // 0.5 * 2^30 = 2^29 still inside the domain
        let v = combine(&field, 0.5, 0.25, 31).unwrap();
        assert!((0.0..=1.0).contains(&v));

        // The origin never leaves the domain until the frequency overflows
        assert!(combine(&field, 0.0, 0.0, 1024).is_ok());
        assert!(combine(&field, 0.0, 0.0, 1025).is_err());
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let field = NoiseField::default();
        assert!(combine(&field, f64::NAN, 0.5, 1).is_err());
        assert!(combine(&field, 0.5, f64::INFINITY, 3).is_err());
        assert!(combine(&field, 1e19, 0.0, 1).is_err());
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let field = NoiseField::default();
        let err = combine(&field, 0.1, 0.2, 0).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidArgument(_)));
    }
}
