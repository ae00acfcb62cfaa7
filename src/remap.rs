//! Linear range remapping and the unit-interval to 8-bit channel convention.
//!
//! Heightmap samples live in `[0, 1]`, but mesh displacement has always been
//! computed from an 8-bit texture channel in `[0, 255]`. The conversion is
//! kept here as its own step instead of being folded into a remap call.

use crate::error::{Result, TerrainError};

/// Upper bound of an 8-bit heightmap channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Linearly rescale `value` from `[source_min, source_max]` into
/// `[target_min, target_max]`.
///
/// Values outside the source range extrapolate linearly. A zero-width source
/// range is rejected rather than producing NaN or infinity.
pub fn remap(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Result<f64> {
    if !(source_min.is_finite() && source_max.is_finite()) {
        return Err(TerrainError::invalid(format!(
            "remap source range must be finite, got [{source_min}, {source_max}]"
        )));
    }
    if source_max == source_min {
        return Err(TerrainError::invalid(format!(
            "remap source range is degenerate: min == max == {source_min}"
        )));
    }

    let t = (value - source_min) / (source_max - source_min);
    Ok((target_max - target_min) * t + target_min)
}

/// Rescale a `[0, 1]` heightmap sample into the `[0, 255]` channel domain.
pub fn unit_to_channel(sample: f64) -> f64 {
    sample * CHANNEL_MAX
}

/// Quantize a `[0, 1]` heightmap sample into a texel byte.
pub fn unit_to_channel_u8(sample: f64) -> u8 {
    unit_to_channel(sample).round().clamp(0.0, CHANNEL_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_identity() {
        for v in [-3.5, 0.0, 0.25, 0.5, 1.0, 7.0] {
            assert_eq!(remap(v, 0.0, 1.0, 0.0, 1.0).unwrap(), v);
        }
    }

    #[test]
    fn test_remap_endpoints() {
        let (smin, smax, emin, emax) = (-1.0, 1.0, 0.0, 500.0);
        assert_eq!(remap(smin, smin, smax, emin, emax).unwrap(), emin);
        assert_eq!(remap(smax, smin, smax, emin, emax).unwrap(), emax);
        assert_eq!(remap(0.0, smin, smax, emin, emax).unwrap(), 250.0);
    }

    #[test]
    fn test_remap_inverted_target() {
        // Reversed target ranges are allowed and flip the direction
        assert_eq!(remap(0.25, 0.0, 1.0, 10.0, 0.0).unwrap(), 7.5);
    }

    #[test]
    fn test_remap_degenerate_domain() {
        let err = remap(0.5, 2.0, 2.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidArgument(_)));
    }

    #[test]
    fn test_remap_non_finite_domain() {
        assert!(remap(0.5, f64::NEG_INFINITY, 1.0, 0.0, 1.0).is_err());
        assert!(remap(0.5, 0.0, f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_unit_to_channel() {
        assert_eq!(unit_to_channel(0.0), 0.0);
        assert_eq!(unit_to_channel(1.0), 255.0);
        assert_eq!(unit_to_channel_u8(0.5), 128);
        assert_eq!(unit_to_channel_u8(1.2), 255);
        assert_eq!(unit_to_channel_u8(-0.1), 0);
    }
}
