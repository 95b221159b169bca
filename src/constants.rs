//! Model constants for the homogeneous half-space point-source solution.
//!
//! ## Model
//!
//! A current `I` injected at a point on the surface of a homogeneous half-space of
//! conductivity σ spreads into a hemisphere, so the potential at distance `r` is
//! `φ = I / (2π σ r)`. The full-space solution uses `4π` instead.
//!
//! ## References
//!
//! - Telford, W. M., Geldart, L. P., & Sheriff, R. E. (1990). Applied Geophysics, §8.2.
//! - Kemna, A. (2000). Tomographic inversion of complex resistivity, Ch. 2.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Injected current in amperes used by every analytical evaluation.
/// Fields and voltages are therefore transfer resistances (V/A).
pub const UNIT_CURRENT: Scalar = 1.0;

/// Solid-angle factor of a surface point source on a half-space (2π).
pub const HALF_SPACE_SOLID_ANGLE: Scalar = 2.0 * PI;

/// Returns the conductivity σ = 1/ρ for a resistivity `rho` in Ω·m.
#[inline]
#[must_use]
pub fn conductivity_from_resistivity(rho: Scalar) -> Scalar {
    1.0 / rho
}

/// Returns the coefficient `I / (2π σ)` multiplying `1/r` in the half-space solution.
#[inline]
#[must_use]
pub fn half_space_coefficient(rho: Scalar) -> Scalar {
    UNIT_CURRENT / (HALF_SPACE_SOLID_ANGLE * conductivity_from_resistivity(rho))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coefficient_matches_reference() {
        let k = half_space_coefficient(100.0);
        assert_relative_eq!(k, 100.0 / (2.0 * PI), max_relative = 1.0e-12);
    }

    #[test]
    fn zero_resistivity_is_not_trapped() {
        assert_eq!(conductivity_from_resistivity(0.0), Scalar::INFINITY);
        assert_eq!(half_space_coefficient(0.0), 0.0);
    }
}
