//! Material property models for the subsurface.

use std::fmt;

use crate::constants::conductivity_from_resistivity;
use crate::math::Scalar;

/// Homogeneous, isotropic half-space characterised by its DC resistivity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    /// Electrical resistivity ρ in Ω·m.
    pub resistivity: Scalar,
}

impl HalfSpace {
    /// Creates a half-space with resistivity `rho` (Ω·m).
    #[must_use]
    pub const fn new(rho: Scalar) -> Self {
        Self { resistivity: rho }
    }

    /// Electrical conductivity σ = 1/ρ in S/m.
    #[must_use]
    pub fn conductivity(&self) -> Scalar {
        conductivity_from_resistivity(self.resistivity)
    }

    /// True when the resistivity is finite and strictly positive.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.resistivity.is_finite() && self.resistivity > 0.0
    }
}

impl fmt::Display for HalfSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ω·m", self.resistivity)
    }
}
