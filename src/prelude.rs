//! Convenience re-exports for building resistivity forward models.

pub use crate::configs::{
    dipole_dipole, from_rows, wenner, ConfigError, Configuration, ReceiverIndexing,
};
pub use crate::constants::*;
pub use crate::errors::ForwardError;
pub use crate::fields::{
    dipole_potential,
    point_source_potential,
    point_source_potentials,
    superposed_potentials,
    superposed_potentials_par,
    PotentialField,
};
pub use crate::grid::{ElectrodeGrid, FeGrid, GridError, GridNode};
pub use crate::materials::HalfSpace;
pub use crate::math::{distances_from, linspace, DenseVector, Scalar, R2};
pub use crate::measurement::{
    apparent_resistivities,
    geometric_factors,
    receiver_voltages,
    voltages_from_potentials,
};
pub use crate::simulation::{
    AnalyticForward,
    ForwardConfig,
    ForwardEngine,
    ForwardResult,
    SimulationError,
};
