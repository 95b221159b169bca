//! Shared error types used across submodules.

use thiserror::Error;

use crate::configs::ConfigError;
use crate::grid::GridError;
use crate::simulation::SimulationError;

/// Top-level error type for forward computations.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// An electrode identifier did not resolve through the grid.
    #[error("electrode lookup failed: {0}")]
    Lookup(#[from] GridError),
    /// Invalid four-point configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Wraps engine configuration errors.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Paired batches differ in length.
    #[error("{configs} configurations but {potentials} paired values")]
    ShapeMismatch {
        /// Number of configurations supplied.
        configs: usize,
        /// Number of paired entries (potential fields or resistances) supplied.
        potentials: usize,
    },
    /// A resolved node index lies outside a potential field.
    #[error("node {node} is outside a potential field of length {len}")]
    NodeOutOfRange {
        /// Node index that was read.
        node: usize,
        /// Length of the field.
        len: usize,
    },
}
