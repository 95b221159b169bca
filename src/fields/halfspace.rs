use rayon::prelude::*;
use tracing::{debug, trace};

use crate::configs::Configuration;
use crate::constants::half_space_coefficient;
use crate::errors::ForwardError;
use crate::grid::{ElectrodeGrid, GridError};
use crate::math::{distances_from, DenseVector, Scalar};

/// Potential at every grid node, indexed like the grid's node table.
pub type PotentialField = DenseVector;

/// Potential of a unit current point source on the surface of a homogeneous half-space,
/// at distance `r` (m) for resistivity `rho` (Ω·m): `φ = I / (2π σ r)`.
///
/// `r = 0` is the source location and yields a non-finite value; it is not trapped.
/// Neither is `rho = 0`: σ becomes infinite, so the result is `0.0` for every `r > 0`
/// and NaN at `r = 0`.
#[inline]
#[must_use]
pub fn point_source_potential(r: Scalar, rho: Scalar) -> Scalar {
    half_space_coefficient(rho) / r
}

/// Elementwise [`point_source_potential`] over a vector of distances.
#[must_use]
pub fn point_source_potentials(r: &DenseVector, rho: Scalar) -> DenseVector {
    r.map(|ri| point_source_potential(ri, rho))
}

/// Potential field of a unit source at the node `electrode` resolves to.
fn source_field<G>(grid: &G, electrode: usize, rho: Scalar) -> Result<PotentialField, GridError>
where
    G: ElectrodeGrid + ?Sized,
{
    let origin = grid.electrode_position(electrode)?;
    let r = distances_from(origin, grid.nodes().iter().map(|n| &n.position));
    Ok(point_source_potentials(&r, rho))
}

/// Superposed field of the current dipole of `config`: `+I` at A, `-I` at B.
///
/// A and B are resolved through the grid exactly as stored, with no index shift.
pub fn dipole_potential<G>(
    grid: &G,
    config: &Configuration,
    rho: Scalar,
) -> Result<PotentialField, GridError>
where
    G: ElectrodeGrid + ?Sized,
{
    let (a, b) = config.current_electrodes();
    let source = source_field(grid, a, rho)?;
    let sink = -source_field(grid, b, rho)?;
    trace!(%config, "dipole potential evaluated");
    Ok(source + sink)
}

/// Computes one superposed potential field per configuration, in input order.
///
/// The first electrode that fails to resolve aborts the batch.
pub fn superposed_potentials<G>(
    grid: &G,
    configs: &[Configuration],
    rho: Scalar,
) -> Result<Vec<PotentialField>, ForwardError>
where
    G: ElectrodeGrid + ?Sized,
{
    debug!(configs = configs.len(), nodes = grid.node_count(), rho, "superposing potentials");
    configs
        .iter()
        .map(|c| dipole_potential(grid, c, rho).map_err(ForwardError::from))
        .collect()
}

/// Parallel [`superposed_potentials`]. Output order matches `configs`, and on failure the
/// error of the earliest failing configuration is returned.
pub fn superposed_potentials_par<G>(
    grid: &G,
    configs: &[Configuration],
    rho: Scalar,
) -> Result<Vec<PotentialField>, ForwardError>
where
    G: ElectrodeGrid + Sync + ?Sized,
{
    debug!(
        configs = configs.len(),
        nodes = grid.node_count(),
        rho,
        "superposing potentials in parallel"
    );
    let fields: Vec<Result<PotentialField, GridError>> = configs
        .par_iter()
        .map(|c| dipole_potential(grid, c, rho))
        .collect();
    fields
        .into_iter()
        .map(|f| f.map_err(ForwardError::from))
        .collect()
}
