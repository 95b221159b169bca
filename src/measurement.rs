//! Simulated four-point measurements derived from potential fields.
//!
//! Voltages are read by differencing a configuration's potential field at its two receiver
//! nodes. Because fields are computed for a unit current, voltages double as transfer
//! resistances, which gives geometric factors and apparent resistivities directly.

use tracing::debug;

use crate::configs::{Configuration, ReceiverIndexing};
use crate::errors::ForwardError;
use crate::fields::PotentialField;
use crate::grid::ElectrodeGrid;
use crate::math::Scalar;

fn field_value(field: &PotentialField, node: usize) -> Result<Scalar, ForwardError> {
    field
        .get(node)
        .copied()
        .ok_or(ForwardError::NodeOutOfRange { node, len: field.len() })
}

fn check_paired(configs: usize, paired: usize) -> Result<(), ForwardError> {
    if configs == paired {
        Ok(())
    } else {
        Err(ForwardError::ShapeMismatch { configs, potentials: paired })
    }
}

/// Voltage `φ(M) - φ(N)` for each configuration, resolving receivers under `indexing`.
///
/// `fields[i]` must be the field of `configs[i]`. Mismatched lengths fail before any
/// lookup is made.
pub fn receiver_voltages<G>(
    grid: &G,
    configs: &[Configuration],
    fields: &[PotentialField],
    indexing: ReceiverIndexing,
) -> Result<Vec<Scalar>, ForwardError>
where
    G: ElectrodeGrid + ?Sized,
{
    check_paired(configs.len(), fields.len())?;
    debug!(configs = configs.len(), ?indexing, "reading receiver voltages");

    configs
        .iter()
        .zip(fields)
        .map(|(config, field)| -> Result<Scalar, ForwardError> {
            let (m, n) = config.receiver_keys(indexing);
            let m_node = grid.electrode_node(m)?;
            let n_node = grid.electrode_node(n)?;
            Ok(field_value(field, m_node)? - field_value(field, n_node)?)
        })
        .collect()
}

/// Voltages from precomputed potential fields, one per configuration.
///
/// All four identifiers are shifted down by one before the receivers are resolved through
/// the grid, unlike [`crate::fields::superposed_potentials`] which resolves the current
/// electrodes as given. See [`ReceiverIndexing`].
pub fn voltages_from_potentials<G>(
    grid: &G,
    configs: &[Configuration],
    fields: &[PotentialField],
) -> Result<Vec<Scalar>, ForwardError>
where
    G: ElectrodeGrid + ?Sized,
{
    receiver_voltages(grid, configs, fields, ReceiverIndexing::Shifted)
}

/// Geometric factor `K = ρ / V` of each configuration, from voltages simulated over a
/// half-space of resistivity `rho`.
///
/// Voltages scale linearly with `rho`, so any resistivity gives the same factors.
/// Receivers on an equipotential yield an infinite factor.
#[must_use]
pub fn geometric_factors(voltages: &[Scalar], rho: Scalar) -> Vec<Scalar> {
    voltages.iter().map(|v| rho / v).collect()
}

/// Apparent resistivity `ρa = K · R` for measured transfer resistances.
pub fn apparent_resistivities(
    geometric_factors: &[Scalar],
    resistances: &[Scalar],
) -> Result<Vec<Scalar>, ForwardError> {
    check_paired(geometric_factors.len(), resistances.len())?;
    Ok(geometric_factors
        .iter()
        .zip(resistances)
        .map(|(k, r)| k * r)
        .collect())
}
