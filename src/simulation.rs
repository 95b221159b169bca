//! High-level orchestration of analytical forward runs.

use tracing::{info, instrument, warn};

use crate::configs::{Configuration, ReceiverIndexing};
use crate::errors::ForwardError;
use crate::fields::{superposed_potentials, superposed_potentials_par, PotentialField};
use crate::grid::ElectrodeGrid;
use crate::materials::HalfSpace;
use crate::math::Scalar;
use crate::measurement::{apparent_resistivities, geometric_factors, receiver_voltages};

/// Metadata describing a forward run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardConfig {
    /// Human-readable identifier.
    pub name: String,
    /// Subsurface model.
    pub half_space: HalfSpace,
    /// Evaluate configurations on the rayon thread pool.
    pub parallel: bool,
    /// How receiver electrodes are resolved through the grid.
    pub receiver_indexing: ReceiverIndexing,
    /// Also compute geometric factors for every configuration.
    pub geometric_factors: bool,
}

impl ForwardConfig {
    /// Creates a serial configuration for a homogeneous half-space of resistivity `rho`.
    ///
    /// Receivers are resolved with the same keys as the current electrodes.
    /// Use [`ForwardConfig::with_receiver_indexing`] to read them shifted, as
    /// [`crate::measurement::voltages_from_potentials`] does.
    #[must_use]
    pub fn homogeneous(name: impl Into<String>, rho: Scalar) -> Self {
        Self {
            name: name.into(),
            half_space: HalfSpace::new(rho),
            parallel: false,
            receiver_indexing: ReceiverIndexing::AsGiven,
            geometric_factors: false,
        }
    }

    /// Enables or disables parallel evaluation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Selects the receiver indexing convention.
    #[must_use]
    pub fn with_receiver_indexing(mut self, indexing: ReceiverIndexing) -> Self {
        self.receiver_indexing = indexing;
        self
    }

    /// Requests geometric factors alongside the voltages.
    #[must_use]
    pub fn with_geometric_factors(mut self, enabled: bool) -> Self {
        self.geometric_factors = enabled;
        self
    }

    /// Checks that the configuration describes a physical model.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.half_space.is_physical() {
            return Err(SimulationError::InvalidResistivity(self.half_space.resistivity));
        }
        Ok(())
    }
}

/// Errors that can occur while configuring a forward run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Resistivity must be finite and strictly positive.
    #[error("resistivity must be finite and > 0, got {0}")]
    InvalidResistivity(Scalar),
    /// Raised when the run has nothing to compute.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Output of a forward run; entry `i` of every vector belongs to configuration `i`.
#[derive(Debug, Clone, Default)]
pub struct ForwardResult {
    /// Superposed potential field per configuration.
    pub potentials: Vec<PotentialField>,
    /// Simulated voltage (transfer resistance for unit current) per configuration.
    pub voltages: Vec<Scalar>,
    /// Geometric factors, when requested.
    pub geometric_factors: Option<Vec<Scalar>>,
}

impl ForwardResult {
    /// Number of configurations evaluated.
    #[must_use]
    pub fn len(&self) -> usize { self.voltages.len() }

    /// True if nothing was evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.voltages.is_empty() }

    /// Apparent resistivities `K · V`, available when geometric factors were computed.
    pub fn apparent_resistivities(&self) -> Option<Result<Vec<Scalar>, ForwardError>> {
        self.geometric_factors
            .as_deref()
            .map(|k| apparent_resistivities(k, &self.voltages))
    }
}

/// Trait for forward engines.
pub trait ForwardEngine {
    /// Executes the forward run using the provided configuration.
    fn run(&mut self, config: &ForwardConfig) -> Result<(), ForwardError>;
}

/// Analytical homogeneous half-space engine over a grid and a batch of configurations.
pub struct AnalyticForward<G> {
    grid: G,
    configs: Vec<Configuration>,
    result: ForwardResult,
}

impl<G: ElectrodeGrid> AnalyticForward<G> {
    /// Creates an engine for `configs` measured on `grid`.
    #[must_use]
    pub fn new(grid: G, configs: Vec<Configuration>) -> Self {
        Self {
            grid,
            configs,
            result: ForwardResult::default(),
        }
    }

    /// Configurations, in evaluation order.
    #[must_use]
    pub fn configs(&self) -> &[Configuration] { &self.configs }

    /// Returns a reference to the result (populated after `run`).
    #[must_use]
    pub fn result(&self) -> &ForwardResult { &self.result }

    /// Consumes and returns the result.
    #[must_use]
    pub fn into_result(self) -> ForwardResult { self.result }
}

impl<G: ElectrodeGrid + Sync> ForwardEngine for AnalyticForward<G> {
    #[instrument(skip_all, fields(name = %config.name))]
    fn run(&mut self, config: &ForwardConfig) -> Result<(), ForwardError> {
        config.validate()?;
        if self.configs.is_empty() {
            let err = SimulationError::InvalidConfig("no configurations to evaluate".into());
            return Err(err.into());
        }
        if config.geometric_factors && config.receiver_indexing == ReceiverIndexing::Shifted {
            warn!("geometric factors with shifted receivers do not match the current electrodes");
        }
        let rho = config.half_space.resistivity;
        info!(
            configs = self.configs.len(),
            nodes = self.grid.node_count(),
            half_space = %config.half_space,
            sigma = config.half_space.conductivity(),
            parallel = config.parallel,
            "forward run starting"
        );

        let potentials = if config.parallel {
            superposed_potentials_par(&self.grid, &self.configs, rho)?
        } else {
            superposed_potentials(&self.grid, &self.configs, rho)?
        };
        let voltages = receiver_voltages(
            &self.grid,
            &self.configs,
            &potentials,
            config.receiver_indexing,
        )?;
        let factors = config
            .geometric_factors
            .then(|| geometric_factors(&voltages, rho));

        let non_finite = voltages.iter().filter(|v| !v.is_finite()).count();
        info!(voltages = voltages.len(), non_finite, "forward run complete");

        self.result = ForwardResult {
            potentials,
            voltages,
            geometric_factors: factors,
        };
        Ok(())
    }
}
