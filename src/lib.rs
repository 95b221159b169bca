#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Model constants of the half-space point-source solution.
pub mod constants;
/// Shared mathematical utilities (vectors, distances, spacing).
pub mod math;
/// Subsurface material models.
pub mod materials;
/// Finite-element grid contract and an in-memory grid.
pub mod grid;
/// Four-point configurations and spread generators.
pub mod configs;
/// Analytical potential fields over a grid.
pub mod fields;
/// Voltages, geometric factors and apparent resistivities.
pub mod measurement;
/// High-level forward run orchestration.
pub mod simulation;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
