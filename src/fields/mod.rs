//! Analytical potential fields over a grid.

mod halfspace;

pub use halfspace::{
    dipole_potential,
    point_source_potential,
    point_source_potentials,
    superposed_potentials,
    superposed_potentials_par,
    PotentialField,
};
