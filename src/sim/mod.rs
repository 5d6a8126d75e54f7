//! Simulation module - non-linear convection time stepping

mod solver;

pub use solver::{SimParams, Simulation};
