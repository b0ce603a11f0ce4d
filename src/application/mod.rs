//! Application layer orchestrating the domain model.
//!
//! `PayoffSolver` runs the bisection search for a single balance and
//! `BatchRunner` drives it over a stream of scenarios.

pub mod batch;
pub mod config;
pub mod solver;
