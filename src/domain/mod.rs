//! Value objects and the compounding model.
//!
//! Nothing here performs I/O; every function is a pure computation over
//! validated inputs.

pub mod loan;
pub mod schedule;
