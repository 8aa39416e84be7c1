//! Spring dynamics used to smooth a target before it reaches the solver.

mod second_order;

pub use second_order::{Interpolatable, SecondOrderDynamics, SpringParams, SpringPreset};
