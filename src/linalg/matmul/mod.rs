//! Matrix multiplication.

pub mod self_adjoint;
