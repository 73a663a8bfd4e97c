//! Low level helpers shared by the kernels.

/// Compile-time conjugation markers and a thin typed wrapper over the SIMD instruction set.
pub mod simd;
