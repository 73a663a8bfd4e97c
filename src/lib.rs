//! `faer-symv` computes the product of a self-adjoint matrix with a vector, reading only one
//! triangular half of the matrix.
//!
//! Given a square matrix $A$ that is symmetric (real scalars) or hermitian (complex scalars), a
//! vector $x$ and a scalar $\alpha$, the routines in [`linalg::matmul::self_adjoint`] perform the
//! update
//! $$\text{acc} \gets \text{acc} + \alpha\, \text{op}(A)\, \text{op}(x),$$
//! where $\text{op}$ optionally conjugates its operand, and only the lower or upper triangle of $A$
//! (diagonal included) is ever read.
//!
//! The matrix may be stored in column-major or row-major order with an arbitrary leading
//! dimension. The vector may be strided, in which case it is packed into scratch memory provided
//! by the caller through a [`dyn_stack::PodStack`].
//!
//! # Example
//! ```
//! use faer_symv::linalg::matmul::self_adjoint::matvec_self_adjoint;
//! use faer_symv::{col, mat, Side};
//!
//! // only the lower triangle is meaningful, the rest is never read
//! let a = [
//!     1.0, 0.0, 0.0, //
//!     2.0, 3.0, 0.0, //
//!     0.0, 1.0, 4.0f64,
//! ];
//! let a = mat::from_row_major_slice(&a, 3, 3);
//! let x = [1.0, 1.0, 1.0];
//! let mut acc = [0.0; 3];
//!
//! matvec_self_adjoint(
//!     col::from_slice_mut(&mut acc),
//!     a,
//!     Side::Lower,
//!     col::from_slice(&x),
//!     1.0,
//! );
//! assert!(acc == [3.0, 6.0, 5.0]);
//! ```

#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use equator::{assert, debug_assert};

pub mod col;
pub mod entity;
pub mod linalg;
pub mod mat;
pub mod utils;

pub use dyn_stack;
pub use reborrow;

pub use col::{ColMut, ColRef};
pub use entity::{c32, c64, ComplexField, NoSimd, RealField, SimdCtx};
pub use mat::MatRef;

/// Specifies whether the triangular lower or upper part of a matrix should be accessed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Lower half should be accessed.
    Lower,
    /// Upper half should be accessed.
    Upper,
}

impl Side {
    /// Returns the opposite half.
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        }
    }
}

/// Whether a matrix should be implicitly conjugated when read or not.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Conj {
    /// Do conjugate.
    Yes,
    /// Do not conjugate.
    No,
}

impl Conj {
    /// Combine `self` and `other` to create a new conjugation object.
    #[inline]
    pub fn compose(self, other: Conj) -> Conj {
        if self == other {
            Conj::No
        } else {
            Conj::Yes
        }
    }
}

/// Memory layout of a matrix with at least one unit stride.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StorageOrder {
    /// Elements of the same column are contiguous.
    ColumnMajor,
    /// Elements of the same row are contiguous.
    RowMajor,
}

impl StorageOrder {
    /// Returns the order of the transposed matrix.
    #[inline]
    pub fn transpose(self) -> StorageOrder {
        match self {
            StorageOrder::ColumnMajor => StorageOrder::RowMajor,
            StorageOrder::RowMajor => StorageOrder::ColumnMajor,
        }
    }
}

/// Scaling factor attached to an operand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale<E>(pub E);

impl<E> Scale<E> {
    #[inline]
    pub fn value(self) -> E {
        self.0
    }
}

#[inline]
pub fn scale<E>(val: E) -> Scale<E> {
    Scale(val)
}

#[cfg(feature = "perf-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __perf_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn conj_compose() {
        assert!(Conj::Yes.compose(Conj::Yes) == Conj::No);
        assert!(Conj::No.compose(Conj::No) == Conj::No);
        assert!(Conj::Yes.compose(Conj::No) == Conj::Yes);
        assert!(Conj::No.compose(Conj::Yes) == Conj::Yes);
    }

    #[test]
    fn flips() {
        assert!(Side::Lower.flip() == Side::Upper);
        assert!(Side::Upper.flip() == Side::Lower);
        assert!(StorageOrder::RowMajor.transpose() == StorageOrder::ColumnMajor);
        assert!(scale(2.0f64).value() == 2.0);
    }

    #[test]
    #[cfg(feature = "perf-warn")]
    fn perf_warn_fires_once() {
        let mut fired = 0;
        for _ in 0..3 {
            if crate::__perf_warn!(TEST_WARN) {
                fired += 1;
            }
        }
        assert!(fired == 1);
    }
}
