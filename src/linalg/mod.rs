//! Linear algebra module.
//!
//! Contains low level routines and the implementation of their corresponding high level
//! wrappers.
//!
//! # Memory allocation
//! The routines of this crate do not allocate on their own. When a routine needs temporary space
//! for intermediate computations (for instance, to pack a strided vector into contiguous memory),
//! it takes a [`stack: PodStack`](dyn_stack::PodStack) parameter. A [`PodStack`] is a thin wrapper
//! over a slice of memory bytes. This memory may come from any valid source (heap allocation,
//! fixed-size array on the stack, etc.). The functions taking a [`PodStack`] parameter have a
//! corresponding function with a similar name ending in `_req` that returns the memory
//! requirements of the algorithm. For example:
//! [`matmul::self_adjoint::matvec_self_adjoint_with_conj`] and
//! [`matmul::self_adjoint::matvec_self_adjoint_req`].
//!
//! The memory stack may be reused in user-code to avoid repeated allocations, and it is also
//! possible to compute the sum ([`dyn_stack::StackReq::all_of`]) or union
//! ([`dyn_stack::StackReq::any_of`]) of multiple requirements, in order to optimally combine them
//! into a single allocation.
//!
//! After computing a [`dyn_stack::StackReq`], one can query its size and alignment to allocate the
//! required memory. The simplest way to do so is through [`dyn_stack::GlobalPodBuffer::new`].

use crate::entity::ComplexField;
use dyn_stack::{PodStack, SizeOverflow, StackReq};

pub mod matmul;

// https://rust-lang.github.io/hashbrown/src/crossbeam_utils/cache_padded.rs.html#128-130
pub const CACHELINE_ALIGN: usize = {
    #[cfg(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "powerpc64",
    ))]
    {
        128
    }
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "powerpc64",
    )))]
    {
        64
    }
};

/// Alignment used for temporary buffers of `E`.
#[inline(always)]
pub fn align_for<E: ComplexField>() -> usize {
    Ord::max(
        core::mem::size_of::<E>(),
        Ord::max(core::mem::align_of::<E>(), CACHELINE_ALIGN),
    )
}

/// Returns the stack requirements for creating a temporary vector with the given number of rows.
#[inline]
pub fn temp_vec_req<E: ComplexField>(nrows: usize) -> Result<StackReq, SizeOverflow> {
    StackReq::try_new_aligned::<E>(nrows, align_for::<E>())
}

/// Creates a temporary vector of possibly uninitialized values, with the given number of rows.
///
/// The returned values are plain bytes left over from previous uses of the stack, and must be
/// overwritten before they are read.
#[inline]
#[track_caller]
pub fn temp_vec_uninit<E: ComplexField>(
    nrows: usize,
    stack: PodStack<'_>,
) -> (&mut [E], PodStack<'_>) {
    stack.make_aligned_raw::<E>(nrows, align_for::<E>())
}
