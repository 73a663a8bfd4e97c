//! Strided matrix views.

use crate::{assert, entity::ComplexField, StorageOrder};
use core::{marker::PhantomData, ptr::NonNull};
use reborrow::*;

#[repr(C)]
pub(crate) struct MatImpl<E: ComplexField> {
    pub(crate) ptr: NonNull<E>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) row_stride: isize,
    pub(crate) col_stride: isize,
}

impl<E: ComplexField> Copy for MatImpl<E> {}
impl<E: ComplexField> Clone for MatImpl<E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

unsafe impl<E: ComplexField> Sync for MatImpl<E> {}
unsafe impl<E: ComplexField> Send for MatImpl<E> {}

#[track_caller]
#[inline]
fn from_slice_assert(nrows: usize, ncols: usize, len: usize) {
    // the length of a slice can never reach usize::MAX for non zero sized types
    let size = usize::checked_mul(nrows, ncols).unwrap_or(usize::MAX);
    assert!(size == len);
}

#[track_caller]
#[inline]
fn from_strided_column_major_slice_assert(
    nrows: usize,
    ncols: usize,
    col_stride: usize,
    len: usize,
) {
    if nrows == 0 || ncols == 0 {
        return;
    }
    let last = usize::checked_mul(col_stride, ncols - 1)
        .and_then(|last_col| last_col.checked_add(nrows - 1))
        .unwrap_or(usize::MAX);
    assert!(all(col_stride >= nrows, last < len));
}

mod matref;
pub use matref::{
    from_column_major_slice, from_column_major_slice_with_stride, from_raw_parts,
    from_row_major_slice, from_row_major_slice_with_stride, MatRef,
};
