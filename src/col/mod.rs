//! Strided column vector views.

use crate::{assert, entity::ComplexField};
use core::{marker::PhantomData, ptr::NonNull};
use reborrow::*;

#[repr(C)]
pub(crate) struct VecImpl<E: ComplexField> {
    pub(crate) ptr: NonNull<E>,
    pub(crate) len: usize,
    pub(crate) stride: isize,
}

impl<E: ComplexField> Copy for VecImpl<E> {}
impl<E: ComplexField> Clone for VecImpl<E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

unsafe impl<E: ComplexField> Sync for VecImpl<E> {}
unsafe impl<E: ComplexField> Send for VecImpl<E> {}

#[track_caller]
#[inline]
fn from_strided_slice_assert(nrows: usize, row_stride: usize, len: usize) {
    if nrows > 0 {
        let last = usize::checked_mul(row_stride, nrows - 1).unwrap_or(usize::MAX);
        assert!(last < len);
    }
}

mod colref;
pub use colref::{from_raw_parts, from_slice, from_slice_with_stride, ColRef};

mod colmut;
pub use colmut::{from_raw_parts_mut, from_slice_mut, from_slice_with_stride_mut, ColMut};
