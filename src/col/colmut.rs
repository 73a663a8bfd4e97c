use super::*;
use crate::{assert, col::ColRef};

/// Mutable view over a column vector, similar to a mutable reference to a strided
/// [prim@slice].
#[repr(C)]
pub struct ColMut<'a, E: ComplexField> {
    pub(super) inner: VecImpl<E>,
    pub(super) __marker: PhantomData<&'a mut E>,
}

impl<'short, E: ComplexField> Reborrow<'short> for ColMut<'_, E> {
    type Target = ColRef<'short, E>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        ColRef {
            inner: self.inner,
            __marker: PhantomData,
        }
    }
}

impl<'short, E: ComplexField> ReborrowMut<'short> for ColMut<'_, E> {
    type Target = ColMut<'short, E>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        ColMut {
            inner: self.inner,
            __marker: PhantomData,
        }
    }
}

impl<E: ComplexField> core::fmt::Debug for ColMut<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.rb(), f)
    }
}

impl<'a, E: ComplexField> ColMut<'a, E> {
    #[inline]
    pub(crate) unsafe fn __from_raw_parts(ptr: *mut E, nrows: usize, row_stride: isize) -> Self {
        Self {
            inner: VecImpl {
                ptr: NonNull::new_unchecked(ptr),
                len: nrows,
                stride: row_stride,
            },
            __marker: PhantomData,
        }
    }

    /// Returns the number of rows of the column.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.inner.len
    }

    /// Returns the offset between the first elements of two successive rows in the column.
    #[inline(always)]
    pub fn row_stride(&self) -> isize {
        self.inner.stride
    }

    /// Returns a mutable pointer to the column data.
    #[inline(always)]
    pub fn as_ptr_mut(self) -> *mut E {
        self.inner.ptr.as_ptr()
    }

    /// Reads the value of the element at the given index, with bound checks.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize) -> E {
        self.rb().read(row)
    }

    /// Writes the value to the element at the given index, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, value: E) {
        assert!(row < self.nrows());
        let ptr = self.inner.ptr.as_ptr();
        unsafe { *ptr.offset(row as isize * self.row_stride()) = value };
    }

    /// Returns the column as a contiguous mutable slice if its row stride is equal to `1`.
    ///
    /// # Panics
    /// The function panics if `self.row_stride() != 1`.
    #[inline]
    #[track_caller]
    pub fn try_as_slice_mut(self) -> &'a mut [E] {
        assert!(self.row_stride() == 1);
        let nrows = self.nrows();
        unsafe { core::slice::from_raw_parts_mut(self.as_ptr_mut(), nrows) }
    }
}

/// Creates a `ColMut` from a pointer to the column vector data, number of rows, and row stride.
///
/// # Safety
/// For each `i < nrows`, `ptr.offset(i as isize * row_stride)` must point to an initialized
/// element that is valid for reads and writes, and not aliased by any other live reference for
/// the lifetime `'a`. Two distinct indices must not refer to the same element.
#[inline(always)]
pub unsafe fn from_raw_parts_mut<'a, E: ComplexField>(
    ptr: *mut E,
    nrows: usize,
    row_stride: isize,
) -> ColMut<'a, E> {
    ColMut::__from_raw_parts(ptr, nrows, row_stride)
}

/// Creates a `ColMut` from a slice view over the column vector data. The result has the same
/// number of rows as the length of the input slice.
#[inline(always)]
pub fn from_slice_mut<E: ComplexField>(slice: &mut [E]) -> ColMut<'_, E> {
    unsafe { from_raw_parts_mut(slice.as_mut_ptr(), slice.len(), 1) }
}

/// Creates a `ColMut` with `nrows` rows from a slice, where successive rows are `row_stride`
/// elements apart.
///
/// # Panics
/// The function panics if the last element does not fit in the slice, or if `row_stride == 0`
/// while `nrows > 1`.
#[track_caller]
#[inline(always)]
pub fn from_slice_with_stride_mut<E: ComplexField>(
    slice: &mut [E],
    nrows: usize,
    row_stride: usize,
) -> ColMut<'_, E> {
    from_strided_slice_assert(nrows, row_stride, slice.len());
    assert!(any(row_stride > 0, nrows <= 1));
    unsafe { from_raw_parts_mut(slice.as_mut_ptr(), nrows, row_stride as isize) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn write_through_strided_view() {
        let mut data = [0.0f64; 5];
        {
            let mut col = from_slice_with_stride_mut(&mut data, 3, 2);
            col.write(0, 1.0);
            col.write(1, 2.0);
            col.write(2, 3.0);
            assert!(col.read(1) == 2.0);
        }
        assert!(data == [1.0, 0.0, 2.0, 0.0, 3.0]);

        let col = from_slice_mut(&mut data);
        assert!(col.try_as_slice_mut().len() == 5);
    }

    #[test]
    fn write_through_contiguous_slice() {
        let mut data = [1.0f64, 2.0, 3.0, 4.0];
        {
            let slice = from_slice_mut(&mut data[1..]).try_as_slice_mut();
            assert!(slice.len() == 3);
            slice[0] = -2.0;
            slice[2] = -4.0;
        }
        assert!(data == [1.0, -2.0, 3.0, -4.0]);

        let mut empty: [f64; 0] = [];
        assert!(from_slice_mut(&mut empty).try_as_slice_mut().is_empty());
    }

    #[test]
    #[should_panic]
    fn mutable_slice_requires_unit_stride() {
        let mut data = [0.0f64; 6];
        from_slice_with_stride_mut(&mut data, 3, 2).try_as_slice_mut();
    }
}
