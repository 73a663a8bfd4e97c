use super::*;
use crate::assert;

/// Immutable view over a column vector, similar to an immutable reference to a strided
/// [prim@slice].
#[repr(C)]
pub struct ColRef<'a, E: ComplexField> {
    pub(super) inner: VecImpl<E>,
    pub(super) __marker: PhantomData<&'a E>,
}

impl<E: ComplexField> Clone for ColRef<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ComplexField> Copy for ColRef<'_, E> {}

impl<'short, E: ComplexField> Reborrow<'short> for ColRef<'_, E> {
    type Target = ColRef<'short, E>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        *self
    }
}

impl<'short, E: ComplexField> ReborrowMut<'short> for ColRef<'_, E> {
    type Target = ColRef<'short, E>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        *self
    }
}

impl<E: ComplexField> core::fmt::Debug for ColRef<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries((0..self.nrows()).map(|i| self.read(i)))
            .finish()
    }
}

impl<'a, E: ComplexField> ColRef<'a, E> {
    #[inline]
    pub(crate) unsafe fn __from_raw_parts(ptr: *const E, nrows: usize, row_stride: isize) -> Self {
        Self {
            inner: VecImpl {
                ptr: NonNull::new_unchecked(ptr as *mut E),
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

    /// Returns the number of columns of the column. This is always equal to `1`.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        1
    }

    /// Returns the offset between the first elements of two successive rows in the column.
    #[inline(always)]
    pub fn row_stride(&self) -> isize {
        self.inner.stride
    }

    /// Returns a pointer to the column data.
    #[inline(always)]
    pub fn as_ptr(self) -> *const E {
        self.inner.ptr.as_ptr() as *const E
    }

    /// Returns a pointer to the element at the given index, assuming the provided index is within
    /// the size of the vector.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn ptr_inbounds_at(self, row: usize) -> *const E {
        crate::debug_assert!(row < self.nrows());
        self.as_ptr().offset(row as isize * self.row_stride())
    }

    /// Reads the value of the element at the given index, with no bound checks.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize) -> E {
        *self.ptr_inbounds_at(row)
    }

    /// Reads the value of the element at the given index, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize) -> E {
        assert!(row < self.nrows());
        unsafe { self.read_unchecked(row) }
    }

    /// Returns the column as a contiguous slice if its row stride is equal to `1`.
    ///
    /// # Panics
    /// The function panics if `self.row_stride() != 1`.
    #[inline]
    #[track_caller]
    pub fn try_as_slice(self) -> &'a [E] {
        assert!(self.row_stride() == 1);
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.nrows()) }
    }

    /// Returns a view over the column with its rows in reversed order.
    #[inline(always)]
    #[must_use]
    pub fn reverse_rows(self) -> Self {
        let nrows = self.nrows();
        let row_stride = self.row_stride().wrapping_neg();

        let ptr = if nrows == 0 {
            self.as_ptr()
        } else {
            unsafe { self.ptr_inbounds_at(nrows - 1) }
        };
        unsafe { Self::__from_raw_parts(ptr, nrows, row_stride) }
    }
}

/// Creates a `ColRef` from a pointer to the column vector data, number of rows, and row stride.
///
/// # Safety
/// For each `i < nrows`, `ptr.offset(i as isize * row_stride)` must point to an initialized
/// element that stays valid and unmodified for the lifetime `'a`.
#[inline(always)]
pub unsafe fn from_raw_parts<'a, E: ComplexField>(
    ptr: *const E,
    nrows: usize,
    row_stride: isize,
) -> ColRef<'a, E> {
    ColRef::__from_raw_parts(ptr, nrows, row_stride)
}

/// Creates a `ColRef` from a slice view over the column vector data. The result has the same
/// number of rows as the length of the input slice.
#[inline(always)]
pub fn from_slice<E: ComplexField>(slice: &[E]) -> ColRef<'_, E> {
    unsafe { from_raw_parts(slice.as_ptr(), slice.len(), 1) }
}

/// Creates a `ColRef` with `nrows` rows from a slice, where successive rows are `row_stride`
/// elements apart.
///
/// # Panics
/// The function panics if the last element does not fit in the slice.
#[track_caller]
#[inline(always)]
pub fn from_slice_with_stride<E: ComplexField>(
    slice: &[E],
    nrows: usize,
    row_stride: usize,
) -> ColRef<'_, E> {
    from_strided_slice_assert(nrows, row_stride, slice.len());
    unsafe { from_raw_parts(slice.as_ptr(), nrows, row_stride as isize) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn strided_views() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0f64];
        let col = from_slice_with_stride(&data, 3, 3);
        assert!(col.nrows() == 3);
        assert!(col.row_stride() == 3);
        assert!(col.read(2) == 6.0);

        let rev = col.reverse_rows();
        assert!(rev.row_stride() == -3);
        assert!(rev.read(0) == 6.0);
        assert!(rev.read(2) == 0.0);

        assert!(from_slice(&data[2..5]).try_as_slice() == &[2.0, 3.0, 4.0]);
        assert!(from_slice::<f64>(&[]).reverse_rows().nrows() == 0);
    }

    #[test]
    #[should_panic]
    fn strided_view_out_of_bounds() {
        let data = [0.0f64; 6];
        from_slice_with_stride(&data, 3, 3);
    }

    #[test]
    #[should_panic]
    fn contiguous_slice_requires_unit_stride() {
        let data = [0.0f64; 6];
        from_slice_with_stride(&data, 3, 2).try_as_slice();
    }
}
