use super::*;
use crate::{assert, debug_assert};

/// Immutable view over a matrix, similar to an immutable reference to a 2D strided [prim@slice].
#[repr(C)]
pub struct MatRef<'a, E: ComplexField> {
    pub(super) inner: MatImpl<E>,
    pub(super) __marker: PhantomData<&'a E>,
}

impl<E: ComplexField> Clone for MatRef<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ComplexField> Copy for MatRef<'_, E> {}

impl<'short, E: ComplexField> Reborrow<'short> for MatRef<'_, E> {
    type Target = MatRef<'short, E>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        *self
    }
}

impl<'short, E: ComplexField> ReborrowMut<'short> for MatRef<'_, E> {
    type Target = MatRef<'short, E>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        *self
    }
}

impl<'a, E: ComplexField> MatRef<'a, E> {
    #[inline]
    pub(crate) unsafe fn __from_raw_parts(
        ptr: *const E,
        nrows: usize,
        ncols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Self {
        Self {
            inner: MatImpl {
                ptr: NonNull::new_unchecked(ptr as *mut E),
                nrows,
                ncols,
                row_stride,
                col_stride,
            },
            __marker: PhantomData,
        }
    }

    /// Returns the number of rows of the matrix.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.inner.nrows
    }

    /// Returns the number of columns of the matrix.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.inner.ncols
    }

    /// Returns the offset between the first elements of two successive rows in the matrix.
    #[inline(always)]
    pub fn row_stride(&self) -> isize {
        self.inner.row_stride
    }

    /// Returns the offset between the first elements of two successive columns in the matrix.
    #[inline(always)]
    pub fn col_stride(&self) -> isize {
        self.inner.col_stride
    }

    /// Returns a pointer to the matrix data.
    #[inline(always)]
    pub fn as_ptr(self) -> *const E {
        self.inner.ptr.as_ptr() as *const E
    }

    /// Returns the storage order of the matrix, if one of its strides is equal to `1` and the
    /// other one is nonnegative.
    ///
    /// Column-major takes precedence when both strides are equal to `1`.
    #[inline]
    pub fn storage_order(&self) -> Option<StorageOrder> {
        if self.row_stride() == 1 && self.col_stride() >= 0 {
            Some(StorageOrder::ColumnMajor)
        } else if self.col_stride() == 1 && self.row_stride() >= 0 {
            Some(StorageOrder::RowMajor)
        } else {
            None
        }
    }

    /// Returns a pointer to the element at the given indices, assuming the provided indices
    /// are within the matrix dimensions.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn ptr_inbounds_at(self, row: usize, col: usize) -> *const E {
        debug_assert!(all(row < self.nrows(), col < self.ncols()));
        self.as_ptr()
            .offset(row as isize * self.row_stride() + col as isize * self.col_stride())
    }

    /// Reads the value of the element at the given indices, with no bound checks.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize, col: usize) -> E {
        *self.ptr_inbounds_at(row, col)
    }

    /// Reads the value of the element at the given indices, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> E {
        assert!(all(row < self.nrows(), col < self.ncols()));
        unsafe { self.read_unchecked(row, col) }
    }

    /// Returns a view over the transpose of `self`.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        unsafe {
            Self::__from_raw_parts(
                self.as_ptr(),
                self.ncols(),
                self.nrows(),
                self.col_stride(),
                self.row_stride(),
            )
        }
    }
}

/// Creates a `MatRef` from a pointer to the matrix data, dimensions, and strides.
///
/// The row (resp. column) stride is the offset from the memory address of a given matrix
/// element at indices `(row: i, col: j)`, to the memory address of the matrix element at
/// indices `(row: i + 1, col: 0)` (resp. `(row: 0, col: i + 1)`). This offset is specified in
/// number of elements, not in bytes.
///
/// # Safety
/// The behavior is undefined if any of the following conditions are violated:
/// * For each matrix unit, the entire memory region addressed by the matrix must be contained
/// within a single allocation, accessible in its entirety by the corresponding pointer in `ptr`.
/// * The values accessed by the matrix must be initialized and must not be mutated for the
/// lifetime `'a`.
#[inline(always)]
pub unsafe fn from_raw_parts<'a, E: ComplexField>(
    ptr: *const E,
    nrows: usize,
    ncols: usize,
    row_stride: isize,
    col_stride: isize,
) -> MatRef<'a, E> {
    MatRef::__from_raw_parts(ptr, nrows, ncols, row_stride, col_stride)
}

/// Creates a `MatRef` from slice views over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, so that the first chunk of `nrows`
/// values from the slices goes in the first column of the matrix, the second chunk of `nrows`
/// values goes in the second column, and so on.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `nrows * ncols == slice.len()`
#[track_caller]
#[inline(always)]
pub fn from_column_major_slice<E: ComplexField>(
    slice: &[E],
    nrows: usize,
    ncols: usize,
) -> MatRef<'_, E> {
    from_slice_assert(nrows, ncols, slice.len());
    unsafe { from_raw_parts(slice.as_ptr(), nrows, ncols, 1, nrows as isize) }
}

/// Creates a `MatRef` from slice views over the matrix data, and the matrix dimensions.
/// The data is interpreted in a row-major format, so that the first chunk of `ncols`
/// values from the slices goes in the first row of the matrix, the second chunk of `ncols`
/// values goes in the second row, and so on.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `nrows * ncols == slice.len()`
#[track_caller]
#[inline(always)]
pub fn from_row_major_slice<E: ComplexField>(
    slice: &[E],
    nrows: usize,
    ncols: usize,
) -> MatRef<'_, E> {
    from_column_major_slice(slice, ncols, nrows).transpose()
}

/// Creates a `MatRef` from slice views over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, where the beginnings of two consecutive
/// columns are separated by `col_stride` elements.
///
/// # Panics
/// The function panics if `col_stride < nrows`, or if the last element of the matrix does not
/// fit in the slice.
#[track_caller]
#[inline(always)]
pub fn from_column_major_slice_with_stride<E: ComplexField>(
    slice: &[E],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
) -> MatRef<'_, E> {
    from_strided_column_major_slice_assert(nrows, ncols, col_stride, slice.len());
    unsafe { from_raw_parts(slice.as_ptr(), nrows, ncols, 1, col_stride as isize) }
}

/// Creates a `MatRef` from slice views over the matrix data, and the matrix dimensions.
/// The data is interpreted in a row-major format, where the beginnings of two consecutive
/// rows are separated by `row_stride` elements.
///
/// # Panics
/// The function panics if `row_stride < ncols`, or if the last element of the matrix does not
/// fit in the slice.
#[track_caller]
#[inline(always)]
pub fn from_row_major_slice_with_stride<E: ComplexField>(
    slice: &[E],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
) -> MatRef<'_, E> {
    from_column_major_slice_with_stride(slice, ncols, nrows, row_stride).transpose()
}

impl<'a, E: ComplexField> core::fmt::Debug for MatRef<'a, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct DebugRow<'a, T: ComplexField>(MatRef<'a, T>, usize);

        impl<'a, T: ComplexField> core::fmt::Debug for DebugRow<'a, T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list()
                    .entries((0..self.0.ncols()).map(|j| self.0.read(self.1, j)))
                    .finish()
            }
        }

        f.debug_list()
            .entries((0..self.nrows()).map(|i| DebugRow(*self, i)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn slice_layouts() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0f64];

        let a = from_column_major_slice(&data, 2, 3);
        assert!(a.storage_order() == Some(StorageOrder::ColumnMajor));
        assert!(all(a.read(1, 0) == 2.0, a.read(0, 1) == 3.0, a.read(1, 2) == 6.0));

        let b = from_row_major_slice(&data, 2, 3);
        assert!(b.storage_order() == Some(StorageOrder::RowMajor));
        assert!(all(b.read(1, 0) == 4.0, b.read(0, 1) == 2.0, b.read(1, 2) == 6.0));
        assert!(b.row_stride() == 3);

        let t = a.transpose();
        assert!(all(t.nrows() == 3, t.ncols() == 2, t.read(2, 1) == 6.0));
    }

    #[test]
    fn padded_strides() {
        let data = [1.0, 2.0, -1.0, 3.0, 4.0f64];
        let a = from_column_major_slice_with_stride(&data, 2, 2, 3);
        assert!(all(a.read(0, 1) == 3.0, a.read(1, 1) == 4.0, a.col_stride() == 3));

        let b = from_row_major_slice_with_stride(&data, 2, 2, 3);
        assert!(all(b.read(1, 0) == 3.0, b.read(0, 1) == 2.0, b.row_stride() == 3));

        let empty = from_column_major_slice_with_stride::<f64>(&[], 0, 4, 0);
        assert!(empty.ncols() == 4);
    }

    #[test]
    fn generic_strides_have_no_storage_order() {
        let data = [0.0f64; 12];
        let a = unsafe { from_raw_parts(data.as_ptr(), 2, 2, 2, 4) };
        assert!(a.storage_order().is_none());
        let b = unsafe { from_raw_parts(data.as_ptr(), 2, 2, 1, -2) };
        assert!(b.storage_order().is_none());
    }

    #[test]
    #[should_panic]
    fn wrong_slice_length() {
        let data = [0.0f64; 5];
        from_column_major_slice(&data, 2, 3);
    }

    #[test]
    #[should_panic]
    fn stride_too_small() {
        let data = [0.0f64; 8];
        from_column_major_slice_with_stride(&data, 3, 2, 2);
    }
}
