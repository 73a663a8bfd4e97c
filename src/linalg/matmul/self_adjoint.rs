//! Product of a self-adjoint matrix with a vector, reading a single triangular half of the matrix.
//!
//! The matrix $A$ is symmetric when `E` is real and hermitian when `E` is complex. Only the
//! triangle selected by [`Side`] is read, diagonal included. The other triangle is implied by
//! $A_{ij} = \overline{A_{ji}}$, and may contain arbitrary (even uninitialized-looking, e.g. `NaN`)
//! values.
//!
//! Each stored off-diagonal element is loaded once and used twice: once as $A_{ij}$ to update
//! `acc[i]`, and once as $A_{ji}$ to update `acc[j]`. Columns are processed two at a time, and the
//! inner loop over the rows of a column pair is vectorized with aligned stores to the
//! accumulator.

use crate::{
    assert,
    col::{ColMut, ColRef},
    debug_assert,
    entity::{ComplexField, SimdCtx},
    linalg::{temp_vec_req, temp_vec_uninit},
    mat::MatRef,
    utils::simd::{ConjTy, NoConj, SimdFor, YesConj},
    Conj, Scale, Side, StorageOrder,
};
use core::ops::{Mul, Range};
use dyn_stack::{GlobalPodBuffer, PodStack, SizeOverflow, StackReq};
use pulp::Simd;
use reborrow::*;

/// Number of columns at the short end of the triangle that are processed one at a time instead of
/// in pairs.
pub const SCALAR_MARGIN: usize = 8;

/// Memory layout of the stored triangle of a self-adjoint matrix, as seen by the kernel.
///
/// Kernel column `j` starts at `ptr + j * leading_dim` and holds `dim` contiguous elements. For a
/// column-major matrix it is column `j` of $A$; for a row-major matrix it is row `j` of $A$, that
/// is, column `j` of $\overline{A}$.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelfAdjointLayout {
    pub dim: usize,
    pub leading_dim: usize,
    pub storage_order: StorageOrder,
    pub side: Side,
}

impl SelfAdjointLayout {
    /// Extracts the layout of `mat`, whose triangle `side` holds the data.
    ///
    /// # Panics
    /// Panics if `mat` is not square, or if it has no unit stride along one of its dimensions
    /// together with a nonnegative stride along the other one.
    #[track_caller]
    pub fn from_mat<E: ComplexField>(mat: MatRef<'_, E>, side: Side) -> Self {
        let dim = mat.nrows();
        assert!(mat.ncols() == dim);

        if dim <= 1 {
            return Self {
                dim,
                leading_dim: dim,
                storage_order: StorageOrder::ColumnMajor,
                side,
            };
        }

        let (storage_order, leading_dim) = match mat.storage_order() {
            Some(StorageOrder::ColumnMajor) => (StorageOrder::ColumnMajor, mat.col_stride()),
            Some(StorageOrder::RowMajor) => (StorageOrder::RowMajor, mat.row_stride()),
            None => panic!(
                "self-adjoint matrix must have a unit stride along one dimension, found row stride {} and column stride {}",
                mat.row_stride(),
                mat.col_stride(),
            ),
        };

        Self {
            dim,
            leading_dim: leading_dim as usize,
            storage_order,
            side,
        }
    }

    /// Returns `true` if the stored off-diagonal elements of kernel column `j` lie in `[0, j)`,
    /// and `false` if they lie in `(j, dim)`.
    #[inline]
    pub fn first_triangular(&self) -> bool {
        (self.storage_order == StorageOrder::RowMajor) == (self.side == Side::Lower)
    }

    /// Splits the kernel columns into the span processed in pairs, whose length is even, and the
    /// span processed one column at a time.
    #[inline]
    pub fn column_split(&self) -> (Range<usize>, Range<usize>) {
        let n = self.dim;
        let bound = n.saturating_sub(SCALAR_MARGIN) & !1;
        if self.first_triangular() {
            (n - bound..n, 0..n - bound)
        } else {
            (0..bound, bound..n)
        }
    }
}

/// Conjugation applied to a stored element when it is used as $A_{ij}$ (direct) and as $A_{ji}$
/// (transposed).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ConjRoles {
    direct: Conj,
    transposed: Conj,
}

impl ConjRoles {
    #[inline]
    fn new<E: ComplexField>(storage_order: StorageOrder, conj_lhs: Conj, conj_rhs: Conj) -> Self {
        if E::IS_REAL {
            return Self {
                direct: Conj::No,
                transposed: Conj::No,
            };
        }

        let row_major = match storage_order {
            StorageOrder::ColumnMajor => Conj::No,
            StorageOrder::RowMajor => Conj::Yes,
        };
        let direct = conj_lhs.compose(row_major);
        // the transposed sum is conjugated once more at the end when the rhs is conjugated
        let transposed = direct.compose(Conj::Yes).compose(conj_rhs);
        Self { direct, transposed }
    }
}

#[inline(always)]
fn conj_if<E: ComplexField>(value: E, conj: Conj) -> E {
    match conj {
        Conj::Yes => value.faer_conj(),
        Conj::No => value,
    }
}

/// Kernel column `j`, viewed as a slice of `dim` elements.
///
/// # Safety
/// `ptr + j * leading_dim` must be valid for reading `dim` elements for the lifetime `'a`.
#[inline(always)]
unsafe fn kernel_col<'a, E>(ptr: *const E, leading_dim: usize, dim: usize, j: usize) -> &'a [E] {
    core::slice::from_raw_parts(ptr.add(j * leading_dim), dim)
}

/// Accumulates `op(a0) * t0 + op(a1) * t1` into `acc`, and returns the sums of
/// `op'(a0) * rhs` and `op'(a1) * rhs`.
#[inline(always)]
fn two_columns<CD: ConjTy, CT: ConjTy, E: ComplexField, S: Simd>(
    simd: SimdFor<E, S>,
    conj_direct: CD,
    conj_transposed: CT,
    acc: &mut [E],
    a0: &[E],
    a1: &[E],
    rhs: &[E],
    t0: E,
    t1: E,
) -> (E, E) {
    let len = acc.len();
    debug_assert!(all(a0.len() == len, a1.len() == len, rhs.len() == len));

    let lane_count = simd.lane_count();
    let head_end = simd.align_offset(acc.as_ptr(), len);
    let body_end = head_end + (len - head_end) / lane_count * lane_count;

    let mut sum0 = E::faer_zero();
    let mut sum1 = E::faer_zero();

    #[inline(always)]
    fn scalar<CD: ConjTy, CT: ConjTy, E: ComplexField, S: Simd>(
        simd: SimdFor<E, S>,
        conj_direct: CD,
        conj_transposed: CT,
        acc: &mut [E],
        a0: &[E],
        a1: &[E],
        rhs: &[E],
        t0: E,
        t1: E,
        sum0: &mut E,
        sum1: &mut E,
        range: Range<usize>,
    ) {
        for i in range {
            let (a0, a1, x) = (a0[i], a1[i], rhs[i]);
            acc[i] = simd.scalar_conditional_conj_mul_add_e(
                conj_direct,
                a1,
                t1,
                simd.scalar_conditional_conj_mul_add_e(conj_direct, a0, t0, acc[i]),
            );
            *sum0 = simd.scalar_conditional_conj_mul_add_e(conj_transposed, a0, x, *sum0);
            *sum1 = simd.scalar_conditional_conj_mul_add_e(conj_transposed, a1, x, *sum1);
        }
    }

    scalar(
        simd,
        conj_direct,
        conj_transposed,
        acc,
        a0,
        a1,
        rhs,
        t0,
        t1,
        &mut sum0,
        &mut sum1,
        0..head_end,
    );

    if body_end > head_end {
        let t0 = simd.splat(t0);
        let t1 = simd.splat(t1);
        let mut simd_sum0 = simd.splat(E::faer_zero());
        let mut simd_sum1 = simd.splat(E::faer_zero());

        let acc = acc.as_mut_ptr();
        let a0 = a0.as_ptr();
        let a1 = a1.as_ptr();
        let rhs = rhs.as_ptr();

        let mut i = head_end;
        while i < body_end {
            // SAFETY: `i + lane_count <= body_end <= len`, and `acc + i` is register aligned
            unsafe {
                let a0 = simd.read_unaligned(a0.add(i));
                let a1 = simd.read_unaligned(a1.add(i));
                let x = simd.read_unaligned(rhs.add(i));

                let mut dst = simd.read_aligned(acc.add(i));
                dst = simd.conditional_conj_mul_add_e(conj_direct, a0, t0, dst);
                dst = simd.conditional_conj_mul_add_e(conj_direct, a1, t1, dst);
                simd.write_aligned(acc.add(i), dst);

                simd_sum0 = simd.conditional_conj_mul_add_e(conj_transposed, a0, x, simd_sum0);
                simd_sum1 = simd.conditional_conj_mul_add_e(conj_transposed, a1, x, simd_sum1);
            }
            i += lane_count;
        }

        sum0 = sum0.faer_add(simd.reduce_add(simd_sum0));
        sum1 = sum1.faer_add(simd.reduce_add(simd_sum1));
    }

    scalar(
        simd,
        conj_direct,
        conj_transposed,
        acc,
        a0,
        a1,
        rhs,
        t0,
        t1,
        &mut sum0,
        &mut sum1,
        body_end..len,
    );

    (sum0, sum1)
}

#[inline(always)]
fn column_pair<CD: ConjTy, CT: ConjTy, E: ComplexField, S: Simd>(
    simd: SimdFor<E, S>,
    conj_direct: CD,
    conj_transposed: CT,
    conj_rhs: Conj,
    acc: &mut [E],
    a0: &[E],
    a1: &[E],
    rhs: &[E],
    j: usize,
    first_triangular: bool,
    alpha: E,
) {
    let n = acc.len();
    let t0 = alpha.faer_mul(conj_if(rhs[j], conj_rhs));
    let t1 = alpha.faer_mul(conj_if(rhs[j + 1], conj_rhs));

    let mut sum0 = E::faer_zero();
    let mut sum1 = E::faer_zero();

    // 2x2 diagonal block
    acc[j] = simd.scalar_conditional_conj_mul_add_e(conj_direct, a0[j], t0, acc[j]);
    if first_triangular {
        acc[j + 1] =
            simd.scalar_conditional_conj_mul_add_e(conj_direct, a1[j + 1], t1, acc[j + 1]);
        acc[j] = simd.scalar_conditional_conj_mul_add_e(conj_direct, a1[j], t1, acc[j]);
        sum1 = simd.scalar_conditional_conj_mul_add_e(conj_transposed, a1[j], rhs[j], sum1);
    } else {
        acc[j + 1] = simd.scalar_conditional_conj_mul_add_e(
            conj_direct,
            a1[j + 1],
            t1,
            simd.scalar_conditional_conj_mul_add_e(conj_direct, a0[j + 1], t0, acc[j + 1]),
        );
        sum0 =
            simd.scalar_conditional_conj_mul_add_e(conj_transposed, a0[j + 1], rhs[j + 1], sum0);
    }

    let range = if first_triangular { 0..j } else { j + 2..n };
    let (inner0, inner1) = two_columns(
        simd,
        conj_direct,
        conj_transposed,
        &mut acc[range.clone()],
        &a0[range.clone()],
        &a1[range.clone()],
        &rhs[range],
        t0,
        t1,
    );
    sum0 = sum0.faer_add(inner0);
    sum1 = sum1.faer_add(inner1);

    acc[j] = acc[j].faer_add(alpha.faer_mul(conj_if(sum0, conj_rhs)));
    acc[j + 1] = acc[j + 1].faer_add(alpha.faer_mul(conj_if(sum1, conj_rhs)));
}

#[inline(always)]
fn single_column<CD: ConjTy, CT: ConjTy, E: ComplexField, S: Simd>(
    simd: SimdFor<E, S>,
    conj_direct: CD,
    conj_transposed: CT,
    conj_rhs: Conj,
    acc: &mut [E],
    a0: &[E],
    rhs: &[E],
    j: usize,
    first_triangular: bool,
    alpha: E,
) {
    let n = acc.len();
    let t0 = alpha.faer_mul(conj_if(rhs[j], conj_rhs));
    let mut sum0 = E::faer_zero();

    acc[j] = simd.scalar_conditional_conj_mul_add_e(conj_direct, a0[j], t0, acc[j]);

    let range = if first_triangular { 0..j } else { j + 1..n };
    for i in range {
        acc[i] = simd.scalar_conditional_conj_mul_add_e(conj_direct, a0[i], t0, acc[i]);
        sum0 = simd.scalar_conditional_conj_mul_add_e(conj_transposed, a0[i], rhs[i], sum0);
    }

    acc[j] = acc[j].faer_add(alpha.faer_mul(conj_if(sum0, conj_rhs)));
}

struct Impl<'a, CD: ConjTy, CT: ConjTy, E: ComplexField> {
    conj_direct: CD,
    conj_transposed: CT,
    conj_rhs: Conj,
    acc: &'a mut [E],
    lhs: *const E,
    layout: SelfAdjointLayout,
    rhs: &'a [E],
    alpha: E,
}

impl<CD: ConjTy, CT: ConjTy, E: ComplexField> pulp::WithSimd for Impl<'_, CD, CT, E> {
    type Output = ();

    #[inline(always)]
    fn with_simd<S: Simd>(self, simd: S) -> Self::Output {
        let Self {
            conj_direct,
            conj_transposed,
            conj_rhs,
            acc,
            lhs,
            layout,
            rhs,
            alpha,
        } = self;

        let simd = SimdFor::<E, S>::new(simd);
        let n = layout.dim;
        let ld = layout.leading_dim;
        let first_triangular = layout.first_triangular();
        let (pairs, singles) = layout.column_split();

        for j in pairs.step_by(2) {
            // SAFETY: `j + 1 < n`, and every kernel column holds `n` readable elements
            let (a0, a1) = unsafe { (kernel_col(lhs, ld, n, j), kernel_col(lhs, ld, n, j + 1)) };
            column_pair(
                simd,
                conj_direct,
                conj_transposed,
                conj_rhs,
                acc,
                a0,
                a1,
                rhs,
                j,
                first_triangular,
                alpha,
            );
        }

        for j in singles {
            // SAFETY: `j < n`
            let a0 = unsafe { kernel_col(lhs, ld, n, j) };
            single_column(
                simd,
                conj_direct,
                conj_transposed,
                conj_rhs,
                acc,
                a0,
                rhs,
                j,
                first_triangular,
                alpha,
            );
        }
    }
}

/// Computes `acc += alpha * op(A) * op(rhs)` for the self-adjoint matrix `A` described by `lhs`
/// and `layout`, without checking the dimensions.
///
/// If `rhs` is not contiguous, it is first copied to a temporary vector allocated from `stack`.
///
/// # Safety
/// The behavior is undefined if any of the following conditions are violated:
/// * `acc.len() == layout.dim` and `rhs.nrows() == layout.dim`.
/// * for every `j < layout.dim`, `lhs + j * layout.leading_dim` is valid for reading
/// `layout.dim` consecutive initialized elements.
/// * the memory read through `lhs` does not overlap `acc`.
///
/// # Panics
/// Panics if `rhs` is not contiguous and `stack` is smaller than the size returned by
/// [`matvec_self_adjoint_req`].
#[track_caller]
pub unsafe fn self_adjoint_matvec_unchecked<E: ComplexField>(
    arch: impl SimdCtx,
    acc: &mut [E],
    layout: SelfAdjointLayout,
    lhs: *const E,
    conj_lhs: Conj,
    rhs: ColRef<'_, E>,
    conj_rhs: Conj,
    alpha: E,
    stack: PodStack<'_>,
) {
    let n = layout.dim;
    debug_assert!(all(acc.len() == n, rhs.nrows() == n));
    if n == 0 {
        return;
    }

    let mut stack = stack;
    let rhs: &[E] = if rhs.row_stride() == 1 {
        rhs.try_as_slice()
    } else {
        let (tmp, _) = temp_vec_uninit::<E>(n, stack.rb_mut());
        for (i, dst) in tmp.iter_mut().enumerate() {
            *dst = rhs.read_unchecked(i);
        }
        tmp
    };

    let roles = ConjRoles::new::<E>(layout.storage_order, conj_lhs, conj_rhs);
    match (roles.direct, roles.transposed) {
        (Conj::No, Conj::No) => arch.dispatch(Impl {
            conj_direct: NoConj,
            conj_transposed: NoConj,
            conj_rhs,
            acc,
            lhs,
            layout,
            rhs,
            alpha,
        }),
        (Conj::No, Conj::Yes) => arch.dispatch(Impl {
            conj_direct: NoConj,
            conj_transposed: YesConj,
            conj_rhs,
            acc,
            lhs,
            layout,
            rhs,
            alpha,
        }),
        (Conj::Yes, Conj::No) => arch.dispatch(Impl {
            conj_direct: YesConj,
            conj_transposed: NoConj,
            conj_rhs,
            acc,
            lhs,
            layout,
            rhs,
            alpha,
        }),
        (Conj::Yes, Conj::Yes) => arch.dispatch(Impl {
            conj_direct: YesConj,
            conj_transposed: YesConj,
            conj_rhs,
            acc,
            lhs,
            layout,
            rhs,
            alpha,
        }),
    }
}

/// Computes the size and alignment of the workspace required by
/// [`matvec_self_adjoint_with_conj`], for a matrix of dimension `dim` and a right-hand side with
/// the given row stride.
pub fn matvec_self_adjoint_req<E: ComplexField>(
    dim: usize,
    rhs_row_stride: isize,
) -> Result<StackReq, SizeOverflow> {
    if rhs_row_stride == 1 {
        Ok(StackReq::empty())
    } else {
        temp_vec_req::<E>(dim)
    }
}

/// Computes `acc += alpha * op(lhs) * op(rhs)`, where `lhs` is self-adjoint and only its
/// triangle `lhs_side` is read, and `op` conjugates its operand depending on `conj_lhs` and
/// `conj_rhs`. The SIMD instruction set is chosen by `arch`.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `lhs.nrows() == lhs.ncols()`.
/// * `acc.nrows() == lhs.nrows()` and `rhs.nrows() == lhs.nrows()`.
/// * `acc.row_stride() == 1`.
/// * `lhs` has a unit stride along one dimension, and a nonnegative stride along the other.
/// * `stack` is at least as large as [`matvec_self_adjoint_req`] requires.
#[track_caller]
pub fn matvec_self_adjoint_with_conj_arch<E: ComplexField>(
    arch: impl SimdCtx,
    acc: ColMut<'_, E>,
    lhs: MatRef<'_, E>,
    lhs_side: Side,
    conj_lhs: Conj,
    rhs: ColRef<'_, E>,
    conj_rhs: Conj,
    alpha: E,
    stack: PodStack<'_>,
) {
    let n = lhs.nrows();
    assert!(all(
        lhs.ncols() == n,
        acc.nrows() == n,
        rhs.nrows() == n,
        acc.row_stride() == 1,
    ));
    let layout = SelfAdjointLayout::from_mat(lhs, lhs_side);

    #[cfg(feature = "perf-warn")]
    if rhs.row_stride() != 1 && crate::__perf_warn!(SELF_ADJOINT_RHS_WARN) {
        log::warn!(target: "faer_perf", "Self-adjoint matvec prefers a contiguous right-hand side. Found vector with row stride {}, copying it.", rhs.row_stride());
    }
    #[cfg(feature = "perf-warn")]
    if n > 0
        && (acc.rb().as_ptr() as usize) % core::mem::size_of::<E>() != 0
        && crate::__perf_warn!(SELF_ADJOINT_ACC_WARN)
    {
        log::warn!(target: "faer_perf", "Self-adjoint matvec prefers an accumulator aligned to its element size. Found misaligned accumulator, vectorization is disabled.");
    }

    let acc = acc.try_as_slice_mut();
    // SAFETY: the dimensions were checked above, and `MatRef` guarantees that every kernel column
    // is readable. `acc` is borrowed mutably so it cannot overlap `lhs`.
    unsafe {
        self_adjoint_matvec_unchecked(
            arch,
            acc,
            layout,
            lhs.as_ptr(),
            conj_lhs,
            rhs,
            conj_rhs,
            alpha,
            stack,
        )
    }
}

/// Computes `acc += alpha * op(lhs) * op(rhs)`, where `lhs` is self-adjoint and only its
/// triangle `lhs_side` is read, and `op` conjugates its operand depending on `conj_lhs` and
/// `conj_rhs`.
///
/// # Panics
/// See [`matvec_self_adjoint_with_conj_arch`].
#[track_caller]
pub fn matvec_self_adjoint_with_conj<E: ComplexField>(
    acc: ColMut<'_, E>,
    lhs: MatRef<'_, E>,
    lhs_side: Side,
    conj_lhs: Conj,
    rhs: ColRef<'_, E>,
    conj_rhs: Conj,
    alpha: E,
    stack: PodStack<'_>,
) {
    matvec_self_adjoint_with_conj_arch(
        E::Simd::default(),
        acc,
        lhs,
        lhs_side,
        conj_lhs,
        rhs,
        conj_rhs,
        alpha,
        stack,
    )
}

/// Computes `acc += alpha * lhs * rhs`, where `lhs` is self-adjoint and only its triangle
/// `lhs_side` is read. The workspace is allocated internally when needed.
///
/// # Panics
/// See [`matvec_self_adjoint_with_conj_arch`].
#[track_caller]
pub fn matvec_self_adjoint<E: ComplexField>(
    acc: ColMut<'_, E>,
    lhs: MatRef<'_, E>,
    lhs_side: Side,
    rhs: ColRef<'_, E>,
    alpha: E,
) {
    let mut mem =
        GlobalPodBuffer::new(matvec_self_adjoint_req::<E>(lhs.nrows(), rhs.row_stride()).unwrap());
    matvec_self_adjoint_with_conj(
        acc,
        lhs,
        lhs_side,
        Conj::No,
        rhs,
        Conj::No,
        alpha,
        PodStack::new(&mut mem),
    )
}

/// Operand of a self-adjoint product carrying an implicit conjugation and an embedded scale
/// factor. It represents `op(factor * view)`, where `op` conjugates when `conj == Conj::Yes`.
///
/// Usually built as `scale(k) * view`, then [`Scaled::conjugate`] if needed.
#[derive(Copy, Clone, Debug)]
pub struct Scaled<V, E> {
    pub view: V,
    pub conj: Conj,
    pub factor: E,
}

impl<V, E: ComplexField> Scaled<V, E> {
    /// Wraps `view` with no conjugation and a unit factor.
    #[inline]
    pub fn new(view: V) -> Self {
        Self {
            view,
            conj: Conj::No,
            factor: E::faer_one(),
        }
    }

    /// Returns the conjugate of the operand.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            conj: self.conj.compose(Conj::Yes),
            ..self
        }
    }

    /// Returns the scalar `s` such that the operand is equal to `s * op(view)`.
    #[inline]
    pub fn extracted_factor(&self) -> E {
        conj_if(self.factor, self.conj)
    }
}

impl<'a, E: ComplexField> Mul<MatRef<'a, E>> for Scale<E> {
    type Output = Scaled<MatRef<'a, E>, E>;

    #[inline]
    fn mul(self, rhs: MatRef<'a, E>) -> Self::Output {
        Scaled {
            view: rhs,
            conj: Conj::No,
            factor: self.0,
        }
    }
}

impl<'a, E: ComplexField> Mul<ColRef<'a, E>> for Scale<E> {
    type Output = Scaled<ColRef<'a, E>, E>;

    #[inline]
    fn mul(self, rhs: ColRef<'a, E>) -> Self::Output {
        Scaled {
            view: rhs,
            conj: Conj::No,
            factor: self.0,
        }
    }
}

impl<V, E: ComplexField> Mul<Scaled<V, E>> for Scale<E> {
    type Output = Scaled<V, E>;

    #[inline]
    fn mul(self, rhs: Scaled<V, E>) -> Self::Output {
        // k * op(f * v) == op(op(k) * f * v)
        let factor = rhs.factor.faer_mul(conj_if(self.0, rhs.conj));
        Scaled { factor, ..rhs }
    }
}

/// Computes `acc += alpha * lhs * rhs`, where the scale factors and conjugations embedded in
/// `lhs` and `rhs` are folded into `alpha` and the conjugation flags of the product.
///
/// # Panics
/// See [`matvec_self_adjoint_with_conj_arch`].
#[track_caller]
pub fn matvec_self_adjoint_scaled<E: ComplexField>(
    acc: ColMut<'_, E>,
    lhs: Scaled<MatRef<'_, E>, E>,
    lhs_side: Side,
    rhs: Scaled<ColRef<'_, E>, E>,
    alpha: E,
    stack: PodStack<'_>,
) {
    let alpha = alpha
        .faer_mul(lhs.extracted_factor())
        .faer_mul(rhs.extracted_factor());
    matvec_self_adjoint_with_conj(
        acc, lhs.view, lhs_side, lhs.conj, rhs.view, rhs.conj, alpha, stack,
    )
}
