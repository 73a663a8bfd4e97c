use crate::{entity::ComplexField, Conj};
use core::fmt::Debug;
use core::marker::PhantomData;

/// Do conjugate.
#[derive(Copy, Clone, Debug)]
pub struct YesConj;
/// Do not conjugate.
#[derive(Copy, Clone, Debug)]
pub struct NoConj;

/// Similar to [`Conj`], but determined at compile time instead of runtime.
pub trait ConjTy: Copy + Debug {
    /// The corresponding [`Conj`] value.
    const CONJ: Conj;
    /// The opposing conjugation type.
    type Flip: ConjTy;

    /// Returns an instance of the corresponding conjugation type.
    fn flip(self) -> Self::Flip;
}

impl ConjTy for YesConj {
    const CONJ: Conj = Conj::Yes;
    type Flip = NoConj;
    #[inline(always)]
    fn flip(self) -> Self::Flip {
        NoConj
    }
}
impl ConjTy for NoConj {
    const CONJ: Conj = Conj::No;
    type Flip = YesConj;
    #[inline(always)]
    fn flip(self) -> Self::Flip {
        YesConj
    }
}

/// Wrapper for simd operations for type `E`.
pub struct SimdFor<E: ComplexField, S: pulp::Simd> {
    /// Simd token.
    pub simd: S,
    __marker: PhantomData<E>,
}

impl<E: ComplexField, S: pulp::Simd> Copy for SimdFor<E, S> {}
impl<E: ComplexField, S: pulp::Simd> Clone for SimdFor<E, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ComplexField, S: pulp::Simd> SimdFor<E, S> {
    /// Create a new wrapper from a simd token.
    #[inline(always)]
    pub fn new(simd: S) -> Self {
        Self {
            simd,
            __marker: PhantomData,
        }
    }

    /// Number of scalars held by one vector register.
    #[inline(always)]
    pub fn lane_count(self) -> usize {
        core::mem::size_of::<E::SimdUnit<S>>() / core::mem::size_of::<E>()
    }

    /// Number of leading elements of the buffer starting at `ptr` that must be processed one at a
    /// time before a register-aligned address is reached, capped at `len`.
    ///
    /// If no element of the buffer can ever be register-aligned (the misalignment is not a
    /// multiple of the scalar size), the whole length is returned.
    #[inline(always)]
    pub fn align_offset(self, ptr: *const E, len: usize) -> usize {
        let register_size = core::mem::size_of::<E::SimdUnit<S>>();
        if self.lane_count() <= 1 {
            return 0;
        }

        let misalignment = (ptr as usize) % register_size;
        if misalignment == 0 {
            return 0;
        }

        let gap = register_size - misalignment;
        if gap % core::mem::size_of::<E>() != 0 {
            len
        } else {
            Ord::min(gap / core::mem::size_of::<E>(), len)
        }
    }

    /// Returns a register with all lanes set to `value`.
    #[inline(always)]
    pub fn splat(self, value: E) -> E::SimdUnit<S> {
        E::faer_simd_splat(self.simd, value)
    }

    /// Loads one register worth of scalars starting at `ptr`, with no alignment requirement.
    ///
    /// # Safety
    /// `ptr` must be valid for reading [`Self::lane_count`] consecutive elements.
    #[inline(always)]
    pub unsafe fn read_unaligned(self, ptr: *const E) -> E::SimdUnit<S> {
        ptr.cast::<E::SimdUnit<S>>().read_unaligned()
    }

    /// Loads one register worth of scalars starting at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for reading [`Self::lane_count`] consecutive elements, and aligned to
    /// the register size.
    #[inline(always)]
    pub unsafe fn read_aligned(self, ptr: *const E) -> E::SimdUnit<S> {
        ptr.cast::<E::SimdUnit<S>>().read()
    }

    /// Stores one register worth of scalars starting at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writing [`Self::lane_count`] consecutive elements, and aligned to
    /// the register size.
    #[inline(always)]
    pub unsafe fn write_aligned(self, ptr: *mut E, values: E::SimdUnit<S>) {
        ptr.cast::<E::SimdUnit<S>>().write(values)
    }

    /// Returns `lhs * rhs + acc`.
    #[inline(always)]
    pub fn scalar_mul_add_e(self, lhs: E, rhs: E, acc: E) -> E {
        E::faer_simd_scalar_mul_adde(self.simd, lhs, rhs, acc)
    }
    /// Returns `conj(lhs) * rhs + acc`.
    #[inline(always)]
    pub fn scalar_conj_mul_add_e(self, lhs: E, rhs: E, acc: E) -> E {
        E::faer_simd_scalar_conj_mul_adde(self.simd, lhs, rhs, acc)
    }
    /// Returns `op(lhs) * rhs + acc`, where `op` is either the conjugation or the identity
    /// operation.
    #[inline(always)]
    pub fn scalar_conditional_conj_mul_add_e<C: ConjTy>(
        self,
        conj: C,
        lhs: E,
        rhs: E,
        acc: E,
    ) -> E {
        let _ = conj;
        if C::CONJ == Conj::Yes {
            self.scalar_conj_mul_add_e(lhs, rhs, acc)
        } else {
            self.scalar_mul_add_e(lhs, rhs, acc)
        }
    }

    /// Returns `lhs * rhs + acc`.
    #[inline(always)]
    pub fn mul_add_e(
        self,
        lhs: E::SimdUnit<S>,
        rhs: E::SimdUnit<S>,
        acc: E::SimdUnit<S>,
    ) -> E::SimdUnit<S> {
        E::faer_simd_mul_adde(self.simd, lhs, rhs, acc)
    }
    /// Returns `conj(lhs) * rhs + acc`.
    #[inline(always)]
    pub fn conj_mul_add_e(
        self,
        lhs: E::SimdUnit<S>,
        rhs: E::SimdUnit<S>,
        acc: E::SimdUnit<S>,
    ) -> E::SimdUnit<S> {
        E::faer_simd_conj_mul_adde(self.simd, lhs, rhs, acc)
    }
    /// Returns `op(lhs) * rhs + acc`, where `op` is either the conjugation or the identity
    /// operation.
    #[inline(always)]
    pub fn conditional_conj_mul_add_e<C: ConjTy>(
        self,
        conj: C,
        lhs: E::SimdUnit<S>,
        rhs: E::SimdUnit<S>,
        acc: E::SimdUnit<S>,
    ) -> E::SimdUnit<S> {
        let _ = conj;
        if C::CONJ == Conj::Yes {
            self.conj_mul_add_e(lhs, rhs, acc)
        } else {
            self.mul_add_e(lhs, rhs, acc)
        }
    }

    /// Returns the sum of the lanes of `values`.
    #[inline(always)]
    pub fn reduce_add(self, values: E::SimdUnit<S>) -> E {
        E::faer_simd_reduce_add(self.simd, values)
    }
}
