//! Scalar types supported by the crate, along with the arithmetic and SIMD operations the kernels
//! need from them.

use bytemuck::Pod;
use core::fmt::Debug;
use pulp::Simd;

/// 32-bit complex floating point type.
#[allow(non_camel_case_types)]
pub type c32 = num_complex::Complex<f32>;
/// 64-bit complex floating point type.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex<f64>;

/// Runtime SIMD dispatcher.
pub trait SimdCtx: core::fmt::Debug + Copy + Send + Sync + 'static + Default {
    fn dispatch<Op: pulp::WithSimd>(self, f: Op) -> Op::Output;
}

/// Dispatcher that always runs the scalar fallback, with a lane count of one.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoSimd;

impl SimdCtx for pulp::Arch {
    #[inline(always)]
    fn dispatch<Op: pulp::WithSimd>(self, f: Op) -> Op::Output {
        self.dispatch(f)
    }
}

impl SimdCtx for NoSimd {
    #[inline(always)]
    fn dispatch<Op: pulp::WithSimd>(self, f: Op) -> Op::Output {
        f.with_simd(pulp::Scalar::new())
    }
}

/// Unstable trait containing the operations that a number type needs to implement.
///
/// A value of type `Self::SimdUnit<S>` holds as many consecutive scalars as fit in one register of
/// the instruction set `S`, laid out exactly as they are in a slice of `Self`.
pub trait ComplexField: Copy + Debug + PartialEq + Send + Sync + Pod + 'static {
    type Real: RealField;
    type Simd: SimdCtx;
    type SimdUnit<S: Simd>: Copy;

    /// `true` if the imaginary part is always zero, in which case conjugation is the identity.
    const IS_REAL: bool;

    /// Converts `value` from `f64` to `Self`.
    /// The conversion may be lossy when converting to a type with less precision.
    fn faer_from_f64(value: f64) -> Self;

    /// Returns `self + rhs`.
    fn faer_add(self, rhs: Self) -> Self;
    /// Returns `self - rhs`.
    fn faer_sub(self, rhs: Self) -> Self;
    /// Returns `self * rhs`.
    fn faer_mul(self, rhs: Self) -> Self;

    /// Returns `conjugate(self)`.
    fn faer_conj(self) -> Self;

    /// Returns the absolute value of `self`.
    fn faer_abs(self) -> Self::Real;
    /// Returns the squared absolute value of `self`.
    fn faer_abs2(self) -> Self::Real;

    /// Returns a NaN value.
    fn faer_nan() -> Self;

    /// Returns true if `self` is a NaN value, or false otherwise.
    #[inline(always)]
    fn faer_is_nan(&self) -> bool {
        #[allow(clippy::eq_op)]
        {
            self != self
        }
    }

    /// Returns a complex number whose real part is equal to `real`, and a zero imaginary part.
    fn faer_from_real(real: Self::Real) -> Self;

    /// Returns the real part.
    fn faer_real(self) -> Self::Real;

    /// Returns `0.0`.
    fn faer_zero() -> Self;
    /// Returns `1.0`.
    fn faer_one() -> Self;

    fn faer_simd_splat<S: Simd>(simd: S, value: Self) -> Self::SimdUnit<S>;
    /// Returns `lhs * rhs + acc`.
    fn faer_simd_mul_adde<S: Simd>(
        simd: S,
        lhs: Self::SimdUnit<S>,
        rhs: Self::SimdUnit<S>,
        acc: Self::SimdUnit<S>,
    ) -> Self::SimdUnit<S>;
    /// Returns `conj(lhs) * rhs + acc`.
    fn faer_simd_conj_mul_adde<S: Simd>(
        simd: S,
        lhs: Self::SimdUnit<S>,
        rhs: Self::SimdUnit<S>,
        acc: Self::SimdUnit<S>,
    ) -> Self::SimdUnit<S>;
    /// Returns the sum of all the lanes of `values`.
    fn faer_simd_reduce_add<S: Simd>(simd: S, values: Self::SimdUnit<S>) -> Self;

    #[inline(always)]
    fn faer_simd_scalar_mul_adde<S: Simd>(simd: S, lhs: Self, rhs: Self, acc: Self) -> Self {
        let _ = simd;
        lhs.faer_mul(rhs).faer_add(acc)
    }
    #[inline(always)]
    fn faer_simd_scalar_conj_mul_adde<S: Simd>(simd: S, lhs: Self, rhs: Self, acc: Self) -> Self {
        let _ = simd;
        lhs.faer_conj().faer_mul(rhs).faer_add(acc)
    }
}

/// Unstable trait containing the operations that a real number type needs to implement.
pub trait RealField: ComplexField<Real = Self> + PartialOrd {
    /// Returns the machine epsilon.
    fn faer_epsilon() -> Self;
}

macro_rules! impl_real {
    ($ty: ty, $splat: ident, $mul_add_e: ident, $reduce_sum: ident, $units: ident) => {
        impl ComplexField for $ty {
            type Real = Self;
            type Simd = pulp::Arch;
            type SimdUnit<S: Simd> = S::$units;

            const IS_REAL: bool = true;

            #[inline(always)]
            fn faer_from_f64(value: f64) -> Self {
                value as _
            }

            #[inline(always)]
            fn faer_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline(always)]
            fn faer_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline(always)]
            fn faer_mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline(always)]
            fn faer_conj(self) -> Self {
                self
            }

            #[inline(always)]
            fn faer_abs(self) -> Self::Real {
                self.abs()
            }
            #[inline(always)]
            fn faer_abs2(self) -> Self::Real {
                self * self
            }

            #[inline(always)]
            fn faer_nan() -> Self {
                <$ty>::NAN
            }

            #[inline(always)]
            fn faer_from_real(real: Self::Real) -> Self {
                real
            }
            #[inline(always)]
            fn faer_real(self) -> Self::Real {
                self
            }

            #[inline(always)]
            fn faer_zero() -> Self {
                0.0
            }
            #[inline(always)]
            fn faer_one() -> Self {
                1.0
            }

            #[inline(always)]
            fn faer_simd_splat<S: Simd>(simd: S, value: Self) -> Self::SimdUnit<S> {
                simd.$splat(value)
            }
            #[inline(always)]
            fn faer_simd_mul_adde<S: Simd>(
                simd: S,
                lhs: Self::SimdUnit<S>,
                rhs: Self::SimdUnit<S>,
                acc: Self::SimdUnit<S>,
            ) -> Self::SimdUnit<S> {
                simd.$mul_add_e(lhs, rhs, acc)
            }
            #[inline(always)]
            fn faer_simd_conj_mul_adde<S: Simd>(
                simd: S,
                lhs: Self::SimdUnit<S>,
                rhs: Self::SimdUnit<S>,
                acc: Self::SimdUnit<S>,
            ) -> Self::SimdUnit<S> {
                simd.$mul_add_e(lhs, rhs, acc)
            }
            #[inline(always)]
            fn faer_simd_reduce_add<S: Simd>(simd: S, values: Self::SimdUnit<S>) -> Self {
                simd.$reduce_sum(values)
            }
        }

        impl RealField for $ty {
            #[inline(always)]
            fn faer_epsilon() -> Self {
                <$ty>::EPSILON
            }
        }
    };
}

macro_rules! impl_complex {
    (
        $ty: ty,
        $real: ty,
        $pulp_ty: ty,
        $splat: ident,
        $mul_add_e: ident,
        $conj_mul_add_e: ident,
        $reduce_sum: ident,
        $units: ident
    ) => {
        impl ComplexField for $ty {
            type Real = $real;
            type Simd = pulp::Arch;
            type SimdUnit<S: Simd> = S::$units;

            const IS_REAL: bool = false;

            #[inline(always)]
            fn faer_from_f64(value: f64) -> Self {
                Self::new(value as _, 0.0)
            }

            #[inline(always)]
            fn faer_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline(always)]
            fn faer_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline(always)]
            fn faer_mul(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline(always)]
            fn faer_conj(self) -> Self {
                self.conj()
            }

            #[inline(always)]
            fn faer_abs(self) -> Self::Real {
                self.norm()
            }
            #[inline(always)]
            fn faer_abs2(self) -> Self::Real {
                self.norm_sqr()
            }

            #[inline(always)]
            fn faer_nan() -> Self {
                Self::new(<$real>::NAN, <$real>::NAN)
            }

            #[inline(always)]
            fn faer_from_real(real: Self::Real) -> Self {
                Self::new(real, 0.0)
            }
            #[inline(always)]
            fn faer_real(self) -> Self::Real {
                self.re
            }

            #[inline(always)]
            fn faer_zero() -> Self {
                Self::new(0.0, 0.0)
            }
            #[inline(always)]
            fn faer_one() -> Self {
                Self::new(1.0, 0.0)
            }

            #[inline(always)]
            fn faer_simd_splat<S: Simd>(simd: S, value: Self) -> Self::SimdUnit<S> {
                simd.$splat(pulp::cast::<Self, $pulp_ty>(value))
            }
            #[inline(always)]
            fn faer_simd_mul_adde<S: Simd>(
                simd: S,
                lhs: Self::SimdUnit<S>,
                rhs: Self::SimdUnit<S>,
                acc: Self::SimdUnit<S>,
            ) -> Self::SimdUnit<S> {
                simd.$mul_add_e(lhs, rhs, acc)
            }
            #[inline(always)]
            fn faer_simd_conj_mul_adde<S: Simd>(
                simd: S,
                lhs: Self::SimdUnit<S>,
                rhs: Self::SimdUnit<S>,
                acc: Self::SimdUnit<S>,
            ) -> Self::SimdUnit<S> {
                simd.$conj_mul_add_e(lhs, rhs, acc)
            }
            #[inline(always)]
            fn faer_simd_reduce_add<S: Simd>(simd: S, values: Self::SimdUnit<S>) -> Self {
                pulp::cast::<$pulp_ty, Self>(simd.$reduce_sum(values))
            }
        }
    };
}

impl_real!(
    f32,
    f32s_splat,
    f32s_mul_add_e,
    f32s_reduce_sum,
    f32s
);
impl_real!(
    f64,
    f64s_splat,
    f64s_mul_add_e,
    f64s_reduce_sum,
    f64s
);
impl_complex!(
    c32,
    f32,
    pulp::c32,
    c32s_splat,
    c32s_mul_add_e,
    c32s_conj_mul_add_e,
    c32s_reduce_sum,
    c32s
);
impl_complex!(
    c64,
    f64,
    pulp::c64,
    c64s_splat,
    c64s_mul_add_e,
    c64s_conj_mul_add_e,
    c64s_reduce_sum,
    c64s
);
