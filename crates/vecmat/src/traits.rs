use std::ops;

use crate::{Error, Result};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the bound every vector and matrix element has to satisfy. Non-numeric elements are
/// therefore rejected at compile time. [`Scalar`][crate::Scalar] covers the case where the numeric
/// kind (integer or float) is only known at runtime.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Numeric operations that are not defined for every pair of operands.
///
/// Each method returns [`None`] when the result is undefined for the type: integer division or
/// remainder by zero, negative integer exponents, and integer overflow. Floating-point types follow
/// IEEE 754 and always return [`Some`] (possibly holding an infinity or NaN).
pub trait Arithmetic: Number {
    /// Addition.
    fn try_add(self, rhs: Self) -> Option<Self>;
    /// Subtraction.
    fn try_sub(self, rhs: Self) -> Option<Self>;
    /// Multiplication.
    fn try_mul(self, rhs: Self) -> Option<Self>;
    /// True division. Integers truncate toward zero.
    fn try_div(self, rhs: Self) -> Option<Self>;
    /// Remainder, carrying the sign of `self` (like Rust's `%`).
    fn try_rem(self, rhs: Self) -> Option<Self>;
    /// Division rounding toward negative infinity.
    fn try_floor_div(self, rhs: Self) -> Option<Self>;
    /// Raises `self` to the power `exp`.
    fn try_pow(self, exp: Self) -> Option<Self>;
}

/// Lossy conversion to [`f64`], used when rendering values.
pub trait ToFloat {
    fn to_f64(self) -> f64;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Values that can be used to index a vector component or matrix cell.
///
/// Implemented for `usize` and `i64`, which are always integral, and for
/// [`Scalar`][crate::Scalar], which is rejected with [`Error::NonIntegerIndex`] when it holds a
/// float.
pub trait Coordinate: Copy {
    /// Checks that `self` is an integer in `0..len` and returns it as a `usize`.
    fn to_index(self, len: usize) -> Result<usize>;
}

impl Coordinate for usize {
    fn to_index(self, len: usize) -> Result<usize> {
        if self < len {
            Ok(self)
        } else {
            Err(Error::IndexOutOfRange {
                index: self as i128,
                len,
            })
        }
    }
}

impl Coordinate for i64 {
    fn to_index(self, len: usize) -> Result<usize> {
        match usize::try_from(self) {
            Ok(index) if index < len => Ok(index),
            _ => Err(Error::IndexOutOfRange {
                index: self.into(),
                len,
            }),
        }
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Arithmetic for $types {
                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }

                fn try_mul(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }

                fn try_div(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }

                fn try_rem(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }

                fn try_floor_div(self, rhs: Self) -> Option<Self> {
                    let quot = self.checked_div(rhs)?;
                    // `checked_div` succeeded, so `rhs` is non-zero and `%` cannot overflow.
                    if self % rhs != 0 && (self < 0) != (rhs < 0) {
                        Some(quot - 1)
                    } else {
                        Some(quot)
                    }
                }

                fn try_pow(self, exp: Self) -> Option<Self> {
                    let exp = u32::try_from(exp).ok()?;
                    self.checked_pow(exp)
                }
            }

            impl ToFloat for $types {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
int_impls!(i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Arithmetic for $types {
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn try_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                fn try_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                fn try_rem(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }

                fn try_floor_div(self, rhs: Self) -> Option<Self> {
                    Some((self / rhs).floor())
                }

                fn try_pow(self, exp: Self) -> Option<Self> {
                    Some(self.powf(exp))
                }
            }

            impl ToFloat for $types {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_floor_div() {
        assert_eq!(7i32.try_floor_div(2), Some(3));
        assert_eq!((-7i32).try_floor_div(2), Some(-4));
        assert_eq!(7i32.try_floor_div(-2), Some(-4));
        assert_eq!((-7i32).try_floor_div(-2), Some(3));
        assert_eq!((-8i32).try_floor_div(2), Some(-4));
        assert_eq!(1i32.try_floor_div(0), None);
        assert_eq!(i32::MIN.try_floor_div(-1), None);
    }

    #[test]
    fn int_rem_keeps_dividend_sign() {
        assert_eq!((-7i32).try_rem(3), Some(-1));
        assert_eq!(7i32.try_rem(-3), Some(1));
        assert_eq!(7i32.try_rem(0), None);
    }

    #[test]
    fn int_overflow() {
        assert_eq!(i8::MAX.try_add(1), None);
        assert_eq!(i8::MIN.try_sub(1), None);
        assert_eq!(i64::MIN.try_mul(-1), None);
        assert_eq!(100i8.try_add(27), Some(127));
        assert_eq!(f64::MAX.try_mul(2.0), Some(f64::INFINITY));
    }

    #[test]
    fn int_pow() {
        assert_eq!(3i64.try_pow(4), Some(81));
        assert_eq!(2i64.try_pow(-1), None);
        assert_eq!(2i8.try_pow(8), None);
    }

    #[test]
    fn float_ops() {
        assert_eq!(1.0f64.try_div(0.0), Some(f64::INFINITY));
        assert!(0.0f64.try_div(0.0).unwrap().is_nan());
        assert_eq!((-7.5f64).try_floor_div(2.0), Some(-4.0));
        assert_eq!((-7.5f64).try_rem(2.0), Some(-1.5));
        assert_eq!(4.0f64.try_pow(0.5), Some(2.0));
    }

    #[test]
    fn coordinates() {
        assert_eq!(2usize.to_index(3), Ok(2));
        assert_eq!(
            3usize.to_index(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(1i64.to_index(3), Ok(1));
        assert_eq!(
            (-1i64).to_index(3),
            Err(Error::IndexOutOfRange { index: -1, len: 3 })
        );
    }
}
