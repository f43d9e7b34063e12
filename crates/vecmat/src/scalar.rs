use std::{cmp::Ordering, fmt, ops, str::FromStr};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Arithmetic, Coordinate, Error, One, Result, ToFloat, Zero};

/// A number whose kind (integer or floating point) is only known at runtime.
///
/// Operations between two [`Scalar::Int`]s stay integral, except for true division, which always
/// produces a [`Scalar::Float`]. As soon as one operand is a [`Scalar::Float`], the other one is
/// promoted and the result is a float. An integer result that doesn't fit into an `i64` is
/// computed as a float as well.
///
/// Equality and ordering compare the exact numeric value, so `Int(1) == Float(1.0)` but
/// `Int(2^53 + 1) != Float(2^53)`.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let a = Scalar::Int(7);
/// let b = Scalar::Int(2);
/// assert_eq!(a + b, Scalar::Int(9));
/// assert_eq!(a / b, Scalar::Float(3.5));
/// assert_eq!(a.try_floor_div(b), Some(Scalar::Int(3)));
/// assert_eq!(a * Scalar::Float(0.5), Scalar::Float(3.5));
/// assert!((Scalar::Int(i64::MAX) + Scalar::Int(1)).is_float());
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Returns whether this is a [`Scalar::Int`].
    pub fn is_int(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    /// Returns whether this is a [`Scalar::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// Applies `int` to two integers and `float` to everything else, or when `int` overflows.
    fn binary(
        self,
        rhs: Self,
        int: impl FnOnce(i64, i64) -> Option<i64>,
        float: impl FnOnce(f64, f64) -> f64,
    ) -> Self {
        if let (Scalar::Int(a), Scalar::Int(b)) = (self, rhs) {
            if let Some(i) = int(a, b) {
                return Scalar::Int(i);
            }
        }
        Scalar::Float(float(self.to_f64(), rhs.to_f64()))
    }
}

/// Compares an integer with a float without rounding either of them.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        None
    } else if f >= LIMIT {
        Some(Ordering::Less)
    } else if f < -LIMIT {
        Some(Ordering::Greater)
    } else {
        let floor = f.floor();
        // `floor` is integral and within `i64` range, so the cast is exact.
        match i.cmp(&(floor as i64)) {
            Ordering::Equal if f > floor => Some(Ordering::Less),
            ord => Some(ord),
        }
    }
}

impl Zero for Scalar {
    const ZERO: Self = Scalar::Int(0);
}

impl One for Scalar {
    const ONE: Self = Scalar::Int(1);
}

impl ToFloat for Scalar {
    fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value.into())
    }
}

impl TryFrom<Scalar> for i64 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Int(i) => Ok(i),
            Scalar::Float(f) => Err(Error::NonIntegerValue(f)),
        }
    }
}

impl From<Scalar> for f64 {
    fn from(value: Scalar) -> Self {
        value.to_f64()
    }
}

impl FromStr for Scalar {
    type Err = Error;

    /// Parses an integer literal into a [`Scalar::Int`], and any other numeric literal into a
    /// [`Scalar::Float`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!("42".parse::<Scalar>().unwrap(), Scalar::Int(42));
    /// assert!("4.5".parse::<Scalar>().unwrap().is_float());
    /// assert_eq!("four".parse::<Scalar>().unwrap_err().kind(), ErrorKind::Type);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Scalar::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) => Ok(Scalar::Float(f)),
            Err(_) => Err(Error::NotANumber(s.to_owned())),
        }
    }
}

impl Coordinate for Scalar {
    fn to_index(self, len: usize) -> Result<usize> {
        match self {
            Scalar::Int(i) => i.to_index(len),
            Scalar::Float(f) => Err(Error::NonIntegerIndex(f)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => fmt::Display::fmt(i, f),
            Scalar::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(&b)),
            (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(&b),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(a, b),
            (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl ops::Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Scalar::Int(i) => i
                .checked_neg()
                .map_or(Scalar::Float(-(i as f64)), Scalar::Int),
            Scalar::Float(f) => Scalar::Float(-f),
        }
    }
}

impl ops::Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.binary(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl ops::Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.binary(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl ops::Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.binary(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// True division; the result is always a [`Scalar::Float`].
impl ops::Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Scalar::Float(self.to_f64() / rhs.to_f64())
    }
}

impl Arithmetic for Scalar {
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
        match (self, rhs) {
            (Scalar::Int(_), Scalar::Int(0)) => None,
            // `i64::MIN % -1` is 0, but overflows in `checked_rem`
            (Scalar::Int(a), Scalar::Int(b)) => Some(Scalar::Int(a.wrapping_rem(b))),
            (a, b) => a.to_f64().try_rem(b.to_f64()).map(Scalar::Float),
        }
    }

    fn try_floor_div(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Scalar::Int(_), Scalar::Int(0)) => None,
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.try_floor_div(b).map_or_else(
                || Scalar::Float((a as f64 / b as f64).floor()),
                Scalar::Int,
            )),
            (a, b) => a.to_f64().try_floor_div(b.to_f64()).map(Scalar::Float),
        }
    }

    fn try_pow(self, exp: Self) -> Option<Self> {
        match (self, exp) {
            (Scalar::Int(a), Scalar::Int(b)) if b >= 0 => Some(a.try_pow(b).map_or_else(
                || Scalar::Float((a as f64).powf(b as f64)),
                Scalar::Int,
            )),
            (a, b) => a.to_f64().try_pow(b.to_f64()).map(Scalar::Float),
        }
    }
}

impl AbsDiffEq for Scalar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.to_f64().abs_diff_eq(&b.to_f64(), epsilon),
        }
    }
}

impl RelativeEq for Scalar {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.to_f64().relative_eq(&b.to_f64(), epsilon, max_relative),
        }
    }
}

impl UlpsEq for Scalar {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.to_f64().ulps_eq(&b.to_f64(), epsilon, max_ulps),
        }
    }
}
