//! Implementations of `std::ops` and comparison traits.

use std::ops::{Add, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Vector};

use super::VecN;

impl<T, const N: usize> Index<usize> for VecN<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<VecN<U, N>> for VecN<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &VecN<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for VecN<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for VecN<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<VecN<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &VecN<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for VecN<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0[..] == *other
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U>> for VecN<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.0[..] == *other.as_slice()
    }
}

impl<T: Number, const N: usize> Neg for VecN<T, N> {
    type Output = Self;

    /// Negates every component.
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

/// Element-wise addition.
impl<T: Number, const N: usize> Add for VecN<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] + rhs.0[i])
    }
}

/// Element-wise subtraction.
impl<T: Number, const N: usize> Sub for VecN<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

/// Adds `rhs` to every component.
impl<T: Number, const N: usize> Add<T> for VecN<T, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self.map(|a| a + rhs)
    }
}

/// Subtracts `rhs` from every component.
impl<T: Number, const N: usize> Sub<T> for VecN<T, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self.map(|a| a - rhs)
    }
}

/// Multiplies every component by `rhs`.
impl<T: Number, const N: usize> Mul<T> for VecN<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for VecN<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for VecN<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for VecN<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
