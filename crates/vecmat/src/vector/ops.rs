use std::ops::{Add, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, VecN};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Vectors compare equal if they have the same length and all components are equal.
impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&'_ [U]> for Vector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<VecN<U, N>> for Vector<T> {
    fn eq(&self, other: &VecN<U, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Number> Neg for &Vector<T> {
    type Output = Vector<T>;

    /// Negates every component.
    fn neg(self) -> Vector<T> {
        self.map(|a| -a)
    }
}

impl<T: Number> Neg for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn neg(self) -> Vector<T> {
        -&self
    }
}

/// Implements a scalar operator for both owned and borrowed vectors.
macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Number> $trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Number> $trait<T> for Vector<T> {
            type Output = Vector<T>;

            #[inline]
            fn $method(self, rhs: T) -> Vector<T> {
                (&self).$method(rhs)
            }
        }
    };
}

scalar_op!(Add, add, +);
scalar_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);

impl<T: AbsDiffEq> AbsDiffEq for Vector<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq> RelativeEq for Vector<T>
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
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq> UlpsEq for Vector<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::vec3;

    use super::*;

    #[test]
    fn compare_with_fixed() {
        assert_eq!(vector![1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vector![1, 2], vec3(1, 2, 3));
        assert_eq!(vector![1, 2], &[1, 2][..]);
    }

    #[test]
    fn owned_operators() {
        let v = vector![1.0, 2.0];
        assert_eq!(v.clone() + 0.5, [1.5, 2.5]);
        assert_eq!(v.clone() - 0.5, [0.5, 1.5]);
        assert_eq!(v.clone() * -2.0, [-2.0, -4.0]);
        assert_eq!(-v, [-1.0, -2.0]);
    }

    #[test]
    fn approx() {
        let a = vector![0.1 + 0.2, 1.0];
        let b = vector![0.3, 1.0];
        assert_ne!(a, b);
        assert_relative_eq!(a, b);
        assert!(!vector![0.3].relative_eq(&b, f64::EPSILON, f64::EPSILON));
    }
}
