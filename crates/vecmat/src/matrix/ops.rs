use std::ops::{Index, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::Number;

use super::Matrix;

/// Returns the row at the given index as a slice.
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        match self.row(row) {
            Some(row) => row,
            None => panic!("row index {row} out of bounds for {} rows", self.rows),
        }
    }
}

/// Returns the element at `(row, column)`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.elems[row * self.cols + col]
    }
}

/// Matrices compare equal if they have the same size and all elements are equal.
impl<T: PartialEq<U>, U> PartialEq<Matrix<U>> for Matrix<T> {
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.size() == other.size() && self.elems[..] == other.elems[..]
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: Number> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|&a| -a)
    }
}

impl<T: Number> Neg for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

/// Multiplies every element by `rhs`.
impl<T: Number> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|&a| a * rhs)
    }
}

impl<T: Number> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: AbsDiffEq> AbsDiffEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.size() == other.size()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq> RelativeEq for Matrix<T>
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
        self.size() == other.size()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq> UlpsEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.size() == other.size()
            && self
                .elems
                .iter()
                .zip(other.elems.iter())
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    #[test]
    fn scale() {
        let m = matrix![[1, -2], [3, 4]].unwrap();
        assert_eq!(&m * 2, matrix![[2, -4], [6, 8]].unwrap());
        assert_eq!(-m, matrix![[-1, 2], [-3, -4]].unwrap());
    }

    #[test]
    fn equality() {
        let a = matrix![[1, 2, 3, 4]].unwrap();
        let b = matrix![[1, 2], [3, 4]].unwrap();
        assert_ne!(a, b);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = matrix![[1, 2], [3, 4]].unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn approx() {
        let a = matrix![[0.1 + 0.2, 1.0]].unwrap();
        let b = matrix![[0.3, 1.0]].unwrap();
        assert_ne!(a, b);
        assert_relative_eq!(a, b);
        assert_relative_eq!(a.transpose(), b.transpose());
    }
}
