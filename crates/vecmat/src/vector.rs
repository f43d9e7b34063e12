use std::{fmt, slice};

use crate::{
    traits::{Arithmetic, Number, Sqrt},
    Coordinate, Error, Operation, Result, ToFloat,
};

mod ops;

/// An `N`-dimensional vector whose length is chosen at runtime.
///
/// Vectors are immutable values: every arithmetic operation returns a new [`Vector`]. Operations
/// combining two vectors check that their lengths agree and return
/// [`Error::LengthMismatch`] otherwise.
///
/// For 2- and 3-dimensional vectors whose size is known at compile time, [`Vector2`] and
/// [`Vector3`] provide named components, swizzles, and infallible operators.
///
/// [`Vector2`]: crate::Vector2
/// [`Vector3`]: crate::Vector3
///
/// # Construction
///
/// - The [`vector!`] macro creates a vector from a flat list of elements.
/// - [`From`] impls accept arrays, [`Vec`]s, slices and fixed-size [`VecN`][crate::VecN]s.
/// - Vectors can be [`collect`][Iterator::collect]ed from an iterator.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
///
/// # Operators
///
/// | Operation | Method/Operator | Failure |
/// |-----------|-----------------|---------|
/// | vector + vector | [`Vector::try_add`] | length mismatch |
/// | vector - vector | [`Vector::try_sub`] | length mismatch |
/// | vector + scalar, vector - scalar, vector * scalar | `+`, `-`, `*` | - (1) |
/// | vector / scalar | [`Vector::try_div`] | integer division by zero |
/// | vector % scalar | [`Vector::try_rem`] | integer division by zero |
/// | floor division | [`Vector::try_floor_div`] | integer division by zero |
/// | power | [`Vector::try_pow`] | negative integer exponent, integer overflow |
/// | dot product | [`Vector::dot`] | length mismatch |
/// | cross product | [`Vector::cross`] | either side not 3-dimensional |
///
/// The `try_` methods, `dot` and `cross` also report integer overflow as [`Error::Arithmetic`].
///
/// (1): the scalar operators apply the element type's own operator, so integer overflow behaves
/// like it does for the primitive type.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let a = vector![1, 2, 3];
/// let b: Vector<i32> = vec![4, 5, 6].into();
/// assert_eq!(a.try_add(&b)?, [5, 7, 9]);
/// assert_eq!(a.dot(&b)?, 32);
/// assert_eq!(a.to_string(), "1.0, 2.0, 3.0");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Hash)]
pub struct Vector<T>(Box<[T]>);

impl<T> Vector<T> {
    /// Creates a vector holding `elems`.
    #[inline]
    pub fn new(elems: Vec<T>) -> Self {
        Self(elems.into_boxed_slice())
    }

    /// Creates a vector of length `len` where each element is initialized by invoking a closure
    /// with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = Vector::from_fn(4, |i| i * 10);
    /// assert_eq!(v, [0, 10, 20, 30]);
    /// ```
    pub fn from_fn<F>(len: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..len).map(cb).collect()
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Converts this vector into a [`Vec`] of its components.
    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }

    /// Returns a reference to the component at `index`.
    ///
    /// `index` may be any [`Coordinate`]. Non-integer indices fail with
    /// [`Error::NonIntegerIndex`], indices outside of `0..len` with [`Error::IndexOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = vector![10, 20, 30];
    /// assert_eq!(v.get(1usize), Ok(&20));
    /// assert_eq!(v.get(Scalar::Int(2)), Ok(&30));
    /// assert_eq!(v.get(3usize).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// assert_eq!(v.get(Scalar::Float(1.0)).unwrap_err().kind(), ErrorKind::Type);
    /// ```
    pub fn get<I: Coordinate>(&self, index: I) -> Result<&T> {
        let index = index.to_index(self.len())?;
        Ok(&self.0[index])
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(&self, f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
        T: Copy,
    {
        self.iter().copied().map(f).collect()
    }

    fn check_len(&self, other: &Vector<T>) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            log::debug!(
                "rejecting operation on vectors of length {} and {}",
                self.len(),
                other.len()
            );
            Err(Error::LengthMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }

    fn try_zip(&self, other: &Vector<T>, op: Operation) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.check_len(other)?;
        self.iter()
            .zip(other.iter())
            .enumerate()
            .map(|(index, (&a, &b))| apply(op, a, b).ok_or(Error::Arithmetic { op, index }))
            .collect()
    }

    fn try_map_scalar(&self, rhs: T, op: Operation) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        try_elementwise(self.iter().copied(), rhs, op).map(Vector::new)
    }

    /// Componentwise addition of two vectors of equal length.
    ///
    /// Integer overflow fails with [`Error::Arithmetic`]. Scalars can be added with the `+`
    /// operator instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vector![1, 2].try_add(&vector![10, 20])?, [11, 22]);
    /// assert_eq!(vector![1, 2] + 10, [11, 12]);
    ///
    /// let err = vector![1, 2, 3].try_add(&vector![1, 2]).unwrap_err();
    /// assert_eq!(err, Error::LengthMismatch { left: 3, right: 2 });
    ///
    /// let err = vector![0i8, i8::MAX].try_add(&vector![1, 1]).unwrap_err();
    /// assert_eq!(err, Error::Arithmetic { op: Operation::Add, index: 1 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_zip(other, Operation::Add)
    }

    /// Componentwise subtraction of two vectors of equal length.
    ///
    /// Integer overflow fails with [`Error::Arithmetic`]. Scalars can be subtracted with the `-`
    /// operator instead.
    pub fn try_sub(&self, other: &Vector<T>) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_zip(other, Operation::Sub)
    }

    /// Divides every component by `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vector![1.0, 3.0].try_div(2.0)?, [0.5, 1.5]);
    /// assert_eq!(vector![7, -7].try_div(2)?, [3, -3]);
    /// assert!(vector![1, 2].try_div(0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_div(&self, rhs: T) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::Div)
    }

    /// Computes the remainder of every component divided by `rhs`.
    ///
    /// The result has the sign of the component, like Rust's `%` operator.
    pub fn try_rem(&self, rhs: T) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::Rem)
    }

    /// Divides every component by `rhs`, rounding toward negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vector![7, -7].try_floor_div(2)?, [3, -4]);
    /// assert_eq!(vector![7.5].try_floor_div(2.0)?, [3.0]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_floor_div(&self, rhs: T) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::FloorDiv)
    }

    /// Raises every component to the power `exp`.
    pub fn try_pow(&self, exp: T) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(exp, Operation::Pow)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Integer overflow fails with [`Error::Arithmetic`] at index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = vector![1, 3, -5];
    /// let b = vector![4, -2, -1];
    /// assert_eq!(a.dot(&b)?, 3);
    /// assert!(a.dot(&vector![1, 2]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn dot(&self, other: &Vector<T>) -> Result<T>
    where
        T: Arithmetic,
    {
        self.check_len(other)?;
        checked_dot(self.iter().copied().zip(other.iter().copied()), 0)
    }

    /// Computes the cross product of two 3-dimensional vectors.
    ///
    /// Fails with [`Error::NotThreeDimensional`] unless both vectors have exactly 3 components,
    /// and with [`Error::Arithmetic`] if a component overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let x = vector![1, 0, 0];
    /// let y = vector![0, 1, 0];
    /// assert_eq!(x.cross(&y)?, [0, 0, 1]);
    /// assert!(x.cross(&vector![0, 1]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>>
    where
        T: Arithmetic,
    {
        match (self.as_slice(), other.as_slice()) {
            (&[a1, a2, a3], &[b1, b2, b3]) => Ok(Vector::from([
                cross_component(0, (a2, b3), (a3, b2))?,
                cross_component(1, (a3, b1), (a1, b3))?,
                cross_component(2, (a1, b2), (a2, b1))?,
            ])),
            _ => Err(Error::NotThreeDimensional {
                left: self.len(),
                right: other.len(),
            }),
        }
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.iter().fold(T::ZERO, |acc, &a| acc + a * a)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vector![3.0, 4.0].length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }
}

/// Applies `op` to a single component, returning [`None`] if the result is undefined.
pub(crate) fn apply<T: Arithmetic>(op: Operation, elem: T, rhs: T) -> Option<T> {
    match op {
        Operation::Add => elem.try_add(rhs),
        Operation::Sub => elem.try_sub(rhs),
        Operation::Mul => elem.try_mul(rhs),
        Operation::Div => elem.try_div(rhs),
        Operation::Rem => elem.try_rem(rhs),
        Operation::FloorDiv => elem.try_floor_div(rhs),
        Operation::Pow => elem.try_pow(rhs),
    }
}

/// Sums the products of `pairs`, reporting overflow as an error for result component `index`.
pub(crate) fn checked_dot<T, I>(pairs: I, index: usize) -> Result<T>
where
    T: Arithmetic,
    I: IntoIterator<Item = (T, T)>,
{
    pairs.into_iter().try_fold(T::ZERO, |acc, (a, b)| {
        let prod = a.try_mul(b).ok_or(Error::Arithmetic {
            op: Operation::Mul,
            index,
        })?;
        acc.try_add(prod).ok_or(Error::Arithmetic {
            op: Operation::Add,
            index,
        })
    })
}

/// Computes `a * b - c * d` for component `index` of a cross product.
fn cross_component<T: Arithmetic>(index: usize, (a, b): (T, T), (c, d): (T, T)) -> Result<T> {
    let fail = |op| Error::Arithmetic { op, index };
    let left = a.try_mul(b).ok_or(fail(Operation::Mul))?;
    let right = c.try_mul(d).ok_or(fail(Operation::Mul))?;
    left.try_sub(right).ok_or(fail(Operation::Sub))
}

/// Applies `op` with the scalar `rhs` to every element of `elems`, failing on the first component
/// for which the operation is undefined.
fn try_elementwise<T, I>(elems: I, rhs: T, op: Operation) -> Result<Vec<T>>
where
    T: Arithmetic,
    I: IntoIterator<Item = T>,
{
    elems
        .into_iter()
        .enumerate()
        .map(|(index, elem)| apply(op, elem, rhs).ok_or(Error::Arithmetic { op, index }))
        .collect()
}

/// Writes `elems` as a comma-separated list of floats.
pub(crate) fn write_floats<T>(f: &mut fmt::Formatter<'_>, elems: &[T]) -> fmt::Result
where
    T: ToFloat + Copy,
{
    for (i, elem) in elems.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", elem.to_f64())?;
    }
    Ok(())
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self(Box::new([]))
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(Vec::from(value))
    }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self(value.into())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.into_vec()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders every component as a float, separated by commas.
///
/// This is meant for humans and is not guaranteed to be stable.
impl<T: ToFloat + Copy> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_floats(f, self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Scalar};

    use super::*;

    #[test]
    fn construction() {
        let from_args = vector![1, 2, 3];
        let from_vec = Vector::new(vec![1, 2, 3]);
        let from_slice = Vector::from(&[1, 2, 3][..]);
        let collected: Vector<i32> = (1..=3).collect();
        assert_eq!(from_args, from_vec);
        assert_eq!(from_args, from_slice);
        assert_eq!(from_args, collected);

        let empty: Vector<f32> = vector![];
        assert!(empty.is_empty());
        assert_eq!(empty, Vector::<f32>::default());
    }

    #[test]
    fn equality() {
        let v = vector![1, 2, 3];
        assert_eq!(v, v.clone());
        assert_ne!(v, vector![1, 2]);
        assert_ne!(v, vector![1, 2, 4]);
        assert_eq!(vector![1.0, 2.0], [1.0, 2.0]);
    }

    #[test]
    fn add_sub() {
        let a = vector![1, 2, 3];
        let b = vector![10, 20, 30];
        assert_eq!(a.try_add(&b).unwrap(), [11, 22, 33]);
        assert_eq!(b.try_sub(&a).unwrap(), [9, 18, 27]);
        assert_eq!(&a + 1, [2, 3, 4]);
        assert_eq!(&a - 1, [0, 1, 2]);

        let err = a.try_sub(&vector![1]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { left: 3, right: 1 });
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn scalar_ops() {
        let v = vector![2, -7, 9];
        assert_eq!(&v * 3, [6, -21, 27]);
        assert_eq!(-&v, [-2, 7, -9]);
        assert_eq!(v.try_div(2).unwrap(), [1, -3, 4]);
        assert_eq!(v.try_rem(4).unwrap(), [2, -3, 1]);
        assert_eq!(v.try_floor_div(2).unwrap(), [1, -4, 4]);
        assert_eq!(v.try_pow(2).unwrap(), [4, 49, 81]);

        assert_eq!(
            v.try_div(0),
            Err(Error::Arithmetic {
                op: Operation::Div,
                index: 0
            })
        );
        assert_eq!(
            v.try_pow(-1),
            Err(Error::Arithmetic {
                op: Operation::Pow,
                index: 0
            })
        );
    }

    #[test]
    fn float_division_by_zero() {
        let v = vector![1.0, -1.0, 0.0].try_div(0.0).unwrap();
        assert_eq!(v[0], f64::INFINITY);
        assert_eq!(v[1], f64::NEG_INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    fn scalar_elements() {
        let v: Vector<Scalar> = vector![Scalar::Int(1), Scalar::Float(2.5)];
        let halved = v.try_div(Scalar::Int(2)).unwrap();
        assert_eq!(halved, [Scalar::Float(0.5), Scalar::Float(1.25)]);
        assert_eq!(v.to_string(), "1.0, 2.5");
    }

    #[test]
    fn indexing() {
        let v = vector![5, 6, 7];
        assert_eq!(v[2], 7);
        assert_eq!(v.get(0usize), Ok(&5));
        assert_eq!(v.get(-1i64), Err(Error::IndexOutOfRange { index: -1, len: 3 }));
        assert_eq!(v.get(Scalar::Float(0.0)), Err(Error::NonIntegerIndex(0.0)));
    }

    #[test]
    fn cross() {
        let a = vector![1, 2, 3];
        let b = vector![4, 5, 6];
        assert_eq!(a.cross(&b).unwrap(), [-3, 6, -3]);
        assert_eq!(a.cross(&a).unwrap(), [0, 0, 0]);
        assert_eq!(
            a.cross(&vector![1, 2, 3, 4]),
            Err(Error::NotThreeDimensional { left: 3, right: 4 })
        );
    }

    #[test]
    fn integer_overflow() {
        let overflow = |op, index| Error::Arithmetic { op, index };

        assert_eq!(vector![i8::MAX].try_add(&vector![1i8]), Err(overflow(Operation::Add, 0)));
        assert_eq!(
            vector![0, i8::MIN].try_sub(&vector![1i8, 1]),
            Err(overflow(Operation::Sub, 1))
        );
        assert_eq!(
            vector![i8::MAX, 1].dot(&vector![1i8, 1]),
            Err(overflow(Operation::Add, 0))
        );
        assert_eq!(vector![64i8].dot(&vector![2i8]), Err(overflow(Operation::Mul, 0)));
        assert_eq!(
            vector![1, i64::MAX, 0].cross(&vector![0, 0, 2]),
            Err(overflow(Operation::Mul, 0))
        );
        assert_eq!(
            vector![0, i64::MIN, 1].cross(&vector![0, 1, 1]),
            Err(overflow(Operation::Sub, 0))
        );
        assert_eq!(overflow(Operation::Add, 0).kind(), ErrorKind::Value);

        assert_eq!(vector![i8::MAX - 1].try_add(&vector![1i8]).unwrap(), [i8::MAX]);
        assert_eq!(vector![i8::MAX, 0].dot(&vector![1i8, 1]), Ok(i8::MAX));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vector![1, 2, 3]), "1.0, 2.0, 3.0");
        assert_eq!(format!("{}", vector![0.5f32, -1.25]), "0.5, -1.25");
        assert_eq!(format!("{:?}", vector![1, 2]), "[1, 2]");
        assert_eq!(format!("{}", Vector::<f64>::default()), "");
    }
}
