use std::{array, fmt};

use crate::{
    traits::{Arithmetic, Number, Sqrt},
    vector::{apply, write_floats},
    Coordinate, Error, One, Operation, Result, ToFloat, Vector, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ};

/// A 2-dimensional vector.
pub type Vector2<T> = VecN<T, 2>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2f = Vector2<f64>;
/// A 3-dimensional vector.
pub type Vector3<T> = VecN<T, 3>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vector3f = Vector3<f64>;

/// An `N`-element vector whose length is fixed at compile time.
///
/// [`VecN`] supports everything [`Vector`] does, but since both operands of a binary operation
/// always have the same length, addition, subtraction and the dot product cannot fail and are
/// available as plain operators and methods.
///
/// # Construction
///
/// - The freestanding [`vec2`] and [`vec3`] functions directly create vectors from provided
///   values.
/// - [`VecN::from_args`] takes 0, 1 or `N` values. No values produce the zero vector, a single
///   value is copied into every component.
/// - [`VecN::from_options`] does the same after dropping every [`None`].
/// - [`VecN::splat`] and [`VecN::from_fn`] work like their array counterparts.
/// - [`VecN::ZERO`] is a vector containing all-zeroes, and `X`, `Y` and `Z` are unit vectors.
/// - Conversions from arrays, and (fallibly) from [`Vector`]s, are available via [`From`] and
///   [`TryFrom`].
///
/// # Element Access
///
/// - Components can be read as fields `x`, `y` and `z`. These are views into the same storage and
///   cannot be assigned to.
/// - Swizzle methods return several components as a tuple, in any order and with repetition:
///   `v.zyx()`, `v.xxy()`, `v.yx()`.
/// - The [`Index`][std::ops::Index] impl can be used just like on arrays.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` implements them.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let v = vec3(1, 2, 3);
/// assert_eq!(v.x, 1);
/// assert_eq!(v.zyx(), (3, 2, 1));
/// assert_eq!(v + vec3(1, 1, 1), vec3(2, 3, 4));
/// assert_eq!(v.to_string(), "1.0, 2.0, 3.0");
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct VecN<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for VecN<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for VecN<T, N> {}

impl<T: Zero, const N: usize> VecN<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> VecN<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> VecN<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Copy> VecN<T, 2> {
    vecmat_macros::swizzles!(x, y; 2);
}

impl<T: Copy> VecN<T, 3> {
    vecmat_macros::swizzles!(x, y, z; 2, 3);
}

impl<T, const N: usize> VecN<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vector3::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = VecN::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a list of 0, 1 or `N` values.
    ///
    /// - No values create the zero vector.
    /// - A single value is broadcast to every component.
    /// - `N` values are used as the components, in order.
    ///
    /// Any other number of values results in [`Error::ArgumentCount`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vector3::<i32>::from_args(&[])?, vec3(0, 0, 0));
    /// assert_eq!(Vector3::from_args(&[5])?, vec3(5, 5, 5));
    /// assert_eq!(Vector3::from_args(&[1, 2, 3])?, vec3(1, 2, 3));
    /// assert!(Vector3::from_args(&[1, 2]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_args(values: &[T]) -> Result<Self>
    where
        T: Zero + Copy,
    {
        match *values {
            [] => Ok(Self::ZERO),
            [elem] => Ok(Self::splat(elem)),
            _ => match <[T; N]>::try_from(values) {
                Ok(elems) => Ok(Self(elems)),
                Err(_) => {
                    log::debug!(
                        "rejecting {} values for a {}-dimensional vector",
                        values.len(),
                        N
                    );
                    Err(Error::ArgumentCount {
                        expected: N,
                        found: values.len(),
                    })
                }
            },
        }
    }

    /// Creates a vector from optional values, ignoring every [`None`].
    ///
    /// The remaining values follow the same rules as [`VecN::from_args`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vector2::from_options([None, Some(4)])?, vec2(4, 4));
    /// assert_eq!(Vector2::<i32>::from_options([None, None])?, Vector2::<i32>::ZERO);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_options<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Zero + Copy,
    {
        let values = values.into_iter().flatten().collect::<Vec<_>>();
        Self::from_args(&values)
    }

    /// Returns the number of components, `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N` is 0.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the component at `index`.
    ///
    /// Like [`Vector::get`], this rejects non-integer and out-of-range indices.
    pub fn get<I: Coordinate>(&self, index: I) -> Result<&T> {
        let index = index.to_index(N)?;
        Ok(&self.0[index])
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> VecN<U, N>
    where
        F: FnMut(T) -> U,
    {
        VecN(self.0.map(f))
    }

    /// Merges two vectors into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = vec2(1, 2).zip(vec2("1", "2"));
    /// assert_eq!(v, vec2((1, "1"), (2, "2")));
    /// ```
    pub fn zip<U>(self, other: VecN<U, N>) -> VecN<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        VecN::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this vector into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vector3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    fn try_map_scalar(self, rhs: T, op: Operation) -> Result<Self>
    where
        T: Arithmetic,
    {
        let mut out = self.0;
        for (index, elem) in out.iter_mut().enumerate() {
            *elem = apply(op, *elem, rhs).ok_or(Error::Arithmetic { op, index })?;
        }
        Ok(Self(out))
    }

    /// Divides every component by `rhs`.
    ///
    /// Integer division by zero fails with [`Error::Arithmetic`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec2(1.0, 3.0).try_div(2.0)?, vec2(0.5, 1.5));
    /// assert!(vec2(1, 3).try_div(0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_div(self, rhs: T) -> Result<Self>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::Div)
    }

    /// Computes the remainder of every component divided by `rhs`.
    pub fn try_rem(self, rhs: T) -> Result<Self>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::Rem)
    }

    /// Divides every component by `rhs`, rounding toward negative infinity.
    pub fn try_floor_div(self, rhs: T) -> Result<Self>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(rhs, Operation::FloorDiv)
    }

    /// Raises every component to the power `exp`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec3(1, 2, 3).try_pow(2)?, vec3(1, 4, 9));
    /// assert_eq!(vec2(4.0, 9.0).try_pow(0.5)?, vec2(2.0, 3.0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_pow(self, exp: T) -> Result<Self>
    where
        T: Arithmetic,
    {
        self.try_map_scalar(exp, Operation::Pow)
    }
}

impl<T> VecN<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vector3::<i32>::X.cross(Vector3::Y), Vector3::<i32>::Z);
    /// assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));
    /// ```
    #[rustfmt::skip]
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ])
    }

    /// Removes the `z` component, returning a 2-dimensional vector.
    pub fn truncate(self) -> VecN<T, 2> {
        let [x, y, _] = self.0;
        VecN([x, y])
    }
}

impl<T> VecN<T, 2> {
    /// Appends a `z` component, returning a 3-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
    /// assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    /// ```
    pub fn extend(self, z: T) -> VecN<T, 3> {
        let [x, y] = self.0;
        VecN([x, y, z])
    }
}

impl<T: Default, const N: usize> Default for VecN<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for VecN<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<VecN<T, N>> for [T; N] {
    #[inline]
    fn from(value: VecN<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> From<VecN<T, N>> for Vector<T> {
    #[inline]
    fn from(value: VecN<T, N>) -> Self {
        Vector::from(value.0)
    }
}

/// Fails with [`Error::LengthMismatch`] unless the vector has exactly `N` components.
impl<T: Copy, const N: usize> TryFrom<&Vector<T>> for VecN<T, N> {
    type Error = Error;

    fn try_from(value: &Vector<T>) -> Result<Self> {
        match <[T; N]>::try_from(value.as_slice()) {
            Ok(elems) => Ok(Self(elems)),
            Err(_) => Err(Error::LengthMismatch {
                left: N,
                right: value.len(),
            }),
        }
    }
}

impl<T: Copy, const N: usize> TryFrom<Vector<T>> for VecN<T, N> {
    type Error = Error;

    #[inline]
    fn try_from(value: Vector<T>) -> Result<Self> {
        Self::try_from(&value)
    }
}

impl<T, const N: usize> AsRef<[T]> for VecN<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for VecN<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: ToFloat + Copy, const N: usize> fmt::Display for VecN<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_floats(f, &self.0)
    }
}

/// Creates a 2-dimensional vector.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    VecN([x, y])
}

/// Creates a 3-dimensional vector.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector3<T> {
    VecN([x, y, z])
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Scalar};

    use super::*;

    #[test]
    fn access() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
        assert_eq!(v[2], 3);
        assert_eq!(v.get(Scalar::Int(1)), Ok(&2));
        assert_eq!(v.get(3usize).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(v.get(Scalar::Float(0.0)).unwrap_err().kind(), ErrorKind::Type);

        let v = vec2(1.5, -2.0);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, -2.0);
    }

    #[test]
    fn swizzles() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.zyx(), (3, 2, 1));
        assert_eq!(v.xxy(), (1, 1, 2));
        assert_eq!(v.zz(), (3, 3));
        assert_eq!(v.xyz(), (1, 2, 3));

        let v = vec2(7, 8);
        assert_eq!(v.yx(), (8, 7));
        assert_eq!(v.xx(), (7, 7));
        assert_eq!(v.xy(), (7, 8));
        assert_eq!(v.yy(), (8, 8));
    }

    #[test]
    fn from_args() {
        assert_eq!(Vector3::from_args(&[5]), Ok(vec3(5, 5, 5)));
        assert_eq!(Vector2::<f64>::from_args(&[]), Ok(vec2(0.0, 0.0)));
        assert_eq!(Vector2::from_args(&[1, 2]), Ok(vec2(1, 2)));
        assert_eq!(
            Vector2::from_args(&[1, 2, 3]),
            Err(Error::ArgumentCount {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Vector3::from_options([Some(1), None, Some(3), Some(4)]),
            Ok(vec3(1, 3, 4))
        );
        assert_eq!(
            Vector3::from_options([Some(1), Some(2)]).unwrap_err().kind(),
            ErrorKind::Value
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(vec2(7, -7).try_floor_div(2), Ok(vec2(3, -4)));
        assert_eq!(vec2(7, -7).try_rem(2), Ok(vec2(1, -1)));
        assert_eq!(
            vec3(1, 2, 3).try_rem(0),
            Err(Error::Arithmetic {
                op: Operation::Rem,
                index: 0
            })
        );
        assert_eq!(
            vec2(2i8, 3).try_pow(5),
            Err(Error::Arithmetic {
                op: Operation::Pow,
                index: 1
            })
        );
    }

    #[test]
    fn conversions() {
        let dynamic = vector![1, 2, 3];
        let fixed = Vector3::try_from(&dynamic).unwrap();
        assert_eq!(fixed, vec3(1, 2, 3));
        assert_eq!(Vector::from(fixed), dynamic);
        assert_eq!(
            Vector2::<i32>::try_from(dynamic),
            Err(Error::LengthMismatch { left: 2, right: 3 })
        );
        assert_eq!(<[i32; 2]>::from(vec2(1, 2)), [1, 2]);
    }

    #[test]
    fn units() {
        assert_eq!(Vector3f::X.dot(Vector3f::Y), 0.0);
        assert_eq!(Vector3::<i32>::Y.cross(Vector3::Z), Vector3::<i32>::X);
        assert_eq!(Vector2::<i32>::default(), Vector2::<i32>::ZERO);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", vec3(1, 2, 3)), "(1, 2, 3)");
        assert_eq!(format!("{}", vec2(1, 2)), "1.0, 2.0");
        assert_eq!(format!("{}", vec2(-0.5f32, 2.0)), "-0.5, 2.0");
    }

    #[test]
    fn pod() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 12);
        let back: &Vector3<f32> = bytemuck::from_bytes(bytes);
        assert_eq!(*back, v);
    }
}
