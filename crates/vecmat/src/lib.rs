//! Lightweight vector and matrix value types.
//!
//! # Motivation
//!
//! Small geometry and simulation programs frequently need a handful of vector and matrix
//! operations. Pulling in a full numerics package for that brings a large API surface and heavy
//! generic machinery that such programs never benefit from.
//!
//! This library provides:
//!
//! - [`Vector`], a vector whose length is chosen at runtime.
//! - [`Vector2`] and [`Vector3`] (both aliases of [`VecN`]), fixed-size vectors with named
//!   components and swizzles.
//! - [`Matrix`], a rectangular matrix whose dimensions are chosen at runtime.
//!
//! # Goals & Non-Goals
//!
//! - Report misuse as values, not panics. Every operation whose validity depends on runtime
//!   lengths or dimensions returns a [`Result`] carrying an [`Error`], which can be classified
//!   with [`Error::kind`].
//! - Treat vectors and matrices as values. Operations return new objects, and the only in-place
//!   mutation is [`Matrix::set`].
//! - Be generic over the element type. Elements have to implement [`Number`], so non-numeric
//!   components are rejected at compile time. [`Scalar`] covers numbers whose kind (integer or
//!   float) is only known at runtime.
//! - Index matrices as `(row, column)` everywhere.
//! - Don't offer decompositions, inversion, sparse storage or tensors of higher rank. Don't
//!   optimize for large inputs.

/// Constructs a [`Vector`] from a flat list of components.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let v = vector![1.0, 2.5, -3.0];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.5);
/// ```
#[macro_export]
macro_rules! vector {
    ($($elem:expr),* $(,)?) => {
        $crate::Vector::from([$($elem),*])
    };
}

/// Constructs a [`Matrix`] from a list of rows.
///
/// Expands to a call to [`Matrix::from_rows`], so the result is a [`Result`] that is an error if
/// the rows have different lengths or the matrix would be empty.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let m = matrix![
///     [1.0, 0.0],
///     [0.0, 1.0],
/// ]?;
/// assert_eq!(m, Matrix::<f64>::identity(2)?);
///
/// assert!(matrix![[1, 2], [3]].is_err());
/// # Ok::<(), Error>(())
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($elem:expr),* $(,)?]),* $(,)?) => {
        $crate::Matrix::from_rows([$($crate::Vector::from([$($elem),*])),*])
    };
}

mod error;
mod matrix;
mod scalar;
mod traits;
mod vecn;
mod vector;

pub use error::*;
pub use matrix::*;
pub use scalar::*;
pub use traits::*;
pub use vecn::*;
pub use vector::*;
