use std::{fmt, slice};

use crate::{
    traits::{Arithmetic, Number},
    vector::{checked_dot, write_floats},
    Coordinate, Error, Result, ToFloat,
};

mod ops;

/// A rectangular, row-major matrix whose dimensions are chosen at runtime.
///
/// A [`Matrix`] always has at least one row and one column, and every row has the same number of
/// columns. Both properties are checked when the matrix is constructed.
///
/// # Construction
///
/// - [`Matrix::from_rows`] takes any iterable of rows, and the [`matrix!`] macro forwards a list
///   of row literals to it.
/// - [`Matrix::from_fn`] invokes a closure with the `(row, column)` coordinates of each element.
/// - [`Matrix::zero`] and [`Matrix::identity`] create common matrices.
///
/// # Indexing
///
/// All coordinates are given as `(row, column)`.
///
/// - [`Matrix::get`] and [`Matrix::set`] accept any [`Coordinate`] and report invalid coordinates
///   as errors.
/// - The [`Index`][std::ops::Index] impl for `(usize, usize)` returns a single element, the one
///   for `usize` returns a whole row as a slice. Both panic when out of bounds.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let mut m = matrix![
///     [1, 2, 3],
///     [4, 5, 6],
/// ]?;
/// assert_eq!(m.size(), (2, 3));
/// assert_eq!(m[(1, 0)], 4);
/// assert_eq!(m[1], [4, 5, 6]);
///
/// m.set((0usize, 2usize), 30)?;
/// assert_eq!(m.get((0usize, 2usize))?, &30);
/// assert_eq!(m.to_string(), "[1.0, 2.0, 30.0]\n[4.0, 5.0, 6.0]");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    elems: Box<[T]>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from a sequence of rows.
    ///
    /// Fails with [`Error::EmptyMatrix`] if there are no rows or the rows are empty, and with
    /// [`Error::RaggedRows`] if the rows don't all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    /// assert_eq!(m.size(), (2, 2));
    ///
    /// let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Value);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        let mut elems = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = elems.len();
            elems.extend(values);
            let found = elems.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    log::debug!("row {row} has {found} columns, expected {expected}");
                    return Err(Error::RaggedRows {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        let cols = cols.unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(Error::EmptyMatrix);
        }

        log::trace!("created {row_count}x{cols} matrix");
        Ok(Self {
            rows: row_count,
            cols,
            elems: elems.into_boxed_slice(),
        })
    }

    /// Creates a `rows`x`cols` matrix where each element is initialized by invoking a closure with
    /// its `(row, column)` coordinates.
    ///
    /// Fails with [`Error::EmptyMatrix`] if either dimension is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = Matrix::from_fn(2, 3, |row, col| row * 10 + col)?;
    /// assert_eq!(m, matrix![[0, 1, 2], [10, 11, 12]]?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMatrix);
        }

        let elems = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| cb(row, col))
            .collect();
        Ok(Self { rows, cols, elems })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the dimensions of this matrix as `(rows, columns)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the row at index `row`, or [`None`] if it is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.elems[row * self.cols..][..self.cols])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of this matrix.
    pub fn iter_rows(&self) -> slice::ChunksExact<'_, T> {
        self.elems.chunks_exact(self.cols)
    }

    fn locate<R: Coordinate, C: Coordinate>(&self, (row, col): (R, C)) -> Result<usize> {
        let row = axis_index(row, self.rows, "row")?;
        let col = axis_index(col, self.cols, "column")?;
        Ok(row * self.cols + col)
    }

    /// Returns a reference to the element at `(row, column)`.
    ///
    /// Non-integer coordinates fail with [`Error::InvalidCoordinate`], coordinates outside of the
    /// matrix with [`Error::IndexOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = matrix![[1, 2], [3, 4]]?;
    /// assert_eq!(m.get((1usize, 0usize))?, &3);
    /// assert_eq!(m.get((Scalar::Int(0), -1i64)).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get<R: Coordinate, C: Coordinate>(&self, coords: (R, C)) -> Result<&T> {
        let index = self.locate(coords)?;
        Ok(&self.elems[index])
    }

    /// Replaces the element at `(row, column)` with `value`.
    ///
    /// The coordinates are validated like in [`Matrix::get`]. The matrix is left unchanged if they
    /// are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mut m = Matrix::zero(2, 2)?;
    /// m.set((0usize, 1usize), 5)?;
    /// assert_eq!(m, matrix![[0, 5], [0, 0]]?);
    ///
    /// let err = m.set((Scalar::Float(0.5), 0usize), 1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Value);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set<R: Coordinate, C: Coordinate>(&mut self, coords: (R, C), value: T) -> Result<()> {
        let index = self.locate(coords)?;
        self.elems[index] = value;
        Ok(())
    }

    /// Applies a closure to each element, returning a new matrix of the same size.
    pub fn map<F, U>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            elems: self.elems.iter().map(f).collect(),
        }
    }

    /// Returns the transpose of this matrix, swapping rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = matrix![[1, 2, 3], [4, 5, 6]]?;
    /// assert_eq!(m.transpose(), matrix![[1, 4], [2, 5], [3, 6]]?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn transpose(&self) -> Self
    where
        T: Copy,
    {
        Self {
            rows: self.cols,
            cols: self.rows,
            elems: (0..self.cols)
                .flat_map(|col| (0..self.rows).map(move |row| (row, col)))
                .map(|(row, col)| self[(row, col)])
                .collect(),
        }
    }
}

impl<T: Number> Matrix<T> {
    /// Creates a `rows`x`cols` matrix filled with zeroes.
    pub fn zero(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| T::ZERO)
    }

    /// Creates the `n`x`n` identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Matrix::<i32>::identity(2)?, matrix![[1, 0], [0, 1]]?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Arithmetic> Matrix<T> {
    /// Computes the matrix product `self * other`.
    ///
    /// The number of columns of `self` has to match the number of rows of `other`, otherwise
    /// [`Error::DimensionMismatch`] is returned. The result has as many rows as `self` and as many
    /// columns as `other`.
    ///
    /// Integer overflow fails with [`Error::Arithmetic`], whose `index` is the row-major position
    /// of the result element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = matrix![[1, 2], [3, 4]]?;
    /// let b = matrix![[1, 0, 2], [0, 1, 3]]?;
    /// assert_eq!(a.matmul(&b)?, matrix![[1, 2, 8], [3, 4, 18]]?);
    /// assert!(b.matmul(&a).is_err());
    ///
    /// let err = matrix![[i32::MAX, i32::MAX]]?.matmul(&matrix![[1], [1]]?).unwrap_err();
    /// assert_eq!(err, Error::Arithmetic { op: Operation::Add, index: 0 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            log::debug!(
                "cannot multiply {}x{} by {}x{}",
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
            return Err(Error::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }

        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let elems = (0..self.rows * other.cols)
            .map(|index| {
                let (row, col) = (index / other.cols, index % other.cols);
                let pairs = (0..self.cols).map(|i| (self[(row, i)], other[(i, col)]));
                checked_dot(pairs, index)
            })
            .collect::<Result<Box<[T]>>>()?;
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            elems,
        })
    }

    /// Alias of [`Matrix::matmul`].
    #[inline]
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.matmul(other)
    }
}

fn axis_index<I: Coordinate>(index: I, len: usize, axis: &'static str) -> Result<usize> {
    index.to_index(len).map_err(|err| match err {
        Error::NonIntegerIndex(value) => Error::InvalidCoordinate { axis, value },
        err => err,
    })
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in self.iter_rows() {
            list.entry(&row);
        }
        list.finish()
    }
}

/// Renders one row per line, every element as a float.
impl<T: ToFloat + Copy> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            write_floats(f, row)?;
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Operation, Scalar};

    use super::*;

    fn init_logger() {
        env_logger::builder()
            .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
            .try_init()
            .ok();
    }

    #[test]
    fn from_rows() {
        init_logger();

        let m = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]).unwrap();
        assert_eq!(m.size(), (3, 2));
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.row(2), Some(&[5, 6][..]));
        assert_eq!(m.row(3), None);

        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]),
            Err(Error::RaggedRows {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Matrix::<i32>::from_rows(Vec::<Vec<i32>>::new()),
            Err(Error::EmptyMatrix)
        );
        assert_eq!(
            Matrix::<i32>::from_rows([[], []]),
            Err(Error::EmptyMatrix)
        );
        assert_eq!(Matrix::<f64>::zero(0, 3), Err(Error::EmptyMatrix));
    }

    #[test]
    fn mat_mul() {
        init_logger();

        let a = matrix![[1, 2], [3, 4]].unwrap();
        let b = matrix![[5, 6, 7], [8, 9, 10]].unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.size(), (2, 3));
        assert_eq!(c, matrix![[21, 24, 27], [47, 54, 61]].unwrap());
        assert_eq!(a.dot(&b), Ok(c));

        let tall = matrix![[1, 2], [3, 4], [5, 6]].unwrap();
        let err = a.matmul(&tall).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                lhs_rows: 2,
                lhs_cols: 2,
                rhs_rows: 3,
                rhs_cols: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::Value);

        let row = matrix![[1, 2, 3]].unwrap();
        let col = row.transpose();
        assert_eq!(row.matmul(&col).unwrap(), matrix![[14]].unwrap());
        assert_eq!(col.matmul(&row).unwrap().size(), (3, 3));
    }

    #[test]
    fn mat_mul_overflow() {
        init_logger();

        let wide = matrix![[i32::MAX, i32::MAX]].unwrap();
        let ones = matrix![[1], [1]].unwrap();
        assert_eq!(
            wide.matmul(&ones),
            Err(Error::Arithmetic {
                op: Operation::Add,
                index: 0
            })
        );

        let a = matrix![[1i8, 0], [0, 2]].unwrap();
        let b = matrix![[1i8, 100], [1, 100]].unwrap();
        assert_eq!(
            a.matmul(&b),
            Err(Error::Arithmetic {
                op: Operation::Mul,
                index: 3
            })
        );
        assert_eq!(a.matmul(&matrix![[1i8, 63], [1, 63]].unwrap()).unwrap()[(1, 1)], 126);
    }

    #[test]
    fn identity() {
        let m = matrix![[2.0, -1.0], [0.5, 3.0]].unwrap();
        let id = Matrix::identity(2).unwrap();
        assert_eq!(id.matmul(&m).unwrap(), m);
        assert_eq!(m.matmul(&id).unwrap(), m);
    }

    #[test]
    fn set() {
        let mut m = Matrix::<i64>::zero(2, 3).unwrap();
        m.set((1usize, 2usize), 7).unwrap();
        m.set((Scalar::Int(0), 1i64), 3).unwrap();
        assert_eq!(m, matrix![[0, 3, 0], [0, 0, 7]].unwrap());

        let before = m.clone();
        assert_eq!(
            m.set((0usize, Scalar::Float(1.5)), 9),
            Err(Error::InvalidCoordinate {
                axis: "column",
                value: 1.5
            })
        );
        assert_eq!(
            m.set((2usize, 0usize), 9),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            m.set((0usize, -1i64), 9).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(m, before);
    }

    #[test]
    fn indexing() {
        let m = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 1)], 5);
        assert_eq!(m[0], [1, 2, 3]);
        assert_eq!(m.get((1usize, 2usize)), Ok(&6));
        assert_eq!(
            m.get((Scalar::Float(1.0), 0usize)).unwrap_err().kind(),
            ErrorKind::Value
        );
        assert_eq!(m.iter_rows().count(), 2);
    }

    #[test]
    fn fmt() {
        let m = matrix![[1, 2], [3, 4]].unwrap();
        assert_eq!(m.to_string(), "[1.0, 2.0]\n[3.0, 4.0]");
        assert_eq!(format!("{m:?}"), "[[1, 2], [3, 4]]");

        let m = matrix![[0.5f32]].unwrap();
        assert_eq!(m.to_string(), "[0.5]");
    }

    #[test]
    fn transpose_map() {
        let m = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
        assert_eq!(m.transpose().size(), (3, 2));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(
            m.map(|&x| x as f64 / 2.0),
            matrix![[0.5, 1.0, 1.5], [2.0, 2.5, 3.0]].unwrap()
        );
    }
}
