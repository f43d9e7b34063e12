use std::fmt;

/// Result type used by all fallible `vecmat` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operand or argument has the wrong category (eg. a non-numeric value, or a non-integer
    /// index).
    Type,
    /// An operand has the right category, but an unusable value (eg. mismatched lengths or
    /// incompatible matrix dimensions).
    Value,
    /// An index lies outside of the valid range.
    OutOfRange,
}

/// The arithmetic operation that failed in an [`Error::Arithmetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    FloorDiv,
    Pow,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
            Operation::Div => "division",
            Operation::Rem => "remainder",
            Operation::FloorDiv => "floor division",
            Operation::Pow => "exponentiation",
        })
    }
}

/// Errors returned by vector and matrix operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Text that was expected to hold a number could not be parsed as one.
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// A floating-point value was used as an index.
    #[error("index must be an integer, got {0:?}")]
    NonIntegerIndex(f64),

    /// A floating-point value was used where an integer is required.
    #[error("expected an integer, got {0:?}")]
    NonIntegerValue(f64),

    /// Two vectors of different lengths were combined.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The inner dimensions of a matrix product don't agree.
    #[error("cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A cross product was requested for vectors that are not 3-dimensional.
    #[error("cross product requires 3-dimensional vectors, got {left} and {right} components")]
    NotThreeDimensional { left: usize, right: usize },

    /// The rows passed to a matrix constructor don't all have the same length.
    #[error("matrix row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A matrix with zero rows or zero columns was requested.
    #[error("a matrix needs at least one row and one column")]
    EmptyMatrix,

    /// A matrix coordinate component is not an integer.
    #[error("matrix {axis} coordinate must be an integer, got {value:?}")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    /// A fixed-size vector was constructed from an unsupported number of values.
    #[error("expected 0, 1 or {expected} values, got {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// An operation is undefined for one of the components (eg. integer division by zero, or
    /// integer overflow). `index` is the component of the result that could not be computed.
    #[error("{op} is undefined for component {index}")]
    Arithmetic { op: Operation, index: usize },

    /// An index lies outside of `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i128, len: usize },
}

impl Error {
    /// Returns the [`ErrorKind`] this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let err = vector![1, 2, 3].try_add(&vector![1, 2]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Value);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotANumber(_) | Error::NonIntegerIndex(_) | Error::NonIntegerValue(_) => {
                ErrorKind::Type
            }
            Error::LengthMismatch { .. }
            | Error::DimensionMismatch { .. }
            | Error::NotThreeDimensional { .. }
            | Error::RaggedRows { .. }
            | Error::EmptyMatrix
            | Error::InvalidCoordinate { .. }
            | Error::ArgumentCount { .. }
            | Error::Arithmetic { .. } => ErrorKind::Value,
            Error::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::NotANumber("x".into()).kind(), ErrorKind::Type);
        assert_eq!(Error::NonIntegerIndex(0.5).kind(), ErrorKind::Type);
        assert_eq!(Error::EmptyMatrix.kind(), ErrorKind::Value);
        assert_eq!(
            Error::IndexOutOfRange { index: -1, len: 3 }.kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn messages() {
        let err = Error::DimensionMismatch {
            lhs_rows: 2,
            lhs_cols: 2,
            rhs_rows: 3,
            rhs_cols: 2,
        };
        assert_eq!(err.to_string(), "cannot multiply a 2x2 matrix by a 3x2 matrix");
        assert_eq!(
            Error::Arithmetic {
                op: Operation::Div,
                index: 1
            }
            .to_string(),
            "division is undefined for component 1"
        );
        assert_eq!(
            Error::Arithmetic {
                op: Operation::Add,
                index: 0
            }
            .to_string(),
            "addition is undefined for component 0"
        );
    }
}
