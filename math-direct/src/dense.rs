//! Dense matrix helpers: shape validation, construction and inspection

use crate::traits::RealField;
use crate::{DirectError, Result};
use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};

/// Build an n×n matrix from a flat row-major buffer
///
/// Element (i, j) is read from `data[i * n + j]`.
pub fn square_from_row_major<T: RealField>(n: usize, data: Vec<T>) -> Result<Array2<T>> {
    if n == 0 {
        return Err(DirectError::EmptyMatrix);
    }
    let got = data.len();
    if got != n * n {
        return Err(DirectError::DimensionMismatch {
            expected: n * n,
            got,
        });
    }
    Array2::from_shape_vec((n, n), data).map_err(|_| DirectError::DimensionMismatch {
        expected: n * n,
        got,
    })
}

/// Check that `a` is a non-empty square matrix and return its dimension
pub(crate) fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(DirectError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(DirectError::EmptyMatrix);
    }
    Ok(rows)
}

/// Check that a vector matches the system dimension
pub(crate) fn check_len<T>(b: &Array1<T>, n: usize) -> Result<()> {
    if b.len() != n {
        return Err(DirectError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Returns `true` when every entry is finite
///
/// The unpivoted kernels report a zero pivot only through Inf/NaN in their
/// output, so callers that need robustness inspect the result with this.
pub fn all_finite<T, S, D>(a: &ArrayBase<S, D>) -> bool
where
    T: RealField,
    S: Data<Elem = T>,
    D: Dimension,
{
    a.iter().all(|v| v.is_finite())
}

/// Largest absolute entrywise difference between two arrays of the same shape
///
/// Returns NaN as soon as any difference is NaN, so a failed factorization
/// never compares as close to anything.
pub fn max_abs_diff<T, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<T>
where
    T: RealField,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return Err(DirectError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    let mut max = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        let diff = (x - y).abs();
        if diff.is_nan() {
            return Ok(T::nan());
        }
        max = max.max(diff);
    }
    Ok(max)
}

/// Render a matrix or vector with aligned columns and two decimals
///
/// Rows are printed as `[ a  b  c ]`; a vector gets one entry per row.
pub fn format_matrix<T, S, D>(a: &ArrayBase<S, D>) -> String
where
    T: RealField,
    S: Data<Elem = T>,
    D: Dimension,
{
    let cells: Vec<String> = a.iter().map(|v| format!("{:.2}", v)).collect();
    let (rows, cols) = match a.shape() {
        [] => (1, 1),
        [len] => (*len, 1),
        [rows, rest @ ..] => (*rows, rest.iter().product()),
    };

    let mut widths = vec![0; cols];
    for (idx, cell) in cells.iter().enumerate() {
        let col = idx % cols;
        widths[col] = widths[col].max(cell.len());
    }

    let mut out = String::new();
    for row in 0..rows {
        let line: Vec<String> = (0..cols)
            .map(|col| format!("{:>width$}", cells[row * cols + col], width = widths[col]))
            .collect();
        out.push_str("[ ");
        out.push_str(&line.join("  "));
        out.push_str(" ]\n");
    }
    out
}
