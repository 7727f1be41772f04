//! Row-major storage for scalar field samples.
use crate::error::{Error, Result};

/// A rectangular grid of `f64` samples in row-major order.
///
/// `value(i, j)` addresses column `i` in `[0, width)` and row `j` in
/// `[0, height)`. Grids are read-only once constructed; extraction borrows
/// them for the duration of a single call.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Builds a grid from rows of samples.
    ///
    /// Requires at least two rows, at least two columns, and equal row
    /// lengths. NaN samples are accepted.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(width, height)?;
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(Error::InvalidGrid(format!(
                "ragged rows: row 0 has {} samples, row {} has {}",
                width,
                bad,
                rows[bad].len()
            )));
        }
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from flat row-major data of length `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        validate_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(Error::InvalidGrid(format!(
                "expected {} samples for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at column `i`, row `j`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.width + i]
    }

    /// Minimum and maximum over all non-NaN samples, or `None` if every
    /// sample is NaN.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width < 2 || height < 2 {
        return Err(Error::InvalidGrid(format!(
            "grid must be at least 2x2, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_stores_row_major() {
        let grid = ScalarGrid::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.value(0, 0), 1.0);
        assert_eq!(grid.value(2, 0), 3.0);
        assert_eq!(grid.value(1, 1), 5.0);
    }

    #[test]
    fn rejects_grids_smaller_than_two_by_two() {
        assert!(ScalarGrid::from_rows(&[]).is_err());
        assert!(ScalarGrid::from_rows(&[vec![1.0, 2.0]]).is_err());
        assert!(ScalarGrid::from_rows(&[vec![1.0], vec![2.0]]).is_err());
        assert!(ScalarGrid::from_raw(1, 4, vec![0.0; 4]).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = ScalarGrid::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("ragged"));
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(ScalarGrid::from_raw(2, 2, vec![0.0; 3]).is_err());
        assert!(ScalarGrid::from_raw(2, 2, vec![0.0; 4]).is_ok());
    }

    #[test]
    fn value_range_skips_nan() {
        let grid =
            ScalarGrid::from_rows(&[vec![f64::NAN, 2.0], vec![-1.0, f64::NAN]]).unwrap();
        assert_eq!(grid.value_range(), Some((-1.0, 2.0)));

        let all_nan = ScalarGrid::from_raw(2, 2, vec![f64::NAN; 4]).unwrap();
        assert_eq!(all_nan.value_range(), None);
    }
}
