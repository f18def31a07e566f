//! Dense 2-D grids of sample values.

/// A row-major 2-D grid of `f32` samples.
///
/// NaN marks no-data cells. Reorientation methods take the grid by value
/// and hand it back; callers chain them in display order.
#[derive(Debug, Clone)]
pub struct Grid2D {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid2D {
    /// Zero-filled grid of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap row-major data. Returns `None` when the length does not match
    /// the shape.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The backing row-major samples.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// Reverse the row order (grids stored south-to-north display with
    /// north at the top after this).
    pub fn flip_rows(mut self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        for r in 0..rows / 2 {
            let top = r * cols;
            let bottom = (rows - 1 - r) * cols;
            for c in 0..cols {
                self.data.swap(top + c, bottom + c);
            }
        }
        self
    }

    /// Reverse the column order within every row (a flip along the second
    /// axis).
    pub fn flip_cols(mut self) -> Self {
        for row in self.data.chunks_exact_mut(self.cols) {
            row.reverse();
        }
        self
    }

    /// Swap the axes, turning an `(r, c)` grid into a `(c, r)` grid.
    pub fn transpose(self) -> Self {
        let mut out = vec![0.0f32; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                out[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data: out,
        }
    }

    /// Copy out the inclusive sub-grid `[row_min..=row_max]` by
    /// `[col_min..=col_max]`. `None` when the box is inverted or out of
    /// bounds.
    pub fn crop(
        &self,
        row_min: usize,
        row_max: usize,
        col_min: usize,
        col_max: usize,
    ) -> Option<Self> {
        if row_min > row_max || col_min > col_max || row_max >= self.rows || col_max >= self.cols {
            return None;
        }
        let rows = row_max - row_min + 1;
        let cols = col_max - col_min + 1;
        let mut data = Vec::with_capacity(rows * cols);
        for r in row_min..=row_max {
            let start = r * self.cols + col_min;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Some(Self { rows, cols, data })
    }

    /// Replace exact-zero samples with NaN so they render as no-data.
    /// Genuine zero samples become indistinguishable from cells that were
    /// never written.
    pub fn zeros_to_nan(mut self) -> Self {
        for v in &mut self.data {
            if *v == 0.0 {
                *v = f32::NAN;
            }
        }
        self
    }

    /// Min and max over finite samples, `None` when no sample is finite.
    pub fn finite_min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.data.iter().copied().filter(|v| v.is_finite());
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for v in iter {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Some((min, max))
    }
}
