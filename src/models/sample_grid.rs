/// Table of sampled colors, indexed by the pixel offsets that were walked
/// during sampling.
///
/// Cells are stored row-major as uppercase `#RRGGBB` strings. The axes hold
/// the pixel offsets used as row/column labels; both start at 0 and increase
/// by the sampling stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    rows: Vec<u32>,
    cols: Vec<u32>,
    cells: Vec<String>,
}

impl SampleGrid {
    /// Assemble a grid from its axes and row-major cells.
    ///
    /// Callers must supply exactly `rows.len() * cols.len()` cells; this is
    /// enforced here so every constructed grid is rectangular.
    pub(crate) fn new(rows: Vec<u32>, cols: Vec<u32>, cells: Vec<String>) -> Self {
        assert_eq!(
            cells.len(),
            rows.len() * cols.len(),
            "sample grid cells must match axis dimensions"
        );
        Self { rows, cols, cells }
    }

    /// Row axis: sampled y pixel-offsets.
    pub fn row_offsets(&self) -> &[u32] {
        &self.rows
    }

    /// Column axis: sampled x pixel-offsets.
    pub fn col_offsets(&self) -> &[u32] {
        &self.cols
    }

    /// Hex cell by axis index (row index, column index).
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows.len() || col >= self.cols.len() {
            return None;
        }
        Some(self.cells[row * self.cols.len() + col].as_str())
    }

    /// Hex cell by the pixel offsets used as labels, if both offsets were
    /// sampled.
    pub fn cell_at_offsets(&self, y_offset: u32, x_offset: u32) -> Option<&str> {
        let row = self.rows.iter().position(|&y| y == y_offset)?;
        let col = self.cols.iter().position(|&x| x == x_offset)?;
        self.cell(row, col)
    }

    /// Iterate rows as (y-offset, slice of hex cells).
    pub fn iter_rows(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.rows
            .iter()
            .zip(self.cells.chunks(self.cols.len().max(1)))
            .map(|(&y, row)| (y, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SampleGrid {
        SampleGrid::new(
            vec![0, 10],
            vec![0, 10, 20],
            vec![
                "#000000".into(),
                "#111111".into(),
                "#222222".into(),
                "#333333".into(),
                "#444444".into(),
                "#555555".into(),
            ],
        )
    }

    #[test]
    fn test_cell_indexing() {
        let g = grid();
        assert_eq!(g.cell(0, 0), Some("#000000"));
        assert_eq!(g.cell(1, 2), Some("#555555"));
        assert_eq!(g.cell(2, 0), None);
        assert_eq!(g.cell(0, 3), None);
    }

    #[test]
    fn test_cell_at_offsets() {
        let g = grid();
        assert_eq!(g.cell_at_offsets(10, 20), Some("#555555"));
        assert_eq!(g.cell_at_offsets(5, 0), None);
    }

    #[test]
    fn test_iter_rows() {
        let g = grid();
        let rows: Vec<_> = g.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[1].0, 10);
        assert_eq!(rows[1].1.len(), 3);
    }

    #[test]
    #[should_panic(expected = "sample grid cells")]
    fn test_ragged_cells_rejected() {
        SampleGrid::new(vec![0], vec![0, 10], vec!["#000000".into()]);
    }
}
