use crate::math::{Vec2, vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle to a sprite sheet texture owned by the host renderer
///
/// `id` is whatever the renderer handed back from `load_texture`; the animator
/// never dereferences it, only the pixel dimensions matter here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetTexture {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

impl SheetTexture {
    pub fn new(id: usize, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }
}

/// Row/column layout of a sheet. Both dimensions are at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGrid"))]
pub struct Grid {
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Zero columns or rows are coerced to 1
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells on the sheet
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// A grid always holds at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    pub fn last_column(&self) -> usize {
        self.columns - 1
    }

    /// Flattened frame index of a cell
    pub fn frame_of(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// (row, column) of a flattened frame index
    pub fn cell_of(&self, frame: usize) -> (usize, usize) {
        (frame / self.columns, frame % self.columns)
    }

    /// Pixel size of one cell on `sheet`
    pub fn cell_size(&self, sheet: &SheetTexture) -> Vec2 {
        vec2(
            sheet.width as f32 / self.columns as f32,
            sheet.height as f32 / self.rows as f32,
        )
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid {
    columns: usize,
    rows: usize,
}

#[cfg(feature = "serde")]
impl From<RawGrid> for Grid {
    fn from(raw: RawGrid) -> Self {
        Grid::new(raw.columns, raw.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_coerced() {
        let grid = Grid::new(0, 0);
        assert_eq!((grid.columns(), grid.rows()), (1, 1));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn frame_and_cell_indices_agree() {
        let grid = Grid::new(4, 3);
        for frame in 0..grid.len() {
            let (row, column) = grid.cell_of(frame);
            assert!(row < grid.rows() && column < grid.columns());
            assert_eq!(grid.frame_of(row, column), frame);
        }
    }

    #[test]
    fn cell_size_divides_sheet() {
        let grid = Grid::new(4, 2);
        let sheet = SheetTexture::new(0, 256, 64);
        assert_eq!(grid.cell_size(&sheet), vec2(64.0, 32.0));
    }
}
