//! Screen buffer of optional colored glyphs.

use crate::types::{Block, Cell};

/// 2D buffer of screen cells, row-major.
///
/// A cell is either empty or a [`Block`]; empty cells serialize as blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Cell at column `x`, row `y`; `None` when out of range.
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Block at column `x`, row `y`, treating out-of-range as empty.
    pub fn block(&self, x: u16, y: u16) -> Option<Block> {
        self.get(x, y).flatten()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put(&mut self, x: u16, y: u16, block: Block) {
        self.set(x, y, Some(block));
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Overwrite every cell on the outermost rows and columns with `block`.
    pub fn draw_border(&mut self, block: Block) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 0..self.width {
            self.put(x, 0, block);
            self.put(x, bottom, block);
        }
        for y in 0..self.height {
            self.put(0, y, block);
            self.put(right, y, block);
        }
    }

    /// Whether `(x, y)` lies on the outermost rows or columns.
    pub fn is_border(&self, x: u16, y: u16) -> bool {
        x < self.width
            && y < self.height
            && (x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1)
    }
}
