use std::io::{self, Write};

use crossterm::{cursor, queue, style};
use game_core::Surface;

/// Playfield units covered by one terminal cell
pub const CELL_WIDTH: f32 = 2.0;
pub const CELL_HEIGHT: f32 = 4.0;

const FILLED: char = '█';
const EMPTY: char = ' ';

/// Rasterises the playfield onto a grid of terminal cells
#[derive(Debug, Default)]
pub struct TerminalSurface {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows && self.cells[row * self.cols + col]
    }

    pub fn row_text(&self, row: usize) -> String {
        (0..self.cols)
            .map(|col| if self.is_filled(col, row) { FILLED } else { EMPTY })
            .collect()
    }

    /// Draw the current frame starting at the top-left corner of the terminal
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            queue!(
                out,
                cursor::MoveTo(0, to_u16(row)),
                style::Print(self.row_text(row))
            )?;
        }
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.cols = cells_spanning(width, CELL_WIDTH);
        self.rows = cells_spanning(height, CELL_HEIGHT);
        self.cells.clear();
        self.cells.resize(self.cols * self.rows, false);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (first_col, end_col) = span(x, x + width, CELL_WIDTH, self.cols);
        let (first_row, end_row) = span(y, y + height, CELL_HEIGHT, self.rows);
        for row in first_row..end_row {
            let line = row * self.cols;
            self.cells[line + first_col..line + end_col].fill(true);
        }
    }
}

fn cells_spanning(length: f32, cell: f32) -> usize {
    (length / cell).ceil().max(0.0) as usize
}

/// Half-open range of cells touched by [start, end), clipped to the grid
fn span(start: f32, end: f32, cell: f32, limit: usize) -> (usize, usize) {
    let first = ((start / cell).floor().max(0.0) as usize).min(limit);
    let end = ((end / cell).ceil().max(0.0) as usize).min(limit);
    (first, end.max(first))
}

pub fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
