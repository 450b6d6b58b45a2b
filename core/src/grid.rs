use alloc::string::{String, ToString};
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Output side of a game: draws boards and single cells, never touches board state.
pub trait Renderer {
    /// Replaces whatever is displayed with a fresh grid for `board`.
    fn render_board(&mut self, board: &Board);

    /// Replaces the text of the single cell at `coords`.
    fn update_cell(&mut self, coords: Coord2, text: &str);
}

/// The displayed grid: one header per category and one text cell per clue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridModel {
    headers: Vec<String>,
    cells: Array2<String>,
}

impl GridModel {
    pub const PLACEHOLDER: &'static str = "?";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Size as `(categories, clue rows)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            cols.try_into().unwrap_or(Coord::MAX),
            rows.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn cell_text(&self, coords: Coord2) -> Option<&str> {
        self.cells.get(coords.to_nd_index()).map(String::as_str)
    }

    /// Rows of cell text, top to bottom, each ordered by category.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Coord2, &str)>> {
        self.cells.outer_iter().zip(0..Coord::MAX).map(|(row, y)| {
            row.into_iter()
                .zip(0..Coord::MAX)
                .map(move |(text, x)| ((x, y), text.as_str()))
        })
    }
}

impl Renderer for GridModel {
    fn render_board(&mut self, board: &Board) {
        let (categories, clues) = board.size();
        self.headers = board
            .categories()
            .iter()
            .map(|category| category.title().to_string())
            .collect();
        self.cells = Array2::from_elem(
            (usize::from(clues), usize::from(categories)),
            Self::PLACEHOLDER.to_string(),
        );
    }

    fn update_cell(&mut self, coords: Coord2, text: &str) {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) => {
                cell.clear();
                cell.push_str(text);
            }
            None => log::warn!("ignoring update for cell {:?} outside the grid", coords),
        }
    }
}
