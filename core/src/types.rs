/// Single coordinate axis, used for category and clue positions and for board dimensions.
pub type Coord = u8;

/// Count type used for total-clue counts.
pub type CellCount = u16;

/// Clue address `(category_index, clue_index)`, the join key between board and rendered grid.
pub type Coord2 = (Coord, Coord);

/// Identifier the trivia service assigns to a category.
pub type CategoryId = u64;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Grid cells are stored row-major by clue, so the clue index comes first.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
