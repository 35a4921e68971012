use ndarray::Array2;

/// Single coordinate axis used for board columns, rows, and positions.
pub type Coord = u16;

/// Two-dimensional coordinates `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Flattened row-major cell index, `row * columns + column`.
pub type CellIndex = usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Grids are stored as `[row, column]` so the backing slice is row-major.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Returns `None` when the product does not fit a [`CellIndex`].
pub const fn mult(columns: Coord, rows: Coord) -> Option<CellIndex> {
    (columns as CellIndex).checked_mul(rows as CellIndex)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        let (rows, columns) = self.dim();
        // dimensions always come from a validated BoardConfig
        let bounds = (columns as Coord, rows as Coord);
        NeighborIter::new(center, bounds)
    }
}

const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i32, i32), bounds: Coord2) -> Option<Coord2> {
    let (col, row) = coords;
    let (dc, dr) = delta;
    let (columns, rows) = bounds;

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= columns {
        return None;
    }

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    Some((next_col, next_row))
}

/// Up to eight in-bounds neighbours of a cell, out-of-grid positions skipped.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
