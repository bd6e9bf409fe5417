use ndarray::Array2;

/// Single coordinate axis, used for grid width, height, column and row.
pub type Coord = u8;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Grid coordinates `(col, row)`, both 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (dim_x, dim_y) = self.dim();
        // arrays are only ever built from `Coord` sized dimensions
        let size = (
            Coord::try_from(dim_x).unwrap_or(Coord::MAX),
            Coord::try_from(dim_y).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Walks the 3x3 window around a cell, clipped to the grid, skipping the
/// cell itself.
///
/// Cells come out row-major: top row first, left to right. Cascades queue
/// neighbors in this order so a reveal lists its cells reproducibly. A corner
/// yields 3 cells, an edge 5, an interior cell 8, an out-of-bounds center none.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    min_col: Coord,
    max_col: Coord,
    max_row: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (col, row) = center;
        let (width, height) = bounds;
        let top_left = (col.saturating_sub(1), row.saturating_sub(1));
        Self {
            center,
            min_col: top_left.0,
            max_col: col.saturating_add(1).min(width.saturating_sub(1)),
            max_row: row.saturating_add(1).min(height.saturating_sub(1)),
            next: (col < width && row < height).then_some(top_left),
        }
    }

    fn step(&self, (col, row): Coord2) -> Option<Coord2> {
        if col < self.max_col {
            Some((col + 1, row))
        } else if row < self.max_row {
            Some((self.min_col, row + 1))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.next.take()?;
        if current == self.center {
            current = self.step(current)?;
        }
        self.next = self.step(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn corners_have_three_neighbors() {
        for corner in [(0, 0), (3, 0), (0, 2), (3, 2)] {
            assert_eq!(neighbors(corner, (4, 3)).len(), 3, "corner {corner:?}");
        }
    }

    #[test]
    fn edges_have_five_neighbors() {
        for edge in [(1, 0), (0, 1), (3, 1), (2, 2)] {
            assert_eq!(neighbors(edge, (4, 3)).len(), 5, "edge {edge:?}");
        }
    }

    #[test]
    fn interior_scan_is_row_major_and_skips_center() {
        assert_eq!(
            neighbors((1, 1), (3, 3)),
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn bottom_right_corner_ends_before_center() {
        assert_eq!(neighbors((3, 2), (4, 3)), [(2, 1), (3, 1), (2, 2)]);
    }

    #[test]
    fn out_of_bounds_center_has_no_neighbors() {
        assert!(neighbors((4, 0), (4, 3)).is_empty());
        assert!(neighbors((0, 3), (4, 3)).is_empty());
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(10, 15), 150);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
