//! Tests for corner detection and rectangle measurement

#[cfg(test)]
mod tests {
    use apparatus::algorithm::extraction::{extract, find_corners, measure};
    use apparatus::spatial::cell::{Cell, CellGrid, Occupant};

    const A: Occupant = Occupant { color: 2, part: 0 };
    const B: Occupant = Occupant { color: 5, part: 1 };

    // One 2x2 region: corner, top row, left column, interior
    fn square_grid() -> CellGrid {
        let mut grid = CellGrid::new(3, 3);
        grid.set(1, 1, Cell::occupied_by(A, true, true));
        grid.set(2, 1, Cell::occupied_by(A, true, false));
        grid.set(1, 2, Cell::occupied_by(A, false, true));
        grid.set(2, 2, Cell::occupied_by(A, false, false));
        grid
    }

    // Two regions side by side on a 2x1 strip plus a blank cell below
    fn strip_grid() -> CellGrid {
        let mut grid = CellGrid::new(3, 4);
        grid.set(1, 1, Cell::occupied_by(A, true, true));
        grid.set(2, 1, Cell::occupied_by(A, true, false));
        grid.set(3, 1, Cell::occupied_by(B, true, true));
        grid.set(1, 2, Cell::blank(true, false));
        grid.set(2, 2, Cell::blank(true, false));
        grid.set(3, 2, Cell::blank(true, true));
        grid
    }

    // A single region is found once with its full extent
    // Verified by counting every edge cell as a corner
    #[test]
    fn test_extract_square() {
        let parts = extract(&square_grid());
        assert_eq!(parts.len(), 1);
        let Some(part) = parts.first() else {
            return;
        };
        assert_eq!((part.x1, part.y1, part.w, part.h), (1, 1, 2, 2));
        assert_eq!((part.x2, part.y2), (3, 3));
        assert_eq!((part.color, part.id), (2, 0));
        assert!(part.path.is_empty());
    }

    // Measurement stops at the next line and at the grid extent
    // Verified by walking past vertical lines
    #[test]
    fn test_measure_stops_at_lines() {
        let grid = strip_grid();
        assert_eq!(measure(&grid, 1, 1), (2, 1));
        assert_eq!(measure(&grid, 3, 1), (1, 1));
    }

    // Corners come in row-major order with their occupants
    // Verified by scanning column-major
    #[test]
    fn test_find_corners() {
        let corners = find_corners(&strip_grid());
        let found: Vec<(usize, usize, u32)> = corners
            .iter()
            .map(|corner| (corner.x, corner.y, corner.occupant.part))
            .collect();
        assert_eq!(found, vec![(1, 1, 0), (3, 1, 1)]);
    }

    // Blank grids produce no rectangles
    // Verified by treating edge-only cells as corners
    #[test]
    fn test_extract_blank() {
        let mut grid = CellGrid::new(3, 3);
        grid.set(1, 1, Cell::blank(true, true));
        assert!(extract(&grid).is_empty());
    }
}
