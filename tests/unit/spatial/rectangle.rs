//! Tests for directions, bounds adjacency and rectangle movement

#[cfg(test)]
mod tests {
    use apparatus::spatial::rectangle::{
        Bounds, Direction, Position, Rectangle, bounds_of, is_neighbor,
    };

    // Two squares side by side touch east/west but not north
    // Verified by using inclusive span overlap
    #[test]
    fn test_adjacency_sample() {
        let a = Bounds::from_size(0, 0, 2, 2);
        let b = Bounds::from_size(2, 0, 2, 2);

        assert!(is_neighbor(&a, &b, Direction::East));
        assert!(is_neighbor(&b, &a, Direction::West));
        assert!(!is_neighbor(&a, &b, Direction::North));
        assert!(!is_neighbor(&a, &b, Direction::West));
    }

    // Corner contact is not adjacency, identical bounds never are
    // Verified by removing the identity check
    #[test]
    fn test_corner_and_identity() {
        let a = Bounds::from_size(0, 0, 2, 2);
        let diagonal = Bounds::from_size(2, 2, 2, 2);
        assert!(!a.has_neighbor(&diagonal, Direction::East));
        assert!(!a.has_neighbor(&diagonal, Direction::South));
        for direction in Direction::ALL {
            assert!(!a.has_neighbor(&a, direction));
        }
    }

    // Vertical adjacency needs horizontal overlap
    // Verified by comparing y1 instead of y2 for north
    #[test]
    fn test_vertical_adjacency() {
        let lower = Bounds::from_size(0, 2, 3, 1);
        let upper = Bounds::from_size(2, 0, 4, 2);
        assert!(lower.has_neighbor(&upper, Direction::North));
        assert!(upper.has_neighbor(&lower, Direction::South));
    }

    // Shifting east at tick 10 moves both edges and fills the path gap
    // Verified by writing the old position into the path
    #[test]
    fn test_shift_sample() {
        let mut part = Rectangle::new(5, 5, 2, 2, 0, 0);
        part.shift(Direction::East, 10);

        assert_eq!(part.bounds(), Bounds { x1: 6, y1: 5, x2: 8, y2: 7 });
        assert_eq!(part.path.len(), 11);
        assert_eq!(part.position_at(10), Some(Position::new(6, 5)));
        assert!(part.path.iter().take(10).all(|&p| p == Position::new(5, 5)));
    }

    // Shifting at a recorded tick overwrites that entry
    // Verified by always pushing the new position
    #[test]
    fn test_shift_overwrites_recorded_tick() {
        let mut part = Rectangle::new(0, 0, 1, 1, 0, 0);
        part.populate(2);
        part.record();
        part.shift(Direction::North, 2);

        assert_eq!(
            part.path,
            vec![Position::new(0, 0), Position::new(0, 0), Position::new(0, -1)]
        );
        assert_eq!(part.position(), Position::new(0, -1));
        assert_eq!(part.position_at(3), None);
    }

    // Populate resets the path to the hold
    // Verified by appending instead of clearing
    #[test]
    fn test_populate_resets_path() {
        let mut part = Rectangle::new(3, 4, 1, 1, 0, 0);
        part.record();
        part.populate(3);
        assert_eq!(part.path, vec![Position::new(3, 4); 3]);
    }

    // Mirroring swaps east and west only
    // Verified by mirroring north to south
    #[test]
    fn test_direction_mirror_and_delta() {
        assert_eq!(Direction::East.mirror(), Direction::West);
        assert_eq!(Direction::West.mirror(), Direction::East);
        assert_eq!(Direction::North.mirror(), Direction::North);
        assert_eq!(Direction::South.delta(), (0, 1));
        assert_eq!(Direction::West.delta(), (-1, 0));
        assert!(Direction::North.is_vertical());
        assert!(!Direction::East.is_vertical());
    }

    // Index order is north, east, south, west
    // Verified by reordering the variants
    #[test]
    fn test_direction_indices() {
        for (index, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), index);
            assert_eq!(Direction::from_index(index), *direction);
        }
        assert_eq!(Direction::East.to_string(), "east");
    }

    // Bounds derive from rectangle corners and sizes
    // Verified by computing x2 from the height
    #[test]
    fn test_bounds_of_and_shifted() {
        let parts = vec![
            Rectangle::new(0, 0, 2, 3, 0, 0),
            Rectangle::new(4, 1, 1, 1, 0, 1),
        ];
        let bounds = bounds_of(&parts);
        assert_eq!(bounds, vec![Bounds::from_size(0, 0, 2, 3), Bounds::from_size(4, 1, 1, 1)]);
        assert_eq!(
            Bounds::from_size(0, 0, 2, 2).shifted(Direction::South),
            Bounds::from_size(0, 1, 2, 2)
        );
    }
}
