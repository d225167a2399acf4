//! Tests for coordinate arithmetic, stepping, distances and neighbor derivation

#[cfg(test)]
mod tests {
    use gridkit::GridError;
    use gridkit::spatial::coord::Coord;
    use gridkit::spatial::direction::Direction;
    use gridkit::spatial::neighbors::Neighborhood;

    // Tests add and subtract are mutual inverses
    // Verified by subtracting columns in add
    #[test]
    fn test_add_subtract_inverse() {
        let base = Coord::new(3, -2);
        let delta = Coord::new(-7, 5);

        assert_eq!(base.add(delta), Coord::new(-4, 3));
        assert!(base.add(delta).subtract(delta).equals(base));
        assert_eq!(base + delta - delta, base);
    }

    // Tests scalar multiplication operator
    // Verified by scaling only the row
    #[test]
    fn test_mul_scales_both_components() {
        assert_eq!(Coord::new(2, -3) * 4, Coord::new(8, -12));
        assert_eq!(Coord::new(2, -3) * 0, Coord::default());
    }

    // Tests fixed text form and array form
    // Verified by swapping row and col in Display
    #[test]
    fn test_display_and_to_array() {
        let coord = Coord::new(4, -1);
        assert_eq!(coord.to_string(), "(4,-1)");
        assert_eq!(coord.to_array(), [4, -1]);
        assert_eq!(Coord::from([4, -1]), coord);
        assert_eq!(Coord::from((4, -1)), coord);
    }

    // Tests parsing of both accepted text forms
    // Verified by requiring parentheses
    #[test]
    fn test_parse_accepts_display_and_bare_forms() {
        assert_eq!("(2,3)".parse::<Coord>().ok(), Some(Coord::new(2, 3)));
        assert_eq!("2,3".parse::<Coord>().ok(), Some(Coord::new(2, 3)));
        assert_eq!(" ( -1 , 7 ) ".parse::<Coord>().ok(), Some(Coord::new(-1, 7)));

        let coord = Coord::new(-5, 12);
        assert_eq!(coord.to_string().parse::<Coord>().ok(), Some(coord));
    }

    // Tests malformed coordinate text is rejected
    // Verified by defaulting missing components to zero
    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "3", "(3;4)", "a,b", "(1,2", "1,2,3"] {
            assert!(
                matches!(input.parse::<Coord>(), Err(GridError::InvalidCoord { .. })),
                "{input:?} should not parse"
            );
        }
    }

    // Tests index conversion rejects negative components
    // Verified by casting negative rows with `as usize`
    #[test]
    fn test_to_indices() {
        assert_eq!(Coord::new(2, 5).to_indices(), Some((2, 5)));
        assert_eq!(Coord::new(-1, 5).to_indices(), None);
        assert_eq!(Coord::new(2, -5).to_indices(), None);
        assert_eq!(Coord::from_indices(7, 9), Coord::new(7, 9));
    }

    // Tests single steps follow the direction table
    // Verified by stepping North with a positive row delta
    #[test]
    fn test_step() {
        let origin = Coord::new(5, 5);
        assert_eq!(origin.step(Direction::North), Coord::new(4, 5));
        assert_eq!(origin.step(Direction::SouthWest), Coord::new(6, 4));

        for direction in Direction::ALL {
            assert_eq!(origin.step(direction).step(direction.reverse()), origin);
        }
    }

    // Tests multi-step movement including zero and negative counts
    // Verified by ignoring the sign of n
    #[test]
    fn test_step_n() {
        let origin = Coord::new(5, 5);
        assert_eq!(origin.step_n(Direction::East, 3), Coord::new(5, 8));
        assert_eq!(origin.step_n(Direction::NorthWest, 2), Coord::new(3, 3));
        assert_eq!(origin.step_n(Direction::South, 0), origin);
        assert_eq!(
            origin.step_n(Direction::East, -2),
            origin.step_n(Direction::West, 2)
        );
    }

    // Tests taxicab and straight-line distances
    // Verified by dropping abs() on the column difference
    #[test]
    fn test_distances() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, -4);

        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
        assert!((a.euclidean_distance(a)).abs() < f64::EPSILON);
    }

    // Tests bounds predicate on every edge
    // Verified by using <= for the height check
    #[test]
    fn test_within_2d_grid() {
        assert!(Coord::new(0, 0).within_2d_grid(3, 4));
        assert!(Coord::new(2, 3).within_2d_grid(3, 4));
        assert!(!Coord::new(3, 0).within_2d_grid(3, 4));
        assert!(!Coord::new(0, 4).within_2d_grid(3, 4));
        assert!(!Coord::new(-1, 0).within_2d_grid(3, 4));
        assert!(!Coord::new(0, -1).within_2d_grid(3, 4));
        assert!(!Coord::new(0, 0).within_2d_grid(0, 0));
    }

    // Tests Neumann neighbors at a corner keep only in-bounds slots
    // Verified by skipping the bounds check for West
    #[test]
    fn test_neumann_neighbors_at_corner() {
        let neighbors = Coord::new(0, 0).neumann_neighbors(3, 3);

        assert_eq!(neighbors.north, None);
        assert_eq!(neighbors.west, None);
        assert_eq!(neighbors.east, Some(Coord::new(0, 1)));
        assert_eq!(neighbors.south, Some(Coord::new(1, 0)));
    }

    // Tests Moore neighbors at a corner keep only E, SE and S
    // Verified by skipping the bounds check for diagonals
    #[test]
    fn test_moore_neighbors_at_corner() {
        let neighbors = Coord::new(0, 0).moore_neighbors(3, 3);

        assert_eq!(
            neighbors.to_entries(),
            vec![
                (Direction::East, Coord::new(0, 1)),
                (Direction::SouthEast, Coord::new(1, 1)),
                (Direction::South, Coord::new(1, 0)),
            ]
        );
        assert_eq!(neighbors.north, None);
        assert_eq!(neighbors.north_east, None);
        assert_eq!(neighbors.south_west, None);
        assert_eq!(neighbors.west, None);
        assert_eq!(neighbors.north_west, None);
    }

    // Tests an interior cell has every neighbor present
    // Verified by using the grid width as the height bound
    #[test]
    fn test_interior_neighbors_all_present() {
        let center = Coord::new(1, 1);

        assert_eq!(center.neumann_neighbors(3, 3).len_present(), 4);
        assert_eq!(center.moore_neighbors(3, 3).len_present(), 8);
        assert_eq!(center.moore_neighbors(2, 3).len_present(), 5);
    }

    // Tests neighbors at the i32 limits become absent slots instead of overflowing
    // Verified by stepping with unchecked addition in bounded_step
    #[test]
    fn test_neighbors_at_integer_limits() {
        let neighbors = Coord::new(i32::MAX, 0).neumann_neighbors(3, 3);
        assert_eq!(neighbors.len_present(), 0);

        let corner = Coord::new(i32::MIN, i32::MAX).moore_neighbors(3, 3);
        assert_eq!(corner.to_array_all(), [None; 8]);
    }

    // Tests checked stepping reports overflow and plain stepping saturates
    // Verified by wrapping in add
    #[test]
    fn test_step_at_integer_limits() {
        let top = Coord::new(i32::MIN, 0);

        assert_eq!(top.checked_step(Direction::North), None);
        assert_eq!(top.checked_step(Direction::South), Some(Coord::new(i32::MIN + 1, 0)));
        assert_eq!(top.step(Direction::North), top);
        assert_eq!(
            Coord::new(i32::MAX, 1).step_n(Direction::SouthWest, i32::MAX),
            Coord::new(i32::MAX, 1 - i32::MAX)
        );
        assert_eq!(Coord::new(i32::MAX, -2) * 2, Coord::new(i32::MAX, -4));
    }

    // Tests distances between coordinates at opposite limits
    // Verified by computing manhattan distance in i32
    #[test]
    fn test_distances_at_integer_limits() {
        let low = Coord::new(i32::MIN, 0);
        let high = Coord::new(i32::MAX, 0);

        assert_eq!(low.manhattan_distance(Coord::default()), 2_147_483_648);
        assert_eq!(low.manhattan_distance(high), i64::from(u32::MAX));
        assert!((low.euclidean_distance(high) - f64::from(u32::MAX)).abs() < 1.0);
    }
}
