//! Tests for neighbor set views and projections

#[cfg(test)]
mod tests {
    use gridkit::spatial::coord::Coord;
    use gridkit::spatial::direction::Direction;
    use gridkit::spatial::neighbors::{NeighborSet, NeighborSet8, Neighborhood};

    fn edge_set() -> NeighborSet {
        // Cell (0, 1) of a 3x3 grid: nothing to the north
        Coord::new(0, 1).neumann_neighbors(3, 3)
    }

    // Tests the full view keeps gaps in N, E, S, W order
    // Verified by swapping east and west in to_array_all
    #[test]
    fn test_to_array_all_keeps_gaps() {
        assert_eq!(
            edge_set().to_array_all(),
            [
                None,
                Some(Coord::new(0, 2)),
                Some(Coord::new(1, 1)),
                Some(Coord::new(0, 0)),
            ]
        );
    }

    // Tests the compact view drops gaps and keeps order
    // Verified by returning slots in reverse order
    #[test]
    fn test_to_array_drops_gaps() {
        assert_eq!(
            edge_set().to_array(),
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(0, 0)]
        );
    }

    // Tests entries are tagged with their direction
    // Verified by tagging every entry North
    #[test]
    fn test_to_entries() {
        assert_eq!(
            edge_set().to_entries(),
            vec![
                (Direction::East, Coord::new(0, 2)),
                (Direction::South, Coord::new(1, 1)),
                (Direction::West, Coord::new(0, 0)),
            ]
        );
    }

    // Tests filter only sees present coordinates
    // Verified by passing absent slots as the default coordinate
    #[test]
    fn test_filter_skips_absent_slots() {
        let mut seen = 0;
        let filtered = edge_set().filter(|coord| {
            seen += 1;
            coord.col == 0
        });

        assert_eq!(seen, 3);
        assert_eq!(filtered, vec![Coord::new(0, 0)]);
    }

    // Tests named access returns None for directions the set does not hold
    // Verified by mapping NorthEast to the north slot
    #[test]
    fn test_get_by_direction() {
        let set = Coord::new(1, 1).neumann_neighbors(3, 3);
        assert_eq!(set.get(Direction::North), Some(Coord::new(0, 1)));
        assert_eq!(set.get(Direction::NorthEast), None);

        let set8 = Coord::new(1, 1).moore_neighbors(3, 3);
        assert_eq!(set8.get(Direction::NorthEast), Some(Coord::new(0, 2)));
        for direction in Direction::ALL {
            assert_eq!(set8.get(direction), Some(Coord::new(1, 1).step(direction)));
        }
    }

    // Tests the 8-slot full view follows compass order from North
    // Verified by listing cardinals before diagonals
    #[test]
    fn test_moore_to_array_all_compass_order() {
        let center = Coord::new(1, 1);
        let expected = Direction::ALL.map(|direction| Some(center.step(direction)));

        assert_eq!(center.moore_neighbors(3, 3).to_array_all(), expected);
    }

    // Tests cardinal projection keeps N, E, S, W unchanged
    // Verified by copying south_east into the south slot
    #[test]
    fn test_cardinal_only_matches_neumann() {
        for (row, col) in [(0, 0), (1, 1), (2, 0), (0, 2)] {
            let coord = Coord::new(row, col);
            assert_eq!(
                coord.moore_neighbors(3, 3).cardinal_only(),
                coord.neumann_neighbors(3, 3)
            );
        }
    }

    // Tests the empty record reports nothing
    // Verified by counting slots instead of present values
    #[test]
    fn test_default_sets_are_empty() {
        assert!(NeighborSet::default().to_array().is_empty());
        assert_eq!(NeighborSet8::default().len_present(), 0);
        assert_eq!(NeighborSet8::default().to_array_all(), [None; 8]);
    }
}
