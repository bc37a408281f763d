//! Tests for connectivity rules and neighbor stepping at grid edges

#[cfg(test)]
mod tests {
    use holefill::io::error::FillError;
    use holefill::spatial::neighbors::{Connectivity, NEIGHBOR_OFFSETS, step};

    // Tests numeric conversion accepts exactly 4 and 8
    // Verified by accepting any even value
    #[test]
    fn test_connectivity_try_from() {
        assert_eq!(Connectivity::try_from(4).unwrap(), Connectivity::Four);
        assert_eq!(Connectivity::try_from(8).unwrap(), Connectivity::Eight);

        let Err(FillError::InvalidConnectivity { value }) = Connectivity::try_from(6) else {
            panic!("expected InvalidConnectivity");
        };
        assert_eq!(value, 6);

        assert!(Connectivity::try_from(0).is_err());
    }

    // Tests four-connectivity selects only cardinal offsets
    // Verified by including diagonals in the four-connected filter
    #[test]
    fn test_four_connectivity_offsets() {
        let offsets: Vec<[isize; 2]> = Connectivity::Four.offsets().collect();

        assert_eq!(offsets.len(), 4);
        for offset in &offsets {
            assert_eq!(
                offset[0].abs() + offset[1].abs(),
                1,
                "offset {offset:?} should be cardinal"
            );
        }
    }

    // Tests eight-connectivity covers every surrounding pixel once
    // Verified by dropping offsets from the neighbor table
    #[test]
    fn test_eight_connectivity_offsets() {
        let offsets: Vec<[isize; 2]> = Connectivity::Eight.offsets().collect();

        assert_eq!(offsets.len(), 8);
        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if (dx, dy) == (0, 0) {
                    assert!(!offsets.contains(&[dx, dy]), "center is not a neighbor");
                } else {
                    assert!(offsets.contains(&[dx, dy]), "missing offset [{dx}, {dy}]");
                }
            }
        }

        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
    }

    // Tests interior steps land on the expected neighbor
    // Verified by swapping the offset axes in step
    #[test]
    fn test_step_interior() {
        assert_eq!(step([2, 2], [1, 0], 5, 5), Some([3, 2]));
        assert_eq!(step([2, 2], [0, -1], 5, 5), Some([2, 1]));
        assert_eq!(step([2, 2], [-1, 1], 5, 5), Some([1, 3]));
    }

    // Tests steps off the grid are clipped rather than wrapped
    // Verified by using wrapping arithmetic in step
    #[test]
    fn test_step_clips_at_edges() {
        assert_eq!(step([0, 0], [-1, 0], 4, 4), None);
        assert_eq!(step([0, 0], [0, -1], 4, 4), None);
        assert_eq!(step([0, 0], [-1, -1], 4, 4), None);
        assert_eq!(step([3, 3], [1, 0], 4, 4), None);
        assert_eq!(step([3, 3], [0, 1], 4, 4), None);
        assert_eq!(step([3, 3], [1, 1], 4, 4), None);

        assert_eq!(step([0, 0], [1, 1], 4, 4), Some([1, 1]));
        assert_eq!(step([3, 3], [-1, -1], 4, 4), Some([2, 2]));
    }

    // Tests display and numeric accessors agree
    // Verified by hardcoding the display string
    #[test]
    fn test_connectivity_display() {
        assert_eq!(Connectivity::Four.as_u8(), 4);
        assert_eq!(Connectivity::Eight.as_u8(), 8);
        assert_eq!(Connectivity::Four.to_string(), "4-connected");
        assert_eq!(Connectivity::Eight.to_string(), "8-connected");
    }
}
