//! Integration tests for the knight search and merge sort.

use canopy::{merge_sort, shortest_path, Square};
use proptest::prelude::*;
use test_case::test_case;

fn square(file: u8, rank: u8) -> Square {
    Square::new(file, rank).expect("test square on board")
}

#[test_case(0, 0, 1, 2, 1; "single move")]
#[test_case(0, 0, 3, 3, 2; "two moves")]
#[test_case(3, 3, 0, 0, 2; "reverse direction")]
#[test_case(0, 0, 7, 7, 6; "corner to corner")]
#[test_case(3, 3, 4, 3, 3; "adjacent square")]
#[test_case(4, 4, 4, 4, 0; "same square")]
#[test_case(0, 0, 7, 0, 5; "along the edge")]
fn test_knight_minimal_move_counts(
    from_file: u8,
    from_rank: u8,
    to_file: u8,
    to_rank: u8,
    moves: usize,
) {
    let path = shortest_path(square(from_file, from_rank), square(to_file, to_rank));
    assert_eq!(path.len() - 1, moves);
    assert_eq!(path.first(), Some(&square(from_file, from_rank)));
    assert_eq!(path.last(), Some(&square(to_file, to_rank)));
}

proptest! {
    #[test]
    fn knight_paths_are_valid_walks(
        from_file in 0u8..8, from_rank in 0u8..8,
        to_file in 0u8..8, to_rank in 0u8..8,
    ) {
        let start = square(from_file, from_rank);
        let goal = square(to_file, to_rank);
        let path = shortest_path(start, goal);

        prop_assert_eq!(path.first(), Some(&start));
        prop_assert_eq!(path.last(), Some(&goal));
        for step in path.windows(2) {
            let file_delta = (step[0].file() as i8 - step[1].file() as i8).abs();
            let rank_delta = (step[0].rank() as i8 - step[1].rank() as i8).abs();
            prop_assert!(
                (file_delta, rank_delta) == (1, 2) || (file_delta, rank_delta) == (2, 1),
                "each step must be a knight move"
            );
        }
        // No board needs more than six knight moves between two squares.
        prop_assert!(path.len() - 1 <= 6);
    }

    #[test]
    fn merge_sort_matches_standard_sort(values in proptest::collection::vec(-10_000i64..10_000, 0..256)) {
        let sorted = merge_sort(&values);
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }
}

#[test]
fn test_merge_sort_worked_example() {
    assert_eq!(merge_sort(&[105, 79, 100, 110]), vec![79, 100, 105, 110]);
}
