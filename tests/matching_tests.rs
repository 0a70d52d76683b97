//! Match detection and scoring

use tile_crush::core::scoring::remove_set_score;
use tile_crush::core::{batch_score, find_matches, has_matches, BoardConfig, Grid, Orientation};
use tile_crush::types::{Kind, Position};

fn grid(width: u8, height: u8, text: &str) -> Grid {
    Grid::from_ascii(BoardConfig::new(width, height, 7).unwrap(), text).unwrap()
}

#[test]
fn test_run_of_four_is_one_set() {
    let g = grid(
        6,
        3,
        "2222..
         ......
         ......",
    );
    let sets = find_matches(&g);

    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert_eq!(set.len(), 4);
    assert_eq!(set.kind(), Kind::new(2));
    assert_eq!(set.orientation(), Orientation::Horizontal);
    assert_eq!(set.anchor(), Position::new(0, 0));
    assert_eq!(set.score(), 20);
}

#[test]
fn test_pairs_and_empty_cells_do_not_match() {
    let g = grid(
        5,
        3,
        "11.11
         .....
         2.2.2",
    );
    assert!(find_matches(&g).is_empty());
    assert!(!has_matches(&g));
}

#[test]
fn test_vertical_run() {
    let g = grid(
        3,
        4,
        ".3.
         .3.
         .3.
         .0.",
    );
    let sets = find_matches(&g);

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].orientation(), Orientation::Vertical);
    assert_eq!(
        sets[0].positions(),
        &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
    );
}

#[test]
fn test_crossing_runs_share_a_cell() {
    let g = grid(
        5,
        5,
        "..4..
         ..4..
         44444
         ..4..
         .....",
    );
    let sets = find_matches(&g);

    assert_eq!(sets.len(), 2);
    let shared = Position::new(2, 2);
    assert!(sets.iter().all(|set| set.contains(shared)));
    assert_eq!(batch_score(&sets), 30 + 20);
}

#[test]
fn test_same_row_runs_are_separate() {
    let g = grid(
        7,
        3,
        "1112333
         .......
         .......",
    );
    let sets = find_matches(&g);

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].kind(), Kind::new(1));
    assert_eq!(sets[1].kind(), Kind::new(3));
    assert_eq!(sets[1].anchor(), Position::new(4, 0));
}

#[test]
fn test_score_formula() {
    assert_eq!(remove_set_score(2), 0);
    assert_eq!(remove_set_score(3), 10);
    assert_eq!(remove_set_score(4), 20);
    assert_eq!(remove_set_score(5), 30);
}
