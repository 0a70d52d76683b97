//! Move-possibility oracle against exhaustive swap search

use tile_crush::core::{find_one_off, has_any_legal_move, BoardConfig, Grid, Session};
use tile_crush::engine::legal_swaps;
use tile_crush::types::Kind;

/// kind(x, y) = (x + 2y) mod 5: no single swap forms a run.
fn dead_board() -> Grid {
    let mut grid = Grid::new(BoardConfig::new(6, 6, 5).unwrap());
    for y in 0..6i8 {
        for x in 0..6i8 {
            grid.set(x, y, Some(Kind::new(((x + 2 * y) % 5) as u8)));
        }
    }
    grid
}

#[test]
fn test_dead_board_has_no_moves() {
    let mut grid = dead_board();
    assert!(grid.is_full());
    assert!(!has_any_legal_move(&grid));
    assert!(find_one_off(&grid).is_none());
    assert!(legal_swaps(&mut grid).is_empty());
}

#[test]
fn test_one_off_pattern_found() {
    // Moving the 1 at (2, 1) up completes 1 1 1 along the top row.
    let grid = Grid::from_ascii(
        BoardConfig::new(4, 4, 5).unwrap(),
        "1120
         3412
         2041
         0324",
    )
    .unwrap();
    assert!(has_any_legal_move(&grid));
    let found = find_one_off(&grid).unwrap();
    assert_eq!(found.kind, Kind::new(1));
}

#[test]
fn test_oracle_does_not_mutate() {
    let grid = dead_board();
    let before = grid.clone();
    has_any_legal_move(&grid);
    assert_eq!(grid, before);
}

#[test]
fn test_oracle_agrees_with_exhaustive_search() {
    let mut live = 0;
    for kinds in [5u8, 7] {
        for seed in 0..150u64 {
            let session = Session::new(BoardConfig::new(6, 6, kinds).unwrap(), seed).unwrap();
            let mut grid = session.grid().clone();
            let oracle = has_any_legal_move(&grid);
            let swaps = legal_swaps(&mut grid);
            assert_eq!(
                oracle,
                !swaps.is_empty(),
                "kinds {} seed {}: oracle {} swaps {:?}",
                kinds,
                seed,
                oracle,
                swaps
            );
            assert_eq!(session.is_over(), !oracle);
            live += usize::from(oracle);
        }
    }
    assert!(live > 0);
}
