//! Grid tests - storage, bounds sentinel and text fixtures

use tile_crush::core::{BoardConfig, Grid, GridError};
use tile_crush::types::{Kind, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(BoardConfig::default());
    assert_eq!(grid.width(), DEFAULT_WIDTH);
    assert_eq!(grid.height(), DEFAULT_HEIGHT);

    for y in 0..DEFAULT_HEIGHT as i8 {
        for x in 0..DEFAULT_WIDTH as i8 {
            assert!(grid.contains(Position::new(x, y)));
            assert_eq!(grid.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(grid.token_count(), 0);
    assert!(!grid.is_full());
}

#[test]
fn test_out_of_bounds_is_sentinel() {
    let mut grid = Grid::new(BoardConfig::default());
    for y in 0..DEFAULT_HEIGHT as i8 {
        for x in 0..DEFAULT_WIDTH as i8 {
            grid.set(x, y, Some(Kind::new(0)));
        }
    }

    for (x, y) in [(-1, 0), (0, -1), (DEFAULT_WIDTH as i8, 0), (0, DEFAULT_HEIGHT as i8)] {
        assert_eq!(grid.get(x, y), None);
        assert_eq!(grid.kind_at(x, y), None);
        assert!(!grid.set(x, y, Some(Kind::new(1))));
    }
    // The sentinel differs from both an empty cell and every token.
    assert_ne!(grid.get(-1, -1), Some(None));
    assert_ne!(grid.get(-1, -1), Some(Some(Kind::new(0))));
}

#[test]
fn test_set_and_get() {
    let mut grid = Grid::new(BoardConfig::default());
    assert!(grid.set(2, 3, Some(Kind::new(4))));
    assert_eq!(grid.get(2, 3), Some(Some(Kind::new(4))));
    assert_eq!(grid.cell(Position::new(2, 3)), Some(Some(Kind::new(4))));
    assert!(grid.is_occupied(2, 3));

    assert!(grid.set(2, 3, None));
    assert_eq!(grid.get(2, 3), Some(None));
}

#[test]
fn test_set_rejects_kind_out_of_range() {
    let mut grid = Grid::new(BoardConfig::new(6, 6, 7).unwrap());
    assert!(grid.set(0, 0, Some(Kind::new(6))));

    assert!(!grid.set(0, 0, Some(Kind::new(7))));
    assert!(!grid.set(1, 1, Some(Kind::new(20))));
    assert_eq!(grid.get(0, 0), Some(Some(Kind::new(6))));
    assert_eq!(grid.get(1, 1), Some(None));
}

#[test]
fn test_rows_and_columns() {
    let grid = Grid::from_ascii(
        BoardConfig::new(3, 3, 5).unwrap(),
        "012
         3.4
         ..0",
    )
    .unwrap();

    let column: Vec<_> = grid.column(1).collect();
    assert_eq!(column, vec![Some(Kind::new(1)), None, None]);
    let row: Vec<_> = grid.row(1).collect();
    assert_eq!(row, vec![Some(Kind::new(3)), None, Some(Kind::new(4))]);
    assert_eq!(grid.token_count(), 6);
}

#[test]
fn test_fixture_errors() {
    let config = BoardConfig::new(3, 3, 5).unwrap();

    assert_eq!(
        Grid::from_ascii(config, "012\n012"),
        Err(GridError::RowCount {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        Grid::from_ascii(config, "012\n01\n012"),
        Err(GridError::RowLength {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        Grid::from_ascii(config, "012\n0x2\n012"),
        Err(GridError::BadChar {
            row: 1,
            column: 1,
            found: 'x'
        })
    );
    assert_eq!(
        Grid::from_ascii(config, "012\n012\n015"),
        Err(GridError::KindOutOfRange {
            row: 2,
            column: 2,
            kind: 5,
            kinds: 5
        })
    );
}

#[test]
fn test_display_round_trips_fixture() {
    let text = "0.1\n234\n..4\n";
    let grid = Grid::from_ascii(BoardConfig::new(3, 3, 5).unwrap(), text).unwrap();
    assert_eq!(grid.to_string(), text);
}
