//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the board engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, presentation layers, headless drivers).
//!
//! # Board Dimensions
//!
//! Reference playfield dimensions:
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 6 rows (indexed 0-5, row 0 is the top)
//! - **Kinds**: 7 token kinds (indexed 0-6)
//!
//! Dimensions are configurable per board within these limits:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 3 | Smallest width/height (a triple must fit) |
//! | `MAX_DIMENSION` | 64 | Largest width/height (coordinates stay `i8`) |
//! | `MIN_KINDS` | 5 | Refill always has a kind left after excluding 4 neighbours |
//! | `MAX_KINDS` | 16 | Upper bound on token kinds |
//!
//! # Scoring
//!
//! A run of `n >= 3` tokens is worth `MATCH_BASE_SCORE + MATCH_EXTRA_SCORE * (n - 3)`.
//!
//! # Examples
//!
//! ```
//! use tile_crush_types::{Direction, Kind, Position, DEFAULT_WIDTH};
//!
//! let kind = Kind::new(3);
//! assert_eq!(kind.index(), 3);
//! assert_eq!(kind.as_char(), '3');
//!
//! let a = Position::new(2, 4);
//! let b = a.step(Direction::Up);
//! assert_eq!(b, Position::new(2, 3));
//! assert!(a.is_adjacent(b));
//!
//! assert_eq!(Direction::Left.as_str(), "left");
//! assert_eq!(DEFAULT_WIDTH, 6);
//! ```

use std::fmt;

/// Reference board width in cells (6 columns)
pub const DEFAULT_WIDTH: u8 = 6;

/// Reference board height in cells (6 rows)
pub const DEFAULT_HEIGHT: u8 = 6;

/// Reference number of token kinds
pub const DEFAULT_KINDS: u8 = 7;

/// Smallest allowed width/height.
pub const MIN_DIMENSION: u8 = 3;

/// Largest allowed width/height.
pub const MAX_DIMENSION: u8 = 64;

/// Smallest allowed number of token kinds.
pub const MIN_KINDS: u8 = 5;

/// Largest allowed number of token kinds.
pub const MAX_KINDS: u8 = 16;

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

/// Points for a run of exactly `MIN_RUN` tokens.
pub const MATCH_BASE_SCORE: u32 = 10;

/// Points for every token beyond `MIN_RUN` in a single run.
pub const MATCH_EXTRA_SCORE: u32 = 10;

/// Token kind identifier.
///
/// Tokens carry no identity beyond their kind; two tokens of the same kind
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(u8);

impl Kind {
    /// Create a kind from its index
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Index of this kind in `[0, K)`
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-character form used by text fixtures (`0-9`, then `a-f`)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_types::Kind;
    ///
    /// assert_eq!(Kind::new(0).as_char(), '0');
    /// assert_eq!(Kind::new(10).as_char(), 'a');
    /// assert_eq!(Kind::new(15).as_char(), 'f');
    /// ```
    pub fn as_char(self) -> char {
        char::from_digit(self.0 as u32, MAX_KINDS as u32).unwrap_or('?')
    }

    /// Parse the single-character form (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_types::Kind;
    ///
    /// assert_eq!(Kind::from_char('4'), Some(Kind::new(4)));
    /// assert_eq!(Kind::from_char('B'), Some(Kind::new(11)));
    /// assert_eq!(Kind::from_char('.'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(MAX_KINDS as u32).map(|d| Self(d as u8))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Kind)`: Cell holding a token of the given kind
///
/// Board lookups return `Option<Cell>`; the outer `None` is the out-of-bounds
/// sentinel, which never compares equal to any cell (including `Some(None)`).
pub type Cell = Option<Kind>;

/// Cardinal directions
///
/// - **Up**: towards row 0
/// - **Down**: towards the bottom row (the direction of gravity)
/// - **Left**: towards column 0
/// - **Right**: towards the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in neighbour-scan order (up, right, down, left)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Offset `(dx, dy)` of one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_crush_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Board coordinate: `x` is the column, `y` the row (`y = 0` is the top).
///
/// Coordinates are signed so that neighbour offsets can step off the board;
/// lookups outside the grid yield the out-of-bounds sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position offset by `(dx, dy)`
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Neighbouring position one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Manhattan distance between two positions
    pub fn manhattan(self, other: Position) -> u16 {
        let dx = (self.x as i16 - other.x as i16).unsigned_abs();
        let dy = (self.y as i16 - other.y as i16).unsigned_abs();
        dx + dy
    }

    /// True when the positions share an edge (Manhattan distance exactly 1)
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Direction from `self` to an adjacent `other`, if they are adjacent
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where a token in transit starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A cell on the board
    Cell(Position),
    /// The spawn row just above the top of a column
    AboveBoard { column: i8 },
}

impl Origin {
    /// Board position the origin corresponds to; row `-1` for spawns
    pub fn position(self) -> Position {
        match self {
            Origin::Cell(position) => position,
            Origin::AboveBoard { column } => Position::new(column, -1),
        }
    }
}

/// A token in transit during one resolution frame
///
/// Describes movement only; it is never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingMove {
    pub origin: Origin,
    pub direction: Direction,
    pub kind: Kind,
}

impl PendingMove {
    /// Cell the token occupies once the move completes
    pub fn destination(&self) -> Position {
        self.origin.position().step(self.direction)
    }
}
