//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no behavior beyond parsing and lookup, so
//! they can be shared by the engine, the terminal driver, and any other consumer
//! of game snapshots.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! The engine never schedules anything itself. These values tell the external
//! driver how often to issue the automatic "move down" intent:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver poll interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Drop interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 50 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.color(), "#a000f0");
//!
//! let intent = Intent::from_str("moveLeft").unwrap();
//! assert_eq!(intent, Intent::Move(Direction::Left));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Driver poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at level 1 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Fastest possible drop interval
pub const MIN_DROP_MS: u32 = 50;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by lines cleared in one lock.
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the (1-based) level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// Each kind has a fixed color:
/// - **I**: `#00f0f0` (cyan)
/// - **O**: `#f0f000` (yellow)
/// - **T**: `#a000f0` (purple)
/// - **S**: `#00f000` (green)
/// - **Z**: `#f00000` (red)
/// - **J**: `#0000f0` (blue)
/// - **L**: `#f0a000` (orange)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order. Random sources index into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Display color as a `#rrggbb` string.
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::O => "#f0f000",
            PieceKind::T => "#a000f0",
            PieceKind::S => "#00f000",
            PieceKind::Z => "#f00000",
            PieceKind::J => "#0000f0",
            PieceKind::L => "#f0a000",
        }
    }
}

/// Direction of a single-cell move. Pieces never move up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Board offset `(dx, dy)` for one step in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Intents a driver can issue to the engine
///
/// These are the only ways game state changes. Timer ticks are plain
/// `Move(Direction::Down)` intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Reset everything and begin a new game
    Start,
    /// Toggle the pause flag
    Pause,
    /// Return to the idle baseline
    Reset,
    /// Move the current piece one cell
    Move(Direction),
    /// Rotate the current piece 90° clockwise
    Rotate,
    /// Move the current piece down until it locks
    Drop,
}

impl Intent {
    /// Parse an intent from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Direction, Intent};
    ///
    /// assert_eq!(Intent::from_str("start"), Some(Intent::Start));
    /// assert_eq!(Intent::from_str("moveRight"), Some(Intent::Move(Direction::Right)));
    /// assert_eq!(Intent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.to_lowercase();
        if let Some(direction) = name.strip_prefix("move") {
            return Direction::from_str(direction).map(Intent::Move);
        }
        match name.as_str() {
            "start" => Some(Intent::Start),
            "pause" => Some(Intent::Pause),
            "reset" => Some(Intent::Reset),
            "rotate" => Some(Intent::Rotate),
            "drop" => Some(Intent::Drop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Pause => "pause",
            Intent::Reset => "reset",
            Intent::Move(Direction::Left) => "moveLeft",
            Intent::Move(Direction::Right) => "moveRight",
            Intent::Move(Direction::Down) => "moveDown",
            Intent::Rotate => "rotate",
            Intent::Drop => "drop",
        }
    }
}

/// Board offset of a piece bitmap's top-left corner.
///
/// `y` may be negative while part of a bitmap sits above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled, colored like the piece that locked there
pub type Cell = Option<PieceKind>;
