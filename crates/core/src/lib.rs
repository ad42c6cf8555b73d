//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state transitions. It has
//! **no dependencies** on terminals, timers, or I/O:
//!
//! - **Deterministic**: the same piece source yields the same game
//! - **Synchronous**: every intent is a total function of the current state
//! - **Portable**: drive it from a terminal, a test, or anything else
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, collision checks, and line clearing
//! - [`game_state`]: active/look-ahead pieces, intents, locking, progression
//! - [`pieces`]: tetromino bitmaps and the clockwise rotation transform
//! - [`rng`]: injectable piece sources (seeded LCG, scripted sequences)
//! - [`scoring`]: line clear points, levels, and drop intervals
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random among the seven kinds
//! - One look-ahead piece is always visible once a game starts
//! - Rotation is clockwise only, with no wall kicks
//! - A piece locks as soon as a downward move is blocked
//! - Score per lock: `[0, 40, 100, 300, 1200][lines] * level`
//! - `level = lines / 10 + 1`; the game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedSource, Transition};
//! use blockfall_core::types::{Direction, Intent, PieceKind};
//!
//! let mut game = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
//! game.apply(Intent::Start);
//!
//! assert_eq!(game.apply(Intent::Move(Direction::Left)), Transition::Moved);
//! assert!(matches!(game.apply(Intent::Drop), Transition::Locked(_)));
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The engine never schedules anything. Drivers issue `Move(Down)` every
//! [`GameState::drop_interval_ms`] milliseconds while
//! [`GameState::is_running`] holds.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{clear_lines, Board, LineClear};
pub use game_state::{
    is_valid_position, next_tetromino, place_piece_on_board, GameState, LockEvent, Tetromino,
    Transition,
};
pub use pieces::Shape;
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use scoring::{calculate_level, calculate_score, drop_interval_ms};
pub use snapshot::{GameSnapshot, PieceSnapshot};
