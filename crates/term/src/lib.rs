//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer of styled characters, which is then diffed and flushed to the
//! terminal. No widget toolkit is involved, so cell aspect ratio (2 columns
//! per board cell by default) is fully under our control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, MAX_CELL_H, MAX_CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
