//! Snapshot module - immutable, serializable view of a game
//!
//! Consumers (renderers, subscribers, JSON dumps) read a [`GameSnapshot`]
//! instead of borrowing the live [`GameState`](crate::GameState). The JSON
//! shape uses camelCase names and projects each board cell to
//! `{"filled": bool, "color": "#rrggbb"}` (empty cells have an empty color).

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::game_state::Tetromino;
use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardRows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: &'static str,
    pub position: Position,
}

impl PieceSnapshot {
    /// Board coordinates of every filled cell of the piece
    pub fn board_cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape.cells().map(move |(dx, dy)| {
            (
                self.position.x as i16 + dx as i16,
                self.position.y as i16 + dy as i16,
            )
        })
    }
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color(),
            position: value.position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(serialize_with = "serialize_board")]
    pub board: BoardRows,
    pub current_piece: Option<PieceSnapshot>,
    pub next_piece: Option<PieceSnapshot>,
    /// Landing row of the current piece, for ghost rendering
    #[serde(skip)]
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub is_playing: bool,
    pub is_paused: bool,
    pub game_over: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// True when move/rotate/drop intents would be honored
    pub fn playable(&self) -> bool {
        self.is_playing && !self.is_paused && !self.game_over
    }

    /// Number of filled board cells (the active piece is not included)
    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current_piece: None,
            next_piece: None,
            ghost_y: None,
            score: 0,
            level: 1,
            lines: 0,
            is_playing: false,
            is_paused: false,
            game_over: false,
            drop_interval_ms: 0,
        }
    }
}

fn serialize_board<S: Serializer>(board: &BoardRows, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(board.iter().map(RowView))
}

struct RowView<'a>(&'a [Cell; BOARD_WIDTH as usize]);

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|cell| CellView(*cell)))
    }
}

struct CellView(Cell);

impl Serialize for CellView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut cell = serializer.serialize_struct("Cell", 2)?;
        cell.serialize_field("filled", &self.0.is_some())?;
        cell.serialize_field("color", self.0.map(|kind| kind.color()).unwrap_or(""))?;
        cell.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_idle() {
        let s = GameSnapshot::default();
        assert_eq!(s.level, 1);
        assert!(!s.playable());
        assert_eq!(s.filled_cells(), 0);
        assert!(s.current_piece.is_none());
    }

    #[test]
    fn piece_snapshot_board_cells() {
        let piece = Tetromino::spawn(PieceKind::O);
        let snap = PieceSnapshot::from(piece);
        let cells: Vec<_> = snap.board_cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
        assert_eq!(snap.color, "#f0f000");
    }
}
