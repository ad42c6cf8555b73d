//! Game state module - manages the complete game state
//!
//! This module ties together the board, piece bitmaps, the piece source, and
//! scoring. Every intent is a synchronous, total transition: invalid moves and
//! intents that arrive while the game is not running are ignored, and a
//! spawn collision ends the game instead of failing.
//!
//! The engine owns no timer. The driver issues `Move(Down)` at the interval
//! reported by [`GameState::drop_interval_ms`].

use log::{debug, info};

use crate::board::{clear_lines, Board};
use crate::pieces::Shape;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{calculate_level, calculate_score, drop_interval_ms};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Direction, Intent, PieceKind, Position, BOARD_WIDTH};

/// Falling piece: kind, current bitmap, and the board offset of the bitmap's
/// top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Tetromino {
    /// Fresh piece with its canonical bitmap, centered on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
        Self {
            kind,
            shape,
            position: Position::new(x, 0),
        }
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Check if the piece fits the board at its own position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.position)
    }

    pub fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Same piece with its bitmap turned 90° clockwise, position unchanged
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self
        }
    }
}

/// Whether `piece` fits on `board` with its bitmap at `pos`.
///
/// Filled bitmap cells must stay within the columns and above the floor, and
/// must not land on a filled board cell. Rows above the top edge are allowed.
pub fn is_valid_position(board: &Board, piece: &Tetromino, pos: Position) -> bool {
    board.fits(&piece.shape, pos)
}

/// New board with the piece's filled cells written in its color
pub fn place_piece_on_board(board: &Board, piece: &Tetromino) -> Board {
    let mut next = board.clone();
    next.stamp(&piece.shape, piece.position, piece.kind);
    next
}

/// Draw the next kind from `source` and spawn it
pub fn next_tetromino<S: PieceSource + ?Sized>(source: &mut S) -> Tetromino {
    Tetromino::spawn(source.next_kind())
}

/// What a single lock did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub game_over: bool,
}

/// Outcome of applying one intent. Informational; never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Not playing, paused, or no active piece
    Ignored,
    Moved,
    Rotated,
    /// Target position invalid; nothing changed
    Blocked,
    Locked(LockEvent),
    Started,
    PauseToggled,
    Reset,
}

impl Transition {
    /// Whether the state may differ from before the intent
    pub fn changed_state(&self) -> bool {
        !matches!(self, Transition::Ignored | Transition::Blocked)
    }
}

/// Complete game state
///
/// Value-semantic: `Clone` gives an independent copy and equality is
/// structural, piece source included.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    score: u32,
    level: u32,
    lines: u32,
    playing: bool,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    source: S,
}

impl GameState<SimpleRng> {
    /// Create an idle game whose pieces come from a seeded LCG
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create an idle game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            playing: false,
            paused: false,
            game_over: false,
            last_event: None,
            source,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Playing and not paused: the condition under which the driver's
    /// gravity timer should run
    pub fn is_running(&self) -> bool {
        self.playing && !self.paused
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Automatic drop interval for the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Lowest y the current piece could fall to (where it would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.current?;
        let mut y = piece.position.y;
        while is_valid_position(&self.board, &piece, Position::new(piece.position.x, y + 1)) {
            y += 1;
        }
        Some(y)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);

        out.current_piece = self.current.map(PieceSnapshot::from);
        out.next_piece = self.next.map(PieceSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.is_playing = self.playing;
        out.is_paused = self.paused;
        out.game_over = self.game_over;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset everything and begin a new game with a fresh current/next pair
    pub fn start_game(&mut self) -> Transition {
        self.clear_progress();
        let current = next_tetromino(&mut self.source);
        let next = next_tetromino(&mut self.source);
        self.current = Some(current);
        self.next = Some(next);
        self.playing = true;
        info!(
            "game started: current={:?} next={:?}",
            current.kind, next.kind
        );
        Transition::Started
    }

    /// Toggle the pause flag
    pub fn pause_game(&mut self) -> Transition {
        self.paused = !self.paused;
        debug!("pause toggled: paused={}", self.paused);
        Transition::PauseToggled
    }

    /// Return to the idle baseline. The piece source keeps its sequence.
    pub fn reset_game(&mut self) -> Transition {
        self.clear_progress();
        info!("game reset");
        Transition::Reset
    }

    /// Move the current piece one cell; a blocked downward move locks it
    pub fn move_piece(&mut self, direction: Direction) -> Transition {
        let Some(piece) = self.active_piece() else {
            return Transition::Ignored;
        };

        let (dx, dy) = direction.delta();
        let target = piece.position.offset(dx, dy);

        if is_valid_position(&self.board, &piece, target) {
            self.current = Some(piece.moved_to(target));
            Transition::Moved
        } else if direction == Direction::Down {
            Transition::Locked(self.lock_piece(piece))
        } else {
            Transition::Blocked
        }
    }

    /// Rotate the current piece clockwise in place; discarded if it would not fit
    pub fn rotate_piece(&mut self) -> Transition {
        let Some(piece) = self.active_piece() else {
            return Transition::Ignored;
        };

        let rotated = piece.rotated();
        if rotated.is_valid(&self.board) {
            self.current = Some(rotated);
            Transition::Rotated
        } else {
            Transition::Blocked
        }
    }

    /// Hard drop: repeat the downward move until the piece locks
    pub fn drop_piece(&mut self) -> Transition {
        loop {
            match self.move_piece(Direction::Down) {
                Transition::Moved => continue,
                other => return other,
            }
        }
    }

    /// Apply an intent
    pub fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::Start => self.start_game(),
            Intent::Pause => self.pause_game(),
            Intent::Reset => self.reset_game(),
            Intent::Move(direction) => self.move_piece(direction),
            Intent::Rotate => self.rotate_piece(),
            Intent::Drop => self.drop_piece(),
        }
    }

    /// The piece that intents may act on, if the game is accepting them
    fn active_piece(&self) -> Option<Tetromino> {
        if !self.playing || self.paused {
            return None;
        }
        self.current
    }

    fn clear_progress(&mut self) {
        self.board.clear();
        self.current = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.playing = false;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
    }

    /// Stamp `piece`, clear lines, score, then promote the look-ahead piece
    fn lock_piece(&mut self, piece: Tetromino) -> LockEvent {
        let placed = place_piece_on_board(&self.board, &piece);
        let cleared = clear_lines(&placed);
        let lines_cleared = cleared.lines_cleared() as u32;

        // Score at the level in effect before this lock's lines count
        let score_gained = calculate_score(cleared.lines_cleared(), self.level);
        self.board = cleared.board;
        self.score = self.score.saturating_add(score_gained);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = calculate_level(self.lines);

        if lines_cleared > 0 {
            debug!(
                "{:?} locked at ({}, {}), cleared rows {:?}",
                piece.kind,
                piece.position.x,
                piece.position.y,
                cleared.cleared_rows.as_slice()
            );
        } else {
            debug!(
                "{:?} locked at ({}, {})",
                piece.kind, piece.position.x, piece.position.y
            );
        }

        let promoted = self.next.unwrap_or_else(|| next_tetromino(&mut self.source));
        let refill = next_tetromino(&mut self.source);

        let game_over = !promoted.is_valid(&self.board);
        if game_over {
            self.game_over = true;
            self.playing = false;
            info!(
                "game over: {:?} cannot spawn; score={} lines={} level={}",
                promoted.kind, self.score, self.lines, self.level
            );
        } else {
            self.current = Some(promoted);
            self.next = Some(refill);
        }

        let event = LockEvent {
            lines_cleared,
            score_gained,
            game_over,
        };
        self.last_event = Some(event);
        event
    }
}

impl<S: PieceSource + Clone> GameState<S> {
    /// Pure form of [`GameState::apply`]: the state after `intent`, leaving
    /// `self` untouched
    pub fn transition(&self, intent: Intent) -> (Self, Transition) {
        let mut next = self.clone();
        let outcome = next.apply(intent);
        (next, outcome)
    }
}
