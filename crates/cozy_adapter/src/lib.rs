//! `GameState` implementation over the cozy-chess rules engine.
//!
//! The selectors never see cozy-chess directly; they drive this adapter
//! through the `engine_core::GameState` trait. Undo is implemented as a
//! stack of pre-move board snapshots, so every undo restores the board
//! bit-for-bit.

use cozy_chess::{Board, FenParseError, GameStatus, Square};

// Re-exported so downstream crates and tests can name moves without
// depending on cozy-chess directly.
pub use cozy_chess::Move;

use engine_core::{BoardSnapshot, Color, GameState, IllegalMove, Piece, PieceKind, Terminal};

#[cfg(test)]
mod lib_tests;

/// Shared mutable game state for one game, exclusively owned by the
/// caller for the duration of a search.
#[derive(Debug, Clone)]
pub struct CozyState {
    board: Board,
    history: Vec<Board>,
}

impl CozyState {
    /// Standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        Ok(Self {
            board: Board::from_fen(fen, false)?,
            history: Vec::new(),
        })
    }

    /// Direct read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current position as a FEN string.
    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    /// Number of applied moves that have not been undone.
    pub fn ply_depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for CozyState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl GameState for CozyState {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|batch| {
            moves.extend(batch);
            false
        });
        moves
    }

    fn moves_from(&self, from: u8) -> Vec<Move> {
        match Square::try_index(from as usize) {
            Some(sq) => self
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.from == sq)
                .collect(),
            None => Vec::new(),
        }
    }

    fn apply(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let before = self.board.clone();
        self.board
            .try_play(mv)
            .map_err(|_| IllegalMove::new(mv.to_string()))?;
        self.history.push(before);
        Ok(())
    }

    fn undo(&mut self) {
        let before = self
            .history
            .pop()
            .expect("undo without a matching apply");
        self.board = before;
    }

    fn terminal(&self) -> Terminal {
        match self.board.status() {
            GameStatus::Ongoing => Terminal::Ongoing,
            // cozy-chess reports Won when the side to move is mated
            GameStatus::Won => Terminal::Checkmate,
            GameStatus::Drawn => Terminal::Draw,
        }
    }

    fn side_to_move(&self) -> Color {
        convert_color(self.board.side_to_move())
    }

    fn snapshot(&self) -> BoardSnapshot {
        let mut grid: BoardSnapshot = [[None; 8]; 8];
        for sq in Square::ALL {
            if let (Some(kind), Some(color)) = (self.board.piece_on(sq), self.board.color_on(sq)) {
                grid[sq.rank() as usize][sq.file() as usize] =
                    Some(Piece::new(convert_color(color), convert_kind(kind)));
            }
        }
        grid
    }
}

fn convert_color(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn convert_kind(piece: cozy_chess::Piece) -> PieceKind {
    match piece {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}
