//! Game state: board, side to move, and rule flags.

use cascade_core::{Board, Color, PlacementError, Square};
use thiserror::Error;

/// Errors that can occur when parsing a FEN string into a [`GameState`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if the given side may still castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        (self.0 & Self::kingside_flag(color)) != 0
    }

    /// Returns true if the given side may still castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        (self.0 & Self::queenside_flag(color)) != 0
    }

    /// Returns these rights without either right for `color`.
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        CastlingRights(self.0 & !(Self::kingside_flag(color) | Self::queenside_flag(color)))
    }

    /// Returns these rights without `color`'s kingside right.
    #[must_use]
    pub const fn without_kingside(self, color: Color) -> Self {
        CastlingRights(self.0 & !Self::kingside_flag(color))
    }

    /// Returns these rights without `color`'s queenside right.
    #[must_use]
    pub const fn without_queenside(self, color: Color) -> Self {
        CastlingRights(self.0 & !Self::queenside_flag(color))
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Parses the FEN castling field ("KQkq", "Kq", "-", ...).
    pub fn from_fen_field(field: &str) -> Result<Self, StateError> {
        if field == "-" {
            return Ok(Self::NONE);
        }
        let mut flags = 0;
        for c in field.chars() {
            flags |= match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => {
                    return Err(StateError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            };
        }
        Ok(Self::new(flags))
    }

    /// Serializes to the FEN castling field.
    pub fn to_fen_field(self) -> String {
        let mut out = String::new();
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                out.push(c);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

/// A complete game state.
///
/// The decision engine only reads `board` and `current_player`. Castling
/// rights and the en passant target exist for the legality oracle and are
/// carried forward untouched by hypothetical moves.
///
/// `GameState` is a value: nothing mutates one in place, every transition
/// produces a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl GameState {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Creates a state with no castling rights and no en passant target.
    pub const fn new(board: Board, current_player: Color) -> Self {
        GameState {
            board,
            current_player,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        GameState::new(Board::startpos(), Color::White).with_castling(CastlingRights::ALL)
    }

    /// Returns this state with the given castling rights.
    #[must_use]
    pub const fn with_castling(self, castling: CastlingRights) -> Self {
        GameState { castling, ..self }
    }

    /// Returns this state with the given en passant target.
    #[must_use]
    pub const fn with_en_passant(self, en_passant: Option<Square>) -> Self {
        GameState { en_passant, ..self }
    }

    /// Returns the successor holding `board`, with the other side to move
    /// and the rule flags copied over unchanged.
    #[must_use]
    pub(crate) const fn successor(&self, board: Board) -> Self {
        GameState {
            board,
            current_player: self.current_player.opposite(),
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub const fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Parses a FEN string.
    ///
    /// The halfmove clock and fullmove number are optional and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, StateError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(StateError::InvalidPartCount(parts.len()));
        }

        let board = Board::from_placement(parts[0])?;

        let current_player = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(StateError::InvalidActiveColor(other.to_string())),
        };

        let castling = CastlingRights::from_fen_field(parts[2])?;

        let en_passant = match parts[3] {
            "-" => None,
            ep => match Square::from_algebraic(ep) {
                Some(sq) if sq.row() == 2 || sq.row() == 5 => Some(sq),
                _ => return Err(StateError::InvalidEnPassantSquare(ep.to_string())),
            },
        };

        Ok(GameState {
            board,
            current_player,
            castling,
            en_passant,
        })
    }

    /// Serializes to a FEN string with zeroed clocks.
    pub fn to_fen(&self) -> String {
        let side = match self.current_player {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic());
        format!(
            "{} {} {} {} 0 1",
            self.board.to_placement(),
            side,
            self.castling.to_fen_field(),
            ep
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}
