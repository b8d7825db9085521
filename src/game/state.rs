use super::{Board, PlayerId};
use crate::error::GameError;

/// Result of attempting to drop a token into a column.
///
/// Accepted moves carry the resolved cell and the acting player's id so the
/// caller can render the placement without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The column was full; nothing changed. Routine input, not an error.
    Rejected,
    /// Token placed; the game goes on with the other player.
    Continue {
        row: usize,
        column: usize,
        player: PlayerId,
    },
    /// Token placed and it completed a four-in-a-row.
    Win {
        row: usize,
        column: usize,
        player: PlayerId,
    },
    /// Token placed and the board is now full with no winner.
    Tie {
        row: usize,
        column: usize,
        player: PlayerId,
    },
}

impl MoveOutcome {
    /// The (row, column, player) of an accepted placement.
    pub fn placement(&self) -> Option<(usize, usize, PlayerId)> {
        match *self {
            MoveOutcome::Rejected => None,
            MoveOutcome::Continue { row, column, player }
            | MoveOutcome::Win { row, column, player }
            | MoveOutcome::Tie { row, column, player } => Some((row, column, player)),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::Tie { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    InProgress,
    Won,
    Tied,
}

/// One round of Connect Four: a board, two players, and whose turn it is.
///
/// A game that reports `Win` or `Tie` is terminal; the caller discards it and
/// constructs a new one to play again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [PlayerId; 2],
    current: PlayerId,
    phase: Phase,
}

impl Game {
    /// Create a game with an empty `width` x `height` board. Player one moves
    /// first.
    pub fn new(
        width: usize,
        height: usize,
        player_one: PlayerId,
        player_two: PlayerId,
    ) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension { width, height });
        }
        if player_one == player_two {
            return Err(GameError::DuplicatePlayer);
        }
        Ok(Game {
            board: Board::new(width, height),
            players: [player_one, player_two],
            current: player_one,
            phase: Phase::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Check if the game is over (won or tied).
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// The winner, once a win has been detected.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Won => Some(self.current),
            _ => None,
        }
    }

    /// Drop the current player's token into `column`.
    ///
    /// Exactly one cell is filled on an accepted move; a rejected or erroneous
    /// call leaves the game untouched. On a win the current player stays the
    /// winner; otherwise the turn passes to the other player.
    pub fn drop_token(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if column >= self.board.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.board.width(),
            });
        }

        let Some(row) = self.board.drop_piece(column, self.current) else {
            return Ok(MoveOutcome::Rejected);
        };
        let player = self.current;

        if self.board.has_connect_four(player) {
            self.phase = Phase::Won;
            return Ok(MoveOutcome::Win { row, column, player });
        }
        if self.board.is_full() {
            self.phase = Phase::Tied;
            return Ok(MoveOutcome::Tie { row, column, player });
        }

        self.current = self.other_player();
        Ok(MoveOutcome::Continue { row, column, player })
    }

    fn other_player(&self) -> PlayerId {
        if self.current == self.players[0] {
            self.players[1]
        } else {
            self.players[0]
        }
    }
}
