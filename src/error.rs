use crate::core::PlayerId;

/// Reasons a pit cannot be played.
///
/// Returned before any state is touched: a failed `apply_move` leaves the
/// engine exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("game is already over")]
    GameOver,

    #[error("slot {pit} is not a pit")]
    OutOfRange { pit: usize },

    #[error("pit {pit} does not belong to {player}")]
    NotYourPit { pit: usize, player: PlayerId },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },
}

/// Errors building a board from untyped input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have 14 slots, got {len}")]
    WrongLength { len: usize },
}

/// Errors while driving a game with policies.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("policy {policy} chose an illegal move: {source}")]
    IllegalMove { policy: String, source: InvalidMove },

    #[error("policy {policy} found no move for {player}")]
    NoMove { policy: String, player: PlayerId },
}
