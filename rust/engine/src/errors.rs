use thiserror::Error;

use crate::cards::Rank;
use crate::player::DealerState;

/// Why a hand cannot be split.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("Split is only allowed with two cards (hand holds {0})")]
    WrongCardCount(usize),
    #[error("Split requires a pair of equal ranks ({0:?} and {1:?})")]
    RanksDiffer(Rank, Rank),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Number of rounds must be at least 1")]
    InvalidRounds,
    #[error("All {0} rounds of this session have been played")]
    SessionFinished(u32),
    #[error("The current round has not been settled yet")]
    RoundInProgress,
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("It's not participant {actual}'s turn (expected participant {expected})")]
    NotParticipantsTurn { expected: usize, actual: usize },
    #[error("Players are still taking their turns")]
    PlayerTurnsInProgress,
    #[error("The dealer has not finished playing")]
    DealerNotFinished,
    #[error("Double down is only allowed on your first two cards (hand holds {cards})")]
    CannotDouble { cards: usize },
    #[error("Double down is only allowed once per hand")]
    AlreadyDoubled,
    #[error("Cannot split: {0}")]
    CannotSplit(#[from] SplitError),
    #[error("Only one split per player per round")]
    SplitLimitReached,
    #[error("Dealer action out of sequence (dealer is {state:?})")]
    DealerOutOfSequence { state: DealerState },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
