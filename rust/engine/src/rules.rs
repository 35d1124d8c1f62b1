use crate::errors::{GameError, SplitError};
use crate::player::{Participant, PlayerAction as A};

/// The dealer stands on any total of at least this value, soft or hard.
pub const DEALER_STANDS_AT: u32 = 17;

/// A participant may split at most this many times per round.
pub const MAX_SPLITS_PER_PLAYER: usize = 1;

pub fn dealer_must_hit(value: u32) -> bool {
    value < DEALER_STANDS_AT
}

/// Validates a turn action against the participant's current hand.
///
/// Hit and stand are always legal while the turn is open. Doubling needs
/// exactly two cards and no earlier double on this hand. Splitting needs a
/// pair and is limited to one split per player per round: neither a split
/// hand nor an already split hand may split again.
///
/// # Errors
///
/// - [`GameError::CannotDouble`] - the hand does not hold exactly two cards
/// - [`GameError::AlreadyDoubled`] - the hand was doubled before
/// - [`GameError::SplitLimitReached`] - the split allowance is used up
/// - [`GameError::CannotSplit`] - the hand is not a two-card pair
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::Card;
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::hand::Hand;
/// use blackjack_engine::player::{Participant, PlayerAction};
/// use blackjack_engine::rules::validate_action;
///
/// let mut p = Participant::new(0, "Ann");
/// for label in ["8♠", "8♥"] {
///     p.hand_mut().push(label.parse::<Card>().unwrap());
/// }
/// assert_eq!(validate_action(&p, PlayerAction::Split), Ok(PlayerAction::Split));
///
/// p.hand_mut().push("2♦".parse::<Card>().unwrap());
/// assert_eq!(
///     validate_action(&p, PlayerAction::Double),
///     Err(GameError::CannotDouble { cards: 3 })
/// );
/// ```
pub fn validate_action(participant: &Participant, action: A) -> Result<A, GameError> {
    match action {
        A::Hit | A::Stand => Ok(action),
        A::Double => {
            if participant.doubled_down() {
                Err(GameError::AlreadyDoubled)
            } else if participant.hand().len() != 2 {
                Err(GameError::CannotDouble {
                    cards: participant.hand().len(),
                })
            } else {
                Ok(action)
            }
        }
        A::Split => {
            if participant.is_split_hand() || participant.has_split() {
                return Err(GameError::SplitLimitReached);
            }
            let cards = participant.hand().cards();
            match cards {
                [a, b] if a.rank == b.rank => Ok(action),
                [a, b] => Err(SplitError::RanksDiffer(a.rank, b.rank).into()),
                _ => Err(SplitError::WrongCardCount(cards.len()).into()),
            }
        }
    }
}

/// Actions currently legal for the participant, in prompt order.
pub fn legal_actions(participant: &Participant) -> Vec<A> {
    [A::Hit, A::Stand, A::Double, A::Split]
        .into_iter()
        .filter(|a| validate_action(participant, *a).is_ok())
        .collect()
}
