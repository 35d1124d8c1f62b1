use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK};
use crate::rules::dealer_must_hit;

/// Represents a turn action chosen for the hand being played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one card
    Hit,
    /// Keep the current total and end the hand
    Stand,
    /// Take exactly one card with doubled stakes and end the hand
    Double,
    /// Divide a pair into two hands
    Split,
}

/// A seated player: a name and the points accumulated over the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    points: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn add_points(&mut self, delta: i32) {
        self.points += delta;
    }
}

/// One entry of a round's turn order.
///
/// Every player starts a round with one participant. Splitting appends a second
/// participant for the same owner right after the first; it only lives for the
/// current round and is scored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Index of the owning [`Player`]
    owner: usize,
    /// Display name (`"<player> (2)"` for a split hand)
    name: String,
    hand: Hand,
    turn_over: bool,
    doubled_down: bool,
    is_split_hand: bool,
    has_split: bool,
}

impl Participant {
    pub fn new(owner: usize, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
            hand: Hand::new(),
            turn_over: false,
            doubled_down: false,
            is_split_hand: false,
            has_split: false,
        }
    }

    /// Participant created from the hand moved out by a split.
    pub fn from_split(owner: usize, owner_name: &str, hand: Hand) -> Self {
        Self {
            owner,
            name: format!("{} (2)", owner_name),
            hand,
            turn_over: false,
            doubled_down: false,
            is_split_hand: true,
            has_split: false,
        }
    }

    pub fn owner(&self) -> usize {
        self.owner
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn turn_over(&self) -> bool {
        self.turn_over
    }
    pub fn doubled_down(&self) -> bool {
        self.doubled_down
    }
    pub fn is_split_hand(&self) -> bool {
        self.is_split_hand
    }
    pub fn has_split(&self) -> bool {
        self.has_split
    }

    pub fn end_turn(&mut self) {
        self.turn_over = true;
    }

    pub fn mark_doubled(&mut self) {
        self.doubled_down = true;
    }

    pub fn mark_split(&mut self) {
        self.has_split = true;
    }

    /// Clear the hand and every per-round flag. Idempotent.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.turn_over = false;
        self.doubled_down = false;
        self.has_split = false;
    }
}

/// Position of the dealer in its fixed play sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DealerState {
    /// Round not dealt yet
    AwaitingUpcard,
    /// Upcard showing, hole card not drawn
    AwaitingHoleCard,
    /// Drawing while below the stand threshold
    Hitting,
    /// Finished at 17..=21
    Standing,
    /// Finished above 21
    Bust,
}

/// The House: a hand played by the fixed stand-on-17 rule, plus house points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
    points: i32,
    state: DealerState,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            points: 0,
            state: DealerState::AwaitingUpcard,
        }
    }

    /// Dealer whose cards are already revealed, ready to play its strategy.
    pub fn with_hand(hand: Hand) -> Self {
        Self {
            hand,
            points: 0,
            state: DealerState::Hitting,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn points(&self) -> i32 {
        self.points
    }
    pub fn add_points(&mut self, delta: i32) {
        self.points += delta;
    }
    pub fn state(&self) -> DealerState {
        self.state
    }

    pub fn upcard(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, DealerState::Standing | DealerState::Bust)
    }

    pub fn deal_upcard(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        self.expect_state(DealerState::AwaitingUpcard)?;
        let c = self.hand.hit(deck);
        self.state = DealerState::AwaitingHoleCard;
        Ok(c)
    }

    pub fn reveal_hole(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        self.expect_state(DealerState::AwaitingHoleCard)?;
        let c = self.hand.hit(deck);
        self.state = DealerState::Hitting;
        Ok(c)
    }

    /// One transition of the hitting state: draw below 17, otherwise settle on
    /// standing or bust. Returns the drawn card, `None` once finished.
    pub fn step(&mut self, deck: &mut Deck) -> Option<Card> {
        if self.state != DealerState::Hitting {
            return None;
        }
        let value = self.hand.value();
        if dealer_must_hit(value) {
            let c = self.hand.hit(deck);
            if self.hand.value() > BLACKJACK {
                self.state = DealerState::Bust;
            }
            Some(c)
        } else {
            self.state = if value > BLACKJACK {
                DealerState::Bust
            } else {
                DealerState::Standing
            };
            None
        }
    }

    /// Run the strategy to completion and return every card drawn.
    pub fn play_out(&mut self, deck: &mut Deck) -> Vec<Card> {
        let mut drawn = Vec::new();
        while let Some(c) = self.step(deck) {
            drawn.push(c);
        }
        drawn
    }

    /// Clear the hand and return to the start of the sequence. Idempotent.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.state = DealerState::AwaitingUpcard;
    }

    fn expect_state(&self, expected: DealerState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::DealerOutOfSequence { state: self.state })
        }
    }
}
