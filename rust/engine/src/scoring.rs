//! Points ledger rules.
//!
//! There is no wagering. A round moves points:
//!
//! | player result            | player | house |
//! |--------------------------|--------|-------|
//! | win                      | +1     | -1    |
//! | win, natural             | +2     | -1    |
//! | win, doubled down        | +2     | -2    |
//! | push                     | 0      | 0     |
//! | loss or bust             | 0      | +1    |
//! | loss or bust, doubled    | -1     | +1    |

use serde::{Deserialize, Serialize};

use crate::hand::BLACKJACK;

/// Result of one hand against the dealer's final total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Hand went over 21; loses regardless of the dealer
    Bust,
    /// Beat the dealer, or the dealer busted
    Win,
    /// Same total as the dealer
    Push,
    /// Lower total than the dealer
    Loss,
}

pub fn is_natural(value: u32, cards: usize) -> bool {
    cards == 2 && value == BLACKJACK
}

pub fn classify(player_value: u32, dealer_value: u32) -> Outcome {
    if player_value > BLACKJACK {
        Outcome::Bust
    } else if dealer_value > BLACKJACK || player_value > dealer_value {
        Outcome::Win
    } else if player_value == dealer_value {
        Outcome::Push
    } else {
        Outcome::Loss
    }
}

/// Points earned by the player for one hand.
///
/// # Examples
///
/// ```
/// use blackjack_engine::scoring::score;
///
/// assert_eq!(score(19, 2, 23, false), 1); // dealer busts
/// assert_eq!(score(21, 2, 20, false), 2); // natural
/// assert_eq!(score(23, 3, 18, true), -1); // doubled bust
/// assert_eq!(score(19, 2, 19, false), 0); // push
/// ```
pub fn score(
    player_value: u32,
    player_cards: usize,
    dealer_value: u32,
    doubled_down: bool,
) -> i32 {
    let natural = is_natural(player_value, player_cards);
    match classify(player_value, dealer_value) {
        Outcome::Win if doubled_down || natural => 2,
        Outcome::Win => 1,
        Outcome::Push => 0,
        Outcome::Bust | Outcome::Loss if doubled_down => -1,
        Outcome::Bust | Outcome::Loss => 0,
    }
}

/// Points the house gains (positive) or loses (negative) against one hand.
///
/// Mirrors the player's outcome without mirroring its magnitude: a natural
/// costs the house 1 while paying the player 2, and a doubled loss gains the
/// house 1 while costing the player 1.
pub fn house_delta(player_value: u32, dealer_value: u32, doubled_down: bool) -> i32 {
    match classify(player_value, dealer_value) {
        Outcome::Win if doubled_down => -2,
        Outcome::Win => -1,
        Outcome::Push => 0,
        Outcome::Bust | Outcome::Loss => 1,
    }
}
