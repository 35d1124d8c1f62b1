//! Baseline policy for automated players.
//!
//! A fixed rule table in the spirit of basic strategy, reduced to the totals
//! a points game cares about. It is deterministic, so simulations with a
//! seeded deck are reproducible.

use crate::AutoPlayer;
use blackjack_engine::cards::Rank;
use blackjack_engine::engine::TurnView;
use blackjack_engine::player::PlayerAction;

/// Rule-based policy.
///
/// # Strategy
///
/// - Split aces and eights.
/// - Double a hard 10 or 11 against a dealer upcard below 10.
/// - Soft totals: hit through soft 17, stand from soft 18.
/// - Hard totals: stand on 17+, stand on 13-16 against a dealer 2-6,
///   stand on 12 against a dealer 4-6, otherwise hit.
///
/// # Example
///
/// ```rust
/// use blackjack_ai::baseline::BaselineAI;
/// use blackjack_ai::AutoPlayer;
/// use blackjack_engine::engine::Engine;
///
/// let ai = BaselineAI::new();
/// let mut engine = Engine::new(vec!["Bot".to_string()], Some(3)).unwrap();
/// engine.start_round().unwrap();
/// if let Some(view) = engine.turn_view() {
///     assert!(view.can(ai.decide(&view)));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    fn wants_split(view: &TurnView) -> bool {
        match view.hand.cards() {
            [a, b] if a.rank == b.rank => matches!(a.rank, Rank::Ace | Rank::Eight),
            _ => false,
        }
    }

    fn wants_double(view: &TurnView, upcard: u32) -> bool {
        let value = view.hand.value();
        !view.hand.is_soft() && (value == 10 || value == 11) && upcard < 10
    }

    fn wants_hit(view: &TurnView, upcard: u32) -> bool {
        let value = view.hand.value();
        if view.hand.is_soft() {
            return value <= 17;
        }
        match value {
            0..=11 => true,
            12 => !(4..=6).contains(&upcard),
            13..=16 => upcard >= 7,
            _ => false,
        }
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlayer for BaselineAI {
    fn decide(&self, view: &TurnView) -> PlayerAction {
        // Unknown upcard is treated as a ten.
        let upcard = view.dealer_upcard.map(|c| c.rank.value()).unwrap_or(10);
        if view.can(PlayerAction::Split) && Self::wants_split(view) {
            PlayerAction::Split
        } else if view.can(PlayerAction::Double) && Self::wants_double(view, upcard) {
            PlayerAction::Double
        } else if Self::wants_hit(view, upcard) {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
