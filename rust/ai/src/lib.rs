//! # blackjack-ai: Automated Players
//!
//! Decision policies that play a participant's turn without human input. The
//! CLI uses them for bot seats and for simulations.
//!
//! ## Core Components
//!
//! - [`AutoPlayer`] - Trait defining the interface for automated decisions
//! - [`baseline`] - Fixed rule policy modelled on basic strategy
//! - [`random`] - Seeded policy that picks any legal action
//! - [`create_ai`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::{create_ai, AutoPlayer};
//! use blackjack_engine::engine::Engine;
//!
//! let ai = create_ai("baseline", 0).expect("known policy");
//! let mut engine = Engine::new(vec!["Bot".to_string()], Some(42)).unwrap();
//! engine.start_round().unwrap();
//! while let Some(view) = engine.turn_view() {
//!     let action = ai.decide(&view);
//!     engine.apply_action(view.participant, action).unwrap();
//! }
//! ```

use blackjack_engine::engine::TurnView;
use blackjack_engine::player::PlayerAction;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["baseline", "random"];

/// Interface for automated turn decisions.
///
/// Implementors only see the [`TurnView`] of the participant to act, and must
/// return one of the actions listed in `view.legal`.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_ai::AutoPlayer;
/// use blackjack_engine::engine::TurnView;
/// use blackjack_engine::player::PlayerAction;
///
/// struct AlwaysStand;
///
/// impl AutoPlayer for AlwaysStand {
///     fn decide(&self, _view: &TurnView) -> PlayerAction {
///         PlayerAction::Stand
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStand"
///     }
/// }
/// ```
pub trait AutoPlayer: Send + Sync {
    /// Choose the next action for the participant described by `view`.
    fn decide(&self, view: &TurnView) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Create a policy by type string. `seed` is used by randomized policies.
///
/// Returns `None` for an unknown type.
///
/// # Example
///
/// ```rust
/// use blackjack_ai::create_ai;
///
/// let ai = create_ai("baseline", 7).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle", 7).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn AutoPlayer>> {
    match ai_type.to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_type() {
        for t in AI_TYPES {
            assert!(create_ai(t, 1).is_some(), "{}", t);
        }
        assert!(create_ai("BASELINE", 1).is_some());
        assert!(create_ai("", 1).is_none());
    }
}
