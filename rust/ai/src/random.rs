use std::sync::Mutex;

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::AutoPlayer;
use blackjack_engine::engine::TurnView;
use blackjack_engine::player::PlayerAction;

/// Picks uniformly among the legal actions with its own seeded RNG.
#[derive(Debug)]
pub struct RandomAI {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl AutoPlayer for RandomAI {
    fn decide(&self, view: &TurnView) -> PlayerAction {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        view.legal
            .choose(&mut *rng)
            .copied()
            .unwrap_or(PlayerAction::Stand)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::engine::Engine;

    #[test]
    fn always_legal_and_rounds_finish() {
        let ai = RandomAI::new(5);
        let mut engine = Engine::new(vec!["A".into(), "B".into()], Some(5)).unwrap();
        for _ in 0..20 {
            engine.start_round().unwrap();
            while let Some(view) = engine.turn_view() {
                let action = ai.decide(&view);
                assert!(view.can(action));
                engine.apply_action(view.participant, action).unwrap();
            }
            engine.play_dealer().unwrap();
            engine.settle().unwrap();
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let a = RandomAI::new(9);
        let b = RandomAI::new(9);
        let mut engine = Engine::new(vec!["A".into()], Some(1)).unwrap();
        engine.start_round().unwrap();
        if let Some(view) = engine.turn_view() {
            let xs: Vec<_> = (0..16).map(|_| a.decide(&view)).collect();
            let ys: Vec<_> = (0..16).map(|_| b.decide(&view)).collect();
            assert_eq!(xs, ys);
        }
    }
}
