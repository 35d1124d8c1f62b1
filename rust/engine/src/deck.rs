use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The single shared 52-card supply of a table.
///
/// Drawing from an exhausted deck reshuffles a fresh 52-card cycle first, so a
/// draw never fails. Cards already held by hands are not taken back on such a
/// reshuffle; only between reshuffles do deck and hands partition the 52 cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    reshuffles: u32,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            reshuffles: 0,
        };
        deck.reset();
        deck
    }

    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Refill with all 52 cards and shuffle them.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Take the next card, reshuffling first when the deck is empty.
    pub fn draw(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.reshuffles += 1;
            tracing::debug!(reshuffles = self.reshuffles, "deck exhausted, reshuffling");
            self.reset();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet dealt, in draw order.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Number of reshuffles caused by exhaustion (explicit resets are not counted).
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down() {
        let mut deck = Deck::new_with_seed(3);
        assert_eq!(deck.remaining(), 52);
        deck.draw();
        deck.draw();
        assert_eq!(deck.remaining(), 50);
        assert_eq!(deck.undealt().len(), 50);
    }

    #[test]
    fn draw_on_empty_deck_reshuffles() {
        let mut deck = Deck::new_with_seed(9);
        for _ in 0..52 {
            deck.draw();
        }
        assert_eq!(deck.remaining(), 0);
        let _ = deck.draw();
        assert_eq!(deck.remaining(), 51);
        assert_eq!(deck.reshuffles(), 1);
    }

    #[test]
    fn reset_restores_full_deck() {
        let mut deck = Deck::new_with_seed(1);
        for _ in 0..10 {
            deck.draw();
        }
        deck.reset();
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.reshuffles(), 0);
    }
}
