use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::SplitError;

/// Best total a hand can reach without busting.
pub const BLACKJACK: u32 = 21;

/// Cards held by one participant, in the order they were received.
///
/// The hand never owns the deck: every drawing operation borrows the table's
/// [`Deck`] for the duration of the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Draw `n` cards from `deck` into the hand.
    pub fn draw(&mut self, deck: &mut Deck, n: usize) {
        for _ in 0..n {
            self.cards.push(deck.draw());
        }
    }

    /// Hand total with aces counted as 11, downgraded to 1 one at a time
    /// while the total exceeds 21. A busted total is returned as is.
    pub fn value(&self) -> u32 {
        let (total, _) = self.total_and_soft_aces();
        total
    }

    /// True while at least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        let (_, soft_aces) = self.total_and_soft_aces();
        soft_aces > 0
    }

    fn total_and_soft_aces(&self) -> (u32, usize) {
        let mut total: u32 = self.cards.iter().map(|c| c.rank.value()).sum();
        let mut aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();
        while total > BLACKJACK && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        (total, aces)
    }

    /// Two cards totalling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn can_split(&self) -> bool {
        self.split_check().is_ok()
    }

    fn split_check(&self) -> Result<(), SplitError> {
        match self.cards.as_slice() {
            [a, b] if a.rank == b.rank => Ok(()),
            [a, b] => Err(SplitError::RanksDiffer(a.rank, b.rank)),
            other => Err(SplitError::WrongCardCount(other.len())),
        }
    }

    /// Move the first card of a pair into a new hand.
    ///
    /// The hand is left untouched when it is not exactly two cards of equal rank.
    pub fn split(&mut self) -> Result<Hand, SplitError> {
        self.split_check()?;
        let moved = self.cards.remove(0);
        Ok(Hand { cards: vec![moved] })
    }

    pub fn hit(&mut self, deck: &mut Deck) -> Card {
        let c = deck.draw();
        self.cards.push(c);
        c
    }

    /// Standing draws nothing; returns the final value.
    pub fn stand(&self) -> u32 {
        self.value()
    }

    /// Doubling takes exactly one more card.
    pub fn double(&mut self, deck: &mut Deck) -> Card {
        self.hit(deck)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}
