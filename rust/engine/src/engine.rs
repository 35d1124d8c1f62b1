use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK};
use crate::player::{Dealer, Participant, Player, PlayerAction};
use crate::rules::{legal_actions, validate_action};
use crate::scoring::{classify, house_delta, is_natural, score, Outcome};

/// Where the current round stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round dealt, or per-round state was just reset
    Waiting,
    /// Participants are taking their turns
    PlayerTurns,
    /// All turns are over; the dealer has yet to play
    DealerTurn,
    /// The dealer has finished; outcomes can be settled
    Showdown,
    /// Points for the round have been committed
    Complete,
}

/// Something that happened at the table, reported for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    DealerUpcard { card: Card },
    TurnStarted {
        participant: usize,
        name: String,
        cards: Vec<Card>,
        value: u32,
    },
    Natural { participant: usize, name: String },
    Drew {
        participant: usize,
        name: String,
        card: Card,
        value: u32,
    },
    Busted {
        participant: usize,
        name: String,
        value: u32,
    },
    Reached21 { participant: usize, name: String },
    Stood {
        participant: usize,
        name: String,
        value: u32,
    },
    Doubled {
        participant: usize,
        name: String,
        card: Card,
        value: u32,
    },
    SplitCreated {
        participant: usize,
        name: String,
        new_participant: usize,
        new_name: String,
    },
    DealerRevealed { hole: Card, value: u32 },
    DealerHit { card: Card, value: u32 },
    DealerStood { value: u32 },
    DealerBusted { value: u32 },
}

/// Everything a decision maker may look at when it is someone's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub participant: usize,
    pub name: String,
    pub hand: Hand,
    pub dealer_upcard: Option<Card>,
    pub doubled_down: bool,
    pub legal: Vec<PlayerAction>,
}

impl TurnView {
    pub fn can(&self, action: PlayerAction) -> bool {
        self.legal.contains(&action)
    }
}

/// Scored result of one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub owner: usize,
    pub name: String,
    pub cards: Vec<Card>,
    pub value: u32,
    pub natural: bool,
    pub doubled_down: bool,
    pub outcome: Outcome,
    pub delta: i32,
    /// Owner's cumulative points after this result was applied
    pub total: i32,
}

/// Settlement of a whole round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub dealer_cards: Vec<Card>,
    pub dealer_value: u32,
    pub dealer_natural: bool,
    pub results: Vec<ParticipantResult>,
    pub house_delta: i32,
    pub house_total: i32,
}

impl RoundSummary {
    pub fn dealer_busted(&self) -> bool {
        self.dealer_value > BLACKJACK
    }
}

/// Round controller for one dealer and any number of players sharing one deck.
///
/// The engine is driven step by step: [`Engine::start_round`], then
/// [`Engine::apply_action`] for whoever [`Engine::turn_view`] names, then
/// [`Engine::play_dealer`] and [`Engine::settle`]. It never reads input.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::{Engine, RoundPhase};
/// use blackjack_engine::player::PlayerAction;
///
/// let mut engine = Engine::new(vec!["Ann".to_string()], Some(7)).unwrap();
/// engine.start_round().unwrap();
/// while let Some(view) = engine.turn_view() {
///     engine.apply_action(view.participant, PlayerAction::Stand).unwrap();
/// }
/// engine.play_dealer().unwrap();
/// let summary = engine.settle().unwrap();
/// assert_eq!(summary.results.len(), 1);
/// assert_eq!(engine.phase(), RoundPhase::Complete);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    players: Vec<Player>,
    dealer: Dealer,
    participants: Vec<Participant>,
    current: usize,
    phase: RoundPhase,
    round: u32,
    seed: u64,
}

impl Engine {
    pub fn new(names: Vec<String>, seed: Option<u64>) -> Result<Self, GameError> {
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let seed = seed.unwrap_or_else(rand::random);
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        let mut engine = Self {
            deck: Deck::new_with_seed(seed),
            players,
            dealer: Dealer::new(),
            participants: Vec::new(),
            current: 0,
            phase: RoundPhase::Waiting,
            round: 0,
            seed,
        };
        engine.reset_round();
        Ok(engine)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Index of the participant whose turn it is.
    pub fn current_participant(&self) -> Option<usize> {
        (self.phase == RoundPhase::PlayerTurns).then_some(self.current)
    }

    /// Discard all per-round state, keeping cumulative points. Idempotent.
    pub fn reset_round(&mut self) {
        self.participants = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| Participant::new(i, p.name()))
            .collect();
        self.dealer.reset_for_round();
        self.current = 0;
        self.phase = RoundPhase::Waiting;
    }

    /// Shuffle a fresh deck, deal the dealer's upcard and open the first turn.
    pub fn start_round(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if matches!(
            self.phase,
            RoundPhase::PlayerTurns | RoundPhase::DealerTurn | RoundPhase::Showdown
        ) {
            return Err(GameError::RoundInProgress);
        }
        self.reset_round();
        self.deck.reset();
        self.round += 1;
        tracing::debug!(round = self.round, players = self.players.len(), "round started");

        let mut events = Vec::new();
        let card = self.dealer.deal_upcard(&mut self.deck)?;
        events.push(RoundEvent::DealerUpcard { card });
        self.phase = RoundPhase::PlayerTurns;
        self.open_turns(&mut events);
        Ok(events)
    }

    pub fn turn_view(&self) -> Option<TurnView> {
        let idx = self.current_participant()?;
        let p = self.participants.get(idx)?;
        Some(TurnView {
            participant: idx,
            name: p.name().to_string(),
            hand: p.hand().clone(),
            dealer_upcard: self.dealer.upcard(),
            doubled_down: p.doubled_down(),
            legal: legal_actions(p),
        })
    }

    /// Play `action` for `participant`. Rejected actions leave the round untouched.
    pub fn apply_action(
        &mut self,
        participant: usize,
        action: PlayerAction,
    ) -> Result<Vec<RoundEvent>, GameError> {
        if self.phase != RoundPhase::PlayerTurns {
            return Err(GameError::NoRoundInProgress);
        }
        if participant != self.current {
            return Err(GameError::NotParticipantsTurn {
                expected: self.current,
                actual: participant,
            });
        }
        let idx = self.current;
        let action = validate_action(&self.participants[idx], action)?;

        let mut events = Vec::new();
        let p = &mut self.participants[idx];
        let name = p.name().to_string();
        let terminal = match action {
            PlayerAction::Hit => {
                let card = p.hand_mut().hit(&mut self.deck);
                let value = p.hand().value();
                events.push(RoundEvent::Drew {
                    participant: idx,
                    name: name.clone(),
                    card,
                    value,
                });
                if value > BLACKJACK {
                    events.push(RoundEvent::Busted {
                        participant: idx,
                        name,
                        value,
                    });
                    true
                } else if value == BLACKJACK {
                    events.push(RoundEvent::Reached21 {
                        participant: idx,
                        name,
                    });
                    true
                } else {
                    false
                }
            }
            PlayerAction::Stand => {
                let value = p.hand().stand();
                events.push(RoundEvent::Stood {
                    participant: idx,
                    name,
                    value,
                });
                true
            }
            PlayerAction::Double => {
                let card = p.hand_mut().double(&mut self.deck);
                p.mark_doubled();
                let value = p.hand().value();
                events.push(RoundEvent::Doubled {
                    participant: idx,
                    name: name.clone(),
                    card,
                    value,
                });
                if value > BLACKJACK {
                    events.push(RoundEvent::Busted {
                        participant: idx,
                        name,
                        value,
                    });
                }
                true
            }
            PlayerAction::Split => {
                let moved = p.hand_mut().split()?;
                p.mark_split();
                let owner = p.owner();
                let owner_name = self.players[owner].name().to_string();
                let split = Participant::from_split(owner, &owner_name, moved);
                let new_name = split.name().to_string();
                self.participants.insert(idx + 1, split);
                events.push(RoundEvent::SplitCreated {
                    participant: idx,
                    name,
                    new_participant: idx + 1,
                    new_name,
                });
                false
            }
        };
        tracing::debug!(participant = idx, ?action, terminal, "action applied");

        if terminal {
            self.participants[idx].end_turn();
            self.current += 1;
            self.open_turns(&mut events);
        }
        Ok(events)
    }

    /// Begin turns from `self.current` on, skipping hands that end on a natural.
    /// Fresh hands draw two cards; a split hand already holds one and draws one.
    fn open_turns(&mut self, events: &mut Vec<RoundEvent>) {
        while let Some(p) = self.participants.get_mut(self.current) {
            let missing = 2usize.saturating_sub(p.hand().len());
            p.hand_mut().draw(&mut self.deck, missing);
            events.push(RoundEvent::TurnStarted {
                participant: self.current,
                name: p.name().to_string(),
                cards: p.hand().cards().to_vec(),
                value: p.hand().value(),
            });
            if !p.hand().is_natural() {
                return;
            }
            events.push(RoundEvent::Natural {
                participant: self.current,
                name: p.name().to_string(),
            });
            p.end_turn();
            self.current += 1;
        }
        self.phase = RoundPhase::DealerTurn;
    }

    /// Reveal the hole card and draw to 17 or more.
    pub fn play_dealer(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        match self.phase {
            RoundPhase::DealerTurn => {}
            RoundPhase::PlayerTurns => return Err(GameError::PlayerTurnsInProgress),
            _ => return Err(GameError::NoRoundInProgress),
        }
        let mut events = Vec::new();
        let hole = self.dealer.reveal_hole(&mut self.deck)?;
        events.push(RoundEvent::DealerRevealed {
            hole,
            value: self.dealer.hand().value(),
        });
        while let Some(card) = self.dealer.step(&mut self.deck) {
            events.push(RoundEvent::DealerHit {
                card,
                value: self.dealer.hand().value(),
            });
        }
        let value = self.dealer.hand().value();
        events.push(if value > BLACKJACK {
            RoundEvent::DealerBusted { value }
        } else {
            RoundEvent::DealerStood { value }
        });
        self.phase = RoundPhase::Showdown;
        Ok(events)
    }

    /// Score every participant against the dealer and commit the points.
    pub fn settle(&mut self) -> Result<RoundSummary, GameError> {
        match self.phase {
            RoundPhase::Showdown => {}
            RoundPhase::PlayerTurns | RoundPhase::DealerTurn => {
                return Err(GameError::DealerNotFinished)
            }
            _ => return Err(GameError::NoRoundInProgress),
        }
        let dealer_value = self.dealer.hand().value();
        let mut results = Vec::with_capacity(self.participants.len());
        let mut house = 0;
        for p in &self.participants {
            let value = p.hand().value();
            let cards = p.hand().len();
            let delta = score(value, cards, dealer_value, p.doubled_down());
            house += house_delta(value, dealer_value, p.doubled_down());
            let owner = &mut self.players[p.owner()];
            owner.add_points(delta);
            results.push(ParticipantResult {
                owner: p.owner(),
                name: p.name().to_string(),
                cards: p.hand().cards().to_vec(),
                value,
                natural: is_natural(value, cards),
                doubled_down: p.doubled_down(),
                outcome: classify(value, dealer_value),
                delta,
                total: owner.points(),
            });
        }
        self.dealer.add_points(house);
        self.phase = RoundPhase::Complete;

        tracing::info!(
            round = self.round,
            dealer_value,
            house_delta = house,
            "round settled"
        );
        Ok(RoundSummary {
            round: self.round,
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_value,
            dealer_natural: self.dealer.hand().is_natural(),
            results,
            house_delta: house,
            house_total: self.dealer.points(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{}", i)).collect()
    }

    #[test]
    fn new_requires_players() {
        assert_eq!(Engine::new(vec![], Some(1)).unwrap_err(), GameError::NoPlayers);
    }

    #[test]
    fn start_round_deals_upcard_and_first_hand() {
        let mut eng = Engine::new(names(2), Some(11)).unwrap();
        let events = eng.start_round().unwrap();
        assert!(matches!(events[0], RoundEvent::DealerUpcard { .. }));
        assert_eq!(eng.dealer().hand().len(), 1);
        assert!(matches!(events[1], RoundEvent::TurnStarted { participant: 0, .. }));
        assert_eq!(eng.participants()[0].hand().len(), 2);
    }

    #[test]
    fn cannot_start_twice_without_settling() {
        let mut eng = Engine::new(names(1), Some(2)).unwrap();
        eng.start_round().unwrap();
        assert_eq!(eng.start_round().unwrap_err(), GameError::RoundInProgress);
    }

    #[test]
    fn dealer_waits_for_players() {
        let mut eng = Engine::new(names(1), Some(4)).unwrap();
        eng.start_round().unwrap();
        if eng.turn_view().is_some() {
            assert_eq!(
                eng.play_dealer().unwrap_err(),
                GameError::PlayerTurnsInProgress
            );
            assert_eq!(eng.settle().unwrap_err(), GameError::DealerNotFinished);
        }
    }

    #[test]
    fn settle_only_once() {
        let mut eng = Engine::new(names(1), Some(5)).unwrap();
        eng.start_round().unwrap();
        while let Some(v) = eng.turn_view() {
            eng.apply_action(v.participant, PlayerAction::Stand).unwrap();
        }
        eng.play_dealer().unwrap();
        eng.settle().unwrap();
        assert_eq!(eng.settle().unwrap_err(), GameError::NoRoundInProgress);
        assert!(eng.start_round().is_ok());
    }

    #[test]
    fn wrong_participant_is_rejected() {
        let mut eng = Engine::new(names(2), Some(6)).unwrap();
        eng.start_round().unwrap();
        if let Some(v) = eng.turn_view() {
            let other = v.participant + 1;
            assert_eq!(
                eng.apply_action(other, PlayerAction::Hit).unwrap_err(),
                GameError::NotParticipantsTurn {
                    expected: v.participant,
                    actual: other
                }
            );
        }
    }
}
