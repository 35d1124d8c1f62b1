use serde::{Deserialize, Serialize};

use crate::engine::{Engine, RoundEvent, RoundSummary, TurnView};
use crate::errors::GameError;
use crate::player::PlayerAction;

/// Name the dealer is listed under in standings.
pub const HOUSE_NAME: &str = "House";

/// A fixed number of rounds played by the same table.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    rounds: u32,
    completed: u32,
}

impl Session {
    pub fn new(names: Vec<String>, rounds: u32, seed: Option<u64>) -> Result<Self, GameError> {
        if rounds == 0 {
            return Err(GameError::InvalidRounds);
        }
        Ok(Self {
            engine: Engine::new(names, seed)?,
            rounds,
            completed: 0,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
    pub fn rounds_completed(&self) -> u32 {
        self.completed
    }
    pub fn seed(&self) -> u64 {
        self.engine.seed()
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.rounds
    }

    pub fn start_next_round(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if self.is_finished() {
            return Err(GameError::SessionFinished(self.rounds));
        }
        self.engine.start_round()
    }

    pub fn turn_view(&self) -> Option<TurnView> {
        self.engine.turn_view()
    }

    pub fn apply_action(
        &mut self,
        participant: usize,
        action: PlayerAction,
    ) -> Result<Vec<RoundEvent>, GameError> {
        self.engine.apply_action(participant, action)
    }

    /// Play the dealer's hand and settle the round.
    pub fn complete_round(&mut self) -> Result<(Vec<RoundEvent>, RoundSummary), GameError> {
        let events = self.engine.play_dealer()?;
        let summary = self.engine.settle()?;
        self.completed += 1;
        Ok((events, summary))
    }

    /// Every player and the house, highest points first.
    pub fn standings(&self) -> Standings {
        let mut entries: Vec<Standing> = self
            .engine
            .players()
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                points: p.points(),
                is_house: false,
            })
            .collect();
        entries.push(Standing {
            name: HOUSE_NAME.to_string(),
            points: self.engine.dealer().points(),
            is_house: true,
        });
        Standings::new(entries)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub points: i32,
    pub is_house: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    /// Sorts by points descending; ties keep their seating order.
    pub fn new(mut entries: Vec<Standing>) -> Self {
        entries.sort_by(|a, b| b.points.cmp(&a.points));
        Self { entries }
    }

    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    /// Names of everyone tied for the top score.
    pub fn leaders(&self) -> Vec<&str> {
        let Some(top) = self.entries.first().map(|s| s.points) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .take_while(|s| s.points == top)
            .map(|s| s.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(name: &str, points: i32) -> Standing {
        Standing {
            name: name.to_string(),
            points,
            is_house: name == HOUSE_NAME,
        }
    }

    #[test]
    fn zero_rounds_rejected() {
        let err = Session::new(vec!["A".into()], 0, Some(1)).unwrap_err();
        assert_eq!(err, GameError::InvalidRounds);
    }

    #[test]
    fn standings_sorted_with_ties_in_seat_order() {
        let s = Standings::new(vec![
            standing("A", 1),
            standing("B", 3),
            standing("C", 3),
            standing(HOUSE_NAME, -2),
        ]);
        let names: Vec<&str> = s.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A", HOUSE_NAME]);
        assert_eq!(s.leaders(), vec!["B", "C"]);
    }

    #[test]
    fn standings_include_house() {
        let session = Session::new(vec!["A".into(), "B".into()], 2, Some(3)).unwrap();
        let st = session.standings();
        assert_eq!(st.entries().len(), 3);
        assert!(st.entries().iter().any(|e| e.is_house));
        assert_eq!(st.leaders().len(), 3);
    }

    #[test]
    fn session_stops_after_last_round() {
        let mut session = Session::new(vec!["A".into()], 1, Some(8)).unwrap();
        session.start_next_round().unwrap();
        while let Some(v) = session.turn_view() {
            session.apply_action(v.participant, PlayerAction::Stand).unwrap();
        }
        session.complete_round().unwrap();
        assert!(session.is_finished());
        assert_eq!(
            session.start_next_round().unwrap_err(),
            GameError::SessionFinished(1)
        );
    }
}
