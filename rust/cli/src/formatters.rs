//! Card, event and result formatters for terminal display.
//!
//! Pure functions turning engine values into lines of text. Suits are drawn as
//! Unicode symbols, or as the letters `s h d c` when symbols are turned off in
//! the configuration or the terminal is unlikely to render them.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_card(&ace_spades, false), "As");
//! ```

use blackjack_engine::cards::Card;
use blackjack_engine::engine::{ParticipantResult, RoundEvent, RoundSummary};
use blackjack_engine::game::Standings;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::scoring::Outcome;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card, unicode: bool) -> String {
    let suit = if unicode {
        card.suit.symbol()
    } else {
        card.suit.letter()
    };
    format!("{}{}", card.rank.label(), suit)
}

pub fn format_cards(cards: &[Card], unicode: bool) -> String {
    cards
        .iter()
        .map(|c| format_card(c, unicode))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_action(action: PlayerAction) -> &'static str {
    match action {
        PlayerAction::Hit => "hit",
        PlayerAction::Stand => "stand",
        PlayerAction::Double => "double",
        PlayerAction::Split => "split",
    }
}

/// One line describing something that happened at the table.
pub fn format_event(event: &RoundEvent, unicode: bool) -> String {
    let card = |c: &Card| format_card(c, unicode);
    match event {
        RoundEvent::DealerUpcard { card: c } => format!("Dealer shows {}", card(c)),
        RoundEvent::TurnStarted {
            name, cards, value, ..
        } => format!("{}: {} ({})", name, format_cards(cards, unicode), value),
        RoundEvent::Natural { name, .. } => format!("{} has Blackjack!", name),
        RoundEvent::Drew {
            name,
            card: c,
            value,
            ..
        } => format!("{} draws {} ({})", name, card(c), value),
        RoundEvent::Busted { name, value, .. } => format!("{} busts with {}", name, value),
        RoundEvent::Reached21 { name, .. } => format!("{} has 21", name),
        RoundEvent::Stood { name, value, .. } => format!("{} stands on {}", name, value),
        RoundEvent::Doubled {
            name,
            card: c,
            value,
            ..
        } => format!("{} doubles down and draws {} ({})", name, card(c), value),
        RoundEvent::SplitCreated { name, new_name, .. } => {
            format!("{} splits; {} plays next", name, new_name)
        }
        RoundEvent::DealerRevealed { hole, value } => {
            format!("Dealer reveals {} ({})", card(hole), value)
        }
        RoundEvent::DealerHit { card: c, value } => {
            format!("Dealer draws {} ({})", card(c), value)
        }
        RoundEvent::DealerStood { value } => format!("Dealer stands on {}", value),
        RoundEvent::DealerBusted { value } => format!("Dealer busts with {}", value),
    }
}

pub fn format_result(result: &ParticipantResult) -> String {
    let outcome = match result.outcome {
        Outcome::Win if result.natural => "wins with Blackjack",
        Outcome::Win => "wins",
        Outcome::Push => "pushes",
        Outcome::Loss => "loses",
        Outcome::Bust => "busts",
    };
    let doubled = if result.doubled_down { " (doubled)" } else { "" };
    format!(
        "{} {} with {}{}: {:+} points (total {})",
        result.name, outcome, result.value, doubled, result.delta, result.total
    )
}

/// Closing lines of a round: the dealer's hand, each result and the house.
pub fn format_summary(summary: &RoundSummary, unicode: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Dealer: {} ({}{})",
        format_cards(&summary.dealer_cards, unicode),
        summary.dealer_value,
        if summary.dealer_busted() { ", bust" } else { "" }
    )];
    lines.extend(summary.results.iter().map(format_result));
    lines.push(format!(
        "House: {:+} points (total {})",
        summary.house_delta, summary.house_total
    ));
    lines
}

pub fn format_standings(standings: &Standings) -> Vec<String> {
    let mut lines: Vec<String> = standings
        .entries()
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}: {}", i + 1, s.name, s.points))
        .collect();
    match standings.leaders().as_slice() {
        [] => {}
        [one] => lines.push(format!("Winner: {}", one)),
        many => lines.push(format!("Tie between: {}", many.join(", "))),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::game::Standing;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn ascii_fallback_uses_letters() {
        let cards = [card("10♥"), card("K♣")];
        assert_eq!(format_cards(&cards, false), "10h Kc");
        assert_eq!(format_cards(&cards, true), "10♥ K♣");
    }

    #[test]
    fn events_render_names_and_values() {
        let e = RoundEvent::Drew {
            participant: 0,
            name: "Ann".into(),
            card: card("5♦"),
            value: 18,
        };
        assert_eq!(format_event(&e, true), "Ann draws 5♦ (18)");
        let e = RoundEvent::SplitCreated {
            participant: 0,
            name: "Ann".into(),
            new_participant: 1,
            new_name: "Ann (2)".into(),
        };
        assert_eq!(format_event(&e, true), "Ann splits; Ann (2) plays next");
        assert_eq!(
            format_event(&RoundEvent::DealerBusted { value: 24 }, false),
            "Dealer busts with 24"
        );
    }

    #[test]
    fn result_line_shows_sign_and_total() {
        let r = ParticipantResult {
            owner: 0,
            name: "Bo".into(),
            cards: vec![card("5♠"), card("6♥"), card("9♦")],
            value: 20,
            natural: false,
            doubled_down: true,
            outcome: Outcome::Win,
            delta: 2,
            total: 3,
        };
        assert_eq!(format_result(&r), "Bo wins with 20 (doubled): +2 points (total 3)");
    }

    #[test]
    fn actions_use_lowercase_words() {
        assert_eq!(format_action(PlayerAction::Hit), "hit");
        assert_eq!(format_action(PlayerAction::Double), "double");
        assert_eq!(format_action(PlayerAction::Split), "split");
    }

    #[test]
    fn standings_report_ties() {
        let st = Standings::new(vec![
            Standing {
                name: "Ann".into(),
                points: 2,
                is_house: false,
            },
            Standing {
                name: "House".into(),
                points: 2,
                is_house: true,
            },
            Standing {
                name: "Bo".into(),
                points: -1,
                is_house: false,
            },
        ]);
        let lines = format_standings(&st);
        assert_eq!(lines[0], "1. Ann: 2");
        assert_eq!(lines[2], "3. Bo: -1");
        assert_eq!(lines[3], "Tie between: Ann, House");
    }
}
