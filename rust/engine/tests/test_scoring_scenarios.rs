use blackjack_engine::cards::Card;
use blackjack_engine::hand::Hand;
use blackjack_engine::scoring::{classify, house_delta, score, Outcome};

fn hand(labels: &[&str]) -> Hand {
    Hand::from_cards(labels.iter().map(|l| l.parse::<Card>().unwrap()).collect())
}

fn delta(h: &Hand, dealer_value: u32, doubled: bool) -> i32 {
    score(h.value(), h.len(), dealer_value, doubled)
}

#[test]
fn nineteen_beats_busted_dealer() {
    let h = hand(&["10♠", "9♥"]);
    assert_eq!(delta(&h, 23, false), 1);
    assert_eq!(house_delta(h.value(), 23, false), -1);
}

#[test]
fn natural_beats_twenty() {
    let h = hand(&["A♠", "K♥"]);
    assert_eq!(delta(&h, 20, false), 2);
    assert_eq!(house_delta(h.value(), 20, false), -1);
}

#[test]
fn doubled_four_card_twenty_beats_eighteen() {
    let h = hand(&["5♠", "5♥", "5♦", "5♣"]);
    assert_eq!(h.value(), 20);
    assert!(!h.is_natural());
    assert_eq!(delta(&h, 18, true), 2);
    assert_eq!(house_delta(h.value(), 18, true), -2);
}

#[test]
fn doubled_bust_loses_one() {
    let h = hand(&["10♠", "3♥", "K♦"]);
    assert_eq!(h.value(), 23);
    assert_eq!(delta(&h, 19, true), -1);
    assert_eq!(house_delta(h.value(), 19, true), 1);
}

#[test]
fn equal_totals_push() {
    let h = hand(&["10♠", "9♥"]);
    assert_eq!(delta(&h, 19, false), 0);
    assert_eq!(classify(19, 19), Outcome::Push);
    assert_eq!(house_delta(19, 19, false), 0);
}

#[test]
fn plain_bust_scores_zero() {
    let h = hand(&["10♠", "2♥", "K♦"]);
    assert_eq!(h.value(), 22);
    assert_eq!(delta(&h, 17, false), 0);
    assert_eq!(house_delta(22, 17, false), 1);
}

#[test]
fn three_card_21_is_not_natural() {
    let h = hand(&["A♠", "5♥", "5♦"]);
    assert_eq!(h.value(), 21);
    assert!(!h.is_natural());
    assert_eq!(delta(&h, 20, false), 1);
}
