use std::io::Cursor;

use blackjack_engine::engine::Engine;
use blackjack_engine::player::PlayerAction;

fn run_play(args: &[&str], input: &str) -> (i32, String, String) {
    run_play_bytes(args, input.as_bytes())
}

fn run_play_bytes(args: &[&str], input: &[u8]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.to_vec());
    let mut argv = vec!["blackjack", "play"];
    argv.extend_from_slice(args);
    let code = blackjack_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Seed whose first round gives a single player an opening hand that
/// satisfies `pred`, found by replaying the same deal through the engine.
fn seed_where(pred: impl Fn(&blackjack_engine::engine::TurnView) -> bool) -> u64 {
    for seed in 0..5000u64 {
        let mut eng = Engine::new(vec!["Ann".to_string()], Some(seed)).unwrap();
        eng.start_round().unwrap();
        if let Some(view) = eng.turn_view()
            && pred(&view)
        {
            return seed;
        }
    }
    panic!("no matching seed");
}

#[test]
fn scripted_session_prints_standings() {
    let input = "s\n".repeat(20);
    let (code, out, err) = run_play(
        &["--name", "Ann", "--name", "Bo", "--rounds", "2", "--seed", "42"],
        &input,
    );
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Blackjack: players=2 rounds=2 seed=42"));
    assert!(out.contains("=== Round 1 of 2 ==="));
    assert!(out.contains("=== Round 2 of 2 ==="));
    assert!(out.contains("Dealer shows"));
    assert!(out.contains("Dealer reveals"));
    assert!(out.contains("Final standings:"));
    assert!(out.contains("House"));
    assert!(out.contains("Winner: ") || out.contains("Tie between: "));
}

#[test]
fn unknown_token_reprompts_without_consuming_turn() {
    let seed = seed_where(|v| !v.hand.is_natural());
    let seed_arg = seed.to_string();
    let (code, out, err) = run_play(
        &["--name", "Ann", "--rounds", "1", "--seed", &seed_arg],
        "x\ns\n",
    );
    assert_eq!(code, 0);
    assert!(err.contains("Unrecognized action 'x'"));
    assert_eq!(out.matches("Ann - (H)it, (S)tand, (D)ouble, or (Sp)lit? ").count(), 2);
    assert!(out.contains("Ann stands on"));
}

#[test]
fn undecodable_turn_input_reprompts() {
    let seed = seed_where(|v| !v.hand.is_natural());
    let seed_arg = seed.to_string();
    let (code, out, err) = run_play_bytes(
        &["--name", "Ann", "--rounds", "1", "--seed", &seed_arg],
        b"\xff\xfe\ns\n",
    );
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(err.contains("Unrecognized action"), "stderr: {}", err);
    assert_eq!(out.matches("Ann - (H)it, (S)tand, (D)ouble, or (Sp)lit? ").count(), 2);
    assert!(out.contains("Ann stands on"));
    assert!(!out.contains("Session ended after"));
}

#[test]
fn undecodable_setup_input_reprompts() {
    let mut input = b"\xff\n1\nAnn\n1\n".to_vec();
    input.extend_from_slice("s\n".repeat(5).as_bytes());
    let (code, out, err) = run_play_bytes(&["--seed", "3"], &input);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(err.contains("is not a whole number"), "stderr: {}", err);
    assert_eq!(out.matches("How many players: ").count(), 2);
    assert!(out.contains("Blackjack: players=1 rounds=1 seed=3"));
    assert!(out.contains("Final standings:"));
}

#[test]
fn illegal_split_is_reported_and_turn_continues() {
    let seed = seed_where(|v| !v.hand.is_natural() && !v.can(PlayerAction::Split));
    let seed_arg = seed.to_string();
    let (code, out, err) = run_play(
        &["--name", "Ann", "--rounds", "1", "--seed", &seed_arg],
        "sp\ns\n",
    );
    assert_eq!(code, 0);
    assert!(err.contains("Error: Cannot split"), "stderr: {}", err);
    assert!(out.contains("Ann stands on"));
}

#[test]
fn split_plays_second_hand_next() {
    let seed = seed_where(|v| v.can(PlayerAction::Split));
    let seed_arg = seed.to_string();
    let (code, out, _) = run_play(
        &["--name", "Ann", "--rounds", "1", "--seed", &seed_arg],
        "sp\ns\ns\ns\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Ann splits; Ann (2) plays next"));
    assert!(out.contains("Ann (2)"));
    // Both hands are settled and credited to the same player
    let results = out.lines().filter(|l| l.contains(" points (total ")).count();
    assert_eq!(results, 3, "two hands plus the house:\n{}", out);
}

#[test]
fn quit_ends_session_early() {
    let seed = seed_where(|v| !v.hand.is_natural());
    let seed_arg = seed.to_string();
    let (code, out, _) = run_play(
        &["--name", "Ann", "--rounds", "3", "--seed", &seed_arg],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Session ended after 0 of 3 rounds."));
    assert!(out.contains("Final standings:"));
}

#[test]
fn eof_mid_round_behaves_like_quit() {
    let seed = seed_where(|v| !v.hand.is_natural());
    let seed_arg = seed.to_string();
    let (code, out, _) = run_play(&["--name", "Ann", "--rounds", "2", "--seed", &seed_arg], "");
    assert_eq!(code, 0);
    assert!(out.contains("Session ended after 0 of 2 rounds."));
}

#[test]
fn eof_during_setup_exits_130() {
    let (code, out, _) = run_play(&["--rounds", "1"], "2\nAnn\n");
    assert_eq!(code, 130);
    assert!(out.contains("- Name of player 2? "));
}

#[test]
fn same_seed_same_table() {
    let input = "h\ns\n".repeat(10);
    let args = ["--name", "Ann", "--rounds", "2", "--seed", "777"];
    let (_, a, _) = run_play(&args, &input);
    let (_, b, _) = run_play(&args, &input);
    assert_eq!(a, b);
}
