use std::fs;
use std::io::Cursor;

use blackjack_engine::logger::RoundRecord;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = blackjack_cli::run_with_input(args, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn sim_writes_one_record_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("rounds.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let (code, out, err) = run_cli(&[
        "blackjack", "sim", "--players", "3", "--rounds", "5", "--seed", "7", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Final standings:"));

    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.round, i as u32 + 1);
        assert_eq!(r.seed, Some(7));
        assert!(r.results.len() >= 3);
        assert!(r.dealer_value >= 17);
        assert!(r.ts.is_some());
    }
    let ids: std::collections::HashSet<_> = records.iter().map(|r| r.round_id.clone()).collect();
    assert_eq!(ids.len(), 5);
}

#[test]
fn sim_is_reproducible_for_a_seed() {
    let args = ["blackjack", "sim", "--players", "2", "--rounds", "6", "--seed", "99"];
    let (_, a, _) = run_cli(&args);
    let (_, b, _) = run_cli(&args);
    assert_eq!(a, b);
}

#[test]
fn sim_house_total_matches_round_deltas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_string_lossy().to_string();
    let (code, out, _) = run_cli(&[
        "blackjack", "sim", "--players", "2", "--rounds", "8", "--seed", "3", "--ai", "random",
        "--output", &path_str,
    ]);
    assert_eq!(code, 0);
    let house: i32 = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str::<RoundRecord>(l).unwrap().house_delta)
        .sum();
    let house_line = out
        .lines()
        .find(|l| l.contains(". House: "))
        .expect("house in standings");
    assert!(house_line.ends_with(&format!("House: {}", house)), "{}", house_line);
}

#[test]
fn sim_rejects_bad_arguments() {
    assert_eq!(run_cli(&["blackjack", "sim", "--players", "0"]).0, 2);
    assert_eq!(run_cli(&["blackjack", "sim"]).0, 2);
    assert_eq!(run_cli(&["blackjack", "sim", "--players", "1", "--ai", "oracle"]).0, 2);
    assert_eq!(run_cli(&["blackjack", "sim", "--players", "1", "--rounds", "0"]).0, 2);
}
