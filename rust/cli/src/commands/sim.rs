//! Simulation command handler.
//!
//! Seats the requested number of bots, lets one decision policy play every
//! turn, and reports each round and the final standings. With `--output`
//! every finished round is appended to a JSONL file as a
//! [`RoundRecord`](blackjack_engine::logger::RoundRecord).
//!
//! # Examples
//!
//! ```no_run
//! use blackjack_cli::cli::AiKind;
//! use blackjack_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! let output = Some("data/rounds.jsonl".into());
//! handle_sim_command(3, Some(100), Some(42), Some(AiKind::Baseline), output, &mut out, &mut err)
//!     .unwrap();
//! ```

use crate::cli::AiKind;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_cards, format_standings, supports_unicode};
use crate::ui;
use blackjack_ai::create_ai;
use blackjack_engine::game::Session;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;
use std::path::PathBuf;

/// Handle the sim command.
///
/// # Arguments
///
/// * `players` - Number of bot seats (must be >= 1)
/// * `rounds` - Rounds to play (falls back to the configured value)
/// * `seed` - Deck seed (falls back to the configured seed, then random)
/// * `ai` - Decision policy (falls back to the configured value)
/// * `output` - JSONL file receiving one record per round
/// * `out` - Output stream for round lines and standings
/// * `err` - Error stream for warnings
pub fn handle_sim_command(
    players: u32,
    rounds: Option<u32>,
    seed: Option<u64>,
    ai: Option<AiKind>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if players == 0 {
        return Err(CliError::InvalidInput("players must be >= 1".to_string()));
    }
    let cfg = config::load_with_sources()?.config;
    let unicode = cfg.unicode && supports_unicode();
    let rounds = rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let ai_name = ai.map(|a| a.as_str().to_string()).unwrap_or(cfg.ai);
    let policy = create_ai(&ai_name, seed)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", ai_name)))?;

    let mut logger = match output {
        Some(path) => Some(RoundLogger::create(PathBuf::from(path))?),
        None => None,
    };

    let names = (1..=players).map(|i| format!("Bot {}", i)).collect();
    let mut session = Session::new(names, rounds, Some(seed))?;
    writeln!(
        out,
        "sim: players={} rounds={} seed={} ai={}",
        players,
        rounds,
        seed,
        policy.name()
    )?;

    while !session.is_finished() {
        session.start_next_round()?;
        while let Some(view) = session.turn_view() {
            let action = policy.decide(&view);
            if let Err(e) = session.apply_action(view.participant, action) {
                // Policies must only choose legal actions.
                let msg = format!("{} chose {}: {}", policy.name(), format_action(action), e);
                ui::display_warning(err, &msg)?;
                return Err(e.into());
            }
        }
        let (_, summary) = session.complete_round()?;
        writeln!(
            out,
            "Round {}: dealer {} ({}{}), house {:+}",
            summary.round,
            format_cards(&summary.dealer_cards, unicode),
            summary.dealer_value,
            if summary.dealer_busted() { ", bust" } else { "" },
            summary.house_delta
        )?;
        if let Some(log) = logger.as_mut() {
            let record = RoundRecord::from_summary(log.next_id(), Some(seed), &summary);
            log.write(&record)?;
        }
    }

    writeln!(out, "Final standings:")?;
    for line in format_standings(&session.standings()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
