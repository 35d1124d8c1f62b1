//! # Play Command
//!
//! Interactive Blackjack at the terminal. Setup values missing from the
//! command line are prompted for, then every participant's turn is read from
//! the input stream until the session ends.
//!
//! - `q`/`quit` or a closed input during a turn ends the session early; the
//!   unfinished round is not scored and the standings so far are printed.
//! - A closed input during setup is an interruption (exit code 130).

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_event, format_standings, format_summary, supports_unicode};
use crate::io_utils::prompt_line;
use crate::ui;
use crate::validation::{
    ParseResult, parse_positive_count, parse_turn_action, player_name_or_default,
};
use blackjack_engine::engine::RoundEvent;
use blackjack_engine::game::Session;
use std::io::{BufRead, Write};

const TURN_PROMPT: &str = "(H)it, (S)tand, (D)ouble, or (Sp)lit? ";

/// Handle the play command.
///
/// # Arguments
///
/// * `players` - Number of seats (prompted when `None`; defaults to the
///   number of `names` when those are given)
/// * `names` - Names for the first seats; remaining seats are prompted
/// * `rounds` - Rounds to play (prompted when `None`)
/// * `seed` - Deck seed (falls back to the configured seed, then random)
/// * `out` - Output stream for the table
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for answers and turn actions
///
/// # Examples
///
/// ```rust
/// use blackjack_cli::commands::handle_play_command;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("q\n");
/// let names = vec!["Ann".into()];
/// handle_play_command(Some(1), names, Some(1), Some(3), &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Final standings:"));
/// ```
pub fn handle_play_command(
    players: Option<u32>,
    names: Vec<String>,
    rounds: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let unicode = cfg.unicode && supports_unicode();

    if players == Some(0) {
        return Err(CliError::InvalidInput("players must be >= 1".to_string()));
    }
    if rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let players = match players {
        Some(n) => n as usize,
        None if !names.is_empty() => names.len(),
        None => prompt_count(out, err, stdin, "How many players: ")? as usize,
    };
    if names.len() > players {
        return Err(CliError::InvalidInput(format!(
            "{} names given for {} players",
            names.len(),
            players
        )));
    }

    let mut seated = Vec::with_capacity(players);
    for i in 1..=players {
        let name = match names.get(i - 1) {
            Some(given) => player_name_or_default(given, i),
            None => {
                let answer = prompt_line(out, stdin, &format!("- Name of player {}? ", i))?
                    .ok_or_else(setup_interrupted)?;
                player_name_or_default(&answer, i)
            }
        };
        seated.push(name);
    }

    let rounds = match rounds {
        Some(n) => n,
        None => prompt_count(out, err, stdin, "How many rounds? ")?,
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "Blackjack: players={} rounds={} seed={}",
        seated.len(),
        rounds,
        seed
    )?;
    let mut session = Session::new(seated, rounds, Some(seed))?;

    let mut quit_requested = false;
    while !session.is_finished() {
        writeln!(
            out,
            "{}",
            ui::round_banner(session.rounds_completed() + 1, rounds)
        )?;
        let events = session.start_next_round()?;
        write_events(out, &events, unicode)?;

        if play_turns(&mut session, out, err, stdin, unicode)? {
            quit_requested = true;
            break;
        }

        let (events, summary) = session.complete_round()?;
        write_events(out, &events, unicode)?;
        for line in format_summary(&summary, unicode) {
            writeln!(out, "{}", line)?;
        }
    }

    if quit_requested {
        tracing::info!(completed = session.rounds_completed(), "session ended early");
        writeln!(
            out,
            "Session ended after {} of {} rounds.",
            session.rounds_completed(),
            rounds
        )?;
    }
    writeln!(out, "Final standings:")?;
    for line in format_standings(&session.standings()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Read turn actions until every participant is done. Returns `true` when the
/// user quit or the input closed.
fn play_turns(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    unicode: bool,
) -> Result<bool, CliError> {
    while let Some(view) = session.turn_view() {
        let prompt = format!("{} - {}", view.name, TURN_PROMPT);
        let Some(input) = prompt_line(out, stdin, &prompt)? else {
            return Ok(true);
        };
        match parse_turn_action(&input) {
            ParseResult::Action(action) => match session.apply_action(view.participant, action) {
                Ok(events) => write_events(out, &events, unicode)?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Quit => return Ok(true),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(false)
}

fn prompt_count(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> Result<u32, CliError> {
    loop {
        let answer = prompt_line(out, stdin, prompt)?.ok_or_else(setup_interrupted)?;
        match parse_positive_count(&answer) {
            Ok(n) => return Ok(n),
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn setup_interrupted() -> CliError {
    CliError::Interrupted("input closed during setup".to_string())
}

fn write_events(out: &mut dyn Write, events: &[RoundEvent], unicode: bool) -> std::io::Result<()> {
    for e in events {
        writeln!(out, "{}", format_event(e, unicode))?;
    }
    Ok(())
}
