//! Command-line definitions (clap derive).

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Blackjack for one dealer and any number of players, scored in points"
)]
pub struct BlackjackCli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session at the terminal
    Play {
        /// Number of players (prompted when omitted)
        #[arg(long)]
        players: Option<u32>,
        /// Player name, repeat once per seat; missing names are prompted
        #[arg(long = "name")]
        names: Vec<String>,
        /// Number of rounds (prompted when omitted)
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let bots play a session and report the standings
    Sim {
        #[arg(long)]
        players: u32,
        /// Number of rounds (defaults to the configured value)
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Decision policy for every bot (defaults to the configured value)
        #[arg(long, value_enum)]
        ai: Option<AiKind>,
        /// Append one JSON line per finished round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiKind {
    Baseline,
    Random,
}

impl AiKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AiKind::Baseline => "baseline",
            AiKind::Random => "random",
        }
    }
}
