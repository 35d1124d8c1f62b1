//! # blackjack-engine: Blackjack Round Engine
//!
//! A deterministic Blackjack engine for one dealer (the House) and any number
//! of players. There is no wagering: every round moves points between the
//! players and the house.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded 52-card deck with ChaCha20 shuffling
//! - [`hand`] - Hand values, naturals and splitting
//! - [`player`] - Players, per-round participants and the dealer
//! - [`rules`] - Action legality and the dealer's threshold
//! - [`scoring`] - Outcome classification and points
//! - [`engine`] - Step-driven round controller
//! - [`game`] - Multi-round session and standings
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::game::Session;
//! use blackjack_engine::player::PlayerAction;
//!
//! let mut session = Session::new(vec!["Ann".into(), "Bo".into()], 3, Some(42)).unwrap();
//! while !session.is_finished() {
//!     session.start_next_round().unwrap();
//!     while let Some(view) = session.turn_view() {
//!         let action = if view.hand.value() < 17 {
//!             PlayerAction::Hit
//!         } else {
//!             PlayerAction::Stand
//!         };
//!         session.apply_action(view.participant, action).unwrap();
//!     }
//!     let (_dealer_events, summary) = session.complete_round().unwrap();
//!     println!("round {} dealer {}", summary.round, summary.dealer_value);
//! }
//! println!("leaders: {:?}", session.standings().leaders());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod scoring;
