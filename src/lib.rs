//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a seeded multi-deck shoe,
//! deals the player and dealer hands, resolves hits and stands, plays the
//! dealer out and settles the bet against the player's account.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::InProgress);
//! assert_eq!(game.account(), 195);
//!
//! let result = game.stand().unwrap();
//! assert!(result.state.is_over());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use error::{ActionError, DealError};
pub use game::{Game, GameState};
pub use hand::{Evaluation, Hand, Totals};
pub use options::GameOptions;
pub use result::RoundResult;
pub use shoe::Shoe;
