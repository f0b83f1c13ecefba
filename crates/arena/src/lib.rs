//! Arena runner for the selection tiers
//!
//! Provides infrastructure for:
//! - Building a tier from a difficulty spec string
//! - Playing engine-vs-engine games on the cozy-chess adapter
//! - Tallying and reporting match results
//!
//! # Usage
//!
//! ```bash
//! # Pit the minimax tier against the greedy tier
//! cargo run -p arena -- match minimax greedy --games 10 --depth 2
//! ```

mod game_runner;
mod results;

#[cfg(test)]
mod game_runner_tests;

pub use game_runner::*;
pub use results::*;
