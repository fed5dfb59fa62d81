//! # Treasure Hunter - a small text adventure
//!
//! A hunter travels between randomly generated towns, trades at the general
//! store, picks fights for gold, digs for more and hunts for treasure. Finding
//! three distinct treasures wins the game; losing a brawl you cannot pay for
//! ends it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use treasure_hunter::config::Config;
//! use treasure_hunter::console::{AnsiTerminal, Console, StdinLines};
//! use treasure_hunter::game::play;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("treasure-hunter.toml")?;
//!     let stdin = std::io::stdin();
//!     let mut console = Console::new(
//!         StdinLines::new(stdin.lock()),
//!         AnsiTerminal::new(std::io::stdout(), config.display.color.enabled()),
//!     );
//!     let outcome = play(&mut console, &config.rules, StdRng::seed_from_u64(42))?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Hunter, terrain, shop, town and the game controller
//! - [`console`] - Line input and styled output ports with terminal and in-memory adapters
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log formatting helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ GameController  │ ← Turn loop, win/lose check
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Town / Shop    │ ← Randomized events and trades
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Hunter/Terrain  │ ← Player state
//! └─────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod game;
pub mod logutil;
