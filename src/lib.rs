//! cards-rs: playing-card toolkit and the Scoundrel solo card game
//!
//! Goals:
//! - A small card/deck model that other games can build on
//! - A deterministic Scoundrel engine when seeded
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play Scoundrel from code
//! ```
//! use cards_rs::scoundrel::Scoundrel;
//!
//! let mut game = Scoundrel::with_seed(42);
//! game.init();
//! assert_eq!(game.health(), 20);
//!
//! game.resolve_room_selection("1").unwrap();
//! assert!(game.resolve_room_selection("9").is_err());
//! ```
//!
//! ## Terminal
//! Run the interactive TUI (or the line-mode game with `--line`, or when not on a terminal) with:
//! ```sh
//! cargo run --bin cards-rs
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod render;
pub mod repl;
pub mod scoundrel;
pub mod tui;
pub mod viewer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
