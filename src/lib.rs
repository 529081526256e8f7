// World Dungeon - core engine for the word-guessing dungeon crawler
//
// This is the library crate containing the alphabet tracker, the session
// state, and the word-acquisition pipeline. The binary crate (main.rs)
// provides a headless round runner.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{
    AlphabetTracker, DefinitionOutcome, GameState, LetterStatus, MainConfig, UserConfig,
    WordDefinition,
};
pub use state::{StateChange, StateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
