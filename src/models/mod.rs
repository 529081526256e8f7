//! Data models for the World Dungeon engine.
//!
//! This module contains all the core data structures used throughout the crate:
//! - [`GameState`]: The central state container holding the alphabet tracker and the current round
//! - [`AlphabetTracker`] / [`LetterStatus`]: Per-letter guess feedback for the on-screen keyboard
//! - [`WordDefinition`] / [`DefinitionOutcome`]: Dictionary entries and the per-word lookup result
//! - [`MainConfig`]: The bestiary (enemy reward tables) loaded from `WorldDungeon Main.yaml`
//! - [`UserConfig`]: Round settings and service endpoints loaded from `WorldDungeon Config.yaml`
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: Config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Cloneable**: GameState is wrapped in `Arc<RwLock<>>` by [`StateManager`](crate::state::StateManager) for thread-safe access
//! - **Immutable**: State updates go through StateManager's `update()` method to ensure consistency

pub mod alphabet;
pub mod config;
pub mod definition;
pub mod game_state;

pub use alphabet::{AlphabetTracker, LetterStatus};
pub use config::{DungeonSettings, MainConfig, Reward, UserConfig};
pub use definition::{DefinitionBody, DefinitionOutcome, Meaning, WordDefinition};
pub use game_state::{GENERATION_FAILED_MESSAGE, GameState};
