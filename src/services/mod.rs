//! Services module - the word-acquisition pipeline.
//!
//! This module contains the network-facing half of the crate: fetching random
//! words from the word source and dictionary entries from the definition
//! source, and assembling them into a round. The services are
//! **framework-agnostic** and have no dependencies on any UI layer, making
//! them testable and reusable.
//!
//! # Components
//!
//! - [`WordApi`]: The trait seam over the two external HTTP services.
//!   [`HttpWordApi`] is the reqwest-backed production implementation; tests
//!   mock the trait instead of standing up servers.
//!
//! - [`WordGenerator`]: The acquisition pipeline. One round is:
//!   1. Bump the generation epoch and clear the previous round
//!   2. Fetch the word list (fatal to the batch on failure)
//!   3. Resolve one definition per word, sequentially, degrading per-word
//!      failures to tagged [`DefinitionOutcome`](crate::models::DefinitionOutcome)
//!      values
//!   4. Clear the loading flag on every exit path
//!
//! # Design Philosophy
//!
//! The services layer is designed to be:
//! - **Pure**: No side effects beyond network I/O and state writes
//! - **Async**: All operations use tokio for non-blocking I/O
//! - **Testable**: No hidden dependencies, all inputs are explicit parameters
//! - **Framework-agnostic**: No UI code, only acquisition logic
//!
//! # Usage Example
//!
//! ```ignore
//! use world_dungeon::services::{HttpWordApi, WordGenerator};
//! use world_dungeon::state::StateManager;
//!
//! let api = HttpWordApi::from_settings(&config.dungeon_settings)?;
//! let generator = WordGenerator::new(api);
//! let state = StateManager::new();
//!
//! generator.generate_words(&state, 2, 5).await;
//! let round = state.snapshot();
//! ```

pub mod api;
pub mod generator;

pub use api::{ApiError, HttpWordApi, WordApi};
pub use generator::WordGenerator;
