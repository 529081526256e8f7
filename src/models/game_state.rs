use std::time::Duration;

use crate::models::alphabet::AlphabetTracker;
use crate::models::definition::DefinitionOutcome;

/// Single source of truth for all session state.
///
/// Holds the alphabet tracker, the current word-generation round, and the
/// settings that drive it.
///
/// # Thread Safety
///
/// `GameState` is wrapped in `Arc<RwLock<GameState>>` by
/// [`crate::state::StateManager`] to provide thread-safe access across the
/// application. Never access `GameState` directly - always use
/// [`StateManager`](crate::state::StateManager) methods:
/// - [`read()`](crate::state::StateManager::read) for read-only access
/// - [`update()`](crate::state::StateManager::update) for mutations with automatic change events
///
/// # Related Types
///
/// - [`crate::state::StateManager`]: Thread-safe wrapper with event emission
/// - [`crate::state::StateChange`]: Event types for state mutations
/// - [`crate::models::UserConfig`]: User configuration loaded from YAML
#[derive(Clone, Debug)]
pub struct GameState {
    /// Per-letter guess feedback for the on-screen keyboard.
    pub alphabet: AlphabetTracker,

    // Current generation round
    pub is_generating: bool,
    pub words: Vec<String>,
    pub definitions: Vec<DefinitionOutcome>,
    pub error: Option<String>,

    /// Epoch of the round being generated. Bumped by every
    /// `begin_round`; writes stamped with an older epoch are stale and
    /// must be discarded.
    pub generation: u64,

    /// What the current round asked for.
    pub requested_count: usize,
    pub requested_length: usize,

    // Session totals
    pub rounds_started: usize,
    pub rounds_failed: usize,
    pub total_words: usize,
    pub total_found: usize,
    pub total_missing: usize,
    pub total_lookup_failures: usize,

    // Settings
    pub word_count: usize,
    pub word_length: usize,
    pub request_timeout: Duration,
    pub stat_logging: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            alphabet: AlphabetTracker::new(),

            // Round state
            is_generating: false,
            words: Vec::new(),
            definitions: Vec::new(),
            error: None,
            generation: 0,
            requested_count: 0,
            requested_length: 0,

            // Session totals
            rounds_started: 0,
            rounds_failed: 0,
            total_words: 0,
            total_found: 0,
            total_missing: 0,
            total_lookup_failures: 0,

            // Settings
            word_count: 1,
            word_length: 5,
            request_timeout: Duration::from_secs(10),
            stat_logging: true,
        }
    }
}

/// Error message surfaced when the word source fails or answers garbage.
///
/// Batch failures deliberately collapse into this one generic string; the
/// typed cause goes to the log, not the player.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate words";

impl GameState {
    /// Start a new generation round.
    ///
    /// Clears the previous round's words, definitions, and error, raises the
    /// loading flag, and bumps the generation epoch.
    ///
    /// # Returns
    /// The epoch of the new round, to stamp later writes with
    pub fn begin_round(&mut self, count: usize, length: usize) -> u64 {
        self.is_generating = true;
        self.words.clear();
        self.definitions.clear();
        self.error = None;
        self.generation += 1;
        self.requested_count = count;
        self.requested_length = length;
        self.rounds_started += 1;
        self.generation
    }

    /// Count current-round definition outcomes.
    ///
    /// Returns a tuple of (found, missing, lookup_failed).
    pub fn definition_counts(&self) -> (usize, usize, usize) {
        let mut found = 0;
        let mut missing = 0;
        let mut failed = 0;
        for outcome in &self.definitions {
            match outcome {
                DefinitionOutcome::Found(_) => found += 1,
                DefinitionOutcome::NotFound => missing += 1,
                DefinitionOutcome::LookupFailed => failed += 1,
            }
        }
        (found, missing, failed)
    }

    /// Add the finished round's counts to the session totals.
    pub fn aggregate_round(&mut self) {
        let (found, missing, failed) = self.definition_counts();
        self.total_words += self.words.len();
        self.total_found += found;
        self.total_missing += missing;
        self.total_lookup_failures += failed;
    }

    /// One-line description of the current round for logs.
    pub fn round_summary(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }

        let (found, missing, failed) = self.definition_counts();
        let mut parts = vec![format!("{} words", self.words.len())];
        if found > 0 {
            parts.push(format!("{} defined", found));
        }
        if missing > 0 {
            parts.push(format!("{} without definition", missing));
        }
        if failed > 0 {
            parts.push(format!("{} lookups failed", failed));
        }
        parts.join(", ")
    }

    /// Reset everything for a fresh session: alphabet, round, and totals.
    ///
    /// Settings are left as loaded from config.
    pub fn reset_session(&mut self) {
        self.alphabet.reset();
        self.is_generating = false;
        self.words.clear();
        self.definitions.clear();
        self.error = None;
        self.requested_count = 0;
        self.requested_length = 0;
        self.rounds_started = 0;
        self.rounds_failed = 0;
        self.total_words = 0;
        self.total_found = 0;
        self.total_missing = 0;
        self.total_lookup_failures = 0;
    }
}
