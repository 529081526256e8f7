// State management module
//
// This module provides the StateManager which wraps GameState with thread-safe
// access using Arc<RwLock<T>> and emits change events for UI updates.

use crate::models::definition::DefinitionOutcome;
use crate::models::game_state::GENERATION_FAILED_MESSAGE;
use crate::models::{GameState, LetterStatus, UserConfig};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;

/// Change events emitted when state is modified
///
/// These events are emitted to notify interested parties (primarily the UI)
/// about state changes without requiring them to poll the state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// A word-generation round has started
    GenerationStarted {
        count: usize,
        length: usize,
    },

    /// The word source answered; definitions are being resolved next
    WordsReceived {
        total: usize,
    },

    /// A single word's definition lookup has been resolved
    DefinitionResolved {
        word: String,
        resolution: &'static str,
    },

    /// The round completed with a usable word list
    GenerationFinished {
        words: usize,
        found: usize,
        missing: usize,
        failed: usize,
    },

    /// The round aborted because the word source failed
    GenerationFailed {
        message: String,
    },

    /// A letter's guess feedback changed
    LetterUpdated {
        letter: char,
        status: LetterStatus,
    },

    /// The alphabet went back to all-unused for a new round
    AlphabetReset,

    /// Settings have been updated
    SettingsChanged,

    /// State has been reset
    StateReset,
}

/// Thread-safe state manager with event emission
///
/// This is the central state management component that:
/// - Provides thread-safe access to [`GameState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Discards writes stamped with a stale generation epoch
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// # Usage
///
/// Always use `StateManager` instead of accessing [`GameState`] directly:
/// - [`read()`](Self::read) for reading state without holding locks
/// - [`update()`](Self::update) for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to state changes
///
/// # Generation epochs
///
/// [`begin_generation()`](Self::begin_generation) bumps an epoch counter and
/// returns it; every round write ([`record_words()`](Self::record_words),
/// [`record_definition()`](Self::record_definition),
/// [`finish_generation()`](Self::finish_generation),
/// [`fail_generation()`](Self::fail_generation)) carries that epoch and is
/// dropped if a newer round has begun since. Overlapping calls to the
/// generator therefore converge on the newest round instead of interleaving.
///
/// # Related Types
///
/// - [`crate::models::GameState`]: The underlying state structure
/// - [`StateChange`]: Event types emitted on state mutations
/// - [`crate::services::WordGenerator`]: Primary writer of round state
pub struct StateManager {
    /// The session state protected by RwLock for thread-safe access
    state: Arc<RwLock<GameState>>,

    /// Broadcast channel for emitting state change events
    /// Multiple subscribers can listen for state changes
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state
    ///
    /// # Returns
    /// A new StateManager with a broadcast channel buffer of 100 events
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(GameState::default())),
            state_tx,
        }
    }

    /// Get a read-only snapshot of the current state
    ///
    /// This clones the entire state, so it's safe to use without holding locks.
    /// For checking individual fields, consider using `read()` with a closure.
    pub fn snapshot(&self) -> GameState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let loading = state_manager.read(|state| state.is_generating);
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&GameState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// This is the primary way to modify state. It:
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    /// 4. Emits appropriate events
    ///
    /// # Arguments
    /// * `update_fn` - A function that mutates the state
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut GameState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        // Apply the update
        update_fn(&mut state);

        // Detect changes and emit events
        let changes = self.detect_changes(&old_state, &state);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    ///
    /// Returns a receiver that will get notified of all future state changes.
    /// Multiple subscribers can listen simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Detect what changed between two states and generate events
    ///
    /// This is called internally by `update()` to determine which events to emit.
    fn detect_changes(&self, old: &GameState, new: &GameState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        // Round lifecycle
        if !old.is_generating && new.is_generating {
            changes.push(StateChange::GenerationStarted {
                count: new.requested_count,
                length: new.requested_length,
            });
        } else if old.is_generating && !new.is_generating {
            if let Some(message) = &new.error {
                changes.push(StateChange::GenerationFailed {
                    message: message.clone(),
                });
            } else {
                let (found, missing, failed) = new.definition_counts();
                changes.push(StateChange::GenerationFinished {
                    words: new.words.len(),
                    found,
                    missing,
                    failed,
                });
            }
        }

        // Word list arrival (a begin_round clears the list, which is not an arrival)
        if old.words != new.words && !new.words.is_empty() {
            changes.push(StateChange::WordsReceived {
                total: new.words.len(),
            });
        }

        // Newly resolved definitions, positionally aligned with the word list
        if new.definitions.len() > old.definitions.len() {
            for index in old.definitions.len()..new.definitions.len() {
                let word = new
                    .words
                    .get(index)
                    .cloned()
                    .unwrap_or_default();
                changes.push(StateChange::DefinitionResolved {
                    word,
                    resolution: new.definitions[index].label(),
                });
            }
        }

        // Alphabet changes
        if old.alphabet != new.alphabet {
            if new.alphabet.is_untouched() {
                changes.push(StateChange::AlphabetReset);
            } else {
                for ((letter, old_status), (_, new_status)) in
                    old.alphabet.iter().zip(new.alphabet.iter())
                {
                    if old_status != new_status {
                        changes.push(StateChange::LetterUpdated {
                            letter,
                            status: new_status,
                        });
                    }
                }
            }
        }

        // Settings changes (checking all settings fields)
        if old.word_count != new.word_count
            || old.word_length != new.word_length
            || old.request_timeout != new.request_timeout
            || old.stat_logging != new.stat_logging
        {
            changes.push(StateChange::SettingsChanged);
        }

        changes
    }

    // Convenience methods for common state updates

    /// Start a generation round, clearing the previous round's results
    ///
    /// # Returns
    /// The epoch of the new round; pass it to every subsequent round write
    pub fn begin_generation(&self, count: usize, length: usize) -> u64 {
        let mut epoch = 0;
        self.update(|state| {
            epoch = state.begin_round(count, length);
        });
        epoch
    }

    /// Store the word list fetched for the given round
    ///
    /// Ignored if a newer round has started since `epoch` was issued.
    pub fn record_words(&self, epoch: u64, words: Vec<String>) -> Vec<StateChange> {
        self.update(|state| {
            if state.generation != epoch {
                tracing::debug!(
                    "Discarding stale word list from round {} (current round {})",
                    epoch,
                    state.generation
                );
                return;
            }
            state.words = words;
        })
    }

    /// Append one definition outcome for the given round
    ///
    /// Outcomes arrive in word order, keeping the definitions list positionally
    /// aligned. Ignored if a newer round has started since `epoch` was issued.
    pub fn record_definition(&self, epoch: u64, outcome: DefinitionOutcome) -> Vec<StateChange> {
        self.update(|state| {
            if state.generation != epoch {
                tracing::debug!(
                    "Discarding stale definition from round {} (current round {})",
                    epoch,
                    state.generation
                );
                return;
            }
            state.definitions.push(outcome);
        })
    }

    /// Complete the round successfully and clear the loading flag
    pub fn finish_generation(&self, epoch: u64) -> Vec<StateChange> {
        self.update(|state| {
            if state.generation != epoch {
                tracing::debug!(
                    "Ignoring completion of stale round {} (current round {})",
                    epoch,
                    state.generation
                );
                return;
            }
            state.aggregate_round();
            state.is_generating = false;
        })
    }

    /// Abort the round after a word-source failure and clear the loading flag
    ///
    /// Records the generic user-facing error message; the typed cause belongs
    /// in the log, not in state.
    pub fn fail_generation(&self, epoch: u64) -> Vec<StateChange> {
        self.update(|state| {
            if state.generation != epoch {
                tracing::debug!(
                    "Ignoring failure of stale round {} (current round {})",
                    epoch,
                    state.generation
                );
                return;
            }
            state.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            state.rounds_failed += 1;
            state.is_generating = false;
        })
    }

    /// Apply guess feedback to a letter
    ///
    /// Emits [`StateChange::LetterUpdated`] only when the tracker actually
    /// changed; updates against a `Correct` letter are silently absorbed.
    pub fn update_letter(&self, letter: char, status: LetterStatus) -> Vec<StateChange> {
        self.update(|state| {
            state.alphabet.update(letter, status);
        })
    }

    /// Set every letter back to unused for a new round
    pub fn reset_alphabet(&self) -> Vec<StateChange> {
        self.update(|state| {
            state.alphabet.reset();
        })
    }

    /// Reset the whole session: alphabet, round results, totals
    pub fn reset_session(&self) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            state.reset_session();
        });

        // Emit a reset event
        let reset_event = StateChange::StateReset;
        let _ = self.state_tx.send(reset_event.clone());
        changes.push(reset_event);

        changes
    }

    /// Update settings
    pub fn update_settings<F>(&self, settings_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut GameState),
    {
        self.update(settings_fn)
    }

    /// Load configuration from UserConfig
    ///
    /// This populates GameState settings from the user configuration file.
    ///
    /// # Arguments
    /// * `user_config` - The loaded user configuration
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted
    pub fn load_from_user_config(&self, user_config: &UserConfig) -> Vec<StateChange> {
        self.update(|state| {
            let settings = &user_config.dungeon_settings;

            state.word_count = settings.word_count;
            state.word_length = settings.word_length;
            state.request_timeout = Duration::from_secs(settings.request_timeout as u64);
            state.stat_logging = settings.stat_logging;

            tracing::info!(
                "Loaded user config: count={}, length={}, timeout={}s, stat_logging={}",
                settings.word_count,
                settings.word_length,
                settings.request_timeout,
                settings.stat_logging
            );
        })
    }

    /// Get an Arc reference to the state for use in worker tasks
    ///
    /// Use this when you need to share state across tasks but want
    /// to minimize cloning. Remember to use read/write locks appropriately.
    pub fn state_arc(&self) -> Arc<RwLock<GameState>> {
        Arc::clone(&self.state)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

// Make StateManager cloneable for sharing across tasks
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordDefinition;

    fn found(word: &str) -> DefinitionOutcome {
        DefinitionOutcome::Found(WordDefinition {
            word: word.to_string(),
            phonetic: None,
            meanings: Vec::new(),
        })
    }

    #[test]
    fn test_new_state_manager() {
        let manager = StateManager::new();
        let state = manager.snapshot();

        assert!(!state.is_generating);
        assert!(state.words.is_empty());
        assert!(state.alphabet.is_untouched());
    }

    #[test]
    fn test_begin_generation_emits_started() {
        let manager = StateManager::new();

        let epoch = manager.begin_generation(2, 5);

        assert_eq!(epoch, 1);
        let state = manager.snapshot();
        assert!(state.is_generating);
        assert_eq!(state.requested_count, 2);
    }

    #[test]
    fn test_begin_generation_event() {
        let manager = StateManager::new();
        let mut rx = manager.subscribe();

        manager.begin_generation(3, 6);

        let event = rx.try_recv().unwrap();
        assert_eq!(event, StateChange::GenerationStarted { count: 3, length: 6 });
    }

    #[test]
    fn test_record_words_emits_words_received() {
        let manager = StateManager::new();
        let epoch = manager.begin_generation(2, 5);

        let changes =
            manager.record_words(epoch, vec!["apple".to_string(), "mango".to_string()]);

        assert_eq!(changes, vec![StateChange::WordsReceived { total: 2 }]);
        assert_eq!(manager.read(|s| s.words.len()), 2);
    }

    #[test]
    fn test_stale_words_are_discarded() {
        let manager = StateManager::new();
        let stale = manager.begin_generation(1, 5);
        let _current = manager.begin_generation(1, 5);

        let changes = manager.record_words(stale, vec!["apple".to_string()]);

        assert!(changes.is_empty());
        assert!(manager.read(|s| s.words.is_empty()));
    }

    #[test]
    fn test_record_definition_emits_resolution() {
        let manager = StateManager::new();
        let epoch = manager.begin_generation(1, 5);
        manager.record_words(epoch, vec!["apple".to_string()]);

        let changes = manager.record_definition(epoch, found("apple"));

        assert_eq!(
            changes,
            vec![StateChange::DefinitionResolved {
                word: "apple".to_string(),
                resolution: "found",
            }]
        );
    }

    #[test]
    fn test_finish_generation_clears_loading_and_aggregates() {
        let manager = StateManager::new();
        let epoch = manager.begin_generation(1, 5);
        manager.record_words(epoch, vec!["apple".to_string()]);
        manager.record_definition(epoch, found("apple"));

        let changes = manager.finish_generation(epoch);

        assert_eq!(
            changes,
            vec![StateChange::GenerationFinished {
                words: 1,
                found: 1,
                missing: 0,
                failed: 0,
            }]
        );

        let state = manager.snapshot();
        assert!(!state.is_generating);
        assert_eq!(state.total_found, 1);
    }

    #[test]
    fn test_fail_generation_records_generic_error() {
        let manager = StateManager::new();
        let epoch = manager.begin_generation(1, 5);

        let changes = manager.fail_generation(epoch);

        assert_eq!(
            changes,
            vec![StateChange::GenerationFailed {
                message: GENERATION_FAILED_MESSAGE.to_string(),
            }]
        );

        let state = manager.snapshot();
        assert!(!state.is_generating);
        assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(state.rounds_failed, 1);
    }

    #[test]
    fn test_stale_finish_keeps_new_round_loading() {
        let manager = StateManager::new();
        let stale = manager.begin_generation(1, 5);
        let _current = manager.begin_generation(1, 5);

        manager.finish_generation(stale);

        assert!(manager.read(|s| s.is_generating));
    }

    #[test]
    fn test_update_letter_emits_event_once() {
        let manager = StateManager::new();

        let changes = manager.update_letter('A', LetterStatus::WrongPlace);
        assert_eq!(
            changes,
            vec![StateChange::LetterUpdated {
                letter: 'A',
                status: LetterStatus::WrongPlace,
            }]
        );

        // Same status again: no change, no event.
        let changes = manager.update_letter('A', LetterStatus::WrongPlace);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_correct_letter_absorbs_without_event() {
        let manager = StateManager::new();
        manager.update_letter('E', LetterStatus::Correct);

        let changes = manager.update_letter('E', LetterStatus::Incorrect);

        assert!(changes.is_empty());
        assert_eq!(
            manager.read(|s| s.alphabet.status('E')),
            Some(LetterStatus::Correct)
        );
    }

    #[test]
    fn test_reset_alphabet_emits_single_reset_event() {
        let manager = StateManager::new();
        manager.update_letter('A', LetterStatus::Correct);
        manager.update_letter('B', LetterStatus::Incorrect);

        let changes = manager.reset_alphabet();

        assert_eq!(changes, vec![StateChange::AlphabetReset]);
        assert!(manager.read(|s| s.alphabet.is_untouched()));
    }

    #[test]
    fn test_settings_change_detection() {
        let manager = StateManager::new();

        let changes = manager.update_settings(|state| {
            state.word_length = 7;
        });

        assert_eq!(changes, vec![StateChange::SettingsChanged]);
        assert_eq!(manager.read(|s| s.word_length), 7);
    }

    #[test]
    fn test_load_from_user_config() {
        let manager = StateManager::new();
        let mut config = UserConfig::default();
        config.dungeon_settings.word_count = 4;
        config.dungeon_settings.request_timeout = 30;

        manager.load_from_user_config(&config);

        let state = manager.snapshot();
        assert_eq!(state.word_count, 4);
        assert_eq!(state.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reset_session_emits_state_reset() {
        let manager = StateManager::new();
        let epoch = manager.begin_generation(1, 5);
        manager.record_words(epoch, vec!["apple".to_string()]);
        manager.update_letter('A', LetterStatus::Correct);

        let changes = manager.reset_session();

        assert!(changes.iter().any(|c| matches!(c, StateChange::StateReset)));

        let state = manager.snapshot();
        assert!(state.words.is_empty());
        assert!(state.alphabet.is_untouched());
    }

    #[test]
    fn test_subscribe_to_changes() {
        let manager = StateManager::new();
        let mut rx = manager.subscribe();

        manager.update_letter('Q', LetterStatus::Incorrect);

        let event = rx.try_recv();
        assert!(event.is_ok());
        assert!(matches!(event.unwrap(), StateChange::LetterUpdated { .. }));
    }

    #[test]
    fn test_multiple_subscribers() {
        let manager = StateManager::new();
        let mut rx1 = manager.subscribe();
        let mut rx2 = manager.subscribe();

        manager.begin_generation(1, 5);

        // Both subscribers should receive the event
        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn test_read_with_closure() {
        let manager = StateManager::new();
        manager.update(|state| {
            state.words.push("apple".to_string());
        });

        let count = manager.read(|state| state.words.len());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_clone_state_manager() {
        let manager1 = StateManager::new();
        let manager2 = manager1.clone();

        // Update through one manager
        manager1.update(|state| {
            state.word_count = 9;
        });

        // Changes should be visible through the clone
        let state = manager2.snapshot();
        assert_eq!(state.word_count, 9);
    }

    #[test]
    fn test_state_arc() {
        let manager = StateManager::new();
        let state_arc = manager.state_arc();

        // Modify through the Arc
        {
            let mut state = state_arc.write().unwrap();
            state.word_length = 8;
        }

        // Changes should be visible through manager
        let state = manager.snapshot();
        assert_eq!(state.word_length, 8);
    }
}
