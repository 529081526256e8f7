use crate::models::DefinitionOutcome;
use crate::services::api::WordApi;
use crate::state::StateManager;

/// Drives one word-generation round against a [`WordApi`].
///
/// The generator owns no state of its own; every result is written through
/// the [`StateManager`], stamped with the round's generation epoch so a
/// newer round silently supersedes this one.
///
/// # Failure model
///
/// - Word-source failure is fatal to the batch: no words, no definitions,
///   the generic error message in state.
/// - Definition failures degrade per word to [`DefinitionOutcome::NotFound`]
///   or [`DefinitionOutcome::LookupFailed`] and never touch the top-level
///   error.
///
/// Definitions are fetched one at a time, in word order. That keeps the
/// definitions list positionally aligned with the word list and avoids
/// hammering the dictionary service with a burst of lookups.
pub struct WordGenerator<A: WordApi> {
    api: A,
}

impl<A: WordApi> WordGenerator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Generate `count` words of `length` letters with best-effort definitions.
    ///
    /// Clears the previous round, fetches the word list, then resolves one
    /// definition per word in sequence. The loading flag is cleared on every
    /// exit path: `finish_generation` and `fail_generation` are the only two
    /// ways out.
    ///
    /// # Returns
    /// The epoch of the round this call ran as
    pub async fn generate_words(
        &self,
        state: &StateManager,
        count: usize,
        length: usize,
    ) -> u64 {
        let epoch = state.begin_generation(count, length);
        tracing::info!(
            "Generating {} words of length {} (round {})",
            count,
            length,
            epoch
        );

        let words = match self.api.random_words(count, length).await {
            Ok(words) => words,
            Err(error) => {
                tracing::warn!("Word source request failed: {}", error);
                state.fail_generation(epoch);
                return epoch;
            }
        };

        state.record_words(epoch, words.clone());

        for word in &words {
            let outcome = match self.api.definition(word).await {
                Ok(Some(entry)) => DefinitionOutcome::Found(entry),
                Ok(None) => {
                    tracing::debug!("No dictionary entry for {word:?}");
                    DefinitionOutcome::NotFound
                }
                Err(error) => {
                    // Swallowed: one unknown word must not sink the round.
                    tracing::warn!("Definition lookup for {word:?} failed: {}", error);
                    DefinitionOutcome::LookupFailed
                }
            };
            state.record_definition(epoch, outcome);
        }

        state.finish_generation(epoch);
        epoch
    }
}
