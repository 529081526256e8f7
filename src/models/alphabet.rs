use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Guess-feedback classification for a single letter.
///
/// Serialized in kebab-case (`unused`, `correct`, `wrong-place`, `incorrect`)
/// to match the on-screen keyboard's CSS state names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterStatus {
    /// The letter has not appeared in any scored guess this round.
    Unused,
    /// The letter is in the target word at a known position.
    Correct,
    /// The letter is in the target word at a different position.
    WrongPlace,
    /// The letter is not in the target word.
    Incorrect,
}

/// Tracks the best-known guess feedback for every letter A-Z across a round.
///
/// The map always holds exactly the 26 uppercase ASCII letters, in A-Z
/// insertion order so keyboard UIs can iterate it directly.
///
/// # Invariant
///
/// Once a letter reaches [`LetterStatus::Correct`] it stays there until the
/// next [`reset()`](Self::reset). A later guess can legitimately report the
/// same letter as `Incorrect` (duplicate letters), and that weaker signal
/// must not clobber the strongest one already shown to the player. All other
/// statuses overwrite freely, downgrades included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetTracker {
    letters: IndexMap<char, LetterStatus>,
}

impl AlphabetTracker {
    /// Create a tracker with every letter set to [`LetterStatus::Unused`].
    pub fn new() -> Self {
        Self {
            letters: ('A'..='Z').map(|c| (c, LetterStatus::Unused)).collect(),
        }
    }

    /// Get the current status of a letter.
    ///
    /// Returns `None` for anything outside the 26 tracked letters.
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Apply guess feedback for a letter.
    ///
    /// Untracked keys are ignored, as is any update to a letter already at
    /// `Correct`.
    ///
    /// # Returns
    /// `true` if the stored status actually changed
    pub fn update(&mut self, letter: char, status: LetterStatus) -> bool {
        let Some(slot) = self.letters.get_mut(&letter.to_ascii_uppercase()) else {
            return false;
        };

        if *slot == LetterStatus::Correct || *slot == status {
            return false;
        }

        *slot = status;
        true
    }

    /// Set every letter back to `Unused` for a new round.
    pub fn reset(&mut self) {
        for status in self.letters.values_mut() {
            *status = LetterStatus::Unused;
        }
    }

    /// True if no letter has received feedback yet.
    pub fn is_untouched(&self) -> bool {
        self.letters
            .values()
            .all(|s| *s == LetterStatus::Unused)
    }

    /// Iterate letters in A-Z order with their current status.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.letters.iter().map(|(c, s)| (*c, *s))
    }
}

impl Default for AlphabetTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_all_unused() {
        let tracker = AlphabetTracker::new();
        assert!(tracker.is_untouched());
        assert_eq!(tracker.iter().count(), 26);
        assert_eq!(tracker.status('A'), Some(LetterStatus::Unused));
        assert_eq!(tracker.status('Z'), Some(LetterStatus::Unused));
    }

    #[test]
    fn test_insertion_order_is_alphabetical() {
        let tracker = AlphabetTracker::new();
        let keys: String = tracker.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_update_sets_status() {
        let mut tracker = AlphabetTracker::new();
        assert!(tracker.update('A', LetterStatus::WrongPlace));
        assert_eq!(tracker.status('A'), Some(LetterStatus::WrongPlace));
    }

    #[test]
    fn test_correct_is_absorbing() {
        let mut tracker = AlphabetTracker::new();
        tracker.update('E', LetterStatus::Correct);

        assert!(!tracker.update('E', LetterStatus::Incorrect));
        assert!(!tracker.update('E', LetterStatus::WrongPlace));
        assert_eq!(tracker.status('E'), Some(LetterStatus::Correct));
    }

    #[test]
    fn test_non_correct_statuses_overwrite_freely() {
        let mut tracker = AlphabetTracker::new();
        tracker.update('A', LetterStatus::WrongPlace);
        tracker.update('A', LetterStatus::Incorrect);

        // Downgrade is allowed; only Correct is protected.
        assert_eq!(tracker.status('A'), Some(LetterStatus::Incorrect));
    }

    #[test]
    fn test_update_lowercase_input() {
        let mut tracker = AlphabetTracker::new();
        assert!(tracker.update('q', LetterStatus::Correct));
        assert_eq!(tracker.status('Q'), Some(LetterStatus::Correct));
    }

    #[test]
    fn test_untracked_key_is_noop() {
        let mut tracker = AlphabetTracker::new();
        assert!(!tracker.update('7', LetterStatus::Correct));
        assert!(!tracker.update('Ø', LetterStatus::Correct));
        assert!(tracker.is_untouched());
    }

    #[test]
    fn test_redundant_update_reports_no_change() {
        let mut tracker = AlphabetTracker::new();
        assert!(tracker.update('B', LetterStatus::Incorrect));
        assert!(!tracker.update('B', LetterStatus::Incorrect));
    }

    #[test]
    fn test_reset_returns_all_letters_to_unused() {
        let mut tracker = AlphabetTracker::new();
        tracker.update('A', LetterStatus::Correct);
        tracker.update('B', LetterStatus::WrongPlace);
        tracker.update('C', LetterStatus::Incorrect);

        tracker.reset();

        assert!(tracker.is_untouched());
        // Correct does not survive a reset.
        assert_eq!(tracker.status('A'), Some(LetterStatus::Unused));
    }

    #[test]
    fn test_status_serialization_names() {
        let json = serde_json::to_string(&LetterStatus::WrongPlace).unwrap();
        assert_eq!(json, "\"wrong-place\"");
        let json = serde_json::to_string(&LetterStatus::Unused).unwrap();
        assert_eq!(json, "\"unused\"");
    }
}
