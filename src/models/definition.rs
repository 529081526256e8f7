use serde::{Deserialize, Serialize};

/// A dictionary entry for a single word.
///
/// This mirrors the definition service's wire format. Every field except the
/// word itself is defaulted because real entries are ragged: phonetics are
/// frequently absent and meanings can be empty for obscure words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    #[serde(default)]
    pub word: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,

    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One part-of-speech grouping within a dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,

    #[serde(default)]
    pub definitions: Vec<DefinitionBody>,
}

/// A single definition line, optionally with a usage example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionBody {
    #[serde(default)]
    pub definition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Placeholder text shown when the dictionary has no entry for a word.
pub const NO_DEFINITION_TEXT: &str = "No definition found";

/// Placeholder text shown when the definition lookup itself failed.
pub const LOOKUP_FAILED_TEXT: &str = "Failed to fetch definition";

/// Per-word result of a definition lookup.
///
/// The three cases are deliberately distinct: a word the dictionary does not
/// know is ordinary, a lookup that failed in transit is a diagnostic signal.
/// Consumers that want the legacy placeholder-entry shape can render either
/// non-`Found` case through [`display_entry`](Self::display_entry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefinitionOutcome {
    /// The service returned at least one entry; this is the first one.
    Found(WordDefinition),
    /// The service answered, but had no entry for the word.
    NotFound,
    /// The request or response decoding failed.
    LookupFailed,
}

impl DefinitionOutcome {
    /// True for [`DefinitionOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Render this outcome as a well-formed [`WordDefinition`].
    ///
    /// `Found` returns the real entry; the other cases produce a sentinel
    /// entry with part of speech `"unknown"` and a placeholder definition
    /// text, so the UI can treat every slot in the definitions list the same
    /// way.
    pub fn display_entry(&self, word: &str) -> WordDefinition {
        match self {
            Self::Found(entry) => entry.clone(),
            Self::NotFound => placeholder(word, NO_DEFINITION_TEXT),
            Self::LookupFailed => placeholder(word, LOOKUP_FAILED_TEXT),
        }
    }

    /// Short label for logs and progress events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not-found",
            Self::LookupFailed => "lookup-failed",
        }
    }
}

fn placeholder(word: &str, text: &str) -> WordDefinition {
    WordDefinition {
        word: word.to_string(),
        phonetic: None,
        meanings: vec![Meaning {
            part_of_speech: "unknown".to_string(),
            definitions: vec![DefinitionBody {
                definition: text.to_string(),
                example: None,
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "word": "apple",
            "phonetic": "/ˈæp.əl/",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "A common, round fruit.", "example": "An apple a day."},
                    {"definition": "The tree of the genus Malus."}
                ]
            }]
        }"#;

        let entry: WordDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "apple");
        assert_eq!(entry.phonetic.as_deref(), Some("/ˈæp.əl/"));
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].definitions.len(), 2);
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("An apple a day.")
        );
        assert!(entry.meanings[0].definitions[1].example.is_none());
    }

    #[test]
    fn test_deserialize_sparse_entry() {
        // Ragged payloads must still parse.
        let entry: WordDefinition = serde_json::from_str(r#"{"word": "zyzzyva"}"#).unwrap();
        assert_eq!(entry.word, "zyzzyva");
        assert!(entry.phonetic.is_none());
        assert!(entry.meanings.is_empty());
    }

    #[test]
    fn test_not_found_display_entry() {
        let entry = DefinitionOutcome::NotFound.display_entry("mango");
        assert_eq!(entry.word, "mango");
        assert_eq!(entry.meanings[0].part_of_speech, "unknown");
        assert_eq!(entry.meanings[0].definitions[0].definition, NO_DEFINITION_TEXT);
    }

    #[test]
    fn test_lookup_failed_display_entry() {
        let entry = DefinitionOutcome::LookupFailed.display_entry("mango");
        assert_eq!(entry.meanings[0].definitions[0].definition, LOOKUP_FAILED_TEXT);
    }

    #[test]
    fn test_found_display_entry_passes_through() {
        let real = WordDefinition {
            word: "apple".to_string(),
            phonetic: None,
            meanings: Vec::new(),
        };
        let outcome = DefinitionOutcome::Found(real.clone());
        assert_eq!(outcome.display_entry("apple"), real);
        assert!(outcome.is_found());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(DefinitionOutcome::NotFound.label(), "not-found");
        assert_eq!(DefinitionOutcome::LookupFailed.label(), "lookup-failed");
    }
}
