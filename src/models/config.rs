use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Main configuration from WorldDungeon Main.yaml
///
/// Contains the bestiary: every enemy type with its per-guess reward table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConfig {
    #[serde(rename = "Dungeon_Data")]
    pub dungeon_data: DungeonData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonData {
    pub version: String,
    pub version_date: String,

    /// Enemy type -> rewards ordered by guess attempt number (1-based).
    #[serde(rename = "Bestiary")]
    pub bestiary: IndexMap<String, Vec<Reward>>,
}

/// Reward granted for defeating an enemy on a given guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub experience: u32,
    pub coins: u32,

    #[serde(rename = "guessNo")]
    pub guess_no: u32,
}

/// User configuration from WorldDungeon Config.yaml
///
/// Contains round settings and the two service endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Dungeon_Settings")]
    pub dungeon_settings: DungeonSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonSettings {
    #[serde(rename = "Word Count", default = "default_word_count")]
    pub word_count: usize,

    #[serde(rename = "Word Length", default = "default_word_length")]
    pub word_length: usize,

    #[serde(rename = "Request Timeout", default = "default_request_timeout")]
    pub request_timeout: u32,

    #[serde(rename = "Word API", default = "default_word_api")]
    pub word_api_url: String,

    #[serde(rename = "Dictionary API", default = "default_dictionary_api")]
    pub dictionary_api_url: String,

    #[serde(rename = "Stat Logging", default)]
    pub stat_logging: bool,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for DungeonSettings {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            word_length: default_word_length(),
            request_timeout: default_request_timeout(),
            word_api_url: default_word_api(),
            dictionary_api_url: default_dictionary_api(),
            stat_logging: true,
            debug_mode: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            dungeon_settings: DungeonSettings::default(),
        }
    }
}

fn default_word_count() -> usize {
    1
}

fn default_word_length() -> usize {
    5
}

fn default_request_timeout() -> u32 {
    10
}

fn default_word_api() -> String {
    "https://random-word-api.vercel.app/api".to_string()
}

fn default_dictionary_api() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

impl MainConfig {
    /// Get the full reward table for an enemy type.
    pub fn rewards_for(&self, enemy_type: &str) -> Option<&Vec<Reward>> {
        self.dungeon_data.bestiary.get(enemy_type)
    }

    /// Look up the reward for defeating an enemy on a specific guess attempt.
    ///
    /// Matches `guess_no` exactly against the table. An attempt number past
    /// the end of the table clamps to the final (weakest) entry; a slow win
    /// is still a win. `guess_no` of 0 or an unknown enemy yields `None`.
    pub fn reward_for(&self, enemy_type: &str, guess_no: u32) -> Option<Reward> {
        if guess_no == 0 {
            return None;
        }

        let rewards = self.rewards_for(enemy_type)?;

        if let Some(reward) = rewards.iter().find(|r| r.guess_no == guess_no) {
            return Some(*reward);
        }

        rewards
            .last()
            .copied()
            .filter(|last| guess_no > last.guess_no)
    }

    /// Enemy types in bestiary order.
    pub fn enemy_types(&self) -> impl Iterator<Item = &str> {
        self.dungeon_data.bestiary.keys().map(String::as_str)
    }
}
