use crate::models::{MainConfig, Reward, UserConfig};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving YAML configuration files.
///
/// Manages two configuration files:
/// - Main config (`WorldDungeon Main.yaml`): Bestiary reward tables
/// - User config (`WorldDungeon Config.yaml`): Round settings, API endpoints
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    main_config_path: Utf8PathBuf,
    user_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing configuration files (e.g., "WorldDungeon Data")
    ///
    /// # Returns
    /// A new ConfigManager instance
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            main_config_path: config_dir.join("WorldDungeon Main.yaml"),
            user_config_path: config_dir.join("WorldDungeon Config.yaml"),
            config_dir,
        })
    }

    /// Load the main configuration file.
    ///
    /// # Returns
    /// The loaded MainConfig, or the built-in bestiary if the file doesn't exist
    pub fn load_main_config(&self) -> Result<MainConfig> {
        if !self.main_config_path.exists() {
            tracing::warn!(
                "Main config file not found at {}, using defaults",
                self.main_config_path
            );
            return Ok(Self::create_default_main_config());
        }

        let file_contents = fs::read_to_string(&self.main_config_path)
            .with_context(|| format!("Failed to read main config: {}", self.main_config_path))?;

        let config: MainConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse main config: {}", self.main_config_path))?;

        tracing::info!("Loaded main config from {}", self.main_config_path);
        Ok(config)
    }

    /// Save the main configuration file.
    ///
    /// # Arguments
    /// * `config` - The MainConfig to save
    pub fn save_main_config(&self, config: &MainConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize main config to YAML")?;

        fs::write(&self.main_config_path, yaml_string)
            .with_context(|| format!("Failed to write main config: {}", self.main_config_path))?;

        tracing::info!("Saved main config to {}", self.main_config_path);
        Ok(())
    }

    /// Load the user configuration file.
    ///
    /// # Returns
    /// The loaded UserConfig, or default if file doesn't exist
    pub fn load_user_config(&self) -> Result<UserConfig> {
        if !self.user_config_path.exists() {
            tracing::warn!(
                "User config file not found at {}, using defaults",
                self.user_config_path
            );
            return Ok(UserConfig::default());
        }

        let file_contents = fs::read_to_string(&self.user_config_path)
            .with_context(|| format!("Failed to read user config: {}", self.user_config_path))?;

        let config: UserConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse user config: {}", self.user_config_path))?;

        tracing::info!("Loaded user config from {}", self.user_config_path);
        Ok(config)
    }

    /// Save the user configuration file.
    ///
    /// # Arguments
    /// * `config` - The UserConfig to save
    pub fn save_user_config(&self, config: &UserConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize user config to YAML")?;

        fs::write(&self.user_config_path, yaml_string)
            .with_context(|| format!("Failed to write user config: {}", self.user_config_path))?;

        tracing::info!("Saved user config to {}", self.user_config_path);
        Ok(())
    }

    /// Create the default main configuration with the full built-in bestiary.
    ///
    /// This is used when the main config file doesn't exist. Reward tables
    /// descend from guess 1 (fastest win, biggest reward) to guess 5.
    pub fn create_default_main_config() -> MainConfig {
        use crate::models::config::DungeonData;
        use indexmap::IndexMap;

        fn table(rows: &[(u32, u32)]) -> Vec<Reward> {
            rows.iter()
                .enumerate()
                .map(|(i, &(experience, coins))| Reward {
                    experience,
                    coins,
                    guess_no: i as u32 + 1,
                })
                .collect()
        }

        let mut bestiary = IndexMap::new();
        bestiary.insert(
            "Analphabetic Wizard".to_string(),
            table(&[(100, 50), (80, 40), (60, 30), (40, 20), (20, 10)]),
        );
        bestiary.insert(
            "Werewolf with Glasses".to_string(),
            table(&[(120, 60), (100, 50), (80, 40), (60, 30), (40, 20)]),
        );
        bestiary.insert(
            "Dyslexic Dragon".to_string(),
            table(&[(150, 75), (120, 60), (90, 45), (60, 30), (30, 15)]),
        );
        bestiary.insert(
            "Spelling Bee Champion".to_string(),
            table(&[(80, 40), (65, 32), (50, 25), (35, 17), (20, 10)]),
        );
        bestiary.insert(
            "Grammar Nazi".to_string(),
            table(&[(200, 100), (160, 80), (120, 60), (80, 40), (40, 20)]),
        );

        MainConfig {
            dungeon_data: DungeonData {
                version: env!("CARGO_PKG_VERSION").to_string(),
                version_date: "25.08.07".to_string(),
                bestiary,
            },
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
