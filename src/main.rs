//! World Dungeon - word-acquisition round runner
//!
//! Headless entry point for the World Dungeon engine. It initializes:
//! - Logging infrastructure (file rotation + console output)
//! - Tokio async runtime (network I/O for the two word services)
//! - State management ([`StateManager`])
//! - Configuration loading ([`ConfigManager`])
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/worlddungeon_<date>.log
//! 2. Create tokio runtime
//! 3. Create StateManager (Arc<RwLock<GameState>>)
//! 4. Load YAML configurations from WorldDungeon Data/
//!    - WorldDungeon Main.yaml → Bestiary reward tables
//!    - WorldDungeon Config.yaml → Round settings, API endpoints
//! 5. Subscribe a logging observer to state changes
//! 6. Run one generation round and print the words with their definitions
//! 7. Log the metrics summary and shut the runtime down
//!
//! # Configuration Files
//!
//! Expected in `WorldDungeon Data/` (created with defaults when absent):
//! - `WorldDungeon Main.yaml`: Enemy reward tables
//! - `WorldDungeon Config.yaml`: Word count/length, timeouts, endpoints

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use world_dungeon::metrics::Metrics;
use world_dungeon::models::DefinitionOutcome;
use world_dungeon::services::{HttpWordApi, WordGenerator};
use world_dungeon::{APP_NAME, ConfigManager, StateManager, VERSION};

fn main() -> Result<()> {
    // Setup logging with both file and console output
    let _guard = world_dungeon::logging::setup_logging("logs", "worlddungeon", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Create tokio runtime for the network-bound generation round
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("dungeon-worker")
        .build()?;

    // Create state manager for session state
    let state_manager = Arc::new(StateManager::new());
    tracing::info!("State manager initialized");

    // Create configuration manager and load configurations
    let config_manager = ConfigManager::new("WorldDungeon Data")?;
    let main_config = config_manager.load_main_config()?;
    let user_config = config_manager.load_user_config()?;

    tracing::info!(
        "Loaded configurations - version: {}, bestiary: {} enemy types",
        main_config.dungeon_data.version,
        main_config.dungeon_data.bestiary.len()
    );

    // Load user config into state manager
    state_manager.load_from_user_config(&user_config);

    let metrics = Arc::new(Metrics::new());

    // Observe state changes; the UI would subscribe the same way
    let observer_state = state_manager.clone();
    let observer_metrics = metrics.clone();
    runtime.spawn(async move {
        let mut rx = observer_state.subscribe();
        while let Ok(event) = rx.recv().await {
            observer_metrics.record_state_broadcast();
            tracing::debug!("State change: {:?}", event);
        }
    });

    // Run one generation round with the configured settings
    let settings = &user_config.dungeon_settings;
    let api = HttpWordApi::from_settings(settings)?;
    let generator = WordGenerator::new(api);

    metrics.record_round_started();
    let round_start = Instant::now();
    runtime.block_on(generator.generate_words(
        &state_manager,
        settings.word_count,
        settings.word_length,
    ));
    metrics.record_round_time(round_start.elapsed());

    // Report the round
    let round = state_manager.snapshot();
    if let Some(error) = &round.error {
        metrics.record_round_failed();
        println!("{error}");
    } else {
        metrics.record_words_generated(round.words.len());
        for (word, outcome) in round.words.iter().zip(&round.definitions) {
            match outcome {
                DefinitionOutcome::Found(_) => metrics.record_definition_found(),
                DefinitionOutcome::NotFound => metrics.record_definition_missing(),
                DefinitionOutcome::LookupFailed => metrics.record_definition_lookup_failure(),
            }

            let entry = outcome.display_entry(word);
            println!("{word}");
            if let Some(phonetic) = &entry.phonetic {
                println!("  {phonetic}");
            }
            for meaning in &entry.meanings {
                for body in &meaning.definitions {
                    println!("  [{}] {}", meaning.part_of_speech, body.definition);
                }
            }
        }

        // A taste of the reward tables
        if let Some(enemy) = main_config.enemy_types().next() {
            if let Some(reward) = main_config.reward_for(enemy, 1) {
                println!(
                    "Defeat the {} on guess 1 for {} XP and {} coins",
                    enemy, reward.experience, reward.coins
                );
            }
        }
    }

    tracing::info!("Round complete: {}", round.round_summary());

    if round.stat_logging {
        metrics.log_summary();
    }

    // Shutdown the tokio runtime gracefully
    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Shutdown complete");
    Ok(())
}
