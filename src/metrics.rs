// Performance metrics module
//
// Provides lightweight metrics tracking for monitoring session activity

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Global session metrics
///
/// Uses atomic operations for thread-safe metric tracking without locks.
/// Metrics are collected throughout the session and can be logged
/// periodically or on shutdown.
#[derive(Debug)]
pub struct Metrics {
    /// Word-generation rounds started
    pub rounds_started: AtomicUsize,

    /// Rounds aborted by a word-source failure
    pub rounds_failed: AtomicUsize,

    /// Words delivered across all rounds
    pub words_generated: AtomicUsize,

    /// Definitions resolved from the dictionary
    pub definitions_found: AtomicUsize,

    /// Words the dictionary had no entry for
    pub definitions_missing: AtomicUsize,

    /// Definition lookups that failed in transit
    pub definition_lookup_failures: AtomicUsize,

    /// Total time spent in generation rounds, in milliseconds
    pub total_round_time_ms: AtomicU64,

    /// Number of state updates performed
    pub state_updates: AtomicU64,

    /// Number of state broadcasts sent
    pub state_broadcasts: AtomicU64,

    /// Number of state broadcast errors (channel full or closed)
    pub state_broadcast_errors: AtomicU64,

    /// Session start time
    start_time: Instant,
}

impl Metrics {
    /// Create a new Metrics instance
    pub fn new() -> Self {
        Self {
            rounds_started: AtomicUsize::new(0),
            rounds_failed: AtomicUsize::new(0),
            words_generated: AtomicUsize::new(0),
            definitions_found: AtomicUsize::new(0),
            definitions_missing: AtomicUsize::new(0),
            definition_lookup_failures: AtomicUsize::new(0),
            total_round_time_ms: AtomicU64::new(0),
            state_updates: AtomicU64::new(0),
            state_broadcasts: AtomicU64::new(0),
            state_broadcast_errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record the start of a generation round
    pub fn record_round_started(&self) {
        self.rounds_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a round aborted by the word source
    pub fn record_round_failed(&self) {
        self.rounds_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record words delivered by a round
    pub fn record_words_generated(&self, count: usize) {
        self.words_generated.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a resolved definition
    pub fn record_definition_found(&self) {
        self.definitions_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a word without a dictionary entry
    pub fn record_definition_missing(&self) {
        self.definitions_missing.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed definition lookup
    pub fn record_definition_lookup_failure(&self) {
        self.definition_lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record time spent in a generation round
    pub fn record_round_time(&self, duration: Duration) {
        self.total_round_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a state update
    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a state broadcast
    pub fn record_state_broadcast(&self) {
        self.state_broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a state broadcast error
    pub fn record_state_broadcast_error(&self) {
        self.state_broadcast_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get average round time in milliseconds
    pub fn avg_round_time_ms(&self) -> f64 {
        let total = self.total_round_time_ms.load(Ordering::Relaxed);
        let rounds = self.rounds_started.load(Ordering::Relaxed);
        if rounds > 0 {
            total as f64 / rounds as f64
        } else {
            0.0
        }
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        let uptime = self.uptime();
        tracing::info!("=== Session Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", uptime.as_secs_f64());
        tracing::info!(
            "Rounds: {} started, {} failed (avg {:.2}ms per round)",
            self.rounds_started.load(Ordering::Relaxed),
            self.rounds_failed.load(Ordering::Relaxed),
            self.avg_round_time_ms()
        );
        tracing::info!(
            "Words: {} generated; definitions: {} found, {} missing, {} lookups failed",
            self.words_generated.load(Ordering::Relaxed),
            self.definitions_found.load(Ordering::Relaxed),
            self.definitions_missing.load(Ordering::Relaxed),
            self.definition_lookup_failures.load(Ordering::Relaxed)
        );
        tracing::info!(
            "State updates: {}, broadcasts: {}, errors: {}",
            self.state_updates.load(Ordering::Relaxed),
            self.state_broadcasts.load(Ordering::Relaxed),
            self.state_broadcast_errors.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
