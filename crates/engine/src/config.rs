//! Engine configuration.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::GRAVITY_MS;

/// Runtime configuration for the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Interval between gravity ticks
    pub gravity: Duration,
    /// Piece RNG seed; `None` picks one from the clock
    pub seed: Option<u32>,
    /// Where the binary writes its trace log; `None` disables logging
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: Duration::from_millis(GRAVITY_MS),
            seed: None,
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_GRAVITY_MS`: gravity interval in milliseconds (min 1)
    /// - `BLOCKFALL_SEED`: fixed RNG seed
    /// - `BLOCKFALL_LOG_PATH`: log file path
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let gravity_ms = lookup("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(GRAVITY_MS)
            .max(1);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            gravity: Duration::from_millis(gravity_ms),
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
