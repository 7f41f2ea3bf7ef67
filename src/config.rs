//! Runtime configuration read from the environment.

use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::term::Palette;
use crate::types::DEFAULT_GRAVITY_MS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gravity interval in milliseconds (at least 1).
    pub gravity_ms: u32,
    pub seed: u32,
    pub palette: Palette,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gravity_ms: DEFAULT_GRAVITY_MS,
            seed: clock_seed(),
            palette: Palette::default(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Load config from `BLOCKFALL_*` environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let gravity_ms = var("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(DEFAULT_GRAVITY_MS);

        let seed = var("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let palette = var("BLOCKFALL_PALETTE")
            .and_then(|s| Palette::parse(&s))
            .unwrap_or_default();

        let log_path = var("BLOCKFALL_LOG_PATH");

        let log_level = var("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            gravity_ms,
            seed,
            palette,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.gravity_ms, DEFAULT_GRAVITY_MS);
        assert_eq!(cfg.palette, Palette::full());
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("BLOCKFALL_GRAVITY_MS", "250"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_PALETTE", "classic"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
            ("BLOCKFALL_LOG_LEVEL", "debug"),
        ]);
        assert_eq!(cfg.gravity_ms, 250);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.palette, Palette::classic());
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("BLOCKFALL_GRAVITY_MS", "fast"),
            ("BLOCKFALL_PALETTE", "#12"),
            ("BLOCKFALL_LOG_PATH", "   "),
            ("BLOCKFALL_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(cfg.gravity_ms, DEFAULT_GRAVITY_MS);
        assert_eq!(cfg.palette, Palette::full());
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn zero_gravity_is_clamped() {
        assert_eq!(config(&[("BLOCKFALL_GRAVITY_MS", "0")]).gravity_ms, 1);
    }
}
