// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use crate::error::HarnessError;
use crate::tape::MIN_TAPE_SIZE;
use serde::Deserialize;

/// Harness settings. The binary runs with [`HarnessConfig::default`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Tape size to request; raised to the minimum when smaller.
    pub requested_size: u64,
    /// `env_logger` filter directives, e.g. `"warn"` or `"tape_harness=debug"`.
    pub log_filter: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            requested_size: MIN_TAPE_SIZE as u64,
            log_filter: "warn".into(),
        }
    }
}

impl HarnessConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, HarnessError> {
        Ok(toml::from_str(src)?)
    }

    pub fn with_requested_size(mut self, size: u64) -> Self {
        self.requested_size = size;
        self
    }
}

/// Install the process logger. Logs go to stderr; `RUST_LOG` is ignored.
pub fn init_logging(cfg: &HarnessConfig) {
    let _ = env_logger::Builder::new()
        .parse_filters(&cfg.log_filter)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(HarnessConfig::from_toml_str("").unwrap(), HarnessConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let cfg = HarnessConfig::from_toml_str(
            "requested_size = 50000\nlog_filter = \"tape_harness=debug\"\n",
        )
        .unwrap();
        assert_eq!(cfg.requested_size, 50_000);
        assert_eq!(cfg.log_filter, "tape_harness=debug");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = HarnessConfig::from_toml_str("tape = 1").unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn rejects_negative_size() {
        assert!(HarnessConfig::from_toml_str("requested_size = -1").is_err());
    }
}
