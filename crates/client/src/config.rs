//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for a single duel session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Battle seed. Picked from the clock when unset.
    pub seed: Option<u64>,
    /// Name of the per-session log directory.
    pub session_id: Option<String>,
    /// Root directory for session logs.
    pub log_dir: Option<PathBuf>,
    pub messages: MessageConfig,
    pub ui: UiConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - Battle seed (default: derived from the clock)
    /// - `DUEL_SESSION_ID` - Session directory for log files (default: auto-generated)
    /// - `DUEL_LOG_DIR` - Root directory for logs (default: platform cache dir)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = parse(lookup("DUEL_SEED"));
        config.session_id = lookup("DUEL_SESSION_ID").filter(|id| !id.trim().is_empty());
        config.log_dir = lookup("DUEL_LOG_DIR").map(PathBuf::from);

        if let Some(capacity) = parse::<usize>(lookup("CLI_MESSAGE_CAPACITY")) {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(height) = parse::<u16>(lookup("CLI_MESSAGE_PANEL_HEIGHT")) {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }

    /// Returns the configured seed or one taken from the wall clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Returns the configured session id or a timestamped one.
    pub fn resolved_session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{secs}")
        })
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 10,
        }
    }
}

fn parse<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.session_id, None);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.messages.capacity, 64);
        assert_eq!(config.ui.message_panel_height, 10);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("DUEL_SEED", "42"),
            ("DUEL_SESSION_ID", "arena"),
            ("DUEL_LOG_DIR", "/tmp/duel"),
            ("CLI_MESSAGE_CAPACITY", "5"),
            ("CLI_MESSAGE_PANEL_HEIGHT", "12"),
        ]);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.resolved_seed(), 42);
        assert_eq!(config.resolved_session_id(), "arena");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/duel")));
        assert_eq!(config.messages.capacity, 5);
        assert_eq!(config.ui.message_panel_height, 12);
    }

    #[test]
    fn clamps_and_ignores_bad_values() {
        let config = config_from(&[
            ("DUEL_SEED", "not-a-number"),
            ("DUEL_SESSION_ID", "  "),
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("CLI_MESSAGE_PANEL_HEIGHT", "1"),
        ]);

        assert_eq!(config.seed, None);
        assert_eq!(config.session_id, None);
        assert_eq!(config.messages.capacity, 1);
        assert_eq!(config.ui.message_panel_height, 3);
        assert!(config.resolved_session_id().starts_with("session_"));
    }
}
