use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Delays for the simulated latencies, in milliseconds.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub lookup_ms: u64,
    pub confirm_ms: u64,
    pub optimize_ms: u64,
    pub reply_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lookup_ms: 2000,
            confirm_ms: 1500,
            optimize_ms: 1500,
            reply_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_ms)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_ms)
    }

    pub fn optimize_delay(&self) -> Duration {
        Duration::from_millis(self.optimize_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_ms)
    }
}

/// Load the optional configuration file. A missing file yields the defaults;
/// an unreadable or unparsable file is an error worth surfacing.
pub fn load_config_from_file(file_path: &str) -> Result<AppConfig, String> {
    if !Path::new(file_path).exists() {
        return Ok(AppConfig::default());
    }
    match fs::read_to_string(file_path) {
        Ok(contents) => toml::from_str::<AppConfig>(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", file_path, e)),
        Err(e) => Err(format!("Failed to read {}: {}", file_path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_match_the_demo_delays() {
        let config = AppConfig::default();
        assert_eq!(config.timing.lookup_delay(), Duration::from_millis(2000));
        assert_eq!(config.timing.confirm_delay(), Duration::from_millis(1500));
        assert_eq!(config.timing.optimize_delay(), Duration::from_millis(1500));
        assert_eq!(config.timing.reply_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn partial_toml_overrides_keep_other_defaults() {
        let config: AppConfig = toml::from_str(
            "[timing]\nlookup_ms = 10\n\n[window]\nwidth = 800.0\n",
        )
        .unwrap();
        assert_eq!(config.timing.lookup_ms, 10);
        assert_eq!(config.timing.confirm_ms, 1500);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 860.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config_from_file("definitely-not-here.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
