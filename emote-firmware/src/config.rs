//! Embedded configuration loading

use defmt::*;

use emote_core::config::{parse_config, EmoteConfig};

/// Embedded default configuration (compiled into firmware)
/// Edit emote.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../emote.toml");

/// Parse the embedded configuration, falling back to defaults on error
pub fn load_embedded() -> EmoteConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            warn!("Using default configuration");
            EmoteConfig::default()
        }
    }
}

fn log_config_summary(config: &EmoteConfig) {
    debug!(
        "  rotation: {} emotions every {}ms, autostart={}",
        config.rotation.sequence.len(),
        config.rotation.interval_ms,
        config.rotation.autostart
    );
    debug!("  fallback: {}", config.rotation.fallback.as_str());
    debug!(
        "  demo: {} emotions, {}ms apart",
        config.demo.emotions.len(),
        config.demo.step_ms
    );
}
