use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub billing: BillingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate used while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Hero subtitle reveal timing (the page uses 50/500, slower than
    /// the component's own 8/0 defaults)
    #[serde(default = "default_hero_reveal")]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            reveal: default_hero_reveal(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Timing parameters for the hero text reveal animation.
///
/// `speed_ms` is the minimum spacing between reveal ticks, not an exact
/// interval; the frame rate is the real floor. Negative values are
/// accepted in the file and clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_speed")]
    pub speed_ms: i64,
    #[serde(default)]
    pub delay_ms: i64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_reveal_speed(),
            delay_ms: 0,
        }
    }
}

impl RevealConfig {
    pub fn new(speed_ms: i64, delay_ms: i64) -> Self {
        Self { speed_ms, delay_ms }
    }

    /// Minimum spacing between reveal ticks, negative clamped to zero.
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms.max(0) as u64)
    }

    /// Initial wait before the first tick, negative clamped to zero.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.max(0) as u64)
    }
}

/// Thresholds for the sticky-header controller.
///
/// Defaults preserve the behavior observed on the web page: viewports
/// wider than 768 units compare the scroll offset against the title's
/// bottom edge minus 50, narrower viewports use the subtitle with no
/// offset. A terminal viewport always lands on the narrow side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,
    #[serde(default = "default_compact_offset")]
    pub compact_offset: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            compact_offset: default_compact_offset(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animation
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

impl ScrollConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Publishable key for the hosted billing widget.
    /// Overridden by the PROXLOCK_PUBLISHABLE_KEY environment variable.
    #[serde(default)]
    pub publishable_key: Option<String>,
    /// Plan listing endpoint of the billing widget
    #[serde(default = "default_plans_url")]
    pub plans_url: String,
    /// HTTP timeout in seconds for plan fetches
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            publishable_key: None,
            plans_url: default_plans_url(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl BillingConfig {
    /// Resolve the publishable key, preferring the environment.
    ///
    /// A missing key is fatal for the pricing view: the caller must
    /// refuse to render it rather than proceed without the billing
    /// capability.
    pub fn resolve_publishable_key(&self) -> crate::Result<String> {
        if let Ok(key) = std::env::var("PROXLOCK_PUBLISHABLE_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        self.publishable_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(crate::Error::MissingPublishableKey)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_reveal_speed() -> i64 {
    8
}

fn default_hero_reveal() -> RevealConfig {
    RevealConfig::new(50, 500)
}

fn default_mobile_breakpoint() -> u16 {
    768
}

fn default_compact_offset() -> i32 {
    50
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_plans_url() -> String {
    "https://billing.proxlock.dev/v1/plans".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/proxlock-landing/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("proxlock-landing")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.reveal.speed_ms, 50);
        assert_eq!(config.ui.reveal.delay_ms, 500);
        assert_eq!(RevealConfig::default().speed_ms, 8);
        assert_eq!(RevealConfig::default().delay_ms, 0);
        assert_eq!(config.ui.nav.mobile_breakpoint, 768);
        assert_eq!(config.ui.nav.compact_offset, 50);
        assert!(config.ui.scroll.is_smooth());
        assert!(config.billing.publishable_key.is_none());
    }

    #[test]
    fn test_reveal_config_clamps_negatives() {
        let config = RevealConfig::new(-10, -500);
        assert_eq!(config.speed(), Duration::ZERO);
        assert_eq!(config.delay(), Duration::ZERO);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.reveal]
            speed_ms = 50
            delay_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.reveal.speed_ms, 50);
        assert_eq!(config.ui.reveal.delay_ms, 500);
        assert_eq!(config.ui.nav.mobile_breakpoint, 768);
    }

    #[test]
    fn test_missing_publishable_key_is_fatal() {
        let config = BillingConfig::default();
        // Only meaningful when the env override is absent
        if std::env::var("PROXLOCK_PUBLISHABLE_KEY").is_err() {
            assert!(matches!(
                config.resolve_publishable_key(),
                Err(crate::Error::MissingPublishableKey)
            ));
        }
    }
}
