use crate::domain::card::MemoryCard;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration store interface
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration to storage
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,
    pub dates: DatesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub cards: Vec<MemoryCard>,
}

/// The two fixed dates, as local wall-clock times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatesConfig {
    pub journey_start: NaiveDateTime,
    pub countdown_target: NaiveDateTime,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_interval_ms: u64,
    pub initial_hearts: usize,
    pub initial_hearts_delay_ms: u64,
    pub hearts_per_message: usize,
    pub card_press_ms: u64,
}

/// External player used for card videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub player: String,
    pub args: Vec<String>,
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn initial_hearts_delay(&self) -> Duration {
        Duration::from_millis(self.initial_hearts_delay_ms)
    }

    pub fn card_press(&self) -> Duration {
        Duration::from_millis(self.card_press_ms)
    }
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dates: DatesConfig::default(),
            ui: UiConfig::default(),
            video: VideoConfig::default(),
            cards: vec![
                MemoryCard::new("Where It Began", "December 12, 2025. The first day of our story."),
                MemoryCard::new("Every Second", "Every tick on that clock is another moment with you."),
                MemoryCard::new("One Year", "Counting down to our first anniversary together."),
            ],
        }
    }
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            journey_start: midnight(2025, 12, 12),
            countdown_target: midnight(2026, 12, 12),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            initial_hearts: 15,
            initial_hearts_delay_ms: 1000,
            hearts_per_message: 12,
            card_press_ms: 200,
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            player: "mpv".to_string(),
            args: Vec::new(),
        }
    }
}
