use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed palette hearts are colored from.
pub const HEART_PALETTE: [&str; 12] = [
    "#FF6B8B", "#FF8E9E", "#9D4EDD", "#C77DFF",
    "#00B4D8", "#90E0EF", "#06D6A0", "#8AC926",
    "#FFD166", "#EF476F", "#118AB2", "#073B4C",
];

/// Glyphs a heart is drawn with, one picked per particle.
pub const HEART_GLYPHS: [&str; 12] = [
    "💖", "💕", "💞", "💗", "💓", "💝",
    "❤️", "🧡", "💛", "💚", "💙", "💜",
];

pub const MIN_HEART_SIZE: f64 = 20.0;
pub const MAX_HEART_SIZE: f64 = 45.0;
pub const MIN_HEART_SECS: f64 = 2.0;
pub const MAX_HEART_SECS: f64 = 4.0;

/// Unique identifier for a spawned heart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeartId(pub u64);

impl std::fmt::Display for HeartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "heart-{}", self.0)
    }
}

/// Parameters for one decorative floating heart.
///
/// The rendering surface owns the visual; it removes it once `lifetime()` has
/// elapsed since the heart was spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartParticle {
    pub id: HeartId,
    /// Horizontal start position within the viewport width
    pub x: f64,
    pub size: f64,
    pub duration: Duration,
    /// Degrees, in [0, 360)
    pub rotation: f64,
    /// `#RRGGBB`, one of [`HEART_PALETTE`]
    pub color: &'static str,
    /// One of [`HEART_GLYPHS`]
    pub glyph: &'static str,
}

impl HeartParticle {
    pub fn lifetime(&self) -> Duration {
        self.duration
    }

    /// Color as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(self.color).unwrap_or((255, 255, 255))
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
