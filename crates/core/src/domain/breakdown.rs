use serde::{Deserialize, Serialize};
use std::fmt;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const DAYS_PER_YEAR: u64 = 365;
pub const DAYS_PER_MONTH: u64 = 30;

/// Length of the countdown progress window: one 365-day year, in seconds.
pub const YEAR_WINDOW_SECONDS: u64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

/// A duration split into display units.
///
/// Uses a fixed 365-day year and 30-day month. This is deliberately not
/// calendar-accurate: leap years and real month lengths are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// All fields zero.
    pub const ZERO: DurationBreakdown = DurationBreakdown {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break a whole number of elapsed seconds into years, months, days and
    /// the time of day remainder.
    pub fn from_seconds(total_seconds: u64) -> Self {
        let total_days = total_seconds / SECONDS_PER_DAY;

        let years = total_days / DAYS_PER_YEAR;
        let days_after_years = total_days % DAYS_PER_YEAR;

        Self {
            years,
            months: days_after_years / DAYS_PER_MONTH,
            days: days_after_years % DAYS_PER_MONTH,
            hours: (total_seconds / SECONDS_PER_HOUR) % 24,
            minutes: (total_seconds / SECONDS_PER_MINUTE) % 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The six fields as display strings, in order from years to seconds.
    /// Years, months and days are plain; the clock part is zero-padded.
    pub fn fields(&self) -> [String; 6] {
        [
            self.years.to_string(),
            self.months.to_string(),
            self.days.to_string(),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y {}m {}d {:02}:{:02}:{:02}",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown progress through the one-year window, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRatio(f64);

impl ProgressRatio {
    pub const COMPLETE: ProgressRatio = ProgressRatio(100.0);

    /// Progress given the seconds still remaining in the window. Clamped to [0, 100].
    pub fn from_remaining(remaining_seconds: u64) -> Self {
        let window = YEAR_WINDOW_SECONDS as f64;
        let elapsed = window - remaining_seconds as f64;
        Self((elapsed / window * 100.0).clamp(0.0, 100.0))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Fraction in [0, 1], for gauges.
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// One fractional digit followed by a percent sign, e.g. `"42.7%"`.
    pub fn label(&self) -> String {
        format!("{:.1}%", self.0)
    }
}
