use crate::domain::breakdown::{DurationBreakdown, ProgressRatio};
use crate::error::{CoreError, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Formatted wall-clock time and date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveClock {
    /// `HH:MM:SS`, 24-hour
    pub time: String,
    /// `Weekday, Month D, YYYY`
    pub date: String,
}

/// Time remaining until the countdown target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub remaining: DurationBreakdown,
    pub progress: ProgressRatio,
}

/// Everything the display needs from one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub clock: LiveClock,
    pub countdown: Countdown,
    pub journey: DurationBreakdown,
}

/// Derives all display values from the current instant and two fixed dates.
///
/// Holds no state besides the dates; every tick is computed from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEngine {
    journey_start: DateTime<Utc>,
    countdown_target: DateTime<Utc>,
}

impl TimeEngine {
    pub fn new(journey_start: DateTime<Utc>, countdown_target: DateTime<Utc>) -> Self {
        Self {
            journey_start,
            countdown_target,
        }
    }

    /// Build from wall-clock dates in the local time zone.
    pub fn from_local(journey_start: NaiveDateTime, countdown_target: NaiveDateTime) -> Result<Self> {
        Self::from_zone(&Local, journey_start, countdown_target)
    }

    /// Build from wall-clock dates in `tz`.
    pub fn from_zone<Tz: TimeZone>(
        tz: &Tz,
        journey_start: NaiveDateTime,
        countdown_target: NaiveDateTime,
    ) -> Result<Self> {
        Ok(Self::new(
            resolve_in(tz, journey_start)?,
            resolve_in(tz, countdown_target)?,
        ))
    }

    pub fn journey_start(&self) -> DateTime<Utc> {
        self.journey_start
    }

    pub fn countdown_target(&self) -> DateTime<Utc> {
        self.countdown_target
    }

    pub fn tick<Tz>(&self, now: &DateTime<Tz>) -> RenderOutput
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        RenderOutput {
            clock: live_clock(now),
            countdown: self.countdown(now),
            journey: self.journey(now),
        }
    }

    /// Remaining time until the target plus progress through the year before it.
    pub fn countdown<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Countdown {
        let diff_ms = self.countdown_target.timestamp_millis() - now.timestamp_millis();
        if diff_ms <= 0 {
            return Countdown {
                remaining: DurationBreakdown::ZERO,
                progress: ProgressRatio::COMPLETE,
            };
        }

        let diff_seconds = (diff_ms / 1000) as u64;
        Countdown {
            remaining: DurationBreakdown::from_seconds(diff_seconds),
            progress: ProgressRatio::from_remaining(diff_seconds),
        }
    }

    /// Time elapsed since the journey started. Zero until it has.
    pub fn journey<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DurationBreakdown {
        let diff_ms = now.timestamp_millis() - self.journey_start.timestamp_millis();
        if diff_ms <= 0 {
            return DurationBreakdown::ZERO;
        }

        DurationBreakdown::from_seconds((diff_ms / 1000) as u64)
    }
}

pub fn live_clock<Tz>(now: &DateTime<Tz>) -> LiveClock
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    LiveClock {
        time: now.format("%H:%M:%S").to_string(),
        date: now.format("%A, %B %-d, %Y").to_string(),
    }
}

pub fn resolve_local(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    resolve_in(&Local, naive)
}

/// Resolve a wall-clock time in `tz` to an instant. Ambiguous times (DST fall-back)
/// take the earlier instant; times skipped by a DST jump are rejected.
pub fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        // The two readings are not guaranteed to come back in order
        LocalResult::Ambiguous(a, b) => Ok(a.with_timezone(&Utc).min(b.with_timezone(&Utc))),
        LocalResult::None => Err(CoreError::InvalidInstant {
            value: naive.to_string(),
        }),
    }
}
