//! Property tests for the time arithmetic and heart generation

use chrono::{DateTime, Duration, TimeZone, Utc};
use keepsake_core::app::{HeartSpawner, TimeEngine};
use keepsake_core::domain::{DurationBreakdown, HEART_GLYPHS, HEART_PALETTE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 12, 0, 0, 0).unwrap()
}

fn target() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 12, 12, 0, 0, 0).unwrap()
}

fn engine() -> TimeEngine {
    TimeEngine::new(start(), target())
}

fn assert_field_ranges(b: &DurationBreakdown) {
    assert!(b.seconds <= 59);
    assert!(b.minutes <= 59);
    assert!(b.hours <= 23);
    assert!(b.days <= 29);
    assert!(b.months <= 12);
}

proptest! {
    #[test]
    fn progress_stays_in_bounds(ms_before in 1i64..5 * 365 * 86_400_000) {
        let now = target() - Duration::milliseconds(ms_before);
        let progress = engine().countdown(&now).progress.percent();
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn progress_never_decreases(ms_before in 2i64..2 * 365 * 86_400_000, step in 1i64..86_400_000) {
        let step = step.min(ms_before - 1);
        let earlier = target() - Duration::milliseconds(ms_before);
        let later = earlier + Duration::milliseconds(step);
        let engine = engine();
        prop_assert!(engine.countdown(&earlier).progress.percent() <= engine.countdown(&later).progress.percent());
    }

    #[test]
    fn countdown_is_zero_once_reached(ms_after in 0i64..10 * 365 * 86_400_000) {
        let countdown = engine().countdown(&(target() + Duration::milliseconds(ms_after)));
        prop_assert!(countdown.remaining.is_zero());
        prop_assert_eq!(countdown.progress.label(), "100.0%");
    }

    #[test]
    fn journey_is_zero_before_start(ms_before in 0i64..10 * 365 * 86_400_000) {
        prop_assert!(engine().journey(&(start() - Duration::milliseconds(ms_before))).is_zero());
    }

    #[test]
    fn breakdown_fields_in_range(ms in 0i64..50 * 365 * 86_400_000) {
        let engine = engine();
        assert_field_ranges(&engine.journey(&(start() + Duration::milliseconds(ms))));
        assert_field_ranges(&engine.countdown(&(target() - Duration::milliseconds(ms))).remaining);
    }

    #[test]
    fn breakdown_accounts_for_every_second(secs in 0u64..100 * 365 * 86_400) {
        let b = DurationBreakdown::from_seconds(secs);
        let rebuilt = ((b.years * 365 + b.months * 30 + b.days) * 24 + b.hours) * 3600 + b.minutes * 60 + b.seconds;
        prop_assert_eq!(rebuilt, secs);
    }

    #[test]
    fn spawn_respects_count_and_ranges(seed in any::<u64>(), count in 0usize..64, width in 0u16..400) {
        let mut spawner = HeartSpawner::new(StdRng::seed_from_u64(seed));
        let hearts = spawner.spawn(count, f64::from(width));
        prop_assert_eq!(hearts.len(), count);
        for heart in hearts {
            prop_assert!((20.0..=45.0).contains(&heart.size));
            prop_assert!((2.0..=4.0).contains(&heart.duration.as_secs_f64()));
            prop_assert!(HEART_PALETTE.contains(&heart.color));
            prop_assert!(HEART_GLYPHS.contains(&heart.glyph));
            prop_assert!(heart.x >= 0.0 && (width == 0 || heart.x < f64::from(width)));
        }
    }
}
