use crate::domain::heart::{
    HeartId, HeartParticle, HEART_GLYPHS, HEART_PALETTE, MAX_HEART_SECS, MAX_HEART_SIZE, MIN_HEART_SECS,
    MIN_HEART_SIZE,
};
use rand::Rng;
use std::time::Duration;

/// Generates floating heart descriptors.
///
/// Particles share no state; the spawner only hands out increasing ids.
#[derive(Debug)]
pub struct HeartSpawner<R: Rng> {
    rng: R,
    next_id: u64,
}

impl<R: Rng> HeartSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Produce exactly `count` hearts spread over `[0, viewport_width)`.
    pub fn spawn(&mut self, count: usize, viewport_width: f64) -> Vec<HeartParticle> {
        (0..count).map(|_| self.spawn_one(viewport_width)).collect()
    }

    fn spawn_one(&mut self, viewport_width: f64) -> HeartParticle {
        let id = HeartId(self.next_id);
        self.next_id += 1;

        let x = if viewport_width > 0.0 {
            self.rng.gen_range(0.0..viewport_width)
        } else {
            0.0
        };

        HeartParticle {
            id,
            x,
            size: self.rng.gen_range(MIN_HEART_SIZE..=MAX_HEART_SIZE),
            duration: Duration::from_secs_f64(self.rng.gen_range(MIN_HEART_SECS..=MAX_HEART_SECS)),
            rotation: self.rng.gen_range(0.0..360.0),
            color: HEART_PALETTE[self.rng.gen_range(0..HEART_PALETTE.len())],
            glyph: HEART_GLYPHS[self.rng.gen_range(0..HEART_GLYPHS.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn spawner() -> HeartSpawner<StdRng> {
        HeartSpawner::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_spawn_exact_count() {
        let mut spawner = spawner();
        assert_eq!(spawner.spawn(15, 80.0).len(), 15);
        assert_eq!(spawner.spawn(12, 80.0).len(), 12);
        assert!(spawner.spawn(0, 80.0).is_empty());
    }

    #[test]
    fn test_spawn_parameter_ranges() {
        let mut spawner = spawner();
        for heart in spawner.spawn(500, 120.0) {
            assert!((0.0..120.0).contains(&heart.x));
            assert!((20.0..=45.0).contains(&heart.size));
            let secs = heart.duration.as_secs_f64();
            assert!((2.0..=4.0).contains(&secs), "duration {}", secs);
            assert!((0.0..360.0).contains(&heart.rotation));
            assert!(HEART_PALETTE.contains(&heart.color));
            assert!(HEART_GLYPHS.contains(&heart.glyph));
            assert_eq!(heart.lifetime(), heart.duration);
        }
    }

    #[test]
    fn test_ids_are_unique_across_bursts() {
        let mut spawner = spawner();
        let mut ids = HashSet::new();
        for _ in 0..3 {
            for heart in spawner.spawn(10, 40.0) {
                assert!(ids.insert(heart.id));
            }
        }
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_glyphs_vary_across_hearts() {
        let mut spawner = spawner();
        let glyphs: HashSet<&str> = spawner.spawn(200, 80.0).iter().map(|h| h.glyph).collect();
        assert!(glyphs.len() > 1);
    }

    #[test]
    fn test_zero_width_viewport() {
        let mut spawner = spawner();
        assert!(spawner.spawn(5, 0.0).iter().all(|h| h.x == 0.0));
    }
}
