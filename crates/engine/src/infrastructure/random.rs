//! Random implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded random - the same seed replays the same sequence of draws.
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomPort for SeededRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(min..=max)
    }
}

/// Counts draws made through an inner random source.
pub struct CountingRandom {
    inner: Arc<dyn RandomPort>,
    draws: AtomicUsize,
}

impl CountingRandom {
    pub fn new(inner: Arc<dyn RandomPort>) -> Self {
        Self {
            inner,
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomPort for CountingRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.inner.gen_range(min, max)
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_random_replays_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<i32> = (0..10).map(|_| a.gen_range(1, 20)).collect();
        let second: Vec<i32> = (0..10).map(|_| b.gen_range(1, 20)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|v| (1..=20).contains(v)));
    }

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..200 {
            let v = random.gen_range(1, 20);
            assert!((1..=20).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        assert_eq!(SeededRandom::new(1).gen_range(5, 5), 5);
        assert_eq!(SystemRandom::new().gen_range(7, 3), 7);
    }

    #[test]
    fn counting_random_counts_draws() {
        let counting = CountingRandom::new(Arc::new(FixedRandom(11)));
        assert_eq!(counting.draws(), 0);
        assert_eq!(counting.gen_range(1, 20), 11);
        counting.gen_range(1, 20);
        assert_eq!(counting.draws(), 2);
    }
}
