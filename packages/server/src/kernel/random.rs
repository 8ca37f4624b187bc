use rand::Rng;

use super::BaseRandom;

/// Thread-local RNG from `rand`.
pub struct ThreadRandom;

impl BaseRandom for ThreadRandom {
    fn range_inclusive(&self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        rand::rng().random_range(low..=high)
    }
}

/// Always answers the same value, clamped into the requested range.
pub struct FixedRandom(i32);

impl FixedRandom {
    pub fn new(value: i32) -> Self {
        Self(value)
    }
}

impl BaseRandom for FixedRandom {
    fn range_inclusive(&self, low: i32, high: i32) -> i32 {
        self.0.clamp(low, high.max(low))
    }
}
