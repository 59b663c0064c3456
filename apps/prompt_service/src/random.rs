//! Randomness shared by every generation path.
//!
//! Pure functions take `&mut R where R: Rng` so tests can pass a seeded
//! `StdRng`. Handlers draw through `SharedRng`, which wraps one process-wide
//! generator.

use std::sync::{Arc, Mutex};

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide random source, seeded once at startup.
#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// Keep `f` synchronous: the lock must never be held across an `.await`.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw leaves the generator state valid, so poisoning is ignored.
        let mut guard = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut guard)
    }
}

/// A fixed table of values drawn with probability proportional to weight.
pub struct WeightedTable<T> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T> WeightedTable<T> {
    /// Builds a table from `(value, weight)` rows.
    ///
    /// Panics if `rows` is empty or every weight is zero; tables are compile-time constants.
    pub fn new(rows: impl IntoIterator<Item = (T, u32)>) -> Self {
        let (values, weights): (Vec<T>, Vec<u32>) = rows.into_iter().unzip();
        let index = WeightedIndex::new(&weights).expect("weighted table needs a positive weight");
        Self { values, index }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.index.sample(rng)]
    }
}
