//! Random numbers.
//!
//! [`Rng64`] is a small deterministic SplitMix64 generator. The free functions draw from one
//! process-wide instance that is initialized exactly once, either explicitly through
//! [`seed_global`] or lazily from the system clock on first use. The global generator is meant
//! to be consumed from a single render/update thread; the mutex only keeps it sound.

use std::sync::{Mutex, OnceLock};

#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Standard normal (mean 0, std dev 1) via Box-Muller.
    pub fn next_normal(&mut self) -> f64 {
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - self.next_f64_01();
        let u2 = self.next_f64_01();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

static GLOBAL: OnceLock<Mutex<Rng64>> = OnceLock::new();

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED_5EED_5EED_5EED)
}

fn global() -> &'static Mutex<Rng64> {
    GLOBAL.get_or_init(|| Mutex::new(Rng64::new(clock_seed())))
}

fn with_global<T>(f: impl FnOnce(&mut Rng64) -> T) -> T {
    let mut guard = global().lock().unwrap_or_else(|e| e.into_inner());
    f(&mut guard)
}

/// Seed the process-wide generator.
///
/// Returns `false` (and leaves the generator untouched) if it was already initialized, either
/// by an earlier call or by a draw.
pub fn seed_global(seed: u64) -> bool {
    let mut fresh = false;
    GLOBAL.get_or_init(|| {
        fresh = true;
        Mutex::new(Rng64::new(seed))
    });
    if fresh {
        tracing::debug!(seed, "seeded global rng");
    }
    fresh
}

pub fn random_u32() -> u32 {
    with_global(Rng64::next_u32)
}

/// Uniform random float in `[0, 1)` from the global generator.
pub fn random_f64() -> f64 {
    with_global(Rng64::next_f64_01)
}

/// Standard-normal random float from the global generator.
pub fn random_normal() -> f64 {
    with_global(Rng64::next_normal)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
