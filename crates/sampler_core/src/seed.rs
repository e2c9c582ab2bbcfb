//! # Seed Deriver
//!
//! Expands one master seed into per-worker engine seeds using a single
//! serial engine, so that the seed sequence depends only on the worker
//! count and the master seed — never on execution order or timing.
//!
//! Worker 0 always uses the master seed directly. Workers 1..W-1
//! receive seeds drawn sequentially from worker 0's engine: one uniform
//! draw each, converted to an integer seed via `floor(u * u64::MAX)`.
//! The derivation deliberately advances worker 0's engine by W-1 draws;
//! this is why worker 0's subsequent stream differs from a fresh engine
//! reseeded with the master seed.
//!
//! The derivation is a hard ordering barrier: it runs to completion
//! before any parallel work is dispatched.

use crate::rng::SamplerRng;

/// Converts a uniform draw in [0, 1) into an engine seed.
///
/// Computes `floor(u * u64::MAX)`; the cast saturates at `u64::MAX`
/// for draws close enough to 1 that the product rounds up to 2^64.
///
/// # Examples
///
/// ```rust
/// use sampler_core::seed::seed_from_uniform;
///
/// assert_eq!(seed_from_uniform(0.0), 0);
/// assert_eq!(seed_from_uniform(0.5), (0.5 * u64::MAX as f64) as u64);
/// ```
#[inline]
pub fn seed_from_uniform(u: f64) -> u64 {
    (u * u64::MAX as f64) as u64
}

/// Derives seeds for workers 1..W-1 from the master engine.
///
/// Draws `workers - 1` uniforms from `master`, strictly serially, and
/// returns the corresponding seeds in worker order. The master engine
/// is advanced by `workers - 1` draws as a side effect; that
/// advancement is intentional and part of the reproducible contract.
///
/// `workers == 1` (or 0) derives nothing and leaves `master` untouched.
pub fn derive_worker_seeds(master: &mut SamplerRng, workers: usize) -> Vec<u64> {
    let extra = workers.saturating_sub(1);
    let mut seeds = Vec::with_capacity(extra);
    for _ in 0..extra {
        seeds.push(seed_from_uniform(master.next_uniform()));
    }
    seeds
}

/// Builds the full set of worker engines for a generation run.
///
/// Engine 0 is seeded with the master seed and already advanced by the
/// seed derivation; engines 1..W-1 are freshly seeded with the derived
/// seeds. The returned vector has length `workers` and each engine is
/// meant to be handed off to exactly one worker.
///
/// Callers validate `workers >= 1` before reaching this point.
pub fn build_engines(seed: u64, workers: usize) -> Vec<SamplerRng> {
    let mut master = SamplerRng::from_seed(seed);
    let derived = derive_worker_seeds(&mut master, workers);

    let mut engines = Vec::with_capacity(workers);
    engines.push(master);
    engines.extend(derived.into_iter().map(SamplerRng::from_seed));
    engines
}
