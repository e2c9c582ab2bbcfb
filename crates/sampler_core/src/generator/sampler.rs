//! The partitioned generator itself.

use rayon::prelude::*;

use crate::partition::Partition;
use crate::rng::SamplerRng;
use crate::seed;

use super::config::{ExecutionMode, GeneratorConfig, MAX_WORKERS};
use super::error::GenerateError;

/// Deterministic partitioned uniform sampler.
///
/// Holds a validated [`GeneratorConfig`]; engines, seeds and the
/// partition are constructed fresh on every [`generate`] call, so the
/// sampler carries no state between runs and two calls with the same
/// configuration return identical sequences.
///
/// [`generate`]: ParallelSampler::generate
///
/// # Examples
///
/// ```rust
/// use sampler_core::generator::{GeneratorConfig, ParallelSampler};
///
/// let config = GeneratorConfig::builder()
///     .draws(13)
///     .workers(4)
///     .seed(22)
///     .build()
///     .unwrap();
///
/// let sampler = ParallelSampler::new(config);
/// let first = sampler.generate().unwrap();
/// let second = sampler.generate().unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct ParallelSampler {
    config: GeneratorConfig,
}

impl ParallelSampler {
    /// Creates a sampler from a validated configuration.
    #[inline]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces the configured number of uniform(0,1) draws.
    ///
    /// The output is the flat layout: one `Vec<f64>` of length
    /// `draws`, where position `offset_i + j` holds worker `i`'s
    /// `j`-th draw. Per-worker views can be recovered by slicing
    /// through [`Partition::ranges`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AllocationFailed`] if the output
    /// buffer cannot be reserved. Once the buffer exists the fill
    /// phase cannot fail.
    pub fn generate(&self) -> Result<Vec<f64>, GenerateError> {
        let n = self.config.draws();
        let workers = self.config.workers();

        let mut output: Vec<f64> = Vec::new();
        output
            .try_reserve_exact(n)
            .map_err(|_| GenerateError::AllocationFailed { requested: n })?;
        output.resize(n, 0.0);

        // Serial setup: seed derivation is a hard ordering barrier and
        // must complete before any parallel dispatch.
        let partition = Partition::split(n, workers);
        let mut engines = seed::build_engines(self.config.seed(), workers);

        match self.config.mode() {
            ExecutionMode::Parallel => fill_parallel(&partition, &mut engines, &mut output),
            ExecutionMode::Serial => fill_serial(&partition, &mut engines, &mut output),
        }

        Ok(output)
    }
}

/// Splits the output buffer into one mutable sub-slice per worker,
/// following the partition in worker-index order.
fn split_output<'a>(partition: &Partition, output: &'a mut [f64]) -> Vec<&'a mut [f64]> {
    let mut chunks = Vec::with_capacity(partition.workers());
    let mut rest = output;
    for i in 0..partition.workers() {
        let (chunk, tail) = rest.split_at_mut(partition.count(i));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Parallel fill: each (chunk, engine) pair runs independently on the
/// rayon pool. Chunks are disjoint and engines unshared, so the phase
/// needs no synchronisation.
fn fill_parallel(partition: &Partition, engines: &mut [SamplerRng], output: &mut [f64]) {
    split_output(partition, output)
        .into_par_iter()
        .zip(engines.par_iter_mut())
        .for_each(|(chunk, engine)| engine.fill_uniform(chunk));
}

/// Serial fallback: the identical partition and engines, filled in
/// worker-index order. Bit-for-bit identical to the parallel path.
fn fill_serial(partition: &Partition, engines: &mut [SamplerRng], output: &mut [f64]) {
    for (chunk, engine) in split_output(partition, output).into_iter().zip(engines) {
        engine.fill_uniform(chunk);
    }
}

/// Produces `n` uniform(0,1) draws across `workers` logical workers.
///
/// Deterministic for fixed `(n, workers, seed)`; see
/// [`ParallelSampler::generate`] for the layout contract.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidWorkerCount`] if `workers` is 0 or
/// above [`MAX_WORKERS`], or [`GenerateError::AllocationFailed`] if
/// the output buffer cannot be reserved.
///
/// # Examples
///
/// ```rust
/// use sampler_core::generate;
///
/// let draws = generate(13, 4, 22).unwrap();
/// assert_eq!(draws.len(), 13);
/// ```
pub fn generate(n: usize, workers: usize, seed: u64) -> Result<Vec<f64>, GenerateError> {
    let config = GeneratorConfig::builder()
        .draws(n)
        .workers(workers)
        .seed(seed)
        .build()?;
    ParallelSampler::new(config).generate()
}

/// Signed-argument boundary for [`generate`].
///
/// Mirrors the original external interface, where draw and worker
/// counts arrive as signed integers: `n < 0` and `workers < 1` are
/// rejected before any engine is touched.
///
/// # Errors
///
/// Returns [`GenerateError::NegativeDrawCount`] for `n < 0` and
/// [`GenerateError::InvalidWorkerCount`] for `workers < 1` or above
/// [`MAX_WORKERS`], plus anything [`generate`] itself can return.
pub fn generate_signed(n: i64, workers: i64, seed: u64) -> Result<Vec<f64>, GenerateError> {
    if n < 0 {
        return Err(GenerateError::NegativeDrawCount(n));
    }
    if workers < 1 || workers as u64 > MAX_WORKERS as u64 {
        return Err(GenerateError::InvalidWorkerCount(workers));
    }
    generate(n as usize, workers as usize, seed)
}
