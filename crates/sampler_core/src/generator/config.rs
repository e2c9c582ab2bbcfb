//! Generation run configuration.
//!
//! Immutable configuration validated at build time, in the same spirit
//! as the library's other value types: a fluent builder, accessor
//! methods and a `validate()` that owns every argument check.

use super::error::GenerateError;

/// Maximum number of workers allowed in one generation run.
///
/// Requests above this are rejected as invalid arguments; requests
/// above the available hardware parallelism but below this ceiling are
/// fine — the partition contract is logical, and rayon is free to
/// multiplex W workers onto fewer threads.
pub const MAX_WORKERS: usize = 32_768;

/// How the partitioned fill is executed.
///
/// Both modes run the identical seeding and partition logic and
/// produce bit-for-bit identical output; `Serial` exists for
/// environments without a parallel facility and for verifying that
/// scheduling never leaks into the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Fill disjoint worker regions on the rayon thread pool.
    #[default]
    Parallel,

    /// Fill worker regions one after another, in worker-index order.
    Serial,
}

/// Immutable configuration for one generation run.
///
/// Use [`GeneratorConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .draws(10_000)
///     .workers(4)
///     .seed(22)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.draws(), 10_000);
/// assert_eq!(config.workers(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Total number of draws to produce.
    draws: usize,
    /// Number of logical workers.
    workers: usize,
    /// Master seed for the run.
    seed: u64,
    /// Parallel or serial execution of the fill phase.
    mode: ExecutionMode,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the total number of draws.
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the logical worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the master seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the execution mode of the fill phase.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidWorkerCount`] if `workers` is 0
    /// or greater than [`MAX_WORKERS`]. Any number of draws, including
    /// zero, is valid.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(GenerateError::InvalidWorkerCount(
                i64::try_from(self.workers).unwrap_or(i64::MAX),
            ));
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
///
/// `draws` and `workers` are required; `seed` defaults to 0 and `mode`
/// to [`ExecutionMode::Parallel`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    draws: Option<usize>,
    workers: Option<usize>,
    seed: u64,
    mode: ExecutionMode,
}

impl GeneratorConfigBuilder {
    /// Sets the total number of draws to produce.
    #[inline]
    pub fn draws(mut self, draws: usize) -> Self {
        self.draws = Some(draws);
        self
    }

    /// Sets the logical worker count.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the master seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the execution mode of the fill phase.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingField`] if `draws` or `workers`
    /// was never set, or [`GenerateError::InvalidWorkerCount`] if the
    /// worker count fails validation.
    pub fn build(self) -> Result<GeneratorConfig, GenerateError> {
        let draws = self
            .draws
            .ok_or(GenerateError::MissingField { field: "draws" })?;
        let workers = self
            .workers
            .ok_or(GenerateError::MissingField { field: "workers" })?;

        let config = GeneratorConfig {
            draws,
            workers,
            seed: self.seed,
            mode: self.mode,
        };

        config.validate()?;
        Ok(config)
    }
}
