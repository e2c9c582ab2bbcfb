//! # Partitioned Generator
//!
//! Orchestration of a generation run: validated configuration, serial
//! seed derivation, static partitioning and the parallel draw phase.
//!
//! # Execution model
//!
//! A run proceeds in two phases:
//!
//! 1. **Serial setup** — argument validation, output-buffer allocation,
//!    seed derivation and partition computation. Every failure mode of
//!    the generator lives here; nothing is partially computed when an
//!    error is returned.
//! 2. **Parallel fill** — the output buffer is split into disjoint
//!    per-worker sub-slices along the partition and each worker fills
//!    its own slice from its own engine. No locks, atomics or barriers:
//!    buffer ownership is partitioned, not shared, and engines are
//!    never aliased.
//!
//! The logical output order is defined purely by (worker index, draw
//! index within worker), so the result is bit-for-bit identical
//! whether the fill runs on a rayon pool or serially in worker-index
//! order ([`ExecutionMode::Serial`]).
//!
//! # Example
//!
//! ```rust
//! use sampler_core::generator::{GeneratorConfig, ParallelSampler};
//!
//! let config = GeneratorConfig::builder()
//!     .draws(10_000)
//!     .workers(4)
//!     .seed(22)
//!     .build()
//!     .unwrap();
//!
//! let draws = ParallelSampler::new(config).generate().unwrap();
//! assert_eq!(draws.len(), 10_000);
//! ```

pub mod config;
pub mod error;
pub mod sampler;

// Re-exports for convenient access
pub use config::{ExecutionMode, GeneratorConfig, GeneratorConfigBuilder, MAX_WORKERS};
pub use error::GenerateError;
pub use sampler::{generate, generate_signed, ParallelSampler};
