//! # Random Number Engine
//!
//! The pseudo-random engine used by every worker. One [`SamplerRng`]
//! instance exists per worker; each is owned exclusively by its worker
//! for the duration of a generation run, so no synchronisation is ever
//! required around engine state.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: engines are constructed from an explicit seed
//!   and the same seed always yields the same sequence.
//! - **Efficiency**: batch draws write into a caller-provided
//!   `&mut [f64]` with no allocation.
//! - **Static dispatch**: the engine is a concrete `StdRng`, not a
//!   `Box<dyn Rng>`.

mod prng;

pub use prng::SamplerRng;
