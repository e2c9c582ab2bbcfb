//! End-to-end determinism tests for the partitioned generator.
//!
//! These tests pin down the public contract: for a fixed
//! `(n, workers, seed)` triple the output sequence is identical across
//! runs, across execution modes, and independent of how the rayon pool
//! happens to schedule the workers.

use sampler_core::generator::{ExecutionMode, GeneratorConfig, ParallelSampler};
use sampler_core::{generate, generate_signed, GenerateError, Partition, SamplerRng};

fn run(n: usize, workers: usize, seed: u64, mode: ExecutionMode) -> Vec<f64> {
    let config = GeneratorConfig::builder()
        .draws(n)
        .workers(workers)
        .seed(seed)
        .mode(mode)
        .build()
        .unwrap();
    ParallelSampler::new(config).generate().unwrap()
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_runs_reproduce_the_sequence() {
    let reference = generate(10_000, 4, 22).unwrap();
    for _ in 0..5 {
        assert_eq!(generate(10_000, 4, 22).unwrap(), reference);
    }
}

#[test]
fn serial_fallback_is_bit_identical_to_parallel() {
    for workers in 1..=9 {
        let parallel = run(4_001, workers, 22, ExecutionMode::Parallel);
        let serial = run(4_001, workers, 22, ExecutionMode::Serial);
        assert_eq!(parallel, serial, "workers={}", workers);
    }
}

#[test]
fn different_worker_counts_are_each_internally_deterministic() {
    // Sequences may differ between worker counts; each must still be
    // reproducible on its own.
    let w2_a = generate(1_000, 2, 22).unwrap();
    let w2_b = generate(1_000, 2, 22).unwrap();
    let w8_a = generate(1_000, 8, 22).unwrap();
    let w8_b = generate(1_000, 8, 22).unwrap();

    assert_eq!(w2_a, w2_b);
    assert_eq!(w8_a, w8_b);
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(generate(100, 4, 22).unwrap(), generate(100, 4, 23).unwrap());
}

// ============================================================================
// Output contract
// ============================================================================

#[test]
fn length_and_range_hold_across_shapes() {
    for &(n, w) in &[(0usize, 1usize), (1, 1), (12, 4), (13, 4), (1_000, 3), (17, 32)] {
        let draws = generate(n, w, 22).unwrap();
        assert_eq!(draws.len(), n, "n={} w={}", n, w);
        assert!(
            draws.iter().all(|v| (0.0..1.0).contains(v)),
            "out-of-range value for n={} w={}",
            n,
            w
        );
    }
}

#[test]
fn sample_mean_is_unbiased() {
    use approx::assert_abs_diff_eq;

    let draws = generate(100_000, 8, 22).unwrap();
    let mean = draws.iter().sum::<f64>() / draws.len() as f64;
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
}

#[test]
fn single_worker_equals_direct_serial_engine() {
    let draws = generate(500, 1, 22).unwrap();

    let mut engine = SamplerRng::from_seed(22);
    let expected: Vec<f64> = (0..500).map(|_| engine.next_uniform()).collect();
    assert_eq!(draws, expected);
}

#[test]
fn concrete_scenario_twelve_over_four() {
    let p = Partition::split(12, 4);
    assert_eq!(p.counts(), &[3, 3, 3, 3]);
    assert_eq!(p.offsets(), &[0, 3, 6, 9]);

    let reference = generate(12, 4, 22).unwrap();
    assert_eq!(reference.len(), 12);
    assert_eq!(generate(12, 4, 22).unwrap(), reference);
}

#[test]
fn concrete_scenario_thirteen_over_four() {
    let p = Partition::split(13, 4);
    assert_eq!(p.counts(), &[3, 3, 3, 4]);
    assert_eq!(p.offsets(), &[0, 3, 6, 9]);

    let reference = generate(13, 4, 22).unwrap();
    assert_eq!(reference.len(), 13);
    assert_eq!(generate(13, 4, 22).unwrap(), reference);

    // The first 9 values coincide with the 12-draw run: workers 0..2
    // have identical streams and counts in both partitions.
    let twelve = generate(12, 4, 22).unwrap();
    assert_eq!(&reference[..9], &twelve[..9]);
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn negative_arguments_fail_before_generation() {
    assert!(matches!(
        generate_signed(-1, 4, 22),
        Err(GenerateError::NegativeDrawCount(-1))
    ));
    assert!(matches!(
        generate_signed(10, 0, 22),
        Err(GenerateError::InvalidWorkerCount(0))
    ));
}

#[test]
fn zero_workers_fail_through_the_builder() {
    let result = GeneratorConfig::builder().draws(10).workers(0).build();
    assert!(matches!(result, Err(GenerateError::InvalidWorkerCount(0))));
}

// ============================================================================
// Property-based coverage
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Length, range and determinism for arbitrary valid inputs.
    #[test]
    fn prop_generate_contract(n in 0..20_000usize, workers in 1..32usize, seed in any::<u64>()) {
        let first = generate(n, workers, seed).unwrap();
        prop_assert_eq!(first.len(), n);
        for &v in &first {
            prop_assert!((0.0..1.0).contains(&v));
        }

        let second = generate(n, workers, seed).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The serial path always matches the parallel path exactly.
    #[test]
    fn prop_modes_agree(n in 0..5_000usize, workers in 1..16usize, seed in any::<u64>()) {
        let parallel = run(n, workers, seed, ExecutionMode::Parallel);
        let serial = run(n, workers, seed, ExecutionMode::Serial);
        prop_assert_eq!(parallel, serial);
    }
}
