//! # Partition
//!
//! Static assignment of output-index ranges to workers, computed once
//! in the serial setup phase before any parallel work is dispatched.
//!
//! Every worker gets `floor(n / workers)` draws; the remainder goes
//! entirely to the last worker. That tie-break biases load slightly
//! toward the last worker when `n` is not divisible by `workers`, and
//! is preserved deliberately: redistributing the remainder would change
//! the reproducible output for a given `(n, workers, seed)` triple.

use std::ops::Range;

/// Static per-worker (count, offset) split of a draw total.
///
/// Invariants, established at construction and relied on by the
/// parallel fill:
///
/// - counts sum to exactly the draw total;
/// - offsets are the exclusive prefix sum of counts in worker order;
/// - the per-worker ranges are disjoint and cover `[0, total)`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::Partition;
///
/// let p = Partition::split(13, 4);
/// assert_eq!(p.counts(), &[3, 3, 3, 4]);
/// assert_eq!(p.offsets(), &[0, 3, 6, 9]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    counts: Vec<usize>,
    offsets: Vec<usize>,
    total: usize,
}

impl Partition {
    /// Splits `n` draws across `workers` workers.
    ///
    /// Callers validate `workers >= 1` before reaching this point.
    pub fn split(n: usize, workers: usize) -> Self {
        let base = n / workers;
        let mut counts = vec![base; workers];
        let mut offsets = vec![0usize; workers];

        let mut sum = 0usize;
        for i in 0..workers {
            offsets[i] = sum;
            sum += counts[i];
        }

        // Remainder draws all land on the last worker.
        if sum < n {
            counts[workers - 1] += n - sum;
        }

        Self {
            counts,
            offsets,
            total: n,
        }
    }

    /// Returns the number of workers.
    #[inline]
    pub fn workers(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of draws across all workers.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns worker `i`'s draw count.
    #[inline]
    pub fn count(&self, i: usize) -> usize {
        self.counts[i]
    }

    /// Returns worker `i`'s position in the final output sequence.
    #[inline]
    pub fn offset(&self, i: usize) -> usize {
        self.offsets[i]
    }

    /// Returns all per-worker draw counts in worker order.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns all per-worker output offsets in worker order.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Iterates the disjoint output range of each worker, in worker
    /// order. Concatenated, the ranges cover `[0, total)` exactly.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.offsets
            .iter()
            .zip(&self.counts)
            .map(|(&offset, &count)| offset..offset + count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_split() {
        let p = Partition::split(12, 4);
        assert_eq!(p.counts(), &[3, 3, 3, 3]);
        assert_eq!(p.offsets(), &[0, 3, 6, 9]);
        assert_eq!(p.total(), 12);
    }

    #[test]
    fn remainder_goes_to_last_worker() {
        let p = Partition::split(13, 4);
        assert_eq!(p.counts(), &[3, 3, 3, 4]);
        assert_eq!(p.offsets(), &[0, 3, 6, 9]);
    }

    #[test]
    fn fewer_draws_than_workers() {
        let p = Partition::split(2, 4);
        assert_eq!(p.counts(), &[0, 0, 0, 2]);
        assert_eq!(p.offsets(), &[0, 0, 0, 0]);
    }

    #[test]
    fn zero_draws() {
        let p = Partition::split(0, 3);
        assert_eq!(p.counts(), &[0, 0, 0]);
        assert_eq!(p.total(), 0);
        assert!(p.ranges().all(|r| r.is_empty()));
    }

    #[test]
    fn single_worker_takes_everything() {
        let p = Partition::split(100, 1);
        assert_eq!(p.counts(), &[100]);
        assert_eq!(p.offsets(), &[0]);
    }

    #[test]
    fn ranges_are_contiguous() {
        let p = Partition::split(13, 4);
        let mut next_start = 0;
        for range in p.ranges() {
            assert_eq!(range.start, next_start);
            next_start = range.end;
        }
        assert_eq!(next_start, 13);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Counts sum to n and the excess is concentrated in the last
        /// worker: every worker holds floor(n/w) except the last, which
        /// holds floor(n/w) + n mod w.
        #[test]
        fn prop_partition_invariants(n in 0..1_000_000usize, workers in 1..256usize) {
            let p = Partition::split(n, workers);

            prop_assert_eq!(p.workers(), workers);
            prop_assert_eq!(p.counts().iter().sum::<usize>(), n);

            let base = n / workers;
            for i in 0..workers - 1 {
                prop_assert_eq!(p.count(i), base);
            }
            prop_assert_eq!(p.count(workers - 1), base + n % workers);

            // Offsets are the exclusive prefix sum of counts.
            let mut sum = 0;
            for i in 0..workers {
                prop_assert_eq!(p.offset(i), sum);
                sum += p.count(i);
            }
        }

        /// Ranges are disjoint and cover [0, n) in order.
        #[test]
        fn prop_ranges_cover_output(n in 0..100_000usize, workers in 1..64usize) {
            let p = Partition::split(n, workers);

            let mut cursor = 0;
            for range in p.ranges() {
                prop_assert_eq!(range.start, cursor);
                cursor = range.end;
            }
            prop_assert_eq!(cursor, n);
        }
    }
}
