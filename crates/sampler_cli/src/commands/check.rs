//! Check command implementation
//!
//! Reports available hardware parallelism and generator limits.

use tracing::info;

use sampler_core::generator::MAX_WORKERS;

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking environment...");

    let cpus = num_cpus::get();
    let pool_threads = rayon::current_num_threads();

    println!("logical CPUs:       {}", cpus);
    println!("rayon pool threads: {}", pool_threads);
    println!("worker ceiling:     {}", MAX_WORKERS);
    println!();
    println!(
        "Worker counts above {} are multiplexed onto the pool; the output \
         for a given (draws, workers, seed) triple does not depend on it.",
        pool_threads
    );

    Ok(())
}
