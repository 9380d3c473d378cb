//! Throughput experiment for the connection pool.
//!
//! Issues a fixed number of trivial counting queries across a sweep of
//! worker-pool sizes and times each sweep point. Every query leases its
//! own pooled connection; the r2d2 guard returns it to the pool when the
//! call finishes, whether it succeeded or failed. Workers beyond the pool
//! size therefore queue on the pool, which is exactly the contention the
//! experiment measures.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use crate::db::repositories::UserRepository;
use crate::db::DbPool;

/// Worker counts to sweep, bracketing the pool size from both sides.
pub const THREAD_SWEEP: [usize; 7] = [1, 2, 4, 8, 10, 16, 32];

#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub threads: usize,
    pub requests: usize,
    pub duration_secs: f64,
}

/// Run the full sweep, issuing `total_requests` counting queries at each
/// point, and report wall-clock duration per worker count.
pub fn run_experiment(pool: &DbPool, total_requests: usize) -> Result<Vec<SweepPoint>> {
    let mut points = Vec::with_capacity(THREAD_SWEEP.len());

    for &threads in &THREAD_SWEEP {
        let duration_secs = time_sweep_point(pool, threads, total_requests)?;
        tracing::info!(threads, total_requests, duration_secs, "benchmark sweep point");
        points.push(SweepPoint {
            threads,
            requests: total_requests,
            duration_secs,
        });
    }

    Ok(points)
}

/// The sweep point with the lowest wall-clock duration.
pub fn best_point(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points
        .iter()
        .min_by(|a, b| a.duration_secs.total_cmp(&b.duration_secs))
}

fn time_sweep_point(pool: &DbPool, threads: usize, total_requests: usize) -> Result<f64> {
    let started = Instant::now();

    let results: Vec<Result<()>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                // Spread the remainder over the first workers so every
                // request is issued exactly once.
                let share =
                    total_requests / threads + usize::from(worker < total_requests % threads);
                let repo = UserRepository::new(pool.clone());
                scope.spawn(move || -> Result<()> {
                    for _ in 0..share {
                        repo.count()?;
                    }
                    Ok(())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("benchmark worker panicked"))
            .collect()
    });

    for result in results {
        result?;
    }

    Ok(started.elapsed().as_secs_f64())
}
