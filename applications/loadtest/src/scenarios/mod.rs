//! Load-test scenarios

mod insert;
mod point;
mod range;

pub use insert::{bulk_insert, seed, InsertReport};
pub use point::{point_select, PointOptions};
pub use range::{range_select, RangeOptions};

use crate::error::Result;
use crate::stats::LatencyStats;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// Outcome of a concurrent scenario
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Wall time of each worker, in completion order
    pub worker_times: Vec<Duration>,
    /// Wall time of the whole run
    pub total: Duration,
    pub stats: Option<LatencyStats>,
}

/// Run `connections` copies of `worker` concurrently and time each one
///
/// Every worker receives its index. The first worker error aborts the
/// remaining workers and is returned.
pub(crate) async fn run_workers<F, Fut>(connections: usize, worker: F) -> Result<RunReport>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let started = Instant::now();
    let mut workers = JoinSet::new();

    for index in 0..connections {
        let task = worker(index);
        workers.spawn(async move {
            let worker_started = Instant::now();
            task.await?;
            Ok::<_, crate::error::LoadTestError>(worker_started.elapsed())
        });
    }

    let mut worker_times = Vec::with_capacity(connections);
    while let Some(joined) = workers.join_next().await {
        // Dropping the JoinSet on early return aborts the rest
        worker_times.push(joined??);
    }

    let stats = LatencyStats::from_durations(&worker_times);

    Ok(RunReport {
        worker_times,
        total: started.elapsed(),
        stats,
    })
}
