use super::{run_workers, RunReport};
use crate::error::{LoadTestError, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;
use userbase_client::UsersClient;

#[derive(Debug, Clone, Copy)]
pub struct RangeOptions {
    /// Concurrent workers
    pub connections: usize,
    /// Ids `1..records` are assumed to exist
    pub records: i64,
    /// Rows requested by each worker
    pub range: i64,
}

/// Every worker fetches `range` consecutive users from a random start
/// in `[1, records - range)`
pub async fn range_select(client: &UsersClient, options: RangeOptions) -> Result<RunReport> {
    let RangeOptions {
        connections,
        records,
        range,
    } = options;

    let upper = records
        .checked_sub(range)
        .filter(|upper| range > 0 && *upper > 1)
        .ok_or_else(|| {
            LoadTestError::InvalidOptions(format!(
                "need 0 < range < records - 1 (records = {}, range = {})",
                records, range
            ))
        })?;

    run_workers(connections, |worker| {
        let client = client.clone();
        async move {
            let start = StdRng::from_entropy().gen_range(1..upper);

            let users = client.get_range(start, range).await?;
            debug!(worker, start, rows = users.len(), "Range request complete");

            Ok(())
        }
    })
    .await
}
