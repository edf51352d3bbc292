use super::{run_workers, RunReport};
use crate::error::{LoadTestError, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;
use userbase_client::UsersClient;

#[derive(Debug, Clone, Copy)]
pub struct PointOptions {
    /// Concurrent workers
    pub connections: usize,
    /// Ids `1..records` are assumed to exist
    pub records: i64,
    /// Exact number of sequential reads issued by each worker
    pub requests: usize,
}

/// Every worker reads `requests` random users one at a time and checks
/// that each returned name contains its id
pub async fn point_select(client: &UsersClient, options: PointOptions) -> Result<RunReport> {
    let PointOptions {
        connections,
        records,
        requests,
    } = options;

    if records <= 1 {
        return Err(LoadTestError::InvalidOptions(format!(
            "need at least 2 records, got {}",
            records
        )));
    }

    run_workers(connections, |worker| {
        let client = client.clone();
        async move {
            let mut rng = StdRng::from_entropy();

            for request in 0..requests {
                let id = rng.gen_range(1..records);
                let user = client
                    .get_user(id)
                    .await?
                    .ok_or(LoadTestError::MissingUser(id))?;

                let name = match user.name {
                    Some(name) if name.contains(&id.to_string()) => name,
                    name => return Err(LoadTestError::NameMismatch { id, name }),
                };

                if request % 1000 == 0 {
                    debug!(worker, request, id, name = %name, "Point request complete");
                }
            }

            Ok(())
        }
    })
    .await
}
