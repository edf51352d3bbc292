use crate::error::{LoadTestError, Result};
use std::time::{Duration, Instant};
use tracing::info;
use userbase_client::UsersClient;

/// Outcome of a bulk insert
#[derive(Debug, Clone)]
pub struct InsertReport {
    pub inserted: u64,
    pub elapsed: Duration,
}

/// POST `count` users named `Name 0`..`Name {count-1}` one after another,
/// then check the server's row count grew by exactly `count`
pub async fn bulk_insert(client: &UsersClient, count: u64) -> Result<InsertReport> {
    let before = client.count().await?;
    let started = Instant::now();

    for i in 0..count {
        client.create_user(&format!("Name {}", i)).await?;
        if i % 10_000 == 0 {
            info!(sent = i, "Insert progress");
        }
    }

    let elapsed = started.elapsed();
    let actual = client.count().await?;
    let expected = before + count as i64;
    if actual != expected {
        return Err(LoadTestError::CountMismatch { expected, actual });
    }

    Ok(InsertReport {
        inserted: count,
        elapsed,
    })
}

/// Fill an empty server with `Name 1`..`Name {records-1}` so that each id
/// matches the number in its name
pub async fn seed(client: &UsersClient, records: u64) -> Result<()> {
    let existing = client.count().await?;
    if existing != 0 {
        return Err(LoadTestError::InvalidOptions(format!(
            "seeding needs an empty table, found {} users",
            existing
        )));
    }

    info!(records = records.saturating_sub(1), "Seeding users");
    let started = Instant::now();

    for i in 1..records {
        client.create_user(&format!("Name {}", i)).await?;
        if i % 10_000 == 0 {
            info!(sent = i, "Seed progress");
        }
    }

    info!(elapsed_secs = started.elapsed().as_secs_f64(), "Seed complete");
    Ok(())
}
