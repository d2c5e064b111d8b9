//! Database bootstrap, row models and unit-of-work plumbing

pub mod init;
pub mod models;
pub mod seed;
pub mod settings;

pub use init::*;
pub use models::*;
pub use seed::*;
pub use settings::*;

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// Deadline for a single all-or-nothing mutation
pub const UNIT_OF_WORK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a transactional mutation under [`UNIT_OF_WORK_TIMEOUT`].
///
/// The future is expected to begin a transaction, issue its statements and
/// commit. If it fails or the deadline passes, the future (and with it the
/// open `sqlx::Transaction`) is dropped, which rolls the transaction back.
pub async fn unit_of_work<T, F>(work: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    unit_of_work_within(UNIT_OF_WORK_TIMEOUT, work).await
}

/// [`unit_of_work`] with an explicit deadline
pub async fn unit_of_work_within<T, F>(deadline: Duration, work: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, work).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(format!(
            "unit of work exceeded {}ms and was rolled back",
            deadline.as_millis()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unit_of_work_passes_result_through() {
        let value = unit_of_work(async { Ok::<_, Error>(42) }).await.unwrap();
        assert_eq!(value, 42);

        let err = unit_of_work(async { Err::<(), _>(Error::NotFound("x".into())) })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_timed_out_transaction_rolls_back() {
        let pool = init_memory_database().await.unwrap();

        let deadline = Duration::from_millis(50);
        let result = unit_of_work_within(deadline, async {
            let mut tx = pool.begin().await?;
            sqlx::query(
                "INSERT INTO bands (name, nationality, number_of_members, date_formed, age, active)
                 VALUES ('Ghost', 'None', 1, '2000-01-01', 1, 1)",
            )
            .execute(&mut *tx)
            .await?;
            tokio::time::sleep(deadline * 4).await;
            tx.commit().await?;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(Error::Timeout(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bands WHERE name = 'Ghost'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "timed out insert must not be visible");
    }
}
