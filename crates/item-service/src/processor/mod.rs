//! # Batch Processor
//!
//! Marks every stored item as [`PROCESSED`](crate::model::PROCESSED), fanning the work
//! out over the shared [`WorkerPool`](actor_store::WorkerPool).
//!
//! ## One invocation
//!
//! 1. `find_all_ids` once. The captured id set is fixed for the rest of the call.
//! 2. One job per id, submitted in enumeration order.
//! 3. Each job: delay → `find_by_id` → set status → `save`.
//! 4. Wait for every job, then keep only the items that were written.
//!
//! ```text
//!   queued ──► running ──┬──► done     (item in the response)
//!                        └──► skipped  (vanished, store fault, cancelled, pool gone)
//! ```
//!
//! A skipped job is reported by omission only. The sole failure that reaches the caller is
//! the initial enumeration.

use crate::clients::ItemRepository;
use crate::item_actor::ItemError;
use crate::model::{Item, ItemId};
use actor_store::{CancelSignal, PoolClient, PoolError};
use futures::future::join_all;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Failure of the batch as a whole.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to enumerate items: {0}")]
    Enumerate(#[from] ItemError),
}

/// Why a job ended without writing its item.
#[derive(Debug)]
enum SkipReason {
    Vanished,
    StoreFault(ItemError),
    Cancelled,
    PoolUnavailable(PoolError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Vanished => write!(f, "item vanished"),
            SkipReason::StoreFault(e) => write!(f, "store fault: {e}"),
            SkipReason::Cancelled => write!(f, "cancelled"),
            SkipReason::PoolUnavailable(e) => write!(f, "pool unavailable: {e}"),
        }
    }
}

enum Outcome {
    Done(Item),
    Skipped(SkipReason),
}

/// Re-statuses every stored item on a bounded worker pool.
///
/// Cloning shares the repository handle and the pool; concurrent invocations
/// interleave their jobs on the same workers.
#[derive(Clone)]
pub struct ItemProcessor<R: ItemRepository> {
    repository: R,
    pool: PoolClient,
    task_delay: Duration,
}

impl<R: ItemRepository> ItemProcessor<R> {
    pub fn new(repository: R, pool: PoolClient, task_delay: Duration) -> Self {
        Self {
            repository,
            pool,
            task_delay,
        }
    }

    /// Processes every item present at enumeration time and returns those written.
    #[instrument(skip(self))]
    pub async fn process_all(&self) -> Result<Vec<Item>, ProcessError> {
        let ids = self.repository.find_all_ids().await?;
        let total = ids.len();
        debug!(total, workers = self.pool.size(), "Dispatching");

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let repository = self.repository.clone();
                let delay = self.task_delay;
                self.pool
                    .submit(move |cancel| process_one(repository, id, delay, cancel))
            })
            .collect();

        let outcomes = join_all(handles.into_iter().map(|handle| handle.join())).await;

        let mut processed = Vec::with_capacity(total);
        for (id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(Outcome::Done(item)) => processed.push(item),
                Ok(Outcome::Skipped(_)) => {}
                // The job never ran, so nothing logged it
                Err(e) => {
                    let reason = SkipReason::PoolUnavailable(e);
                    debug!(%id, %reason, "Skipped");
                }
            }
        }

        info!(
            total,
            processed = processed.len(),
            skipped = total - processed.len(),
            "Batch complete"
        );
        Ok(processed)
    }
}

async fn process_one<R: ItemRepository>(
    repository: R,
    id: ItemId,
    delay: Duration,
    cancel: CancelSignal,
) -> Outcome {
    let outcome = run_job(repository, id, delay, cancel).await;
    match &outcome {
        Outcome::Done(_) => debug!(%id, "Processed"),
        Outcome::Skipped(reason) => debug!(%id, %reason, "Skipped"),
    }
    outcome
}

async fn run_job<R: ItemRepository>(
    repository: R,
    id: ItemId,
    delay: Duration,
    mut cancel: CancelSignal,
) -> Outcome {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => return Outcome::Skipped(SkipReason::Cancelled),
        _ = tokio::time::sleep(delay) => {}
    }

    let mut item = match repository.find_by_id(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return Outcome::Skipped(SkipReason::Vanished),
        Err(e) => return Outcome::Skipped(SkipReason::StoreFault(e)),
    };

    item.mark_processed();
    match repository.save(item).await {
        Ok(saved) => Outcome::Done(saved),
        Err(ItemError::NotFound(_)) => Outcome::Skipped(SkipReason::Vanished),
        Err(e) => Outcome::Skipped(SkipReason::StoreFault(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_actor;
    use actor_store::WorkerPool;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn test_each_job_logs_its_own_outcome() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (actor, client) = item_actor::new(8);
        tokio::spawn(actor.run());
        let saved = client
            .save(Item::new("Lamp", "Desk lamp", "shop@example.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let (_pool, workers) = WorkerPool::spawn(1);
        let cancel = workers.submit(|cancel| async move { cancel }).join().await.unwrap();

        // Driven directly, without any batch around it
        let done = process_one(client.clone(), id, Duration::ZERO, cancel.clone()).await;
        assert!(matches!(done, Outcome::Done(_)));
        let vanished = process_one(client, ItemId(99), Duration::ZERO, cancel).await;
        assert!(matches!(vanished, Outcome::Skipped(SkipReason::Vanished)));

        let text = logs.text();
        assert!(text.contains("Processed"), "{text}");
        assert!(text.contains("id=99"), "{text}");
        assert!(text.contains("item vanished"), "{text}");
    }
}
