//! # Worker Pool
//!
//! A fixed number of long-lived worker tasks servicing one unbounded FIFO queue.
//!
//! The pool follows the same split as [`ResourceActor`](crate::ResourceActor): the
//! [`WorkerPool`] half owns the workers and the shutdown switch, while the cheap,
//! cloneable [`PoolClient`] half submits jobs. Each submission returns a [`JobHandle`]
//! that resolves once the job reaches a terminal state.
//!
//! ```text
//!  PoolClient::submit ──► [ unbounded FIFO queue ] ──► worker 0 ─┐
//!                                                 ├──► worker 1 ─┼─► JobHandle (oneshot)
//!                                                 └──► worker N ─┘
//! ```
//!
//! * **Bounded parallelism** – at most `size` jobs run at once; the rest wait in order.
//! * **Non-blocking submit** – the queue is unbounded, so `submit` never waits on saturation.
//! * **Isolation** – every job runs in its own Tokio task; a panic is reported through the
//!   handle as [`PoolError::JobFailed`] and the worker keeps serving the queue.
//! * **Cooperative cancellation** – jobs receive a [`CancelSignal`] that fires on
//!   [`WorkerPool::shutdown`] (or when the `WorkerPool` is dropped).

use crate::error::PoolError;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// The owning half of the pool. Keep it alive for as long as jobs should run.
pub struct WorkerPool {
    cancel: watch::Sender<bool>,
    workers: Vec<JoinHandle<()>>,
}

/// The submitting half of the pool. Cloning is cheap.
#[derive(Clone)]
pub struct PoolClient {
    sender: mpsc::UnboundedSender<Job>,
    cancel: watch::Receiver<bool>,
    active: Arc<AtomicUsize>,
    size: usize,
}

/// Handle to the eventual result of a submitted job.
pub struct JobHandle<T> {
    response: oneshot::Receiver<Result<T, PoolError>>,
}

/// Cancellation signal handed to every job.
///
/// The signal is raised by [`WorkerPool::shutdown`]. Dropping the [`WorkerPool`] without
/// shutting it down raises it as well.
#[derive(Clone)]
pub struct CancelSignal {
    receiver: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow() || self.receiver.has_changed().is_err()
    }

    /// Completes once cancellation has been requested.
    pub async fn cancelled(&mut self) {
        // An Err means the pool itself is gone, which counts as cancellation.
        let _ = self.receiver.wait_for(|cancelled| *cancelled).await;
    }
}

impl WorkerPool {
    /// Starts `size` workers and returns the pool together with its client.
    ///
    /// A `size` of zero is treated as one.
    pub fn spawn(size: usize) -> (Self, PoolClient) {
        let size = size.max(1);
        let (sender, receiver) = mpsc::unbounded_channel::<Job>();
        let (cancel, cancel_rx) = watch::channel(false);
        let queue = Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|worker| tokio::spawn(run_worker(worker, queue.clone(), cancel_rx.clone())))
            .collect();
        info!(size, "Worker pool started");

        let client = PoolClient {
            sender,
            cancel: cancel_rx,
            active: Arc::new(AtomicUsize::new(0)),
            size,
        };
        (Self { cancel, workers }, client)
    }

    /// Raises the cancel signal, lets the workers drain what is already queued, and waits
    /// for every worker to exit. A failed worker does not stop the wait; the first failure
    /// is reported once all of them are done.
    ///
    /// Queued jobs still run, but observe the raised signal. Jobs submitted afterwards
    /// resolve to [`PoolError::Closed`].
    pub async fn shutdown(self) -> Result<(), PoolError> {
        info!(workers = self.workers.len(), "Shutting down worker pool");
        self.cancel.send_replace(true);

        let mut first_failure = None;
        for handle in self.workers {
            if let Err(e) = handle.await {
                error!("Worker task failed: {:?}", e);
                first_failure.get_or_insert(PoolError::WorkerFailed(e.to_string()));
            }
        }

        match first_failure {
            Some(failure) => Err(failure),
            None => {
                info!("Worker pool shutdown complete");
                Ok(())
            }
        }
    }
}

impl PoolClient {
    /// Queues a job. Never blocks.
    ///
    /// `task` is called immediately with the pool's [`CancelSignal`]; the future it returns is
    /// run by the next free worker.
    pub fn submit<F, Fut, T>(&self, task: F) -> JobHandle<T>
    where
        F: FnOnce(CancelSignal) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        let future = task(CancelSignal {
            receiver: self.cancel.clone(),
        });
        let active = self.active.clone();

        let job: Job = Box::pin(async move {
            active.fetch_add(1, Ordering::SeqCst);
            let outcome = tokio::spawn(future)
                .await
                .map_err(|e| PoolError::JobFailed(e.to_string()));
            active.fetch_sub(1, Ordering::SeqCst);
            let _ = respond_to.send(outcome);
        });

        if self.sender.send(job).is_err() {
            warn!("Worker pool closed, job rejected");
        }
        JobHandle { response }
    }

    /// Number of workers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of jobs currently running.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// `true` once every worker has exited.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<T> JobHandle<T> {
    /// Waits for the job to reach a terminal state.
    pub async fn join(self) -> Result<T, PoolError> {
        self.response.await.unwrap_or(Err(PoolError::Closed))
    }
}

async fn run_worker(
    worker: usize,
    queue: Arc<Mutex<mpsc::UnboundedReceiver<Job>>>,
    mut cancel: watch::Receiver<bool>,
) {
    debug!(worker, "Worker started");

    loop {
        let next = {
            let mut queue = queue.lock().await;
            tokio::select! {
                // Queued work wins over shutdown so the queue drains before workers exit.
                biased;
                job = queue.recv() => job,
                _ = cancel.wait_for(|cancelled| *cancelled) => None,
            }
        };

        match next {
            Some(job) => job.await,
            None => break,
        }
    }

    debug!(worker, "Worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_concurrency_never_exceeds_size() {
        let (_pool, client) = WorkerPool::spawn(4);
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let running = running.clone();
                let peak = peak.clone();
                client.submit(move |_| async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect();

        for handle in handles {
            handle.join().await.unwrap();
        }

        assert_eq!(peak.load(Ordering::SeqCst), 4);
        assert_eq!(client.active(), 0);
    }

    #[tokio::test]
    async fn test_single_worker_runs_jobs_in_submission_order() {
        let (_pool, client) = WorkerPool::spawn(1);
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..5)
            .map(|n| {
                let order = order.clone();
                client.submit(move |_| async move {
                    order.lock().unwrap().push(n);
                    n * 10
                })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.join().await.unwrap());
        }

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(results, vec![0, 10, 20, 30, 40]);
    }

    #[tokio::test]
    async fn test_panicking_job_does_not_kill_worker() {
        let (_pool, client) = WorkerPool::spawn(1);

        let failed = client.submit(|_| async { panic!("boom") }).join().await;
        assert!(matches!(failed, Err(PoolError::JobFailed(_))));

        let ok = client.submit(|_| async { 7 }).join().await;
        assert_eq!(ok, Ok(7));
    }

    #[tokio::test]
    async fn test_shutdown_cancels_waiting_jobs() {
        let (pool, client) = WorkerPool::spawn(2);

        let handle = client.submit(|mut cancel| async move {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(30)) => "finished",
                _ = cancel.cancelled() => "cancelled",
            }
        });

        // Let the job start before pulling the plug
        tokio::time::sleep(Duration::from_millis(20)).await;
        pool.shutdown().await.unwrap();

        assert_eq!(handle.join().await, Ok("cancelled"));
        assert!(client.is_closed());

        let late = client.submit(|_| async { 1 }).join().await;
        assert_eq!(late, Err(PoolError::Closed));
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_every_worker() {
        let (pool, client) = WorkerPool::spawn(4);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                client.submit(|mut cancel| async move {
                    tokio::select! {
                        _ = tokio::time::sleep(Duration::from_secs(30)) => false,
                        _ = cancel.cancelled() => true,
                    }
                })
            })
            .collect();

        tokio::time::sleep(Duration::from_millis(20)).await;
        pool.shutdown().await.unwrap();

        // The queue receiver is only dropped once the last worker has exited
        assert!(client.is_closed());
        assert_eq!(client.active(), 0);
        for handle in handles {
            assert_eq!(handle.join().await, Ok(true));
        }
    }

    #[tokio::test]
    async fn test_queued_jobs_observe_cancellation_on_shutdown() {
        let (pool, client) = WorkerPool::spawn(1);

        let blocker = client.submit(|mut cancel| async move { cancel.cancelled().await });
        let queued = client.submit(|cancel| async move { cancel.is_cancelled() });

        tokio::time::sleep(Duration::from_millis(20)).await;
        pool.shutdown().await.unwrap();

        blocker.join().await.unwrap();
        assert_eq!(queued.join().await, Ok(true));
    }
}
