use crate::clients::ItemClient;
use crate::config::AppConfig;
use crate::item_actor;
use crate::processor::ItemProcessor;
use crate::web::{ItemState, create_router};
use actor_store::{PoolError, WorkerPool};
use axum::Router;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running item service: store actor, worker pool, and batch processor.
pub struct ItemSystem {
    pub item_client: ItemClient,
    pub processor: ItemProcessor<ItemClient>,
    pool: WorkerPool,
    handles: Vec<JoinHandle<()>>,
}

impl ItemSystem {
    /// Spawns every component. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let (item_actor, item_client) = item_actor::new(config.mailbox_capacity);
        let item_handle = tokio::spawn(item_actor.run());

        let (pool, pool_client) = WorkerPool::spawn(config.workers);
        let processor = ItemProcessor::new(item_client.clone(), pool_client, config.task_delay());

        info!(
            workers = config.workers,
            task_delay_ms = config.task_delay_ms,
            "Item system started"
        );

        Self {
            item_client,
            processor,
            pool,
            handles: vec![item_handle],
        }
    }

    /// The HTTP router over this system.
    pub fn router(&self) -> Router {
        create_router(ItemState::new(
            self.item_client.clone(),
            self.processor.clone(),
        ))
    }

    /// Stops the pool, then the actor, and waits for both. The actor is awaited even when
    /// the pool reports a failure; that failure is returned afterwards.
    pub async fn shutdown(self) -> Result<(), PoolError> {
        info!("Shutting down item system");

        let pool_result = self.pool.shutdown().await;
        if let Err(e) = &pool_result {
            error!(error = %e, "Worker pool shutdown failed");
        }

        drop(self.item_client);
        drop(self.processor);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
            }
        }

        info!("Item system shutdown complete");
        pool_result
    }
}
