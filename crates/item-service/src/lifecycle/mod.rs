//! # System Lifecycle & Orchestration
//!
//! Starts, wires, and stops the parts of the item service.
//!
//! ## The ItemSystem Pattern
//!
//! [`ItemSystem`] is the conductor:
//!
//! 1. **Actor Creation** - spawn the item actor and keep its join handle
//! 2. **Pool Creation** - start the process-wide worker pool once
//! 3. **Wiring** - hand the item client and a pool client to the [`ItemProcessor`](crate::processor::ItemProcessor)
//! 4. **Graceful Shutdown** - cancel batch jobs, drop clients, await the actor
//!
//! ```rust,no_run
//! use item_service::config::AppConfig;
//! use item_service::lifecycle::ItemSystem;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let system = ItemSystem::new(&config);
//!     item_service::web::serve(system.router(), &config.address()).await?;
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the pool** - raises the cancel signal; batch jobs still in their delay are skipped
//!    and never write
//! 2. **Drop all clients** - closes the actor's mailbox
//! 3. **Await completion** - the actor drains what is queued and exits
//!
//! Any router built from the system holds client clones; drop it (stop serving) before
//! calling [`ItemSystem::shutdown`], or the actor will not see its mailbox close.

pub mod item_system;

pub use item_system::*;
