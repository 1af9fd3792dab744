//! # Item Service Library
//!
//! An HTTP service over a collection of items, with a batch endpoint that marks every
//! stored item as processed on a bounded worker pool.
//!
//! - **[model]**: [`Item`](model::Item) and its validation rules
//! - **[item_actor]**: the item store, a [`ResourceActor`](actor_store::ResourceActor)
//! - **[clients]**: [`ItemClient`](clients::ItemClient) and the [`ItemRepository`](clients::ItemRepository) port
//! - **[processor]**: the concurrent process-all operation
//! - **[web]**: axum routes, extractors and error mapping
//! - **[lifecycle]**: [`ItemSystem`](lifecycle::ItemSystem), which starts and stops it all
//!
//! This library exposes the modules for the binary and for integration testing.

pub mod clients;
pub mod config;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod processor;
pub mod web;
