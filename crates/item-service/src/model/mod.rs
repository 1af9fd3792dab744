//! Domain records served by the item service.

pub mod item;

pub use item::*;
