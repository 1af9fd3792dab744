//! # HTTP Surface
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/items` | 200, `Item[]` | 500 |
//! | POST | `/api/items` | 201, `Item` | 400 |
//! | GET | `/api/items/{id}` | 200, `Item` | 400 |
//! | PUT | `/api/items/{id}` | 200, `Item` | 400 |
//! | DELETE | `/api/items/{id}` | 204 | 400 |
//! | GET | `/api/items/process` | 200, `Item[]` | 500, `[]` |
//!
//! Missing ids answer 400 with `{"error":"Item with ID <id> not found."}`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use handlers::ItemState;
pub use routes::create_router;
pub use server::serve;
