use super::handlers::{
    ItemState, create_item, delete_item, get_item, list_items, process_items, update_item,
};
use crate::clients::ItemRepository;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Builds the `/api/items` router.
pub fn create_router<R: ItemRepository>(state: ItemState<R>) -> Router {
    Router::new()
        .route("/api/items", get(list_items::<R>).post(create_item::<R>))
        .route("/api/items/process", get(process_items::<R>))
        .route(
            "/api/items/{id}",
            get(get_item::<R>)
                .put(update_item::<R>)
                .delete(delete_item::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
