//! Thin translations from HTTP to [`ItemRepository`] calls.

use super::error::{ApiError, ApiResult};
use super::extract::{ItemIdPath, ValidJson};
use crate::clients::ItemRepository;
use crate::item_actor::ItemError;
use crate::model::{Item, ItemId};
use crate::processor::ItemProcessor;
use axum::{Json, extract::State, http::StatusCode};

/// Shared handler state.
#[derive(Clone)]
pub struct ItemState<R: ItemRepository> {
    pub repository: R,
    pub processor: ItemProcessor<R>,
}

impl<R: ItemRepository> ItemState<R> {
    pub fn new(repository: R, processor: ItemProcessor<R>) -> Self {
        Self {
            repository,
            processor,
        }
    }

    async fn existing(&self, id: ItemId) -> ApiResult<Item> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id).into())
    }
}

pub async fn list_items<R: ItemRepository>(
    State(state): State<ItemState<R>>,
) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(state.repository.list().await?))
}

pub async fn create_item<R: ItemRepository>(
    State(state): State<ItemState<R>>,
    ValidJson(mut item): ValidJson<Item>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    // Creation always inserts
    item.id = None;
    let saved = state.repository.save(item).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_item<R: ItemRepository>(
    State(state): State<ItemState<R>>,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<Json<Item>> {
    Ok(Json(state.existing(id).await?))
}

pub async fn update_item<R: ItemRepository>(
    State(state): State<ItemState<R>>,
    ItemIdPath(id): ItemIdPath,
    ValidJson(mut item): ValidJson<Item>,
) -> ApiResult<Json<Item>> {
    state.existing(id).await?;
    item.id = Some(id);
    Ok(Json(state.repository.save(item).await?))
}

pub async fn delete_item<R: ItemRepository>(
    State(state): State<ItemState<R>>,
    ItemIdPath(id): ItemIdPath,
) -> ApiResult<StatusCode> {
    state.existing(id).await?;
    state.repository.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn process_items<R: ItemRepository>(
    State(state): State<ItemState<R>>,
) -> ApiResult<Json<Vec<Item>>> {
    state
        .processor
        .process_all()
        .await
        .map(Json)
        .map_err(ApiError::from)
}
