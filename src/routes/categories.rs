use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use kochchef_menu::{Category, CategoryInput, Dish, DishInput};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, error::AppError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDishInput {
    pub from: String,
    pub to: String,
    pub id: i64,
    #[serde(flatten)]
    pub dish: DishInput,
}

/// POST /api/categories
pub async fn post_category(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = state
        .menu
        .lock()
        .await
        .add_category(input)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
pub async fn put_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Value>, AppError> {
    let updated = state
        .menu
        .lock()
        .await
        .update_category(&id, input)?;

    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /api/categories/{id} - Refused with 409 while dishes remain
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = state.menu.lock().await.delete_category(&id)?;

    Ok(Json(json!({ "deleted": deleted })))
}

/// POST /api/categories/{id}/dishes
pub async fn post_dish(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(input): Json<DishInput>,
) -> Result<(StatusCode, Json<Dish>), AppError> {
    let dish = state.menu.lock().await.add_dish(&category_id, input)?;

    Ok((StatusCode::CREATED, Json(dish)))
}

/// PUT /api/categories/{id}/dishes/{dish_id}
pub async fn put_dish(
    State(state): State<AppState>,
    Path((category_id, dish_id)): Path<(String, i64)>,
    Json(input): Json<DishInput>,
) -> Result<Json<Value>, AppError> {
    let updated = state
        .menu
        .lock()
        .await
        .update_dish(&category_id, input.into_dish(dish_id))?;

    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /api/categories/{id}/dishes/{dish_id}
pub async fn delete_dish(
    State(state): State<AppState>,
    Path((category_id, dish_id)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    let deleted = state
        .menu
        .lock()
        .await
        .delete_dish(&category_id, dish_id)?;

    Ok(Json(json!({ "deleted": deleted })))
}

/// POST /api/dishes/move - Move a dish to another category, saving its fields
pub async fn post_move_dish(
    State(state): State<AppState>,
    Json(input): Json<MoveDishInput>,
) -> Result<Json<Dish>, AppError> {
    let dish = state.menu.lock().await.move_dish(
        &input.from,
        &input.to,
        input.dish.into_dish(input.id),
    )?;

    Ok(Json(dish))
}
