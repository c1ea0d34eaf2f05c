use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use kochchef_menu::{CategoryFilter, MenuFilter, MenuStats, visible_dishes};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, error::AppError};

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub veg: bool,
    #[serde(default)]
    pub spicy: bool,
}

impl From<MenuQuery> for MenuFilter {
    fn from(value: MenuQuery) -> Self {
        let category = match value.category {
            Some(id) => id.parse().unwrap_or_default(),
            None => CategoryFilter::All,
        };

        MenuFilter {
            category,
            query: value.q.unwrap_or_default(),
            vegetarian_only: value.veg,
            spicy_only: value.spicy,
        }
    }
}

/// GET /api/menu - Visible dishes grouped by category
pub async fn get_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Value>, AppError> {
    let store = state.menu.lock().await;
    let menu = store.menu()?;
    let groups = visible_dishes(menu, &query.into());
    let visible_count = groups.iter().map(|g| g.dishes.len()).sum::<usize>();

    Ok(Json(json!({
        "categories": groups,
        "visibleCount": visible_count,
        "lastUpdated": menu.last_updated,
    })))
}

/// GET /api/menu/stats
pub async fn get_menu_stats(State(state): State<AppState>) -> Result<Json<MenuStats>, AppError> {
    Ok(Json(state.menu.lock().await.stats()?))
}

/// GET /api/menu/export - Pretty-printed menu as a download
pub async fn get_menu_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.menu.lock().await;
    let body = store.export_json()?;
    let disposition = format!("attachment; filename=\"{}\"", store.export_file_name()?);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/menu/import - Replace the whole menu with the request body
pub async fn post_menu_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<MenuStats>, AppError> {
    let mut store = state.menu.lock().await;
    let menu = store.import_json(&body)?;

    Ok(Json(MenuStats::of(menu)))
}

/// POST /api/menu/reset - Drop local changes and reload the defaults
pub async fn post_menu_reset(State(state): State<AppState>) -> Result<Json<MenuStats>, AppError> {
    let mut store = state.menu.lock().await;
    let menu = store.reset_to_default()?;

    Ok(Json(MenuStats::of(menu)))
}
