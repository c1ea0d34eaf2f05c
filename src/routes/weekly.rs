use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use kochchef_shared::{Error, iso_date, parse_date, today};
use kochchef_weekly::{DayKey, DishSelectionSet, ViewState, Week, project};
use serde::Deserialize;
use serde_json::{Value, json};
use time::Date;

use crate::{AppState, error::AppError};

#[derive(Debug, Default, Deserialize)]
pub struct WeeklyQuery {
    /// `YYYY-MM-DD`, defaults to the current date
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub day: Option<DayKey>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekInput {
    #[serde(with = "iso_date")]
    pub start_date: Date,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRef {
    pub category_id: String,
    pub dish_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DayDishesInput {
    pub dishes: Vec<DishRef>,
}

/// GET /api/weekly - Projected view of the current (or requested) week
pub async fn get_weekly(
    State(state): State<AppState>,
    Query(query): Query<WeeklyQuery>,
) -> Result<Json<Value>, AppError> {
    let today = match query.today.as_deref() {
        Some(value) => parse_date(value)?,
        None => today(),
    };

    let store = state.weekly.lock().await;
    let weeks = store.weeks()?;

    let mut view_state = ViewState::initial(weeks, today);
    if let Some(week) = query.week {
        view_state = view_state.select_week(week);
    }
    if let Some(day) = query.day {
        view_state = view_state.select_day(day);
    }

    let view = project(weeks, &view_state, today);

    Ok(Json(json!({
        "state": view_state,
        "view": view,
    })))
}

/// POST /api/weekly/weeks - Append an empty week starting on the given Monday
pub async fn post_week(
    State(state): State<AppState>,
    Json(input): Json<WeekInput>,
) -> Result<(StatusCode, Json<Week>), AppError> {
    let week = state.weekly.lock().await.add_week(input.start_date)?;

    Ok((StatusCode::CREATED, Json(week)))
}

/// POST /api/weekly/weeks/{id}/days/{day} - Add menu dishes to a day
pub async fn post_day_dishes(
    State(state): State<AppState>,
    Path((week_id, day)): Path<(String, DayKey)>,
    Json(input): Json<DayDishesInput>,
) -> Result<Json<Value>, AppError> {
    let menu_store = state.menu.lock().await;
    let menu = menu_store.menu()?;

    let mut selection = DishSelectionSet::new();
    for dish in &input.dishes {
        if menu.dish(&dish.category_id, dish.dish_id).is_none() {
            return Err(Error::NotFound(format!(
                "dish {} in category '{}'",
                dish.dish_id, dish.category_id
            ))
            .into());
        }

        if !selection.is_selected(&dish.category_id, dish.dish_id) {
            selection.toggle(&dish.category_id, dish.dish_id, menu);
        }
    }

    let added = state
        .weekly
        .lock()
        .await
        .assign(&week_id, day, &mut selection)?;

    Ok(Json(json!({ "added": added })))
}

/// DELETE /api/weekly/weeks/{id}/days/{day}/{index}
pub async fn delete_day_dish(
    State(state): State<AppState>,
    Path((week_id, day, index)): Path<(String, DayKey, usize)>,
) -> Result<Json<Value>, AppError> {
    let removed = state
        .weekly
        .lock()
        .await
        .remove_day_dish(&week_id, day, index)?;

    if !removed {
        return Err(AppError::BadRequest(format!(
            "no dish at position {index} on {day} of {week_id}"
        )));
    }

    Ok(Json(json!({ "removed": removed })))
}

/// GET /api/weekly/export - Pretty-printed plan as a download
pub async fn get_weekly_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.weekly.lock().await;
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

/// POST /api/weekly/import - Replace the whole plan with the request body
pub async fn post_weekly_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, AppError> {
    let mut store = state.weekly.lock().await;
    let weekly = store.import_json(&body)?;

    Ok(Json(json!({ "weeks": weekly.weeks.len() })))
}

/// POST /api/weekly/reset - Drop local changes and reload the default plan
pub async fn post_weekly_reset(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut store = state.weekly.lock().await;
    let weekly = store.reset_to_default()?;

    Ok(Json(json!({ "weeks": weekly.weeks.len() })))
}
