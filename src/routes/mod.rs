mod categories;
mod health;
mod menu;
mod weekly;

pub use categories::*;
pub use health::*;
pub use menu::*;
pub use weekly::*;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/menu", get(get_menu))
        .route("/api/menu/stats", get(get_menu_stats))
        .route("/api/menu/export", get(get_menu_export))
        .route("/api/menu/import", post(post_menu_import))
        .route("/api/menu/reset", post(post_menu_reset))
        .route("/api/categories", post(post_category))
        .route(
            "/api/categories/{id}",
            put(put_category).delete(delete_category),
        )
        .route("/api/categories/{id}/dishes", post(post_dish))
        .route(
            "/api/categories/{id}/dishes/{dish_id}",
            put(put_dish).delete(delete_dish),
        )
        .route("/api/dishes/move", post(post_move_dish))
        .route("/api/weekly", get(get_weekly))
        .route("/api/weekly/export", get(get_weekly_export))
        .route("/api/weekly/import", post(post_weekly_import))
        .route("/api/weekly/reset", post(post_weekly_reset))
        .route("/api/weekly/weeks", post(post_week))
        .route("/api/weekly/weeks/{id}/days/{day}", post(post_day_dishes))
        .route(
            "/api/weekly/weeks/{id}/days/{day}/{index}",
            axum::routing::delete(delete_day_dish),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
