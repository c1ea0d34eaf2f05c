use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::create_test_app;

#[tokio::test]
async fn test_health_and_ready() {
    let app = create_test_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_menu_lists_every_dish_without_filters() {
    let app = create_test_app().await;

    let (status, body) = app.get("/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["visibleCount"], 11);
    assert_eq!(body["categories"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_menu_filters_combine() {
    let app = create_test_app().await;

    let (_, body) = app.get("/api/menu?veg=true&spicy=true").await;
    assert_eq!(body["visibleCount"], 1);
    assert_eq!(body["categories"][0]["dishes"][0]["name"], "Gemüsecurry");

    let (_, body) = app.get("/api/menu?category=desserts&q=STRUDEL").await;
    assert_eq!(body["visibleCount"], 1);
    assert_eq!(body["categories"][0]["id"], "desserts");

    let (_, body) = app.get("/api/menu?q=zimt").await;
    assert_eq!(body["categories"][0]["dishes"][0]["name"], "Apfelstrudel");

    let (_, body) = app.get("/api/menu?category=unbekannt").await;
    assert_eq!(body["visibleCount"], 0);
    assert!(body["categories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_stats() {
    let app = create_test_app().await;

    let (status, body) = app.get("/api/menu/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"totalDishes": 11, "categories": 4, "vegetarian": 8, "spicy": 3})
    );
}

#[tokio::test]
async fn test_export_is_an_attachment() {
    let app = create_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/menu/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.starts_with("attachment; filename=\"kochchef-menu-"));
    assert!(disposition.ends_with(".json\""));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("\n  \"categories\""));
}

#[tokio::test]
async fn test_import_rejects_documents_without_categories() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(Method::POST, "/api/menu/import", Some(json!({"dishes": []})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_format");

    let (_, body) = app.get("/api/menu/stats").await;
    assert_eq!(body["totalDishes"], 11);
}

#[tokio::test]
async fn test_import_replaces_menu() {
    let app = create_test_app().await;

    let menu = json!({
        "categories": [{
            "id": "suppen",
            "name": "Suppen",
            "icon": "🍲",
            "dishes": [{"id": 1, "name": "Tomatensuppe", "price": 5.0, "ingredients": "", "vegetarian": true, "spicy": false}]
        }],
        "lastUpdated": "2024-12-01"
    });

    let (status, body) = app
        .request(Method::POST, "/api/menu/import", Some(menu))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalDishes"], 1);

    let (_, body) = app.get("/api/menu").await;
    assert_eq!(body["categories"][0]["id"], "suppen");
    assert_ne!(body["lastUpdated"], "2024-12-01");
}

#[tokio::test]
async fn test_dish_crud() {
    let app = create_test_app().await;

    let (status, dish) = app
        .request(
            Method::POST,
            "/api/categories/desserts/dishes",
            Some(json!({"name": "Tiramisu", "price": 7.5, "ingredients": "Mascarpone", "vegetarian": true})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dish["name"], "Tiramisu");
    assert_eq!(dish["spicy"], false);
    let id = dish["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/categories/desserts/dishes/{id}"),
            Some(json!({"name": "Tiramisu Classico", "price": 8.0})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);

    let (_, body) = app.get("/api/menu?q=classico").await;
    assert_eq!(body["categories"][0]["dishes"][0]["price"], 8.0);

    let (_, body) = app
        .request(
            Method::DELETE,
            &format!("/api/categories/desserts/dishes/{id}"),
            None,
        )
        .await;
    assert_eq!(body["deleted"], true);

    let (_, body) = app
        .request(
            Method::DELETE,
            &format!("/api/categories/desserts/dishes/{id}"),
            None,
        )
        .await;
    assert_eq!(body["deleted"], false);
}

#[tokio::test]
async fn test_add_dish_to_missing_category_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/categories/suppen/dishes",
            Some(json!({"name": "Tomatensuppe", "price": 5.0})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_move_dish_between_categories() {
    let app = create_test_app().await;

    let (status, moved) = app
        .request(
            Method::POST,
            "/api/dishes/move",
            Some(json!({
                "from": "vorspeisen",
                "to": "hauptgerichte",
                "id": 2,
                "name": "Große Gulaschsuppe",
                "price": 9.9,
                "ingredients": "Rindfleisch, Paprika",
                "spicy": true
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["name"], "Große Gulaschsuppe");
    // id 2 is already taken in the target category
    assert_ne!(moved["id"], 2);

    let (_, body) = app.get("/api/menu?category=vorspeisen").await;
    assert_eq!(body["visibleCount"], 2);

    let (_, body) = app.get("/api/menu?category=hauptgerichte").await;
    assert_eq!(body["visibleCount"], 5);
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = create_test_app().await;

    let (status, category) = app
        .request(
            Method::POST,
            "/api/categories",
            Some(json!({"name": "Süße Träume"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["id"], "suesse-traeume");
    assert_eq!(category["icon"], "🍽️");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/categories",
            Some(json!({"name": "süße träume"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app
        .request(
            Method::PUT,
            "/api/categories/suesse-traeume",
            Some(json!({"name": "Naschwerk", "icon": "🍬"})),
        )
        .await;
    assert_eq!(body["updated"], true);

    let (_, body) = app
        .request(Method::DELETE, "/api/categories/suesse-traeume", None)
        .await;
    assert_eq!(body["deleted"], true);
}

#[tokio::test]
async fn test_delete_category_with_dishes_is_conflict() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(Method::DELETE, "/api/categories/desserts", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "category_not_empty");
    assert_eq!(body["count"], 2);

    let (_, body) = app.get("/api/menu/stats").await;
    assert_eq!(body["categories"], 4);
}

#[tokio::test]
async fn test_reset_discards_changes() {
    let app = create_test_app().await;

    app.request(
        Method::DELETE,
        "/api/categories/getraenke/dishes/1",
        None,
    )
    .await;
    let (_, body) = app.get("/api/menu/stats").await;
    assert_eq!(body["totalDishes"], 10);

    let (status, body) = app.request(Method::POST, "/api/menu/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalDishes"], 11);
}

#[tokio::test]
async fn test_weekly_view_for_given_day() {
    let app = create_test_app().await;

    let (status, body) = app.get("/api/weekly?today=2025-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["weekId"], "week-1");
    assert_eq!(body["state"]["selectedDay"], "wednesday");

    let view = &body["view"];
    assert_eq!(view["range"], "13. - 17. Januar 2025");
    assert_eq!(view["dishes"].as_array().unwrap().len(), 2);
    assert_eq!(view["days"][2]["isToday"], true);
    assert_eq!(view["days"][2]["dateLabel"], "15.01.");
    assert_eq!(view["days"][0]["name"], "Montag");
}

#[tokio::test]
async fn test_weekly_view_outside_any_week() {
    let app = create_test_app().await;

    let (status, body) = app.get("/api/weekly?today=2025-03-03").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["state"]["weekId"].is_null());
    assert!(body["view"].is_null());

    let (_, body) = app
        .get("/api/weekly?today=2025-03-03&week=week-2&day=friday")
        .await;
    assert_eq!(body["view"]["weekId"], "week-2");
    assert_eq!(body["view"]["selectedDay"], "friday");
    assert!(body["view"]["dishes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_weekly_rejects_malformed_date() {
    let app = create_test_app().await;

    let (status, _) = app.get("/api/weekly?today=15.01.2025").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_assign_dishes_to_day() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/weekly/weeks/week-2/days/monday",
            Some(json!({"dishes": [
                {"categoryId": "vorspeisen", "dishId": 1},
                {"categoryId": "hauptgerichte", "dishId": 2},
                {"categoryId": "vorspeisen", "dishId": 1}
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added"], 2);

    let (_, body) = app
        .get("/api/weekly?today=2025-01-20&day=monday")
        .await;
    let dishes = body["view"]["dishes"].as_array().unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0]["name"], "Bruschetta");
    assert_eq!(dishes[1]["name"], "Käsespätzle");
}

#[tokio::test]
async fn test_assign_errors() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/weekly/weeks/week-2/days/monday",
            Some(json!({"dishes": []})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "empty_selection");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/weekly/weeks/week-9/days/monday",
            Some(json!({"dishes": [{"categoryId": "vorspeisen", "dishId": 1}]})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/weekly/weeks/week-2/days/monday",
            Some(json!({"dishes": [{"categoryId": "vorspeisen", "dishId": 99}]})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_week_and_remove_day_dish() {
    let app = create_test_app().await;

    let (status, week) = app
        .request(
            Method::POST,
            "/api/weekly/weeks",
            Some(json!({"startDate": "2025-01-27"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(week["id"], "week-3");
    assert_eq!(week["endDate"], "2025-01-31");

    let (status, body) = app
        .request(Method::DELETE, "/api/weekly/weeks/week-1/days/monday/0", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], true);

    let (_, body) = app
        .get("/api/weekly?today=2025-01-13")
        .await;
    let dishes = body["view"]["dishes"].as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Wiener Schnitzel");

    let (status, _) = app
        .request(Method::DELETE, "/api/weekly/weeks/week-1/days/monday/5", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_changes_survive_a_restart() {
    let app = create_test_app().await;

    app.request(
        Method::POST,
        "/api/categories",
        Some(json!({"name": "Suppen", "icon": "🍲"})),
    )
    .await;

    let restarted = kochchef::AppState::new(
        std::sync::Arc::new(kochchef_shared::FileStorage::new(app.dir.path())),
        std::sync::Arc::new(kochchef::defaults::BundledDefaults),
    );
    restarted.load().await;

    let stats = restarted.menu.lock().await.stats().unwrap();
    assert_eq!(stats.categories, 5);
    assert!(app.state.weekly.lock().await.is_loaded());
}

#[tokio::test]
async fn test_dish_fields_are_validated() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/categories/desserts/dishes",
            Some(json!({"name": "", "price": 4.0})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/categories/desserts/dishes",
            Some(json!({"name": "Eis", "price": -2.0})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .request(Method::POST, "/api/categories", Some(json!({"name": ""})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn test_update_of_missing_dish_is_a_noop_even_with_blank_fields() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/categories/suppen/dishes/1",
            Some(json!({"name": "", "price": 1.0})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], false);
}

#[tokio::test]
async fn test_export_writes_whole_prices_like_javascript() {
    let app = create_test_app().await;

    app.request(
        Method::POST,
        "/api/categories/desserts/dishes",
        Some(json!({"name": "Eisbecher", "price": 12.0})),
    )
    .await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/menu/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("\"price\": 12,"));
    assert!(!text.contains("\"price\": 12.0"));
}

#[tokio::test]
async fn test_weekly_export_import_and_reset() {
    let app = create_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/weekly/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.starts_with("attachment; filename=\"kochchef-weekly-menu-"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let exported: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(exported["weeks"].as_array().unwrap().len(), 2);

    let (status, body) = app
        .request(Method::POST, "/api/weekly/import", Some(json!({"weeks": []})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weeks"], 0);

    let (status, body) = app
        .request(Method::POST, "/api/weekly/import", Some(json!({"days": []})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_format");

    let (status, body) = app.request(Method::POST, "/api/weekly/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weeks"], 2);
}
