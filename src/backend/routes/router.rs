/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Welcome document at `/`
 * 2. User routes (register, login)
 * 3. Book routes (public reads, protected writes)
 * 4. JSON 404 fallback
 *
 * CORS is permissive and every request is traced.
 */
use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::book_routes::configure_book_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    let router = configure_api_routes(router);
    let router = configure_book_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Welcome document listing the endpoints
async fn welcome() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Welcome to the Book Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": {
                "register": "POST /api/users/register",
                "login": "POST /api/users/login"
            },
            "books": {
                "list": "GET /api/books",
                "get": "GET /api/books/:id",
                "create": "POST /api/books (auth)",
                "update": "PUT /api/books/:id (auth)",
                "delete": "DELETE /api/books/:id (auth)"
            }
        }
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Route not found" })),
    )
}
