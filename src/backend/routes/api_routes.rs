/**
 * User Route Handlers
 *
 * # Routes
 *
 * - `POST /api/users/register` - User registration
 * - `POST /api/users/login` - User login, returns a bearer token
 *
 * Both routes are public.
 */
use axum::{routing::post, Router};

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Configure user routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
}
