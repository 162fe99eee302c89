/**
 * Book Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/books` - List books
 * - `GET /api/books/{id}` - Get one book
 *
 * ## Protected (Authorization: Bearer <token>)
 * - `POST /api/books` - Create a book
 * - `PUT /api/books/{id}` - Update a book
 * - `DELETE /api/books/{id}` - Delete a book
 *
 * Protected routes sit behind `auth_middleware` via `route_layer`, so a
 * request without a valid token never reaches the handler.
 */
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::books::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure book routes
///
/// Takes the state to hand the token service to the auth layer.
pub fn configure_book_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public: Router<AppState> = Router::new()
        .route("/api/books", get(list_books))
        .route("/api/books/{id}", get(get_book));

    let protected: Router<AppState> = Router::new()
        .route("/api/books", post(create_book))
        .route("/api/books/{id}", put(update_book).delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    router.merge(public).merge(protected)
}
