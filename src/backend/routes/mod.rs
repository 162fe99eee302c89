//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, welcome and fallback
//! ├── api_routes.rs   - User endpoints
//! └── book_routes.rs  - Book endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /` - Welcome document
//! - `POST /api/users/register` - User registration
//! - `POST /api/users/login` - User login
//! - `GET /api/books`, `GET /api/books/{id}` - Public reads
//! - `POST /api/books`, `PUT /api/books/{id}`, `DELETE /api/books/{id}` -
//!   require `Authorization: Bearer <token>`
//! - anything else - 404 `{"success": false, "message": "Route not found"}`

/// Main router creation
pub mod router;

/// User endpoint routes
pub mod api_routes;

/// Book endpoint routes
pub mod book_routes;

// Re-export commonly used functions
pub use router::create_router;
