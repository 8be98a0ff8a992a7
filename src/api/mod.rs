//! HTTP interface of the ledger.
//!
//! | Method & Path          | Handler                             |
//! |------------------------|-------------------------------------|
//! | `POST /account`        | [`handlers::create_account`]        |
//! | `GET /account`         | [`handlers::get_account`]           |
//! | `PUT /account`         | [`handlers::update_account`]        |
//! | `DELETE /account`      | [`handlers::delete_account`]        |
//! | `GET /account/balance` | [`handlers::get_balance`]           |
//! | `GET /statement`       | [`handlers::get_statement`]         |
//! | `GET /statement/date`  | [`handlers::get_statement_by_date`] |
//! | `POST /deposit`        | [`handlers::deposit`]               |
//! | `POST /withdraw`       | [`handlers::withdraw`]              |
//! | `GET /health`          | [`handlers::health_check`]          |
//!
//! Account-scoped routes identify the account through the `tax_id` header.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::LedgerService;

pub use error::{ApiError, ErrorBody};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LedgerService>,
}

impl AppState {
    pub fn new(service: LedgerService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/account",
            post(handlers::create_account)
                .get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/account/balance", get(handlers::get_balance))
        .route("/statement", get(handlers::get_statement))
        .route("/statement/date", get(handlers::get_statement_by_date))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
