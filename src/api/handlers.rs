use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::domain::{Customer, Operation};

use super::dto::{
    AccountCreatedResponse, AccountUpdatedResponse, BalanceResponse, CreateAccountRequest,
    DepositRequest, HealthResponse, StatementDateQuery, UpdateAccountRequest, WithdrawRequest,
    WithdrawResponse,
};
use super::{ApiError, AppState};

/// Header carrying the caller's tax id.
pub const TAX_ID_HEADER: &str = "tax_id";

/// Header name used by older clients.
pub const LEGACY_TAX_ID_HEADER: &str = "cpf_cnpj";

/// Read the tax id identifying the account a request refers to.
pub fn tax_id_from_headers(headers: &HeaderMap) -> Option<&str> {
    [TAX_ID_HEADER, LEGACY_TAX_ID_HEADER]
        .into_iter()
        .find_map(|name| headers.get(name).and_then(|v| v.to_str().ok()))
}

// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        accounts: state.service.repository().len().await,
    })
}

// POST /account
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountCreatedResponse>), ApiError> {
    let Json(request) = payload?;

    let customer = state
        .service
        .create_account(request.tax_id.as_deref(), request.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountCreatedResponse {
            id: customer.id,
            message: "Customer created".to_string(),
        }),
    ))
}

// GET /account
pub async fn get_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .service
        .get_account(tax_id_from_headers(&headers))
        .await?;
    Ok(Json(customer))
}

// PUT /account
pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<AccountUpdatedResponse>, ApiError> {
    // An unknown account wins over a malformed body
    let customer = state
        .service
        .resolve_account(tax_id_from_headers(&headers))
        .await?;
    let Json(request) = payload?;

    let customer = state.service.rename(&customer, request.name).await?;

    Ok(Json(AccountUpdatedResponse {
        message: "Customer updated".to_string(),
        customer,
    }))
}

// DELETE /account
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_account(tax_id_from_headers(&headers))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /account/balance
pub async fn get_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state
        .service
        .get_balance(tax_id_from_headers(&headers))
        .await?;
    Ok(Json(BalanceResponse { balance }))
}

// GET /statement
pub async fn get_statement(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let statement = state
        .service
        .get_statement(tax_id_from_headers(&headers))
        .await?;
    Ok(Json(statement))
}

// GET /statement/date?date=YYYY-MM-DD
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let statement = state
        .service
        .get_statement_by_date(tax_id_from_headers(&headers), query.date.as_deref())
        .await?;
    Ok(Json(statement))
}

// POST /deposit
pub async fn deposit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let customer = state
        .service
        .resolve_account(tax_id_from_headers(&headers))
        .await?;
    let Json(request) = payload?;

    let statement = state
        .service
        .deposit_to(&customer, request.amount, request.description)
        .await?;
    Ok(Json(statement))
}

// POST /withdraw
pub async fn withdraw(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WithdrawResponse>), ApiError> {
    let customer = state
        .service
        .resolve_account(tax_id_from_headers(&headers))
        .await?;
    let Json(request) = payload?;

    let result = state.service.withdraw_from(&customer, request.amount).await?;

    Ok((
        StatusCode::CREATED,
        Json(WithdrawResponse {
            balance: result.balance,
            message: "Withdraw success".to_string(),
        }),
    ))
}
