//! Request and response bodies.
//!
//! Request fields are all optional so that a missing value is reported by the
//! ledger's own validation instead of a deserialization failure.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Customer, CustomerId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(alias = "cpf_cnpj")]
    pub tax_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepositRequest {
    #[serde(alias = "ammount")]
    pub amount: Option<Amount>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawRequest {
    #[serde(alias = "ammount")]
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreatedResponse {
    pub id: CustomerId,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdatedResponse {
    pub message: String,
    pub customer: Customer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub balance: Amount,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub accounts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_accept_legacy_field_names() {
        let create: CreateAccountRequest =
            serde_json::from_str(r#"{"cpf_cnpj": "11122233344", "name": "Ana"}"#).unwrap();
        assert_eq!(create.tax_id.as_deref(), Some("11122233344"));

        let deposit: DepositRequest =
            serde_json::from_str(r#"{"ammount": 100, "description": "cash"}"#).unwrap();
        assert_eq!(deposit.amount, Some(100));
        assert_eq!(deposit.description.as_deref(), Some("cash"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let withdraw: WithdrawRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(withdraw.amount, None);

        let update: UpdateAccountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(update.name, None);
    }
}
