use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money entering the account
    Deposit,
    /// Money leaving the account
    Withdraw,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single statement entry. Operations are immutable once appended;
/// they only disappear together with the customer that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Amount moved (never negative)
    pub amount: Amount,
    /// When the operation was recorded
    pub created_at: DateTime<Utc>,
    /// Free text, only carried by deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    pub fn deposit(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            created_at,
            description: None,
            kind: OperationKind::Deposit,
        }
    }

    pub fn withdraw(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            created_at,
            description: None,
            kind: OperationKind::Withdraw,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Signed contribution of this operation to the balance.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            OperationKind::Deposit => self.amount,
            OperationKind::Withdraw => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_operation_kind_display_matches_wire_name() {
        for kind in [OperationKind::Deposit, OperationKind::Withdraw] {
            let wire = serde_json::to_value(kind).unwrap();
            assert_eq!(wire, kind.to_string());
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(Operation::deposit(100, at_noon()).signed_amount(), 100);
        assert_eq!(Operation::withdraw(40, at_noon()).signed_amount(), -40);
    }

    #[test]
    fn test_deposit_serializes_with_type_and_description() {
        let op = Operation::deposit(100, at_noon()).with_description("salary");
        let json = serde_json::to_value(&op).unwrap();

        assert_eq!(json["type"], "deposit");
        assert_eq!(json["amount"], 100);
        assert_eq!(json["description"], "salary");
        assert_eq!(json["created_at"], "2024-03-10T12:00:00Z");
    }

    #[test]
    fn test_withdraw_omits_description() {
        let op = Operation::withdraw(40, at_noon());
        let json = serde_json::to_value(&op).unwrap();

        assert_eq!(json["type"], "withdraw");
        assert!(json.get("description").is_none());
    }
}
