use chrono::{DateTime, NaiveDate, Utc};

use super::{Amount, Operation};

/// Compute the balance of a statement.
/// Balance = sum of deposits - sum of withdrawals, saturating at the `Amount` bounds
pub fn compute_balance(statement: &[Operation]) -> Amount {
    statement
        .iter()
        .fold(0, |balance: Amount, operation| {
            balance.saturating_add(operation.signed_amount())
        })
}

/// Balance of a statement, or `None` if it does not fit in an `Amount`.
pub fn checked_balance(statement: &[Operation]) -> Option<Amount> {
    statement
        .iter()
        .try_fold(0, |balance: Amount, operation| {
            balance.checked_add(operation.signed_amount())
        })
}

/// Entries recorded on the given calendar day (UTC), in insertion order.
pub fn statement_on(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| op.created_at.date_naive() == date)
        .cloned()
        .collect()
}

/// Timestamp for the next entry of a statement: `now`, unless that would
/// place it before the last entry.
pub fn next_timestamp(statement: &[Operation], now: DateTime<Utc>) -> DateTime<Utc> {
    match statement.last() {
        Some(last) if last.created_at > now => last.created_at,
        _ => now,
    }
}
