use std::fmt;

/// Money is an integer quantity of the account's smallest unit.
/// Operation amounts are never negative; balances may be computed as any i64.
pub type Amount = i64;

/// Reject negative amounts before they reach a statement.
pub fn ensure_non_negative(amount: Amount) -> Result<Amount, NegativeAmountError> {
    if amount < 0 {
        return Err(NegativeAmountError(amount));
    }
    Ok(amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeAmountError(pub Amount);

impl fmt::Display for NegativeAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amount {} is negative", self.0)
    }
}

impl std::error::Error for NegativeAmountError {}
