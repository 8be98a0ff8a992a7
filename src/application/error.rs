use thiserror::Error;

use crate::domain::Amount;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Customer already exists")]
    CustomerAlreadyExists(String),

    #[error("CPF/CNPJ is required")]
    TaxIdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Amount is required")]
    AmountRequired,

    #[error("Amount must not be negative")]
    InvalidAmount(Amount),

    #[error("Amount too large")]
    AmountTooLarge { balance: Amount, requested: Amount },

    #[error("Insufficient funds")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Account not empty")]
    AccountNotEmpty { balance: Amount },

    #[error("Date is required")]
    DateRequired,

    #[error("Invalid date")]
    InvalidDate(String),

    #[error("Statement not found")]
    StatementNotFound,
}
