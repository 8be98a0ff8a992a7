use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{
    checked_balance, compute_balance, ensure_non_negative, next_timestamp, statement_on, Amount,
    Clock, Customer, Operation, SystemClock,
};
use crate::storage::Repository;

use super::AppError;

/// Application service providing the account operations of the ledger.
/// This is the primary interface for any client (HTTP handlers, tests, etc.).
pub struct LedgerService {
    repo: Repository,
    clock: Arc<dyn Clock>,
}

/// Result of a successful withdrawal
#[derive(Debug, Clone)]
pub struct WithdrawResult {
    pub operation: Operation,
    pub balance: Amount,
}

impl LedgerService {
    /// Create a service over the given repository, timestamping with the wall clock.
    pub fn new(repo: Repository) -> Self {
        Self::with_clock(repo, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock.
    pub fn with_clock(repo: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    // ========================
    // Account resolution
    // ========================

    /// Resolve the customer an account-scoped request refers to.
    /// Every operation except account creation starts here.
    pub async fn resolve_account(&self, tax_id: Option<&str>) -> Result<Customer, AppError> {
        let Some(tax_id) = tax_id.map(str::trim).filter(|t| !t.is_empty()) else {
            debug!("Request without tax id");
            return Err(AppError::AccountNotFound);
        };

        match self.repo.find_by_tax_id(tax_id).await {
            Some(customer) => Ok(customer),
            None => {
                debug!("No account for the supplied tax id");
                Err(AppError::AccountNotFound)
            }
        }
    }

    // ========================
    // Account operations
    // ========================

    /// Open a new account with an empty statement.
    pub async fn create_account(
        &self,
        tax_id: Option<&str>,
        name: Option<String>,
    ) -> Result<Customer, AppError> {
        let tax_id = tax_id
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::TaxIdRequired)?;

        if self.repo.exists_by_tax_id(tax_id).await {
            warn!("Rejected account creation: tax id already registered");
            return Err(AppError::CustomerAlreadyExists(tax_id.to_string()));
        }

        let customer = Customer::new(tax_id, name.unwrap_or_default());

        // The store re-checks uniqueness under its write lock; losing that race
        // is the same outcome as the check above.
        if self.repo.insert(customer.clone()).await.is_err() {
            warn!("Rejected account creation: tax id registered concurrently");
            return Err(AppError::CustomerAlreadyExists(tax_id.to_string()));
        }

        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    /// Get the full customer record.
    pub async fn get_account(&self, tax_id: Option<&str>) -> Result<Customer, AppError> {
        self.resolve_account(tax_id).await
    }

    /// Rename the account holder.
    pub async fn update_account(
        &self,
        tax_id: Option<&str>,
        name: Option<String>,
    ) -> Result<Customer, AppError> {
        let customer = self.resolve_account(tax_id).await?;
        self.rename(&customer, name).await
    }

    /// Rename an already resolved account holder.
    pub async fn rename(
        &self,
        customer: &Customer,
        name: Option<String>,
    ) -> Result<Customer, AppError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(AppError::NameRequired)?;

        let updated = self
            .repo
            .update(&customer.tax_id, |c| {
                c.name = name;
                c.clone()
            })
            .await
            .ok_or(AppError::AccountNotFound)?;

        info!(customer_id = %updated.id, "Customer updated");
        Ok(updated)
    }

    /// Close an account. Only allowed once its balance is exactly zero.
    pub async fn delete_account(&self, tax_id: Option<&str>) -> Result<Customer, AppError> {
        let customer = self.resolve_account(tax_id).await?;

        let removed = self
            .repo
            .remove_where(&customer.tax_id, |c| {
                if !c.is_empty() {
                    return Err(AppError::AccountNotEmpty {
                        balance: c.balance(),
                    });
                }
                Ok(())
            })
            .await
            .ok_or(AppError::AccountNotFound)?;

        match removed {
            Ok(customer) => {
                info!(customer_id = %customer.id, "Customer deleted");
                Ok(customer)
            }
            Err(e) => {
                warn!(customer_id = %customer.id, "Refused to delete account: {}", e);
                Err(e)
            }
        }
    }

    // ========================
    // Statement operations
    // ========================

    /// Get every operation of the account, in insertion order.
    pub async fn get_statement(&self, tax_id: Option<&str>) -> Result<Vec<Operation>, AppError> {
        Ok(self.resolve_account(tax_id).await?.statement)
    }

    /// Get the operations recorded on a calendar day (`YYYY-MM-DD`).
    pub async fn get_statement_by_date(
        &self,
        tax_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<Operation>, AppError> {
        let customer = self.resolve_account(tax_id).await?;

        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(AppError::DateRequired)?;
        let day = parse_date(date)?;

        let entries = statement_on(&customer.statement, day);
        if entries.is_empty() {
            return Err(AppError::StatementNotFound);
        }

        Ok(entries)
    }

    /// Get the current balance.
    pub async fn get_balance(&self, tax_id: Option<&str>) -> Result<Amount, AppError> {
        let customer = self.resolve_account(tax_id).await?;
        Ok(compute_balance(&customer.statement))
    }

    // ========================
    // Money movements
    // ========================

    /// Record a deposit and return the updated statement.
    pub async fn deposit(
        &self,
        tax_id: Option<&str>,
        amount: Option<Amount>,
        description: Option<String>,
    ) -> Result<Vec<Operation>, AppError> {
        let customer = self.resolve_account(tax_id).await?;
        self.deposit_to(&customer, amount, description).await
    }

    /// Record a deposit on an already resolved account.
    /// Rejected if the resulting balance would not fit in an `Amount`.
    pub async fn deposit_to(
        &self,
        customer: &Customer,
        amount: Option<Amount>,
        description: Option<String>,
    ) -> Result<Vec<Operation>, AppError> {
        let amount = validate_amount(amount)?;
        let now = self.clock.now();

        let result = self
            .repo
            .update(&customer.tax_id, |c| {
                let balance = checked_balance(&c.statement);
                if balance.and_then(|b| b.checked_add(amount)).is_none() {
                    return Err(AppError::AmountTooLarge {
                        balance: c.balance(),
                        requested: amount,
                    });
                }

                let mut operation = Operation::deposit(amount, next_timestamp(&c.statement, now));
                if let Some(desc) = description {
                    operation = operation.with_description(desc);
                }
                c.statement.push(operation);
                Ok(c.statement.clone())
            })
            .await
            .ok_or(AppError::AccountNotFound)?;

        match &result {
            Ok(_) => info!(customer_id = %customer.id, amount, "Deposit recorded"),
            Err(e) => warn!(customer_id = %customer.id, amount, "Deposit rejected: {}", e),
        }
        result
    }

    /// Record a withdrawal if the balance covers it.
    pub async fn withdraw(
        &self,
        tax_id: Option<&str>,
        amount: Option<Amount>,
    ) -> Result<WithdrawResult, AppError> {
        let customer = self.resolve_account(tax_id).await?;
        self.withdraw_from(&customer, amount).await
    }

    /// Record a withdrawal on an already resolved account.
    pub async fn withdraw_from(
        &self,
        customer: &Customer,
        amount: Option<Amount>,
    ) -> Result<WithdrawResult, AppError> {
        let amount = validate_amount(amount)?;
        let now = self.clock.now();

        let result = self
            .repo
            .update(&customer.tax_id, |c| {
                let balance = c.balance();
                if balance < amount {
                    return Err(AppError::InsufficientFunds {
                        balance,
                        requested: amount,
                    });
                }

                let operation = Operation::withdraw(amount, next_timestamp(&c.statement, now));
                c.statement.push(operation.clone());
                Ok(WithdrawResult {
                    operation,
                    balance: c.balance(),
                })
            })
            .await
            .ok_or(AppError::AccountNotFound)?;

        match &result {
            Ok(done) => {
                info!(customer_id = %customer.id, amount, balance = done.balance, "Withdraw recorded")
            }
            Err(e) => warn!(customer_id = %customer.id, amount, "Withdraw rejected: {}", e),
        }
        result
    }
}

fn validate_amount(amount: Option<Amount>) -> Result<Amount, AppError> {
    let amount = amount.ok_or(AppError::AmountRequired)?;
    ensure_non_negative(amount).map_err(|e| AppError::InvalidAmount(e.0))
}

fn parse_date(date_str: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        debug!("Rejected date {:?}, expected YYYY-MM-DD: {}", date_str, e);
        AppError::InvalidDate(date_str.to_string())
    })
}
