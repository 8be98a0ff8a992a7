// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use cashbook::application::LedgerService;
use cashbook::domain::{Customer, ManualClock};
use cashbook::storage::Repository;

pub const ANA: &str = "11122233344";
pub const BRUNO: &str = "99988877766";

/// Helper to create a test service over an empty store, with a clock
/// frozen at 2024-01-15 09:00 UTC
pub fn test_service() -> (LedgerService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(parse_datetime("2024-01-15 09:00")));
    let service = LedgerService::with_clock(Repository::new(), clock.clone());
    (service, clock)
}

/// Helper to parse a date string into DateTime<Utc> at midnight
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Helper to parse "YYYY-MM-DD HH:MM" into DateTime<Utc>
pub fn parse_datetime(value: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .unwrap()
        .and_utc()
}

/// Test fixture: standard accounts
pub struct StandardAccounts;

impl StandardAccounts {
    /// Open Ana's account
    pub async fn create_ana(service: &LedgerService) -> Result<Customer> {
        Ok(service.create_account(Some(ANA), Some("Ana".into())).await?)
    }

    /// Open Ana's and Bruno's accounts
    pub async fn create_both(service: &LedgerService) -> Result<()> {
        Self::create_ana(service).await?;
        service
            .create_account(Some(BRUNO), Some("Bruno".into()))
            .await?;
        Ok(())
    }

    /// Deposit into an existing account
    pub async fn fund(service: &LedgerService, tax_id: &str, amount: i64) -> Result<()> {
        service.deposit(Some(tax_id), Some(amount), None).await?;
        Ok(())
    }
}
