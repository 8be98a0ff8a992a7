use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::RwLock;

use crate::domain::{Customer, CustomerId};

/// In-memory store of customers, shared by every request handler.
///
/// Reads hand out clones. Check-then-act sequences go through [`Repository::update`]
/// or [`Repository::remove_where`] so the check and the mutation happen under a
/// single write lock.
#[derive(Clone, Default)]
pub struct Repository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with the given customers.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }

    // ========================
    // Queries
    // ========================

    /// Find a customer by tax id (first match).
    pub async fn find_by_tax_id(&self, tax_id: &str) -> Option<Customer> {
        let customers = self.customers.read().await;
        customers.iter().find(|c| c.tax_id == tax_id).cloned()
    }

    pub async fn exists_by_tax_id(&self, tax_id: &str) -> bool {
        let customers = self.customers.read().await;
        customers.iter().any(|c| c.tax_id == tax_id)
    }

    /// All customers in insertion order.
    pub async fn list(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new customer. Fails if the tax id is already taken.
    pub async fn insert(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.write().await;
        if customers.iter().any(|c| c.tax_id == customer.tax_id) {
            bail!("customer with tax id {} already stored", customer.tax_id);
        }
        customers.push(customer);
        Ok(())
    }

    /// Remove the customer with the given identity.
    pub async fn remove(&self, id: CustomerId) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let index = customers.iter().position(|c| c.id == id)?;
        Some(customers.remove(index))
    }

    /// Run `f` against the customer with this tax id while holding the write lock.
    /// Returns `None` if no customer matches.
    pub async fn update<T, F>(&self, tax_id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut Customer) -> T,
    {
        let mut customers = self.customers.write().await;
        customers.iter_mut().find(|c| c.tax_id == tax_id).map(f)
    }

    /// Remove the customer with this tax id if `check` accepts it.
    /// Returns `None` if no customer matches; otherwise the removed customer or
    /// the rejection from `check`, in which case the store is left untouched.
    pub async fn remove_where<E, F>(&self, tax_id: &str, check: F) -> Option<Result<Customer, E>>
    where
        F: FnOnce(&Customer) -> Result<(), E>,
    {
        let mut customers = self.customers.write().await;
        let index = customers.iter().position(|c| c.tax_id == tax_id)?;
        Some(check(&customers[index]).map(|()| customers.remove(index)))
    }
}
