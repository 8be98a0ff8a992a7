use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{compute_balance, Amount, Operation};

pub type CustomerId = Uuid;

/// An account holder and the statement it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// CPF or CNPJ; the lookup key, fixed at creation
    #[serde(alias = "cpf_cnpj")]
    pub tax_id: String,
    pub name: String,
    /// Operations in insertion order
    pub statement: Vec<Operation>,
}

impl Customer {
    pub fn new(tax_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tax_id: tax_id.into(),
            name: name.into(),
            statement: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }

    pub fn balance(&self) -> Amount {
        compute_balance(&self.statement)
    }

    pub fn is_empty(&self) -> bool {
        self.balance() == 0
    }
}

/// Customers present when the server starts.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new("56632613039", "Carolyne Hand")
            .with_id(Uuid::from_u128(0x7c8e8f0b_1e7f_4e2c_ae91_7022176e4044)),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_new_customer_has_empty_statement() {
        let customer = Customer::new("11122233344", "Ana");
        assert!(customer.statement.is_empty());
        assert_eq!(customer.balance(), 0);
        assert!(customer.is_empty());
    }

    #[test]
    fn test_balance_follows_statement() {
        let mut customer = Customer::new("11122233344", "Ana");
        customer.statement.push(Operation::deposit(100, Utc::now()));
        customer.statement.push(Operation::withdraw(30, Utc::now()));

        assert_eq!(customer.balance(), 70);
        assert!(!customer.is_empty());
    }

    #[test]
    fn test_seed_customer_matches_known_record() {
        let seed = seed_customers();
        assert_eq!(seed.len(), 1);
        assert_eq!(
            seed[0].id.to_string(),
            "7c8e8f0b-1e7f-4e2c-ae91-7022176e4044"
        );
        assert_eq!(seed[0].tax_id, "56632613039");
        assert_eq!(seed[0].name, "Carolyne Hand");
    }

    #[test]
    fn test_deserialize_accepts_cpf_cnpj_field() {
        let json = r#"{
            "id": "7c8e8f0b-1e7f-4e2c-ae91-7022176e4044",
            "cpf_cnpj": "56632613039",
            "name": "Carolyne Hand",
            "statement": []
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.tax_id, "56632613039");
    }
}
