//! Account store - users created through sign-up

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::core::accounts::SignupRequest;
use crate::models::Account;

/// In-memory accounts keyed by lowercased email
pub struct AccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn get_by_email(&self, email: &str) -> Option<Account> {
        self.accounts.read().get(&email.trim().to_lowercase()).cloned()
    }

    /// Create an account from a validated sign-up. None if the email is taken.
    pub fn create(&self, signup: &SignupRequest, password_hash: String) -> Option<Account> {
        let key = signup.email.trim().to_lowercase();
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&key) {
            return None;
        }

        let account = Account {
            id: accounts.len() as u32 + 1,
            first_name: signup.first_name.trim().to_string(),
            last_name: signup.last_name.trim().to_string(),
            email: signup.email.trim().to_string(),
            phone: signup.phone.clone(),
            password_hash,
            user_type: signup.user_type,
        };

        accounts.insert(key, account.clone());
        Some(account)
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::accounts::tests::signup;

    #[test]
    fn test_create_and_lookup() {
        let store = AccountStore::new();
        let account = store.create(&signup(), "salt$hash".to_string()).unwrap();
        assert_eq!(account.id, 1);
        assert_eq!(store.count(), 1);

        let found = store.get_by_email("  GRACE@example.com ").unwrap();
        assert_eq!(found.first_name, "Grace");
    }

    #[test]
    fn test_duplicate_email() {
        let store = AccountStore::new();
        store.create(&signup(), String::new()).unwrap();

        let mut again = signup();
        again.email = "Grace@Example.com".to_string();
        assert!(store.create(&again, String::new()).is_none());
        assert_eq!(store.count(), 1);
    }
}
