//! Account and account-config model.
//!
//! # Invariants
//! - `Account::id` is generated once and never changes afterwards.
//! - `Config::last_used_id`, when non-empty, is expected to reference an
//!   account in `Config::accounts`. This is only checked on switch.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier type for accounts, persisted as a plain string.
pub type AccountId = String;

/// A named user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    /// Relative to the app data directory, unless supplied as absolute.
    #[serde(rename = "avatarPath", default)]
    pub avatar_path: String,
}

impl Account {
    /// Creates an account with a freshly generated identifier.
    pub fn new(username: impl Into<String>, avatar_path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            avatar_path: avatar_path.into(),
        }
    }
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Empty when no account has been activated yet.
    #[serde(rename = "lastUsedID", default)]
    pub last_used_id: AccountId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accounts: Vec<Account>,
}

impl Config {
    pub fn find_account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn contains_account(&self, id: &str) -> bool {
        self.find_account(id).is_some()
    }

    /// Replaces the account with the same id in place, or appends it.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn upsert_account(&mut self, account: Account) -> bool {
        match self.accounts.iter_mut().find(|item| item.id == account.id) {
            Some(existing) => {
                *existing = account;
                true
            }
            None => {
                self.accounts.push(account);
                false
            }
        }
    }

    /// Returns the last-used account, or `None` when unset or dangling.
    pub fn last_used_account(&self) -> Option<&Account> {
        if self.last_used_id.is_empty() || self.accounts.is_empty() {
            return None;
        }
        self.find_account(&self.last_used_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Account>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Account>>::deserialize(deserializer)?.unwrap_or_default())
}
