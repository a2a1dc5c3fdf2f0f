//! Account use-case service.
//!
//! # Responsibility
//! - Create, update, list and switch accounts stored in `config.json`.
//!
//! # Invariants
//! - Every call performs a fresh load; every mutation rewrites the file.
//! - Switching requires the target account to exist.
//! - `create_account` runs copy, upsert and switch in sequence without
//!   rollback; a late failure can leave an unreferenced avatar file.

use crate::avatar::{AvatarError, AvatarStore};
use crate::config::{ConfigError, ConfigStore};
use crate::model::account::{Account, AccountId};
use crate::paths::AppPaths;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type AccountResult<T> = Result<T, AccountError>;

#[derive(Debug)]
pub enum AccountError {
    Config(ConfigError),
    Avatar(AvatarError),
    NotFound(AccountId),
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Avatar(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "account not found: {id}"),
        }
    }
}

impl Error for AccountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Avatar(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ConfigError> for AccountError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<AvatarError> for AccountError {
    fn from(value: AvatarError) -> Self {
        Self::Avatar(value)
    }
}

/// Account manager over the config store and avatar importer.
pub struct AccountService {
    store: ConfigStore,
    avatars: AvatarStore,
}

impl AccountService {
    pub fn new(paths: &AppPaths) -> Self {
        Self::with_parts(ConfigStore::new(paths), AvatarStore::new(paths.clone()))
    }

    pub fn with_parts(store: ConfigStore, avatars: AvatarStore) -> Self {
        Self { store, avatars }
    }

    pub fn list_accounts(&self) -> AccountResult<Vec<Account>> {
        Ok(self.store.load()?.accounts)
    }

    /// Replaces the account with the same id in place, or appends it.
    pub fn upsert_account(&self, account: Account) -> AccountResult<()> {
        let mut config = self.store.load()?;
        let id = account.id.clone();
        let replaced = config.upsert_account(account);
        self.store.save(&config)?;

        info!(
            "event=account_upsert module=account status=ok account_id={} replaced={}",
            id, replaced
        );
        Ok(())
    }

    /// Marks `id` as the last-used account.
    ///
    /// # Errors
    /// - `AccountError::NotFound` when no stored account has `id`; the
    ///   config file is left untouched.
    pub fn switch_account(&self, id: &str) -> AccountResult<()> {
        let mut config = self.store.load()?;
        if !config.contains_account(id) {
            warn!(
                "event=account_switch module=account status=error error_code=not_found account_id={}",
                id
            );
            return Err(AccountError::NotFound(id.to_string()));
        }

        config.last_used_id = id.to_string();
        self.store.save(&config)?;

        info!(
            "event=account_switch module=account status=ok account_id={}",
            id
        );
        Ok(())
    }

    /// Returns the last-used account, or `None` when unset or stale.
    pub fn last_used_account(&self) -> AccountResult<Option<Account>> {
        let config = self.store.load()?;
        let account = config.last_used_account().cloned();
        if account.is_none() && !config.last_used_id.is_empty() && !config.accounts.is_empty() {
            debug!(
                "event=account_last_used module=account status=ok dangling_id={}",
                config.last_used_id
            );
        }
        Ok(account)
    }

    /// Creates an account and makes it the active one.
    ///
    /// An absolute `avatar_source` is imported into the app data directory
    /// first and the stored path becomes relative. Any other value is
    /// stored as given.
    pub fn create_account(&self, username: &str, avatar_source: &str) -> AccountResult<Account> {
        let avatar_path = if Path::new(avatar_source).is_absolute() {
            self.avatars.import_avatar(avatar_source)?
        } else {
            avatar_source.to_string()
        };

        let account = Account::new(username, avatar_path);
        self.upsert_account(account.clone())?;
        self.switch_account(&account.id)?;

        info!(
            "event=account_create module=account status=ok account_id={}",
            account.id
        );
        Ok(account)
    }

    pub fn avatars(&self) -> &AvatarStore {
        &self.avatars
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountError, AccountService};
    use crate::model::account::Account;
    use crate::paths::AppPaths;

    fn account(id: &str, username: &str) -> Account {
        Account {
            id: id.to_string(),
            username: username.to_string(),
            avatar_path: String::new(),
        }
    }

    #[test]
    fn relative_avatar_path_is_stored_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let service = AccountService::new(&AppPaths::new(dir.path()));

        let created = service.create_account("bob", "avatars/preset.png").unwrap();
        assert_eq!(created.avatar_path, "avatars/preset.png");
        assert!(!dir.path().join("avatars").exists());
    }

    #[test]
    fn failed_switch_keeps_previous_last_used_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = AccountService::new(&AppPaths::new(dir.path()));
        service.upsert_account(account("a", "alice")).unwrap();
        service.switch_account("a").unwrap();

        let err = service.switch_account("ghost").unwrap_err();
        assert!(matches!(err, AccountError::NotFound(ref id) if id == "ghost"));
        assert_eq!(service.last_used_account().unwrap().unwrap().id, "a");
    }

    #[test]
    fn missing_avatar_source_aborts_creation() {
        let dir = tempfile::tempdir().unwrap();
        let service = AccountService::new(&AppPaths::new(dir.path()));

        let missing = dir.path().join("nope.png");
        let err = service
            .create_account("carol", missing.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, AccountError::Avatar(_)));
        assert!(service.list_accounts().unwrap().is_empty());
    }
}
