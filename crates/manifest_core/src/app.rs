//! Application facade consumed by the GUI bridge.
//!
//! # Responsibility
//! - Expose one method per GUI action, delegating to the account service,
//!   the avatar store, or the planning store.
//!
//! # Invariants
//! - `App` keeps no cached data; each call re-reads `config.json` or opens
//!   the planning database and releases it before returning.
//! - A failed startup never aborts the process.

use crate::db::{open_db, DbError};
use crate::model::account::Account;
use crate::model::annual::{AnnualData, SystemData, Task};
use crate::paths::AppPaths;
use crate::repo::{RepoError, RepoResult};
use crate::service::account_service::{AccountError, AccountService};
use crate::service::planner_service::PlannerService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Account(AccountError),
    Repo(RepoError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Account(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Account(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(value: AccountError) -> Self {
        Self::Account(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Backend entry point for one app data directory.
#[derive(Debug, Clone)]
pub struct App {
    paths: AppPaths,
}

impl App {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Opens (and migrates) the planning database once.
    ///
    /// Failures are logged and returned, never propagated as a panic; the
    /// caller is expected to keep running.
    pub fn startup(&self) -> AppResult<()> {
        match open_db(self.paths.db_file()) {
            Ok(_) => {
                info!("event=app_startup module=app status=ok");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=app_startup module=app status=error error_code=db_init_failed error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    pub fn greet(name: &str) -> String {
        format!("Hello {name}, It's show time!")
    }

    pub fn get_all_annual_data(&self) -> AppResult<SystemData> {
        self.with_planner(|planner| planner.all_annual_data())
    }

    pub fn get_annual_data(&self, year: &str) -> AppResult<Option<AnnualData>> {
        self.with_planner(|planner| planner.annual_data(year))
    }

    pub fn save_annual_data(&self, data: &AnnualData) -> AppResult<()> {
        self.with_planner(|planner| planner.save_annual_data(data))
    }

    pub fn delete_annual_data(&self, year: &str) -> AppResult<()> {
        self.with_planner(|planner| planner.delete_annual_data(year))
    }

    pub fn add_task(&self, task: &Task) -> AppResult<()> {
        self.with_planner(|planner| planner.add_task(task))
    }

    pub fn update_task(&self, task: &Task) -> AppResult<()> {
        self.with_planner(|planner| planner.update_task(task))
    }

    pub fn delete_task(&self, task_id: &str) -> AppResult<()> {
        self.with_planner(|planner| planner.delete_task(task_id))
    }

    pub fn get_tasks(&self) -> AppResult<Vec<Task>> {
        self.with_planner(|planner| planner.tasks())
    }

    pub fn reset_all_data(&self) -> AppResult<()> {
        self.with_planner(|planner| planner.reset_all_data())
    }

    pub fn get_accounts(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts().list_accounts()?)
    }

    pub fn save_account(&self, account: Account) -> AppResult<()> {
        Ok(self.accounts().upsert_account(account)?)
    }

    pub fn switch_account(&self, account_id: &str) -> AppResult<()> {
        Ok(self.accounts().switch_account(account_id)?)
    }

    pub fn get_last_used_account(&self) -> AppResult<Option<Account>> {
        Ok(self.accounts().last_used_account()?)
    }

    pub fn new_account(&self, username: &str, avatar_path: &str) -> AppResult<Account> {
        Ok(self.accounts().create_account(username, avatar_path)?)
    }

    /// Absolute location of a stored avatar path.
    pub fn get_avatar_absolute_path(&self, relative_path: &str) -> String {
        self.accounts()
            .avatars()
            .resolve_absolute_path(relative_path)
            .to_string_lossy()
            .into_owned()
    }

    fn accounts(&self) -> AccountService {
        AccountService::new(&self.paths)
    }

    fn with_planner<T>(
        &self,
        f: impl FnOnce(&PlannerService<'_>) -> RepoResult<T>,
    ) -> AppResult<T> {
        let conn = open_db(self.paths.db_file())?;
        let planner = PlannerService::new(&conn);
        Ok(f(&planner)?)
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::paths::AppPaths;

    #[test]
    fn greet_formats_name() {
        assert_eq!(App::greet("Ada"), "Hello Ada, It's show time!");
    }

    #[test]
    fn startup_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(AppPaths::new(dir.path().join("data")));

        app.startup().unwrap();
        assert!(app.paths().db_file().is_file());
    }

    #[test]
    fn startup_reports_unusable_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let app = App::new(AppPaths::new(&blocker));
        assert!(app.startup().is_err());
    }
}
