//! FFI use-case API for GUI-facing calls.
//!
//! # Responsibility
//! - Expose one sync function per GUI action via FRB.
//! - Resolve the app data directory per call and delegate to `App`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Errors are returned as `<operation> failed: <reason>` strings.
//! - No state is cached between calls.

use log::error;
use manifest_core::{
    core_version as core_version_inner, init_default_logging, init_logging as init_logging_inner,
    ping as ping_inner, Account, AnnualData, App, AppPaths, SystemData, Task,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Process startup hook.
///
/// Starts logging under `<data_dir>/logs` when not yet active and opens the
/// planning database. Failures are logged and reported, but the shell is
/// expected to keep running.
#[flutter_rust_bridge::frb(sync)]
pub fn startup() -> Result<(), String> {
    let app = resolve_app("startup")?;
    if let Err(err) = init_default_logging(app.paths()) {
        eprintln!("manifest startup: logging unavailable: {err}");
    }
    app.startup()
        .map_err(|err| format!("startup failed: database init failed: {err}"))
}

#[flutter_rust_bridge::frb(sync)]
pub fn greet(name: String) -> String {
    App::greet(&name)
}

#[flutter_rust_bridge::frb(sync)]
pub fn get_all_annual_data() -> Result<SystemData, String> {
    with_app("get_all_annual_data", |app| app.get_all_annual_data())
}

#[flutter_rust_bridge::frb(sync)]
pub fn get_annual_data(year: String) -> Result<Option<AnnualData>, String> {
    with_app("get_annual_data", |app| app.get_annual_data(year.trim()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_annual_data(data: AnnualData) -> Result<(), String> {
    with_app("save_annual_data", |app| app.save_annual_data(&data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_annual_data(year: String) -> Result<(), String> {
    with_app("delete_annual_data", |app| app.delete_annual_data(year.trim()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn add_task(task: Task) -> Result<(), String> {
    with_app("add_task", |app| app.add_task(&task))
}

#[flutter_rust_bridge::frb(sync)]
pub fn update_task(task: Task) -> Result<(), String> {
    with_app("update_task", |app| app.update_task(&task))
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(task_id: String) -> Result<(), String> {
    with_app("delete_task", |app| app.delete_task(&task_id))
}

/// Deletes all annual documents and tasks. Accounts are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_all_data() -> Result<(), String> {
    with_app("reset_all_data", |app| app.reset_all_data())
}

#[flutter_rust_bridge::frb(sync)]
pub fn get_accounts() -> Result<Vec<Account>, String> {
    with_app("get_accounts", |app| app.get_accounts())
}

/// Inserts the account, or replaces the stored one with the same id.
#[flutter_rust_bridge::frb(sync)]
pub fn save_account(account: Account) -> Result<(), String> {
    with_app("save_account", |app| app.save_account(account))
}

#[flutter_rust_bridge::frb(sync)]
pub fn switch_account(account_id: String) -> Result<(), String> {
    with_app("switch_account", |app| app.switch_account(&account_id))
}

/// Returns `None` when no account is active or the stored id is stale.
#[flutter_rust_bridge::frb(sync)]
pub fn get_last_used_account() -> Result<Option<Account>, String> {
    with_app("get_last_used_account", |app| app.get_last_used_account())
}

/// Creates an account and makes it active.
///
/// An absolute `avatar_path` is copied into the app data directory first.
#[flutter_rust_bridge::frb(sync)]
pub fn new_account(username: String, avatar_path: String) -> Result<Account, String> {
    with_app("new_account", |app| app.new_account(&username, &avatar_path))
}

#[flutter_rust_bridge::frb(sync)]
pub fn get_avatar_absolute_path(relative_path: String) -> Result<String, String> {
    let app = resolve_app("get_avatar_absolute_path")?;
    Ok(app.get_avatar_absolute_path(&relative_path))
}

fn resolve_app(operation: &str) -> Result<App, String> {
    AppPaths::from_env().map(App::new).map_err(|err| {
        error!(
            "event=ffi_call module=ffi status=error op={} error_code=paths_unresolved error={}",
            operation, err
        );
        format!("{operation} failed: {err}")
    })
}

fn with_app<T>(
    operation: &str,
    f: impl FnOnce(&App) -> manifest_core::AppResult<T>,
) -> Result<T, String> {
    let app = resolve_app(operation)?;
    f(&app).map_err(|err| format!("{operation} failed: {err}"))
}
