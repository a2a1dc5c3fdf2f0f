//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `manifest_core` linkage.
//! - Report where the backend reads and writes its data.

use manifest_core::{App, AppPaths};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("manifest_core ping={}", manifest_core::ping());
    println!("manifest_core version={}", manifest_core::core_version());

    let paths = match AppPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("manifest data_dir error={err}");
            return ExitCode::FAILURE;
        }
    };
    println!("manifest data_dir={}", paths.data_dir().display());

    let app = App::new(paths);
    match app.get_accounts() {
        Ok(accounts) => println!("manifest accounts={}", accounts.len()),
        Err(err) => {
            eprintln!("manifest accounts error={err}");
            return ExitCode::FAILURE;
        }
    }
    match app.get_last_used_account() {
        Ok(Some(account)) => println!("manifest last_used_id={}", account.id),
        Ok(None) => println!("manifest last_used_id=<none>"),
        Err(err) => {
            eprintln!("manifest last_used error={err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
