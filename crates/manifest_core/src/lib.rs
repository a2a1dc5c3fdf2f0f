//! Core domain logic for the Manifest planner.
//! This crate owns account persistence, avatar storage and the yearly
//! planning store behind a single `App` facade.

pub mod app;
pub mod avatar;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod paths;
pub mod repo;
pub mod service;

pub use app::{App, AppError, AppResult};
pub use avatar::{AvatarError, AvatarStore};
pub use config::{ConfigError, ConfigStore};
pub use logging::{default_log_level, init_default_logging, init_logging, logging_status};
pub use model::account::{Account, AccountId, Config};
pub use model::annual::{
    AnnualData, AnnualSettings, DimensionConfig, DimensionData, DimensionSettings, Priority,
    ScoringSettings, SystemData, Task, TaskStatus,
};
pub use paths::AppPaths;
pub use repo::{RepoError, RepoResult};
pub use service::account_service::{AccountError, AccountResult, AccountService};
pub use service::planner_service::PlannerService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
