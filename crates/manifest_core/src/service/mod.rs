//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate config, avatar and repository calls into use-case APIs.
//! - Keep the GUI bridge decoupled from storage details.

pub mod account_service;
pub mod planner_service;
