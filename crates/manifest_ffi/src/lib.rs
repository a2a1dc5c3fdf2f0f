//! Flutter-facing bridge over `manifest_core`.

pub mod api;
