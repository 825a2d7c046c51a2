// crates/issue-gate-config/src/lib.rs
// ============================================================================
// Module: Issue Gate Config Root
// Description: Public API surface for configuration loading and validation.
// Purpose: Wire together the canonical config model for host startup.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! The canonical configuration model for Issue Gate. Hosts load a TOML file
//! once at startup, validate it fail-closed, and build the permission
//! registry and visibility evaluator from it.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::IssueGateConfig;
pub use config::PolicyConfig;
pub use config::RoleConfig;
