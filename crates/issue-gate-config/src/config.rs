// crates/issue-gate-config/src/config.rs
// ============================================================================
// Module: Issue Gate Configuration
// Description: Configuration loading and validation for Issue Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: issue-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path
//! limits. Role declarations are validated against the engine's closed
//! permission vocabulary, so a typo in a permission name is a load failure
//! rather than a silently empty grant. Missing or invalid configuration
//! fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use issue_gate_core::DenialMode;
use issue_gate_core::Permission;
use issue_gate_core::PermissionRegistry;
use issue_gate_core::Role;
use issue_gate_core::RoleId;
use issue_gate_core::VisibilityEvaluator;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "issue-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "ISSUE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of role declarations.
pub(crate) const MAX_ROLES: usize = 256;
/// Maximum length of a role identifier.
pub(crate) const MAX_ROLE_ID_LENGTH: usize = 128;
/// Maximum permission names per role declaration.
pub(crate) const MAX_PERMISSIONS_PER_ROLE: usize = 16;

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file I/O error.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config content failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Issue Gate configuration.
///
/// # Invariants
/// - `validate` must pass before the config is used to build engine parts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueGateConfig {
    /// Denial policy configuration.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Role declarations binding roles to permission names.
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
}

/// Denial policy configuration.
///
/// # Invariants
/// - `denial_mode` uses the engine's stable wire names.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// How denied private-issue access is rendered.
    #[serde(default)]
    pub denial_mode: DenialMode,
}

/// One role declaration.
///
/// # Invariants
/// - `permissions` entries must name members of the closed vocabulary.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleConfig {
    /// Role identifier.
    pub id: String,
    /// Permission names granted to the role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl IssueGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then the `ISSUE_GATE_CONFIG`
    /// environment variable, then `issue-gate.toml` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roles.len() > MAX_ROLES {
            return Err(ConfigError::Invalid(format!(
                "too many role declarations (max {MAX_ROLES})"
            )));
        }
        let mut seen = BTreeSet::new();
        for role in &self.roles {
            role.validate()?;
            if !seen.insert(role.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate role id: {}", role.id)));
            }
        }
        Ok(())
    }

    /// Builds the permission registry declared by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a permission name is outside the
    /// closed vocabulary.
    pub fn registry(&self) -> Result<PermissionRegistry, ConfigError> {
        let mut roles = Vec::with_capacity(self.roles.len());
        for role in &self.roles {
            roles.push(role.to_role()?);
        }
        Ok(PermissionRegistry::from_roles(roles))
    }

    /// Builds a visibility evaluator with the configured denial mode.
    #[must_use]
    pub const fn evaluator(&self) -> VisibilityEvaluator {
        VisibilityEvaluator::new(self.policy.denial_mode)
    }

    /// Returns the configured denial mode.
    #[must_use]
    pub const fn denial_mode(&self) -> DenialMode {
        self.policy.denial_mode
    }
}

impl RoleConfig {
    /// Validates one role declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the declaration is invalid.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::Invalid("role id must not be empty".to_string()));
        }
        if self.id.len() > MAX_ROLE_ID_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "role id exceeds max length (max {MAX_ROLE_ID_LENGTH})"
            )));
        }
        if self.permissions.len() > MAX_PERMISSIONS_PER_ROLE {
            return Err(ConfigError::Invalid(format!(
                "role {} declares too many permissions (max {MAX_PERMISSIONS_PER_ROLE})",
                self.id
            )));
        }
        for name in &self.permissions {
            Permission::from_str(name)
                .map_err(|err| ConfigError::Invalid(format!("role {}: {err}", self.id)))?;
        }
        Ok(())
    }

    /// Converts the declaration into an engine role.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a permission name fails to parse.
    fn to_role(&self) -> Result<Role, ConfigError> {
        let mut permissions = Vec::with_capacity(self.permissions.len());
        for name in &self.permissions {
            let permission = Permission::from_str(name)
                .map_err(|err| ConfigError::Invalid(format!("role {}: {err}", self.id)))?;
            permissions.push(permission);
        }
        Ok(Role::new(RoleId::new(self.id.as_str()), permissions))
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves the effective config path from argument, env, or default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(explicit) = path {
        return Ok(explicit.to_path_buf());
    }
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        Ok(_) | Err(env::VarError::NotPresent) => Ok(PathBuf::from(DEFAULT_CONFIG_NAME)),
        Err(err) => Err(ConfigError::Invalid(format!("config env var is not unicode: {err}"))),
    }
}

/// Validates path length limits before any filesystem access.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if let Component::Normal(part) = component
            && part.len() > MAX_PATH_COMPONENT_LENGTH
        {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
