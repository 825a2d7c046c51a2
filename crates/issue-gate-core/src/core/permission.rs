// crates/issue-gate-core/src/core/permission.rs
// ============================================================================
// Module: Issue Gate Permission Model
// Description: Closed permission vocabulary, roles, and the permission registry.
// Purpose: Provide typo-proof permission checks with fail-closed lookups.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! Permissions form a closed, enumerated vocabulary. Checks are performed
//! against the [`Permission`] enum rather than free-form strings, so a
//! misspelled permission name is a parse error at the boundary instead of a
//! silent non-grant at evaluation time.
//!
//! Registry lookups fail closed: an unknown role grants nothing and an
//! absent grant is the natural default, never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::RoleId;

// ============================================================================
// SECTION: Permission Vocabulary
// ============================================================================

/// Named capability in the private-issue vocabulary.
///
/// # Invariants
/// - The set of variants is closed; hosts extend visibility semantics by
///   composing these grants, not by adding names at runtime.
/// - Wire names are stable for serialization and config matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Grants read access to private issues regardless of author/assignee.
    ViewPrivateIssues,
    /// Grants the right to set or clear the private flag on create/update.
    ManagePrivateIssues,
}

impl Permission {
    /// All permissions in the closed vocabulary, in declaration order.
    pub const ALL: [Self; 2] = [Self::ViewPrivateIssues, Self::ManagePrivateIssues];

    /// Returns the stable wire name for the permission.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewPrivateIssues => "view_private_issues",
            Self::ManagePrivateIssues => "manage_private_issues",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a permission name is outside the closed vocabulary.
///
/// # Invariants
/// - Carries the rejected name verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission name: {name}")]
pub struct ParsePermissionError {
    /// The rejected permission name.
    pub name: String,
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_private_issues" => Ok(Self::ViewPrivateIssues),
            "manage_private_issues" => Ok(Self::ManagePrivateIssues),
            other => Err(ParsePermissionError {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Named bundle of permissions assignable to a user within a project.
///
/// # Invariants
/// - `permissions` is a set; duplicate grants collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub role_id: RoleId,
    /// Permissions granted by the role.
    pub permissions: BTreeSet<Permission>,
}

impl Role {
    /// Creates a role with the given grants.
    #[must_use]
    pub fn new(role_id: RoleId, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            role_id,
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Returns whether the role grants the permission.
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

// ============================================================================
// SECTION: Permission Registry
// ============================================================================

/// Read-only lookup mapping roles to their granted permissions.
///
/// # Invariants
/// - Lookups for unknown roles or absent grants return false/empty, never
///   an error.
/// - The registry holds configuration only; it is recomputed by the host
///   when role assignments change and never caches actor state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRegistry {
    /// Grant table keyed by role.
    grants: BTreeMap<RoleId, BTreeSet<Permission>>,
}

impl PermissionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from role declarations.
    #[must_use]
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut registry = Self::new();
        for role in roles {
            let entry = registry.grants.entry(role.role_id).or_default();
            entry.extend(role.permissions);
        }
        registry
    }

    /// Grants a permission to a role, creating the role entry if absent.
    pub fn grant(&mut self, role_id: RoleId, permission: Permission) {
        self.grants.entry(role_id).or_default().insert(permission);
    }

    /// Revokes a permission from a role. Unknown roles are a no-op.
    pub fn revoke(&mut self, role_id: &RoleId, permission: Permission) {
        if let Some(permissions) = self.grants.get_mut(role_id) {
            permissions.remove(&permission);
        }
    }

    /// Returns whether the role grants the permission.
    ///
    /// Unknown roles grant nothing.
    #[must_use]
    pub fn has_permission(&self, role_id: &RoleId, permission: Permission) -> bool {
        self.grants
            .get(role_id)
            .is_some_and(|permissions| permissions.contains(&permission))
    }

    /// Returns the permissions granted to a role (empty for unknown roles).
    #[must_use]
    pub fn permissions_for(&self, role_id: &RoleId) -> BTreeSet<Permission> {
        self.grants.get(role_id).cloned().unwrap_or_default()
    }

    /// Returns the number of roles with at least one declared entry.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.grants.len()
    }
}
