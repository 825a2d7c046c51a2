// crates/issue-gate-core/src/core/actor.rs
// ============================================================================
// Module: Issue Gate Actor Context
// Description: Per-evaluation actor identity and effective permission set.
// Purpose: Replace ambient current-user state with explicit, scoped context.
// Dependencies: crate::core::{identifiers, permission}, serde
// ============================================================================

//! ## Overview
//! An [`ActorContext`] captures who is asking: the user, the project scope,
//! the admin flag, and the effective permissions resolved by unioning the
//! grants of every role the user holds in that project.
//!
//! Contexts are cheap snapshots built per evaluation. They are never cached
//! across role-assignment changes; callers reconstruct the context via
//! [`ActorContext::resolve`] whenever assignments may have moved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ProjectId;
use crate::core::identifiers::RoleId;
use crate::core::identifiers::UserId;
use crate::core::permission::Permission;
use crate::core::permission::PermissionRegistry;

// ============================================================================
// SECTION: Actor Context
// ============================================================================

/// Actor identity and effective permissions within a project scope.
///
/// # Invariants
/// - `permissions` is the union of grants across the roles the user held in
///   `project_id` at resolution time; it is a snapshot, not a live view.
/// - The context carries no ambient global state; every evaluator call
///   receives it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// User identifier.
    user_id: UserId,
    /// Project scope of the evaluation.
    project_id: ProjectId,
    /// Administrator flag enabling the bypass rule.
    is_admin: bool,
    /// Effective permission set.
    permissions: BTreeSet<Permission>,
}

impl ActorContext {
    /// Creates a context from an already-resolved permission set.
    #[must_use]
    pub fn new(
        user_id: UserId,
        project_id: ProjectId,
        is_admin: bool,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            user_id,
            project_id,
            is_admin,
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Resolves a context by unioning the grants of the given roles.
    ///
    /// Unknown roles contribute nothing; the resulting set may be empty.
    #[must_use]
    pub fn resolve<'a>(
        user_id: UserId,
        project_id: ProjectId,
        is_admin: bool,
        roles: impl IntoIterator<Item = &'a RoleId>,
        registry: &PermissionRegistry,
    ) -> Self {
        let mut permissions = BTreeSet::new();
        for role_id in roles {
            permissions.extend(registry.permissions_for(role_id));
        }
        Self {
            user_id,
            project_id,
            is_admin,
            permissions,
        }
    }

    /// Returns whether the actor holds the permission in this scope.
    #[must_use]
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns the actor's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the project scope of the context.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns whether the actor is an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Returns the effective permission set.
    #[must_use]
    pub const fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }
}
