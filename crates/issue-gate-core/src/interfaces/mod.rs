// crates/issue-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Issue Gate Host Interfaces
// Description: Startup registration and UI hint hooks for the host tracker.
// Purpose: Define the contract surface between the engine and its host.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The engine owns no wire protocol and no storage; it plugs into a host
//! tracker through two hooks. At startup the host declares the engine's
//! permission names into its own vocabulary via [`register_permissions`].
//! At render time the host asks [`renders_private_checkbox`] whether the
//! current actor should see the "private" checkbox at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ActorContext;
use crate::core::Permission;

// ============================================================================
// SECTION: Permission Descriptors
// ============================================================================

/// Descriptor the host records when declaring a permission.
///
/// # Invariants
/// - `name` equals the permission's stable wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDescriptor {
    /// Permission being declared.
    pub permission: Permission,
    /// Stable wire name for the host's permission table.
    pub name: &'static str,
    /// Human-readable description for the host's admin UI.
    pub description: &'static str,
}

/// Returns the descriptors for the engine's closed permission vocabulary.
#[must_use]
pub const fn builtin_permissions() -> [PermissionDescriptor; 2] {
    [
        PermissionDescriptor {
            permission: Permission::ViewPrivateIssues,
            name: Permission::ViewPrivateIssues.as_str(),
            description: "View private issues regardless of author or assignee",
        },
        PermissionDescriptor {
            permission: Permission::ManagePrivateIssues,
            name: Permission::ManagePrivateIssues.as_str(),
            description: "Set or clear the private flag on issues",
        },
    ]
}

// ============================================================================
// SECTION: Permission Vocabulary
// ============================================================================

/// Vocabulary registration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The permission name is already declared in the host vocabulary.
    #[error("permission already declared: {name}")]
    Duplicate {
        /// The duplicated permission name.
        name: String,
    },
    /// The host rejected the declaration.
    #[error("permission declaration rejected: {reason}")]
    Rejected {
        /// Host-supplied rejection reason.
        reason: String,
    },
}

/// Host-side permission vocabulary accepting engine declarations.
pub trait PermissionVocabulary {
    /// Declares one permission into the host vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] when the name collides or the host
    /// rejects the declaration.
    fn declare(&mut self, descriptor: &PermissionDescriptor) -> Result<(), VocabularyError>;
}

/// Declares the engine's permissions into the host vocabulary.
///
/// Hosts call this once at startup, before any evaluation.
///
/// # Errors
///
/// Returns [`VocabularyError`] when any declaration fails; earlier
/// declarations are not rolled back.
pub fn register_permissions(host: &mut dyn PermissionVocabulary) -> Result<(), VocabularyError> {
    for descriptor in builtin_permissions() {
        host.declare(&descriptor)?;
    }
    Ok(())
}

// ============================================================================
// SECTION: UI Hints
// ============================================================================

/// Returns whether the "private" checkbox should render for the actor.
///
/// Mirrors the mutation guard's stock rule: only holders of
/// [`Permission::ManagePrivateIssues`] see the control.
#[must_use]
pub fn renders_private_checkbox(actor: &ActorContext) -> bool {
    actor.has(Permission::ManagePrivateIssues)
}
