// crates/issue-gate-core/src/core/mod.rs
// ============================================================================
// Module: Issue Gate Core Data Model
// Description: Identifiers, permissions, actors, issues, and decisions.
// Purpose: Wire together the core data model consumed by the runtime.
// Dependencies: crate::core::{actor, decision, identifiers, issue, permission}
// ============================================================================

//! ## Overview
//! The core data model: everything the host supplies per call (identifiers,
//! roles, actor contexts, issue records) and the decision type the runtime
//! hands back.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod actor;
pub mod decision;
pub mod identifiers;
pub mod issue;
pub mod permission;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use actor::ActorContext;
pub use decision::VisibilityDecision;
pub use identifiers::IssueId;
pub use identifiers::ProjectId;
pub use identifiers::RoleId;
pub use identifiers::UserId;
pub use issue::Issue;
pub use issue::IssueDraft;
pub use permission::ParsePermissionError;
pub use permission::Permission;
pub use permission::PermissionRegistry;
pub use permission::Role;
