// crates/issue-gate-core/src/lib.rs
// ============================================================================
// Module: Issue Gate Core Root
// Description: Public API surface for the issue visibility engine.
// Purpose: Wire together core data model, runtime decisions, and host interfaces.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Issue Gate is a pure issue visibility/authorization engine. Given an
//! issue record, an actor context, and a permission set — all supplied by
//! the host tracker per call — it decides visibility (view/list) and
//! mutation rights for the per-issue privacy flag. It owns no persistence,
//! no protocol, and no ambient state; every operation is a synchronous,
//! deterministic function of its inputs and safe to call concurrently.
//!
//! Authorization outcomes are decisions, not errors: denied visibility is a
//! [`VisibilityDecision`], an unauthorized privacy-flag write is silently
//! replaced by the safe value. Errors are reserved for contract violations
//! such as cross-project actor/issue pairings.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::ActorContext;
pub use self::core::Issue;
pub use self::core::IssueDraft;
pub use self::core::IssueId;
pub use self::core::ParsePermissionError;
pub use self::core::Permission;
pub use self::core::PermissionRegistry;
pub use self::core::ProjectId;
pub use self::core::Role;
pub use self::core::RoleId;
pub use self::core::UserId;
pub use self::core::VisibilityDecision;
pub use interfaces::PermissionDescriptor;
pub use interfaces::PermissionVocabulary;
pub use interfaces::VocabularyError;
pub use interfaces::builtin_permissions;
pub use interfaces::register_permissions;
pub use interfaces::renders_private_checkbox;
pub use runtime::DenialMode;
pub use runtime::EvaluationError;
pub use runtime::GuardPredicate;
pub use runtime::GuardedField;
pub use runtime::GuardedValues;
pub use runtime::MutationGuard;
pub use runtime::MutationGuardBuilder;
pub use runtime::REASON_PRIVATE_RESTRICTED;
pub use runtime::SanitizedDraft;
pub use runtime::VisibilityEvaluator;
pub use runtime::filter_visible;
