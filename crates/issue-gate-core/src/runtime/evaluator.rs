// crates/issue-gate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Issue Gate Visibility Evaluator
// Description: Decision core mapping actor/issue pairs to visibility outcomes.
// Purpose: Apply the private-issue rule chain deterministically and fail closed.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! The evaluator applies the private-issue rule chain in a fixed order:
//! non-private issues are always visible; private issues are visible to
//! administrators, the author, the assignee, or holders of
//! [`Permission::ViewPrivateIssues`]; everyone else is denied.
//!
//! Whether a denial surfaces as "forbidden" or "not found" is host policy,
//! configured once per evaluator via [`DenialMode`]. A cross-project
//! actor/issue pairing is a contract violation and returns an error rather
//! than a denial: "I don't know who you are here" must stay distinct from
//! "you're not allowed".

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ActorContext;
use crate::core::Issue;
use crate::core::Permission;
use crate::core::ProjectId;
use crate::core::VisibilityDecision;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Stable denial reason label for restricted private issues.
pub const REASON_PRIVATE_RESTRICTED: &str = "private_issue_restricted";

// ============================================================================
// SECTION: Denial Mode
// ============================================================================

/// Host policy for rendering denied private-issue access.
///
/// # Invariants
/// - Variants are stable for serialization and config matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialMode {
    /// Deny with an explicit forbidden outcome (the issue's existence leaks).
    #[default]
    Forbidden,
    /// Deny by hiding the issue's existence entirely.
    NotFound,
}

// ============================================================================
// SECTION: Evaluation Errors
// ============================================================================

/// Contract violations detected during evaluation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - These are programmer errors, never authorization outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Actor context and issue belong to different projects.
    #[error("actor scope project {actor_project} does not match issue project {issue_project}")]
    ScopeMismatch {
        /// Project scope of the actor context.
        actor_project: ProjectId,
        /// Project the issue belongs to.
        issue_project: ProjectId,
    },
}

// ============================================================================
// SECTION: Visibility Evaluator
// ============================================================================

/// Decision core for private-issue visibility.
///
/// # Invariants
/// - Evaluation is a pure function of its inputs; identical inputs yield
///   identical decisions.
/// - The denial mode is fixed at construction and applied consistently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityEvaluator {
    /// How denials are rendered to the host.
    denial_mode: DenialMode,
}

impl VisibilityEvaluator {
    /// Creates an evaluator with the given denial policy.
    #[must_use]
    pub const fn new(denial_mode: DenialMode) -> Self {
        Self { denial_mode }
    }

    /// Returns the configured denial mode.
    #[must_use]
    pub const fn denial_mode(&self) -> DenialMode {
        self.denial_mode
    }

    /// Evaluates whether the actor may view the issue.
    ///
    /// The rule chain, in order: non-private issues are visible; then
    /// administrator bypass, author, assignee, and the
    /// `view_private_issues` grant each permit; otherwise the configured
    /// denial is returned. An absent assignee matches no actor. A child
    /// issue is evaluated on its own privacy flag and relations only;
    /// nothing inherits from its parent.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::ScopeMismatch`] when the actor context
    /// and the issue belong to different projects.
    pub fn evaluate(
        &self,
        actor: &ActorContext,
        issue: &Issue,
    ) -> Result<VisibilityDecision, EvaluationError> {
        if actor.project_id() != issue.project_id {
            return Err(EvaluationError::ScopeMismatch {
                actor_project: actor.project_id(),
                issue_project: issue.project_id,
            });
        }

        if !issue.private
            || actor.is_admin()
            || issue.authored_by(actor.user_id())
            || issue.assigned_to(actor.user_id())
            || actor.has(Permission::ViewPrivateIssues)
        {
            return Ok(VisibilityDecision::Visible);
        }

        Ok(self.deny())
    }

    /// Builds the denial decision for the configured mode.
    fn deny(&self) -> VisibilityDecision {
        let reason = REASON_PRIVATE_RESTRICTED.to_string();
        match self.denial_mode {
            DenialMode::Forbidden => VisibilityDecision::Forbidden { reason },
            DenialMode::NotFound => VisibilityDecision::NotFound { reason },
        }
    }
}
