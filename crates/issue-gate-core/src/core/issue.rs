// crates/issue-gate-core/src/core/issue.rs
// ============================================================================
// Module: Issue Gate Issue Records
// Description: Issue records under evaluation and drafts for create/update.
// Purpose: Carry the visibility-relevant fields the host supplies per call.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! An [`Issue`] is the subject of a visibility decision: its privacy flag,
//! author, optional assignee, and optional parent linkage. The engine never
//! persists or mutates issue records; the host supplies snapshots per call.
//!
//! An [`IssueDraft`] carries the field values a create/update request asked
//! for. Guarded fields are optional so the mutation guard can distinguish
//! "requested false" from "not requested at all".

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IssueId;
use crate::core::identifiers::ProjectId;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Issue Record
// ============================================================================

/// Issue record supplied by the host for evaluation.
///
/// # Invariants
/// - `parent` links issues for navigation only; privacy never inherits
///   through it. A child is evaluated on its own flag and relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue identifier.
    pub issue_id: IssueId,
    /// Project the issue belongs to.
    pub project_id: ProjectId,
    /// Author of the issue.
    pub author: UserId,
    /// Assignee, when one is set.
    pub assignee: Option<UserId>,
    /// Privacy flag restricting visibility beyond normal project access.
    pub private: bool,
    /// Parent issue reference, when the issue sits in a hierarchy.
    pub parent: Option<IssueId>,
}

impl Issue {
    /// Returns whether the given user authored the issue.
    #[must_use]
    pub fn authored_by(&self, user_id: UserId) -> bool {
        self.author == user_id
    }

    /// Returns whether the given user is the assignee.
    ///
    /// An absent assignee matches no user.
    #[must_use]
    pub fn assigned_to(&self, user_id: UserId) -> bool {
        self.assignee == Some(user_id)
    }
}

// ============================================================================
// SECTION: Issue Draft
// ============================================================================

/// Requested field values for an issue create or update.
///
/// # Invariants
/// - `None` means the request did not mention the field; the mutation guard
///   treats it as "keep the current value" (or the safe default on create).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    /// Requested privacy flag, when the request set one.
    pub private: Option<bool>,
}

impl IssueDraft {
    /// Creates a draft requesting the given privacy flag.
    #[must_use]
    pub const fn with_private(private: bool) -> Self {
        Self {
            private: Some(private),
        }
    }
}
