// crates/issue-gate-core/src/core/decision.rs
// ============================================================================
// Module: Issue Gate Visibility Decisions
// Description: Tri-state outcome of a visibility evaluation.
// Purpose: Model authorization outcomes as data, not errors.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A visibility check yields one of three outcomes: the actor may see the
//! issue, the host should answer "forbidden", or the host should answer
//! "not found" (hiding the issue's existence). Denials carry a stable
//! reason label fit for audit sinks; they are decisions, never errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Visibility Decision
// ============================================================================

/// Outcome of evaluating an actor against an issue.
///
/// # Invariants
/// - Variants are stable for serialization and host response mapping.
/// - `reason` is a stable label, not free prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisibilityDecision {
    /// The actor may view the issue.
    Visible,
    /// The actor is denied and the host should answer "forbidden".
    Forbidden {
        /// Denial reason label.
        reason: String,
    },
    /// The actor is denied and the host should hide the issue's existence.
    NotFound {
        /// Denial reason label.
        reason: String,
    },
}

impl VisibilityDecision {
    /// Returns whether the decision permits viewing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Returns the denial reason label, if the decision denies.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Visible => None,
            Self::Forbidden { reason } | Self::NotFound { reason } => Some(reason),
        }
    }
}
