// crates/issue-gate-core/src/runtime/filter.rs
// ============================================================================
// Module: Issue Gate Listing Filter
// Description: Visibility filtering over issue collections for index views.
// Purpose: Compose the evaluator pointwise while preserving input order.
// Dependencies: crate::core, crate::runtime::evaluator
// ============================================================================

//! ## Overview
//! Listing endpoints show the subsequence of issues the actor may see. The
//! filter composes [`VisibilityEvaluator::evaluate`] over a sequence in
//! original relative order; a contract violation on any element aborts the
//! listing rather than silently dropping it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ActorContext;
use crate::core::Issue;
use crate::runtime::evaluator::EvaluationError;
use crate::runtime::evaluator::VisibilityEvaluator;

// ============================================================================
// SECTION: Listing Filter
// ============================================================================

/// Filters a sequence of issues down to those visible to the actor.
///
/// The result equals the input filtered pointwise by
/// `evaluate(actor, issue).is_visible()`, in original relative order.
/// Inputs are never mutated; an empty input yields an empty output.
///
/// # Errors
///
/// Returns [`EvaluationError`] when any element fails the evaluator's
/// contract checks (for example a cross-project issue in the sequence).
pub fn filter_visible(
    evaluator: &VisibilityEvaluator,
    actor: &ActorContext,
    issues: impl IntoIterator<Item = Issue>,
) -> Result<Vec<Issue>, EvaluationError> {
    let mut visible = Vec::new();
    for issue in issues {
        if evaluator.evaluate(actor, &issue)?.is_visible() {
            visible.push(issue);
        }
    }
    Ok(visible)
}
