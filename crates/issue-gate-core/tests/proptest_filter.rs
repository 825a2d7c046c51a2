// crates/issue-gate-core/tests/proptest_filter.rs
// ============================================================================
// Module: Listing Filter Property-Based Tests
// Description: Property tests for filter ordering and pointwise agreement.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for listing-filter invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use issue_gate_core::ActorContext;
use issue_gate_core::Issue;
use issue_gate_core::IssueId;
use issue_gate_core::Permission;
use issue_gate_core::ProjectId;
use issue_gate_core::UserId;
use issue_gate_core::VisibilityEvaluator;
use issue_gate_core::filter_visible;
use proptest::prelude::*;

/// Fixed project scope shared by generated actors and issues.
const PROJECT: u64 = 1;

fn issue_strategy() -> impl Strategy<Value = Issue> {
    (1_u64 .. 64, 1_u64 .. 8, proptest::option::of(1_u64 .. 8), any::<bool>()).prop_map(
        |(id, author, assignee, private)| Issue {
            issue_id: IssueId::from_raw(id).unwrap_or(IssueId::new(std::num::NonZeroU64::MIN)),
            project_id: ProjectId::from_raw(PROJECT)
                .unwrap_or(ProjectId::new(std::num::NonZeroU64::MIN)),
            author: UserId::from_raw(author).unwrap_or(UserId::new(std::num::NonZeroU64::MIN)),
            assignee: assignee.and_then(UserId::from_raw),
            private,
            parent: None,
        },
    )
}

fn actor_strategy() -> impl Strategy<Value = ActorContext> {
    (1_u64 .. 8, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(user, is_admin, view, manage)| {
            let mut permissions = Vec::new();
            if view {
                permissions.push(Permission::ViewPrivateIssues);
            }
            if manage {
                permissions.push(Permission::ManagePrivateIssues);
            }
            ActorContext::new(
                UserId::from_raw(user).unwrap_or(UserId::new(std::num::NonZeroU64::MIN)),
                ProjectId::from_raw(PROJECT).unwrap_or(ProjectId::new(std::num::NonZeroU64::MIN)),
                is_admin,
                permissions,
            )
        },
    )
}

proptest! {
    #[test]
    fn filter_equals_pointwise_evaluation(
        actor in actor_strategy(),
        issues in prop::collection::vec(issue_strategy(), 0 .. 32),
    ) {
        let evaluator = VisibilityEvaluator::default();
        let visible = filter_visible(&evaluator, &actor, issues.clone())?;
        let mut expected = Vec::new();
        for issue in issues {
            if evaluator.evaluate(&actor, &issue)?.is_visible() {
                expected.push(issue);
            }
        }
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn filter_output_is_an_ordered_subsequence(
        actor in actor_strategy(),
        issues in prop::collection::vec(issue_strategy(), 0 .. 32),
    ) {
        let evaluator = VisibilityEvaluator::default();
        let visible = filter_visible(&evaluator, &actor, issues.clone())?;
        prop_assert!(visible.len() <= issues.len());
        let mut cursor = issues.iter();
        for kept in &visible {
            prop_assert!(cursor.any(|candidate| candidate == kept));
        }
    }

    #[test]
    fn evaluation_never_panics_and_is_deterministic(
        actor in actor_strategy(),
        issue in issue_strategy(),
    ) {
        let evaluator = VisibilityEvaluator::default();
        let first = evaluator.evaluate(&actor, &issue)?;
        let second = evaluator.evaluate(&actor, &issue)?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_private_issues_are_visible_to_every_actor(
        actor in actor_strategy(),
        mut issue in issue_strategy(),
    ) {
        issue.private = false;
        let evaluator = VisibilityEvaluator::default();
        let decision = evaluator.evaluate(&actor, &issue)?;
        prop_assert!(decision.is_visible());
    }
}
