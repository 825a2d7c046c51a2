// crates/issue-gate-core/tests/mutation.rs
// ============================================================================
// Module: Mutation Guard Tests
// Description: Validate guarded sanitization of the privacy flag.
// Purpose: Ensure silent downgrade semantics and guard-list ordering hold.
// Dependencies: issue-gate-core
// ============================================================================

//! Mutation-guard tests: the silent downgrade for unauthorized writes, the
//! unchecked-checkbox default for authorized absent requests, discarded
//! field reporting, and guard-list ordering.

use issue_gate_core::ActorContext;
use issue_gate_core::GuardedField;
use issue_gate_core::GuardedValues;
use issue_gate_core::IssueDraft;
use issue_gate_core::MutationGuard;
use issue_gate_core::Permission;
use issue_gate_core::ProjectId;
use issue_gate_core::UserId;

type TestResult = Result<(), String>;

fn actor(permissions: impl IntoIterator<Item = Permission>) -> Result<ActorContext, String> {
    let user_id =
        UserId::from_raw(2).ok_or_else(|| "user id must be non-zero".to_string())?;
    let project_id =
        ProjectId::from_raw(1).ok_or_else(|| "project id must be non-zero".to_string())?;
    Ok(ActorContext::new(user_id, project_id, false, permissions))
}

#[test]
fn unauthorized_private_request_is_silently_downgraded() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([])?;
    let stored = guard.sanitize_private_flag(&requester, Some(true), false);
    if stored {
        Err("unauthorized request must fall back to the current value".to_string())
    } else {
        Ok(())
    }
}

#[test]
fn authorized_private_request_is_honored() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([Permission::ManagePrivateIssues])?;
    let stored = guard.sanitize_private_flag(&requester, Some(true), false);
    if stored {
        Ok(())
    } else {
        Err("authorized request must be honored".to_string())
    }
}

#[test]
fn authorized_absent_request_defaults_to_false() -> TestResult {
    // Unchecked-checkbox convention: a holder submitting no value clears.
    let guard = MutationGuard::default();
    let requester = actor([Permission::ManagePrivateIssues])?;
    let stored = guard.sanitize_private_flag(&requester, None, true);
    if stored {
        Err("holder with absent request must resolve to false".to_string())
    } else {
        Ok(())
    }
}

#[test]
fn authorized_explicit_false_clears_on_update() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([Permission::ManagePrivateIssues])?;
    let stored = guard.sanitize_private_flag(&requester, Some(false), true);
    if stored {
        Err("holder must be able to clear the flag".to_string())
    } else {
        Ok(())
    }
}

#[test]
fn unauthorized_update_keeps_current_value() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([])?;
    let stored = guard.sanitize_private_flag(&requester, Some(false), true);
    if stored {
        Ok(())
    } else {
        Err("unauthorized clear attempt must keep the current value".to_string())
    }
}

#[test]
fn view_permission_alone_does_not_authorize_mutation() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([Permission::ViewPrivateIssues])?;
    let stored = guard.sanitize_private_flag(&requester, Some(true), false);
    if stored {
        Err("view grant must not authorize flag writes".to_string())
    } else {
        Ok(())
    }
}

#[test]
fn sanitize_draft_reports_discarded_fields() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([])?;
    let sanitized = guard.sanitize_draft(
        &requester,
        IssueDraft::with_private(true),
        GuardedValues { private: false },
    );
    if sanitized.values.private {
        return Err("discarded request must not change the value".to_string());
    }
    if sanitized.discarded == vec![GuardedField::Private] {
        Ok(())
    } else {
        Err(format!("expected discard report, got {:?}", sanitized.discarded))
    }
}

#[test]
fn honored_request_reports_nothing_discarded() -> TestResult {
    let guard = MutationGuard::default();
    let requester = actor([Permission::ManagePrivateIssues])?;
    let sanitized = guard.sanitize_draft(
        &requester,
        IssueDraft::with_private(true),
        GuardedValues { private: false },
    );
    if !sanitized.values.private {
        return Err("honored request must apply".to_string());
    }
    if sanitized.discarded.is_empty() {
        Ok(())
    } else {
        Err(format!("expected empty discard report, got {:?}", sanitized.discarded))
    }
}

#[test]
fn unguarded_field_fails_closed() -> TestResult {
    // An empty guard list means no field may be written.
    let guard = MutationGuard::builder().build();
    let requester = actor([Permission::ManagePrivateIssues])?;
    let sanitized = guard.sanitize_draft(
        &requester,
        IssueDraft::with_private(true),
        GuardedValues { private: false },
    );
    if sanitized.values.private {
        return Err("unguarded field must not be writable".to_string());
    }
    if sanitized.discarded == vec![GuardedField::Private] {
        Ok(())
    } else {
        Err(format!("expected discard report, got {:?}", sanitized.discarded))
    }
}

#[test]
fn first_guard_for_a_field_decides() -> TestResult {
    let guard = MutationGuard::builder()
        .guard(GuardedField::Private, |_| true)
        .guard(GuardedField::Private, |_| false)
        .build();
    let requester = actor([])?;
    let stored = guard.sanitize_private_flag(&requester, Some(true), false);
    if stored {
        Ok(())
    } else {
        Err("the first registered guard must decide the field".to_string())
    }
}
