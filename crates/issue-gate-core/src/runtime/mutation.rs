// crates/issue-gate-core/src/runtime/mutation.rs
// ============================================================================
// Module: Issue Gate Mutation Guard
// Description: Guarded sanitization of requested issue fields on create/update.
// Purpose: Degrade unauthorized field writes to safe values instead of failing.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! The mutation guard holds an explicit, ordered list of
//! (field, guard-predicate) pairs. Sanitizing a draft walks that list: a
//! requested field whose predicate accepts the actor is honored, anything
//! else silently falls back to the current stored value. The request as a
//! whole never fails because one attribute was out of reach; the host
//! applies the rest and may log the discarded fields.
//!
//! For the privacy flag the asymmetry is deliberate and load-bearing: an
//! authorized absent request means `false` (the unchecked-checkbox
//! convention), while an unauthorized request of any shape keeps the
//! current value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ActorContext;
use crate::core::IssueDraft;
use crate::core::Permission;

// ============================================================================
// SECTION: Guarded Fields
// ============================================================================

/// Issue fields whose writes are gated by a guard predicate.
///
/// # Invariants
/// - The set of variants is closed; fields join the guard list by name
///   here, never by reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardedField {
    /// The privacy flag.
    Private,
}

/// Predicate deciding whether an actor may write a guarded field.
pub type GuardPredicate = fn(&ActorContext) -> bool;

/// One entry in the ordered guard list.
#[derive(Debug, Clone, Copy)]
struct FieldGuard {
    /// Field the guard applies to.
    field: GuardedField,
    /// Predicate the actor must satisfy.
    predicate: GuardPredicate,
}

// ============================================================================
// SECTION: Guarded Values
// ============================================================================

/// Current stored values for all guarded fields.
///
/// # Invariants
/// - `Default` yields the safe values used for a brand-new issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardedValues {
    /// Current privacy flag (false for a new issue).
    pub private: bool,
}

/// Result of sanitizing a draft against the guard list.
///
/// # Invariants
/// - `values` holds the final field values to persist.
/// - `discarded` lists fields the request asked for without authorization,
///   in guard-list order, for host-side audit logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedDraft {
    /// Final values for all guarded fields.
    pub values: GuardedValues,
    /// Guarded fields whose requested values were discarded.
    pub discarded: Vec<GuardedField>,
}

// ============================================================================
// SECTION: Mutation Guard
// ============================================================================

/// Ordered list of field guards applied to create/update drafts.
///
/// # Invariants
/// - Guards apply in registration order; the first guard for a field
///   decides it.
/// - A field with no registered guard fails closed: requests for it are
///   always discarded.
#[derive(Debug, Clone)]
pub struct MutationGuard {
    /// Ordered guard list.
    guards: Vec<FieldGuard>,
}

impl MutationGuard {
    /// Starts a guard-list builder.
    #[must_use]
    pub const fn builder() -> MutationGuardBuilder {
        MutationGuardBuilder { guards: Vec::new() }
    }

    /// Sanitizes a draft against the guard list.
    ///
    /// Each guarded field resolves independently: honored when requested by
    /// an actor the guard accepts, reset to the current value otherwise.
    /// An accepted actor's absent request resolves to `false` rather than
    /// the current value.
    #[must_use]
    pub fn sanitize_draft(
        &self,
        actor: &ActorContext,
        draft: IssueDraft,
        current: GuardedValues,
    ) -> SanitizedDraft {
        let mut values = current;
        let mut discarded = Vec::new();
        let mut decided = Vec::new();

        for guard in &self.guards {
            if decided.contains(&guard.field) {
                continue;
            }
            decided.push(guard.field);

            let requested = Self::requested_value(&draft, guard.field);
            if (guard.predicate)(actor) {
                Self::apply_value(&mut values, guard.field, requested.unwrap_or(false));
            } else if requested.is_some() {
                discarded.push(guard.field);
            }
        }

        if !decided.contains(&GuardedField::Private) && draft.private.is_some() {
            discarded.push(GuardedField::Private);
        }

        SanitizedDraft { values, discarded }
    }

    /// Sanitizes the privacy flag for a create or update request.
    ///
    /// Honors the requested value (absent meaning `false`) when the guard
    /// accepts the actor; otherwise returns `current` unchanged.
    #[must_use]
    pub fn sanitize_private_flag(
        &self,
        actor: &ActorContext,
        requested: Option<bool>,
        current: bool,
    ) -> bool {
        let draft = IssueDraft { private: requested };
        let sanitized = self.sanitize_draft(actor, draft, GuardedValues { private: current });
        sanitized.values.private
    }

    /// Extracts the requested value for a guarded field from a draft.
    fn requested_value(draft: &IssueDraft, field: GuardedField) -> Option<bool> {
        match field {
            GuardedField::Private => draft.private,
        }
    }

    /// Writes a resolved value into the guarded-value set.
    fn apply_value(values: &mut GuardedValues, field: GuardedField, value: bool) {
        match field {
            GuardedField::Private => values.private = value,
        }
    }
}

impl Default for MutationGuard {
    /// The stock guard list: the privacy flag gated on
    /// [`Permission::ManagePrivateIssues`].
    fn default() -> Self {
        Self::builder()
            .guard(GuardedField::Private, |actor| {
                actor.has(Permission::ManagePrivateIssues)
            })
            .build()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder assembling the ordered guard list.
///
/// # Invariants
/// - Registration order is preserved verbatim into the guard.
#[derive(Debug, Clone)]
pub struct MutationGuardBuilder {
    /// Guards registered so far, in order.
    guards: Vec<FieldGuard>,
}

impl MutationGuardBuilder {
    /// Appends a (field, predicate) pair to the guard list.
    #[must_use]
    pub fn guard(mut self, field: GuardedField, predicate: GuardPredicate) -> Self {
        self.guards.push(FieldGuard { field, predicate });
        self
    }

    /// Finalizes the guard list.
    #[must_use]
    pub fn build(self) -> MutationGuard {
        MutationGuard {
            guards: self.guards,
        }
    }
}
