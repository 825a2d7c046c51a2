// crates/issue-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Issue Gate Runtime
// Description: Visibility evaluation, mutation guarding, and listing filter.
// Purpose: Wire together the decision components applied per host call.
// Dependencies: crate::runtime::{evaluator, filter, mutation}
// ============================================================================

//! ## Overview
//! The runtime holds the decision components: the visibility evaluator, the
//! mutation guard, and the listing filter composing the evaluator over
//! collections. All of it is pure and synchronous; the host supplies every
//! input per call.

// ============================================================================
// SECTION: Runtime Modules
// ============================================================================

pub mod evaluator;
pub mod filter;
pub mod mutation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluator::DenialMode;
pub use evaluator::EvaluationError;
pub use evaluator::REASON_PRIVATE_RESTRICTED;
pub use evaluator::VisibilityEvaluator;
pub use filter::filter_visible;
pub use mutation::GuardPredicate;
pub use mutation::GuardedField;
pub use mutation::GuardedValues;
pub use mutation::MutationGuard;
pub use mutation::MutationGuardBuilder;
pub use mutation::SanitizedDraft;
