// Profile Completion Gate: completeness predicate, ordered missing fields,
// and the account-level onboarding state machine.

pub mod completeness;
pub mod gate;
pub mod handlers;
