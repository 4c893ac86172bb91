//! Shared test mocks for code that draws from a `Randomizer`.
//!
//! `MockRandomizer` replaces real randomness with pre-programmed sequences
//! of values, one per key, so tests can pin down every random input of the
//! code under test.

mod convert;
mod error;
mod policy;
mod rng;
mod sequence;

pub use error::MockError;
pub use policy::{
    DEFAULT_POLICY_ENV, ParsePolicyError, Policy, default_policy, set_default_policy,
    set_default_policy_from_env, set_default_policy_from_str,
};
pub use rng::MockRandomizer;
pub use sequence::Sequence;
