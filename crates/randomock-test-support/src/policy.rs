//! Exhaustion policies and the process-wide default.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

/// What a sequence does when it is asked for more values than it holds.
///
/// Policies only apply to sequences with more than one value; a sequence
/// holding a single value returns it forever.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Fail the dispense with `MockError::OutOfBounds`.
    #[default]
    ErrorOut,
    /// Restart from the first value.
    WrapAround,
    /// Keep returning the last value.
    RepeatLast,
}

impl Policy {
    const fn to_u8(self) -> u8 {
        match self {
            Self::ErrorOut => 0,
            Self::WrapAround => 1,
            Self::RepeatLast => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::WrapAround,
            2 => Self::RepeatLast,
            _ => Self::ErrorOut,
        }
    }

    /// Returns the kebab-case name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ErrorOut => "error-out",
            Self::WrapAround => "wrap-around",
            Self::RepeatLast => "repeat-last",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy: {0:?} (expected error-out, wrap-around or repeat-last)")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "error-out" => Ok(Self::ErrorOut),
            "wrap-around" => Ok(Self::WrapAround),
            "repeat-last" => Ok(Self::RepeatLast),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

static DEFAULT_POLICY: AtomicU8 = AtomicU8::new(Policy::ErrorOut.to_u8());

/// Returns the policy new `MockRandomizer`s start with.
#[must_use]
pub fn default_policy() -> Policy {
    Policy::from_u8(DEFAULT_POLICY.load(Ordering::Relaxed))
}

/// Sets the policy new `MockRandomizer`s start with.
///
/// Mocks capture the default when they are created, so this never changes
/// the behavior of existing mocks or their sequences. Tests run in parallel
/// by default; set the default before creating any mock that relies on it,
/// or pass the policy explicitly with `MockRandomizer::with_policy`.
pub fn set_default_policy(policy: Policy) {
    tracing::debug!(%policy, "default policy changed");
    DEFAULT_POLICY.store(policy.to_u8(), Ordering::Relaxed);
}

/// Environment variable read by [`set_default_policy_from_env`].
pub const DEFAULT_POLICY_ENV: &str = "RANDOMOCK_DEFAULT_POLICY";

/// Parses `raw` (e.g. `"wrap-around"`) and makes it the process-wide default.
///
/// # Errors
///
/// Returns `ParsePolicyError` for an unknown name; the default is left as is.
pub fn set_default_policy_from_str(raw: &str) -> Result<Policy, ParsePolicyError> {
    let policy = raw.parse()?;
    set_default_policy(policy);
    Ok(policy)
}

/// Applies `RANDOMOCK_DEFAULT_POLICY` to the process-wide default if it is
/// set, and returns the default in effect afterwards.
///
/// Call it once from test setup so a whole suite can be switched to, say,
/// `repeat-last` without code changes.
///
/// # Errors
///
/// Returns `ParsePolicyError` if the variable holds an unknown name.
pub fn set_default_policy_from_env() -> Result<Policy, ParsePolicyError> {
    match std::env::var(DEFAULT_POLICY_ENV) {
        Ok(raw) => set_default_policy_from_str(&raw),
        Err(_) => Ok(default_policy()),
    }
}
