//! Per-key sequence of scripted values.

use crate::error::MockError;
use crate::policy::Policy;

/// An ordered list of values for one key, with a cursor and an exhaustion
/// policy.
///
/// A sequence holding exactly one value returns it on every call and never
/// moves its cursor. Otherwise values are returned in insertion order, and
/// the policy decides what happens once they run out.
#[derive(Debug, Clone)]
pub struct Sequence {
    key: String,
    values: Vec<f64>,
    cursor: usize,
    policy: Policy,
}

impl Sequence {
    /// Create an empty sequence for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, policy: Policy) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
            cursor: 0,
            policy,
        }
    }

    /// Appends values to the end of the sequence. The cursor is untouched.
    pub fn append(&mut self, values: impl IntoIterator<Item = f64>) {
        self.values.extend(values);
    }

    /// Returns the next value.
    ///
    /// # Errors
    ///
    /// Returns `MockError::EmptySequence` if no values were appended, and
    /// `MockError::OutOfBounds` when a multi-value sequence is exhausted under
    /// `Policy::ErrorOut`.
    pub fn next_value(&mut self) -> Result<f64, MockError> {
        match self.values.as_slice() {
            [] => return Err(MockError::EmptySequence(self.key.clone())),
            [only] => {
                tracing::trace!(key = %self.key, value = only, "dispensed single value");
                return Ok(*only);
            }
            _ => {}
        }

        if self.cursor >= self.values.len() {
            match self.policy {
                Policy::WrapAround => {
                    tracing::debug!(key = %self.key, len = self.values.len(), "wrapping around");
                    self.cursor = 0;
                }
                Policy::RepeatLast => {
                    let last = self.values[self.values.len() - 1];
                    tracing::trace!(key = %self.key, value = last, "repeating last value");
                    return Ok(last);
                }
                Policy::ErrorOut => {
                    tracing::warn!(key = %self.key, len = self.values.len(), "sequence exhausted");
                    return Err(MockError::OutOfBounds {
                        key: self.key.clone(),
                        len: self.values.len(),
                    });
                }
            }
        }

        let value = self.values[self.cursor];
        self.cursor += 1;
        tracing::trace!(key = %self.key, value, cursor = self.cursor, "dispensed value");
        Ok(value)
    }

    /// The key this sequence answers to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current exhaustion policy.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Replaces the exhaustion policy. Takes effect on the next dispense.
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` once every value has been dispensed and the next call
    /// will be decided by the policy.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.values.len() > 1 && self.cursor >= self.values.len()
    }
}
