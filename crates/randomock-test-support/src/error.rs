//! Mock error types.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Failures raised while dispensing scripted values.
///
/// `MockRandomizer`'s `Randomizer` methods raise these as panic payloads
/// (`std::panic::panic_any`), so a test fails loudly unless it catches the
/// panic and downcasts the payload to `MockError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    /// More values were requested than were registered, under
    /// `Policy::ErrorOut`.
    #[error("more calls to key {key:?} than return values ({len})")]
    OutOfBounds {
        /// The exhausted key.
        key: String,
        /// How many values the key holds.
        len: usize,
    },

    /// No values were ever registered under the key.
    #[error("no return values registered for key {0:?}")]
    UnregisteredKey(String),

    /// The key was registered with zero values and then dispensed from.
    #[error("key {0:?} was registered without any return values")]
    EmptySequence(String),
}

impl MockError {
    /// Runs `f`, turning a `MockError` panic raised inside it into an `Err`.
    /// Any other panic keeps unwinding.
    ///
    /// # Errors
    ///
    /// Returns the `MockError` that `f` panicked with.
    pub fn catch<T>(f: impl FnOnce() -> T) -> Result<T, MockError> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Ok(value),
            Err(payload) => match payload.downcast::<MockError>() {
                Ok(err) => Err(*err),
                Err(other) => panic::resume_unwind(other),
            },
        }
    }
}
