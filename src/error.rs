use thiserror::Error;

use crate::keypad::KEYPAD_SIZE;

/// Reason a buffer was refused as keypad state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("buffer too short: expected at least {min} bytes, got {len}", min = KEYPAD_SIZE)]
    TooShort { len: usize },

    #[error("invalid flag at index {index}: {value} (must be 0 or 1)")]
    InvalidFlag { index: usize, value: u8 },
}
