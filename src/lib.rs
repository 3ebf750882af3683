//! Pressed/released state of a ten-key digit keypad, with validated
//! conversion to and from its 10-byte buffer form.

pub mod error;
pub mod keypad;

pub use error::InvalidStateError;
pub use keypad::{KeypadState, KEYPAD_SIZE};
