// Input
use std::{convert::TryFrom, fmt};

use log::{debug, trace};

use crate::error::InvalidStateError;

// One flag per digit key, 0-9
pub const KEYPAD_SIZE: usize = 10;

const RELEASED: u8 = 0;
const PRESSED: u8 = 1;

/// Pressed/released flags of a ten-key digit keypad.
///
/// Index `i` holds the state of digit key `i`. Every flag is either 0 or 1,
/// which is checked whenever state is taken from a caller buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeypadState {
    keys: [u8; KEYPAD_SIZE],
}

impl KeypadState {
    pub const LEN: usize = KEYPAD_SIZE;

    // Pub

    pub fn new() -> Self {
        Self {
            keys: [RELEASED; KEYPAD_SIZE],
        }
    }

    /// Builds a state from the first [`KEYPAD_SIZE`] bytes of `buffer`.
    /// Anything after that is ignored.
    pub fn with_keys(buffer: &[u8]) -> Result<Self, InvalidStateError> {
        let keys = Self::accept(buffer)?;
        Ok(Self { keys })
    }

    pub fn create(buffer: &[u8]) -> Result<Self, InvalidStateError> {
        Self::with_keys(buffer)
    }

    pub fn check_buffer(&self, buffer: &[u8]) -> bool {
        Self::is_valid_buffer(buffer)
    }

    pub fn is_valid_buffer(buffer: &[u8]) -> bool {
        Self::validate(buffer).is_ok()
    }

    /// Checks `buffer` and returns the flags it would load, or the first
    /// problem found.
    pub fn validate(buffer: &[u8]) -> Result<[u8; KEYPAD_SIZE], InvalidStateError> {
        if buffer.len() < KEYPAD_SIZE {
            return Err(InvalidStateError::TooShort { len: buffer.len() });
        }

        let mut keys = [RELEASED; KEYPAD_SIZE];
        for (index, (slot, &value)) in keys.iter_mut().zip(buffer).enumerate() {
            match value {
                RELEASED | PRESSED => *slot = value,
                _ => return Err(InvalidStateError::InvalidFlag { index, value }),
            }
        }

        Ok(keys)
    }

    /// Replaces the whole state. On error the current flags are kept.
    pub fn load_from_buffer(&mut self, buffer: &[u8]) -> Result<(), InvalidStateError> {
        self.keys = Self::accept(buffer)?;
        Ok(())
    }

    /// Snapshot copy, later loads do not affect it.
    pub fn to_buffer(&self) -> [u8; KEYPAD_SIZE] {
        self.keys
    }

    pub fn as_bytes(&self) -> &[u8; KEYPAD_SIZE] {
        &self.keys
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        Self::byte_len()
    }

    pub const fn byte_len() -> usize {
        KEYPAD_SIZE
    }

    pub fn is_pressed(&self, digit: usize) -> Option<bool> {
        self.keys.get(digit).map(|&flag| flag == PRESSED)
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag == PRESSED)
            .map(|(digit, _)| digit)
    }

    pub fn is_idle(&self) -> bool {
        self.keys.iter().all(|&flag| flag == RELEASED)
    }

    // Priv

    fn accept(buffer: &[u8]) -> Result<[u8; KEYPAD_SIZE], InvalidStateError> {
        let keys = Self::validate(buffer).map_err(|err| {
            debug!("Rejected keypad buffer: {}", err);
            err
        })?;

        if buffer.len() > KEYPAD_SIZE {
            trace!(
                "Dropping {} trailing bytes from keypad buffer",
                buffer.len() - KEYPAD_SIZE
            );
        }

        Ok(keys)
    }
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[u8]> for KeypadState {
    type Error = InvalidStateError;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        Self::create(buffer)
    }
}

impl From<KeypadState> for [u8; KEYPAD_SIZE] {
    fn from(state: KeypadState) -> Self {
        state.keys
    }
}

impl AsRef<[u8]> for KeypadState {
    fn as_ref(&self) -> &[u8] {
        &self.keys
    }
}

impl fmt::Display for KeypadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.keys)
    }
}
