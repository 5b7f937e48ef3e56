use std::fmt;

/// Returned when a value cannot be read back from a bit stream, either because
/// the stream ran out of bits or because the bits do not form a valid value
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SerdeErr;

impl fmt::Display for SerdeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not deserialize value from bit stream")
    }
}

impl std::error::Error for SerdeErr {}
