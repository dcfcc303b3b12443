use thiserror::Error;

/// Errors raised by codec lookups and explicit sealing.
///
/// Validation never returns one of these: an invalid key id is a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyIdError {
    #[error("symbol {0:?} is not part of the key alphabet")]
    UnknownSymbol(char),

    #[error("code {0} is outside the alphabet range 0..63")]
    CodeOutOfRange(u32),

    #[error("expected {expected} data symbols, got {actual}")]
    DataLength { expected: usize, actual: usize },

    #[error("no check symbol closes a weighted sum of {0} at a doubled position")]
    Unsealable(u32),
}

pub type Result<T> = std::result::Result<T, KeyIdError>;
