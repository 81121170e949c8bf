//! Error types shared by the crypto primitive and the PIN engines.
//!
//! Every failure is recoverable by the caller: the library never terminates
//! the process. Request-shape problems are additionally surfaced as an
//! INVDATA response code by the IBM 3624 engine so batch callers can keep
//! processing other requests.

use thiserror::Error;

pub type PinResult<T> = Result<T, PinError>;

#[derive(Error, Debug, PartialEq)]
pub enum PinError {
    /// Request fields that fail shape checks: non-numeric PAN/offset/length,
    /// non-hex key, malformed substitution input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Key or block hex that does not decode, or decodes to an unsupported
    /// length.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Offset-arithmetic operands of unequal length.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// PVV inputs shorter than the standard requires.
    #[error("insufficient input length: {0}")]
    InsufficientInputLength(String),
}
