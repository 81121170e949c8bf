//! PIN derivation engines: IBM 3624 natural/offset PIN generation and
//! VISA PIN Verification Value (PVV) calculation.

pub mod decimalisation;
pub mod ibm3624;
pub mod offset;
pub mod request;
pub mod validation;
pub mod visa_pvv;

pub const MIN_PIN_LENGTH: usize = 4;
pub const MAX_PIN_LENGTH: usize = 16;
/// Pad character for short PAN validation data
pub const PAD_CHAR: char = '0';
/// Length of the IBM 3624 validation data block in hex characters
pub const VALIDATION_DATA_LEN: usize = 16;
/// PAN digits used to build the PVV TSP (excluding the check digit)
pub const PVV_PAN_LEN: usize = 11;
/// PIN digits used to build the PVV TSP
pub const PVV_PIN_LEN: usize = 4;
/// Length of a VISA PVV
pub const PVV_LEN: usize = 4;
