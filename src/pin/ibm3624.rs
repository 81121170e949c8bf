//! IBM 3624 natural and offset PIN generation.
//!
//! The natural PIN is derived by TDEA-encrypting PAN validation data under
//! the PIN verification key and decimalising the result. An offset PIN adds
//! a digit-wise offset on top, letting a customer-chosen PIN differ from the
//! natural PIN while remaining derivable. Supports PIN lengths 4 through 16.

use crate::crypto;
use crate::errors::PinResult;
use crate::pin::request::{PinRequest, PinResponse};
use crate::pin::validation::validate_pin_request;
use crate::pin::{offset, PAD_CHAR, VALIDATION_DATA_LEN};

pub use crate::pin::offset::{derive_natural_pin, derive_offset};

/// Generates an IBM 3624 PIN for the request.
///
/// A request that fails shape validation yields an INVDATA response without
/// touching the cipher; key-material and cipher failures abort the request
/// with an `Err`.
pub fn generate_pin(request: &PinRequest) -> PinResult<PinResponse> {
    let validated = match validate_pin_request(request) {
        Ok(v) => v,
        Err(e) => {
            warn!("rejecting PIN generation request: {}", e);
            return Ok(PinResponse::inv_data());
        }
    };

    let validation_data = derive_validation_data(request.pan());
    let encrypted = crypto::tdea_encrypt_block(request.key(), &validation_data)?.to_uppercase();
    let intermediate = validated.table.substitute(&encrypted)?;
    let natural_pin = &intermediate[..validated.pin_length];

    let pin = if request.natural_pin() {
        natural_pin.to_string()
    } else {
        offset::apply_offset(natural_pin, request.pin_offset())?
    };

    Ok(PinResponse::success(
        pin,
        validated.pin_length,
        request.pin_offset(),
    ))
}

/// Derives the 16-character PIN validation data from the PAN.
///
/// A PAN of 16 or more digits contributes its rightmost 16; a shorter PAN is
/// right-padded with '0'.
pub fn derive_validation_data(pan: &str) -> String {
    if pan.len() >= VALIDATION_DATA_LEN {
        pan[pan.len() - VALIDATION_DATA_LEN..].to_string()
    } else {
        let mut data = pan.to_string();
        while data.len() < VALIDATION_DATA_LEN {
            data.push(PAD_CHAR);
        }
        data
    }
}
