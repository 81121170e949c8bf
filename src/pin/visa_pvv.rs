//! VISA PIN Verification Value (PVV) calculation.
//!
//! The TSP (Transformation Security Parameter) is built from the rightmost
//! 11 PAN digits excluding the check digit, the 1-digit key index and the
//! leftmost 4 PIN digits, then TDEA-encrypted under the PVV key. The PVV is
//! extracted from the encrypted block with two left-to-right scans: decimal
//! digits first, then A-F folded to 0-5 if fewer than 4 were found.

use crate::crypto;
use crate::errors::{PinError, PinResult};
use crate::pin::request::PvvRequest;
use crate::pin::validation::is_numeric;
use crate::pin::{PVV_LEN, PVV_PAN_LEN, PVV_PIN_LEN};

/// Calculates the 4-digit VISA PVV for the request.
pub fn calculate_pvv(request: &PvvRequest) -> PinResult<String> {
    if request.pan().len() < PVV_PAN_LEN + 1 {
        return Err(PinError::InsufficientInputLength(format!(
            "PAN must be at least {} digits, got {}",
            PVV_PAN_LEN + 1,
            request.pan().len()
        )));
    }
    if request.pin().len() < PVV_PIN_LEN {
        return Err(PinError::InsufficientInputLength(format!(
            "PIN must be at least {} digits, got {}",
            PVV_PIN_LEN,
            request.pin().len()
        )));
    }
    if !is_numeric(request.pan()) {
        return Err(PinError::Validation("PAN must be numeric".to_string()));
    }
    if !is_numeric(request.pin()) {
        return Err(PinError::Validation("PIN must be numeric".to_string()));
    }
    if request.key_index().len() != 1 || !is_numeric(request.key_index()) {
        return Err(PinError::Validation(
            "key index must be a single decimal digit".to_string(),
        ));
    }

    let tsp = derive_tsp(request);
    debug!("derived TSP: {}", tsp);
    let encrypted = crypto::tdea_encrypt_block(request.key(), &tsp)?.to_uppercase();
    Ok(extract_pvv_digits(&encrypted))
}

/// rightmost 11 PAN digits excluding the check digit || key index || first 4 PIN digits
fn derive_tsp(request: &PvvRequest) -> String {
    let pan = request.pan();
    let pan_tail = &pan[pan.len() - 1 - PVV_PAN_LEN..pan.len() - 1];
    format!(
        "{}{}{}",
        pan_tail,
        request.key_index(),
        &request.pin()[..PVV_PIN_LEN]
    )
}

fn extract_pvv_digits(encrypted_tsp: &str) -> String {
    let mut pvv = String::with_capacity(PVV_LEN);
    for c in encrypted_tsp.chars() {
        if c.is_ascii_digit() {
            pvv.push(c);
        }
        if pvv.len() == PVV_LEN {
            return pvv;
        }
    }
    // not enough decimal digits, second scan folds A-F to 0-5
    for c in encrypted_tsp.chars() {
        if !c.is_ascii_digit() {
            pvv.push(fold_hex_digit(c));
        }
        if pvv.len() == PVV_LEN {
            break;
        }
    }
    pvv
}

fn fold_hex_digit(c: char) -> char {
    match c {
        'A' => '0',
        'B' => '1',
        'C' => '2',
        'D' => '3',
        'E' => '4',
        'F' => '5',
        _ => c,
    }
}
