//! Request-shape validation for PIN generation.
//!
//! Shape failures are reported as `Validation` errors so the engine can turn
//! them into an INVDATA response. Lenient recoveries (missing or malformed
//! decimalisation table, out-of-range PIN length) are corrected in place and
//! logged with a warning code.

use crate::errors::{PinError, PinResult};
use crate::pin::decimalisation::DecimalisationTable;
use crate::pin::request::PinRequest;
use crate::pin::{MAX_PIN_LENGTH, MIN_PIN_LENGTH};

/// Normalized parameters extracted from a request that passed validation
pub(crate) struct ValidatedPin {
    pub pin_length: usize,
    pub table: DecimalisationTable,
}

pub(crate) fn validate_pin_request(request: &PinRequest) -> PinResult<ValidatedPin> {
    if !is_numeric(request.pan()) {
        return Err(PinError::Validation("PAN must be numeric".to_string()));
    }
    if !request.natural_pin() && !is_numeric(request.pin_offset()) {
        return Err(PinError::Validation("PIN offset must be numeric".to_string()));
    }
    if !is_numeric(request.pin_length()) {
        return Err(PinError::Validation("PIN length must be numeric".to_string()));
    }
    if !is_hexadecimal(request.key()) {
        return Err(PinError::Validation("key must be hexadecimal".to_string()));
    }

    let table = resolve_table(request.decimalisation_table());
    let pin_length = clamp_pin_length(request.pin_length());

    if !request.natural_pin() && pin_length != request.pin_offset().len() {
        return Err(PinError::Validation(format!(
            "PIN length {} and number of digits in offset ({}) must match",
            pin_length,
            request.pin_offset().len()
        )));
    }

    Ok(ValidatedPin { pin_length, table })
}

fn resolve_table(entries: &Option<Vec<String>>) -> DecimalisationTable {
    match entries {
        None => {
            warn!("DECE01: no decimalisation table supplied, using system default table");
            DecimalisationTable::default()
        }
        Some(entries) => match DecimalisationTable::from_entries(entries) {
            Ok(table) => table,
            Err(e) => {
                warn!("DECE02: invalid decimalisation table supplied, using system default table: {}", e);
                DecimalisationTable::default()
            }
        },
    }
}

fn clamp_pin_length(pin_length: &str) -> usize {
    // already checked numeric; a value too large for usize is over the max
    let requested: usize = pin_length.parse().unwrap_or(usize::MAX);
    if requested < MIN_PIN_LENGTH {
        warn!(
            "PINL02: PIN length cannot be less than {}, resetting PIN length to {}",
            MIN_PIN_LENGTH, MIN_PIN_LENGTH
        );
        MIN_PIN_LENGTH
    } else if requested > MAX_PIN_LENGTH {
        warn!(
            "PINL03: PIN length cannot exceed {}, resetting PIN length to {}",
            MAX_PIN_LENGTH, MAX_PIN_LENGTH
        );
        MAX_PIN_LENGTH
    } else {
        requested
    }
}

pub fn is_numeric(data: &str) -> bool {
    !data.is_empty() && data.chars().all(|c| c.is_ascii_digit())
}

pub fn is_hexadecimal(data: &str) -> bool {
    !data.is_empty() && data.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use crate::errors::PinError;
    use crate::pin::request::PinRequest;
    use crate::pin::validation::{is_hexadecimal, is_numeric, validate_pin_request};

    const KEY: &str = "0123456789ABCDEFFEDCBA9876543210";
    const PAN: &str = "1234567899876543";

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("1234567899876543"));
        assert!(!is_numeric("12345A"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_is_hexadecimal() {
        assert!(is_hexadecimal("0123456789abcdefABCDEF"));
        assert!(!is_hexadecimal("XYZ"));
        assert!(!is_hexadecimal(""));
    }

    #[test]
    fn test_valid_offset_request() {
        let req = PinRequest::new(KEY, PAN)
            .with_pin_length("12")
            .with_offset("123456789012");
        let validated = validate_pin_request(&req).unwrap();
        assert_eq!(validated.pin_length, 12);
    }

    #[test]
    fn test_non_numeric_pan_rejected() {
        let req = PinRequest::new(KEY, "12345678ABCD6543");
        assert!(matches!(
            validate_pin_request(&req),
            Err(PinError::Validation(_))
        ));
    }

    #[test]
    fn test_non_hex_key_rejected() {
        let req = PinRequest::new("NOTAKEY", PAN);
        assert!(matches!(
            validate_pin_request(&req),
            Err(PinError::Validation(_))
        ));
    }

    #[test]
    fn test_short_pin_length_clamped_to_minimum() {
        let req = PinRequest::new(KEY, PAN).with_pin_length("2");
        let validated = validate_pin_request(&req).unwrap();
        assert_eq!(validated.pin_length, 4);
    }

    #[test]
    fn test_long_pin_length_clamped_to_maximum() {
        let req = PinRequest::new(KEY, PAN).with_pin_length("99");
        let validated = validate_pin_request(&req).unwrap();
        assert_eq!(validated.pin_length, 16);
    }

    #[test]
    fn test_offset_length_mismatch_rejected() {
        let req = PinRequest::new(KEY, PAN)
            .with_pin_length("12")
            .with_offset("1234");
        assert!(matches!(
            validate_pin_request(&req),
            Err(PinError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_table_falls_back_to_default() {
        let req = PinRequest::new(KEY, PAN).with_table(vec!["0:0".to_string()]);
        let validated = validate_pin_request(&req).unwrap();
        assert_eq!(
            validated.table,
            crate::pin::decimalisation::DecimalisationTable::default()
        );
    }
}
