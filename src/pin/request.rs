//! Request and response value objects for the PIN engines.
//!
//! All of these are request-scoped: they hold no derived state and live only
//! for the duration of one derivation call. Keys are caller-supplied per
//! call and never cached by the engines.

use std::fmt::{Display, Formatter};

use crate::pin::MIN_PIN_LENGTH;

/// Status returned on a [`PinResponse`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseCode {
    Success,
    InvData,
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ResponseCode::Success => f.write_str("SUCCESS"),
            ResponseCode::InvData => f.write_str("INVDATA"),
        }
    }
}

/// An IBM 3624 PIN generation request.
///
/// Defaults to a natural-PIN request of minimum length; use the builder
/// methods to ask for an offset PIN, a different length or a custom
/// decimalisation table.
#[derive(Debug, Clone)]
pub struct PinRequest {
    key: String,
    pan: String,
    decimalisation_table: Option<Vec<String>>,
    pin_offset: String,
    pin_length: String,
    natural_pin: bool,
}

impl PinRequest {
    pub fn new(key: &str, pan: &str) -> PinRequest {
        PinRequest {
            key: key.to_string(),
            pan: pan.to_string(),
            decimalisation_table: None,
            pin_offset: String::new(),
            pin_length: MIN_PIN_LENGTH.to_string(),
            natural_pin: true,
        }
    }

    /// Asks for an offset PIN rather than the natural PIN
    pub fn with_offset(mut self, offset: &str) -> PinRequest {
        self.pin_offset = offset.to_string();
        self.natural_pin = false;
        self
    }

    pub fn with_pin_length(mut self, length: &str) -> PinRequest {
        self.pin_length = length.to_string();
        self
    }

    /// Supplies an external decimalisation table as 16 "src:dst" entries
    pub fn with_table(mut self, entries: Vec<String>) -> PinRequest {
        self.decimalisation_table = Some(entries);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn pan(&self) -> &str {
        &self.pan
    }

    pub fn decimalisation_table(&self) -> &Option<Vec<String>> {
        &self.decimalisation_table
    }

    pub fn pin_offset(&self) -> &str {
        &self.pin_offset
    }

    pub fn pin_length(&self) -> &str {
        &self.pin_length
    }

    pub fn natural_pin(&self) -> bool {
        self.natural_pin
    }
}

/// Result of an IBM 3624 PIN generation request. Created fresh per request,
/// immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct PinResponse {
    pin: String,
    pin_length: usize,
    pin_offset: String,
    response_code: ResponseCode,
}

impl PinResponse {
    pub(crate) fn success(pin: String, pin_length: usize, pin_offset: &str) -> PinResponse {
        PinResponse {
            pin,
            pin_length,
            pin_offset: pin_offset.to_string(),
            response_code: ResponseCode::Success,
        }
    }

    pub(crate) fn inv_data() -> PinResponse {
        PinResponse {
            pin: String::new(),
            pin_length: 0,
            pin_offset: String::new(),
            response_code: ResponseCode::InvData,
        }
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn pin_length(&self) -> usize {
        self.pin_length
    }

    pub fn pin_offset(&self) -> &str {
        &self.pin_offset
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }
}

/// A VISA PVV calculation request.
#[derive(Debug, Clone)]
pub struct PvvRequest {
    key: String,
    key_index: String,
    pan: String,
    pin: String,
}

impl PvvRequest {
    pub fn new(key: &str, key_index: &str, pan: &str, pin: &str) -> PvvRequest {
        PvvRequest {
            key: key.to_string(),
            key_index: key_index.to_string(),
            pan: pan.to_string(),
            pin: pin.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn key_index(&self) -> &str {
        &self.key_index
    }

    pub fn pan(&self) -> &str {
        &self.pan
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }
}
