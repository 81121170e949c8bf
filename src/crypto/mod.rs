//! TDEA (DES-EDE3) single-block primitive used by the PIN engines.
//!
//! Keys and data are explicit parameters on every call; nothing is cached
//! between calls. ECB, no padding, exactly one 8-byte block per call.

use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use des::TdesEde3;

use crate::errors::{PinError, PinResult};

const BLOCK_LEN: usize = 8;
const SINGLE_KEY_LEN: usize = 8;
const DOUBLE_KEY_LEN: usize = 16;
const TRIPLE_KEY_LEN: usize = 24;

/// TDEA-encrypts a single 8-byte block supplied as hex, returning lowercase hex.
///
/// The key may be single, double or triple length and is normalized to
/// triple length before use.
pub fn tdea_encrypt_block(key_hex: &str, data_hex: &str) -> PinResult<String> {
    let key = normalize_key(key_hex)?;
    let data = decode_block(data_hex)?;

    let block_cipher = TdesEde3::new(GenericArray::from_slice(key.as_slice()));
    let mut block = GenericArray::clone_from_slice(data.as_slice());
    block_cipher.encrypt_block(&mut block);
    Ok(hex::encode(block))
}

/// TDEA-decrypts a single 8-byte block supplied as hex, returning lowercase hex.
pub fn tdea_decrypt_block(key_hex: &str, data_hex: &str) -> PinResult<String> {
    let key = normalize_key(key_hex)?;
    let data = decode_block(data_hex)?;

    let block_cipher = TdesEde3::new(GenericArray::from_slice(key.as_slice()));
    let mut block = GenericArray::clone_from_slice(data.as_slice());
    block_cipher.decrypt_block(&mut block);
    Ok(hex::encode(block))
}

/// Expands a single or double length TDEA key into a triple length key.
///
/// Single length K becomes K||K||K, double length K1||K2 becomes K1||K2||K1,
/// triple length keys are used as-is. Any other length is rejected, never
/// truncated or padded.
fn normalize_key(key_hex: &str) -> PinResult<Vec<u8>> {
    let mut key = hex::decode(key_hex)
        .map_err(|e| PinError::InvalidKeyMaterial(format!("key is not valid hex: {}", e)))?;

    match key.len() {
        SINGLE_KEY_LEN => {
            let single = key.clone();
            key.extend_from_slice(&single);
            key.extend_from_slice(&single);
        }
        DOUBLE_KEY_LEN => {
            let first = key[..SINGLE_KEY_LEN].to_vec();
            key.extend_from_slice(&first);
        }
        TRIPLE_KEY_LEN => {}
        n => {
            return Err(PinError::InvalidKeyMaterial(format!(
                "unsupported key length: {} bytes, expected 8, 16 or 24",
                n
            )));
        }
    }

    Ok(key)
}

fn decode_block(data_hex: &str) -> PinResult<Vec<u8>> {
    let data = hex::decode(data_hex)
        .map_err(|e| PinError::InvalidKeyMaterial(format!("block is not valid hex: {}", e)))?;
    if data.len() != BLOCK_LEN {
        return Err(PinError::InvalidKeyMaterial(format!(
            "block must be exactly {} bytes, got {}",
            BLOCK_LEN,
            data.len()
        )));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use crate::crypto::{tdea_decrypt_block, tdea_encrypt_block};
    use crate::errors::PinError;

    #[test]
    fn test_encrypt_double_length_key() {
        let res =
            tdea_encrypt_block("0123456789ABCDEFFEDCBA9876543210", "1234567899876543").unwrap();
        assert_eq!(res, "db9695112b5b7d10");
    }

    #[test]
    fn test_encrypt_single_length_key() {
        let res = tdea_encrypt_block("0123456789ABCDEF", "1234567899876543").unwrap();
        assert_eq!(res, "415efc0ac81261f1");
    }

    #[test]
    fn test_single_key_matches_triple_expansion() {
        let single = tdea_encrypt_block("0123456789ABCDEF", "1234567899876543").unwrap();
        let triple = tdea_encrypt_block(
            "0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF",
            "1234567899876543",
        )
        .unwrap();
        assert_eq!(single, triple);
    }

    #[test]
    fn test_double_key_matches_triple_expansion() {
        let double =
            tdea_encrypt_block("0123456789ABCDEFFEDCBA9876543210", "1234567899876543").unwrap();
        let triple = tdea_encrypt_block(
            "0123456789ABCDEFFEDCBA98765432100123456789ABCDEF",
            "1234567899876543",
        )
        .unwrap();
        assert_eq!(double, triple);
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let key = "0123456789ABCDEFFEDCBA9876543210";
        let cipher = tdea_encrypt_block(key, "1234567899876543").unwrap();
        let plain = tdea_decrypt_block(key, &cipher).unwrap();
        assert_eq!(plain, "1234567899876543");
    }

    #[test]
    fn test_unsupported_key_length() {
        let res = tdea_encrypt_block("00112233445566778899", "1234567899876543");
        assert!(matches!(res, Err(PinError::InvalidKeyMaterial(_))));
    }

    #[test]
    fn test_key_not_hex() {
        let res = tdea_encrypt_block("ZZ23456789ABCDEF", "1234567899876543");
        assert!(matches!(res, Err(PinError::InvalidKeyMaterial(_))));
    }

    #[test]
    fn test_block_wrong_length() {
        let res = tdea_encrypt_block("0123456789ABCDEF", "12345678");
        assert!(matches!(res, Err(PinError::InvalidKeyMaterial(_))));
    }
}
