//! Digit-wise modular arithmetic linking natural PIN, offset and customer
//! PIN. Each position is independent: no carrying between digits.

use crate::errors::{PinError, PinResult};

/// pin[i] = (natural_pin[i] + offset[i]) mod 10
pub fn apply_offset(natural_pin: &str, offset: &str) -> PinResult<String> {
    check_equal_length(natural_pin, offset, "natural PIN", "offset")?;
    digitwise(natural_pin, offset, |n, o| (n + o) % 10)
}

/// offset[i] = (customer_pin[i] - natural_pin[i] + 10) mod 10
pub fn derive_offset(customer_pin: &str, natural_pin: &str) -> PinResult<String> {
    check_equal_length(customer_pin, natural_pin, "customer PIN", "natural PIN")?;
    digitwise(customer_pin, natural_pin, |c, n| (c + 10 - n) % 10)
}

/// natural_pin[i] = (customer_pin[i] - offset[i] + 10) mod 10
pub fn derive_natural_pin(customer_pin: &str, offset: &str) -> PinResult<String> {
    check_equal_length(customer_pin, offset, "customer PIN", "PIN offset")?;
    digitwise(customer_pin, offset, |c, o| (c + 10 - o) % 10)
}

fn check_equal_length(left: &str, right: &str, left_name: &str, right_name: &str) -> PinResult<()> {
    if left.len() != right.len() {
        return Err(PinError::LengthMismatch(format!(
            "{} and {} length must match: {} vs {}",
            left_name,
            right_name,
            left.len(),
            right.len()
        )));
    }
    Ok(())
}

fn digitwise<F>(left: &str, right: &str, op: F) -> PinResult<String>
where
    F: Fn(u32, u32) -> u32,
{
    let mut result = String::with_capacity(left.len());
    for (l, r) in left.chars().zip(right.chars()) {
        let l_digit = decimal_digit(l)?;
        let r_digit = decimal_digit(r)?;
        result.push(std::char::from_digit(op(l_digit, r_digit), 10).unwrap_or('0'));
    }
    Ok(result)
}

fn decimal_digit(c: char) -> PinResult<u32> {
    c.to_digit(10)
        .ok_or_else(|| PinError::Validation(format!("non-decimal digit in PIN material: {}", c)))
}

#[cfg(test)]
mod tests {
    use crate::errors::PinError;
    use crate::pin::offset::{apply_offset, derive_natural_pin, derive_offset};

    #[test]
    fn test_apply_offset() {
        assert_eq!(
            apply_offset("319695112151", "123456789012").unwrap(),
            "432041891163"
        );
    }

    #[test]
    fn test_derive_offset() {
        assert_eq!(
            derive_offset("432041891163", "319695112151").unwrap(),
            "123456789012"
        );
    }

    #[test]
    fn test_derive_natural_pin() {
        assert_eq!(
            derive_natural_pin("432041891163", "123456789012").unwrap(),
            "319695112151"
        );
    }

    #[test]
    fn test_offset_wraps_mod_10() {
        assert_eq!(apply_offset("9999", "1234").unwrap(), "0123");
        assert_eq!(derive_natural_pin("0123", "1234").unwrap(), "9999");
    }

    #[test]
    fn test_round_trip() {
        for (natural, offset) in [
            ("0000", "0000"),
            ("1234", "9876"),
            ("9999", "9999"),
            ("319695112151", "123456789012"),
        ] {
            let pin = apply_offset(natural, offset).unwrap();
            assert_eq!(derive_offset(&pin, natural).unwrap(), offset);
            assert_eq!(derive_natural_pin(&pin, offset).unwrap(), natural);
        }
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            apply_offset("1234", "123"),
            Err(PinError::LengthMismatch(_))
        ));
        assert!(matches!(
            derive_offset("1234", "12345"),
            Err(PinError::LengthMismatch(_))
        ));
        assert!(matches!(
            derive_natural_pin("123", "1234"),
            Err(PinError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_non_decimal_operand() {
        assert!(matches!(
            apply_offset("12A4", "1234"),
            Err(PinError::Validation(_))
        ));
    }
}
