//! Numeric literal decoding for the `dec` command
//!
//! Literals carry C-style base prefixes: `0x` selects hexadecimal, `0b`
//! binary, a bare leading `0` octal, anything else decimal. The whole
//! argument must be consumed by the parse and the value must fit in 16 bits.

/// Largest value a literal may decode to.
pub const LITERAL_MAX: u32 = 0xFFFF;

/// Decode an unsigned integer literal with base autodetection.
///
/// Returns `None` for an empty digit string, characters invalid for the
/// detected base, surrounding whitespace, or a value above [`LITERAL_MAX`].
pub fn decode(text: &str) -> Option<u16> {
    let (digits, radix) = detect_base(text);
    let value = u32::from_str_radix(digits, radix).ok()?;
    if value > LITERAL_MAX {
        return None;
    }
    Some(value as u16)
}

/// Split a literal into its digit body and radix.
///
/// A leading `0` followed by anything other than `x` or `b` selects octal,
/// so `089` is an invalid octal literal rather than decimal 89. Prefixes are
/// lowercase only; the argument reaches this function with its case intact.
fn detect_base(text: &str) -> (&str, u32) {
    if let Some(hex) = text.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b") {
        (bin, 2)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(decode("0"), Some(0));
        assert_eq!(decode("7"), Some(7));
        assert_eq!(decode("42"), Some(42));
        assert_eq!(decode("65535"), Some(65535));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(decode("0x0"), Some(0));
        assert_eq!(decode("0x2a"), Some(42));
        assert_eq!(decode("0x2A"), Some(42));
        assert_eq!(decode("0xffff"), Some(65535));
    }

    #[test]
    fn test_binary() {
        assert_eq!(decode("0b0"), Some(0));
        assert_eq!(decode("0b101010"), Some(42));
        assert_eq!(decode("0b1111111111111111"), Some(65535));
    }

    #[test]
    fn test_octal() {
        assert_eq!(decode("00"), Some(0));
        assert_eq!(decode("017"), Some(15));
        assert_eq!(decode("0755"), Some(493));
        assert_eq!(decode("0177777"), Some(65535));
    }

    #[test]
    fn test_leading_zero_is_octal_not_decimal() {
        // `089` takes the octal branch and `8` is not an octal digit.
        assert_eq!(decode("089"), None);
        assert_eq!(decode("09"), None);
        assert_eq!(decode("042"), Some(34));
    }

    #[test]
    fn test_range_boundary() {
        assert_eq!(decode("65535"), Some(65535));
        assert_eq!(decode("65536"), None);
        assert_eq!(decode("0xffff"), Some(65535));
        assert_eq!(decode("0x10000"), None);
        assert_eq!(decode("0xffffffffff"), None);
    }

    #[test]
    fn test_empty_digits_fail() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("0x"), None);
        assert_eq!(decode("0b"), None);
    }

    #[test]
    fn test_trailing_junk_fails() {
        assert_eq!(decode("12a"), None);
        assert_eq!(decode("0x2ag"), None);
        assert_eq!(decode("42 "), None);
    }

    #[test]
    fn test_surrounding_whitespace_fails() {
        assert_eq!(decode(" 42"), None);
        assert_eq!(decode("\t42"), None);
    }

    #[test]
    fn test_uppercase_prefix_fails() {
        // `0X` and `0B` fall into the octal branch and the body is junk.
        assert_eq!(decode("0X2A"), None);
        assert_eq!(decode("0B11"), None);
    }

    #[test]
    fn test_full_range_round_trip() {
        for v in 0..=LITERAL_MAX {
            let expected = Some(v as u16);
            assert_eq!(decode(&format!("{}", v)), expected);
            assert_eq!(decode(&format!("{:#x}", v)), expected);
            assert_eq!(decode(&format!("{:#b}", v)), expected);
            assert_eq!(decode(&format!("0{:o}", v)), expected);
        }
    }
}
