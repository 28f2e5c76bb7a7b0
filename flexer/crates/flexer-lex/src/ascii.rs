//! Byte classification for the scanner.
//!
//! The scanner works on raw bytes, so every class here is ASCII-only; any
//! byte outside these classes is left to the symbol table or becomes an
//! invalid token.

/// Checks if a byte is whitespace the scanner discards.
///
/// Matches the C `isspace` set: space, tab, newline, vertical tab, form
/// feed, and carriage return.
///
/// # Example
///
/// ```
/// use flexer_lex::ascii::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(0x0B));
/// assert!(!is_whitespace(b'_'));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Checks if a byte can start an identifier: an ASCII letter or underscore.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier.
///
/// # Example
///
/// ```
/// use flexer_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'7'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte is a valid digit in the given radix (2, 8, 10 or 16).
#[inline]
pub fn is_digit_in_base(b: u8, radix: u32) -> bool {
    match radix {
        2 => matches!(b, b'0' | b'1'),
        8 => matches!(b, b'0'..=b'7'),
        10 => b.is_ascii_digit(),
        16 => b.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Returns the value of a digit in the given radix, or `None` if the byte is
/// not a digit of that radix.
///
/// # Example
///
/// ```
/// use flexer_lex::ascii::digit_value;
///
/// assert_eq!(digit_value(b'f', 16), Some(15));
/// assert_eq!(digit_value(b'2', 2), None);
/// assert_eq!(digit_value(b'_', 10), None);
/// ```
#[inline]
pub fn digit_value(b: u8, radix: u32) -> Option<u64> {
    if !is_digit_in_base(b, radix) {
        return None;
    }
    let value = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => return None,
    };
    Some(u64::from(value))
}
