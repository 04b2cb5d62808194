use crate::alphabet::{Alphabet, DecodeError};
use crate::integer::Integer;

/// Strips at most one leading `-` sign. Returns the sign, the remaining
/// digit text and the position offset of the first digit in the original
/// input. Empty input, or a sign with nothing after it, is malformed.
pub(crate) fn split_sign(text: &str) -> Result<(bool, &str, usize), DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::Malformed);
    }
    match text.strip_prefix('-') {
        Some(rest) if rest.is_empty() => Err(DecodeError::Malformed),
        Some(rest) => Ok((true, rest, 1)),
        None => Ok((false, text, 0)),
    }
}

/// Parses text back into an integer of the target width.
///
/// Steps, in fixed order: strip one leading `-` as sign; reject a negative
/// sign when the target is unsigned (before any digit is looked at, never
/// by silently discarding the sign); accumulate digit values left to right
/// by Horner's method; reject out-of-range results with
/// [`DecodeError::Overflow`] instead of wrapping; apply the sign last.
///
/// Case folding for case-insensitive alphabets happens inside the symbol
/// lookup, so `decode::<u8>("ff", &hex)` and `decode::<u8>("FF", &hex)`
/// agree.
pub fn decode<T: Integer>(text: &str, alphabet: &Alphabet) -> Result<T, DecodeError> {
    let (negative, digits, offset) = split_sign(text)?;
    if negative && !T::SIGNED {
        return Err(DecodeError::NegativeNotAllowed);
    }
    let radix = alphabet.radix() as u128;
    let mut magnitude: u128 = 0;
    for (position, symbol) in digits.chars().enumerate() {
        let digit = alphabet.digit_value(symbol, position + offset)? as u128;
        magnitude = magnitude
            .checked_mul(radix)
            .and_then(|value| value.checked_add(digit))
            .ok_or(DecodeError::Overflow)?;
    }
    T::from_parts(negative, magnitude).ok_or(DecodeError::Overflow)
}

/// Non-failing form of [`decode`]: every decode error collapses to `None`.
pub fn try_decode<T: Integer>(text: &str, alphabet: &Alphabet) -> Option<T> {
    decode(text, alphabet).ok()
}
