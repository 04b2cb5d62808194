use crate::alphabet::{Alphabet, DecodeError};
use crate::decode::split_sign;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Arbitrary-precision counterpart of [`crate::decode`]. No width means no
/// overflow: the error surface is [`DecodeError::Malformed`] and
/// [`DecodeError::InvalidSymbol`] only.
pub fn decode(text: &str, alphabet: &Alphabet) -> Result<BigInt, DecodeError> {
    let (negative, digits, offset) = split_sign(text)?;
    let radix = BigUint::from(alphabet.radix());
    let mut magnitude = BigUint::zero();
    for (position, symbol) in digits.chars().enumerate() {
        let digit = alphabet.digit_value(symbol, position + offset)?;
        magnitude = magnitude * &radix + digit;
    }
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    // from_biguint normalizes the sign of a zero magnitude to NoSign.
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Non-failing form of [`decode`].
pub fn try_decode(text: &str, alphabet: &Alphabet) -> Option<BigInt> {
    decode(text, alphabet).ok()
}
