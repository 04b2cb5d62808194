use crate::alphabet::Alphabet;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

/// Arbitrary-precision counterpart of [`crate::encode`]: same digit loop,
/// carried out on a `BigUint` magnitude.
pub fn encode(value: &BigInt, alphabet: &Alphabet) -> String {
    let radix = BigUint::from(alphabet.radix());
    let mut magnitude = value.magnitude().clone();
    let mut symbols = Vec::new();
    loop {
        // The remainder is below the radix, so it always fits a usize.
        let digit = (&magnitude % &radix).to_usize().unwrap();
        symbols.push(alphabet.symbol_for(digit));
        magnitude /= &radix;
        if magnitude.is_zero() {
            break;
        }
    }
    if value.sign() == Sign::Minus {
        symbols.push('-');
    }
    symbols.iter().rev().collect()
}
