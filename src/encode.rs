use crate::alphabet::Alphabet;
use crate::integer::Integer;

/// Renders an integer as text in the alphabet's radix, most significant
/// digit first, with no superfluous leading zero digits. Zero encodes as
/// the single digit-0 symbol; negative values get a leading `-`.
///
/// Encoding never fails for any representable value of any supported width.
pub fn encode<T: Integer>(value: T, alphabet: &Alphabet) -> String {
    let (negative, mut magnitude) = value.to_parts();
    let radix = alphabet.radix() as u128;
    let mut symbols = Vec::new();
    loop {
        symbols.push(alphabet.symbol_for((magnitude % radix) as usize));
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        symbols.push('-');
    }
    symbols.iter().rev().collect()
}
