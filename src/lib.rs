//! Arbitrary-radix integer codec.
//!
//! Renders signed and unsigned integers of every machine width from 8 to 64
//! bits, plus arbitrary-precision integers, as text over a caller-supplied
//! symbol alphabet, and parses that text back. Alphabets may be
//! case-insensitive or carry a many-to-one decode map for tolerant schemes
//! such as Crockford base32. For every valid alphabet and representable
//! value, `decode(encode(v)) == v`.
//!
//! ```
//! use radix_codec::{decode, encode, presets};
//!
//! assert_eq!(encode(255u32, &presets::HEX), "FF");
//! assert_eq!(decode::<u32>("ff", &presets::HEX), Ok(255));
//! assert_eq!(encode(i8::MIN, &presets::BINARY), "-10000000");
//! ```

pub mod alphabet;
pub mod big;
mod decode;
mod encode;
mod integer;
pub mod presets;

pub use alphabet::{Alphabet, ConstructionError, DecodeError};
pub use decode::{decode, try_decode};
pub use encode::encode;
pub use integer::Integer;
