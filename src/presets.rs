//! Catalog of commonly used alphabets, built once on first use and shared
//! read-only thereafter. The codec treats these and caller-built alphabets
//! identically.

use crate::alphabet::Alphabet;
use lazy_static::lazy_static;

fn build(symbols: &str, case_sensitive: bool) -> Alphabet {
    match Alphabet::new(symbols, case_sensitive) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

lazy_static! {
    pub static ref BINARY: Alphabet = build("01", false);
    pub static ref OCTAL: Alphabet = build("01234567", false);
    pub static ref DECIMAL: Alphabet = build("0123456789", false);
    pub static ref HEX: Alphabet = build("0123456789ABCDEF", false);
    pub static ref HEX_LOWER: Alphabet = build("0123456789abcdef", false);
    /// RFC 4648 base32, case-insensitive on decode.
    pub static ref BASE32: Alphabet = build("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", false);
    /// Crockford's base32: `I`, `L`, `O` are excluded from the canonical
    /// symbols but decode tolerantly to `1`, `1` and `0`, in either case.
    pub static ref BASE32_CROCKFORD: Alphabet = match Alphabet::new_with_decode_map(
        "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
        &[
            "0oO", "1iIlL", "2", "3", "4", "5", "6", "7", "8", "9", "aA", "bB", "cC", "dD", "eE", "fF", "gG",
            "hH", "jJ", "kK", "mM", "nN", "pP", "qQ", "rR", "sS", "tT", "vV", "wW", "xX", "yY", "zZ",
        ],
    ) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };
    pub static ref BASE36: Alphabet = build("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ", false);
    /// Bitcoin's base58: no `0`, `O`, `I` or `l`.
    pub static ref BASE58: Alphabet = build("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz", true);
    pub static ref BASE62: Alphabet = build("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz", true);
    pub static ref BASE64: Alphabet =
        build("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/", true);
    /// URL-safe base64. Its symbol set includes `-`, which the decoder also
    /// strips as a sign marker, so text whose first digit is `-` decodes as
    /// a negative value rather than as that digit.
    pub static ref BASE64_URL: Alphabet =
        build("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_", true);
}

/// Resolves a preset by name, e.g. `"hex"` or `"base32-crockford"`.
pub fn lookup(name: &str) -> Option<&'static Alphabet> {
    match name {
        "binary" | "base2" => Some(&BINARY),
        "octal" | "base8" => Some(&OCTAL),
        "decimal" | "base10" => Some(&DECIMAL),
        "hex" | "base16" => Some(&HEX),
        "hex-lower" => Some(&HEX_LOWER),
        "base32" => Some(&BASE32),
        "base32-crockford" | "crockford" => Some(&BASE32_CROCKFORD),
        "base36" => Some(&BASE36),
        "base58" => Some(&BASE58),
        "base62" => Some(&BASE62),
        "base64" => Some(&BASE64),
        "base64-url" => Some(&BASE64_URL),
        _ => None,
    }
}
