use num_bigint::{BigInt, Sign};
use quickcheck_macros::quickcheck;
use radix_codec::{big, decode, encode, presets, try_decode, Alphabet};

#[quickcheck]
fn round_trip_u8_binary(value: u8) -> bool {
    decode::<u8>(&encode(value, &presets::BINARY), &presets::BINARY) == Ok(value)
}

#[quickcheck]
fn round_trip_i8_octal(value: i8) -> bool {
    decode::<i8>(&encode(value, &presets::OCTAL), &presets::OCTAL) == Ok(value)
}

#[quickcheck]
fn round_trip_u16_hex(value: u16) -> bool {
    decode::<u16>(&encode(value, &presets::HEX), &presets::HEX) == Ok(value)
}

#[quickcheck]
fn round_trip_i16_decimal(value: i16) -> bool {
    decode::<i16>(&encode(value, &presets::DECIMAL), &presets::DECIMAL) == Ok(value)
}

#[quickcheck]
fn round_trip_u32_crockford(value: u32) -> bool {
    decode::<u32>(&encode(value, &presets::BASE32_CROCKFORD), &presets::BASE32_CROCKFORD) == Ok(value)
}

#[quickcheck]
fn round_trip_i32_base36(value: i32) -> bool {
    decode::<i32>(&encode(value, &presets::BASE36), &presets::BASE36) == Ok(value)
}

#[quickcheck]
fn round_trip_u64_base58(value: u64) -> bool {
    decode::<u64>(&encode(value, &presets::BASE58), &presets::BASE58) == Ok(value)
}

#[quickcheck]
fn round_trip_i64_base64(value: i64) -> bool {
    decode::<i64>(&encode(value, &presets::BASE64), &presets::BASE64) == Ok(value)
}

#[quickcheck]
fn round_trip_big_hex(bytes: Vec<u8>, negative: bool) -> bool {
    let mut value = BigInt::from_bytes_be(Sign::Plus, &bytes);
    if negative {
        value = -value;
    }
    big::decode(&big::encode(&value, &presets::HEX), &presets::HEX) == Ok(value)
}

#[quickcheck]
fn fixed_width_and_big_encodings_agree(value: i64) -> bool {
    encode(value, &presets::BASE58) == big::encode(&BigInt::from(value), &presets::BASE58)
}

#[quickcheck]
fn case_folding_is_transparent(value: u64) -> bool {
    let text = encode(value, &presets::HEX);
    decode::<u64>(&text.to_lowercase(), &presets::HEX) == Ok(value)
        && decode::<u64>(&text.to_uppercase(), &presets::HEX) == Ok(value)
}

#[quickcheck]
fn try_decode_agrees_with_decode(text: String) -> bool {
    match decode::<i32>(&text, &presets::BASE36) {
        Ok(value) => try_decode::<i32>(&text, &presets::BASE36) == Some(value),
        Err(_) => try_decode::<i32>(&text, &presets::BASE36).is_none(),
    }
}

#[quickcheck]
fn unsigned_decode_rejects_any_negative(value: u32) -> bool {
    let text = format!("-{}", encode(value, &presets::HEX));
    try_decode::<u32>(&text, &presets::HEX).is_none()
}

#[quickcheck]
fn shuffled_alphabet_still_round_trips(value: u64, seed: u64) -> bool {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    let mut symbols: Vec<char> = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
        .chars()
        .collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    symbols.shuffle(&mut rng);
    let alphabet = Alphabet::new(&symbols.iter().collect::<String>(), true).unwrap();
    decode::<u64>(&encode(value, &alphabet), &alphabet) == Ok(value)
}

#[test]
fn extreme_values_round_trip_across_presets() {
    let alphabets: [&Alphabet; 8] = [
        &presets::BINARY,
        &presets::OCTAL,
        &presets::DECIMAL,
        &presets::HEX,
        &presets::BASE32_CROCKFORD,
        &presets::BASE36,
        &presets::BASE58,
        &presets::BASE64,
    ];
    for alphabet in alphabets {
        for value in [0u64, 1, u64::MAX] {
            assert_eq!(decode::<u64>(&encode(value, alphabet), alphabet), Ok(value));
        }
        for value in [0i64, 1, -1, i64::MIN, i64::MAX] {
            assert_eq!(decode::<i64>(&encode(value, alphabet), alphabet), Ok(value));
        }
        for value in [i8::MIN, i8::MAX] {
            assert_eq!(decode::<i8>(&encode(value, alphabet), alphabet), Ok(value));
        }
        assert_eq!(encode(0u64, alphabet), alphabet.symbol_for(0).to_string());
    }
}

#[test]
fn crockford_substitutions_decode_to_original() {
    for value in [0u64, 1, 32, 1024, 0xCAFE, u64::MAX] {
        let text = encode(value, &presets::BASE32_CROCKFORD);
        let substituted: String = text
            .chars()
            .map(|symbol| match symbol {
                '0' => 'O',
                '1' => 'L',
                other => other,
            })
            .collect();
        assert_eq!(decode::<u64>(&substituted, &presets::BASE32_CROCKFORD), Ok(value));
    }
}
