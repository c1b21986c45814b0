//! Integration tests for the LZW codec.

use lztext_lzw::{LzwConfig, compress, decompress};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn test_roundtrip_ascii_profile() {
    for s in [
        "",
        "A",
        "AB",
        "TOBEORNOTTOBEORTOBEORNOT",
        "abababababababababab",
        "the quick brown fox jumps over the lazy dog",
    ] {
        let input = units(s);
        let compressed = compress(&input, LzwConfig::ASCII, None).unwrap();
        assert_eq!(
            decompress(&compressed, LzwConfig::ASCII),
            input,
            "roundtrip failed for {s:?}"
        );
    }
}

#[test]
fn test_roundtrip_byte_profile() {
    // Byte-valued input as produced by the UTF-8 bridge.
    let mut input = Vec::new();
    for round in 0..8u16 {
        for b in 0..=255u16 {
            input.push(b.rotate_left(round as u32) & 0xFF);
        }
    }
    let compressed = compress(&input, LzwConfig::UNICODE, None).unwrap();
    assert_eq!(decompress(&compressed, LzwConfig::UNICODE), input);
}

#[test]
fn test_low_entropy_ratio() {
    // A four-unit phrase repeated a thousand times collapses to a few
    // dozen codes.
    let input = units(&"aaaa".repeat(1000));
    let compressed = compress(&input, LzwConfig::ASCII, None).unwrap();
    assert!(
        compressed.len() * 10 < input.len(),
        "expected strong compression, got {} of {}",
        compressed.len(),
        input.len()
    );
    assert_eq!(decompress(&compressed, LzwConfig::ASCII), input);
}

#[test]
fn test_dictionary_cap_respected() {
    // With the ASCII profile no emitted dictionary code may exceed the
    // configured cap even when the input wants far more entries.
    let mut input = Vec::new();
    for i in 0..4096u16 {
        input.push(0x20 + (i % 0x5F));
        input.push(0x20 + ((i / 7) % 0x5F));
    }
    let compressed = compress(&input, LzwConfig::ASCII, None).unwrap();
    assert!(compressed.iter().all(|&c| c <= 0x7FF));
    assert_eq!(decompress(&compressed, LzwConfig::ASCII), input);
}

#[test]
fn test_budget_exceeded_on_wide_codes() {
    // Once the counter passes 0x800 each code charges three bytes, so a
    // budget equal to the input length eventually trips on data with
    // little structure.
    let mut input = Vec::new();
    let mut seed = 0x9E3779B97F4A7C15u64;
    for _ in 0..65536 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        input.push(0x20 + ((seed >> 33) % 0x5F) as u16);
    }
    let budget = input.len();
    let result = compress(&input, LzwConfig::ASCII, Some(budget));
    assert!(result.is_err(), "expected the byte budget to trip");
}
