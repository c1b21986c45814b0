//! # lztext
//!
//! Lossless text-to-text compression for BMP strings.
//!
//! lztext turns a Unicode string into a shorter code-unit string and
//! back. Two codecs do the work - a sliding-window LZSS variant writing
//! printable ASCII ([`lztext_lzss`]) and an LZW variant emitting code
//! points ([`lztext_lzw`]) - and a dispatcher picks between them by input
//! shape, prefixing every payload with a one-character format tag:
//!
//! | Tag | Payload |
//! |-----|---------|
//! | `W` | LZW, ASCII profile (pure-ASCII input) |
//! | `U` | LZW over the UTF-8 bridge (mostly-ASCII input) |
//! | `S` | LZSS (Unicode-heavy input, or fallback) |
//! | `N` | Verbatim storage (universal fallback) |
//!
//! Every candidate is held to a byte budget of the input's UTF-8 length;
//! a candidate that cannot beat verbatim storage is discarded, so
//! compression never fails and never inflates beyond one tag character.
//!
//! Payloads are sequences of UTF-16 code units (`Vec<u16>`): an LZW
//! payload may contain unpaired surrogate values that a Rust `String`
//! cannot hold. Use the Base64 forms when the compressed text has to
//! travel through byte-oriented or string-typed transports.
//!
//! ## Example
//!
//! ```rust
//! use lztext::{compress, decompress};
//!
//! let text = "TOBEORNOTTOBEORTOBEORNOT TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(text);
//! assert!(compressed.len() < text.len());
//! assert_eq!(decompress(&compressed), text);
//! ```
//!
//! Or through Base64:
//!
//! ```rust
//! use lztext::{compress_to_base64, decompress_from_base64};
//!
//! let text = "\u{65e5}\u{672c}\u{8a9e}\u{306e}\u{30c6}\u{30ad}\u{30b9}\u{30c8}";
//! let encoded = compress_to_base64(text);
//! assert!(encoded.chars().all(|c| c.is_ascii()));
//! assert_eq!(decompress_from_base64(&encoded), text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod format;

pub use format::Format;
pub use lztext_lzw::LzwConfig;

use lztext_core::utf8;

/// Compress a string to a tagged code-unit payload.
///
/// Always succeeds; the worst case is verbatim storage behind the `N`
/// tag. The empty string maps to an empty payload.
///
/// ```rust
/// let compressed = lztext::compress("Hello, world!");
/// assert_eq!(compressed[0], 'W' as u16);
/// ```
pub fn compress(input: &str) -> Vec<u16> {
    let units: Vec<u16> = input.encode_utf16().collect();
    compress_utf16(&units)
}

/// Decompress a tagged payload back to a string.
///
/// Inverse of [`compress`]. A payload with an unrecognized tag is
/// returned unchanged, transcoded as-is.
pub fn decompress(input: &[u16]) -> String {
    String::from_utf16_lossy(&decompress_utf16(input))
}

/// Compress UTF-16 code units to a tagged code-unit payload.
///
/// This is the core entry point; [`compress`] is a convenience wrapper
/// over it. Surrogate units pass through unit by unit, so a well-formed
/// pair survives even though the codecs never treat it as one code
/// point.
pub fn compress_utf16(input: &[u16]) -> Vec<u16> {
    if input.is_empty() {
        return Vec::new();
    }

    let byte_len = utf8::byte_length(input);
    let budget = Some(byte_len);

    if byte_len == input.len() {
        // Pure ASCII: LZW can address it directly.
        if let Ok(payload) = lztext_lzw::compress(input, LzwConfig::ASCII, budget) {
            return tagged(Format::LzwAscii, payload);
        }
        if let Ok(payload) = lztext_lzss::compress(input, budget) {
            return tagged(Format::Lzss, ascii_units(&payload));
        }
        stored(input)
    } else if mostly_ascii(byte_len, input.len()) {
        // A sprinkling of multi-byte text: LZW over the UTF-8 bridge
        // usually beats LZSS here.
        if let Ok(payload) = lzw_over_utf8(input, budget) {
            return tagged(Format::LzwUtf8, payload);
        }
        if let Ok(payload) = lztext_lzss::compress(input, budget) {
            return tagged(Format::Lzss, ascii_units(&payload));
        }
        stored(input)
    } else {
        // Unicode-heavy: LZSS first, it pays one page switch per run of
        // related code points.
        if let Ok(payload) = lztext_lzss::compress(input, budget) {
            return tagged(Format::Lzss, ascii_units(&payload));
        }
        if let Ok(payload) = lzw_over_utf8(input, budget)
            && utf8::byte_length(&payload) <= byte_len
        {
            return tagged(Format::LzwUtf8, payload);
        }
        stored(input)
    }
}

/// Decompress a tagged code-unit payload.
///
/// Total on all inputs: empty in, empty out; unknown tag in, input out
/// verbatim; malformed payloads decode permissively.
pub fn decompress_utf16(input: &[u16]) -> Vec<u16> {
    let Some((&tag, payload)) = input.split_first() else {
        return Vec::new();
    };
    match Format::from_tag(tag) {
        Some(Format::Lzss) => lztext_lzss::decompress(payload),
        Some(Format::LzwAscii) => lztext_lzw::decompress(payload, LzwConfig::ASCII),
        Some(Format::LzwUtf8) => {
            let bytes: Vec<u8> = lztext_lzw::decompress(payload, LzwConfig::UNICODE)
                .iter()
                .map(|&u| u as u8)
                .collect();
            utf8::to_utf16(&bytes)
        }
        Some(Format::Stored) => payload.to_vec(),
        None => input.to_vec(),
    }
}

/// Compress a string and wrap the payload in Base64.
///
/// The payload travels through the UTF-8 bridge first, so the result is
/// plain ASCII regardless of what the codecs emitted.
pub fn compress_to_base64(input: &str) -> String {
    let payload = compress(input);
    lztext_core::base64::encode(&utf8::to_utf8(&payload))
}

/// Decode a Base64 payload and decompress it.
///
/// Inverse of [`compress_to_base64`]. Non-alphabet bytes in the Base64
/// text (whitespace, line breaks) are skipped.
pub fn decompress_from_base64(input: &str) -> String {
    let bytes = lztext_core::base64::decode(input.as_bytes());
    decompress(&utf8::to_utf16(&bytes))
}

/// `u > n` but with less than a tenth of the bytes in continuations.
fn mostly_ascii(byte_len: usize, unit_len: usize) -> bool {
    byte_len > unit_len && byte_len * 9 / 10 < unit_len
}

/// Run LZW over the byte-valued UTF-8 view of the input.
fn lzw_over_utf8(input: &[u16], budget: Option<usize>) -> lztext_core::Result<Vec<u16>> {
    let bytes: Vec<u16> = utf8::to_utf8(input).iter().map(|&b| b as u16).collect();
    lztext_lzw::compress(&bytes, LzwConfig::UNICODE, budget)
}

fn ascii_units(payload: &str) -> Vec<u16> {
    payload.encode_utf16().collect()
}

fn tagged(format: Format, payload: Vec<u16>) -> Vec<u16> {
    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push(format.tag());
    out.extend(payload);
    out
}

fn stored(input: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(input.len() + 1);
    out.push(Format::Stored.tag());
    out.extend_from_slice(input);
    out
}
