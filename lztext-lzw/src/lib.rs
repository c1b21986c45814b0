//! # lztext-lzw
//!
//! LZW compression that emits code points rather than packed bits.
//!
//! Classic LZW writes variable-width bit codes. This variant instead
//! emits one code point per code: values at or below the configured
//! `code_start` are literals, everything above is a dictionary code.
//! That keeps the output a plain code-unit string, which is what the
//! lztext dispatcher tags and transports.
//!
//! Two profiles cover the dispatcher's needs: [`LzwConfig::ASCII`] for
//! pure-ASCII input and [`LzwConfig::UNICODE`] for byte-valued input
//! coming out of the UTF-8 bridge.
//!
//! ## Example
//!
//! ```rust
//! use lztext_lzw::{LzwConfig, compress, decompress};
//!
//! let input: Vec<u16> = "TOBEORNOTTOBEORTOBEORNOT".encode_utf16().collect();
//! let compressed = compress(&input, LzwConfig::ASCII, None).unwrap();
//! assert!(compressed.len() < input.len());
//! assert_eq!(decompress(&compressed, LzwConfig::ASCII), input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;

use lztext_core::Result;

/// Compress code units with LZW using the given configuration.
///
/// `max_bytes` is the fail-soft budget; see [`LzwEncoder::encode`].
pub fn compress(input: &[u16], config: LzwConfig, max_bytes: Option<usize>) -> Result<Vec<u16>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode(input, max_bytes)
}

/// Decompress an LZW payload with the given configuration.
pub fn decompress(input: &[u16], config: LzwConfig) -> Vec<u16> {
    LzwDecoder::new(config).decode(input)
}
