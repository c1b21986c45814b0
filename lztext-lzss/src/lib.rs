//! # lztext-lzss
//!
//! Sliding-window LZSS compression that reads and writes text.
//!
//! This variant differs from byte-oriented LZSS in two ways. First, it
//! operates on UTF-16 code units rather than bytes, so any BMP text (and
//! surrogate pairs, unit by unit) can be compressed. Second, its output
//! alphabet is a 121-symbol printable subset of ASCII, making the
//! compressed form safe to embed in places where raw bytes are not.
//!
//! Both sides share a deterministic 1024-unit window prelude, so matches
//! can reach behind the first input unit from the start.
//!
//! ## Example
//!
//! ```rust
//! use lztext_lzss::{compress, decompress};
//!
//! let input: Vec<u16> = "to be or not to be, to be or not to be"
//!     .encode_utf16()
//!     .collect();
//! let compressed = compress(&input, None).unwrap();
//! assert!(compressed.is_ascii());
//!
//! let payload: Vec<u16> = compressed.encode_utf16().collect();
//! assert_eq!(decompress(&payload), input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
pub mod table;
mod window;

pub use decoder::decompress;
pub use encoder::compress;
pub use window::window;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_roundtrip() {
        let input: Vec<u16> = "compression round trip through the crate API"
            .encode_utf16()
            .collect();
        let compressed = compress(&input, None).unwrap();
        let payload: Vec<u16> = compressed.encode_utf16().collect();
        assert_eq!(decompress(&payload), input);
    }
}
