//! LZW dictionary (code table) management.
//!
//! Encoding and decoding use different tables with different growth
//! rules, so each direction gets its own type. The outbound table maps
//! strings to emission code points and freezes at the configured cap;
//! the inbound table maps codes back to strings and grows by one entry
//! per consumed code without a cap, relying on the encoder never to emit
//! a code it did not assign.

use crate::config::LzwConfig;
use lztext_core::{LztextError, Result};
use std::collections::HashMap;

/// Outbound dictionary: string -> emission code point.
///
/// Single-unit strings are implicit (they emit themselves), so only
/// multi-unit strings are stored.
#[derive(Debug)]
pub struct EncodeDictionary {
    table: HashMap<Vec<u16>, u16>,
    /// Next code to assign; may run one past `code_max` when frozen.
    next_code: u32,
    code_max: u32,
}

impl EncodeDictionary {
    /// Create an outbound dictionary for the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        if config.code_max <= config.code_start {
            return Err(LztextError::invalid_code_range(
                config.code_start,
                config.code_max,
            ));
        }
        Ok(Self {
            table: HashMap::new(),
            next_code: config.first_code(),
            code_max: config.code_max as u32,
        })
    }

    /// Find the code for a stored string.
    pub fn find(&self, string: &[u16]) -> Option<u16> {
        self.table.get(string).copied()
    }

    /// Whether the string has a code (stored or single-unit implicit).
    pub fn contains(&self, string: &[u16]) -> bool {
        string.len() == 1 || self.table.contains_key(string)
    }

    /// Store a new string unless the dictionary is frozen.
    pub fn insert(&mut self, string: Vec<u16>) {
        if self.next_code <= self.code_max {
            self.table.insert(string, self.next_code as u16);
            self.next_code += 1;
        }
    }

    /// Whether the cap has been reached and no more codes are assigned.
    pub fn is_frozen(&self) -> bool {
        self.next_code > self.code_max
    }

    /// Bytes charged against the budget for one emitted code.
    ///
    /// Codes below 0x800 re-encode as two UTF-8 bytes, the rest as three.
    pub fn code_bytes(&self) -> usize {
        if self.next_code < 0x800 { 2 } else { 3 }
    }
}

/// Inbound dictionary: code -> decoded string.
#[derive(Debug)]
pub struct DecodeDictionary {
    table: HashMap<u32, Vec<u16>>,
    next_code: u32,
}

impl DecodeDictionary {
    /// Create an inbound dictionary for the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self {
            table: HashMap::new(),
            next_code: config.first_code(),
        }
    }

    /// Look up the string for a dictionary code.
    pub fn get(&self, code: u32) -> Option<&[u16]> {
        self.table.get(&code).map(Vec::as_slice)
    }

    /// Record the next entry, mirroring the encoder's assignment order.
    pub fn push(&mut self, string: Vec<u16>) {
        self.table.insert(self.next_code, string);
        self.next_code += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_rejected() {
        let err = EncodeDictionary::new(LzwConfig::new(0xFF, 0x80)).unwrap_err();
        assert!(matches!(err, LztextError::InvalidCodeRange { .. }));
    }

    #[test]
    fn test_codes_assigned_in_order() {
        let mut dict = EncodeDictionary::new(LzwConfig::ASCII).unwrap();
        dict.insert(vec![b'a' as u16, b'b' as u16]);
        dict.insert(vec![b'b' as u16, b'c' as u16]);
        assert_eq!(dict.find(&[b'a' as u16, b'b' as u16]), Some(0x80));
        assert_eq!(dict.find(&[b'b' as u16, b'c' as u16]), Some(0x81));
        assert_eq!(dict.find(&[b'z' as u16, b'z' as u16]), None);
    }

    #[test]
    fn test_single_units_are_implicit() {
        let dict = EncodeDictionary::new(LzwConfig::ASCII).unwrap();
        assert!(dict.contains(&[b'q' as u16]));
        assert!(!dict.contains(&[b'q' as u16, b'q' as u16]));
    }

    #[test]
    fn test_freeze_at_cap() {
        let mut dict = EncodeDictionary::new(LzwConfig::new(0x7F, 0x82)).unwrap();
        for i in 0..5u16 {
            dict.insert(vec![i, i + 1]);
        }
        // Only 0x80..=0x82 were assigned; later inserts were dropped.
        assert!(dict.is_frozen());
        assert_eq!(dict.find(&[0, 1]), Some(0x80));
        assert_eq!(dict.find(&[2, 3]), Some(0x82));
        assert_eq!(dict.find(&[3, 4]), None);
    }

    #[test]
    fn test_code_bytes_widens() {
        let mut dict = EncodeDictionary::new(LzwConfig::ASCII).unwrap();
        assert_eq!(dict.code_bytes(), 2);
        // Fill up to the cap; the counter then sits at 0x800.
        let mut i = 0u32;
        while !dict.is_frozen() {
            dict.insert(vec![(i >> 8) as u16, (i & 0xFF) as u16]);
            i += 1;
        }
        assert_eq!(dict.code_bytes(), 3);
    }

    #[test]
    fn test_decode_mirrors_encode_order() {
        let mut dict = DecodeDictionary::new(LzwConfig::ASCII);
        dict.push(vec![b'a' as u16, b'b' as u16]);
        dict.push(vec![b'b' as u16, b'a' as u16]);
        assert_eq!(dict.get(0x80), Some(&[b'a' as u16, b'b' as u16][..]));
        assert_eq!(dict.get(0x81), Some(&[b'b' as u16, b'a' as u16][..]));
        assert_eq!(dict.get(0x82), None);
    }
}
