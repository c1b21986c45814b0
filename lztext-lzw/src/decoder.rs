//! LZW decoder (decompression).

use crate::config::LzwConfig;
use crate::dictionary::DecodeDictionary;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Decode an LZW payload back to the original code units.
    ///
    /// Literals and dictionary codes are told apart by numeric range:
    /// anything at or below `code_start` is a literal. One dictionary
    /// entry is recorded per consumed code, mirroring the encoder's
    /// assignment order one step behind; a code that refers to the entry
    /// about to be recorded is the classic KwKwK case and expands to the
    /// previous emission plus its own first unit.
    ///
    /// Decoding is total: an out-of-range code on malformed input falls
    /// into the KwKwK rule rather than failing.
    pub fn decode(&self, input: &[u16]) -> Vec<u16> {
        let Some((&head, rest)) = input.split_first() else {
            return Vec::new();
        };

        let mut out = vec![head];
        let mut dict = DecodeDictionary::new(self.config);
        let mut prev = vec![head];
        let literal_max = self.config.code_start as u32;

        for &code in rest {
            let buffer: Vec<u16> = if code as u32 <= literal_max {
                vec![code]
            } else if let Some(entry) = dict.get(code as u32) {
                entry.to_vec()
            } else {
                let mut kwk = prev.clone();
                kwk.push(prev[0]);
                kwk
            };

            out.extend_from_slice(&buffer);

            let mut entry = prev;
            entry.push(buffer[0]);
            dict.push(entry);
            prev = buffer;
        }

        out
    }
}
