//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::EncodeDictionary;
use lztext_core::{LztextError, Result};

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    dict: EncodeDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = EncodeDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Encode code units with LZW compression.
    ///
    /// # Algorithm
    ///
    /// Classic LZW over code units:
    /// 1. Start with the first unit as the current string `w`
    /// 2. While `w` plus the next unit is a known string, extend `w`
    /// 3. Otherwise emit the code for `w` (a single unit emits itself,
    ///    a longer string emits its stored code point), record the
    ///    extended string, and restart from the next unit
    /// 4. Flush the final `w` the same way
    ///
    /// The caller's input must keep every literal at or below the
    /// configured `code_start`; the dispatcher guarantees this by
    /// routing non-ASCII text through the UTF-8 bridge first.
    ///
    /// # Budget
    ///
    /// `max_bytes` charges one byte per emitted literal and
    /// two-then-three bytes per emitted dictionary code, matching the
    /// UTF-8 re-encoding cost of the output. Crossing the budget aborts
    /// with [`LztextError::BudgetExceeded`].
    pub fn encode(&mut self, input: &[u16], max_bytes: Option<usize>) -> Result<Vec<u16>> {
        let mut out = Vec::new();
        let Some((&head, rest)) = input.split_first() else {
            return Ok(out);
        };

        let mut bytes = 0;
        let mut w = vec![head];
        for &unit in rest {
            let mut extended = w.clone();
            extended.push(unit);

            if self.dict.contains(&extended) {
                w = extended;
            } else {
                bytes += self.emit(&mut out, &w);
                self.dict.insert(extended);
                w.clear();
                w.push(unit);

                if let Some(max) = max_bytes
                    && bytes > max
                {
                    return Err(LztextError::budget_exceeded(max));
                }
            }
        }

        bytes += self.emit(&mut out, &w);
        if let Some(max) = max_bytes
            && bytes > max
        {
            return Err(LztextError::budget_exceeded(max));
        }
        Ok(out)
    }

    /// Emit the code for `w` and return the bytes charged.
    fn emit(&self, out: &mut Vec<u16>, w: &[u16]) -> usize {
        if let &[unit] = w {
            out.push(unit);
            1
        } else {
            let code = self.dict.find(w).expect(
                "BUG: current string must be in the dictionary - it was either a single unit or found in a previous iteration",
            );
            out.push(code);
            self.dict.code_bytes()
        }
    }
}
