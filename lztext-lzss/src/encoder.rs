//! LZSS compression.
//!
//! The compressor slides over the input behind a 1024-unit prelude and
//! emits two token families drawn from the printable alphabet: literals,
//! encoded as a page number plus a digit with the page sticky across
//! consecutive literals, and matches, encoded as a distance split across
//! an opener opcode and a digit, with the length carried either in a
//! third symbol or implied by the fixed length-2 opener.

use crate::table::{
    BUFFER_MAX, CHAR_START, COMPRESS_FIXED_START, COMPRESS_START, LATIN_BUFFER_MAX, LATIN_INDEX,
    LATIN_INDEX_START, TABLE, TABLE_LENGTH, UNICODE_BUFFER_MAX, UNICODE_CHAR_MAX, UNICODE_INDEX,
    WINDOW_BUFFER_MAX, WINDOW_MAX,
};
use crate::window::window;
use lztext_core::{LztextError, Result};

/// Compress a sequence of UTF-16 code units.
///
/// The output is drawn entirely from the emission alphabet and is
/// therefore plain ASCII. `max_bytes` is the fail-soft budget: once the
/// running output size crosses it, compression stops with
/// [`LztextError::BudgetExceeded`] so the caller can fall back to another
/// format.
pub fn compress(input: &[u16], max_bytes: Option<usize>) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    Compressor::new(input, max_bytes).run()
}

/// Single-use compressor state.
struct Compressor {
    /// Window prelude followed by the input.
    data: Vec<u16>,
    /// Cursor into `data`, starting past the prelude.
    offset: usize,
    /// Page opcode of the most recent literal, for run coalescing.
    last_index: Option<usize>,
    /// Distance of the match found by the latest search.
    match_distance: usize,
    /// Length of the match found by the latest search.
    match_length: usize,
    out: String,
    bytes: usize,
    max_bytes: Option<usize>,
}

impl Compressor {
    fn new(input: &[u16], max_bytes: Option<usize>) -> Self {
        let mut data = Vec::with_capacity(WINDOW_MAX + input.len());
        data.extend_from_slice(window());
        data.extend_from_slice(input);
        Self {
            data,
            offset: WINDOW_MAX,
            last_index: None,
            match_distance: 0,
            match_length: 0,
            out: String::new(),
            bytes: 0,
            max_bytes,
        }
    }

    fn run(mut self) -> Result<String> {
        while self.offset < self.data.len() {
            if self.search() {
                self.emit_match()?;
            } else {
                self.emit_literal()?;
            }
        }
        Ok(self.out)
    }

    /// Longest-match search at the current offset.
    ///
    /// The haystack is the back window plus the lookahead, but every
    /// candidate must start inside the back window. The search begins
    /// with the two-unit seed, greedily extends the rightmost occurrence,
    /// and re-searches with the longer needle until it stops growing.
    /// When a round neither extends nor terminates, the needle is grown
    /// by one unit so an earlier occurrence of the longer string can
    /// still win and the loop always makes progress.
    fn search(&mut self) -> bool {
        let data = &self.data;
        let offset = self.offset;
        let mut i = 2;
        let len = BUFFER_MAX.min(data.len() - offset);
        if i > len {
            return false;
        }

        let pos = offset - WINDOW_BUFFER_MAX;
        let limit = WINDOW_BUFFER_MAX - 1;
        let win = &data[pos..offset + len];

        let first = match find_first(win, &data[offset..offset + 2]) {
            Some(idx) if idx <= limit => idx,
            _ => return false,
        };

        let mut best = first;
        loop {
            let Some(last) = find_last(win, &data[offset..offset + i], limit) else {
                break;
            };
            best = last;

            let j = pos + last;
            let grown = i;
            while i < len && data[offset + i] == data[j + i] {
                i += 1;
            }
            if first == last {
                i += 1;
                break;
            }
            if i == grown {
                i += 1;
            }
            if i >= len {
                break;
            }
        }

        if i < 3 {
            return false;
        }
        self.match_distance = WINDOW_BUFFER_MAX - best;
        self.match_length = i - 1;
        true
    }

    /// Emit one literal for the unit at the cursor and advance by one.
    fn emit_literal(&mut self) -> Result<()> {
        let c = self.data[self.offset] as usize;
        if c < LATIN_BUFFER_MAX {
            let (c1, c2) = (c % UNICODE_CHAR_MAX, c / UNICODE_CHAR_MAX);
            let index = LATIN_INDEX + c2;
            if self.last_index == Some(index) {
                self.push(c1)?;
            } else {
                self.push(index - LATIN_INDEX_START)?;
                self.push(c1)?;
            }
            self.last_index = Some(index);
        } else {
            let (c1, c2) = (c % UNICODE_BUFFER_MAX, c / UNICODE_BUFFER_MAX);
            let (c3, c4) = (c1 % UNICODE_CHAR_MAX, c1 / UNICODE_CHAR_MAX);
            let index = UNICODE_INDEX + c2;
            if self.last_index == Some(index) {
                self.push(c3)?;
                self.push(c4)?;
            } else {
                self.push(CHAR_START)?;
                self.push(index - TABLE_LENGTH)?;
                self.push(c3)?;
                self.push(c4)?;
            }
            self.last_index = Some(index);
        }
        self.offset += 1;
        Ok(())
    }

    /// Emit the match found by the latest search and advance past it.
    fn emit_match(&mut self) -> Result<()> {
        let d = self.match_distance;
        let (c1, c2) = (d % BUFFER_MAX, d / BUFFER_MAX);
        if self.match_length == 2 {
            self.push(COMPRESS_FIXED_START + c2)?;
            self.push(c1)?;
        } else {
            self.push(COMPRESS_START + c2)?;
            self.push(c1)?;
            self.push(self.match_length)?;
        }
        self.offset += self.match_length;
        // The decoder's page becomes undefined across a match.
        self.last_index = None;
        Ok(())
    }

    fn push(&mut self, index: usize) -> Result<()> {
        self.out.push(TABLE[index] as u8 as char);
        self.bytes += 1;
        if let Some(max) = self.max_bytes
            && self.bytes > max
        {
            return Err(LztextError::budget_exceeded(max));
        }
        Ok(())
    }
}

/// Leftmost occurrence of `needle` in `win`.
fn find_first(win: &[u16], needle: &[u16]) -> Option<usize> {
    if needle.is_empty() || needle.len() > win.len() {
        return None;
    }
    win.windows(needle.len()).position(|w| w == needle)
}

/// Rightmost occurrence of `needle` in `win` starting at or before `limit`.
///
/// The occurrence may extend past `limit`; only its start is bounded, so
/// matches can overlap into the lookahead.
fn find_last(win: &[u16], needle: &[u16], limit: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > win.len() {
        return None;
    }
    let max_start = limit.min(win.len() - needle.len());
    (0..=max_start)
        .rev()
        .find(|&p| win[p..p + needle.len()] == *needle)
}
