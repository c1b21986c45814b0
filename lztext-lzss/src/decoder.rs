//! LZSS decompression.
//!
//! The decoder mirrors the compressor's window: its output buffer starts
//! as the 1024-unit prelude, so back-references resolve against the same
//! history the compressor searched. Decoding is permissive by design:
//! symbols outside the alphabet are skipped (callers may wrap payloads in
//! whitespace) and a truncated opcode simply ends the stream with
//! whatever was produced so far.

use crate::table::{
    BUFFER_MAX, CHAR_START, COMPRESS_FIXED_START, COMPRESS_INDEX, COMPRESS_START, DECODE_MAX,
    LATIN_DECODE_MAX, UNICODE_BUFFER_MAX, UNICODE_CHAR_MAX, WINDOW_BUFFER_MAX, WINDOW_MAX,
    index_of,
};
use crate::window::window;

/// Decompress an LZSS payload back to UTF-16 code units.
///
/// The input is assumed well-formed; anything else decodes to a
/// best-effort result rather than an error.
pub fn decompress(input: &[u16]) -> Vec<u16> {
    let mut out: Vec<u16> = window().to_vec();
    let mut symbols = input.iter().copied().filter_map(index_of);

    // Current literal page, undefined right after a match.
    let mut page: Option<usize> = None;
    // Whether the page addresses the Unicode geometry.
    let mut unicode = false;

    while let Some(s) = symbols.next() {
        if s < DECODE_MAX {
            if unicode {
                let Some(high) = symbols.next() else { break };
                let c = high * UNICODE_CHAR_MAX + s + UNICODE_BUFFER_MAX * page.unwrap_or(0);
                out.push(c as u16);
            } else if let Some(page) = page {
                out.push((page * UNICODE_CHAR_MAX + s) as u16);
            }
        } else if s < LATIN_DECODE_MAX {
            page = Some(s - DECODE_MAX);
            unicode = false;
        } else if s == CHAR_START {
            let Some(raw) = symbols.next() else { break };
            page = Some(raw.saturating_sub(5));
            unicode = true;
        } else if (COMPRESS_START..COMPRESS_INDEX).contains(&s) {
            let Some(digit) = symbols.next() else { break };
            let (length, pos) = if s < COMPRESS_FIXED_START {
                let Some(length) = symbols.next() else { break };
                (length, (s - COMPRESS_START) * BUFFER_MAX + digit)
            } else {
                (2, (s - COMPRESS_FIXED_START) * BUFFER_MAX + digit)
            };
            copy_match(&mut out, pos, length);
            page = None;
        }
        // Indices outside every region are never emitted; ignore them.
    }

    out.split_off(WINDOW_MAX)
}

/// Append `length` units read back from `pos` units before the end.
///
/// When `length` exceeds `pos` the source tail repeats cyclically, the
/// classic LZ77 self-overlap rule.
fn copy_match(out: &mut Vec<u16>, pos: usize, length: usize) {
    let window = out.len().min(WINDOW_BUFFER_MAX);
    let pos = pos.min(window);
    if pos == 0 {
        return;
    }
    let start = out.len() - pos;
    for k in 0..length {
        let unit = out[start + k % pos];
        out.push(unit);
    }
}
