//! The deterministic sliding-window prelude.
//!
//! Compressor and decompressor both seed their window with the same
//! 1024-unit string so that back-references can reach behind the start of
//! the real input from the very first symbol. The construction is fixed by
//! the wire format: for each lowercase letter `c` in order, pairs
//! `" c c2"` are appended with `c2` walking from `z` down toward the
//! letter at index 16, and the result is left-padded with spaces to
//! exactly [`WINDOW_MAX`] units.

use crate::table::WINDOW_MAX;
use std::sync::OnceLock;

/// The shared window prelude.
pub fn window() -> &'static [u16] {
    static WINDOW: OnceLock<Vec<u16>> = OnceLock::new();
    WINDOW.get_or_init(build_window)
}

fn build_window() -> Vec<u16> {
    const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let mut win = Vec::with_capacity(WINDOW_MAX);

    for &c in ALPHA {
        let mut j = ALPHA.len() - 1;
        while j > 16 && win.len() < WINDOW_MAX {
            win.extend_from_slice(&[b' ' as u16, c as u16, b' ' as u16, ALPHA[j] as u16]);
            j -= 1;
        }
    }

    win.truncate(WINDOW_MAX);
    let mut padded = vec![b' ' as u16; WINDOW_MAX - win.len()];
    padded.extend_from_slice(&win);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_length() {
        assert_eq!(window().len(), WINDOW_MAX);
    }

    #[test]
    fn test_window_is_cached() {
        assert!(std::ptr::eq(window(), window()));
    }

    #[test]
    fn test_window_head_is_padding() {
        let head: Vec<u16> = window()[..16].to_vec();
        assert_eq!(head, vec![b' ' as u16; 16]);
    }

    #[test]
    fn test_window_tail_pins_construction() {
        // The generated body ends with the c='z' run down to 'r'.
        let tail: String = window()[WINDOW_MAX - 16..]
            .iter()
            .map(|&u| u as u8 as char)
            .collect();
        assert_eq!(tail, " z u z t z s z r");
    }

    #[test]
    fn test_window_is_ascii() {
        assert!(window().iter().all(|&u| u < 0x7F));
    }
}
