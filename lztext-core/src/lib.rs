//! # lztext-core
//!
//! Core components for the lztext text compression library.
//!
//! This crate provides the plumbing shared by the lztext codec crates:
//!
//! - [`error`]: the workspace error type and `Result` alias
//! - [`utf8`]: the per-code-unit UTF-8 bridge and byte-length rule
//! - [`base64`]: RFC 4648 Base64 with a permissive decoder
//!
//! ## Architecture
//!
//! lztext is layered like a small protocol stack:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ L3: Dispatcher (lztext)                              │
//! │     format tag, selection policy, Base64 operations  │
//! ├──────────────────────────────────────────────────────┤
//! │ L2: Codecs                                           │
//! │     LZSS (lztext-lzss), LZW (lztext-lzw)             │
//! ├──────────────────────────────────────────────────────┤
//! │ L1: Plumbing (this crate)                            │
//! │     errors, UTF-8 bridge, Base64                     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! All codec payloads are sequences of UTF-16 code units (`u16`); see the
//! [`utf8`] module for why the byte view treats each unit independently.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod base64;
pub mod error;
pub mod utf8;

// Re-exports for convenience
pub use error::{LztextError, Result};
