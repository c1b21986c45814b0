//! Payload format tags.
//!
//! Every compressed payload starts with one tag character naming the
//! codec that produced it. Decompression dispatches on the tag alone.

/// Known payload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// LZSS over the printable alphabet.
    Lzss,
    /// LZW with the ASCII profile, for pure-ASCII input.
    LzwAscii,
    /// LZW over the UTF-8 bridge, for multi-byte input.
    LzwUtf8,
    /// Verbatim storage, the universal fallback.
    Stored,
}

impl Format {
    /// The tag unit prefixed to payloads of this format.
    pub const fn tag(self) -> u16 {
        match self {
            Self::Lzss => 'S' as u16,
            Self::LzwAscii => 'W' as u16,
            Self::LzwUtf8 => 'U' as u16,
            Self::Stored => 'N' as u16,
        }
    }

    /// Detect a format from a payload's first unit.
    pub fn from_tag(unit: u16) -> Option<Self> {
        match unit {
            u if u == 'S' as u16 => Some(Self::Lzss),
            u if u == 'W' as u16 => Some(Self::LzwAscii),
            u if u == 'U' as u16 => Some(Self::LzwUtf8),
            u if u == 'N' as u16 => Some(Self::Stored),
            _ => None,
        }
    }

    /// Get the format name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lzss => "lzss",
            Self::LzwAscii => "lzw-ascii",
            Self::LzwUtf8 => "lzw-utf8",
            Self::Stored => "stored",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
