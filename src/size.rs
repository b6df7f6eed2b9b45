//! Human-readable byte sizes.

use std::fmt;

/// One kibibyte. Displayed as `KB`.
pub const KB: u64 = 1 << 10;
/// One mebibyte. Displayed as `MB`.
pub const MB: u64 = 1 << 20;
/// One gibibyte. Displayed as `GB`.
pub const GB: u64 = 1 << 30;

/// A number of bytes.
///
/// Renders with two decimals and the largest binary unit that fits, e.g.
/// `3.41MB`. The unit names look decimal but every step is 1024.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// The raw byte count.
    pub fn bytes(self) -> u64 {
        self.0
    }

    fn unit(self) -> (&'static str, u64) {
        match self.0 {
            b if b >= GB => ("GB", GB),
            b if b >= MB => ("MB", MB),
            b if b >= KB => ("KB", KB),
            _ => ("B", 1),
        }
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, divisor) = self.unit();
        write!(f, "{:.2}{}", self.0 as f64 / divisor as f64, name)
    }
}

/// Formats a byte count, see [`ByteSize`].
pub fn format_size(bytes: u64) -> String {
    ByteSize(bytes).to_string()
}
