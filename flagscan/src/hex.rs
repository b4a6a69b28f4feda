//! Hexadecimal renderings of bytes, for debugging.

use core::fmt::{self, Write};

/// Lowercase hexadecimal rendering of a byte, without padding (e.g. `a`, `ff`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexU8(pub u8);

impl fmt::Display for HexU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Single line rendering of bytes (e.g. `[a ff 10]`).
#[derive(Clone, Copy, Debug)]
pub struct SHex<'a>(pub &'a [u8]);

impl fmt::Display for SHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;

        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}", HexU8(*b))?;
        }

        f.write_char(']')
    }
}

/// Dump of bytes, four per line. Each line starts with the offset of its first byte, so labels
/// go `0`, `4`, `8`... rather than the index of the last byte of the previous line.
///
/// ```text
///   0: de ad be ef
///   4: 01 02
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Hex4C<'a>(pub &'a [u8]);

impl Hex4C<'_> {
    /// Number of bytes per line.
    pub const COLUMNS: usize = 4;
}

impl fmt::Display for Hex4C<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.0.chunks(Self::COLUMNS).enumerate() {
            write!(f, "{:3}: ", row * Self::COLUMNS)?;

            for (i, b) in chunk.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{b:02x}")?;
            }

            if chunk.len() == Self::COLUMNS {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_render_byte_without_padding() {
        assert_that!(HexU8(0x0a).to_string().as_str(), eq("a"));
        assert_that!(HexU8(0xff).to_string().as_str(), eq("ff"));
        assert_that!(HexU8(0).to_string().as_str(), eq("0"));
    }

    #[test]
    fn it_should_render_bytes_on_one_line() {
        assert_that!(SHex(&[0x0a, 0xff, 0x10]).to_string().as_str(), eq("[a ff 10]"));
        assert_that!(SHex(&[]).to_string().as_str(), eq("[]"));
    }

    #[test]
    fn it_should_dump_four_bytes_per_line() {
        let bytes = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02];

        assert_that!(
            Hex4C(&bytes).to_string().as_str(),
            eq("  0: de ad be ef\n  4: 01 02")
        );
    }

    #[test]
    fn it_should_end_full_lines() {
        let bytes = [0u8; 8];

        assert_that!(
            Hex4C(&bytes).to_string().as_str(),
            eq("  0: 00 00 00 00\n  4: 00 00 00 00\n")
        );
        assert_that!(Hex4C(&[]).to_string().as_str(), eq(""));
    }
}
