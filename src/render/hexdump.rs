//! Hex + ASCII dumps of binary payloads

use super::{INDENT, STAGING_SIZE};
use std::io::{self, Write};

/// Bytes shown on each row
pub const BYTES_PER_ROW: usize = 16;

#[inline]
fn ascii_or_dot(byte: u8) -> u8 {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte
    } else {
        b'.'
    }
}

/// Write `bin` as rows of offset, hex bytes and ASCII.
///
/// ```text
///   00000000: 48 65 6C 6C 6F                                   Hello
/// ```
///
/// A short final row keeps its width: missing hex slots are three spaces and
/// missing ASCII slots one space.
pub fn write_binary(w: &mut dyn Write, bin: &[u8]) -> io::Result<()> {
    let mut buf: Vec<u8> = Vec::with_capacity(STAGING_SIZE);
    for (row, chunk) in bin.chunks(BYTES_PER_ROW).enumerate() {
        let _ = write!(buf, "{INDENT}{:08X}: ", row * BYTES_PER_ROW);
        for slot in 0..BYTES_PER_ROW {
            match chunk.get(slot) {
                Some(byte) => {
                    let _ = write!(buf, "{byte:02X} ");
                }
                None => buf.extend_from_slice(b"   "),
            }
        }
        buf.push(b' ');
        for slot in 0..BYTES_PER_ROW {
            buf.push(chunk.get(slot).map_or(b' ', |&byte| ascii_or_dot(byte)));
        }
        buf.push(b'\n');
        w.write_all(&buf)?;
        buf.clear();
    }
    Ok(())
}
