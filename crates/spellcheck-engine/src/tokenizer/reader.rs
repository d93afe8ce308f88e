// Incremental UTF-8 decoding of a byte reader into characters

use std::io::{self, BufRead};

/// Iterator over the characters of a UTF-8 byte stream.
///
/// Bytes are pulled from the reader only as needed to complete the current
/// character, so wrapping a reader in `ReaderChars` never consumes more of
/// the stream than the characters already yielded. Malformed sequences are
/// reported as `InvalidData` errors.
pub struct ReaderChars<R> {
    reader: R,
}

impl<R: BufRead> ReaderChars<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume one byte, or `None` at end of stream.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }

    fn decode_next(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = sequence_width(lead)
            .ok_or_else(|| invalid_data(format!("invalid UTF-8 lead byte 0x{lead:02X}")))?;

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "truncated UTF-8 sequence")
            })?;
        }

        let decoded = std::str::from_utf8(&buf[..width]).map_err(invalid_data)?;
        Ok(decoded.chars().next())
    }
}

impl<R: BufRead> Iterator for ReaderChars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode_next().transpose()
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data<E>(error: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}
