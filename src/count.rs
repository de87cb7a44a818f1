use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::str;

use crate::error::{Error, Result};

pub fn count_args(args: &[String]) -> usize {
    args.iter().map(|arg| arg.chars().count()).sum()
}

/// Counts the runes of a stream. A single trailing newline is a terminator,
/// not content, so it is left out of the count.
pub fn count_stream<R: BufRead>(reader: R) -> Result<usize> {
    let mut count = 0;
    let mut last = None;

    for rune in Runes::new(reader) {
        last = Some(rune?);
        count += 1;
    }

    if last == Some('\n') {
        count -= 1;
    }

    Ok(count)
}

/// Strict UTF-8 decoder pulling one scalar value at a time out of a `BufRead`.
///
/// Stops for good after the end of input or the first error.
pub struct Runes<R> {
    reader: R,
    offset: u64,
    done: bool,
}

impl<R: BufRead> Runes<R> {
    pub fn new(reader: R) -> Self {
        Runes {
            reader,
            offset: 0,
            done: false,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Read(e)),
            };

            if byte.is_some() {
                self.reader.consume(1);
                self.offset += 1;
            }
            return Ok(byte);
        }
    }

    fn read_rune(&mut self) -> Result<Option<char>> {
        let start = self.offset;
        let lead = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < sequence_width(lead) {
            match self.next_byte()? {
                Some(b) => {
                    bytes[len] = b;
                    len += 1;
                    if !is_continuation(b) {
                        break;
                    }
                }
                None => break,
            }
        }

        match str::from_utf8(&bytes[..len]) {
            Ok(s) => Ok(s.chars().next()),
            Err(e) if e.error_len().is_none() => Err(Error::TruncatedUtf8 {
                offset: start,
                bytes: bytes[..len].to_vec(),
            }),
            Err(e) => Err(Error::InvalidUtf8 {
                offset: start,
                bytes: bytes[..len].to_vec(),
                original: e,
            }),
        }
    }
}

impl<R: BufRead> Iterator for Runes<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_rune() {
            Ok(Some(c)) => Some(Ok(c)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Runes<R> {}

// Bytes a sequence starting with `lead` should span. Bad leads get 1 and fail validation.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 1,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xc0 == 0x80
}
