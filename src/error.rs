use std::error::Error as StdError;
use std::io;
use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot mix arguments and standard input.")]
    MixedInput,

    #[error("Either arguments or standard input must be provided.")]
    NoInput,

    #[error("{}", .0)]
    Usage(String),

    #[error("Failed to read standard input")]
    Read(#[source] io::Error),

    #[error("Invalid UTF-8 sequence {:02x?} at byte offset {}", .bytes, .offset)]
    InvalidUtf8 {
        offset: u64,
        bytes: Vec<u8>,
        #[source]
        original: Utf8Error,
    },

    #[error("Truncated UTF-8 sequence {:02x?} at byte offset {}", .bytes, .offset)]
    TruncatedUtf8 { offset: u64, bytes: Vec<u8> },

    #[error("Failed to write output")]
    Output(#[source] io::Error),
}

impl Error {
    /// Usage mistakes exit with 2, everything that went wrong at runtime with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MixedInput | Error::NoInput | Error::Usage(_) => 2,
            Error::Read(_)
            | Error::InvalidUtf8 { .. }
            | Error::TruncatedUtf8 { .. }
            | Error::Output(_) => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }

    /// The message followed by every underlying cause, one per line.
    pub fn verbose(&self) -> String {
        let mut rendered = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            rendered.push_str(&format!("\n  caused by: {}", err));
            cause = err.source();
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        assert_eq!(Error::MixedInput.exit_code(), 2);
        assert_eq!(Error::NoInput.exit_code(), 2);
        assert_eq!(Error::Usage("bad flag".to_string()).exit_code(), 2);
        assert_eq!(
            Error::Read(io::Error::new(io::ErrorKind::Other, "boom")).exit_code(),
            1
        );
        assert_eq!(
            Error::TruncatedUtf8 {
                offset: 3,
                bytes: vec![0xe2, 0x82]
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_usage_messages_are_plain() {
        assert_eq!(
            Error::MixedInput.to_string(),
            "Cannot mix arguments and standard input."
        );
        assert_eq!(
            Error::NoInput.to_string(),
            "Either arguments or standard input must be provided."
        );
        assert_eq!(Error::NoInput.verbose(), Error::NoInput.to_string());
    }

    #[test]
    fn test_verbose_includes_cause() {
        let err = Error::Read(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(
            err.verbose(),
            "Failed to read standard input\n  caused by: disk on fire"
        );
    }

    #[test]
    fn test_truncated_message() {
        let err = Error::TruncatedUtf8 {
            offset: 1,
            bytes: vec![0xc3],
        };
        assert_eq!(
            err.to_string(),
            "Truncated UTF-8 sequence [c3] at byte offset 1"
        );
    }
}
