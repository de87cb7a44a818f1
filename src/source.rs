use std::fmt;
use std::io::BufRead;

use crate::error::{Error, Result};

/// Where the runes to be counted come from. Chosen once per run.
pub enum InputSource<R: BufRead> {
    Args(Vec<String>),
    Stream(R),
}

impl<R: BufRead> InputSource<R> {
    /// Picks arguments or the stream, refusing both and neither.
    pub fn select(args: Vec<String>, stream: R, stream_is_terminal: bool) -> Result<Self> {
        let has_args = !args.is_empty();
        let has_stream = !stream_is_terminal;

        match (has_args, has_stream) {
            (true, true) => Err(Error::MixedInput),
            (true, false) => Ok(InputSource::Args(args)),
            (false, true) => Ok(InputSource::Stream(stream)),
            (false, false) => Err(Error::NoInput),
        }
    }
}

impl<R: BufRead> fmt::Debug for InputSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Args(args) => f.debug_tuple("Args").field(args).finish(),
            InputSource::Stream(_) => f.write_str("Stream"),
        }
    }
}
