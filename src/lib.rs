use clap::{App, AppSettings, Arg, ErrorKind};
use log::debug;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

pub mod count;
pub mod error;
pub mod source;

pub use crate::error::{Error, Result};
use crate::source::InputSource;

#[derive(Debug)]
pub struct Config {
    text: Vec<String>,
}

pub fn get_args() -> Result<Config> {
    get_args_from(std::env::args_os())
}

pub fn get_args_from<I, T>(itr: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = App::new("rc")
        .version("0.1.0")
        .author("Marcin Rogowski <rogowskimarcin11@gmail.com>")
        .about("Rust rune count")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("text")
                .value_name("TEXT")
                .multiple(true)
                .allow_hyphen_values(true)
                .help("Strings to count; standard input is read when none are given"),
        )
        .get_matches_from_safe(itr)
        .map_err(|e| match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => Error::Usage(e.message),
        })?;

    let config = Config {
        text: matches.values_of_lossy("text").unwrap_or_default(),
    };
    debug!("{:?}", config);

    Ok(config)
}

pub fn run(config: Config) -> Result<usize> {
    let stdin = io::stdin();
    let source = InputSource::select(config.text, stdin.lock(), atty::is(atty::Stream::Stdin))?;
    count_source(source)
}

pub fn count_source<R: BufRead>(source: InputSource<R>) -> Result<usize> {
    debug!("counting runes from {:?}", source);

    let total = match source {
        InputSource::Args(args) => count::count_args(&args),
        InputSource::Stream(reader) => count::count_stream(reader)?,
    };
    debug!("counted {} runes", total);

    Ok(total)
}

/// Writes the outcome of a run to `out` and returns the process exit code.
pub fn emit<W: Write>(outcome: &Result<usize>, out: &mut W) -> i32 {
    let (code, written) = match outcome {
        Ok(total) => (0, writeln!(out, "{}", total)),
        Err(e) if e.is_usage() => (e.exit_code(), writeln!(out, "{}", e)),
        Err(e) => (e.exit_code(), writeln!(out, "{}", e.verbose())),
    };

    match written.and_then(|_| out.flush()) {
        Ok(()) => code,
        Err(e) => {
            log::error!("{}", Error::Output(e).verbose());
            1
        }
    }
}
