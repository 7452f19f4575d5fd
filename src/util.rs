//! Misc utility stuff : errors, reading stdin, writing stdout

use flate2::read::MultiGzDecoder;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read, Write};

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom msort error
    Error(String),
    /// pass through io::Error
    IoError(std::io::Error),
    /// pass through regex::Error, a pattern that would not compile
    RegexError(regex::Error),
    /// sort pattern has no capture group to take the key from
    NoCaptureGroup(String),
    /// bad command line, the String is the full message for the user
    Usage(String),
    /// not really an error, e.g. help was requested and printed
    NoError,
    /// be an error, but don't report anything
    Silent,
}
/// Result type for msort
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            Error::NoError => true,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Error::Silent)
    }
    /// return true if this error came from bad command line arguments
    pub const fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

err_type!(regex::Error, Error::RegexError);
err_type!(std::io::Error, Error::IoError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
            Error::RegexError(s) => write!(f, "RegexError : {}", s)?,
            Error::NoCaptureGroup(s) => write!(
                f,
                "Sort pattern '{}' has no capture group, wrap the key in parentheses",
                s
            )?,
            Error::Usage(s) => write!(f, "{}", s)?,
            Error::NoError => write!(f, "NoError")?,
            Error::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// Output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// buffered standard output
pub fn get_writer() -> Outfile {
    io::BufWriter::new(Box::new(io::stdout()))
}

/// Read everything from `f`. Gzipped input is decompressed.
///```
/// let data = msort::read_all(&b"one\ntwo\n"[..]).unwrap();
/// assert_eq!(data, b"one\ntwo\n");
///```
pub fn read_all(f: impl Read) -> Result<Vec<u8>> {
    let mut outer = io::BufReader::new(f);
    let mut data = Vec::new();
    if outer.fill_buf()?.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        MultiGzDecoder::new(outer).read_to_end(&mut data)?;
    } else {
        outer.read_to_end(&mut data)?;
    }
    Ok(data)
}

/// Read all of standard input. Gzipped input is decompressed.
pub fn read_stdin() -> Result<Vec<u8>> {
    read_all(io::stdin().lock())
}

/// write some bytes to stderr, ignoring failure
pub fn prerr(data: &[&[u8]]) {
    let mut e = io::stderr().lock();
    for x in data {
        let _ = e.write_all(x);
    }
    let _ = e.write_all(b"\n");
}
