// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Probe Error: {0}")]
    Probe(#[from] ProbeError),
}

/// Reasons a container header could not yield a duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The first box is not `ftyp`/`moov`, so this is not an ISO-BMFF file.
    #[error("not an MP4/QuickTime container")]
    NotIsoBmff,

    /// The file ended in the middle of a box.
    #[error("container truncated at offset {0}")]
    Truncated(u64),

    /// No `moov/mvhd` box was found before end of file.
    #[error("movie header not found")]
    MissingMovieHeader,

    /// The movie header declares a zero timescale.
    #[error("movie header has a zero timescale")]
    ZeroTimescale,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
