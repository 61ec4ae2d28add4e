use std::path::PathBuf;

/// Represents all possible errors that can occur while reading or extracting BPK1 containers.
///
/// Only [`Bpk1Error::BadHeader`] is recoverable: the extractor reports it and moves on to the
/// next file. Every other variant is meant to stop a batch run.
#[derive(Debug)]
pub enum Bpk1Error {
    /// The file does not start with the `BPK1` magic. Holds the name of the offending file.
    BadHeader(String),
    /// The destination directory for a container already exists.
    DestinationExists(PathBuf),
    /// The container holds data that cannot be decoded, such as a block name that is not
    /// valid UTF-8 or a broken LZSS stream.
    InvalidData(String),
    /// Represents an error that occurs during I/O operations.
    Io(std::io::Error),
}

impl Bpk1Error {
    /// Returns `true` if a batch run may continue with the next file after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Bpk1Error::BadHeader(_))
    }
}

/// Provides a user-friendly string representation for each error variant in `Bpk1Error`.
impl std::fmt::Display for Bpk1Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bpk1Error::BadHeader(file) => write!(f, "Could not unpack {file}: Bad header"),
            Bpk1Error::DestinationExists(path) => {
                write!(f, "Destination already exists: {}", path.display())
            }
            Bpk1Error::InvalidData(err) => write!(f, "Invalid data: {err}"),
            Bpk1Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

/// Implements the standard error trait for `Bpk1Error`, exposing the underlying I/O error as
/// the source.
impl std::error::Error for Bpk1Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Bpk1Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `Bpk1Error`.
impl From<std::io::Error> for Bpk1Error {
    fn from(error: std::io::Error) -> Self {
        Bpk1Error::Io(error)
    }
}
