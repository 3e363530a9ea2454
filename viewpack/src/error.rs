use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// No registry entry (or tree node) matches the canonical path.
    NotFound(String),
    /// Enumeration was requested on an asset rather than a directory.
    NotADirectory(String),
    /// The embedded payload of `name` could not be decompressed.
    Decompression {
        name: String,
        source: std::io::Error,
    },
    /// A filesystem operation on `path` failed during restoration.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidBundle(String),
    SizeMismatch {
        name: String,
        declared: u64,
        actual: u64,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Error::NotADirectory(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotFound(ref name) => write!(f, "NotFound: asset {name} not found"),
            Error::NotADirectory(ref name) => write!(f, "NotADirectory: {name} is an asset"),
            Error::Decompression {
                ref name,
                ref source,
            } => write!(f, "DecompressionError: asset {name}: {source}"),
            Error::Io {
                ref path,
                ref source,
            } => write!(f, "IoError: {}: {source}", path.display()),
            Error::InvalidBundle(ref msg) => write!(f, "InvalidBundle: {msg}"),
            Error::SizeMismatch {
                ref name,
                declared,
                actual,
            } => write!(
                f,
                "SizeMismatch: asset {name} declares {declared} bytes but holds {actual}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Decompression { ref source, .. } => Some(source),
            Error::Io { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_asset_name() {
        let err = Error::Decompression {
            name: "login.tpl".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated"),
        };
        assert_eq!(err.to_string(), "DecompressionError: asset login.tpl: truncated");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_names_the_path() {
        let err = Error::io(
            "/tmp/out/login.tpl",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/out/login.tpl"));
    }
}
