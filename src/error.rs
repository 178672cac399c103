// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for media playback issues.
///
/// `OpenFailed`, `NoVideoStream` and `MissingMetadata` are load-time errors:
/// they abort session construction. `Stalled` is the one runtime error the
/// transport surfaces, raised after too many consecutive empty frame polls.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The file could not be opened or probed at all.
    OpenFailed(String),

    /// The file opened but contains no video stream.
    NoVideoStream,

    /// Required stream metadata was absent or malformed.
    MissingMetadata(String),

    /// The source produced no frame for this many consecutive ticks.
    Stalled { ticks: u32 },
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::OpenFailed(msg) => write!(f, "Failed to open media: {}", msg),
            MediaError::NoVideoStream => write!(f, "No video stream found"),
            MediaError::MissingMetadata(what) => write!(f, "Missing metadata: {}", what),
            MediaError::Stalled { ticks } => {
                write!(f, "Decoder stalled: no frame for {} ticks", ticks)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn media_error_converts_to_error() {
        let err: Error = MediaError::NoVideoStream.into();
        assert!(matches!(err, Error::Media(MediaError::NoVideoStream)));
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::OpenFailed("no such file".to_string());
        assert!(format!("{}", err).contains("no such file"));

        let err = MediaError::Stalled { ticks: 90 };
        assert!(format!("{}", err).contains("90"));
    }

    #[test]
    fn missing_metadata_display_names_the_field() {
        let err = MediaError::MissingMetadata("frame rate".to_string());
        assert_eq!(format!("{}", err), "Missing metadata: frame rate");
    }
}
