use std::{error::Error, fmt, io};

use synthetic::{Algorithm, SynthErr};

/// The showcase module's result type.
pub type Result<T> = std::result::Result<T, ShowcaseErr>;

/// Everything the presentation layer can refuse to do.
#[derive(Debug)]
pub enum ShowcaseErr {
    Io(io::Error),
    Synth(SynthErr),
    /// The config file is not valid JSON or has the wrong shape.
    Config(String),
    /// A run was requested while the same tab is still "training".
    AlreadyRunning(Algorithm),
    UploadTooLarge {
        size: u64,
        max: u64,
    },
    UnsupportedFileType(String),
    EmptyDocument,
    NotUtf8,
}

impl fmt::Display for ShowcaseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseErr::Io(e) => write!(f, "io error: {e}"),
            ShowcaseErr::Synth(e) => write!(f, "{e}"),
            ShowcaseErr::Config(msg) => write!(f, "invalid config: {msg}"),
            ShowcaseErr::AlreadyRunning(algorithm) => {
                write!(f, "{} is already running", algorithm.title())
            }
            ShowcaseErr::UploadTooLarge { size, max } => {
                write!(f, "file is {size} bytes, the limit is {max} bytes")
            }
            ShowcaseErr::UnsupportedFileType(ext) => {
                write!(f, "'{ext}' files are not supported, upload a .txt or .md file")
            }
            ShowcaseErr::EmptyDocument => write!(f, "the document is empty"),
            ShowcaseErr::NotUtf8 => write!(f, "the document is not valid UTF-8 text"),
        }
    }
}

impl Error for ShowcaseErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShowcaseErr::Io(e) => Some(e),
            ShowcaseErr::Synth(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ShowcaseErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SynthErr> for ShowcaseErr {
    fn from(value: SynthErr) -> Self {
        Self::Synth(value)
    }
}

impl From<serde_json::Error> for ShowcaseErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
