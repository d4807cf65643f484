use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to open trajectory file {path:?}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line} of file '{source_name}' is malformed: {reason}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: String,
    },
    #[error("failed to write output file {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no base path given, pass --path or set \"path\" in the config file")]
    MissingBasePath,
}

pub type Result<T> = std::result::Result<T, ExportError>;
