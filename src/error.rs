use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a conversion run. No variant is retried: the
/// tool operates on trusted ground truth, so any discovery, parse or write
/// failure is fatal and surfaces to the caller.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input directory does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("no *.txt ground-truth files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("invalid glob pattern {pattern}: {source}")]
    BadPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("cannot derive a frame index from file name {}", .0.display())]
    FrameIndex(PathBuf),

    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
