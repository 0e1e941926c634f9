use std::path::PathBuf;
use thiserror::Error;

/// Every way a conversion run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed label line {line} in {}: {message}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error(
        "class id {class_id} of box {index} in {} is out of range for {num_labels} label(s)",
        .path.display()
    )]
    UnknownClassId {
        path: PathBuf,
        index: usize,
        class_id: usize,
        num_labels: usize,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("found {images} image(s) but {labels} label file(s); every image needs exactly one label file")]
    CountMismatch { images: usize, labels: usize },

    #[error("required directory does not exist: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("invalid output location: {message}")]
    InvalidOutput { message: String },

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
