//! Darknet/YOLO to Supervisely format converter
//!
//! This library converts a detection dataset made of `images/*.jpg` and
//! normalized `labels/*.txt` files into a Supervisely project: a `meta.json`
//! class legend plus one pixel-space annotation document per image.

pub mod config;
pub mod conversion;
pub mod darknet;
pub mod dataset;
pub mod error;
pub mod io;
pub mod supervisely;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use dataset::{convert_sample, process_dataset};
pub use error::{ConvertError, Result};
pub use io::{collect_sample_pairs, setup_output_directories};
pub use types::{AbsoluteBox, ConversionSummary, ImageRecord, NormalizedBox, OutputDirs, SamplePair};

// Supervisely-specific exports
pub use supervisely::{build_annotation, build_project_meta, Annotation, ProjectMeta, PALETTE};
