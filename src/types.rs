use std::path::PathBuf;

// Supported source formats; the Darknet export only ships JPEG images
pub const IMAGE_EXTENSION: &str = "jpg";
pub const LABEL_EXTENSION: &str = "txt";

// Fixed input subdirectories of a Darknet dataset
pub const IMAGES_DIR: &str = "images";
pub const LABELS_DIR: &str = "labels";

// Fixed output names of a Supervisely project
pub const META_FILE: &str = "meta.json";
pub const ANN_DIR: &str = "ann";
pub const IMG_DIR: &str = "img";

/// One line of a Darknet label file: a class id and a center-based box,
/// all geometry as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub class_id: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A corner-based box in pixel coordinates, with its class resolved to a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteBox {
    pub class_title: String,
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
}

/// Everything needed to write the annotation document of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub boxes: Vec<AbsoluteBox>,
}

// An image and the label file that annotates it, paired by sorted position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
}

// Struct to hold the paths of the output project
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub project_dir: PathBuf,
    pub ann_dir: PathBuf,
    pub img_dir: PathBuf,
}

// Struct to hold what a finished run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub images_converted: usize,
    pub objects_written: usize,
}

impl ConversionSummary {
    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Images converted: {}", self.images_converted);
        log::info!("Objects written: {}", self.objects_written);
    }
}
