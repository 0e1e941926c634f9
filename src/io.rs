use glob::{glob_with, MatchOptions, Pattern};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::{
    OutputDirs, SamplePair, ANN_DIR, IMAGES_DIR, IMAGE_EXTENSION, IMG_DIR, LABELS_DIR,
    LABEL_EXTENSION,
};
use crate::utils::recreate_directory;

/// List the files of `dir` with the given extension, sorted by file name.
///
/// Hidden files such as `._a.jpg` are skipped.
pub fn list_files_sorted(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        extension
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files = glob_with(&pattern, options)?
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Pair every image under `<origin>/images` with the label file at the same
/// sorted position under `<origin>/labels`.
///
/// File names are not compared; only the order matters. Differing counts are
/// rejected.
pub fn collect_sample_pairs(origin: &Path) -> Result<Vec<SamplePair>> {
    let images = list_files_sorted(&origin.join(IMAGES_DIR), IMAGE_EXTENSION)?;
    let labels = list_files_sorted(&origin.join(LABELS_DIR), LABEL_EXTENSION)?;

    if images.len() != labels.len() {
        return Err(ConvertError::CountMismatch {
            images: images.len(),
            labels: labels.len(),
        });
    }

    Ok(images
        .into_iter()
        .zip(labels)
        .map(|(image_path, label_path)| SamplePair {
            image_path,
            label_path,
        })
        .collect())
}

/// Reject output locations that would escape the project or destroy the input.
///
/// `dataset` must be a single plain folder name, and `project` must not be
/// `origin` or one of its ancestors since it is deleted before reading starts.
pub fn validate_output_paths(origin: &Path, project: &Path, dataset: &str) -> Result<()> {
    let mut components = Path::new(dataset).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            return Err(ConvertError::InvalidOutput {
                message: format!("dataset name {:?} must be a single folder name", dataset),
            })
        }
    }

    if project.exists() {
        let origin = fs::canonicalize(origin)?;
        let project = fs::canonicalize(project)?;
        if origin.starts_with(&project) {
            return Err(ConvertError::InvalidOutput {
                message: format!(
                    "project {} contains the origin {} and would be deleted",
                    project.display(),
                    origin.display()
                ),
            });
        }
    }

    Ok(())
}

/// Set up the directory structure of a Supervisely project.
///
/// An existing project directory is removed with everything in it.
pub fn setup_output_directories(project: &Path, dataset: &str) -> std::io::Result<OutputDirs> {
    let project_dir = recreate_directory(project)?;
    let dataset_dir = project_dir.join(dataset);
    let ann_dir = dataset_dir.join(ANN_DIR);
    let img_dir = dataset_dir.join(IMG_DIR);
    fs::create_dir_all(&ann_dir)?;
    fs::create_dir_all(&img_dir)?;

    Ok(OutputDirs {
        project_dir,
        ann_dir,
        img_dir,
    })
}
