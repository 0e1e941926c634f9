use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::{AbsoluteBox, ImageRecord, NormalizedBox};

/// Convert a normalized center box to pixel corners `(xmin, ymin, xmax, ymax)`.
///
/// The normalized edges are clamped to `[0, 1]` before scaling and the scaled
/// values are truncated toward zero. Boxes lying entirely outside the image
/// collapse to zero area instead of failing.
pub fn denormalize(bbox: &NormalizedBox, width: u32, height: u32) -> (i64, i64, i64, i64) {
    let (w, h) = (width as f64, height as f64);
    let half_w = bbox.width / 2.0;
    let half_h = bbox.height / 2.0;

    let xmin = ((bbox.center_x - half_w).max(0.0) * w) as i64;
    let ymin = ((bbox.center_y - half_h).max(0.0) * h) as i64;
    let xmax = ((bbox.center_x + half_w).min(1.0) * w) as i64;
    let ymax = ((bbox.center_y + half_h).min(1.0) * h) as i64;

    (xmin, ymin, xmax, ymax)
}

/// Transform a normalized box into an absolute box carrying its class title.
pub fn to_absolute(bbox: &NormalizedBox, class_title: &str, width: u32, height: u32) -> AbsoluteBox {
    let (xmin, ymin, xmax, ymax) = denormalize(bbox, width, height);
    AbsoluteBox {
        class_title: class_title.to_string(),
        xmin,
        ymin,
        xmax,
        ymax,
    }
}

/// Build the record of one image from its size and the boxes of its label file.
///
/// `label_path` is only used to report a class id that does not index into
/// `labels`.
pub fn build_image_record(
    image_path: &Path,
    label_path: &Path,
    (width, height): (u32, u32),
    boxes: &[NormalizedBox],
    labels: &[String],
) -> Result<ImageRecord> {
    let boxes = boxes
        .iter()
        .enumerate()
        .map(|(index, bbox)| -> Result<AbsoluteBox> {
            let title = labels
                .get(bbox.class_id)
                .ok_or_else(|| ConvertError::UnknownClassId {
                    path: label_path.to_path_buf(),
                    index,
                    class_id: bbox.class_id,
                    num_labels: labels.len(),
                })?;
            Ok(to_absolute(bbox, title, width, height))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ImageRecord {
        path: image_path.to_path_buf(),
        width,
        height,
        boxes,
    })
}
