//! Supervisely project format data structures and builders
//!
//! A project holds one `meta.json` legend describing every class, and one
//! annotation document per image listing the objects drawn on it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::ImageRecord;

/// Built-in class colors, used in label order when the label list fits.
pub const PALETTE: &[&str] = &[
    "#1abc9c", "#3498db", "#9b59b6", "#f1c40f", "#2ecc71", "#e67e22", "#e74c3c", "#ecf0f1",
    "#95a5a6",
];

pub const RECTANGLE: &str = "rectangle";

/// Legend entry for one class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjClass {
    pub title: String,
    pub shape: String,
    pub color: String,
    pub geometry_config: BTreeMap<String, serde_json::Value>,
}

impl ObjClass {
    pub fn rectangle(title: &str, color: String) -> Self {
        Self {
            title: title.to_string(),
            shape: RECTANGLE.to_string(),
            color,
            geometry_config: BTreeMap::new(),
        }
    }
}

/// Project-wide legend, written to `meta.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub classes: Vec<ObjClass>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Points {
    /// Top-left then bottom-right corner
    pub exterior: Vec<[i64; 2]>,
    pub interior: Vec<Vec<[i64; 2]>>,
}

/// One labelled object on an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    pub description: String,
    pub geometry_type: String,
    pub tags: Vec<String>,
    pub class_title: String,
    pub points: Points,
}

/// Annotation document of a single image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub description: String,
    pub tags: Vec<String>,
    pub size: Size,
    pub objects: Vec<Object>,
}

/// Draw a uniformly random 24-bit color as `#rrggbb`.
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Build the project legend, one class per label in label order.
///
/// Labels take palette colors by position when they all fit in `palette`;
/// otherwise every label gets an independent random color, with no attempt
/// to keep them distinct.
pub fn build_project_meta<R: Rng>(
    labels: &[String],
    palette: &[&str],
    rng: &mut R,
) -> ProjectMeta {
    let classes = if labels.len() <= palette.len() {
        labels
            .iter()
            .zip(palette)
            .map(|(label, color)| ObjClass::rectangle(label, color.to_string()))
            .collect()
    } else {
        labels
            .iter()
            .map(|label| ObjClass::rectangle(label, random_color(rng)))
            .collect()
    };

    ProjectMeta {
        classes,
        tags: Vec::new(),
    }
}

/// Build the annotation document of one image.
pub fn build_annotation(record: &ImageRecord) -> Annotation {
    let objects = record
        .boxes
        .iter()
        .map(|bbox| Object {
            description: String::new(),
            geometry_type: RECTANGLE.to_string(),
            tags: Vec::new(),
            class_title: bbox.class_title.clone(),
            points: Points {
                exterior: vec![[bbox.xmin, bbox.ymin], [bbox.xmax, bbox.ymax]],
                interior: Vec::new(),
            },
        })
        .collect();

    Annotation {
        description: String::new(),
        tags: Vec::new(),
        size: Size {
            height: record.height,
            width: record.width,
        },
        objects,
    }
}
