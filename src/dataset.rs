use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::copy;

use crate::config::Args;
use crate::conversion::build_image_record;
use crate::darknet::read_label_file;
use crate::error::Result;
use crate::io::{collect_sample_pairs, setup_output_directories, validate_output_paths};
use crate::supervisely::{build_annotation, build_project_meta, PALETTE};
use crate::types::{ConversionSummary, OutputDirs, SamplePair, META_FILE};
use crate::utils::{create_progress_bar, read_image_dimensions, write_json};

/// Convert one image/label pair: write its annotation document and copy the
/// image next to it. Returns the number of objects written.
pub fn convert_sample(pair: &SamplePair, labels: &[String], output_dirs: &OutputDirs) -> Result<usize> {
    let dimensions = read_image_dimensions(&pair.image_path)?;
    let boxes = read_label_file(&pair.label_path)?;
    let record = build_image_record(
        &pair.image_path,
        &pair.label_path,
        dimensions,
        &boxes,
        labels,
    )?;

    // Both outputs keep the full original file name, extension included
    let file_name = pair.image_path.file_name().unwrap_or_default();
    let mut ann_name = file_name.to_os_string();
    ann_name.push(".json");

    write_json(&output_dirs.ann_dir.join(ann_name), &build_annotation(&record))?;
    copy(&pair.image_path, output_dirs.img_dir.join(file_name))?;

    debug!(
        "Converted {} ({} object(s))",
        pair.image_path.display(),
        record.boxes.len()
    );
    Ok(record.boxes.len())
}

/// Main conversion pipeline
///
/// Any failure stops the run immediately; whatever was already written to the
/// project directory is left as is.
pub fn process_dataset(args: &Args) -> Result<ConversionSummary> {
    // Pair inputs before the destination is touched
    let pairs = collect_sample_pairs(&args.origin)?;
    info!("Found {} image/label pairs.", pairs.len());
    validate_output_paths(&args.origin, &args.project, &args.dataset)?;

    let output_dirs = setup_output_directories(&args.project, &args.dataset)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let meta = build_project_meta(&args.labels, PALETTE, &mut rng);
    write_json(&output_dirs.project_dir.join(META_FILE), &meta)?;
    info!("Wrote {} with {} classes.", META_FILE, meta.classes.len());

    let pb = create_progress_bar(pairs.len() as u64, "Images");
    let mut summary = ConversionSummary::default();
    for pair in &pairs {
        summary.objects_written += convert_sample(pair, &args.labels, &output_dirs)?;
        summary.images_converted += 1;
        pb.inc(1);
    }
    pb.finish_with_message("Images processing complete");

    info!(
        "Done. Supervisely dataset saved to {}",
        output_dirs.project_dir.display()
    );
    Ok(summary)
}
