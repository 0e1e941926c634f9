use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for converting a Darknet/YOLO dataset to a Supervisely project.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Dataset in Darknet format, containing `images/*.jpg` and `labels/*.txt`
    #[arg(short = 'o', long = "origin")]
    pub origin: PathBuf,

    /// Output project folder (deleted and recreated if it exists)
    #[arg(short = 'p', long = "project")]
    pub project: PathBuf,

    /// Name of the dataset folder created inside the project
    #[arg(short = 'd', long = "dataset")]
    pub dataset: String,

    /// Class label; repeat in class-id order, e.g. `-l cat -l dog`
    #[arg(short = 'l', long = "label", required = true)]
    pub labels: Vec<String>,

    /// Seed for the random colors used when there are more labels than palette entries
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_accumulate_in_order() {
        let args = Args::try_parse_from([
            "yolo2supervisely",
            "-o",
            "./dataset",
            "-p",
            "./superset",
            "-d",
            "theset",
            "-l",
            "cat",
            "--label",
            "dog",
            "-l",
            "bird",
        ])
        .unwrap();

        assert_eq!(args.origin, PathBuf::from("./dataset"));
        assert_eq!(args.project, PathBuf::from("./superset"));
        assert_eq!(args.dataset, "theset");
        assert_eq!(args.labels, vec!["cat", "dog", "bird"]);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_all_options_required() {
        assert!(Args::try_parse_from(["yolo2supervisely", "-o", "a", "-p", "b", "-d", "c"]).is_err());
        assert!(Args::try_parse_from(["yolo2supervisely", "-o", "a", "-p", "b", "-l", "x"]).is_err());
        assert!(Args::try_parse_from(["yolo2supervisely", "-p", "b", "-d", "c", "-l", "x"]).is_err());
    }
}
