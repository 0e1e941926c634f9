//! Reader for Darknet/YOLO label files.
//!
//! Each non-empty line holds `class_id center_x center_y width height`,
//! separated by whitespace, with the geometry normalized to the image size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::NormalizedBox;

/// Parse one label line. Blank lines yield `Ok(None)`.
///
/// Every number must be finite. Tokens after the fifth are checked the same
/// way but otherwise ignored.
/// No range checks are made on the geometry; the transformer clamps it.
pub fn parse_line(line: &str) -> std::result::Result<Option<NormalizedBox>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < 5 {
        return Err(format!(
            "expected `class_id center_x center_y width height`, found {} token(s)",
            tokens.len()
        ));
    }

    let class_id = tokens[0]
        .parse::<usize>()
        .map_err(|e| format!("invalid class id {:?}: {}", tokens[0], e))?;

    let values = tokens[1..]
        .iter()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("non-finite number {:?}", token)),
            Err(e) => Err(format!("invalid number {:?}: {}", token, e)),
        })
        .collect::<std::result::Result<Vec<f64>, String>>()?;

    Ok(Some(NormalizedBox {
        class_id,
        center_x: values[0],
        center_y: values[1],
        width: values[2],
        height: values[3],
    }))
}

/// Read every box of a label file, in file order.
pub fn read_label_file(path: &Path) -> Result<Vec<NormalizedBox>> {
    let reader = BufReader::new(File::open(path)?);
    let mut boxes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(bbox)) => boxes.push(bbox),
            Ok(None) => {}
            Err(message) => {
                return Err(ConvertError::MalformedLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message,
                })
            }
        }
    }

    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line() {
        let bbox = parse_line("3 0.5 0.25 0.1 0.2").unwrap().unwrap();
        assert_eq!(bbox.class_id, 3);
        assert_eq!(bbox.center_x, 0.5);
        assert_eq!(bbox.center_y, 0.25);
        assert_eq!(bbox.width, 0.1);
        assert_eq!(bbox.height, 0.2);
    }

    #[test]
    fn test_parse_line_tolerates_spacing_and_out_of_range() {
        let bbox = parse_line("  0\t1.5   -0.2 2 0 ").unwrap().unwrap();
        assert_eq!(bbox.center_x, 1.5);
        assert_eq!(bbox.center_y, -0.2);
        assert_eq!(bbox.width, 2.0);
    }

    #[test]
    fn test_parse_line_blank() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_line_malformed() {
        assert!(parse_line("0 0.5 0.5 0.5").is_err());
        assert!(parse_line("cat 0.5 0.5 0.5 0.5").is_err());
        assert!(parse_line("-1 0.5 0.5 0.5 0.5").is_err());
        assert!(parse_line("0 0.5 x 0.5 0.5").is_err());
        assert!(parse_line("0 0.5 0.5 0.5 0.5 oops").is_err());
    }

    #[test]
    fn test_parse_line_rejects_non_finite() {
        assert!(parse_line("0 nan 0.5 0.2 0.2").is_err());
        assert!(parse_line("0 0.5 NaN 0.2 0.2").is_err());
        assert!(parse_line("0 inf 0.5 0.2 0.2").is_err());
        assert!(parse_line("0 0.5 0.5 -infinity 0.2").is_err());
        assert!(parse_line("0 0.5 0.5 0.2 0.2 inf").is_err());
    }

    #[test]
    fn test_read_label_file_rejects_nan() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0.5 0.5 0.5 0.5").unwrap();
        writeln!(file, "0 nan 0.5 0.2 0.2").unwrap();

        assert!(matches!(
            read_label_file(file.path()),
            Err(ConvertError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_line_ignores_extra_numbers() {
        let bbox = parse_line("1 0.1 0.2 0.3 0.4 0.99").unwrap().unwrap();
        assert_eq!(bbox.height, 0.4);
    }

    #[test]
    fn test_read_label_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 0.5 0.5 0.5 0.5\n\n1 0.1 0.1 0.2 0.2").unwrap();

        let boxes = read_label_file(file.path()).unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].class_id, 0);
        assert_eq!(boxes[1].class_id, 1);
    }

    #[test]
    fn test_read_label_file_reports_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0 0.5 0.5 0.5 0.5").unwrap();
        writeln!(file, "1 0.5").unwrap();

        match read_label_file(file.path()) {
            Err(ConvertError::MalformedLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }
}
