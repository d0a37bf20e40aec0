use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::Detection;
use crate::utils::natural_sort;

/// List every `*.txt` ground-truth file in the input directory, sorted in
/// natural order so frame N's file comes before frame N+1's even without
/// zero padding. The returned order is authoritative for frame order.
pub fn enumerate_frame_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(ConvertError::MissingInputDir(input_dir.to_path_buf()));
    }

    let pattern = format!("{}/*.txt", input_dir.display());
    let entries = glob(&pattern).map_err(|source| ConvertError::BadPattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries.filter_map(|entry| entry.ok()).collect();
    if files.is_empty() {
        return Err(ConvertError::NoInputFiles(input_dir.to_path_buf()));
    }

    natural_sort(&mut files);
    Ok(files)
}

/// Extract the 0-based frame index from a file name like `seq_0042.txt`:
/// the final `_`-delimited token, truncated at the first `.`, parsed as an
/// integer. Emitted frame numbers are this value plus one.
pub fn frame_index(path: &Path) -> Result<u64> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConvertError::FrameIndex(path.to_path_buf()))?;
    let token = name.rsplit('_').next().unwrap_or(name);
    let digits = token.split('.').next().unwrap_or(token);
    digits
        .parse::<u64>()
        .map_err(|_| ConvertError::FrameIndex(path.to_path_buf()))
}

/// Parse one frame's ground-truth file into detection records. Blank lines
/// are skipped; every other line must hold exactly six numeric fields
/// (`class_id object_id x y w h`). A single-row file yields a Vec of length
/// one, handled identically to any other length.
pub fn read_detection_file(path: &Path) -> Result<Vec<Detection>> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut detections = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        detections.push(parse_row(path, line_no + 1, line)?);
    }
    Ok(detections)
}

fn parse_row(path: &Path, line: usize, row: &str) -> Result<Detection> {
    let malformed = |reason: String| ConvertError::MalformedRow {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(malformed(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    }

    let int = |idx: usize, name: &str| {
        fields[idx]
            .parse::<i64>()
            .map_err(|_| malformed(format!("{} is not an integer: \"{}\"", name, fields[idx])))
    };
    let float = |idx: usize, name: &str| {
        fields[idx]
            .parse::<f64>()
            .map_err(|_| malformed(format!("{} is not a number: \"{}\"", name, fields[idx])))
    };

    Ok(Detection {
        class_id: int(0, "class_id")?,
        object_id: int(1, "object_id")?,
        x: float(2, "x")?,
        y: float(3, "y")?,
        w: float(4, "w")?,
        h: float(5, "h")?,
    })
}
