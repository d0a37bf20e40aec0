use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Compare two strings in natural order: digit runs compare numerically,
/// non-digit runs compare case-insensitively, so "f_2" sorts before "f_10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => numeric_cmp(x, y),
                    (false, false) => x.to_lowercase().cmp(&y.to_lowercase()),
                    // A digit run sorts before a non-digit run
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sort paths in place by the natural order of their file names.
pub fn natural_sort(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| {
        natural_cmp(
            &a.file_name().unwrap_or_default().to_string_lossy(),
            &b.file_name().unwrap_or_default().to_string_lossy(),
        )
    });
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

// Numeric comparison without parsing: strip leading zeros, then longer
// digit strings are larger, equal lengths compare lexically.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Split into maximal runs of digit / non-digit characters
fn chunks(s: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let first_is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != first_is_digit)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Ensure the output directory exists. Existing contents are left alone;
/// individual output files are truncated as they are rewritten.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
