//! Reading trajectory text files into pose records.
//!
//! Each line holds `stamp tx ty tz qx qy qz qw`, separated by any mix of
//! spaces, tabs and commas. Lines starting with `#` are comments.

use crate::data::{PoseRecord, Rejection};
use crate::error::{ExportError, Result};
use crate::transform::convert_all;
use log::*;
use nalgebra as na;
use std::fs;
use std::path::Path;

/// Parses trajectory text. `source_name` only shows up in diagnostics.
///
/// Rows with a zero quaternion or a NaN value are dropped, everything else
/// keeps input order. A row that can't be parsed aborts the whole read.
pub fn parse_trajectory(text: &str, source_name: &str) -> Result<Vec<PoseRecord>> {
    let text = text.replace(',', " ").replace('\t', " ");
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(line, index + 1, source_name).transpose())
        .collect()
}

fn parse_line(line: &str, line_number: usize, source_name: &str) -> Result<Option<PoseRecord>> {
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    let record = PoseRecord::from_fields(&fields, line_number, source_name)?;
    match record.rejection() {
        None => Ok(Some(record)),
        Some(Rejection::ZeroQuaternion) => Ok(None),
        Some(Rejection::NotANumber) => {
            warn!(
                "line {} of file '{}' has NaNs, skipping line",
                line_number, source_name
            );
            Ok(None)
        }
    }
}

pub fn read_trajectory(path: &Path) -> Result<Vec<PoseRecord>> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::FileNotFound {
        path: path.to_owned(),
        source,
    })?;
    let records = parse_trajectory(&text, &path.display().to_string())?;
    debug!("Read {} poses from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_trajectory_matrices(path: &Path) -> Result<Vec<na::Matrix4<f64>>> {
    Ok(convert_all(&read_trajectory(path)?))
}
