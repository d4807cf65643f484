//! Converts trajectory files of timestamped poses (position + quaternion)
//! into files of flattened 4x4 homogeneous transforms.

pub mod config;
pub mod data;
pub mod error;
pub mod trajectory;
pub mod transform;
pub mod writer;

pub use config::{ExportConfig, OutputFormat};
pub use data::{PoseRecord, Rejection};
pub use error::{ExportError, Result};
pub use trajectory::{parse_trajectory, read_trajectory, read_trajectory_matrices};
pub use transform::{convert_all, transform44};

use log::*;
use std::path::PathBuf;

/// Reads, converts and writes one trajectory. Returns the output path.
///
/// Nothing is written unless the whole input parses.
pub fn export(config: &ExportConfig) -> Result<PathBuf> {
    let input = config.input_path()?;
    let output = config.output_path()?;
    let records = read_trajectory(&input)?;
    info!("Processing {} poses...", records.len());
    let written = match config.format {
        OutputFormat::Matrix => writer::write_matrices(&output, &convert_all(&records)),
        OutputFormat::Pose => writer::write_poses(&output, &records),
    };
    written.map_err(|source| ExportError::OutputWrite {
        path: output.clone(),
        source,
    })?;
    info!("Success!");
    info!("Output saved to {}", output.display());
    Ok(output)
}
