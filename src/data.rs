use crate::error::{ExportError, Result};
use nalgebra as na;

/// Number of tokens a trajectory row needs: `stamp tx ty tz qx qy qz qw`.
pub const FIELD_COUNT: usize = 8;

/// Why a well formed row is left out of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Quaternion is exactly `(0, 0, 0, 0)`. Dropped without a diagnostic.
    ZeroQuaternion,
    /// One of the seven numeric fields is NaN. Dropped with a warning.
    NotANumber,
}

/// One timestamped pose as read from a trajectory file.
///
/// The quaternion is stored as `(qx, qy, qz, qw)` and is not required to be
/// normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRecord {
    pub line: usize,
    pub timestamp: String,
    pub position: na::Vector3<f64>,
    pub quaternion: na::Vector4<f64>,
}

impl PoseRecord {
    pub fn new(
        timestamp: impl Into<String>,
        position: na::Vector3<f64>,
        quaternion: na::Vector4<f64>,
    ) -> Self {
        Self {
            line: 0,
            timestamp: timestamp.into(),
            position,
            quaternion,
        }
    }

    /// Builds a record from the whitespace split tokens of one line.
    ///
    /// Tokens past the eighth are ignored.
    pub fn from_fields(fields: &[&str], line: usize, source_name: &str) -> Result<Self> {
        let malformed = |reason: String| ExportError::MalformedRecord {
            source_name: source_name.to_owned(),
            line,
            reason,
        };
        if fields.len() < FIELD_COUNT {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }
        let mut values = [0.0_f64; FIELD_COUNT - 1];
        for (value, token) in values.iter_mut().zip(&fields[1..FIELD_COUNT]) {
            *value = token
                .parse::<f64>()
                .map_err(|_| malformed(format!("could not parse {:?} as a number", token)))?;
        }
        Ok(Self {
            line,
            timestamp: fields[0].to_owned(),
            position: na::Vector3::new(values[0], values[1], values[2]),
            quaternion: na::Vector4::new(values[3], values[4], values[5], values[6]),
        })
    }

    /// `tx ty tz qx qy qz qw`
    pub fn values(&self) -> [f64; FIELD_COUNT - 1] {
        let (t, q) = (&self.position, &self.quaternion);
        [t.x, t.y, t.z, q.x, q.y, q.z, q.w]
    }

    pub fn rejection(&self) -> Option<Rejection> {
        if self.quaternion.iter().all(|v| *v == 0.0) {
            Some(Rejection::ZeroQuaternion)
        } else if self.values().iter().any(|v| v.is_nan()) {
            Some(Rejection::NotANumber)
        } else {
            None
        }
    }
}
