use crate::data::PoseRecord;
use nalgebra as na;

/// Squared quaternion norms below this are treated as zero.
pub const EPS: f64 = 4.0 * f64::EPSILON;

/// Homogeneous 4x4 transform for a pose.
///
/// The quaternion does not have to be unit length. It is scaled so its
/// squared norm is 2, which lets the outer product below produce a proper
/// rotation without dividing each entry by the norm. Near-zero quaternions
/// give the identity rotation.
#[allow(clippy::many_single_char_names)]
pub fn transform44(record: &PoseRecord) -> na::Matrix4<f64> {
    let t = &record.position;
    let q = record.quaternion;
    let nq = q.dot(&q);
    if nq < EPS {
        return na::Matrix4::new(
            1.0, 0.0, 0.0, t.x, //
            0.0, 1.0, 0.0, t.y, //
            0.0, 0.0, 1.0, t.z, //
            0.0, 0.0, 0.0, 1.0,
        );
    }
    let q = q * (2.0 / nq).sqrt();
    let q = q * q.transpose();
    na::Matrix4::new(
        1.0 - q[(1, 1)] - q[(2, 2)],
        q[(0, 1)] - q[(2, 3)],
        q[(0, 2)] + q[(1, 3)],
        t.x,
        q[(0, 1)] + q[(2, 3)],
        1.0 - q[(0, 0)] - q[(2, 2)],
        q[(1, 2)] - q[(0, 3)],
        t.y,
        q[(0, 2)] - q[(1, 3)],
        q[(1, 2)] + q[(0, 3)],
        1.0 - q[(0, 0)] - q[(1, 1)],
        t.z,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

pub fn convert_all(records: &[PoseRecord]) -> Vec<na::Matrix4<f64>> {
    records.iter().map(transform44).collect()
}

/// Row-major flattening. nalgebra stores column-major so `as_slice` won't do.
pub fn flatten_row_major(matrix: &na::Matrix4<f64>) -> [f64; 16] {
    let mut flat = [0.0; 16];
    for (index, value) in flat.iter_mut().enumerate() {
        *value = matrix[(index / 4, index % 4)];
    }
    flat
}
