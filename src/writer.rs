use crate::data::PoseRecord;
use crate::transform::flatten_row_major;
use nalgebra as na;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Shortest round-trip text for a float, in the layout downstream readers
/// expect: `1.0`, `-0.25`, `1e-05`, `1.5e+16`, `nan`, `inf`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    // `{:e}` already yields the shortest digits, e.g. "-1.2345e-3"
    let scientific = format!("{:e}", value);
    let parsed = scientific
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    let (mantissa, exponent) = match parsed {
        Some(parts) => parts,
        None => {
            debug_assert!(false, "unexpected exponent layout {:?}", scientific);
            return scientific;
        }
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        if exponent >= 0 {
            let point = exponent as usize + 1;
            if digits.len() <= point {
                format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
            } else {
                format!("{}{}.{}", sign, &digits[..point], &digits[point..])
            }
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("{}0.{}{}", sign, zeros, digits)
        }
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exponent_sign, exponent.abs())
    }
}

fn write_row<W: Write>(writer: &mut W, values: &[f64]) -> std::io::Result<()> {
    for value in values {
        write!(writer, "{} ", format_float(*value))?;
    }
    writeln!(writer)
}

pub fn write_matrices_to<W: Write>(writer: &mut W, matrices: &[na::Matrix4<f64>]) -> std::io::Result<()> {
    for matrix in matrices {
        write_row(writer, &flatten_row_major(matrix))?;
    }
    writer.flush()
}

pub fn write_poses_to<W: Write>(writer: &mut W, records: &[PoseRecord]) -> std::io::Result<()> {
    for record in records {
        write_row(writer, &record.values())?;
    }
    writer.flush()
}

/// One line of 16 row-major values per matrix.
pub fn write_matrices(path: &Path, matrices: &[na::Matrix4<f64>]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_matrices_to(&mut writer, matrices)
}

/// One line of `tx ty tz qx qy qz qw` per record.
pub fn write_poses(path: &Path, records: &[PoseRecord]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_poses_to(&mut writer, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        let cases = [
            (1.0, "1.0"),
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (-0.25, "-0.25"),
            (0.1, "0.1"),
            (123.456, "123.456"),
            (1e-4, "0.0001"),
            (1e-5, "1e-05"),
            (-2.5e-7, "-2.5e-07"),
            (1e15, "1000000000000000.0"),
            (1e16, "1e+16"),
            (1.5e300, "1.5e+300"),
            (2.220446049250313e-16, "2.220446049250313e-16"),
            (0.7071067811865476, "0.7071067811865476"),
            (5e-324, "5e-324"),
            (f64::NAN, "nan"),
            (f64::NEG_INFINITY, "-inf"),
        ];
        for (value, expected) in cases.iter() {
            assert_eq!(format_float(*value), *expected, "formatting {:e}", value);
        }
    }

    #[test]
    fn test_matrix_line_layout() {
        let mut out = Vec::new();
        write_matrices_to(&mut out, &[na::Matrix4::identity(), na::Matrix4::identity()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = "1.0 0.0 0.0 0.0 0.0 1.0 0.0 0.0 0.0 0.0 1.0 0.0 0.0 0.0 0.0 1.0 \n";
        assert_eq!(text, line.repeat(2));
    }

    #[test]
    fn test_translation_lands_in_row_ends() {
        let mut matrix = na::Matrix4::identity();
        matrix[(0, 3)] = 5.0;
        matrix[(2, 3)] = -3.5;
        let mut out = Vec::new();
        write_matrices_to(&mut out, &[matrix]).unwrap();
        let tokens: Vec<String> = String::from_utf8(out)
            .unwrap()
            .split_whitespace()
            .map(String::from)
            .collect();
        assert_eq!(tokens.len(), 16);
        assert_eq!(tokens[3], "5.0");
        assert_eq!(tokens[11], "-3.5");
    }

    #[test]
    fn test_pose_line_layout() {
        let record = PoseRecord::new(
            "t0",
            na::Vector3::new(1.0, 2.0, 3.0),
            na::Vector4::new(0.0, 0.0, 0.0, 1.0),
        );
        let mut out = Vec::new();
        write_poses_to(&mut out, &[record]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.0 2.0 3.0 0.0 0.0 0.0 1.0 \n");
    }
}
