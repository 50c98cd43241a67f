//! CLI command implementations.

use sigma_math::matrix2::Matrix2x2;
use sigma_math::{
    angle_of, angle_of_degrees, decompose_with, reconstruct as rebuild, rotation_of_degrees,
    unit_square, Point2, SingularValues, Tolerances, TransformStages,
};
use sigma_types::{SigmaError, SigmaResult};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Decompose a matrix and print U, Σ, V, Vᵗ.
pub fn decompose(entries: &[f64], config_path: Option<&str>, json: bool) -> CommandResult {
    let a = matrix_from(entries)?;
    let tolerances = match config_path {
        Some(path) => load_tolerances(path)?,
        None => Tolerances::default(),
    };
    tracing::info!(?a, ?tolerances, "decompose");

    let svd = decompose_with(&a, &tolerances);

    if json {
        println!("{}", to_json(&svd)?);
        return Ok(());
    }

    println!("sigma decomposition");
    println!("───────────────────");
    print_matrix("A", &a);
    print_matrix("U", &svd.u);
    println!("  S  = ({:.6}, {:.6})", svd.s.s0, svd.s.s1);
    print_matrix("V", &svd.v);
    print_matrix("Vᵗ", &svd.vt);
    println!();
    println!(
        "  angle(U)  = {:.4}°   det(U) = {:+.1}",
        angle_of_degrees(&svd.u),
        svd.u.determinant()
    );
    println!(
        "  angle(Vᵗ) = {:.4}°   det(V) = {:+.1}",
        angle_of_degrees(&svd.vt),
        svd.v.determinant()
    );
    println!("  case      = {:?} / {:?}", svd.case.right, svd.case.left);
    Ok(())
}

/// Rebuild A = R(u_angle) · diag(s0, s1) · R(vt_angle).
pub fn reconstruct(u_angle: f64, s0: f64, s1: f64, vt_angle: f64, json: bool) -> CommandResult {
    for (name, value) in [("u-angle", u_angle), ("s0", s0), ("s1", s1), ("vt-angle", vt_angle)] {
        if !value.is_finite() {
            return Err(
                SigmaError::InvalidArgument(format!("{name} must be finite, got {value}")).into(),
            );
        }
    }
    if s0 < 0.0 || s1 < 0.0 {
        return Err(SigmaError::InvalidArgument(format!(
            "singular values must be non-negative, got ({s0}, {s1})"
        ))
        .into());
    }
    tracing::info!(u_angle, s0, s1, vt_angle, "reconstruct");

    let u = rotation_of_degrees(u_angle);
    let vt = rotation_of_degrees(vt_angle);
    let a = rebuild(&u, &SingularValues::new(s0, s1), &vt);

    if json {
        println!("{}", to_json(&a)?);
    } else {
        print_matrix("A", &a);
    }
    Ok(())
}

/// Print the rotation matrix for an angle in degrees.
pub fn rotation(degrees: f64, json: bool) -> CommandResult {
    if !degrees.is_finite() {
        return Err(
            SigmaError::InvalidArgument(format!("angle must be finite, got {degrees}")).into(),
        );
    }
    let r = rotation_of_degrees(degrees);
    if json {
        println!("{}", to_json(&r)?);
    } else {
        print_matrix("R", &r);
    }
    Ok(())
}

/// Print the rotation angle encoded in a matrix's first column.
pub fn angle(entries: &[f64]) -> CommandResult {
    let r = matrix_from(entries)?;
    if !r.is_orthogonal(sigma_types::constants::ORTHOGONALITY_TOLERANCE) {
        tracing::warn!(?r, "matrix is not a rotation; angle reads the first column only");
    }
    println!("{:.6} rad  ({:.4}°)", angle_of(&r), angle_of_degrees(&r));
    Ok(())
}

/// Apply a matrix to one point.
pub fn apply(values: &[f64]) -> CommandResult {
    let (entries, point) = values.split_at(values.len().min(4));
    let a = matrix_from(entries)?;
    let p = point_from(point)?;
    let q = sigma_math::apply(&a, p);
    println!("({}, {}) -> ({}, {})", p.x, p.y, q.x, q.y);
    Ok(())
}

/// Carry the unit square through each factor of the decomposition.
pub fn stages(entries: &[f64], json: bool) -> CommandResult {
    let a = matrix_from(entries)?;
    let svd = decompose_with(&a, &Tolerances::default());
    let stages = TransformStages::compute(&svd, &unit_square());

    if json {
        println!("{}", to_json(&stages)?);
        return Ok(());
    }

    print_points("input", &stages.original);
    print_points("Vᵗ·p", &stages.rotated);
    print_points("Σ·Vᵗ·p", &stages.scaled);
    print_points("U·Σ·Vᵗ·p", &stages.transformed);
    Ok(())
}

/// Load and validate decomposition tolerances from a TOML file.
pub fn load_tolerances(path: &str) -> SigmaResult<Tolerances> {
    let text = std::fs::read_to_string(path)?;
    parse_tolerances(&text)
}

fn parse_tolerances(text: &str) -> SigmaResult<Tolerances> {
    let tolerances: Tolerances =
        toml::from_str(text).map_err(|e| SigmaError::InvalidConfig(e.to_string()))?;
    tolerances.validate()?;
    Ok(tolerances)
}

fn matrix_from(entries: &[f64]) -> SigmaResult<Matrix2x2> {
    let [a, b, c, d] = <[f64; 4]>::try_from(entries).map_err(|_| {
        SigmaError::InvalidArgument(format!("expected 4 matrix entries, got {}", entries.len()))
    })?;
    let m = Matrix2x2::new(a, b, c, d);
    m.ensure_finite()?;
    Ok(m)
}

fn point_from(coords: &[f64]) -> SigmaResult<Point2> {
    match *coords {
        [x, y] if x.is_finite() && y.is_finite() => Ok(Point2::new(x, y)),
        [x, y] => Err(SigmaError::InvalidArgument(format!(
            "point must be finite, got ({x}, {y})"
        ))),
        _ => Err(SigmaError::InvalidArgument(format!(
            "expected 2 point coordinates, got {}",
            coords.len()
        ))),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> SigmaResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| SigmaError::Serialization(e.to_string()))
}

fn print_matrix(label: &str, m: &Matrix2x2) {
    let [[a, b], [c, d]] = m.rows;
    println!("  {label:<2} = [[{a:>10.6}, {b:>10.6}],");
    println!("        [{c:>10.6}, {d:>10.6}]]");
}

fn print_points(label: &str, points: &[Point2]) {
    let formatted: Vec<String> = points
        .iter()
        .map(|p| format!("({:.4}, {:.4})", p.x, p.y))
        .collect();
    println!("  {label:<9} {}", formatted.join("  "));
}
