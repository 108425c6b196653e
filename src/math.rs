//! Numeric helpers

/// Tolerance for treating a value as zero in degeneracy tests
pub const EPS : f64 = 1e-9;

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Interpolate two u8 components, rounding to nearest
pub fn lerp_u8(p: u8, q: u8, t: f64) -> u8 {
    let v = lerp(f64::from(p), f64::from(q), t).round();
    v.max(0.0).min(255.0) as u8
}

/// Value is within `tol` of zero
pub fn is_almost_zero(x: f64, tol: f64) -> bool {
    x.abs() <= tol
}

/// Determinant of the 3x3 matrix given by rows
pub fn det3(m: [[f64;3];3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Roots of `a + b t + c t^2` strictly inside (0,1), sorted
///
/// Degree drops when leading coefficients vanish.  A polynomial that
/// is identically zero has no isolated roots.
pub fn unit_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return vec![];
    }
    let (a, b, c) = (a / scale, b / scale, c / scale);
    let mut roots = vec![];
    if is_almost_zero(c, EPS) {
        if !is_almost_zero(b, EPS) {
            roots.push(-a / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            // Numerically stable form
            let q = -0.5 * (b + b.signum() * sq);
            if q != 0.0 {
                roots.push(q / c);
                roots.push(a / q);
            } else {
                roots.push(-b / (2.0 * c));
            }
        }
    }
    let mut roots : Vec<f64> = roots.into_iter()
        .filter(|t| t.is_finite() && *t > 0.0 && *t < 1.0)
        .collect();
    roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    roots.dedup_by(|x, y| (*x - *y).abs() < EPS);
    roots
}
