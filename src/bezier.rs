//! Bezier curve algebra
//!
//! Power basis coefficients are returned as `(a, b, c)` for
//! `a + b t + c t^2`, ready for [unit_roots](../math/fn.unit_roots.html).

use crate::paths::Point;
use crate::math::lerp;

/// Numerator of the derivative of one coordinate of a rational quadratic
///
/// `a` holds the homogeneous coordinates and `c` the weights of the three
/// control points.  The denominator is a square and never changes sign.
pub fn rational_derivative(a: [f64;3], c: [f64;3]) -> (f64, f64, f64) {
    let e0 = a[1]*c[0] - a[0]*c[1];
    let e1 = a[2]*c[0] - a[0]*c[2];
    let e2 = a[2]*c[1] - a[1]*c[2];
    (e0, e1 - 2.0 * e0, e0 - e1 + e2)
}

/// Derivative of one coordinate of a cubic
pub fn cubic_derivative(p: [f64;4]) -> (f64, f64, f64) {
    let c = 3.0 * (p[1] - p[0]);
    let b = 3.0 * (p[2] - 2.0 * p[1] + p[0]);
    let a = p[3] - 3.0 * p[2] + 3.0 * p[1] - p[0];
    (c, 2.0 * b, 3.0 * a)
}

/// Cross product of first and second derivatives of a cubic
///
/// Its roots are the inflection points
pub fn cubic_inflections(p: [Point;4]) -> (f64, f64, f64) {
    let c = (p[1] - p[0]) * 3.0;
    let b = (p[2] - p[1] * 2.0 + p[0]) * 3.0;
    let a = p[3] - p[2] * 3.0 + p[1] * 3.0 - p[0];
    (2.0 * c.det(&b), 6.0 * c.det(&a), -6.0 * a.det(&b))
}

/// Parameters in (0,1) of the double point of a cubic
///
/// The double point may pair a parameter inside the segment with one
/// outside of it.  The implicit equation has a second branch through
/// that point, which must not cross the triangle of a piece.
pub fn cubic_double_points(p: [Point;4]) -> Vec<f64> {
    let c = (p[1] - p[0]) * 3.0;
    let b = (p[2] - p[1] * 2.0 + p[0]) * 3.0;
    let a = p[3] - p[2] * 3.0 + p[1] * 3.0 - p[0];
    let ab = a.det(&b);
    if ab == 0.0 {
        return vec![];
    }
    // B(s) = B(t): c + b (s+t) + a ((s+t)^2 - s t) = 0
    let sum = c.det(&a) / ab;
    let prod = sum * sum + c.det(&b) / ab;
    let disc = sum * sum - 4.0 * prod;
    if !(disc > 0.0) {
        return vec![];
    }
    let r = disc.sqrt();
    [(sum - r) / 2.0, (sum + r) / 2.0].iter()
        .copied()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}

/// Homogeneous point `(x w, y w, w)`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Hpoint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl Hpoint {
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }
    /// Weighted point from a Euclidean point and weight
    pub fn weighted(p: Point, w: f64) -> Self {
        Self::new(p.x * w, p.y * w, w)
    }
    pub fn euclidean(&self) -> Point {
        Point::new(self.x / self.w, self.y / self.w)
    }
    fn lerp(&self, o: &Hpoint, t: f64) -> Hpoint {
        Hpoint::new(lerp(self.x, o.x, t), lerp(self.y, o.y, t), lerp(self.w, o.w, t))
    }
}

/// Rational quadratic with homogeneous control points
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RQuad(pub [Hpoint;3]);

impl RQuad {
    /// Curve from Euclidean points, `w` the weight of the control point
    pub fn new(p0: Point, p1: Point, w: f64, p2: Point) -> Self {
        RQuad([Hpoint::weighted(p0, 1.0), Hpoint::weighted(p1, w), Hpoint::weighted(p2, 1.0)])
    }
    /// de Casteljau split at t
    pub fn split(&self, t: f64) -> (RQuad, RQuad) {
        let [h0, h1, h2] = self.0;
        let h01 = h0.lerp(&h1, t);
        let h12 = h1.lerp(&h2, t);
        let h = h01.lerp(&h12, t);
        (RQuad([h0, h01, h]), RQuad([h, h12, h2]))
    }
    /// Euclidean endpoints, control point and weight in standard form
    /// (unit end weights)
    pub fn standard(&self) -> (Point, Point, f64, Point) {
        let [h0, h1, h2] = self.0;
        let w = h1.w / (h0.w * h2.w).sqrt();
        (h0.euclidean(), h1.euclidean(), w, h2.euclidean())
    }
    /// Parameters in (0,1) where x or y is extremal
    pub fn extrema(&self) -> Vec<f64> {
        let [h0, h1, h2] = self.0;
        let c = [h0.w, h1.w, h2.w];
        let (a, b, cc) = rational_derivative([h0.x, h1.x, h2.x], c);
        let mut ts = crate::math::unit_roots(a, b, cc);
        let (a, b, cc) = rational_derivative([h0.y, h1.y, h2.y], c);
        ts.extend(crate::math::unit_roots(a, b, cc));
        sort_params(ts)
    }
}

/// Cubic with Euclidean control points
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Cubic(pub [Point;4]);

impl Cubic {
    /// de Casteljau split at t
    pub fn split(&self, t: f64) -> (Cubic, Cubic) {
        let [p0, p1, p2, p3] = self.0;
        let mix = |a: Point, b: Point| a + (b - a) * t;
        let p01 = mix(p0, p1);
        let p12 = mix(p1, p2);
        let p23 = mix(p2, p3);
        let p012 = mix(p01, p12);
        let p123 = mix(p12, p23);
        let p = mix(p012, p123);
        (Cubic([p0, p01, p012, p]), Cubic([p, p123, p23, p3]))
    }
    /// Parameters in (0,1) where x or y is extremal, the curve inflects
    /// or passes its double point
    pub fn extrema(&self) -> Vec<f64> {
        let p = self.0;
        let (a, b, c) = cubic_derivative([p[0].x, p[1].x, p[2].x, p[3].x]);
        let mut ts = crate::math::unit_roots(a, b, c);
        let (a, b, c) = cubic_derivative([p[0].y, p[1].y, p[2].y, p[3].y]);
        ts.extend(crate::math::unit_roots(a, b, c));
        let (a, b, c) = cubic_inflections(p);
        ts.extend(crate::math::unit_roots(a, b, c));
        ts.extend(cubic_double_points(p));
        sort_params(ts)
    }
    /// Point at t
    pub fn eval(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.0;
        let mt = 1.0 - t;
        p0 * (mt*mt*mt) + p1 * (3.0*mt*mt*t) + p2 * (3.0*mt*t*t) + p3 * (t*t*t)
    }
}

fn sort_params(mut ts: Vec<f64>) -> Vec<f64> {
    ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ts.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    ts
}

/// Split a curve at increasing parameters
///
/// Each split reparametrizes the remainder onto [0,1]
pub fn split_at<C, F>(curve: C, ts: &[f64], split: F) -> Vec<C>
    where F: Fn(&C, f64) -> (C, C)
{
    let mut out = Vec::with_capacity(ts.len() + 1);
    let mut rest = curve;
    let mut t0 = 0.0;
    for &t in ts {
        let local = (t - t0) / (1.0 - t0);
        let (a, b) = split(&rest, local);
        out.push(a);
        rest = b;
        t0 = t;
    }
    out.push(rest);
    out
}
