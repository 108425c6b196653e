//! Monotonic path segments with implicit hit tests
//!
//! A segment answers a single question: does a ray cast from a point
//! towards +x cross it?  The answer comes from the bounding box when the
//! point is outside of it and from the implicit equation of the curve
//! when the point is inside.  No parametric root finding is involved.
//!
//! Every segment must be monotonic in both x and y and have a
//! non-zero y extent.  The box is then the box of the two endpoints
//! and the implicit equation has a single branch inside of it.

use crate::bbox::BoundingBox;
use crate::paths::Point;
use crate::math::unit_roots;
use crate::bezier::{rational_derivative, cubic_derivative};
use crate::error::{Error, Result};

/// Control points closer than this (squared) are treated as coincident
/// when building the triangle of a cubic
const BEZIER_EPS : f64 = 1e-4;

/// Relative tolerance of the monotonicity check
const MONOTONE_TOL : f64 = 1e-7;

/// Implicit line through `p0` with direction `d`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Linear {
    pub p0: Point,
    pub d: Point,
}

impl Linear {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, d: p1 - p0 }
    }
    /// Point is on the side of the line the ray starts from
    ///
    /// The sign is normalized by `d.y` so the test reads the same for
    /// rising and falling lines
    pub fn implicit_hit(&self, x: f64, y: f64) -> bool {
        self.d.y * ((x - self.p0.x) * self.d.y - (y - self.p0.y) * self.d.x) <= 0.0
    }
}

/// Line piece with its own box, used for the control triangles
#[derive(Debug,Copy,Clone,PartialEq)]
struct Edge {
    line: Linear,
    bbox: BoundingBox,
}

impl Edge {
    fn new(p0: Point, p1: Point) -> Self {
        Self { line: Linear::new(p0, p1), bbox: BoundingBox::new(p0, p1) }
    }
    fn intersect(&self, x: f64, y: f64) -> bool {
        ray_hit(&self.bbox, x, y, || self.line.implicit_hit(x, y))
    }
}

/// Rational quadratic in implicit form
///
/// Coordinates are relative to the first point.  `q1` is the weighted
/// control vector `w (p1 - p0)` and `q2` the end vector `p2 - p0`.
///
/// For `w > 1` the conic is a hyperbola whose far branch crosses the
/// box.  The arc stays within its control triangle and the far branch
/// never enters it, so the triangle decides first like for a cubic.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Quadratic {
    pub p0: Point,
    pub q1: Point,
    pub q2: Point,
    pub w: f64,
    tri: [Edge; 3],
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    der: f64,
}

impl Quadratic {
    fn new(p0: Point, p1: Point, p2: Point, w: f64) -> Self {
        let q1 = (p1 - p0) * w;
        let q2 = p2 - p0;
        let (v0, v1) = (Point::new(0.0, 0.0), p1 - p0);
        let tri = [Edge::new(v0, v1), Edge::new(v1, q2), Edge::new(q2, v0)];
        let (x1, y1, x2, y2) = (q1.x, q1.y, q2.x, q2.y);
        let a = 4.0*x1*x1 - 4.0*w*x1*x2 + x2*x2;
        let b = 4.0*x1*x2*y1 - 4.0*x1*x1*y2;
        let c = -4.0*x2*y1*y1 + 4.0*x1*y1*y2;
        let d = -8.0*x1*y1 + 4.0*w*x2*y1 + 4.0*w*x1*y2 - 2.0*x2*y2;
        let e = 4.0*y1*y1 - 4.0*w*y1*y2 + y2*y2;
        let der = 2.0 * y2 * (-x2*y1 + x1*y2);
        Self { p0, q1, q2, w, tri, a, b, c, d, e, der }
    }
    /// Sign of the conic, normalized by its gradient at the start
    fn hit_me(&self, x: f64, y: f64) -> bool {
        self.der * (y*(y*self.a + self.b) + x*(self.c + y*self.d + x*self.e)) <= 0.0
    }
    pub fn implicit_hit(&self, x: f64, y: f64) -> bool {
        let x = x - self.p0.x;
        let y = y - self.p0.y;
        match triangle_hits(&self.tri, x, y) {
            2 => true,
            1 => self.hit_me(x, y),
            _ => false,
        }
    }
}

/// Cubic in implicit form
///
/// The implicit polynomial has spurious branches inside the box, so the
/// control polygon is reduced to a triangle first.  A point left of both
/// crossed triangle edges is a hit, a point inside the triangle is
/// decided by the polynomial.
#[derive(Debug,Clone,PartialEq)]
pub struct Cubic {
    pub p0: Point,
    tri: [Edge; 3],
    k: [f64; 9],
    der: f64,
}

impl Cubic {
    fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        let (x1, y1) = ((p1 - p0).x, (p1 - p0).y);
        let (x2, y2) = ((p2 - p0).x, (p2 - p0).y);
        let (x3, y3) = ((p3 - p0).x, (p3 - p0).y);

        let a = -27.0*x1*x3*x3*y1*y1 + 81.0*x1*x2*x3*y1*y2 - 81.0*x1*x1*x3*y2*y2
            - 81.0*x1*x2*x2*y1*y3 + 54.0*x1*x1*x3*y1*y3 + 81.0*x1*x1*x2*y2*y3
            - 27.0*x1*x1*x1*y3*y3;
        let b = -27.0*x1*x1*x1 + 81.0*x1*x1*x2 - 81.0*x1*x2*x2 + 27.0*x2*x2*x2
            - 27.0*x1*x1*x3 + 54.0*x1*x2*x3 - 27.0*x2*x2*x3 - 9.0*x1*x3*x3
            + 9.0*x2*x3*x3 - x3*x3*x3;
        let c = 81.0*x1*x2*x2*y1 - 54.0*x1*x1*x3*y1 - 81.0*x1*x2*x3*y1
            + 54.0*x1*x3*x3*y1 - 9.0*x2*x3*x3*y1 - 81.0*x1*x1*x2*y2
            + 162.0*x1*x1*x3*y2 - 81.0*x1*x2*x3*y2 + 27.0*x2*x2*x3*y2
            - 18.0*x1*x3*x3*y2 + 54.0*x1*x1*x1*y3 - 81.0*x1*x1*x2*y3
            + 81.0*x1*x2*x2*y3 - 27.0*x2*x2*x2*y3 - 54.0*x1*x1*x3*y3
            + 27.0*x1*x2*x3*y3;
        let d = 27.0*x3*x3*y1*y1*y1 - 81.0*x2*x3*y1*y1*y2 + 81.0*x1*x3*y1*y2*y2
            + 81.0*x2*x2*y1*y1*y3 - 54.0*x1*x3*y1*y1*y3 - 81.0*x1*x2*y1*y2*y3
            + 27.0*x1*x1*y1*y3*y3;
        let e = -81.0*x2*x2*y1*y1 + 108.0*x1*x3*y1*y1 + 81.0*x2*x3*y1*y1
            - 54.0*x3*x3*y1*y1 - 243.0*x1*x3*y1*y2 + 81.0*x2*x3*y1*y2
            + 27.0*x3*x3*y1*y2 + 81.0*x1*x1*y2*y2 + 81.0*x1*x3*y2*y2
            - 54.0*x2*x3*y2*y2 - 108.0*x1*x1*y1*y3 + 243.0*x1*x2*y1*y3
            - 81.0*x2*x2*y1*y3 - 9.0*x2*x3*y1*y3 - 81.0*x1*x1*y2*y3
            - 81.0*x1*x2*y2*y3 + 54.0*x2*x2*y2*y3 + 9.0*x1*x3*y2*y3
            + 54.0*x1*x1*y3*y3 - 27.0*x1*x2*y3*y3;
        let f = 81.0*x1*x1*y1 - 162.0*x1*x2*y1 + 81.0*x2*x2*y1 + 54.0*x1*x3*y1
            - 54.0*x2*x3*y1 + 9.0*x3*x3*y1 - 81.0*x1*x1*y2 + 162.0*x1*x2*y2
            - 81.0*x2*x2*y2 - 54.0*x1*x3*y2 + 54.0*x2*x3*y2 - 9.0*x3*x3*y2
            + 27.0*x1*x1*y3 - 54.0*x1*x2*y3 + 27.0*x2*x2*y3 + 18.0*x1*x3*y3
            - 18.0*x2*x3*y3 + 3.0*x3*x3*y3;
        let g = -54.0*x3*y1*y1*y1 + 81.0*x2*y1*y1*y2 + 81.0*x3*y1*y1*y2
            - 81.0*x1*y1*y2*y2 - 81.0*x3*y1*y2*y2 + 27.0*x3*y2*y2*y2
            + 54.0*x1*y1*y1*y3 - 162.0*x2*y1*y1*y3 + 54.0*x3*y1*y1*y3
            + 81.0*x1*y1*y2*y3 + 81.0*x2*y1*y2*y3 - 27.0*x3*y1*y2*y3
            - 27.0*x2*y2*y2*y3 - 54.0*x1*y1*y3*y3 + 18.0*x2*y1*y3*y3
            + 9.0*x1*y2*y3*y3;
        let h = -81.0*x1*y1*y1 + 81.0*x2*y1*y1 - 27.0*x3*y1*y1 + 162.0*x1*y1*y2
            - 162.0*x2*y1*y2 + 54.0*x3*y1*y2 - 81.0*x1*y2*y2 + 81.0*x2*y2*y2
            - 27.0*x3*y2*y2 - 54.0*x1*y1*y3 + 54.0*x2*y1*y3 - 18.0*x3*y1*y3
            + 54.0*x1*y2*y3 - 54.0*x2*y2*y3 + 18.0*x3*y2*y3 - 9.0*x1*y3*y3
            + 9.0*x2*y3*y3 - 3.0*x3*y3*y3;
        let i = 27.0*y1*y1*y1 - 81.0*y1*y1*y2 + 81.0*y1*y2*y2 - 27.0*y2*y2*y2
            + 27.0*y1*y1*y3 - 54.0*y1*y2*y3 + 27.0*y2*y2*y3 + 9.0*y1*y3*y3
            - 9.0*y2*y3*y3 + y3*y3*y3;
        let der = (y1 - y2 - y3) * (-x3*x3*(4.0*y1*y1 - 2.0*y1*y2 + y2*y2)
            + x1*x1*(9.0*y2*y2 - 6.0*y2*y3 - 4.0*y3*y3)
            + x2*x2*(9.0*y1*y1 - 12.0*y1*y3 - y3*y3)
            + 2.0*x1*x3*(-y2*(6.0*y2 + y3) + y1*(3.0*y2 + 4.0*y3))
            - 2.0*x2*(x3*(3.0*y1*y1 - y2*y3 + y1*(-6.0*y2 + y3))
                      + x1*(y1*(9.0*y2 - 3.0*y3) - y3*(6.0*y2 + y3))));

        let v0 = Point::new(0.0, 0.0);
        let v1 = triangle_apex(x1, y1, x2, y2, x3, y3);
        let v2 = Point::new(x3, y3);
        let tri = [Edge::new(v0, v1), Edge::new(v1, v2), Edge::new(v2, v0)];
        Self { p0, tri, k: [a, b, c, d, e, f, g, h, i], der }
    }
    fn hit_me(&self, x: f64, y: f64) -> bool {
        let [a, b, c, d, e, f, g, h, i] = self.k;
        self.der * (y*(a + y*(y*b + c)) + x*(d + y*(e + y*f) + x*(g + y*h + x*i))) <= 0.0
    }
    pub fn implicit_hit(&self, x: f64, y: f64) -> bool {
        let x = x - self.p0.x;
        let y = y - self.p0.y;
        match triangle_hits(&self.tri, x, y) {
            2 => true,
            1 => self.hit_me(x, y),
            _ => false,
        }
    }
}

/// Number of triangle edges crossed by the ray
///
/// Two means the point is left of the triangle, one that it is inside.
fn triangle_hits(tri: &[Edge; 3], x: f64, y: f64) -> usize {
    tri.iter().filter(|e| e.intersect(x, y)).count()
}

/// Intersection of the end tangents of a cubic, relative to its start
///
/// Coincident control points collapse the tangent to the next control
/// point.  When the tangents are parallel the apex is taken at the
/// first control point that differs from the start.
fn triangle_apex(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Point {
    let near = |dx: f64, dy: f64| dx * dx < BEZIER_EPS && dy * dy < BEZIER_EPS;
    if near(x1, y1) {
        return Point::new(x2, y2);
    }
    if near(x3 - x2, y3 - y2) {
        return Point::new(x1, y1);
    }
    if near(x2 - x1, y2 - y1) {
        return Point::new(x2, y2);
    }
    let den = x1*y2 - x1*y3 - x2*y1 + x3*y1;
    let num = x2*y3 - x3*y2;
    let scale = (x1*x1 + y1*y1).sqrt() * ((x3-x2).powi(2) + (y3-y2).powi(2)).sqrt();
    if den.abs() <= 1e-12 * scale.max(1e-300) {
        return Point::new(x1, y1);
    }
    Point::new(-x1 * num / den, -y1 * num / den)
}

/// Variant specific implicit data
#[derive(Debug,Clone,PartialEq)]
pub enum SegmentKind {
    Linear(Linear),
    Quadratic(Quadratic),
    Cubic(Cubic),
}

/// Monotonic piece of a contour
#[derive(Debug,Clone,PartialEq)]
pub struct PathSegment {
    /// First point
    pub first: Point,
    /// Last point
    pub last: Point,
    /// Box of the endpoints
    pub bbox: BoundingBox,
    /// -1 when the segment goes down, +1 otherwise
    pub dir: i32,
    /// Winding added by a shortcut, `dir` when the right endpoint is
    /// also the top one, `-dir` otherwise
    pub sh_dir: i32,
    pub kind: SegmentKind,
}

/// Ray from (x,y) to +x crosses whatever the box holds
///
/// Outside the y range or right of the box, no.  Left of the box, yes.
/// Otherwise ask the curve.
fn ray_hit<F: FnOnce() -> bool>(bbox: &BoundingBox, x: f64, y: f64, implicit: F) -> bool {
    if bbox.hit_up(x, y) || bbox.hit_right(x, y) || bbox.hit_down(x, y) {
        return false;
    }
    bbox.hit_left(x, y) || implicit()
}

/// Polynomial `a + b t + c t^2` does not change sign on [0,1]
fn keeps_sign(a: f64, b: f64, c: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return true;
    }
    let tol = scale * MONOTONE_TOL;
    let mut ts = vec![0.0];
    ts.extend(unit_roots(a, b, c));
    ts.push(1.0);
    let (mut pos, mut neg) = (false, false);
    for w in ts.windows(2) {
        let m = 0.5 * (w[0] + w[1]);
        let v = a + m * (b + m * c);
        if v > tol {
            pos = true;
        } else if v < -tol {
            neg = true;
        }
    }
    !(pos && neg)
}

fn require(ok: bool, what: &str, pts: &[Point]) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::NonMonotonic(format!("{} {:?}", what, pts)))
    }
}

impl PathSegment {
    fn with_kind(first: Point, last: Point, kind: SegmentKind) -> Result<Self> {
        require(first.y != last.y, "zero y extent", &[first, last])?;
        require(first.x.is_finite() && first.y.is_finite() &&
                last.x.is_finite() && last.y.is_finite(), "non finite", &[first, last])?;
        let dir = if first.y > last.y { -1 } else { 1 };
        let right_is_last = last.x > first.x;
        let sh_dir = if right_is_last == (dir == 1) { dir } else { -dir };
        let bbox = BoundingBox::new(first, last);
        Ok(Self { first, last, bbox, dir, sh_dir, kind })
    }
    /// Line segment
    pub fn linear(p0: Point, p1: Point) -> Result<Self> {
        Self::with_kind(p0, p1, SegmentKind::Linear(Linear::new(p0, p1)))
    }
    /// Quadratic Bezier segment
    pub fn quadratic(p0: Point, p1: Point, p2: Point) -> Result<Self> {
        Self::rational_quadratic(p0, p1, 1.0, p2)
    }
    /// Rational quadratic Bezier segment, `w` is the weight of `p1`
    pub fn rational_quadratic(p0: Point, p1: Point, w: f64, p2: Point) -> Result<Self> {
        let pts = [p0, p1, p2];
        require(w > 0.0 && w.is_finite(), "weight", &pts)?;
        let c = [1.0, w, 1.0];
        let (a, b, cc) = rational_derivative([p0.x, w * p1.x, p2.x], c);
        require(keeps_sign(a, b, cc), "in x", &pts)?;
        let (a, b, cc) = rational_derivative([p0.y, w * p1.y, p2.y], c);
        require(keeps_sign(a, b, cc), "in y", &pts)?;
        Self::with_kind(p0, p2, SegmentKind::Quadratic(Quadratic::new(p0, p1, p2, w)))
    }
    /// Cubic Bezier segment
    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Result<Self> {
        let pts = [p0, p1, p2, p3];
        let (a, b, c) = cubic_derivative([p0.x, p1.x, p2.x, p3.x]);
        require(keeps_sign(a, b, c), "in x", &pts)?;
        let (a, b, c) = cubic_derivative([p0.y, p1.y, p2.y, p3.y]);
        require(keeps_sign(a, b, c), "in y", &pts)?;
        Self::with_kind(p0, p3, SegmentKind::Cubic(Cubic::new(p0, p1, p2, p3)))
    }
    /// Endpoint with the smaller x
    pub fn left(&self) -> Point {
        if self.first.x < self.last.x { self.first } else { self.last }
    }
    /// Endpoint with the larger x
    pub fn right(&self) -> Point {
        if self.first.x >= self.last.x { self.first } else { self.last }
    }
    /// Endpoint with the larger y
    pub fn top(&self) -> Point {
        if self.first.y >= self.last.y { self.first } else { self.last }
    }
    /// Endpoint with the smaller y
    pub fn bot(&self) -> Point {
        if self.first.y < self.last.y { self.first } else { self.last }
    }
    /// Exact side test, meaningful inside the box only
    pub fn implicit_hit(&self, x: f64, y: f64) -> bool {
        match &self.kind {
            SegmentKind::Linear(l) => l.implicit_hit(x, y),
            SegmentKind::Quadratic(q) => q.implicit_hit(x, y),
            SegmentKind::Cubic(c) => c.implicit_hit(x, y),
        }
    }
    /// Ray from (x,y) towards +x crosses the segment
    pub fn intersect(&self, x: f64, y: f64) -> bool {
        ray_hit(&self.bbox, x, y, || self.implicit_hit(x, y))
    }
    /// Point is below-right of the right endpoint
    pub fn intersect_shortcut(&self, x: f64, y: f64) -> bool {
        let r = self.right();
        x < r.x && y >= r.y
    }
    /// Winding contribution of the segment at (x,y)
    pub fn winding(&self, x: f64, y: f64) -> i32 {
        if self.intersect(x, y) { self.dir } else { 0 }
    }
    /// Signed side of the point, 0 when the box alone cannot tell
    ///
    /// Inside the box the implicit test decides.  Outside, the side
    /// follows from the diagonal the segment runs along.
    pub fn implicit_value(&self, x: f64, y: f64) -> i32 {
        let b = &self.bbox;
        if b.hit_inside(x, y) {
            return if self.implicit_hit(x, y) { 1 } else { -1 };
        }
        let (up, down) = (b.hit_up(x, y), b.hit_down(x, y));
        let (left, right) = (b.hit_left(x, y), b.hit_right(x, y));
        let right_is_last = self.last.x > self.first.x;
        let rising = right_is_last == (self.dir == 1);
        if rising {
            if (left && down) || (right && up) {
                0
            } else if up || left {
                1
            } else if down || right {
                -1
            } else {
                0
            }
        } else if (left && up) || (right && down) {
            0
        } else if up || right {
            -1
        } else if down || left {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn p(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn directions() {
        let s = PathSegment::linear(p(0.5, 0.5), p(4.5, 8.5)).unwrap();
        assert_eq!((s.dir, s.sh_dir), (1, 1));
        let s = PathSegment::linear(p(4.5, 8.5), p(0.5, 0.5)).unwrap();
        assert_eq!((s.dir, s.sh_dir), (-1, -1));
        let s = PathSegment::linear(p(0.5, 8.5), p(4.5, 0.5)).unwrap();
        assert_eq!((s.dir, s.sh_dir), (-1, 1));
        let s = PathSegment::linear(p(4.5, 0.5), p(0.5, 8.5)).unwrap();
        assert_eq!((s.dir, s.sh_dir), (1, -1));
        assert_eq!(s.right(), p(4.5, 0.5));
        assert_eq!(s.top(), p(0.5, 8.5));
    }
    #[test]
    fn linear_ray() {
        let s = PathSegment::linear(p(1.5, 1.5), p(5.5, 9.5)).unwrap();
        assert!(s.intersect(0.0, 5.0));
        assert!(s.intersect(3.0, 5.0));
        assert!(!s.intersect(4.0, 5.0));
        assert!(!s.intersect(0.0, 9.5));
        assert!(s.intersect(0.0, 1.5));
        assert!(!s.intersect(0.0, 1.0));
    }
    #[test]
    fn rejects_bad_input() {
        assert!(PathSegment::linear(p(0.5, 1.5), p(3.5, 1.5)).is_err());
        assert!(PathSegment::quadratic(p(0.5, 0.5), p(2.5, 4.5), p(4.5, 0.7)).is_err());
        assert!(PathSegment::quadratic(p(0.5, 0.5), p(6.5, 2.5), p(4.5, 4.5)).is_err());
        assert!(PathSegment::rational_quadratic(p(0.5, 0.5), p(1.5, 1.5), 0.0, p(2.5, 2.5)).is_err());
    }
    #[test]
    fn quadratic_ray() {
        // y = x^2 on [0,2] shifted off the grid
        let s = PathSegment::quadratic(p(0.1, 0.1), p(1.1, 0.1), p(2.1, 4.1)).unwrap();
        for &(x, y) in &[(0.5, 0.5), (1.0, 2.0), (1.5, 3.0), (1.9, 3.9)] {
            let xc = 0.1 + (y - 0.1f64).sqrt();
            assert!(s.intersect(xc - 0.05, y), "left of curve at {} {}", x, y);
            assert!(!s.intersect(xc + 0.05, y), "right of curve at {} {}", x, y);
        }
    }
    #[test]
    fn circular_arc() {
        // Quarter circle of radius 10 about (0.3,0.3), from the bottom to the right
        let c = p(0.3, 0.3);
        let w = std::f64::consts::FRAC_1_SQRT_2;
        let s = PathSegment::rational_quadratic(c + p(0.0, -10.0), c + p(10.0, -10.0), w, c + p(10.0, 0.0)).unwrap();
        for k in 1..20 {
            let y = -10.0 + k as f64 * 0.5;
            let xc = (100.0 - y * y).sqrt();
            assert!(s.intersect(c.x + xc - 1e-3, c.y + y));
            assert!(!s.intersect(c.x + xc + 1e-3, c.y + y));
        }
    }
    /// x of a y-monotonic rational quadratic at height y
    fn conic_x(p0: Point, p1: Point, w: f64, p2: Point, y: f64) -> f64 {
        let at = |t: f64| {
            let mt = 1.0 - t;
            let (b0, b1, b2) = (mt * mt, 2.0 * mt * t * w, t * t);
            (p0 * b0 + p1 * b1 + p2 * b2) * (1.0 / (b0 + b1 + b2))
        };
        let (mut lo, mut hi) = (0.0, 1.0);
        let rising = p2.y > p0.y;
        for _ in 0..80 {
            let m = 0.5 * (lo + hi);
            if (at(m).y < y) == rising { lo = m } else { hi = m }
        }
        at(0.5 * (lo + hi)).x
    }
    #[test]
    fn hyperbolic_arcs() {
        let arcs = [
            (p(0.3, 0.3), p(8.3, 0.3), p(8.3, 6.3)),
            (p(8.3, 0.3), p(0.3, 0.3), p(0.3, 6.3)),
            (p(0.3, 6.3), p(6.3, 6.3), p(6.3, 0.3)),
        ];
        for &(p0, p1, p2) in &arcs {
            for &w in &[0.3, 2.0, 5.0] {
                let s = PathSegment::rational_quadratic(p0, p1, w, p2).unwrap();
                let (x0, y0) = (p0.x.min(p2.x), p0.y.min(p2.y));
                for i in 1..80 {
                    for j in 1..60 {
                        let (x, y) = (x0 + i as f64 * 0.1 + 0.003, y0 + j as f64 * 0.1 + 0.003);
                        if !s.bbox.hit_inside(x, y) {
                            continue;
                        }
                        let xc = conic_x(p0, p1, w, p2, y);
                        if (x - xc).abs() < 1e-6 {
                            continue;
                        }
                        assert_eq!(s.intersect(x, y), x < xc, "w = {} at {} {} from {:?}", w, x, y, p0);
                    }
                }
            }
        }
    }
    #[test]
    fn cubic_ray() {
        let (p0, p1, p2, p3) = (p(0.1, 0.1), p(3.1, 1.1), p(5.1, 4.1), p(6.1, 8.1));
        let s = PathSegment::cubic(p0, p1, p2, p3).unwrap();
        for k in 1..40 {
            let t = k as f64 / 40.0;
            let mt = 1.0 - t;
            let q = p0 * (mt*mt*mt) + p1 * (3.0*mt*mt*t) + p2 * (3.0*mt*t*t) + p3 * (t*t*t);
            assert!(s.intersect(q.x - 1e-3, q.y), "t = {}", t);
            assert!(!s.intersect(q.x + 1e-3, q.y), "t = {}", t);
        }
    }
    #[test]
    fn implicit_value_outside_box() {
        // Rising segment
        let s = PathSegment::linear(p(1.5, 1.5), p(5.5, 9.5)).unwrap();
        assert_eq!(s.implicit_value(0.0, 5.0), 1);
        assert_eq!(s.implicit_value(3.0, 12.0), 1);
        assert_eq!(s.implicit_value(8.0, 5.0), -1);
        assert_eq!(s.implicit_value(3.0, 0.0), -1);
        assert_eq!(s.implicit_value(0.0, 0.0), 0);
        assert_eq!(s.implicit_value(8.0, 12.0), 0);
        // Falling segment
        let s = PathSegment::linear(p(1.5, 9.5), p(5.5, 1.5)).unwrap();
        assert_eq!(s.implicit_value(0.0, 5.0), 1);
        assert_eq!(s.implicit_value(3.0, 0.0), 1);
        assert_eq!(s.implicit_value(8.0, 5.0), -1);
        assert_eq!(s.implicit_value(3.0, 12.0), -1);
        assert_eq!(s.implicit_value(0.0, 12.0), 0);
        assert_eq!(s.implicit_value(8.0, 0.0), 0);
    }
}
