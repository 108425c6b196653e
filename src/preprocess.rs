//! Path preprocessing
//!
//! Turns a user path into the monotonic segments the rasterizer works
//! with.  Stages run in this order:
//!
//! 1. close every contour with a line back to its start
//! 2. transform into device space
//! 3. downgrade degenerate curves to lower degree
//! 4. split curves where x or y turn around (and cubics where they inflect
//!    or pass their double point)
//! 5. move coordinates that sit exactly on an integer by `XEPS`, pulling
//!    control points back into the endpoint box only if that breaks
//!    monotonicity
//!
//! Pieces without y extent are dropped; they never change a winding number.

use crate::paths::{Path, PathCommand, Point};
use crate::transform::Transform;
use crate::segment::PathSegment;
use crate::bezier::{self, RQuad, split_at};
use crate::math::{det3, is_almost_zero};
use crate::error::Result;

use log::{debug, trace, warn};

/// Offset applied to integer coordinates
pub const XEPS : f64 = 0.001;

/// Relative tolerance of the degeneracy tests
const DEGENERATE_TOL : f64 = 1e-9;

/// Piece of a contour before it becomes a [PathSegment](../segment/struct.PathSegment.html)
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Piece {
    Linear(Point, Point),
    /// Rational quadratic: start, control, control weight, end
    Quadratic(Point, Point, f64, Point),
    Cubic(Point, Point, Point, Point),
}

impl Piece {
    pub fn first(&self) -> Point {
        match *self {
            Piece::Linear(p, _) | Piece::Quadratic(p, _, _, _) | Piece::Cubic(p, _, _, _) => p,
        }
    }
    pub fn last(&self) -> Point {
        match *self {
            Piece::Linear(_, p) | Piece::Quadratic(_, _, _, p) | Piece::Cubic(_, _, _, p) => p,
        }
    }
    fn map<F: Fn(Point) -> Point>(&self, f: F) -> Self {
        match *self {
            Piece::Linear(p0, p1) => Piece::Linear(f(p0), f(p1)),
            Piece::Quadratic(p0, p1, w, p2) => Piece::Quadratic(f(p0), f(p1), w, f(p2)),
            Piece::Cubic(p0, p1, p2, p3) => Piece::Cubic(f(p0), f(p1), f(p2), f(p3)),
        }
    }
    /// Build the segment, checking monotonicity
    pub fn segment(&self) -> Result<PathSegment> {
        match *self {
            Piece::Linear(p0, p1) => PathSegment::linear(p0, p1),
            Piece::Quadratic(p0, p1, w, p2) if w == 1.0 => PathSegment::quadratic(p0, p1, p2),
            Piece::Quadratic(p0, p1, w, p2) => PathSegment::rational_quadratic(p0, p1, w, p2),
            Piece::Cubic(p0, p1, p2, p3) => PathSegment::cubic(p0, p1, p2, p3),
        }
    }
}

/// Closed contours of a path as lists of pieces
pub fn close_contours(path: &Path) -> Vec<Vec<Piece>> {
    let mut contours = vec![];
    let mut pieces = vec![];
    let mut start : Option<Point> = None;
    let mut cur = Point::default();

    fn finish(contours: &mut Vec<Vec<Piece>>, pieces: &mut Vec<Piece>, start: Point, cur: Point) {
        if pieces.is_empty() {
            return;
        }
        if cur != start {
            pieces.push(Piece::Linear(cur, start));
        }
        contours.push(std::mem::replace(pieces, vec![]));
    }

    for cmd in &path.commands {
        if let PathCommand::MoveTo(p) = *cmd {
            if let Some(s) = start {
                finish(&mut contours, &mut pieces, s, cur);
            }
            start = Some(p);
            cur = p;
            continue;
        }
        let s = match start {
            Some(s) => s,
            None => {
                warn!("path command {:?} before move_to ignored", cmd);
                continue;
            }
        };
        match *cmd {
            PathCommand::MoveTo(_) => {},
            PathCommand::LineTo(p) => {
                pieces.push(Piece::Linear(cur, p));
                cur = p;
            },
            PathCommand::QuadTo(p1, p2) => {
                pieces.push(Piece::Quadratic(cur, p1, 1.0, p2));
                cur = p2;
            },
            PathCommand::RQuadTo(p1, p2, w) => {
                pieces.push(Piece::Quadratic(cur, p1, w, p2));
                cur = p2;
            },
            PathCommand::CubicTo(p1, p2, p3) => {
                pieces.push(Piece::Cubic(cur, p1, p2, p3));
                cur = p3;
            },
            PathCommand::Close => {
                finish(&mut contours, &mut pieces, s, cur);
                cur = s;
            },
        }
    }
    if let Some(s) = start {
        finish(&mut contours, &mut pieces, s, cur);
    }
    contours
}

fn max_extent(origin: Point, pts: &[Point]) -> f64 {
    pts.iter()
        .map(|p| (p.x - origin.x).abs().max((p.y - origin.y).abs()))
        .fold(0.0, f64::max)
}

/// Replace curves whose higher degree terms vanish by simpler ones
pub fn downgrade(piece: Piece) -> Piece {
    match piece {
        Piece::Linear(..) => piece,
        Piece::Quadratic(p0, p1, w, p2) => {
            let l = max_extent(p0, &[p1, p2]);
            let tol = DEGENERATE_TOL * l * l * w.max(1.0);
            if is_almost_zero(((p1 - p0) * w).det(&(p2 - p0)), tol) {
                Piece::Linear(p0, p2)
            } else {
                piece
            }
        },
        Piece::Cubic(p0, p1, p2, p3) => {
            let (d1, d2, d3) = cubic_degeneracy(p0, p1, p2, p3);
            let l = max_extent(p0, &[p1, p2, p3]);
            let tol = DEGENERATE_TOL * l * l;
            if is_almost_zero(d1, tol) && is_almost_zero(d2, tol) {
                if is_almost_zero(d3, tol) {
                    Piece::Linear(p0, p3)
                } else {
                    Piece::Quadratic(p0, p1 * 1.5 - p0 * 0.5, 1.0, p3)
                }
            } else {
                piece
            }
        },
    }
}

/// Coefficients of the cubic and quadratic terms of a cubic, and its area
fn cubic_degeneracy(p0: Point, p1: Point, p2: Point, p3: Point) -> (f64, f64, f64) {
    let (q1, q2, q3) = (p1 - p0, p2 - p0, p3 - p0);
    let b3 = q2.det(&q1);
    let b2 = -q3.det(&q1);
    let b1 = -q3.det(&q2);
    let b0 = det3([[q3.x, q3.y, 1.0], [q2.x, q2.y, 1.0], [q1.x, q1.y, 1.0]]);
    (3.0 * b3 + 2.0 * b2 - b1, 3.0 * b3 + b2, b0)
}

/// Split a piece into pieces monotonic in x and y
pub fn monotonize(piece: Piece) -> Vec<Piece> {
    match piece {
        Piece::Linear(..) => vec![piece],
        Piece::Quadratic(p0, p1, w, p2) => {
            let q = RQuad::new(p0, p1, w, p2);
            let ts = q.extrema();
            split_at(q, &ts, |q, t| q.split(t)).into_iter()
                .map(|q| {
                    let (a, b, w, c) = q.standard();
                    Piece::Quadratic(a, b, w, c)
                })
                .collect()
        },
        Piece::Cubic(p0, p1, p2, p3) => {
            let c = bezier::Cubic([p0, p1, p2, p3]);
            let ts = c.extrema();
            split_at(c, &ts, |c, t| c.split(t)).into_iter()
                .map(|c| {
                    let [a, b, cc, d] = c.0;
                    Piece::Cubic(a, b, cc, d)
                })
                .collect()
        },
    }
}

fn nudge_value(v: f64) -> f64 {
    if v - v.floor() == 0.0 { v + XEPS } else { v }
}

fn clamp_between(v: f64, a: f64, b: f64) -> f64 {
    v.max(a.min(b)).min(a.max(b))
}

/// Move integer coordinates off the grid
pub fn nudge(piece: Piece) -> Piece {
    piece.map(|p| Point::new(nudge_value(p.x), nudge_value(p.y)))
}

/// Pull control points into the endpoint box
///
/// Only needed when a nudged endpoint passed a control point that
/// sat within `XEPS` of it.
pub fn pull_inside(piece: Piece) -> Piece {
    let (a, b) = (piece.first(), piece.last());
    let inside = |p: Point| Point::new(clamp_between(p.x, a.x, b.x), clamp_between(p.y, a.y, b.y));
    match piece {
        Piece::Linear(..) => piece,
        Piece::Quadratic(p0, p1, w, p2) => Piece::Quadratic(p0, inside(p1), w, p2),
        Piece::Cubic(p0, p1, p2, p3) => Piece::Cubic(p0, inside(p1), inside(p2), p3),
    }
}

/// Full pipeline from a path to segments in device space
pub fn preprocess(path: &Path, xf: &Transform) -> Result<Vec<PathSegment>> {
    let mut segments = vec![];
    for contour in close_contours(path) {
        for piece in contour {
            let piece = downgrade(piece.map(|p| xf.apply(p)));
            for piece in monotonize(piece) {
                let piece = nudge(piece);
                if piece.first().y == piece.last().y {
                    continue;
                }
                let seg = match piece.segment() {
                    Ok(seg) => seg,
                    Err(err) => {
                        debug!("preprocess: {}, pulling control points inside", err);
                        pull_inside(piece).segment()?
                    },
                };
                segments.push(seg);
            }
        }
    }
    trace!("preprocess: {} commands -> {} segments", path.commands.len(), segments.len());
    Ok(segments)
}
