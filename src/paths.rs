//! Points and Paths

use crate::transform::Transform;

use std::ops::{Add, Sub, Mul, Neg};

/// Point in the plane
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Dot product
    pub fn dot(&self, o: &Point) -> f64 {
        self.x * o.x + self.y * o.y
    }
    /// Determinant of the 2x2 matrix with columns self and o
    pub fn det(&self, o: &Point) -> f64 {
        self.x * o.y - self.y * o.x
    }
    /// Squared length
    pub fn len2(&self) -> f64 {
        self.dot(self)
    }
    /// Length
    pub fn len(&self) -> f64 {
        self.len2().sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point { Point::new(self.x + o.x, self.y + o.y) }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point { Point::new(self.x - o.x, self.y - o.y) }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point { Point::new(self.x * s, self.y * s) }
}
impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point { Point::new(-self.x, -self.y) }
}

/// Path Commands
///
/// Each drawing command carries only the points after the current
/// point; the current point is the end of the previous command.
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    /// Start a new contour
    MoveTo(Point),
    /// Straight line
    LineTo(Point),
    /// Quadratic Bezier, control and end points
    QuadTo(Point, Point),
    /// Rational quadratic Bezier, control point, end point and weight of
    /// the control point
    RQuadTo(Point, Point, f64),
    /// Cubic Bezier, two control points and end point
    CubicTo(Point, Point, Point),
    /// Close the current contour
    Close,
}

impl PathCommand {
    /// Apply a transform to every point of the command
    pub fn transformed(&self, xf: &Transform) -> Self {
        use PathCommand::*;
        match *self {
            MoveTo(p) => MoveTo(xf.apply(p)),
            LineTo(p) => LineTo(xf.apply(p)),
            QuadTo(p1, p2) => QuadTo(xf.apply(p1), xf.apply(p2)),
            RQuadTo(p1, p2, w) => RQuadTo(xf.apply(p1), xf.apply(p2), w),
            CubicTo(p1, p2, p3) => CubicTo(xf.apply(p1), xf.apply(p2), xf.apply(p3)),
            Close => Close,
        }
    }
}

/// Path made of contours
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self { commands: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push( PathCommand::MoveTo(Point::new(x,y)) );
        self
    }
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push( PathCommand::LineTo(Point::new(x,y)) );
        self
    }
    pub fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.commands.push( PathCommand::QuadTo(Point::new(x1,y1), Point::new(x2,y2)) );
        self
    }
    pub fn rquad_to(&mut self, x1: f64, y1: f64, w: f64, x2: f64, y2: f64) -> &mut Self {
        self.commands.push( PathCommand::RQuadTo(Point::new(x1,y1), Point::new(x2,y2), w) );
        self
    }
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.commands.push( PathCommand::CubicTo(Point::new(x1,y1),
                                                 Point::new(x2,y2),
                                                 Point::new(x3,y3)) );
        self
    }
    /// Close the current contour
    ///
    /// Does nothing on an empty path or an already closed contour
    pub fn close_polygon(&mut self) -> &mut Self {
        match self.commands.last() {
            None | Some(PathCommand::Close) => {},
            Some(_) => self.commands.push( PathCommand::Close ),
        }
        self
    }
    /// Closed polygon through the points
    pub fn polygon(pts: &[(f64,f64)]) -> Self {
        let mut p = Self::new();
        for (i, &(x,y)) in pts.iter().enumerate() {
            if i == 0 {
                p.move_to(x,y);
            } else {
                p.line_to(x,y);
            }
        }
        p.close_polygon();
        p
    }
    /// New path with every point transformed
    pub fn transformed(&self, xf: &Transform) -> Self {
        let commands = self.commands.iter().map(|c| c.transformed(xf)).collect();
        Self { commands }
    }
}
