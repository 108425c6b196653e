//! Transformations

use crate::paths::Point;
use crate::error::{Error, Result};

use std::ops::Mul;

/// Affine Transformation
///
/// Maps `(x,y)` to `(x*sx + y*shx + tx, x*shy + y*sy + ty)`.
///
/// Products read left to right: `a * b` applies `a` first, then `b`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity
    pub fn new() -> Self {
        Self::from_parts(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
    /// Transform from its linear part, column by column, and offset
    pub fn from_parts(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self { sx, sy, shx, shy, tx, ty }
    }
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self::from_parts(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Self::from_parts(1.0, 0.0, 0.0, 1.0, tx, ty)
    }
    /// Counter clockwise rotation, angle in radians
    pub fn new_rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_parts(c, s, -s, c, 0.0, 0.0)
    }
    /// Perform the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.apply(Point::new(x, y));
        (p.x, p.y)
    }
    /// Transform a point
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.sx + p.y * self.shx + self.tx,
                   p.x * self.shy + p.y * self.sy + self.ty)
    }
    /// Transform a direction, ignoring the offset
    pub fn apply_vector(&self, v: Point) -> Point {
        Point::new(v.x * self.sx + v.y * self.shx, v.x * self.shy + v.y * self.sy)
    }
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
    /// Inverse transform
    ///
    /// Fails when the determinant vanishes
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(Error::SingularTransform);
        }
        let k = 1.0 / det;
        let lin = Self::from_parts(self.sy * k, -self.shy * k, -self.shx * k, self.sx * k, 0.0, 0.0);
        let off = lin.apply_vector(Point::new(self.tx, self.ty));
        Ok(Self { tx: -off.x, ty: -off.y, ..lin })
    }
    /// Apply self, then m
    pub fn then(&self, m: &Transform) -> Self {
        let cx = m.apply_vector(Point::new(self.sx, self.shy));
        let cy = m.apply_vector(Point::new(self.shx, self.sy));
        let t = m.apply(Point::new(self.tx, self.ty));
        Self::from_parts(cx.x, cx.y, cy.x, cy.y, t.x, t.y)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.then(&rhs)
    }
}
