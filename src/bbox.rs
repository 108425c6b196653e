//! Bounding Boxes

use crate::paths::Point;

/// Axis aligned box stored as minimum and maximum corners
///
/// Membership is half-open, `[min.x, max.x) x [min.y, max.y)`.
/// Shared vertices between consecutive segments are then counted
/// exactly once by the winding tests.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Point,
    /// Maximum corner
    pub max: Point,
}

impl BoundingBox {
    /// Create a new Box from two corners
    ///
    /// Values are sorted before storing
    pub fn new(a: Point, b: Point) -> Self {
        let min = Point::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point::new(a.x.max(b.x), a.y.max(b.y));
        Self { min, max }
    }
    /// Empty box, expanding it with any point yields that point
    pub fn empty() -> Self {
        Self { min: Point::new(std::f64::INFINITY, std::f64::INFINITY),
               max: Point::new(std::f64::NEG_INFINITY, std::f64::NEG_INFINITY) }
    }
    /// Expand if the point is outside
    pub fn expand(&mut self, p: Point) {
        if p.x < self.min.x { self.min.x = p.x; }
        if p.x > self.max.x { self.max.x = p.x; }
        if p.y < self.min.y { self.min.y = p.y; }
        if p.y > self.max.y { self.max.y = p.y; }
    }
    /// Expand if the box is outside
    pub fn expand_box(&mut self, r: &BoundingBox) {
        self.expand(r.min);
        self.expand(r.max);
    }
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    /// Point is on or above the top edge
    pub fn hit_up(&self, _x: f64, y: f64) -> bool {
        y >= self.max.y
    }
    /// Point is below the bottom edge
    pub fn hit_down(&self, _x: f64, y: f64) -> bool {
        y < self.min.y
    }
    /// Point is on or left of the left edge
    pub fn hit_left(&self, x: f64, _y: f64) -> bool {
        x <= self.min.x
    }
    /// Point is right of the right edge
    pub fn hit_right(&self, x: f64, _y: f64) -> bool {
        x > self.max.x
    }
    /// Half-open containment
    pub fn hit_inside(&self, x: f64, y: f64) -> bool {
        self.min.y <= y && y < self.max.y &&
            self.min.x <= x && x < self.max.x
    }
    /// Boxes overlap with a positive area
    pub fn intersect(&self, rhs: &BoundingBox) -> bool {
        self.max.x > rhs.min.x && self.max.y > rhs.min.y &&
            rhs.max.x > self.min.x && rhs.max.y > self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn half_open() {
        let b = BoundingBox::new(Point::new(2.0, 2.0), Point::new(1.0, 1.0));
        assert_eq!(b.min, Point::new(1.0, 1.0));
        assert!(b.hit_inside(1.0, 1.0));
        assert!(!b.hit_inside(2.0, 1.5));
        assert!(!b.hit_inside(1.5, 2.0));
        assert!(b.hit_left(1.0, 1.5) && !b.hit_left(1.5, 1.5));
        assert!(b.hit_up(1.5, 2.0) && !b.hit_up(1.5, 1.9));
        assert!(b.hit_right(2.5, 0.0) && !b.hit_right(2.0, 0.0));
        assert!(b.hit_down(2.5, 0.5) && !b.hit_down(2.5, 1.0));
    }
    #[test]
    fn overlap() {
        let a = BoundingBox::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let b = BoundingBox::new(Point::new(2.0, 0.0), Point::new(3.0, 2.0));
        let c = BoundingBox::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0));
        assert!(!a.intersect(&b));
        assert!(a.intersect(&c));
        let mut e = BoundingBox::empty();
        e.expand_box(&a);
        e.expand_box(&b);
        assert_eq!(e, BoundingBox::new(Point::new(0.0, 0.0), Point::new(3.0, 2.0)));
    }
}
