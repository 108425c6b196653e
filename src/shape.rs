//! Shapes

use crate::paths::{Path, Point};
use crate::transform::Transform;

/// Geometry of a filled region
#[derive(Debug,Clone,PartialEq)]
pub enum Shape {
    Path(Path),
    /// Axis aligned rectangle from its minimum corner
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Closed polygon through the points
    Polygon(Vec<Point>),
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// Shape with its own transform applied first
    Transformed(Box<Shape>, Transform),
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape::Rect { x, y, width, height }
    }
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Shape::Circle { cx, cy, r }
    }
    pub fn polygon(pts: &[(f64,f64)]) -> Self {
        Shape::Polygon(pts.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }
    /// Apply `xf` after any transform the shape already has
    pub fn transformed(self, xf: Transform) -> Self {
        match self {
            Shape::Transformed(s, m) => Shape::Transformed(s, m * xf),
            s => Shape::Transformed(Box::new(s), xf),
        }
    }
    /// Lower to a path of move, line, curve and close commands
    pub fn to_path(&self) -> Path {
        let mut p = Path::new();
        match self {
            Shape::Path(path) => return path.clone(),
            Shape::Rect { x, y, width, height } => {
                p.move_to(*x, *y)
                    .line_to(x + width, *y)
                    .line_to(x + width, y + height)
                    .line_to(*x, y + height)
                    .close_polygon();
            },
            Shape::Polygon(pts) => {
                let pts : Vec<_> = pts.iter().map(|p| (p.x, p.y)).collect();
                return Path::polygon(&pts);
            },
            Shape::Circle { cx, cy, r } => {
                let w = std::f64::consts::FRAC_1_SQRT_2;
                let (cx, cy, r) = (*cx, *cy, *r);
                p.move_to(cx + r, cy)
                    .rquad_to(cx + r, cy + r, w, cx, cy + r)
                    .rquad_to(cx - r, cy + r, w, cx - r, cy)
                    .rquad_to(cx - r, cy - r, w, cx, cy - r)
                    .rquad_to(cx + r, cy - r, w, cx + r, cy)
                    .close_polygon();
            },
            Shape::Transformed(s, xf) => return s.to_path().transformed(xf),
        }
        p
    }
}
