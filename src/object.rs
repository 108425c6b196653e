//! Scene objects

use crate::bbox::BoundingBox;
use crate::color::Rgba8;
use crate::paint::Paint;
use crate::segment::PathSegment;
use crate::solver::ColorSolver;
use crate::{Error, Result};

/// Rule deciding which winding numbers are inside
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum WindingRule {
    NonZero,
    EvenOdd,
}
impl Default for WindingRule {
    fn default() -> WindingRule {
        WindingRule::NonZero
    }
}

impl WindingRule {
    /// Winding number counts as inside
    pub fn satisfy(&self, w: i32) -> bool {
        match self {
            WindingRule::NonZero => w != 0,
            WindingRule::EvenOdd => w % 2 != 0,
        }
    }
}

/// Painted shape made of monotonic segments
#[derive(Debug,Clone)]
pub struct SceneObject {
    segments: Vec<PathSegment>,
    rule: WindingRule,
    bbox: BoundingBox,
    solver: ColorSolver,
}

impl SceneObject {
    /// Create an object, fails on an empty segment list or a paint
    /// that cannot be prepared
    pub fn new(segments: Vec<PathSegment>, rule: WindingRule, paint: &Paint) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::EmptyObject);
        }
        let mut bbox = BoundingBox::empty();
        for s in &segments {
            bbox.expand_box(&s.bbox);
        }
        let solver = ColorSolver::new(paint)?;
        Ok(Self { segments, rule, bbox, solver })
    }
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
    pub fn segment(&self, i: usize) -> &PathSegment {
        &self.segments[i]
    }
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
    pub fn winding_rule(&self) -> WindingRule {
        self.rule
    }
    pub fn satisfy_wrule(&self, w: i32) -> bool {
        self.rule.satisfy(w)
    }
    /// Color of the paint at (x,y)
    pub fn color(&self, x: f64, y: f64) -> Rgba8 {
        self.solver.solve(x, y)
    }
    /// Winding number from every segment of the object
    pub fn naive_winding(&self, x: f64, y: f64) -> i32 {
        self.segments.iter().map(|s| s.winding(x, y)).sum()
    }
    /// Point is inside, testing every segment
    pub fn naive_hit(&self, x: f64, y: f64) -> bool {
        self.bbox.hit_inside(x, y) && self.satisfy_wrule(self.naive_winding(x, y))
    }
}
