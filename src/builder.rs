//! Scene objects from a scene traversal

use log::{debug, warn};

use crate::object::{SceneObject, WindingRule};
use crate::paint::Paint;
use crate::preprocess::preprocess;
use crate::scene::SceneVisitor;
use crate::shape::Shape;
use crate::transform::Transform;
use crate::Result;

/// Collects painted shapes as scene objects in device space
///
/// Objects come out in paint order, back to front.
#[derive(Debug,Clone)]
pub struct SceneBuilder {
    stack: Vec<Transform>,
    objects: Vec<SceneObject>,
    skipped: usize,
}

impl SceneBuilder {
    /// Builder whose device space is `base`
    pub fn new(base: Transform) -> Self {
        Self { stack: vec![base], objects: vec![], skipped: 0 }
    }
    /// Current scene to device transform
    pub fn top(&self) -> Transform {
        self.stack.last().copied().unwrap_or_default()
    }
    /// Transform applied first, before the current one
    pub fn push_xf(&mut self, xf: &Transform) {
        let top = self.top();
        self.stack.push(*xf * top);
    }
    pub fn pop_xf(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            warn!("unbalanced end of transform");
        }
    }
    /// Shapes without any segment after preprocessing
    pub fn skipped(&self) -> usize {
        self.skipped
    }
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
    pub fn finish(self) -> Vec<SceneObject> {
        debug!("built {} objects, skipped {} empty shapes", self.objects.len(), self.skipped);
        self.objects
    }
}

impl SceneVisitor for SceneBuilder {
    fn begin_transform(&mut self, _depth: usize, xf: &Transform) -> Result<()> {
        self.push_xf(xf);
        Ok(())
    }
    fn end_transform(&mut self, _depth: usize, _xf: &Transform) -> Result<()> {
        self.pop_xf();
        Ok(())
    }
    fn painted_shape(&mut self, rule: WindingRule, shape: &Shape, paint: &Paint) -> Result<()> {
        let top = self.top();
        let segments = preprocess(&shape.to_path(), &top)?;
        if segments.is_empty() {
            self.skipped += 1;
            return Ok(());
        }
        let paint = paint.clone().transformed(&top);
        self.objects.push(SceneObject::new(segments, rule, &paint)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::scene::Scene;

    #[test]
    fn transform_stack() {
        let mut b = SceneBuilder::new(Transform::new_translate(5.0, 0.0));
        b.push_xf(&Transform::new_scale(2.0, 2.0));
        let (x, y) = b.top().transform(1.0, 1.0);
        assert_eq!((x, y), (7.0, 2.0));
        b.pop_xf();
        b.pop_xf();
        assert_eq!(b.top(), Transform::new_translate(5.0, 0.0));
    }
    #[test]
    fn skips_flat_shapes() {
        let red = Paint::solid(Rgba8::rgb(255, 0, 0));
        let mut s = Scene::new();
        s.fill(Shape::rect(0.0, 0.0, 5.0, 0.0), red.clone())
            .fill(Shape::rect(0.5, 0.5, 5.0, 5.0), red);
        let mut b = SceneBuilder::new(Transform::new());
        s.iterate(&mut b).unwrap();
        assert_eq!(b.skipped(), 1);
        let objs = b.finish();
        assert_eq!(objs.len(), 1);
        assert!(objs[0].naive_hit(3.0, 3.0));
    }
    #[test]
    fn singular_paint() {
        let p = Paint::linear(crate::paths::Point::new(0.0, 0.0),
                              crate::paths::Point::new(1.0, 0.0),
                              Default::default())
            .transformed(&Transform::new_scale(0.0, 1.0));
        let mut s = Scene::new();
        s.fill(Shape::rect(0.5, 0.5, 5.0, 5.0), p);
        let mut b = SceneBuilder::new(Transform::new());
        assert!(matches!(s.iterate(&mut b), Err(crate::Error::SingularTransform)));
    }
}
