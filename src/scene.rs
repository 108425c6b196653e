//! Scene recording and traversal
//!
//! A scene is a flat list of elements with bracketed groups.  Consumers
//! implement [SceneVisitor](trait.SceneVisitor.html) and receive the
//! elements in paint order, back to front.

use crate::color::Rgba8;
use crate::object::WindingRule;
use crate::paint::Paint;
use crate::paths::Point;
use crate::shape::Shape;
use crate::transform::Transform;
use crate::Result;

/// Receiver of scene elements
///
/// Only transforms and painted shapes are required.  Everything else
/// defaults to being ignored.
pub trait SceneVisitor {
    fn begin_transform(&mut self, depth: usize, xf: &Transform) -> Result<()>;
    fn end_transform(&mut self, depth: usize, xf: &Transform) -> Result<()>;
    fn painted_shape(&mut self, rule: WindingRule, shape: &Shape, paint: &Paint) -> Result<()>;

    fn stencil_shape(&mut self, _rule: WindingRule, _shape: &Shape) -> Result<()> {
        Ok(())
    }
    fn begin_clip(&mut self, _depth: usize) -> Result<()> {
        Ok(())
    }
    fn activate_clip(&mut self, _depth: usize) -> Result<()> {
        Ok(())
    }
    fn end_clip(&mut self, _depth: usize) -> Result<()> {
        Ok(())
    }
    fn begin_fade(&mut self, _depth: usize, _opacity: f64) -> Result<()> {
        Ok(())
    }
    fn end_fade(&mut self, _depth: usize, _opacity: f64) -> Result<()> {
        Ok(())
    }
    fn begin_blur(&mut self, _depth: usize, _radius: f64) -> Result<()> {
        Ok(())
    }
    fn end_blur(&mut self, _depth: usize, _radius: f64) -> Result<()> {
        Ok(())
    }
    /// Color patch with control points and corner colors
    fn patch(&mut self, _points: &[Point], _colors: &[Rgba8]) -> Result<()> {
        Ok(())
    }
}

/// Recorded scene element
#[derive(Debug,Clone)]
pub enum Element {
    BeginTransform(Transform),
    EndTransform,
    PaintedShape(WindingRule, Shape, Paint),
    StencilShape(WindingRule, Shape),
    BeginClip,
    ActivateClip,
    EndClip,
    BeginFade(f64),
    EndFade,
    BeginBlur(f64),
    EndBlur,
    Patch(Vec<Point>, Vec<Rgba8>),
}

/// Recorded scene with its own transform
#[derive(Debug,Clone,Default)]
pub struct Scene {
    elements: Vec<Element>,
    xf: Transform,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }
    /// Scene whose elements are all transformed by `xf`
    pub fn with_transform(xf: Transform) -> Self {
        Self { elements: vec![], xf }
    }
    pub fn xf(&self) -> &Transform {
        &self.xf
    }
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    pub fn push(&mut self, e: Element) -> &mut Self {
        self.elements.push(e);
        self
    }
    /// Fill with the non-zero rule
    pub fn fill(&mut self, shape: Shape, paint: Paint) -> &mut Self {
        self.push(Element::PaintedShape(WindingRule::NonZero, shape, paint))
    }
    /// Fill with the even-odd rule
    pub fn eofill(&mut self, shape: Shape, paint: Paint) -> &mut Self {
        self.push(Element::PaintedShape(WindingRule::EvenOdd, shape, paint))
    }
    /// Append `inner` wrapped in a transform group
    pub fn transformed(&mut self, xf: Transform, inner: Scene) -> &mut Self {
        self.push(Element::BeginTransform(inner.xf * xf));
        self.elements.extend(inner.elements);
        self.push(Element::EndTransform)
    }
    /// Replay every element into `v`
    pub fn iterate<V: SceneVisitor>(&self, v: &mut V) -> Result<()> {
        let mut xfs = vec![self.xf];
        let mut fades = vec![];
        let mut blurs = vec![];
        let mut clips = 0;
        v.begin_transform(0, &self.xf)?;
        for e in &self.elements {
            match e {
                Element::BeginTransform(xf) => {
                    v.begin_transform(xfs.len(), xf)?;
                    xfs.push(*xf);
                },
                Element::EndTransform => {
                    if xfs.len() > 1 {
                        if let Some(xf) = xfs.pop() {
                            v.end_transform(xfs.len(), &xf)?;
                        }
                    }
                },
                Element::PaintedShape(rule, shape, paint) => v.painted_shape(*rule, shape, paint)?,
                Element::StencilShape(rule, shape) => v.stencil_shape(*rule, shape)?,
                Element::BeginClip => {
                    v.begin_clip(clips)?;
                    clips += 1;
                },
                Element::ActivateClip => v.activate_clip(clips.max(1) - 1)?,
                Element::EndClip => {
                    clips = clips.max(1) - 1;
                    v.end_clip(clips)?;
                },
                Element::BeginFade(o) => {
                    v.begin_fade(fades.len(), *o)?;
                    fades.push(*o);
                },
                Element::EndFade => {
                    if let Some(o) = fades.pop() {
                        v.end_fade(fades.len(), o)?;
                    }
                },
                Element::BeginBlur(r) => {
                    v.begin_blur(blurs.len(), *r)?;
                    blurs.push(*r);
                },
                Element::EndBlur => {
                    if let Some(r) = blurs.pop() {
                        v.end_blur(blurs.len(), r)?;
                    }
                },
                Element::Patch(pts, colors) => v.patch(pts, colors)?,
            }
        }
        v.end_transform(0, &self.xf)
    }
}
