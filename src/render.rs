//! Renderer
//!
//! How does this work
//!
//!    scene.iterate(SceneBuilder)      -- paint ordered SceneObjects
//!    reverse                          -- front to back
//!    QuadtreeNode::build              -- per cell segments and increments
//!    render
//!      rows in parallel
//!        sample(x, y)                 -- each pattern offset
//!          get_node_of                -- leaf of the sub-sample
//!          sample_cell                -- "over", front to back
//!          GammaAccumulator           -- average in linear light

use log::debug;
use rayon::prelude::*;

use crate::blue_noise::SamplePattern;
use crate::buffer::{RenderingBuffer, BPP};
use crate::builder::SceneBuilder;
use crate::color::{GammaAccumulator, Rgba8, RgbaPre};
use crate::config::RenderConfig;
use crate::object::SceneObject;
use crate::quadtree::{Leaf, QuadtreeNode};
use crate::scene::Scene;
use crate::transform::Transform;
use crate::{Error, Result};

/// Scene indexed for sampling over a viewport
#[derive(Debug)]
pub struct AcceleratedScene {
    /// Front to back
    objects: Vec<SceneObject>,
    root: QuadtreeNode,
    pattern: SamplePattern,
    width: usize,
    height: usize,
    pool: rayon::ThreadPool,
}

impl AcceleratedScene {
    /// Build objects from a scene and index them
    pub fn accelerate(scene: &Scene, width: usize, height: usize, cfg: &RenderConfig) -> Result<Self> {
        let mut builder = SceneBuilder::new(Transform::new_translate(cfg.tx, cfg.ty));
        scene.iterate(&mut builder)?;
        Self::from_objects(builder.finish(), width, height, cfg)
    }
    /// Index objects given in paint order, back to front
    pub fn from_objects(mut objects: Vec<SceneObject>, width: usize, height: usize, cfg: &RenderConfig) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyViewport { width, height });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.threads)
            .build()?;
        objects.reverse();
        let qcfg = cfg.quadtree(width, height);
        let root = pool.install(|| QuadtreeNode::build(&objects, width, height, &qcfg));
        debug!("accelerated {} objects on {} threads, {} samples per pixel",
               objects.len(), pool.current_num_threads(), cfg.pattern.len());
        Ok(Self { objects, root, pattern: cfg.pattern, width, height, pool })
    }
    /// Objects, front to back
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
    pub fn root(&self) -> &QuadtreeNode {
        &self.root
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Composite every object hit at (x,y) over white
    pub fn sample_cell(&self, leaf: &Leaf, x: f64, y: f64) -> RgbaPre {
        let mut c = RgbaPre::transparent();
        for nobj in &leaf.objects {
            let obj = &self.objects[nobj.object];
            if nobj.hit(obj, x, y) {
                c = c.over(&RgbaPre::from_color(&obj.color(x, y)));
                if c.is_opaque() {
                    return c;
                }
            }
        }
        c.over(&RgbaPre::from_color(&Rgba8::white()))
    }
    /// Color at a single point, white outside of the viewport
    pub fn sample_point(&self, x: f64, y: f64) -> RgbaPre {
        match self.root.get_node_of(x, y) {
            Some(leaf) => self.sample_cell(leaf, x, y),
            None => RgbaPre::from_color(&Rgba8::white()),
        }
    }
    /// Pixel color around the center (x,y)
    pub fn sample(&self, x: f64, y: f64) -> Rgba8 {
        let mut acc = GammaAccumulator::new();
        for &(dx, dy) in self.pattern.offsets() {
            acc.add(&self.sample_point(x + dx, y + dy));
        }
        acc.resolve()
    }
    /// Render every pixel
    pub fn render(&self) -> RenderingBuffer {
        let mut buf = RenderingBuffer::new(self.width, self.height);
        let stride = buf.stride();
        self.pool.install(|| {
            buf.data.par_chunks_mut(stride).enumerate().for_each(|(j, row)| {
                let y = j as f64 + 0.5;
                for (i, px) in row.chunks_mut(BPP).enumerate() {
                    let c = self.sample(i as f64 + 0.5, y);
                    px.copy_from_slice(&[c.r, c.g, c.b, 255]);
                }
            });
        });
        buf
    }
}

/// Build, index and render a scene
pub fn render_scene(scene: &Scene, width: usize, height: usize, cfg: &RenderConfig) -> Result<RenderingBuffer> {
    let acc = AcceleratedScene::accelerate(scene, width, height, cfg)?;
    Ok(acc.render())
}
