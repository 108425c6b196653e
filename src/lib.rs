
//! Analytic anti-aliased rasterizer
//!
//! How does this work
//!    scene = Scene::new()
//!    scene.fill(Shape, Paint)
//!    acc = AcceleratedScene::accelerate(scene, width, height, config)
//!      SceneBuilder              -- preprocess: close, transform,
//!                                   downgrade, monotonize, nudge
//!      SceneObject               -- monotonic PathSegments + ColorSolver
//!      QuadtreeNode::build       -- segments, shortcuts and winding
//!                                   increments per cell
//!    acc.render()
//!      sample()                  -- blue noise offsets per pixel
//!        get_node_of()           -- leaf of each sub-sample
//!        NodeObject::hit()       -- implicit curve tests
//!        RgbaPre::over()         -- front to back
//!      RenderingBuffer           -- RGBA8, opaque

pub mod error;
pub mod math;
pub mod paths;
pub mod bbox;
pub mod transform;
pub mod bezier;
pub mod segment;
pub mod preprocess;
pub mod color;
pub mod paint;
pub mod solver;
pub mod object;
pub mod quadtree;
pub mod blue_noise;
pub mod shape;
pub mod scene;
pub mod builder;
pub mod config;
pub mod buffer;
pub mod pngio;
pub mod render;

pub use error::*;
pub use paths::*;
pub use bbox::*;
pub use transform::*;
pub use segment::*;
pub use preprocess::*;
pub use color::*;
pub use paint::*;
pub use solver::*;
pub use object::*;
pub use quadtree::*;
pub use blue_noise::*;
pub use shape::*;
pub use scene::*;
pub use builder::*;
pub use config::*;
pub use buffer::*;
pub use pngio::*;
pub use render::*;

/// Access Color properties and compoents
pub trait Color: std::fmt::Debug + Copy {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
}
