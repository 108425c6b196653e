//! Paints
//!
//! A paint describes how the interior of a shape is colored.  Paints are
//! plain data; [ColorSolver](../solver/enum.ColorSolver.html) turns them into
//! something that can be evaluated per sample.

use std::sync::Arc;

use crate::color::Rgba8;
use crate::paths::Point;
use crate::transform::Transform;

/// How parameters outside of [0,1] are mapped back into range
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Spread {
    /// Clamp to the closest end
    Clamp,
    /// Repeat, keeping the fractional part
    Wrap,
    /// Repeat, reversing every other period
    Mirror,
    /// Nothing outside of [0,1]
    Transparent,
}

impl Default for Spread {
    fn default() -> Spread {
        Spread::Clamp
    }
}

impl Spread {
    /// Map `t` into [0,1], or None if it falls outside a transparent spread
    pub fn apply(&self, t: f64) -> Option<f64> {
        match self {
            Spread::Clamp => Some(t.max(0.0).min(1.0)),
            Spread::Wrap => Some(t - t.floor()),
            Spread::Mirror => {
                let k = t.floor();
                let f = t - k;
                if (k as i64) % 2 != 0 {
                    Some(1.0 - f)
                } else {
                    Some(f)
                }
            },
            Spread::Transparent => {
                if t < 0.0 || t > 1.0 {
                    None
                } else {
                    Some(t)
                }
            },
        }
    }
}

/// Color at an offset along a gradient
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba8,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Ordered color stops and a spread mode
#[derive(Debug,Clone,Default,PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
    pub spread: Spread,
}

impl ColorRamp {
    /// Create a ramp, stops are sorted by offset
    pub fn new(spread: Spread, mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.offset.partial_cmp(&b.offset)
                      .unwrap_or(std::cmp::Ordering::Equal));
        Self { stops, spread }
    }
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

/// Texel lookup
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Filter {
    Nearest,
    Bilinear,
}

impl Default for Filter {
    fn default() -> Filter {
        Filter::Bilinear
    }
}

/// Fill of a shape
///
/// Every non empty paint carries its own transform, mapping paint space into
/// scene space, and an opacity that scales the alpha of the computed color.
#[derive(Debug,Clone)]
pub enum Paint {
    /// Single color
    Solid {
        color: Rgba8,
        opacity: f64,
    },
    /// Gradient along the axis from `p1` to `p2`
    LinearGradient {
        p1: Point,
        p2: Point,
        ramp: ColorRamp,
        xf: Transform,
        opacity: f64,
    },
    /// Gradient from `focus` out to the circle at `center` with radius `r`
    RadialGradient {
        center: Point,
        focus: Point,
        r: f64,
        ramp: ColorRamp,
        xf: Transform,
        opacity: f64,
    },
    /// Image mapped onto the unit square
    Texture {
        image: Arc<image::RgbaImage>,
        spread: Spread,
        filter: Filter,
        xf: Transform,
        opacity: f64,
    },
    /// No fill
    Empty,
}

impl Default for Paint {
    fn default() -> Paint {
        Paint::Empty
    }
}

impl Paint {
    /// Opaque solid color
    pub fn solid(color: Rgba8) -> Self {
        Paint::Solid { color, opacity: 1.0 }
    }
    /// Linear gradient with an identity transform
    pub fn linear(p1: Point, p2: Point, ramp: ColorRamp) -> Self {
        Paint::LinearGradient { p1, p2, ramp, xf: Transform::new(), opacity: 1.0 }
    }
    /// Radial gradient with an identity transform
    pub fn radial(center: Point, focus: Point, r: f64, ramp: ColorRamp) -> Self {
        Paint::RadialGradient { center, focus, r, ramp, xf: Transform::new(), opacity: 1.0 }
    }
    /// Texture covering the unit square
    pub fn texture(image: Arc<image::RgbaImage>, spread: Spread, filter: Filter) -> Self {
        Paint::Texture { image, spread, filter, xf: Transform::new(), opacity: 1.0 }
    }
    /// Same paint with opacity replaced
    pub fn with_opacity(mut self, value: f64) -> Self {
        match &mut self {
            Paint::Solid { opacity, .. } |
            Paint::LinearGradient { opacity, .. } |
            Paint::RadialGradient { opacity, .. } |
            Paint::Texture { opacity, .. } => *opacity = value,
            Paint::Empty => {},
        }
        self
    }
    /// Paint to scene transform, identity for solid and empty paints
    pub fn xf(&self) -> Transform {
        match self {
            Paint::LinearGradient { xf, .. } |
            Paint::RadialGradient { xf, .. } |
            Paint::Texture { xf, .. } => *xf,
            Paint::Solid { .. } | Paint::Empty => Transform::new(),
        }
    }
    /// Same paint with `m` applied after its own transform
    pub fn transformed(mut self, m: &Transform) -> Self {
        match &mut self {
            Paint::LinearGradient { xf, .. } |
            Paint::RadialGradient { xf, .. } |
            Paint::Texture { xf, .. } => *xf = *xf * *m,
            Paint::Solid { .. } | Paint::Empty => {},
        }
        self
    }
}
