//! Color solvers
//!
//! A solver is a [Paint](../paint/enum.Paint.html) prepared for evaluation:
//! transforms are inverted once and gradient geometry is reduced to a few
//! constants.  Solving never fails; samples without a color come back fully
//! transparent.

use std::sync::Arc;

use crate::color::Rgba8;
use crate::math::lerp_u8;
use crate::paint::{ColorRamp, Filter, Paint, Spread};
use crate::paths::Point;
use crate::transform::Transform;
use crate::Result;

/// Largest distance of the focus from the center, in radii
const FOCUS_LIMIT : f64 = 1.0 - 1e-5;
/// Squared distance from the focus under which `t` is zero
const FOCUS_EPS : f64 = 1e-12;

/// Parameter along a gradient
#[derive(Debug,Clone,PartialEq)]
pub enum Gradient {
    /// Projection onto the axis `p1 + t d`
    Linear {
        p1: Point,
        d: Point,
    },
    /// Focus relative to the unit circle
    Radial {
        center: Point,
        r: f64,
        focus: Point,
    },
}

impl Gradient {
    fn linear(p1: Point, p2: Point) -> Self {
        Gradient::Linear { p1, d: p2 - p1 }
    }
    fn radial(center: Point, focus: Point, r: f64) -> Self {
        let mut f = (focus - center) * (1.0 / r);
        let m = f.len();
        if m > FOCUS_LIMIT {
            f = f * (FOCUS_LIMIT / m);
        }
        Gradient::Radial { center, r, focus: f }
    }
    /// Gradient parameter of a point in paint space
    pub fn convert(&self, p: Point) -> f64 {
        match self {
            Gradient::Linear { p1, d } => {
                let n = d.len2();
                if n == 0.0 {
                    return 0.0;
                }
                (p - *p1).dot(d) / n
            },
            Gradient::Radial { center, r, focus } => {
                let u = (p - *center) * (1.0 / r);
                let v = u - *focus;
                let a = v.len2();
                if a <= FOCUS_EPS {
                    return 0.0;
                }
                let b = focus.dot(&v);
                let c = focus.len2() - 1.0;
                let disc = (b * b - a * c).max(0.0);
                let den = -b + disc.sqrt();
                if den <= 0.0 {
                    return 0.0;
                }
                a / den
            },
        }
    }
}

/// Color of a ramp at `t`
///
/// Before the first stop the first color holds, after the last stop the
/// last color.  An empty ramp is transparent.
pub fn ramp_color(ramp: &ColorRamp, t: f64) -> Rgba8 {
    let stops = ramp.stops();
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Rgba8::transparent(),
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for w in stops.windows(2) {
        let (s0, s1) = (&w[0], &w[1]);
        if s1.offset >= t {
            let amp = s1.offset - s0.offset;
            let k = if amp > 0.0 { (t - s0.offset) / amp } else { 0.0 };
            let (c0, c1) = (s0.color, s1.color);
            return Rgba8::new(lerp_u8(c0.r, c1.r, k),
                              lerp_u8(c0.g, c1.g, k),
                              lerp_u8(c0.b, c1.b, k),
                              lerp_u8(c0.a, c1.a, k));
        }
    }
    last.color
}

/// Paint ready for evaluation
#[derive(Debug,Clone)]
pub enum ColorSolver {
    Solid(Rgba8),
    Gradient {
        gradient: Gradient,
        ramp: ColorRamp,
        inv: Transform,
        opacity: f64,
    },
    Texture {
        image: Arc<image::RgbaImage>,
        spread: Spread,
        filter: Filter,
        inv: Transform,
        opacity: f64,
    },
    Transparent,
}

impl ColorSolver {
    /// Prepare a paint
    ///
    /// Fails when the paint transform cannot be inverted
    pub fn new(paint: &Paint) -> Result<Self> {
        let s = match paint {
            Paint::Solid { color, opacity } => ColorSolver::Solid(color.with_opacity(*opacity)),
            Paint::LinearGradient { p1, p2, ramp, xf, opacity } => {
                ColorSolver::Gradient {
                    gradient: Gradient::linear(*p1, *p2),
                    ramp: ramp.clone(),
                    inv: xf.inverse()?,
                    opacity: *opacity,
                }
            },
            Paint::RadialGradient { center, focus, r, ramp, xf, opacity } => {
                if *r <= 0.0 || !r.is_finite() {
                    return Err(crate::Error::SingularTransform);
                }
                ColorSolver::Gradient {
                    gradient: Gradient::radial(*center, *focus, *r),
                    ramp: ramp.clone(),
                    inv: xf.inverse()?,
                    opacity: *opacity,
                }
            },
            Paint::Texture { image, spread, filter, xf, opacity } => {
                if image.width() == 0 || image.height() == 0 {
                    ColorSolver::Transparent
                } else {
                    ColorSolver::Texture {
                        image: Arc::clone(image),
                        spread: *spread,
                        filter: *filter,
                        inv: xf.inverse()?,
                        opacity: *opacity,
                    }
                }
            },
            Paint::Empty => ColorSolver::Transparent,
        };
        Ok(s)
    }
    /// Straight alpha color at (x,y) in scene space
    pub fn solve(&self, x: f64, y: f64) -> Rgba8 {
        match self {
            ColorSolver::Solid(c) => *c,
            ColorSolver::Gradient { gradient, ramp, inv, opacity } => {
                let p = inv.apply(Point::new(x, y));
                match ramp.spread.apply(gradient.convert(p)) {
                    Some(t) => ramp_color(ramp, t).with_opacity(*opacity),
                    None => Rgba8::transparent(),
                }
            },
            ColorSolver::Texture { image, spread, filter, inv, opacity } => {
                let p = inv.apply(Point::new(x, y));
                match (spread.apply(p.x), spread.apply(p.y)) {
                    (Some(s), Some(t)) => texel(image, *filter, s, t).with_opacity(*opacity),
                    _ => Rgba8::transparent(),
                }
            },
            ColorSolver::Transparent => Rgba8::transparent(),
        }
    }
}

/// Texel lookup at unit square coordinates, row 0 at `t = 0`
fn texel(img: &image::RgbaImage, filter: Filter, s: f64, t: f64) -> Rgba8 {
    let (w, h) = (img.width(), img.height());
    let fetch = |i: i64, j: i64| {
        let i = i.max(0).min(i64::from(w) - 1) as u32;
        let j = j.max(0).min(i64::from(h) - 1) as u32;
        let p = img.get_pixel(i, j);
        Rgba8::new(p[0], p[1], p[2], p[3])
    };
    let x = s * f64::from(w);
    let y = t * f64::from(h);
    match filter {
        Filter::Nearest => fetch(x.floor() as i64, y.floor() as i64),
        Filter::Bilinear => {
            let (x, y) = (x - 0.5, y - 0.5);
            let (x0, y0) = (x.floor(), y.floor());
            let (fx, fy) = (x - x0, y - y0);
            let (i, j) = (x0 as i64, y0 as i64);
            let mix = |a: Rgba8, b: Rgba8, k: f64| {
                Rgba8::new(lerp_u8(a.r, b.r, k), lerp_u8(a.g, b.g, k),
                           lerp_u8(a.b, b.b, k), lerp_u8(a.a, b.a, k))
            };
            let top = mix(fetch(i, j), fetch(i + 1, j), fx);
            let bot = mix(fetch(i, j + 1), fetch(i + 1, j + 1), fx);
            mix(top, bot, fy)
        },
    }
}
