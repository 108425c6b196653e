//! Colors

use crate::Color;

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Convert from sRGB to RGB for a single component
pub fn srgb_to_rgb(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}
/// Convert from RGB to sRGB for a single component
pub fn rgb_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0/2.4) - 0.055
    }
}

/// Color as Red, Green, Blue, and Alpha
///
/// Components are display (sRGB) encoded, alpha is not premultiplied
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
    /// Same color with alpha scaled by `opacity`
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self::new(self.r, self.g, self.b, cu8(self.alpha() * opacity))
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn alpha8(&self) -> u8 { self.a }
    fn red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8 { self.b }
}

const OPAQUE_EPS : f64 = 1e-9;

/// Premultiplied color, components in [0,1]
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct RgbaPre {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaPre {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Premultiply a straight alpha color
    pub fn from_color<C: Color>(c: &C) -> Self {
        let a = c.alpha();
        Self::new(c.red() * a, c.green() * a, c.blue() * a, a)
    }
    /// Composite `self` over `below`
    ///
    /// `C = Cf + Cb (1 - Af)`
    pub fn over(&self, below: &RgbaPre) -> RgbaPre {
        let k = 1.0 - self.a;
        RgbaPre::new(self.r + below.r * k,
                     self.g + below.g * k,
                     self.b + below.b * k,
                     self.a + below.a * k)
    }
    /// Nothing behind can show through
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0 - OPAQUE_EPS
    }
}

impl Color for RgbaPre {
    fn red(&self) -> f64 {
        if self.a > 0.0 { self.r / self.a } else { 0.0 }
    }
    fn green(&self) -> f64 {
        if self.a > 0.0 { self.g / self.a } else { 0.0 }
    }
    fn blue(&self) -> f64 {
        if self.a > 0.0 { self.b / self.a } else { 0.0 }
    }
    fn alpha(&self) -> f64 { self.a }
    fn alpha8(&self) -> u8 { cu8(self.alpha()) }
    fn red8(&self) -> u8 { cu8(self.red()) }
    fn green8(&self) -> u8 { cu8(self.green()) }
    fn blue8(&self) -> u8 { cu8(self.blue()) }
}

/// Averages display encoded samples in linear light
///
/// Every sample has been composited over an opaque background, so only
/// color channels are accumulated and the result is always opaque.
#[derive(Debug,Default,Copy,Clone)]
pub struct GammaAccumulator {
    r: f64,
    g: f64,
    b: f64,
    n: usize,
}

impl GammaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
    /// Add one display encoded sample
    pub fn add<C: Color>(&mut self, c: &C) {
        self.r += srgb_to_rgb(c.red());
        self.g += srgb_to_rgb(c.green());
        self.b += srgb_to_rgb(c.blue());
        self.n += 1;
    }
    /// Number of samples added so far
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    /// Average back in display encoding, alpha forced to 255
    pub fn resolve(&self) -> Rgba8 {
        if self.n == 0 {
            return Rgba8::white();
        }
        let n = self.n as f64;
        Rgba8::new(cu8(rgb_to_srgb(self.r / n)),
                   cu8(rgb_to_srgb(self.g / n)),
                   cu8(rgb_to_srgb(self.b / n)),
                   255)
    }
}
