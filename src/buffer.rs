//! Rendering buffer

use std::path::Path;

use crate::color::Rgba8;
use crate::Result;

/// Bytes per RGBA8 pixel
pub const BPP : usize = 4;

/// Rendering Buffer
///
/// RGBA8 data stored in row-major order (C-format), row `y` holds the
/// pixels sampled at `y + 0.5`
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new white buffer of width and height
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, data: vec![255u8; width * height * BPP]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Bytes in one row
    pub fn stride(&self) -> usize {
        self.width * BPP
    }
    /// Return slice of a row
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let row = i * self.stride();
        &self.data[row .. row + self.stride()]
    }
    /// Clear an image to white
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 255);
    }
    /// Color at (x,y)
    pub fn pixel(&self, x: usize, y: usize) -> Rgba8 {
        let p = &self[(x,y)];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }
    /// Set the color at (x,y)
    pub fn put_pixel(&mut self, x: usize, y: usize, c: Rgba8) {
        self[(x,y)].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    /// Write image to a PNG file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        crate::pngio::write_png(&self.data, self.width, self.height, filename)
    }
}

impl RenderingBuffer {
    /// Byte offset of pixel (x,y)
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height,
                "pixel ({},{}) outside of {}x{}", x, y, self.width, self.height);
        (y * self.width + x) * BPP
    }
}

impl std::ops::Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, (x, y): (usize, usize)) -> &[u8] {
        let i = self.offset(x, y);
        &self.data[i .. i + BPP]
    }
}
impl std::ops::IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut [u8] {
        let i = self.offset(x, y);
        &mut self.data[i .. i + BPP]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn pixels() {
        let mut b = RenderingBuffer::new(3, 2);
        assert_eq!(b.len(), 24);
        assert_eq!(b.pixel(2, 1), Rgba8::white());
        b.put_pixel(2, 1, Rgba8::rgb(1, 2, 3));
        assert_eq!(b.pixel(2, 1), Rgba8::rgb(1, 2, 3));
        assert_eq!(&b.row(1)[8..12], &[1, 2, 3, 255]);
        b.clear();
        assert_eq!(b.pixel(2, 1), Rgba8::white());
    }
}
