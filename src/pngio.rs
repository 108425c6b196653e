//! Reading and writing of RGBA8 PNG files

use std::path::Path;

use log::debug;

use crate::buffer::BPP;
use crate::Result;

/// Read an image as RGBA8, returning data, width and height
pub fn read_png<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGBA8 data as a PNG
pub fn write_png<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgba8)?;
    Ok(())
}

/// Compare two images pixel by pixel
///
/// Differing pixels are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (a, wa, ha) = read_png(f1)?;
    let (b, wb, hb) = read_png(f2)?;
    if (wa, ha) != (wb, hb) {
        debug!("image sizes differ: {}x{} vs {}x{}", wa, ha, wb, hb);
        return Ok(false);
    }
    let mut n = 0;
    for (k, (pa, pb)) in a.chunks(BPP).zip(b.chunks(BPP)).enumerate() {
        if pa != pb {
            debug!("pixel ({},{}): {:?} vs {:?}", k % wa, k / wa, pa, pb);
            n += 1;
        }
    }
    if n > 0 {
        debug!("{} of {} pixels differ", n, wa * ha);
    }
    Ok(n == 0)
}
