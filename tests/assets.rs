
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::Rng;

use qtrast::{Paint, Rgba8, Scene, Shape, WindingRule, Element};

/// Directory for images written by tests, created on demand
pub fn tmp_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests");
    dir.push("tmp");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn red() -> Paint {
    Paint::solid(Rgba8::rgb(255, 0, 0))
}

/// Self intersecting five pointed star
pub fn star(cx: f64, cy: f64, r: f64) -> Shape {
    let pts : Vec<_> = (0..5).map(|k| {
        let a = 0.1 + 2.0 * std::f64::consts::PI * (2 * k) as f64 / 5.0;
        (cx + r * a.cos(), cy + r * a.sin())
    }).collect();
    Shape::polygon(&pts)
}

/// Mixed scene of lines, conics and cubics with both winding rules
pub fn mixed_scene() -> Scene {
    let mut s = Scene::new();
    let mut p = qtrast::Path::new();
    p.move_to(10.2, 5.3)
        .cubic_to(60.7, 10.9, 30.1, 60.4, 80.3, 75.6)
        .quad_to(40.7, 90.1, 6.1, 50.9)
        .close_polygon();
    s.fill(Shape::Path(p), red())
        .push(Element::PaintedShape(WindingRule::EvenOdd,
                                    star(50.123, 40.377, 35.0),
                                    Paint::solid(Rgba8::new(0, 0, 255, 128))))
        .fill(Shape::circle(40.3, 41.7, 30.2), Paint::solid(Rgba8::rgb(0, 255, 0)).with_opacity(0.25));
    s
}

/// Closed contour of `n` random cubics and conics
///
/// Conic weights run from 0.25 to 4, so elliptic and hyperbolic arcs
/// both show up.  Points may fall a little outside the viewport.
pub fn random_curves(rng: &mut StdRng, width: f64, height: f64, n: usize) -> qtrast::Path {
    fn point(rng: &mut StdRng, width: f64, height: f64) -> (f64, f64) {
        (rng.gen_range(-5.0 .. width + 5.0), rng.gen_range(-5.0 .. height + 5.0))
    }
    let mut p = qtrast::Path::new();
    let (x, y) = point(rng, width, height);
    p.move_to(x, y);
    for k in 0 .. n {
        let (x1, y1) = point(rng, width, height);
        let (x2, y2) = point(rng, width, height);
        if k % 2 == 0 {
            let (x3, y3) = point(rng, width, height);
            p.cubic_to(x1, y1, x2, y2, x3, y3);
        } else {
            let w = 2f64.powf(rng.gen_range(-2.0 .. 2.0));
            p.rquad_to(x1, y1, w, x2, y2);
        }
    }
    p.close_polygon();
    p
}
