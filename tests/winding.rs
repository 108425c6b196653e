mod assets;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qtrast::{preprocess, Path, PathCommand, PathSegment, Point, SceneObject, Transform, WindingRule, Paint};

fn object(path: &Path, rule: WindingRule) -> SceneObject {
    let segs = preprocess(path, &Transform::new()).unwrap();
    SceneObject::new(segs, rule, &Paint::Empty).unwrap()
}

/// Convex polygon containment by edge sides
fn inside_convex(pts: &[(f64, f64)], x: f64, y: f64) -> bool {
    let n = pts.len();
    let mut pos = 0;
    let mut neg = 0;
    for i in 0 .. n {
        let (x0, y0) = pts[i];
        let (x1, y1) = pts[(i + 1) % n];
        let c = (x1 - x0) * (y - y0) - (y1 - y0) * (x - x0);
        if c > 0.0 { pos += 1 } else if c < 0.0 { neg += 1 }
    }
    pos == 0 || neg == 0
}

#[test]
fn convex_polygons() {
    let polys : Vec<Vec<(f64, f64)>> = vec![
        vec![(1.3, 1.7), (20.9, 3.1), (14.2, 18.6)],
        vec![(14.2, 18.6), (20.9, 3.1), (1.3, 1.7)],
        vec![(2.25, 2.75), (18.5, 2.75), (18.5, 17.25), (2.25, 17.25)],
        vec![(10.1, 0.6), (19.4, 9.9), (10.1, 19.2), (0.8, 9.9)],
    ];
    for pts in &polys {
        let obj = object(&Path::polygon(pts), WindingRule::NonZero);
        for j in 0 .. 40 {
            for i in 0 .. 44 {
                let (x, y) = (i as f64 * 0.5 + 0.01, j as f64 * 0.5 + 0.02);
                assert_eq!(obj.naive_hit(x, y), inside_convex(pts, x, y),
                           "{:?} at {} {}", pts, x, y);
            }
        }
    }
}

#[test]
fn orientation_sets_sign() {
    let ccw = [(1.3, 1.7), (20.9, 3.1), (14.2, 18.6)];
    let cw = [(14.2, 18.6), (20.9, 3.1), (1.3, 1.7)];
    let a = object(&Path::polygon(&ccw), WindingRule::NonZero);
    let b = object(&Path::polygon(&cw), WindingRule::NonZero);
    assert_eq!(a.naive_winding(12.0, 7.0), -b.naive_winding(12.0, 7.0));
    assert_eq!(a.naive_winding(12.0, 7.0).abs(), 1);
    assert_eq!(a.naive_winding(30.0, 7.0), 0);
}

#[test]
fn nested_contours() {
    // Outer and inner squares, same orientation
    let mut p = Path::polygon(&[(1.5, 1.5), (30.5, 1.5), (30.5, 30.5), (1.5, 30.5)]);
    let inner = Path::polygon(&[(10.5, 10.5), (20.5, 10.5), (20.5, 20.5), (10.5, 20.5)]);
    p.commands.extend(inner.commands);
    let nz = object(&p, WindingRule::NonZero);
    let eo = object(&p, WindingRule::EvenOdd);
    assert_eq!(nz.naive_winding(15.0, 15.0).abs(), 2);
    assert!(nz.naive_hit(15.0, 15.0));
    assert!(!eo.naive_hit(15.0, 15.0));
    assert!(eo.naive_hit(5.0, 15.0));
}

#[test]
fn curve_segments_cross_once() {
    // Quarter circle of radius 10, rays left of the arc cross it once
    let w = std::f64::consts::FRAC_1_SQRT_2;
    let s = PathSegment::rational_quadratic(Point::new(10.0, 0.0), Point::new(10.0, 10.0),
                                            w, Point::new(0.0, 10.0)).unwrap();
    for k in 1 .. 10 {
        let y = k as f64;
        let xc = (100.0 - y * y).sqrt();
        assert!(s.intersect(xc - 0.01, y));
        assert!(!s.intersect(xc + 0.01, y));
    }
}

/// Contours of the path as polylines, curves in `steps` chords
fn flatten(path: &Path, steps: usize) -> Vec<Vec<Point>> {
    let mut contours = vec![];
    let mut cur : Vec<Point> = vec![];
    let mut finish = |cur: &mut Vec<Point>| {
        if let Some(&first) = cur.first() {
            cur.push(first);
            contours.push(std::mem::take(cur));
        }
    };
    for cmd in &path.commands {
        let p0 = cur.last().copied().unwrap_or_else(|| Point::new(0.0, 0.0));
        match *cmd {
            PathCommand::MoveTo(p) => {
                finish(&mut cur);
                cur.push(p);
            },
            PathCommand::LineTo(p) => cur.push(p),
            PathCommand::QuadTo(p1, p2) => conic(&mut cur, p0, p1, 1.0, p2, steps),
            PathCommand::RQuadTo(p1, p2, w) => conic(&mut cur, p0, p1, w, p2, steps),
            PathCommand::CubicTo(p1, p2, p3) => {
                for k in 1 ..= steps {
                    let t = k as f64 / steps as f64;
                    let mt = 1.0 - t;
                    cur.push(p0 * (mt*mt*mt) + p1 * (3.0*mt*mt*t) + p2 * (3.0*mt*t*t) + p3 * (t*t*t));
                }
            },
            PathCommand::Close => finish(&mut cur),
        }
    }
    finish(&mut cur);
    contours
}

fn conic(cur: &mut Vec<Point>, p0: Point, p1: Point, w: f64, p2: Point, steps: usize) {
    for k in 1 ..= steps {
        let t = k as f64 / steps as f64;
        let mt = 1.0 - t;
        let (b0, b1, b2) = (mt * mt, 2.0 * mt * t * w, t * t);
        cur.push((p0 * b0 + p1 * b1 + p2 * b2) * (1.0 / (b0 + b1 + b2)));
    }
}

/// Crossing number winding of closed polylines, upward edges count +1
fn polyline_winding(contours: &[Vec<Point>], x: f64, y: f64) -> i32 {
    let mut w = 0;
    for c in contours {
        for e in c.windows(2) {
            let (a, b) = (e[0], e[1]);
            if (a.y <= y) == (b.y <= y) {
                continue;
            }
            let xc = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x < xc {
                w += if b.y > a.y { 1 } else { -1 };
            }
        }
    }
    w
}

fn polyline_distance(contours: &[Vec<Point>], x: f64, y: f64) -> f64 {
    let q = Point::new(x, y);
    let mut best = std::f64::INFINITY;
    for c in contours {
        for e in c.windows(2) {
            let d = e[1] - e[0];
            let l2 = d.len2();
            let t = if l2 > 0.0 { ((q - e[0]).x * d.x + (q - e[0]).y * d.y) / l2 } else { 0.0 };
            let foot = e[0] + d * t.max(0.0).min(1.0);
            best = best.min((q - foot).len());
        }
    }
    best
}

#[test_log::test]
fn random_curves_match_polylines() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    for _ in 0 .. 12 {
        let path = assets::random_curves(&mut rng, 100.0, 100.0, 6);
        let obj = object(&path, WindingRule::NonZero);
        let lines = flatten(&path, 1024);
        for _ in 0 .. 400 {
            let (x, y) = (rng.gen_range(-10.0 .. 110.0), rng.gen_range(-10.0 .. 110.0));
            if polyline_distance(&lines, x, y) < 0.1 {
                continue;
            }
            assert_eq!(obj.naive_winding(x, y), polyline_winding(&lines, x, y),
                       "at {} {} in {:?}", x, y, path);
            checked += 1;
        }
    }
    assert!(checked > 4000);
}

#[test]
fn self_intersecting_cubic_winding() {
    // Cubic whose double point parameter pairs 0.403 with 1.61
    let mut path = Path::new();
    path.move_to(40.01, 32.77)
        .cubic_to(27.87, 32.77, 22.107, 45.29, 22.107, 48.11)
        .line_to(40.01, 48.11)
        .close_polygon();
    let obj = object(&path, WindingRule::NonZero);
    let lines = flatten(&path, 1024);
    for j in 0 .. 80 {
        for i in 0 .. 100 {
            let (x, y) = (20.013 + i as f64 * 0.21, 31.017 + j as f64 * 0.22);
            if polyline_distance(&lines, x, y) < 0.02 {
                continue;
            }
            assert_eq!(obj.naive_winding(x, y), polyline_winding(&lines, x, y), "at {} {}", x, y);
        }
    }
}
