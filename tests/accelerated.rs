
mod assets;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qtrast::{AcceleratedScene, Paint, RenderConfig, Rgba8, Scene, Shape};

/// Every object agrees with the brute force winding test at every point
fn check_against_naive(scene: &Scene, width: usize, height: usize, seed: u64) -> usize {
    let cfg = RenderConfig::default();
    let acc = AcceleratedScene::accelerate(scene, width, height, &cfg).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut checked = 0;
    for _ in 0 .. 1500 {
        let x = rng.gen_range(0.0 .. width as f64);
        let y = rng.gen_range(0.0 .. height as f64);
        let leaf = acc.root().get_node_of(x, y).unwrap();
        assert!(leaf.cell.contains(x, y));
        for (k, obj) in acc.objects().iter().enumerate() {
            let fast = leaf.objects.iter()
                .find(|n| n.object == k)
                .map(|n| n.hit(obj, x, y))
                .unwrap_or(false);
            assert_eq!(fast, obj.naive_hit(x, y), "object {} at ({}, {})", k, x, y);
            if obj.bbox().hit_inside(x, y) {
                checked += 1;
            }
        }
    }
    checked
}

#[test_log::test]
fn polygons_match_naive() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = Scene::new();
    for _ in 0 .. 4 {
        let pts : Vec<_> = (0..12)
            .map(|_| (rng.gen_range(-10.0 .. 110.0), rng.gen_range(-10.0 .. 95.0)))
            .collect();
        s.fill(Shape::polygon(&pts), assets::red());
    }
    assert!(check_against_naive(&s, 97, 83, 1) > 1000);
}

#[test_log::test]
fn curves_match_naive() {
    let s = assets::mixed_scene();
    assert!(check_against_naive(&s, 97, 83, 2) > 1000);
}

#[test_log::test]
fn circles_match_naive() {
    let mut s = Scene::new();
    s.fill(Shape::circle(40.3, 41.7, 30.2), assets::red())
        .fill(Shape::circle(70.1, 20.3, 50.7), Paint::solid(Rgba8::rgb(0, 0, 255)))
        .eofill(Shape::circle(5.5, 80.25, 12.125), assets::red());
    assert!(check_against_naive(&s, 128, 96, 3) > 1000);
}

#[test_log::test]
fn mixed_weight_curves_match_naive() {
    let mut rng = StdRng::seed_from_u64(29);
    for round in 0 .. 6 {
        let mut s = Scene::new();
        for k in 0 .. 3 {
            let path = assets::random_curves(&mut rng, 97.0, 83.0, 6);
            if k == 1 {
                s.eofill(Shape::Path(path), assets::red());
            } else {
                s.fill(Shape::Path(path), Paint::solid(Rgba8::rgb(0, 0, 255)));
            }
        }
        assert!(check_against_naive(&s, 97, 83, 100 + round) > 1000);
    }
}

#[test]
fn shallow_and_deep_trees_agree() {
    let s = assets::mixed_scene();
    let shallow = RenderConfig::from_args(&["-depth:0"]).unwrap();
    let deep = RenderConfig::from_args(&["-depth:6"]).unwrap();
    let a = AcceleratedScene::accelerate(&s, 97, 83, &shallow).unwrap();
    let b = AcceleratedScene::accelerate(&s, 97, 83, &deep).unwrap();
    assert_eq!(a.root().depth(), 0);
    assert!(b.root().depth() > 2);
    assert_eq!(a.render(), b.render());
}

#[test]
fn deterministic_across_threads() {
    let s = assets::mixed_scene();
    let mut images = vec![];
    for j in &["-j:1", "-j:2", "-j:4"] {
        let cfg = RenderConfig::from_args(&["-pattern:8", *j]).unwrap();
        let acc = AcceleratedScene::accelerate(&s, 97, 83, &cfg).unwrap();
        images.push((acc.root().clone(), acc.render()));
    }
    assert_eq!(images[0], images[1]);
    assert_eq!(images[0], images[2]);
}
