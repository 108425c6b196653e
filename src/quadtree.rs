//! Quadtree index of scene objects
//!
//! Each leaf holds, per scene object, the segments that cross its cell and
//! the winding number of the object at the bottom right corner of the cell.
//! The winding number at any point inside the cell then follows from the
//! local segments alone.
//!
//! Segments that leave the cell through its right edge are kept as
//! shortcuts: the winding of the part outside of the cell is replaced by a
//! vertical ray from the right endpoint of the segment upwards, which only
//! depends on that endpoint.
//!
//! Cells have integer corners.  "Top" is the half with the larger y.

use log::{debug, trace};

use crate::bbox::BoundingBox;
use crate::object::SceneObject;
use crate::paths::Point;
use crate::segment::PathSegment;

/// Subdivision limits
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct QuadtreeConfig {
    /// Leaves are never deeper than this
    pub max_depth: usize,
    /// Leaves with fewer segments are not split
    pub min_segments: usize,
}

impl QuadtreeConfig {
    /// Default limits for a viewport, cells keep at least 2x2 pixels
    pub fn for_viewport(width: usize, height: usize) -> Self {
        let side = width.min(height) as f64 / 2.0;
        let max_depth = if side >= 1.0 { side.log2().floor() as usize } else { 0 };
        Self { max_depth, min_segments: 1 }
    }
}

/// Integer cell `[x0,x1) x [y0,y1)`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Cell {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Cell {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }
    /// Center, rounded towards the minimum corner
    pub fn center(&self) -> (i64, i64) {
        (self.x0 + (self.x1 - self.x0) / 2, self.y0 + (self.y1 - self.y0) / 2)
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 as f64 && x < self.x1 as f64 &&
            y >= self.y0 as f64 && y < self.y1 as f64
    }
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(Point::new(self.x0 as f64, self.y0 as f64),
                         Point::new(self.x1 as f64, self.y1 as f64))
    }
    /// Children as top-right, top-left, bottom-left, bottom-right
    fn split(&self) -> [Cell; 4] {
        let (cx, cy) = self.center();
        [Cell::new(cx, cy, self.x1, self.y1),
         Cell::new(self.x0, cy, cx, self.y1),
         Cell::new(self.x0, self.y0, cx, cy),
         Cell::new(cx, self.y0, self.x1, cy)]
    }
}

/// One endpoint strictly inside the cell
fn totally_inside(c: &Cell, seg: &PathSegment) -> bool {
    let (x0, y0, x1, y1) = (c.x0 as f64, c.y0 as f64, c.x1 as f64, c.y1 as f64);
    [seg.left(), seg.right()].iter()
        .any(|p| p.x > x0 && p.x < x1 && p.y > y0 && p.y < y1)
}

/// Segment crosses the vertical edge `x = cx` between `ymin` and `ymax`
fn hit_v_bound(cx: i64, ymin: i64, ymax: i64, seg: &PathSegment) -> bool {
    let (cx, ymin, ymax) = (cx as f64, ymin as f64, ymax as f64);
    if seg.left().x < cx && seg.right().x > cx {
        if seg.bot().y > ymin && seg.top().y < ymax {
            return true;
        }
        return seg.implicit_value(cx, ymin) * seg.implicit_value(cx, ymax) < 0;
    }
    false
}

/// Segment crosses the horizontal edge `y = cy` between `xmin` and `xmax`
fn hit_h_bound(cy: i64, xmin: i64, xmax: i64, seg: &PathSegment) -> bool {
    let (cy, xmin, xmax) = (cy as f64, xmin as f64, xmax as f64);
    if seg.bot().y < cy && seg.top().y > cy {
        if seg.left().x > xmin && seg.right().x < xmax {
            return true;
        }
        return seg.implicit_value(xmin, cy) != seg.implicit_value(xmax, cy);
    }
    false
}

/// Scene object as seen from inside one cell
#[derive(Debug,Clone,PartialEq)]
pub struct NodeObject {
    /// Index of the scene object
    pub object: usize,
    segments: Vec<usize>,
    shortcuts: Vec<usize>,
    w_increment: i32,
}

impl NodeObject {
    pub fn new(object: usize, w_increment: i32) -> Self {
        Self { object, segments: vec![], shortcuts: vec![], w_increment }
    }
    pub fn add_segment(&mut self, i: usize, shortcut: bool) {
        if shortcut {
            self.shortcuts.push(i);
        } else {
            self.segments.push(i);
        }
    }
    pub fn increment(&mut self, inc: i32) {
        self.w_increment += inc;
    }
    pub fn w_increment(&self) -> i32 {
        self.w_increment
    }
    /// Segments and shortcuts
    pub fn len(&self) -> usize {
        self.segments.len() + self.shortcuts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Residents followed by shortcuts
    pub fn all_segments(&self) -> impl Iterator<Item=(usize, bool)> + '_ {
        self.segments.iter().map(|&i| (i, false))
            .chain(self.shortcuts.iter().map(|&i| (i, true)))
    }
    /// Winding number of `obj` at a point inside the cell
    pub fn winding(&self, obj: &SceneObject, x: f64, y: f64) -> i32 {
        let mut sum = self.w_increment;
        for &i in &self.segments {
            sum += obj.segment(i).winding(x, y);
        }
        for &i in &self.shortcuts {
            let s = obj.segment(i);
            sum += s.winding(x, y);
            if s.intersect_shortcut(x, y) {
                sum += s.sh_dir;
            }
        }
        sum
    }
    /// Point inside the cell is inside `obj`
    pub fn hit(&self, obj: &SceneObject, x: f64, y: f64) -> bool {
        obj.bbox().hit_inside(x, y) && obj.satisfy_wrule(self.winding(obj, x, y))
    }
}

/// Leaf cell and the objects that matter inside of it
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Leaf {
    pub cell: Cell,
    pub objects: Vec<NodeObject>,
    n_segments: usize,
}

impl Leaf {
    pub fn new(cell: Cell) -> Self {
        Self { cell, objects: vec![], n_segments: 0 }
    }
    pub fn add_node_object(&mut self, obj: NodeObject) {
        self.n_segments += obj.len();
        self.objects.push(obj);
    }
    /// Total segments over all objects
    pub fn n_segments(&self) -> usize {
        self.n_segments
    }
    /// Root leaf covering `cell`
    ///
    /// Objects are indexed in the order given
    pub fn root(cell: Cell, objects: &[SceneObject]) -> Self {
        let mut leaf = Leaf::new(cell);
        let area = cell.bbox();
        for (k, obj) in objects.iter().enumerate() {
            if !area.intersect(obj.bbox()) {
                continue;
            }
            let mut nobj = NodeObject::new(k, 0);
            for (i, seg) in obj.segments().iter().enumerate() {
                let right = hit_v_bound(cell.x1, cell.y0, cell.y1, seg);
                let inside = totally_inside(&cell, seg) || right ||
                    hit_h_bound(cell.y0, cell.x0, cell.x1, seg) ||
                    hit_v_bound(cell.x0, cell.y0, cell.y1, seg) ||
                    hit_h_bound(cell.y1, cell.x0, cell.x1, seg);
                if inside {
                    nobj.add_segment(i, right);
                }
                nobj.increment(seg.winding(cell.x1 as f64, cell.y0 as f64));
            }
            if !nobj.is_empty() || nobj.w_increment != 0 {
                leaf.add_node_object(nobj);
            }
        }
        leaf
    }
    /// Split into four children, recursively
    pub fn subdivide(self, objects: &[SceneObject], depth: usize, cfg: &QuadtreeConfig) -> QuadtreeNode {
        if depth >= cfg.max_depth || self.n_segments < cfg.min_segments {
            trace!("leaf {:?} depth {} objects {} segments {}",
                   self.cell, depth, self.objects.len(), self.n_segments);
            return QuadtreeNode::Leaf(self);
        }
        let c = self.cell;
        let (cx, cy) = c.center();
        let cells = c.split();
        let mut kids = [Leaf::new(cells[0]), Leaf::new(cells[1]),
                        Leaf::new(cells[2]), Leaf::new(cells[3])];
        // Corner rays: tl at the center, tr at the right middle,
        // bl at the bottom middle, br at the bottom right
        let corners = [(c.x1, cy), (cx, cy), (cx, c.y0), (c.x1, c.y0)];
        for nobj in &self.objects {
            let obj = &objects[nobj.object];
            let mut parts = [NodeObject::new(nobj.object, nobj.w_increment),
                             NodeObject::new(nobj.object, nobj.w_increment),
                             NodeObject::new(nobj.object, nobj.w_increment),
                             NodeObject::new(nobj.object, nobj.w_increment)];
            for (i, _) in nobj.all_segments() {
                let seg = obj.segment(i);
                let tr_right = hit_v_bound(c.x1, cy, c.y1, seg);
                let br_right = hit_v_bound(c.x1, c.y0, cy, seg);
                let br_down  = hit_h_bound(c.y0, cx, c.x1, seg);
                let bl_down  = hit_h_bound(c.y0, c.x0, cx, seg);
                let bl_left  = hit_v_bound(c.x0, c.y0, cy, seg);
                let tl_left  = hit_v_bound(c.x0, cy, c.y1, seg);
                let tl_up    = hit_h_bound(c.y1, c.x0, cx, seg);
                let tr_up    = hit_h_bound(c.y1, cx, c.x1, seg);
                let tl_tr    = hit_v_bound(cx, cy, c.y1, seg);
                let bl_tl    = hit_h_bound(cy, c.x0, cx, seg);
                let bl_br    = hit_v_bound(cx, c.y0, cy, seg);
                let br_tr    = hit_h_bound(cy, cx, c.x1, seg);
                let member = [
                    (tr_right || tr_up || tl_tr || br_tr, tr_right),
                    (tl_left || tl_tr || tl_up || bl_tl, tl_tr),
                    (bl_br || bl_down || bl_left || bl_tl, bl_br),
                    (br_down || br_right || br_tr || bl_br, br_right),
                ];
                for (k, &(crosses, shortcut)) in member.iter().enumerate() {
                    if crosses || totally_inside(&cells[k], seg) {
                        parts[k].add_segment(i, shortcut);
                    }
                    let (x, y) = corners[k];
                    parts[k].increment(seg.winding(x as f64, y as f64));
                }
            }
            for &i in &nobj.shortcuts {
                let seg = obj.segment(i);
                for (k, &(x, y)) in corners.iter().enumerate() {
                    if seg.intersect_shortcut(x as f64, y as f64) {
                        parts[k].increment(seg.sh_dir);
                    }
                }
            }
            for (kid, part) in kids.iter_mut().zip(parts.iter_mut()) {
                if !part.is_empty() || part.w_increment != 0 {
                    kid.add_node_object(std::mem::replace(part, NodeObject::new(0, 0)));
                }
            }
        }
        let depth = depth + 1;
        let [tr, tl, bl, br] = kids;
        let ((tr, tl), (bl, br)) = rayon::join(
            || rayon::join(|| tr.subdivide(objects, depth, cfg),
                           || tl.subdivide(objects, depth, cfg)),
            || rayon::join(|| bl.subdivide(objects, depth, cfg),
                           || br.subdivide(objects, depth, cfg)));
        QuadtreeNode::Intern {
            cell: c,
            center: (cx, cy),
            children: Box::new([tr, tl, bl, br]),
        }
    }
}

/// Node of the index
#[derive(Debug,Clone,PartialEq)]
pub enum QuadtreeNode {
    /// Children as top-right, top-left, bottom-left, bottom-right
    Intern {
        cell: Cell,
        center: (i64, i64),
        children: Box<[QuadtreeNode; 4]>,
    },
    Leaf(Leaf),
}

impl QuadtreeNode {
    /// Index `objects` over a `width` x `height` viewport
    pub fn build(objects: &[SceneObject], width: usize, height: usize, cfg: &QuadtreeConfig) -> Self {
        let cell = Cell::new(0, 0, width as i64, height as i64);
        let root = Leaf::root(cell, objects);
        debug!("quadtree root {}x{} objects {}/{} segments {} max depth {}",
               width, height, root.objects.len(), objects.len(),
               root.n_segments, cfg.max_depth);
        let tree = root.subdivide(objects, 0, cfg);
        debug!("quadtree depth {} leaves {}", tree.depth(), tree.leaves());
        tree
    }
    pub fn cell(&self) -> &Cell {
        match self {
            QuadtreeNode::Intern { cell, .. } => cell,
            QuadtreeNode::Leaf(leaf) => &leaf.cell,
        }
    }
    /// Leaf containing (x,y), None outside of the node
    pub fn get_node_of(&self, x: f64, y: f64) -> Option<&Leaf> {
        if !self.cell().contains(x, y) {
            return None;
        }
        let mut node = self;
        loop {
            match node {
                QuadtreeNode::Leaf(leaf) => return Some(leaf),
                QuadtreeNode::Intern { center, children, .. } => {
                    let left = x < center.0 as f64;
                    let bottom = y < center.1 as f64;
                    node = match (left, bottom) {
                        (false, false) => &children[0],
                        (true, false) => &children[1],
                        (true, true) => &children[2],
                        (false, true) => &children[3],
                    };
                }
            }
        }
    }
    /// Depth of the deepest leaf, 0 for a single leaf
    pub fn depth(&self) -> usize {
        match self {
            QuadtreeNode::Leaf(_) => 0,
            QuadtreeNode::Intern { children, .. } => {
                1 + children.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }
    /// Number of leaves
    pub fn leaves(&self) -> usize {
        match self {
            QuadtreeNode::Leaf(_) => 1,
            QuadtreeNode::Intern { children, .. } => children.iter().map(|c| c.leaves()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::WindingRule;
    use crate::paint::Paint;

    fn polygon(pts: &[(f64, f64)]) -> SceneObject {
        let n = pts.len();
        let segs = (0..n)
            .map(|i| (pts[i], pts[(i + 1) % n]))
            .filter(|(a, b)| a.1 != b.1)
            .map(|(a, b)| PathSegment::linear(Point::new(a.0, a.1), Point::new(b.0, b.1)).unwrap())
            .collect();
        SceneObject::new(segs, WindingRule::NonZero, &Paint::Empty).unwrap()
    }
    #[test]
    fn default_depth() {
        assert_eq!(QuadtreeConfig::for_viewport(30, 30).max_depth, 3);
        assert_eq!(QuadtreeConfig::for_viewport(512, 100).max_depth, 5);
        assert_eq!(QuadtreeConfig::for_viewport(1, 1).max_depth, 0);
        assert_eq!(QuadtreeConfig::for_viewport(0, 10).max_depth, 0);
    }
    #[test]
    fn cell_split() {
        let c = Cell::new(0, 0, 7, 5);
        assert_eq!(c.center(), (3, 2));
        let k = c.split();
        assert_eq!(k[0], Cell::new(3, 2, 7, 5));
        assert_eq!(k[1], Cell::new(0, 2, 3, 5));
        assert_eq!(k[2], Cell::new(0, 0, 3, 2));
        assert_eq!(k[3], Cell::new(3, 0, 7, 2));
    }
    #[test]
    fn empty_scene() {
        let cfg = QuadtreeConfig::for_viewport(64, 64);
        let t = QuadtreeNode::build(&[], 64, 64, &cfg);
        assert_eq!(t.leaves(), 1);
        let leaf = t.get_node_of(10.0, 10.0).unwrap();
        assert!(leaf.objects.is_empty());
        assert!(t.get_node_of(64.0, 10.0).is_none());
        assert!(t.get_node_of(-0.5, 10.0).is_none());
    }
    #[test]
    fn lookup_and_winding() {
        let objs = vec![polygon(&[(5.3, 4.7), (50.2, 9.1), (41.6, 55.9), (12.4, 38.2)])];
        let cfg = QuadtreeConfig::for_viewport(64, 64);
        let t = QuadtreeNode::build(&objs, 64, 64, &cfg);
        assert!(t.depth() > 0);
        for j in 0..64 {
            for i in 0..64 {
                let (x, y) = (i as f64 + 0.5, j as f64 + 0.5);
                let leaf = t.get_node_of(x, y).unwrap();
                assert!(leaf.cell.contains(x, y));
                let fast = leaf.objects.iter().any(|n| n.hit(&objs[n.object], x, y));
                assert_eq!(fast, objs[0].naive_hit(x, y), "at {} {}", x, y);
            }
        }
    }
    #[test]
    fn interior_cells_carry_increment() {
        // A large square covering the viewport leaves no segments inside
        let objs = vec![polygon(&[(-10.5, -10.5), (80.5, -10.5), (80.5, 80.5), (-10.5, 80.5)])];
        let cfg = QuadtreeConfig::for_viewport(32, 32);
        let t = QuadtreeNode::build(&objs, 32, 32, &cfg);
        assert_eq!(t.leaves(), 1);
        let leaf = t.get_node_of(3.0, 3.0).unwrap();
        assert_eq!(leaf.objects.len(), 1);
        assert_eq!(leaf.objects[0].len(), 0);
        assert_eq!(leaf.objects[0].w_increment(), 1);
    }
}
