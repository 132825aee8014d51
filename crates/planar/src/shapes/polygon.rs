//! Simple polygon on an ordered vertex list.
//!
//! Derived properties (bounding box, centroid, convexity, the
//! self-intersection flag and the triangulation) are memoized against a
//! fingerprint of the vertex list, so mutating methods never have to
//! invalidate anything by hand.
//!
//! Area and centroid are undefined for self-intersecting polygons and
//! return `None`; winding orientation stays defined through the raw
//! shoelace sum.

use crate::cache::{fingerprint, Memo};
use crate::error::{Error, Result};
use crate::geom::{
    approx_zero, cross, orientation, rotated, turn_angle, Angle, BoundingBox, Orientation,
};
use crate::shapes::{Line, Segment};
use crate::{Point, Vec2};

#[derive(Clone, Debug, Default)]
struct PolyCache {
    bbox: Memo<Option<BoundingBox>>,
    centroid: Memo<Option<Point>>,
    self_intersecting: Memo<bool>,
    convex: Memo<bool>,
    triangles: Memo<Vec<Polygon>>,
}

#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    cache: PolyCache,
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InsufficientVertices(vertices.len()));
        }
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(Error::NonFiniteCoordinate);
        }
        Ok(Self::from_vertices_unchecked(vertices))
    }

    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            cache: PolyCache::default(),
        }
    }

    /// Axis-aligned rectangle with top-left corner `(x, y)` growing
    /// rightward and downward.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Polygon {
        Self::from_vertices_unchecked(vec![
            Point::new(x, y),
            Point::new(x, y - height),
            Point::new(x + width, y - height),
            Point::new(x + width, y),
        ])
    }

    /// Regular polygon with `edges` vertices on a circle of `radius`
    /// around `center`. The first vertex sits at `start_angle`
    /// (straight up when `None`).
    pub fn equilateral(
        edges: usize,
        radius: f64,
        center: Point,
        start_angle: Option<Angle>,
    ) -> Result<Polygon> {
        if edges < 3 {
            return Err(Error::InsufficientVertices(edges));
        }
        let step = Angle::TAU / edges as f64;
        let start = start_angle.map_or(Angle::SPI, Angle::radians);
        let verts = (0..edges)
            .map(|i| {
                let angle = start + i as f64 * step;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Ok(Self::from_vertices_unchecked(verts))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn fingerprint(&self) -> u64 {
        fingerprint(&self.vertices)
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        (i + self.vertices.len() - 1) % self.vertices.len()
    }

    /// Closed edge loop; edges between coincident vertices are included.
    pub fn edges(&self) -> Vec<Segment> {
        (0..self.vertices.len())
            .map(|i| Segment::new_unchecked(self.vertices[i], self.vertices[self.next(i)]))
            .collect()
    }

    /// Displacement vectors along the closed boundary.
    pub fn vectors(&self) -> Vec<Vec2<f64>> {
        (0..self.vertices.len())
            .map(|i| self.vertices[self.next(i)] - self.vertices[i])
            .collect()
    }

    fn shoelace_sum(&self) -> f64 {
        (0..self.vertices.len())
            .map(|i| {
                let v = self.vertices[i];
                let nv = self.vertices[self.next(i)];
                v.x * nv.y - v.y * nv.x
            })
            .sum()
    }

    /// Shoelace area, positive for CCW winding. `None` when the
    /// boundary self-intersects.
    pub fn signed_area(&self) -> Option<f64> {
        if self.is_self_intersecting() {
            return None;
        }
        Some(self.shoelace_sum() / 2.0)
    }

    pub fn area(&self) -> Option<f64> {
        Some(self.signed_area()?.abs())
    }

    pub fn perimeter(&self) -> f64 {
        self.vectors().iter().map(|v| v.norm()).sum()
    }

    /// Area centroid. `None` when the boundary self-intersects.
    pub fn centroid(&self) -> Option<Point> {
        self.cache.centroid.get_or_compute(self.fingerprint(), || {
            if self.is_self_intersecting() {
                return None;
            }
            let mut cx = 0.0;
            let mut cy = 0.0;
            let mut a = 0.0;
            for i in 0..self.vertices.len() {
                let p = self.vertices[i];
                let pn = self.vertices[self.next(i)];
                let s = p.x * pn.y - pn.x * p.y;
                cx += (p.x + pn.x) * s;
                cy += (p.y + pn.y) * s;
                a += s;
            }
            if approx_zero(a) {
                return None;
            }
            let w = 1.0 / (3.0 * a);
            Some(Point::new(cx * w, cy * w))
        })
    }

    /// Winding orientation from the raw shoelace sum. Defined even for
    /// self-intersecting boundaries (net winding decides).
    pub fn orientation(&self) -> Orientation {
        if self.shoelace_sum() < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Interior angle at every vertex, winding-corrected.
    pub fn angles(&self) -> Vec<Angle> {
        let cw = self.orientation() == Orientation::Clockwise;
        (0..self.vertices.len())
            .map(|i| {
                let pv = self.vertices[self.prev(i)];
                let v = self.vertices[i];
                let nv = self.vertices[self.next(i)];
                if cw {
                    turn_angle(nv, v, pv)
                } else {
                    turn_angle(pv, v, nv)
                }
            })
            .collect()
    }

    /// Does any pair of non-adjacent edges cross? Triangles cannot.
    pub fn is_self_intersecting(&self) -> bool {
        let len = self.vertices.len();
        if len < 4 {
            return false;
        }
        self.cache
            .self_intersecting
            .get_or_compute(self.fingerprint(), || {
                let v = &self.vertices;
                let crossing = |p1: Point, q1: Point, p2: Point, q2: Point| {
                    orientation(p1, q1, p2) != orientation(p1, q1, q2)
                        && orientation(q2, p2, q1) != orientation(q2, p2, p1)
                };
                for i in 0..len - 2 {
                    let a = v[i];
                    let b = v[self.next(i)];
                    let stop = self.prev(i);
                    let mut j = (i + 2) % len;
                    while j < len && j != stop {
                        if crossing(a, b, v[j], v[self.next(j)]) {
                            return true;
                        }
                        j += 1;
                    }
                }
                false
            })
    }

    /// Every interior angle at most a half turn. Triangles always are.
    pub fn is_convex(&self) -> bool {
        let len = self.vertices.len();
        if len < 4 {
            return true;
        }
        self.cache.convex.get_or_compute(self.fingerprint(), || {
            let cw = self.orientation() == Orientation::Clockwise;
            for i in 0..len {
                let p0 = self.vertices[i];
                let p1 = self.vertices[(i + 1) % len];
                let p2 = self.vertices[(i + 2) % len];
                let angle = if cw {
                    turn_angle(p2, p1, p0)
                } else {
                    turn_angle(p0, p1, p2)
                };
                if angle.positive() > Angle::PI {
                    return false;
                }
            }
            true
        })
    }

    /// Ray-cast parity test. Boundary points are not reliably inside.
    pub fn is_internal(&self, point: Point) -> bool {
        let mut c = false;
        for i in 0..self.vertices.len() {
            let v = self.vertices[i];
            let vn = self.vertices[self.next(i)];
            if ((v.y > point.y) != (vn.y > point.y))
                && (point.x < (vn.x - v.x) * (point.y - v.y) / (vn.y - v.y) + v.x)
            {
                c = !c;
            }
        }
        c
    }

    /// All of `points` strictly inside the polygon, bounding-box
    /// prefiltered, parity state advanced edge by edge over the batch.
    pub fn filter_internal(&self, points: &[Point]) -> Vec<Point> {
        let bbox = match self.bounding_box() {
            Some(b) => b,
            None => return Vec::new(),
        };
        let mut tests: Vec<(Point, bool)> = points
            .iter()
            .copied()
            .filter(|p| bbox.contains_point(*p))
            .map(|p| (p, false))
            .collect();
        if tests.is_empty() {
            return Vec::new();
        }
        for i in 0..self.vertices.len() {
            let v = self.vertices[i];
            let vn = self.vertices[self.next(i)];
            for (p, c) in tests.iter_mut() {
                if ((v.y > p.y) != (vn.y > p.y))
                    && (p.x < (vn.x - v.x) * (p.y - v.y) / (vn.y - v.y) + v.x)
                {
                    *c = !*c;
                }
            }
        }
        tests.into_iter().filter(|t| t.1).map(|t| t.0).collect()
    }

    /// Split into triangles: a fan for convex polygons, ear cutting for
    /// concave ones. A triangle returns itself.
    ///
    /// Ear cutting on a degenerate boundary can stall; the remaining
    /// region is then emitted as one final (non-triangle) polygon.
    pub fn triangulate(&self) -> Vec<Polygon> {
        if self.vertices.len() < 4 {
            return vec![self.clone()];
        }
        self.cache.triangles.get_or_compute(self.fingerprint(), || {
            let mut triangles = Vec::with_capacity(self.vertices.len() - 2);
            let mut stack = self.vertices.clone();
            if self.is_convex() {
                let p0 = stack.pop();
                let p1 = stack.pop();
                if let (Some(p0), Some(mut p1)) = (p0, p1) {
                    while let Some(p2) = stack.pop() {
                        triangles.push(Polygon::from_vertices_unchecked(vec![p0, p1, p2]));
                        p1 = p2;
                    }
                }
            } else {
                if self.orientation() == Orientation::Clockwise {
                    stack.reverse();
                }
                while stack.len() > 3 {
                    match find_ear(&stack) {
                        Some((index, triangle)) => {
                            stack.remove(index);
                            triangles.push(triangle);
                        }
                        None => {
                            log::warn!(
                                "ear cutting stalled with {} vertices left; emitting remainder",
                                stack.len()
                            );
                            break;
                        }
                    }
                }
                triangles.push(Polygon::from_vertices_unchecked(stack));
            }
            triangles
        })
    }

    /// Drop vertices collinear with their neighbors.
    pub fn cleaned(&self) -> Polygon {
        if self.vertices.len() <= 3 {
            return self.clone();
        }
        Polygon::from_vertices_unchecked(cleaned_vertices(&self.vertices))
    }

    pub fn clean_mut(&mut self) -> &mut Self {
        if self.vertices.len() > 3 {
            self.vertices = cleaned_vertices(&self.vertices);
        }
        self
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.cache
            .bbox
            .get_or_compute(self.fingerprint(), || BoundingBox::from_points(&self.vertices))
    }

    pub fn translated(&self, delta: Vec2<f64>) -> Polygon {
        Polygon::from_vertices_unchecked(self.vertices.iter().map(|v| v + delta).collect())
    }

    pub fn translate_mut(&mut self, delta: Vec2<f64>) -> &mut Self {
        for v in &mut self.vertices {
            *v += delta;
        }
        self
    }

    /// Rotate around `anchor`, or around the centroid when `None`.
    /// A polygon without a centroid is returned unchanged.
    pub fn rotated(&self, angle: Angle, anchor: Option<Point>) -> Polygon {
        let por = match anchor.or_else(|| self.centroid()) {
            Some(p) => p,
            None => return self.clone(),
        };
        Polygon::from_vertices_unchecked(
            self.vertices
                .iter()
                .map(|v| por + rotated(v - por, angle))
                .collect(),
        )
    }

    pub fn rotate_mut(&mut self, angle: Angle, anchor: Option<Point>) -> &mut Self {
        if let Some(por) = anchor.or_else(|| self.centroid()) {
            for v in &mut self.vertices {
                *v = por + rotated(*v - por, angle);
            }
        }
        self
    }

    /// Reflect across the axis line.
    pub fn mirrored(&self, axis: &Line) -> Polygon {
        Polygon::from_vertices_unchecked(
            self.vertices
                .iter()
                .map(|v| mirror_point(*v, axis))
                .collect(),
        )
    }

    pub fn mirror_mut(&mut self, axis: &Line) -> &mut Self {
        for v in &mut self.vertices {
            *v = mirror_point(*v, axis);
        }
        self
    }

    /// Scale about the centroid. A polygon without a centroid is
    /// returned unchanged.
    pub fn scaled(&self, factor: f64) -> Polygon {
        let center = match self.centroid() {
            Some(c) => c,
            None => return self.clone(),
        };
        Polygon::from_vertices_unchecked(
            self.vertices
                .iter()
                .map(|v| center + (v - center) * factor)
                .collect(),
        )
    }

    pub fn scale_mut(&mut self, factor: f64) -> &mut Self {
        if let Some(center) = self.centroid() {
            for v in &mut self.vertices {
                *v = center + (*v - center) * factor;
            }
        }
        self
    }

    /// Translate so the centroid lands on `point`. A polygon without a
    /// centroid is returned unchanged.
    pub fn center_at(&self, point: Point) -> Polygon {
        match self.centroid() {
            Some(cp) => self.translated(point - cp),
            None => self.clone(),
        }
    }

    pub fn center_at_mut(&mut self, point: Point) -> &mut Self {
        if let Some(cp) = self.centroid() {
            self.translate_mut(point - cp);
        }
        self
    }
}

fn mirror_point(v: Point, axis: &Line) -> Point {
    let pv = v - axis.point();
    let proj = axis.dir() * pv.dot(&axis.dir());
    let mv = proj - pv;
    v + 2.0 * mv
}

fn cleaned_vertices(vertices: &[Point]) -> Vec<Point> {
    let mut verts = vertices.to_vec();
    let mut i = 1;
    let mut p = 0;
    let mut n = 2;
    while i < verts.len() {
        if n == verts.len() {
            n = 0;
        }
        let v1 = verts[i] - verts[p];
        let v2 = verts[n] - verts[i];
        if approx_zero(cross(v1, v2)) {
            verts.remove(i);
        } else {
            p = i;
            i += 1;
            n = i + 1;
        }
    }
    verts
}

/// Find a CCW vertex whose triangle with its neighbors contains no
/// other vertex of the chain.
fn find_ear(vertices: &[Point]) -> Option<(usize, Polygon)> {
    let len = vertices.len();
    if len < 4 {
        return None;
    }
    let next = |i: usize| (i + 1) % len;
    let prev = |i: usize| (i + len - 1) % len;

    for i in 0..len {
        let v0 = vertices[prev(i)];
        let v1 = vertices[i];
        let v2 = vertices[next(i)];

        let angle = turn_angle(v0, v1, v2);
        if angle.positive() < Angle::PI {
            let candidate = Polygon::from_vertices_unchecked(vec![v0, v1, v2]);
            let mut is_ear = true;
            let mut j = next((i + 1) % len);
            while j != prev(i) {
                if candidate.is_internal(vertices[j]) {
                    is_ear = false;
                    break;
                }
                j = next(j);
            }
            if is_ear {
                return Some((i, candidate));
            }
        }
    }
    None
}
