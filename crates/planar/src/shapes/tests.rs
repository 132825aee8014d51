use std::f64::consts::PI;

use nalgebra::vector;
use proptest::prelude::*;

use crate::geom::{approx_eq, points_approx_eq, Angle, Orientation};
use crate::shapes::{Circle, Ellipse, Line, Polygon, Ray, Segment};
use crate::{Error, Point};

#[test]
fn segment_point_membership() {
    let p1 = vector![1.0, 1.0];
    let p2 = vector![4.0, -3.0];
    let ls = Segment::new(p1, p2).unwrap();
    let v = ls.to_vector();
    let p3 = p1 + v * 0.5;
    let p4 = p1 + v * 1.01;
    let p5 = p2 - v * 1.01;
    assert!(ls.point_on(p1));
    assert!(ls.point_on(p2));
    assert!(ls.point_on(p3));
    assert!(!ls.point_on(p4));
    assert!(!ls.point_on(p5));
    assert!(!ls.point_on(vector![0.0, 0.0]));
    assert!(ls.point_on(vector![2.5, -1.0]));
}

#[test]
fn segment_construction_rejects_degenerate() {
    assert_eq!(
        Segment::new(vector![1.0, 1.0], vector![1.0, 1.0]),
        Err(Error::DegenerateSegment)
    );
    assert_eq!(
        Segment::new(vector![f64::NAN, 1.0], vector![1.0, 1.0]),
        Err(Error::NonFiniteCoordinate)
    );
}

#[test]
fn segment_orientation_normalization() {
    let s = Segment::new(vector![4.0, 1.0], vector![1.0, 2.0]).unwrap();
    let n = s.oriented_ltr();
    assert_eq!(n.p1, vector![1.0, 2.0]);
    assert_eq!(n.p2, vector![4.0, 1.0]);

    let v = Segment::new(vector![2.0, 5.0], vector![2.0, 1.0]).unwrap();
    let nv = v.oriented_ltr();
    assert!(nv.p1.y < nv.p2.y);

    assert!(s.coincides_undirected(&s.reversed()));
    assert!(!s.coincides(&s.reversed()));
}

#[test]
fn line_point_membership() {
    let p1 = vector![1.0, 1.0];
    let p2 = vector![4.0, -3.0];
    let l = Line::from_points(p1, p2).unwrap();
    assert!(l.point_on(p1));
    assert!(l.point_on(p2));
    assert!(!l.point_on(vector![0.0, 0.0]));
    assert!(l.point_on(vector![2.5, -1.0]));
}

#[test]
fn line_slope_intercept_and_queries() {
    let l = Line::from_points(vector![1.0, 1.0], vector![4.0, -3.0]).unwrap();
    assert!(approx_eq(l.slope().unwrap(), -4.0 / 3.0));
    assert!(approx_eq(l.y_intercept().unwrap(), 7.0 / 3.0));
    assert!(approx_eq(l.y_at(2.5).unwrap(), -1.0));
    assert!(approx_eq(l.x_at(-1.0).unwrap(), 2.5));

    let vertical = Line::from_points(vector![2.0, 0.0], vector![2.0, 5.0]).unwrap();
    assert_eq!(vertical.slope(), None);
    assert_eq!(vertical.y_intercept(), None);
    assert_eq!(vertical.y_at(3.0), None);
    assert!(approx_eq(vertical.x_at(17.0).unwrap(), 2.0));

    assert!(matches!(
        Line::new(vector![0.0, 0.0], vector![1.0, 1.0]),
        Err(Error::ZeroDirection)
    ));
}

#[test]
fn line_from_slope_intercept_round_trips() {
    let l = Line::from_slope_intercept(2.0, -1.0).unwrap();
    assert!(approx_eq(l.slope().unwrap(), 2.0));
    assert!(approx_eq(l.y_intercept().unwrap(), -1.0));
    assert!(l.point_on(vector![3.0, 5.0]));
}

#[test]
fn ray_rejects_points_behind_origin() {
    let r = Ray::new(vector![1.0, 1.0], vector![1.0, 1.0]).unwrap();
    assert!(!r.is_behind(vector![3.0, 3.0]));
    assert!(r.is_behind(vector![0.0, 0.0]));
    assert!(approx_eq(r.y_at(3.0).unwrap(), 3.0));
    assert_eq!(r.y_at(0.0), None);

    let horizontal = Ray::new(vector![1.0, 0.0], vector![2.0, 5.0]).unwrap();
    assert!(approx_eq(horizontal.x_at(5.0).unwrap(), 2.0));
    assert_eq!(horizontal.x_at(4.0), None);
}

#[test]
fn circle_geometry() {
    let c = Circle::new(vector![2.0, -4.0], 6.0).unwrap();
    assert!(approx_eq(c.diameter(), 12.0));
    assert!(approx_eq(c.area(), 36.0 * PI));
    assert!(approx_eq(c.perimeter(), 12.0 * PI));
    assert!(c.is_internal(vector![2.0, -4.0]));
    // Boundary is not internal.
    assert!(!c.is_internal(vector![8.0, -4.0]));
    let p = c.point_at_angle(Angle::new(0.0));
    assert!(points_approx_eq(p, vector![8.0, -4.0]));

    assert_eq!(Circle::new(vector![0.0, 0.0], 0.0), Err(Error::InvalidRadius));
    assert_eq!(
        Circle::new(vector![0.0, 0.0], -1.0),
        Err(Error::InvalidRadius)
    );
}

#[test]
fn circle_tangents_from_external_point() {
    let c = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
    let tangents = c.tangents_from_point(vector![2.0, 0.0]).unwrap();
    assert_eq!(tangents.len(), 2);
    let expected_y = 3.0_f64.sqrt() / 2.0;
    for t in &tangents {
        assert!(approx_eq(t.x, 0.5));
        assert!(approx_eq(t.y.abs(), expected_y));
    }
    // Inside: no tangents. On the circle: the point itself.
    assert!(c.tangents_from_point(vector![0.5, 0.0]).is_none());
    let on = c.tangents_from_point(vector![1.0, 0.0]).unwrap();
    assert_eq!(on.len(), 1);
}

#[test]
fn circle_tangents_between_circles() {
    let a = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
    let b = Circle::new(vector![6.0, 0.0], 1.0).unwrap();
    // Equal radii: exterior tangents parallel to the center line.
    let ext = a.exterior_tangents(&b).unwrap();
    assert_eq!(ext.len(), 2);
    for t in &ext {
        assert!(approx_eq(t.p1.y.abs(), 1.0));
        assert!(approx_eq(t.p1.y, t.p2.y));
    }
    let int = a.interior_tangents(&b).unwrap();
    assert_eq!(int.len(), 2);

    let big = Circle::new(vector![3.0, 0.0], 2.0).unwrap();
    let ext2 = a.exterior_tangents(&big).unwrap();
    assert_eq!(ext2.len(), 2);

    // Overlapping circles have no interior tangents.
    let close = Circle::new(vector![1.0, 0.0], 1.0).unwrap();
    assert!(a.interior_tangents(&close).is_none());
}

#[test]
fn circle_polygon_approximations() {
    let c = Circle::new(vector![2.0, 4.0], 8.0).unwrap();
    let inscribed = c.inscribe(3);
    assert_eq!(inscribed.vertices().len(), 24);
    for v in inscribed.vertices() {
        assert!(approx_eq((v - c.center).norm(), c.radius));
    }
    let escribed = c.escribe(3);
    assert_eq!(escribed.vertices().len(), 24);
    // Escribed vertices lie outside the circle, inscribed inside.
    for v in escribed.vertices() {
        assert!((v - c.center).norm() > c.radius);
    }
    assert!(inscribed.area().unwrap() < c.area());
    assert!(escribed.area().unwrap() > c.area());
}

#[test]
fn ellipse_geometry() {
    let e = Ellipse::new(vector![-2.0, -4.0], 8.0, 5.0).unwrap();
    assert!(approx_eq(e.major_semi_axis(), 8.0));
    assert!(approx_eq(e.minor_semi_axis(), 5.0));
    assert!(approx_eq(e.area(), 40.0 * PI));
    assert!(e.is_internal(vector![-2.0, -4.0]));
    assert!(!e.is_internal(vector![6.0, -4.0]));

    let right = e.point_at_angle(Angle::new(0.0));
    assert!(points_approx_eq(right, vector![6.0, -4.0]));
    let top = e.point_at_angle(Angle::new(Angle::SPI));
    assert!(points_approx_eq(top, vector![-2.0, 1.0]));
    let left = e.point_at_angle(Angle::new(PI));
    assert!(points_approx_eq(left, vector![-10.0, -4.0]));

    // Tangent and normal are orthogonal unit vectors.
    let a = Angle::new(0.7);
    let t = e.tangent_at_angle(a);
    let n = e.normal_at_angle(a);
    assert!(approx_eq(t.norm(), 1.0));
    assert!(approx_eq(n.norm(), 1.0));
    assert!(approx_eq(t.dot(&n), 0.0));
}

#[test]
fn ellipse_polygon_approximations() {
    let e = Ellipse::new(vector![-2.0, -4.0], 8.0, 5.0).unwrap();
    let inscribed = e.inscribe(3);
    assert_eq!(inscribed.vertices().len(), 32);
    for v in inscribed.vertices() {
        let dx = (v.x - e.center.x) / e.radius_x;
        let dy = (v.y - e.center.y) / e.radius_y;
        assert!(approx_eq(dx * dx + dy * dy, 1.0));
    }
    assert!(!inscribed.is_self_intersecting());
    assert!(inscribed.is_convex());

    let escribed = e.escribe(3);
    assert_eq!(escribed.vertices().len(), 32);
    for v in escribed.vertices() {
        let dx = (v.x - e.center.x) / e.radius_x;
        let dy = (v.y - e.center.y) / e.radius_y;
        assert!(dx * dx + dy * dy > 1.0);
    }
    assert!(inscribed.area().unwrap() < e.area());
    assert!(escribed.area().unwrap() > e.area());
}

#[test]
fn polygon_construction() {
    assert_eq!(
        Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]),
        Err(Error::InsufficientVertices(2))
    );
    let pentagon = Polygon::equilateral(5, 4.0, Point::zeros(), None).unwrap();
    assert_eq!(pentagon.vertices().len(), 5);
    // First vertex at the default start angle, straight up.
    assert!(points_approx_eq(pentagon.vertices()[0], vector![0.0, 4.0]));
    assert!(Polygon::equilateral(2, 1.0, Point::zeros(), None).is_err());
}

#[test]
fn polygon_area_centroid_orientation() {
    let rect = Polygon::rectangle(2.0, 2.0, 10.0, 8.0);
    assert!(approx_eq(rect.area().unwrap(), 80.0));
    assert!(approx_eq(rect.perimeter(), 36.0));
    assert!(points_approx_eq(rect.centroid().unwrap(), vector![7.0, -2.0]));
    // rectangle() winds CCW (top-left, down, right, up).
    assert_eq!(rect.orientation(), Orientation::CounterClockwise);
    assert!(rect.signed_area().unwrap() > 0.0);

    let cw = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 2.0],
        vector![2.0, 2.0],
        vector![2.0, 0.0],
    ])
    .unwrap();
    assert_eq!(cw.orientation(), Orientation::Clockwise);
    assert!(cw.signed_area().unwrap() < 0.0);
}

fn pentagram() -> Polygon {
    let pentagon = Polygon::equilateral(5, 4.0, Point::zeros(), None).unwrap();
    let v = pentagon.vertices();
    Polygon::new(vec![v[0], v[2], v[4], v[1], v[3]]).unwrap()
}

#[test]
fn self_intersection_detection() {
    let octagon = Polygon::equilateral(8, 4.0, Point::zeros(), None).unwrap();
    assert!(!octagon.is_self_intersecting());
    assert!(octagon.is_convex());

    let star = pentagram();
    assert!(star.is_self_intersecting());
    assert_eq!(star.signed_area(), None);
    assert_eq!(star.area(), None);
    assert_eq!(star.centroid(), None);

    let tri = Polygon::new(vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]])
        .unwrap();
    assert!(!tri.is_self_intersecting());
    assert!(tri.is_convex());
}

#[test]
fn point_containment_and_filtering() {
    let square = Polygon::rectangle(0.0, 4.0, 4.0, 4.0);
    assert!(square.is_internal(vector![2.0, 2.0]));
    assert!(!square.is_internal(vector![5.0, 2.0]));

    let inside = square.filter_internal(&[
        vector![1.0, 1.0],
        vector![3.0, 3.0],
        vector![-1.0, 2.0],
        vector![9.0, 9.0],
    ]);
    assert_eq!(inside.len(), 2);
}

#[test]
fn convex_triangulation_is_a_fan() {
    let octagon = Polygon::equilateral(8, 4.0, Point::zeros(), None).unwrap();
    let triangles = octagon.triangulate();
    assert_eq!(triangles.len(), 6);
    let total: f64 = triangles.iter().map(|t| t.area().unwrap()).sum();
    assert!(approx_eq(total, octagon.area().unwrap()));
}

#[test]
fn concave_triangulation_by_ear_cutting() {
    // Dart with a reflex vertex at (2, 1).
    let dart = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 1.0],
        vector![4.0, 0.0],
        vector![2.0, 4.0],
    ])
    .unwrap();
    assert!(!dart.is_convex());
    let triangles = dart.triangulate();
    assert_eq!(triangles.len(), 2);
    let total: f64 = triangles.iter().map(|t| t.area().unwrap()).sum();
    assert!(approx_eq(total, dart.area().unwrap()));
}

#[test]
fn triangle_triangulates_to_itself() {
    let tri = Polygon::new(vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]])
        .unwrap();
    let triangles = tri.triangulate();
    assert_eq!(triangles.len(), 1);
    assert_eq!(triangles[0], tri);
}

#[test]
fn clean_drops_collinear_vertices() {
    let padded = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![0.0, 1.0],
    ])
    .unwrap();
    let cleaned = padded.cleaned();
    assert_eq!(cleaned.vertices().len(), 4);
    assert!(approx_eq(cleaned.area().unwrap(), padded.area().unwrap()));
}

#[test]
fn transformations() {
    let square = Polygon::rectangle(0.0, 2.0, 2.0, 2.0);
    let c = square.centroid().unwrap();

    let moved = square.translated(vector![3.0, -1.0]);
    assert!(points_approx_eq(
        moved.centroid().unwrap(),
        c + vector![3.0, -1.0]
    ));

    // Quarter turn about the centroid maps the square onto itself.
    let turned = square.rotated(Angle::new(Angle::SPI), None);
    for v in turned.vertices() {
        assert!(square
            .vertices()
            .iter()
            .any(|u| points_approx_eq(*u, *v)));
    }

    let mirrored = square.mirrored(&Line::from_points(vector![0.0, 0.0], vector![1.0, 0.0]).unwrap());
    assert!(points_approx_eq(
        mirrored.centroid().unwrap(),
        vector![c.x, -c.y]
    ));

    let grown = square.scaled(2.0);
    assert!(approx_eq(grown.area().unwrap(), 4.0 * square.area().unwrap()));
    assert!(points_approx_eq(grown.centroid().unwrap(), c));

    let centered = square.center_at(vector![10.0, 10.0]);
    assert!(points_approx_eq(
        centered.centroid().unwrap(),
        vector![10.0, 10.0]
    ));

    // A polygon without a centroid passes through unchanged.
    let star = pentagram();
    assert_eq!(star.scaled(2.0), star);
    assert_eq!(star.rotated(Angle::new(1.0), None), star);
}

#[test]
fn mutation_invalidates_memoized_properties() {
    let mut square = Polygon::rectangle(0.0, 2.0, 2.0, 2.0);
    let before = square.bounding_box().unwrap();
    square.translate_mut(vector![5.0, 0.0]);
    let after = square.bounding_box().unwrap();
    assert!(approx_eq(after.x1, before.x1 + 5.0));
    assert!(approx_eq(after.x2, before.x2 + 5.0));
}

#[test]
fn angles_sum_for_convex_polygons() {
    let pentagon = Polygon::equilateral(5, 4.0, Point::zeros(), None).unwrap();
    let sum: f64 = pentagon.angles().iter().map(|a| a.positive()).sum();
    // Interior angles of a pentagon sum to 3π.
    assert!(approx_eq(sum, 3.0 * PI));
}

proptest! {
    #[test]
    fn point_on_segment_is_direction_invariant(
        x1 in -100.0..100.0f64,
        y1 in -100.0..100.0f64,
        dx in 0.1..50.0f64,
        dy in -50.0..50.0f64,
        t in 0.01..0.99f64,
    ) {
        let p1 = vector![x1, y1];
        let p2 = vector![x1 + dx, y1 + dy];
        let s = Segment::new(p1, p2).unwrap();
        let p = p1 + (p2 - p1) * t;
        prop_assert!(s.point_on(p));
        prop_assert!(s.reversed().point_on(p));
    }

    #[test]
    fn point_on_line_is_parameterization_invariant(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        dx in 0.1..50.0f64,
        dy in -50.0..50.0f64,
        t in -2.0..2.0f64,
        off in 0.001..1.0f64,
    ) {
        let a = vector![x, y];
        let b = vector![x + dx, y + dy];
        // The same carrier line from different point/direction pairs.
        let lines = [
            Line::from_points(a, b).unwrap(),
            Line::from_points(b, a).unwrap(),
            Line::from_points((a + b) / 2.0, b).unwrap(),
        ];
        let v = b - a;
        let on = a + v * t;
        let beside = on + vector![-v.y, v.x] / v.norm() * off;
        for l in &lines {
            prop_assert!(l.point_on(on));
            prop_assert!(!l.point_on(beside));
        }
    }
}
