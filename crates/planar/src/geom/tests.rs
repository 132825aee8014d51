use std::f64::consts::PI;

use nalgebra::vector;

use super::*;
use crate::shapes::{Circle, Ellipse, Line, Polygon, Segment};
use crate::Point;

#[test]
fn bounding_boxes_for_all_shapes() {
    let ls = Segment::new(vector![2.0, 1.0], vector![5.0, 7.0]).unwrap();
    assert_eq!(
        ls.bounding_box(),
        BoundingBox {
            x1: 2.0,
            y1: 1.0,
            x2: 5.0,
            y2: 7.0
        }
    );

    let el = Ellipse::new(vector![-2.0, -4.0], 8.0, 5.0).unwrap();
    assert_eq!(
        el.bounding_box(),
        BoundingBox {
            x1: -10.0,
            y1: -9.0,
            x2: 6.0,
            y2: 1.0
        }
    );

    let cl = Circle::new(vector![2.0, -4.0], 6.0).unwrap();
    assert_eq!(
        cl.bounding_box(),
        BoundingBox {
            x1: -4.0,
            y1: -10.0,
            x2: 8.0,
            y2: 2.0
        }
    );

    let rect = Polygon::rectangle(2.0, 2.0, 10.0, 8.0);
    assert_eq!(
        rect.bounding_box(),
        Some(BoundingBox {
            x1: 2.0,
            y1: -6.0,
            x2: 12.0,
            y2: 2.0
        })
    );

    let oct = Polygon::equilateral(8, 4.0, Point::zeros(), None).unwrap();
    assert_eq!(oct.vertices().len(), 8);
    let bb = oct.bounding_box().unwrap();
    assert!(approx_eq(bb.x1, -4.0) && approx_eq(bb.y1, -4.0));
    assert!(approx_eq(bb.x2, 4.0) && approx_eq(bb.y2, 4.0));
}

#[test]
fn box_overlap_and_containment() {
    let box1 = BoundingBox {
        x1: 2.0,
        y1: 2.0,
        x2: 4.0,
        y2: 4.0,
    };
    let box2 = BoundingBox {
        x1: 1.0,
        y1: 1.0,
        x2: 5.0,
        y2: 5.0,
    };
    let box3 = BoundingBox {
        x1: 4.0,
        y1: 2.0,
        x2: 8.0,
        y2: 4.0,
    };

    assert!(box1.overlaps(&box1));
    assert!(box1.overlaps(&box2));
    assert!(box2.overlaps(&box1));

    assert!(!box1.contains_point(vector![0.0, 0.0]));
    assert!(box1.contains_point(vector![2.0, 2.0]));
    assert!(box1.contains_point(vector![4.0, 4.0]));
    assert!(!box1.contains_point(vector![5.0, 5.0]));

    // Boxes touching at an edge do not overlap.
    assert!(!box1.overlaps(&box3));
    assert!(box2.overlaps(&box3));
}

#[test]
fn box_against_lines_and_segments() {
    let box1 = BoundingBox {
        x1: 2.0,
        y1: 2.0,
        x2: 4.0,
        y2: 4.0,
    };
    let box2 = BoundingBox {
        x1: 1.0,
        y1: 1.0,
        x2: 5.0,
        y2: 5.0,
    };
    let box3 = BoundingBox {
        x1: 4.0,
        y1: 2.0,
        x2: 8.0,
        y2: 4.0,
    };

    let l1 = Line::new(vector![1.0, 0.0], vector![0.0, 1.5]).unwrap();
    let l2 = Line::new(vector![1.0, 1.0], vector![0.0, 0.0]).unwrap();

    assert!(!box1.intersects_line(&l1));
    assert!(box2.intersects_line(&l1));
    assert!(!box3.intersects_line(&l1));

    assert!(box1.intersects_line(&l2));
    assert!(box2.intersects_line(&l2));
    assert!(box3.intersects_line(&l2));

    let s1 = Segment::new(vector![1.0, 1.0], vector![2.0, 2.0]).unwrap();
    let s2 = Segment::new(vector![1.0, 1.0], vector![8.0, 4.0]).unwrap();

    assert!(!box1.intersects_segment(&s1));
    assert!(box2.intersects_segment(&s1));
    assert!(!box3.intersects_segment(&s1));

    assert!(box1.intersects_segment(&s2));
    assert!(box2.intersects_segment(&s2));
    assert!(box3.intersects_segment(&s2));
}

#[test]
fn orientation_predicate() {
    let p = vector![0.0, 0.0];
    let q = vector![1.0, 0.0];
    assert_eq!(
        orientation(p, q, vector![2.0, 0.0]),
        Orientation::Collinear
    );
    assert_eq!(
        orientation(p, q, vector![1.0, 1.0]),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(p, q, vector![1.0, -1.0]),
        Orientation::Clockwise
    );
}

#[test]
fn ccw_ordering_around_centroid() {
    let mut pts = vec![
        vector![1.0, 0.0],
        vector![0.0, -1.0],
        vector![-1.0, 0.0],
        vector![0.0, 1.0],
    ];
    order_ccw(&mut pts);
    // Consecutive triples must all turn the same way.
    let n = pts.len();
    for i in 0..n {
        let o = orientation(pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
        assert_eq!(o, Orientation::CounterClockwise);
    }
}

#[test]
fn quadratic_roots() {
    // (x - 1)(x - 3) = x^2 - 4x + 3
    let (r1, r2) = Quadratic::new(1.0, -4.0, 3.0).roots().unwrap();
    assert!(approx_eq(r1, 1.0) && approx_eq(r2, 3.0));

    // Tangency: double root.
    let (r1, r2) = Quadratic::new(1.0, -2.0, 1.0).roots().unwrap();
    assert!(approx_eq(r1, r2));

    assert!(Quadratic::new(1.0, 0.0, 1.0).roots().is_none());
}

#[test]
fn angle_wrapping() {
    assert!(approx_eq(Angle::new(3.0 * PI).normalized().radians(), PI));
    assert!(approx_eq(Angle::new(-PI).normalized().radians(), PI));
    assert!(approx_eq(Angle::new(-Angle::SPI).positive(), 1.5 * PI));
    assert!(approx_eq(Angle::from_degrees(90.0).radians(), Angle::SPI));
}

#[test]
fn angle_between_vectors() {
    let a = angle_between(vector![1.0, 0.0], vector![0.0, 1.0]);
    assert!(approx_eq(a.radians(), Angle::SPI));
    let b = angle_between(vector![1.0, 0.0], vector![0.0, -1.0]);
    assert!(approx_eq(b.radians(), -Angle::SPI));
}
