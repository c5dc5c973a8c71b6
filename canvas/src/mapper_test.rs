#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn metrics(left: f64, top: f64, w: f64, h: f64, backing_w: u32, backing_h: u32) -> ElementMetrics {
    ElementMetrics {
        rect: ElementRect::new(left, top, w, h),
        backing: BackingSize { width: backing_w, height: backing_h },
    }
}

fn mouse(x: f64, y: f64) -> PointerInput {
    PointerInput::Mouse(ClientPoint::new(x, y))
}

// --- one-to-one ---

#[test]
fn identity_scale_subtracts_origin() {
    let m = metrics(10.0, 20.0, 300.0, 150.0, 300, 150);
    let s = map_input(&mouse(110.0, 70.0), Some(&m));
    assert_eq!(s.kind, PointerKind::Mouse);
    assert!(point_approx_eq(s.point, Point::new(100.0, 50.0)));
}

#[test]
fn top_left_corner_maps_to_origin() {
    let m = metrics(42.5, 17.25, 300.0, 150.0, 300, 150);
    let s = map_input(&mouse(42.5, 17.25), Some(&m));
    assert!(point_approx_eq(s.point, Point::ORIGIN));
}

// --- scaled display ---

#[test]
fn css_downscale_is_compensated() {
    // Backing 600x300 shown at 300x150: each CSS pixel covers two raster pixels.
    let m = metrics(0.0, 0.0, 300.0, 150.0, 600, 300);
    let s = map_input(&mouse(150.0, 75.0), Some(&m));
    assert!(point_approx_eq(s.point, Point::new(300.0, 150.0)));
}

#[test]
fn axes_scale_independently() {
    let m = metrics(5.0, 5.0, 100.0, 400.0, 200, 100);
    let s = map_input(&mouse(55.0, 205.0), Some(&m));
    assert!(point_approx_eq(s.point, Point::new(100.0, 50.0)));
}

#[test]
fn general_formula_holds() {
    let (ox, oy, w, h) = (13.0, 7.0, 321.0, 123.0);
    let (bw, bh) = (640_u32, 480_u32);
    let (px, py) = (200.0, 99.0);
    let m = metrics(ox, oy, w, h, bw, bh);
    let s = map_input(&mouse(px, py), Some(&m));
    let expected = Point::new((px - ox) * f64::from(bw) / w, (py - oy) * f64::from(bh) / h);
    assert!(point_approx_eq(s.point, expected));
}

#[test]
fn points_outside_the_box_are_not_clamped() {
    let m = metrics(100.0, 100.0, 50.0, 50.0, 50, 50);
    let s = map_input(&mouse(90.0, 160.0), Some(&m));
    assert!(point_approx_eq(s.point, Point::new(-10.0, 60.0)));
}

// --- touch ---

#[test]
fn touch_uses_first_touch_only() {
    let m = metrics(0.0, 0.0, 100.0, 100.0, 100, 100);
    let input = PointerInput::Touch {
        touches: vec![ClientPoint::new(10.0, 20.0), ClientPoint::new(80.0, 90.0)],
    };
    let s = map_input(&input, Some(&m));
    assert_eq!(s.kind, PointerKind::Touch);
    assert!(point_approx_eq(s.point, Point::new(10.0, 20.0)));
}

#[test]
fn touch_without_touches_maps_to_origin() {
    let m = metrics(0.0, 0.0, 100.0, 100.0, 100, 100);
    let s = map_input(&PointerInput::Touch { touches: Vec::new() }, Some(&m));
    assert_eq!(s.kind, PointerKind::Touch);
    assert_eq!(s.point, Point::ORIGIN);
}

// --- not ready ---

#[test]
fn unmounted_element_maps_to_origin() {
    let s = map_input(&mouse(123.0, 456.0), None);
    assert_eq!(s.kind, PointerKind::Mouse);
    assert_eq!(s.point, Point::ORIGIN);
}

#[test]
fn zero_sized_rect_maps_to_origin() {
    let m = metrics(0.0, 0.0, 0.0, 100.0, 100, 100);
    assert_eq!(map_input(&mouse(50.0, 50.0), Some(&m)).point, Point::ORIGIN);
}

#[test]
fn non_finite_rect_maps_to_origin() {
    let m = metrics(f64::NAN, 0.0, 100.0, 100.0, 100, 100);
    assert_eq!(map_input(&mouse(50.0, 50.0), Some(&m)).point, Point::ORIGIN);
}

#[test]
fn rect_measurability() {
    assert!(ElementRect::new(0.0, 0.0, 1.0, 1.0).is_measurable());
    assert!(!ElementRect::new(0.0, 0.0, -1.0, 1.0).is_measurable());
    assert!(!ElementRect::new(0.0, 0.0, f64::INFINITY, 1.0).is_measurable());
}

// --- serde shape used by recorded scripts ---

#[test]
fn pointer_input_deserializes_tagged_shapes() {
    let m: PointerInput = serde_json::from_str(r#"{"kind":"mouse","x":1.5,"y":2}"#).expect("mouse");
    assert_eq!(m, mouse(1.5, 2.0));
    let t: PointerInput =
        serde_json::from_str(r#"{"kind":"touch","touches":[{"x":3,"y":4}]}"#).expect("touch");
    assert_eq!(t, PointerInput::Touch { touches: vec![ClientPoint::new(3.0, 4.0)] });
}
