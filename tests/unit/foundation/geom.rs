use super::*;

fn samples() -> Vec<Rect> {
    vec![
        Rect::new(0, 0, 10, 10),
        Rect::new(5, 5, 10, 10),
        Rect::new(10, 0, 4, 4),
        Rect::new(-3, -3, 6, 6),
        Rect::new(2, 2, 0, 5),
        Rect::new(1, 1, -4, 3),
        Rect::new(0, 440, 640, 60),
        Rect::new(0, 456, 640, 24),
    ]
}

#[test]
fn intersect_is_commutative_including_empty() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.intersect(b), b.intersect(a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn intersect_with_self_is_identity() {
    for a in samples().into_iter().filter(|r| !r.is_empty()) {
        assert_eq!(a.intersect(a), Some(a));
    }
}

#[test]
fn disjoint_and_edge_touching_rects_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert_eq!(a.intersect(Rect::new(20, 20, 5, 5)), None);
    // Shares only the x = 10 edge.
    assert_eq!(a.intersect(Rect::new(10, 0, 4, 4)), None);
}

#[test]
fn intersect_takes_max_origin_and_min_far_edge() {
    let a = Rect::new(0, 440, 640, 60);
    let above_band = Rect::new(0, 0, 640, 456);
    assert_eq!(a.intersect(above_band), Some(Rect::new(0, 440, 640, 16)));

    let b = Rect::new(-3, -3, 6, 6);
    assert_eq!(
        b.intersect(Rect::new(0, 0, 10, 10)),
        Some(Rect::new(0, 0, 3, 3))
    );
}

#[test]
fn contains_uses_exclusive_far_edges() {
    let r = Rect::new(3, 459, 57, 21);
    assert!(r.contains(3, 459));
    assert!(r.contains(59, 479));
    assert!(!r.contains(60, 470));
    assert!(!r.contains(10, 480));
    assert!(!Rect::new(0, 0, 0, 0).contains(0, 0));
}

#[test]
fn area_is_zero_for_degenerate_rects() {
    assert_eq!(Rect::new(0, 0, 4, 5).area(), 20);
    assert_eq!(Rect::new(0, 0, -4, 5).area(), 0);
}

#[test]
fn translate_keeps_extent() {
    let r = Rect::new(40, 30, 240, 160).translate(24, -6);
    assert_eq!(r, Rect::new(64, 24, 240, 160));
}

#[test]
fn translate_saturates_at_the_coordinate_limits() {
    let r = Rect::new(i32::MAX - 1, i32::MIN + 1, 5, 5).translate(10, -10);
    assert_eq!(r, Rect::new(i32::MAX, i32::MIN, 5, 5));
}
