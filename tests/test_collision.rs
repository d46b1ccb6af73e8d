use proptest::prelude::*;
use star_defender::collision::{overlaps, Rect};

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

#[test]
fn overlapping_rects_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn contained_rect_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!overlaps(&a, &Rect::new(10.0, 10.0, 5.0, 5.0)));
}

#[test]
fn centered_matches_corner_form() {
    assert_eq!(Rect::centered(5.0, 5.0, 5.0, 2.0), Rect::new(0.0, 3.0, 10.0, 4.0));
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn disjoint_on_x_never_collides(a in rect(), b in rect(), gap in 0.0f32..50.0) {
        let right = Rect::new(a.x + a.w + gap, b.y, b.w, b.h);
        prop_assert!(!overlaps(&a, &right));
    }

    #[test]
    fn disjoint_on_y_never_collides(a in rect(), b in rect(), gap in 0.0f32..50.0) {
        let below = Rect::new(b.x, a.y + a.h + gap, b.w, b.h);
        prop_assert!(!overlaps(&a, &below));
    }

    #[test]
    fn rect_overlaps_itself(a in rect()) {
        prop_assert!(overlaps(&a, &a));
    }
}
