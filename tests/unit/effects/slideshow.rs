use super::*;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "got {a}, expected {b}");
}

#[test]
fn empty_or_degenerate_inputs_yield_nothing() {
    assert_eq!(blend_at(0, DEFAULT_HOLD_FRAMES, 0), None);
    assert_eq!(blend_at(0, DEFAULT_HOLD_FRAMES, 999), None);
    assert_eq!(blend_at(3, 0, 10), None);
}

#[test]
fn holds_current_image_before_the_window() {
    // Two images, 120-frame hold: fade window opens after frame 30.
    let b = blend_at(2, 120, 0).unwrap();
    assert_eq!(b.current.index, 0);
    approx(b.current.opacity, 1.0);
    assert_eq!(b.next, None);

    // Window boundary is strict: frame 30 still shows only the current.
    let b = blend_at(2, 120, 30).unwrap();
    approx(b.current.opacity, 1.0);
    assert_eq!(b.next, None);

    let b = blend_at(2, 120, 31).unwrap();
    let next = b.next.unwrap();
    assert_eq!(next.index, 1);
    approx(next.opacity, 1.0 / 90.0);
    approx(b.current.opacity, 1.0 - 1.0 / 90.0);
}

#[test]
fn deep_crossfade_one_frame_before_advance() {
    let b = blend_at(2, 120, 119).unwrap();
    assert_eq!(b.current.index, 0);
    approx(b.current.opacity, 1.0 / 90.0);
    let next = b.next.unwrap();
    assert_eq!(next.index, 1);
    approx(next.opacity, 89.0 / 90.0);
}

#[test]
fn index_advances_at_hold_boundary() {
    let b = blend_at(2, 120, 120).unwrap();
    assert_eq!(b.current.index, 1);
    approx(b.current.opacity, 1.0);
    assert_eq!(b.next, None);

    // The second image fades back to the first at the cycle's end.
    let b = blend_at(2, 120, 239).unwrap();
    assert_eq!(b.current.index, 1);
    assert_eq!(b.next.unwrap().index, 0);
}

#[test]
fn cycle_repeats_at_total_duration() {
    let total = 2 * 120;
    for probe in [0u64, 17, 31, 119] {
        assert_eq!(blend_at(2, 120, probe), blend_at(2, 120, probe + total));
        assert_eq!(blend_at(2, 120, probe), blend_at(2, 120, probe + 10 * total));
    }
}

#[test]
fn short_hold_blends_permanently() {
    // Hold shorter than the fixed 90-frame window: the fade window covers
    // the whole hold, so some next layer is always present.
    for frame in 0..240u64 {
        let b = blend_at(2, 60, frame).unwrap();
        let next = b.next.expect("overlapping transition always blending");
        assert!(b.current.opacity < 1.0);
        assert!((0.0..=1.0).contains(&next.opacity));
        assert!((0.0..=1.0).contains(&b.current.opacity));
    }

    // At frame 0 of a 60-frame hold the fade is already one third in.
    let b = blend_at(2, 60, 0).unwrap();
    approx(b.current.opacity, 2.0 / 3.0);
    approx(b.next.unwrap().opacity, 1.0 / 3.0);
}

#[test]
fn single_image_fades_into_itself() {
    // Preserved quirk: with one image the "next" index wraps to itself.
    let b = blend_at(1, 120, 100).unwrap();
    assert_eq!(b.current.index, 0);
    let next = b.next.unwrap();
    assert_eq!(next.index, 0);
    approx(b.current.opacity + next.opacity, 1.0);
}
