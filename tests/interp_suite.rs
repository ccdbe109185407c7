use pyroglyph::interp::{bend_ctrl, gradient, lerp, quad_bezier, Ease, Spin, Spiral};
use pyroglyph::palette::{parse_hex, Rgb};

const ALL_EASES: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InExpo,
    Ease::OutExpo,
    Ease::InOutExpo,
];

fn close(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

// ── Easing ──────────────────────────────────────────────────────────────────

#[test]
fn easing_hits_both_endpoints() {
    for e in ALL_EASES {
        assert!(close(e.apply(0.0), 0.0, 1e-4), "{e:?} at t=0");
        assert!(close(e.apply(1.0), 1.0, 1e-4), "{e:?} at t=1");
    }
}

#[test]
fn easing_stays_in_unit_range_and_clamps_input() {
    for e in ALL_EASES {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = e.apply(t);
            assert!((0.0..=1.0).contains(&v), "{e:?} at {t} gave {v}");
        }
        assert_eq!(e.apply(-3.0), e.apply(0.0), "{e:?} below range");
        assert_eq!(e.apply(7.5), e.apply(1.0), "{e:?} above range");
    }
}

#[test]
fn easing_is_monotonic() {
    for e in ALL_EASES {
        let mut prev = e.apply(0.0);
        for i in 1..=200 {
            let v = e.apply(i as f32 / 200.0);
            assert!(v >= prev - 1e-5, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

// ── Gradient synthesis ─────────────────────────────────────────────────────

#[test]
fn gradient_black_to_white_over_four_steps() {
    let stops = [parse_hex("#000000").unwrap(), parse_hex("#ffffff").unwrap()];
    let g = gradient(&stops, 4);
    assert_eq!(g.len(), 5);
    assert_eq!(g[0], Rgb::BLACK);
    assert_eq!(g[4], Rgb::WHITE);
}

#[test]
fn gradient_endpoints_are_bit_exact_for_many_shapes() {
    let stops = [
        Rgb::new(10, 200, 30),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 0, 255),
    ];
    for steps in [1usize, 2, 3, 7, 16, 100] {
        let g = gradient(&stops, steps);
        assert_eq!(g.len(), steps + 1, "steps={steps}");
        assert_eq!(g[0], stops[0], "steps={steps}");
        assert_eq!(g[steps], stops[2], "steps={steps}");
    }
}

#[test]
fn gradient_single_stop_is_constant() {
    let g = gradient(&[Rgb::new(1, 2, 3)], 10);
    assert_eq!(g, vec![Rgb::new(1, 2, 3)]);
}

#[test]
fn gradient_empty_stops_defaults_to_white() {
    assert_eq!(gradient(&[], 8), vec![Rgb::WHITE]);
}

#[test]
fn gradient_zero_steps_keeps_first_stop() {
    let g = gradient(&[Rgb::BLACK, Rgb::WHITE], 0);
    assert_eq!(g, vec![Rgb::BLACK]);
}

// ── Linear and Bézier transforms ───────────────────────────────────────────

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = (2.0, 4.0);
    let b = (10.0, -4.0);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert_eq!(lerp(a, b, 0.5), (6.0, 0.0));
}

#[test]
fn bezier_starts_and_ends_on_anchor_points() {
    let p0 = (0.0, 0.0);
    let p1 = (20.0, 10.0);
    let ctrl = bend_ctrl(p0, p1, 0.4);
    let start = quad_bezier(p0, ctrl, p1, 0.0);
    let end = quad_bezier(p0, ctrl, p1, 1.0);
    assert!(close(start.0, p0.0, 1e-5) && close(start.1, p0.1, 1e-5));
    assert!(close(end.0, p1.0, 1e-5) && close(end.1, p1.1, 1e-5));
}

#[test]
fn bend_ctrl_offsets_perpendicular_to_the_segment() {
    let p0 = (0.0, 0.0);
    let p1 = (10.0, 0.0);
    let ctrl = bend_ctrl(p0, p1, 0.5);
    // Horizontal segment: the bend is purely vertical off the midpoint.
    assert!(close(ctrl.0, 5.0, 1e-5));
    assert!(close(ctrl.1.abs(), 5.0, 1e-5));
}

#[test]
fn bend_ctrl_degenerate_segment_returns_midpoint() {
    let p = (3.0, 3.0);
    assert_eq!(bend_ctrl(p, p, 0.9), p);
}

#[test]
fn bezier_with_bend_leaves_the_straight_line() {
    let p0 = (0.0, 0.0);
    let p1 = (10.0, 0.0);
    let ctrl = bend_ctrl(p0, p1, 0.5);
    let mid = quad_bezier(p0, ctrl, p1, 0.5);
    assert!(mid.1.abs() > 1.0, "curve did not bend: {mid:?}");
}

// ── Spiral ─────────────────────────────────────────────────────────────────

fn sample_spiral(spin: Spin) -> Spiral {
    Spiral::new((40.0, 12.0), (10.0, 5.0), 8.0, 1.1, 2.5, 1.0, spin)
}

#[test]
fn spiral_expand_starts_at_the_origin() {
    let s = sample_spiral(Spin::Clockwise);
    let start = s.expand_pos(0.0);
    assert!(close(start.0, 10.0, 0.01), "x was {}", start.0);
    assert!(close(start.1, 5.0, 0.01), "y was {}", start.1);
}

#[test]
fn spiral_tighten_converges_on_the_exact_ring_slot() {
    for spin in [Spin::Clockwise, Spin::CounterClockwise] {
        let s = sample_spiral(spin);
        let target = s.target_pos();
        let landed = s.tighten_pos(1.0);
        assert!(close(landed.0, target.0, 0.01), "{spin:?} x");
        assert!(close(landed.1, target.1, 0.01), "{spin:?} y");
    }
}

#[test]
fn spiral_phases_chain_without_jumps() {
    let s = sample_spiral(Spin::Clockwise);
    let expand_end = s.expand_pos(1.0);
    let orbit_start = s.orbit_pos(0.0);
    assert!(close(expand_end.0, orbit_start.0, 0.05));
    assert!(close(expand_end.1, orbit_start.1, 0.05));

    let orbit_end = s.orbit_pos(1.0);
    let tighten_start = s.tighten_pos(0.0);
    assert!(close(orbit_end.0, tighten_start.0, 0.05));
    assert!(close(orbit_end.1, tighten_start.1, 0.05));
}

#[test]
fn spiral_overshoots_past_the_target_radius() {
    let s = sample_spiral(Spin::Clockwise);
    assert!(s.overshoot >= s.target_radius * 2.0);
    assert!(s.settle_radius > s.target_radius);
    assert!(s.settle_radius < s.overshoot);
}
