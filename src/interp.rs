//! Pure interpolation math: easing curves, gradient synthesis, and the
//! coordinate transforms the choreography effects move entities along.

use crate::palette::Rgb;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InExpo,
    OutExpo,
    InOutExpo,
}

impl Ease {
    /// Map `t` in `[0,1]` onto the curve. Out-of-range input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::InExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    (2.0f32).powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (2.0f32).powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    (2.0f32).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0f32).powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

/// Synthesize a gradient from ordered stops.
///
/// For `k >= 2` stops and `steps = n`, the result holds exactly `n + 1`
/// colors: entry 0 is the first stop and entry `n` is the last stop,
/// bit-exact. The `n` sub-steps are spread evenly across the `k - 1`
/// segments. A single stop yields a length-1 gradient; an empty stop list
/// yields opaque white.
pub fn gradient(stops: &[Rgb], steps: usize) -> Vec<Rgb> {
    match stops {
        [] => vec![Rgb::WHITE],
        [only] => vec![*only],
        _ => {
            let segs = stops.len() - 1;
            let mut out = Vec::with_capacity(steps + 1);
            if steps == 0 {
                out.push(stops[0]);
                return out;
            }
            // Distribute steps across segments; earlier segments absorb the
            // remainder so the total always lands on `steps`.
            let base = steps / segs;
            let extra = steps % segs;
            for (i, pair) in stops.windows(2).enumerate() {
                let n = base + usize::from(i < extra);
                for s in 0..n {
                    out.push(pair[0].mix(pair[1], s as f32 / n as f32));
                }
            }
            out.push(stops[stops.len() - 1]);
            out
        }
    }
}

/// Straight-line interpolation between two points.
pub fn lerp(start: (f32, f32), end: (f32, f32), t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t)
}

/// Quadratic Bézier point for eased parameter `t`.
pub fn quad_bezier(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32), t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * ctrl.0 + t * t * p1.0,
        u * u * p0.1 + 2.0 * u * t * ctrl.1 + t * t * p1.1,
    )
}

/// Control point for a curved pull path: the start→end midpoint pushed
/// perpendicular to the segment by `bend` times its length. Degenerate
/// (zero-length) segments return the midpoint unchanged.
pub fn bend_ctrl(start: (f32, f32), end: (f32, f32), bend: f32) -> (f32, f32) {
    let mid = ((start.0 + end.0) * 0.5, (start.1 + end.1) * 0.5);
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return mid;
    }
    (mid.0 - dy * bend, mid.1 + dx * bend)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    fn sign(self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Orbital spiral path in three sub-phases.
///
/// 1. `expand_pos(t)` — from the entity origin out to an overshoot radius
///    (a multiple of the target radius) while the angle sweeps toward the
///    target angle, ease-in-out.
/// 2. `orbit_pos(t)` — a full `rotations` worth of angular travel while
///    the radius eases from overshoot down to the target.
/// 3. `tighten_pos(t)` — radius and angle ease from the phase-2 end state
///    onto the exact target, so the entity lands on its ring slot.
///
/// Spin direction is fixed per entity at construction.
#[derive(Debug, Clone, Copy)]
pub struct Spiral {
    pub center: (f32, f32),
    pub origin: (f32, f32),
    pub target_radius: f32,
    pub target_angle: f32,
    pub overshoot: f32,
    pub settle_radius: f32,
    pub rotations: f32,
    pub spin: Spin,
}

impl Spiral {
    pub fn new(
        center: (f32, f32),
        origin: (f32, f32),
        target_radius: f32,
        target_angle: f32,
        overshoot_factor: f32,
        rotations: f32,
        spin: Spin,
    ) -> Self {
        let target_radius = target_radius.max(0.0);
        let overshoot = target_radius * overshoot_factor.max(1.0);
        Self {
            center,
            origin,
            target_radius,
            target_angle,
            overshoot,
            // Orbit settles a little wide of the ring; tighten closes the gap.
            settle_radius: target_radius + (overshoot - target_radius) * 0.15,
            rotations: rotations.max(0.0),
            spin,
        }
    }

    fn polar(&self, radius: f32, angle: f32) -> (f32, f32) {
        (
            self.center.0 + radius * angle.cos(),
            // Terminal cells are taller than wide; squash y so rings read round.
            self.center.1 + radius * angle.sin() * 0.5,
        )
    }

    fn origin_polar(&self) -> (f32, f32) {
        let dx = self.origin.0 - self.center.0;
        let dy = (self.origin.1 - self.center.1) * 2.0;
        ((dx * dx + dy * dy).sqrt(), dy.atan2(dx))
    }

    fn orbit_end_angle(&self) -> f32 {
        self.target_angle + self.spin.sign() * self.rotations * 2.0 * PI
    }

    pub fn expand_pos(&self, t: f32) -> (f32, f32) {
        let e = Ease::InOutQuad.apply(t);
        let (r0, a0) = self.origin_polar();
        let r = r0 + (self.overshoot - r0) * e;
        let a = a0 + (self.target_angle - a0) * e;
        self.polar(r, a)
    }

    pub fn orbit_pos(&self, t: f32) -> (f32, f32) {
        let e = Ease::InOutQuad.apply(t);
        let r = self.overshoot + (self.settle_radius - self.overshoot) * e;
        let a = self.target_angle + (self.orbit_end_angle() - self.target_angle) * e;
        self.polar(r, a)
    }

    pub fn tighten_pos(&self, t: f32) -> (f32, f32) {
        let e = Ease::InOutCubic.apply(t);
        let a0 = self.orbit_end_angle();
        // Keep spinning the same direction until the next angle equivalent
        // to the slot, so tighten never appears to rewind.
        let sign = self.spin.sign();
        let k = ((a0 - self.target_angle) * sign / (2.0 * PI)).ceil().max(0.0);
        let a1 = self.target_angle + sign * k * 2.0 * PI;
        let r = self.settle_radius + (self.target_radius - self.settle_radius) * e;
        let a = a0 + (a1 - a0) * e;
        self.polar(r, a)
    }

    /// Exact ring slot this spiral converges to.
    pub fn target_pos(&self) -> (f32, f32) {
        self.polar(self.target_radius, self.target_angle)
    }
}
