//! Ring choreography: characters spiral out past their ring, orbit while
//! the ring contracts around them, snap onto exact slots, then unwind
//! back into the text.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::interp::{gradient, lerp, Ease, Spin, Spiral};
use crate::palette::Rgb;
use crate::phase::{PhaseMachine, PhaseSpec};
use crate::scene::{parse_source_text, Entity};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VortexPhase {
    Static,
    Expand,
    Orbit,
    Tighten,
    TransitionBack,
    Hold,
}

const STATIC_TICKS: u32 = 40;
const EXPAND_TICKS: u32 = 50;
const ORBIT_TICKS: u32 = 70;
const TIGHTEN_TICKS: u32 = 40;
const BACK_TICKS: u32 = 50;
const HOLD_TICKS: u32 = 140;

pub struct VortexEffect {
    entities: Vec<Entity>,
    spirals: Vec<Spiral>,
    base_color: Rgb,
    machine: PhaseMachine<VortexPhase>,
    recolor: Vec<Rgb>,
    canvas: Canvas,
    text: String,
    rng: fastrand::Rng,
}

impl VortexEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let base_color = ctx.palette[ctx.palette.len() / 2];
        let entities = parse_source_text(&ctx.text, ctx.w, ctx.h, base_color);
        let spirals = Self::build_spirals(&entities, ctx.w, ctx.h, &mut rng);
        Self {
            entities,
            spirals,
            base_color,
            machine: PhaseMachine::new(
                vec![
                    PhaseSpec::timed(VortexPhase::Static, STATIC_TICKS),
                    PhaseSpec::timed(VortexPhase::Expand, EXPAND_TICKS),
                    PhaseSpec::timed(VortexPhase::Orbit, ORBIT_TICKS),
                    PhaseSpec::timed(VortexPhase::Tighten, TIGHTEN_TICKS),
                    PhaseSpec::timed(VortexPhase::TransitionBack, BACK_TICKS),
                    PhaseSpec::timed(VortexPhase::Hold, HOLD_TICKS),
                ],
                ctx.display_once,
            ),
            recolor: gradient(&ctx.palette, 20),
            canvas: Canvas::new(ctx.w, ctx.h),
            text: ctx.text.clone(),
            rng,
        }
    }

    fn build_spirals(
        entities: &[Entity],
        w: usize,
        h: usize,
        rng: &mut fastrand::Rng,
    ) -> Vec<Spiral> {
        let center = (w as f32 / 2.0, h as f32 / 2.0);
        // Height counts double because cells are roughly 1:2.
        let radius = (w as f32).min(h as f32 * 2.0) * 0.35;
        let n = entities.len().max(1) as f32;
        entities
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let spin = if rng.bool() {
                    Spin::Clockwise
                } else {
                    Spin::CounterClockwise
                };
                Spiral::new(
                    center,
                    (e.origin.0 as f32, e.origin.1 as f32),
                    radius,
                    i as f32 / n * 2.0 * PI,
                    2.0 + rng.f32(),
                    1.0,
                    spin,
                )
            })
            .collect()
    }

    fn restart(&mut self) {
        for e in &mut self.entities {
            e.go_home();
            e.visible = true;
            e.color = self.base_color;
        }
    }
}

impl Effect for VortexEffect {
    fn name(&self) -> &'static str {
        "vortex"
    }

    fn step(&mut self) {
        let ticks = self.machine.ticks_in_phase() as f32;
        match self.machine.current() {
            VortexPhase::Static | VortexPhase::Hold => {}
            VortexPhase::Expand => {
                let t = ticks / EXPAND_TICKS as f32;
                for (e, s) in self.entities.iter_mut().zip(&self.spirals) {
                    e.pos = s.expand_pos(t);
                }
            }
            VortexPhase::Orbit => {
                let t = ticks / ORBIT_TICKS as f32;
                for (e, s) in self.entities.iter_mut().zip(&self.spirals) {
                    e.pos = s.orbit_pos(t);
                }
            }
            VortexPhase::Tighten => {
                let t = ticks / TIGHTEN_TICKS as f32;
                for (e, s) in self.entities.iter_mut().zip(&self.spirals) {
                    e.pos = s.tighten_pos(t);
                }
            }
            VortexPhase::TransitionBack => {
                let t = ticks / BACK_TICKS as f32;
                let eased = Ease::InOutQuad.apply(t);
                let last = self.recolor.len() - 1;
                let color = self.recolor[((t * last as f32) as usize).min(last)];
                for (e, s) in self.entities.iter_mut().zip(&self.spirals) {
                    let home = (e.origin.0 as f32, e.origin.1 as f32);
                    e.pos = lerp(s.target_pos(), home, eased);
                    e.color = color;
                }
            }
        }
        if let Some(tr) = self.machine.tick() {
            if tr.looped {
                self.restart();
            }
        }
    }

    fn render(&mut self) -> String {
        self.canvas.clear();
        for e in &self.entities {
            if e.visible {
                let (x, y) = e.cell();
                self.canvas.set(x, y, e.glyph, Some(e.color));
            }
        }
        self.canvas.to_ansi()
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.restart();
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.entities = parse_source_text(&self.text, w.max(1), h.max(1), self.base_color);
        self.spirals = Self::build_spirals(&self.entities, w.max(1), h.max(1), &mut self.rng);
        self.canvas.resize(w, h);
        self.machine.reset();
    }
}
