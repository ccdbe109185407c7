//! Disperse-and-reform choreography: the text blows apart to random
//! points, drifts and twinkles for a while, then flows back home under a
//! gradient recolor.

use crate::canvas::Canvas;
use crate::effect::{Effect, EffectCtx};
use crate::interp::{gradient, lerp, Ease};
use crate::palette::Rgb;
use crate::phase::{PhaseMachine, PhaseSpec};
use crate::scene::{parse_source_text, scatter_points, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScatterPhase {
    Static,
    TransitionOut,
    Dispersed,
    TransitionBack,
    Hold,
}

const STATIC_TICKS: u32 = 40;
const OUT_TICKS: u32 = 48;
const DISPERSED_TICKS: u32 = 90;
const BACK_TICKS: u32 = 60;
const HOLD_TICKS: u32 = 140;

pub struct ScatterEffect {
    entities: Vec<Entity>,
    base_color: Rgb,
    targets: Vec<(f32, f32)>,
    back_start: Vec<(f32, f32)>,
    machine: PhaseMachine<ScatterPhase>,
    recolor: Vec<Rgb>,
    canvas: Canvas,
    text: String,
    rng: fastrand::Rng,
}

impl ScatterEffect {
    pub fn new(ctx: &EffectCtx) -> Self {
        let mut rng = fastrand::Rng::with_seed(ctx.seed);
        let base_color = ctx.palette[ctx.palette.len() / 2];
        let entities = parse_source_text(&ctx.text, ctx.w, ctx.h, base_color);
        let targets = scatter_points(&mut rng, ctx.w, ctx.h, entities.len());
        let back_start = entities.iter().map(|e| e.pos).collect();
        Self {
            entities,
            base_color,
            targets,
            back_start,
            machine: PhaseMachine::new(
                vec![
                    PhaseSpec::timed(ScatterPhase::Static, STATIC_TICKS),
                    PhaseSpec::timed(ScatterPhase::TransitionOut, OUT_TICKS),
                    PhaseSpec::timed(ScatterPhase::Dispersed, DISPERSED_TICKS),
                    PhaseSpec::timed(ScatterPhase::TransitionBack, BACK_TICKS),
                    PhaseSpec::timed(ScatterPhase::Hold, HOLD_TICKS),
                ],
                ctx.display_once,
            ),
            recolor: gradient(&ctx.palette, 20),
            canvas: Canvas::new(ctx.w, ctx.h),
            text: ctx.text.clone(),
            rng,
        }
    }

    fn restart(&mut self) {
        for e in &mut self.entities {
            e.go_home();
            e.visible = true;
            e.color = self.base_color;
        }
    }

    fn on_enter(&mut self, phase: ScatterPhase) {
        match phase {
            ScatterPhase::TransitionOut => {
                let (w, h) = (self.canvas.width(), self.canvas.height());
                self.targets = scatter_points(&mut self.rng, w, h, self.entities.len());
            }
            ScatterPhase::TransitionBack => {
                self.back_start = self.entities.iter().map(|e| e.pos).collect();
            }
            _ => {}
        }
    }
}

impl Effect for ScatterEffect {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn step(&mut self) {
        match self.machine.current() {
            ScatterPhase::Static | ScatterPhase::Hold => {}
            ScatterPhase::TransitionOut => {
                let t = self.machine.ticks_in_phase() as f32 / OUT_TICKS as f32;
                let e = Ease::OutCubic.apply(t);
                for (ent, &target) in self.entities.iter_mut().zip(&self.targets) {
                    let origin = (ent.origin.0 as f32, ent.origin.1 as f32);
                    ent.pos = lerp(origin, target, e);
                }
            }
            ScatterPhase::Dispersed => {
                // Slow drift plus a brightness twinkle.
                for ent in self.entities.iter_mut() {
                    ent.pos.0 += (self.rng.f32() - 0.5) * 0.6;
                    ent.pos.1 += (self.rng.f32() - 0.5) * 0.3;
                    if self.rng.f32() < 0.08 {
                        let f = 0.4 + self.rng.f32() * 0.6;
                        ent.color = self.base_color.scale(f);
                    }
                }
            }
            ScatterPhase::TransitionBack => {
                let t = self.machine.ticks_in_phase() as f32 / BACK_TICKS as f32;
                let e = Ease::InOutCubic.apply(t);
                let last = self.recolor.len() - 1;
                let color = self.recolor[((t * last as f32) as usize).min(last)];
                for (ent, &start) in self.entities.iter_mut().zip(&self.back_start) {
                    let home = (ent.origin.0 as f32, ent.origin.1 as f32);
                    ent.pos = lerp(start, home, e);
                    ent.color = color;
                }
            }
        }
        if let Some(tr) = self.machine.tick() {
            if tr.looped {
                self.restart();
            }
            self.on_enter(tr.to);
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
        self.targets = scatter_points(&mut self.rng, w.max(1), h.max(1), self.entities.len());
        self.back_start = self.entities.iter().map(|e| e.pos).collect();
        self.canvas.resize(w, h);
        self.machine.reset();
    }
}
