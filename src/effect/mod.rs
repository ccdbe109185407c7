mod beams;
mod blackhole;
mod burst;
mod ember;
mod fire;
mod scatter;
mod vortex;

pub use beams::BeamsEffect;
pub use blackhole::BlackholeEffect;
pub use burst::BurstEffect;
pub use ember::EmberTextEffect;
pub use fire::FireEffect;
pub use scatter::ScatterEffect;
pub use vortex::VortexEffect;

use crate::palette::Rgb;

/// Everything an effect needs at construction. Each instance clones what
/// it keeps; there is no shared mutable state between effects.
#[derive(Debug, Clone)]
pub struct EffectCtx {
    pub w: usize,
    pub h: usize,
    pub seed: u64,
    pub text: String,
    pub palette: Vec<Rgb>,
    /// Hold the final phase forever instead of looping.
    pub display_once: bool,
}

impl EffectCtx {
    pub fn new(w: usize, h: usize, seed: u64, text: impl Into<String>, palette: Vec<Rgb>) -> Self {
        Self {
            w: w.max(1),
            h: h.max(1),
            seed,
            text: text.into(),
            palette: crate::palette::colors_or_default(palette),
            display_once: false,
        }
    }

    pub fn display_once(mut self, once: bool) -> Self {
        self.display_once = once;
        self
    }
}

/// One tick-driven effect instance.
///
/// The driver calls `step` then `render` once per frame. `reset` rewinds
/// to the initial phase at the current size; `resize` is destructive and
/// rebuilds all state at the new dimensions.
pub trait Effect {
    fn name(&self) -> &'static str;
    fn step(&mut self);
    fn render(&mut self) -> String;
    fn reset(&mut self);
    fn resize(&mut self, w: usize, h: usize);
}

/// Full effect roster, in the order the driver cycles through them.
pub fn make_effects(ctx: &EffectCtx) -> Vec<Box<dyn Effect>> {
    vec![
        Box::new(FireEffect::new(ctx)),
        Box::new(EmberTextEffect::new(ctx)),
        Box::new(BeamsEffect::new(ctx)),
        Box::new(ScatterEffect::new(ctx)),
        Box::new(VortexEffect::new(ctx)),
        Box::new(BlackholeEffect::new(ctx)),
        Box::new(BurstEffect::new(ctx)),
    ]
}
