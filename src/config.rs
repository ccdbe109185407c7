use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "pyroglyph", version, about = "Procedural fire and text-choreography effects for the terminal")]
pub struct Config {
    #[arg(long, value_enum, default_value_t = EffectKind::Fire)]
    pub effect: EffectKind,

    #[arg(long, value_enum, default_value_t = Theme::Fire)]
    pub theme: Theme,

    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// RNG seed; omitted means a fresh seed per run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Inline source text for the choreography effects.
    #[arg(long)]
    pub text: Option<String>,

    /// Read source text from a file instead of --text.
    #[arg(long)]
    pub text_file: Option<String>,

    /// Play the effect once and hold the final frame.
    #[arg(long, default_value_t = false)]
    pub once: bool,

    #[arg(long)]
    pub width: Option<u16>,

    #[arg(long)]
    pub height: Option<u16>,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EffectKind {
    Fire,
    #[value(name = "ember-text", alias = "embertext", alias = "ember")]
    EmberText,
    Beams,
    Scatter,
    Vortex,
    #[value(alias = "black-hole")]
    Blackhole,
    Burst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Fire,
    Aurora,
    Neon,
    Ember,
    Mono,
}
