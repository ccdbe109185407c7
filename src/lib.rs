//! Procedural, frame-stepped text effects for the terminal.
//!
//! The engine is tick-driven: a driver calls [`effect::Effect::step`] then
//! [`effect::Effect::render`] once per frame. Each effect instance owns its
//! entities, phase machine, gradients, and seeded RNG; nothing is shared.

pub mod app;
pub mod canvas;
pub mod config;
pub mod effect;
pub mod group;
pub mod heat;
pub mod interp;
pub mod palette;
pub mod phase;
pub mod scene;
pub mod terminal;
