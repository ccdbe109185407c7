use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cfg = pyroglyph::config::Config::parse();
    pyroglyph::app::run(cfg)
}
