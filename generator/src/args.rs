use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use corridor::builtins::{default_corridor, slalom_corridor};

use crate::Config;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    Slalom,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "corridor-gen")]
#[command(about = "Builds the sine corridor scene and plays back its camera flythrough", long_about = None)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Replace the corridor section with a built-in layout
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,
    /// Override the number of corridor segments
    #[arg(long)]
    pub steps: Option<u32>,
    /// Override the frames spent per segment
    #[arg(long)]
    pub frames_per_step: Option<u32>,
    /// Generate only, skip timeline playback
    #[arg(long, default_value_t = false)]
    pub no_playback: bool,
}

impl Args {
    /// Command line values win over the config file.
    pub fn apply(&self, cfg: &mut Config) {
        match self.preset {
            Some(Preset::Default) => cfg.corridor = default_corridor(),
            Some(Preset::Slalom) => cfg.corridor = slalom_corridor(),
            None => {}
        }
        if let Some(steps) = self.steps {
            cfg.corridor.num_steps = steps;
        }
        if let Some(fps) = self.frames_per_step {
            cfg.corridor.frames_per_step = fps;
        }
        if self.no_playback {
            cfg.playback.enabled = false;
        }
    }
}
