use anyhow::Result;
use clap::Parser;
use corridor::animation_length;
use tracing::info;

use generator::{build_generator_app, load_config, Args, GenerationReport};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    args.apply(&mut cfg);
    info!(?cfg, "Generator config loaded");
    cfg.corridor.validate()?;

    // The first update generates and shows frame 0; one more per frame after.
    let frames = if cfg.playback.enabled {
        animation_length(&cfg.corridor)
    } else {
        0
    };
    let mut app = build_generator_app(cfg)?;
    for _ in 0..=frames {
        app.update();
    }

    if let Some(report) = app.world().get_resource::<GenerationReport>() {
        info!(
            segments = report.segments,
            volumes = report.volumes,
            keyframes = report.keyframes,
            frame_end = report.frame_end,
            "Done"
        );
    }
    Ok(())
}
