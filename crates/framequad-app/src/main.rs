mod cli;
mod render;
mod source;

use framequad_common::{ConfigError, FramequadError, Result};
use framequad_config::FramequadConfig;
use framequad_renderer::{GpuContext, PixelFormat};
use tracing_subscriber::EnvFilter;

use render::{RenderJob, Source};

/// Read the config before logging is up; the caller reports the error.
fn load_config(args: &cli::Args) -> std::result::Result<FramequadConfig, ConfigError> {
    match &args.config {
        Some(path) => framequad_config::load_config_from(path),
        None => framequad_config::load_config(),
    }
}

fn init_logging(args: &cli::Args, config: &FramequadConfig) {
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("framequad={}", config.logging.level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "framequad=info".parse().unwrap()),
            ),
        )
        .init();
}

fn run(args: &cli::Args, config: &FramequadConfig) -> Result<()> {
    tracing::info!(
        "Config loaded (output: {}x{}, {:?})",
        config.output.width,
        config.output.height,
        config.output.format
    );

    let source = match &args.input {
        Some(path) => Source::Still(source::load_png(path)?),
        None => Source::Pattern(PixelFormat::from(config.stream.pixel_format)),
    };

    let ctx = pollster::block_on(GpuContext::headless())
        .map_err(|e| FramequadError::Renderer(e.to_string()))?;

    let job = RenderJob {
        width: args.width.unwrap_or(config.output.width),
        height: args.height.unwrap_or(config.output.height),
        frames: args.frames,
        output: &args.output,
    };
    render::run(&ctx, config, &source, &job)
}

fn main() {
    let args = cli::parse();

    let loaded = load_config(&args);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&args, &config);

    tracing::info!("framequad v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
