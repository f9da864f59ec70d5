use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lighting_host::{run_passes, DumpConfig, OutputFormat, Scene};

#[derive(Parser)]
#[command(name = "lightenv-dump")]
#[command(about = "Dump the GPU command lists produced by lighting scene presets", long_about = None)]
struct Cli {
    /// Scene preset to build
    #[arg(value_enum, default_value_t = Scene::Sun)]
    scene: Scene,

    /// Number of synchronization passes
    #[arg(short = 'n', long, default_value_t = 2)]
    passes: usize,

    /// Resend all state before every pass after the first
    #[arg(long)]
    cascade: bool,

    /// Move the first light between passes
    #[arg(long)]
    animate: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Packets)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = DumpConfig {
        scene: cli.scene,
        passes: cli.passes,
        cascade: cli.cascade,
        animate: cli.animate,
        format: cli.format,
    };
    log::info!("lightenv-dump: {config:?}");

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let reports = run_passes(&config, &mut out)?;
    out.flush()?;

    let total: usize = reports.iter().map(|r| r.words).sum();
    log::info!("{} passes, {total} words total", reports.len());
    Ok(())
}
