use anyhow::Result;
use clap::Parser;
use pline::SegmentContext;
use pline::segments::default_builders;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Strip the `gke_<project>_<zone>_` prefix from GKE cluster names
    #[arg(long)]
    shorten_gke_names: bool,
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let context = SegmentContext::from_env(cli.shorten_gke_names);

    let mut painted = Vec::new();
    for builder in default_builders() {
        let segments = builder.build(&context);
        debug!("builder {} produced {} segment(s)", builder.name(), segments.len());
        for segment in segments {
            painted.push(segment.paint());
        }
    }

    println!("{}", painted.join(" "));
    ExitCode::SUCCESS
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}
