use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug, error, info};

use rulegen::config::{BoundaryPolicy, Params};
use rulegen::output;

/// Render elementary cellular automata, one PNG per rule.
#[derive(Parser, Debug)]
#[command(name = "rulegen", version, about)]
struct Cli {
    /// First rule to render
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    first: i64,

    /// Last rule to render (inclusive)
    #[arg(long, default_value_t = 255, allow_negative_numbers = true)]
    last: i64,

    /// Cells per row
    #[arg(long, default_value_t = Params::default().width)]
    width: usize,

    /// Simulated rows
    #[arg(long, default_value_t = Params::default().height)]
    height: usize,

    /// Leading rows left out of the image
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Neighbor resolution at the row edges
    #[arg(long, value_enum, default_value_t = BoundaryPolicy::Clamped)]
    boundary: BoundaryPolicy,

    /// Directory the images are written to
    #[arg(short, long, default_value = "images")]
    out_dir: PathBuf,

    /// Skip rules that fail and continue with the next one
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let params = Params {
        width: cli.width,
        height: cli.height,
        offset: cli.offset,
        boundary: cli.boundary,
    };
    params.validate()?;

    info!(
        first = cli.first,
        last = cli.last,
        width = params.width,
        height = params.height,
        boundary = ?params.boundary,
        out_dir = %cli.out_dir.display(),
        "rendering rules"
    );

    let mut failed = 0usize;
    for n in cli.first..=cli.last {
        info!("Starting simulation for rule {}", n);

        let saved = rulegen::generate(n, &params).and_then(|(frame, timings)| {
            for t in &timings {
                debug!("  {:20} {:8.1} ms", t.name, t.ms);
            }
            let name = output::file_name(frame.rule, frame.boundary);
            output::save_png(&cli.out_dir, &name, &frame.image)
        });

        match saved {
            Ok(path) => info!("Saved {}", path.display()),
            Err(e) if cli.keep_going => {
                error!(rule = n, "{e}");
                failed += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("rule {n} failed")),
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} rule(s) failed");
    }
    info!("Done.");
    Ok(())
}
