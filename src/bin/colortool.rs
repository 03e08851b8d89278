use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorgrid::export::{parse_csv, to_csv};
use colorgrid::{Histogram, Inspector};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "colortool", version, about = "Image color inspection tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the color under a pixel coordinate
    Pick {
        #[arg(long)]
        image: PathBuf,
        #[arg(short, long)]
        x: u32,
        #[arg(short, long)]
        y: u32,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute per-channel intensity histograms
    Histogram {
        #[arg(long)]
        image: PathBuf,
        /// Emit the full 256-bucket counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample a color grid and export it as CSV
    Grid {
        #[arg(long)]
        image: PathBuf,
        /// Sampling stride in pixels
        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..))]
        step: u32,
        /// Write the CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-parse an exported grid CSV and report its shape
    Check {
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Pick { image, x, y, json } => pick_cmd(&image, x, y, json),
        Command::Histogram { image, json } => histogram_cmd(&image, json),
        Command::Grid {
            image,
            step,
            output,
        } => grid_cmd(&image, step, output.as_deref()),
        Command::Check { csv } => check_cmd(&csv),
    }
}

fn open_image(path: &Path) -> Result<Inspector> {
    Inspector::open(path).with_context(|| format!("failed to load image {}", path.display()))
}

fn pick_cmd(image: &Path, x: u32, y: u32, json: bool) -> Result<()> {
    let inspector = open_image(image)?;
    let (width, height) = (inspector.image().width(), inspector.image().height());

    match inspector.lookup(x, y) {
        Some(sample) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&sample)?);
            } else {
                println!("Image: {} ({}x{})", image.display(), width, height);
                println!("Pixel ({}, {}): {}", sample.x, sample.y, sample.hex);
                println!(
                    "RGB: ({}, {}, {})",
                    sample.rgb.r, sample.rgb.g, sample.rgb.b
                );
            }
        }
        None => {
            warn!("click outside image bounds");
            println!(
                "({}, {}) is outside the {}x{} image, no color at that point",
                x, y, width, height
            );
        }
    }

    Ok(())
}

fn histogram_cmd(image: &Path, json: bool) -> Result<()> {
    let inspector = open_image(image)?;
    let hist = inspector.histogram();

    if json {
        println!("{}", serde_json::to_string(&hist)?);
        return Ok(());
    }

    println!(
        "Image: {} ({}x{}, {} pixels)",
        image.display(),
        inspector.image().width(),
        inspector.image().height(),
        hist.pixel_count
    );
    for (name, buckets) in [("R", &hist.r), ("G", &hist.g), ("B", &hist.b)] {
        let (peak_value, peak_count) = Histogram::peak(buckets);
        println!(
            "  {}: peak intensity {} ({} pixels), mean {:.1}",
            name,
            peak_value,
            peak_count,
            hist.mean(buckets)
        );
    }

    Ok(())
}

fn grid_cmd(image: &Path, step: u32, output: Option<&Path>) -> Result<()> {
    let inspector = open_image(image)?;
    let grid = inspector.sample(step)?;
    let csv = to_csv(&grid);

    match output {
        Some(path) => {
            fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Wrote {}x{} grid (step {}px) to {}",
                grid.row_offsets().len(),
                grid.col_offsets().len(),
                step,
                path.display()
            );
        }
        None => print!("{csv}"),
    }

    Ok(())
}

fn check_cmd(csv_path: &Path) -> Result<()> {
    let content = fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read {}", csv_path.display()))?;
    let grid = parse_csv(&content)
        .with_context(|| format!("{} is not a valid grid export", csv_path.display()))?;

    println!(
        "{}: {} rows x {} columns",
        csv_path.display(),
        grid.row_offsets().len(),
        grid.col_offsets().len()
    );
    println!(
        "  row offsets 0..={}, column offsets 0..={}",
        grid.row_offsets().last().copied().unwrap_or(0),
        grid.col_offsets().last().copied().unwrap_or(0)
    );

    Ok(())
}
