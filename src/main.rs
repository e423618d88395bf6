use clap::{Parser, Subcommand};
use contact_sheet::config::{AlbumConfig, AspectRatio, ConfigError};
use contact_sheet::{config, output, render, samples, scan, select};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Shared flags for commands that assemble a page plan.
#[derive(clap::Args, Clone)]
struct LayoutArgs {
    /// Directory of photos
    input: PathBuf,

    /// Photo rows per page
    #[arg(long)]
    rows: Option<u32>,

    /// Photo columns per page
    #[arg(long)]
    columns: Option<u32>,

    /// Maximum number of pages
    #[arg(long)]
    pages: Option<u32>,

    /// Cell aspect ratio, e.g. "16:9", "4:3", or "1.5"
    #[arg(long)]
    aspect: Option<AspectRatio>,

    /// Keep portrait and square photos too
    #[arg(long)]
    include_portrait: bool,

    /// RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser)]
#[command(name = "contact-sheet")]
#[command(version)]
#[command(about = "Arrange a folder of photos into a grid-based PDF contact sheet")]
#[command(long_about = "\
Arrange a folder of photos into a grid-based PDF contact sheet

Every readable jpg/jpeg/png in the input directory is a candidate. Photos
are ordered by EXIF capture time (file name when absent), sampled down to
the grid capacity when the folder is larger, center-cropped to one aspect
ratio, and placed centered in a rows x columns grid on A4-landscape pages.

Defaults match the classic 2x3, five-page album. Put an album.toml in the
input directory to change grid shape, page size, margins, or cropping;
CLI flags override the file.

Run 'contact-sheet plan <dir>' to see which photo lands in which cell
before rendering anything.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the contact sheet PDF
    Build {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output PDF path
        #[arg(long, default_value = "album.pdf")]
        output: PathBuf,

        /// Title embedded in the PDF metadata
        #[arg(long)]
        title: Option<String>,
    },
    /// Show the page plan without rendering
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate checkerboard sample images for trying the pipeline
    GenSamples {
        /// Directory to write images into
        output_dir: PathBuf,

        /// Number of images to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// RNG seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            layout,
            output,
            title,
        } => {
            let mut config = resolve_config(&layout)?;
            if let Some(title) = title {
                config.title = title;
            }
            println!("==> Scanning {}", layout.input.display());
            let pages = assemble(&layout, &config)?;
            println!("==> Rendering {} pages → {}", pages.len(), output.display());
            render::write_album(&pages, &config, &output)?;
            println!("==> Wrote {}", output.display());
        }
        Command::Plan { layout, json } => {
            let config = resolve_config(&layout)?;
            let pages = assemble(&layout, &config)?;
            if render::is_empty_plan(&pages) {
                return Err(Box::new(render::RenderError::EmptyPlan));
            }
            if json {
                let plan = select::describe_pages(&pages);
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&pages);
            }
        }
        Command::GenSamples {
            output_dir,
            count,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let written = samples::generate_samples(&output_dir, count, &mut rng)?;
            println!("Generated {} images in {}", written.len(), output_dir.display());
        }
    }

    Ok(())
}

/// Load `album.toml` from the input directory and apply CLI overrides.
fn resolve_config(layout: &LayoutArgs) -> Result<AlbumConfig, ConfigError> {
    let mut config = config::load_config(&layout.input)?;
    if let Some(rows) = layout.rows {
        config.grid.rows = rows;
    }
    if let Some(columns) = layout.columns {
        config.grid.columns = columns;
    }
    if let Some(pages) = layout.pages {
        config.grid.pages = pages;
    }
    if let Some(aspect) = layout.aspect {
        config.crop_aspect = aspect;
    }
    if layout.include_portrait {
        config.landscape_only = false;
    }
    // Overrides can break invariants the file load already checked
    config.validate()?;
    Ok(config)
}

/// Run scan and select: the shared front half of `build` and `plan`.
fn assemble(
    layout: &LayoutArgs,
    config: &AlbumConfig,
) -> Result<Vec<Vec<scan::PhotoEntry>>, Box<dyn std::error::Error>> {
    let report = scan::scan(&layout.input)?;
    output::print_scan(&report);

    let mut rng = make_rng(layout.seed);
    let picked = select::select(
        report.photos,
        config.grid.capacity(),
        config.landscape_only,
        &mut rng,
    );
    Ok(select::paginate(
        picked,
        config.grid.per_page(),
        config.grid.pages as usize,
    ))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
