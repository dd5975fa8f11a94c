use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use overlapviz_core::analysis::bbox::Bbox;
use overlapviz_core::consts::*;
use overlapviz_core::layout::group::BoxGroups;
use overlapviz_core::parser::{InvalidBoxPolicy, ParserConfig, parse_file};
use overlapviz_core::render::save_jpeg;
use overlapviz_core::report::OverlapReport;
use overlapviz_core::{RenderConfig, RenderConfigBuilder, Visualization, Visualizer};

#[derive(Parser)]
#[command(name = "overlapviz")]
#[command(about = "Detect overlapping boxes and render them to an image")]
struct Args {
    #[arg(default_value = DEFAULT_INPUT_PATH, help = "Input box description file")]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, help = "Output JPEG path")]
    output: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_SCALE, help = "Pixels per box unit")]
    scale: u32,

    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, help = "JPEG quality (1-100)")]
    quality: u8,

    #[arg(long, help = "Seed for the isolated box colors")]
    seed: Option<u64>,

    #[arg(long, default_value = BOX_RECORD_TAG, help = "Record tag of box lines")]
    tag: String,

    #[arg(long, help = "Fail on the first malformed box record")]
    strict: bool,

    #[arg(long, help = "Swap inverted corners instead of skipping the box")]
    repair_inverted: bool,

    #[arg(long, help = "Write a JSON overlap report to this path")]
    report: Option<PathBuf>,
}

struct RunConfig {
    input: PathBuf,
    output: PathBuf,
    report: Option<PathBuf>,
    seed: Option<u64>,
    parser: ParserConfig,
    render: RenderConfig,
}

impl RunConfig {
    fn from_args(args: Args) -> Result<Self, Box<dyn Error>> {
        Self::validate_input(&args.input)?;

        let render = RenderConfigBuilder::default()
            .scale(args.scale)
            .quality(args.quality)
            .build()?;

        let parser = ParserConfig {
            tag: args.tag,
            strict: args.strict,
            invalid_box: if args.repair_inverted {
                InvalidBoxPolicy::Repair
            } else {
                InvalidBoxPolicy::Skip
            },
        };

        Ok(Self {
            input: args.input,
            output: args.output,
            report: args.report,
            seed: args.seed,
            parser,
            render,
        })
    }

    fn validate_input(input: &Path) -> Result<(), Box<dyn Error>> {
        if !input.is_file() {
            error!("Input file not found: {}", input.display());
            return Err(format!("Input file not found: {}", input.display()).into());
        }
        Ok(())
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

/// Print the run summary to stderr, keeping stdout for the overlap lines
fn print_summary(config: &RunConfig, groups: &BoxGroups, vis: &Visualization) {
    eprintln!("\n=== Overlap Summary ===");
    eprintln!("Input: {}", config.input.display());
    eprintln!("Output: {}", config.output.display());
    eprintln!("Boxes: {}", groups.len());
    for label in groups.labels() {
        let count = groups.group(label).map_or(0, <[_]>::len);
        eprintln!("  {label}: {count}");
    }
    eprintln!("Normalization offset: {}", vis.offset);
    eprintln!(
        "Canvas: {}x{} (scale {})",
        vis.canvas.width(),
        vis.canvas.height(),
        config.render.scale
    );
    eprintln!("Overlap events: {}", vis.overlaps.event_count());
    eprintln!("Isolated boxes: {}", vis.overlaps.isolated().count());
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RunConfig::from_args(args)?;
    info!("Input: {}", config.input.display());
    info!("Output: {}", config.output.display());
    info!("Scale: {}", config.render.scale);

    let groups = parse_file(&config.input, &config.parser)?;
    let labeled = groups.clone().flatten();
    if labeled.is_empty() {
        warn!("No box records found in {}", config.input.display());
    }
    let mut boxes: Vec<Bbox> = labeled.iter().map(|b| b.bbox).collect();

    let mut visualizer = Visualizer::new(config.render.clone(), config.rng());
    let vis = visualizer.run(&mut boxes)?;

    for line in vis.diagnostics() {
        println!("{line}");
    }

    save_jpeg(&vis.canvas, &config.output, config.render.quality)?;

    if let Some(path) = &config.report {
        OverlapReport::new(&labeled, &boxes, &vis)?.write(path)?;
    }

    print_summary(&config, &groups, &vis);
    info!("Visualization completed successfully!");
    Ok(())
}
