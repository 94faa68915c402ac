use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dithering::models::{AppConfig, ConfigSource, KernelInfo};
use dithering::rendering::DemoPattern;
use dithering::services::{DitherService, DitherSettings};
use rgb565_dither::{ChannelDepth, DitherAlgorithm};

#[derive(Parser)]
#[command(name = "dithering")]
#[command(about = "Error diffusion dithering of PNG images down to 16-bit color")]
#[command(version)]
struct Cli {
    /// YAML config file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG file
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Algorithm: sierra-lite, sierra2, floyd-steinberg or stucki
        #[arg(short, long)]
        algorithm: Option<DitherAlgorithm>,

        /// Bits per channel, e.g. "565" or "444"
        #[arg(long)]
        depth: Option<ChannelDepth>,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Render a demo pattern with each algorithm
    Demo {
        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Demo pattern
        #[arg(short, long, value_enum)]
        pattern: Option<DemoPattern>,

        /// Algorithms to render (repeatable, default: all)
        #[arg(short, long)]
        algorithm: Vec<DitherAlgorithm>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Bits per channel, e.g. "565" or "444"
        #[arg(long)]
        depth: Option<ChannelDepth>,
    },
    /// List the available algorithms and their kernels
    Algorithms {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dithering=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let (config, source) =
        AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Some(Commands::Dither {
            input,
            output,
            algorithm,
            depth,
            optimize,
        }) => {
            let settings = DitherSettings {
                algorithm: algorithm.unwrap_or(config.algorithm),
                depth: depth.unwrap_or(config.depth),
                optimize: optimize || config.optimize,
            };
            run_dither_command(&input, &output, settings)
        }
        Some(Commands::Demo {
            output,
            pattern,
            algorithm,
            width,
            height,
            depth,
        }) => {
            let settings = DitherSettings {
                depth: depth.unwrap_or(config.depth),
                ..DitherSettings::from(&config)
            };
            let algorithms = if algorithm.is_empty() {
                DitherAlgorithm::ALL.to_vec()
            } else {
                algorithm
            };
            run_demo_command(
                &output,
                pattern.unwrap_or(config.demo.pattern),
                width.unwrap_or(config.demo.width),
                height.unwrap_or(config.demo.height),
                &algorithms,
                settings,
            )
        }
        Some(Commands::Algorithms { json }) => run_algorithms_command(json),
        None => {
            run_status_command(&config, &source);
            Ok(())
        }
    }
}

fn run_dither_command(input: &Path, output: &Path, settings: DitherSettings) -> anyhow::Result<()> {
    let service = DitherService::new(settings);
    let report = service
        .dither_file(input, output)
        .with_context(|| format!("Failed to dither {}", input.display()))?;

    let settings = service.settings();
    println!(
        "Dithered {}x{} image with {} ({} bits): {} of {} pixels changed, {} bytes written to {}",
        report.width,
        report.height,
        settings.algorithm.label(),
        settings.depth,
        report.changed_pixels,
        report.width * report.height,
        report.bytes,
        output.display()
    );
    Ok(())
}

fn run_demo_command(
    out_dir: &Path,
    pattern: DemoPattern,
    width: u32,
    height: u32,
    algorithms: &[DitherAlgorithm],
    settings: DitherSettings,
) -> anyhow::Result<()> {
    let service = DitherService::new(settings);
    let written = service
        .render_demo(pattern, width as usize, height as usize, algorithms, out_dir)
        .with_context(|| format!("Failed to write demo images to {}", out_dir.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_algorithms_command(json: bool) -> anyhow::Result<()> {
    let kernels = KernelInfo::all();
    if json {
        println!("{}", serde_json::to_string_pretty(&kernels)?);
        return Ok(());
    }

    for info in kernels {
        println!("{} ({}), divisor {}", info.name, info.label, info.divisor);
        for line in info.diagram().lines() {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}

fn run_status_command(config: &AppConfig, source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Dithering v{VERSION}");
    println!("Error diffusion down to 16-bit color\n");

    println!("Configuration: {source}");
    println!("  algorithm = {}", config.algorithm);
    println!("  depth     = {}", config.depth);
    println!("  optimize  = {}", config.optimize);
    println!(
        "  demo      = {} {}x{}",
        config.demo.pattern.name(),
        config.demo.width,
        config.demo.height
    );

    println!("\nAlgorithms:");
    for algorithm in DitherAlgorithm::ALL {
        println!("  {:<16} {}", algorithm.name(), algorithm.label());
    }

    println!("\nRun 'dithering --help' for usage.");
}
