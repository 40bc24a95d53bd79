use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromakit::commands::{self, Report};
use chromakit::models::{AppConfig, OutputFormat, CONFIG_ENV};

#[derive(Parser)]
#[command(name = "chromakit")]
#[command(about = "Convert colors between hex, RGB and HSL and build tint/shade palettes")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Omit the leading '#' from hex output
    #[arg(long, global = true)]
    no_hash: bool,

    /// YAML config file (overrides CHROMAKIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color as hex, rgb() and hsl()
    Convert {
        /// Color as "#rrggbb", "rgb(r, g, b)" or "hsl(h, s%, l%)"
        color: String,
    },
    /// Generate tints and shades of a hex color
    Palette {
        /// Base color as "#rrggbb"
        hex: String,

        /// Number of tints (and shades) to generate
        #[arg(short, long)]
        steps: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromakit=warn,chroma_model=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let env_config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = AppConfig::resolve(cli.config.as_deref(), env_config.as_deref())?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let show_hash = config.show_hash && !cli.no_hash;

    match cli.command {
        Some(Commands::Convert { color }) => {
            let report = commands::convert(&color, show_hash)?;
            println!("{}", report.render(format)?);
        }
        Some(Commands::Palette { hex, steps }) => {
            let steps = steps.unwrap_or(config.palette_steps);
            let report = commands::palette(&hex, steps, show_hash)?;
            println!("{}", report.render(format)?);
        }
        None => run_status_command(&config),
    }

    Ok(())
}

/// Print version, active settings and a usage hint
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();

    println!("Chromakit v{VERSION}");
    println!("Color conversion and tint/shade palettes\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!();

    println!("Settings:");
    println!("  show_hash     = {}", config.show_hash);
    println!("  output        = {:?}", config.output);
    println!("  palette_steps = {}", config.palette_steps);
    println!();

    println!("Usage:");
    println!("  chromakit convert \"#c0ffee\"");
    println!("  chromakit convert \"rgb(100, 105, 87)\"");
    println!("  chromakit convert \"hsl(110, 80%, 80%)\"");
    println!("  chromakit palette \"#336699\" --steps 5");
}
