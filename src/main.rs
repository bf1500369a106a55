//! Moving Hyperplane CLI Application
//!
//! Generates concept-drifting data streams as CSV or JSON lines.

use clap::{Parser, Subcommand, ValueEnum};
use moving_hyperplane::config::GeneratorSettings;
use moving_hyperplane::generator::{MovingHyperplane, StreamGenerator};
use moving_hyperplane::record::{CsvSink, JsonLinesSink, Label, RecordSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "moving-hyperplane")]
#[command(about = "Moving hyperplane concept drift stream generator")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Jsonl,
}

/// Generator parameters; any option given overrides the settings file
#[derive(clap::Args)]
struct SettingsArgs {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of examples
    #[arg(short = 'n', long)]
    count: Option<i64>,

    /// Dimensionality of the examples
    #[arg(short, long)]
    dimensions: Option<i64>,

    /// Label noise in percent (0-100)
    #[arg(long)]
    noise: Option<i64>,

    /// Number of weights updated per example
    #[arg(short, long)]
    update_count: Option<i64>,

    /// Magnitude of change of the weights
    #[arg(short, long)]
    magnitude: Option<f64>,

    /// Fixed seed (a random one is drawn otherwise)
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<i64>,
}

impl SettingsArgs {
    fn resolve(&self) -> anyhow::Result<GeneratorSettings> {
        let mut settings = match &self.config {
            Some(path) => GeneratorSettings::from_file(path)?,
            None => GeneratorSettings::default(),
        };

        if let Some(count) = self.count {
            settings.example_count = count;
        }
        if let Some(dimensions) = self.dimensions {
            settings.dimensions = dimensions;
        }
        if let Some(noise) = self.noise {
            settings.noise_percent = noise;
        }
        if let Some(update_count) = self.update_count {
            settings.weight_update_count = update_count;
        }
        if let Some(magnitude) = self.magnitude {
            settings.magnitude = magnitude;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
            settings.use_random_seed = false;
        }

        Ok(settings)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a data stream
    Generate {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the default settings to a TOML file
    InitConfig {
        /// Target path
        #[arg(default_value = "moving_hyperplane.toml")]
        path: PathBuf,
    },

    /// Log how the hyperplane moves over a run
    Trace {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Log the hyperplane every this many rows
        #[arg(short, long, default_value = "500")]
        every: u64,
    },
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout may carry the data, so log to stderr
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            settings,
            format,
            output,
        } => {
            let config = settings.resolve()?.into_config()?;
            let count = config.example_count;
            info!(
                "Generating {} examples with {} dimensions (seed {})",
                count, config.dimensions, config.seed
            );

            let mut generator = MovingHyperplane::new(config)?;
            let writer = open_output(output.as_deref())?;
            let mut sink: Box<dyn RecordSink> = match format {
                Format::Csv => Box::new(CsvSink::new(writer)),
                Format::Jsonl => Box::new(JsonLinesSink::new(writer)),
            };
            generator.write_to(sink.as_mut(), count)?;

            if let Some(path) = output {
                info!("Wrote {} rows to {}", generator.rows_emitted(), path.display());
            }
        }

        Commands::InitConfig { path } => {
            GeneratorSettings::default().to_file(&path)?;
            info!("Wrote default settings to {}", path.display());
        }

        Commands::Trace { settings, every } => {
            let config = settings.resolve()?.into_config()?;
            let count = config.example_count;
            let mut generator = MovingHyperplane::new(config)?;
            let every = every.max(1);

            let mut positives = 0u64;
            for _ in 0..count {
                let example = generator.next();
                if example.label == Label::Positive {
                    positives += 1;
                }
                if example.row.0 % every == 0 {
                    let hyperplane = generator.hyperplane();
                    info!(
                        "{}: threshold={:.6}, weights={:?}, positive rate={:.3}",
                        example.row,
                        hyperplane.threshold(),
                        hyperplane.weights(),
                        positives as f64 / (example.row.0 + 1) as f64
                    );
                }
            }
            info!("Positive examples: {} of {}", positives, count);
        }
    }

    Ok(())
}
