//! Dramanet CLI: discourse networks from parsed plays.
//!
//! Usage:
//!   dramanet export --input parsed.json --output networks.json \
//!       [--genders file] [--previous export.json]...
//!   dramanet summary --input parsed.json [--genders file]

use clap::{Args, Parser, Subcommand};
use dramanet::io::{load_corpus, write_export};
use dramanet::{export_plays, DramanetResult, PipelineConfig, PlaySummary};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dramanet",
    version,
    about = "Discourse networks and dialogue patterns from stage plays"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log per-play details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full network export
    Export {
        #[command(flatten)]
        pipeline: PipelineArgs,
        /// Where to write the export JSON
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print one line per play
    Summary {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// Parsed corpus JSON
    #[arg(short, long)]
    input: PathBuf,
    /// YAML or JSON pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gender override file (flat or per-play)
    #[arg(long)]
    genders: Option<PathBuf>,
    /// Previous export whose gender table is merged first (repeatable)
    #[arg(long)]
    previous: Vec<PathBuf>,
    /// Minimum dialogue run length
    #[arg(long)]
    min_dialogue_len: Option<usize>,
    /// Include the transition-event trail in each play
    #[arg(long)]
    transitions: bool,
    /// Process plays one at a time
    #[arg(long)]
    sequential: bool,
}

impl PipelineArgs {
    /// File configuration first, then flags on top.
    fn resolve(&self) -> DramanetResult<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(path) = &self.genders {
            config.gender_file = Some(path.clone());
        }
        if !self.previous.is_empty() {
            config.previous_exports = self.previous.clone();
        }
        if let Some(n) = self.min_dialogue_len {
            config.min_dialogue_len = n;
        }
        if self.transitions {
            config.include_transitions = true;
        }
        if self.sequential {
            config.parallel = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_export(pipeline: &PipelineArgs, output: &Path) -> DramanetResult<()> {
    let config = pipeline.resolve()?;
    let overrides = config.load_gender_overrides();
    let corpus = load_corpus(&pipeline.input)?;
    let export = export_plays(&corpus.plays, &config, &overrides);
    write_export(output, &export)?;
    println!("Wrote {} plays to {}", export.plays.len(), output.display());
    Ok(())
}

fn cmd_summary(pipeline: &PipelineArgs) -> DramanetResult<()> {
    let config = pipeline.resolve()?;
    let overrides = config.load_gender_overrides();
    let corpus = load_corpus(&pipeline.input)?;
    let export = export_plays(&corpus.plays, &config, &overrides);

    if export.plays.is_empty() {
        println!("No plays in corpus.");
        return Ok(());
    }
    println!(
        "{:<32}  {:>8}  {:>6}  {:>6}  {:>7}  {:>9}  {:>7}",
        "TITLE", "SPEAKERS", "EDGES", "CO", "DIALOGS", "F-DIALOGS", "BECHDEL"
    );
    println!("{}", "-".repeat(89));
    for play in &export.plays {
        let s = PlaySummary::from(play);
        println!(
            "{:<32}  {:>8}  {:>6}  {:>6}  {:>7}  {:>9}  {:>7}",
            s.title,
            s.speakers,
            s.transition_edges,
            s.cooccurrence_edges,
            s.dialogs,
            s.female_dialogs,
            if s.passes_bechdel { "pass" } else { "fail" }
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Export { pipeline, output } => cmd_export(pipeline, output),
        Commands::Summary { pipeline } => cmd_summary(pipeline),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
