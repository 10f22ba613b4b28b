// this file contains the CLI binary for subshift

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use subshift::{
    core::{
        data::{SubtitleSink, SubtitleSource},
        log::{initialize_logging, level_from_verbosity},
    },
    Direction, Document, Offset,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Increase logging verbosity, may be repeated
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all logging
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Move every subtitle earlier or later by a fixed amount
    Shift(ShiftArgs),
    /// Re-render a subtitles file in canonical SRT form
    Print {
        /// SRT file to read, `-` for stdin
        input: PathBuf,
    },
    /// Show how many subtitles a file holds and the time span they cover
    Info {
        /// SRT file to read, `-` for stdin
        input: PathBuf,
    },
}

#[derive(Args)]
struct ShiftArgs {
    /// SRT file to read, `-` for stdin
    input: PathBuf,

    /// Where to write the result, `-` for stdout; defaults to rewriting the input
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(long, default_value_t = 0)]
    hours: u64,

    #[clap(long, default_value_t = 0)]
    minutes: u64,

    #[clap(long, default_value_t = 0)]
    seconds: u64,

    #[clap(long, default_value_t = 0)]
    millis: u64,

    /// Move subtitles earlier instead of later
    #[clap(short, long)]
    subtract: bool,
}

impl ShiftArgs {
    fn offset(&self) -> Offset {
        let direction = if self.subtract {
            Direction::Subtract
        } else {
            Direction::Add
        };
        Offset::new(self.hours, self.minutes, self.seconds, self.millis, direction)
    }
}

fn read_document(input: &Path) -> Result<Document> {
    let source = SubtitleSource::from_arg(input);
    let text = source
        .read()
        .with_context(|| format!("could not read subtitles from {input:#?}"))?;
    let document = Document::parse(&text);
    if document.is_empty() {
        log::warn!("no subtitles found in {input:#?}");
    }
    Ok(document)
}

fn shift(args: &ShiftArgs) -> Result<()> {
    let mut document = read_document(&args.input)?;

    let offset = args.offset();
    log::info!(
        "shifting {0} subtitles by {1}ms",
        document.len(),
        offset.as_millis()
    );
    document.shift_by(offset);

    let sink = match &args.output {
        Some(output) => SubtitleSink::from_arg(output),
        None => SubtitleSource::from_arg(&args.input).in_place(),
    };
    sink.write(&document.render())
        .with_context(|| format!("could not write subtitles to {sink:#?}"))?;

    Ok(())
}

fn print(input: &Path) -> Result<()> {
    let document = read_document(input)?;
    SubtitleSink::Stdout
        .write(&document.render())
        .context("could not write subtitles to stdout")?;
    Ok(())
}

fn info(input: &Path) -> Result<()> {
    let document = read_document(input)?;
    println!("{0} subtitles", document.len());
    if let Some((start, end)) = document.span() {
        println!("{start} --> {end}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(level_from_verbosity(cli.verbose, cli.quiet))
        .context("could not initialize logging")?;

    match &cli.command {
        Commands::Shift(args) => shift(args),
        Commands::Print { input } => print(input),
        Commands::Info { input } => info(input),
    }
}
