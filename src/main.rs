// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use setlist::config::{SetlistEvent, SetlistWatcher};
use setlist::{generate_setlist, SetlistConfig, SetlistFile, SetlistResult, VenueType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
}

/// SETLIST - build a setlist that follows a venue's energy curve
#[derive(Parser, Debug)]
#[command(name = "setlist", version)]
struct CliArgs {
    /// Setlist file (YAML, or TOML with a .toml extension)
    #[arg(required_unless_present = "list_venues")]
    file: Option<PathBuf>,

    /// Venue type (club, festival, intimate, theater, arena); overrides the file
    #[arg(long)]
    venue: Option<String>,

    /// Comma-separated target curve, e.g. 60,70,80; overrides the venue curve
    #[arg(long, value_delimiter = ',')]
    curve: Option<Vec<u8>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Regenerate whenever the file changes
    #[arg(long)]
    watch: bool,

    /// List venue types and their curves
    #[arg(long)]
    list_venues: bool,

    /// Log matching decisions
    #[arg(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn overrides(&self) -> SetlistConfig {
        SetlistConfig {
            venue_type: self.venue.clone(),
            energy_curve: self.curve.clone(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_venues() {
    println!("Venue types:");
    for venue in VenueType::ALL {
        let curve: Vec<String> = venue.energy_curve().iter().map(|e| e.to_string()).collect();
        println!("  {:<10} {}", venue.name(), curve.join(", "));
    }
}

fn print_text(result: &SetlistResult) {
    println!(
        "Setlist for {} - {} songs, average energy {}/10, {}",
        result.venue_type, result.total_songs, result.average_energy, result.total_duration
    );
    if result.spotify_enhanced {
        println!("(enhanced with catalog audio analysis)");
    }
    println!();

    for entry in &result.entries {
        println!(
            "{:>2}. {}  [{}/10, target {}]  {}",
            entry.position,
            entry.song.song.title,
            entry.song.display_energy,
            entry.target_energy,
            entry.song.song.duration
        );
        println!("    {}", entry.reasoning);
    }

    if !result.is_empty() {
        let flow: Vec<String> = result.energy_flow.iter().map(|e| e.to_string()).collect();
        println!();
        println!("Energy flow: {}", flow.join(" -> "));
    }
}

fn print_result(result: &SetlistResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(result)?),
    }
    Ok(())
}

fn run(file: &SetlistFile, args: &CliArgs) -> Result<()> {
    let songs = file.songs()?;
    let config = file.config.clone().merge(args.overrides());
    let result = generate_setlist(&songs, &config);
    print_result(&result, args.format)
}

fn watch(path: &Path, args: &CliArgs) -> Result<()> {
    let watcher = SetlistWatcher::new(path, None)?;
    info!(path = ?watcher.watched_path(), "Watching setlist file");
    println!("Watching {:?} for changes (press Ctrl+C to stop)...", path);

    while let Some(event) = watcher.recv() {
        match event {
            SetlistEvent::Reloaded(file) => {
                println!();
                if let Err(e) = run(&file, args) {
                    eprintln!("Error: {:#}", e);
                }
            }
            SetlistEvent::Error(msg) => eprintln!("Error: {}", msg),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if args.list_venues {
        print_venues();
        return Ok(());
    }

    let Some(path) = args.file.clone() else {
        return Ok(());
    };

    let file = SetlistFile::load(&path)?;
    run(&file, &args)?;

    if args.watch {
        watch(&path, &args)?;
    }

    Ok(())
}
