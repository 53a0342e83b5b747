/**
 * @file main.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-16
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use miette::Result;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use config::{Config, CostOverrides};
use error::Error;
use render::{Format, Options, Outcome};

mod config;
mod error;
mod render;

/// Prints the edit distance between two strings and a minimal list of edits
/// turning SOURCE into TARGET.
#[derive(Debug, Parser)]
#[command(name = "levenshtein")]
#[command(version, about, long_about = None)]
struct Cli {
    /// String to transform
    source: String,

    /// String to transform into
    target: String,

    /// Cost of inserting a character (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    insert_cost: Option<i64>,

    /// Cost of removing a character (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    remove_cost: Option<i64>,

    /// Cost of swapping one character for another (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    swap_cost: Option<i64>,

    /// TOML file with a [costs] table; flags take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the distance
    #[arg(long)]
    distance_only: bool,

    /// Also print the filled cost matrix
    #[arg(long)]
    matrix: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// More logging on stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No logging at all
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl Cli {
    fn costs(&self) -> Result<levenshtein::Costs, Error> {
        let flags = CostOverrides {
            insert: self.insert_cost,
            remove: self.remove_cost,
            swap: self.swap_cost,
        };

        let file = match &self.config {
            Some(path) => Config::load(path)?.costs,
            None => CostOverrides::default(),
        };

        flags.or(file).resolve()
    }

    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(Error::from)?;

    let costs = cli.costs()?;

    info!("comparing {:?} with {:?} using {costs:?}", cli.source, cli.target);

    let options = Options {
        distance_only: cli.distance_only,
        matrix: cli.matrix,
    };

    match cli.color {
        ColorWhen::Always => owo_colors::set_override(true),
        ColorWhen::Never => owo_colors::set_override(false),
        ColorWhen::Auto => {}
    }

    let outcome = Outcome::compute(&cli.source, &cli.target, costs, options);

    outcome.write(
        &mut io::stdout().lock(),
        cli.format,
        cli.color != ColorWhen::Never,
    )?;

    Ok(())
}
