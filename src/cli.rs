/// CLI argument parsing and one-shot commands.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

use crate::color::{self, Color};
use crate::gradient;
use crate::types::GRID_SIZE;

/// Upper bound for `--steps` and `--count`.
const MAX_COLORS: u64 = 4096;

#[derive(Parser, Debug)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based color palette designer"
)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a linear gradient between two #RRGGBB colors.
    Gradient {
        from: Color,
        to: Color,
        #[arg(
            short = 's',
            long = "steps",
            default_value_t = GRID_SIZE,
            value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_COLORS)
        )]
        steps: usize,
    },
    /// Print random #RRGGBB colors.
    Random {
        #[arg(
            short = 'c',
            long = "count",
            default_value_t = GRID_SIZE,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_COLORS)
        )]
        count: usize,
    },
}

/// Execute a one-shot command, writing one color per line to stdout.
pub fn run(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let colors = colors_for(command)?;
    write_colors(&mut out, &colors)?;
    Ok(())
}

fn colors_for(command: Command) -> Result<Vec<Color>> {
    match command {
        Command::Gradient { from, to, steps } => gradient::generate_gradient(from, to, steps)
            .with_context(|| format!("cannot build gradient from {from} to {to}")),
        Command::Random { count } => Ok(color::random_colors(count)),
    }
}

fn write_colors(out: &mut impl Write, colors: &[Color]) -> Result<()> {
    for color in colors {
        writeln!(out, "{color}")?;
    }
    out.flush()?;
    Ok(())
}
