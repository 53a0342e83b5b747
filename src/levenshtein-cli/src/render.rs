/**
 * @file render.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-16
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::io::Write;

use clap::ValueEnum;
use levenshtein::{Costs, Matrix, OpType, Operation};
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// What to compute besides the distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub distance_only: bool,
    pub matrix: bool,
}

#[derive(Debug, Serialize)]
pub struct Outcome {
    pub distance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Matrix>,
}

impl Outcome {
    pub fn compute(source: &str, target: &str, costs: Costs, options: Options) -> Self {
        // No need for the full table when only the number is wanted.
        if options.distance_only && !options.matrix {
            return Self {
                distance: levenshtein::distance(source, target, costs),
                operations: None,
                matrix: None,
            };
        }

        let matrix = levenshtein::build(source, target, costs);

        Self {
            distance: matrix.distance(),
            operations: (!options.distance_only).then(|| matrix.operations()),
            matrix: options.matrix.then_some(matrix),
        }
    }

    pub fn write(&self, out: &mut impl Write, format: Format, color: bool) -> Result<(), Error> {
        match format {
            Format::Text => self.write_text(out, color)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }

    fn write_text(&self, out: &mut impl Write, color: bool) -> Result<(), Error> {
        writeln!(out, "{}", self.distance)?;

        if let Some(matrix) = &self.matrix {
            write!(out, "{matrix}")?;
        }

        for op in self.operations.iter().flatten() {
            if color {
                let kind = format!("{:>6}", op.kind.as_ref());

                writeln!(
                    out,
                    "{} {} at index {}: {}",
                    kind.if_supports_color(Stdout, |kind| kind.style(style(op.kind))),
                    op.char,
                    op.index,
                    op.result
                )?;
            } else {
                writeln!(out, "{op}")?;
            }
        }

        Ok(())
    }
}

fn style(kind: OpType) -> Style {
    match kind {
        OpType::Insert => Style::new().green(),
        OpType::Remove => Style::new().red(),
        OpType::Keep => Style::new().dimmed(),
        OpType::Swap => Style::new().yellow(),
    }
}
