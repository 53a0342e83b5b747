/**
 * @file matrix.rs
 * @author Krisna Pranav
 * @brief Matrix[Wagner-Fischer]
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::{fmt, iter};

use itertools::Itertools;
use log::debug;

use crate::{backtrace, costs::Costs, operation::Operation};

/// A filled Wagner-Fischer edit matrix.
///
/// Cell `(i, j)` holds the cheapest way to turn the first `i` characters of
/// the source into the first `j` characters of the target. The matrix is
/// never mutated once built, so the distance and the operations can both be
/// read from the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Matrix {
    cells: Vec<Vec<u64>>,
    source: Vec<char>,
    target: Vec<char>,
    costs: Costs,
}

impl Matrix {
    pub fn build(source: &str, target: &str, costs: Costs) -> Self {
        let source = source.chars().collect::<Vec<_>>();
        let target = target.chars().collect::<Vec<_>>();

        let cells = fill(&source, &target, &costs);

        let matrix = Self {
            cells,
            source,
            target,
            costs,
        };

        debug!(
            "built {}x{} edit matrix with {:?}, distance {}",
            matrix.rows(),
            matrix.cols(),
            matrix.costs,
            matrix.distance()
        );

        matrix
    }

    /// The minimum total cost of turning the source into the target.
    pub fn distance(&self) -> u64 {
        self.at(self.source.len(), self.target.len())
    }

    /// A minimal list of operations turning the source into the target, in
    /// the order they are applied.
    pub fn operations(&self) -> Vec<Operation> {
        backtrace::operations(self)
    }

    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn costs(&self) -> Costs {
        self.costs
    }

    /// Number of rows, `|source| + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, `|target| + 1`.
    pub fn cols(&self) -> usize {
        self.target.len() + 1
    }

    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        self.cells.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn row(&self, i: usize) -> Option<&[u64]> {
        self.cells.get(i).map(Vec::as_slice)
    }

    pub(crate) fn at(&self, i: usize, j: usize) -> u64 {
        self.cells[i][j]
    }
}

fn fill(source: &[char], target: &[char], costs: &Costs) -> Vec<Vec<u64>> {
    let insert = u64::from(costs.insert);
    let remove = u64::from(costs.remove);

    let mut cells = vec![vec![0; target.len() + 1]; source.len() + 1];

    // Removals down to an empty target
    for (i, row) in cells.iter_mut().enumerate() {
        row[0] = i as u64 * remove;
    }

    // Insertions up from an empty source
    for (j, cell) in cells[0].iter_mut().enumerate() {
        *cell = j as u64 * insert;
    }

    // Row by row, left to right: left, up and up-left are final by the time
    // a cell reads them.
    for i in 1..=source.len() {
        for j in 1..=target.len() {
            let swap = costs.substitution(source[i - 1], target[j - 1]);

            cells[i][j] = (cells[i][j - 1] + insert)
                .min(cells[i - 1][j] + remove)
                .min(cells[i - 1][j - 1] + swap);
        }
    }

    cells
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);

        let header = iter::once(' ')
            .chain(self.target.iter().copied())
            .map(|ch| format!("{ch:>width$}"))
            .join(" ");

        writeln!(f, "  {header}")?;

        let labels = iter::once(' ').chain(self.source.iter().copied());

        for (label, row) in labels.zip(&self.cells) {
            let row = row.iter().map(|cell| format!("{cell:>width$}")).join(" ");

            writeln!(f, "{label} {row}")?;
        }

        Ok(())
    }
}
