//! Levenshtein edit distance between two strings, plus a minimal list of edit
//! operations turning the source into the target.
//!
//! The distance comes from a Wagner-Fischer matrix. The operations are read
//! off that matrix by walking it back from the bottom-right corner. Insert,
//! remove and swap costs can be tuned through [`Costs`]; keeping a character
//! is always free.

/**
 * @file lib.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

mod backtrace;
pub mod costs;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod operation;


pub use costs::{CostKind, Costs, DEFAULT_INSERT_COST, DEFAULT_REMOVE_COST, DEFAULT_SWAP_COST};
pub use distance::distance;
pub use error::Error;
pub use matrix::Matrix;
pub use operation::{OpType, Operation};

/// Builds and fills the edit matrix for `source` and `target`.
///
/// Use this when both the distance and the operations are needed, so the
/// matrix is only computed once.
pub fn build(source: &str, target: &str, costs: Costs) -> Matrix {
    Matrix::build(source, target, costs)
}

/// Minimal list of edit operations transforming `source` into `target`.
/// Equivalent to `build(source, target, costs).operations()`.
pub fn operations(source: &str, target: &str, costs: Costs) -> Vec<Operation> {
    build(source, target, costs).operations()
}
