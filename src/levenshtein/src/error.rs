/**
 * @file error.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use miette::Diagnostic;

use crate::costs::CostKind;

#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, thiserror::Error)]
pub enum Error {
    #[error("invalid {operation} cost: {value}")]
    #[diagnostic(
        code(levenshtein::invalid_cost),
        help("edit costs must be non-negative whole numbers that fit in 32 bits")
    )]
    InvalidCost { operation: CostKind, value: i64 },
}
