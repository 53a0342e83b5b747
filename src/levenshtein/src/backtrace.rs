/**
 * @file backtrace.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use log::{debug, trace};

use crate::{
    matrix::Matrix,
    operation::{OpType, Operation},
};

#[derive(Debug, Clone, Copy)]
struct Step {
    kind: OpType,
    char: char,
    index: usize,
}

/// Reads a minimal list of operations off a filled matrix, earliest first.
///
/// The walk collects steps from the bottom-right corner back to the origin,
/// then replays them forward over the source so every operation carries the
/// intermediate string it produces.
pub(crate) fn operations(matrix: &Matrix) -> Vec<Operation> {
    let mut buffer = matrix.source().to_vec();

    let operations = walk(matrix)
        .into_iter()
        .rev()
        .map(|step| {
            step.kind.apply(&mut buffer, step.char, step.index);

            Operation {
                kind: step.kind,
                char: step.char,
                index: step.index,
                result: buffer.iter().collect(),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "backtrace produced {} operations for distance {}",
        operations.len(),
        matrix.distance()
    );

    operations
}

/// Walks from `(|source|, |target|)` to `(0, 0)`. When several moves explain a
/// cell, insert wins over remove, remove over keep, and keep over swap.
fn walk(matrix: &Matrix) -> Vec<Step> {
    let source = matrix.source();
    let target = matrix.target();
    let costs = matrix.costs();

    let insert = u64::from(costs.insert);
    let remove = u64::from(costs.remove);

    let (mut i, mut j) = (source.len(), target.len());
    let mut steps = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let here = matrix.at(i, j);

        let step = if j > 0 && matrix.at(i, j - 1) + insert == here {
            j -= 1;
            Step {
                kind: OpType::Insert,
                char: target[j],
                index: j,
            }
        } else if i > 0 && matrix.at(i - 1, j) + remove == here {
            i -= 1;
            Step {
                kind: OpType::Remove,
                char: source[i],
                index: j,
            }
        } else if i > 0
            && j > 0
            && source[i - 1] == target[j - 1]
            && matrix.at(i - 1, j - 1) == here
        {
            i -= 1;
            j -= 1;
            Step {
                kind: OpType::Keep,
                char: target[j],
                index: j,
            }
        } else {
            // Row 0 always matches insert and column 0 always matches remove,
            // so only the swap diagonal is left here.
            debug_assert_eq!(matrix.at(i - 1, j - 1) + u64::from(costs.swap), here);
            i -= 1;
            j -= 1;
            Step {
                kind: OpType::Swap,
                char: target[j],
                index: j,
            }
        };

        trace!("{} {:?} -> ({i}, {j})", step.kind, step.char);

        steps.push(step);
    }

    steps
}
