/**
 * @file costs.rs
 * @author Krisna Pranav
 * @brief Costs[insert, remove, swap]
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use strum_macros::{Display, EnumIter};

use crate::error::Error;

pub const DEFAULT_INSERT_COST: u32 = 1;
pub const DEFAULT_REMOVE_COST: u32 = 1;
pub const DEFAULT_SWAP_COST: u32 = 1;

/// Which configurable cost a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CostKind {
    Insert,
    Remove,
    Swap,
}

/// Per-operation costs used when filling an edit matrix.
///
/// Keeping a character always costs nothing and cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Costs {
    pub insert: u32,
    pub remove: u32,
    pub swap: u32,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            insert: DEFAULT_INSERT_COST,
            remove: DEFAULT_REMOVE_COST,
            swap: DEFAULT_SWAP_COST,
        }
    }
}

impl Costs {
    /// Validates signed costs coming from an outer boundary (command line,
    /// config file). Negative values, and values too large for a `u32`, are
    /// rejected with [`Error::InvalidCost`].
    pub fn new(insert: i64, remove: i64, swap: i64) -> Result<Self, Error> {
        Ok(Self {
            insert: validate(CostKind::Insert, insert)?,
            remove: validate(CostKind::Remove, remove)?,
            swap: validate(CostKind::Swap, swap)?,
        })
    }

    pub fn with_insert_cost(mut self, cost: u32) -> Self {
        self.insert = cost;
        self
    }

    pub fn with_remove_cost(mut self, cost: u32) -> Self {
        self.remove = cost;
        self
    }

    pub fn with_swap_cost(mut self, cost: u32) -> Self {
        self.swap = cost;
        self
    }

    pub fn get(&self, kind: CostKind) -> u32 {
        match kind {
            CostKind::Insert => self.insert,
            CostKind::Remove => self.remove,
            CostKind::Swap => self.swap,
        }
    }

    /// The most expensive of the three configurable operations.
    pub fn max(&self) -> u32 {
        self.insert.max(self.remove).max(self.swap)
    }

    /// Cost of aligning `source` with `target` on the diagonal: free when the
    /// characters match, a swap otherwise.
    pub(crate) fn substitution(&self, source: char, target: char) -> u64 {
        if source == target {
            0
        } else {
            u64::from(self.swap)
        }
    }
}

fn validate(operation: CostKind, value: i64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::InvalidCost { operation, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_are_unit_costs() {
        let costs = Costs::default();

        for kind in CostKind::iter() {
            assert_eq!(costs.get(kind), 1);
        }
    }

    #[test]
    fn new_rejects_negative_costs() {
        assert_eq!(
            Costs::new(1, -2, 1),
            Err(Error::InvalidCost {
                operation: CostKind::Remove,
                value: -2,
            })
        );
    }

    #[test]
    fn new_rejects_costs_out_of_range() {
        let value = i64::from(u32::MAX) + 1;

        assert_eq!(
            Costs::new(1, 1, value),
            Err(Error::InvalidCost {
                operation: CostKind::Swap,
                value,
            })
        );
    }

    #[test]
    fn new_accepts_zero() {
        let costs = Costs::new(0, 0, 0).unwrap();

        assert_eq!(costs.max(), 0);
    }

    #[test]
    fn setters_override_single_cost() {
        let costs = Costs::default().with_swap_cost(100).with_insert_cost(2);

        assert_eq!(costs, Costs { insert: 2, remove: 1, swap: 100 });
        assert_eq!(costs.max(), 100);
    }
}
