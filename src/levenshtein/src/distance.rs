/**
 * @file distance.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::cmp;

use crate::costs::Costs;

/// Edit distance between `source` and `target`.
///
/// Gives the same value as `Matrix::build(..).distance()` but only keeps a
/// single row of the matrix alive, so it is the one to reach for when the
/// operations are not needed.
pub fn distance(source: &str, target: &str, costs: Costs) -> u64 {
    let insert = u64::from(costs.insert);
    let remove = u64::from(costs.remove);

    let mut distances = (0..=target.chars().count() as u64)
        .map(|j| j * insert)
        .collect::<Vec<_>>();

    for (i, ch1) in source.chars().enumerate() {
        let mut sub = distances[0];
        distances[0] = (i as u64 + 1) * remove;
        for (j, ch2) in target.chars().enumerate() {
            let dist = cmp::min(
                cmp::min(distances[j] + insert, distances[j + 1] + remove),
                sub + costs.substitution(ch1, ch2),
            );

            sub = distances[j + 1];
            distances[j + 1] = dist;
        }
    }

    distances.last().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings() {
        assert_eq!(distance("", "", Costs::default()), 0);
        assert_eq!(distance("abc", "", Costs::default()), 3);
        assert_eq!(distance("", "xyz", Costs::default()), 3);
    }

    #[test]
    fn unit_costs() {
        assert_eq!(distance("horse", "arose", Costs::default()), 3);
        assert_eq!(distance("kitten", "sitting", Costs::default()), 3);
        assert_eq!(distance("lenght", "length", Costs::default()), 2);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe", Costs::default()), 1);
        assert_eq!(distance("", "żółw", Costs::default()), 4);
    }

    #[test]
    fn weighted_costs() {
        let costs = Costs::default().with_insert_cost(2).with_remove_cost(3);

        assert_eq!(distance("", "ab", costs), 4);
        assert_eq!(distance("ab", "", costs), 6);
        assert_eq!(distance("horse", "arose", costs.with_swap_cost(100)), 10);
    }
}
