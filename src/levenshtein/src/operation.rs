/**
 * @file operation.rs
 * @author Krisna Pranav
 * @brief Operation[insert, remove, keep, swap]
 * @version 0.1
 * @date 2023-05-14
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::fmt;

use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OpType {
    Insert,
    Remove,
    Keep,
    Swap,
}

impl OpType {
    /// Applies an operation of this type to `buffer`. The caller guarantees
    /// `index` is in bounds for the buffer as it stands before the edit.
    pub(crate) fn apply(self, buffer: &mut Vec<char>, char: char, index: usize) {
        match self {
            OpType::Insert => buffer.insert(index, char),
            OpType::Remove => {
                buffer.remove(index);
            }
            OpType::Keep => {}
            OpType::Swap => buffer[index] = char,
        }
    }
}

/// One step of turning the source string into the target string.
///
/// `index` is a position in the intermediate string, not in the source: a
/// removal is reported at the place the character sits once every earlier
/// operation has been applied. `result` is that intermediate string after this
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub kind: OpType,
    pub char: char,
    pub index: usize,
    pub result: String,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {} at index {}: {}",
            self.kind.as_ref(),
            self.char,
            self.index,
            self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn op_type_names() {
        assert_eq!(OpType::Insert.to_string(), "insert");
        assert_eq!(OpType::Swap.as_ref(), "swap");
        assert_eq!(OpType::from_str("remove"), Ok(OpType::Remove));
        assert!(OpType::from_str("replace").is_err());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn serialize_feature_enables_serde() {
        fn round_trips<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
        fn serializes<T: serde::Serialize>() {}

        round_trips::<OpType>();
        round_trips::<Operation>();
        round_trips::<crate::Costs>();
        serializes::<crate::Matrix>();
    }

    #[test]
    fn display_right_aligns_kind() {
        let op = Operation {
            kind: OpType::Keep,
            char: 'r',
            index: 1,
            result: "arse".to_string(),
        };

        assert_eq!(op.to_string(), "  keep r at index 1: arse");
    }

    #[test]
    fn apply_edits_buffer_in_place() {
        let mut buffer = "horse".chars().collect::<Vec<_>>();

        OpType::Swap.apply(&mut buffer, 'a', 0);
        OpType::Remove.apply(&mut buffer, 'o', 1);
        OpType::Keep.apply(&mut buffer, 'r', 1);
        OpType::Insert.apply(&mut buffer, 'o', 2);

        assert_eq!(buffer.iter().collect::<String>(), "arose");
    }
}
