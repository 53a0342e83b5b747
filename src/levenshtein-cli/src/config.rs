/**
 * @file config.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-16
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::{fs, path::Path};

use levenshtein::{Costs, DEFAULT_INSERT_COST, DEFAULT_REMOVE_COST, DEFAULT_SWAP_COST};
use log::debug;
use miette::NamedSource;
use serde::Deserialize;

use crate::error::Error;

/// Contents of a `--config` TOML file.
///
/// ```toml
/// [costs]
/// insert = 1
/// remove = 1
/// swap = 2
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub costs: CostOverrides,
}

/// Costs that may or may not have been given. Signed so that negative values
/// reach `Costs::new` and get reported instead of failing to parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostOverrides {
    pub insert: Option<i64>,
    pub remove: Option<i64>,
    pub swap: Option<i64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let src = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(path, src)?;

        debug!("loaded {} with {:?}", path.display(), config.costs);

        Ok(config)
    }

    pub fn parse(path: &Path, src: String) -> Result<Self, Error> {
        toml::from_str(&src).map_err(|e| Error::TomlLoading {
            path: path.to_path_buf(),
            location: e.span().map(|range| range.into()),
            help: e.message().to_string(),
            named: NamedSource::new(path.display().to_string(), src.clone()),
        })
    }
}

impl CostOverrides {
    /// Fills in whatever `self` leaves unset from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            insert: self.insert.or(fallback.insert),
            remove: self.remove.or(fallback.remove),
            swap: self.swap.or(fallback.swap),
        }
    }

    pub fn resolve(self) -> Result<Costs, Error> {
        let costs = Costs::new(
            self.insert.unwrap_or(i64::from(DEFAULT_INSERT_COST)),
            self.remove.unwrap_or(i64::from(DEFAULT_REMOVE_COST)),
            self.swap.unwrap_or(i64::from(DEFAULT_SWAP_COST)),
        )?;

        Ok(costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use levenshtein::CostKind;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn parse(src: &str) -> Result<Config, Error> {
        Config::parse(&PathBuf::from("levenshtein.toml"), src.to_string())
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.costs.resolve().unwrap(), Costs::default());
    }

    #[test]
    fn partial_costs() {
        let config = parse(indoc! {"
            [costs]
            swap = 100
        "})
        .unwrap();

        assert_eq!(
            config.costs.resolve().unwrap(),
            Costs::default().with_swap_cost(100)
        );
    }

    #[test]
    fn flags_override_file() {
        let file = CostOverrides {
            insert: Some(4),
            remove: Some(5),
            swap: None,
        };
        let flags = CostOverrides {
            insert: Some(2),
            ..Default::default()
        };

        assert_eq!(
            flags.or(file).resolve().unwrap(),
            Costs {
                insert: 2,
                remove: 5,
                swap: 1,
            }
        );
    }

    #[test]
    fn negative_cost_is_reported() {
        let config = parse(indoc! {"
            [costs]
            insert = -3
        "})
        .unwrap();

        assert!(matches!(
            config.costs.resolve(),
            Err(Error::Costs(levenshtein::Error::InvalidCost {
                operation: CostKind::Insert,
                value: -3,
            }))
        ));
    }

    #[test]
    fn syntax_error_points_at_source() {
        let err = parse(indoc! {"
            [costs]
            insert =
        "})
        .unwrap_err();

        match err {
            Error::TomlLoading { location, path, .. } => {
                assert!(location.is_some());
                assert_eq!(path, PathBuf::from("levenshtein.toml"));
            }
            other => panic!("expected a toml error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse(indoc! {"
            [costs]
            replace = 1
        "})
        .unwrap_err();

        assert!(matches!(err, Error::TomlLoading { .. }));
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
