/**
 * @file error.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-16
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(levenshtein::config::read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load {}: {help}", path.display())]
    #[diagnostic(
        code(levenshtein::config::toml),
        help("costs are set under a [costs] table with insert, remove and swap keys")
    )]
    TomlLoading {
        path: PathBuf,
        #[source_code]
        named: NamedSource,
        #[label]
        location: Option<SourceSpan>,
        help: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Costs(#[from] levenshtein::Error),

    #[error("failed to encode output as json")]
    #[diagnostic(code(levenshtein::output::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to write output")]
    #[diagnostic(code(levenshtein::output::io))]
    Output(#[from] io::Error),

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
