//! Verbosity levels for intermediate-artifact display

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the pipeline's intermediate output to surface
///
/// `None` returns only the final text. `Some` also carries the researcher
/// critique. `All` additionally carries every generator candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    None,
    #[default]
    Some,
    All,
}

impl Verbosity {
    /// Whether intermediate artifacts should be attached to the response
    pub fn wants_artifacts(&self) -> bool {
        !matches!(self, Verbosity::None)
    }

    /// Whether individual generator candidates should be shown
    pub fn wants_candidates(&self) -> bool {
        matches!(self, Verbosity::All)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::None => write!(f, "none"),
            Verbosity::Some => write!(f, "some"),
            Verbosity::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Verbosity::None),
            "some" => Ok(Verbosity::Some),
            "all" => Ok(Verbosity::All),
            _ => Err(format!("Invalid Verbosity: {}", s)),
        }
    }
}
