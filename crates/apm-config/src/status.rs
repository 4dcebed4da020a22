//! Module build status and its merge rule.

use std::fmt;

use crate::error::BuildError;

/// Outcome of building one hardware module.
///
/// Starts at [`NotFound`](Self::NotFound) and folds in the outcome of every
/// device and profile entry with [`merge`](Self::merge). The first failure is
/// sticky; successes only replace `NotFound` or an earlier success.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BuildStatus {
    /// No device, output or input entry was seen.
    #[default]
    NotFound,
    /// Every entry seen so far was built and attached.
    Ok,
    /// At least one entry was rejected; holds the first rejection.
    Failed(BuildError),
}

impl BuildStatus {
    /// Fold one entry outcome into the status.
    pub fn merge(self, outcome: Result<(), BuildError>) -> Self {
        match self {
            Self::NotFound | Self::Ok => match outcome {
                Ok(()) => Self::Ok,
                Err(err) => Self::Failed(err),
            },
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Whether the module should be kept.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("no entries found"),
            Self::Ok => f.write_str("ok"),
            Self::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}
