//! Error types for configuration loading.
//!
//! Only [`ConfigError`] ever reaches the caller of a load. [`BuildError`]
//! describes why a single device or profile entry was rejected; it is folded
//! into the owning module's [`BuildStatus`](crate::BuildStatus) and never
//! crosses the module boundary.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole configuration load.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

/// A capability a port profile must declare before it can be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRequirement {
    /// At least one supported device.
    Devices,
    /// At least one channel mask.
    ChannelMasks,
    /// At least one sampling rate.
    SamplingRates,
    /// At least one format.
    Formats,
}

impl fmt::Display for ProfileRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Devices => "devices",
            Self::ChannelMasks => "channel masks",
            Self::SamplingRates => "sampling rates",
            Self::Formats => "formats",
        })
    }
}

/// Why a single device or profile entry was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// Device entry with a missing, unknown or non-device type.
    #[error("device '{tag}' has invalid type '{value}'")]
    InvalidDeviceType {
        /// Tag of the rejected device (empty for ad-hoc devices).
        tag: String,
        /// The offending type value as written.
        value: String,
    },

    /// Profile missing at least one required capability.
    #[error("profile '{name}' is incomplete: missing {}", .missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    IncompleteProfile {
        /// Name of the rejected profile.
        name: String,
        /// Every requirement that was not met.
        missing: Vec<ProfileRequirement>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/etc/audio_policy.conf", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/etc/audio_policy.conf"))
        );
    }

    #[test]
    fn read_file_display() {
        let err = ConfigError::read_file("/a/b.conf", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/b.conf"), "got: {msg}");
    }

    #[test]
    fn read_file_source_is_some() {
        let err = ConfigError::read_file("/x", mock_io_err());
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn invalid_device_type_display() {
        let err = BuildError::InvalidDeviceType {
            tag: "Speaker".to_string(),
            value: "AUDIO_DEVICE_NONE".to_string(),
        };
        assert_eq!(err.to_string(), "device 'Speaker' has invalid type 'AUDIO_DEVICE_NONE'");
        assert!(err.source().is_none());
    }

    #[test]
    fn incomplete_profile_lists_missing() {
        let err = BuildError::IncompleteProfile {
            name: "primary".to_string(),
            missing: vec![ProfileRequirement::Devices, ProfileRequirement::SamplingRates],
        };
        assert_eq!(
            err.to_string(),
            "profile 'primary' is incomplete: missing devices, sampling rates"
        );
    }
}
