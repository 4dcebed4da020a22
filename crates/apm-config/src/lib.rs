//! Audio policy configuration loading.
//!
//! This crate turns an audio policy configuration file into a typed model of
//! the platform's audio hardware: which modules exist, which input and output
//! ports each one exposes, which devices those ports can reach and which
//! devices are attached at boot.
//!
//! # Loading
//!
//! Loading is best-effort. Only failing to read the file is an error; inside
//! the file, an entry that cannot be built is logged and dropped, and a module
//! containing such an entry is left out of the result. Unknown keys and tokens
//! are ignored.
//!
//! - [`load_config`] - Read and load a file
//! - [`load_config_str`] - Load text already in memory
//! - [`load_config_or_default`] - Load a file, or fall back to
//!   [`PolicyConfig::default_topology`]
//!
//! # Model
//!
//! - [`PolicyConfig`] - Modules plus the global attached and default devices
//! - [`HwModule`] - One hardware module and its profiles
//! - [`PortProfile`] - An input or output port's capabilities
//! - [`DeviceEndpoint`] / [`DeviceSet`] - Devices, shared by [`std::sync::Arc`]
//! - [`GainCurve`] - A gain controller
//!
//! # Example
//!
//! ```rust
//! use apm_config::{LoadOptions, load_config_str};
//!
//! let config = load_config_str(
//!     r"
//!     audio_hw_modules {
//!       primary {
//!         devices {
//!           Speaker { type AUDIO_DEVICE_OUT_SPEAKER }
//!         }
//!         outputs {
//!           primary {
//!             sampling_rates 44100|48000
//!             channel_masks AUDIO_CHANNEL_OUT_STEREO
//!             formats AUDIO_FORMAT_PCM_16_BIT
//!             devices Speaker
//!           }
//!         }
//!       }
//!     }",
//!     &LoadOptions::default(),
//! );
//!
//! let primary = config.module("primary").unwrap();
//! assert_eq!(primary.output_profiles.len(), 1);
//! ```

mod device;
mod error;
mod gain;
mod global;
mod loader;
mod module;
mod policy;
mod port;
mod profile;
mod status;
mod tags;

/// Configuration key strings.
pub mod keys;

pub use device::{DeviceEndpoint, DeviceSet, REMOTE_SUBMIX_DEFAULT_ADDRESS, build_device};
pub use error::{BuildError, ConfigError, ProfileRequirement};
pub use gain::{GainConfig, GainCurve, build_gain, load_gains};
pub use global::{load_global_config, load_module_global_config};
pub use loader::{LoadOptions, load_config, load_config_or_default, load_config_str, load_from_tree};
pub use module::{HalVersion, HwModule, build_module};
pub use policy::PolicyConfig;
pub use port::{PortCapabilities, PortDirection};
pub use profile::{IoFlags, PortProfile, build_input_profile, build_output_profile};
pub use status::BuildStatus;
pub use tags::resolve_device_tags;

/// Re-export of the vocabulary crate.
pub use apm_types;
/// Re-export of the configuration tree crate.
pub use apm_cnode;
