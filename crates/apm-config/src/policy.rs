//! The loaded audio policy configuration.

use serde::Serialize;
use std::sync::Arc;

use crate::device::{DeviceEndpoint, DeviceSet};
use crate::loader::{LoadOptions, load_config_str};
use crate::module::HwModule;

/// Built-in topology used when no configuration file is available.
const DEFAULT_TOPOLOGY: &str = r#"
audio_hw_modules {
  primary {
    global_configuration {
      attached_output_devices Speaker
      default_output_device AUDIO_DEVICE_OUT_SPEAKER
      attached_input_devices "Built-In Mic"
    }
    devices {
      Speaker {
        type AUDIO_DEVICE_OUT_SPEAKER
      }
      "Built-In Mic" {
        type AUDIO_DEVICE_IN_BUILTIN_MIC
      }
    }
    outputs {
      primary {
        sampling_rates 44100
        channel_masks AUDIO_CHANNEL_OUT_STEREO
        formats AUDIO_FORMAT_PCM_16_BIT
        devices Speaker
        flags AUDIO_OUTPUT_FLAG_PRIMARY
      }
    }
    inputs {
      primary {
        sampling_rates 8000|16000
        channel_masks AUDIO_CHANNEL_IN_MONO
        formats AUDIO_FORMAT_PCM_16_BIT
        devices "Built-In Mic"
      }
    }
  }
}
"#;

/// Everything the policy manager needs from the configuration file.
///
/// Built once by the loader and read-only afterwards. Devices are shared by
/// [`Arc`], so a tag used in several places is the same endpoint everywhere.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyConfig {
    /// Successfully loaded modules, in file order.
    pub modules: Vec<HwModule>,
    /// Output devices attached at boot, across all modules.
    pub available_output_devices: DeviceSet,
    /// Input devices attached at boot, across all modules.
    pub available_input_devices: DeviceSet,
    /// Output device used when nothing else is selected.
    pub default_output_device: Option<Arc<DeviceEndpoint>>,
    /// Whether speaker dynamic range compression is on.
    pub speaker_drc_enabled: bool,
}

impl PolicyConfig {
    /// Module named `name`, the first one if the file declared it twice.
    pub fn module(&self, name: &str) -> Option<&HwModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// The built-in single-module topology: a speaker and a built-in
    /// microphone on the primary module.
    pub fn default_topology() -> Self {
        load_config_str(DEFAULT_TOPOLOGY, &LoadOptions::default())
    }
}
