//! Recognised key strings and per-section key dispatch.
//!
//! Key names are part of the file format contract and are case-sensitive.
//! Each section kind has a closed set of keys; `from_name` returns `None` for
//! anything else and callers ignore those children.

/// Top-level section listing hardware modules.
pub const AUDIO_HW_MODULE_TAG: &str = "audio_hw_modules";
/// Global configuration section (per module, and legacy file-root).
pub const GLOBAL_CONFIG_TAG: &str = "global_configuration";
/// Module section listing declared devices; also the profile device-list key.
pub const DEVICES_TAG: &str = "devices";
/// Module section listing output profiles.
pub const OUTPUTS_TAG: &str = "outputs";
/// Module section listing input profiles.
pub const INPUTS_TAG: &str = "inputs";

/// Name of the module the legacy global section applies to.
pub const PRIMARY_MODULE_NAME: &str = "primary";

pub(crate) const SAMPLING_RATES_TAG: &str = "sampling_rates";
pub(crate) const FORMATS_TAG: &str = "formats";
pub(crate) const CHANNELS_TAG: &str = "channel_masks";
pub(crate) const FLAGS_TAG: &str = "flags";
pub(crate) const GAINS_TAG: &str = "gains";

pub(crate) const DEVICE_TYPE_TAG: &str = "type";
pub(crate) const DEVICE_ADDRESS_TAG: &str = "address";

pub(crate) const GAIN_MODE_TAG: &str = "mode";
pub(crate) const GAIN_CHANNELS_TAG: &str = "channel_mask";
pub(crate) const GAIN_MIN_VALUE_TAG: &str = "min_value_mB";
pub(crate) const GAIN_MAX_VALUE_TAG: &str = "max_value_mB";
pub(crate) const GAIN_DEFAULT_VALUE_TAG: &str = "default_value_mB";
pub(crate) const GAIN_STEP_VALUE_TAG: &str = "step_value_mB";
pub(crate) const GAIN_MIN_RAMP_MS_TAG: &str = "min_ramp_ms";
pub(crate) const GAIN_MAX_RAMP_MS_TAG: &str = "max_ramp_ms";

pub(crate) const ATTACHED_OUTPUT_DEVICES_TAG: &str = "attached_output_devices";
pub(crate) const DEFAULT_OUTPUT_DEVICE_TAG: &str = "default_output_device";
pub(crate) const ATTACHED_INPUT_DEVICES_TAG: &str = "attached_input_devices";
pub(crate) const AUDIO_HAL_VERSION_TAG: &str = "audio_hal_version";
pub(crate) const SPEAKER_DRC_ENABLED_TAG: &str = "speaker_drc_enabled";

/// Keys of a gain entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GainKey {
    Mode,
    ChannelMask,
    MinValue,
    MaxValue,
    DefaultValue,
    StepValue,
    MinRampMs,
    MaxRampMs,
}

impl GainKey {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            GAIN_MODE_TAG => Some(Self::Mode),
            GAIN_CHANNELS_TAG => Some(Self::ChannelMask),
            GAIN_MIN_VALUE_TAG => Some(Self::MinValue),
            GAIN_MAX_VALUE_TAG => Some(Self::MaxValue),
            GAIN_DEFAULT_VALUE_TAG => Some(Self::DefaultValue),
            GAIN_STEP_VALUE_TAG => Some(Self::StepValue),
            GAIN_MIN_RAMP_MS_TAG => Some(Self::MinRampMs),
            GAIN_MAX_RAMP_MS_TAG => Some(Self::MaxRampMs),
            _ => None,
        }
    }
}

/// Keys of a declared device entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceKey {
    Type,
    Address,
    ChannelMasks,
    Gains,
}

impl DeviceKey {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            DEVICE_TYPE_TAG => Some(Self::Type),
            DEVICE_ADDRESS_TAG => Some(Self::Address),
            CHANNELS_TAG => Some(Self::ChannelMasks),
            GAINS_TAG => Some(Self::Gains),
            _ => None,
        }
    }
}

/// Keys of an input or output profile entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileKey {
    SamplingRates,
    Formats,
    ChannelMasks,
    Devices,
    Flags,
    Gains,
}

impl ProfileKey {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            SAMPLING_RATES_TAG => Some(Self::SamplingRates),
            FORMATS_TAG => Some(Self::Formats),
            CHANNELS_TAG => Some(Self::ChannelMasks),
            DEVICES_TAG => Some(Self::Devices),
            FLAGS_TAG => Some(Self::Flags),
            GAINS_TAG => Some(Self::Gains),
            _ => None,
        }
    }
}

/// Keys of a module's global configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModuleGlobalKey {
    AttachedOutputDevices,
    DefaultOutputDevice,
    AttachedInputDevices,
    HalVersion,
}

impl ModuleGlobalKey {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            ATTACHED_OUTPUT_DEVICES_TAG => Some(Self::AttachedOutputDevices),
            DEFAULT_OUTPUT_DEVICE_TAG => Some(Self::DefaultOutputDevice),
            ATTACHED_INPUT_DEVICES_TAG => Some(Self::AttachedInputDevices),
            AUDIO_HAL_VERSION_TAG => Some(Self::HalVersion),
            _ => None,
        }
    }
}

/// Keys only the legacy file-root global section understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LegacyGlobalKey {
    SpeakerDrcEnabled,
}

impl LegacyGlobalKey {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            SPEAKER_DRC_ENABLED_TAG => Some(Self::SpeakerDrcEnabled),
            _ => None,
        }
    }
}
