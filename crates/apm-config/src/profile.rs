//! Input and output port profiles.

use apm_cnode::ConfigNode;
use apm_types::{InputFlags, OutputFlags};
use serde::Serialize;

use crate::device::DeviceSet;
use crate::error::{BuildError, ProfileRequirement};
use crate::gain::load_gains;
use crate::keys::ProfileKey;
use crate::module::HwModule;
use crate::port::{PortCapabilities, PortDirection};
use crate::tags::resolve_device_tags;

/// Stream flags of a profile, typed by direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IoFlags {
    /// Flags of an output profile.
    Output(OutputFlags),
    /// Flags of an input profile.
    Input(InputFlags),
}

impl IoFlags {
    /// Empty flags for `direction`.
    pub const fn none(direction: PortDirection) -> Self {
        match direction {
            PortDirection::Output => Self::Output(OutputFlags::NONE),
            PortDirection::Input => Self::Input(InputFlags::NONE),
        }
    }

    /// Decode a flags value with the parser for `direction`.
    ///
    /// Output flags go through [`OutputFlags::parse`], so offload always
    /// implies direct.
    pub fn parse(value: &str, direction: PortDirection) -> Self {
        match direction {
            PortDirection::Output => Self::Output(OutputFlags::parse(value)),
            PortDirection::Input => Self::Input(InputFlags::mask_from_tokens(value)),
        }
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Output(flags) => flags.bits(),
            Self::Input(flags) => flags.bits(),
        }
    }
}

/// The capabilities of one module port in one direction.
#[derive(Debug, Clone, Serialize)]
pub struct PortProfile {
    /// Profile name (its entry name in the configuration).
    pub name: String,
    /// Input or output.
    pub direction: PortDirection,
    /// Stream flags.
    pub flags: IoFlags,
    /// Rates, formats, channel masks and gains.
    pub capabilities: PortCapabilities,
    /// Devices this profile can route to. Shared with the module's declared
    /// devices for tag references.
    pub supported_devices: DeviceSet,
}

impl PortProfile {
    /// Empty profile.
    pub fn new(name: impl Into<String>, direction: PortDirection) -> Self {
        Self {
            name: name.into(),
            direction,
            flags: IoFlags::none(direction),
            capabilities: PortCapabilities::new(direction.mask_kind()),
            supported_devices: DeviceSet::new(),
        }
    }

    /// Requirements this profile does not meet yet, in a fixed order.
    pub fn missing_requirements(&self) -> Vec<ProfileRequirement> {
        let mut missing = Vec::new();
        if self.supported_devices.is_empty() {
            missing.push(ProfileRequirement::Devices);
        }
        if self.capabilities.channel_masks.is_empty() {
            missing.push(ProfileRequirement::ChannelMasks);
        }
        if self.capabilities.sampling_rates.is_empty() {
            missing.push(ProfileRequirement::SamplingRates);
        }
        if self.capabilities.formats.is_empty() {
            missing.push(ProfileRequirement::Formats);
        }
        missing
    }

    /// Whether the profile can be attached to its module.
    pub fn is_complete(&self) -> bool {
        self.missing_requirements().is_empty()
    }
}

/// Build an output profile from its entry and attach it to `module` if complete.
pub fn build_output_profile(node: &ConfigNode, module: &mut HwModule) -> Result<(), BuildError> {
    build_profile(node, module, PortDirection::Output)
}

/// Build an input profile from its entry and attach it to `module` if complete.
pub fn build_input_profile(node: &ConfigNode, module: &mut HwModule) -> Result<(), BuildError> {
    build_profile(node, module, PortDirection::Input)
}

fn build_profile(
    node: &ConfigNode,
    module: &mut HwModule,
    direction: PortDirection,
) -> Result<(), BuildError> {
    let mut profile = PortProfile::new(node.name(), direction);

    for child in node.children() {
        let value = child.value();
        match ProfileKey::from_name(child.name()) {
            Some(ProfileKey::SamplingRates) => profile.capabilities.set_sampling_rates(value),
            Some(ProfileKey::Formats) => profile.capabilities.set_formats(value),
            Some(ProfileKey::ChannelMasks) => profile.capabilities.set_channel_masks(value),
            Some(ProfileKey::Devices) => {
                profile.supported_devices = resolve_device_tags(value, &module.declared_devices);
            }
            Some(ProfileKey::Flags) => profile.flags = IoFlags::parse(value, direction),
            Some(ProfileKey::Gains) => load_gains(child, &mut profile.capabilities),
            None => {}
        }
    }

    let missing = profile.missing_requirements();
    if !missing.is_empty() {
        for requirement in &missing {
            tracing::warn!(
                module = %module.name,
                profile = %profile.name,
                ?direction,
                "invalid supported {requirement}"
            );
        }
        return Err(BuildError::IncompleteProfile {
            name: profile.name,
            missing,
        });
    }

    tracing::debug!(
        module = %module.name,
        profile = %profile.name,
        ?direction,
        devices = profile.supported_devices.types(),
        flags = profile.flags.bits(),
        "adding profile"
    );
    module.add_profile(profile);
    Ok(())
}
