//! Hardware modules.

use apm_cnode::ConfigNode;
use serde::Serialize;
use std::fmt;

use crate::device::{DeviceSet, build_device};
use crate::global::load_module_global_config;
use crate::keys::{DEVICES_TAG, INPUTS_TAG, OUTPUTS_TAG};
use crate::policy::PolicyConfig;
use crate::port::PortDirection;
use crate::profile::{PortProfile, build_input_profile, build_output_profile};
use crate::status::BuildStatus;

/// Audio HAL API version of a module, written `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct HalVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl HalVersion {
    /// Create a version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `major.minor`, both unsigned decimals.
    pub fn parse(value: &str) -> Option<Self> {
        let (major, minor) = value.trim().split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Packed form: major in bits 8..16, minor in bits 0..8.
    pub const fn encoded(self) -> u32 {
        ((self.major & 0xff) << 8) | (self.minor & 0xff)
    }
}

impl fmt::Display for HalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// One audio hardware module and everything it exposes.
#[derive(Debug, Clone, Serialize)]
pub struct HwModule {
    /// Module name (e.g. `primary`, `a2dp`, `usb`).
    pub name: String,
    /// Devices declared in the module's `devices` section. Sole owner of the
    /// endpoints that profiles reference by tag.
    pub declared_devices: DeviceSet,
    /// Attached output profiles, in configuration order.
    pub output_profiles: Vec<PortProfile>,
    /// Attached input profiles, in configuration order.
    pub input_profiles: Vec<PortProfile>,
    /// HAL version from the module's global configuration.
    pub hal_version: Option<HalVersion>,
}

impl HwModule {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_devices: DeviceSet::new(),
            output_profiles: Vec::new(),
            input_profiles: Vec::new(),
            hal_version: None,
        }
    }

    /// Attach a profile to the list matching its direction.
    pub fn add_profile(&mut self, profile: PortProfile) {
        match profile.direction {
            PortDirection::Output => self.output_profiles.push(profile),
            PortDirection::Input => self.input_profiles.push(profile),
        }
    }

    /// Output profile named `name`.
    pub fn output_profile(&self, name: &str) -> Option<&PortProfile> {
        self.output_profiles.iter().find(|p| p.name == name)
    }

    /// Input profile named `name`.
    pub fn input_profile(&self, name: &str) -> Option<&PortProfile> {
        self.input_profiles.iter().find(|p| p.name == name)
    }
}

/// Build a module from its entry under `audio_hw_modules`.
///
/// Declared devices are all loaded before any profile so tag references can
/// resolve. Rejected entries are dropped without stopping their siblings; the
/// returned status records the first rejection. The module's global
/// configuration is applied last and may update `config`.
pub fn build_module(node: &ConfigNode, config: &mut PolicyConfig) -> (HwModule, BuildStatus) {
    let mut module = HwModule::new(node.name());
    let mut status = BuildStatus::NotFound;

    if let Some(devices) = node.find(DEVICES_TAG) {
        let mut declared = DeviceSet::new();
        for child in devices.children() {
            tracing::debug!(module = %module.name, device = child.name(), "loading device");
            status = status.merge(build_device(child, &mut declared));
        }
        module.declared_devices = declared;
    }

    if let Some(outputs) = node.find(OUTPUTS_TAG) {
        for child in outputs.children() {
            tracing::debug!(module = %module.name, output = child.name(), "loading output");
            status = status.merge(build_output_profile(child, &mut module));
        }
    }

    if let Some(inputs) = node.find(INPUTS_TAG) {
        for child in inputs.children() {
            tracing::debug!(module = %module.name, input = child.name(), "loading input");
            status = status.merge(build_input_profile(child, &mut module));
        }
    }

    load_module_global_config(node, &mut module, config);
    (module, status)
}
