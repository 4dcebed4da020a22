//! Device endpoints and device collections.

use apm_cnode::ConfigNode;
use apm_types::{ChannelMaskKind, DeviceType};
use serde::Serialize;
use std::sync::Arc;

use crate::error::BuildError;
use crate::gain::{GainConfig, load_gains};
use crate::keys::DeviceKey;
use crate::port::PortCapabilities;

/// Address given to ad-hoc remote submix devices.
pub const REMOTE_SUBMIX_DEFAULT_ADDRESS: &str = "0";

/// One audio device attachment point.
///
/// Declared endpoints come from a module's `devices` section and carry the
/// section entry name as their tag. Ad-hoc endpoints are synthesised from a
/// literal device type token and have no tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceEndpoint {
    device_type: DeviceType,
    tag: Option<String>,
    address: String,
    capabilities: PortCapabilities,
    default_gain: Option<GainConfig>,
}

impl DeviceEndpoint {
    /// Create an endpoint of `device_type` with an empty address.
    ///
    /// Fails unless the type is exactly one recognised input or output device.
    pub fn new(device_type: DeviceType) -> Result<Self, BuildError> {
        if !device_type.is_valid() {
            return Err(BuildError::InvalidDeviceType {
                tag: String::new(),
                value: device_type.to_string(),
            });
        }
        let kind = if device_type.is_input() {
            ChannelMaskKind::Input
        } else {
            ChannelMaskKind::Output
        };
        Ok(Self {
            device_type,
            tag: None,
            address: String::new(),
            capabilities: PortCapabilities::new(kind),
            default_gain: None,
        })
    }

    /// Create an ad-hoc endpoint from a literal device type.
    ///
    /// Remote submix devices get address `"0"`.
    pub fn ad_hoc(device_type: DeviceType) -> Result<Self, BuildError> {
        let mut device = Self::new(device_type)?;
        if device_type.is_remote_submix() {
            device.address = REMOTE_SUBMIX_DEFAULT_ADDRESS.to_string();
        }
        Ok(device)
    }

    /// Set the tag, builder style.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the address, builder style.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Device type.
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Tag of a declared device; `None` for ad-hoc devices.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Device address (empty unless configured).
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Supported channel masks and gains.
    pub fn capabilities(&self) -> &PortCapabilities {
        &self.capabilities
    }

    /// Initial gain setting, from the first gain controller.
    pub fn default_gain(&self) -> Option<&GainConfig> {
        self.default_gain.as_ref()
    }
}

/// An ordered collection of shared device endpoints.
///
/// Membership is by identity: adding the same `Arc` twice is a no-op, while
/// two distinct endpoints with equal contents are both kept.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DeviceSet {
    devices: Vec<Arc<DeviceEndpoint>>,
}

impl DeviceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device unless this exact endpoint is already present.
    ///
    /// Returns `true` if the device was added.
    pub fn add(&mut self, device: Arc<DeviceEndpoint>) -> bool {
        if self.contains(&device) {
            tracing::debug!(device = %device.device_type, "device already in set");
            return false;
        }
        self.devices.push(device);
        true
    }

    /// Add every device of `other` not already present.
    pub fn add_all(&mut self, other: &DeviceSet) {
        for device in other.iter() {
            self.add(Arc::clone(device));
        }
    }

    /// Whether this exact endpoint is a member.
    pub fn contains(&self, device: &Arc<DeviceEndpoint>) -> bool {
        self.devices.iter().any(|d| Arc::ptr_eq(d, device))
    }

    /// First device carrying `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Arc<DeviceEndpoint>> {
        self.devices.iter().find(|d| d.tag() == Some(tag))
    }

    /// First device of `device_type`.
    pub fn find_by_type(&self, device_type: DeviceType) -> Option<&Arc<DeviceEndpoint>> {
        self.devices.iter().find(|d| d.device_type == device_type)
    }

    /// Union of the type bits of every member.
    pub fn types(&self) -> u32 {
        self.devices
            .iter()
            .fold(0, |bits, d| bits | d.device_type.bits())
    }

    /// Number of devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterate devices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DeviceEndpoint>> {
        self.devices.iter()
    }

    /// Device at `index`.
    pub fn get(&self, index: usize) -> Option<&Arc<DeviceEndpoint>> {
        self.devices.get(index)
    }
}

impl<'a> IntoIterator for &'a DeviceSet {
    type Item = &'a Arc<DeviceEndpoint>;
    type IntoIter = std::slice::Iter<'a, Arc<DeviceEndpoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

/// Build one declared device from a device entry and append it to `devices`.
///
/// The first `type` child decides the device type; without a valid one the
/// entry is rejected and nothing is appended.
pub fn build_device(node: &ConfigNode, devices: &mut DeviceSet) -> Result<(), BuildError> {
    let type_value = node
        .children()
        .iter()
        .find(|child| DeviceKey::from_name(child.name()) == Some(DeviceKey::Type))
        .map(ConfigNode::value);

    let device_type = type_value
        .and_then(DeviceType::from_token)
        .unwrap_or(DeviceType::NONE);
    if !device_type.is_valid() {
        tracing::warn!(
            device = node.name(),
            value = type_value.unwrap_or(""),
            "bad device type"
        );
        return Err(BuildError::InvalidDeviceType {
            tag: node.name().to_string(),
            value: type_value.unwrap_or_default().to_string(),
        });
    }

    let mut device = DeviceEndpoint::new(device_type)?.with_tag(node.name());
    for child in node.children() {
        match DeviceKey::from_name(child.name()) {
            Some(DeviceKey::Address) => device.address = child.value().to_string(),
            Some(DeviceKey::ChannelMasks) => device.capabilities.set_channel_masks(child.value()),
            Some(DeviceKey::Gains) => load_gains(child, &mut device.capabilities),
            Some(DeviceKey::Type) | None => {}
        }
    }
    device.default_gain = device
        .capabilities
        .gains
        .first()
        .map(|gain| gain.default_config());

    tracing::debug!(
        tag = node.name(),
        device = %device.device_type,
        address = %device.address,
        "adding device"
    );
    devices.add(Arc::new(device));
    Ok(())
}
