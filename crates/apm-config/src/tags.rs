//! Device list resolution.
//!
//! A device list is a `|`-delimited string whose tokens are either literal
//! device type names or tags of devices declared earlier in the same module.
//! Resolution is best-effort: a token that is neither is dropped.

use apm_types::DeviceType;
use apm_types::convert::tokens;
use std::sync::Arc;

use crate::device::{DeviceEndpoint, DeviceSet};

/// Resolve a device list against `declared`.
///
/// Each non-empty token is first parsed as a literal device type, producing a
/// fresh ad-hoc endpoint. Only if that fails is it looked up as a tag, in
/// which case the declared endpoint itself is shared. Unknown tokens are
/// skipped.
pub fn resolve_device_tags(value: &str, declared: &DeviceSet) -> DeviceSet {
    let mut devices = DeviceSet::new();
    for token in tokens(value) {
        let literal = DeviceType::from_token(token).and_then(|t| DeviceEndpoint::ad_hoc(t).ok());
        if let Some(device) = literal {
            devices.add(Arc::new(device));
        } else if let Some(device) = declared.find_by_tag(token) {
            devices.add(Arc::clone(device));
        } else {
            tracing::debug!(token, "dropping unknown device token");
        }
    }
    devices
}
