//! Gain controllers.
//!
//! A gain entry describes one controllable gain stage of a port in millibels,
//! with optional ramp limits. Individual fields are parsed permissively: a
//! value that does not convert leaves its field at zero. Only the mode is
//! load-bearing: a gain whose mode decodes to the empty set is never attached.

use apm_cnode::ConfigNode;
use apm_types::convert::parse_c_int;
use apm_types::{ChannelMask, ChannelMaskKind, GainMode};
use serde::Serialize;

use crate::keys::GainKey;
use crate::port::PortCapabilities;

/// One gain controller of a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GainCurve {
    /// Position of the entry in its `gains` section.
    pub index: usize,
    /// Channel-mask vocabulary of the owning port.
    pub kind: ChannelMaskKind,
    /// Controller modes.
    pub mode: GainMode,
    /// Channels this controller applies to.
    pub channel_mask: ChannelMask,
    /// Minimum gain in millibels.
    pub min_value_mb: i32,
    /// Maximum gain in millibels.
    pub max_value_mb: i32,
    /// Default gain in millibels.
    pub default_value_mb: i32,
    /// Gain step in millibels.
    pub step_value_mb: i32,
    /// Minimum ramp duration in milliseconds.
    pub min_ramp_ms: u32,
    /// Maximum ramp duration in milliseconds.
    pub max_ramp_ms: u32,
}

/// A gain setting applied to a port, derived from a [`GainCurve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GainConfig {
    /// Index of the gain controller this setting targets.
    pub index: usize,
    /// Controller modes.
    pub mode: GainMode,
    /// Channels the values apply to.
    pub channel_mask: ChannelMask,
    /// One value for joint mode, otherwise one per channel, in millibels.
    pub values: Vec<i32>,
    /// Ramp duration in milliseconds.
    pub ramp_duration_ms: u32,
}

impl GainCurve {
    /// Empty curve at `index` for a port of the given kind.
    pub fn new(index: usize, kind: ChannelMaskKind) -> Self {
        Self {
            index,
            kind,
            mode: GainMode::NONE,
            channel_mask: ChannelMask::NONE,
            min_value_mb: 0,
            max_value_mb: 0,
            default_value_mb: 0,
            step_value_mb: 0,
            min_ramp_ms: 0,
            max_ramp_ms: 0,
        }
    }

    /// The setting this controller starts at.
    pub fn default_config(&self) -> GainConfig {
        let values = if self.mode.contains(GainMode::JOINT) {
            vec![self.default_value_mb]
        } else {
            vec![self.default_value_mb; self.channel_mask.channel_count() as usize]
        };
        GainConfig {
            index: self.index,
            mode: self.mode,
            channel_mask: self.channel_mask,
            values,
            ramp_duration_ms: self.min_ramp_ms,
        }
    }
}

/// Build one gain curve from a gain entry.
///
/// The caller decides whether to keep it (see [`load_gains`]).
pub fn build_gain(node: &ConfigNode, kind: ChannelMaskKind, index: usize) -> GainCurve {
    let mut gain = GainCurve::new(index, kind);
    for child in node.children() {
        let value = child.value();
        match GainKey::from_name(child.name()) {
            Some(GainKey::Mode) => gain.mode = GainMode::mask_from_tokens(value),
            Some(GainKey::ChannelMask) => {
                if let Some(mask) = ChannelMask::from_token(value, kind) {
                    gain.channel_mask = mask;
                }
            }
            Some(GainKey::MinValue) => gain.min_value_mb = parse_c_int(value),
            Some(GainKey::MaxValue) => gain.max_value_mb = parse_c_int(value),
            Some(GainKey::DefaultValue) => gain.default_value_mb = parse_c_int(value),
            Some(GainKey::StepValue) => gain.step_value_mb = parse_c_int(value),
            Some(GainKey::MinRampMs) => gain.min_ramp_ms = parse_c_int(value) as u32,
            Some(GainKey::MaxRampMs) => gain.max_ramp_ms = parse_c_int(value) as u32,
            None => {}
        }
    }
    gain
}

/// Build every entry of a `gains` section and attach those with a mode.
///
/// Indices follow document order; a discarded entry still uses up its index.
pub fn load_gains(node: &ConfigNode, caps: &mut PortCapabilities) {
    for (index, child) in node.children().iter().enumerate() {
        let gain = build_gain(child, caps.kind, index);
        if gain.mode.is_empty() {
            tracing::debug!(gain = child.name(), index, "discarding gain without a mode");
            continue;
        }
        tracing::trace!(
            gain = child.name(),
            index,
            mode = gain.mode.bits(),
            channel_mask = %gain.channel_mask,
            min_mb = gain.min_value_mb,
            max_mb = gain.max_value_mb,
            "adding gain"
        );
        caps.gains.push(gain);
    }
}
