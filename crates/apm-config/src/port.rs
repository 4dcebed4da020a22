//! Capabilities shared by device endpoints and port profiles.

use apm_types::{AudioFormat, ChannelMask, ChannelMaskKind};
use apm_types::convert::{parse_u32, tokens};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::gain::GainCurve;

/// Direction of a port profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PortDirection {
    /// Capture.
    Input,
    /// Playback.
    Output,
}

impl PortDirection {
    /// Channel-mask vocabulary used by ports of this direction.
    pub const fn mask_kind(self) -> ChannelMaskKind {
        match self {
            Self::Input => ChannelMaskKind::Input,
            Self::Output => ChannelMaskKind::Output,
        }
    }
}

/// Supported rates, formats, channel masks and gains of one port.
///
/// Sets are sorted and de-duplicated. Setting a list from a configuration
/// value replaces the previous contents; tokens that do not convert are
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortCapabilities {
    /// Which channel-mask converter applies.
    pub kind: ChannelMaskKind,
    /// Supported sampling rates in Hz.
    pub sampling_rates: BTreeSet<u32>,
    /// Supported sample formats.
    pub formats: BTreeSet<AudioFormat>,
    /// Supported channel masks.
    pub channel_masks: BTreeSet<ChannelMask>,
    /// Gain controllers, in configuration order.
    pub gains: Vec<GainCurve>,
}

impl PortCapabilities {
    /// Empty capabilities for a port of the given channel-mask kind.
    pub fn new(kind: ChannelMaskKind) -> Self {
        Self {
            kind,
            sampling_rates: BTreeSet::new(),
            formats: BTreeSet::new(),
            channel_masks: BTreeSet::new(),
            gains: Vec::new(),
        }
    }

    /// Replace the sampling rates from a `|`-delimited list.
    pub fn set_sampling_rates(&mut self, value: &str) {
        self.sampling_rates = tokens(value).filter_map(parse_u32).collect();
    }

    /// Replace the formats from a `|`-delimited list.
    pub fn set_formats(&mut self, value: &str) {
        self.formats = AudioFormat::set_from_tokens(value);
    }

    /// Replace the channel masks from a `|`-delimited list.
    pub fn set_channel_masks(&mut self, value: &str) {
        self.channel_masks = ChannelMask::set_from_tokens(value, self.kind);
    }
}
