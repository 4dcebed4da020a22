//! Channel masks.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::convert::{TokenTable, tokens};

/// Which channel-mask vocabulary applies to a port.
///
/// Input and output masks share bit positions but not meanings, so the
/// converter must be chosen by the direction of the owning port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelMaskKind {
    /// Capture side (`AUDIO_CHANNEL_IN_*`).
    Input,
    /// Playback side (`AUDIO_CHANNEL_OUT_*`).
    Output,
}

/// A channel mask in either the input or the output vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct ChannelMask(pub u32);

impl ChannelMask {
    /// Empty mask.
    pub const NONE: Self = Self(0);

    /// Output mono.
    pub const OUT_MONO: Self = Self(0x1);
    /// Output stereo.
    pub const OUT_STEREO: Self = Self(0x3);
    /// Output 2.1.
    pub const OUT_2POINT1: Self = Self(0xB);
    /// Output quad (back speakers).
    pub const OUT_QUAD: Self = Self(0x33);
    /// Output quad (side speakers).
    pub const OUT_QUAD_SIDE: Self = Self(0x603);
    /// Output surround (L, R, C, back center).
    pub const OUT_SURROUND: Self = Self(0x107);
    /// Output penta.
    pub const OUT_PENTA: Self = Self(0x37);
    /// Output 5.1 (back speakers).
    pub const OUT_5POINT1: Self = Self(0x3F);
    /// Output 5.1 (side speakers).
    pub const OUT_5POINT1_SIDE: Self = Self(0x60F);
    /// Output 6.1.
    pub const OUT_6POINT1: Self = Self(0x13F);
    /// Output 7.1.
    pub const OUT_7POINT1: Self = Self(0x63F);

    /// Input mono.
    pub const IN_MONO: Self = Self(0x10);
    /// Input stereo.
    pub const IN_STEREO: Self = Self(0xC);
    /// Input front and back.
    pub const IN_FRONT_BACK: Self = Self(0x30);
    /// Six-channel input.
    pub const IN_6: Self = Self(0xFC);
    /// Voice call uplink, mono.
    pub const IN_VOICE_UPLINK_MONO: Self = Self(0x4010);
    /// Voice call downlink, mono.
    pub const IN_VOICE_DNLINK_MONO: Self = Self(0x8010);
    /// Voice call both links, mono.
    pub const IN_VOICE_CALL_MONO: Self = Self(0xC010);

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of channels (set bits).
    #[inline]
    pub const fn channel_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Convert a single channel mask token in the vocabulary of `kind`.
    pub fn from_token(token: &str, kind: ChannelMaskKind) -> Option<Self> {
        table(kind).value_of(token).map(Self)
    }

    /// Convert every recognised token of a `|`-delimited list.
    pub fn set_from_tokens(value: &str, kind: ChannelMaskKind) -> BTreeSet<Self> {
        tokens(value)
            .filter_map(|token| Self::from_token(token, kind))
            .collect()
    }
}

impl fmt::Display for ChannelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

fn table(kind: ChannelMaskKind) -> &'static TokenTable {
    match kind {
        ChannelMaskKind::Input => &INPUT_CHANNEL_MASKS,
        ChannelMaskKind::Output => &OUTPUT_CHANNEL_MASKS,
    }
}

/// Output channel mask token table.
pub const OUTPUT_CHANNEL_MASKS: TokenTable = TokenTable::new(&[
    ("AUDIO_CHANNEL_OUT_MONO", ChannelMask::OUT_MONO.0),
    ("AUDIO_CHANNEL_OUT_STEREO", ChannelMask::OUT_STEREO.0),
    ("AUDIO_CHANNEL_OUT_2POINT1", ChannelMask::OUT_2POINT1.0),
    ("AUDIO_CHANNEL_OUT_QUAD", ChannelMask::OUT_QUAD.0),
    ("AUDIO_CHANNEL_OUT_QUAD_BACK", ChannelMask::OUT_QUAD.0),
    ("AUDIO_CHANNEL_OUT_QUAD_SIDE", ChannelMask::OUT_QUAD_SIDE.0),
    ("AUDIO_CHANNEL_OUT_SURROUND", ChannelMask::OUT_SURROUND.0),
    ("AUDIO_CHANNEL_OUT_PENTA", ChannelMask::OUT_PENTA.0),
    ("AUDIO_CHANNEL_OUT_5POINT1", ChannelMask::OUT_5POINT1.0),
    ("AUDIO_CHANNEL_OUT_5POINT1_BACK", ChannelMask::OUT_5POINT1.0),
    ("AUDIO_CHANNEL_OUT_5POINT1_SIDE", ChannelMask::OUT_5POINT1_SIDE.0),
    ("AUDIO_CHANNEL_OUT_6POINT1", ChannelMask::OUT_6POINT1.0),
    ("AUDIO_CHANNEL_OUT_7POINT1", ChannelMask::OUT_7POINT1.0),
]);

/// Input channel mask token table.
pub const INPUT_CHANNEL_MASKS: TokenTable = TokenTable::new(&[
    ("AUDIO_CHANNEL_IN_MONO", ChannelMask::IN_MONO.0),
    ("AUDIO_CHANNEL_IN_STEREO", ChannelMask::IN_STEREO.0),
    ("AUDIO_CHANNEL_IN_FRONT_BACK", ChannelMask::IN_FRONT_BACK.0),
    ("AUDIO_CHANNEL_IN_6", ChannelMask::IN_6.0),
    ("AUDIO_CHANNEL_IN_VOICE_UPLINK_MONO", ChannelMask::IN_VOICE_UPLINK_MONO.0),
    ("AUDIO_CHANNEL_IN_VOICE_DNLINK_MONO", ChannelMask::IN_VOICE_DNLINK_MONO.0),
    ("AUDIO_CHANNEL_IN_VOICE_CALL_MONO", ChannelMask::IN_VOICE_CALL_MONO.0),
]);
