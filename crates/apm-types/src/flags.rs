//! Stream flags and gain modes.
//!
//! All three are plain bitflag newtypes in the style of a `u32` mask with
//! `contains`/`union`, decoded from `|`-delimited token strings.

use serde::Serialize;

use crate::convert::TokenTable;

macro_rules! mask_ops {
    ($ty:ident, $table:ident) => {
        impl $ty {
            /// No bits set.
            pub const NONE: Self = Self(0);

            /// Raw bits.
            #[inline]
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Returns `true` if all bits in `other` are set in `self`.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns the union of two flag sets.
            #[inline]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Whether no bit is set.
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// OR of every recognised token in a `|`-delimited string.
            pub fn mask_from_tokens(value: &str) -> Self {
                Self($table.mask_from_tokens(value))
            }
        }
    };
}

/// Output stream flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OutputFlags(pub u32);

impl OutputFlags {
    /// Direct output, no software mixing.
    pub const DIRECT: Self = Self(0x1);
    /// Primary output.
    pub const PRIMARY: Self = Self(0x2);
    /// Low latency output.
    pub const FAST: Self = Self(0x4);
    /// Deep buffer output for power efficient playback.
    pub const DEEP_BUFFER: Self = Self(0x8);
    /// Compressed stream decoded by the DSP.
    pub const COMPRESS_OFFLOAD: Self = Self(0x10);
    /// Non-blocking writes.
    pub const NON_BLOCKING: Self = Self(0x20);
    /// Hardware A/V sync.
    pub const HW_AV_SYNC: Self = Self(0x40);
    /// Text-to-speech stream.
    pub const TTS: Self = Self(0x80);
    /// Minimal signal processing.
    pub const RAW: Self = Self(0x100);
    /// Synchronised with other streams.
    pub const SYNC: Self = Self(0x200);
    /// Non-audio IEC 958 payload.
    pub const IEC958_NONAUDIO: Self = Self(0x400);
    /// Direct PCM.
    pub const DIRECT_PCM: Self = Self(0x2000);

    /// Decode an output flag string, forcing [`DIRECT`](Self::DIRECT) whenever
    /// [`COMPRESS_OFFLOAD`](Self::COMPRESS_OFFLOAD) is present.
    ///
    /// Offload implies a direct output stream and every shared direct-output
    /// behaviour keys off the direct bit alone.
    pub fn parse(value: &str) -> Self {
        let flags = Self::mask_from_tokens(value);
        if flags.contains(Self::COMPRESS_OFFLOAD) {
            flags.union(Self::DIRECT)
        } else {
            flags
        }
    }
}

mask_ops!(OutputFlags, OUTPUT_FLAGS);

/// Input stream flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct InputFlags(pub u32);

impl InputFlags {
    /// Low latency capture.
    pub const FAST: Self = Self(0x1);
    /// Hotword capture.
    pub const HW_HOTWORD: Self = Self(0x2);
    /// Minimal signal processing.
    pub const RAW: Self = Self(0x4);
    /// Synchronised with other streams.
    pub const SYNC: Self = Self(0x8);
}

mask_ops!(InputFlags, INPUT_FLAGS);

/// Gain controller modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GainMode(pub u32);

impl GainMode {
    /// One value for all channels.
    pub const JOINT: Self = Self(0x1);
    /// One value per channel.
    pub const CHANNELS: Self = Self(0x2);
    /// Ramped gain changes.
    pub const RAMP: Self = Self(0x4);
}

mask_ops!(GainMode, GAIN_MODES);

/// Output flag token table.
pub const OUTPUT_FLAGS: TokenTable = TokenTable::new(&[
    ("AUDIO_OUTPUT_FLAG_NONE", 0),
    ("AUDIO_OUTPUT_FLAG_DIRECT", OutputFlags::DIRECT.0),
    ("AUDIO_OUTPUT_FLAG_PRIMARY", OutputFlags::PRIMARY.0),
    ("AUDIO_OUTPUT_FLAG_FAST", OutputFlags::FAST.0),
    ("AUDIO_OUTPUT_FLAG_DEEP_BUFFER", OutputFlags::DEEP_BUFFER.0),
    ("AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD", OutputFlags::COMPRESS_OFFLOAD.0),
    ("AUDIO_OUTPUT_FLAG_NON_BLOCKING", OutputFlags::NON_BLOCKING.0),
    ("AUDIO_OUTPUT_FLAG_HW_AV_SYNC", OutputFlags::HW_AV_SYNC.0),
    ("AUDIO_OUTPUT_FLAG_TTS", OutputFlags::TTS.0),
    ("AUDIO_OUTPUT_FLAG_RAW", OutputFlags::RAW.0),
    ("AUDIO_OUTPUT_FLAG_SYNC", OutputFlags::SYNC.0),
    ("AUDIO_OUTPUT_FLAG_IEC958_NONAUDIO", OutputFlags::IEC958_NONAUDIO.0),
    ("AUDIO_OUTPUT_FLAG_DIRECT_PCM", OutputFlags::DIRECT_PCM.0),
]);

/// Input flag token table.
pub const INPUT_FLAGS: TokenTable = TokenTable::new(&[
    ("AUDIO_INPUT_FLAG_NONE", 0),
    ("AUDIO_INPUT_FLAG_FAST", InputFlags::FAST.0),
    ("AUDIO_INPUT_FLAG_HW_HOTWORD", InputFlags::HW_HOTWORD.0),
    ("AUDIO_INPUT_FLAG_RAW", InputFlags::RAW.0),
    ("AUDIO_INPUT_FLAG_SYNC", InputFlags::SYNC.0),
]);

/// Gain mode token table.
pub const GAIN_MODES: TokenTable = TokenTable::new(&[
    ("AUDIO_GAIN_MODE_JOINT", GainMode::JOINT.0),
    ("AUDIO_GAIN_MODE_CHANNELS", GainMode::CHANNELS.0),
    ("AUDIO_GAIN_MODE_RAMP", GainMode::RAMP.0),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offload_forces_direct() {
        let flags = OutputFlags::parse("AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD");
        assert!(flags.contains(OutputFlags::COMPRESS_OFFLOAD));
        assert!(flags.contains(OutputFlags::DIRECT));
    }

    #[test]
    fn offload_with_other_flags_in_any_order() {
        let flags = OutputFlags::parse(
            "AUDIO_OUTPUT_FLAG_NON_BLOCKING|AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD",
        );
        assert_eq!(
            flags,
            OutputFlags::NON_BLOCKING
                .union(OutputFlags::COMPRESS_OFFLOAD)
                .union(OutputFlags::DIRECT)
        );
    }

    #[test]
    fn direct_not_forced_without_offload() {
        let flags = OutputFlags::parse("AUDIO_OUTPUT_FLAG_PRIMARY|AUDIO_OUTPUT_FLAG_FAST");
        assert!(!flags.contains(OutputFlags::DIRECT));
    }

    #[test]
    fn input_flags_mask() {
        let flags = InputFlags::mask_from_tokens("AUDIO_INPUT_FLAG_FAST|AUDIO_INPUT_FLAG_RAW");
        assert!(flags.contains(InputFlags::FAST));
        assert!(flags.contains(InputFlags::RAW));
        assert!(!flags.contains(InputFlags::SYNC));
    }

    #[test]
    fn gain_mode_unknown_tokens_are_empty() {
        assert!(GainMode::mask_from_tokens("AUDIO_GAIN_MODE_LOUD").is_empty());
        assert!(GainMode::mask_from_tokens("").is_empty());
        assert_eq!(
            GainMode::mask_from_tokens("AUDIO_GAIN_MODE_JOINT|AUDIO_GAIN_MODE_RAMP"),
            GainMode::JOINT.union(GainMode::RAMP)
        );
    }
}
