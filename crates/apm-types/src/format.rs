//! Sample formats.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::convert::{TokenTable, tokens};

/// Audio sample format: PCM encodings and compressed stream types.
///
/// Compressed formats keep their family in the top byte and a sub-format in
/// the low bits (e.g. AAC profiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct AudioFormat(pub u32);

impl AudioFormat {
    /// Format chosen by the HAL.
    pub const DEFAULT: Self = Self(0);
    /// Signed 16-bit PCM.
    pub const PCM_16_BIT: Self = Self(0x1);
    /// Unsigned 8-bit PCM.
    pub const PCM_8_BIT: Self = Self(0x2);
    /// Signed 32-bit PCM.
    pub const PCM_32_BIT: Self = Self(0x3);
    /// 8.24 fixed point PCM.
    pub const PCM_8_24_BIT: Self = Self(0x4);
    /// 32-bit float PCM.
    pub const PCM_FLOAT: Self = Self(0x5);
    /// Packed 24-bit PCM.
    pub const PCM_24_BIT_PACKED: Self = Self(0x6);
    /// MPEG-1/2 layer III.
    pub const MP3: Self = Self(0x0100_0000);
    /// AMR narrowband.
    pub const AMR_NB: Self = Self(0x0200_0000);
    /// AMR wideband.
    pub const AMR_WB: Self = Self(0x0300_0000);
    /// AAC, unspecified profile.
    pub const AAC: Self = Self(0x0400_0000);
    /// AAC low complexity.
    pub const AAC_LC: Self = Self(0x0400_0002);
    /// HE-AAC v1.
    pub const AAC_HE_V1: Self = Self(0x0400_0010);
    /// HE-AAC v2.
    pub const AAC_HE_V2: Self = Self(0x0400_0100);
    /// Legacy HE-AAC v1 family.
    pub const HE_AAC_V1: Self = Self(0x0500_0000);
    /// Legacy HE-AAC v2 family.
    pub const HE_AAC_V2: Self = Self(0x0600_0000);
    /// Vorbis.
    pub const VORBIS: Self = Self(0x0700_0000);
    /// Opus.
    pub const OPUS: Self = Self(0x0800_0000);
    /// Dolby AC-3.
    pub const AC3: Self = Self(0x0900_0000);
    /// Dolby E-AC-3.
    pub const E_AC3: Self = Self(0x0A00_0000);
    /// DTS.
    pub const DTS: Self = Self(0x0B00_0000);
    /// DTS-HD.
    pub const DTS_HD: Self = Self(0x0C00_0000);
    /// IEC 61937 encapsulated stream.
    pub const IEC61937: Self = Self(0x0D00_0000);
    /// Dolby TrueHD.
    pub const DOLBY_TRUEHD: Self = Self(0x0E00_0000);

    /// Mask of the format family byte.
    pub const MAIN_MASK: u32 = 0xFF00_0000;

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Linear PCM of any width.
    pub const fn is_linear_pcm(self) -> bool {
        self.0 & Self::MAIN_MASK == 0 && self.0 != 0
    }

    /// Convert a single format token (e.g. `AUDIO_FORMAT_PCM_16_BIT`).
    pub fn from_token(token: &str) -> Option<Self> {
        FORMATS.value_of(token).map(Self)
    }

    /// Convert every recognised token of a `|`-delimited list.
    pub fn set_from_tokens(value: &str) -> BTreeSet<Self> {
        tokens(value).filter_map(Self::from_token).collect()
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match FORMATS.name_of(self.0) {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#010x}", self.0),
        }
    }
}

/// Sample format token table.
pub const FORMATS: TokenTable = TokenTable::new(&[
    ("AUDIO_FORMAT_DEFAULT", AudioFormat::DEFAULT.0),
    ("AUDIO_FORMAT_PCM_16_BIT", AudioFormat::PCM_16_BIT.0),
    ("AUDIO_FORMAT_PCM_8_BIT", AudioFormat::PCM_8_BIT.0),
    ("AUDIO_FORMAT_PCM_32_BIT", AudioFormat::PCM_32_BIT.0),
    ("AUDIO_FORMAT_PCM_8_24_BIT", AudioFormat::PCM_8_24_BIT.0),
    ("AUDIO_FORMAT_PCM_FLOAT", AudioFormat::PCM_FLOAT.0),
    ("AUDIO_FORMAT_PCM_24_BIT_PACKED", AudioFormat::PCM_24_BIT_PACKED.0),
    ("AUDIO_FORMAT_MP3", AudioFormat::MP3.0),
    ("AUDIO_FORMAT_AMR_NB", AudioFormat::AMR_NB.0),
    ("AUDIO_FORMAT_AMR_WB", AudioFormat::AMR_WB.0),
    ("AUDIO_FORMAT_AAC", AudioFormat::AAC.0),
    ("AUDIO_FORMAT_AAC_LC", AudioFormat::AAC_LC.0),
    ("AUDIO_FORMAT_AAC_HE_V1", AudioFormat::AAC_HE_V1.0),
    ("AUDIO_FORMAT_AAC_HE_V2", AudioFormat::AAC_HE_V2.0),
    ("AUDIO_FORMAT_HE_AAC_V1", AudioFormat::HE_AAC_V1.0),
    ("AUDIO_FORMAT_HE_AAC_V2", AudioFormat::HE_AAC_V2.0),
    ("AUDIO_FORMAT_VORBIS", AudioFormat::VORBIS.0),
    ("AUDIO_FORMAT_OPUS", AudioFormat::OPUS.0),
    ("AUDIO_FORMAT_AC3", AudioFormat::AC3.0),
    ("AUDIO_FORMAT_E_AC3", AudioFormat::E_AC3.0),
    ("AUDIO_FORMAT_DTS", AudioFormat::DTS.0),
    ("AUDIO_FORMAT_DTS_HD", AudioFormat::DTS_HD.0),
    ("AUDIO_FORMAT_IEC61937", AudioFormat::IEC61937.0),
    ("AUDIO_FORMAT_DOLBY_TRUEHD", AudioFormat::DOLBY_TRUEHD.0),
]);
