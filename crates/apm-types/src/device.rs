//! Audio device types.
//!
//! A device type is a single bit identifying one kind of endpoint. Input
//! devices additionally carry [`DeviceType::BIT_IN`], so the same low bit can
//! mean different devices in each direction.

use serde::Serialize;
use std::fmt;

use crate::convert::TokenTable;

/// Device type bitmask.
///
/// A valid endpoint type is exactly one recognised output device, or
/// [`BIT_IN`](Self::BIT_IN) plus exactly one recognised input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct DeviceType(pub u32);

impl DeviceType {
    /// The "no device" sentinel.
    pub const NONE: Self = Self(0);
    /// Marks input device types.
    pub const BIT_IN: u32 = 0x8000_0000;
    /// Marks the default device of a direction.
    pub const BIT_DEFAULT: u32 = 0x4000_0000;

    /// Earpiece receiver.
    pub const OUT_EARPIECE: Self = Self(0x1);
    /// Built-in loudspeaker.
    pub const OUT_SPEAKER: Self = Self(0x2);
    /// Wired headset (with microphone).
    pub const OUT_WIRED_HEADSET: Self = Self(0x4);
    /// Wired headphones.
    pub const OUT_WIRED_HEADPHONE: Self = Self(0x8);
    /// Bluetooth SCO.
    pub const OUT_BLUETOOTH_SCO: Self = Self(0x10);
    /// Bluetooth SCO headset.
    pub const OUT_BLUETOOTH_SCO_HEADSET: Self = Self(0x20);
    /// Bluetooth SCO car kit.
    pub const OUT_BLUETOOTH_SCO_CARKIT: Self = Self(0x40);
    /// Bluetooth A2DP.
    pub const OUT_BLUETOOTH_A2DP: Self = Self(0x80);
    /// Bluetooth A2DP headphones.
    pub const OUT_BLUETOOTH_A2DP_HEADPHONES: Self = Self(0x100);
    /// Bluetooth A2DP speaker.
    pub const OUT_BLUETOOTH_A2DP_SPEAKER: Self = Self(0x200);
    /// HDMI / digital aux.
    pub const OUT_AUX_DIGITAL: Self = Self(0x400);
    /// Analog dock headset.
    pub const OUT_ANLG_DOCK_HEADSET: Self = Self(0x800);
    /// Digital dock headset.
    pub const OUT_DGTL_DOCK_HEADSET: Self = Self(0x1000);
    /// USB accessory mode.
    pub const OUT_USB_ACCESSORY: Self = Self(0x2000);
    /// USB host mode.
    pub const OUT_USB_DEVICE: Self = Self(0x4000);
    /// Remote submix (virtual capture of playback).
    pub const OUT_REMOTE_SUBMIX: Self = Self(0x8000);
    /// Telephony uplink.
    pub const OUT_TELEPHONY_TX: Self = Self(0x10000);
    /// Analog line out.
    pub const OUT_LINE: Self = Self(0x20000);
    /// HDMI audio return channel.
    pub const OUT_HDMI_ARC: Self = Self(0x40000);
    /// S/PDIF out.
    pub const OUT_SPDIF: Self = Self(0x80000);
    /// FM transmitter.
    pub const OUT_FM: Self = Self(0x100000);
    /// Auxiliary line level out.
    pub const OUT_AUX_LINE: Self = Self(0x200000);
    /// Speaker path with limited protection.
    pub const OUT_SPEAKER_SAFE: Self = Self(0x400000);
    /// IP network sink.
    pub const OUT_IP: Self = Self(0x800000);
    /// Audio bus.
    pub const OUT_BUS: Self = Self(0x1000000);
    /// Default output.
    pub const OUT_DEFAULT: Self = Self(Self::BIT_DEFAULT);
    /// Every recognised output bit.
    pub const OUT_ALL: u32 = 0x01FF_FFFF | Self::BIT_DEFAULT;

    /// Voice communication source.
    pub const IN_COMMUNICATION: Self = Self(Self::BIT_IN | 0x1);
    /// Ambient source.
    pub const IN_AMBIENT: Self = Self(Self::BIT_IN | 0x2);
    /// Built-in microphone.
    pub const IN_BUILTIN_MIC: Self = Self(Self::BIT_IN | 0x4);
    /// Bluetooth SCO headset microphone.
    pub const IN_BLUETOOTH_SCO_HEADSET: Self = Self(Self::BIT_IN | 0x8);
    /// Wired headset microphone.
    pub const IN_WIRED_HEADSET: Self = Self(Self::BIT_IN | 0x10);
    /// HDMI / digital aux in.
    pub const IN_AUX_DIGITAL: Self = Self(Self::BIT_IN | 0x20);
    /// Telephony downlink.
    pub const IN_TELEPHONY_RX: Self = Self(Self::BIT_IN | 0x40);
    /// Back microphone.
    pub const IN_BACK_MIC: Self = Self(Self::BIT_IN | 0x80);
    /// Remote submix capture.
    pub const IN_REMOTE_SUBMIX: Self = Self(Self::BIT_IN | 0x100);
    /// Analog dock headset microphone.
    pub const IN_ANLG_DOCK_HEADSET: Self = Self(Self::BIT_IN | 0x200);
    /// Digital dock headset microphone.
    pub const IN_DGTL_DOCK_HEADSET: Self = Self(Self::BIT_IN | 0x400);
    /// USB accessory mode capture.
    pub const IN_USB_ACCESSORY: Self = Self(Self::BIT_IN | 0x800);
    /// USB host mode capture.
    pub const IN_USB_DEVICE: Self = Self(Self::BIT_IN | 0x1000);
    /// FM tuner.
    pub const IN_FM_TUNER: Self = Self(Self::BIT_IN | 0x2000);
    /// TV tuner.
    pub const IN_TV_TUNER: Self = Self(Self::BIT_IN | 0x4000);
    /// Analog line in.
    pub const IN_LINE: Self = Self(Self::BIT_IN | 0x8000);
    /// S/PDIF in.
    pub const IN_SPDIF: Self = Self(Self::BIT_IN | 0x10000);
    /// Bluetooth A2DP sink role.
    pub const IN_BLUETOOTH_A2DP: Self = Self(Self::BIT_IN | 0x20000);
    /// Loopback capture.
    pub const IN_LOOPBACK: Self = Self(Self::BIT_IN | 0x40000);
    /// IP network source.
    pub const IN_IP: Self = Self(Self::BIT_IN | 0x80000);
    /// Audio bus capture.
    pub const IN_BUS: Self = Self(Self::BIT_IN | 0x100000);
    /// Default input.
    pub const IN_DEFAULT: Self = Self(Self::BIT_IN | Self::BIT_DEFAULT);
    /// Every recognised input bit, including [`BIT_IN`](Self::BIT_IN).
    pub const IN_ALL: u32 = Self::BIT_IN | 0x001F_FFFF | Self::BIT_DEFAULT;

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether this is the "no device" sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Exactly one recognised output device.
    pub const fn is_output(self) -> bool {
        self.0 & Self::BIT_IN == 0 && self.0.count_ones() == 1 && self.0 & !Self::OUT_ALL == 0
    }

    /// Exactly one recognised input device.
    pub const fn is_input(self) -> bool {
        let device = self.0 & !Self::BIT_IN;
        self.0 & Self::BIT_IN != 0 && device.count_ones() == 1 && self.0 & !Self::IN_ALL == 0
    }

    /// Either a valid input or a valid output device.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.is_input() || self.is_output()
    }

    /// Remote submix in either direction.
    pub fn is_remote_submix(self) -> bool {
        self == Self::IN_REMOTE_SUBMIX || self == Self::OUT_REMOTE_SUBMIX
    }

    /// Convert a single device type token (e.g. `AUDIO_DEVICE_OUT_SPEAKER`).
    ///
    /// Succeeds for `AUDIO_DEVICE_NONE` too; callers check [`is_valid`](Self::is_valid).
    pub fn from_token(token: &str) -> Option<Self> {
        DEVICE_TYPES.value_of(token).map(Self)
    }

    /// Canonical token name, if this is a single known type.
    pub fn name(self) -> Option<&'static str> {
        DEVICE_TYPES.name_of(self.0)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#010x}", self.0),
        }
    }
}

/// Device type token table.
pub const DEVICE_TYPES: TokenTable = TokenTable::new(&[
    ("AUDIO_DEVICE_NONE", 0),
    ("AUDIO_DEVICE_OUT_EARPIECE", DeviceType::OUT_EARPIECE.0),
    ("AUDIO_DEVICE_OUT_SPEAKER", DeviceType::OUT_SPEAKER.0),
    ("AUDIO_DEVICE_OUT_WIRED_HEADSET", DeviceType::OUT_WIRED_HEADSET.0),
    ("AUDIO_DEVICE_OUT_WIRED_HEADPHONE", DeviceType::OUT_WIRED_HEADPHONE.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_SCO", DeviceType::OUT_BLUETOOTH_SCO.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_SCO_HEADSET", DeviceType::OUT_BLUETOOTH_SCO_HEADSET.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_SCO_CARKIT", DeviceType::OUT_BLUETOOTH_SCO_CARKIT.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP", DeviceType::OUT_BLUETOOTH_A2DP.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP_HEADPHONES", DeviceType::OUT_BLUETOOTH_A2DP_HEADPHONES.0),
    ("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP_SPEAKER", DeviceType::OUT_BLUETOOTH_A2DP_SPEAKER.0),
    ("AUDIO_DEVICE_OUT_AUX_DIGITAL", DeviceType::OUT_AUX_DIGITAL.0),
    ("AUDIO_DEVICE_OUT_HDMI", DeviceType::OUT_AUX_DIGITAL.0),
    ("AUDIO_DEVICE_OUT_ANLG_DOCK_HEADSET", DeviceType::OUT_ANLG_DOCK_HEADSET.0),
    ("AUDIO_DEVICE_OUT_DGTL_DOCK_HEADSET", DeviceType::OUT_DGTL_DOCK_HEADSET.0),
    ("AUDIO_DEVICE_OUT_USB_ACCESSORY", DeviceType::OUT_USB_ACCESSORY.0),
    ("AUDIO_DEVICE_OUT_USB_DEVICE", DeviceType::OUT_USB_DEVICE.0),
    ("AUDIO_DEVICE_OUT_REMOTE_SUBMIX", DeviceType::OUT_REMOTE_SUBMIX.0),
    ("AUDIO_DEVICE_OUT_TELEPHONY_TX", DeviceType::OUT_TELEPHONY_TX.0),
    ("AUDIO_DEVICE_OUT_LINE", DeviceType::OUT_LINE.0),
    ("AUDIO_DEVICE_OUT_HDMI_ARC", DeviceType::OUT_HDMI_ARC.0),
    ("AUDIO_DEVICE_OUT_SPDIF", DeviceType::OUT_SPDIF.0),
    ("AUDIO_DEVICE_OUT_FM", DeviceType::OUT_FM.0),
    ("AUDIO_DEVICE_OUT_AUX_LINE", DeviceType::OUT_AUX_LINE.0),
    ("AUDIO_DEVICE_OUT_SPEAKER_SAFE", DeviceType::OUT_SPEAKER_SAFE.0),
    ("AUDIO_DEVICE_OUT_IP", DeviceType::OUT_IP.0),
    ("AUDIO_DEVICE_OUT_BUS", DeviceType::OUT_BUS.0),
    ("AUDIO_DEVICE_OUT_DEFAULT", DeviceType::OUT_DEFAULT.0),
    ("AUDIO_DEVICE_IN_COMMUNICATION", DeviceType::IN_COMMUNICATION.0),
    ("AUDIO_DEVICE_IN_AMBIENT", DeviceType::IN_AMBIENT.0),
    ("AUDIO_DEVICE_IN_BUILTIN_MIC", DeviceType::IN_BUILTIN_MIC.0),
    ("AUDIO_DEVICE_IN_BLUETOOTH_SCO_HEADSET", DeviceType::IN_BLUETOOTH_SCO_HEADSET.0),
    ("AUDIO_DEVICE_IN_WIRED_HEADSET", DeviceType::IN_WIRED_HEADSET.0),
    ("AUDIO_DEVICE_IN_AUX_DIGITAL", DeviceType::IN_AUX_DIGITAL.0),
    ("AUDIO_DEVICE_IN_HDMI", DeviceType::IN_AUX_DIGITAL.0),
    ("AUDIO_DEVICE_IN_TELEPHONY_RX", DeviceType::IN_TELEPHONY_RX.0),
    ("AUDIO_DEVICE_IN_VOICE_CALL", DeviceType::IN_TELEPHONY_RX.0),
    ("AUDIO_DEVICE_IN_BACK_MIC", DeviceType::IN_BACK_MIC.0),
    ("AUDIO_DEVICE_IN_REMOTE_SUBMIX", DeviceType::IN_REMOTE_SUBMIX.0),
    ("AUDIO_DEVICE_IN_ANLG_DOCK_HEADSET", DeviceType::IN_ANLG_DOCK_HEADSET.0),
    ("AUDIO_DEVICE_IN_DGTL_DOCK_HEADSET", DeviceType::IN_DGTL_DOCK_HEADSET.0),
    ("AUDIO_DEVICE_IN_USB_ACCESSORY", DeviceType::IN_USB_ACCESSORY.0),
    ("AUDIO_DEVICE_IN_USB_DEVICE", DeviceType::IN_USB_DEVICE.0),
    ("AUDIO_DEVICE_IN_FM_TUNER", DeviceType::IN_FM_TUNER.0),
    ("AUDIO_DEVICE_IN_TV_TUNER", DeviceType::IN_TV_TUNER.0),
    ("AUDIO_DEVICE_IN_LINE", DeviceType::IN_LINE.0),
    ("AUDIO_DEVICE_IN_SPDIF", DeviceType::IN_SPDIF.0),
    ("AUDIO_DEVICE_IN_BLUETOOTH_A2DP", DeviceType::IN_BLUETOOTH_A2DP.0),
    ("AUDIO_DEVICE_IN_LOOPBACK", DeviceType::IN_LOOPBACK.0),
    ("AUDIO_DEVICE_IN_IP", DeviceType::IN_IP.0),
    ("AUDIO_DEVICE_IN_BUS", DeviceType::IN_BUS.0),
    ("AUDIO_DEVICE_IN_DEFAULT", DeviceType::IN_DEFAULT.0),
]);
