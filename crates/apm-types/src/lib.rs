//! Audio policy vocabulary types.
//!
//! This crate provides the strongly-typed values an audio hardware topology
//! is described with, and the converters that decode them from configuration
//! tokens.
//!
//! # Vocabulary
//!
//! - [`DeviceType`] - Single-bit input or output device identifiers
//! - [`ChannelMask`] - Channel layouts, interpreted per [`ChannelMaskKind`]
//! - [`AudioFormat`] - PCM encodings and compressed stream types
//! - [`OutputFlags`] / [`InputFlags`] - Stream capability flags
//! - [`GainMode`] - Gain controller modes
//!
//! # Token Conversion
//!
//! Every type decodes from `AUDIO_*` token names. Lists (`a|b|c`) decode into
//! sets with unknown tokens dropped; masks decode into the OR of the known
//! tokens. Conversion never panics and never errors: a token either maps to a
//! value or it does not.
//!
//! # Example
//!
//! ```rust
//! use apm_types::{DeviceType, OutputFlags};
//!
//! let speaker = DeviceType::from_token("AUDIO_DEVICE_OUT_SPEAKER").unwrap();
//! assert!(speaker.is_output());
//!
//! let flags = OutputFlags::parse("AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD");
//! assert!(flags.contains(OutputFlags::DIRECT));
//! ```

mod channel;
mod device;
mod flags;
mod format;

/// Token tables and scalar parsing helpers.
pub mod convert;

pub use channel::{ChannelMask, ChannelMaskKind, INPUT_CHANNEL_MASKS, OUTPUT_CHANNEL_MASKS};
pub use device::{DEVICE_TYPES, DeviceType};
pub use flags::{GAIN_MODES, GainMode, INPUT_FLAGS, InputFlags, OUTPUT_FLAGS, OutputFlags};
pub use format::{AudioFormat, FORMATS};
